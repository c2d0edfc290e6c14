/// Outcome of one liveness probe against the service root.
///
/// Exactly three states, mapped deterministically:
/// a 2xx answer is Healthy, any other HTTP answer is Degraded,
/// and a transport-level failure is Unreachable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HealthState {
    Healthy,
    Degraded,
    Unreachable,
}

impl HealthState {
    /// Map an HTTP status code to a health state.
    pub fn from_status(status: u16) -> Self {
        if (200..300).contains(&status) {
            HealthState::Healthy
        } else {
            HealthState::Degraded
        }
    }

    /// Short label shown next to the probe indicator.
    pub fn label(&self) -> &'static str {
        match self {
            HealthState::Healthy => "healthy",
            HealthState::Degraded => "degraded",
            HealthState::Unreachable => "unreachable",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_statuses_are_healthy() {
        assert_eq!(HealthState::from_status(200), HealthState::Healthy);
        assert_eq!(HealthState::from_status(204), HealthState::Healthy);
        assert_eq!(HealthState::from_status(299), HealthState::Healthy);
    }

    #[test]
    fn non_success_statuses_are_degraded() {
        assert_eq!(HealthState::from_status(301), HealthState::Degraded);
        assert_eq!(HealthState::from_status(404), HealthState::Degraded);
        assert_eq!(HealthState::from_status(500), HealthState::Degraded);
    }

    #[test]
    fn labels_cover_all_states() {
        assert_eq!(HealthState::Healthy.label(), "healthy");
        assert_eq!(HealthState::Degraded.label(), "degraded");
        assert_eq!(HealthState::Unreachable.label(), "unreachable");
    }
}

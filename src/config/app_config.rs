use serde::Deserialize;
use std::path::PathBuf;

use crate::core::errors::{PixlockError, Result};

/// Base URL used when no config file, flag, or env var says otherwise.
/// Matches the service's default development address.
pub const DEFAULT_SERVER_URL: &str = "http://127.0.0.1:5000";

/// Top-level Pixlock configuration read from
/// `~/.config/pixlock/config.toml` (or `--config <path>`).
///
/// Every field has a default, so a missing config file is not an error:
/// the client is fully usable with flags alone.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerSection,
    #[serde(default)]
    pub probe: ProbeSection,
}

impl AppConfig {
    /// Load the configuration, falling back to defaults when no file exists.
    ///
    /// A `--config` path that does not exist is an error; the implicit
    /// default path is allowed to be absent.
    pub fn load(custom: Option<&str>) -> Result<Self> {
        let path = match custom {
            Some(p) => PathBuf::from(p),
            None => match default_path() {
                Some(p) => p,
                None => return Ok(Self::default()),
            },
        };

        if !path.exists() {
            if custom.is_some() {
                return Err(PixlockError::InvalidConfig {
                    detail: format!("Config file not found: {}", path.display()),
                });
            }
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(&path)?;
        let config: Self = toml::from_str(&content).map_err(|e| PixlockError::InvalidConfig {
            detail: format!("Failed to parse {}: {e}", path.display()),
        })?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.server.timeout_secs == 0 {
            return Err(PixlockError::InvalidConfig {
                detail: "server.timeout_secs must be greater than zero".into(),
            });
        }
        if self.probe.interval_secs == 0 {
            return Err(PixlockError::InvalidConfig {
                detail: "probe.interval_secs must be greater than zero".into(),
            });
        }
        Ok(())
    }
}

/// The `[server]` section.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerSection {
    /// Base URL of the pixlock service.
    pub url: String,
    /// Upload timeout. Uploads can be large; probes use their own timeout.
    pub timeout_secs: u64,
}

impl Default for ServerSection {
    fn default() -> Self {
        Self {
            url: DEFAULT_SERVER_URL.to_string(),
            timeout_secs: 120,
        }
    }
}

/// The `[probe]` section.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ProbeSection {
    /// Seconds between probes in `pixlock status --watch`.
    pub interval_secs: u64,
}

impl Default for ProbeSection {
    fn default() -> Self {
        Self { interval_secs: 30 }
    }
}

/// Default config file location, platform dependent.
fn default_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("pixlock").join("config.toml"))
}

use std::time::Duration;

use colored::Colorize;

use crate::adapters::api::http_remote::HttpRemote;
use crate::cli::context::Context;
use crate::cli::output;
use crate::core::errors::{PixlockError, Result};
use crate::core::models::health::HealthState;
use crate::core::traits::remote::RemoteCipher;

/// Execute the `pixlock status` command.
///
/// Probes `GET /` once and reports one of three states. With `--watch`,
/// keeps probing on a fixed interval until interrupted; the watch loop
/// is independent of any upload and holds no other state.
pub fn execute(ctx: &Context, watch: bool, interval: Option<u64>) -> Result<()> {
    let remote = HttpRemote::new(&ctx.server_url, ctx.timeout)?;
    let interval = interval
        .map(Duration::from_secs)
        .unwrap_or(ctx.probe_interval);

    if !ctx.quiet {
        output::header("Pixlock — Service status");
        println!("  Server: {}", ctx.server_url.cyan());
        if watch {
            output::detail(&format!("Probing every {}s, Ctrl-C to stop", interval.as_secs()));
        }
        println!();
    }

    if watch {
        loop {
            print_probe(remote.probe());
            std::thread::sleep(interval);
        }
    }

    let state = remote.probe();
    print_probe(state);
    if state == HealthState::Unreachable {
        return Err(PixlockError::Network {
            reason: format!("the service at {} did not respond", ctx.server_url),
        });
    }
    Ok(())
}

/// One timestamped indicator line per probe.
fn print_probe(state: HealthState) {
    let dot = match state {
        HealthState::Healthy => "●".green(),
        HealthState::Degraded => "●".yellow(),
        HealthState::Unreachable => "●".red(),
    };
    let now = chrono::Local::now().format("%H:%M:%S");
    println!("  {} {} {}", now.to_string().dimmed(), dot, state.label());
}

use std::fs::File;
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::error::Result;

const CRATE_TARGET: &str = "fm128_radar";

/// Map `-v` repetitions to a level for this crate's target.
///
/// - 0 (none) -> warn
/// - 1 (-v)   -> info
/// - 2 (-vv)  -> debug
/// - 3+       -> trace
pub fn level_for(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Install the global tracing subscriber.
///
/// `RUST_LOG` overrides the CLI verbosity if set. With a log file the
/// output goes there without ANSI colours instead of stderr.
pub fn init(verbosity: u8, log_file: Option<&Path>) -> Result<()> {
    let default_filter = format!("{}={}", CRATE_TARGET, level_for(verbosity));
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    match log_file {
        Some(path) => {
            let file = File::create(path)?;
            builder
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .try_init()
                .ok();
        }
        None => {
            builder.with_writer(std::io::stderr).try_init().ok();
        }
    }

    Ok(())
}

//! Diagnostic logging.
//!
//! Logs go to stderr through `tracing-subscriber`. The level comes from the
//! `LIBTRACK_LOG` environment variable when set (any `EnvFilter` directive),
//! otherwise from the CLI verbosity.

use tracing::Level;
use tracing_subscriber::EnvFilter;

pub const LOG_ENV: &str = "LIBTRACK_LOG";

/// Level used when `LIBTRACK_LOG` is not set.
pub fn level_for(verbosity: u8) -> Level {
    match verbosity {
        0 => Level::WARN,
        1 => Level::INFO,
        _ => Level::DEBUG,
    }
}

/// Install the global subscriber. Safe to call more than once; later calls are ignored.
pub fn init_logging(verbosity: u8) {
    let env_filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "libtrack={}",
            level_for(verbosity).as_str().to_lowercase()
        ))
    });

    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_ansi(console::Term::stderr().is_term())
        .with_target(false)
        .without_time()
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbosity_raises_level() {
        assert_eq!(level_for(0), Level::WARN);
        assert_eq!(level_for(1), Level::INFO);
        assert_eq!(level_for(2), Level::DEBUG);
        assert_eq!(level_for(7), Level::DEBUG);
    }

    #[test]
    fn init_is_idempotent() {
        init_logging(0);
        init_logging(2);
    }
}

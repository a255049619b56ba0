use std::sync::Once;

use log::LevelFilter;

/// Logger setup for hosts and tests.
///
/// `env_filter` uses `env_logger` filter syntax ("immgl=debug",
/// "immgl::context=trace"). When unset, `RUST_LOG` is consulted and then
/// `default_level`.
///
/// Per-block draw logs are emitted at `debug`; per-call logs at `trace`.
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub env_filter: Option<String>,
    pub default_level: LevelFilter,
    pub write_style: env_logger::WriteStyle,
    /// Route output through the test harness capture.
    pub is_test: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            env_filter: None,
            default_level: LevelFilter::Warn,
            write_style: env_logger::WriteStyle::Auto,
            is_test: false,
        }
    }
}

static INIT: Once = Once::new();

/// Installs an `env_logger` once per process.
///
/// Later calls do nothing. A logger installed by someone else stays in place.
pub fn init_logging(config: LoggingConfig) {
    INIT.call_once(|| {
        let mut builder = env_logger::Builder::new();

        match config.env_filter.or_else(|| std::env::var("RUST_LOG").ok()) {
            Some(filter) => {
                builder.parse_filters(&filter);
            }
            None => {
                builder.filter_level(config.default_level);
            }
        }

        builder
            .write_style(config.write_style)
            .is_test(config.is_test)
            .format_timestamp(None);

        if builder.try_init().is_ok() {
            log::debug!("immgl logging initialized");
        }
    });
}

/// `init_logging` preset for unit tests: captured output, `trace` for this crate.
pub fn init_test_logging() {
    init_logging(LoggingConfig {
        env_filter: Some("immgl=trace".into()),
        is_test: true,
        ..LoggingConfig::default()
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_is_idempotent() {
        init_test_logging();
        init_logging(LoggingConfig::default());
        log::trace!("still alive");
    }

    #[test]
    fn default_is_quiet() {
        let config = LoggingConfig::default();
        assert_eq!(config.default_level, LevelFilter::Warn);
        assert!(config.env_filter.is_none());
    }
}

use std::sync::Once;

use log::LevelFilter;

/// Logger configuration.
///
/// `filter` follows the `env_logger` directive syntax
/// (e.g. "warn", "ashlar_engine::gpu=debug"). When it is `None`, `RUST_LOG`
/// applies, and `fallback_level` covers the case where neither is set.
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub filter: Option<String>,
    pub fallback_level: LevelFilter,
    pub write_style: env_logger::WriteStyle,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        // Info keeps shader validation warnings and skipped-renderable
        // messages visible without drowning the frame loop in debug spam.
        Self {
            filter: None,
            fallback_level: LevelFilter::Info,
            write_style: env_logger::WriteStyle::Auto,
        }
    }
}

impl LoggingConfig {
    /// Config with a fixed filter string, ignoring `RUST_LOG`.
    pub fn with_filter(filter: impl Into<String>) -> Self {
        Self {
            filter: Some(filter.into()),
            ..Self::default()
        }
    }
}

static INIT: Once = Once::new();

/// Installs the global logger. Idempotent; calls after the first are no-ops.
///
/// Call this before creating the GL context so loader and shader-build
/// failures have somewhere to go.
pub fn init_logging(config: LoggingConfig) {
    INIT.call_once(|| {
        let mut builder = env_logger::Builder::new();
        builder.filter_level(config.fallback_level);

        let directives = config
            .filter
            .or_else(|| std::env::var("RUST_LOG").ok());
        if let Some(directives) = directives {
            builder.parse_filters(&directives);
        }

        builder.write_style(config.write_style);
        builder.init();

        log::debug!("logging initialized");
    });
}

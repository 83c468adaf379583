use crate::presentation::config::{Environment, LoggingSettings};

pub const DEFAULT_LOG_FILTER: &str = "info,docent=debug,tower_http=debug";

/// How the global subscriber is set up. `RUST_LOG` still overrides the filter.
#[derive(Debug, Clone)]
pub struct TracingConfig {
    pub environment: Environment,
    pub json_format: bool,
    pub default_filter: String,
}

impl TracingConfig {
    /// JSON output when configured, when `LOG_FORMAT=json`, or in production.
    pub fn from_settings(environment: Environment, logging: &LoggingSettings) -> Self {
        let json_from_env = std::env::var("LOG_FORMAT")
            .map(|v| v.eq_ignore_ascii_case("json"))
            .unwrap_or(false);

        Self {
            environment,
            json_format: logging.json_format || json_from_env || environment == Environment::Prod,
            default_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl Default for TracingConfig {
    fn default() -> Self {
        Self::from_settings(Environment::default(), &LoggingSettings::default())
    }
}

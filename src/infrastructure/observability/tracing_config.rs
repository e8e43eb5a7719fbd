use crate::presentation::config::{LoggingSettings, Settings};

/// Configuration for tracing initialization.
#[derive(Debug, Clone)]
pub struct TracingConfig {
    pub environment: String,
    pub level: String,
    pub json_format: bool,
}

impl TracingConfig {
    pub fn from_settings(settings: &Settings) -> Self {
        let LoggingSettings { level, json_format } = &settings.logging;
        Self {
            environment: settings.server.env_name.to_string(),
            level: level.clone(),
            json_format: *json_format,
        }
    }

    /// Default directives when `RUST_LOG` is not set.
    pub fn filter_directives(&self) -> String {
        format!("{},docu_chat={},tower_http=debug", self.level, self.level)
    }
}

impl Default for TracingConfig {
    fn default() -> Self {
        Self {
            environment: "local".to_string(),
            level: "info".to_string(),
            json_format: false,
        }
    }
}

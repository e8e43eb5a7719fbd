#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("settings source failed: {0}")]
    Source(#[from] config::ConfigError),
    #[error("settings do not match the schema: {0}")]
    SchemaValidation(#[source] serde_json::Error),
    #[error("invalid setting `{field}`: {reason}")]
    Invalid { field: &'static str, reason: String },
}

impl SettingsError {
    pub fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        Self::Invalid {
            field,
            reason: reason.into(),
        }
    }
}

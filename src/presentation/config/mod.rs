mod environment;
mod settings;
mod settings_error;
mod settings_loader;

pub use environment::Environment;
pub use settings::{
    CorsSettings, EmbeddingMode, EmbeddingSettings, LlmMode, LlmSettings, LoggingSettings,
    OpenAiSettings, RagSettings, ServerSettings, Settings,
};
pub use settings_error::SettingsError;
pub use settings_loader::{
    DEFAULT_PROFILE, ENV_OVERRIDE_PREFIX, PROFILES_ENV_VAR, SETTINGS_FOLDER_ENV_VAR,
    TEST_PROFILE, active_profiles, coerce_overrides, load_active_settings,
    load_environment_overrides, load_environment_overrides_from, load_profile,
    load_unsafe_settings, merge_settings, parse_profiles, settings_folder,
};

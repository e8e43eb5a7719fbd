use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{Environment, SettingsError};

/// Validated application configuration.
///
/// Built once from merged sources and shared as `Arc<Settings>`; nothing
/// mutates a bound instance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    pub llm: LlmSettings,
    pub embedding: EmbeddingSettings,
    pub openai: OpenAiSettings,
    pub rag: RagSettings,
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerSettings {
    pub env_name: Environment,
    pub port: u16,
    pub cors: CorsSettings,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CorsSettings {
    pub enabled: bool,
    #[serde(default)]
    pub allow_origins: Vec<String>,
    #[serde(default)]
    pub allow_methods: Vec<String>,
    #[serde(default)]
    pub allow_headers: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LlmMode {
    Mock,
    #[serde(rename = "openai")]
    OpenAi,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LlmSettings {
    pub mode: LlmMode,
    pub max_new_tokens: usize,
    pub temperature: f32,
    pub system_prompt: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmbeddingMode {
    Mock,
    #[serde(rename = "openai")]
    OpenAi,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmbeddingSettings {
    pub mode: EmbeddingMode,
    pub dimension: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OpenAiSettings {
    pub api_base: String,
    pub api_key: String,
    pub model: String,
    pub embedding_model: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RagSettings {
    pub similarity_top_k: usize,
    pub similarity_threshold: f32,
    pub chunk_size: usize,
    pub chunk_overlap: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingSettings {
    pub level: String,
    pub json_format: bool,
}

impl Settings {
    /// Builds settings from an already merged mapping.
    ///
    /// The mapping must cover the whole schema; partial layers are combined
    /// with [`merge_settings`](super::merge_settings) first.
    pub fn from_merged(merged: Value) -> Result<Self, SettingsError> {
        let settings: Settings =
            serde_json::from_value(merged).map_err(SettingsError::SchemaValidation)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Serializes back into the mapping form used by the loader.
    pub fn to_value(&self) -> Result<Value, SettingsError> {
        serde_json::to_value(self).map_err(SettingsError::SchemaValidation)
    }

    fn validate(&self) -> Result<(), SettingsError> {
        if self.server.port == 0 {
            return Err(SettingsError::invalid("server.port", "port cannot be 0"));
        }
        if self.llm.system_prompt.trim().is_empty() {
            return Err(SettingsError::invalid(
                "llm.system_prompt",
                "system prompt cannot be empty",
            ));
        }
        if self.embedding.dimension == 0 {
            return Err(SettingsError::invalid(
                "embedding.dimension",
                "dimension must be positive",
            ));
        }
        if self.rag.chunk_size == 0 {
            return Err(SettingsError::invalid(
                "rag.chunk_size",
                "chunk size must be positive",
            ));
        }
        if self.rag.chunk_overlap >= self.rag.chunk_size {
            return Err(SettingsError::invalid(
                "rag.chunk_overlap",
                "overlap must be smaller than the chunk size",
            ));
        }
        if self.rag.similarity_top_k == 0 {
            return Err(SettingsError::invalid(
                "rag.similarity_top_k",
                "top_k must be positive",
            ));
        }
        if !(0.0..=1.0).contains(&self.rag.similarity_threshold) {
            return Err(SettingsError::invalid(
                "rag.similarity_threshold",
                "threshold must be within [0, 1]",
            ));
        }

        let needs_api_key = self.llm.mode == LlmMode::OpenAi
            || self.embedding.mode == EmbeddingMode::OpenAi;
        if needs_api_key && self.openai.api_key.trim().is_empty() {
            return Err(SettingsError::invalid(
                "openai.api_key",
                "api key is required when an openai mode is selected",
            ));
        }

        Ok(())
    }
}

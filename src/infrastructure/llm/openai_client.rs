use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::application::ports::{LlmClient, LlmClientError};
use crate::presentation::config::{LlmSettings, OpenAiSettings};

/// OpenAI-compatible chat completions client.
pub struct OpenAiClient {
    client: Client,
    api_base: String,
    api_key: String,
    model: String,
    max_tokens: usize,
    temperature: f32,
    system_prompt_template: String,
}

#[derive(Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage>,
    max_tokens: usize,
    temperature: f32,
}

#[derive(Serialize, Deserialize)]
struct ChatMessage {
    role: String,
    content: String,
}

#[derive(Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatMessage,
}

impl OpenAiClient {
    pub fn new(openai: &OpenAiSettings, llm: &LlmSettings) -> Self {
        Self {
            client: Client::new(),
            api_base: openai.api_base.trim_end_matches('/').to_string(),
            api_key: openai.api_key.clone(),
            model: openai.model.clone(),
            max_tokens: llm.max_new_tokens,
            temperature: llm.temperature,
            system_prompt_template: llm.system_prompt.clone(),
        }
    }

    fn build_messages(&self, prompt: &str, context: &str) -> Vec<ChatMessage> {
        let mut messages = Vec::with_capacity(2);
        if !context.is_empty() {
            messages.push(ChatMessage {
                role: "system".to_string(),
                content: self.system_prompt_template.replace("{context}", context),
            });
        }
        messages.push(ChatMessage {
            role: "user".to_string(),
            content: prompt.to_string(),
        });
        messages
    }
}

#[async_trait]
impl LlmClient for OpenAiClient {
    async fn complete(&self, prompt: &str, context: &str) -> Result<String, LlmClientError> {
        let request_body = ChatCompletionRequest {
            model: &self.model,
            messages: self.build_messages(prompt, context),
            max_tokens: self.max_tokens,
            temperature: self.temperature,
        };

        let response = self
            .client
            .post(format!("{}/chat/completions", self.api_base))
            .bearer_auth(&self.api_key)
            .json(&request_body)
            .send()
            .await
            .map_err(|e| LlmClientError::ApiRequestFailed(e.to_string()))?;

        if response.status() == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(LlmClientError::RateLimited);
        }

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(LlmClientError::ApiRequestFailed(format!(
                "HTTP {}: {}",
                status, body
            )));
        }

        let completion: ChatCompletionResponse = response
            .json()
            .await
            .map_err(|e| LlmClientError::InvalidResponse(e.to_string()))?;

        completion
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .ok_or_else(|| LlmClientError::InvalidResponse("empty choices".to_string()))
    }
}

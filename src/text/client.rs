use super::{shaping::*, types::ChatCompletionEnvelope};
use crate::{Result, config::TextApiConfig};
use async_openai::types::{
    ChatCompletionRequestMessage, ChatCompletionRequestUserMessageArgs,
    ChatCompletionRequestUserMessageContent, CreateChatCompletionRequest,
    CreateChatCompletionRequestArgs,
};
use async_trait::async_trait;
use std::time::Duration;
use tracing::{debug, info, warn};

const LOGGED_BODY_CHARS: usize = 1000;

#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Produces shaped `title + "\n" + body` text for `prompt`.
    async fn generate_text(&self, prompt: &str) -> Result<String>;
}

/// Text generator backed by an OpenAI-compatible chat completion endpoint
/// (Groq by default). Without an API key it answers locally.
pub struct GroqTextGenerator {
    client: reqwest::Client,
    config: TextApiConfig,
}

impl GroqTextGenerator {
    pub fn new(config: TextApiConfig, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self { client, config })
    }

    pub fn model(&self) -> &str {
        &self.config.model
    }

    fn build_request(&self, prompt: &str) -> Result<CreateChatCompletionRequest> {
        let message = ChatCompletionRequestUserMessageArgs::default()
            .content(ChatCompletionRequestUserMessageContent::Text(
                prompt.to_string(),
            ))
            .build()?;
        let messages: Vec<ChatCompletionRequestMessage> = vec![message.into()];

        let request = CreateChatCompletionRequestArgs::default()
            .model(&self.config.model)
            .messages(messages)
            .build()?;

        Ok(request)
    }

    async fn complete(&self, api_key: &str, prompt: &str) -> Result<String> {
        let request = self.build_request(prompt)?;

        debug!(
            "Sending chat completion request model={} url={}",
            self.config.model, self.config.url
        );

        let response = self
            .client
            .post(&self.config.url)
            .bearer_auth(api_key)
            .json(&request)
            .send()
            .await?;

        // Upstream-trust boundary: the status is logged but not enforced, so
        // an error body is shaped like any other text.
        let status = response.status();
        let raw = response.text().await?;

        let raw_len = raw.chars().count();
        if raw_len > LOGGED_BODY_CHARS {
            debug!(
                "Chat completion status={} body(trunc)={}... (len={})",
                status,
                truncate_chars(&raw, LOGGED_BODY_CHARS),
                raw_len
            );
        } else {
            debug!("Chat completion status={} body={}", status, raw);
        }
        if !status.is_success() {
            warn!("Chat completion returned non-success status {}", status);
        }

        Ok(ChatCompletionEnvelope::extract_content(&raw))
    }
}

#[async_trait]
impl TextGenerator for GroqTextGenerator {
    async fn generate_text(&self, prompt: &str) -> Result<String> {
        let Some(api_key) = self.config.api_key.as_deref() else {
            warn!("GROQ_API_KEY not configured, using local fallback text");
            return Ok(fallback_text(prompt));
        };

        let content = self.complete(api_key, prompt).await?;

        let content_len = content.chars().count();
        if content_len > MAX_TOTAL_CHARS {
            info!(
                "Generated text len={}; truncating to {} characters",
                content_len, MAX_TOTAL_CHARS
            );
        }

        Ok(shape_text(&content))
    }
}

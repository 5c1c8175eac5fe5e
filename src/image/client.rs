use crate::{Result, config::ImageApiConfig};
use async_trait::async_trait;
use serde::Serialize;
use std::time::Duration;
use tracing::{debug, info, warn};

/// 1x1 grayscale PNG returned when no image token is configured.
pub const PLACEHOLDER_PNG: &[u8] = &[
    0x89, 0x50, 0x4e, 0x47, 0x0d, 0x0a, 0x1a, 0x0a, 0x00, 0x00, 0x00, 0x0d, 0x49, 0x48, 0x44, 0x52,
    0x00, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00, 0x01, 0x08, 0x04, 0x00, 0x00, 0x00, 0xb5, 0x1c, 0x0c,
    0x02, 0x00, 0x00, 0x00, 0x0b, 0x49, 0x44, 0x41, 0x54, 0x78, 0x9c, 0x63, 0x60, 0x60, 0x00, 0x00,
    0x00, 0x03, 0x00, 0x01, 0x2b, 0x09, 0x4d, 0x84, 0x00, 0x00, 0x00, 0x00, 0x49, 0x45, 0x4e, 0x44,
    0xae, 0x42, 0x60, 0x82,
];

#[async_trait]
pub trait ImageGenerator: Send + Sync {
    /// Returns the image bytes produced for `prompt`.
    async fn generate_image(&self, prompt: &str) -> Result<Vec<u8>>;
}

#[derive(Debug, Serialize)]
struct InferenceRequest<'a> {
    inputs: &'a str,
}

/// Image generator backed by the Hugging Face inference router.
pub struct HuggingFaceImageGenerator {
    client: reqwest::Client,
    config: ImageApiConfig,
}

impl HuggingFaceImageGenerator {
    pub fn new(config: ImageApiConfig, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self { client, config })
    }

    pub fn model(&self) -> &str {
        &self.config.model
    }
}

#[async_trait]
impl ImageGenerator for HuggingFaceImageGenerator {
    async fn generate_image(&self, prompt: &str) -> Result<Vec<u8>> {
        let Some(token) = self.config.token.as_deref() else {
            warn!("HF_TOKEN not configured, using 1x1 placeholder image");
            return Ok(PLACEHOLDER_PNG.to_vec());
        };

        let url = self.config.endpoint();
        debug!("Sending image request model={} url={}", self.config.model, url);

        let response = self
            .client
            .post(&url)
            .bearer_auth(token)
            .json(&InferenceRequest { inputs: prompt })
            .send()
            .await?;

        // Bytes are passed through whatever the status; nothing checks that
        // they decode as an image.
        let status = response.status();
        let bytes = response.bytes().await?;

        info!("Image response status={} bytes={}", status, bytes.len());
        if !status.is_success() {
            warn!("Image endpoint returned non-success status {}", status);
        }

        Ok(bytes.to_vec())
    }
}

use async_trait::async_trait;
use generate_server::{Error, Result, image::ImageGenerator, text::TextGenerator};
use std::{
    io,
    sync::{Arc, Mutex},
};

/// Stands in for a failed upstream call
fn transport_error(message: &str) -> Error {
    Error::Io(io::Error::new(io::ErrorKind::ConnectionRefused, message.to_string()))
}

/// Mock text generator for testing
#[derive(Debug, Clone)]
pub struct MockTextGenerator {
    pub response: String,
    pub prompts: Arc<Mutex<Vec<String>>>,
    pub error: Option<String>,
}

impl MockTextGenerator {
    pub fn new(response: impl Into<String>) -> Self {
        Self {
            response: response.into(),
            prompts: Arc::new(Mutex::new(Vec::new())),
            error: None,
        }
    }

    pub fn with_error(mut self, error: impl Into<String>) -> Self {
        self.error = Some(error.into());
        self
    }

    pub fn get_prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

#[async_trait]
impl TextGenerator for MockTextGenerator {
    async fn generate_text(&self, prompt: &str) -> Result<String> {
        self.prompts.lock().unwrap().push(prompt.to_string());

        if let Some(ref error) = self.error {
            return Err(transport_error(error));
        }

        Ok(self.response.clone())
    }
}

/// Mock image generator for testing
#[derive(Debug, Clone)]
pub struct MockImageGenerator {
    pub bytes: Vec<u8>,
    pub prompts: Arc<Mutex<Vec<String>>>,
    pub error: Option<String>,
}

impl MockImageGenerator {
    pub fn new(bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            bytes: bytes.into(),
            prompts: Arc::new(Mutex::new(Vec::new())),
            error: None,
        }
    }

    pub fn with_error(mut self, error: impl Into<String>) -> Self {
        self.error = Some(error.into());
        self
    }

    pub fn get_prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

#[async_trait]
impl ImageGenerator for MockImageGenerator {
    async fn generate_image(&self, prompt: &str) -> Result<Vec<u8>> {
        self.prompts.lock().unwrap().push(prompt.to_string());

        if let Some(ref error) = self.error {
            return Err(transport_error(error));
        }

        Ok(self.bytes.clone())
    }
}

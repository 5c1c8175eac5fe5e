use crate::image::DEFAULT_COUNTRY;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use base64::{Engine as _, engine::general_purpose::STANDARD};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

/// Request body as received. Every field is optional and untyped so that
/// unexpected shapes never reject the request; unknown keys are ignored.
#[derive(Debug, Default, Deserialize)]
pub struct RawGenerateRequest {
    #[serde(default)]
    pub prompt: Option<Value>,
    #[serde(default)]
    pub include_map: Option<Value>,
    #[serde(default)]
    pub country: Option<Value>,
    /// Accepted only so its presence can be logged; never read.
    #[serde(default)]
    pub history: Option<Value>,
}

impl RawGenerateRequest {
    /// Decodes a request body. Anything other than a JSON object decodes as
    /// an empty request.
    pub fn from_body(body: &[u8]) -> Self {
        match serde_json::from_slice::<Value>(body) {
            Ok(value @ Value::Object(_)) => serde_json::from_value(value).unwrap_or_default(),
            _ => Self::default(),
        }
    }

    pub fn has_history(&self) -> bool {
        self.history.is_some()
    }
}

/// Validated generation parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationRequest {
    pub prompt: String,
    pub include_map: bool,
    pub country: String,
}

impl From<RawGenerateRequest> for GenerationRequest {
    fn from(raw: RawGenerateRequest) -> Self {
        let prompt = match raw.prompt {
            Some(Value::String(prompt)) => prompt,
            _ => String::new(),
        };

        let include_map = matches!(raw.include_map, Some(Value::Bool(true)));

        let country = match raw.country {
            Some(Value::String(country)) if !country.is_empty() => country,
            _ => DEFAULT_COUNTRY.to_string(),
        };

        Self {
            prompt,
            include_map,
            country,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerateResponse {
    pub text: String,
    /// Standard base64 with padding.
    pub image: String,
}

impl GenerateResponse {
    pub fn new(text: String, image: &[u8]) -> Self {
        Self {
            text,
            image: STANDARD.encode(image),
        }
    }
}

/// Failures reported by `/generate`, rendered as plain text.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Solo POST")]
    MethodNotAllowed,

    #[error("Error texto: {0}")]
    UpstreamText(crate::Error),

    #[error("Error imagen: {0}")]
    UpstreamImage(crate::Error),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            Self::UpstreamText(_) | Self::UpstreamImage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status(), self.to_string()).into_response()
    }
}

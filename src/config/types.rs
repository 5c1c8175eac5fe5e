use serde::{Deserialize, Serialize};

pub const GROQ_API_KEY: &str = "GROQ_API_KEY";
pub const HF_TOKEN: &str = "HF_TOKEN";

/// Resolved process configuration. Built once at startup and never mutated.
#[derive(Debug, Clone, Default)]
pub struct Config {
    pub server: ServerConfig,
    pub text: TextApiConfig,
    pub image: ImageApiConfig,
}

/// On-disk layout of the optional config file. The credential keys keep
/// their environment variable names so older files still load.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FileConfig {
    #[serde(rename = "GROQ_API_KEY", default)]
    pub groq_api_key: Option<String>,
    #[serde(rename = "HF_TOKEN", default)]
    pub hf_token: Option<String>,
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub text: TextApiConfig,
    #[serde(default)]
    pub image: ImageApiConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default = "default_static_dir")]
    pub static_dir: String,
    #[serde(default = "default_upstream_timeout_secs")]
    pub upstream_timeout_secs: u64,
    #[serde(default)]
    pub logs: LogsConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogsConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TextApiConfig {
    #[serde(default = "default_text_url")]
    pub url: String,
    #[serde(default = "default_text_model")]
    pub model: String,
    /// Filled from the config file or `GROQ_API_KEY`; `None` enables fallback mode.
    #[serde(skip)]
    pub api_key: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImageApiConfig {
    #[serde(default = "default_image_base_url")]
    pub base_url: String,
    #[serde(default = "default_image_model")]
    pub model: String,
    /// Filled from the config file or `HF_TOKEN`; `None` enables fallback mode.
    #[serde(skip)]
    pub token: Option<String>,
}

impl ImageApiConfig {
    pub fn endpoint(&self) -> String {
        format!("{}{}", self.base_url, self.model)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            static_dir: default_static_dir(),
            upstream_timeout_secs: default_upstream_timeout_secs(),
            logs: LogsConfig::default(),
        }
    }
}

impl Default for LogsConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

impl Default for TextApiConfig {
    fn default() -> Self {
        Self {
            url: default_text_url(),
            model: default_text_model(),
            api_key: None,
        }
    }
}

impl Default for ImageApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_image_base_url(),
            model: default_image_model(),
            token: None,
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_static_dir() -> String {
    ".".to_string()
}

fn default_upstream_timeout_secs() -> u64 {
    120
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_text_url() -> String {
    "https://api.groq.com/openai/v1/chat/completions".to_string()
}

fn default_text_model() -> String {
    "llama-3.1-8b-instant".to_string()
}

fn default_image_base_url() -> String {
    "https://router.huggingface.co/hf-inference/models/".to_string()
}

fn default_image_model() -> String {
    "black-forest-labs/FLUX.1-schnell".to_string()
}

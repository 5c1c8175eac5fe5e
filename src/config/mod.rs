mod types;

pub use types::*;

use crate::{Error, Result};
use std::{env, path::Path};
use tracing::{debug, info, warn};

pub const DEFAULT_CONFIG_PATH: &str = "generate_server_config.json";

/// Loads the configuration from `CONFIG_PATH` (or the default file) and the
/// process environment.
pub async fn load() -> Result<Config> {
    let config_path = env::var("CONFIG_PATH").unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());
    load_from(&config_path, |key| env::var(key).ok()).await
}

/// Loads `path` if it exists and resolves credentials against `lookup_env`.
/// A missing file is not an error.
pub async fn load_from<F>(path: impl AsRef<Path>, lookup_env: F) -> Result<Config>
where
    F: Fn(&str) -> Option<String>,
{
    let path = path.as_ref();

    let file = if tokio::fs::try_exists(path).await? {
        debug!("Loading configuration from: {}", path.display());
        let config_str = tokio::fs::read_to_string(path).await?;
        match parse_file(path, &config_str) {
            Ok(file) => {
                if is_set(file.groq_api_key.as_deref()) {
                    info!("Loaded {} from {}", GROQ_API_KEY, path.display());
                }
                if is_set(file.hf_token.as_deref()) {
                    info!("Loaded {} from {}", HF_TOKEN, path.display());
                }
                file
            }
            Err(e) => {
                warn!("Ignoring unreadable config file {}: {}", path.display(), e);
                FileConfig::default()
            }
        }
    } else {
        debug!("No configuration file at {}, using defaults", path.display());
        FileConfig::default()
    };

    let config = resolve(file, lookup_env);
    validate(&config)?;
    Ok(config)
}

/// `.json` files are read strictly, so a non-string credential rejects the
/// file. Anything else goes through the YAML parser.
fn parse_file(path: &Path, contents: &str) -> Result<FileConfig> {
    let is_json = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

    if is_json {
        Ok(serde_json::from_str(contents)?)
    } else {
        Ok(serde_yaml::from_str(contents)?)
    }
}

fn validate(config: &Config) -> Result<()> {
    if config.server.upstream_timeout_secs == 0 {
        return Err(Error::config("server.upstream_timeout_secs must be greater than zero"));
    }
    if config.server.static_dir.is_empty() {
        return Err(Error::config("server.static_dir must not be empty"));
    }
    Ok(())
}

/// Merges the file contents with the environment. Non-empty file credentials
/// take precedence over environment variables; empty values count as unset.
pub fn resolve<F>(file: FileConfig, lookup_env: F) -> Config
where
    F: Fn(&str) -> Option<String>,
{
    let FileConfig {
        groq_api_key,
        hf_token,
        server,
        mut text,
        mut image,
    } = file;

    text.api_key = non_empty(groq_api_key).or_else(|| non_empty(lookup_env(GROQ_API_KEY)));
    image.token = non_empty(hf_token).or_else(|| non_empty(lookup_env(HF_TOKEN)));

    Config {
        server,
        text,
        image,
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

fn is_set(value: Option<&str>) -> bool {
    value.is_some_and(|v| !v.is_empty())
}

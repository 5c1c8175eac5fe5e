use anyhow::{Context, Result};
use generate_server::{config, server};
use tracing::info;
use tracing_subscriber::{EnvFilter, filter::LevelFilter};

/// Builds the log filter. `RUST_LOG` may carry full directives such as
/// `generate_server=debug,tower_http=info`; the configured level must be a
/// plain level name.
fn build_filter(rust_log: Option<&str>, configured: &str) -> Result<EnvFilter> {
    match rust_log.map(str::trim).filter(|s| !s.is_empty()) {
        Some(directives) => EnvFilter::try_new(directives)
            .with_context(|| format!("Invalid RUST_LOG directives: '{}'", directives)),
        None => {
            let level = configured.parse::<LevelFilter>().map_err(|_| {
                anyhow::anyhow!(
                    "Invalid log level: '{}'. Valid levels: error, warn, info, debug, trace, off",
                    configured
                )
            })?;
            Ok(EnvFilter::default().add_directive(level.into()))
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let config = match config::load().await {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    let rust_log = std::env::var("RUST_LOG").ok();
    let filter = match build_filter(rust_log.as_deref(), &config.server.logs.level) {
        Ok(filter) => filter,
        Err(e) => {
            eprintln!("{:#}", e);
            std::process::exit(1);
        }
    };

    tracing_subscriber::fmt().with_env_filter(filter).json().init();

    info!(
        "Starting generate server with log filter: {}",
        rust_log.as_deref().unwrap_or(&config.server.logs.level)
    );

    server::run(config).await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::plain_level(None, "warn")]
    #[case::off(None, "off")]
    #[case::directives(Some("generate_server=debug,tower_http=info"), "info")]
    #[case::rust_log_wins(Some("debug"), "verbose")]
    #[case::blank_rust_log(Some("  "), "trace")]
    fn test_filter_accepted(#[case] rust_log: Option<&str>, #[case] configured: &str) {
        assert!(build_filter(rust_log, configured).is_ok());
    }

    #[rstest]
    #[case::bad_configured_level(None, "verbose")]
    #[case::bad_directive(Some("foo=notalevel"), "info")]
    fn test_filter_rejected(#[case] rust_log: Option<&str>, #[case] configured: &str) {
        assert!(build_filter(rust_log, configured).is_err());
    }
}

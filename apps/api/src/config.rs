use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};

use crate::export::queue::DEFAULT_EXPORT_TIMEOUT;
use crate::llm_client::DEFAULT_BASE_URL;

/// Key used when `OPENAI_API_KEY` is unset. Upstream calls then fail and every
/// generation falls back to its deterministic template.
pub const PLACEHOLDER_API_KEY: &str = "demo-key";

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub openai_api_key: String,
    pub openai_base_url: String,
    /// HTML→PDF converter binary. Exports are served as HTML when unset.
    pub pdf_converter: Option<PathBuf>,
    /// Deadline for one export, from `EXPORT_TIMEOUT_SECS`.
    pub export_timeout: Duration,
    pub port: u16,
    pub rust_log: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            openai_api_key: PLACEHOLDER_API_KEY.to_string(),
            openai_base_url: DEFAULT_BASE_URL.to_string(),
            pdf_converter: None,
            export_timeout: DEFAULT_EXPORT_TIMEOUT,
            port: 5000,
            rust_log: "info".to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let defaults = Config::default();
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        Ok(Config {
            openai_api_key: var("OPENAI_API_KEY").unwrap_or(defaults.openai_api_key),
            openai_base_url: var("OPENAI_BASE_URL").unwrap_or(defaults.openai_base_url),
            pdf_converter: var("PDF_CONVERTER").map(PathBuf::from),
            export_timeout: match var("EXPORT_TIMEOUT_SECS") {
                Some(secs) => Duration::from_secs(
                    secs.trim()
                        .parse::<u64>()
                        .context("EXPORT_TIMEOUT_SECS must be a whole number of seconds")?,
                ),
                None => defaults.export_timeout,
            },
            port: match var("PORT") {
                Some(port) => port
                    .trim()
                    .parse::<u16>()
                    .context("PORT must be a valid port number")?,
                None => defaults.port,
            },
            rust_log: var("RUST_LOG").unwrap_or(defaults.rust_log),
        })
    }

    pub fn uses_placeholder_key(&self) -> bool {
        self.openai_api_key == PLACEHOLDER_API_KEY
    }
}

use anyhow::{bail, Result};

pub const DEFAULT_BACKEND_URL: &str = "http://127.0.0.1:8000";

/// Client configuration loaded from environment variables.
/// Every variable has a default; an invalid backend URL fails startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub backend_url: String,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let backend_url = std::env::var("BACKEND_URL")
            .unwrap_or_else(|_| DEFAULT_BACKEND_URL.to_string());

        Ok(Config {
            backend_url: normalize_backend_url(&backend_url)?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

/// Trims whitespace and trailing slashes so paths can be appended verbatim.
fn normalize_backend_url(raw: &str) -> Result<String> {
    let url = raw.trim().trim_end_matches('/');
    if !(url.starts_with("http://") || url.starts_with("https://")) {
        bail!("BACKEND_URL must start with http:// or https:// (got '{raw}')");
    }
    Ok(url.to_string())
}

#![cfg(feature = "server")]
use anyhow::{Context, Result};
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "https://equran.id/api/v2/imsakiyah/";

#[derive(Debug, Clone, PartialEq)]
pub struct EquranConfig {
    /// Always ends with `/`.
    pub base_url: String,
    pub connect_timeout: Duration,
    pub timeout: Duration,
}

impl Default for EquranConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            connect_timeout: Duration::from_secs(2),
            timeout: Duration::from_secs(10),
        }
    }
}

impl EquranConfig {
    /// Read `EQURAN_*` variables (after loading `.env`).
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut cfg = Self::default();
        if let Some(url) = lookup("EQURAN_BASE_URL").filter(|s| !s.trim().is_empty()) {
            cfg.base_url = normalize_base_url(&url);
        }
        if let Some(secs) = lookup("EQURAN_CONNECT_TIMEOUT_SECS") {
            cfg.connect_timeout = parse_secs("EQURAN_CONNECT_TIMEOUT_SECS", &secs)?;
        }
        if let Some(secs) = lookup("EQURAN_TIMEOUT_SECS") {
            cfg.timeout = parse_secs("EQURAN_TIMEOUT_SECS", &secs)?;
        }
        Ok(cfg)
    }
}

fn normalize_base_url(url: &str) -> String {
    let url = url.trim();
    if url.ends_with('/') {
        url.to_string()
    } else {
        format!("{}/", url)
    }
}

fn parse_secs(key: &str, value: &str) -> Result<Duration> {
    let secs: u64 = value
        .trim()
        .parse()
        .with_context(|| format!("{key} must be a whole number of seconds, got {value:?}"))?;
    Ok(Duration::from_secs(secs))
}

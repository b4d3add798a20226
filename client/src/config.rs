//! Client configuration resolved at build time.
//!
//! Optional:
//! - `PRACTICE_API_BASE_URL`: backend origin, default `http://localhost:8000`.
//!   An empty value means same-origin requests.
//! - `PRACTICE_LOG_LEVEL`: `error|warn|info|debug|trace`, default `info`.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::sync::OnceLock;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000";
pub const DEFAULT_LOG_LEVEL: log::Level = log::Level::Info;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub api_base_url: String,
    pub log_level: log::Level,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self { api_base_url: DEFAULT_API_BASE_URL.to_owned(), log_level: DEFAULT_LOG_LEVEL }
    }
}

impl ClientConfig {
    /// Build config from variables captured when the crate was compiled.
    pub fn from_build_env() -> Self {
        Self::from_raw(option_env!("PRACTICE_API_BASE_URL"), option_env!("PRACTICE_LOG_LEVEL"))
    }

    pub(crate) fn from_raw(base_url: Option<&str>, log_level: Option<&str>) -> Self {
        Self { api_base_url: parse_base_url(base_url), log_level: parse_log_level(log_level) }
    }

    /// Absolute URL for an API path such as `/api/problem`.
    pub fn endpoint(&self, path: &str) -> String {
        let path = path.trim_start_matches('/');
        format!("{}/{path}", self.api_base_url)
    }
}

/// Process-wide config, resolved once.
pub fn client_config() -> &'static ClientConfig {
    static CONFIG: OnceLock<ClientConfig> = OnceLock::new();
    CONFIG.get_or_init(ClientConfig::from_build_env)
}

fn parse_base_url(raw: Option<&str>) -> String {
    match raw {
        Some(v) => v.trim().trim_end_matches('/').to_owned(),
        None => DEFAULT_API_BASE_URL.to_owned(),
    }
}

fn parse_log_level(raw: Option<&str>) -> log::Level {
    raw.and_then(|v| v.trim().parse().ok()).unwrap_or(DEFAULT_LOG_LEVEL)
}

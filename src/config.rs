use std::time::Duration;

use serde::Deserialize;

/// Application configuration loaded from environment variables
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Locator of the collaborative recommendations export (URL or file path)
    #[serde(default = "default_collaborative_source")]
    pub collaborative_source: String,

    /// Locator of the content-based recommendations export (URL or file path)
    #[serde(default = "default_content_based_source")]
    pub content_based_source: String,

    /// Upper bound on a single source read, in seconds
    #[serde(default = "default_fetch_timeout_secs")]
    pub fetch_timeout_secs: u64,

    /// Server host address
    #[serde(default = "default_host")]
    pub host: String,

    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_collaborative_source() -> String {
    "http://localhost:5173/collaborative_recommendations_cleaned.csv".to_string()
}

fn default_content_based_source() -> String {
    "http://localhost:5173/content_recommendations_cleaned.csv".to_string()
}

fn default_fetch_timeout_secs() -> u64 {
    30
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    3000
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        envy::from_env::<Config>().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))
    }

    pub fn fetch_timeout(&self) -> Duration {
        Duration::from_secs(self.fetch_timeout_secs)
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

use serde::Deserialize;

/// Application configuration loaded from environment variables
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Redis connection URL
    #[serde(default = "default_redis_url")]
    pub redis_url: String,

    /// Show query service base URL
    #[serde(default = "default_show_api_url")]
    pub show_api_url: String,

    /// Server host address
    #[serde(default = "default_host")]
    pub host: String,

    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_redis_url() -> String {
    "redis://localhost:6379".to_string()
}

fn default_show_api_url() -> String {
    "https://api.tvmaze.com".to_string()
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
}

use serde::Deserialize;
use std::time::Duration;

/// Application configuration loaded from environment variables
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// PostgreSQL connection URL for recommendation history.
    /// History is kept in memory when unset.
    #[serde(default)]
    pub database_url: Option<String>,

    /// Hugging Face inference API token
    #[serde(default = "default_huggingface_api_key")]
    pub huggingface_api_key: String,

    /// Image captioning model endpoint
    #[serde(default = "default_caption_model_url")]
    pub caption_model_url: String,

    /// Seconds to wait for a caption before giving up
    #[serde(default = "default_caption_timeout_secs")]
    pub caption_timeout_secs: u64,

    #[serde(default = "default_captioning_enabled")]
    pub captioning_enabled: bool,

    /// Server host address
    #[serde(default = "default_host")]
    pub host: String,

    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_huggingface_api_key() -> String {
    "hf_demo".to_string()
}

fn default_caption_model_url() -> String {
    "https://api-inference.huggingface.co/models/Salesforce/blip-image-captioning-large".to_string()
}

fn default_caption_timeout_secs() -> u64 {
    10
}

fn default_captioning_enabled() -> bool {
    true
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
        Self::from_vars(std::env::vars())
    }

    /// Load configuration from explicit key/value pairs
    pub fn from_vars<I>(vars: I) -> anyhow::Result<Self>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        envy::from_iter::<_, Config>(vars).map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))
    }

    pub fn caption_timeout(&self) -> Duration {
        Duration::from_secs(self.caption_timeout_secs)
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

use serde::{Deserialize, Serialize};
use std::env;

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Google Generative Language API key
    #[serde(skip_serializing)]
    pub google_api_key: String,

    /// Model name for assistant consultations
    pub model_name: Option<String>,

    /// Server host
    #[serde(default = "default_host")]
    pub host: String,

    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    3000
}

impl Settings {
    /// Load settings from environment variables
    pub fn load() -> Result<Self, anyhow::Error> {
        dotenvy::dotenv().ok(); // Load .env file if it exists

        let settings = Settings {
            google_api_key: env::var("GOOGLE_API_KEY")
                .map_err(|_| anyhow::anyhow!("GOOGLE_API_KEY environment variable is required"))?,
            model_name: env::var("MODEL_NAME").ok(),
            host: env::var("HOST").unwrap_or_else(|_| default_host()),
            port: env::var("PORT")
                .map(|p| p.parse().unwrap_or(default_port()))
                .unwrap_or(default_port()),
        };

        Ok(settings)
    }

    /// Get the server address as a string
    pub fn server_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

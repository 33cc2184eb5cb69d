// Configuration loader
// Merges CLI flags, environment variables, and .env entries

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

use super::settings::{Config, GeminiConfig};

/// Command-line interface for the salesdesk server.
#[derive(Debug, Parser)]
#[command(name = "salesdesk", about = "Sales-rep data API with an AI question endpoint")]
pub struct Cli {
    /// Address to bind the HTTP server to
    #[arg(long, env = "SALESDESK_ADDR", default_value = "127.0.0.1:8000")]
    pub addr: String,

    /// Path to the sales data JSON file
    #[arg(long, env = "SALES_DATA_PATH", default_value = "data/dummyData.json")]
    pub data: PathBuf,

    /// Frontend origin allowed by CORS
    #[arg(long, env = "SALESDESK_CORS_ORIGIN", default_value = "http://localhost:3000")]
    pub cors_origin: String,

    /// Gemini API key (prefer the environment variable over this flag)
    #[arg(long, env = "GEMINI_API_KEY", hide_env_values = true)]
    pub gemini_api_key: Option<String>,

    /// Gemini model name
    #[arg(long, env = "GEMINI_MODEL")]
    pub gemini_model: Option<String>,
}

impl Cli {
    pub fn into_config(self) -> Config {
        let gemini = match self.gemini_api_key {
            Some(key) if !key.is_empty() => Some(GeminiConfig {
                api_key: key,
                model: self.gemini_model,
            }),
            _ => None,
        };

        Config {
            bind_address: self.addr,
            data_path: self.data,
            cors_origin: self.cors_origin,
            gemini,
        }
    }
}

/// Load configuration from CLI flags, environment variables, and `.env`.
pub fn load_config() -> Result<Config> {
    // .env entries must land in the environment before clap reads its
    // env fallbacks; a missing .env file is not an error.
    dotenvy::dotenv().ok();

    Ok(Cli::parse().into_config())
}

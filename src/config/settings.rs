// Runtime configuration types

use std::path::PathBuf;

/// Gemini gateway credentials and model selection.
#[derive(Debug, Clone)]
pub struct GeminiConfig {
    pub api_key: String,
    /// Model override; `None` uses the provider default.
    pub model: Option<String>,
}

/// Full runtime configuration, built once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Bind address, e.g. "127.0.0.1:8000"
    pub bind_address: String,
    /// Path to the static sales data JSON file
    pub data_path: PathBuf,
    /// Frontend origin allowed by CORS
    pub cors_origin: String,
    /// Gateway configuration; `None` runs the AI endpoint degraded
    pub gemini: Option<GeminiConfig>,
}

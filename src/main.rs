// Salesdesk - sales-rep data API with an AI question endpoint
// Main entry point

use anyhow::Result;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

use salesdesk::config::load_config;
use salesdesk::providers::{GeminiProvider, LlmProvider};
use salesdesk::server::{self, AppState};
use salesdesk::store::DataStore;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // Load configuration (CLI flags, environment, .env)
    let config = load_config()?;

    // Load the static dataset; a bad file degrades to an empty store
    let store = DataStore::load_or_empty(&config.data_path);

    // Configure the Gemini gateway if a key is present
    let provider: Option<Arc<dyn LlmProvider>> = match &config.gemini {
        Some(gemini) => {
            let mut provider = GeminiProvider::new(gemini.api_key.clone())?;
            if let Some(model) = &gemini.model {
                provider = provider.with_model(model.as_str());
            }
            tracing::info!(
                "Gemini model '{}' selected for generation",
                provider.default_model()
            );
            Some(Arc::new(provider))
        }
        None => {
            tracing::warn!(
                "GEMINI_API_KEY not found; the AI endpoint will answer with a fixed \
                 unavailability message. Set GEMINI_API_KEY in the environment or a \
                 .env file to enable it."
            );
            None
        }
    };

    let state = AppState { store, provider };
    server::serve(state, &config).await
}

// Configuration module

mod loader;
mod settings;

pub use loader::{load_config, Cli};
pub use settings::{Config, GeminiConfig};

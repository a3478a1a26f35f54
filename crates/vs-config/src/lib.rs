pub mod config;
mod loader;
pub mod settings;

pub use config::{FileConfig, HttpConfig};
pub use loader::{default_config_path, load_dotenv, DotenvOutcome, ConfigError, SettingsLoader};
pub use settings::{Overrides, Settings};

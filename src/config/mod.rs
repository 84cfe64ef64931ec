pub mod toml_config;

pub use toml_config::AppConfig;

#[cfg(feature = "cli")]
pub use cli::{CliConfig, Command, LogFormat};

#[cfg(feature = "cli")]
pub mod cli;

use crate::error::ConfigError;
use std::path::Path;

// Declare the modules that make up this crate.
pub mod error;
pub mod settings;

// Re-export the core types to provide a clean public API.
pub use settings::{
    Config, FundSeed, NotificationChannel, NotificationsConfig, ServerConfig, WalletConfig,
};

/// Loads the application configuration from the `config.toml` file.
///
/// This function is the primary entry point for this crate. It reads the
/// configuration file, deserializes it into our strongly-typed `Config`
/// struct, validates it, and returns it.
pub fn load_config() -> Result<Config, ConfigError> {
    load_config_from(Path::new("config.toml"))
}

/// Loads and validates the configuration from an explicit path.
pub fn load_config_from(path: &Path) -> Result<Config, ConfigError> {
    let builder = config::Config::builder()
        .add_source(config::File::from(path))
        .build()?;

    let config = builder.try_deserialize::<Config>()?;
    config.validate()?;

    Ok(config)
}

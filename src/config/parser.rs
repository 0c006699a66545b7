use crate::config::types::Config;
use crate::config::validation::validate;
use crate::ConfigError;
use std::path::Path;

/// File name of the optional configuration inside the data directory
pub const CONFIG_FILE: &str = "config.toml";

/// Loads and parses a configuration file from the given path
///
/// # Arguments
///
/// * `path` - Path to the TOML configuration file
///
/// # Returns
///
/// * `Ok(Config)` - Successfully loaded and validated configuration
/// * `Err(ConfigError)` - Failed to load, parse, or validate the configuration
///
/// # Example
///
/// ```no_run
/// use std::path::Path;
/// use link_stacklog::config::load_config;
///
/// let config = load_config(Path::new("config.toml")).unwrap();
/// println!("Fetch timeout: {}s", config.fetcher.timeout_secs);
/// ```
pub fn load_config(path: &Path) -> Result<Config, ConfigError> {
    let content = std::fs::read_to_string(path)?;

    let config: Config = toml::from_str(&content)?;

    validate(&config)?;

    Ok(config)
}

/// Loads the configuration if the file exists, otherwise returns defaults
pub fn load_config_or_default(path: &Path) -> Result<Config, ConfigError> {
    if path.exists() {
        tracing::debug!("Loading configuration from {}", path.display());
        load_config(path)
    } else {
        tracing::debug!("No configuration at {}, using defaults", path.display());
        Ok(Config::default())
    }
}

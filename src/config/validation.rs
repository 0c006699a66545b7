use crate::config::types::{Config, FetcherConfig, StackConfig};
use crate::ConfigError;

const MAX_TIMEOUT_SECS: u64 = 300;

/// Validates the entire configuration
pub fn validate(config: &Config) -> Result<(), ConfigError> {
    validate_fetcher_config(&config.fetcher)?;
    validate_stack_config(&config.stack)?;
    Ok(())
}

/// Validates fetcher configuration
fn validate_fetcher_config(config: &FetcherConfig) -> Result<(), ConfigError> {
    if config.timeout_secs < 1 || config.timeout_secs > MAX_TIMEOUT_SECS {
        return Err(ConfigError::Validation(format!(
            "timeout-secs must be between 1 and {}, got {}",
            MAX_TIMEOUT_SECS, config.timeout_secs
        )));
    }

    if config.user_agent.trim().is_empty() {
        return Err(ConfigError::Validation(
            "user-agent cannot be empty".to_string(),
        ));
    }

    // reqwest rejects header values with control characters at build time
    if config.user_agent.chars().any(|c| c.is_control()) {
        return Err(ConfigError::Validation(format!(
            "user-agent contains control characters: {:?}",
            config.user_agent
        )));
    }

    Ok(())
}

/// Validates stack configuration
fn validate_stack_config(config: &StackConfig) -> Result<(), ConfigError> {
    validate_log_name(&config.default_log)
}

/// Validates a log name taken from configuration
fn validate_log_name(name: &str) -> Result<(), ConfigError> {
    if name.is_empty() {
        return Err(ConfigError::Validation(
            "default-log cannot be empty".to_string(),
        ));
    }

    if name.trim() != name {
        return Err(ConfigError::Validation(format!(
            "default-log cannot start or end with whitespace, got '{}'",
            name
        )));
    }

    Ok(())
}

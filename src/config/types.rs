use serde::Deserialize;

/// Default timeout for fetching page metadata, in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Main configuration structure for link-stacklog
///
/// Every section is optional; missing values fall back to defaults.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub fetcher: FetcherConfig,
    pub stack: StackConfig,
}

/// Metadata fetch configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct FetcherConfig {
    /// Total request timeout in seconds
    #[serde(rename = "timeout-secs")]
    pub timeout_secs: u64,

    /// User-Agent header sent with every request
    #[serde(rename = "user-agent")]
    pub user_agent: String,
}

impl Default for FetcherConfig {
    fn default() -> Self {
        Self {
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            user_agent: format!("link-stacklog/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

/// Stack behavior configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StackConfig {
    /// Log used when no `--log` is given
    #[serde(rename = "default-log")]
    pub default_log: String,
}

impl Default for StackConfig {
    fn default() -> Self {
        Self {
            default_log: crate::stack::DEFAULT_LOG_NAME.to_string(),
        }
    }
}

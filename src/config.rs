use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

/// Settings for the page fetcher
#[derive(Debug, Deserialize, Clone)]
pub struct FetchConfig {
    /// User-Agent header sent with every request. Many recipe sites refuse
    /// requests that look like bots, so the default imitates a browser.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout: u64,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            user_agent: default_user_agent(),
            timeout: default_timeout(),
        }
    }
}

fn default_user_agent() -> String {
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36".to_string()
}

fn default_timeout() -> u64 {
    30
}

impl FetchConfig {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded with the following priority (highest to lowest):
    /// 1. Environment variables with RECIPE_SCRAPER__ prefix
    /// 2. recipe-scraper.toml file in the current directory
    /// 3. Default values
    ///
    /// Environment variable format: RECIPE_SCRAPER__USER_AGENT
    pub fn load() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            // Optional config file (can be missing)
            .add_source(File::with_name("recipe-scraper").required(false))
            .add_source(
                Environment::with_prefix("RECIPE_SCRAPER")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }
}

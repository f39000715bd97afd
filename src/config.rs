use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

/// Fetcher settings, read from an optional `recipe-stripper.toml` in the
/// working directory plus `RECIPE_STRIPPER_*` environment variables.
#[derive(Debug, Deserialize, Clone)]
pub struct Settings {
    /// User-Agent header sent with every page fetch
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            user_agent: default_user_agent(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl Settings {
    pub fn load() -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(File::with_name("recipe-stripper").required(false))
            .add_source(Environment::with_prefix("RECIPE_STRIPPER"))
            .build()?
            .try_deserialize()
    }
}

fn default_user_agent() -> String {
    "Mozilla/5.0 (compatible; RecipeStripper/1.0)".to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

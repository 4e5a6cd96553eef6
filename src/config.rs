use crate::error::Result;
use crate::preferred::DEFAULT_PREFERRED_HOST;
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Deserialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub selector: SelectorConfig,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct SelectorConfig {
    pub preferred_host: String,
    pub fallback: String,
    pub forward_feedback: bool,
}

impl Default for SelectorConfig {
    fn default() -> Self {
        Self {
            preferred_host: DEFAULT_PREFERRED_HOST.to_string(),
            fallback: "round_robin".to_string(),
            forward_feedback: false,
        }
    }
}

impl Config {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml(&contents)
    }

    pub fn from_yaml(contents: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(contents)?)
    }

    /// Reads `path` if it exists, then applies `NODE_SELECTOR__*` overrides
    /// from the environment, e.g. `NODE_SELECTOR__PREFERRED_HOST=10.0.0.5`.
    pub fn load(path: &str) -> Result<Self> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name(path).required(false))
            .add_source(
                config::Environment::with_prefix("NODE")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        Ok(settings.try_deserialize()?)
    }
}

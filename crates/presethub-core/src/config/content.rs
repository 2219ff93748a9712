//! Content loading configuration.

use serde::{Deserialize, Serialize};

/// Settings for the content loading layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentConfig {
    /// The strategy installed at startup: `"preset"`, `"filmSim"`, or
    /// `"combined"`.
    #[serde(default = "default_strategy")]
    pub default_strategy: String,
    /// Maximum number of items a page requests per load.
    #[serde(default = "default_max_items")]
    pub max_items: usize,
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self {
            default_strategy: default_strategy(),
            max_items: default_max_items(),
        }
    }
}

fn default_strategy() -> String {
    "combined".to_string()
}

fn default_max_items() -> usize {
    50
}

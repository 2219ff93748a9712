//! The content-loading capability and its closed variant set.

use std::fmt;
use std::str::FromStr;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use presethub_core::error::AppError;
use presethub_core::result::AppResult;
use presethub_core::types::ContentFilter;
use presethub_entity::ContentItem;

/// Identifies which strategy variant is active.
///
/// The tags are stable; callers and tests assert on them instead of
/// inspecting strategy internals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum StrategyName {
    /// Presets only.
    Preset,
    /// Film simulations only.
    FilmSim,
    /// Presets and film simulations, fetched concurrently.
    Combined,
}

impl StrategyName {
    /// The stable string tag of this variant.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Preset => "preset",
            Self::FilmSim => "filmSim",
            Self::Combined => "combined",
        }
    }
}

impl fmt::Display for StrategyName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for StrategyName {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "preset" => Ok(Self::Preset),
            "filmSim" => Ok(Self::FilmSim),
            "combined" => Ok(Self::Combined),
            other => Err(AppError::validation(format!(
                "Unknown content loading strategy '{other}'"
            ))),
        }
    }
}

/// An interchangeable algorithm fetching a content collection.
///
/// Variants wrap one or two repositories and pass the filter through
/// unchanged; repository failures propagate as-is, with no retry and no
/// error translation.
#[async_trait]
pub trait ContentLoadingStrategy: Send + Sync + fmt::Debug {
    /// Fetches the collection, optionally constrained by a filter.
    async fn load_content(&self, filter: Option<&ContentFilter>) -> AppResult<Vec<ContentItem>>;

    /// Returns this variant's stable tag.
    fn strategy_name(&self) -> StrategyName;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tags_are_stable() {
        assert_eq!(StrategyName::Preset.as_str(), "preset");
        assert_eq!(StrategyName::FilmSim.as_str(), "filmSim");
        assert_eq!(StrategyName::Combined.as_str(), "combined");
    }

    #[test]
    fn test_parse_roundtrip() {
        for name in [
            StrategyName::Preset,
            StrategyName::FilmSim,
            StrategyName::Combined,
        ] {
            assert_eq!(name.as_str().parse::<StrategyName>().unwrap(), name);
        }
        assert!("everything".parse::<StrategyName>().is_err());
    }
}

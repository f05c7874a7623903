use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};
use std::path::Path;
use crate::errors::GoalieError;
use tracing::debug;

/// Picks one decoration (gif link, emoticon) out of a list.
pub trait FlavorText: Send + Sync {
    fn pick(&self, options: &[String]) -> Option<String>;
}

#[derive(Debug, Default)]
pub struct RandomFlavor;

impl FlavorText for RandomFlavor {
    fn pick(&self, options: &[String]) -> Option<String> {
        options.choose(&mut rand::thread_rng()).cloned()
    }
}

/// Always picks the same position. Deterministic output for tests and previews.
#[derive(Debug, Default)]
pub struct FixedFlavor {
    pub index: usize,
}

impl FlavorText for FixedFlavor {
    fn pick(&self, options: &[String]) -> Option<String> {
        if options.is_empty() {
            return None;
        }
        options.get(self.index % options.len()).cloned()
    }
}

/// Decorations appended to good-news and bad-news messages.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlavorCatalog {
    #[serde(default)]
    pub success_gifs: Vec<String>,
    #[serde(default)]
    pub failure_gifs: Vec<String>,
}

impl FlavorCatalog {
    /// Load from a YAML file. A missing file yields an empty catalog.
    pub async fn load(path: Option<&Path>) -> Result<Self, GoalieError> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        if !path.exists() {
            debug!(path = %path.display(), "Flavor file not found, messages will be plain");
            return Ok(Self::default());
        }
        let content = tokio::fs::read_to_string(path).await?;
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(&content).map_err(|e| {
            GoalieError::Config(format!("Invalid flavor file {}: {}", path.display(), e))
        })
    }
}

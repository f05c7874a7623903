use async_trait::async_trait;
use std::collections::BTreeMap;
use std::path::PathBuf;
use crate::errors::GoalieError;
use crate::tracking::CrashCache;
use tracing::debug;

/// Where the crash cache lives between runs.
#[async_trait]
pub trait CacheStore: Send + Sync {
    /// Load the cache. A store that was never written yields an empty cache.
    async fn load(&self) -> Result<CrashCache, GoalieError>;

    /// Overwrite the stored cache wholesale.
    async fn save(&self, cache: &CrashCache) -> Result<(), GoalieError>;
}

/// YAML mapping of crash group id to count.
pub struct YamlCacheStore {
    path: PathBuf,
}

impl YamlCacheStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl CacheStore for YamlCacheStore {
    async fn load(&self) -> Result<CrashCache, GoalieError> {
        if !self.path.exists() {
            debug!(path = %self.path.display(), "No crash cache yet, starting empty");
            return Ok(CrashCache::new());
        }

        let content = tokio::fs::read_to_string(&self.path).await?;
        let cache = parse_cache(&content).map_err(|e| {
            GoalieError::Persistence(format!("Corrupt crash cache {}: {}", self.path.display(), e))
        })?;
        debug!(path = %self.path.display(), entries = cache.size(), "Crash cache loaded");
        Ok(cache)
    }

    async fn save(&self, cache: &CrashCache) -> Result<(), GoalieError> {
        let content = serde_yaml::to_string(cache.entries())?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent).await?;
        }

        // Write beside the target, then rename over it
        let mut tmp = self.path.clone().into_os_string();
        tmp.push(".tmp");
        let tmp = PathBuf::from(tmp);
        tokio::fs::write(&tmp, content).await?;
        tokio::fs::rename(&tmp, &self.path).await?;

        debug!(path = %self.path.display(), entries = cache.size(), "Crash cache saved");
        Ok(())
    }
}

/// Keys may be YAML integers or strings; values must be non-negative integers.
fn parse_cache(content: &str) -> Result<CrashCache, String> {
    if content.trim().is_empty() {
        return Ok(CrashCache::new());
    }

    let value: serde_yaml::Value = serde_yaml::from_str(content).map_err(|e| e.to_string())?;
    let mapping = match value {
        serde_yaml::Value::Null => return Ok(CrashCache::new()),
        serde_yaml::Value::Mapping(m) => m,
        other => return Err(format!("expected a mapping, found {:?}", other)),
    };

    let mut entries = BTreeMap::new();
    for (key, count) in mapping {
        let id = match key {
            serde_yaml::Value::String(s) => s,
            serde_yaml::Value::Number(n) => n.to_string(),
            other => return Err(format!("unsupported key {:?}", other)),
        };
        let count = count
            .as_u64()
            .ok_or_else(|| format!("count for {} is not a non-negative integer", id))?;
        entries.insert(id, count);
    }
    Ok(CrashCache::from_entries(entries))
}

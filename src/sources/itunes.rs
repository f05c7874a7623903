use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use crate::errors::GoalieError;
use super::provider::VersionLookup;
use tracing::debug;

pub const DEFAULT_ITUNES_URL: &str = "https://itunes.apple.com";

/// Looks up the current App Store version of an app.
pub struct ItunesLookup {
    client: Client,
    base_url: String,
    app_id: String,
}

impl ItunesLookup {
    pub fn new(base_url: &str, app_id: &str) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            app_id: app_id.to_string(),
        }
    }
}

#[async_trait]
impl VersionLookup for ItunesLookup {
    async fn lookup(&self) -> Result<Option<String>, GoalieError> {
        let resp = self.client
            .get(format!("{}/lookup", self.base_url))
            .query(&[("id", self.app_id.as_str())])
            .send()
            .await
            .map_err(|e| GoalieError::Network(format!("Version lookup failed: {}", e)))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(GoalieError::Network(format!("Version lookup returned HTTP {}", status)));
        }

        let data: Value = resp.json().await
            .map_err(|e| GoalieError::Network(format!("Invalid version lookup response: {}", e)))?;

        let version = latest_version(&data);
        debug!(app_id = %self.app_id, version = ?version, "Version lookup complete");
        Ok(version)
    }
}

/// Last non-empty `version` field across `results`.
fn latest_version(data: &Value) -> Option<String> {
    data["results"]
        .as_array()?
        .iter()
        .filter_map(|entry| entry["version"].as_str())
        .filter(|v| !v.trim().is_empty())
        .last()
        .map(|v| v.trim().to_string())
}

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use crate::sources::hockey::DEFAULT_HOCKEY_URL;
use crate::sources::itunes::DEFAULT_ITUNES_URL;
use crate::notify::hipchat::DEFAULT_HIPCHAT_URL;
use crate::tracking::DEFAULT_THRESHOLDS;
use crate::utils::de::string_or_number;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GoalieConfig {
    pub crash_source: CrashSourceConfig,
    pub notifier: NotifierConfig,
    /// Absent means no release lookup and no version filtering.
    #[serde(default)]
    pub version_gate: Option<VersionGateConfig>,
    #[serde(default = "default_thresholds")]
    pub thresholds: Vec<u64>,
    #[serde(default = "default_cache_path")]
    pub cache_path: PathBuf,
    #[serde(default)]
    pub flavor_path: Option<PathBuf>,
    #[serde(default)]
    pub summary: SummaryPolicy,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CrashSourceConfig {
    #[serde(deserialize_with = "string_or_number")]
    pub app_id: String,
    pub sdk_token: String,
    #[serde(default = "default_hockey_url")]
    pub base_url: String,
    #[serde(default = "default_per_page")]
    pub per_page: u32,
    #[serde(default = "default_true")]
    pub symbolicated: bool,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct NotifierConfig {
    #[serde(deserialize_with = "string_or_number")]
    pub room_id: String,
    pub room_token: String,
    #[serde(default = "default_hipchat_url")]
    pub base_url: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct VersionGateConfig {
    #[serde(deserialize_with = "string_or_number")]
    pub itunes_app_id: String,
    #[serde(default = "default_itunes_url")]
    pub base_url: String,
    #[serde(rename = "match", default)]
    pub match_policy: VersionMatch,
}

/// How a crash group's short version is compared with the release version.
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum VersionMatch {
    #[default]
    Exact,
    Prefix,
}

/// When the end-of-run summary is sent. Both require tracked crash groups
/// at the start of the run.
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum SummaryPolicy {
    /// Only when the number of tracked crash groups changed.
    #[default]
    OnChange,
    Always,
}

impl SummaryPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::OnChange => "on_change",
            Self::Always => "always",
        }
    }
}

impl std::fmt::Display for SummaryPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

fn default_thresholds() -> Vec<u64> {
    DEFAULT_THRESHOLDS.to_vec()
}

fn default_cache_path() -> PathBuf {
    PathBuf::from("crash_cache.yml")
}

fn default_hockey_url() -> String {
    DEFAULT_HOCKEY_URL.to_string()
}

fn default_hipchat_url() -> String {
    DEFAULT_HIPCHAT_URL.to_string()
}

fn default_itunes_url() -> String {
    DEFAULT_ITUNES_URL.to_string()
}

fn default_per_page() -> u32 {
    100
}

fn default_true() -> bool {
    true
}

use serde::{Deserialize, Serialize};
use crate::utils::de::{opt_string_or_number, string_or_number};

/// One crash group as reported by the crash-source API.
///
/// Only `id`, `number_of_crashes` and `status` drive tracking decisions. The
/// remaining fields are display metadata passed through to notifications.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CrashGroupRecord {
    /// Stable identifier of the crash group. Numeric ids are normalised to strings.
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    #[serde(default)]
    pub number_of_crashes: u64,
    /// 0 means unresolved; any other value is a resolved/ignored state.
    #[serde(default)]
    pub status: i64,
    #[serde(default, deserialize_with = "opt_string_or_number")]
    pub app_id: Option<String>,
    #[serde(default)]
    pub bundle_version: Option<String>,
    #[serde(default)]
    pub bundle_short_version: Option<String>,
    #[serde(default)]
    pub class: Option<String>,
    #[serde(default)]
    pub method: Option<String>,
    #[serde(default)]
    pub exception_type: Option<String>,
    #[serde(default)]
    pub reason: Option<String>,
}

impl CrashGroupRecord {
    pub fn new(id: impl Into<String>, number_of_crashes: u64, status: i64) -> Self {
        Self {
            id: id.into(),
            number_of_crashes,
            status,
            app_id: None,
            bundle_version: None,
            bundle_short_version: None,
            class: None,
            method: None,
            exception_type: None,
            reason: None,
        }
    }

    pub fn is_resolved(&self) -> bool {
        self.status != 0
    }

    /// Short version string used for version gating.
    pub fn short_version(&self) -> &str {
        self.bundle_short_version.as_deref().unwrap_or("")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numeric_id_normalised() {
        let record: CrashGroupRecord = serde_json::from_str(
            r#"{"id": 7731, "number_of_crashes": 42, "status": 0, "app_id": 99}"#,
        ).unwrap();
        assert_eq!(record.id, "7731");
        assert_eq!(record.app_id.as_deref(), Some("99"));
        assert_eq!(record.number_of_crashes, 42);
        assert!(!record.is_resolved());
    }

    #[test]
    fn test_string_id_kept() {
        let record: CrashGroupRecord = serde_json::from_str(
            r#"{"id": "abc", "number_of_crashes": 3, "status": 1}"#,
        ).unwrap();
        assert_eq!(record.id, "abc");
        assert!(record.is_resolved());
    }

    #[test]
    fn test_null_metadata_fields() {
        let record: CrashGroupRecord = serde_json::from_str(
            r#"{"id": 1, "number_of_crashes": 3, "status": 0, "class": null, "method": "viewDidLoad", "app_id": null}"#,
        ).unwrap();
        assert!(record.class.is_none());
        assert!(record.app_id.is_none());
        assert_eq!(record.method.as_deref(), Some("viewDidLoad"));
        assert_eq!(record.short_version(), "");
    }
}

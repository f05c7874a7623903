use std::path::{Path, PathBuf};
use crate::errors::GoalieError;
use crate::tracking::ThresholdTable;
use super::credentials::resolve_credential;
use super::schema::CONFIG_SCHEMA;
use super::types::GoalieConfig;
use tracing::debug;

pub const DEFAULT_CONFIG_PATH: &str = "goalie_settings.yml";

const MAX_CONFIG_BYTES: u64 = 1_048_576;

pub async fn parse_config(path: &Path) -> Result<GoalieConfig, GoalieError> {
    if !path.exists() {
        return Err(GoalieError::Config(format!("Config file not found: {}", path.display())));
    }

    let metadata = tokio::fs::metadata(path).await?;
    if metadata.len() > MAX_CONFIG_BYTES {
        return Err(GoalieError::Config("Config file exceeds 1MB limit".into()));
    }

    let content = tokio::fs::read_to_string(path).await?;
    let yaml: serde_yaml::Value = serde_yaml::from_str(&content)?;

    // Structural check first so a missing field is reported by path
    validate_schema(&yaml)?;

    let mut config: GoalieConfig = serde_yaml::from_value(yaml)
        .map_err(|e| GoalieError::Config(format!("Invalid config {}: {}", path.display(), e)))?;

    validate_semantics(&config)?;

    let base_dir = path.parent().unwrap_or_else(|| Path::new(""));
    resolve_paths(&mut config, base_dir);
    resolve_credentials(&mut config)?;

    debug!(
        path = %path.display(),
        app_id = %config.crash_source.app_id,
        thresholds = ?config.thresholds,
        version_gate = config.version_gate.is_some(),
        "Configuration loaded"
    );

    Ok(config)
}

/// Validate config against the JSON schema for structural correctness.
fn validate_schema(yaml: &serde_yaml::Value) -> Result<(), GoalieError> {
    let json_value = serde_json::to_value(yaml)
        .map_err(|e| GoalieError::Config(format!("Config conversion error: {}", e)))?;

    let compiled = jsonschema::JSONSchema::compile(&CONFIG_SCHEMA)
        .map_err(|e| GoalieError::Config(format!("Schema compilation error: {}", e)))?;

    let result = compiled.validate(&json_value);
    if let Err(errors) = result {
        let messages: Vec<String> = errors
            .map(|e| {
                let at = e.instance_path.to_string();
                if at.is_empty() {
                    e.to_string()
                } else {
                    format!("{} at {}", e, at)
                }
            })
            .collect();
        if !messages.is_empty() {
            return Err(GoalieError::Config(messages.join("; ")));
        }
    }

    Ok(())
}

/// Checks the schema cannot express.
fn validate_semantics(config: &GoalieConfig) -> Result<(), GoalieError> {
    ThresholdTable::new(config.thresholds.clone())?;

    if config.crash_source.app_id.trim().is_empty() {
        return Err(GoalieError::Config("crash_source.app_id must not be empty".into()));
    }
    if config.notifier.room_id.trim().is_empty() {
        return Err(GoalieError::Config("notifier.room_id must not be empty".into()));
    }
    if !(1..=100).contains(&config.crash_source.per_page) {
        return Err(GoalieError::Config(format!(
            "crash_source.per_page must be between 1 and 100, got {}",
            config.crash_source.per_page
        )));
    }

    let mut urls = vec![
        ("crash_source.base_url", config.crash_source.base_url.as_str()),
        ("notifier.base_url", config.notifier.base_url.as_str()),
    ];
    if let Some(gate) = &config.version_gate {
        if gate.itunes_app_id.trim().is_empty() {
            return Err(GoalieError::Config("version_gate.itunes_app_id must not be empty".into()));
        }
        urls.push(("version_gate.base_url", gate.base_url.as_str()));
    }
    for (field, url) in urls {
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(GoalieError::Config(format!("{} must be an http(s) URL, got '{}'", field, url)));
        }
    }

    Ok(())
}

/// Relative file paths live next to the config file.
fn resolve_paths(config: &mut GoalieConfig, base_dir: &Path) {
    let resolve = |p: &PathBuf| -> PathBuf {
        if p.is_relative() { base_dir.join(p) } else { p.clone() }
    };
    config.cache_path = resolve(&config.cache_path);
    config.flavor_path = config.flavor_path.as_ref().map(resolve);
}

fn resolve_credentials(config: &mut GoalieConfig) -> Result<(), GoalieError> {
    config.crash_source.sdk_token =
        resolve_credential(&config.crash_source.sdk_token, "crash_source.sdk_token")?;
    config.notifier.room_token =
        resolve_credential(&config.notifier.room_token, "notifier.room_token")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{SummaryPolicy, VersionMatch};
    use tempfile::TempDir;

    fn write_config(dir: &TempDir, body: &str) -> PathBuf {
        let path = dir.path().join("goalie_settings.yml");
        std::fs::write(&path, body).unwrap();
        path
    }

    const VALID: &str = "
crash_source:
  app_id: abc123
  sdk_token: hockey-token
notifier:
  room_id: 4242
  room_token: room-token
version_gate:
  itunes_app_id: 987654
  match: prefix
thresholds: [10, 30]
flavor_path: gifs.yml
summary: always
";

    #[tokio::test]
    async fn test_parse_valid_config() {
        let dir = TempDir::new().unwrap();
        let path = write_config(&dir, VALID);
        let config = parse_config(&path).await.unwrap();
        assert_eq!(config.thresholds, vec![10, 30]);
        assert_eq!(config.summary, SummaryPolicy::Always);
        assert_eq!(config.version_gate.unwrap().match_policy, VersionMatch::Prefix);
        assert_eq!(config.cache_path, dir.path().join("crash_cache.yml"));
        assert_eq!(config.flavor_path, Some(dir.path().join("gifs.yml")));
    }

    #[tokio::test]
    async fn test_missing_file() {
        let err = parse_config(Path::new("/nonexistent/goalie.yml")).await.unwrap_err();
        assert!(matches!(err, GoalieError::Config(_)));
    }

    #[tokio::test]
    async fn test_missing_required_field_named() {
        let dir = TempDir::new().unwrap();
        let path = write_config(&dir, "crash_source:\n  app_id: abc\nnotifier:\n  room_id: 1\n  room_token: t\n");
        let err = parse_config(&path).await.unwrap_err();
        assert!(matches!(err, GoalieError::Config(_)));
        assert!(err.to_string().contains("sdk_token"), "{}", err);
    }

    #[tokio::test]
    async fn test_unsorted_thresholds_rejected() {
        let dir = TempDir::new().unwrap();
        let body = VALID.replace("thresholds: [10, 30]", "thresholds: [30, 10]");
        let path = write_config(&dir, &body);
        let err = parse_config(&path).await.unwrap_err();
        assert!(err.to_string().contains("ascending"));
    }

    #[tokio::test]
    async fn test_per_page_out_of_range_rejected() {
        let dir = TempDir::new().unwrap();
        let body = VALID.replace("sdk_token: hockey-token", "sdk_token: hockey-token\n  per_page: 500");
        let path = write_config(&dir, &body);
        assert!(parse_config(&path).await.is_err());
    }

    #[tokio::test]
    async fn test_empty_file_rejected() {
        let dir = TempDir::new().unwrap();
        let path = write_config(&dir, "");
        assert!(parse_config(&path).await.is_err());
    }

    #[tokio::test]
    async fn test_token_resolved_from_env() {
        std::env::set_var("TEST_GOALIE_ROOM_TOKEN", "from-env");
        let dir = TempDir::new().unwrap();
        let body = VALID.replace("room_token: room-token", "room_token: $TEST_GOALIE_ROOM_TOKEN");
        let path = write_config(&dir, &body);
        let config = parse_config(&path).await.unwrap();
        assert_eq!(config.notifier.room_token, "from-env");
        std::env::remove_var("TEST_GOALIE_ROOM_TOKEN");
    }

    #[test]
    fn test_absolute_cache_path_kept() {
        let mut config: GoalieConfig = serde_yaml::from_str(VALID).unwrap();
        config.cache_path = PathBuf::from("/var/lib/goalie/cache.yml");
        resolve_paths(&mut config, Path::new("/etc/goalie"));
        assert_eq!(config.cache_path, PathBuf::from("/var/lib/goalie/cache.yml"));
        assert_eq!(config.flavor_path, Some(PathBuf::from("/etc/goalie/gifs.yml")));
    }
}

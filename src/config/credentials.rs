use crate::errors::GoalieError;
use tracing::debug;

/// Resolve a credential value. If the value starts with '$', treat it as an
/// environment variable reference; an unset variable is a config error
/// naming `field`.
pub fn resolve_credential(value: &str, field: &str) -> Result<String, GoalieError> {
    let Some(var_name) = value.strip_prefix('$') else {
        return Ok(value.to_string());
    };
    match std::env::var(var_name) {
        Ok(resolved) if !resolved.is_empty() => {
            debug!(var = %var_name, field, "Resolved credential from environment");
            Ok(resolved)
        }
        _ => Err(GoalieError::Config(format!(
            "{} references environment variable {} which is not set",
            field, var_name
        ))),
    }
}

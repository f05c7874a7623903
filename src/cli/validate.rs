use std::fmt::Write;
use std::path::PathBuf;
use crate::cli::commands::ConfigArgs;
use crate::config::parse_config;
use crate::errors::GoalieError;
use crate::tracking::ThresholdTable;

pub async fn handle_validate(args: ConfigArgs) -> Result<(), GoalieError> {
    print!("{}", render_validation(&args).await?);
    Ok(())
}

pub async fn render_validation(args: &ConfigArgs) -> Result<String, GoalieError> {
    let path = PathBuf::from(&args.config);
    let config = parse_config(&path).await?;
    let thresholds = ThresholdTable::new(config.thresholds.clone())?;

    let mut out = String::new();
    let _ = writeln!(out, "Configuration is valid: {}", args.config);
    let _ = writeln!(out, "  app:        {}", config.crash_source.app_id);
    let _ = writeln!(out, "  thresholds: {:?}", thresholds.levels());
    let _ = writeln!(out, "  cache:      {}", config.cache_path.display());
    let _ = writeln!(out, "  summary:    {}", config.summary);
    match &config.version_gate {
        Some(gate) => {
            let _ = writeln!(out, "  version:    itunes app {} ({:?} match)", gate.itunes_app_id, gate.match_policy);
        }
        None => {
            let _ = writeln!(out, "  version:    not gated");
        }
    }
    Ok(out)
}

use std::fmt::Write;
use std::path::PathBuf;
use console::style;
use crate::cli::commands::CacheArgs;
use crate::config::parse_config;
use crate::errors::GoalieError;
use crate::persistence::{CacheStore, YamlCacheStore};
use crate::tracking::ThresholdTable;

pub async fn handle_cache(args: CacheArgs) -> Result<(), GoalieError> {
    print!("{}", render_cache(&args).await?);
    Ok(())
}

/// Tracked crash groups as a table ordered by id, or as a JSON object with `--json`.
pub async fn render_cache(args: &CacheArgs) -> Result<String, GoalieError> {
    let path = PathBuf::from(&args.config.config);
    let config = parse_config(&path).await?;
    let thresholds = ThresholdTable::new(config.thresholds.clone())?;
    let cache = YamlCacheStore::new(&config.cache_path).load().await?;

    if args.json {
        return Ok(format!("{}\n", serde_json::to_string_pretty(cache.entries())?));
    }

    if cache.is_empty() {
        return Ok(format!("No crash groups tracked ({})\n", config.cache_path.display()));
    }

    let mut out = String::new();
    let _ = writeln!(out, "{}", style(format!("{:<24} {:>8} {:>8}", "CRASH GROUP", "COUNT", "LEVEL")).bold());
    for (id, count) in cache.iter() {
        let _ = writeln!(out, "{:<24} {:>8} {:>8}", id, count, thresholds.highest_crossed(count));
    }
    let _ = writeln!(out, "{} tracked", cache.size());
    Ok(out)
}

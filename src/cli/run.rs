use std::path::PathBuf;
use console::style;
use crate::cli::commands::RunArgs;
use crate::config::parse_config;
use crate::errors::GoalieError;
use crate::pipeline::{RunContext, RunController, RunOutcome};
use crate::utils::formatting::format_duration;
use tracing::{error, info};

pub async fn handle_run(args: RunArgs) -> Result<(), GoalieError> {
    let path = PathBuf::from(&args.config.config);
    let config = parse_config(&path).await?;

    info!(app_id = %config.crash_source.app_id, dry_run = args.dry_run, "Checking crash groups");

    let ctx = RunContext::from_config(&config, args.dry_run).await?;
    let controller = RunController::new(ctx);

    let outcome = match controller.run().await {
        Ok(outcome) => outcome,
        Err(e) => {
            error!(error_type = e.classify().error_type, error = %e, "Run aborted");
            return Err(e);
        }
    };

    match outcome {
        RunOutcome::Completed(report) => {
            println!(
                "{} {} crash groups, {} tracked (was {}), {} events, {} messages sent in {}",
                style("completed").green(),
                report.total_groups,
                report.tracked_after,
                report.tracked_before,
                report.events,
                report.notifications_sent,
                format_duration(report.duration_ms),
            );
            if report.delivery_failures > 0 {
                println!(
                    "{} {} notifications could not be delivered",
                    style("warning").yellow(),
                    report.delivery_failures
                );
            }
        }
        RunOutcome::Skipped { reason } => {
            println!("{} {}", style("skipped").dim(), reason);
        }
    }

    Ok(())
}

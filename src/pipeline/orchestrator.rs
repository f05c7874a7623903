use chrono::Utc;
use serde::Serialize;
use crate::config::SummaryPolicy;
use crate::errors::GoalieError;
use crate::models::NotificationEvent;
use crate::tracking::{Classifier, PageAggregator, VersionFilter};
use super::context::RunContext;
use tracing::info;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RunReport {
    pub total_groups: u64,
    pub tracked_before: usize,
    pub tracked_after: usize,
    pub target_version: Option<String>,
    /// Escalation and resolution events produced while paging.
    pub events: u32,
    pub summary_sent: bool,
    pub all_clear_sent: bool,
    pub notifications_sent: u32,
    pub delivery_failures: u32,
    pub duration_ms: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "lowercase")]
pub enum RunOutcome {
    Completed(RunReport),
    /// Version gating found no release to compare against. Nothing was sent or saved.
    Skipped { reason: String },
}

/// Drives one polling run: version lookup, paging, summary, persistence.
pub struct RunController {
    ctx: RunContext,
}

impl RunController {
    pub fn new(ctx: RunContext) -> Self {
        Self { ctx }
    }

    /// Any `Err` leaves the stored cache untouched and sends no summary.
    pub async fn run(&self) -> Result<RunOutcome, GoalieError> {
        let started = Utc::now();
        let mut cache = self.ctx.store.load().await?;

        let filter = match &self.ctx.version_lookup {
            None => None,
            Some(lookup) => match lookup.lookup().await? {
                Some(version) if !version.trim().is_empty() => {
                    info!(version = %version, policy = ?self.ctx.version_match, "Gating on release version");
                    Some(VersionFilter::new(version, self.ctx.version_match))
                }
                _ => {
                    info!("No release version available, skipping run");
                    return Ok(RunOutcome::Skipped {
                        reason: "no release version available".to_string(),
                    });
                }
            },
        };
        let target_version = filter.as_ref().map(|f| f.target.clone());

        let tracked_before = cache.size();
        let classifier = Classifier::new(&self.ctx.thresholds);
        let aggregate = PageAggregator::new(self.ctx.source.as_ref(), &self.ctx.app_id, self.ctx.per_page)
            .with_symbolicated(self.ctx.symbolicated)
            .with_filter(filter)
            .run(&classifier, &mut cache, &self.ctx.dispatcher)
            .await?;
        let tracked_after = cache.size();

        let summary_sent = summary_due(self.ctx.summary_policy, tracked_before, tracked_after);
        if summary_sent {
            self.ctx
                .dispatcher
                .dispatch(&NotificationEvent::Summary {
                    total_groups: aggregate.total_groups,
                    changed: tracked_before != tracked_after,
                })
                .await;
        }

        let all_clear_sent = tracked_before > 0 && cache.is_empty();
        if all_clear_sent {
            self.ctx.dispatcher.dispatch(&NotificationEvent::AllClear).await;
        }

        if self.ctx.persist {
            self.ctx.store.save(&cache).await?;
        } else {
            info!(tracked = tracked_after, "Dry run, crash cache left untouched");
        }

        let report = RunReport {
            total_groups: aggregate.total_groups,
            tracked_before,
            tracked_after,
            target_version,
            events: aggregate.events,
            summary_sent,
            all_clear_sent,
            notifications_sent: self.ctx.dispatcher.delivered(),
            delivery_failures: self.ctx.dispatcher.failed(),
            duration_ms: (Utc::now() - started).num_milliseconds().max(0) as u64,
        };

        info!(
            total_groups = report.total_groups,
            tracked_before,
            tracked_after,
            events = report.events,
            sent = report.notifications_sent,
            summary = summary_sent,
            all_clear = all_clear_sent,
            "Run complete"
        );

        Ok(RunOutcome::Completed(report))
    }
}

/// Summaries only make sense when something was tracked at the start.
pub fn summary_due(policy: SummaryPolicy, tracked_before: usize, tracked_after: usize) -> bool {
    if tracked_before == 0 {
        return false;
    }
    match policy {
        SummaryPolicy::OnChange => tracked_before != tracked_after,
        SummaryPolicy::Always => true,
    }
}

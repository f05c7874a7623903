use async_trait::async_trait;
use crate::config::VersionMatch;
use crate::errors::GoalieError;
use crate::models::{CrashGroupRecord, NotificationEvent};
use crate::sources::{CrashSource, PageRequest};
use super::cache::CrashCache;
use super::classifier::Classifier;
use tracing::{debug, info};

/// Receives events as soon as the classifier produces them.
#[async_trait]
pub trait EventHandler: Send + Sync {
    async fn handle(&self, event: NotificationEvent);
}

/// Restricts classification to crash groups from one release.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionFilter {
    pub target: String,
    pub policy: VersionMatch,
}

impl VersionFilter {
    pub fn new(target: impl Into<String>, policy: VersionMatch) -> Self {
        Self { target: target.into(), policy }
    }

    pub fn matches(&self, record: &CrashGroupRecord) -> bool {
        let version = record.short_version();
        match self.policy {
            VersionMatch::Exact => version == self.target,
            VersionMatch::Prefix => version.starts_with(&self.target),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AggregateReport {
    /// Every crash group seen, filtered or not.
    pub total_groups: u64,
    /// Crash groups handed to the classifier.
    pub examined: u64,
    pub pages_fetched: u32,
    pub events: u32,
}

/// Walks every page of crash groups for an app and feeds them to the classifier.
pub struct PageAggregator<'a> {
    source: &'a dyn CrashSource,
    app_id: &'a str,
    per_page: u32,
    symbolicated: bool,
    filter: Option<VersionFilter>,
}

impl<'a> PageAggregator<'a> {
    pub fn new(source: &'a dyn CrashSource, app_id: &'a str, per_page: u32) -> Self {
        Self {
            source,
            app_id,
            per_page,
            symbolicated: true,
            filter: None,
        }
    }

    pub fn with_symbolicated(mut self, symbolicated: bool) -> Self {
        self.symbolicated = symbolicated;
        self
    }

    pub fn with_filter(mut self, filter: Option<VersionFilter>) -> Self {
        self.filter = filter;
        self
    }

    /// Fetch pages until the largest `total_pages` seen so far is exhausted.
    ///
    /// An error indicator on any page aborts the walk with
    /// [`GoalieError::SourceUnavailable`]; events already handed to `handler`
    /// stay delivered, and the caller must not persist `cache`.
    pub async fn run(
        &self,
        classifier: &Classifier<'_>,
        cache: &mut CrashCache,
        handler: &dyn EventHandler,
    ) -> Result<AggregateReport, GoalieError> {
        let mut report = AggregateReport::default();
        let mut current_page: u32 = 1;
        let mut total_pages: u32 = 1;

        while current_page <= total_pages {
            let request = PageRequest::new(self.app_id, current_page, self.per_page)
                .with_symbolicated(self.symbolicated);
            let page = self.source.fetch_page(&request).await?;

            if let Some(error) = page.error {
                return Err(GoalieError::SourceUnavailable(format!(
                    "{} page {}: {}",
                    self.source.source_name(),
                    current_page,
                    error
                )));
            }

            report.pages_fetched += 1;
            report.total_groups += page.records.len() as u64;

            for record in &page.records {
                if let Some(filter) = &self.filter {
                    if !filter.matches(record) {
                        continue;
                    }
                }
                report.examined += 1;
                if let Some(event) = classifier.classify(record, cache) {
                    report.events += 1;
                    handler.handle(event).await;
                }
            }

            total_pages = total_pages.max(page.total_pages);
            debug!(
                page = current_page,
                total_pages,
                records = page.records.len(),
                "Processed crash page"
            );
            current_page += 1;
        }

        info!(
            app_id = %self.app_id,
            pages = report.pages_fetched,
            total_groups = report.total_groups,
            examined = report.examined,
            events = report.events,
            "Crash groups aggregated"
        );

        Ok(report)
    }
}

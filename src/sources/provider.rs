use async_trait::async_trait;
use crate::errors::GoalieError;
use super::types::{CrashPage, PageRequest};

#[async_trait]
pub trait CrashSource: Send + Sync {
    /// Fetch one page of crash groups.
    ///
    /// A service-level error reported in the response body is returned in
    /// [`CrashPage::error`] rather than as `Err`, so the caller decides how
    /// fatal it is.
    async fn fetch_page(&self, request: &PageRequest<'_>) -> Result<CrashPage, GoalieError>;

    /// Source name for logging
    fn source_name(&self) -> &str;
}

#[async_trait]
pub trait VersionLookup: Send + Sync {
    /// Current public release version, or `None` when nothing usable was found.
    async fn lookup(&self) -> Result<Option<String>, GoalieError>;
}

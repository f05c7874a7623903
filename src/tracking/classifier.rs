use crate::models::{CrashGroupRecord, NotificationEvent};
use super::cache::CrashCache;
use super::thresholds::ThresholdTable;
use tracing::debug;

/// Decides whether a crash group escalated or resolved since the last run.
pub struct Classifier<'a> {
    thresholds: &'a ThresholdTable,
}

impl<'a> Classifier<'a> {
    pub fn new(thresholds: &'a ThresholdTable) -> Self {
        Self { thresholds }
    }

    /// Judge one record against the cache, mutating the cache to match.
    ///
    /// Resolution of a tracked group wins over any count change. For an
    /// unresolved group the cache only moves forward: a count that falls back
    /// below its recorded level is ignored.
    pub fn classify(
        &self,
        record: &CrashGroupRecord,
        cache: &mut CrashCache,
    ) -> Option<NotificationEvent> {
        let id = record.id.as_str();

        if record.is_resolved() {
            if cache.delete(id).is_some() {
                debug!(crash_id = %id, status = record.status, "Tracked crash group resolved");
                return Some(NotificationEvent::Resolution { crash: record.clone() });
            }
            return None;
        }

        let new_count = record.number_of_crashes;
        let old_count = cache.get(id).unwrap_or(0);
        let new_level = self.thresholds.highest_crossed(new_count);
        let old_level = self.thresholds.highest_crossed(old_count);

        if new_level > old_level {
            debug!(
                crash_id = %id,
                old_count,
                new_count,
                old_level,
                new_level,
                "Crash group crossed threshold"
            );
            cache.set(id, new_count);
            return Some(NotificationEvent::Escalation { crash: record.clone(), level: new_level });
        }

        None
    }
}

use async_trait::async_trait;
use crate::errors::GoalieError;
use super::sink::{NotificationSink, OutboundMessage};
use tracing::info;

/// Writes messages to the log instead of a chat room. Used for dry runs.
#[derive(Debug, Default)]
pub struct LogSink;

#[async_trait]
impl NotificationSink for LogSink {
    async fn send(&self, message: &OutboundMessage) -> Result<(), GoalieError> {
        info!(
            color = ?message.color,
            notify = message.should_alert,
            text = %message.text,
            "Notification (dry run)"
        );
        Ok(())
    }

    fn sink_name(&self) -> &str { "log" }
}

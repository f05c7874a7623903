use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::errors::GoalieError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageColor {
    Red,
    Yellow,
    Green,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum MessageFormat {
    #[default]
    Text,
    Html,
}

/// A rendered chat message, ready for delivery.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutboundMessage {
    pub color: MessageColor,
    pub text: String,
    /// Whether the room should be actively alerted (sound, badge).
    pub should_alert: bool,
    pub format: MessageFormat,
}

#[async_trait]
pub trait NotificationSink: Send + Sync {
    /// Deliver one message. Failures surface as [`GoalieError::Delivery`].
    async fn send(&self, message: &OutboundMessage) -> Result<(), GoalieError>;

    /// Sink name for logging
    fn sink_name(&self) -> &str;
}

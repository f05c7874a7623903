use async_trait::async_trait;
use reqwest::Client;
use serde_json::json;
use crate::errors::GoalieError;
use crate::utils::truncation::{truncate_error, truncate_message};
use super::sink::{NotificationSink, OutboundMessage};
use tracing::debug;

pub const DEFAULT_HIPCHAT_URL: &str = "https://api.hipchat.com";

/// Posts room notifications through the HipChat v2 API.
pub struct HipChatSink {
    client: Client,
    base_url: String,
    room_id: String,
    token: String,
}

impl HipChatSink {
    pub fn new(base_url: &str, room_id: &str, token: &str) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            room_id: room_id.to_string(),
            token: token.to_string(),
        }
    }
}

#[async_trait]
impl NotificationSink for HipChatSink {
    async fn send(&self, message: &OutboundMessage) -> Result<(), GoalieError> {
        let body = json!({
            "color": message.color,
            "message": truncate_message(&message.text),
            "notify": message.should_alert,
            "message_format": message.format,
        });

        let resp = self.client
            .post(format!("{}/v2/room/{}/notification", self.base_url, self.room_id))
            .bearer_auth(&self.token)
            .json(&body)
            .send()
            .await
            .map_err(|e| GoalieError::Delivery(format!("HipChat request failed: {}", e)))?;

        let status = resp.status();
        if !status.is_success() {
            let text = resp.text().await.unwrap_or_default();
            return Err(GoalieError::Delivery(format!(
                "HipChat returned HTTP {}: {}",
                status,
                truncate_error(&text)
            )));
        }

        debug!(room_id = %self.room_id, status = status.as_u16(), "HipChat notification delivered");
        Ok(())
    }

    fn sink_name(&self) -> &str { "hipchat" }
}

use crate::models::{CrashGroupRecord, NotificationEvent};
use crate::utils::formatting::join_words;
use super::flavor::{FlavorCatalog, FlavorText};
use super::sink::{MessageColor, MessageFormat, OutboundMessage};

/// Renders notification events as chat messages.
pub struct MessageFormatter {
    dashboard_url: String,
    app_id: String,
    catalog: FlavorCatalog,
    flavor: Box<dyn FlavorText>,
}

impl MessageFormatter {
    /// `dashboard_url` and `app_id` build the link back to each crash group.
    pub fn new(
        dashboard_url: &str,
        app_id: &str,
        catalog: FlavorCatalog,
        flavor: Box<dyn FlavorText>,
    ) -> Self {
        Self {
            dashboard_url: dashboard_url.trim_end_matches('/').to_string(),
            app_id: app_id.to_string(),
            catalog,
            flavor,
        }
    }

    pub fn format(&self, event: &NotificationEvent) -> OutboundMessage {
        match event {
            NotificationEvent::Escalation { crash, .. } => {
                let flavor = self.failure_flavor();
                let url = self.crash_url(crash);
                let detail = join_words([
                    field(&crash.class),
                    field(&crash.method),
                    field(&crash.exception_type),
                    field(&crash.reason),
                    url.as_str(),
                    flavor.as_str(),
                ]);
                OutboundMessage {
                    color: MessageColor::Red,
                    text: format!(
                        "{} occurrences of unresolved crash in {} ({}): {}",
                        crash.number_of_crashes,
                        field(&crash.bundle_short_version),
                        field(&crash.bundle_version),
                        detail
                    ),
                    should_alert: true,
                    format: MessageFormat::Text,
                }
            }
            NotificationEvent::Resolution { crash } => {
                let flavor = self.success_flavor();
                let detail = join_words([field(&crash.class), field(&crash.method), flavor.as_str()]);
                OutboundMessage {
                    color: MessageColor::Green,
                    text: format!(
                        "No longer unresolved: {} occurrences of crash in {} ({}): {}",
                        crash.number_of_crashes,
                        field(&crash.bundle_short_version),
                        field(&crash.bundle_version),
                        detail
                    ),
                    should_alert: false,
                    format: MessageFormat::Text,
                }
            }
            NotificationEvent::Summary { total_groups: 0, .. } => {
                let flavor = self.success_flavor();
                OutboundMessage {
                    color: MessageColor::Green,
                    text: join_words(["(success) 0 open crash issues remaining!", flavor.as_str()]),
                    should_alert: false,
                    format: MessageFormat::Text,
                }
            }
            NotificationEvent::Summary { total_groups, .. } => OutboundMessage {
                color: MessageColor::Yellow,
                text: format!("(failed) {} open crash issues remaining.", total_groups),
                should_alert: false,
                format: MessageFormat::Text,
            },
            NotificationEvent::AllClear => {
                let flavor = self.success_flavor();
                OutboundMessage {
                    color: MessageColor::Green,
                    text: join_words(["(success) All tracked crash groups resolved!", flavor.as_str()]),
                    should_alert: false,
                    format: MessageFormat::Text,
                }
            }
        }
    }

    fn crash_url(&self, crash: &CrashGroupRecord) -> String {
        let app_id = crash.app_id.as_deref().unwrap_or(&self.app_id);
        format!(
            "{}/manage/apps/{}/crash_reasons/{}/multiple",
            self.dashboard_url, app_id, crash.id
        )
    }

    fn success_flavor(&self) -> String {
        self.flavor.pick(&self.catalog.success_gifs).unwrap_or_default()
    }

    fn failure_flavor(&self) -> String {
        self.flavor.pick(&self.catalog.failure_gifs).unwrap_or_default()
    }
}

fn field(value: &Option<String>) -> &str {
    value.as_deref().unwrap_or("")
}

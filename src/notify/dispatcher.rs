use async_trait::async_trait;
use std::sync::atomic::{AtomicU32, Ordering};
use crate::models::NotificationEvent;
use crate::tracking::EventHandler;
use super::formatter::MessageFormatter;
use super::sink::NotificationSink;
use tracing::{info, warn};

/// Formats each event and hands it to the sink straight away.
///
/// Delivery failures are logged and swallowed; they never abort a run.
pub struct Dispatcher {
    formatter: MessageFormatter,
    sink: Box<dyn NotificationSink>,
    delivered: AtomicU32,
    failed: AtomicU32,
}

impl Dispatcher {
    pub fn new(formatter: MessageFormatter, sink: Box<dyn NotificationSink>) -> Self {
        Self {
            formatter,
            sink,
            delivered: AtomicU32::new(0),
            failed: AtomicU32::new(0),
        }
    }

    pub async fn dispatch(&self, event: &NotificationEvent) {
        let message = self.formatter.format(event);
        match self.sink.send(&message).await {
            Ok(()) => {
                self.delivered.fetch_add(1, Ordering::Relaxed);
                info!(
                    kind = event.kind(),
                    crash_id = event.crash_id().unwrap_or("-"),
                    sink = self.sink.sink_name(),
                    "Notification sent"
                );
            }
            Err(e) => {
                self.failed.fetch_add(1, Ordering::Relaxed);
                warn!(
                    kind = event.kind(),
                    crash_id = event.crash_id().unwrap_or("-"),
                    sink = self.sink.sink_name(),
                    error = %e,
                    "Notification delivery failed"
                );
            }
        }
    }

    pub fn delivered(&self) -> u32 {
        self.delivered.load(Ordering::Relaxed)
    }

    pub fn failed(&self) -> u32 {
        self.failed.load(Ordering::Relaxed)
    }
}

#[async_trait]
impl EventHandler for Dispatcher {
    async fn handle(&self, event: NotificationEvent) {
        if let NotificationEvent::Escalation { crash, level } = &event {
            info!(crash_id = %crash.id, level, count = crash.number_of_crashes, "Crash group escalated");
        }
        self.dispatch(&event).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::GoalieError;
    use crate::notify::flavor::{FixedFlavor, FlavorCatalog};
    use crate::notify::sink::OutboundMessage;
    use std::sync::{Arc, Mutex};

    struct FlakySink {
        fail: bool,
        seen: Arc<Mutex<Vec<OutboundMessage>>>,
    }

    #[async_trait]
    impl NotificationSink for FlakySink {
        async fn send(&self, message: &OutboundMessage) -> Result<(), GoalieError> {
            self.seen.lock().unwrap().push(message.clone());
            if self.fail {
                return Err(GoalieError::Delivery("room gone".into()));
            }
            Ok(())
        }

        fn sink_name(&self) -> &str { "flaky" }
    }

    fn dispatcher(fail: bool) -> (Dispatcher, Arc<Mutex<Vec<OutboundMessage>>>) {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let formatter = MessageFormatter::new(
            "https://rink.hockeyapp.net",
            "app",
            FlavorCatalog::default(),
            Box::new(FixedFlavor::default()),
        );
        let sink = FlakySink { fail, seen: seen.clone() };
        (Dispatcher::new(formatter, Box::new(sink)), seen)
    }

    #[tokio::test]
    async fn test_delivered_counted() {
        let (dispatcher, seen) = dispatcher(false);
        dispatcher.handle(NotificationEvent::AllClear).await;
        assert_eq!(dispatcher.delivered(), 1);
        assert_eq!(dispatcher.failed(), 0);
        assert_eq!(seen.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_failure_swallowed() {
        let (dispatcher, seen) = dispatcher(true);
        dispatcher.handle(NotificationEvent::Summary { total_groups: 3, changed: true }).await;
        dispatcher.handle(NotificationEvent::AllClear).await;
        assert_eq!(dispatcher.delivered(), 0);
        assert_eq!(dispatcher.failed(), 2);
        assert_eq!(seen.lock().unwrap().len(), 2);
    }
}

use super::crash_group::CrashGroupRecord;

/// Something worth telling the chat room about.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NotificationEvent {
    /// A crash group crossed a higher threshold than the one last recorded.
    Escalation { crash: CrashGroupRecord, level: u64 },
    /// A previously tracked crash group is no longer unresolved.
    Resolution { crash: CrashGroupRecord },
    /// Aggregate count of crash groups seen in a run.
    Summary { total_groups: u64, changed: bool },
    /// Tracked crash groups dropped to zero.
    AllClear,
}

impl NotificationEvent {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Escalation { .. } => "escalation",
            Self::Resolution { .. } => "resolution",
            Self::Summary { .. } => "summary",
            Self::AllClear => "all_clear",
        }
    }

    pub fn crash_id(&self) -> Option<&str> {
        match self {
            Self::Escalation { crash, .. } | Self::Resolution { crash } => Some(&crash.id),
            _ => None,
        }
    }
}

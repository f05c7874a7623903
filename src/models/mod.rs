pub mod crash_group;
pub mod event;

pub use crash_group::CrashGroupRecord;
pub use event::NotificationEvent;

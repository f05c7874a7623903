pub mod provider;
pub mod types;
pub mod hockey;
pub mod itunes;

pub use provider::{CrashSource, VersionLookup};
pub use types::{CrashPage, PageRequest, SortField, SortOrder};
pub use hockey::HockeyClient;
pub use itunes::ItunesLookup;

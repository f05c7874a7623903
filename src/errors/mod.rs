pub mod types;
pub mod classification;

pub use types::GoalieError;
pub use classification::ErrorClassification;

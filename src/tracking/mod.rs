//! Threshold/state-transition tracking.
//!
//! Pages of crash groups flow through [`PageAggregator`], each record is
//! judged by [`Classifier`] against the persisted [`CrashCache`], and the
//! resulting events are handed to an [`EventHandler`] as they happen.

pub mod aggregator;
pub mod cache;
pub mod classifier;
pub mod thresholds;

pub use aggregator::{AggregateReport, EventHandler, PageAggregator, VersionFilter};
pub use cache::CrashCache;
pub use classifier::Classifier;
pub use thresholds::{highest_crossed, ThresholdTable, DEFAULT_THRESHOLDS};

//! Domain models for Belmont
//!
//! Contains the status model and the inference rules, without any I/O concerns.

mod task;
mod milestone;
mod feature;
mod report;
pub mod inference;

pub use task::{Task, TaskCounts, TaskId, TaskStatus, UNPARSABLE_ORDER};
pub(crate) use task::is_digits;
pub use milestone::Milestone;
pub use feature::{FeatureStatus, FeatureSummary};
pub use report::{FeatureReport, ListingReport, OverallStatus, StatusReport, BLOCKED_LABEL};

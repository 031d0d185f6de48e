//! Status report model
//!
//! A report is either about one feature or a listing of every feature.
//! Both shapes serialize field-for-field; the listing always carries a
//! `features` array, even when empty.

use serde::{Serialize, Serializer};
use std::fmt;

use super::feature::FeatureSummary;
use super::milestone::Milestone;
use super::task::{Task, TaskCounts};

/// Label shown when a blocked status line is somehow empty
pub const BLOCKED_LABEL: &str = "BLOCKED";

/// Overall status of a feature or of the whole product
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum OverallStatus {
    #[default]
    NotStarted,
    InProgress,
    Complete,
    /// Explicit blocked status line from a progress document, kept verbatim
    Blocked(String),
}

impl OverallStatus {
    /// Plain label, as used in structured output
    pub fn label(&self) -> &str {
        match self {
            OverallStatus::NotStarted => "Not Started",
            OverallStatus::InProgress => "In Progress",
            OverallStatus::Complete => "Complete",
            OverallStatus::Blocked(line) if line.is_empty() => BLOCKED_LABEL,
            OverallStatus::Blocked(line) => line,
        }
    }

    /// Label with its status glyph, as used in the text report
    ///
    /// An explicit blocked line is printed exactly as written.
    pub fn decorated(&self) -> String {
        match self {
            OverallStatus::NotStarted => format!("🔴 {}", self.label()),
            OverallStatus::InProgress => format!("🟡 {}", self.label()),
            OverallStatus::Complete => format!("✅ {}", self.label()),
            OverallStatus::Blocked(line) if line.is_empty() => format!("🔴 {}", BLOCKED_LABEL),
            OverallStatus::Blocked(line) => line.clone(),
        }
    }
}

impl fmt::Display for OverallStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl Serialize for OverallStatus {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.label())
    }
}

/// Status of a single feature
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FeatureReport {
    /// Feature name from the requirements document
    pub feature: String,
    pub tech_plan_ready: bool,
    pub pr_faq_ready: bool,
    pub overall_status: OverallStatus,
    pub task_counts: TaskCounts,
    pub tasks: Vec<Task>,
    pub milestones: Vec<Milestone>,
    pub blockers: Vec<String>,
    pub next_milestone: Option<Milestone>,
    pub next_task: Option<Task>,
    /// Completed task with the highest id, not the most recent one
    pub last_completed: Option<Task>,
    /// Up to the last few decision lines, oldest first
    pub recent_decisions: Vec<String>,
}

/// Status of every feature in the product
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ListingReport {
    pub product: String,
    /// Readiness of the master tech plan
    pub tech_plan_ready: bool,
    pub pr_faq_ready: bool,
    pub overall_status: OverallStatus,
    pub features: Vec<FeatureSummary>,
}

/// Unified status report
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum StatusReport {
    Feature(FeatureReport),
    Listing(ListingReport),
}

impl StatusReport {
    /// Returns the overall status regardless of mode
    pub fn overall_status(&self) -> &OverallStatus {
        match self {
            StatusReport::Feature(r) => &r.overall_status,
            StatusReport::Listing(r) => &r.overall_status,
        }
    }
}

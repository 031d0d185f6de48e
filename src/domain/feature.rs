//! Feature summaries for the listing report

use serde::Serialize;
use std::fmt;

/// Progress label of a single feature
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum FeatureStatus {
    #[default]
    NotStarted,
    InProgress,
    Complete,
}

impl FeatureStatus {
    /// Derives the label from completed and total task counts
    pub fn from_counts(done: usize, total: usize) -> Self {
        if total > 0 && done == total {
            FeatureStatus::Complete
        } else if done > 0 {
            FeatureStatus::InProgress
        } else {
            FeatureStatus::NotStarted
        }
    }

    /// Status glyph used by the listing table
    pub fn glyph(&self) -> &'static str {
        match self {
            FeatureStatus::NotStarted => "🔴",
            FeatureStatus::InProgress => "🟡",
            FeatureStatus::Complete => "✅",
        }
    }
}

impl fmt::Display for FeatureStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FeatureStatus::NotStarted => write!(f, "not_started"),
            FeatureStatus::InProgress => write!(f, "in_progress"),
            FeatureStatus::Complete => write!(f, "complete"),
        }
    }
}

/// One row of the feature listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FeatureSummary {
    /// Directory name under `.belmont/features/`
    pub slug: String,

    /// Feature name from the requirements document, or the slug
    pub name: String,

    pub tasks_done: usize,
    pub tasks_total: usize,

    pub status: FeatureStatus,
}

impl FeatureSummary {
    /// Creates a summary, deriving the status label from the counts
    pub fn new(
        slug: impl Into<String>,
        name: impl Into<String>,
        tasks_done: usize,
        tasks_total: usize,
    ) -> Self {
        Self {
            slug: slug.into(),
            name: name.into(),
            tasks_done,
            tasks_total,
            status: FeatureStatus::from_counts(tasks_done, tasks_total),
        }
    }

    /// Summary for a feature whose requirements document could not be read
    pub fn unreadable(slug: impl Into<String>) -> Self {
        let slug = slug.into();
        Self::new(slug.clone(), slug, 0, 0)
    }
}

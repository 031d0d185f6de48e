//! Status aggregation
//!
//! Reads the planning documents for one feature (or every feature), runs
//! them through the scanner and the inference rules, and assembles a
//! [`StatusReport`]. Either a complete report is returned or an error;
//! never both.

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use super::documents::DocumentSource;
use super::markdown;
use super::project::{Layout, PROGRESS_FILE, REQUIREMENTS_FILE, TECH_PLAN_FILE};
use crate::domain::inference::{
    assign_task_statuses, compute_feature_list_status, compute_overall_status,
    last_completed_task, next_milestone, next_task,
};
use crate::domain::{
    FeatureReport, FeatureSummary, ListingReport, StatusReport, TaskCounts, TaskStatus,
};

/// Product name used when the master requirements document is missing
pub const UNNAMED_PRODUCT: &str = "Unnamed Product";

#[derive(Debug, Error)]
pub enum StatusError {
    #[error("Feature '{slug}' not found in {}", .features_dir.display())]
    FeatureNotFound { slug: String, features_dir: PathBuf },

    #[error("Feature '{slug}' has no requirements document: missing {}", .path.display())]
    MissingRequirementsDoc { slug: String, path: PathBuf },

    #[error("Feature '{slug}' has no progress document: missing {}", .path.display())]
    MissingProgressDoc { slug: String, path: PathBuf },

    #[error("Failed to read {}", .path.display())]
    Io { path: PathBuf, source: io::Error },
}

impl StatusError {
    /// Stable machine-readable code
    pub fn code(&self) -> &'static str {
        match self {
            Self::FeatureNotFound { .. } => "FEATURE_NOT_FOUND",
            Self::MissingRequirementsDoc { .. } => "MISSING_REQUIREMENTS_DOC",
            Self::MissingProgressDoc { .. } => "MISSING_PROGRESS_DOC",
            Self::Io { .. } => "IO_ERROR",
        }
    }

    /// Returns true for the not-found family of errors
    pub fn is_not_found(&self) -> bool {
        !matches!(self, Self::Io { .. })
    }
}

/// Tunables for a status run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusOptions {
    /// Longest task name before truncation; `<= 0` disables truncation
    pub max_task_name: i32,

    /// Number of trailing decisions kept
    pub recent_decisions: usize,
}

impl Default for StatusOptions {
    fn default() -> Self {
        Self {
            max_task_name: 55,
            recent_decisions: 3,
        }
    }
}

/// Builds a report for `feature`, or the feature listing when it is `None` or empty
pub fn build_status<D: DocumentSource + ?Sized>(
    docs: &D,
    root: &Path,
    options: &StatusOptions,
    feature: Option<&str>,
) -> Result<StatusReport, StatusError> {
    let layout = Layout::new(root);

    match feature.filter(|slug| !slug.is_empty()) {
        Some(slug) => build_feature_report(docs, &layout, options, slug).map(StatusReport::Feature),
        None => Ok(StatusReport::Listing(build_listing(docs, &layout, options))),
    }
}

fn build_feature_report<D: DocumentSource + ?Sized>(
    docs: &D,
    layout: &Layout,
    options: &StatusOptions,
    slug: &str,
) -> Result<FeatureReport, StatusError> {
    let feature_dir = layout.feature_dir(slug);
    if !docs.is_dir(&feature_dir) {
        return Err(StatusError::FeatureNotFound {
            slug: slug.to_string(),
            features_dir: layout.features_dir(),
        });
    }

    let prd_path = feature_dir.join(REQUIREMENTS_FILE);
    let prd = read_required(docs, &prd_path)?.ok_or_else(|| StatusError::MissingRequirementsDoc {
        slug: slug.to_string(),
        path: prd_path.clone(),
    })?;

    let progress_path = feature_dir.join(PROGRESS_FILE);
    let progress =
        read_required(docs, &progress_path)?.ok_or_else(|| StatusError::MissingProgressDoc {
            slug: slug.to_string(),
            path: progress_path.clone(),
        })?;

    let mut tasks = markdown::extract_tasks(&prd, options.max_task_name);
    assign_task_statuses(&mut tasks);

    let milestones = markdown::extract_milestones(&progress);
    let status_line = markdown::extract_status_line(&progress);

    Ok(FeatureReport {
        feature: markdown::extract_feature_name(&prd),
        tech_plan_ready: docs.has_content(&feature_dir.join(TECH_PLAN_FILE)),
        pr_faq_ready: docs.file_has_real_content(&layout.pr_faq()),
        overall_status: compute_overall_status(&status_line, &tasks),
        task_counts: TaskCounts::tally(&tasks),
        next_milestone: next_milestone(&milestones).cloned(),
        next_task: next_task(&tasks).cloned(),
        last_completed: last_completed_task(&tasks).cloned(),
        blockers: markdown::extract_blockers(&progress),
        recent_decisions: markdown::extract_recent_decisions(&progress, options.recent_decisions),
        milestones,
        tasks,
    })
}

fn read_required<D: DocumentSource + ?Sized>(
    docs: &D,
    path: &Path,
) -> Result<Option<String>, StatusError> {
    docs.read_document(path).map_err(|source| StatusError::Io {
        path: path.to_path_buf(),
        source,
    })
}

fn build_listing<D: DocumentSource + ?Sized>(
    docs: &D,
    layout: &Layout,
    options: &StatusOptions,
) -> ListingReport {
    let features = list_features(docs, &layout.features_dir(), options.max_task_name);

    let product = match docs.read_document(&layout.master_requirements()) {
        Ok(Some(prd)) => markdown::extract_product_name(&prd),
        _ => UNNAMED_PRODUCT.to_string(),
    };

    ListingReport {
        product,
        tech_plan_ready: docs.has_content(&layout.master_tech_plan()),
        pr_faq_ready: docs.file_has_real_content(&layout.pr_faq()),
        overall_status: compute_feature_list_status(&features),
        features,
    }
}

/// Summarizes every feature directory under `features_dir`, in name order
///
/// An unreadable features directory yields an empty list.
pub fn list_features<D: DocumentSource + ?Sized>(
    docs: &D,
    features_dir: &Path,
    max_task_name: i32,
) -> Vec<FeatureSummary> {
    docs.list_directory_entries(features_dir)
        .into_iter()
        .filter(|entry| entry.is_dir)
        .map(|entry| summarize_feature(docs, features_dir, &entry.name, max_task_name))
        .collect()
}

fn summarize_feature<D: DocumentSource + ?Sized>(
    docs: &D,
    features_dir: &Path,
    slug: &str,
    max_task_name: i32,
) -> FeatureSummary {
    let prd = match docs.read_document(&features_dir.join(slug).join(REQUIREMENTS_FILE)) {
        Ok(Some(prd)) => prd,
        _ => return FeatureSummary::unreadable(slug),
    };

    let name = match markdown::extract_feature_name(&prd) {
        name if name == markdown::UNKNOWN_FEATURE => slug.to_string(),
        name => name,
    };

    let mut tasks = markdown::extract_tasks(&prd, max_task_name);
    assign_task_statuses(&mut tasks);
    let done = tasks
        .iter()
        .filter(|t| t.status == TaskStatus::Complete)
        .count();

    FeatureSummary::new(slug, name, done, tasks.len())
}

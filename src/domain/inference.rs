//! Status inference
//!
//! Turns scanned tasks and milestones into derived status. All functions
//! are pure; the only mutation is the in-place promotion in
//! [`assign_task_statuses`].

use super::feature::{FeatureStatus, FeatureSummary};
use super::milestone::Milestone;
use super::report::OverallStatus;
use super::task::{Task, TaskStatus};

/// Promotes the first pending task (in sorted order) to in progress
///
/// At most one task changes per call. Tasks after it keep their detected
/// status; with no pending task this is a no-op.
pub fn assign_task_statuses(tasks: &mut [Task]) {
    if let Some(task) = tasks.iter_mut().find(|t| t.status == TaskStatus::Pending) {
        task.status = TaskStatus::InProgress;
    }
}

/// Computes the overall status of a feature
///
/// A status line mentioning "blocked" overrides everything else. No other
/// status line text is honored; the task aggregate decides.
pub fn compute_overall_status(status_line: &str, tasks: &[Task]) -> OverallStatus {
    if status_line.to_lowercase().contains("blocked") {
        return OverallStatus::Blocked(status_line.trim().to_string());
    }

    if tasks.is_empty() {
        return OverallStatus::NotStarted;
    }

    if tasks.iter().all(|t| t.status.is_settled()) {
        return OverallStatus::Complete;
    }

    let any_started = tasks
        .iter()
        .any(|t| matches!(t.status, TaskStatus::Complete | TaskStatus::InProgress));
    if any_started {
        OverallStatus::InProgress
    } else {
        OverallStatus::NotStarted
    }
}

/// Computes the overall status of a feature listing
pub fn compute_feature_list_status(features: &[FeatureSummary]) -> OverallStatus {
    let all_complete = features
        .iter()
        .all(|f| f.status == FeatureStatus::Complete);
    if !features.is_empty() && all_complete {
        return OverallStatus::Complete;
    }

    if features.iter().any(|f| f.tasks_done > 0) {
        OverallStatus::InProgress
    } else {
        OverallStatus::NotStarted
    }
}

/// First milestone not yet done, in document order
pub fn next_milestone(milestones: &[Milestone]) -> Option<&Milestone> {
    milestones.iter().find(|m| !m.done)
}

/// First task still needing work, in sorted order
pub fn next_task(tasks: &[Task]) -> Option<&Task> {
    tasks.iter().find(|t| t.status.is_open())
}

/// Completed task with the highest sort key
pub fn last_completed_task(tasks: &[Task]) -> Option<&Task> {
    tasks
        .iter()
        .filter(|t| t.status == TaskStatus::Complete)
        .max_by_key(|t| t.id.sort_key())
}

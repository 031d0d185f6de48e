//! Task domain model
//!
//! Tasks are parsed from `### P<major>-<minor>: <name>` headings in a
//! feature's requirements document. They carry no persisted state of their
//! own: every status is recomputed from the document on each run.

use serde::{Serialize, Serializer};
use std::fmt;

/// Sort key given to ids whose numbers cannot be parsed
pub const UNPARSABLE_ORDER: (u64, u64) = (99, 99);

/// Status of a task
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    /// Not yet started
    #[default]
    Pending,

    /// The task currently being worked on
    InProgress,

    /// Waiting on something outside the task
    Blocked,

    /// Done
    Complete,
}

impl TaskStatus {
    /// Returns true if this status counts as finished for aggregation
    pub fn is_settled(&self) -> bool {
        matches!(self, TaskStatus::Complete | TaskStatus::Blocked)
    }

    /// Returns true if the task still needs work
    pub fn is_open(&self) -> bool {
        matches!(self, TaskStatus::Pending | TaskStatus::InProgress)
    }

    /// Status glyph used by the text report
    pub fn glyph(&self) -> &'static str {
        match self {
            TaskStatus::Complete => "✅",
            TaskStatus::Blocked => "🚫",
            TaskStatus::InProgress => "🔄",
            TaskStatus::Pending => "⬜",
        }
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TaskStatus::Pending => write!(f, "pending"),
            TaskStatus::InProgress => write!(f, "in_progress"),
            TaskStatus::Blocked => write!(f, "blocked"),
            TaskStatus::Complete => write!(f, "complete"),
        }
    }
}

/// Task id in the format `P{major}-{minor}` (e.g., `P2-10`)
///
/// The raw text is kept for display. Ids whose numbers overflow are still
/// valid tasks but sort after every parsable id.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TaskId {
    raw: String,
    order: Option<(u64, u64)>,
}

impl TaskId {
    /// Parses an id such as `P1-3`; never fails
    pub fn parse(raw: &str) -> Self {
        let raw = raw.trim();
        Self {
            raw: raw.to_string(),
            order: parse_order(raw),
        }
    }

    /// Returns the id as written in the document
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Returns `(major, minor)` if the id could be parsed
    pub fn order(&self) -> Option<(u64, u64)> {
        self.order
    }

    /// Returns the ordering key, `(99, 99)` for unparsable ids
    pub fn sort_key(&self) -> (u64, u64) {
        self.order.unwrap_or(UNPARSABLE_ORDER)
    }
}

fn parse_order(raw: &str) -> Option<(u64, u64)> {
    let rest = raw.strip_prefix('P')?;
    let (major, minor) = rest.split_once('-')?;
    if !is_digits(major) || !is_digits(minor) {
        return None;
    }
    Some((major.parse().ok()?, minor.parse().ok()?))
}

pub(crate) fn is_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

impl Serialize for TaskId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.raw)
    }
}

/// A task from a requirements document
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Task {
    /// Task id (`P1-2`)
    pub id: TaskId,

    /// Display name with status markers removed
    pub name: String,

    /// Current status
    pub status: TaskStatus,
}

impl Task {
    /// Creates a new task
    pub fn new(id: &str, name: impl Into<String>, status: TaskStatus) -> Self {
        Self {
            id: TaskId::parse(id),
            name: name.into(),
            status,
        }
    }
}

/// Per-status task tallies
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TaskCounts {
    pub done: usize,
    pub in_progress: usize,
    pub blocked: usize,
    pub pending: usize,
    pub total: usize,
}

impl TaskCounts {
    /// Counts tasks by status
    pub fn tally(tasks: &[Task]) -> Self {
        let mut counts = Self {
            total: tasks.len(),
            ..Self::default()
        };
        for task in tasks {
            match task.status {
                TaskStatus::Complete => counts.done += 1,
                TaskStatus::InProgress => counts.in_progress += 1,
                TaskStatus::Blocked => counts.blocked += 1,
                TaskStatus::Pending => counts.pending += 1,
            }
        }
        counts
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_task_id() {
        let id = TaskId::parse("P2-10");
        assert_eq!(id.order(), Some((2, 10)));
        assert_eq!(id.sort_key(), (2, 10));
        assert_eq!(id.to_string(), "P2-10");
    }

    #[test]
    fn unparsable_id_sorts_last() {
        let overflow = TaskId::parse("P99999999999999999999-1");
        assert_eq!(overflow.order(), None);
        assert_eq!(overflow.sort_key(), UNPARSABLE_ORDER);

        let valid = TaskId::parse("P50-50");
        assert!(valid.sort_key() < overflow.sort_key());
    }

    #[test]
    fn numeric_not_lexical_ordering() {
        let mut ids = vec![
            TaskId::parse("P1-10"),
            TaskId::parse("P1-2"),
            TaskId::parse("P0-7"),
        ];
        ids.sort_by_key(TaskId::sort_key);
        let ordered: Vec<_> = ids.iter().map(|i| i.as_str()).collect();
        assert_eq!(ordered, vec!["P0-7", "P1-2", "P1-10"]);
    }

    #[test]
    fn status_helpers() {
        assert!(TaskStatus::Complete.is_settled());
        assert!(TaskStatus::Blocked.is_settled());
        assert!(!TaskStatus::InProgress.is_settled());
        assert!(TaskStatus::Pending.is_open());
        assert!(TaskStatus::InProgress.is_open());
        assert!(!TaskStatus::Complete.is_open());
    }

    #[test]
    fn status_serializes_snake_case() {
        let json = serde_json::to_string(&TaskStatus::InProgress).unwrap();
        assert_eq!(json, "\"in_progress\"");
    }

    #[test]
    fn tally_counts() {
        let tasks = vec![
            Task::new("P1-1", "a", TaskStatus::Complete),
            Task::new("P1-2", "b", TaskStatus::InProgress),
            Task::new("P1-3", "c", TaskStatus::Blocked),
            Task::new("P1-4", "d", TaskStatus::Pending),
            Task::new("P1-5", "e", TaskStatus::Pending),
        ];
        let counts = TaskCounts::tally(&tasks);
        assert_eq!(
            counts,
            TaskCounts {
                done: 1,
                in_progress: 1,
                blocked: 1,
                pending: 2,
                total: 5,
            }
        );
    }
}

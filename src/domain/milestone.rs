//! Milestone domain model

use serde::Serialize;

/// A named checkpoint from a progress document
///
/// Milestones keep document order; they are never renumbered or sorted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Milestone {
    /// Milestone id (`M3`)
    pub id: String,

    /// Milestone name
    pub name: String,

    /// True only when the heading carries the done marker
    pub done: bool,
}

impl Milestone {
    pub fn new(id: impl Into<String>, name: impl Into<String>, done: bool) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            done,
        }
    }

    /// Status glyph used by the text report
    pub fn glyph(&self) -> &'static str {
        if self.done {
            "✅"
        } else {
            "⬜"
        }
    }
}

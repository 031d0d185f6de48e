//! Markdown scanning for planning documents
//!
//! Belmont documents are hand- or agent-written markdown. Only a closed set
//! of line shapes is recognized:
//!
//! | Shape | Document | Example |
//! |-------|----------|---------|
//! | Feature title | requirements | `# PRD: Login flow` |
//! | Product title | master requirements | `# Product: Acme` |
//! | Task heading | requirements | `### P1-2: Add login ✅` |
//! | Status line | progress | `## Status: Blocked on review` |
//! | Milestone heading | progress | `### ✅ M1: Skeleton` |
//! | Section header | progress | `## Blockers` |
//!
//! Every extractor is total: missing or malformed markup yields a neutral
//! default, never an error.

use crate::domain::{is_digits, Milestone, Task, TaskStatus};

/// Feature name used when a requirements document has no title line
pub const UNKNOWN_FEATURE: &str = "Unknown";

/// Section header listing active blockers
pub const BLOCKERS_HEADER: &str = "## Blockers";

/// Section header listing decisions, oldest first
pub const DECISIONS_HEADER: &str = "## Decisions Log";

const ELLIPSIS: char = '…';

/// A recognized status signal inside task or milestone text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Marker {
    Glyph(char),
    /// Lowercase ASCII keyword, matched case-insensitively
    Keyword(&'static str),
}

impl Marker {
    fn found_in(&self, text: &str) -> bool {
        match self {
            Marker::Glyph(c) => text.contains(*c),
            Marker::Keyword(k) => text.to_ascii_lowercase().contains(k),
        }
    }

    fn strip_from(&self, text: &str) -> String {
        match self {
            Marker::Glyph(c) => text.replace(*c, ""),
            Marker::Keyword(k) => remove_ignore_ascii_case(text, k),
        }
    }
}

const DONE_GLYPH: char = '✅';
const BLOCKED_GLYPH: char = '🚫';
const IN_PROGRESS_GLYPH: char = '🔄';
const PENDING_GLYPH: char = '⬜';

/// Glyphs allowed as a milestone marker
const MILESTONE_MARKERS: [char; 4] = [DONE_GLYPH, PENDING_GLYPH, IN_PROGRESS_GLYPH, BLOCKED_GLYPH];

/// Status signals in priority order; the first group that matches wins
const STATUS_SIGNALS: [(TaskStatus, &[Marker]); 2] = [
    (
        TaskStatus::Complete,
        &[Marker::Glyph(DONE_GLYPH), Marker::Keyword("[done]")],
    ),
    (
        TaskStatus::Blocked,
        &[Marker::Glyph(BLOCKED_GLYPH), Marker::Keyword("blocked")],
    ),
];

/// Markers removed from a task name, in removal order
const NAME_NOISE: [Marker; 8] = [
    Marker::Glyph(DONE_GLYPH),
    Marker::Glyph(BLOCKED_GLYPH),
    Marker::Glyph(IN_PROGRESS_GLYPH),
    Marker::Glyph(PENDING_GLYPH),
    Marker::Keyword("[done]"),
    Marker::Keyword("blocked"),
    Marker::Keyword("follow-up"),
    Marker::Keyword("followup"),
];

/// Returns the name from the first `# PRD: <name>` line, or `Unknown`
pub fn extract_feature_name(doc: &str) -> String {
    doc.lines()
        .find_map(|line| labeled_heading(line, "#", "PRD:"))
        .map(str::to_string)
        .unwrap_or_else(|| UNKNOWN_FEATURE.to_string())
}

/// Returns the name from the first `# Product: <name>` line
///
/// Falls back to [`extract_feature_name`], so a document with neither line
/// yields `Unknown`.
pub fn extract_product_name(doc: &str) -> String {
    doc.lines()
        .find_map(|line| labeled_heading(line, "#", "Product:"))
        .map(str::to_string)
        .unwrap_or_else(|| extract_feature_name(doc))
}

/// Returns the text of the first `## Status: <text>` line, or ""
pub fn extract_status_line(doc: &str) -> String {
    doc.lines()
        .find_map(|line| labeled_heading(line, "##", "Status:"))
        .map(str::to_string)
        .unwrap_or_default()
}

/// Extracts tasks from `### P<major>-<minor>: <text>` headings
///
/// Status is detected before the name is cleaned. With `max_name_len > 0`
/// longer names are cut to `max_name_len` characters, the last being an
/// ellipsis. The result is sorted by `(major, minor)`; ties keep document
/// order.
pub fn extract_tasks(doc: &str, max_name_len: i32) -> Vec<Task> {
    let mut tasks: Vec<Task> = doc
        .lines()
        .filter_map(task_heading)
        .map(|(id, raw)| {
            let status = detect_task_status(raw);
            let name = truncate_name(clean_task_name(raw), max_name_len);
            Task::new(id, name, status)
        })
        .collect();

    tasks.sort_by_key(|t| t.id.sort_key());
    tasks
}

/// Extracts milestones from `### [marker] M<N>: <name>` headings, in document order
pub fn extract_milestones(doc: &str) -> Vec<Milestone> {
    doc.lines().filter_map(milestone_heading).collect()
}

/// Collects the bullet lines under a section header
///
/// The section runs from the line equal to `header` (after trimming) up to
/// the next `## ` line. Blank lines and lines mentioning "none" are dropped;
/// one leading `-` and one leading `*` are stripped.
pub fn extract_section(doc: &str, header: &str) -> Vec<String> {
    let mut lines = doc.lines();
    if !lines.any(|line| line.trim() == header) {
        return Vec::new();
    }

    let mut items = Vec::new();
    for line in lines {
        let trimmed = line.trim();
        if trimmed.starts_with("## ") {
            break;
        }
        if trimmed.is_empty() || trimmed.to_lowercase().contains("none") {
            continue;
        }

        let item = trimmed.strip_prefix('-').unwrap_or(trimmed);
        let item = item.strip_prefix('*').unwrap_or(item).trim();
        if !item.is_empty() {
            items.push(item.to_string());
        }
    }
    items
}

/// Active blockers from a progress document
pub fn extract_blockers(doc: &str) -> Vec<String> {
    extract_section(doc, BLOCKERS_HEADER)
}

/// The last `limit` decisions, oldest first
pub fn extract_recent_decisions(doc: &str, limit: usize) -> Vec<String> {
    let mut decisions = extract_section(doc, DECISIONS_HEADER);
    if decisions.len() > limit {
        decisions.drain(..decisions.len() - limit);
    }
    decisions
}

/// Detects a task's status from its raw heading text
pub fn detect_task_status(raw: &str) -> TaskStatus {
    STATUS_SIGNALS
        .iter()
        .find(|(_, markers)| markers.iter().any(|m| m.found_in(raw)))
        .map(|(status, _)| *status)
        .unwrap_or(TaskStatus::Pending)
}

/// Removes status glyphs and keywords from a task name
pub fn clean_task_name(raw: &str) -> String {
    NAME_NOISE
        .iter()
        .fold(raw.to_string(), |name, marker| marker.strip_from(&name))
        .trim()
        .to_string()
}

/// Truncates to `max_len` characters, ending in an ellipsis; `max_len <= 0` disables
pub fn truncate_name(name: String, max_len: i32) -> String {
    let limit = match usize::try_from(max_len) {
        Ok(limit) if limit > 0 => limit,
        _ => return name,
    };
    if name.chars().count() <= limit {
        return name;
    }

    let mut truncated: String = name.chars().take(limit - 1).collect();
    truncated.push(ELLIPSIS);
    truncated
}

/// Matches `<hashes><ws*><label><rest>` at the start of a line
///
/// Returns the trimmed rest; a line with nothing after the label does not
/// match.
fn labeled_heading<'a>(line: &'a str, hashes: &str, label: &str) -> Option<&'a str> {
    let rest = line.strip_prefix(hashes)?;
    let rest = rest.trim_start().strip_prefix(label)?;
    if rest.is_empty() {
        return None;
    }
    Some(rest.trim())
}

/// Strips `###` followed by at least one whitespace character
fn h3_body(line: &str) -> Option<&str> {
    let rest = line.strip_prefix("###")?;
    let body = rest.trim_start();
    if body.len() == rest.len() {
        return None;
    }
    Some(body)
}

/// Matches `### P<digits>-<digits>: <text>`
fn task_heading(line: &str) -> Option<(&str, &str)> {
    let (id, raw) = h3_body(line)?.split_once(':')?;
    let (major, minor) = id.strip_prefix('P')?.split_once('-')?;
    if !is_digits(major) || !is_digits(minor) || raw.is_empty() {
        return None;
    }
    Some((id, raw.trim()))
}

/// Matches `### [marker] M<digits>: <name>`
fn milestone_heading(line: &str) -> Option<Milestone> {
    let body = h3_body(line)?;
    let (marker, body) = match body.chars().next() {
        Some(c) if MILESTONE_MARKERS.contains(&c) => (Some(c), body[c.len_utf8()..].trim_start()),
        _ => (None, body),
    };

    let (number, name) = body.strip_prefix('M')?.split_once(':')?;
    if !is_digits(number) || name.is_empty() {
        return None;
    }

    Some(Milestone::new(
        format!("M{}", number),
        name.trim(),
        marker == Some(DONE_GLYPH),
    ))
}

/// Removes every occurrence of a lowercase ASCII needle, ignoring case
fn remove_ignore_ascii_case(haystack: &str, needle: &str) -> String {
    // ASCII lowercasing keeps byte offsets, so match positions carry over.
    let lowered = haystack.to_ascii_lowercase();
    let mut out = String::with_capacity(haystack.len());
    let mut last = 0;
    for (start, _) in lowered.match_indices(needle) {
        out.push_str(&haystack[last..start]);
        last = start + needle.len();
    }
    out.push_str(&haystack[last..]);
    out
}

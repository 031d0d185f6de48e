//! Document access
//!
//! The status engine never touches the filesystem directly; it reads
//! through a [`DocumentSource`]. Each document is read once, to completion,
//! before any parsing begins.

use std::fs;
use std::io;
use std::path::Path;

/// Placeholder prefixes written by the workflow's templates
const PLACEHOLDER_PREFIXES: [&str; 2] = ["run /belmont:", "run the /belmont:"];

/// A directory entry as seen by the status engine
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirEntry {
    pub name: String,
    pub is_dir: bool,
}

/// Read access to planning documents
pub trait DocumentSource {
    /// Reads a whole document as text
    ///
    /// `Ok(None)` means the document does not exist (or is a directory);
    /// an existing empty file is `Ok(Some(""))`.
    fn read_document(&self, path: &Path) -> io::Result<Option<String>>;

    /// Lists the entries of a directory, sorted by name
    ///
    /// A missing or unreadable directory yields an empty list.
    fn list_directory_entries(&self, path: &Path) -> Vec<DirEntry>;

    /// Returns true if the path is an existing directory
    fn is_dir(&self, path: &Path) -> bool;

    /// Returns true if the document exists and is not blank
    fn has_content(&self, path: &Path) -> bool {
        matches!(self.read_document(path), Ok(Some(text)) if !text.trim().is_empty())
    }

    /// Returns true if the document exists and holds more than a template placeholder
    fn file_has_real_content(&self, path: &Path) -> bool {
        match self.read_document(path) {
            Ok(Some(text)) => is_real_content(&text),
            _ => false,
        }
    }
}

/// Returns true unless the text is blank or starts with a placeholder instruction
pub fn is_real_content(text: &str) -> bool {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return false;
    }
    let lower = trimmed.to_lowercase();
    !PLACEHOLDER_PREFIXES.iter().any(|p| lower.starts_with(p))
}

/// Documents on the local filesystem
#[derive(Debug, Clone, Copy, Default)]
pub struct FsDocuments;

impl DocumentSource for FsDocuments {
    fn read_document(&self, path: &Path) -> io::Result<Option<String>> {
        if path.is_dir() {
            return Ok(None);
        }
        // Invalid UTF-8 is replaced, not rejected; scanning is best effort.
        match fs::read(path) {
            Ok(bytes) => Ok(Some(String::from_utf8_lossy(&bytes).into_owned())),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e),
        }
    }

    fn list_directory_entries(&self, path: &Path) -> Vec<DirEntry> {
        let entries = match fs::read_dir(path) {
            Ok(e) => e,
            Err(_) => return Vec::new(),
        };

        let mut listed: Vec<DirEntry> = entries
            .flatten()
            .map(|entry| DirEntry {
                name: entry.file_name().to_string_lossy().into_owned(),
                is_dir: entry.file_type().map(|t| t.is_dir()).unwrap_or(false),
            })
            .collect();
        listed.sort_by(|a, b| a.name.cmp(&b.name));
        listed
    }

    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::TaskStatus;
    use crate::storage::markdown;
    use tempfile::TempDir;

    #[test]
    fn missing_and_empty_are_distinct() {
        let dir = TempDir::new().unwrap();
        let empty = dir.path().join("EMPTY.md");
        fs::write(&empty, "").unwrap();

        let docs = FsDocuments;
        assert_eq!(docs.read_document(&dir.path().join("NOPE.md")).unwrap(), None);
        assert_eq!(docs.read_document(&empty).unwrap(), Some(String::new()));
    }

    #[test]
    fn invalid_utf8_is_still_scanned() {
        let dir = TempDir::new().unwrap();
        let prd = dir.path().join("PRD.md");
        fs::write(&prd, b"# PRD: Caf\xE9\n### P1-1: Scaffold \xE2\x9C\x85\n").unwrap();

        let text = FsDocuments.read_document(&prd).unwrap().unwrap();
        assert_eq!(markdown::extract_feature_name(&text), "Caf\u{FFFD}");

        let tasks = markdown::extract_tasks(&text, 0);
        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks[0].name, "Scaffold");
        assert_eq!(tasks[0].status, TaskStatus::Complete);
        assert!(FsDocuments.has_content(&prd));
    }

    #[test]
    fn directory_reads_as_missing() {
        let dir = TempDir::new().unwrap();
        let docs = FsDocuments;
        assert_eq!(docs.read_document(dir.path()).unwrap(), None);
        assert!(!docs.has_content(dir.path()));
    }

    #[test]
    fn list_entries_sorted() {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join("zeta")).unwrap();
        fs::create_dir(dir.path().join("alpha")).unwrap();
        fs::write(dir.path().join("notes.md"), "x").unwrap();

        let entries = FsDocuments.list_directory_entries(dir.path());
        let names: Vec<_> = entries.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["alpha", "notes.md", "zeta"]);
        assert!(entries[0].is_dir);
        assert!(!entries[1].is_dir);
    }

    #[test]
    fn list_missing_directory_is_empty() {
        let dir = TempDir::new().unwrap();
        assert!(FsDocuments
            .list_directory_entries(&dir.path().join("missing"))
            .is_empty());
    }

    #[test]
    fn has_content_ignores_whitespace() {
        let dir = TempDir::new().unwrap();
        let blank = dir.path().join("TECH_PLAN.md");
        fs::write(&blank, "  \n\t\n").unwrap();
        assert!(!FsDocuments.has_content(&blank));

        fs::write(&blank, "# Plan\n").unwrap();
        assert!(FsDocuments.has_content(&blank));
    }

    #[test]
    fn placeholder_is_not_real_content() {
        assert!(!is_real_content("Run /belmont:working-backwards to fill this in"));
        assert!(!is_real_content("  run the /belmont:product-plan skill"));
        assert!(!is_real_content("   "));
        assert!(is_real_content("# PR/FAQ\n\nWe are launching..."));
    }

    #[test]
    fn real_content_from_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("PR_FAQ.md");
        assert!(!FsDocuments.file_has_real_content(&path));

        fs::write(&path, "Run /belmont:working-backwards").unwrap();
        assert!(!FsDocuments.file_has_real_content(&path));

        fs::write(&path, "# Press release").unwrap();
        assert!(FsDocuments.file_has_real_content(&path));
    }
}

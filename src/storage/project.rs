//! Project layout
//!
//! Resolves where the planning documents live under a project root.

use std::path::{Path, PathBuf};

use anyhow::Result;

use super::documents::DocumentSource;
use super::status::{build_status, StatusError};
use super::Config;
use crate::domain::StatusReport;

/// Directory holding all planning state
pub const BELMONT_DIR: &str = ".belmont";

/// Requirements document file name (master and per feature)
pub const REQUIREMENTS_FILE: &str = "PRD.md";

/// Progress document file name
pub const PROGRESS_FILE: &str = "PROGRESS.md";

/// Tech plan file name (master and per feature)
pub const TECH_PLAN_FILE: &str = "TECH_PLAN.md";

/// Working-backwards document file name
pub const PR_FAQ_FILE: &str = "PR_FAQ.md";

/// Paths of the planning documents under a root
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    root: PathBuf,
}

impl Layout {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Returns the `.belmont` directory path
    pub fn belmont_dir(&self) -> PathBuf {
        self.root.join(BELMONT_DIR)
    }

    pub fn features_dir(&self) -> PathBuf {
        self.belmont_dir().join("features")
    }

    pub fn feature_dir(&self, slug: &str) -> PathBuf {
        self.features_dir().join(slug)
    }

    pub fn master_requirements(&self) -> PathBuf {
        self.belmont_dir().join(REQUIREMENTS_FILE)
    }

    pub fn master_tech_plan(&self) -> PathBuf {
        self.belmont_dir().join(TECH_PLAN_FILE)
    }

    pub fn pr_faq(&self) -> PathBuf {
        self.belmont_dir().join(PR_FAQ_FILE)
    }
}

/// A Belmont project
///
/// Opening never fails because `.belmont/` is missing: a project with no
/// planning state simply reports an empty listing.
pub struct Project {
    layout: Layout,
    config: Config,
}

impl Project {
    /// Opens the project at the given root and loads its configuration
    pub fn open(root: impl Into<PathBuf>) -> Result<Self> {
        let layout = Layout::new(root);
        let config = Config::for_project(layout.root())?;

        Ok(Self { layout, config })
    }

    /// Opens the project containing `start`, or `start` itself if none does
    pub fn discover(start: &Path) -> Result<Self> {
        let root = Config::find_project_root(start).unwrap_or_else(|| start.to_path_buf());
        Self::open(root)
    }

    /// Returns the project root path
    pub fn root(&self) -> &Path {
        self.layout.root()
    }

    /// Returns the configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Builds the status report for one feature, or the listing when `feature` is `None`
    pub fn status<D: DocumentSource + ?Sized>(
        &self,
        docs: &D,
        max_task_name: Option<i32>,
        feature: Option<&str>,
    ) -> Result<StatusReport, StatusError> {
        let options = self.config.status_options(max_task_name);
        build_status(docs, self.root(), &options, feature)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::FsDocuments;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn layout_paths() {
        let layout = Layout::new("/work");
        assert_eq!(layout.features_dir(), PathBuf::from("/work/.belmont/features"));
        assert_eq!(
            layout.feature_dir("auth"),
            PathBuf::from("/work/.belmont/features/auth")
        );
        assert_eq!(layout.pr_faq(), PathBuf::from("/work/.belmont/PR_FAQ.md"));
    }

    #[test]
    fn discover_from_subdirectory() {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join(BELMONT_DIR)).unwrap();
        let sub = dir.path().join("src").join("deep");
        fs::create_dir_all(&sub).unwrap();

        let project = Project::discover(&sub).unwrap();
        assert_eq!(project.root(), dir.path());
    }

    #[test]
    fn discover_without_belmont_uses_start() {
        let dir = TempDir::new().unwrap();
        let project = Project::discover(dir.path()).unwrap();
        assert_eq!(project.root(), dir.path());
    }

    #[test]
    fn status_uses_project_config() {
        let dir = TempDir::new().unwrap();
        let feature = dir.path().join(".belmont/features/auth");
        fs::create_dir_all(&feature).unwrap();
        fs::write(
            dir.path().join(".belmont/config.toml"),
            "[status]\nmax_task_name = 6\n",
        )
        .unwrap();
        fs::write(feature.join("PRD.md"), "# PRD: Auth\n### P1-1: Build the login page\n").unwrap();
        fs::write(feature.join("PROGRESS.md"), "").unwrap();

        let project = Project::open(dir.path()).unwrap();
        let report = project.status(&FsDocuments, None, Some("auth")).unwrap();
        match report {
            StatusReport::Feature(r) => assert_eq!(r.tasks[0].name, "Build…"),
            StatusReport::Listing(_) => panic!("expected a feature report"),
        }
    }
}

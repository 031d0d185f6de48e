//! # Storage Layer
//!
//! Reading and scanning the planning documents a Belmont project keeps on disk.
//! Nothing here writes; every report is built fresh from the files.
//!
//! ## Project Structure
//!
//! ```text
//! .belmont/
//! ├── PRD.md                # Master requirements (product name)
//! ├── PR_FAQ.md             # Working-backwards document
//! ├── TECH_PLAN.md          # Master tech plan
//! ├── config.toml           # Optional project configuration
//! └── features/
//!     └── {slug}/
//!         ├── PRD.md        # Feature title and task headings
//!         ├── PROGRESS.md   # Status line, milestones, blockers, decisions
//!         └── TECH_PLAN.md  # Feature tech plan
//! ```
//!
//! ## Key Types
//!
//! - [`Project`] - Entry point for a Belmont project
//! - [`DocumentSource`] - Read access to documents ([`FsDocuments`] on disk)
//! - [`build_status`] - Aggregates documents into a status report
//! - [`Config`] - Project and global configuration

pub mod markdown;
mod documents;
mod config;
mod project;
mod status;

pub use documents::{is_real_content, DirEntry, DocumentSource, FsDocuments};
pub use config::{Config, ConfigError, GlobalConfig, OutputFormat, ProjectConfig, StatusConfig};
pub use project::{Layout, Project, BELMONT_DIR};
pub use status::{build_status, list_features, StatusError, StatusOptions, UNNAMED_PRODUCT};

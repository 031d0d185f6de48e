//! Belmont - status reporting for markdown-driven agent planning
//!
//! Belmont reads the requirements and progress documents that coding agents
//! keep under `.belmont/` and infers a canonical status model from them:
//! ordered tasks, milestones, blockers, decisions and an overall status, for
//! one feature or for every feature of a product.

pub mod domain;
pub mod storage;
pub mod cli;

pub use domain::{OverallStatus, StatusReport, Task, TaskId, TaskStatus};
pub use storage::{build_status, StatusError, StatusOptions};

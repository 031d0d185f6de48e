//! # Command-Line Interface
//!
//! User-facing CLI commands and output formatting.
//!
//! ## Commands
//!
//! | Command | Purpose |
//! |---------|---------|
//! | `status` | Feature listing, or one feature with `--feature <slug>` |
//! | `version` | Version and build information |
//!
//! ## Output Formats
//!
//! All commands support `--format` flag:
//! - `text` (default) - Fixed human-readable layout
//! - `json` - Machine-parseable JSON
//!
//! ## Verbose Mode
//!
//! Use `--verbose` (or `-v`) for debug output on stderr:
//! ```bash
//! belmont --verbose status
//! ```
//!
//! ## Entry Point
//!
//! Call [`run()`] to parse arguments and execute the appropriate command.

mod app;
mod output;
mod render;
mod status;

pub use app::{run, Cli, Commands};
pub use output::{Output, OutputFormat};
pub use render::{render_text, TextReport};

//! Output formatting for CLI commands

use serde::Serialize;

pub use crate::storage::OutputFormat;

/// Output helper for consistent formatting
pub struct Output {
    format: OutputFormat,
    verbose: bool,
}

impl Output {
    pub fn new(format: OutputFormat, verbose: bool) -> Self {
        Self { format, verbose }
    }

    /// Prints a failure with a machine-readable code (JSON mode only)
    ///
    /// Text mode leaves error reporting to `main`.
    pub fn failure(&self, code: &str, message: &str) {
        if self.format == OutputFormat::Json {
            eprintln!(
                "{}",
                serde_json::json!({
                    "success": false,
                    "error": {
                        "code": code,
                        "message": message,
                    }
                })
            );
        }
    }

    /// Prints structured data as indented JSON
    pub fn data<T: Serialize>(&self, data: &T) -> serde_json::Result<()> {
        let json = serde_json::to_string_pretty(data)?;
        println!("{}", json);
        Ok(())
    }

    /// Prints pre-rendered text verbatim
    pub fn text(&self, text: &str) {
        print!("{}", text);
    }

    /// Returns true if using JSON format
    pub fn is_json(&self) -> bool {
        self.format == OutputFormat::Json
    }

    /// Returns true if verbose mode is enabled
    pub fn is_verbose(&self) -> bool {
        self.verbose
    }

    /// Prints a verbose debug message with context (only when --verbose is set)
    pub fn verbose_ctx(&self, context: &str, message: &str) {
        if self.verbose {
            eprintln!("[verbose:{}] {}", context, message);
        }
    }
}

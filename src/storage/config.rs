//! Configuration handling for Belmont
//!
//! Configuration is stored in `.belmont/config.toml` (project) and
//! `~/.config/belmont/config.toml` (global). Every field has a default, so
//! both files are optional.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::project::BELMONT_DIR;
use super::status::StatusOptions;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to parse configuration: {0}")]
    Parse(String),
}

/// Output format for commands
#[derive(
    Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq, clap::ValueEnum,
)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Settings for the status report
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct StatusConfig {
    /// Longest task name shown before truncation; `<= 0` disables truncation
    pub max_task_name: i32,

    /// Number of decisions shown under recent activity
    pub recent_decisions: usize,
}

impl Default for StatusConfig {
    fn default() -> Self {
        let options = StatusOptions::default();
        Self {
            max_task_name: options.max_task_name,
            recent_decisions: options.recent_decisions,
        }
    }
}

/// Project-level configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct ProjectConfig {
    pub status: StatusConfig,
}

/// Global user configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct GlobalConfig {
    /// Default output format (text or json)
    pub default_format: OutputFormat,
}

/// Combined configuration (global + project)
#[derive(Debug, Clone, Default)]
pub struct Config {
    pub project: ProjectConfig,
    pub global: GlobalConfig,
    /// Files that were actually read, for verbose output
    pub sources: Vec<PathBuf>,
}

impl Config {
    /// Loads global configuration plus the project configuration under `project_root`
    pub fn for_project(project_root: &Path) -> Result<Self> {
        let mut sources = Vec::new();

        let global = match Self::global_config_dir().map(|d| d.join("config.toml")) {
            Some(path) => match read_toml::<GlobalConfig>(&path)? {
                Some(config) => {
                    sources.push(path);
                    config
                }
                None => GlobalConfig::default(),
            },
            None => GlobalConfig::default(),
        };

        let project_path = Self::project_config_path(project_root);
        let project = match read_toml::<ProjectConfig>(&project_path)? {
            Some(config) => {
                sources.push(project_path);
                config
            }
            None => ProjectConfig::default(),
        };

        Ok(Self {
            project,
            global,
            sources,
        })
    }

    /// Returns the global config directory
    pub fn global_config_dir() -> Option<PathBuf> {
        ProjectDirs::from("dev", "belmont", "belmont").map(|dirs| dirs.config_dir().to_path_buf())
    }

    /// Returns the project config path for a root
    pub fn project_config_path(project_root: &Path) -> PathBuf {
        project_root.join(BELMONT_DIR).join("config.toml")
    }

    /// Finds the project root by looking for a `.belmont/` directory upward from `start`
    pub fn find_project_root(start: &Path) -> Option<PathBuf> {
        let mut current = start.to_path_buf();

        loop {
            if current.join(BELMONT_DIR).is_dir() {
                return Some(current);
            }

            if !current.pop() {
                return None;
            }
        }
    }

    /// Resolves the output format: flag, then global config
    pub fn output_format(&self, flag: Option<OutputFormat>) -> OutputFormat {
        flag.unwrap_or(self.global.default_format)
    }

    /// Resolves status options: flag, then project config
    pub fn status_options(&self, max_task_name: Option<i32>) -> StatusOptions {
        StatusOptions {
            max_task_name: max_task_name.unwrap_or(self.project.status.max_task_name),
            recent_decisions: self.project.status.recent_decisions,
        }
    }
}

/// Reads a TOML file, `None` if it does not exist
fn read_toml<T: serde::de::DeserializeOwned>(path: &Path) -> Result<Option<T>> {
    if !path.is_file() {
        return Ok(None);
    }

    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config: {}", path.display()))?;

    toml::from_str(&content)
        .map(Some)
        .map_err(|e| ConfigError::Parse(e.to_string()))
        .with_context(|| format!("Failed to parse config: {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn default_config() {
        let config = Config::default();

        assert_eq!(config.project.status.max_task_name, 55);
        assert_eq!(config.project.status.recent_decisions, 3);
        assert_eq!(config.global.default_format, OutputFormat::Text);
    }

    #[test]
    fn parse_project_config() {
        let toml = r#"
[status]
max_task_name = 0
"#;

        let config: ProjectConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.status.max_task_name, 0);
        assert_eq!(config.status.recent_decisions, 3);
    }

    #[test]
    fn parse_global_config() {
        let config: GlobalConfig = toml::from_str(r#"default_format = "json""#).unwrap();
        assert_eq!(config.default_format, OutputFormat::Json);
    }

    #[test]
    fn load_project_config_from_root() {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join(BELMONT_DIR)).unwrap();
        fs::write(
            Config::project_config_path(dir.path()),
            "[status]\nrecent_decisions = 5\n",
        )
        .unwrap();

        let config = Config::for_project(dir.path()).unwrap();
        assert_eq!(config.project.status.recent_decisions, 5);
        assert!(config
            .sources
            .contains(&Config::project_config_path(dir.path())));
    }

    #[test]
    fn invalid_project_config_is_an_error() {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join(BELMONT_DIR)).unwrap();
        fs::write(
            Config::project_config_path(dir.path()),
            "[status]\nmax_task_name = \"long\"\n",
        )
        .unwrap();

        assert!(Config::for_project(dir.path()).is_err());
    }

    #[test]
    fn find_project_root() {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join(BELMONT_DIR)).unwrap();

        let sub_dir = dir.path().join("sub").join("dir");
        fs::create_dir_all(&sub_dir).unwrap();

        let root = Config::find_project_root(&sub_dir);
        assert_eq!(root.as_deref(), Some(dir.path()));
    }

    #[test]
    fn flags_override_config() {
        let mut config = Config::default();
        config.project.status.max_task_name = 20;
        config.global.default_format = OutputFormat::Json;

        assert_eq!(config.status_options(None).max_task_name, 20);
        assert_eq!(config.status_options(Some(-1)).max_task_name, -1);
        assert_eq!(config.output_format(None), OutputFormat::Json);
        assert_eq!(
            config.output_format(Some(OutputFormat::Text)),
            OutputFormat::Text
        );
    }
}

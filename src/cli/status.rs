//! Status command

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use super::output::{Output, OutputFormat};
use super::render::render_text;
use crate::domain::StatusReport;
use crate::storage::{FsDocuments, Project};

/// Arguments of `belmont status`
#[derive(Debug, Clone, Default)]
pub struct StatusArgs {
    pub root: Option<PathBuf>,
    pub feature: Option<String>,
    pub max_task_name: Option<i32>,
}

/// Show feature or product status
pub fn run(args: StatusArgs, format: Option<OutputFormat>, verbose: bool) -> Result<()> {
    let project = open_project(args.root.as_deref())?;
    let output = Output::new(project.config().output_format(format), verbose);

    output.verbose_ctx(
        "status",
        &format!("Opened project at: {}", project.root().display()),
    );
    for source in &project.config().sources {
        output.verbose_ctx("config", &format!("Loaded {}", source.display()));
    }
    match args.feature.as_deref() {
        Some(slug) if !slug.is_empty() => {
            output.verbose_ctx("status", &format!("Reporting feature: {}", slug))
        }
        _ => output.verbose_ctx("status", "Reporting feature listing"),
    }

    let report = match project.status(&FsDocuments, args.max_task_name, args.feature.as_deref()) {
        Ok(report) => report,
        Err(e) => {
            if e.is_not_found() {
                output.verbose_ctx(
                    "status",
                    &format!("Missing planning state under {}", project.root().display()),
                );
            } else {
                output.verbose_ctx("status", "Planning documents could not be read");
            }
            output.failure(e.code(), &e.to_string());
            return Err(e.into());
        }
    };
    log_summary(&output, &report);

    if output.is_json() {
        output
            .data(&report)
            .context("Failed to serialize status report")?;
    } else {
        output.text(&render_text(&report));
    }

    Ok(())
}

/// Resolves the project root: the flag if given, else the enclosing project
fn open_project(root: Option<&Path>) -> Result<Project> {
    match root {
        Some(root) => {
            let root = std::path::absolute(root)
                .with_context(|| format!("Failed to resolve root: {}", root.display()))?;
            Project::open(root)
        }
        None => {
            let cwd = std::env::current_dir().context("Failed to read current directory")?;
            Project::discover(&cwd)
        }
    }
}

fn log_summary(output: &Output, report: &StatusReport) {
    if !output.is_verbose() {
        return;
    }
    match report {
        StatusReport::Feature(r) => output.verbose_ctx(
            "status",
            &format!(
                "Found {} tasks, {} milestones, {} blockers",
                r.tasks.len(),
                r.milestones.len(),
                r.blockers.len()
            ),
        ),
        StatusReport::Listing(r) => output.verbose_ctx(
            "status",
            &format!("Found {} features", r.features.len()),
        ),
    }
    output.verbose_ctx(
        "status",
        &format!("Overall status: {}", report.overall_status()),
    );
}

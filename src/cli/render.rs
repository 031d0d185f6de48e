//! Text rendering of status reports
//!
//! The layout is fixed: section order, glyphs and placeholder lines are
//! consumed by agents and compared verbatim by golden tests.

use std::fmt;

use crate::domain::{FeatureReport, ListingReport, StatusReport};

const TITLE: &str = "Belmont Status\n==============\n";
const NONE_BULLET: &str = "  - None";

/// Renders a report in the human-readable text form
pub fn render_text(report: &StatusReport) -> String {
    TextReport(report).to_string()
}

/// Display adapter producing the text form
pub struct TextReport<'a>(pub &'a StatusReport);

impl fmt::Display for TextReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            StatusReport::Feature(report) => write_feature(f, report),
            StatusReport::Listing(report) => write_listing(f, report),
        }
    }
}

fn write_feature(f: &mut fmt::Formatter<'_>, report: &FeatureReport) -> fmt::Result {
    let tech_plan = if report.tech_plan_ready {
        "✅ Ready"
    } else {
        "⚠ Not written (run /belmont:tech-plan to create)"
    };
    let counts = &report.task_counts;

    writeln!(f, "{}", TITLE)?;
    writeln!(f, "Feature: {}\n", report.feature)?;
    writeln!(f, "Tech Plan: {}\n", tech_plan)?;
    writeln!(f, "Status: {}\n", report.overall_status.decorated())?;
    writeln!(
        f,
        "Tasks: {} done, {} in progress, {} blocked, {} pending (of {} total)\n",
        counts.done, counts.in_progress, counts.blocked, counts.pending, counts.total
    )?;

    for task in &report.tasks {
        writeln!(f, "  {} {}: {}", task.status.glyph(), task.id, task.name)?;
    }
    writeln!(f)?;

    writeln!(f, "Milestones:")?;
    if report.milestones.is_empty() {
        writeln!(f, "  (none)")?;
    }
    for milestone in &report.milestones {
        writeln!(f, "  {} {}: {}", milestone.glyph(), milestone.id, milestone.name)?;
    }
    writeln!(f)?;

    writeln!(f, "Active Blockers:")?;
    write_bullets(f, &report.blockers)?;
    writeln!(f)?;

    writeln!(f, "Next Milestone:")?;
    match &report.next_milestone {
        Some(m) => writeln!(f, "  - {} - {}", m.id, m.name)?,
        None => writeln!(f, "{}", NONE_BULLET)?,
    }
    writeln!(f, "Next Individual Task:")?;
    match &report.next_task {
        Some(t) => writeln!(f, "  - {} - {}", t.id, t.name)?,
        None => writeln!(f, "{}", NONE_BULLET)?,
    }
    writeln!(f)?;

    writeln!(f, "Recent Activity:")?;
    writeln!(f, "---")?;
    match &report.last_completed {
        Some(t) => writeln!(f, "Last completed: {} - {}", t.id, t.name)?,
        None => writeln!(f, "Last completed: None")?,
    }
    writeln!(f, "Recent decisions:")?;
    write_bullets(f, &report.recent_decisions)
}

fn write_listing(f: &mut fmt::Formatter<'_>, report: &ListingReport) -> fmt::Result {
    let pr_faq = if report.pr_faq_ready {
        "✅ Written"
    } else {
        "⚠ Not written (run /belmont:working-backwards)"
    };
    let tech_plan = if report.tech_plan_ready {
        "✅ Ready"
    } else {
        "⚠ Not written"
    };

    writeln!(f, "{}", TITLE)?;
    writeln!(f, "Product: {}\n", report.product)?;
    writeln!(f, "PR/FAQ: {}", pr_faq)?;
    writeln!(f, "Master Tech Plan: {}\n", tech_plan)?;
    writeln!(f, "Status: {}\n", report.overall_status.decorated())?;

    writeln!(f, "Features:")?;
    if report.features.is_empty() {
        writeln!(
            f,
            "  (none — run /belmont:product-plan to create your first feature)"
        )?;
    }
    for feature in &report.features {
        writeln!(
            f,
            "  {} {:<20} {:<30} {}/{} tasks done",
            feature.status.glyph(),
            feature.slug,
            feature.name,
            feature.tasks_done,
            feature.tasks_total
        )?;
    }
    writeln!(f)?;
    writeln!(f, "Use --feature <slug> for detailed feature status.")
}

fn write_bullets(f: &mut fmt::Formatter<'_>, lines: &[String]) -> fmt::Result {
    if lines.is_empty() {
        return writeln!(f, "{}", NONE_BULLET);
    }
    for line in lines {
        writeln!(f, "  - {}", line)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{
        FeatureSummary, Milestone, OverallStatus, Task, TaskCounts, TaskStatus,
    };

    fn feature_report() -> FeatureReport {
        let tasks = vec![
            Task::new("P1-1", "Scaffold", TaskStatus::Complete),
            Task::new("P1-2", "Login form", TaskStatus::InProgress),
            Task::new("P1-3", "Password reset", TaskStatus::Blocked),
            Task::new("P2-1", "Sessions", TaskStatus::Pending),
        ];
        FeatureReport {
            feature: "Authentication".to_string(),
            tech_plan_ready: true,
            pr_faq_ready: false,
            overall_status: OverallStatus::InProgress,
            task_counts: TaskCounts::tally(&tasks),
            next_task: Some(tasks[1].clone()),
            last_completed: Some(tasks[0].clone()),
            tasks,
            milestones: vec![
                Milestone::new("M1", "Skeleton", true),
                Milestone::new("M2", "Flows", false),
            ],
            next_milestone: Some(Milestone::new("M2", "Flows", false)),
            blockers: vec!["Waiting on SMTP creds".to_string()],
            recent_decisions: vec!["Chose JWT".to_string(), "Kept bcrypt".to_string()],
        }
    }

    #[test]
    fn feature_golden() {
        let text = render_text(&StatusReport::Feature(feature_report()));
        let expected = "\
Belmont Status
==============

Feature: Authentication

Tech Plan: ✅ Ready

Status: 🟡 In Progress

Tasks: 1 done, 1 in progress, 1 blocked, 1 pending (of 4 total)

  ✅ P1-1: Scaffold
  🔄 P1-2: Login form
  🚫 P1-3: Password reset
  ⬜ P2-1: Sessions

Milestones:
  ✅ M1: Skeleton
  ⬜ M2: Flows

Active Blockers:
  - Waiting on SMTP creds

Next Milestone:
  - M2 - Flows
Next Individual Task:
  - P1-2 - Login form

Recent Activity:
---
Last completed: P1-1 - Scaffold
Recent decisions:
  - Chose JWT
  - Kept bcrypt
";
        assert_eq!(text, expected);
    }

    #[test]
    fn feature_placeholders() {
        let report = FeatureReport {
            feature: "Empty".to_string(),
            tech_plan_ready: false,
            pr_faq_ready: false,
            overall_status: OverallStatus::Blocked("Blocked on legal".to_string()),
            task_counts: TaskCounts::default(),
            tasks: vec![],
            milestones: vec![],
            blockers: vec![],
            next_milestone: None,
            next_task: None,
            last_completed: None,
            recent_decisions: vec![],
        };
        let text = render_text(&StatusReport::Feature(report));

        assert!(text.contains("Tech Plan: ⚠ Not written (run /belmont:tech-plan to create)\n"));
        assert!(text.contains("Status: Blocked on legal\n"));
        assert!(text.contains("Milestones:\n  (none)\n"));
        assert!(text.contains("Active Blockers:\n  - None\n"));
        assert!(text.contains("Next Milestone:\n  - None\nNext Individual Task:\n  - None\n"));
        assert!(text.contains("Last completed: None\nRecent decisions:\n  - None\n"));
    }

    #[test]
    fn listing_golden() {
        let report = ListingReport {
            product: "Acme".to_string(),
            tech_plan_ready: false,
            pr_faq_ready: true,
            overall_status: OverallStatus::InProgress,
            features: vec![
                FeatureSummary::new("auth", "Authentication", 3, 3),
                FeatureSummary::new("billing", "Billing", 1, 4),
                FeatureSummary::unreadable("search"),
            ],
        };
        let text = render_text(&StatusReport::Listing(report));
        let expected = format!(
            "\
Belmont Status
==============

Product: Acme

PR/FAQ: ✅ Written
Master Tech Plan: ⚠ Not written

Status: 🟡 In Progress

Features:
  ✅ {:<20} {:<30} 3/3 tasks done
  🟡 {:<20} {:<30} 1/4 tasks done
  🔴 {:<20} {:<30} 0/0 tasks done

Use --feature <slug> for detailed feature status.
",
            "auth", "Authentication", "billing", "Billing", "search", "search"
        );
        assert_eq!(text, expected);
    }

    #[test]
    fn empty_listing() {
        let report = ListingReport {
            product: "Unnamed Product".to_string(),
            tech_plan_ready: false,
            pr_faq_ready: false,
            overall_status: OverallStatus::NotStarted,
            features: vec![],
        };
        let text = render_text(&StatusReport::Listing(report));

        assert!(text.contains("PR/FAQ: ⚠ Not written (run /belmont:working-backwards)\n"));
        assert!(text.contains("Status: 🔴 Not Started\n"));
        assert!(text.contains(
            "Features:\n  (none — run /belmont:product-plan to create your first feature)\n\n"
        ));
    }
}

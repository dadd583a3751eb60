use anyhow::Result;
use contracts::domain::a001_project::aggregate::{Project, ProjectId};
use contracts::domain::a003_functional_service::aggregate::{group_by_package, FunctionalService};
use contracts::domain::a004_usage_indicator::aggregate::UsageIndicator;
use contracts::domain::common::AggregateId;
use contracts::enums::priority::priority_text;
use contracts::shared::maturity::lock::{get_deployed_options, get_progress_options, SelectableOption};
use contracts::shared::maturity::progress::{calculate_progress, ProgressSummary};
use contracts::shared::maturity::status::{get_service_status, indicators_by_service};
use contracts::shared::options::{level_text, DEPLOYED_OPTIONS, PROGRESS_OPTIONS};
use contracts::shared::text::fold_accents;

use crate::shared::data::{DataSource, Snapshot};
use crate::shared::format::{fit, format_optional_date, yes_no};
use crate::system::session::Session;

/// One service line of the matrix review
#[derive(Debug, Clone, PartialEq)]
pub struct MatrixLine {
    pub package: String,
    pub service: String,
    pub progress: &'static str,
    pub goal: &'static str,
    pub priority: &'static str,
    pub deployed: &'static str,
    pub due_date: String,
    pub status: &'static str,
    /// `technical service=status` of every reporting indicator
    pub reporting: Vec<String>,
    /// `field option` pairs the session user can no longer pick, for the
    /// progress, goal and deployed editors
    pub locked: Vec<String>,
    pub comment: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MatrixReview {
    pub project: String,
    pub summary: ProgressSummary,
    /// Raw mean, `NaN` without goals
    pub progress: f64,
    pub modifiable: bool,
    pub lines: Vec<MatrixLine>,
}

/// Find a visible project by id, then by name ignoring case and accents
pub fn find_project<'a>(session: &Session<'_>, projects: &'a [Project], key: &str) -> Result<&'a Project> {
    let visible = session.visible(projects);
    if let Ok(id) = ProjectId::from_string(key) {
        if let Some(project) = visible.iter().copied().find(|p| p.id == id) {
            return Ok(project);
        }
    }

    let wanted = fold_accents(key.trim());
    let mut by_name = visible.iter().copied().filter(|p| fold_accents(&p.name) == wanted);
    match (by_name.next(), by_name.next()) {
        (Some(project), None) => Ok(project),
        (Some(_), Some(_)) => anyhow::bail!("Several projects are named '{}', use the id", key),
        _ => anyhow::bail!("No visible project '{}'", key),
    }
}

/// Review of every functional service for `project`
pub fn build_review(
    session: &Session<'_>,
    project: &Project,
    services: &[FunctionalService],
    indicators: &[UsageIndicator],
) -> MatrixReview {
    let is_admin = session.is_admin();
    let mut lines = Vec::new();

    for package in group_by_package(services) {
        for service in &package.services {
            let entry = project.entry(&service.id);
            let progress = entry.and_then(|e| e.progress);
            let deployed = entry.map(|e| e.deployed).unwrap_or(false);

            let goal = entry.and_then(|e| e.goal);

            let mut locked = disabled_texts(
                "progress",
                get_progress_options(PROGRESS_OPTIONS, progress, is_admin),
            );
            locked.extend(disabled_texts(
                "goal",
                get_progress_options(PROGRESS_OPTIONS, goal, is_admin),
            ));
            locked.extend(disabled_texts(
                "deployed",
                get_deployed_options(DEPLOYED_OPTIONS, deployed, is_admin),
            ));

            let reporting = indicators_by_service(service, indicators)
                .into_iter()
                .flat_map(|(name, list)| list.into_iter().map(move |i| format!("{}={}", name, i.status)))
                .collect();

            lines.push(MatrixLine {
                package: package.name.to_string(),
                service: service.name.clone(),
                progress: level_text(progress),
                goal: level_text(goal),
                priority: priority_text(entry.and_then(|e| e.priority)),
                deployed: yes_no(deployed),
                due_date: format_optional_date(entry.and_then(|e| e.due_date.as_ref())),
                status: get_service_status(service, indicators)
                    .map(|o| o.text)
                    .unwrap_or("N/A"),
                reporting,
                locked,
                comment: entry.map(|e| e.comment.clone()).unwrap_or_default(),
            });
        }
    }

    MatrixReview {
        project: project.name.clone(),
        summary: ProgressSummary::of(project),
        progress: calculate_progress(project),
        modifiable: session.can_modify(project),
        lines,
    }
}

fn disabled_texts<V: 'static>(field: &str, options: Vec<SelectableOption<V>>) -> Vec<String> {
    options
        .into_iter()
        .filter(|o| o.disabled)
        .map(|o| format!("{} {}", field, o.text()))
        .collect()
}

/// Load indicators and build the review of the project designated by `key`
pub async fn review_project(
    source: &dyn DataSource,
    snapshot: &Snapshot,
    session: &Session<'_>,
    key: &str,
) -> Result<MatrixReview> {
    let project = find_project(session, &snapshot.projects, key)?;
    let indicators = match source.indicators(project).await {
        Ok(list) => list,
        Err(e) => {
            tracing::warn!("No indicators for project {}: {}", project.name, e);
            Vec::new()
        }
    };
    tracing::debug!("{} indicators for {}", indicators.len(), project.name);
    Ok(build_review(session, project, &snapshot.services, &indicators))
}

pub fn render(review: &MatrixReview) -> String {
    let mut out = format!(
        "{}: {}{}\n\n",
        review.project,
        review.summary,
        if review.modifiable { "" } else { " (read-only)" }
    );
    out.push_str(&format!(
        "{} {} {} {} {} {} {} {} {}\n",
        fit("PACKAGE", 14),
        fit("SERVICE", 26),
        fit("PROGRESS", 8),
        fit("GOAL", 5),
        fit("PRIO", 4),
        fit("DEPLOYED", 8),
        fit("DUE DATE", 10),
        fit("STATUS", 12),
        "LOCKED"
    ));
    for line in &review.lines {
        out.push_str(&format!(
            "{} {} {} {} {} {} {} {} {}\n",
            fit(&line.package, 14),
            fit(&line.service, 26),
            fit(line.progress, 8),
            fit(line.goal, 5),
            fit(line.priority, 4),
            fit(line.deployed, 8),
            fit(&line.due_date, 10),
            fit(line.status, 12),
            line.locked.join(", ")
        ));
        if !line.reporting.is_empty() {
            out.push_str(&format!("    indicators: {}\n", line.reporting.join(", ")));
        }
        if !line.comment.is_empty() {
            out.push_str(&format!("    {}\n", line.comment));
        }
    }
    out
}

use anyhow::Result;
use chrono::Local;
use contracts::domain::a001_project::aggregate::{Project, ProjectId};
use contracts::domain::a004_usage_indicator::aggregate::UsageIndicator;
use std::collections::HashMap;
use std::path::Path;

use super::export::write_csv;
use super::projection_builder::{build_rows, PlanContext};
use crate::shared::data::{DataSource, Snapshot};

/// Export the deployment plan of `projects` to `path`, returns the number of
/// project rows written
pub async fn export_deployment_plan(
    source: &dyn DataSource,
    snapshot: &Snapshot,
    projects: &[&Project],
    path: &Path,
) -> Result<usize> {
    let mut indicators: HashMap<ProjectId, Vec<UsageIndicator>> = HashMap::new();
    for project in projects {
        if project.docktor_group_name.is_empty() {
            continue;
        }
        match source.indicators(project).await {
            Ok(list) => {
                indicators.insert(project.id.clone(), list);
            }
            // Indicator columns fall back to N/A
            Err(e) => tracing::warn!("No indicators for project {}: {}", project.name, e),
        }
    }

    let context = PlanContext {
        entities: &snapshot.entities,
        users: &snapshot.users,
        services: &snapshot.services,
        indicators: &indicators,
    };
    let rows = build_rows(projects, &context, Local::now().date_naive());

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    let file = std::fs::File::create(path)
        .map_err(|e| anyhow::anyhow!("Cannot create {}: {}", path.display(), e))?;
    write_csv(&rows, std::io::BufWriter::new(file))?;

    tracing::info!(
        "Deployment plan exported to {} ({} projects, {} services)",
        path.display(),
        projects.len(),
        snapshot.services.len()
    );
    Ok(projects.len())
}

use contracts::domain::a001_project::aggregate::{Project, ProjectId};
use contracts::domain::a002_entity::aggregate::{get_by_type, EntityId, EntityType};
use contracts::shared::maturity::progress::ProgressSummary;
use contracts::shared::search::get_filtered_projects;
use std::collections::HashSet;

use crate::shared::data::Snapshot;
use crate::shared::format::fit;
use crate::system::session::Session;

/// One card of the project list
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectCard {
    pub id: ProjectId,
    pub name: String,
    pub progress: ProgressSummary,
    pub business_unit: String,
    pub service_center: String,
    pub domain: String,
    pub modifiable: bool,
}

/// Cards of the projects visible to the session, filtered and sorted by name
pub fn build_cards(snapshot: &Snapshot, session: &Session<'_>, filter: &str) -> Vec<ProjectCard> {
    let visible: HashSet<&ProjectId> = session
        .visible(&snapshot.projects)
        .into_iter()
        .map(|p| &p.id)
        .collect();
    let modifiable: HashSet<&ProjectId> = session
        .modifiable(&snapshot.projects)
        .into_iter()
        .map(|p| &p.id)
        .collect();

    get_filtered_projects(&snapshot.projects, &snapshot.entities, filter)
        .into_iter()
        .filter(|p| visible.contains(&p.id))
        .map(|p| card(snapshot, p, modifiable.contains(&p.id)))
        .collect()
}

fn card(snapshot: &Snapshot, project: &Project, modifiable: bool) -> ProjectCard {
    let name_of = |id: Option<&EntityId>, entity_type: EntityType| {
        get_by_type(&snapshot.entities, id, entity_type)
            .map(|e| e.name.clone())
            .unwrap_or_default()
    };

    ProjectCard {
        id: project.id.clone(),
        name: project.name.clone(),
        progress: ProgressSummary::of(project),
        business_unit: name_of(project.business_unit.as_ref(), EntityType::BusinessUnit),
        service_center: name_of(project.service_center.as_ref(), EntityType::ServiceCenter),
        domain: project.domain.join(", "),
        modifiable,
    }
}

/// Plain-text table of the cards
pub fn render(cards: &[ProjectCard]) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "{} {} {} {} {} {}\n",
        fit("PROJECT", 28),
        fit("PROGRESS", 8),
        fit("BUSINESS UNIT", 20),
        fit("SERVICE CENTER", 20),
        fit("CONSOLIDATION CRITERIA", 28),
        "EDIT"
    ));
    for card in cards {
        out.push_str(&format!(
            "{} {} {} {} {} {}\n",
            fit(&card.name, 28),
            fit(&card.progress.label(), 8),
            fit(&card.business_unit, 20),
            fit(&card.service_center, 20),
            fit(&card.domain, 28),
            if card.modifiable { "yes" } else { "-" }
        ));
    }
    out.push_str(&format!("{} project(s)\n", cards.len()));
    out
}

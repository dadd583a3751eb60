use chrono::NaiveDate;
use contracts::domain::a001_project::aggregate::{Project, ProjectId};
use contracts::domain::a002_entity::aggregate::{entity_name, Entity, EntityId};
use contracts::domain::a003_functional_service::aggregate::{group_by_package, FunctionalService};
use contracts::domain::a004_usage_indicator::aggregate::UsageIndicator;
use contracts::enums::priority::priority_text;
use contracts::shared::maturity::status::get_service_status;
use contracts::shared::options::level_text;
use contracts::system::users::{user_name, User};
use std::collections::HashMap;

use crate::shared::format::{format_date, format_optional_date, yes_no};

const NOT_AVAILABLE: &str = "N/A";

/// Columns describing the project itself
pub const PROJECT_COLUMNS: [&str; 18] = [
    "Project",
    "Description",
    "Business Unit",
    "Service Center",
    "Consolidation criteria",
    "Client",
    "Project Manager",
    "Deputies",
    "Docktor Group Name",
    "Docktor Group URL",
    "Technologies",
    "Deployment Mode",
    "Version Control System",
    "Deliverables in VCS",
    "Source Code in VCS",
    "Specifications in VCS",
    "Creation Date",
    "Last Update",
];

/// Columns repeated for every functional service
pub const SERVICE_COLUMNS: [&str; 6] = ["Progress", "Goal", "Priority", "Due Date", "Indicator", "Comment"];

/// Reference data needed to render rows
pub struct PlanContext<'a> {
    pub entities: &'a [Entity],
    pub users: &'a [User],
    pub services: &'a [FunctionalService],
    /// Indicators of each project's Docktor group
    pub indicators: &'a HashMap<ProjectId, Vec<UsageIndicator>>,
}

/// The three header rows followed by one row per project, in input order
pub fn build_rows(
    projects: &[&Project],
    context: &PlanContext<'_>,
    exported_on: NaiveDate,
) -> Vec<Vec<String>> {
    let packages = group_by_package(context.services);
    let ordered: Vec<&FunctionalService> = packages
        .iter()
        .flat_map(|p| p.services.iter().copied())
        .collect();

    let mut package_row = spanned("Matrix Maturity", PROJECT_COLUMNS.len());
    let mut service_row = spanned(
        &format!("Export Date: {}", exported_on.format("%d/%m/%Y")),
        PROJECT_COLUMNS.len(),
    );
    let mut column_row: Vec<String> = PROJECT_COLUMNS.iter().map(|c| c.to_string()).collect();

    for package in &packages {
        package_row.extend(spanned(package.name, package.services.len() * SERVICE_COLUMNS.len()));
        for service in &package.services {
            service_row.extend(spanned(&service.name, SERVICE_COLUMNS.len()));
            column_row.extend(SERVICE_COLUMNS.iter().map(|c| c.to_string()));
        }
    }

    let mut rows = vec![package_row, service_row, column_row];
    rows.extend(projects.iter().map(|p| project_row(p, &ordered, context)));
    rows
}

/// `label` followed by blanks up to `width` cells
fn spanned(label: &str, width: usize) -> Vec<String> {
    let mut cells = vec![String::new(); width.max(1)];
    cells[0] = label.to_string();
    cells
}

fn or_na(value: &str) -> String {
    if value.trim().is_empty() {
        NOT_AVAILABLE.to_string()
    } else {
        value.to_string()
    }
}

fn entity_cell(context: &PlanContext<'_>, id: Option<&EntityId>) -> String {
    or_na(entity_name(context.entities, id))
}

fn project_row(project: &Project, services: &[&FunctionalService], context: &PlanContext<'_>) -> Vec<String> {
    let deputies: Vec<String> = project
        .deputies
        .iter()
        .map(|d| or_na(user_name(context.users, Some(d))))
        .collect();

    let mut row = vec![
        project.name.clone(),
        project.description.clone(),
        entity_cell(context, project.business_unit.as_ref()),
        entity_cell(context, project.service_center.as_ref()),
        or_na(&project.domain.join(", ")),
        project.client.clone(),
        or_na(user_name(context.users, project.project_manager.as_ref())),
        deputies.join(", "),
        project.docktor_group_name.clone(),
        project.docktor_group_url.clone(),
        project.technologies.join(", "),
        project.mode.clone(),
        project.version_control_system.clone(),
        yes_no(project.deliverables).to_string(),
        yes_no(project.source_code).to_string(),
        yes_no(project.specifications).to_string(),
        format_date(&project.metadata.created),
        format_date(&project.metadata.updated),
    ];

    let indicators = context
        .indicators
        .get(&project.id)
        .map(Vec::as_slice)
        .unwrap_or(&[]);

    for service in services {
        let status = get_service_status(service, indicators)
            .map(|o| o.text)
            .unwrap_or(NOT_AVAILABLE)
            .to_string();

        match project.entry(&service.id) {
            Some(entry) => row.extend([
                level_text(entry.progress).to_string(),
                level_text(entry.goal).to_string(),
                priority_text(entry.priority).to_string(),
                format_optional_date(entry.due_date.as_ref()),
                status,
                entry.comment.clone(),
            ]),
            None => row.extend([
                NOT_AVAILABLE.to_string(),
                NOT_AVAILABLE.to_string(),
                NOT_AVAILABLE.to_string(),
                NOT_AVAILABLE.to_string(),
                status,
                String::new(),
            ]),
        }
    }
    row
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use contracts::domain::a001_project::aggregate::MatrixEntry;
    use contracts::domain::a002_entity::aggregate::EntityType;
    use contracts::domain::a003_functional_service::aggregate::ServiceId;
    use contracts::domain::common::EntityMetadata;
    use contracts::enums::priority::Priority;
    use contracts::enums::role::Role;
    use contracts::system::users::UserId;

    fn services() -> Vec<FunctionalService> {
        let mut ci = FunctionalService::new(ServiceId::new("ci"), "Continuous Integration", "Build");
        ci.position = 2;
        ci.services = Some(vec!["jenkins".into()]);
        let mut scm = FunctionalService::new(ServiceId::new("scm"), "Source Control", "Build");
        scm.position = 1;
        let wiki = FunctionalService::new(ServiceId::new("wiki"), "Wiki", "Agile");
        vec![ci, scm, wiki]
    }

    fn project() -> Project {
        let mut p = Project::new(ProjectId::new("p1"), "ProjectA");
        p.business_unit = Some(EntityId::new("bu1"));
        p.service_center = Some(EntityId::new("unknown"));
        p.project_manager = Some(UserId::new("u1"));
        p.deputies = vec![UserId::new("u1"), UserId::new("ghost")];
        p.domain = vec!["Rennes".into()];
        p.deliverables = true;
        p.docktor_group_name = "GROUP-A".into();
        p.metadata = EntityMetadata::new(
            Utc.with_ymd_and_hms(2017, 5, 1, 0, 0, 0).unwrap(),
            Utc.with_ymd_and_hms(2017, 6, 2, 0, 0, 0).unwrap(),
        );

        let mut ci = MatrixEntry::with_levels(ServiceId::new("ci"), Some(3), Some(5));
        ci.priority = Some(Priority::P1);
        ci.comment = "on track".into();
        ci.due_date = Some(Utc.with_ymd_and_hms(2017, 12, 31, 0, 0, 0).unwrap());
        p.matrix = vec![ci];
        p
    }

    fn build() -> Vec<Vec<String>> {
        let entities = vec![Entity::new(EntityId::new("bu1"), "Digital", EntityType::BusinessUnit)];
        let mut pm = User::new(UserId::new("u1"), "jdoe", Role::Pm);
        pm.display_name = "John Doe".into();
        let users = vec![pm];
        let services = services();
        let mut indicators = HashMap::new();
        indicators.insert(
            ProjectId::new("p1"),
            vec![UsageIndicator::new("GROUP-A", "jenkins", "Active")],
        );
        let context = PlanContext {
            entities: &entities,
            users: &users,
            services: &services,
            indicators: &indicators,
        };
        let project = project();
        build_rows(&[&project], &context, NaiveDate::from_ymd_opt(2017, 7, 14).unwrap())
    }

    #[test]
    fn test_header_rows() {
        let rows = build();
        let width = PROJECT_COLUMNS.len() + 3 * SERVICE_COLUMNS.len();
        assert!(rows.iter().all(|r| r.len() == width));

        // packages by name: Agile then Build
        assert_eq!(rows[0][0], "Matrix Maturity");
        assert_eq!(rows[0][18], "Agile");
        assert_eq!(rows[0][24], "Build");
        assert_eq!(rows[0][25], "");

        // services by position inside a package
        assert_eq!(rows[1][0], "Export Date: 14/07/2017");
        assert_eq!(rows[1][18], "Wiki");
        assert_eq!(rows[1][24], "Source Control");
        assert_eq!(rows[1][30], "Continuous Integration");

        assert_eq!(rows[2][0], "Project");
        assert_eq!(rows[2][17], "Last Update");
        assert_eq!(&rows[2][18..24], &SERVICE_COLUMNS.map(String::from)[..]);
    }

    #[test]
    fn test_project_row() {
        let rows = build();
        let row = &rows[3];
        assert_eq!(row[0], "ProjectA");
        assert_eq!(row[2], "Digital");
        assert_eq!(row[3], "N/A");
        assert_eq!(row[4], "Rennes");
        assert_eq!(row[6], "John Doe");
        assert_eq!(row[7], "John Doe, N/A");
        assert_eq!(row[13], "Yes");
        assert_eq!(row[14], "No");
        assert_eq!(row[16], "01/05/2017");
        assert_eq!(row[17], "02/06/2017");

        // Wiki: not in the matrix, no technical services
        assert_eq!(&row[18..24], &["N/A", "N/A", "N/A", "N/A", "N/A", ""]);
        // Source Control: not in the matrix
        assert_eq!(row[24], "N/A");
        // Continuous Integration
        assert_eq!(
            &row[30..36],
            &["60%", "100%", "P1", "31/12/2017", "Active", "on track"]
        );
    }
}

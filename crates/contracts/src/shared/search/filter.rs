use serde::Serialize;
use serde_json::Value;

use crate::domain::a001_project::aggregate::Project;
use crate::domain::a002_entity::aggregate::{entity_name, Entity};
use crate::domain::a004_usage_indicator::aggregate::UsageIndicator;
use crate::shared::search::query::ProjectQuery;
use crate::shared::text::contains_without_accents;
use crate::system::users::User;

/// Records searchable from a free-text box
pub trait Searchable {
    /// Whether the record matches the search text
    fn matches_filter(&self, filter: &str) -> bool;
}

/// JSON rendering of the record's field values, keys left out
fn values_json<T: Serialize>(record: &T) -> String {
    match serde_json::to_value(record) {
        Ok(Value::Object(map)) => {
            Value::Array(map.into_iter().map(|(_, v)| v).collect()).to_string()
        }
        Ok(other) => other.to_string(),
        Err(_) => String::new(),
    }
}

macro_rules! searchable_by_values {
    ($($t:ty),*) => {
        $(impl Searchable for $t {
            fn matches_filter(&self, filter: &str) -> bool {
                contains_without_accents(&values_json(self), filter)
            }
        })*
    };
}

searchable_by_values!(User, Entity, UsageIndicator);

/// Records matching `filter`, all of them when it is empty
pub fn filter_list<'a, T: Searchable>(items: &'a [T], filter: &str) -> Vec<&'a T> {
    if filter.is_empty() {
        return items.iter().collect();
    }
    items
        .iter()
        .filter(|item| item.matches_filter(filter))
        .collect()
}

fn matches_project(project: &Project, entities: &[Entity], query: &ProjectQuery) -> bool {
    let name_and_domain = serde_json::to_string(&(&project.name, &project.domain))
        .unwrap_or_default();
    if contains_without_accents(&name_and_domain, &query.text) {
        return true;
    }

    let org_match = [project.business_unit.as_ref(), project.service_center.as_ref()]
        .into_iter()
        .any(|id| contains_without_accents(entity_name(entities, id), &query.text));
    if org_match {
        return true;
    }

    query.predicate.matches(project)
}

/// Projects matching the search box, stably sorted by name
///
/// An empty filter keeps every project. Otherwise a project is kept when
/// its name or consolidation criteria, or the name of its business unit or
/// service center, contains the text, or when the query predicate holds.
pub fn get_filtered_projects<'a>(
    projects: &'a [Project],
    entities: &[Entity],
    filter: &str,
) -> Vec<&'a Project> {
    let mut result: Vec<&Project> = if filter.is_empty() {
        projects.iter().collect()
    } else {
        let query = ProjectQuery::parse(filter);
        projects
            .iter()
            .filter(|p| matches_project(p, entities, &query))
            .collect()
    };

    result.sort_by(|a, b| a.name.cmp(&b.name));
    result
}

/// Stable sort by role: admins first, deputies last
pub fn sort_users(users: &mut [&User]) {
    users.sort_by_key(|u| u.role.rank());
}

pub fn get_filtered_users<'a>(users: &'a [User], filter: &str) -> Vec<&'a User> {
    let mut result = filter_list(users, filter);
    sort_users(&mut result);
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_project::aggregate::{MatrixEntry, ProjectId};
    use crate::domain::a002_entity::aggregate::{EntityId, EntityType};
    use crate::domain::a003_functional_service::aggregate::ServiceId;
    use crate::enums::role::Role;
    use crate::shared::maturity::progress::calculate_progress;
    use crate::system::users::UserId;

    fn project(name: &str, domain: &[&str], levels: &[(Option<u32>, Option<u32>)]) -> Project {
        let mut p = Project::new(ProjectId::new(&name.to_lowercase()), name);
        p.domain = domain.iter().map(|d| d.to_string()).collect();
        p.matrix = levels
            .iter()
            .enumerate()
            .map(|(i, (progress, goal))| {
                MatrixEntry::with_levels(ServiceId::new(&format!("s{}", i)), *progress, *goal)
            })
            .collect();
        p
    }

    fn sample() -> (Vec<Project>, Vec<Entity>) {
        let mut zeta = project("Zeta", &["Offshore"], &[(Some(5), Some(5))]);
        zeta.service_center = Some(EntityId::new("sc1"));

        let mut alpha = project("Alpha", &["Énergie"], &[(Some(1), Some(2))]);
        alpha.business_unit = Some(EntityId::new("bu1"));
        alpha.service_center = Some(EntityId::new("missing"));

        let beta = project("Beta", &[], &[(Some(0), None)]);
        let gamma = project("Gamma", &[], &[]);
        let alpha_twin = project("Alpha", &[], &[(None, Some(3))]);

        let entities = vec![
            Entity::new(EntityId::new("bu1"), "Digital Factory", EntityType::BusinessUnit),
            Entity::new(EntityId::new("sc1"), "Nantes", EntityType::ServiceCenter),
        ];
        (vec![zeta, alpha, beta, gamma, alpha_twin], entities)
    }

    fn names(projects: &[&Project]) -> Vec<String> {
        projects
            .iter()
            .map(|p| format!("{}:{}", p.name, p.matrix.len()))
            .collect()
    }

    #[test]
    fn test_empty_filter_sorts_only() {
        let (projects, entities) = sample();
        let result = get_filtered_projects(&projects, &entities, "");
        assert_eq!(result.len(), projects.len());
        // stable: the first Alpha in input stays first
        assert_eq!(
            names(&result),
            vec!["Alpha:1", "Alpha:1", "Beta:1", "Gamma:0", "Zeta:1"]
        );
        assert_eq!(result[0].domain, vec!["Énergie"]);
    }

    #[test]
    fn test_text_matches_name_and_domain() {
        let (projects, entities) = sample();
        let result = get_filtered_projects(&projects, &entities, "energie");
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].name, "Alpha");

        let result = get_filtered_projects(&projects, &entities, "zet");
        assert_eq!(names(&result), vec!["Zeta:1"]);
    }

    #[test]
    fn test_text_matches_entity_names() {
        let (projects, entities) = sample();
        let result = get_filtered_projects(&projects, &entities, "nantes");
        assert_eq!(names(&result), vec!["Zeta:1"]);

        let result = get_filtered_projects(&projects, &entities, "factory");
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].domain, vec!["Énergie"]);
    }

    #[test]
    fn test_percentage_filter() {
        let (projects, entities) = sample();
        let result = get_filtered_projects(&projects, &entities, "50%");
        for p in &result {
            assert!(calculate_progress(p).floor() >= 50.0);
        }
        let expected = projects
            .iter()
            .filter(|p| calculate_progress(p).floor() >= 50.0)
            .count();
        assert_eq!(result.len(), expected);
        assert_eq!(result.len(), 2);

        let result = get_filtered_projects(&projects, &entities, "x%");
        assert!(result.is_empty());
    }

    #[test]
    fn test_keyword_filters() {
        let (projects, entities) = sample();
        assert_eq!(
            names(&get_filtered_projects(&projects, &entities, "not started")),
            vec!["Gamma:0"]
        );
        assert_eq!(
            names(&get_filtered_projects(&projects, &entities, "no goal")),
            vec!["Beta:1"]
        );
        assert_eq!(
            get_filtered_projects(&projects, &entities, "started").len(),
            4
        );
    }

    #[test]
    fn test_filter_list_and_users() {
        let mut deputy = User::new(UserId::new("u1"), "dlee", Role::Deputy);
        deputy.display_name = "Dana Lée".into();
        let admin = User::new(UserId::new("u2"), "root", Role::Admin);
        let pm = User::new(UserId::new("u3"), "plee", Role::Pm);
        let users = vec![deputy, admin, pm];

        let all = get_filtered_users(&users, "");
        let order: Vec<&str> = all.iter().map(|u| u.username.as_str()).collect();
        assert_eq!(order, vec!["root", "plee", "dlee"]);

        let lee = get_filtered_users(&users, "lee");
        let order: Vec<&str> = lee.iter().map(|u| u.username.as_str()).collect();
        assert_eq!(order, vec!["plee", "dlee"]);

        // field names are not searchable, only values
        assert!(filter_list(&users, "username").is_empty());
    }
}

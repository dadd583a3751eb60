use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::domain::a001_project::aggregate::{Project, ProjectId};
use crate::domain::a002_entity::aggregate::EntityId;
use crate::domain::common::aggregate_id::parse_raw_id;
use crate::domain::common::{AggregateId, AggregateRoot};
use crate::enums::role::Role;

/// Unique id of a user
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
pub struct UserId(pub String);

impl UserId {
    pub fn new(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl AggregateId for UserId {
    fn as_str(&self) -> &str {
        &self.0
    }

    fn from_string(s: &str) -> Result<Self, String> {
        parse_raw_id(s).map(UserId)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: UserId,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub display_name: String,
    pub username: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub role: Role,
    /// Entities supervised by an RI
    #[serde(default, deserialize_with = "null_as_empty")]
    pub entities: Vec<EntityId>,
}

impl User {
    pub fn new(id: UserId, username: impl Into<String>, role: Role) -> Self {
        Self {
            id,
            first_name: String::new(),
            last_name: String::new(),
            display_name: String::new(),
            username: username.into(),
            email: String::new(),
            role,
            entities: Vec::new(),
        }
    }

    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }

    /// Display name, falling back to the username
    pub fn name(&self) -> &str {
        if self.display_name.trim().is_empty() {
            &self.username
        } else {
            &self.display_name
        }
    }

    fn supervises(&self, project: &Project) -> bool {
        project.entity_ids().any(|id| self.entities.contains(id))
    }
}

impl AggregateRoot for User {
    type Id = UserId;

    fn id(&self) -> &Self::Id {
        &self.id
    }

    fn collection_name() -> &'static str {
        "users"
    }

    fn element_name() -> &'static str {
        "User"
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<EntityId>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(Option::<Vec<EntityId>>::deserialize(deserializer)?.unwrap_or_default())
}

/// Name of the referenced user, or empty when unknown
pub fn user_name<'a>(users: &'a [User], id: Option<&UserId>) -> &'a str {
    id.and_then(|id| users.iter().find(|u| &u.id == id))
        .map(User::name)
        .unwrap_or("")
}

// ============================================================================
// Project visibility
// ============================================================================

/// Projects the user can read
///
/// Admin: all. RI: projects of supervised entities, then projects managed or
/// deputized. PM and deputy: projects managed or deputized.
pub fn projects_for_user<'a>(user: &User, projects: &'a [Project]) -> Vec<&'a Project> {
    match user.role {
        Role::Admin => projects.iter().collect(),
        Role::Ri => dedup_by_id(
            projects
                .iter()
                .filter(|p| user.supervises(p))
                .chain(projects.iter().filter(|p| p.is_managed_by(&user.id))),
        ),
        Role::Pm | Role::Deputy => projects
            .iter()
            .filter(|p| p.is_managed_by(&user.id))
            .collect(),
    }
}

/// Projects the user can modify
///
/// Same as [`projects_for_user`], except an RI only gets supervised entities.
pub fn modifiable_projects_for_user<'a>(user: &User, projects: &'a [Project]) -> Vec<&'a Project> {
    match user.role {
        Role::Ri => projects.iter().filter(|p| user.supervises(p)).collect(),
        _ => projects_for_user(user, projects),
    }
}

pub fn can_modify(user: &User, project: &Project) -> bool {
    match user.role {
        Role::Admin => true,
        Role::Ri => user.supervises(project),
        Role::Pm | Role::Deputy => project.is_managed_by(&user.id),
    }
}

fn dedup_by_id<'a>(projects: impl Iterator<Item = &'a Project>) -> Vec<&'a Project> {
    let mut seen: HashSet<&ProjectId> = HashSet::new();
    projects.filter(|p| seen.insert(p.id())).collect()
}

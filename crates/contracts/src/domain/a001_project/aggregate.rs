use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::a002_entity::aggregate::EntityId;
use crate::domain::a003_functional_service::aggregate::ServiceId;
use crate::domain::common::aggregate_id::parse_raw_id;
use crate::domain::common::{AggregateId, AggregateRoot, EntityMetadata};
use crate::enums::level::{level_format, Level};
use crate::enums::priority::{deployed_format, priority_format, Priority};
use crate::system::users::UserId;

// ============================================================================
// ID Type
// ============================================================================

/// Unique id of a project
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
pub struct ProjectId(pub String);

impl ProjectId {
    pub fn new(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl AggregateId for ProjectId {
    fn as_str(&self) -> &str {
        &self.0
    }

    fn from_string(s: &str) -> Result<Self, String> {
        parse_raw_id(s).map(ProjectId)
    }
}

// ============================================================================
// Matrix
// ============================================================================

/// One project's stance on one functional service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatrixEntry {
    pub service: ServiceId,

    #[serde(default, with = "level_format")]
    pub progress: Level,

    #[serde(default, with = "level_format")]
    pub goal: Level,

    #[serde(default, with = "priority_format")]
    pub priority: Option<Priority>,

    #[serde(default, with = "deployed_format")]
    pub deployed: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<DateTime<Utc>>,

    #[serde(default)]
    pub comment: String,
}

impl MatrixEntry {
    /// Fresh row, created the first time a user touches a service
    pub fn new(service: ServiceId) -> Self {
        Self {
            service,
            progress: None,
            goal: None,
            priority: None,
            deployed: false,
            due_date: None,
            comment: String::new(),
        }
    }

    pub fn with_levels(service: ServiceId, progress: Level, goal: Level) -> Self {
        Self {
            progress,
            goal,
            ..Self::new(service)
        }
    }
}

// ============================================================================
// Aggregate Root
// ============================================================================

/// Project tracked in the maturity matrix
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    #[serde(default)]
    pub id: ProjectId,

    pub name: String,

    #[serde(default)]
    pub description: String,

    /// Consolidation criteria, free-text tags
    #[serde(default, deserialize_with = "null_as_default")]
    pub domain: Vec<String>,

    #[serde(default)]
    pub client: String,

    #[serde(default)]
    pub project_manager: Option<UserId>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub deputies: Vec<UserId>,

    #[serde(default)]
    pub business_unit: Option<EntityId>,

    #[serde(default)]
    pub service_center: Option<EntityId>,

    #[serde(default)]
    pub docktor_group_name: String,

    #[serde(default, rename = "docktorGroupURL")]
    pub docktor_group_url: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub technologies: Vec<String>,

    /// Deployment mode: SaaS, DMZ, Isolated Network
    #[serde(default)]
    pub mode: String,

    #[serde(default)]
    pub version_control_system: String,

    /// Deliverables stored in version control
    #[serde(default)]
    pub deliverables: bool,

    #[serde(default)]
    pub specifications: bool,

    #[serde(default)]
    pub source_code: bool,

    /// Set when the whole matrix is declared not applicable
    #[serde(default, rename = "isCDKApplicable")]
    pub is_cdk_applicable: bool,

    #[serde(default, deserialize_with = "null_as_default")]
    pub matrix: Vec<MatrixEntry>,

    #[serde(flatten)]
    pub metadata: EntityMetadata,
}

impl Project {
    /// Create a project with an empty matrix
    pub fn new(id: ProjectId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            ..Self::default()
        }
    }

    /// Matrix row of a service, if the project ever touched it
    pub fn entry(&self, service: &ServiceId) -> Option<&MatrixEntry> {
        self.matrix.iter().find(|m| &m.service == service)
    }

    /// At least one matrix row with a goal
    pub fn has_goal(&self) -> bool {
        self.matrix.iter().any(|m| m.goal.is_some())
    }

    /// At least one matrix row with a progress, goal or not
    pub fn has_progress(&self) -> bool {
        self.matrix.iter().any(|m| m.progress.is_some())
    }

    /// Entity ids the project is attached to
    pub fn entity_ids(&self) -> impl Iterator<Item = &EntityId> {
        self.business_unit
            .iter()
            .chain(self.service_center.iter())
            .filter(|id| !id.0.is_empty())
    }

    pub fn is_managed_by(&self, user: &UserId) -> bool {
        self.project_manager.as_ref() == Some(user) || self.deputies.contains(user)
    }

    /// Validate fields
    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("Project Name is required".into());
        }
        if self.entity_ids().next().is_none() {
            return Err("Service Center or Business Unit is required".into());
        }

        let mut seen = std::collections::HashSet::new();
        for entry in &self.matrix {
            if !seen.insert(&entry.service) {
                return Err(format!(
                    "Service {} appears twice in the matrix",
                    entry.service.as_str()
                ));
            }
        }

        Ok(())
    }
}

impl AggregateRoot for Project {
    type Id = ProjectId;

    fn id(&self) -> &Self::Id {
        &self.id
    }

    fn collection_name() -> &'static str {
        "projects"
    }

    fn element_name() -> &'static str {
        "Project"
    }
}

/// The backend sends `null` for never-filled lists
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: serde::Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

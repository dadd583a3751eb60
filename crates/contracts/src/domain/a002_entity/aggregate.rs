use serde::{Deserialize, Serialize};

use crate::domain::common::aggregate_id::parse_raw_id;
use crate::domain::common::{AggregateId, AggregateRoot};

// ============================================================================
// ID Type
// ============================================================================

/// Unique id of an entity
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
pub struct EntityId(pub String);

impl EntityId {
    pub fn new(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl AggregateId for EntityId {
    fn as_str(&self) -> &str {
        &self.0
    }

    fn from_string(s: &str) -> Result<Self, String> {
        parse_raw_id(s).map(EntityId)
    }
}

// ============================================================================
// Entity type
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum EntityType {
    BusinessUnit,
    ServiceCenter,
}

impl EntityType {
    pub fn code(&self) -> &'static str {
        match self {
            EntityType::BusinessUnit => "businessUnit",
            EntityType::ServiceCenter => "serviceCenter",
        }
    }

    pub fn all() -> Vec<EntityType> {
        vec![EntityType::BusinessUnit, EntityType::ServiceCenter]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::all().into_iter().find(|t| t.code() == code)
    }
}

// ============================================================================
// Aggregate Root
// ============================================================================

/// Business unit or service center owning projects
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entity {
    pub id: EntityId,
    pub name: String,
    #[serde(rename = "type")]
    pub entity_type: EntityType,
}

impl Entity {
    pub fn new(id: EntityId, name: impl Into<String>, entity_type: EntityType) -> Self {
        Self {
            id,
            name: name.into(),
            entity_type,
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("Name is required".into());
        }
        Ok(())
    }
}

impl AggregateRoot for Entity {
    type Id = EntityId;

    fn id(&self) -> &Self::Id {
        &self.id
    }

    fn collection_name() -> &'static str {
        "entities"
    }

    fn element_name() -> &'static str {
        "Entity"
    }
}

/// Entity referenced by `id`, if it is of the requested type
pub fn get_by_type<'a>(
    entities: &'a [Entity],
    id: Option<&EntityId>,
    entity_type: EntityType,
) -> Option<&'a Entity> {
    let id = id?;
    entities
        .iter()
        .find(|e| &e.id == id && e.entity_type == entity_type)
}

/// Name of the referenced entity, or empty when unknown
pub fn entity_name<'a>(entities: &'a [Entity], id: Option<&EntityId>) -> &'a str {
    id.and_then(|id| entities.iter().find(|e| &e.id == id))
        .map(|e| e.name.as_str())
        .unwrap_or("")
}

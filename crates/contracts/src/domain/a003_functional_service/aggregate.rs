use serde::{Deserialize, Serialize};

use crate::domain::common::aggregate_id::parse_raw_id;
use crate::domain::common::{AggregateId, AggregateRoot};

// ============================================================================
// ID Type
// ============================================================================

/// Unique id of a functional service
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
pub struct ServiceId(pub String);

impl ServiceId {
    pub fn new(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl AggregateId for ServiceId {
    fn as_str(&self) -> &str {
        &self.0
    }

    fn from_string(s: &str) -> Result<Self, String> {
        parse_raw_id(s).map(ServiceId)
    }
}

// ============================================================================
// Aggregate Root
// ============================================================================

/// Capability tracked in the matrix, backed by zero or more technical services
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FunctionalService {
    pub id: ServiceId,
    pub name: String,
    #[serde(default)]
    pub package: String,
    #[serde(default)]
    pub position: i32,
    /// Technical service names; `None` when the list was never defined
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub services: Option<Vec<String>>,
}

impl FunctionalService {
    pub fn new(id: ServiceId, name: impl Into<String>, package: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            package: package.into(),
            position: 0,
            services: None,
        }
    }

    /// Technical service names, empty when undefined
    pub fn technical_services(&self) -> &[String] {
        self.services.as_deref().unwrap_or(&[])
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("Name is required".into());
        }
        if self.package.trim().is_empty() {
            return Err("Package is required".into());
        }
        Ok(())
    }
}

impl AggregateRoot for FunctionalService {
    type Id = ServiceId;

    fn id(&self) -> &Self::Id {
        &self.id
    }

    fn collection_name() -> &'static str {
        "services"
    }

    fn element_name() -> &'static str {
        "Functional service"
    }
}

/// Package with ordered services
#[derive(Debug, Clone, PartialEq)]
pub struct ServicePackage<'a> {
    pub name: &'a str,
    pub services: Vec<&'a FunctionalService>,
}

/// Packages sorted by name, services inside sorted by position
pub fn group_by_package(services: &[FunctionalService]) -> Vec<ServicePackage<'_>> {
    let mut packages: Vec<ServicePackage<'_>> = Vec::new();
    for service in services {
        match packages.iter_mut().find(|p| p.name == service.package) {
            Some(package) => package.services.push(service),
            None => packages.push(ServicePackage {
                name: &service.package,
                services: vec![service],
            }),
        }
    }

    packages.sort_by(|a, b| a.name.cmp(b.name));
    for package in &mut packages {
        package.services.sort_by_key(|s| s.position);
    }
    packages
}

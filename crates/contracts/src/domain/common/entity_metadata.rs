use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Lifecycle timestamps of an aggregate instance
///
/// Missing timestamps deserialize to the Unix epoch.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EntityMetadata {
    /// Creation date
    #[serde(default)]
    pub created: DateTime<Utc>,
    /// Last update
    #[serde(default)]
    pub updated: DateTime<Utc>,
}

impl EntityMetadata {
    pub fn new(created: DateTime<Utc>, updated: DateTime<Utc>) -> Self {
        Self { created, updated }
    }
}

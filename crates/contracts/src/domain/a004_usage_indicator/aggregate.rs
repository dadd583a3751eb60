use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Observed activity of one technical service for one Docktor group
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UsageIndicator {
    #[serde(default)]
    pub docktor_group: String,
    /// Technical service name, matched against `FunctionalService::services`
    pub service: String,
    #[serde(default)]
    pub service_instance: String,
    /// Status text, looked up in the status catalog
    pub status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated: Option<DateTime<Utc>>,
}

impl UsageIndicator {
    pub fn new(
        docktor_group: impl Into<String>,
        service: impl Into<String>,
        status: impl Into<String>,
    ) -> Self {
        Self {
            docktor_group: docktor_group.into(),
            service: service.into(),
            service_instance: String::new(),
            status: status.into(),
            updated: None,
        }
    }
}

/// Indicators reported for one Docktor group
pub fn for_group<'a>(indicators: &'a [UsageIndicator], group: &str) -> Vec<&'a UsageIndicator> {
    if group.is_empty() {
        return Vec::new();
    }
    indicators
        .iter()
        .filter(|i| i.docktor_group == group)
        .collect()
}

//! Option catalogs of the maturity matrix
//!
//! Compile-time tables, never mutated. Order matters: the admin lock works
//! on positions and the status resolver compares `value`s.

use crate::enums::level::Level;
use crate::enums::priority::Priority;

/// One selectable value with its label, tooltip and UI colour
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogOption<V> {
    pub value: V,
    pub text: &'static str,
    pub title: &'static str,
    pub color: &'static str,
}

/// Progress and goal levels, "N/A" first
pub static PROGRESS_OPTIONS: &[CatalogOption<Level>] = &[
    CatalogOption {
        value: None,
        text: "N/A",
        title: "Not applicable",
        color: "black",
    },
    CatalogOption {
        value: Some(0),
        text: "0%",
        title: "No action launched on the service",
        color: "grey",
    },
    CatalogOption {
        value: Some(1),
        text: "20%",
        title: "Deployed empty by CDK core team",
        color: "red",
    },
    CatalogOption {
        value: Some(2),
        text: "40%",
        title: "Configured by project team and ready to use",
        color: "orange",
    },
    CatalogOption {
        value: Some(3),
        text: "60%",
        title: "Used by leaders or seniors",
        color: "yellow",
    },
    CatalogOption {
        value: Some(4),
        text: "80%",
        title: "Team trained and aware of the benefits",
        color: "olive",
    },
    CatalogOption {
        value: Some(5),
        text: "100%",
        title: "Fully used by the team",
        color: "green",
    },
];

/// Usage statuses, ordered by increasing activity
pub static STATUS_OPTIONS: &[CatalogOption<u8>] = &[
    CatalogOption {
        value: 0,
        text: "Empty",
        title: "The service was never used by the project",
        color: "black",
    },
    CatalogOption {
        value: 1,
        text: "Undetermined",
        title: "We cannot determine if the service is active or not",
        color: "red",
    },
    CatalogOption {
        value: 2,
        text: "Inactive",
        title: "The service has not been active recently",
        color: "orange",
    },
    CatalogOption {
        value: 3,
        text: "Active",
        title: "The service has been recently active",
        color: "green",
    },
];

pub static PRIORITY_OPTIONS: &[CatalogOption<Option<Priority>>] = &[
    CatalogOption {
        value: None,
        text: "N/A",
        title: "Not applicable",
        color: "",
    },
    CatalogOption {
        value: Some(Priority::P0),
        text: "P0",
        title: "High priority",
        color: "",
    },
    CatalogOption {
        value: Some(Priority::P1),
        text: "P1",
        title: "Medium priority",
        color: "",
    },
    CatalogOption {
        value: Some(Priority::P2),
        text: "P2",
        title: "Low priority",
        color: "",
    },
];

/// Deployment flag, "not deployed" first
pub static DEPLOYED_OPTIONS: &[CatalogOption<bool>] = &[
    CatalogOption {
        value: false,
        text: "No",
        title: "The service is not deployed",
        color: "",
    },
    CatalogOption {
        value: true,
        text: "Yes",
        title: "The service has been deployed",
        color: "",
    },
];

/// First option of `catalog` holding `value`
pub fn option_for<V: PartialEq>(
    catalog: &'static [CatalogOption<V>],
    value: &V,
) -> Option<&'static CatalogOption<V>> {
    catalog.iter().find(|o| &o.value == value)
}

/// Status option whose text matches exactly
pub fn status_by_text(text: &str) -> Option<&'static CatalogOption<u8>> {
    STATUS_OPTIONS.iter().find(|o| o.text == text)
}

/// "N/A", "0%" .. "100%"; out-of-range levels are shown as "N/A"
pub fn level_text(level: Level) -> &'static str {
    option_for(PROGRESS_OPTIONS, &level)
        .map(|o| o.text)
        .unwrap_or(PROGRESS_OPTIONS[0].text)
}

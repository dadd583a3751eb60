use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Priority of a service in a project's matrix
///
/// "N/A" is not a variant: an entry without priority holds `None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Priority {
    P0,
    P1,
    P2,
}

/// Wire value of an unset priority
pub const NO_PRIORITY: &str = "N/A";

impl Priority {
    /// Priority code
    pub fn code(&self) -> &'static str {
        match self {
            Priority::P0 => "P0",
            Priority::P1 => "P1",
            Priority::P2 => "P2",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Priority::P0 => "High priority",
            Priority::P1 => "Medium priority",
            Priority::P2 => "Low priority",
        }
    }

    pub fn all() -> Vec<Priority> {
        vec![Priority::P0, Priority::P1, Priority::P2]
    }

    /// Parse from code
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim() {
            "P0" => Some(Priority::P0),
            "P1" => Some(Priority::P1),
            "P2" => Some(Priority::P2),
            _ => None,
        }
    }
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Text shown for an optional priority
pub fn priority_text(priority: Option<Priority>) -> &'static str {
    priority.map(|p| p.code()).unwrap_or(NO_PRIORITY)
}

/// Serde adapter: `"N/A"`, empty, unknown or missing become `None`.
pub mod priority_format {
    use super::*;

    pub fn serialize<S>(priority: &Option<Priority>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(priority_text(*priority))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<Priority>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Option::<String>::deserialize(deserializer)?;
        Ok(raw.as_deref().and_then(Priority::from_code))
    }
}

/// Serde adapter for the deployment flag, stored as `"yes"` / `"no"`.
pub mod deployed_format {
    use super::*;

    pub fn serialize<S>(deployed: &bool, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(if *deployed { "yes" } else { "no" })
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<bool, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Option::<String>::deserialize(deserializer)?;
        Ok(raw
            .map(|s| s.trim().eq_ignore_ascii_case("yes"))
            .unwrap_or(false))
    }
}

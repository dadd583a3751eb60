//! Progress and goal levels of a matrix entry.
//!
//! The backend stores a level as an integer where `-1` means "not
//! applicable". Here the sentinel is `None`, so `Some(0)` ("0%") and
//! "N/A" can never be confused.

use serde::{Deserialize, Deserializer, Serializer};

/// Level index into the progress catalog: `Some(0)` is 0%, `Some(5)` is 100%.
pub type Level = Option<u32>;

/// Wire value of an unset level
pub const NOT_APPLICABLE: i64 = -1;

/// Serde adapter mapping `-1`/negative/null to `None` and back.
///
/// Use with `#[serde(default, with = "crate::enums::level::level_format")]`.
pub mod level_format {
    use super::*;

    pub fn serialize<S>(level: &Level, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match level {
            Some(v) => serializer.serialize_i64(i64::from(*v)),
            None => serializer.serialize_i64(NOT_APPLICABLE),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Level, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Option::<i64>::deserialize(deserializer)?;
        Ok(raw.and_then(|v| u32::try_from(v).ok()))
    }
}

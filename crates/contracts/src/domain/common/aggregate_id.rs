use serde::{de::DeserializeOwned, Serialize};
use std::hash::Hash;

/// Identifier of an aggregate
///
/// The backend hands out opaque hex ids, so every id is a string newtype.
pub trait AggregateId:
    Clone + PartialEq + Eq + Hash + Serialize + DeserializeOwned + std::fmt::Debug
{
    /// Borrow the raw id
    fn as_str(&self) -> &str;

    /// Id as string
    fn as_string(&self) -> String {
        self.as_str().to_string()
    }

    /// Build an id from a string
    fn from_string(s: &str) -> Result<Self, String>;
}

/// Shared validation for string ids: trimmed and non-empty.
pub(crate) fn parse_raw_id(s: &str) -> Result<String, String> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return Err("Invalid id: empty string".into());
    }
    Ok(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_raw_id() {
        assert_eq!(parse_raw_id(" 5901c690 ").unwrap(), "5901c690");
        assert!(parse_raw_id("   ").is_err());
        assert!(parse_raw_id("").is_err());
    }
}

//! Unique identifiers for stored shops.
//!
//! `ShopId` is assigned when a record enters the store and never changes,
//! so deleting by id cannot hit the wrong row.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Length of the short display form.
const SHORT_LEN: usize = 8;

/// A unique identifier for a shop record.
///
/// Uses UUID v4 internally for globally unique identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ShopId(Uuid);

impl ShopId {
    /// Generate a new random shop ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Get a short representation (first 8 characters).
    pub fn short(&self) -> String {
        self.0.to_string()[..SHORT_LEN].to_string()
    }

    /// Whether the textual form of this id starts with `prefix`.
    ///
    /// Comparison ignores ASCII case, as UUIDs are case-insensitive.
    pub fn matches_prefix(&self, prefix: &str) -> bool {
        let full = self.0.to_string();
        full.len() >= prefix.len() && full[..prefix.len()].eq_ignore_ascii_case(prefix)
    }
}

impl Default for ShopId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ShopId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ShopId {
    type Err = ShopIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let uuid = Uuid::parse_str(s).map_err(|_| ShopIdError::InvalidFormat(s.to_string()))?;
        Ok(Self(uuid))
    }
}

/// Error type for ShopId parsing.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ShopIdError {
    #[error("invalid shop ID format: {0}")]
    InvalidFormat(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shop_id_generation() {
        let id1 = ShopId::new();
        let id2 = ShopId::new();
        assert_ne!(id1, id2);
    }

    #[test]
    fn test_shop_id_short() {
        let id = ShopId::new();
        let short = id.short();
        assert_eq!(short.len(), 8);
        assert!(id.matches_prefix(&short));
    }

    #[test]
    fn test_shop_id_prefix_ignores_case() {
        let id: ShopId = "1f0e4c2a-0000-4000-8000-000000000000".parse().unwrap();
        assert!(id.matches_prefix("1F0E"));
        assert!(!id.matches_prefix("1f0f"));
        assert!(!id.matches_prefix("1f0e4c2a-0000-4000-8000-0000000000001"));
    }

    #[test]
    fn test_shop_id_roundtrip() {
        let id = ShopId::new();
        let parsed: ShopId = id.to_string().parse().unwrap();
        assert_eq!(id, parsed);
    }

    #[test]
    fn test_shop_id_rejects_garbage() {
        assert!("not-an-id".parse::<ShopId>().is_err());
    }
}

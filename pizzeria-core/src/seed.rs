//! Seed menu loading
//!
//! The catalog is initialized once from a fixed seed at startup. The seed
//! content is illustrative; its structure is contractual: every category
//! key must name a known [`Category`](crate::models::Category) and every
//! entry must pass create validation.

use std::collections::BTreeMap;

use serde::Deserialize;

use crate::error::{CatalogError, CatalogResult};
use crate::models::MenuItemDraft;

/// Embedded default menu, taken from the demo restaurant data
const DEFAULT_MENU_JSON: &str = include_str!("../seed/menu.json");

/// Parsed seed data, keyed by category name
///
/// Keys stay untyped strings until the store validates them, so a broken
/// seed reports the offending name instead of failing inside serde.
#[derive(Debug, Clone, Deserialize)]
pub struct SeedMenu {
    pub categories: BTreeMap<String, Vec<MenuItemDraft>>,
}

impl SeedMenu {
    /// Parse a seed menu from a JSON document
    pub fn from_json(json: &str) -> CatalogResult<Self> {
        serde_json::from_str(json).map_err(|e| CatalogError::Seed(e.to_string()))
    }

    /// The embedded default menu
    pub fn embedded() -> CatalogResult<Self> {
        Self::from_json(DEFAULT_MENU_JSON)
    }

    /// An empty seed (no items in any category)
    pub fn empty() -> Self {
        Self {
            categories: BTreeMap::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_seed_parses() {
        let seed = SeedMenu::embedded().unwrap();
        assert!(seed.categories.len() >= 2);
        assert!(seed.categories.values().all(|items| !items.is_empty()));
    }

    #[test]
    fn test_malformed_seed_reports_error() {
        let err = SeedMenu::from_json("{ not json").unwrap_err();
        assert!(matches!(err, CatalogError::Seed(_)));
    }
}

//! Catalog change events
//!
//! Emitted synchronously to registered observers on every successful
//! mutation, so a host UI can re-render without polling. Serializable so
//! hosts behind an IPC or web-view boundary can consume them as JSON.

use serde::{Deserialize, Serialize};

use crate::models::{Category, MenuItem};

/// A single observable change to the catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum CatalogEvent {
    /// An item was appended to a category
    ItemAdded { category: Category, item: MenuItem },
    /// An item was removed from a category
    ItemRemoved { category: Category, id: i64 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_serialization() {
        let event = CatalogEvent::ItemRemoved {
            category: Category::Drinks,
            id: 42,
        };

        let json = serde_json::to_string(&event).unwrap();
        let parsed: CatalogEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, event);
    }
}

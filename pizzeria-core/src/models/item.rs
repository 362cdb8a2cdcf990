//! Menu Item Model

use serde::{Deserialize, Serialize};

use crate::error::{CatalogError, CatalogResult};

/// Menu item entity
///
/// `id` is unique across the whole catalog and never reused, even after
/// deletion. `image` is an opaque resource locator; it is stored as-is and
/// never interpreted or validated here. Any sanitization before rendering
/// is the host's responsibility.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuItem {
    pub id: i64,
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub image: String,
}

/// Create menu item payload
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuItemDraft {
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub image: String,
}

impl MenuItemDraft {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        image: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            image: image.into(),
        }
    }

    /// Check required fields. `image` is unconstrained: empty or malformed
    /// locators are accepted.
    pub(crate) fn validate(&self) -> CatalogResult<()> {
        if self.name.is_empty() {
            return Err(CatalogError::Validation { field: "name" });
        }
        if self.description.is_empty() {
            return Err(CatalogError::Validation { field: "description" });
        }
        Ok(())
    }

    /// Attach a store-issued id, producing the final entity
    pub(crate) fn into_item(self, id: i64) -> MenuItem {
        MenuItem {
            id,
            name: self.name,
            description: self.description,
            image: self.image,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_rejects_empty_name() {
        let draft = MenuItemDraft::new("", "description", "");
        assert_eq!(
            draft.validate(),
            Err(CatalogError::Validation { field: "name" })
        );
    }

    #[test]
    fn test_validate_rejects_empty_description() {
        let draft = MenuItemDraft::new("Margarita", "", "");
        assert_eq!(
            draft.validate(),
            Err(CatalogError::Validation { field: "description" })
        );
    }

    #[test]
    fn test_validate_accepts_empty_image() {
        let draft = MenuItemDraft::new("Margarita", "Tomato, mozzarella, basil", "");
        assert!(draft.validate().is_ok());
    }
}

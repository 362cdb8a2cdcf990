//! Intent-based dispatch surface
//!
//! The single entry point a host UI drives the catalog through. Intents
//! carry category names as untyped strings, exactly as they arrive from
//! UI events, and are validated here; a failed intent leaves every piece
//! of state unchanged.
//!
//! The serde shape keeps the JSON self-describing for hosts behind an
//! IPC boundary:
//!
//! ```json
//! {
//!   "type": "AddItem",
//!   "data": { "category": "classic", "name": "Diavola", "description": "spicy salami" }
//! }
//! ```

use serde::{Deserialize, Serialize};

use crate::error::{CatalogError, CatalogResult};
use crate::event::CatalogEvent;
use crate::gate::{AdminGate, AdminGateConfig};
use crate::models::{Category, MenuItem, MenuItemDraft};
use crate::store::CatalogStore;
use crate::view::{CatalogView, NavigationState};

/// One user intent against the catalog engine
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum CatalogIntent {
    /// Drill into a category
    SelectCategory { category: String },
    /// Return to the category list
    GoBack,
    /// Append a new item to a category
    AddItem {
        category: String,
        name: String,
        description: String,
        #[serde(default)]
        image: String,
    },
    /// Remove one item from a category
    RemoveItem { category: String, id: i64 },
    /// The reserved admin chord fired; `auto_repeat` marks key-repeat
    /// occurrences so the gate's configured policy can decide
    ToggleAdmin {
        #[serde(default)]
        auto_repeat: bool,
    },
    /// Explicit close of the admin panel
    CloseAdmin,
}

/// Outcome of one dispatched intent
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IntentOutcome {
    /// Whether the intent was applied
    pub success: bool,
    /// Host-facing message (success confirmation or rejection reason)
    pub message: String,
    /// Created/affected entity, when one exists
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,
    /// Id of the affected item, when one exists
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
}

impl IntentOutcome {
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
            data: None,
            id: None,
        }
    }

    pub fn ok_with_item(message: impl Into<String>, item: &MenuItem) -> Self {
        Self {
            success: true,
            message: message.into(),
            data: serde_json::to_value(item).ok(),
            id: Some(item.id),
        }
    }

    pub fn rejected(error: &CatalogError) -> Self {
        Self {
            success: false,
            message: error.to_string(),
            data: None,
            id: None,
        }
    }
}

/// Catalog engine: navigation view plus admin gate behind one dispatch
/// entry point
///
/// All operations are synchronous and run on the caller's thread;
/// intents are applied strictly in the order they are dispatched.
#[derive(Debug)]
pub struct CatalogEngine {
    view: CatalogView,
    gate: AdminGate,
}

impl CatalogEngine {
    pub fn new(store: CatalogStore, gate_config: AdminGateConfig) -> Self {
        Self {
            view: CatalogView::new(store),
            gate: AdminGate::new(gate_config),
        }
    }

    /// Engine over the embedded default menu
    pub fn with_default_menu(gate_config: AdminGateConfig) -> CatalogResult<Self> {
        Ok(Self::new(CatalogStore::with_default_menu()?, gate_config))
    }

    /// Apply one intent and report the outcome.
    ///
    /// Rejections are reported in the outcome rather than as `Err`: from
    /// the host's point of view a rejected intent is a normal, displayable
    /// result, not a failure of the dispatch machinery.
    pub fn dispatch(&mut self, intent: CatalogIntent) -> IntentOutcome {
        tracing::debug!(?intent, "dispatching intent");
        match intent {
            CatalogIntent::SelectCategory { category } => match self.parse_category(&category) {
                Ok(category) => {
                    self.view.select_category(category);
                    IntentOutcome::ok(format!("viewing {category}"))
                }
                Err(e) => IntentOutcome::rejected(&e),
            },
            CatalogIntent::GoBack => {
                self.view.go_back();
                IntentOutcome::ok("browsing categories")
            }
            CatalogIntent::AddItem {
                category,
                name,
                description,
                image,
            } => {
                let parsed = match self.parse_category(&category) {
                    Ok(c) => c,
                    Err(e) => return IntentOutcome::rejected(&e),
                };
                let draft = MenuItemDraft::new(name, description, image);
                match self.view.add_item(parsed, draft) {
                    Ok(item) => {
                        IntentOutcome::ok_with_item(format!("added {} to {parsed}", item.name), &item)
                    }
                    Err(e) => IntentOutcome::rejected(&e),
                }
            }
            CatalogIntent::RemoveItem { category, id } => match self.parse_category(&category) {
                Ok(category) => {
                    self.view.remove_item(category, id);
                    IntentOutcome::ok(format!("removed {id} from {category}"))
                }
                Err(e) => IntentOutcome::rejected(&e),
            },
            CatalogIntent::ToggleAdmin { auto_repeat } => {
                self.gate.handle_trigger(auto_repeat);
                IntentOutcome::ok(if self.gate.is_open() {
                    "admin panel open"
                } else {
                    "admin panel closed"
                })
            }
            CatalogIntent::CloseAdmin => {
                self.gate.close();
                IntentOutcome::ok("admin panel closed")
            }
        }
    }

    // ==================== Queries ====================

    pub fn categories(&self) -> &'static [Category] {
        self.view.categories()
    }

    /// Items of a category named by an untyped string
    pub fn items(&self, category: &str) -> CatalogResult<&[MenuItem]> {
        let category = self.parse_category(category)?;
        Ok(self.view.items(category))
    }

    /// Items of a typed category
    pub fn items_of(&self, category: Category) -> &[MenuItem] {
        self.view.items(category)
    }

    pub fn current_view(&self) -> NavigationState {
        self.view.current_view()
    }

    pub fn is_admin_open(&self) -> bool {
        self.gate.is_open()
    }

    pub fn version(&self) -> u64 {
        self.view.version()
    }

    pub fn subscribe(&mut self, observer: impl Fn(&CatalogEvent) + Send + Sync + 'static) {
        self.view.subscribe(observer)
    }

    fn parse_category(&self, name: &str) -> CatalogResult<Category> {
        name.parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn engine() -> CatalogEngine {
        CatalogEngine::with_default_menu(AdminGateConfig::default()).unwrap()
    }

    #[test]
    fn test_select_unknown_category_leaves_view_unchanged() {
        let mut engine = engine();
        let outcome = engine.dispatch(CatalogIntent::SelectCategory {
            category: "desserts".to_string(),
        });
        assert!(!outcome.success);
        assert!(outcome.message.contains("desserts"));
        assert_eq!(engine.current_view(), NavigationState::Browsing);
    }

    #[test]
    fn test_select_then_back_round_trip() {
        let mut engine = engine();
        engine.dispatch(CatalogIntent::SelectCategory {
            category: "classic".to_string(),
        });
        assert_eq!(
            engine.current_view(),
            NavigationState::Viewing(Category::Classic)
        );
        engine.dispatch(CatalogIntent::GoBack);
        assert_eq!(engine.current_view(), NavigationState::Browsing);
    }

    #[test]
    fn test_add_item_outcome_carries_entity() {
        let mut engine = engine();
        let outcome = engine.dispatch(CatalogIntent::AddItem {
            category: "classic".to_string(),
            name: "Diavola".to_string(),
            description: "spicy salami".to_string(),
            image: String::new(),
        });
        assert!(outcome.success);
        let id = outcome.id.unwrap();
        let items = engine.items("classic").unwrap();
        assert_eq!(items.last().unwrap().id, id);
        assert_eq!(outcome.data.unwrap()["name"], "Diavola");
    }

    #[test]
    fn test_add_item_validation_rejection() {
        let mut engine = engine();
        let before = engine.items("vegan").unwrap().len();
        let outcome = engine.dispatch(CatalogIntent::AddItem {
            category: "vegan".to_string(),
            name: "Primavera".to_string(),
            description: String::new(),
            image: String::new(),
        });
        assert!(!outcome.success);
        assert!(outcome.message.contains("description"));
        assert_eq!(engine.items("vegan").unwrap().len(), before);
    }

    #[test]
    fn test_remove_unknown_id_succeeds() {
        let mut engine = engine();
        let outcome = engine.dispatch(CatalogIntent::RemoveItem {
            category: "drinks".to_string(),
            id: 999_999,
        });
        assert!(outcome.success);
    }

    #[test]
    fn test_items_query_rejects_unknown_category() {
        let engine = engine();
        assert_eq!(
            engine.items("desserts").unwrap_err(),
            CatalogError::UnknownCategory("desserts".to_string())
        );
    }

    #[test]
    fn test_admin_toggle_and_close() {
        let mut engine = engine();
        engine.dispatch(CatalogIntent::ToggleAdmin { auto_repeat: false });
        assert!(engine.is_admin_open());
        engine.dispatch(CatalogIntent::ToggleAdmin { auto_repeat: false });
        assert!(!engine.is_admin_open());

        engine.dispatch(CatalogIntent::ToggleAdmin { auto_repeat: false });
        engine.dispatch(CatalogIntent::CloseAdmin);
        assert!(!engine.is_admin_open());
    }

    #[test]
    fn test_admin_gate_independent_of_navigation() {
        let mut engine = engine();
        engine.dispatch(CatalogIntent::ToggleAdmin { auto_repeat: false });
        engine.dispatch(CatalogIntent::SelectCategory {
            category: "drinks".to_string(),
        });
        assert!(engine.is_admin_open());
        engine.dispatch(CatalogIntent::GoBack);
        assert!(engine.is_admin_open());
    }

    #[test]
    fn test_intent_serialization() {
        let intent = CatalogIntent::AddItem {
            category: "classic".to_string(),
            name: "Diavola".to_string(),
            description: "spicy salami".to_string(),
            image: String::new(),
        };

        let json = serde_json::to_string_pretty(&intent).unwrap();
        let parsed: CatalogIntent = serde_json::from_str(&json).unwrap();
        match parsed {
            CatalogIntent::AddItem { name, .. } => assert_eq!(name, "Diavola"),
            _ => panic!("Unexpected variant"),
        }
    }

    #[test]
    fn test_toggle_intent_defaults_auto_repeat_off() {
        let parsed: CatalogIntent = serde_json::from_str(r#"{ "type": "ToggleAdmin" }"#).unwrap();
        match parsed {
            CatalogIntent::ToggleAdmin { auto_repeat } => assert!(!auto_repeat),
            _ => panic!("Unexpected variant"),
        }
    }
}

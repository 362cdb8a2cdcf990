//! Catalog view
//!
//! Holds the navigation state of a host UI (category grid vs. a single
//! category's items) and forwards mutations to the owned
//! [`CatalogStore`]. Exactly one navigation state holds at any time, and
//! transitions happen only on explicit intents.

use serde::{Deserialize, Serialize};

use crate::error::CatalogResult;
use crate::event::CatalogEvent;
use crate::models::{Category, MenuItem, MenuItemDraft};
use crate::store::CatalogStore;

/// Which view the host is currently presenting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", content = "category", rename_all = "snake_case")]
pub enum NavigationState {
    /// The category list itself is displayed
    Browsing,
    /// Items of exactly one category are displayed
    Viewing(Category),
}

/// Navigation state machine over a catalog store
#[derive(Debug)]
pub struct CatalogView {
    store: CatalogStore,
    nav: NavigationState,
}

impl CatalogView {
    pub fn new(store: CatalogStore) -> Self {
        Self {
            store,
            nav: NavigationState::Browsing,
        }
    }

    /// Drill into a category
    ///
    /// Switching directly from one category to another is allowed; no
    /// intermediate pass through `Browsing` happens.
    pub fn select_category(&mut self, category: Category) {
        if self.nav != NavigationState::Viewing(category) {
            tracing::debug!(%category, "entering category view");
        }
        self.nav = NavigationState::Viewing(category);
    }

    /// Return to the category list; no-op when already browsing
    pub fn go_back(&mut self) {
        if let NavigationState::Viewing(category) = self.nav {
            tracing::debug!(%category, "leaving category view");
            self.nav = NavigationState::Browsing;
        }
    }

    /// Pure read of the current navigation state
    pub fn current_view(&self) -> NavigationState {
        self.nav
    }

    // ==================== Store pass-throughs ====================
    //
    // Mutations are deliberately not restricted by the current
    // navigation state: admin operations may target any category.

    pub fn categories(&self) -> &'static [Category] {
        self.store.categories()
    }

    pub fn items(&self, category: Category) -> &[MenuItem] {
        self.store.items(category)
    }

    pub fn add_item(&mut self, category: Category, draft: MenuItemDraft) -> CatalogResult<MenuItem> {
        self.store.add_item(category, draft)
    }

    pub fn remove_item(&mut self, category: Category, id: i64) {
        self.store.remove_item(category, id)
    }

    pub fn version(&self) -> u64 {
        self.store.version()
    }

    pub fn subscribe(&mut self, observer: impl Fn(&CatalogEvent) + Send + Sync + 'static) {
        self.store.subscribe(observer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn view() -> CatalogView {
        CatalogView::new(CatalogStore::with_default_menu().unwrap())
    }

    #[test]
    fn test_initial_state_is_browsing() {
        assert_eq!(view().current_view(), NavigationState::Browsing);
    }

    #[test]
    fn test_navigation_round_trip() {
        let mut v = view();
        v.select_category(Category::Vegan);
        assert_eq!(v.current_view(), NavigationState::Viewing(Category::Vegan));
        v.go_back();
        assert_eq!(v.current_view(), NavigationState::Browsing);
    }

    #[test]
    fn test_category_switch_skips_browsing() {
        let mut v = view();
        v.select_category(Category::Classic);
        v.select_category(Category::Drinks);
        assert_eq!(v.current_view(), NavigationState::Viewing(Category::Drinks));
    }

    #[test]
    fn test_go_back_while_browsing_is_noop() {
        let mut v = view();
        v.go_back();
        assert_eq!(v.current_view(), NavigationState::Browsing);
    }

    #[test]
    fn test_mutation_allowed_regardless_of_view() {
        let mut v = view();
        v.select_category(Category::Classic);
        // Mutating a category other than the one being viewed is fine
        let item = v
            .add_item(Category::Drinks, MenuItemDraft::new("Spring water", "0.5l bottle", ""))
            .unwrap();
        assert_eq!(v.current_view(), NavigationState::Viewing(Category::Classic));
        assert_eq!(v.items(Category::Drinks).last().unwrap().id, item.id);
    }
}

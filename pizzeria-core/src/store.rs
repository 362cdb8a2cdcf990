//! Catalog store
//!
//! Sole owner and mutator of the catalog: a mapping from [`Category`] to
//! an ordered item list. All reads and writes go through this type; no
//! other component holds a mutable reference into the catalog.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use crate::error::CatalogResult;
use crate::event::CatalogEvent;
use crate::models::{Category, MenuItem, MenuItemDraft};
use crate::seed::SeedMenu;
use crate::util;

/// Observer callback invoked synchronously after every successful mutation
pub type CatalogObserver = Box<dyn Fn(&CatalogEvent) + Send + Sync>;

/// In-memory menu catalog
///
/// Insertion order per category is display order; new items append to the
/// end. Item ids are unique across the whole catalog and strictly
/// increasing for the lifetime of one store instance, so deleted ids are
/// never reissued.
pub struct CatalogStore {
    catalog: BTreeMap<Category, Vec<MenuItem>>,
    last_id: i64,
    version: u64,
    observers: Vec<CatalogObserver>,
}

impl CatalogStore {
    /// Create a store with no items
    pub fn empty() -> Self {
        let catalog = Category::ALL.iter().map(|c| (*c, Vec::new())).collect();
        Self {
            catalog,
            last_id: 0,
            version: 0,
            observers: Vec::new(),
        }
    }

    /// Create a store from seed data
    ///
    /// Seed items are validated and assigned ids through the same path as
    /// runtime additions. Seed loading does not count as a mutation: the
    /// version stays at 0 and no events are emitted.
    pub fn from_seed(seed: SeedMenu) -> CatalogResult<Self> {
        let mut store = Self::empty();
        for (name, drafts) in seed.categories {
            let category = Category::from_str(&name)?;
            for draft in drafts {
                draft.validate()?;
                let id = store.issue_id();
                if let Some(items) = store.catalog.get_mut(&category) {
                    items.push(draft.into_item(id));
                }
            }
        }
        tracing::debug!(last_id = store.last_id, "catalog seeded");
        Ok(store)
    }

    /// Create a store from the embedded default menu
    pub fn with_default_menu() -> CatalogResult<Self> {
        Self::from_seed(SeedMenu::embedded()?)
    }

    /// All categories in their stable display order
    pub fn categories(&self) -> &'static [Category] {
        &Category::ALL
    }

    /// Items of one category, in display order
    pub fn items(&self, category: Category) -> &[MenuItem] {
        self.catalog
            .get(&category)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Validate a draft, issue a fresh id and append the item to the end
    /// of `category`'s list.
    ///
    /// On validation failure the catalog is left unchanged.
    pub fn add_item(&mut self, category: Category, draft: MenuItemDraft) -> CatalogResult<MenuItem> {
        draft.validate()?;
        let id = self.issue_id();
        let item = draft.into_item(id);
        if let Some(items) = self.catalog.get_mut(&category) {
            items.push(item.clone());
        }
        tracing::debug!(%category, id, name = %item.name, "item added");
        self.record(CatalogEvent::ItemAdded {
            category,
            item: item.clone(),
        });
        Ok(item)
    }

    /// Remove the item with `id` from `category`, preserving the relative
    /// order of the remainder.
    ///
    /// Removing an id that is not present is an idempotent no-op, so a
    /// double-fired delete cannot fail the host UI.
    pub fn remove_item(&mut self, category: Category, id: i64) {
        let Some(items) = self.catalog.get_mut(&category) else {
            return;
        };
        let before = items.len();
        items.retain(|item| item.id != id);
        if items.len() == before {
            tracing::debug!(%category, id, "remove ignored, id not present");
            return;
        }
        tracing::debug!(%category, id, "item removed");
        self.record(CatalogEvent::ItemRemoved { category, id });
    }

    /// Change counter, bumped on every successful mutation
    ///
    /// Hosts that do not want callbacks can poll this and re-read on
    /// change.
    pub fn version(&self) -> u64 {
        self.version
    }

    /// Register an observer for catalog change events
    ///
    /// Observers are called synchronously, on the mutating call, in
    /// registration order.
    pub fn subscribe(&mut self, observer: impl Fn(&CatalogEvent) + Send + Sync + 'static) {
        self.observers.push(Box::new(observer));
    }

    fn record(&mut self, event: CatalogEvent) {
        self.version += 1;
        for observer in &self.observers {
            observer(&event);
        }
    }

    /// Issue an id strictly greater than every id this store has issued,
    /// including seed ids and ids of since-deleted items.
    fn issue_id(&mut self) -> i64 {
        let id = util::snowflake_id().max(self.last_id + 1);
        self.last_id = id;
        id
    }
}

impl fmt::Debug for CatalogStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CatalogStore")
            .field("catalog", &self.catalog)
            .field("last_id", &self.last_id)
            .field("version", &self.version)
            .field("observers", &self.observers.len())
            .finish()
    }
}

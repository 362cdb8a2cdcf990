//! In-memory menu catalog engine for the pizzeria demo
//!
//! Owns the category → item mapping, the browsing/viewing navigation
//! state machine and the admin visibility gate, behind a single
//! intent-dispatch surface any host UI can drive. No persistence: the
//! catalog lives and dies with the process.

pub mod error;
pub mod event;
pub mod gate;
pub mod intent;
pub mod models;
pub mod seed;
pub mod store;
pub mod util;
pub mod view;

// Re-exports
pub use error::{CatalogError, CatalogResult};
pub use event::CatalogEvent;
pub use gate::{AdminGate, AdminGateConfig};
pub use intent::{CatalogEngine, CatalogIntent, IntentOutcome};
pub use models::{Category, MenuItem, MenuItemDraft};
pub use seed::SeedMenu;
pub use store::CatalogStore;
pub use view::{CatalogView, NavigationState};

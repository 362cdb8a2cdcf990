//! Domain models for the menu catalog

mod category;
mod item;

pub use category::Category;
pub use item::{MenuItem, MenuItemDraft};

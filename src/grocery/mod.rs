//! Grocery List
//!
//! Locally persisted shopping list with grouped and counted views.

mod error;
mod list;
mod persistence;
mod views;

pub use error::{GroceryError, GroceryResult};
pub use list::GroceryList;
pub use persistence::GroceryPersistence;
pub use views::{counts, group_by_category, partition_active, CategoryGroup, Counts};

//! Grocery validation errors, reported only by the strict `try_*` operations.

use thiserror::Error;

use crate::models::EntryId;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum GroceryError {
    #[error("item name is empty")]
    EmptyName,
    #[error("quantity must be a positive number, got {0}")]
    InvalidQuantity(f64),
    #[error("unknown category '{0}'")]
    UnknownCategory(String),
    #[error("no grocery item with id {0}")]
    NotFound(EntryId),
}

pub type GroceryResult<T> = Result<T, GroceryError>;

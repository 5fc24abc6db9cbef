//! Grocery List Store
//!
//! Authoritative in-memory list. Every mutation writes the full list back
//! through [`GroceryPersistence`]; persistence failures never reach callers.
//!
//! Bad input is corrected rather than rejected: quantities fall back to 1,
//! unknown categories to `Other`, and a blank name makes `add` a no-op.
//! The `try_*` variants report the same problems as [`GroceryError`].

use crate::models::{normalize_quantity, Category, Entry, EntryId, EntryPatch};
use crate::storage::KeyValueStore;

use super::error::{GroceryError, GroceryResult};
use super::persistence::GroceryPersistence;
use super::views::{self, CategoryGroup, Counts};

#[derive(Debug, Clone)]
pub struct GroceryList<S> {
    entries: Vec<Entry>,
    persistence: GroceryPersistence<S>,
}

impl<S: KeyValueStore> GroceryList<S> {
    /// Load the stored list
    pub fn open(storage: S, key: impl Into<String>) -> Self {
        let persistence = GroceryPersistence::new(storage, key);
        let entries = persistence.load();
        log::info!("grocery list loaded with {} items", entries.len());
        Self { entries, persistence }
    }

    pub fn list(&self) -> &[Entry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, id: &EntryId) -> Option<&Entry> {
        self.entries.iter().find(|entry| &entry.id == id)
    }

    pub fn counts(&self) -> Counts {
        views::counts(&self.entries)
    }

    pub fn grouped(&self) -> Vec<CategoryGroup> {
        views::group_by_category(&self.entries)
    }

    fn persist(&self) {
        self.persistence.save(&self.entries);
    }

    /// Prepend a new entry. Returns `None` without writing if the name is blank.
    pub fn add(&mut self, name: &str, quantity: f64, category: &str) -> Option<EntryId> {
        let name = name.trim();
        if name.is_empty() {
            return None;
        }

        let mut id = EntryId::generate();
        while self.get(&id).is_some() {
            id = EntryId::generate();
        }

        self.entries.insert(
            0,
            Entry {
                id: id.clone(),
                name: name.to_string(),
                quantity: normalize_quantity(quantity),
                category: Category::parse(category),
                completed: false,
            },
        );
        self.persist();
        Some(id)
    }

    pub fn remove(&mut self, id: &EntryId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|entry| &entry.id != id);
        self.persist();
        self.entries.len() != before
    }

    /// Flip the completed flag, returning its new value
    pub fn toggle_completed(&mut self, id: &EntryId) -> Option<bool> {
        let toggled = self.entries.iter_mut().find(|entry| &entry.id == id).map(|entry| {
            entry.completed = !entry.completed;
            entry.completed
        });
        self.persist();
        toggled
    }

    /// Merge `patch` into the entry. A blank name in the patch is ignored.
    pub fn update(&mut self, id: &EntryId, patch: EntryPatch) -> bool {
        let found = match self.entries.iter_mut().find(|entry| &entry.id == id) {
            Some(entry) => {
                if let Some(name) = patch.name.as_deref().map(str::trim).filter(|n| !n.is_empty()) {
                    entry.name = name.to_string();
                }
                if let Some(quantity) = patch.quantity {
                    entry.quantity = normalize_quantity(quantity);
                }
                if let Some(category) = patch.category.as_deref() {
                    entry.category = Category::parse(category);
                }
                true
            }
            None => false,
        };
        self.persist();
        found
    }

    /// Drop purchased entries, returning how many were removed
    pub fn clear_completed(&mut self) -> usize {
        let before = self.entries.len();
        self.entries.retain(|entry| !entry.completed);
        self.persist();
        before - self.entries.len()
    }

    pub fn clear_all(&mut self) -> usize {
        let removed = self.entries.len();
        self.entries.clear();
        self.persist();
        removed
    }

    // ========================
    // Strict variants
    // ========================

    pub fn try_add(&mut self, name: &str, quantity: f64, category: &str) -> GroceryResult<EntryId> {
        validate_name(name)?;
        validate_quantity(quantity)?;
        validate_category(category)?;
        self.add(name, quantity, category).ok_or(GroceryError::EmptyName)
    }

    pub fn try_update(&mut self, id: &EntryId, patch: EntryPatch) -> GroceryResult<()> {
        if self.get(id).is_none() {
            return Err(GroceryError::NotFound(id.clone()));
        }
        if let Some(name) = patch.name.as_deref() {
            validate_name(name)?;
        }
        if let Some(quantity) = patch.quantity {
            validate_quantity(quantity)?;
        }
        if let Some(category) = patch.category.as_deref() {
            validate_category(category)?;
        }
        self.update(id, patch);
        Ok(())
    }
}

fn validate_name(name: &str) -> GroceryResult<()> {
    if name.trim().is_empty() {
        return Err(GroceryError::EmptyName);
    }
    Ok(())
}

fn validate_quantity(quantity: f64) -> GroceryResult<()> {
    if !(quantity.is_finite() && quantity > 0.0) {
        return Err(GroceryError::InvalidQuantity(quantity));
    }
    Ok(())
}

fn validate_category(category: &str) -> GroceryResult<()> {
    Category::try_parse(category)
        .map(|_| ())
        .ok_or_else(|| GroceryError::UnknownCategory(category.to_string()))
}

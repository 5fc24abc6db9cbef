//! Grocery View Helpers
//!
//! Pure projections of the list used for rendering.

use std::cmp::Ordering;

use crate::models::{Category, Entry};

/// Entries of one category in display order
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryGroup {
    pub category: Category,
    pub entries: Vec<Entry>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Counts {
    pub active: usize,
    pub completed: usize,
}

/// Unpurchased first, then case-insensitive name
fn display_order(a: &Entry, b: &Entry) -> Ordering {
    a.completed
        .cmp(&b.completed)
        .then_with(|| a.name.to_lowercase().cmp(&b.name.to_lowercase()))
}

/// One group per category in canonical order, empty groups included
pub fn group_by_category(entries: &[Entry]) -> Vec<CategoryGroup> {
    let mut groups: Vec<CategoryGroup> = Category::ALL
        .into_iter()
        .map(|category| CategoryGroup { category, entries: Vec::new() })
        .collect();

    for entry in entries {
        // Category is closed, so every entry lands in some group
        if let Some(group) = groups.iter_mut().find(|g| g.category == entry.category) {
            group.entries.push(entry.clone());
        }
    }

    for group in &mut groups {
        group.entries.sort_by(display_order);
    }
    groups
}

/// Split into (active, completed), keeping relative order
pub fn partition_active(entries: &[Entry]) -> (Vec<Entry>, Vec<Entry>) {
    entries.iter().cloned().partition(|entry| !entry.completed)
}

pub fn counts(entries: &[Entry]) -> Counts {
    let completed = entries.iter().filter(|entry| entry.completed).count();
    Counts {
        active: entries.len() - completed,
        completed,
    }
}

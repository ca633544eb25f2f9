//! A single form entry.

use serde::{Deserialize, Serialize};

/// A named calorie value belonging to one category.
///
/// Calories are kept as the raw text that was entered; normalization only
/// happens at submission time. Entries have no identity beyond their
/// position in the category and are never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    pub name: String,
    pub calories: String,
}

impl Entry {
    pub fn new(name: impl Into<String>, calories: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            calories: calories.into(),
        }
    }
}

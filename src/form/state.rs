//! The calorie form: ordered entries per category plus the budget.

use super::{Category, Entry};

/// In-memory state of the tracking form.
///
/// Holds an ordered list of entries for each of the five fixed categories
/// and a single raw budget value. All mutation goes through the operations
/// here; the aggregator only reads.
#[derive(Debug, Clone, Default)]
pub struct CalorieForm {
    entries: [Vec<Entry>; 5],
    budget: Option<String>,
}

impl CalorieForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry to a category, returning its 1-based position there.
    pub fn add_entry(
        &mut self,
        category: Category,
        name: impl Into<String>,
        calories: impl Into<String>,
    ) -> usize {
        let slot = &mut self.entries[category as usize];
        slot.push(Entry::new(name, calories));
        slot.len()
    }

    /// Set the raw budget value.
    pub fn set_budget(&mut self, raw: impl Into<String>) {
        self.budget = Some(raw.into());
    }

    /// The raw budget value, if one has been set. An unset budget
    /// aggregates as zero, like any other empty field.
    pub fn budget_raw(&self) -> Option<&str> {
        self.budget.as_deref()
    }

    /// The ordered entries of one category.
    pub fn entries(&self, category: Category) -> &[Entry] {
        &self.entries[category as usize]
    }

    /// The raw calorie strings of one category, in entry order.
    pub fn calorie_values(&self, category: Category) -> impl Iterator<Item = &str> {
        self.entries(category).iter().map(|e| e.calories.as_str())
    }

    /// Total number of entries across all categories.
    pub fn entry_count(&self) -> usize {
        self.entries.iter().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.entry_count() == 0 && self.budget.is_none()
    }

    /// Reset every category to empty and unset the budget.
    pub fn clear(&mut self) {
        for slot in &mut self.entries {
            slot.clear();
        }
        self.budget = None;
    }
}

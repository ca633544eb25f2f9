//! Form state: fixed categories, named entries, and the budget value.
//!
//! The form is an explicit data structure mutated by `add_entry`,
//! `set_budget`, and `clear`; rendering is a pure projection of it, done by
//! the presentation layer. Calorie values stay raw strings until a
//! submission normalizes them.

mod category;
mod entry;
mod state;

pub use category::Category;
pub use entry::Entry;
pub use state::CalorieForm;

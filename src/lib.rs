//! Calorie budget tracking.
//!
//! This crate is the logical core behind the `caltrack` terminal session:
//! form state holding named calorie entries under five fixed categories,
//! normalization of the raw numeric text users type, and aggregation of the
//! category sums against a budget into a surplus/deficit report.
//!
//! # Overview
//!
//! - [`form`]: the explicit form state — [`Category`], [`Entry`], and
//!   [`CalorieForm`] with its `add_entry`/`set_budget`/`clear` operations.
//! - [`input`]: best-effort cleaning of raw values and rejection of
//!   scientific-notation-like text.
//! - [`report`]: summation per category and the derived [`Report`] with its
//!   `Surplus`/`Deficit` label.
//! - [`settings`]: optional TOML/environment settings for a session.
//!
//! # Example
//!
//! ```
//! use caltrack::{CalorieForm, Category, Report};
//!
//! let mut form = CalorieForm::new();
//! form.set_budget("2000");
//! form.add_entry(Category::Breakfast, "Oatmeal", "300");
//! form.add_entry(Category::Exercise, "Run", "250");
//!
//! let report = Report::from_form(&form).unwrap();
//! assert_eq!(report.remaining, 1950.0);
//! ```

pub mod error;
pub mod form;
pub mod input;
pub mod report;
pub mod settings;

pub use error::{InputError, Result};
pub use form::{CalorieForm, Category, Entry};
pub use report::{BalanceLabel, Report};
pub use settings::Settings;

//! Calorie aggregation and the submission report.
//!
//! A submission walks every category in order, normalizes each raw value,
//! and sums. The first bad value anywhere — entries or budget — aborts the
//! whole computation; no partial report is ever produced.

use std::fmt;

use serde::Serialize;

use crate::error::Result;
use crate::form::{CalorieForm, Category};
use crate::input;

/// Label applied to the remaining-calorie figure.
///
/// Fixed contract: a negative remaining value is a `Surplus` (calories
/// exceed the budget), zero or positive is a `Deficit`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum BalanceLabel {
    Surplus,
    Deficit,
}

impl BalanceLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            BalanceLabel::Surplus => "Surplus",
            BalanceLabel::Deficit => "Deficit",
        }
    }
}

impl fmt::Display for BalanceLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of one submission.
///
/// A pure function of the form's raw values at the moment of computation,
/// recomputed fully each time and never stored.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    pub budget: f64,
    pub consumed: f64,
    pub burned: f64,
    pub remaining: f64,
}

impl Report {
    /// Sum a sequence of raw calorie strings. The first value that fails
    /// normalization aborts the sum.
    pub fn sum_values<'a>(values: impl IntoIterator<Item = &'a str>) -> Result<f64> {
        let mut total = 0.0;
        for value in values {
            total += input::parse_calories(value)?;
        }
        Ok(total)
    }

    /// Compute a report from the current form state.
    ///
    /// Categories are summed in display order, then the budget; the first
    /// offending value anywhere is the one reported.
    pub fn from_form(form: &CalorieForm) -> Result<Self> {
        let mut consumed = 0.0;
        let mut burned = 0.0;

        for category in Category::ALL {
            let sum = Self::sum_values(form.calorie_values(category))?;
            if category.is_consumed() {
                consumed += sum;
            } else {
                burned += sum;
            }
        }

        let budget = input::parse_calories(form.budget_raw().unwrap_or(""))?;
        let remaining = budget - consumed + burned;
        tracing::debug!(budget, consumed, burned, remaining, "computed report");

        Ok(Self {
            budget,
            consumed,
            burned,
            remaining,
        })
    }

    pub fn label(&self) -> BalanceLabel {
        if self.remaining < 0.0 {
            BalanceLabel::Surplus
        } else {
            BalanceLabel::Deficit
        }
    }

    /// Magnitude shown to the user.
    pub fn displayed(&self) -> f64 {
        self.remaining.abs()
    }

    /// Plain-text projection of the report.
    pub fn format(&self) -> String {
        format!(
            "{} Calorie {}\n\n{} Calories Budgeted\n{} Calories Consumed\n{} Calories Burned\n",
            self.displayed(),
            self.label(),
            self.budget,
            self.consumed,
            self.burned
        )
    }

    /// JSON projection, including the derived label and magnitude.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "budget": self.budget,
            "consumed": self.consumed,
            "burned": self.burned,
            "remaining": self.remaining,
            "label": self.label().as_str(),
            "displayed": self.displayed(),
        })
    }
}

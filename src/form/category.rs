//! The fixed set of entry categories.

use std::fmt;

use serde::{Deserialize, Serialize};

/// One of the five fixed meal/exercise groupings.
///
/// Breakfast, lunch, dinner, and snacks count toward consumed calories;
/// exercise counts as burned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Breakfast,
    Lunch,
    Dinner,
    Snacks,
    Exercise,
}

impl Category {
    /// All categories in display order.
    pub const ALL: [Category; 5] = [
        Category::Breakfast,
        Category::Lunch,
        Category::Dinner,
        Category::Snacks,
        Category::Exercise,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Breakfast => "breakfast",
            Category::Lunch => "lunch",
            Category::Dinner => "dinner",
            Category::Snacks => "snacks",
            Category::Exercise => "exercise",
        }
    }

    /// Case-insensitive lookup. The set is fixed, so unknown names are
    /// rejected rather than mapped to a fallback.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "breakfast" => Some(Category::Breakfast),
            "lunch" => Some(Category::Lunch),
            "dinner" => Some(Category::Dinner),
            "snack" | "snacks" => Some(Category::Snacks),
            "exercise" => Some(Category::Exercise),
            _ => None,
        }
    }

    /// Whether entries here count toward consumed calories.
    pub fn is_consumed(&self) -> bool {
        !matches!(self, Category::Exercise)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_round_trips_every_category() {
        for category in Category::ALL {
            assert_eq!(Category::parse(category.as_str()), Some(category));
        }
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!(Category::parse("Breakfast"), Some(Category::Breakfast));
        assert_eq!(Category::parse("SNACK"), Some(Category::Snacks));
    }

    #[test]
    fn test_parse_rejects_unknown() {
        assert_eq!(Category::parse("brunch"), None);
        assert_eq!(Category::parse(""), None);
    }

    #[test]
    fn test_consumed_split() {
        assert!(Category::Breakfast.is_consumed());
        assert!(Category::Snacks.is_consumed());
        assert!(!Category::Exercise.is_consumed());
    }
}

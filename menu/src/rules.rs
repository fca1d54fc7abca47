//! # Category Rule Table
//!
//! Static per-category selection bounds for the custom sandwich builder.
//!
//! - BREAD is exactly 1 (min = max = 1)
//! - MEAT, VEGGIES, SAUCE are 0 to 3
//!
//! Consumed read-only by the builder (max-cap disabling) and the validator
//! (min/max checks at submit). Never mutated at runtime.

use crate::catalog::IngredientCategory;

/// Selection bounds for one ingredient category. min <= max always holds;
/// min == max means "exactly N required".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryRule {
    pub category: IngredientCategory,
    pub min: usize,
    pub max: usize,
    pub label: &'static str,
}

pub const CATEGORY_RULES: [CategoryRule; 4] = [
    CategoryRule {
        category: IngredientCategory::Bread,
        min: 1,
        max: 1,
        label: "Bread",
    },
    CategoryRule {
        category: IngredientCategory::Meat,
        min: 0,
        max: 3,
        label: "Meat",
    },
    CategoryRule {
        category: IngredientCategory::Veggies,
        min: 0,
        max: 3,
        label: "Veggies",
    },
    CategoryRule {
        category: IngredientCategory::Sauce,
        min: 0,
        max: 3,
        label: "Sauce",
    },
];

pub fn rule_for(category: IngredientCategory) -> &'static CategoryRule {
    CATEGORY_RULES
        .iter()
        .find(|rule| rule.category == category)
        .expect("every category has a rule")
}

use serde::{Deserialize, Serialize};

/// Opaque string id, unique within its collection.
pub type Id = String;

/// Closed set of ingredient groups. The rule table in [`crate::rules`]
/// assigns a min/max selection count to each.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum IngredientCategory {
    Bread,
    Meat,
    Veggies,
    Sauce,
}

impl IngredientCategory {
    /// All categories, in builder display order.
    pub const ALL: [IngredientCategory; 4] = [
        IngredientCategory::Bread,
        IngredientCategory::Meat,
        IngredientCategory::Veggies,
        IngredientCategory::Sauce,
    ];

    /// Wire name, as it appears in JSON and query strings.
    pub fn as_str(self) -> &'static str {
        match self {
            IngredientCategory::Bread => "BREAD",
            IngredientCategory::Meat => "MEAT",
            IngredientCategory::Veggies => "VEGGIES",
            IngredientCategory::Sauce => "SAUCE",
        }
    }
}

/// Named id pair used for departments and wings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReferenceItem {
    pub id: Id,
    pub name: String,
}

/// Pre-defined recipe selectable by id, no ingredient customization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpecialSandwich {
    pub id: Id,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub is_active: bool,
}

/// Single selectable ingredient. Only active ingredients are offered
/// publicly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ingredient {
    pub id: Id,
    pub name: String,
    pub category: IngredientCategory,
    pub is_active: bool,
}

/// Optional add-on, capped at 3 per order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Extra {
    pub id: Id,
    pub name: String,
    pub is_active: bool,
}

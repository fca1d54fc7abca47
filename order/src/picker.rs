//! Interactive selection state for the custom sandwich builder and extras.
//!
//! Both pickers share the same contract: once a group is at its cap, every
//! unselected item in it stops being selectable, while selected items stay
//! togglable off. A toggle that would break the cap is a no-op, never an
//! allow-then-error.

use std::collections::BTreeSet;

use menu::{Extra, Id, Ingredient, IngredientCategory, rule_for};

/// At most 3 extras per order.
pub const EXTRAS_MAX: usize = 3;

/// Selection set over the active ingredient list, grouped by category and
/// capped per category by the rule table.
#[derive(Debug, Clone)]
pub struct IngredientPicker {
    ingredients: Vec<Ingredient>,
    selected: BTreeSet<Id>,
}

impl IngredientPicker {
    /// Inactive ingredients are dropped up front; they are not offerable.
    pub fn new(ingredients: Vec<Ingredient>) -> Self {
        Self {
            ingredients: ingredients.into_iter().filter(|i| i.is_active).collect(),
            selected: BTreeSet::new(),
        }
    }

    pub fn in_category(&self, category: IngredientCategory) -> Vec<&Ingredient> {
        self.ingredients
            .iter()
            .filter(|i| i.category == category)
            .collect()
    }

    pub fn selected_count(&self, category: IngredientCategory) -> usize {
        self.ingredients
            .iter()
            .filter(|i| i.category == category && self.selected.contains(&i.id))
            .count()
    }

    pub fn is_selected(&self, id: &str) -> bool {
        self.selected.contains(id)
    }

    /// Whether toggling this ingredient is currently allowed. Selected items
    /// are always togglable off; unselected ones only while their category
    /// is below its max. Unknown ids are never selectable.
    pub fn is_selectable(&self, id: &str) -> bool {
        if self.selected.contains(id) {
            return true;
        }
        let Some(ingredient) = self.ingredients.iter().find(|i| i.id == id) else {
            return false;
        };
        self.selected_count(ingredient.category) < rule_for(ingredient.category).max
    }

    /// Adds or removes the ingredient from the selection set. Returns
    /// whether the set changed; a capped or unknown toggle changes nothing.
    pub fn toggle(&mut self, id: &str) -> bool {
        if self.selected.contains(id) {
            self.selected.remove(id);
            return true;
        }
        if !self.is_selectable(id) {
            return false;
        }
        self.selected.insert(id.to_string());
        true
    }

    pub fn selected_ids(&self) -> Vec<Id> {
        self.selected.iter().cloned().collect()
    }
}

/// Selection set over the active extras, with a single flat cap.
#[derive(Debug, Clone)]
pub struct ExtrasPicker {
    extras: Vec<Extra>,
    selected: BTreeSet<Id>,
}

impl ExtrasPicker {
    pub fn new(extras: Vec<Extra>) -> Self {
        Self {
            extras: extras.into_iter().filter(|e| e.is_active).collect(),
            selected: BTreeSet::new(),
        }
    }

    pub fn selected_count(&self) -> usize {
        self.selected.len()
    }

    pub fn is_selectable(&self, id: &str) -> bool {
        if self.selected.contains(id) {
            return true;
        }
        self.extras.iter().any(|e| e.id == id) && self.selected.len() < EXTRAS_MAX
    }

    pub fn toggle(&mut self, id: &str) -> bool {
        if self.selected.contains(id) {
            self.selected.remove(id);
            return true;
        }
        if !self.is_selectable(id) {
            return false;
        }
        self.selected.insert(id.to_string());
        true
    }

    pub fn selected_ids(&self) -> Vec<Id> {
        self.selected.iter().cloned().collect()
    }
}

//! Submit-time order validation.
//!
//! Runs every check and collects every failure before reporting: required
//! identity fields, pickup time inside the order window, conditional allergy
//! text, recipe selection for special modes, per-category ingredient counts
//! for custom modes, and the extras cap. Shift classification is computed
//! here too but stays advisory; a NIGHT pickup never blocks.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use menu::{CATEGORY_RULES, Id, Ingredient, OrderWindows, Shift, TimeOfDay};

use crate::draft::OrderDraft;
use crate::payload::{OrderPayload, build_sandwiches};
use crate::picker::EXTRAS_MAX;

/// Inline error for a single form field. Category violations all target
/// `selectedIngredientIds` but carry distinct per-category messages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    fn new(field: &str, message: impl Into<String>) -> Self {
        Self {
            field: field.to_string(),
            message: message.into(),
        }
    }
}

/// Everything wrong with a draft, aggregated. Submission is blocked while
/// this is non-empty; none of it is fatal to the process.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[error("order validation failed: {}", summary(.errors))]
pub struct ValidationErrors {
    pub errors: Vec<FieldError>,
}

fn summary(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}

impl ValidationErrors {
    pub fn field(&self, field: &str) -> Vec<&FieldError> {
        self.errors.iter().filter(|e| e.field == field).collect()
    }
}

/// Validates a draft against the current order windows and active
/// ingredient list. On success the draft is normalized into the final
/// payload; on failure every violation is reported at once.
pub fn validate(
    draft: &OrderDraft,
    windows: &OrderWindows,
    ingredients: &[Ingredient],
) -> Result<OrderPayload, ValidationErrors> {
    let mut errors = Vec::new();

    check_required(&mut errors, "firstName", &draft.first_name, "First name is required");
    check_required(&mut errors, "lastName", &draft.last_name, "Last name is required");
    check_required(&mut errors, "departmentId", &draft.department_id, "Department is required");
    check_required(&mut errors, "wingId", &draft.wing_id, "Wing is required");

    let pickup = check_pickup_time(&mut errors, &draft.pickup_time, windows);

    if draft.has_allergies && draft.allergies_text.trim().is_empty() {
        errors.push(FieldError::new(
            "allergiesText",
            "Allergy description is required",
        ));
    }

    if draft.sandwich_config.wants_special() && draft.selected_special_id.trim().is_empty() {
        errors.push(FieldError::new(
            "selectedSpecialId",
            "Select a special sandwich",
        ));
    }

    let ingredient_ids = dedupe(&draft.selected_ingredient_ids);
    if draft.sandwich_config.wants_custom() {
        check_categories(&mut errors, &ingredient_ids, ingredients);
    }

    if draft.selected_extra_ids.len() > EXTRAS_MAX {
        errors.push(FieldError::new(
            "selectedExtraIds",
            format!("At most {EXTRAS_MAX} extras allowed"),
        ));
    }

    if !errors.is_empty() {
        return Err(ValidationErrors { errors });
    }

    let pickup = pickup.expect("pickup time parsed when no errors were recorded");
    Ok(OrderPayload {
        first_name: draft.first_name.trim().to_string(),
        last_name: draft.last_name.trim().to_string(),
        department_id: draft.department_id.clone(),
        wing_id: draft.wing_id.clone(),
        pickup_time: pickup,
        shift: Shift::classify(pickup, windows.day_shift),
        has_allergies: draft.has_allergies,
        allergies_text: draft
            .has_allergies
            .then(|| draft.allergies_text.trim().to_string()),
        sandwiches: build_sandwiches(
            draft.sandwich_config,
            draft.selected_special_id.trim(),
            ingredient_ids,
        ),
        extra_ids: draft.selected_extra_ids.clone(),
        notes: draft.notes.trim().to_string(),
    })
}

fn check_required(errors: &mut Vec<FieldError>, field: &str, value: &str, message: &str) {
    if value.trim().is_empty() {
        errors.push(FieldError::new(field, message));
    }
}

fn check_pickup_time(
    errors: &mut Vec<FieldError>,
    raw: &str,
    windows: &OrderWindows,
) -> Option<TimeOfDay> {
    let parsed: Result<TimeOfDay, _> = raw.trim().parse();
    match parsed {
        Err(_) => {
            errors.push(FieldError::new("pickupTime", "Pickup time is required (HH:mm)"));
            None
        }
        Ok(t) if !windows.order_window.contains(t) => {
            errors.push(FieldError::new(
                "pickupTime",
                format!(
                    "Pickup time must be between {} and {}",
                    windows.order_window.from, windows.order_window.to
                ),
            ));
            None
        }
        Ok(t) => Some(t),
    }
}

/// One error per offending category, all collected. Selected ids unknown to
/// the active list contribute to no category.
fn check_categories(errors: &mut Vec<FieldError>, selected: &[Id], ingredients: &[Ingredient]) {
    for rule in &CATEGORY_RULES {
        let count = ingredients
            .iter()
            .filter(|i| i.category == rule.category && selected.contains(&i.id))
            .count();

        if count < rule.min {
            errors.push(FieldError::new(
                "selectedIngredientIds",
                format!("{}: at least {} required", rule.label, rule.min),
            ));
        } else if count > rule.max {
            errors.push(FieldError::new(
                "selectedIngredientIds",
                format!("{}: maximum {} allowed", rule.label, rule.max),
            ));
        }
    }
}

fn dedupe(ids: &[Id]) -> Vec<Id> {
    ids.iter()
        .cloned()
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

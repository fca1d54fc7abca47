//! # Menu Data Model
//!
//! Shared structures for the sandwich-ordering service.
//!
//! Every other crate builds on top of these types:
//! - Catalog items (special sandwiches, ingredients, extras) and reference
//!   items (departments, wings) as served to the public order flow.
//! - The category rule table driving the custom sandwich builder and the
//!   submit-time validator.
//! - HH:mm times, the order window, and shift classification.
//! - Admin-side types: staff roles and accounts, operating-hour settings,
//!   maintenance mode.
//! - Order status as reported by the print pipeline.
//!
//! All wire shapes match the backend JSON contract: camelCase fields,
//! SCREAMING_SNAKE_CASE enum variants, times as "HH:mm" strings.

pub mod admin;
pub mod catalog;
pub mod rules;
pub mod status;
pub mod time;

pub use admin::{AdminUser, MaintenanceSettings, Role, ServiceStatus, TimeSettings};
pub use catalog::{Extra, Id, Ingredient, IngredientCategory, ReferenceItem, SpecialSandwich};
pub use rules::{CATEGORY_RULES, CategoryRule, rule_for};
pub use status::OrderStatus;
pub use time::{OrderWindows, ParseTimeError, Shift, TimeOfDay, TimeRange};

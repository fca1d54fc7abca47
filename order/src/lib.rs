//! # Order Logic
//!
//! Pure logic behind placing an order. No I/O in this crate.
//!
//! ## Flow
//!
//! - User picks 1 or 2 sandwiches and, for 2, a combination. Tracked by
//!   [`config::ConfigSelector`] over the [`config::SandwichConfig`] enum.
//! - A custom sandwich is assembled in [`picker::IngredientPicker`], which
//!   disables further picks in any category already at its max. Extras go
//!   through [`picker::ExtrasPicker`] with a flat cap of 3.
//! - At submit, [`validate::validate`] runs every check against the current
//!   order windows and active ingredient list, collecting all failures
//!   rather than stopping at the first.
//! - A passing draft is normalized into [`payload::OrderPayload`]: one entry
//!   per sandwich line, MIXED split into two quantity-1 entries.
//!
//! ## Notes
//!
//! - Per-category minimums are deliberately NOT enforced per click. The
//!   builder only caps maximums interactively; an incomplete sandwich stays
//!   editable until submit.
//! - The validator aggregates one error per offending category. The shared
//!   single-slot reporting of earlier iterations hid all but the last
//!   violation.

pub mod config;
pub mod draft;
pub mod payload;
pub mod picker;
pub mod validate;

pub use config::{ConfigSelector, SandwichConfig, SandwichCount};
pub use draft::OrderDraft;
pub use payload::{OrderPayload, SandwichEntry};
pub use picker::{EXTRAS_MAX, ExtrasPicker, IngredientPicker};
pub use validate::{FieldError, ValidationErrors, validate};

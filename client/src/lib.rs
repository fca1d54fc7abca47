//! # Order Flow Client
//!
//! Drives an order end to end against the backend:
//!
//! - [`api::Api`] wraps the HTTP surface: config, reference data, active
//!   catalog, order submission, status polling.
//! - [`submit`] holds the submission state machine
//!   (IDLE -> SUBMITTING -> SUBMITTED | FAILED).
//! - [`poll`] watches a submitted order until the print pipeline confirms
//!   it: one status request every 3 seconds, strictly sequential, bounded
//!   by a 45 second budget. Progress is reported as elapsed/budget and
//!   stays below 100% until PRINTED is actually observed.

pub mod api;
pub mod poll;
pub mod submit;

pub use api::{Api, ClientError};
pub use poll::{PollOutcome, PollSchedule, StatusSource, progress_percent, watch_order};
pub use submit::{Submission, SubmitTarget, submit_order};

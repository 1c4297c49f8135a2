//! Working-day arithmetic and request rules for the leave dashboard.
//!
//! The calendar core lives in [`services::working_days`]; everything else in
//! this crate is the form and approval layer that consumes it.

pub mod config;
pub mod error;
pub mod models;
pub mod services;
pub mod types;
pub mod utils;
pub mod validation;

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Conference registration form: conditional fields, running total, payment
//! panels and submit-time validation, with a terminal front end.

pub mod form;
pub mod model;
pub mod telemetry;
pub mod tui;

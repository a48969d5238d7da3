//! TUI screen implementations.

pub mod registration;

pub use registration::{RegistrationState, draw_registration};

//! Actions returned by screen event handlers.

use crossterm::event::KeyEvent;

use crate::form::Registration;

/// An action that a screen handler returns to the [`App`](super::App).
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// No state change needed.
    None,
    /// Validation passed; hand the registration to the transport and leave.
    Submit(Registration),
    /// Quit without submitting.
    Quit,
}

/// Common behavior for all screen state types.
pub trait ScreenState {
    /// Process a key event and return an [`Action`] for the `App` to apply.
    fn handle_key(&mut self, key: KeyEvent) -> Action;
}

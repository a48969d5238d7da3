//! Host events the form reacts to.

/// A free-text input of the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextField {
    Name,
    Email,
    OtherJobRole,
    CardNumber,
    ZipCode,
    Cvv,
}

/// A user-driven event, dispatched one at a time by the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormEvent {
    /// The page finished loading.
    Loaded,
    /// A text input now holds the given value.
    Input(TextField, String),
    JobRoleChanged(String),
    DesignChanged(String),
    ColorChanged(String),
    /// An activity checkbox changed to `checked`.
    ActivityToggled { index: usize, checked: bool },
    ActivityFocused(usize),
    ActivityBlurred(usize),
    PaymentChanged(String),
    /// The user attempted to submit the form.
    Submit,
}

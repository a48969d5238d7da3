//! Side effects emitted by event handlers for the host to apply.

use crate::model::PaymentMethod;

/// An addressable control or output node of the registration form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Element {
    Name,
    Email,
    JobRole,
    OtherJobRole,
    Design,
    Color,
    /// An option of the color select, by catalog index.
    ColorOption(usize),
    /// An activity checkbox, by catalog index.
    Activity(usize),
    /// The text node showing the running total.
    ActivitiesCost,
    Payment,
    PaymentPanel(PaymentMethod),
    CardNumber,
    ZipCode,
    Cvv,
}

/// A group of fields sharing one validity marker and message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Region {
    Name,
    Email,
    Activities,
    Payment,
}

impl Region {
    /// Returns every region in the order the checks run.
    pub fn all() -> [Region; 4] {
        [
            Region::Name,
            Region::Email,
            Region::Activities,
            Region::Payment,
        ]
    }
}

/// A presentation change the host must apply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Move input focus to an element.
    Focus(Element),
    SetVisible(Element, bool),
    SetEnabled(Element, bool),
    SetSelected(Element, bool),
    SetText(Element, String),
    /// Accessibility focus ring on an activity label.
    SetHighlight(Element, bool),
    /// Region passed: add the valid marker, hide its message.
    MarkValid(Region),
    /// Region failed: add the invalid marker, show the message.
    MarkInvalid(Region, String),
    /// Suppress the default submit action.
    CancelSubmission,
}

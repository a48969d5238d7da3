//! Registration form engine: events in, state and effects out.
//!
//! Every handler runs synchronously on one [`FormState`]. Hosts feed
//! [`FormEvent`]s to a [`FormController`] and apply the returned [`Effect`]s to
//! their own widgets.

pub mod calculator;
pub mod conditional;
pub mod controller;
pub mod effect;
pub mod event;
pub mod payment;
pub mod state;
pub mod submission;
pub mod validate;

pub use calculator::{SelectionSet, total_label};
pub use conditional::{ColorProjection, project_colors};
pub use controller::{FormController, Transition, handle};
pub use effect::{Effect, Element, Region};
pub use event::{FormEvent, TextField};
pub use state::{FieldState, FormState, RegionStatus};
pub use submission::Registration;
pub use validate::{ValidationReport, validate};

//! Pure event dispatch plus the owning controller that hosts call into.

use tracing::debug;

use crate::model::PaymentMethod;

use super::calculator::{activity_toggled, total_label};
use super::conditional::{color_changed, design_changed, job_role_changed};
use super::effect::{Effect, Element};
use super::event::FormEvent;
use super::payment::switch_payment;
use super::state::FormState;
use super::validate::submit;

/// The state after an event together with the effects the host must apply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    pub state: FormState,
    pub effects: Vec<Effect>,
}

impl Transition {
    /// `true` if the host must suppress the default submit action.
    pub fn is_cancelled(&self) -> bool {
        self.effects.contains(&Effect::CancelSubmission)
    }
}

/// Applies one event to `state`.
pub fn handle(mut state: FormState, event: FormEvent) -> Transition {
    debug!(?event, "form event");
    let effects = match event {
        FormEvent::Loaded => loaded(&mut state),
        FormEvent::Input(field, value) => {
            state.text_mut(field).value = value;
            Vec::new()
        }
        FormEvent::JobRoleChanged(value) => job_role_changed(&mut state, value),
        FormEvent::DesignChanged(value) => design_changed(&mut state, value),
        FormEvent::ColorChanged(value) => color_changed(&mut state, value),
        FormEvent::ActivityToggled { index, checked } => {
            activity_toggled(&mut state, index, checked)
        }
        FormEvent::ActivityFocused(index) => highlight(&mut state, index, true),
        FormEvent::ActivityBlurred(index) => highlight(&mut state, index, false),
        FormEvent::PaymentChanged(value) => switch_payment(&mut state, value),
        FormEvent::Submit => submit(&mut state),
    };
    Transition { state, effects }
}

/// Initial focus and defaults applied once the page is ready.
fn loaded(state: &mut FormState) -> Vec<Effect> {
    state.focus = Some(Element::Name);
    state.other_job_role.visible = false;
    state.color.enabled = false;

    let mut effects = vec![
        Effect::Focus(Element::Name),
        Effect::SetVisible(Element::OtherJobRole, false),
        Effect::SetEnabled(Element::Color, false),
    ];
    effects.extend(switch_payment(state, PaymentMethod::default().value().into()));
    effects.push(Effect::SetText(
        Element::ActivitiesCost,
        total_label(state.activities.total()),
    ));
    effects
}

fn highlight(state: &mut FormState, index: usize, focused: bool) -> Vec<Effect> {
    if index >= state.activities.items().len() {
        return Vec::new();
    }
    if focused {
        state.highlighted = Some(index);
    } else if state.highlighted == Some(index) {
        state.highlighted = None;
    }
    vec![Effect::SetHighlight(Element::Activity(index), focused)]
}

/// Owns the form state and routes every event through [`handle`].
#[derive(Debug, Clone, Default)]
pub struct FormController {
    state: FormState,
}

impl FormController {
    /// Creates a controller over the freshly rendered (not yet loaded) form.
    pub fn new() -> Self {
        Self::default()
    }

    /// Applies `event` and returns the effects to render.
    pub fn dispatch(&mut self, event: FormEvent) -> Vec<Effect> {
        let transition = handle(std::mem::take(&mut self.state), event);
        self.state = transition.state;
        transition.effects
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }
}

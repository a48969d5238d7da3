//! Shows the detail panel of the selected payment method.

use crate::model::PaymentMethod;

use super::effect::{Effect, Element};
use super::state::FormState;

/// Shows the panel matching `value` and hides the rest.
///
/// A value outside the known methods matches nothing, so every panel is hidden.
pub(crate) fn switch_payment(state: &mut FormState, value: String) -> Vec<Effect> {
    let selected = PaymentMethod::from_value(&value);
    state.payment.value = value;
    PaymentMethod::all()
        .iter()
        .map(|&method| {
            let visible = selected == Some(method);
            state.panels.set_visible(method, visible);
            Effect::SetVisible(Element::PaymentPanel(method), visible)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn each_method_shows_only_its_panel() {
        for &method in PaymentMethod::all() {
            let mut state = FormState::default();
            let effects = switch_payment(&mut state, method.value().into());
            assert_eq!(state.panels.visible(), vec![method]);
            assert_eq!(state.payment_method(), Some(method));
            assert_eq!(effects.len(), 3);
            assert!(effects.contains(&Effect::SetVisible(Element::PaymentPanel(method), true)));
        }
    }

    #[test]
    fn unknown_value_hides_all_panels() {
        let mut state = FormState::default();
        let effects = switch_payment(&mut state, "select method".into());
        assert!(state.panels.visible().is_empty());
        assert!(
            effects
                .iter()
                .all(|e| matches!(e, Effect::SetVisible(Element::PaymentPanel(_), false)))
        );
        assert_eq!(state.payment.value, "select method");
    }

    #[test]
    fn switching_back_restores_credit_card() {
        let mut state = FormState::default();
        switch_payment(&mut state, "bitcoin".into());
        switch_payment(&mut state, "credit-card".into());
        assert_eq!(state.panels.visible(), vec![PaymentMethod::CreditCard]);
    }
}

//! The single form-state value every handler reads and updates.

use crate::model::{Activity, ColorOption, JobRole, PaymentMethod};

use super::calculator::SelectionSet;
use super::effect::{Effect, Element, Region};
use super::event::TextField;

/// One input or control on the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldState {
    pub value: String,
    pub enabled: bool,
    pub visible: bool,
}

impl FieldState {
    /// Creates a visible, enabled field holding `value`.
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            enabled: true,
            visible: true,
        }
    }
}

impl Default for FieldState {
    fn default() -> Self {
        Self::new("")
    }
}

/// A color option together with its current presentation flags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorChoice {
    pub option: ColorOption,
    pub visible: bool,
    pub selected: bool,
}

/// Validity marker of one region.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum RegionStatus {
    #[default]
    Untouched,
    Valid,
    Invalid(String),
}

/// Markers for every region, in check order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RegionMarkers([RegionStatus; 4]);

impl RegionMarkers {
    fn slot(region: Region) -> usize {
        match region {
            Region::Name => 0,
            Region::Email => 1,
            Region::Activities => 2,
            Region::Payment => 3,
        }
    }

    pub fn status(&self, region: Region) -> &RegionStatus {
        &self.0[Self::slot(region)]
    }

    /// Marks `region` valid and returns the matching effect.
    pub fn mark_valid(&mut self, region: Region) -> Effect {
        self.0[Self::slot(region)] = RegionStatus::Valid;
        Effect::MarkValid(region)
    }

    /// Marks `region` invalid with `message` and returns the matching effect.
    pub fn mark_invalid(&mut self, region: Region, message: impl Into<String>) -> Effect {
        let message = message.into();
        self.0[Self::slot(region)] = RegionStatus::Invalid(message.clone());
        Effect::MarkInvalid(region, message)
    }
}

/// Visibility of the three payment detail panels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaymentPanels {
    pub credit_card: bool,
    pub paypal: bool,
    pub bitcoin: bool,
}

impl PaymentPanels {
    pub fn is_visible(&self, method: PaymentMethod) -> bool {
        match method {
            PaymentMethod::CreditCard => self.credit_card,
            PaymentMethod::Paypal => self.paypal,
            PaymentMethod::Bitcoin => self.bitcoin,
        }
    }

    pub fn set_visible(&mut self, method: PaymentMethod, visible: bool) {
        match method {
            PaymentMethod::CreditCard => self.credit_card = visible,
            PaymentMethod::Paypal => self.paypal = visible,
            PaymentMethod::Bitcoin => self.bitcoin = visible,
        }
    }

    /// Methods whose panel is currently shown.
    pub fn visible(&self) -> Vec<PaymentMethod> {
        PaymentMethod::all()
            .iter()
            .copied()
            .filter(|m| self.is_visible(*m))
            .collect()
    }
}

/// Live state of the whole registration form.
///
/// [`FormState::default`] is the state of the freshly rendered markup, before
/// the [`Loaded`](super::FormEvent::Loaded) event applies the initial defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormState {
    pub name: FieldState,
    pub email: FieldState,
    pub job_role: FieldState,
    pub other_job_role: FieldState,
    pub design: FieldState,
    /// The color select. Its value mirrors the selected option.
    pub color: FieldState,
    pub color_options: Vec<ColorChoice>,
    pub activities: SelectionSet,
    /// Activity checkbox currently carrying the focus highlight.
    pub highlighted: Option<usize>,
    pub payment: FieldState,
    pub panels: PaymentPanels,
    pub card_number: FieldState,
    pub zip_code: FieldState,
    pub cvv: FieldState,
    pub regions: RegionMarkers,
    pub focus: Option<Element>,
}

impl Default for FormState {
    fn default() -> Self {
        Self {
            name: FieldState::default(),
            email: FieldState::default(),
            job_role: FieldState::new(JobRole::default().value()),
            other_job_role: FieldState::default(),
            design: FieldState::default(),
            color: FieldState::default(),
            color_options: ColorOption::all()
                .iter()
                .map(|&option| ColorChoice {
                    option,
                    visible: true,
                    selected: false,
                })
                .collect(),
            activities: SelectionSet::new(Activity::all()),
            highlighted: None,
            payment: FieldState::default(),
            panels: PaymentPanels {
                credit_card: true,
                paypal: true,
                bitcoin: true,
            },
            card_number: FieldState::default(),
            zip_code: FieldState::default(),
            cvv: FieldState::default(),
            regions: RegionMarkers::default(),
            focus: None,
        }
    }
}

impl FormState {
    /// Returns the text input backing `field`.
    pub fn text(&self, field: TextField) -> &FieldState {
        match field {
            TextField::Name => &self.name,
            TextField::Email => &self.email,
            TextField::OtherJobRole => &self.other_job_role,
            TextField::CardNumber => &self.card_number,
            TextField::ZipCode => &self.zip_code,
            TextField::Cvv => &self.cvv,
        }
    }

    pub fn text_mut(&mut self, field: TextField) -> &mut FieldState {
        match field {
            TextField::Name => &mut self.name,
            TextField::Email => &mut self.email,
            TextField::OtherJobRole => &mut self.other_job_role,
            TextField::CardNumber => &mut self.card_number,
            TextField::ZipCode => &mut self.zip_code,
            TextField::Cvv => &mut self.cvv,
        }
    }

    /// The selected payment method, if the select holds a known value.
    pub fn payment_method(&self) -> Option<PaymentMethod> {
        PaymentMethod::from_value(&self.payment.value)
    }

    /// The selected color option, if any.
    pub fn selected_color(&self) -> Option<&ColorOption> {
        self.color_options
            .iter()
            .find(|c| c.selected)
            .map(|c| &c.option)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn markup_state_shows_everything() {
        let state = FormState::default();
        assert!(state.other_job_role.visible);
        assert!(state.color.enabled);
        assert!(state.color_options.iter().all(|c| c.visible && !c.selected));
        assert_eq!(state.panels.visible(), PaymentMethod::all().to_vec());
        assert_eq!(state.payment_method(), None);
    }

    #[test]
    fn regions_start_untouched() {
        let state = FormState::default();
        for region in Region::all() {
            assert_eq!(state.regions.status(region), &RegionStatus::Untouched);
        }
    }

    #[test]
    fn mark_invalid_then_valid() {
        let mut markers = RegionMarkers::default();
        let effect = markers.mark_invalid(Region::Email, "Invalid email format");
        assert_eq!(
            effect,
            Effect::MarkInvalid(Region::Email, "Invalid email format".into())
        );
        assert_eq!(
            markers.status(Region::Email),
            &RegionStatus::Invalid("Invalid email format".into())
        );
        assert_eq!(markers.mark_valid(Region::Email), Effect::MarkValid(Region::Email));
        assert_eq!(markers.status(Region::Email), &RegionStatus::Valid);
        assert_eq!(markers.status(Region::Name), &RegionStatus::Untouched);
    }

    #[test]
    fn text_mut_targets_matching_field() {
        let mut state = FormState::default();
        state.text_mut(TextField::ZipCode).value = "12345".into();
        assert_eq!(state.zip_code.value, "12345");
        assert_eq!(state.text(TextField::ZipCode).value, "12345");
        assert_eq!(state.text(TextField::Cvv).value, "");
    }

    #[test]
    fn panels_toggle_individually() {
        let mut panels = PaymentPanels {
            credit_card: false,
            paypal: false,
            bitcoin: false,
        };
        panels.set_visible(PaymentMethod::Bitcoin, true);
        assert_eq!(panels.visible(), vec![PaymentMethod::Bitcoin]);
    }
}

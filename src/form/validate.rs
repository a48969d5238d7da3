//! Submission-time validation of every region.

use tracing::info;

use crate::model::{
    PaymentMethod, ValidationError, validate_activities, validate_card_details, validate_email,
    validate_name,
};

use super::effect::{Effect, Region};
use super::state::FormState;

/// Outcome of one submission attempt, one entry per region in check order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationReport {
    outcomes: Vec<(Region, Result<(), ValidationError>)>,
}

impl ValidationReport {
    /// `true` when every check passed.
    pub fn allowed(&self) -> bool {
        self.outcomes.iter().all(|(_, outcome)| outcome.is_ok())
    }

    pub fn outcome(&self, region: Region) -> Option<&Result<(), ValidationError>> {
        self.outcomes
            .iter()
            .find(|(r, _)| *r == region)
            .map(|(_, outcome)| outcome)
    }

    pub fn outcomes(&self) -> &[(Region, Result<(), ValidationError>)] {
        &self.outcomes
    }

    /// Regions that failed, in check order.
    pub fn failed(&self) -> Vec<Region> {
        self.outcomes
            .iter()
            .filter(|(_, outcome)| outcome.is_err())
            .map(|(region, _)| *region)
            .collect()
    }
}

/// Checks card details only when paying by credit card.
fn check_payment(state: &FormState) -> Result<(), ValidationError> {
    match state.payment_method() {
        Some(PaymentMethod::CreditCard) => validate_card_details(
            &state.card_number.value,
            &state.zip_code.value,
            &state.cvv.value,
        ),
        _ => Ok(()),
    }
}

/// Runs every check against `state`. A failing check never skips the others.
pub fn validate(state: &FormState) -> ValidationReport {
    ValidationReport {
        outcomes: vec![
            (Region::Name, validate_name(&state.name.value)),
            (Region::Email, validate_email(&state.email.value)),
            (
                Region::Activities,
                validate_activities(state.activities.checked_count()),
            ),
            (Region::Payment, check_payment(state)),
        ],
    }
}

/// Validates, marks every region, and cancels the submission on any failure.
pub(crate) fn submit(state: &mut FormState) -> Vec<Effect> {
    let report = validate(state);
    let mut effects: Vec<Effect> = report
        .outcomes()
        .iter()
        .map(|(region, outcome)| match outcome {
            Ok(()) => state.regions.mark_valid(*region),
            Err(e) => state.regions.mark_invalid(*region, e.to_string()),
        })
        .collect();

    if report.allowed() {
        info!("registration submitted");
    } else {
        info!(failed = ?report.failed(), "submission cancelled");
        effects.push(Effect::CancelSubmission);
    }
    effects
}

//! Snapshot of an accepted registration, handed to whatever transport the host uses.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::model::PaymentMethod;

use super::conditional::shows_other_job_role;
use super::state::FormState;

/// The parts of the card a receipt may carry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CardSummary {
    pub last_four: String,
    pub zip_code: String,
}

/// A registration accepted by validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Registration {
    pub name: String,
    pub email: String,
    pub job_role: String,
    /// Free-text role, present only when the "other" role was chosen.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub other_job_role: Option<String>,
    pub design: Option<String>,
    pub color: Option<String>,
    /// Names of the checked activities.
    pub activities: Vec<String>,
    pub total: u32,
    pub payment: Option<PaymentMethod>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub card: Option<CardSummary>,
    pub submitted_at: DateTime<Utc>,
}

impl Registration {
    /// Captures the submitted values from `state`.
    pub fn from_state(state: &FormState, submitted_at: DateTime<Utc>) -> Self {
        let payment = state.payment_method();
        let card = (payment == Some(PaymentMethod::CreditCard)).then(|| CardSummary {
            last_four: last_four(state.card_number.value.trim()),
            zip_code: state.zip_code.value.trim().to_string(),
        });
        let other_job_role = shows_other_job_role(&state.job_role.value)
            .then(|| state.other_job_role.value.trim().to_string());

        Self {
            name: state.name.value.trim().to_string(),
            email: state.email.value.trim().to_string(),
            job_role: state.job_role.value.clone(),
            other_job_role,
            design: (!state.design.value.is_empty()).then(|| state.design.value.clone()),
            color: state.selected_color().map(|c| c.value.to_string()),
            activities: state
                .activities
                .checked()
                .map(|a| a.name.to_string())
                .collect(),
            total: state.activities.total(),
            payment,
            card,
            submitted_at,
        }
    }
}

fn last_four(card_number: &str) -> String {
    let skip = card_number.chars().count().saturating_sub(4);
    card_number.chars().skip(skip).collect()
}

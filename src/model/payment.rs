use std::fmt;

use serde::{Deserialize, Serialize};

/// How the attendee pays. Each method owns one detail panel on the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum PaymentMethod {
    #[default]
    CreditCard,
    Paypal,
    Bitcoin,
}

static ALL_METHODS: &[PaymentMethod] = &[
    PaymentMethod::CreditCard,
    PaymentMethod::Paypal,
    PaymentMethod::Bitcoin,
];

impl PaymentMethod {
    /// Returns the select-option value for this method.
    pub fn value(&self) -> &'static str {
        match self {
            PaymentMethod::CreditCard => "credit-card",
            PaymentMethod::Paypal => "paypal",
            PaymentMethod::Bitcoin => "bitcoin",
        }
    }

    /// Human-readable option label.
    pub fn label(&self) -> &'static str {
        match self {
            PaymentMethod::CreditCard => "Credit Card",
            PaymentMethod::Paypal => "PayPal",
            PaymentMethod::Bitcoin => "Bitcoin",
        }
    }

    /// Looks up a method by its select-option value.
    pub fn from_value(value: &str) -> Option<Self> {
        ALL_METHODS.iter().copied().find(|m| m.value() == value)
    }

    /// Returns all methods in display order.
    pub fn all() -> &'static [PaymentMethod] {
        ALL_METHODS
    }
}

#[mutants::skip]
impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn values_match_option_values() {
        assert_eq!(PaymentMethod::CreditCard.value(), "credit-card");
        assert_eq!(PaymentMethod::Paypal.value(), "paypal");
        assert_eq!(PaymentMethod::Bitcoin.value(), "bitcoin");
    }

    #[test]
    fn from_value_round_trips_every_method() {
        for method in PaymentMethod::all() {
            assert_eq!(PaymentMethod::from_value(method.value()), Some(*method));
        }
    }

    #[test]
    fn from_value_unknown_is_none() {
        assert_eq!(PaymentMethod::from_value("select method"), None);
        assert_eq!(PaymentMethod::from_value(""), None);
        assert_eq!(PaymentMethod::from_value("Credit-Card"), None);
    }

    #[test]
    fn default_is_credit_card() {
        assert_eq!(PaymentMethod::default(), PaymentMethod::CreditCard);
    }

    #[test]
    fn serializes_as_option_value() {
        let json = serde_json::to_string(&PaymentMethod::CreditCard).unwrap();
        assert_eq!(json, "\"credit-card\"");
    }
}

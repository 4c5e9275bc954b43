use super::money::MonetaryAmount;
use serde::Deserialize;

/// A single credit-card-paid meal event eligible for reward evaluation.
///
/// Created by the caller and never mutated; the coordinator passes the
/// identifiers through to the stores without interpreting their format.
#[derive(Debug, Deserialize, PartialEq, Clone)]
pub struct Dining {
    pub credit_card_number: String,
    pub merchant_number: String,
    pub amount: MonetaryAmount,
}

impl Dining {
    pub fn new(
        credit_card_number: impl Into<String>,
        merchant_number: impl Into<String>,
        amount: MonetaryAmount,
    ) -> Self {
        Self {
            credit_card_number: credit_card_number.into(),
            merchant_number: merchant_number.into(),
            amount,
        }
    }
}

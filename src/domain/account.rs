use super::money::{MonetaryAmount, Percentage};
use serde::{Deserialize, Serialize};

/// A recipient of a fractional share of an account's rewards.
///
/// Allocation percentages across an account's beneficiaries sum to 100;
/// that invariant is maintained by whoever edits the beneficiary set, not
/// re-checked here.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct Beneficiary {
    pub name: String,
    pub allocation_percentage: Percentage,
    #[serde(default)]
    pub savings: MonetaryAmount,
}

impl Beneficiary {
    pub fn new(name: impl Into<String>, allocation_percentage: Percentage) -> Self {
        Self {
            name: name.into(),
            allocation_percentage,
            savings: MonetaryAmount::ZERO,
        }
    }

    fn credit(&mut self, amount: MonetaryAmount) {
        self.savings += amount;
    }
}

/// A reward-program member, looked up by the credit card that paid a dining.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct Account {
    pub number: String,
    pub name: String,
    pub credit_card_number: String,
    pub beneficiaries: Vec<Beneficiary>,
}

impl Account {
    pub fn new(
        number: impl Into<String>,
        name: impl Into<String>,
        credit_card_number: impl Into<String>,
    ) -> Self {
        Self {
            number: number.into(),
            name: name.into(),
            credit_card_number: credit_card_number.into(),
            beneficiaries: Vec::new(),
        }
    }

    pub fn add_beneficiary(&mut self, beneficiary: Beneficiary) {
        self.beneficiaries.push(beneficiary);
    }

    /// Distributes `amount` across the beneficiaries per their allocation
    /// percentages, crediting each beneficiary's savings.
    ///
    /// Each share is rounded to money precision; the rounding remainder goes
    /// to the first beneficiary, so the distributions sum exactly to `amount`.
    pub fn make_contribution(&mut self, amount: MonetaryAmount) -> Contribution {
        let mut shares: Vec<MonetaryAmount> = self
            .beneficiaries
            .iter()
            .map(|b| b.allocation_percentage.of(amount))
            .collect();

        let allocated = shares
            .iter()
            .fold(MonetaryAmount::ZERO, |sum, share| sum + *share);
        if let Some(first) = shares.first_mut() {
            *first = *first + (amount - allocated);
        }

        let distributions = self
            .beneficiaries
            .iter_mut()
            .zip(shares)
            .map(|(beneficiary, share)| {
                beneficiary.credit(share);
                Distribution {
                    beneficiary: beneficiary.name.clone(),
                    amount: share,
                    percentage: beneficiary.allocation_percentage,
                    total_savings: beneficiary.savings,
                }
            })
            .collect();

        Contribution::new(amount, distributions)
    }
}

/// One beneficiary's slice of a contribution.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct Distribution {
    pub beneficiary: String,
    pub amount: MonetaryAmount,
    pub percentage: Percentage,
    pub total_savings: MonetaryAmount,
}

/// A benefit amount distributed across an account's beneficiaries.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct Contribution {
    amount: MonetaryAmount,
    distributions: Vec<Distribution>,
}

impl Contribution {
    pub fn new(amount: MonetaryAmount, distributions: Vec<Distribution>) -> Self {
        Self {
            amount,
            distributions,
        }
    }

    pub fn amount(&self) -> MonetaryAmount {
        self.amount
    }

    /// Distributions in beneficiary order.
    pub fn distributions(&self) -> &[Distribution] {
        &self.distributions
    }

    pub fn distribution_for(&self, beneficiary: &str) -> Option<&Distribution> {
        self.distributions
            .iter()
            .find(|d| d.beneficiary == beneficiary)
    }
}

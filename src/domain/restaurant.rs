use super::account::Account;
use super::dining::Dining;
use super::money::{MonetaryAmount, Percentage};
use crate::error::{Result, RewardError};
use serde::{Deserialize, Serialize};

/// How a restaurant computes the benefit for a qualifying dining.
///
/// The variant is selected per restaurant at load time by its external data
/// source; the coordinator only sees the computed amount.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
#[serde(rename_all = "lowercase", tag = "kind")]
pub enum BenefitPolicy {
    /// A percentage of the dining amount.
    Percentage { rate: Percentage },
    /// A fixed bonus regardless of the dining amount.
    Flat { amount: MonetaryAmount },
    /// Benefit currently unavailable; computes to zero.
    Never,
}

/// A merchant enrolled in the reward network. Read-only to the coordinator.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct Restaurant {
    pub merchant_number: String,
    pub name: String,
    pub benefit_policy: BenefitPolicy,
}

impl Restaurant {
    pub fn new(
        merchant_number: impl Into<String>,
        name: impl Into<String>,
        benefit_policy: BenefitPolicy,
    ) -> Self {
        Self {
            merchant_number: merchant_number.into(),
            name: name.into(),
            benefit_policy,
        }
    }

    /// Computes the benefit this restaurant grants for a dining by the
    /// account holder. Always a non-negative amount at money precision.
    ///
    /// Fails with a calculation error when externally loaded policy data
    /// carries a rate outside 0-100.
    pub fn calculate_benefit(&self, _account: &Account, dining: &Dining) -> Result<MonetaryAmount> {
        let benefit = match &self.benefit_policy {
            BenefitPolicy::Percentage { rate } => {
                let rate = Percentage::new(rate.value()).map_err(|_| {
                    RewardError::BenefitCalculation(format!(
                        "restaurant {} has benefit rate {} outside 0-100",
                        self.merchant_number,
                        rate.value()
                    ))
                })?;
                rate.of(dining.amount)
            }
            BenefitPolicy::Flat { amount } => amount.rounded(),
            BenefitPolicy::Never => MonetaryAmount::ZERO,
        };
        Ok(benefit)
    }
}

use super::account::Contribution;
use serde::{Deserialize, Serialize};

/// The durable record proving a reward was granted for a dining event.
///
/// Created only by the reward recorder once the confirmation has been
/// persisted; never mutated afterwards.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct RewardConfirmation {
    confirmation_number: String,
    contribution: Contribution,
}

impl RewardConfirmation {
    pub fn new(confirmation_number: impl Into<String>, contribution: Contribution) -> Self {
        Self {
            confirmation_number: confirmation_number.into(),
            contribution,
        }
    }

    pub fn confirmation_number(&self) -> &str {
        &self.confirmation_number
    }

    pub fn contribution(&self) -> &Contribution {
        &self.contribution
    }
}

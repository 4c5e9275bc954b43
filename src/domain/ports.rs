use super::account::{Account, Contribution};
use super::dining::Dining;
use super::restaurant::Restaurant;
use super::reward::RewardConfirmation;
use crate::error::Result;
use async_trait::async_trait;

/// Loads and updates reward-program accounts.
#[async_trait]
pub trait AccountStore: Send + Sync {
    async fn find_by_credit_card(&self, credit_card_number: &str) -> Result<Option<Account>>;
    /// Persists the account whose beneficiary balances changed.
    async fn update_beneficiaries(&self, account: &Account) -> Result<()>;
}

/// Loads restaurants that determine how much to reward.
#[async_trait]
pub trait RestaurantStore: Send + Sync {
    async fn find_by_merchant_number(&self, merchant_number: &str) -> Result<Option<Restaurant>>;
}

/// Records confirmations of successful reward transactions.
#[async_trait]
pub trait RewardRecorder: Send + Sync {
    async fn confirm_reward(
        &self,
        contribution: &Contribution,
        dining: &Dining,
    ) -> Result<RewardConfirmation>;
}

pub type AccountStoreBox = Box<dyn AccountStore>;
pub type RestaurantStoreBox = Box<dyn RestaurantStore>;
pub type RewardRecorderBox = Box<dyn RewardRecorder>;

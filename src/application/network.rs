use crate::domain::dining::Dining;
use crate::domain::ports::{AccountStoreBox, RestaurantStoreBox, RewardRecorderBox};
use crate::domain::reward::RewardConfirmation;
use crate::error::{Result, RewardError};
use tracing::{debug, info};

/// Rewards an account for dining at a restaurant.
///
/// `RewardNetwork` owns the three collaborator ports and runs the reward
/// sequence for each dining: account lookup, restaurant lookup, benefit
/// calculation, contribution, account update, confirmation. Any collaborator
/// failure aborts the sequence and surfaces unchanged to the caller.
pub struct RewardNetwork {
    account_store: AccountStoreBox,
    restaurant_store: RestaurantStoreBox,
    reward_recorder: RewardRecorderBox,
}

impl RewardNetwork {
    /// Creates a new reward network.
    ///
    /// # Arguments
    ///
    /// * `account_store` - The store for loading and updating accounts to reward.
    /// * `restaurant_store` - The store for loading restaurants that determine how much to reward.
    /// * `reward_recorder` - The recorder for confirmations of successful rewards.
    pub fn new(
        account_store: AccountStoreBox,
        restaurant_store: RestaurantStoreBox,
        reward_recorder: RewardRecorderBox,
    ) -> Self {
        Self {
            account_store,
            restaurant_store,
            reward_recorder,
        }
    }

    /// Runs the reward sequence for a single dining event.
    ///
    /// The account update strictly precedes confirmation recording; a
    /// recording failure after a successful update leaves the account
    /// mutated with no confirmation. Wrapping both in one atomic unit is
    /// the enclosing boundary's concern, not handled here.
    pub async fn reward_account_for(&self, dining: &Dining) -> Result<RewardConfirmation> {
        let mut account = self
            .account_store
            .find_by_credit_card(&dining.credit_card_number)
            .await?
            .ok_or_else(|| RewardError::AccountNotFound(dining.credit_card_number.clone()))?;
        debug!(account = %account.number, "account matched");

        let restaurant = self
            .restaurant_store
            .find_by_merchant_number(&dining.merchant_number)
            .await?
            .ok_or_else(|| RewardError::RestaurantNotFound(dining.merchant_number.clone()))?;
        debug!(restaurant = %restaurant.name, "restaurant matched");

        let benefit = restaurant.calculate_benefit(&account, dining)?;
        let contribution = account.make_contribution(benefit);

        self.account_store.update_beneficiaries(&account).await?;

        let confirmation = self
            .reward_recorder
            .confirm_reward(&contribution, dining)
            .await?;
        info!(
            confirmation = confirmation.confirmation_number(),
            amount = %contribution.amount(),
            "reward confirmed"
        );

        Ok(confirmation)
    }
}

use crate::domain::account::{Account, Contribution};
use crate::domain::dining::Dining;
use crate::domain::ports::{AccountStore, RestaurantStore, RewardRecorder};
use crate::domain::restaurant::Restaurant;
use crate::domain::reward::RewardConfirmation;
use crate::error::{Result, RewardError};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::sync::RwLock;

/// A thread-safe in-memory store for reward accounts.
///
/// Uses `Arc<RwLock<HashMap>>` to allow shared concurrent access. Accounts
/// are keyed by account number; credit card lookup scans the values.
#[derive(Default, Clone)]
pub struct InMemoryAccountStore {
    accounts: Arc<RwLock<HashMap<String, Account>>>,
}

impl InMemoryAccountStore {
    /// Creates a new, empty in-memory account store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds the store with an account.
    pub async fn add(&self, account: Account) {
        let mut accounts = self.accounts.write().await;
        accounts.insert(account.number.clone(), account);
    }
}

#[async_trait]
impl AccountStore for InMemoryAccountStore {
    async fn find_by_credit_card(&self, credit_card_number: &str) -> Result<Option<Account>> {
        let accounts = self.accounts.read().await;
        Ok(accounts
            .values()
            .find(|a| a.credit_card_number == credit_card_number)
            .cloned())
    }

    async fn update_beneficiaries(&self, account: &Account) -> Result<()> {
        let mut accounts = self.accounts.write().await;
        if !accounts.contains_key(&account.number) {
            return Err(RewardError::AccountUpdate(format!(
                "unknown account {}",
                account.number
            )));
        }
        accounts.insert(account.number.clone(), account.clone());
        Ok(())
    }
}

/// A thread-safe in-memory store for restaurants, keyed by merchant number.
#[derive(Default, Clone)]
pub struct InMemoryRestaurantStore {
    restaurants: Arc<RwLock<HashMap<String, Restaurant>>>,
}

impl InMemoryRestaurantStore {
    /// Creates a new, empty in-memory restaurant store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds the store with a restaurant.
    pub async fn add(&self, restaurant: Restaurant) {
        let mut restaurants = self.restaurants.write().await;
        restaurants.insert(restaurant.merchant_number.clone(), restaurant);
    }
}

#[async_trait]
impl RestaurantStore for InMemoryRestaurantStore {
    async fn find_by_merchant_number(&self, merchant_number: &str) -> Result<Option<Restaurant>> {
        let restaurants = self.restaurants.read().await;
        Ok(restaurants.get(merchant_number).cloned())
    }
}

/// An in-memory reward recorder with sequential confirmation numbers.
#[derive(Default, Clone)]
pub struct InMemoryRewardRecorder {
    confirmations: Arc<RwLock<Vec<RewardConfirmation>>>,
    next_confirmation: Arc<AtomicU64>,
}

impl InMemoryRewardRecorder {
    /// Creates a new recorder with no confirmations.
    pub fn new() -> Self {
        Self::default()
    }

    /// All confirmations recorded so far, in recording order.
    pub async fn confirmations(&self) -> Vec<RewardConfirmation> {
        self.confirmations.read().await.clone()
    }
}

#[async_trait]
impl RewardRecorder for InMemoryRewardRecorder {
    async fn confirm_reward(
        &self,
        contribution: &Contribution,
        _dining: &Dining,
    ) -> Result<RewardConfirmation> {
        let number = self.next_confirmation.fetch_add(1, Ordering::SeqCst) + 1;
        let confirmation = RewardConfirmation::new(format!("{number:010}"), contribution.clone());
        let mut confirmations = self.confirmations.write().await;
        confirmations.push(confirmation.clone());
        Ok(confirmation)
    }
}

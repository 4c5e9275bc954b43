use crate::domain::account::Account;
use crate::domain::restaurant::Restaurant;
use crate::error::Result;
use crate::infrastructure::in_memory::{InMemoryAccountStore, InMemoryRestaurantStore};
use serde::{Deserialize, Serialize};
use std::io::Read;

/// External data source for the reward network: the enrolled accounts and
/// restaurants, with each restaurant's benefit policy selected at load time.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct NetworkConfig {
    pub accounts: Vec<Account>,
    pub restaurants: Vec<Restaurant>,
}

impl NetworkConfig {
    /// Reads a network config document from any JSON source.
    pub fn from_reader<R: Read>(source: R) -> Result<Self> {
        Ok(serde_json::from_reader(source)?)
    }

    /// Builds seeded in-memory stores from this config.
    pub async fn into_stores(self) -> (InMemoryAccountStore, InMemoryRestaurantStore) {
        let accounts = InMemoryAccountStore::new();
        for account in self.accounts {
            accounts.add(account).await;
        }
        let restaurants = InMemoryRestaurantStore::new();
        for restaurant in self.restaurants {
            restaurants.add(restaurant).await;
        }
        (accounts, restaurants)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::{AccountStore, RestaurantStore};
    use crate::domain::restaurant::BenefitPolicy;
    use rust_decimal_macros::dec;

    const CONFIG: &str = r#"{
        "accounts": [
            {
                "number": "123456789",
                "name": "Keith and Keri Donald",
                "credit_card_number": "1234123412341234",
                "beneficiaries": [
                    { "name": "Annabelle", "allocation_percentage": "80" },
                    { "name": "Corgan", "allocation_percentage": "20" }
                ]
            }
        ],
        "restaurants": [
            {
                "merchant_number": "123456789",
                "name": "AppleBees",
                "benefit_policy": { "kind": "percentage", "rate": "8" }
            }
        ]
    }"#;

    #[tokio::test]
    async fn test_config_seeds_stores() {
        let config = NetworkConfig::from_reader(CONFIG.as_bytes()).unwrap();
        let (accounts, restaurants) = config.into_stores().await;

        let account = accounts
            .find_by_credit_card("1234123412341234")
            .await
            .unwrap()
            .unwrap();
        assert_eq!(account.beneficiaries.len(), 2);
        // Savings default to zero when absent from the document.
        assert_eq!(
            account.beneficiaries[0].savings,
            crate::domain::money::MonetaryAmount::ZERO
        );

        let restaurant = restaurants
            .find_by_merchant_number("123456789")
            .await
            .unwrap()
            .unwrap();
        assert_eq!(
            restaurant.benefit_policy,
            BenefitPolicy::Percentage {
                rate: dec!(8).try_into().unwrap()
            }
        );
    }

    #[test]
    fn test_malformed_config_fails() {
        let result = NetworkConfig::from_reader("{ not json".as_bytes());
        assert!(result.is_err());
    }
}

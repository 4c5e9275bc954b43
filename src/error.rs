use thiserror::Error;

pub type Result<T> = std::result::Result<T, RewardError>;

#[derive(Error, Debug)]
pub enum RewardError {
    #[error("no account found for credit card {0}")]
    AccountNotFound(String),
    #[error("no restaurant found for merchant number {0}")]
    RestaurantNotFound(String),
    #[error("benefit calculation failed: {0}")]
    BenefitCalculation(String),
    #[error("account update failed: {0}")]
    AccountUpdate(String),
    #[error("reward recording failed: {0}")]
    Recording(String),
    #[error("validation error: {0}")]
    Validation(String),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

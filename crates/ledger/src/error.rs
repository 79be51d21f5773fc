//! The module contains the errors the ledger can throw.
//!
//! Mutations never fail: an unknown id is a no-op. Errors only surface while
//! building a [`TransactionStore`] or loading seed records and statements.
//!
//!  [`TransactionStore`]: super::store::TransactionStore
use thiserror::Error;

/// Ledger custom errors.
#[derive(Error, Debug)]
pub enum LedgerError {
    #[error("\"{0}\" id already present!")]
    DuplicateId(String),
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),
    #[error("Invalid date: {0}")]
    InvalidDate(String),
    #[error("Negative amount on transaction \"{0}\"")]
    NegativeAmount(String),
    #[error("Transaction \"{0}\" has both outflow and inflow")]
    BothAmounts(String),
    #[error("Unsupported currency: {0}")]
    UnsupportedCurrency(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Csv(#[from] csv::Error),
}

impl PartialEq for LedgerError {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::DuplicateId(a), Self::DuplicateId(b)) => a == b,
            (Self::InvalidAmount(a), Self::InvalidAmount(b)) => a == b,
            (Self::InvalidDate(a), Self::InvalidDate(b)) => a == b,
            (Self::NegativeAmount(a), Self::NegativeAmount(b)) => a == b,
            (Self::BothAmounts(a), Self::BothAmounts(b)) => a == b,
            (Self::UnsupportedCurrency(a), Self::UnsupportedCurrency(b)) => a == b,
            (Self::Io(a), Self::Io(b)) => a.to_string() == b.to_string(),
            (Self::Json(a), Self::Json(b)) => a.to_string() == b.to_string(),
            (Self::Csv(a), Self::Csv(b)) => a.to_string() == b.to_string(),
            _ => false,
        }
    }
}

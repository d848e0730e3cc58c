use async_graphql::ErrorExtensions;
use thiserror::Error;

use crate::structures::{Money, StationID};

#[derive(Debug, Error, Clone, PartialEq)]
pub enum MetroError {
    #[error("station not found: {0}")]
    StationNotFound(String),
    #[error("source and destination stations are the same")]
    SameStation,
    #[error("no route available between source and destination")]
    NoRoute,
    #[error("insufficient balance: fare is {fare}, balance is {balance}")]
    InsufficientBalance { fare: u64, balance: Money },
    #[error("invalid amount {0}: must be a positive value")]
    InvalidAmount(f64),
    #[error("station id {0} is out of range")]
    OutOfRange(StationID),
    #[error("no account for user {0}")]
    AccountNotFound(String),
    #[error("invalid admin credentials")]
    Unauthorized,
}

impl MetroError {
    pub fn code(&self) -> &'static str {
        match self {
            MetroError::StationNotFound(_) => "STATION_NOT_FOUND",
            MetroError::SameStation => "SAME_STATION",
            MetroError::NoRoute => "NO_ROUTE",
            MetroError::InsufficientBalance { .. } => "INSUFFICIENT_BALANCE",
            MetroError::InvalidAmount(_) => "INVALID_AMOUNT",
            MetroError::OutOfRange(_) => "OUT_OF_RANGE",
            MetroError::AccountNotFound(_) => "ACCOUNT_NOT_FOUND",
            MetroError::Unauthorized => "UNAUTHORIZED",
        }
    }
}

impl ErrorExtensions for MetroError {
    fn extend(&self) -> async_graphql::Error {
        async_graphql::Error::new(self.to_string()).extend_with(|_, e| e.set("code", self.code()))
    }
}

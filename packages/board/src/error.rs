// ABOUTME: Error types for the bid tracking board
// ABOUTME: Store construction failures and sign-off rejections

use cotai_core::{BidStatus, ValidationError};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoardError {
    #[error("Duplicate bid id: {0}")]
    DuplicateId(String),

    #[error("Invalid bid '{id}': {source}")]
    InvalidRecord {
        id: String,
        #[source]
        source: ValidationError,
    },

    #[error("Invalid date {year:04}-{month:02}-{day:02}")]
    InvalidDate { year: i32, month: u32, day: u32 },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SignOffError {
    #[error("Credential must be at least {min} characters")]
    CredentialTooShort { min: usize },

    #[error("No sign-off is pending")]
    NotPending,

    #[error("Bid not found: {0}")]
    UnknownBid(String),

    #[error("Bid '{id}' is no longer ready to sign (now {status:?})")]
    NotReadyToSign { id: String, status: BidStatus },
}

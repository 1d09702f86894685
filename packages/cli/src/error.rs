// ABOUTME: Error types for the cotai command line
// ABOUTME: Argument problems detected before a command reaches the board

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("Bid not found: {0}")]
    UnknownBid(String),

    #[error("Invalid date '{0}', expected YYYY-MM-DD")]
    InvalidDate(String),
}

// ABOUTME: Core bid types and validation for CotAi Licitação Hub
// ABOUTME: Foundational package shared by the board engine and the CLI

pub mod types;
pub mod validation;

// Re-export main types
pub use types::{BidRecord, BidStatus, BoardColumn, BOARD_COLUMNS};

// Re-export validation
pub use validation::{validate_bid, ValidationError};

// ABOUTME: Input validation for bid records
// ABOUTME: Required-field checks applied before a record enters the board

use thiserror::Error;

use crate::types::BidRecord;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Field '{0}' is required")]
    EmptyField(&'static str),

    #[error("Unknown bid status: {0}")]
    UnknownStatus(String),
}

/// Validate a bid record before it is admitted to a store
pub fn validate_bid(bid: &BidRecord) -> Result<(), ValidationError> {
    if bid.id.trim().is_empty() {
        return Err(ValidationError::EmptyField("id"));
    }

    if bid.title.trim().is_empty() {
        return Err(ValidationError::EmptyField("title"));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn bid(id: &str, title: &str) -> BidRecord {
        BidRecord::new(
            id,
            title,
            "Tribunal Regional do Trabalho",
            "2025/078",
            NaiveDate::from_ymd_opt(2025, 5, 10).unwrap(),
        )
    }

    #[test]
    fn test_valid_bid_passes() {
        assert!(validate_bid(&bid("bid-3", "Fornecimento de Material de Escritório")).is_ok());
    }

    #[test]
    fn test_blank_id_is_rejected() {
        assert_eq!(
            validate_bid(&bid("  ", "Fornecimento")),
            Err(ValidationError::EmptyField("id"))
        );
    }

    #[test]
    fn test_blank_title_is_rejected() {
        assert_eq!(
            validate_bid(&bid("bid-3", "")),
            Err(ValidationError::EmptyField("title"))
        );
    }

    #[test]
    fn test_empty_organization_and_number_are_allowed() {
        let mut record = bid("bid-3", "Fornecimento");
        record.organization.clear();
        record.number.clear();
        assert!(validate_bid(&record).is_ok());
    }
}

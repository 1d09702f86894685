// ABOUTME: Sign-off confirmation gate for the ready_to_sign -> sent transition
// ABOUTME: Placeholder length check only; nothing is verified against a credential store

use cotai_core::BidStatus;
use tracing::{info, warn};

use crate::error::SignOffError;
use crate::store::BidStore;

/// An open sign-off prompt for one bid
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignOffPrompt {
    bid_id: String,
    min_length: usize,
}

impl SignOffPrompt {
    pub fn open(bid_id: impl Into<String>, min_length: usize) -> Self {
        SignOffPrompt {
            bid_id: bid_id.into(),
            min_length,
        }
    }

    pub fn bid_id(&self) -> &str {
        &self.bid_id
    }

    pub fn min_length(&self) -> usize {
        self.min_length
    }

    /// Length gate. Counts characters, not bytes.
    pub fn check_credential(&self, credential: &str) -> Result<(), SignOffError> {
        if credential.chars().count() < self.min_length {
            return Err(SignOffError::CredentialTooShort {
                min: self.min_length,
            });
        }
        Ok(())
    }

    /// Confirm the sign-off, returning the snapshot with the bid moved to `sent`
    pub fn confirm(&self, store: &BidStore, credential: &str) -> Result<BidStore, SignOffError> {
        if let Err(err) = self.check_credential(credential) {
            warn!(bid_id = %self.bid_id, "Sign-off rejected: credential too short");
            return Err(err);
        }

        let bid = store
            .get(&self.bid_id)
            .ok_or_else(|| SignOffError::UnknownBid(self.bid_id.clone()))?;

        if bid.status != BidStatus::ReadyToSign {
            warn!(bid_id = %self.bid_id, status = bid.status.key(), "Sign-off target moved before confirmation");
            return Err(SignOffError::NotReadyToSign {
                id: self.bid_id.clone(),
                status: bid.status,
            });
        }

        info!(bid_id = %self.bid_id, "Bid signed and sent");
        Ok(store.replace_status(&self.bid_id, BidStatus::Sent))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use cotai_core::BidRecord;
    use rstest::rstest;

    fn store_with(status: BidStatus) -> BidStore {
        BidStore::new(vec![BidRecord::new(
            "bid-5",
            "Construção de Escola Municipal",
            "Prefeitura de Curitiba",
            "2025/102",
            NaiveDate::from_ymd_opt(2025, 7, 25).unwrap(),
        )
        .with_status(status)])
        .unwrap()
    }

    #[rstest]
    #[case("", false)]
    #[case("123", false)]
    #[case("1234", true)]
    #[case("senha-longa", true)]
    #[case("çãõé", true)]
    fn test_check_credential_length(#[case] credential: &str, #[case] accepted: bool) {
        let prompt = SignOffPrompt::open("bid-5", 4);
        assert_eq!(prompt.check_credential(credential).is_ok(), accepted);
    }

    #[test]
    fn test_short_credential_leaves_status() {
        let store = store_with(BidStatus::ReadyToSign);
        let prompt = SignOffPrompt::open("bid-5", 4);

        let result = prompt.confirm(&store, "abc");

        assert_eq!(result, Err(SignOffError::CredentialTooShort { min: 4 }));
        assert_eq!(store.get("bid-5").unwrap().status, BidStatus::ReadyToSign);
    }

    #[test]
    fn test_valid_credential_sends_bid() {
        let store = store_with(BidStatus::ReadyToSign);
        let prompt = SignOffPrompt::open("bid-5", 4);

        let signed = prompt.confirm(&store, "abcd").unwrap();

        assert_eq!(signed.get("bid-5").unwrap().status, BidStatus::Sent);
    }

    #[test]
    fn test_confirm_after_bid_moved() {
        let store = store_with(BidStatus::Won);
        let prompt = SignOffPrompt::open("bid-5", 4);

        assert_eq!(
            prompt.confirm(&store, "abcd"),
            Err(SignOffError::NotReadyToSign {
                id: "bid-5".to_string(),
                status: BidStatus::Won,
            })
        );
    }

    #[test]
    fn test_confirm_unknown_bid() {
        let store = store_with(BidStatus::ReadyToSign);
        let prompt = SignOffPrompt::open("bid-404", 4);

        assert_eq!(
            prompt.confirm(&store, "abcd"),
            Err(SignOffError::UnknownBid("bid-404".to_string()))
        );
    }
}

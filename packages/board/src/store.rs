// ABOUTME: Canonical in-memory list of bid records
// ABOUTME: Immutable-update store: status changes return a new snapshot

use cotai_core::{validate_bid, BidRecord, BidStatus};
use serde::Serialize;
use std::collections::HashSet;
use tracing::debug;

use crate::error::BoardError;

/// Owned snapshot of every tracked bid, in insertion order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BidStore {
    records: Vec<BidRecord>,
}

impl BidStore {
    /// Build a store, rejecting invalid records and duplicate ids
    pub fn new(records: Vec<BidRecord>) -> Result<Self, BoardError> {
        let mut seen = HashSet::with_capacity(records.len());

        for record in &records {
            validate_bid(record).map_err(|source| BoardError::InvalidRecord {
                id: record.id.clone(),
                source,
            })?;

            if !seen.insert(record.id.as_str()) {
                return Err(BoardError::DuplicateId(record.id.clone()));
            }
        }

        Ok(BidStore { records })
    }

    pub fn all(&self) -> &[BidRecord] {
        &self.records
    }

    pub fn get(&self, id: &str) -> Option<&BidRecord> {
        self.records.iter().find(|record| record.id == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Return a new snapshot with the status of `id` replaced.
    ///
    /// Unknown ids leave the snapshot unchanged.
    pub fn replace_status(&self, id: &str, status: BidStatus) -> BidStore {
        if !self.contains(id) {
            debug!(bid_id = id, "replace_status: bid not found, snapshot unchanged");
            return self.clone();
        }

        let records = self
            .records
            .iter()
            .map(|record| {
                if record.id == id {
                    record.clone().with_status(status)
                } else {
                    record.clone()
                }
            })
            .collect();

        BidStore { records }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use cotai_core::ValidationError;
    use pretty_assertions::assert_eq;

    fn bid(id: &str, status: BidStatus) -> BidRecord {
        BidRecord::new(
            id,
            format!("Licitação {}", id),
            "Prefeitura de Curitiba",
            "2025/102",
            NaiveDate::from_ymd_opt(2025, 7, 25).unwrap(),
        )
        .with_status(status)
    }

    #[test]
    fn test_new_store_keeps_insertion_order() {
        let store = BidStore::new(vec![
            bid("bid-2", BidStatus::New),
            bid("bid-1", BidStatus::Sent),
        ])
        .unwrap();

        let ids: Vec<&str> = store.all().iter().map(|b| b.id.as_str()).collect();
        assert_eq!(ids, vec!["bid-2", "bid-1"]);
        assert_eq!(store.len(), 2);
        assert!(!store.is_empty());
    }

    #[test]
    fn test_duplicate_id_is_rejected() {
        let result = BidStore::new(vec![
            bid("bid-1", BidStatus::New),
            bid("bid-1", BidStatus::Won),
        ]);

        assert_eq!(result, Err(BoardError::DuplicateId("bid-1".to_string())));
    }

    #[test]
    fn test_invalid_record_is_rejected() {
        let mut untitled = bid("bid-4", BidStatus::New);
        untitled.title = "   ".to_string();

        let result = BidStore::new(vec![untitled]);

        assert_eq!(
            result,
            Err(BoardError::InvalidRecord {
                id: "bid-4".to_string(),
                source: ValidationError::EmptyField("title"),
            })
        );
    }

    #[test]
    fn test_replace_status_changes_exactly_one_record() {
        let store = BidStore::new(vec![
            bid("bid-1", BidStatus::New),
            bid("bid-2", BidStatus::New),
        ])
        .unwrap();

        let updated = store.replace_status("bid-2", BidStatus::InReview);

        assert_eq!(updated.get("bid-1").unwrap().status, BidStatus::New);
        assert_eq!(updated.get("bid-2").unwrap().status, BidStatus::InReview);
        // The original snapshot is untouched
        assert_eq!(store.get("bid-2").unwrap().status, BidStatus::New);
    }

    #[test]
    fn test_replace_status_unknown_id_is_noop() {
        let store = BidStore::new(vec![bid("bid-1", BidStatus::New)]).unwrap();

        let updated = store.replace_status("bid-404", BidStatus::Won);

        assert_eq!(updated, store);
    }

    #[test]
    fn test_empty_store() {
        let store = BidStore::default();
        assert!(store.is_empty());
        assert!(store.get("bid-1").is_none());
    }
}

// ABOUTME: Board view projection
// ABOUTME: Groups a flat bid list into per-column buckets for rendering

use cotai_core::{BidRecord, BidStatus, BoardColumn};
use serde::Serialize;

/// Shown in place of cards when a column has no bids
pub const EMPTY_COLUMN_PLACEHOLDER: &str = "Nenhuma licitação";

/// One board column and the bids currently in it
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColumnBucket<'a> {
    pub column: BoardColumn,
    pub bids: Vec<&'a BidRecord>,
}

impl<'a> ColumnBucket<'a> {
    pub fn count(&self) -> usize {
        self.bids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bids.is_empty()
    }

    /// Empty-state text, present only when the column has no bids
    pub fn placeholder(&self) -> Option<&'static str> {
        self.is_empty().then_some(EMPTY_COLUMN_PLACEHOLDER)
    }
}

/// Derived board layout. Recomputed from the records on every read.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BoardView<'a> {
    columns: Vec<ColumnBucket<'a>>,
}

impl<'a> BoardView<'a> {
    pub fn columns(&self) -> &[ColumnBucket<'a>] {
        &self.columns
    }

    pub fn column(&self, status: BidStatus) -> Option<&ColumnBucket<'a>> {
        self.columns.iter().find(|bucket| bucket.column.status == status)
    }

    /// Number of bids in the column for `status`; zero if the board has no such column
    pub fn count(&self, status: BidStatus) -> usize {
        self.column(status).map_or(0, ColumnBucket::count)
    }

    pub fn total(&self) -> usize {
        self.columns.iter().map(ColumnBucket::count).sum()
    }

    /// Per-column counts in column order, as shown on the column badges
    pub fn counts(&self) -> Vec<(BidStatus, usize)> {
        self.columns
            .iter()
            .map(|bucket| (bucket.column.status, bucket.count()))
            .collect()
    }
}

/// Group `records` into `columns`.
///
/// Every column is present in the result, empty or not. Within a column bids
/// keep the order of `records`. Records whose status has no column are left out.
pub fn project<'a, I>(records: I, columns: &[BoardColumn]) -> BoardView<'a>
where
    I: IntoIterator<Item = &'a BidRecord>,
{
    let records: Vec<&'a BidRecord> = records.into_iter().collect();

    let columns = columns
        .iter()
        .map(|column| ColumnBucket {
            column: *column,
            bids: records
                .iter()
                .copied()
                .filter(|record| record.status == column.status)
                .collect(),
        })
        .collect();

    BoardView { columns }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use cotai_core::BOARD_COLUMNS;
    use pretty_assertions::assert_eq;

    fn bid(id: &str, status: BidStatus) -> BidRecord {
        BidRecord::new(
            id,
            format!("Licitação {}", id),
            "Ministério da Educação",
            "2025/023",
            NaiveDate::from_ymd_opt(2025, 6, 5).unwrap(),
        )
        .with_status(status)
    }

    #[test]
    fn test_project_groups_by_status_in_insertion_order() {
        let records = vec![
            bid("bid-1", BidStatus::New),
            bid("bid-2", BidStatus::Sent),
            bid("bid-3", BidStatus::New),
        ];

        let view = project(&records, &BOARD_COLUMNS);

        let new_ids: Vec<&str> = view
            .column(BidStatus::New)
            .unwrap()
            .bids
            .iter()
            .map(|b| b.id.as_str())
            .collect();
        assert_eq!(new_ids, vec!["bid-1", "bid-3"]);
        assert_eq!(view.count(BidStatus::Sent), 1);
        assert_eq!(view.total(), 3);
    }

    #[test]
    fn test_empty_columns_are_kept_with_placeholder() {
        let records = vec![bid("bid-1", BidStatus::New)];

        let view = project(&records, &BOARD_COLUMNS);

        assert_eq!(view.columns().len(), BOARD_COLUMNS.len());
        let won = view.column(BidStatus::Won).unwrap();
        assert!(won.is_empty());
        assert_eq!(won.placeholder(), Some(EMPTY_COLUMN_PLACEHOLDER));
        assert_eq!(view.column(BidStatus::New).unwrap().placeholder(), None);
    }

    #[test]
    fn test_counts_follow_column_order() {
        let records = vec![
            bid("bid-1", BidStatus::Lost),
            bid("bid-2", BidStatus::InReview),
        ];

        let view = project(&records, &BOARD_COLUMNS);

        assert_eq!(
            view.counts(),
            vec![
                (BidStatus::New, 0),
                (BidStatus::InReview, 1),
                (BidStatus::ReadyToSign, 0),
                (BidStatus::Sent, 0),
                (BidStatus::Won, 0),
                (BidStatus::Lost, 1),
            ]
        );
    }

    #[test]
    fn test_records_without_column_are_left_out() {
        let records = vec![bid("bid-1", BidStatus::New), bid("bid-2", BidStatus::Won)];
        let columns = [BOARD_COLUMNS[0]];

        let view = project(&records, &columns);

        assert_eq!(view.total(), 1);
        assert_eq!(view.count(BidStatus::Won), 0);
        assert!(view.column(BidStatus::Won).is_none());
    }

    #[test]
    fn test_project_empty_list() {
        let records: Vec<BidRecord> = Vec::new();
        let view = project(&records, &BOARD_COLUMNS);
        assert_eq!(view.total(), 0);
        assert!(view.columns().iter().all(ColumnBucket::is_empty));
    }
}

// ABOUTME: Free-text search over bids
// ABOUTME: Narrows the board by title, organization or edital number before projection

use cotai_core::BidRecord;

/// Bids matching `query`, in their original order.
///
/// Title and organization match case-insensitively; the edital number
/// matches as a case-sensitive substring. An empty query matches everything.
pub fn filter_bids<'a, I>(query: &str, records: I) -> Vec<&'a BidRecord>
where
    I: IntoIterator<Item = &'a BidRecord>,
{
    if query.is_empty() {
        return records.into_iter().collect();
    }

    let needle = query.to_lowercase();
    records
        .into_iter()
        .filter(|record| matches_bid(record, query, &needle))
        .collect()
}

fn matches_bid(record: &BidRecord, query: &str, needle: &str) -> bool {
    record.title.to_lowercase().contains(needle)
        || record.organization.to_lowercase().contains(needle)
        || record.number.contains(query)
}

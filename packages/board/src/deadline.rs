// ABOUTME: Deadline classification for bids
// ABOUTME: Days remaining, urgency severity, badge labels and upcoming-deadline lists

use chrono::{DateTime, NaiveDate, NaiveTime, TimeDelta, Utc};
use cotai_config::BoardConfig;
use cotai_core::BidRecord;
use serde::Serialize;
use std::fmt;

const MILLIS_PER_DAY: i64 = 24 * 60 * 60 * 1000;

/// Urgency of a deadline
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Critical,
    Warning,
    Normal,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Critical => write!(f, "critical"),
            Severity::Warning => write!(f, "warning"),
            Severity::Normal => write!(f, "normal"),
        }
    }
}

/// Upper bounds (inclusive, in days) of the critical and warning bands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeadlineThresholds {
    pub critical_days: i64,
    pub warning_days: i64,
}

impl Default for DeadlineThresholds {
    fn default() -> Self {
        DeadlineThresholds {
            critical_days: 7,
            warning_days: 14,
        }
    }
}

impl From<&BoardConfig> for DeadlineThresholds {
    fn from(config: &BoardConfig) -> Self {
        DeadlineThresholds {
            critical_days: config.critical_days,
            warning_days: config.warning_days,
        }
    }
}

impl DeadlineThresholds {
    pub fn severity(&self, days_remaining: i64) -> Severity {
        if days_remaining <= self.critical_days {
            // Overdue deadlines are critical too
            Severity::Critical
        } else if days_remaining <= self.warning_days {
            Severity::Warning
        } else {
            Severity::Normal
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DeadlineStatus {
    pub days_remaining: i64,
    pub severity: Severity,
}

impl DeadlineStatus {
    pub fn is_overdue(&self) -> bool {
        self.days_remaining < 0
    }

    /// Badge text: "3d restantes" or "2d atrasado"
    pub fn label(&self) -> String {
        if self.is_overdue() {
            format!("{}d atrasado", self.days_remaining.abs())
        } else {
            format!("{}d restantes", self.days_remaining)
        }
    }
}

/// The instant a calendar-date deadline falls on (midnight UTC)
pub fn deadline_instant(date: NaiveDate) -> DateTime<Utc> {
    date.and_time(NaiveTime::MIN).and_utc()
}

/// Whole days until `deadline`, rounded up
pub fn days_remaining(deadline: DateTime<Utc>, now: DateTime<Utc>) -> i64 {
    let millis = (deadline - now).num_milliseconds();
    -(-millis).div_euclid(MILLIS_PER_DAY)
}

/// Classify with the default 7/14 day bands
pub fn classify_deadline(deadline: DateTime<Utc>, now: DateTime<Utc>) -> DeadlineStatus {
    classify_deadline_with(deadline, now, &DeadlineThresholds::default())
}

pub fn classify_deadline_with(
    deadline: DateTime<Utc>,
    now: DateTime<Utc>,
    thresholds: &DeadlineThresholds,
) -> DeadlineStatus {
    let days_remaining = days_remaining(deadline, now);
    DeadlineStatus {
        days_remaining,
        severity: thresholds.severity(days_remaining),
    }
}

/// Classify a bid's deadline date
pub fn classify_bid(
    bid: &BidRecord,
    now: DateTime<Utc>,
    thresholds: &DeadlineThresholds,
) -> DeadlineStatus {
    classify_deadline_with(deadline_instant(bid.deadline), now, thresholds)
}

/// Bids due after `now` and within `window_days`, soonest first.
/// A window reaching past the last representable instant has no upper bound.
pub fn upcoming_deadlines<'a, I>(records: I, now: DateTime<Utc>, window_days: i64) -> Vec<&'a BidRecord>
where
    I: IntoIterator<Item = &'a BidRecord>,
{
    let horizon = TimeDelta::try_days(window_days)
        .and_then(|window| now.checked_add_signed(window))
        .unwrap_or(DateTime::<Utc>::MAX_UTC);

    let mut upcoming: Vec<&'a BidRecord> = records
        .into_iter()
        .filter(|bid| {
            let due = deadline_instant(bid.deadline);
            due > now && due <= horizon
        })
        .collect();

    upcoming.sort_by_key(|bid| bid.deadline);
    upcoming
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn at(y: i32, m: u32, d: u32, h: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, h, 0, 0).unwrap()
    }

    #[rstest]
    #[case(at(2025, 5, 11, 0), at(2025, 5, 1, 0), 10)]
    #[case(at(2025, 5, 11, 0), at(2025, 5, 1, 9), 10)]
    #[case(at(2025, 5, 1, 0), at(2025, 5, 1, 0), 0)]
    #[case(at(2025, 5, 1, 0), at(2025, 5, 1, 12), 0)]
    #[case(at(2025, 5, 1, 0), at(2025, 5, 2, 0), -1)]
    #[case(at(2025, 5, 1, 0), at(2025, 5, 2, 12), -1)]
    #[case(at(2025, 5, 1, 0), at(2025, 5, 3, 0), -2)]
    fn test_days_remaining_rounds_up(
        #[case] deadline: DateTime<Utc>,
        #[case] now: DateTime<Utc>,
        #[case] expected: i64,
    ) {
        assert_eq!(days_remaining(deadline, now), expected);
    }

    #[rstest]
    #[case(-3, Severity::Critical)]
    #[case(0, Severity::Critical)]
    #[case(7, Severity::Critical)]
    #[case(8, Severity::Warning)]
    #[case(14, Severity::Warning)]
    #[case(15, Severity::Normal)]
    #[case(90, Severity::Normal)]
    fn test_default_severity_bands(#[case] days: i64, #[case] expected: Severity) {
        assert_eq!(DeadlineThresholds::default().severity(days), expected);
    }

    #[test]
    fn test_ten_days_out_is_warning() {
        let now = at(2025, 5, 1, 10);
        let deadline = deadline_instant(NaiveDate::from_ymd_opt(2025, 5, 11).unwrap());

        let status = classify_deadline(deadline, now);

        assert_eq!(
            status,
            DeadlineStatus {
                days_remaining: 10,
                severity: Severity::Warning,
            }
        );
        assert_eq!(status.label(), "10d restantes");
    }

    #[test]
    fn test_overdue_label() {
        let status = classify_deadline(at(2025, 5, 1, 0), at(2025, 5, 4, 0));
        assert!(status.is_overdue());
        assert_eq!(status.severity, Severity::Critical);
        assert_eq!(status.label(), "3d atrasado");
    }

    #[test]
    fn test_custom_thresholds() {
        let thresholds = DeadlineThresholds {
            critical_days: 2,
            warning_days: 5,
        };
        assert_eq!(thresholds.severity(3), Severity::Warning);
        assert_eq!(thresholds.severity(6), Severity::Normal);
    }

    #[test]
    fn test_thresholds_from_config() {
        let config = BoardConfig {
            critical_days: 3,
            warning_days: 9,
            ..BoardConfig::default()
        };
        assert_eq!(
            DeadlineThresholds::from(&config),
            DeadlineThresholds {
                critical_days: 3,
                warning_days: 9
            }
        );
    }

    #[test]
    fn test_upcoming_deadlines_window_and_order() {
        let date = |d| NaiveDate::from_ymd_opt(2025, 4, d).unwrap();
        let records = vec![
            BidRecord::new("bid-a", "Prazo em 4 dias", "Org", "1", date(14)),
            BidRecord::new("bid-b", "Prazo hoje", "Org", "2", date(10)),
            BidRecord::new("bid-c", "Prazo amanhã", "Org", "3", date(11)),
            BidRecord::new("bid-d", "Prazo distante", "Org", "4", date(30)),
            BidRecord::new("bid-e", "Prazo vencido", "Org", "5", date(2)),
        ];
        let now = at(2025, 4, 10, 8);

        let upcoming = upcoming_deadlines(&records, now, 5);

        let ids: Vec<&str> = upcoming.iter().map(|b| b.id.as_str()).collect();
        assert_eq!(ids, vec!["bid-c", "bid-a"]);
    }

    #[rstest]
    #[case(1_000_000_000)]
    #[case(i64::MAX)]
    fn test_upcoming_deadlines_oversized_window(#[case] window_days: i64) {
        let date = |m, d| NaiveDate::from_ymd_opt(2025, m, d).unwrap();
        let records = vec![
            BidRecord::new("bid-a", "Prazo distante", "Org", "1", date(12, 1)),
            BidRecord::new("bid-b", "Prazo vencido", "Org", "2", date(4, 2)),
            BidRecord::new("bid-c", "Prazo amanhã", "Org", "3", date(4, 11)),
        ];

        let upcoming = upcoming_deadlines(&records, at(2025, 4, 10, 8), window_days);

        let ids: Vec<&str> = upcoming.iter().map(|b| b.id.as_str()).collect();
        assert_eq!(ids, vec!["bid-c", "bid-a"]);
    }
}

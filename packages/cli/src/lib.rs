// ABOUTME: Terminal front end for the CotAi bid tracking board
// ABOUTME: Rendering, logging setup and argument helpers shared by the cotai binary

pub mod error;
pub mod logging;
pub mod render;

pub use error::CliError;

use chrono::{DateTime, NaiveDate, Utc};
use cotai_board::deadline_instant;

/// Resolve `--today`: an explicit date (at midnight UTC) or the current time
pub fn resolve_now(today: Option<&str>) -> Result<DateTime<Utc>, CliError> {
    match today {
        Some(raw) => NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
            .map(deadline_instant)
            .map_err(|_| CliError::InvalidDate(raw.to_string())),
        None => Ok(Utc::now()),
    }
}

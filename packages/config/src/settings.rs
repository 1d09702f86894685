// ABOUTME: Board configuration loaded from the environment
// ABOUTME: Sign-off gate length and deadline band thresholds with validation

use std::env;
use thiserror::Error;
use tracing::debug;

use crate::constants::{
    COTAI_DEADLINE_CRITICAL_DAYS, COTAI_DEADLINE_WARNING_DAYS, COTAI_SIGNOFF_MIN_LENGTH,
    COTAI_UPCOMING_WINDOW_DAYS,
};

pub const DEFAULT_SIGNOFF_MIN_LENGTH: usize = 4;
pub const DEFAULT_CRITICAL_DAYS: i64 = 7;
pub const DEFAULT_WARNING_DAYS: i64 = 14;
pub const DEFAULT_UPCOMING_WINDOW_DAYS: i64 = 5;

#[derive(Error, Debug, PartialEq)]
pub enum ConfigError {
    #[error("Invalid value for {name}: '{value}' is not a number")]
    InvalidNumber { name: &'static str, value: String },
    #[error("{0} must be at least 1")]
    ZeroMinimum(&'static str),
    #[error("Warning threshold ({warning}d) must not be below the critical threshold ({critical}d)")]
    ThresholdOrder { critical: i64, warning: i64 },
    #[error("{name} cannot be negative (got {value})")]
    Negative { name: &'static str, value: i64 },
}

#[derive(Debug, Clone, PartialEq)]
pub struct BoardConfig {
    /// Minimum number of characters accepted by the sign-off prompt
    pub signoff_min_length: usize,
    /// Deadlines at most this many days away are critical
    pub critical_days: i64,
    /// Deadlines at most this many days away (and beyond critical) are warnings
    pub warning_days: i64,
    /// How far ahead the upcoming-deadlines list looks
    pub upcoming_window_days: i64,
}

impl Default for BoardConfig {
    fn default() -> Self {
        BoardConfig {
            signoff_min_length: DEFAULT_SIGNOFF_MIN_LENGTH,
            critical_days: DEFAULT_CRITICAL_DAYS,
            warning_days: DEFAULT_WARNING_DAYS,
            upcoming_window_days: DEFAULT_UPCOMING_WINDOW_DAYS,
        }
    }
}

impl BoardConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        let signoff_min_length =
            read_number::<usize>(COTAI_SIGNOFF_MIN_LENGTH, DEFAULT_SIGNOFF_MIN_LENGTH)?;
        let critical_days = read_number::<i64>(COTAI_DEADLINE_CRITICAL_DAYS, DEFAULT_CRITICAL_DAYS)?;
        let warning_days = read_number::<i64>(COTAI_DEADLINE_WARNING_DAYS, DEFAULT_WARNING_DAYS)?;
        let upcoming_window_days =
            read_number::<i64>(COTAI_UPCOMING_WINDOW_DAYS, DEFAULT_UPCOMING_WINDOW_DAYS)?;

        let config = BoardConfig {
            signoff_min_length,
            critical_days,
            warning_days,
            upcoming_window_days,
        };
        config.validate()?;

        debug!(?config, "Loaded board configuration");
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.signoff_min_length == 0 {
            return Err(ConfigError::ZeroMinimum(COTAI_SIGNOFF_MIN_LENGTH));
        }

        for (name, value) in [
            (COTAI_DEADLINE_CRITICAL_DAYS, self.critical_days),
            (COTAI_UPCOMING_WINDOW_DAYS, self.upcoming_window_days),
        ] {
            if value < 0 {
                return Err(ConfigError::Negative { name, value });
            }
        }

        if self.warning_days < self.critical_days {
            return Err(ConfigError::ThresholdOrder {
                critical: self.critical_days,
                warning: self.warning_days,
            });
        }

        Ok(())
    }
}

/// Read a numeric env var, falling back to `default` when unset or blank
fn read_number<T: std::str::FromStr>(name: &'static str, default: T) -> Result<T, ConfigError> {
    match env::var(name) {
        Ok(raw) if !raw.trim().is_empty() => {
            raw.trim()
                .parse::<T>()
                .map_err(|_| ConfigError::InvalidNumber { name, value: raw })
        }
        _ => Ok(default),
    }
}

// ABOUTME: Environment variable name constants
// ABOUTME: Centralized definitions of all environment variable names used across CotAi

// Sign-off Confirmation
pub const COTAI_SIGNOFF_MIN_LENGTH: &str = "COTAI_SIGNOFF_MIN_LENGTH";

// Deadline Classification
pub const COTAI_DEADLINE_CRITICAL_DAYS: &str = "COTAI_DEADLINE_CRITICAL_DAYS";
pub const COTAI_DEADLINE_WARNING_DAYS: &str = "COTAI_DEADLINE_WARNING_DAYS";
pub const COTAI_UPCOMING_WINDOW_DAYS: &str = "COTAI_UPCOMING_WINDOW_DAYS";

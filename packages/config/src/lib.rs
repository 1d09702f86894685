// ABOUTME: Configuration for the bid tracking board
// ABOUTME: Environment variable names and the env-driven BoardConfig

pub mod constants;
pub mod settings;

pub use settings::{BoardConfig, ConfigError};

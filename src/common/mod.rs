//! Shared utilities: logging and time labels.

pub mod logger;
pub mod time;

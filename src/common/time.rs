//! Time labels for client-side output.
//!
//! Inbound messages carry a label already stamped by the server; the
//! client only produces its own label for sent confirmations, in the
//! same `HH:MM:SS` format the server uses.

use chrono::{DateTime, Local};

/// Format a point in time as an `HH:MM:SS` label.
pub fn time_label(time: DateTime<Local>) -> String {
    time.format("%H:%M:%S").to_string()
}

/// Current local time as an `HH:MM:SS` label.
pub fn now_label() -> String {
    time_label(Local::now())
}

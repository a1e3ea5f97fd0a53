use serde::{Deserialize, Serialize};

/// One `(timestamp, value)` sample of a series.
///
/// `timestamp_ms` is wall-clock time in Unix milliseconds assigned when the
/// point is appended.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub timestamp_ms: i64,
    pub value: f64,
}

impl Point {
    #[must_use]
    pub const fn new(timestamp_ms: i64, value: f64) -> Self {
        Self {
            timestamp_ms,
            value,
        }
    }
}

/// Area fill target used by backends when painting under a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FillMode {
    /// Fill between the line and the value-axis origin.
    #[default]
    Origin,
    /// Stroke only.
    None,
}

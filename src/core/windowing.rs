use serde::{Deserialize, Serialize};

use crate::core::Point;
use crate::error::{ChartError, ChartResult};

/// Rolling time-window options for the streaming x axis.
///
/// The visible window trails the wall clock by `delay_ms` so samples that
/// arrive slightly late still scroll in smoothly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StreamingOptions {
    #[serde(default = "default_duration_ms")]
    pub duration_ms: i64,
    #[serde(default = "default_delay_ms")]
    pub delay_ms: i64,
    /// Overrides window-based expiry: points older than `now - ttl_ms` are dropped.
    #[serde(default)]
    pub ttl_ms: Option<i64>,
}

impl Default for StreamingOptions {
    fn default() -> Self {
        Self {
            duration_ms: default_duration_ms(),
            delay_ms: default_delay_ms(),
            ttl_ms: None,
        }
    }
}

impl StreamingOptions {
    pub fn validate(self) -> ChartResult<Self> {
        if self.duration_ms <= 0 {
            return Err(ChartError::InvalidData(
                "streaming duration must be > 0".to_owned(),
            ));
        }
        if self.delay_ms < 0 {
            return Err(ChartError::InvalidData(
                "streaming delay must be >= 0".to_owned(),
            ));
        }
        if self.ttl_ms.is_some_and(|ttl| ttl <= 0) {
            return Err(ChartError::InvalidData(
                "streaming ttl must be > 0 when set".to_owned(),
            ));
        }
        Ok(self)
    }

    /// Visible `[start, end]` window in Unix milliseconds at `now_ms`.
    #[must_use]
    pub fn visible_window(self, now_ms: i64) -> TimeWindow {
        let end_ms = now_ms.saturating_sub(self.delay_ms);
        TimeWindow {
            start_ms: end_ms.saturating_sub(self.duration_ms),
            end_ms,
        }
    }

    /// Expiry rule applied to every series at `now_ms`.
    ///
    /// Without a ttl, data is kept only while a frame still needs it: the
    /// visible window plus the last point before its left edge.
    #[must_use]
    pub fn retention(self, now_ms: i64) -> Retention {
        match self.ttl_ms {
            Some(ttl) => Retention {
                cutoff_ms: now_ms.saturating_sub(ttl),
                keep_left_neighbour: false,
            },
            None => Retention {
                cutoff_ms: self.visible_window(now_ms).start_ms,
                keep_left_neighbour: true,
            },
        }
    }
}

/// Points older than `cutoff_ms` are expired; the newest of them survives
/// when `keep_left_neighbour` is set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Retention {
    pub cutoff_ms: i64,
    pub keep_left_neighbour: bool,
}

impl Retention {
    /// Number of leading points of `points` that have expired.
    #[must_use]
    pub fn expired_prefix(self, points: &[Point]) -> usize {
        let older = points.partition_point(|point| point.timestamp_ms < self.cutoff_ms);
        if self.keep_left_neighbour {
            older.saturating_sub(1)
        } else {
            older
        }
    }
}

/// Inclusive time range in Unix milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeWindow {
    pub start_ms: i64,
    pub end_ms: i64,
}

impl TimeWindow {
    #[must_use]
    pub fn contains(self, timestamp_ms: i64) -> bool {
        timestamp_ms >= self.start_ms && timestamp_ms <= self.end_ms
    }
}

/// Returns the points a draw pass needs for `window`.
///
/// Everything from one point before `window.start_ms` onwards is kept: the
/// leading neighbour lets a backend draw the segment entering the left edge,
/// and points newer than `window.end_ms` are still scrolling in through the
/// display delay.
#[must_use]
pub fn points_in_window(points: &[Point], window: TimeWindow) -> &[Point] {
    let first_inside = points.partition_point(|point| point.timestamp_ms < window.start_ms);
    &points[first_inside.saturating_sub(1)..]
}

fn default_duration_ms() -> i64 {
    60 * 1000
}

fn default_delay_ms() -> i64 {
    1500
}

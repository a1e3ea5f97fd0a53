use serde::Serialize;

use crate::core::{FillMode, Point, SuggestedRange, TimeWindow};
use crate::error::{ChartError, ChartResult};

/// Styling and visible samples of one series for a draw pass.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SeriesFrame<'a> {
    pub label: &'a str,
    pub fill_color: &'a str,
    pub border_color: &'a str,
    pub fill: FillMode,
    pub points: &'a [Point],
}

/// Backend-agnostic scene for one chart draw pass.
///
/// The frame borrows the adapter's state: building one copies nothing, so
/// redrawing after every appended point stays linear in the data drawn.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderFrame<'a> {
    pub axis_labels: &'a [String],
    pub series: Vec<SeriesFrame<'a>>,
    pub time_window: TimeWindow,
    pub time_suggested: SuggestedRange,
    pub value_range: (f64, f64),
    pub tension: f64,
}

impl RenderFrame<'_> {
    pub fn validate(&self) -> ChartResult<()> {
        if self.time_window.start_ms > self.time_window.end_ms {
            return Err(ChartError::InvalidData(
                "render time window must have start <= end".to_owned(),
            ));
        }
        let (min, max) = self.value_range;
        if !min.is_finite() || !max.is_finite() || min > max {
            return Err(ChartError::InvalidData(
                "render value range must be finite with min <= max".to_owned(),
            ));
        }
        if !self.tension.is_finite() {
            return Err(ChartError::InvalidData(
                "line tension must be finite".to_owned(),
            ));
        }
        Ok(())
    }

    #[must_use]
    pub fn point_count(&self) -> usize {
        self.series.iter().map(|series| series.points.len()).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }
}

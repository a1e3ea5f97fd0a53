use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// Suggested axis bounds.
///
/// These only seed the layout: data outside the suggestion widens the
/// effective range instead of being clamped.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SuggestedRange {
    pub min: f64,
    pub max: f64,
}

impl Default for SuggestedRange {
    fn default() -> Self {
        Self {
            min: 50.0,
            max: 200.0,
        }
    }
}

impl SuggestedRange {
    #[must_use]
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn validate(self) -> ChartResult<Self> {
        if !self.min.is_finite() || !self.max.is_finite() || self.min > self.max {
            return Err(ChartError::InvalidData(
                "suggested range must be finite with min <= max".to_owned(),
            ));
        }
        Ok(self)
    }

    /// Merges the suggestion with the finite values in `values`.
    ///
    /// Non-finite samples are skipped so a stray NaN does not poison the
    /// axis; the backend decides how to draw them.
    #[must_use]
    pub fn effective_range<I>(self, values: I) -> (f64, f64)
    where
        I: IntoIterator<Item = f64>,
    {
        values
            .into_iter()
            .filter(|value| value.is_finite())
            .fold((self.min, self.max), |(min, max), value| {
                (min.min(value), max.max(value))
            })
    }
}

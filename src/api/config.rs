use serde::{Deserialize, Serialize};

use crate::core::{StreamingOptions, SuggestedRange};
use crate::error::{ChartError, ChartResult};

/// Color used for series created without explicit colors.
pub const DEFAULT_SERIES_COLOR: &str = "rgba(74, 222, 128, 1)";

/// When the adapter pushes frames to its renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RedrawPolicy {
    /// Render after every appended point.
    #[default]
    Immediate,
    /// Mark the chart dirty and let the host flush on its own frame tick.
    Deferred,
}

/// Chart bootstrap configuration.
///
/// Serializable so hosts can ship chart setup as JSON; every field has a
/// default, so partial documents are accepted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartConfig {
    #[serde(default = "default_palette")]
    pub palette: Vec<String>,
    #[serde(default)]
    pub streaming: StreamingOptions,
    #[serde(default = "default_tension")]
    pub tension: f64,
    #[serde(default)]
    pub time_suggested: SuggestedRange,
    #[serde(default)]
    pub value_suggested: SuggestedRange,
    #[serde(default)]
    pub redraw_policy: RedrawPolicy,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            palette: default_palette(),
            streaming: StreamingOptions::default(),
            tension: default_tension(),
            time_suggested: SuggestedRange::default(),
            value_suggested: SuggestedRange::default(),
            redraw_policy: RedrawPolicy::default(),
        }
    }
}

impl ChartConfig {
    /// Parses a JSON document, filling omitted fields with defaults.
    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        let config: Self = serde_json::from_str(input)
            .map_err(|e| ChartError::InvalidData(format!("failed to parse chart config: {e}")))?;
        config.validate()
    }

    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| ChartError::InvalidData(format!("failed to serialize chart config: {e}")))
    }

    /// Replaces the fallback palette.
    #[must_use]
    pub fn with_palette<I, S>(mut self, palette: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.palette = palette.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn with_streaming(mut self, streaming: StreamingOptions) -> Self {
        self.streaming = streaming;
        self
    }

    #[must_use]
    pub fn with_tension(mut self, tension: f64) -> Self {
        self.tension = tension;
        self
    }

    #[must_use]
    pub fn with_time_suggested(mut self, range: SuggestedRange) -> Self {
        self.time_suggested = range;
        self
    }

    #[must_use]
    pub fn with_value_suggested(mut self, range: SuggestedRange) -> Self {
        self.value_suggested = range;
        self
    }

    #[must_use]
    pub fn with_redraw_policy(mut self, policy: RedrawPolicy) -> Self {
        self.redraw_policy = policy;
        self
    }

    pub fn validate(self) -> ChartResult<Self> {
        if self.palette.is_empty() {
            return Err(ChartError::InvalidData(
                "palette must contain at least one color".to_owned(),
            ));
        }
        if !self.tension.is_finite() || self.tension < 0.0 {
            return Err(ChartError::InvalidData(
                "line tension must be finite and >= 0".to_owned(),
            ));
        }
        self.streaming.validate()?;
        self.time_suggested.validate()?;
        self.value_suggested.validate()?;
        Ok(self)
    }

    /// Palette entry for the series created at `series_index`.
    #[must_use]
    pub fn palette_color(&self, series_index: usize) -> &str {
        if self.palette.is_empty() {
            return DEFAULT_SERIES_COLOR;
        }
        &self.palette[series_index % self.palette.len()]
    }
}

fn default_palette() -> Vec<String> {
    vec![DEFAULT_SERIES_COLOR.to_owned()]
}

fn default_tension() -> f64 {
    0.09
}

#[cfg(test)]
mod tests {
    use super::{ChartConfig, DEFAULT_SERIES_COLOR, RedrawPolicy};

    #[test]
    fn defaults_match_realtime_chart_setup() {
        let config = ChartConfig::default();
        assert_eq!(config.palette, vec![DEFAULT_SERIES_COLOR.to_owned()]);
        assert_eq!(config.streaming.duration_ms, 60_000);
        assert_eq!(config.streaming.delay_ms, 1_500);
        assert_eq!(config.tension, 0.09);
        assert_eq!(config.value_suggested.min, 50.0);
        assert_eq!(config.time_suggested.max, 200.0);
        assert_eq!(config.redraw_policy, RedrawPolicy::Immediate);
    }

    #[test]
    fn palette_cycles_by_series_index() {
        let config = ChartConfig::default().with_palette(["a", "b"]);
        assert_eq!(config.palette_color(0), "a");
        assert_eq!(config.palette_color(1), "b");
        assert_eq!(config.palette_color(2), "a");
    }

    #[test]
    fn validate_rejects_empty_palette() {
        let config = ChartConfig::default().with_palette(Vec::<String>::new());
        assert!(config.validate().is_err());
    }
}

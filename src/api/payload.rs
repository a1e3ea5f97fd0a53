use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// Host event name carrying a new chart point.
pub const POINT_UPDATE_EVENT: &str = "new-point";

/// Decoded `new-point` payload.
///
/// Producers either send both colors or neither; one schema with optional
/// color fields covers both shapes. Unknown fields are ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PointUpdate {
    pub data_label: String,
    pub label: String,
    pub value: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border_color: Option<String>,
}

impl PointUpdate {
    #[must_use]
    pub fn new(data_label: impl Into<String>, label: impl Into<String>, value: f64) -> Self {
        Self {
            data_label: data_label.into(),
            label: label.into(),
            value,
            background_color: None,
            border_color: None,
        }
    }

    #[must_use]
    pub fn with_colors(
        mut self,
        background_color: impl Into<String>,
        border_color: impl Into<String>,
    ) -> Self {
        self.background_color = Some(background_color.into());
        self.border_color = Some(border_color.into());
        self
    }

    pub fn from_json_value(payload: serde_json::Value) -> ChartResult<Self> {
        serde_json::from_value(payload).map_err(|e| {
            ChartError::InvalidPayload(format!("failed to decode {POINT_UPDATE_EVENT}: {e}"))
        })
    }

    pub fn from_json_str(payload: &str) -> ChartResult<Self> {
        serde_json::from_str(payload).map_err(|e| {
            ChartError::InvalidPayload(format!("failed to decode {POINT_UPDATE_EVENT}: {e}"))
        })
    }
}

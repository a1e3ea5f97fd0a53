use serde::{Deserialize, Serialize};

/// Shared x-axis category labels.
///
/// One entry is appended per incoming point regardless of which series it
/// targets, so the track length tracks the total event count and not any
/// single series' point count.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AxisLabelTrack {
    labels: Vec<String>,
}

impl AxisLabelTrack {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, label: impl Into<String>) {
        self.labels.push(label.into());
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[String] {
        &self.labels
    }

    #[must_use]
    pub fn last(&self) -> Option<&str> {
        self.labels.last().map(String::as_str)
    }
}

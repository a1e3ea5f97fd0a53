use indexmap::IndexMap;
use indexmap::map::Entry;
use serde::Serialize;

use crate::core::{FillMode, Point, Retention};

/// One labeled line of the chart.
///
/// Colors are CSS color strings handed to the renderer as-is. They are fixed
/// when the series is created. Points only enter through `push`, which keeps
/// timestamps non-decreasing.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Series {
    label: String,
    points: Vec<Point>,
    fill_color: String,
    border_color: String,
    fill: FillMode,
}

impl Series {
    #[must_use]
    pub fn new(
        label: impl Into<String>,
        fill_color: impl Into<String>,
        border_color: impl Into<String>,
    ) -> Self {
        Self {
            label: label.into(),
            points: Vec::new(),
            fill_color: fill_color.into(),
            border_color: border_color.into(),
            fill: FillMode::default(),
        }
    }

    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    #[must_use]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    #[must_use]
    pub fn fill_color(&self) -> &str {
        &self.fill_color
    }

    #[must_use]
    pub fn border_color(&self) -> &str {
        &self.border_color
    }

    #[must_use]
    pub fn fill(&self) -> FillMode {
        self.fill
    }

    #[must_use]
    pub fn last_timestamp(&self) -> Option<i64> {
        self.points.last().map(|point| point.timestamp_ms)
    }

    /// Appends a sample, clamping its timestamp so the series never goes
    /// back in time. Returns the stored point.
    pub fn push(&mut self, timestamp_ms: i64, value: f64) -> Point {
        let timestamp_ms = self
            .last_timestamp()
            .map_or(timestamp_ms, |last| timestamp_ms.max(last));
        let point = Point::new(timestamp_ms, value);
        self.points.push(point);
        point
    }

    /// Drops the points `retention` has expired. Returns how many were removed.
    pub fn expire(&mut self, retention: Retention) -> usize {
        let stale = retention.expired_prefix(&self.points);
        self.points.drain(..stale);
        stale
    }
}

/// Series store keyed by exact label, iterated in creation order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SeriesSet {
    by_label: IndexMap<String, Series>,
}

impl SeriesSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.by_label.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.by_label.is_empty()
    }

    #[must_use]
    pub fn get(&self, label: &str) -> Option<&Series> {
        self.by_label.get(label)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Series> {
        self.by_label.values()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Series> {
        self.by_label.values_mut()
    }

    /// Returns the series for `label`, creating it with colors from `make_colors`
    /// when the label is new.
    ///
    /// `make_colors` receives the creation index of the new series and is not
    /// called for existing labels. The boolean is `true` when a series was
    /// created.
    pub fn find_or_create<F>(&mut self, label: &str, make_colors: F) -> (&mut Series, bool)
    where
        F: FnOnce(usize) -> (String, String),
    {
        let next_index = self.by_label.len();
        match self.by_label.entry(label.to_owned()) {
            Entry::Occupied(entry) => (entry.into_mut(), false),
            Entry::Vacant(entry) => {
                let (fill_color, border_color) = make_colors(next_index);
                let series = Series::new(label, fill_color, border_color);
                (entry.insert(series), true)
            }
        }
    }
}

use tracing::{debug, trace, warn};

use crate::core::{
    AxisLabelTrack, Clock, Point, Series, SeriesSet, SystemClock, points_in_window,
};
use crate::error::{ChartError, ChartResult};
use crate::render::{RenderFrame, Renderer, SeriesFrame};

use super::{ChartConfig, PointUpdate, RedrawPolicy};

/// Live state of one streaming line chart bound to a renderer.
///
/// The adapter owns the series (keyed by exact label, in creation order), the
/// shared axis-label track, and the renderer handle. After `destroy` the
/// renderer is gone and every mutating call returns `ChartError::Destroyed`.
pub struct ChartAdapter<R: Renderer> {
    renderer: Option<R>,
    config: ChartConfig,
    clock: Box<dyn Clock>,
    series: SeriesSet,
    axis_labels: AxisLabelTrack,
    pending_redraw: bool,
}

impl<R: Renderer> ChartAdapter<R> {
    /// Creates an adapter with the default realtime configuration.
    #[must_use]
    pub fn new(renderer: R) -> Self {
        Self::from_parts(renderer, ChartConfig::default(), Box::new(SystemClock))
    }

    pub fn with_config(renderer: R, config: ChartConfig) -> ChartResult<Self> {
        Self::with_config_and_clock(renderer, config, SystemClock)
    }

    pub fn with_config_and_clock(
        renderer: R,
        config: ChartConfig,
        clock: impl Clock + 'static,
    ) -> ChartResult<Self> {
        let config = config.validate()?;
        Ok(Self::from_parts(renderer, config, Box::new(clock)))
    }

    pub(super) fn from_parts(renderer: R, config: ChartConfig, clock: Box<dyn Clock>) -> Self {
        debug!(
            duration_ms = config.streaming.duration_ms,
            delay_ms = config.streaming.delay_ms,
            redraw_policy = ?config.redraw_policy,
            "chart adapter constructed"
        );
        Self {
            renderer: Some(renderer),
            config,
            clock,
            series: SeriesSet::new(),
            axis_labels: AxisLabelTrack::new(),
            pending_redraw: false,
        }
    }

    /// Appends one sample.
    ///
    /// `axis_label` always lands on the shared label track. The series named
    /// `series_label` is created on first use with the given colors, or the
    /// palette color for whichever is omitted; colors passed for an existing
    /// series are ignored. The point is stamped with the current wall-clock
    /// time and the chart is redrawn according to the redraw policy.
    pub fn add_point(
        &mut self,
        axis_label: &str,
        series_label: &str,
        value: f64,
        fill_color: Option<&str>,
        border_color: Option<&str>,
    ) -> ChartResult<Point> {
        if self.renderer.is_none() {
            return Err(ChartError::Destroyed);
        }

        let now_ms = self.clock.now_millis();
        self.axis_labels.push(axis_label);

        let config = &self.config;
        let (series, created) = self.series.find_or_create(series_label, |index| {
            let fallback = config.palette_color(index);
            (
                fill_color.unwrap_or(fallback).to_owned(),
                border_color.unwrap_or(fallback).to_owned(),
            )
        });
        if created {
            debug!(
                label = series_label,
                fill_color = series.fill_color(),
                border_color = series.border_color(),
                "series created"
            );
        }

        let point = series.push(now_ms, value);
        trace!(
            label = series_label,
            timestamp_ms = point.timestamp_ms,
            value,
            count = series.points().len(),
            "append point"
        );

        self.expire_points(now_ms);
        self.pending_redraw = true;
        if self.config.redraw_policy == RedrawPolicy::Immediate
            && let Err(err) = self.render()
        {
            warn!(error = %err, "redraw after append failed; point kept for next render");
        }

        Ok(point)
    }

    /// Applies a decoded `new-point` payload.
    pub fn apply(&mut self, update: &PointUpdate) -> ChartResult<Point> {
        self.add_point(
            &update.data_label,
            &update.label,
            update.value,
            update.background_color.as_deref(),
            update.border_color.as_deref(),
        )
    }

    /// Releases the renderer.
    ///
    /// Repeated calls are no-ops, so teardown paths never fail.
    pub fn destroy(&mut self) {
        match self.renderer.take() {
            Some(mut renderer) => {
                renderer.release();
                self.pending_redraw = false;
                debug!(
                    series = self.series.len(),
                    axis_labels = self.axis_labels.len(),
                    "chart adapter destroyed"
                );
            }
            None => debug!("destroy called on an already destroyed chart adapter"),
        }
    }

    #[must_use]
    pub fn is_destroyed(&self) -> bool {
        self.renderer.is_none()
    }

    #[must_use]
    pub fn series(&self) -> &SeriesSet {
        &self.series
    }

    #[must_use]
    pub fn series_by_label(&self, label: &str) -> Option<&Series> {
        self.series.get(label)
    }

    #[must_use]
    pub fn axis_labels(&self) -> &[String] {
        self.axis_labels.as_slice()
    }

    #[must_use]
    pub fn config(&self) -> &ChartConfig {
        &self.config
    }

    #[must_use]
    pub fn renderer(&self) -> Option<&R> {
        self.renderer.as_ref()
    }

    #[must_use]
    pub fn has_pending_redraw(&self) -> bool {
        self.pending_redraw
    }

    /// Materializes the current dataset for a draw pass at the clock's now.
    ///
    /// The frame borrows labels, colors and points from the adapter.
    #[must_use]
    pub fn build_render_frame(&self) -> RenderFrame<'_> {
        frame_at(
            &self.config,
            &self.series,
            &self.axis_labels,
            self.clock.now_millis(),
        )
    }

    /// Expires scrolled-out points, draws the current dataset and clears the
    /// pending redraw flag.
    pub fn render(&mut self) -> ChartResult<()> {
        if self.renderer.is_none() {
            return Err(ChartError::Destroyed);
        }
        let now_ms = self.clock.now_millis();
        self.expire_points(now_ms);

        let frame = frame_at(&self.config, &self.series, &self.axis_labels, now_ms);
        let renderer = self.renderer.as_mut().ok_or(ChartError::Destroyed)?;
        renderer.render(&frame)?;
        self.pending_redraw = false;
        Ok(())
    }

    /// Applies the streaming retention rule to every series, including ones
    /// that stopped receiving points.
    fn expire_points(&mut self, now_ms: i64) {
        let retention = self.config.streaming.retention(now_ms);
        for series in self.series.iter_mut() {
            let dropped = series.expire(retention);
            if dropped > 0 {
                trace!(label = series.label(), dropped, "expired points dropped");
            }
        }
    }

    /// Renders only when points were appended since the last successful draw.
    ///
    /// Returns `true` when a frame was rendered.
    pub fn render_if_invalidated(&mut self) -> ChartResult<bool> {
        if !self.pending_redraw {
            return Ok(false);
        }
        self.render()?;
        Ok(true)
    }
}

fn frame_at<'a>(
    config: &ChartConfig,
    series: &'a SeriesSet,
    axis_labels: &'a AxisLabelTrack,
    now_ms: i64,
) -> RenderFrame<'a> {
    let window = config.streaming.visible_window(now_ms);

    let series: Vec<SeriesFrame<'a>> = series
        .iter()
        .map(|series| SeriesFrame {
            label: series.label(),
            fill_color: series.fill_color(),
            border_color: series.border_color(),
            fill: series.fill(),
            points: points_in_window(series.points(), window),
        })
        .collect();

    let value_range = config.value_suggested.effective_range(
        series
            .iter()
            .flat_map(|frame| frame.points.iter().map(|point| point.value)),
    );

    RenderFrame {
        axis_labels: axis_labels.as_slice(),
        series,
        time_window: window,
        time_suggested: config.time_suggested,
        value_range,
        tension: config.tension,
    }
}

use crate::error::ChartResult;
use crate::render::{Color, RenderFrame, Renderer};

/// No-op renderer used by tests and headless hosts.
///
/// It still validates each frame and resolves series colors so tests can see
/// what a real backend would have been handed.
#[derive(Debug, Default)]
pub struct NullRenderer {
    pub render_count: usize,
    pub last_series_count: usize,
    pub last_point_count: usize,
    pub last_label_count: usize,
    pub last_unresolved_colors: usize,
    pub released: bool,
}

impl Renderer for NullRenderer {
    fn render(&mut self, frame: &RenderFrame<'_>) -> ChartResult<()> {
        frame.validate()?;
        self.render_count += 1;
        self.last_series_count = frame.series.len();
        self.last_point_count = frame.point_count();
        self.last_label_count = frame.axis_labels.len();
        self.last_unresolved_colors = frame
            .series
            .iter()
            .flat_map(|series| [series.fill_color, series.border_color])
            .filter(|css| Color::from_css(css).is_err())
            .count();
        Ok(())
    }

    fn release(&mut self) {
        self.released = true;
    }
}

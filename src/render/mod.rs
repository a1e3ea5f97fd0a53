mod frame;
mod null_renderer;
mod primitives;

pub use frame::{RenderFrame, SeriesFrame};
pub use null_renderer::NullRenderer;
pub use primitives::Color;

use crate::error::ChartResult;

/// Contract implemented by any drawing backend bound to a host surface.
///
/// Backends receive a fully materialized `RenderFrame`, so drawing code stays
/// isolated from dataset bookkeeping and event handling.
pub trait Renderer {
    /// Draws one frame.
    ///
    /// Backends report drawing failures as `ChartError::Render`; the adapter
    /// keeps its redraw pending so the next render retries.
    fn render(&mut self, frame: &RenderFrame<'_>) -> ChartResult<()>;

    /// Frees backend resources. Called once when the owning adapter is destroyed.
    fn release(&mut self) {}
}

impl<R: Renderer + ?Sized> Renderer for Box<R> {
    fn render(&mut self, frame: &RenderFrame<'_>) -> ChartResult<()> {
        (**self).render(frame)
    }

    fn release(&mut self) {
        (**self).release();
    }
}

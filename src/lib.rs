//! realtime-line-chart: state adapter for scrolling real-time line charts.
//!
//! A [`LifecycleBinding`] follows a host component's attach/detach lifecycle
//! and routes `new-point` events into a [`ChartAdapter`], which keeps labeled
//! series, the shared x-axis label track and the rolling time window, and
//! hands backend-agnostic frames to a [`render::Renderer`].

pub mod api;
pub mod core;
pub mod error;
pub mod render;
pub mod telemetry;

pub use api::{ChartAdapter, ChartConfig, EventOutcome, LifecycleBinding, PointUpdate};
pub use error::{ChartError, ChartResult};

mod adapter;
mod binding;
mod config;
mod payload;

pub use adapter::ChartAdapter;
pub use binding::{BindingState, EventOutcome, LifecycleBinding};
pub use config::{ChartConfig, DEFAULT_SERIES_COLOR, RedrawPolicy};
pub use payload::{POINT_UPDATE_EVENT, PointUpdate};

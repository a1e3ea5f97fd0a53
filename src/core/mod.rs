pub mod axis_labels;
pub mod clock;
pub mod scale;
pub mod series;
pub mod types;
pub mod windowing;

pub use axis_labels::AxisLabelTrack;
pub use clock::{Clock, ManualClock, SystemClock};
pub use scale::SuggestedRange;
pub use series::{Series, SeriesSet};
pub use types::{FillMode, Point};
pub use windowing::{Retention, StreamingOptions, TimeWindow, points_in_window};

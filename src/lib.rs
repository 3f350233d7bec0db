//! ringchart - animated ring progress charts for iced
//!
//! The geometry lives in [`features::ring_chart`] and is usable without a
//! window. [`ui::RingChart`] wraps it as a canvas widget.

pub mod features;
pub mod ui;
pub mod utils;

pub use features::ring_chart::{ChartConfig, ChartError, ChartStyle, ProgressSegment};
pub use ui::RingChart;

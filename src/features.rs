//! Feature modules - chart logic separated from UI
//!
//! Features should not depend on UI components directly.

pub mod ring_chart;
pub mod settings;

pub use ring_chart::{ChartConfig, ChartError, ChartStyle, ProgressSegment};
pub use settings::{GalleryChart, GallerySettings};

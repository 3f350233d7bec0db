//! Ring chart geometry
//!
//! Everything the ring chart computes before it touches a renderer: style
//! validation, the arc rectangle, sweep allocation, the draw-in phase and the
//! resulting draw commands.
//!
//! # Design
//!
//! The functions in [`layout`], [`segments`] and [`commands`] are pure. The
//! widget in `crate::ui::primitives::ring_chart` owns the mutable state and
//! feeds it through them once per frame.

pub mod animation;
pub mod commands;
pub mod config;
pub mod layout;
pub mod segments;

pub use animation::{PhaseDriver, PhaseListener};
pub use commands::{ArcCommand, Composite, Surface, build_commands, replay};
pub use config::{AngleStyle, ChartConfig, ChartError, ChartStyle, DrawStart, StrokeCap};
pub use layout::{Constraint, LayoutRect, measure, resolve_layout};
pub use segments::{AllocationParams, ProgressSegment, SegmentArc};

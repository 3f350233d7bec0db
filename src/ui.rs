//! UI module for the ring chart widgets
//!
//! # Architecture
//!
//! - **Primitives** (`primitives`): Low-level canvas programs that own their
//!   drawing state

pub mod primitives;

pub use primitives::RingChart;

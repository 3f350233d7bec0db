//! Sweep angle allocation for single and multi-segment rings
//!
//! All angles are in degrees. The functions here are pure so the geometry can
//! be checked without a renderer.

use iced::Color;

/// Sweep given to a segment whose visible angle rounds down to zero
pub const HAIRLINE_SWEEP: f32 = 0.1;

/// One weighted piece of a multi-segment ring
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProgressSegment {
    pub value: f32,
    pub color: Color,
}

impl ProgressSegment {
    pub fn new(value: f32, color: Color) -> Self {
        Self { value, color }
    }
}

/// An arc ready to be stroked
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SegmentArc {
    pub start: f32,
    pub sweep: f32,
    pub color: Color,
}

/// Angle budget shared by every segment of one chart
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AllocationParams {
    pub total_sweep: f32,
    pub draw_start: f32,
    pub min_angle: f32,
    pub protect_min_value: bool,
}

/// Sum of all present segment values
pub fn derive_max_value(segments: &[Option<ProgressSegment>]) -> f32 {
    segments.iter().flatten().map(|segment| segment.value).sum()
}

/// Inflate segments that would render below `min_angle`.
///
/// Each undersized segment is raised to the value worth `min_angle` and the
/// difference is added to the max value, so later segments are measured
/// against the grown denominator. Returns the new max value.
pub fn protect_min_angles(
    segments: &mut [Option<ProgressSegment>],
    max_value: f32,
    total_sweep: f32,
    min_angle: f32,
) -> f32 {
    let mut max_value = max_value;
    if max_value <= 0.0 || total_sweep <= 0.0 {
        return max_value;
    }

    for segment in segments.iter_mut().flatten() {
        if segment.value / max_value < min_angle / total_sweep {
            let raised = min_angle * max_value / total_sweep;
            max_value += raised - segment.value;
            segment.value = raised;
        }
    }
    max_value
}

/// Floor to two decimals
pub fn quantize(sweep: f32) -> f32 {
    (sweep * 100.0).floor() / 100.0
}

/// Lay the segments end to end starting at the draw start.
///
/// Emission stops at the first absent entry, even if valid segments follow.
/// The last visible segment is clipped to the remaining budget and nothing is
/// emitted once the budget is used up, so the emitted sweeps never add up to
/// more than `total_sweep`.
pub fn allocate(
    segments: &[Option<ProgressSegment>],
    max_value: f32,
    params: AllocationParams,
    phase: f32,
) -> Vec<SegmentArc> {
    if !max_value.is_finite() || max_value <= 0.0 {
        tracing::warn!("Max value is {}, skipping progress segments", max_value);
        return Vec::new();
    }

    let end = params.draw_start + params.total_sweep;
    let mut begin = params.draw_start;
    let mut arcs = Vec::with_capacity(segments.len());

    for entry in segments {
        let Some(segment) = entry else {
            break;
        };
        if begin >= end {
            break;
        }

        // NaN and negative weights collapse to zero
        let mut sweep = (params.total_sweep * segment.value / max_value).max(0.0);
        if params.protect_min_value && sweep < params.min_angle {
            sweep = params.min_angle;
        }
        let remaining = end - begin;
        sweep = sweep.min(remaining);

        let mut visible = quantize(sweep * phase);
        if visible == 0.0 {
            visible = HAIRLINE_SWEEP;
        }
        visible = visible.min(remaining);

        arcs.push(SegmentArc {
            start: begin,
            sweep: visible,
            color: segment.color,
        });
        begin += visible;
    }

    arcs
}

/// Sweep of the single progress arc before animation is applied.
///
/// Returns `None` when the max value is zero, in which case only the track is
/// drawn.
pub fn single_progress(
    progress: f32,
    max_value: f32,
    total_sweep: f32,
    min_angle: f32,
    protect_min_value: bool,
) -> Option<f32> {
    if !max_value.is_finite() || max_value <= 0.0 {
        return None;
    }

    let mut sweep = (total_sweep * progress / max_value).max(0.0).min(total_sweep);
    if protect_min_value && sweep < min_angle {
        sweep = min_angle;
    }
    Some(sweep)
}

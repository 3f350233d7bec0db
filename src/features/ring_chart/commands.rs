//! Toolkit-independent draw commands
//!
//! A frame of the chart is the track arc followed by one or more progress arcs
//! composited source-in: a progress arc only shows where the track has already
//! been painted. All arcs share one rectangle and one stroke width, so the
//! track silhouette is an angular range and source-in reduces to clipping the
//! progress arcs against it.

use iced::Color;

use super::config::{ChartConfig, StrokeCap};
use super::layout::LayoutRect;
use super::segments::{self, ProgressSegment};

/// How an arc combines with what is already painted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Composite {
    #[default]
    SourceOver,
    /// Paint only where the destination is already covered
    SourceIn,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArcCommand {
    pub rect: LayoutRect,
    /// Degrees, clockwise from the right
    pub start: f32,
    pub sweep: f32,
    pub color: Color,
    pub stroke_width: f32,
    pub cap: StrokeCap,
    pub composite: Composite,
}

impl ArcCommand {
    pub fn end(&self) -> f32 {
        self.start + self.sweep
    }

    /// Angular range covered by the stroke, caps included
    pub fn silhouette(&self) -> (f32, f32) {
        let overhang = match self.cap {
            StrokeCap::Butt => 0.0,
            StrokeCap::Round | StrokeCap::Square => self.rect.cap_angle(self.stroke_width),
        };
        (self.start - overhang, self.end() + overhang)
    }
}

/// Rasterizer the commands are replayed onto
pub trait Surface {
    fn stroke_arc(&mut self, arc: &ArcCommand);
}

/// Build the commands for one frame at `phase`
pub fn build_commands(
    config: &ChartConfig,
    nodes: &[Option<ProgressSegment>],
    layout: &LayoutRect,
    phase: f32,
) -> Vec<ArcCommand> {
    let stroke_width = config.stroke_width;
    let draw_start = config.draw_start.degrees();
    let total = config.total_sweep();
    let inset = match config.stroke_cap {
        StrokeCap::Round => layout.cap_angle(stroke_width),
        StrokeCap::Square | StrokeCap::Butt => 0.0,
    };

    let arc = |start: f32, sweep: f32, color: Color, cap: StrokeCap, composite: Composite| {
        ArcCommand {
            rect: *layout,
            start,
            sweep,
            color,
            stroke_width,
            cap,
            composite,
        }
    };

    let mut commands = Vec::new();

    let track_sweep = total * phase - inset * 2.0;
    if track_sweep > 0.0 {
        commands.push(arc(
            draw_start + inset,
            track_sweep,
            config.background_color,
            config.stroke_cap,
            Composite::SourceOver,
        ));
    }

    if config.multi_progress {
        let arcs = segments::allocate(nodes, config.max_value, config.allocation_params(), phase);
        commands.extend(arcs.into_iter().map(|segment| {
            arc(
                segment.start,
                segment.sweep,
                segment.color,
                StrokeCap::Butt,
                Composite::SourceIn,
            )
        }));
    } else if let Some(sweep) = segments::single_progress(
        config.progress,
        config.max_value,
        total,
        config.min_angle,
        config.protect_min_value,
    ) {
        let scaled = sweep * phase;
        let visible = scaled - inset * 2.0;
        if visible > 0.0 {
            commands.push(arc(
                draw_start + inset,
                visible,
                config.progress_color,
                config.stroke_cap,
                Composite::SourceIn,
            ));
        } else if scaled > 0.0 {
            // too short for two round caps
            commands.push(arc(
                draw_start,
                scaled,
                config.progress_color,
                StrokeCap::Butt,
                Composite::SourceIn,
            ));
        }
    }

    commands
}

/// Restrict `arc` to the angular range `(from, to)`
pub fn clip_to_silhouette(arc: &ArcCommand, (from, to): (f32, f32)) -> Option<ArcCommand> {
    let start = arc.start.max(from);
    let end = arc.end().min(to);
    if end <= start {
        return None;
    }
    Some(ArcCommand {
        start,
        sweep: end - start,
        ..*arc
    })
}

/// Replay commands in order, resolving source-in against the last
/// source-over arc.
pub fn replay(commands: &[ArcCommand], surface: &mut impl Surface) {
    let mut destination: Option<(f32, f32)> = None;

    for command in commands {
        match command.composite {
            Composite::SourceOver => {
                destination = Some(command.silhouette());
                surface.stroke_arc(command);
            }
            Composite::SourceIn => {
                let Some(silhouette) = destination else {
                    continue;
                };
                if let Some(clipped) = clip_to_silhouette(command, silhouette) {
                    surface.stroke_arc(&clipped);
                }
            }
        }
    }
}

//! Ring chart primitive
//!
//! An animated single or multi-segment progress ring drawn with iced's Canvas.
//!
//! # Design
//!
//! [`RingChart`] owns the per-instance state: configuration, segments,
//! padding, the cached arc rectangle and the draw-in animation. Drawing
//! builds toolkit-independent commands and replays them onto a canvas
//! [`Frame`] through the [`Surface`] trait.
//!
//! It uses generic Message types and does not depend on application-specific
//! types.

use std::cell::Cell;
use std::time::{Duration, Instant};

use iced::widget::Canvas;
use iced::widget::canvas::path::arc::Elliptical;
use iced::widget::canvas::{Frame, Geometry, LineCap, Path, Program, Stroke};
use iced::{Color, Element, Padding, Radians, Rectangle, Renderer, Size, Theme, mouse};

use crate::features::ring_chart::config::{
    validate_min_angle, validate_paint_width, validate_segment_value,
};
use crate::features::ring_chart::segments::{derive_max_value, protect_min_angles};
use crate::features::ring_chart::{
    AngleStyle, ArcCommand, ChartConfig, ChartError, ChartStyle, Constraint, DrawStart,
    LayoutRect, PhaseDriver, ProgressSegment, StrokeCap, Surface, build_commands, measure,
    replay, resolve_layout,
};
use crate::utils::{DebugProbe, HostContext};

#[derive(Debug, Clone, Copy, PartialEq)]
struct CachedLayout {
    size: Size,
    rect: LayoutRect,
}

/// Ring chart widget state
#[derive(Debug)]
pub struct RingChart {
    config: ChartConfig,
    nodes: Vec<Option<ProgressSegment>>,
    padding: Padding,
    driver: PhaseDriver,
    layout: Cell<Option<CachedLayout>>,
    debug: bool,
}

impl Default for RingChart {
    fn default() -> Self {
        Self::new(ChartConfig::default())
    }
}

impl RingChart {
    pub fn new(config: ChartConfig) -> Self {
        let driver = PhaseDriver::new(config.animation_duration);
        Self {
            config,
            nodes: Vec::new(),
            padding: Padding::ZERO,
            driver,
            layout: Cell::new(None),
            debug: false,
        }
    }

    /// Build a chart from host style attributes.
    ///
    /// A missing context or an invalid style is rejected. Debuggable hosts get
    /// a trace line for every arc drawn.
    pub fn from_style(
        style: ChartStyle,
        context: Option<&dyn HostContext>,
    ) -> Result<Self, ChartError> {
        let debug = DebugProbe::new().is_debug(context)?;
        let mut chart = Self::new(style.into_config()?);
        chart.debug = debug;
        Ok(chart)
    }

    pub fn config(&self) -> &ChartConfig {
        &self.config
    }

    pub fn progress_nodes(&self) -> &[Option<ProgressSegment>] {
        &self.nodes
    }

    pub fn max_value(&self) -> f32 {
        self.config.max_value
    }

    pub fn progress(&self) -> f32 {
        self.config.progress
    }

    pub fn padding(&self) -> Padding {
        self.padding
    }

    /// Current draw-in phase (0.0 - 1.0)
    pub fn phase(&self) -> f32 {
        self.driver.phase()
    }

    pub fn is_animating(&self) -> bool {
        self.driver.is_running()
    }

    /// Replace the segments and restart the animation.
    ///
    /// This always overwrites the max value with the sum of the segment
    /// values. Call [`RingChart::set_max_value`] afterwards to use a
    /// different scale. With min-value protection on, undersized segments are
    /// inflated here and the max value grows accordingly.
    ///
    /// Drawing stops at the first `None` entry. A negative or non-finite
    /// value rejects the whole list and leaves the chart unchanged.
    pub fn set_progress_nodes<I, T>(&mut self, nodes: I) -> Result<(), ChartError>
    where
        I: IntoIterator<Item = T>,
        T: Into<Option<ProgressSegment>>,
    {
        let mut nodes: Vec<Option<ProgressSegment>> = nodes.into_iter().map(Into::into).collect();
        for node in nodes.iter().flatten() {
            validate_segment_value(node.value)?;
        }

        let mut max_value = derive_max_value(&nodes);
        if self.config.protect_min_value {
            max_value = protect_min_angles(
                &mut nodes,
                max_value,
                self.config.total_sweep(),
                self.config.min_angle,
            );
        }

        self.nodes = nodes;
        self.config.max_value = max_value;
        self.play_animation();
        Ok(())
    }

    /// Zero means nothing but the track is drawn
    pub fn set_max_value(&mut self, max_value: u32) {
        self.config.max_value = max_value as f32;
    }

    pub fn set_progress(&mut self, progress: u32) {
        self.config.progress = progress as f32;
    }

    pub fn set_progress_color(&mut self, color: Color) {
        self.config.progress_color = color;
    }

    pub fn set_background_color(&mut self, color: Color) {
        self.config.background_color = color;
    }

    pub fn set_paint_width(&mut self, width: f32) -> Result<(), ChartError> {
        self.config.stroke_width = validate_paint_width(width)?;
        self.layout.set(None);
        Ok(())
    }

    pub fn set_paint_cap(&mut self, cap: StrokeCap) -> Result<(), ChartError> {
        if cap == StrokeCap::Butt {
            return Err(ChartError::InvalidArgument(
                "paint cap must be round or square".to_string(),
            ));
        }
        self.config.stroke_cap = cap;
        Ok(())
    }

    pub fn set_draw_start(&mut self, draw_start: DrawStart) {
        self.config.draw_start = draw_start;
    }

    pub fn set_chart_angle_style(&mut self, style: AngleStyle) {
        self.config.angle_style = style;
        self.layout.set(None);
    }

    /// Minimum visible angle in degrees
    pub fn set_min_progress(&mut self, min_angle: f32) -> Result<(), ChartError> {
        self.config.min_angle = validate_min_angle(min_angle)?;
        Ok(())
    }

    pub fn set_protect_min_value(&mut self, protect: bool) {
        self.config.protect_min_value = protect;
    }

    pub fn set_multi_progress(&mut self, multi: bool) {
        self.config.multi_progress = multi;
    }

    /// Takes effect on the next animation run
    pub fn set_animation_time(&mut self, duration: Duration) {
        self.config.animation_duration = duration;
        self.driver.set_duration(duration);
    }

    pub fn set_padding(&mut self, padding: impl Into<Padding>) {
        self.padding = padding.into();
        self.layout.set(None);
    }

    /// Hook called with the phase on every animation tick
    pub fn set_redraw_listener(&mut self, listener: impl FnMut(f32) + Send + 'static) {
        self.driver.set_listener(listener);
    }

    /// Restart the draw-in animation from zero
    pub fn play_animation(&mut self) {
        self.driver.start();
    }

    /// Stop the animation where it is and drop the redraw listener
    pub fn stop_animation(&mut self) {
        self.driver.release();
    }

    /// Advance the animation, returns whether it was running
    pub fn tick(&mut self, now: Instant) -> bool {
        self.driver.tick(now)
    }

    /// Size to use under the given constraints
    pub fn measure(&self, width: Constraint, height: Constraint) -> Size {
        measure(
            width,
            height,
            self.config.stroke_width,
            self.config.angle_style,
        )
    }

    /// Arc rectangle for a widget of `size`, recomputed only when it changes
    pub fn layout_for(&self, size: Size) -> LayoutRect {
        if let Some(cached) = self.layout.get() {
            if cached.size == size {
                return cached.rect;
            }
        }

        let rect = resolve_layout(
            size,
            self.padding,
            self.config.stroke_width,
            self.config.angle_style,
        );
        self.layout.set(Some(CachedLayout { size, rect }));
        rect
    }

    /// Draw commands for a widget of `size` at the current phase
    pub fn commands(&self, size: Size) -> Vec<ArcCommand> {
        let rect = self.layout_for(size);
        let commands = build_commands(&self.config, &self.nodes, &rect, self.driver.phase());

        if self.debug {
            for command in &commands {
                tracing::debug!(
                    "Draw[ begin => {:.2} sweep => {:.2} ]",
                    command.start,
                    command.sweep
                );
            }
        }
        commands
    }

    /// Canvas element of the given size
    pub fn view<'a, Message: 'a>(&'a self, size: Size) -> Element<'a, Message> {
        Canvas::new(RingChartProgram { chart: self })
            .width(size.width)
            .height(size.height)
            .into()
    }
}

impl Drop for RingChart {
    fn drop(&mut self) {
        self.driver.release();
    }
}

/// Canvas program borrowing a chart for one frame
struct RingChartProgram<'a> {
    chart: &'a RingChart,
}

impl<Message> Program<Message> for RingChartProgram<'_> {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());
        let commands = self.chart.commands(bounds.size());
        replay(&commands, &mut FrameSurface { frame: &mut frame });
        vec![frame.into_geometry()]
    }
}

/// Strokes arcs onto a canvas frame
struct FrameSurface<'f> {
    frame: &'f mut Frame,
}

impl Surface for FrameSurface<'_> {
    fn stroke_arc(&mut self, arc: &ArcCommand) {
        let path = Path::new(|builder| {
            builder.ellipse(Elliptical {
                center: arc.rect.center(),
                radii: arc.rect.radii(),
                rotation: Radians(0.0),
                start_angle: Radians(arc.start.to_radians()),
                end_angle: Radians(arc.end().to_radians()),
            });
        });

        self.frame.stroke(
            &path,
            Stroke::default()
                .with_width(arc.stroke_width)
                .with_color(arc.color)
                .with_line_cap(line_cap(arc.cap)),
        );
    }
}

fn line_cap(cap: StrokeCap) -> LineCap {
    match cap {
        StrokeCap::Round => LineCap::Round,
        StrokeCap::Square => LineCap::Square,
        StrokeCap::Butt => LineCap::Butt,
    }
}

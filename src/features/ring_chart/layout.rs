//! Arc bounding box and measurement

use iced::{Padding, Point, Size, Vector};

use super::config::AngleStyle;

/// Bounding box the arcs are inscribed in
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct LayoutRect {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl LayoutRect {
    pub fn width(&self) -> f32 {
        self.right - self.left
    }

    pub fn height(&self) -> f32 {
        self.bottom - self.top
    }

    pub fn center(&self) -> Point {
        Point::new(
            (self.left + self.right) / 2.0,
            (self.top + self.bottom) / 2.0,
        )
    }

    /// Horizontal and vertical radius of the inscribed ellipse
    pub fn radii(&self) -> Vector {
        Vector::new(self.width() / 2.0, self.height() / 2.0)
    }

    pub fn radius(&self) -> f32 {
        self.width().min(self.height()) / 2.0
    }

    /// Angle in degrees taken up by half a stroke at this radius.
    ///
    /// Round and square caps stick out of an arc by this much at each end.
    pub fn cap_angle(&self, stroke_width: f32) -> f32 {
        let radius = self.radius();
        if radius <= 0.0 {
            return 0.0;
        }
        180.0 * stroke_width * 0.5 / (std::f32::consts::PI * radius)
    }
}

/// Compute the arc rectangle for a widget of `size`.
///
/// The radius is half the width minus the stroke. A half ring sits lower in
/// its box so the visible upper half is centered.
pub fn resolve_layout(
    size: Size,
    padding: Padding,
    stroke_width: f32,
    style: AngleStyle,
) -> LayoutRect {
    let center_x = size.width / 2.0;
    let center_y = size.height / 2.0;
    let radius = center_x - stroke_width;

    let (above, below) = if style.is_half() {
        (radius * 0.5, radius * 1.5)
    } else {
        (radius, radius)
    };

    LayoutRect {
        left: center_x - radius + padding.left,
        top: center_y - above + padding.top,
        right: center_x + radius - padding.right,
        bottom: center_y + below - padding.bottom,
    }
}

/// Sizing constraint imposed by the parent on one axis
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Constraint {
    /// The parent decided the size
    Exactly(f32),
    /// The widget may pick any size up to the bound
    AtMost(f32),
}

impl Constraint {
    fn bound(self) -> f32 {
        match self {
            Constraint::Exactly(value) | Constraint::AtMost(value) => value,
        }
    }

    fn is_at_most(self) -> bool {
        matches!(self, Constraint::AtMost(_))
    }
}

/// Pick the widget size under the parent's constraints.
///
/// A free axis is derived from the other one: a half ring is twice as wide as
/// it is tall (plus a stroke), a full ring is square. With both axes free the
/// ring is five strokes wide.
pub fn measure(
    width: Constraint,
    height: Constraint,
    stroke_width: f32,
    style: AngleStyle,
) -> Size {
    let half = style.is_half();
    let height_for = |w: f32| if half { w / 2.0 + stroke_width } else { w };

    match (width.is_at_most(), height.is_at_most()) {
        (true, true) => {
            let w = (stroke_width * 5.0).min(width.bound());
            Size::new(w, height_for(w).min(height.bound()))
        }
        (true, false) => {
            let h = height.bound();
            let w = if half { h * 2.0 } else { h } - stroke_width;
            Size::new(w.min(width.bound()).max(0.0), h)
        }
        (false, true) => {
            let w = width.bound();
            Size::new(w, height_for(w).min(height.bound()))
        }
        (false, false) => Size::new(width.bound(), height.bound()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-4
    }

    #[test]
    fn test_full_circle_is_symmetric() {
        let rect = resolve_layout(
            Size::new(200.0, 200.0),
            Padding::ZERO,
            20.0,
            AngleStyle::Full,
        );
        assert_eq!(
            rect,
            LayoutRect {
                left: 20.0,
                top: 20.0,
                right: 180.0,
                bottom: 180.0,
            }
        );
        assert_eq!(rect.center(), Point::new(100.0, 100.0));
        assert_eq!(rect.radius(), 80.0);
    }

    #[test]
    fn test_half_circle_is_shifted_down() {
        let rect = resolve_layout(
            Size::new(200.0, 120.0),
            Padding::ZERO,
            20.0,
            AngleStyle::Half,
        );
        // radius 80, vertical center 60
        assert_eq!(rect.top, 20.0);
        assert_eq!(rect.bottom, 180.0);
        assert_eq!(rect.left, 20.0);
        assert_eq!(rect.right, 180.0);
        assert_eq!(rect.center(), Point::new(100.0, 100.0));
    }

    #[test]
    fn test_padding_shrinks_each_side() {
        let padding = Padding {
            top: 1.0,
            right: 2.0,
            bottom: 3.0,
            left: 4.0,
        };
        let rect = resolve_layout(Size::new(200.0, 200.0), padding, 20.0, AngleStyle::Full);
        assert_eq!(rect.left, 24.0);
        assert_eq!(rect.top, 21.0);
        assert_eq!(rect.right, 178.0);
        assert_eq!(rect.bottom, 177.0);
        assert_eq!(rect.radii(), Vector::new(77.0, 78.0));
    }

    #[test]
    fn test_cap_angle() {
        let rect = resolve_layout(
            Size::new(200.0, 200.0),
            Padding::ZERO,
            20.0,
            AngleStyle::Full,
        );
        // 180 * 10 / (pi * 80)
        assert!(approx(rect.cap_angle(20.0), 7.161_973));
        assert_eq!(LayoutRect::default().cap_angle(20.0), 0.0);
    }

    #[test]
    fn test_measure_both_free() {
        let half = measure(
            Constraint::AtMost(1000.0),
            Constraint::AtMost(1000.0),
            30.0,
            AngleStyle::Half,
        );
        assert_eq!(half, Size::new(150.0, 105.0));

        let full = measure(
            Constraint::AtMost(1000.0),
            Constraint::AtMost(1000.0),
            30.0,
            AngleStyle::Full,
        );
        assert_eq!(full, Size::new(150.0, 150.0));
    }

    #[test]
    fn test_measure_free_width() {
        let half = measure(
            Constraint::AtMost(500.0),
            Constraint::Exactly(100.0),
            20.0,
            AngleStyle::Half,
        );
        assert_eq!(half, Size::new(180.0, 100.0));

        let full = measure(
            Constraint::AtMost(500.0),
            Constraint::Exactly(100.0),
            20.0,
            AngleStyle::Full,
        );
        assert_eq!(full, Size::new(80.0, 100.0));

        let clamped = measure(
            Constraint::AtMost(120.0),
            Constraint::Exactly(100.0),
            20.0,
            AngleStyle::Half,
        );
        assert_eq!(clamped.width, 120.0);
    }

    #[test]
    fn test_measure_free_height() {
        let half = measure(
            Constraint::Exactly(300.0),
            Constraint::AtMost(1000.0),
            20.0,
            AngleStyle::Half,
        );
        assert_eq!(half, Size::new(300.0, 170.0));

        let full = measure(
            Constraint::Exactly(300.0),
            Constraint::AtMost(250.0),
            20.0,
            AngleStyle::Full,
        );
        assert_eq!(full, Size::new(300.0, 250.0));
    }

    #[test]
    fn test_measure_exact() {
        let size = measure(
            Constraint::Exactly(64.0),
            Constraint::Exactly(48.0),
            20.0,
            AngleStyle::Full,
        );
        assert_eq!(size, Size::new(64.0, 48.0));
    }
}

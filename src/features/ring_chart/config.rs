//! Chart configuration and style attributes
//!
//! [`ChartStyle`] is the serde-facing set of style attributes a host hands to
//! the widget. It is validated into a [`ChartConfig`], which is what the
//! geometry code reads.

use std::time::Duration;

use iced::Color;
use serde::{Deserialize, Serialize};

use super::segments::AllocationParams;

/// Default animation duration in milliseconds
pub const DEFAULT_ANIMATION_MS: u64 = 1500;

/// Default stroke width
pub const DEFAULT_PAINT_WIDTH: f32 = 30.0;

/// Default minimum visible angle in degrees
pub const DEFAULT_MIN_PROGRESS: f32 = 1.0;

/// Default maximum value
pub const DEFAULT_MAX_VALUE: u32 = 100;

const LIGHT_GRAY: Color = iced::color!(0xcccccc);
const GREEN: Color = iced::color!(0x00ff00);

/// Total angle covered by the chart
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(try_from = "u32", into = "u32")]
pub enum AngleStyle {
    /// 180 degree arc
    #[default]
    Half,
    /// Full 360 degree ring
    Full,
}

impl AngleStyle {
    pub fn degrees(self) -> f32 {
        match self {
            AngleStyle::Half => 180.0,
            AngleStyle::Full => 360.0,
        }
    }

    pub fn is_half(self) -> bool {
        self == AngleStyle::Half
    }
}

impl TryFrom<u32> for AngleStyle {
    type Error = ChartError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        match value {
            180 => Ok(AngleStyle::Half),
            360 => Ok(AngleStyle::Full),
            other => Err(ChartError::InvalidArgument(format!(
                "chart angle style must be 180 or 360, got {}",
                other
            ))),
        }
    }
}

impl From<AngleStyle> for u32 {
    fn from(style: AngleStyle) -> Self {
        style.degrees() as u32
    }
}

/// Where the first arc begins.
///
/// Angles follow the canvas convention: 0 is right and angles grow clockwise
/// because the y axis points down.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(try_from = "u32", into = "u32")]
pub enum DrawStart {
    Right,
    Bottom,
    #[default]
    Left,
    Top,
}

impl DrawStart {
    pub fn degrees(self) -> f32 {
        match self {
            DrawStart::Right => 0.0,
            DrawStart::Bottom => 90.0,
            DrawStart::Left => 180.0,
            DrawStart::Top => 270.0,
        }
    }
}

impl TryFrom<u32> for DrawStart {
    type Error = ChartError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(DrawStart::Right),
            90 => Ok(DrawStart::Bottom),
            180 => Ok(DrawStart::Left),
            270 => Ok(DrawStart::Top),
            other => Err(ChartError::InvalidArgument(format!(
                "draw start must be one of 0, 90, 180, 270, got {}",
                other
            ))),
        }
    }
}

impl From<DrawStart> for u32 {
    fn from(start: DrawStart) -> Self {
        start.degrees() as u32
    }
}

/// Stroke end style
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum StrokeCap {
    #[default]
    Round,
    Square,
    /// Flat end flush with the arc. Used for the pieces of a multi-segment ring.
    Butt,
}

/// Style attributes as a host provides them
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ChartStyle {
    #[serde(with = "hex_color")]
    pub background_color: Color,
    #[serde(with = "hex_color")]
    pub progress_color: Color,
    pub multi_progress: bool,
    pub protect_min_value: bool,
    /// Minimum visible angle in degrees
    pub min_progress: f32,
    pub chart_angle_style: AngleStyle,
    pub draw_start: DrawStart,
    pub max_value: i32,
    pub progress: i32,
    pub paint_width: f32,
    pub paint_cap: StrokeCap,
    /// Animation duration in milliseconds
    pub animation_time: u64,
}

impl Default for ChartStyle {
    fn default() -> Self {
        Self {
            background_color: LIGHT_GRAY,
            progress_color: GREEN,
            multi_progress: false,
            protect_min_value: true,
            min_progress: DEFAULT_MIN_PROGRESS,
            chart_angle_style: AngleStyle::Half,
            draw_start: DrawStart::Left,
            max_value: DEFAULT_MAX_VALUE as i32,
            progress: 0,
            paint_width: DEFAULT_PAINT_WIDTH,
            paint_cap: StrokeCap::Round,
            animation_time: DEFAULT_ANIMATION_MS,
        }
    }
}

impl ChartStyle {
    /// Validate the attributes into a config
    pub fn into_config(self) -> Result<ChartConfig, ChartError> {
        if self.max_value < 0 {
            return Err(ChartError::InvalidArgument(format!(
                "max value must not be negative, got {}",
                self.max_value
            )));
        }
        if self.progress < 0 {
            return Err(ChartError::InvalidArgument(format!(
                "progress must not be negative, got {}",
                self.progress
            )));
        }
        if self.paint_cap == StrokeCap::Butt {
            return Err(ChartError::InvalidArgument(
                "paint cap must be round or square".to_string(),
            ));
        }

        Ok(ChartConfig {
            draw_start: self.draw_start,
            angle_style: self.chart_angle_style,
            stroke_width: validate_paint_width(self.paint_width)?,
            stroke_cap: self.paint_cap,
            background_color: self.background_color,
            progress_color: self.progress_color,
            animation_duration: Duration::from_millis(self.animation_time),
            protect_min_value: self.protect_min_value,
            min_angle: validate_min_angle(self.min_progress)?,
            max_value: self.max_value as f32,
            progress: self.progress as f32,
            multi_progress: self.multi_progress,
        })
    }
}

/// Validated chart configuration owned by one widget
#[derive(Debug, Clone, PartialEq)]
pub struct ChartConfig {
    pub draw_start: DrawStart,
    pub angle_style: AngleStyle,
    pub stroke_width: f32,
    pub stroke_cap: StrokeCap,
    pub background_color: Color,
    pub progress_color: Color,
    pub animation_duration: Duration,
    pub protect_min_value: bool,
    /// Minimum visible angle in degrees
    pub min_angle: f32,
    pub max_value: f32,
    pub progress: f32,
    pub multi_progress: bool,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            draw_start: DrawStart::Left,
            angle_style: AngleStyle::Half,
            stroke_width: DEFAULT_PAINT_WIDTH,
            stroke_cap: StrokeCap::Round,
            background_color: LIGHT_GRAY,
            progress_color: GREEN,
            animation_duration: Duration::from_millis(DEFAULT_ANIMATION_MS),
            protect_min_value: true,
            min_angle: DEFAULT_MIN_PROGRESS,
            max_value: DEFAULT_MAX_VALUE as f32,
            progress: 0.0,
            multi_progress: false,
        }
    }
}

impl ChartConfig {
    /// Total sweep of the track in degrees
    pub fn total_sweep(&self) -> f32 {
        self.angle_style.degrees()
    }

    pub fn allocation_params(&self) -> AllocationParams {
        AllocationParams {
            total_sweep: self.total_sweep(),
            draw_start: self.draw_start.degrees(),
            min_angle: self.min_angle,
            protect_min_value: self.protect_min_value,
        }
    }
}

pub(crate) fn validate_paint_width(width: f32) -> Result<f32, ChartError> {
    if width.is_finite() && width > 0.0 {
        Ok(width)
    } else {
        Err(ChartError::InvalidArgument(format!(
            "paint width must be a positive number, got {}",
            width
        )))
    }
}

pub(crate) fn validate_min_angle(angle: f32) -> Result<f32, ChartError> {
    if angle.is_finite() && angle >= 0.0 {
        Ok(angle)
    } else {
        Err(ChartError::InvalidArgument(format!(
            "minimum angle must be a non-negative number, got {}",
            angle
        )))
    }
}

pub(crate) fn validate_segment_value(value: f32) -> Result<f32, ChartError> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(ChartError::InvalidArgument(format!(
            "segment value must be a non-negative number, got {}",
            value
        )))
    }
}

/// Parse `#RRGGBB` or `#AARRGGBB`
pub fn parse_hex_color(value: &str) -> Result<Color, ChartError> {
    let digits = value.strip_prefix('#').unwrap_or(value);
    let invalid = || ChartError::InvalidArgument(format!("invalid color: {:?}", value));

    if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(invalid());
    }
    let raw = u32::from_str_radix(digits, 16).map_err(|_| invalid())?;

    match digits.len() {
        6 => Ok(Color::from_rgb8(
            (raw >> 16) as u8,
            (raw >> 8) as u8,
            raw as u8,
        )),
        8 => Ok(Color::from_rgba8(
            (raw >> 16) as u8,
            (raw >> 8) as u8,
            raw as u8,
            (raw >> 24) as u8 as f32 / 255.0,
        )),
        _ => Err(invalid()),
    }
}

/// Format a color as `#AARRGGBB`, or `#RRGGBB` when opaque
pub fn to_hex_color(color: Color) -> String {
    let [r, g, b, a] = color.into_rgba8();
    if a == u8::MAX {
        format!("#{:02x}{:02x}{:02x}", r, g, b)
    } else {
        format!("#{:02x}{:02x}{:02x}{:02x}", a, r, g, b)
    }
}

/// Serde adapter for hex color strings
pub mod hex_color {
    use iced::Color;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(color: &Color, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&super::to_hex_color(*color))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Color, D::Error> {
        let value = String::deserialize(deserializer)?;
        super::parse_hex_color(&value).map_err(serde::de::Error::custom)
    }
}

/// Errors raised by the chart
#[derive(Debug, Clone, PartialEq)]
pub enum ChartError {
    /// A missing or out-of-range argument
    InvalidArgument(String),
    Io(String),
    Parse(String),
}

impl std::fmt::Display for ChartError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ChartError::InvalidArgument(e) => write!(f, "Invalid argument: {}", e),
            ChartError::Io(e) => write!(f, "IO error: {}", e),
            ChartError::Parse(e) => write!(f, "Parse error: {}", e),
        }
    }
}

impl std::error::Error for ChartError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_style_matches_default_config() {
        let config = ChartStyle::default().into_config().unwrap();
        assert_eq!(config, ChartConfig::default());
        assert_eq!(config.total_sweep(), 180.0);
        assert_eq!(config.draw_start.degrees(), 180.0);
    }

    #[test]
    fn test_style_from_json_uses_defaults_for_missing_keys() {
        let json = r##"{
            "backgroundColor": "#ff9800",
            "progressColor": "#8bc34a",
            "chartAngleStyle": 360,
            "drawStart": 270,
            "progress": 70,
            "paintWidth": 15.0
        }"##;

        let style: ChartStyle = serde_json::from_str(json).unwrap();
        assert_eq!(style.chart_angle_style, AngleStyle::Full);
        assert_eq!(style.draw_start, DrawStart::Top);
        assert_eq!(style.paint_cap, StrokeCap::Round);
        assert_eq!(style.max_value, 100);
        assert_eq!(style.animation_time, DEFAULT_ANIMATION_MS);
        assert_eq!(style.background_color, Color::from_rgb8(0xff, 0x98, 0x00));

        let config = style.into_config().unwrap();
        assert_eq!(config.progress, 70.0);
        assert_eq!(config.stroke_width, 15.0);
    }

    #[test]
    fn test_rejects_unknown_angle_style() {
        let result: Result<ChartStyle, _> = serde_json::from_str(r#"{"chartAngleStyle": 270}"#);
        assert!(result.is_err());
        assert!(AngleStyle::try_from(90).is_err());
    }

    #[test]
    fn test_rejects_unknown_draw_start() {
        assert!(matches!(
            DrawStart::try_from(45),
            Err(ChartError::InvalidArgument(_))
        ));
        assert_eq!(DrawStart::try_from(90).unwrap(), DrawStart::Bottom);
    }

    #[test]
    fn test_rejects_bad_numbers() {
        let bad_width = ChartStyle {
            paint_width: 0.0,
            ..Default::default()
        };
        assert!(bad_width.into_config().is_err());

        let bad_max = ChartStyle {
            max_value: -1,
            ..Default::default()
        };
        assert!(bad_max.into_config().is_err());

        let bad_min = ChartStyle {
            min_progress: f32::NAN,
            ..Default::default()
        };
        assert!(bad_min.into_config().is_err());
    }

    #[test]
    fn test_zero_max_value_is_accepted() {
        let style = ChartStyle {
            max_value: 0,
            ..Default::default()
        };
        assert_eq!(style.into_config().unwrap().max_value, 0.0);
    }

    #[test]
    fn test_hex_colors() {
        assert_eq!(
            parse_hex_color("#2196f3").unwrap(),
            Color::from_rgb8(0x21, 0x96, 0xf3)
        );
        let translucent = parse_hex_color("#80ff0000").unwrap();
        assert_eq!(translucent.into_rgba8(), [0xff, 0, 0, 0x80]);
        assert_eq!(to_hex_color(translucent), "#80ff0000");
        assert_eq!(to_hex_color(Color::from_rgb8(0x4c, 0xaf, 0x50)), "#4caf50");

        assert!(parse_hex_color("#12345").is_err());
        assert!(parse_hex_color("#gg0000").is_err());
        assert!(parse_hex_color("").is_err());
    }

    #[test]
    fn test_style_serializes_with_camel_case_keys() {
        let json = serde_json::to_value(ChartStyle::default()).unwrap();
        assert_eq!(json["chartAngleStyle"], 180);
        assert_eq!(json["drawStart"], 180);
        assert_eq!(json["paintCap"], "round");
        assert_eq!(json["backgroundColor"], "#cccccc");
    }
}

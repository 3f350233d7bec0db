//! Gallery settings persistence
//!
//! The demo gallery reads its charts from `charts.json` in the user config
//! directory and falls back to the built-in set.

use std::path::{Path, PathBuf};

use iced::{Color, color};
use serde::{Deserialize, Serialize};

use super::ring_chart::config::hex_color;
use super::ring_chart::{AngleStyle, ChartError, ChartStyle, ProgressSegment, StrokeCap};

const ORANGE: Color = color!(0xff9800);
const LIGHT_GREEN: Color = color!(0x8bc34a);
const CHART_GREEN: Color = color!(0x4caf50);
const CHART_BLUE: Color = color!(0x2196f3);
const CHART_RED: Color = color!(0xf44336);
const CHART_YELLOW: Color = color!(0xffeb3b);

/// One segment as stored on disk
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NodeStyle {
    pub value: f32,
    #[serde(with = "hex_color")]
    pub color: Color,
}

impl From<NodeStyle> for ProgressSegment {
    fn from(node: NodeStyle) -> Self {
        ProgressSegment::new(node.value, node.color)
    }
}

/// A chart shown in the gallery
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GalleryChart {
    pub title: String,
    #[serde(default)]
    pub style: ChartStyle,
    /// Segments for multi-progress charts
    #[serde(default)]
    pub nodes: Vec<NodeStyle>,
}

/// Gallery settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GallerySettings {
    pub charts: Vec<GalleryChart>,
}

impl Default for GallerySettings {
    fn default() -> Self {
        let nodes = |values: [(f32, Color); 4]| {
            values
                .into_iter()
                .map(|(value, color)| NodeStyle { value, color })
                .collect()
        };

        Self {
            charts: vec![
                GalleryChart {
                    title: "Full ring".to_string(),
                    style: ChartStyle {
                        progress: 70,
                        chart_angle_style: AngleStyle::Full,
                        paint_width: 15.0,
                        progress_color: LIGHT_GREEN,
                        background_color: ORANGE,
                        ..Default::default()
                    },
                    nodes: Vec::new(),
                },
                GalleryChart {
                    title: "Half ring, square caps".to_string(),
                    style: ChartStyle {
                        progress: 30,
                        paint_cap: StrokeCap::Square,
                        paint_width: 15.0,
                        progress_color: LIGHT_GREEN,
                        background_color: ORANGE,
                        ..Default::default()
                    },
                    nodes: Vec::new(),
                },
                GalleryChart {
                    title: "Segments".to_string(),
                    style: ChartStyle {
                        multi_progress: true,
                        paint_width: 15.0,
                        background_color: ORANGE,
                        ..Default::default()
                    },
                    nodes: nodes([
                        (10.0, CHART_GREEN),
                        (20.0, CHART_BLUE),
                        (50.0, CHART_RED),
                        (10.0, CHART_YELLOW),
                    ]),
                },
                GalleryChart {
                    title: "Segments, full ring".to_string(),
                    style: ChartStyle {
                        multi_progress: true,
                        chart_angle_style: AngleStyle::Full,
                        paint_width: 40.0,
                        ..Default::default()
                    },
                    nodes: nodes([
                        (15.0, Color::from_rgb8(0xff, 0x00, 0x00)),
                        (25.0, Color::from_rgb8(0xff, 0xff, 0x00)),
                        (45.0, Color::from_rgb8(0x00, 0xff, 0x00)),
                        (15.0, Color::from_rgb8(0x00, 0xff, 0xff)),
                    ]),
                },
            ],
        }
    }
}

impl GallerySettings {
    /// Get the settings file path
    pub fn file_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "ringchart", "RingChart")
            .map(|dirs| dirs.config_dir().join("charts.json"))
    }

    /// Load settings from file, or return defaults if not found
    pub fn load() -> Self {
        Self::file_path()
            .and_then(|path| match Self::load_from_file(&path) {
                Ok(settings) => Some(settings),
                Err(e) => {
                    tracing::debug!("Using built-in charts ({:?}): {}", path, e);
                    None
                }
            })
            .unwrap_or_default()
    }

    /// Load settings from a specific file
    pub fn load_from_file(path: &Path) -> Result<Self, ChartError> {
        let content = std::fs::read_to_string(path).map_err(|e| ChartError::Io(e.to_string()))?;
        serde_json::from_str(&content).map_err(|e| ChartError::Parse(e.to_string()))
    }

    /// Save settings to a specific file
    pub fn save_to_file(&self, path: &Path) -> Result<(), ChartError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| ChartError::Io(e.to_string()))?;
        }

        let content =
            serde_json::to_string_pretty(self).map_err(|e| ChartError::Parse(e.to_string()))?;
        std::fs::write(path, content).map_err(|e| ChartError::Io(e.to_string()))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid_styles() {
        for chart in GallerySettings::default().charts {
            assert!(
                chart.style.clone().into_config().is_ok(),
                "{} has an invalid style",
                chart.title
            );
        }
    }

    #[test]
    fn test_parse_minimal_chart() {
        let json = r##"{
            "charts": [
                {
                    "title": "Storage",
                    "style": { "multiProgress": true, "chartAngleStyle": 360 },
                    "nodes": [
                        { "value": 3.0, "color": "#f44336" },
                        { "value": 7.0, "color": "#2196f3" }
                    ]
                }
            ]
        }"##;

        let settings: GallerySettings = serde_json::from_str(json).unwrap();
        let chart = &settings.charts[0];
        assert!(chart.style.multi_progress);
        assert_eq!(chart.style.chart_angle_style, AngleStyle::Full);
        assert_eq!(chart.style.paint_width, 30.0);

        let segment: ProgressSegment = chart.nodes[1].into();
        assert_eq!(segment.value, 7.0);
        assert_eq!(segment.color, CHART_BLUE);
    }

    #[test]
    fn test_save_and_load_file() {
        let dir = std::env::temp_dir().join(format!("ringchart-settings-{}", std::process::id()));
        let path = dir.join("charts.json");

        let settings = GallerySettings::default();
        settings.save_to_file(&path).unwrap();
        let loaded = GallerySettings::load_from_file(&path).unwrap();
        assert_eq!(loaded, settings);

        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let path = std::env::temp_dir().join("ringchart-does-not-exist/charts.json");
        assert!(matches!(
            GallerySettings::load_from_file(&path),
            Err(ChartError::Io(_))
        ));
    }
}

//! Main application module

mod message;
mod view;

use anyhow::Context;
use iced::{Subscription, Task};

use ringchart::features::GallerySettings;
use ringchart::features::ring_chart::ProgressSegment;
use ringchart::ui::RingChart;
use ringchart::utils::{DesktopContext, HostContext};

pub use message::Message;

/// A titled chart in the gallery
#[derive(Debug)]
pub struct GalleryEntry {
    pub title: String,
    pub chart: RingChart,
}

/// Application state
#[derive(Debug, Default)]
pub struct App {
    pub charts: Vec<GalleryEntry>,
}

/// Build the gallery charts from settings
pub fn build_gallery(
    settings: &GallerySettings,
    context: &dyn HostContext,
) -> anyhow::Result<Vec<GalleryEntry>> {
    settings
        .charts
        .iter()
        .map(|entry| {
            let mut chart = RingChart::from_style(entry.style.clone(), Some(context))
                .with_context(|| format!("invalid style for chart '{}'", entry.title))?;
            if !entry.nodes.is_empty() {
                chart
                    .set_progress_nodes(entry.nodes.iter().copied().map(ProgressSegment::from))
                    .with_context(|| format!("invalid segments for chart '{}'", entry.title))?;
            }
            Ok(GalleryEntry {
                title: entry.title.clone(),
                chart,
            })
        })
        .collect()
}

impl App {
    /// Create new application instance
    pub fn new() -> (Self, Task<Message>) {
        let settings = GallerySettings::load();

        let charts = match build_gallery(&settings, &DesktopContext) {
            Ok(charts) => charts,
            Err(e) => {
                tracing::error!("Failed to load gallery, using built-in charts: {:#}", e);
                build_gallery(&GallerySettings::default(), &DesktopContext).unwrap_or_default()
            }
        };
        tracing::info!("Loaded {} charts", charts.len());

        let mut app = Self { charts };
        app.play_all();
        (app, Task::none())
    }

    pub fn title(&self) -> String {
        "Ring Chart Gallery".to_string()
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::PlayAnimation => self.play_all(),
            Message::StopAnimation => {
                for entry in &mut self.charts {
                    entry.chart.stop_animation();
                }
            }
            Message::AnimationTick(now) => {
                for entry in &mut self.charts {
                    entry.chart.tick(now);
                }
            }
        }
        Task::none()
    }

    /// Frame ticks only while a chart animates
    pub fn subscription(&self) -> Subscription<Message> {
        let animating = self.charts.iter().map(|entry| entry.chart.is_animating());
        if subscription_logic::needs_animation_subscription(animating) {
            iced::window::frames().map(Message::AnimationTick)
        } else {
            Subscription::none()
        }
    }

    fn play_all(&mut self) {
        for entry in &mut self.charts {
            entry.chart.play_animation();
        }
    }
}

/// Subscription decision logic for testability
pub mod subscription_logic {
    pub fn needs_animation_subscription(mut animating: impl Iterator<Item = bool>) -> bool {
        animating.any(|running| running)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use iced::time::{Duration, Instant};
    use ringchart::features::GalleryChart;
    use ringchart::features::settings::NodeStyle;
    use ringchart::features::ring_chart::ChartStyle;

    fn app() -> App {
        let charts = build_gallery(&GallerySettings::default(), &DesktopContext).unwrap();
        App { charts }
    }

    #[test]
    fn test_default_gallery_builds() {
        let app = app();
        assert_eq!(app.charts.len(), 4);
        let segments = &app.charts[2].chart;
        assert!(segments.config().multi_progress);
        assert_eq!(segments.max_value(), 90.0);
    }

    #[test]
    fn test_invalid_style_names_the_chart() {
        let settings = GallerySettings {
            charts: vec![GalleryChart {
                title: "Broken".to_string(),
                style: ChartStyle {
                    paint_width: 0.0,
                    ..Default::default()
                },
                nodes: Vec::new(),
            }],
        };
        let error = build_gallery(&settings, &DesktopContext).unwrap_err();
        assert!(format!("{:#}", error).contains("Broken"));
    }

    #[test]
    fn test_negative_segment_names_the_chart() {
        let settings = GallerySettings {
            charts: vec![GalleryChart {
                title: "Overdrawn".to_string(),
                style: ChartStyle {
                    multi_progress: true,
                    ..Default::default()
                },
                nodes: vec![NodeStyle {
                    value: -50.0,
                    color: iced::Color::BLACK,
                }],
            }],
        };
        let error = build_gallery(&settings, &DesktopContext).unwrap_err();
        assert!(format!("{:#}", error).contains("Overdrawn"));
    }

    #[test]
    fn test_play_stop_and_tick() {
        let mut app = app();
        let _ = app.update(Message::PlayAnimation);
        assert!(app.charts.iter().all(|entry| entry.chart.is_animating()));

        let _ = app.update(Message::StopAnimation);
        assert!(app.charts.iter().all(|entry| !entry.chart.is_animating()));

        let _ = app.update(Message::PlayAnimation);
        let _ = app.update(Message::AnimationTick(
            Instant::now() + Duration::from_secs(10),
        ));
        assert!(app.charts.iter().all(|entry| entry.chart.phase() == 1.0));
    }

    #[test]
    fn test_subscription_decision() {
        use subscription_logic::needs_animation_subscription;

        assert!(!needs_animation_subscription([false, false].into_iter()));
        assert!(needs_animation_subscription([false, true].into_iter()));
        assert!(!needs_animation_subscription(std::iter::empty()));
    }
}

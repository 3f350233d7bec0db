//! View rendering

use iced::widget::{button, column, row, scrollable, text};
use iced::{Alignment, Element, Length};

use ringchart::features::ring_chart::Constraint;

use super::{App, GalleryEntry, Message};

/// Width every chart is laid out at
const CHART_WIDTH: f32 = 280.0;
/// Tallest a chart may grow
const CHART_MAX_HEIGHT: f32 = 320.0;

impl App {
    /// Build the gallery view
    pub fn view(&self) -> Element<'_, Message> {
        let controls = row![
            button(text("Play")).on_press(Message::PlayAnimation),
            button(text("Stop")).on_press(Message::StopAnimation),
        ]
        .spacing(12);

        let charts = self
            .charts
            .iter()
            .fold(column![].spacing(32), |col, entry| col.push(view_entry(entry)));

        scrollable(
            column![controls, charts]
                .spacing(24)
                .padding(24)
                .width(Length::Fill)
                .align_x(Alignment::Center),
        )
        .into()
    }
}

fn view_entry(entry: &GalleryEntry) -> Element<'_, Message> {
    let size = entry.chart.measure(
        Constraint::Exactly(CHART_WIDTH),
        Constraint::AtMost(CHART_MAX_HEIGHT),
    );

    column![text(&entry.title).size(18), entry.chart.view(size)]
        .spacing(8)
        .align_x(Alignment::Center)
        .into()
}

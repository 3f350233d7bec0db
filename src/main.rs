//! Ring chart gallery - demo application for the ring chart widget

mod app;

fn main() -> iced::Result {
    // Initialize tracing for logging
    tracing_subscriber::fmt::init();

    iced::application(app::App::new, app::App::update, app::App::view)
        .title(app::App::title)
        .subscription(app::App::subscription)
        .window_size(iced::Size::new(480.0, 900.0))
        .antialiasing(true)
        .run()
}

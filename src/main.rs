//! Application entry point.

use gpui::{
    App, AppContext, Application, Bounds, TitlebarOptions, WindowBounds, WindowOptions, px, size,
};
use macroboard::app::Macroboard;
use macroboard::config::Config;
use macroboard::constants::{DEFAULT_WINDOW_SIZE, FOOTER_HEIGHT, HEADER_HEIGHT, PALETTE_WIDTH};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let config = Config::load();
    let window_size = size(
        px(DEFAULT_WINDOW_SIZE.0.max(PALETTE_WIDTH + config.surface_min_size.0)),
        px(DEFAULT_WINDOW_SIZE
            .1
            .max(HEADER_HEIGHT + FOOTER_HEIGHT + config.surface_min_size.1)),
    );

    Application::new().run(move |cx: &mut App| {
        let bounds = Bounds::centered(None, window_size, cx);
        cx.open_window(
            WindowOptions {
                window_bounds: Some(WindowBounds::Windowed(bounds)),
                titlebar: Some(TitlebarOptions {
                    title: Some("Macroboard".into()),
                    ..Default::default()
                }),
                ..Default::default()
            },
            |_window, cx| cx.new(Macroboard::new),
        )
        .unwrap();
        cx.activate(true);
    });
}

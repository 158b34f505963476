use dioxus::prelude::*;

const WINDOW_TITLE: &str = "Quantum Markets";

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");

    #[cfg(feature = "desktop")]
    {
        use dioxus::desktop::{Config, LogicalSize, WindowBuilder};

        let window = WindowBuilder::new()
            .with_title(WINDOW_TITLE)
            .with_inner_size(LogicalSize::new(1280.0, 860.0));

        dioxus::LaunchBuilder::desktop()
            .with_cfg(Config::new().with_window(window))
            .launch(App);
    }

    #[cfg(not(feature = "desktop"))]
    {
        dioxus_logger::tracing::info!("{} starting without the desktop feature", WINDOW_TITLE);
        dioxus::launch(App);
    }
}

#[component]
fn App() -> Element {
    ui::App()
}

use dioxus::prelude::*;

fn main() {
    #[cfg(target_arch = "wasm32")]
    console_error_panic_hook::set_once();

    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");

    if let Err(e) = ui::compat::require_mount_point(ui::MOUNT_POINT_ID) {
        panic!("cannot start dashboard: {e}");
    }

    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    ui::App()
}

use dioxus::prelude::*;

/// Blurred colour blobs drifting behind the content.
#[component]
pub fn BackgroundBlobs() -> Element {
    rsx! {
        div { class: "blob blob-cyan" }
        div { class: "blob blob-fuchsia animation-delay-2000" }
        div { class: "blob blob-emerald animation-delay-4000" }
    }
}

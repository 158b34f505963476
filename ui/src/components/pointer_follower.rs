use dioxus::prelude::*;
use market::pointer::PointerPosition;

/// Gradient disc centred on the last pointer position.
///
/// Purely decorative: it ignores pointer events and writes no state.
#[component]
pub fn PointerFollower(position: Signal<PointerPosition>, size: f64) -> Element {
    let transform = position.read().follower_transform(size);

    rsx! {
        div {
            class: "pointer-follower",
            style: "width: {size}px; height: {size}px; transform: {transform}; transition: transform 0.1s linear;",
        }
    }
}

// The client-side Dioxus application logic.

use dioxus::prelude::*;

pub mod compat;
mod components;
pub mod hooks;
mod theme;

use components::alert_modal::AlertModal;
use components::background::BackgroundBlobs;
use components::pointer_follower::PointerFollower;
use components::trading_card::TradingCard;
use hooks::use_price_feed::use_price_feed;
use market::modal::ModalVisibility;
use market::pointer::PointerPosition;
use market::prefs::dashboard_prefs::DashboardPrefs;
use market::trading_pair::seed_pairs;

/// Id of the document element the web build mounts into.
pub const MOUNT_POINT_ID: &str = "main";

const FONT_URL: &str =
    "https://fonts.googleapis.com/css2?family=Montserrat:wght@400;600;700&display=swap";

//=============================================================================
// MAIN APPLICATION COMPONENT
//=============================================================================

#[allow(non_snake_case)]
pub fn App() -> Element {
    let dashboard_css = theme::DASHBOARD_CSS;

    rsx! {
        document::Meta {
            name: "viewport",
            content: "width=device-width, initial-scale=1.0",
        }
        document::Title { "Quantum Markets" }
        document::Link { rel: "stylesheet", href: "{FONT_URL}" }
        style {
            "{dashboard_css}"
        }
        Dashboard {}
    }
}

/// Root view: owns the pair list, the modal state and the pointer position.
///
/// The price ticker and the pointer handler both live exactly as long as this
/// component.
#[component]
fn Dashboard() -> Element {
    let prefs = use_context_provider(DashboardPrefs::default);

    let pairs = use_signal(seed_pairs);
    let mut modal = use_signal(ModalVisibility::default);
    let mut pointer = use_signal(PointerPosition::default);

    use_price_feed(pairs, prefs.update_interval, prefs.fluctuation_rate);

    rsx! {
        div {
            class: "dashboard",
            onmousemove: move |evt| {
                let point = evt.client_coordinates();
                pointer.set(PointerPosition::new(point.x, point.y));
            },

            BackgroundBlobs {}
            PointerFollower {
                position: pointer,
                size: prefs.follower_size,
            }

            div {
                class: "dashboard-content",
                header {
                    class: "dashboard-header",
                    h1 { class: "dashboard-title", "Quantum Markets" }
                    p { class: "dashboard-subtitle", "Real-time forex and precious metals data." }
                }
                div {
                    class: "pair-grid",
                    for pair in pairs() {
                        TradingCard {
                            key: "{pair.name}",
                            pair: pair.clone(),
                            on_add_alert: move |selected| modal.write().open(selected),
                        }
                    }
                }
            }

            match modal() {
                ModalVisibility::Open(pair) => rsx! {
                    AlertModal {
                        key: "{pair.name}",
                        pair: pair.clone(),
                        on_close: move |_| modal.write().close(),
                    }
                },
                ModalVisibility::Closed => rsx! {},
            }
        }
    }
}


#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;
    use crate::testing::{fire_mouse, html, listeners, mount, pump};
    use std::cell::Cell;
    use std::time::Duration;

    thread_local! {
        static SHOW_DASHBOARD: Cell<Option<Signal<bool>>> = const { Cell::new(None) };
    }

    fn dashboard_host() -> Element {
        let show = use_signal(|| true);
        SHOW_DASHBOARD.with(|slot| slot.set(Some(show)));

        rsx! {
            if show() {
                Dashboard {}
            }
        }
    }

    fn set_dashboard_shown(dom: &VirtualDom, shown: bool) {
        let mut show = SHOW_DASHBOARD.with(|slot| slot.get()).unwrap();
        dom.in_runtime(|| show.set(shown));
    }

    #[tokio::test(start_paused = true)]
    async fn follower_tracks_the_pointer_while_mounted() {
        let (mut dom, edits) = mount(dashboard_host);
        let surface = listeners(&edits, "mousemove")[0];

        assert!(html(&dom).contains("translate(-48px, -48px)"));

        fire_mouse(&dom, "mousemove", surface, 300.0, 120.0);
        pump(&mut dom, Duration::from_millis(100)).await;
        assert!(html(&dom).contains("translate(252px, 72px)"));

        fire_mouse(&dom, "mousemove", surface, 48.0, 48.0);
        pump(&mut dom, Duration::from_millis(100)).await;
        assert!(html(&dom).contains("translate(0px, 0px)"));
    }

    #[tokio::test(start_paused = true)]
    async fn pointer_state_goes_away_with_the_dashboard() {
        let (mut dom, edits) = mount(dashboard_host);
        let surface = listeners(&edits, "mousemove")[0];

        fire_mouse(&dom, "mousemove", surface, 300.0, 120.0);
        pump(&mut dom, Duration::from_millis(100)).await;
        assert!(html(&dom).contains("translate(252px, 72px)"));

        set_dashboard_shown(&dom, false);
        pump(&mut dom, Duration::from_millis(100)).await;
        let unmounted = html(&dom);
        assert!(!unmounted.contains("pointer-follower"));
        assert!(!unmounted.contains("dashboard"));

        // a fresh dashboard starts from the origin, nothing kept the old position alive
        set_dashboard_shown(&dom, true);
        pump(&mut dom, Duration::from_millis(100)).await;
        let remounted = html(&dom);
        assert!(remounted.contains("translate(-48px, -48px)"));
        assert!(!remounted.contains("translate(252px, 72px)"));
    }

    #[tokio::test(start_paused = true)]
    async fn bell_opens_the_modal_for_that_pair() {
        let (mut dom, edits) = mount(dashboard_host);
        let bells = listeners(&edits, "click");
        assert_eq!(bells.len(), seed_pairs().len());

        fire_mouse(&dom, "click", bells[1], 10.0, 10.0);
        pump(&mut dom, Duration::from_millis(100)).await;

        let page = html(&dom);
        assert!(page.contains("modal-root"));
        assert!(page.contains("Set Alert for XAU/USD"));
    }

    #[tokio::test(start_paused = true)]
    async fn dashboard_renders_every_seed_pair() {
        let (dom, _) = mount(dashboard_host);
        let page = html(&dom);

        for pair in seed_pairs() {
            assert!(page.contains(&pair.name), "{}", pair.name);
        }
        assert!(!page.contains("modal-root"));
    }
}

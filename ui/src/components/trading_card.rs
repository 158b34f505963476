//=============================================================================
// File: src/components/trading_card.rs
//=============================================================================
use dioxus::prelude::*;
use market::trading_pair::TradingPair;

/// Glyph and colour class for the direction of the latest move.
fn trend(up: bool) -> (&'static str, &'static str) {
    if up {
        ("▲", "trend-up")
    } else {
        ("▼", "trend-down")
    }
}

/// One pair's quote, with a bell button that asks for an alert on it.
///
/// `on_add_alert` receives a copy of the pair as rendered, so later ticks do
/// not change what was handed over.
#[component]
pub fn TradingCard(pair: TradingPair, on_add_alert: EventHandler<TradingPair>) -> Element {
    let mut is_hovering_bell = use_signal(|| false);

    let (arrow, trend_class) = trend(pair.up);
    let name = pair.name.clone();
    let price = pair.price_display();
    let change = pair.change_display();

    rsx! {
        article {
            class: "trading-card",
            div {
                class: "trend-badge {trend_class}",
                "{arrow}"
            }
            div {
                class: "card-body",
                h2 { class: "pair-name", "{name}" }
                div {
                    class: "quote-row",
                    p { class: "quote-price", "{price}" }
                    p { class: "quote-change {trend_class}", "({change})" }
                }
            }
            div {
                class: "card-actions",
                div {
                    class: "bell-wrapper",
                    if is_hovering_bell() {
                        div { class: "bell-label", "Add Alert" }
                    }
                    button {
                        class: "bell-button",
                        "aria-label": "Set price alert",
                        onclick: move |_| on_add_alert.call(pair.clone()),
                        onmouseenter: move |_| is_hovering_bell.set(true),
                        onmouseleave: move |_| is_hovering_bell.set(false),
                        svg {
                            xmlns: "http://www.w3.org/2000/svg",
                            class: "bell-icon",
                            width: "24",
                            height: "24",
                            view_box: "0 0 24 24",
                            fill: "none",
                            stroke: "currentColor",
                            stroke_width: "2",
                            stroke_linecap: "round",
                            stroke_linejoin: "round",
                            path { d: "M18 8A6 6 0 006 8c0 7-3 9-3 9h18s-3-2-3-9" }
                            path { d: "M13.73 21a2 2 0 01-3.46 0" }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{fire_mouse, html, listeners, mount, pump, render};
    use market::trading_pair::seed_pairs;
    use std::time::Duration;

    fn rising_card() -> Element {
        rsx! {
            TradingCard { pair: seed_pairs()[0].clone(), on_add_alert: move |_| {} }
        }
    }

    fn falling_card() -> Element {
        rsx! {
            TradingCard { pair: seed_pairs()[1].clone(), on_add_alert: move |_| {} }
        }
    }

    #[test]
    fn rising_pair_shows_four_digit_quotes_and_up_glyph() {
        let html = render(rising_card);

        assert!(html.contains("EUR/USD"));
        assert!(html.contains("1.0750"));
        assert!(html.contains("(0.0015)"));
        assert!(html.contains("▲"));
        assert!(html.contains("trend-up"));
        assert!(!html.contains("trend-down"));
    }

    #[test]
    fn falling_pair_shows_magnitude_and_down_glyph() {
        let html = render(falling_card);

        assert!(html.contains("XAU/USD"));
        assert!(html.contains("2315.6500"));
        assert!(html.contains("(5.2000)"));
        assert!(!html.contains("-5.2000"));
        assert!(html.contains("▼"));
        assert!(html.contains("trend-down"));
    }

    #[test]
    fn hover_label_is_hidden_until_hovered() {
        let html = render(rising_card);
        assert!(!html.contains("Add Alert"));
    }

    #[tokio::test(start_paused = true)]
    async fn hovering_the_bell_shows_the_label_until_it_leaves() {
        let (mut dom, edits) = mount(rising_card);
        let bell = listeners(&edits, "mouseenter")[0];
        assert_eq!(listeners(&edits, "mouseleave"), vec![bell]);

        fire_mouse(&dom, "mouseenter", bell, 12.0, 12.0);
        pump(&mut dom, Duration::from_millis(50)).await;
        assert!(html(&dom).contains("Add Alert"));

        fire_mouse(&dom, "mouseleave", bell, 80.0, 80.0);
        pump(&mut dom, Duration::from_millis(50)).await;
        assert!(!html(&dom).contains("Add Alert"));
    }
}

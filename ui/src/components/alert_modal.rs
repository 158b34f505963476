//=============================================================================
// File: src/components/alert_modal.rs
//=============================================================================
use dioxus::prelude::*;
use dioxus_logger::tracing;
use market::alert::AlertDirection;
use market::alert::AlertDraft;
use market::alert::TracingAlertSink;
use market::alert::PRICE_STEP;
use market::trading_pair::TradingPair;
use strum::IntoEnumIterator;

/// Form for setting a price alert on `pair`.
///
/// The parent mounts a fresh instance per open and unmounts it when
/// `on_close` fires. A pointer press anywhere outside the panel closes it.
/// Presses inside the panel never do.
#[component]
pub fn AlertModal(pair: TradingPair, on_close: EventHandler<()>) -> Element {
    let mut draft = use_signal(|| AlertDraft::new(pair.clone()));

    let name = pair.name.clone();
    let current_price = pair.price_display();
    let target_text = draft.read().target_price.clone();
    let selected = draft.read().direction;

    let mut step = move |delta: f64| {
        if let Err(e) = draft.write().step(delta) {
            tracing::warn!("alert price not stepped: {}", e);
        }
    };

    let create_alert = move |_| {
        let submitted = draft();
        submitted.create(&mut TracingAlertSink, || on_close.call(()));
    };

    rsx! {
        div {
            class: "modal-root",
            onmousedown: move |_| on_close.call(()),
            div { class: "modal-backdrop" }
            div {
                class: "modal-panel",
                // presses inside the panel must not reach the close handler
                onmousedown: move |evt| evt.stop_propagation(),

                h3 { class: "modal-title", "Set Alert for {name}" }
                p {
                    class: "modal-current",
                    "Current Price: "
                    span { class: "modal-current-price", "{current_price}" }
                }

                div {
                    class: "modal-fields",
                    div {
                        label { r#for: "alert-price", class: "field-label", "Price" }
                        div {
                            class: "price-input-wrapper",
                            input {
                                r#type: "number",
                                id: "alert-price",
                                class: "price-input",
                                step: "0.01",
                                value: "{target_text}",
                                oninput: move |evt| draft.write().set_target_price(evt.value()),
                            }
                            div {
                                class: "stepper",
                                button {
                                    class: "stepper-button",
                                    "aria-label": "Increase alert price",
                                    onclick: move |_| step(PRICE_STEP),
                                    svg {
                                        xmlns: "http://www.w3.org/2000/svg",
                                        width: "12",
                                        height: "12",
                                        view_box: "0 0 24 24",
                                        fill: "none",
                                        stroke: "currentColor",
                                        stroke_width: "2",
                                        stroke_linecap: "round",
                                        stroke_linejoin: "round",
                                        path { d: "M12 5l-7 7 14 0z" }
                                    }
                                }
                                button {
                                    class: "stepper-button",
                                    "aria-label": "Decrease alert price",
                                    onclick: move |_| step(-PRICE_STEP),
                                    svg {
                                        xmlns: "http://www.w3.org/2000/svg",
                                        width: "12",
                                        height: "12",
                                        view_box: "0 0 24 24",
                                        fill: "none",
                                        stroke: "currentColor",
                                        stroke_width: "2",
                                        stroke_linecap: "round",
                                        stroke_linejoin: "round",
                                        path { d: "M12 19l-7-7 14 0z" }
                                    }
                                }
                            }
                        }
                    }

                    div {
                        class: "direction-row",
                        span { class: "field-label", "Trigger when price goes:" }
                        div {
                            class: "direction-options",
                            for direction in AlertDirection::iter() {
                                label {
                                    key: "{direction}",
                                    class: "direction-option",
                                    input {
                                        r#type: "radio",
                                        name: "direction",
                                        value: "{direction}",
                                        checked: selected == direction,
                                        onchange: move |_| draft.write().direction = direction,
                                    }
                                    span { {direction.label()} }
                                }
                            }
                        }
                    }
                }

                div {
                    class: "modal-actions",
                    button {
                        class: "modal-button cancel",
                        onclick: move |_| on_close.call(()),
                        "Cancel"
                    }
                    button {
                        class: "modal-button create",
                        onclick: create_alert,
                        "Create Alert"
                    }
                }
            }
        }
    }
}

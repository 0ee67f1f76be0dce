use dioxus::prelude::*;
use types::OrderStatus;

/// Moves an order along its lifecycle. Only the transitions allowed from the
/// current status are offered; final statuses render as a plain badge.
#[component]
pub fn OrderStatusControl(
    status: OrderStatus,
    is_loading: bool,
    on_change: EventHandler<OrderStatus>,
) -> Element {
    let next = status.next();

    rsx! {
        div { class: "order-status-control",
            span { class: "badge badge-status badge-{status.as_str()}", "{status.label()}" }
            if !status.is_final() {
                div { class: "order-status-actions",
                    for target in next.iter().copied() {
                        button {
                            key: "{target.as_str()}",
                            r#type: "button",
                            class: if target == OrderStatus::Cancelled { "btn btn-sm btn-danger" } else { "btn btn-sm btn-secondary" },
                            disabled: is_loading,
                            onclick: move |_| {
                                if !is_loading {
                                    on_change.call(target);
                                }
                            },
                            "Mark {target.label()}"
                        }
                    }
                }
            }
        }
    }
}

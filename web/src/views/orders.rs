use dioxus::prelude::*;
use types::{OrderStatus, ResourceKind, format_money};
use ui::{OrderStatusControl, PageShell, render_query, use_error, use_query, use_query_client};

use super::{format_date, use_currency};
use crate::Route;

#[component]
pub fn Orders() -> Element {
    rsx! {
        PageShell {
            title: "Orders",
            subtitle: "Orders placed across every shop.",
            OrderList {}
        }
    }
}

#[component]
fn StatusBadge(status: OrderStatus) -> Element {
    rsx! {
        span { class: "badge badge-status badge-{status.as_str()}", "{status.label()}" }
    }
}

#[component]
fn OrderList() -> Element {
    let orders = use_query(ResourceKind::Order, api::list_orders);
    let currency = use_currency();
    let currency = currency();

    rsx! {
        {render_query(&orders.read(), ResourceKind::Order, |orders| rsx! {
            div { class: "card",
                div { class: "table-container",
                    table {
                        thead {
                            tr {
                                th { "Order" }
                                th { "Customer" }
                                th { "Placed" }
                                th { "Total" }
                                th { "Status" }
                            }
                        }
                        tbody {
                            for order in orders.iter() {
                                {
                                    let id = order.id.clone();
                                    rsx! {
                                        tr { key: "{order.id}",
                                            onclick: move |_| {
                                                navigator().push(Route::OrderDetail { id: id.clone() });
                                            },
                                            td { class: "text-mono", "#{order.number}" }
                                            td { "{order.customer_email}" }
                                            td { "{format_date(order.created_at)}" }
                                            td { "{format_money(order.total, &currency)}" }
                                            td { StatusBadge { status: order.status } }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        })}
    }
}

#[component]
pub fn OrderView(id: ReadSignal<String>) -> Element {
    let mut error_state = use_error();
    let mut queries = use_query_client();
    let order = use_query(ResourceKind::Order, move || api::get_order(id()));
    let currency = use_currency();
    let mut updating = use_signal(|| false);

    let change_status = move |status: OrderStatus| {
        spawn(async move {
            updating.set(true);
            match api::update_order_status(id(), status).await {
                Ok(order) => {
                    tracing::debug!(order = %order.number, status = status.as_str(), "order status changed");
                    queries.invalidate(ResourceKind::Order);
                }
                Err(e) => error_state.set_server_error(&e),
            }
            updating.set(false);
        });
    };

    let title = order
        .read()
        .data()
        .map_or_else(|| "Order".to_string(), |o| format!("Order #{}", o.number));
    let currency = currency();

    rsx! {
        PageShell {
            title,
            {render_query(&order.read(), ResourceKind::Order, |order| rsx! {
                div { class: "grid grid-cols-3",
                    div { class: "card order-lines",
                        div { class: "card-header",
                            h2 { class: "card-title", "Items" }
                        }
                        div { class: "table-container",
                            table {
                                thead {
                                    tr {
                                        th { "Product" }
                                        th { "Quantity" }
                                        th { "Unit price" }
                                        th { "Subtotal" }
                                    }
                                }
                                tbody {
                                    for (i, line) in order.lines.iter().enumerate() {
                                        tr { key: "{i}",
                                            td {
                                                Link { to: Route::ProductDetail { id: line.product_id.clone() }, "{line.name}" }
                                            }
                                            td { "{line.quantity}" }
                                            td { "{format_money(line.unit_price, &currency)}" }
                                            td { "{format_money(line.subtotal(), &currency)}" }
                                        }
                                    }
                                }
                            }
                        }
                        div { class: "order-total",
                            span { "Total" }
                            strong { "{format_money(order.total, &currency)}" }
                        }
                    }
                    div { class: "card",
                        div { class: "card-header",
                            h2 { class: "card-title", "Summary" }
                        }
                        div { class: "card-body",
                            div { class: "form-group",
                                span { class: "form-label", "Customer" }
                                div { class: "form-value", "{order.customer_email}" }
                            }
                            div { class: "form-group",
                                span { class: "form-label", "Placed" }
                                div { class: "form-value", "{format_date(order.created_at)}" }
                            }
                            div { class: "divider" }
                            h3 { class: "section-header", "Status" }
                            OrderStatusControl {
                                status: order.status,
                                is_loading: updating(),
                                on_change: change_status,
                            }
                        }
                    }
                }
            })}
        }
    }
}

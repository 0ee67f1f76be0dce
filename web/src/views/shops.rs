use dioxus::prelude::*;
use types::{DialogMode, ResourceKind, Shop, ShopInput, format_money};
use ui::{
    ConfirmDelete, Modal, PageShell, ShopForm, render_query, use_error, use_query,
    use_query_client,
};

use super::{dialog_title, use_currency};
use crate::Route;

#[component]
pub fn Shops() -> Element {
    let mut dialog = use_signal(DialogMode::<Shop>::default);

    rsx! {
        PageShell {
            title: "Shops",
            subtitle: "Vendor storefronts on the marketplace.",
            action_label: "Add shop",
            on_action: move |_| dialog.set(DialogMode::Add),
            ShopList { dialog }
        }
    }
}

#[component]
fn ShopList(mut dialog: Signal<DialogMode<Shop>>) -> Element {
    let mut error_state = use_error();
    let mut queries = use_query_client();
    let shops = use_query(ResourceKind::Shop, api::list_shops);
    let mut to_delete = use_signal(|| None::<Shop>);
    let mut deleting = use_signal(|| false);

    let confirm_delete = move |_: ()| {
        let Some(shop) = to_delete() else {
            return;
        };
        spawn(async move {
            deleting.set(true);
            match api::delete_shop(shop.id).await {
                Ok(()) => queries.invalidate(ResourceKind::Shop),
                Err(e) => error_state.set_server_error(&e),
            }
            deleting.set(false);
            to_delete.set(None);
        });
    };

    rsx! {
        {render_query(&shops.read(), ResourceKind::Shop, move |shops| rsx! {
            div { class: "card",
                div { class: "table-container",
                    table {
                        thead {
                            tr {
                                th { "Shop" }
                                th { "Owner" }
                                th { "Status" }
                                th {}
                            }
                        }
                        tbody {
                            for shop in shops.iter() {
                                {
                                    let slug = shop.slug.clone();
                                    let edit = shop.clone();
                                    let remove = shop.clone();
                                    rsx! {
                                        tr { key: "{shop.id}",
                                            td {
                                                Link { to: Route::ShopDetail { slug }, "{shop.name}" }
                                            }
                                            td { "{shop.owner_email}" }
                                            td { ShopStatus { active: shop.active } }
                                            td { class: "table-actions",
                                                button {
                                                    class: "btn btn-sm btn-secondary",
                                                    onclick: move |_| dialog.set(DialogMode::Edit(edit.clone())),
                                                    "Edit"
                                                }
                                                button {
                                                    class: "btn btn-sm btn-danger",
                                                    onclick: move |_| to_delete.set(Some(remove.clone())),
                                                    "Delete"
                                                }
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        })}

        ShopDialog { dialog }

        if let Some(shop) = to_delete() {
            ConfirmDelete {
                kind: "shop",
                name: shop.name,
                deleting: deleting(),
                on_close: move |_| to_delete.set(None),
                on_confirm: confirm_delete,
            }
        }
    }
}

#[component]
fn ShopStatus(active: bool) -> Element {
    rsx! {
        if active {
            span { class: "badge badge-success", "Active" }
        } else {
            span { class: "badge badge-muted", "Suspended" }
        }
    }
}

/// `on_saved` receives the stored shop, e.g. to follow a slug change.
#[component]
fn ShopDialog(
    mut dialog: Signal<DialogMode<Shop>>,
    on_saved: Option<EventHandler<Shop>>,
) -> Element {
    let mut error_state = use_error();
    let mut queries = use_query_client();
    let mut saving = use_signal(|| false);

    let save = move |input: ShopInput| {
        let editing = dialog.peek().editing().map(|s| s.id.clone());
        spawn(async move {
            saving.set(true);
            let result = match editing {
                Some(id) => api::update_shop(id, input).await,
                None => api::create_shop(input).await,
            };
            match result {
                Ok(shop) => {
                    dialog.set(DialogMode::Closed);
                    queries.invalidate(ResourceKind::Shop);
                    if let Some(handler) = on_saved {
                        handler.call(shop);
                    }
                }
                Err(e) => error_state.set_server_error(&e),
            }
            saving.set(false);
        });
    };

    let mode = dialog.read().clone();
    if !mode.is_open() {
        return rsx! {};
    }

    rsx! {
        Modal {
            title: dialog_title(&mode, "shop"),
            busy: saving(),
            on_close: move |_| dialog.set(DialogMode::Closed),
            ShopForm {
                key: "{mode.form_key()}",
                data: mode.editing().cloned(),
                is_loading: saving(),
                on_submit: save,
                on_cancel: move |_| dialog.set(DialogMode::Closed),
            }
        }
    }
}

/// A single shop, looked up by the slug in the route.
#[component]
pub fn ShopView(slug: ReadSignal<String>) -> Element {
    let mut dialog = use_signal(DialogMode::<Shop>::default);
    let shop = use_query(ResourceKind::Shop, move || api::get_shop(slug()));

    let title = shop
        .read()
        .data()
        .map_or_else(|| "Shop".to_string(), |s| s.name.clone());
    let current = shop.read().data().cloned();

    rsx! {
        PageShell {
            title,
            subtitle: "/shops/{slug}",
            action_label: "Edit shop",
            on_action: move |_| {
                if let Some(shop) = current.clone() {
                    dialog.set(DialogMode::Edit(shop));
                }
            },
            {render_query(&shop.read(), ResourceKind::Shop, |shop| rsx! {
                div { class: "grid grid-cols-3",
                    div { class: "card",
                        div { class: "card-header",
                            h2 { class: "card-title", "Details" }
                        }
                        div { class: "card-body",
                            div { class: "form-group",
                                span { class: "form-label", "Owner" }
                                div { class: "form-value", "{shop.owner_email}" }
                            }
                            div { class: "form-group",
                                span { class: "form-label", "Status" }
                                div { class: "form-value", ShopStatus { active: shop.active } }
                            }
                            if let Some(description) = &shop.description {
                                div { class: "form-group",
                                    span { class: "form-label", "Description" }
                                    div { class: "form-value", "{description}" }
                                }
                            }
                        }
                    }
                    ShopProducts { shop_id: shop.id.clone() }
                }
            })}
            ShopDialog {
                dialog,
                on_saved: move |shop: Shop| {
                    if shop.slug != *slug.peek() {
                        navigator().replace(Route::ShopDetail { slug: shop.slug });
                    }
                },
            }
        }
    }
}

#[component]
fn ShopProducts(shop_id: ReadSignal<String>) -> Element {
    let products = use_query(ResourceKind::Product, move || api::list_shop_products(shop_id()));
    let currency = use_currency();
    let currency = currency();

    rsx! {
        div { class: "card",
            div { class: "card-header",
                h2 { class: "card-title", "Products" }
            }
            {render_query(&products.read(), ResourceKind::Product, |products| rsx! {
                ul { class: "item-list",
                    for product in products.iter() {
                        li { key: "{product.id}",
                            Link { to: Route::ProductDetail { id: product.id.clone() }, "{product.name}" }
                            span { class: "text-muted", " {format_money(product.price, &currency)}" }
                        }
                    }
                }
            })}
        }
    }
}

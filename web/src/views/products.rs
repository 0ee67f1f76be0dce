use dioxus::prelude::*;
use types::{DialogMode, Product, ProductInput, ResourceKind, format_money};
use ui::{
    ConfirmDelete, Modal, PageShell, ProductForm, render_query, use_error, use_query,
    use_query_client,
};

use super::{dialog_title, use_currency};
use crate::Route;

#[component]
pub fn Products() -> Element {
    let mut dialog = use_signal(DialogMode::<Product>::default);

    rsx! {
        PageShell {
            title: "Products",
            subtitle: "Everything listed across all shops.",
            action_label: "Add product",
            on_action: move |_| dialog.set(DialogMode::Add),
            ProductList { dialog }
        }
    }
}

#[component]
fn ProductList(mut dialog: Signal<DialogMode<Product>>) -> Element {
    let mut error_state = use_error();
    let mut queries = use_query_client();
    let products = use_query(ResourceKind::Product, api::list_products);
    let shops = use_query(ResourceKind::Shop, api::list_shops);
    let currency = use_currency();
    let mut to_delete = use_signal(|| None::<Product>);
    let mut deleting = use_signal(|| false);

    let confirm_delete = move |_: ()| {
        let Some(product) = to_delete() else {
            return;
        };
        spawn(async move {
            deleting.set(true);
            match api::delete_product(product.id).await {
                Ok(()) => queries.invalidate(ResourceKind::Product),
                Err(e) => error_state.set_server_error(&e),
            }
            deleting.set(false);
            to_delete.set(None);
        });
    };

    let currency = currency();
    let shops = shops.read().data().cloned().unwrap_or_default();

    rsx! {
        {render_query(&products.read(), ResourceKind::Product, move |products| rsx! {
            div { class: "card",
                div { class: "table-container",
                    table {
                        thead {
                            tr {
                                th { "Name" }
                                th { "Shop" }
                                th { "Price" }
                                th { "Stock" }
                                th { "Status" }
                                th {}
                            }
                        }
                        tbody {
                            for product in products.iter() {
                                {
                                    let shop = product
                                        .shop_id
                                        .as_deref()
                                        .and_then(|id| shops.iter().find(|s| s.id == id))
                                        .map(|s| s.name.clone())
                                        .unwrap_or_default();
                                    let price = format_money(product.price, &currency);
                                    let id = product.id.clone();
                                    let edit = product.clone();
                                    let remove = product.clone();
                                    rsx! {
                                        tr { key: "{product.id}",
                                            td {
                                                Link { to: Route::ProductDetail { id }, "{product.name}" }
                                            }
                                            td { "{shop}" }
                                            td { "{price}" }
                                            td { "{product.stock}" }
                                            td { Published { published: product.published } }
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

        ProductDialog { dialog }

        if let Some(product) = to_delete() {
            ConfirmDelete {
                kind: "product",
                name: product.name,
                deleting: deleting(),
                on_close: move |_| to_delete.set(None),
                on_confirm: confirm_delete,
            }
        }
    }
}

#[component]
fn Published(published: bool) -> Element {
    rsx! {
        if published {
            span { class: "badge badge-success", "Published" }
        } else {
            span { class: "badge badge-muted", "Draft" }
        }
    }
}

/// The select options are fetched here, through the same query layer as the
/// lists, so they refresh when a brand, category or shop changes.
#[component]
fn ProductDialog(mut dialog: Signal<DialogMode<Product>>) -> Element {
    let mut error_state = use_error();
    let mut queries = use_query_client();
    let brands = use_query(ResourceKind::Brand, api::list_brands);
    let categories = use_query(ResourceKind::Category, api::list_categories);
    let shops = use_query(ResourceKind::Shop, api::list_shops);
    let mut saving = use_signal(|| false);

    let save = move |input: ProductInput| {
        let editing = dialog.peek().editing().map(|p| p.id.clone());
        spawn(async move {
            saving.set(true);
            let result = match editing {
                Some(id) => api::update_product(id, input).await,
                None => api::create_product(input).await,
            };
            match result {
                Ok(_) => {
                    dialog.set(DialogMode::Closed);
                    queries.invalidate(ResourceKind::Product);
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
            title: dialog_title(&mode, "product"),
            busy: saving(),
            on_close: move |_| dialog.set(DialogMode::Closed),
            ProductForm {
                key: "{mode.form_key()}",
                data: mode.editing().cloned(),
                brands: brands.read().data().cloned().unwrap_or_default(),
                categories: categories.read().data().cloned().unwrap_or_default(),
                shops: shops.read().data().cloned().unwrap_or_default(),
                is_loading: saving(),
                on_submit: save,
                on_cancel: move |_| dialog.set(DialogMode::Closed),
            }
        }
    }
}

#[component]
pub fn ProductView(id: ReadSignal<String>) -> Element {
    let mut dialog = use_signal(DialogMode::<Product>::default);
    let mut error_state = use_error();
    let product = use_query(ResourceKind::Product, move || api::get_product(id()));
    let brands = use_query(ResourceKind::Brand, api::list_brands);
    let categories = use_query(ResourceKind::Category, api::list_categories);
    let currency = use_currency();
    let mut confirm = use_signal(|| false);
    let mut deleting = use_signal(|| false);

    let delete = move |_: ()| {
        spawn(async move {
            deleting.set(true);
            match api::delete_product(id()).await {
                // The list fetches on mount. Invalidating here would refetch
                // the record just deleted.
                Ok(()) => {
                    navigator().replace(Route::Products {});
                }
                Err(e) => error_state.set_server_error(&e),
            }
            deleting.set(false);
            confirm.set(false);
        });
    };

    let current = product.read().data().cloned();
    let title = current
        .as_ref()
        .map_or_else(|| "Product".to_string(), |p| p.name.clone());
    let brand_name = move |brand_id: &str| {
        brands
            .read()
            .data()
            .and_then(|all| all.iter().find(|b| b.id == brand_id).map(|b| b.name.clone()))
            .unwrap_or_else(|| brand_id.to_string())
    };
    let category_name = move |category_id: &str| {
        categories
            .read()
            .data()
            .and_then(|all| all.iter().find(|c| c.id == category_id).map(|c| c.name.clone()))
            .unwrap_or_else(|| category_id.to_string())
    };
    let currency = currency();

    rsx! {
        PageShell {
            title: title.clone(),
            action_label: "Edit product",
            on_action: move |_| {
                if let Some(product) = current.clone() {
                    dialog.set(DialogMode::Edit(product));
                }
            },
            {render_query(&product.read(), ResourceKind::Product, |product| {
                let price = format_money(product.price, &currency);
                let brand = product.brand_id.as_deref().map_or_else(|| "None".to_string(), brand_name);
                let category = product
                    .category_id
                    .as_deref()
                    .map_or_else(|| "Uncategorised".to_string(), category_name);
                rsx! {
                    div { class: "card",
                        div { class: "card-body",
                            div { class: "form-group",
                                span { class: "form-label", "Slug" }
                                div { class: "form-value form-value-mono", "{product.slug}" }
                            }
                            div { class: "form-group",
                                span { class: "form-label", "Price" }
                                div { class: "form-value", "{price}" }
                            }
                            div { class: "form-group",
                                span { class: "form-label", "Stock" }
                                div { class: "form-value", "{product.stock}" }
                            }
                            div { class: "form-group",
                                span { class: "form-label", "Brand" }
                                div { class: "form-value", "{brand}" }
                            }
                            div { class: "form-group",
                                span { class: "form-label", "Category" }
                                div { class: "form-value", "{category}" }
                            }
                            div { class: "form-group",
                                span { class: "form-label", "Status" }
                                div { class: "form-value", Published { published: product.published } }
                            }

                            div { class: "divider" }

                            h3 { class: "section-header section-header-danger", "Danger Zone" }
                            button {
                                class: "btn btn-danger",
                                onclick: move |_| confirm.set(true),
                                "Delete product"
                            }
                        }
                    }
                }
            })}
            ProductDialog { dialog }
            if confirm() {
                ConfirmDelete {
                    kind: "product",
                    name: title.clone(),
                    deleting: deleting(),
                    on_close: move |_| confirm.set(false),
                    on_confirm: delete,
                }
            }
        }
    }
}

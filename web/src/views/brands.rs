use dioxus::prelude::*;
use types::{Brand, BrandInput, DialogMode, ResourceKind};
use ui::{
    BrandForm, ConfirmDelete, Modal, PageShell, render_query, use_error, use_query,
    use_query_client,
};

use super::dialog_title;

#[component]
pub fn Brands() -> Element {
    let mut dialog = use_signal(DialogMode::<Brand>::default);

    rsx! {
        PageShell {
            title: "Brands",
            subtitle: "Labels that products can be filed under.",
            action_label: "Add brand",
            on_action: move |_| dialog.set(DialogMode::Add),
            BrandList { dialog }
        }
    }
}

#[component]
fn BrandList(mut dialog: Signal<DialogMode<Brand>>) -> Element {
    let mut error_state = use_error();
    let mut queries = use_query_client();
    let brands = use_query(ResourceKind::Brand, api::list_brands);
    let mut to_delete = use_signal(|| None::<Brand>);
    let mut deleting = use_signal(|| false);

    let confirm_delete = move |_: ()| {
        let Some(brand) = to_delete() else {
            return;
        };
        spawn(async move {
            deleting.set(true);
            match api::delete_brand(brand.id).await {
                Ok(()) => queries.invalidate(ResourceKind::Brand),
                Err(e) => error_state.set_server_error(&e),
            }
            deleting.set(false);
            to_delete.set(None);
        });
    };

    rsx! {
        {render_query(&brands.read(), ResourceKind::Brand, move |brands| rsx! {
            div { class: "card",
                div { class: "table-container",
                    table {
                        thead {
                            tr {
                                th { "Name" }
                                th { "Slug" }
                                th { "Logo" }
                                th {}
                            }
                        }
                        tbody {
                            for brand in brands.iter() {
                                {
                                    let edit = brand.clone();
                                    let remove = brand.clone();
                                    rsx! {
                                        tr { key: "{brand.id}",
                                            td { "{brand.name}" }
                                            td { class: "text-mono", "{brand.slug}" }
                                            td {
                                                if let Some(url) = &brand.logo_url {
                                                    img { class: "brand-logo", src: "{url}", alt: "{brand.name}" }
                                                } else {
                                                    span { class: "text-muted", "None" }
                                                }
                                            }
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

        BrandDialog { dialog }

        if let Some(brand) = to_delete() {
            ConfirmDelete {
                kind: "brand",
                name: brand.name,
                deleting: deleting(),
                on_close: move |_| to_delete.set(None),
                on_confirm: confirm_delete,
            }
        }
    }
}

#[component]
fn BrandDialog(mut dialog: Signal<DialogMode<Brand>>) -> Element {
    let mut error_state = use_error();
    let mut queries = use_query_client();
    let mut saving = use_signal(|| false);

    let save = move |input: BrandInput| {
        let editing = dialog.peek().editing().map(|b| b.id.clone());
        spawn(async move {
            saving.set(true);
            let result = match editing {
                Some(id) => api::update_brand(id, input).await,
                None => api::create_brand(input).await,
            };
            match result {
                Ok(_) => {
                    dialog.set(DialogMode::Closed);
                    queries.invalidate(ResourceKind::Brand);
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
            title: dialog_title(&mode, "brand"),
            busy: saving(),
            on_close: move |_| dialog.set(DialogMode::Closed),
            BrandForm {
                key: "{mode.form_key()}",
                data: mode.editing().cloned(),
                is_loading: saving(),
                on_submit: save,
                on_cancel: move |_| dialog.set(DialogMode::Closed),
            }
        }
    }
}

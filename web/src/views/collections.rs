use dioxus::prelude::*;
use types::{Collection, CollectionInput, DialogMode, ResourceKind};
use ui::{
    CollectionForm, ConfirmDelete, Modal, PageShell, render_query, use_error, use_query,
    use_query_client,
};

use super::dialog_title;

#[component]
pub fn Collections() -> Element {
    let mut dialog = use_signal(DialogMode::<Collection>::default);

    rsx! {
        PageShell {
            title: "Collections",
            subtitle: "Curated product groups for the storefront.",
            action_label: "Add collection",
            on_action: move |_| dialog.set(DialogMode::Add),
            CollectionList { dialog }
        }
    }
}

#[component]
fn CollectionList(mut dialog: Signal<DialogMode<Collection>>) -> Element {
    let mut error_state = use_error();
    let mut queries = use_query_client();
    let collections = use_query(ResourceKind::Collection, api::list_collections);
    let mut to_delete = use_signal(|| None::<Collection>);
    let mut deleting = use_signal(|| false);

    let confirm_delete = move |_: ()| {
        let Some(collection) = to_delete() else {
            return;
        };
        spawn(async move {
            deleting.set(true);
            match api::delete_collection(collection.id).await {
                Ok(()) => queries.invalidate(ResourceKind::Collection),
                Err(e) => error_state.set_server_error(&e),
            }
            deleting.set(false);
            to_delete.set(None);
        });
    };

    rsx! {
        {render_query(&collections.read(), ResourceKind::Collection, move |collections| rsx! {
            div { class: "card",
                div { class: "table-container",
                    table {
                        thead {
                            tr {
                                th { "Name" }
                                th { "Slug" }
                                th { "Products" }
                                th {}
                            }
                        }
                        tbody {
                            for collection in collections.iter() {
                                {
                                    let edit = collection.clone();
                                    let remove = collection.clone();
                                    rsx! {
                                        tr { key: "{collection.id}",
                                            td { "{collection.name}" }
                                            td { class: "text-mono", "{collection.slug}" }
                                            td { "{collection.product_count}" }
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

        CollectionDialog { dialog }

        if let Some(collection) = to_delete() {
            ConfirmDelete {
                kind: "collection",
                name: collection.name,
                deleting: deleting(),
                on_close: move |_| to_delete.set(None),
                on_confirm: confirm_delete,
            }
        }
    }
}

#[component]
fn CollectionDialog(mut dialog: Signal<DialogMode<Collection>>) -> Element {
    let mut error_state = use_error();
    let mut queries = use_query_client();
    let mut saving = use_signal(|| false);

    let save = move |input: CollectionInput| {
        let editing = dialog.peek().editing().map(|c| c.id.clone());
        spawn(async move {
            saving.set(true);
            let result = match editing {
                Some(id) => api::update_collection(id, input).await,
                None => api::create_collection(input).await,
            };
            match result {
                Ok(_) => {
                    dialog.set(DialogMode::Closed);
                    queries.invalidate(ResourceKind::Collection);
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
            title: dialog_title(&mode, "collection"),
            busy: saving(),
            on_close: move |_| dialog.set(DialogMode::Closed),
            CollectionForm {
                key: "{mode.form_key()}",
                data: mode.editing().cloned(),
                is_loading: saving(),
                on_submit: save,
                on_cancel: move |_| dialog.set(DialogMode::Closed),
            }
        }
    }
}

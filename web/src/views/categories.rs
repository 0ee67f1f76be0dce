use dioxus::prelude::*;
use types::{Category, CategoryInput, DialogMode, ResourceKind};
use ui::{
    CategoryForm, ConfirmDelete, Modal, PageShell, render_query, use_error, use_query,
    use_query_client,
};

use super::dialog_title;

#[component]
pub fn Categories() -> Element {
    let mut dialog = use_signal(DialogMode::<Category>::default);

    rsx! {
        PageShell {
            title: "Categories",
            subtitle: "The category tree customers browse by.",
            action_label: "Add category",
            on_action: move |_| dialog.set(DialogMode::Add),
            CategoryList { dialog }
        }
    }
}

fn parent_name(categories: &[Category], parent_id: Option<&str>) -> Option<String> {
    let parent_id = parent_id?;
    Some(
        categories
            .iter()
            .find(|c| c.id == parent_id)
            .map_or_else(|| parent_id.to_string(), |c| c.name.clone()),
    )
}

#[component]
fn CategoryList(mut dialog: Signal<DialogMode<Category>>) -> Element {
    let mut error_state = use_error();
    let mut queries = use_query_client();
    let categories = use_query(ResourceKind::Category, api::list_categories);
    let mut to_delete = use_signal(|| None::<Category>);
    let mut deleting = use_signal(|| false);

    let confirm_delete = move |_: ()| {
        let Some(category) = to_delete() else {
            return;
        };
        spawn(async move {
            deleting.set(true);
            match api::delete_category(category.id).await {
                Ok(()) => queries.invalidate(ResourceKind::Category),
                Err(e) => error_state.set_server_error(&e),
            }
            deleting.set(false);
            to_delete.set(None);
        });
    };

    let options = categories.read().data().cloned().unwrap_or_default();

    rsx! {
        {render_query(&categories.read(), ResourceKind::Category, move |categories| rsx! {
            div { class: "card",
                div { class: "table-container",
                    table {
                        thead {
                            tr {
                                th { "Name" }
                                th { "Slug" }
                                th { "Parent" }
                                th {}
                            }
                        }
                        tbody {
                            for category in categories.iter() {
                                {
                                    let parent = parent_name(categories, category.parent_id.as_deref());
                                    let edit = category.clone();
                                    let remove = category.clone();
                                    rsx! {
                                        tr { key: "{category.id}",
                                            td {
                                                div { "{category.name}" }
                                                if let Some(description) = &category.description {
                                                    div { class: "text-muted text-sm", "{description}" }
                                                }
                                            }
                                            td { class: "text-mono", "{category.slug}" }
                                            td {
                                                if let Some(parent) = parent {
                                                    "{parent}"
                                                } else {
                                                    span { class: "text-muted", "Top level" }
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

        CategoryDialog { dialog, categories: options }

        if let Some(category) = to_delete() {
            ConfirmDelete {
                kind: "category",
                name: category.name,
                deleting: deleting(),
                on_close: move |_| to_delete.set(None),
                on_confirm: confirm_delete,
            }
        }
    }
}

#[component]
fn CategoryDialog(mut dialog: Signal<DialogMode<Category>>, categories: Vec<Category>) -> Element {
    let mut error_state = use_error();
    let mut queries = use_query_client();
    let mut saving = use_signal(|| false);

    let save = move |input: CategoryInput| {
        let editing = dialog.peek().editing().map(|c| c.id.clone());
        spawn(async move {
            saving.set(true);
            let result = match editing {
                Some(id) => api::update_category(id, input).await,
                None => api::create_category(input).await,
            };
            match result {
                Ok(_) => {
                    dialog.set(DialogMode::Closed);
                    queries.invalidate(ResourceKind::Category);
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
            title: dialog_title(&mode, "category"),
            busy: saving(),
            on_close: move |_| dialog.set(DialogMode::Closed),
            CategoryForm {
                key: "{mode.form_key()}",
                data: mode.editing().cloned(),
                categories,
                is_loading: saving(),
                on_submit: save,
                on_cancel: move |_| dialog.set(DialogMode::Closed),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn category(id: &str, name: &str) -> Category {
        Category {
            id: id.into(),
            name: name.into(),
            slug: name.to_lowercase(),
            parent_id: None,
            description: None,
        }
    }

    #[test]
    fn parent_names_fall_back_to_the_id() {
        let all = [category("c1", "Home"), category("c2", "Kitchen")];
        assert_eq!(parent_name(&all, Some("c1")).as_deref(), Some("Home"));
        assert_eq!(parent_name(&all, Some("gone")).as_deref(), Some("gone"));
        assert_eq!(parent_name(&all, None), None);
    }
}

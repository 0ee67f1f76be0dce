use dioxus::prelude::*;
use types::{Category, CategoryInput, FieldErrors, slugify};

use super::{FormActions, FormField, field_error, optional_text, submit_label};

/// `categories` are the parent options; the edited category itself is left out.
#[component]
pub fn CategoryForm(
    #[props(!optional)] data: Option<Category>,
    #[props(default)] categories: Vec<Category>,
    is_loading: bool,
    on_submit: EventHandler<CategoryInput>,
    on_cancel: Option<EventHandler<()>>,
) -> Element {
    let editing_id = data.as_ref().map(|c| c.id.clone());
    let editing = editing_id.is_some();
    let mut input = use_signal(|| data.as_ref().map(CategoryInput::from).unwrap_or_default());
    let mut errors = use_signal(FieldErrors::new);

    let parents: Vec<Category> = categories
        .into_iter()
        .filter(|c| Some(&c.id) != editing_id.as_ref())
        .collect();
    let selected_parent = input.read().parent_id.clone().unwrap_or_default();

    rsx! {
        form {
            class: "resource-form",
            onsubmit: move |e: FormEvent| {
                e.prevent_default();
                if is_loading {
                    return;
                }
                let value = input.read().clone();
                match value.validate_for(editing_id.as_deref()) {
                    Ok(()) => {
                        errors.set(FieldErrors::new());
                        on_submit.call(value);
                    }
                    Err(found) => errors.set(found),
                }
            },
            FormField { id: "category-name", label: "Name", required: true, error: field_error(&errors, "name"),
                input {
                    id: "category-name",
                    class: "form-input",
                    r#type: "text",
                    placeholder: "e.g. Kitchen",
                    value: "{input.read().name}",
                    oninput: move |e| {
                        let name = e.value();
                        let mut input = input.write();
                        if !editing && (input.slug.is_empty() || input.slug == slugify(&input.name)) {
                            input.slug = slugify(&name);
                        }
                        input.name = name;
                    },
                }
            }
            FormField { id: "category-slug", label: "Slug", required: true, error: field_error(&errors, "slug"),
                input {
                    id: "category-slug",
                    class: "form-input form-input-mono",
                    r#type: "text",
                    value: "{input.read().slug}",
                    oninput: move |e| input.write().slug = e.value(),
                }
            }
            FormField { id: "category-parent", label: "Parent category", error: field_error(&errors, "parent_id"),
                select {
                    id: "category-parent",
                    class: "form-input",
                    value: "{selected_parent}",
                    onchange: move |e| input.write().parent_id = optional_text(e.value()),
                    option { value: "", "None (top level)" }
                    for parent in parents {
                        option {
                            key: "{parent.id}",
                            value: "{parent.id}",
                            selected: parent.id == selected_parent,
                            "{parent.name}"
                        }
                    }
                }
            }
            FormField { id: "category-description", label: "Description", error: field_error(&errors, "description"),
                textarea {
                    id: "category-description",
                    class: "form-input",
                    rows: "3",
                    value: "{input.read().description.clone().unwrap_or_default()}",
                    oninput: move |e| input.write().description = optional_text(e.value()),
                }
            }
            FormActions { is_loading, submit_label: submit_label(editing), on_cancel }
        }
    }
}

use dioxus::prelude::*;
use types::{Collection, CollectionInput, FieldErrors, Validate, slugify};

use super::{FormActions, FormField, field_error, optional_text, submit_label};

#[component]
pub fn CollectionForm(
    #[props(!optional)] data: Option<Collection>,
    is_loading: bool,
    on_submit: EventHandler<CollectionInput>,
    on_cancel: Option<EventHandler<()>>,
) -> Element {
    let editing = data.is_some();
    let mut input = use_signal(|| data.as_ref().map(CollectionInput::from).unwrap_or_default());
    let mut errors = use_signal(FieldErrors::new);

    rsx! {
        form {
            class: "resource-form",
            onsubmit: move |e: FormEvent| {
                e.prevent_default();
                if is_loading {
                    return;
                }
                let value = input.read().clone();
                match value.validate() {
                    Ok(()) => {
                        errors.set(FieldErrors::new());
                        on_submit.call(value);
                    }
                    Err(found) => errors.set(found),
                }
            },
            FormField { id: "collection-name", label: "Name", required: true, error: field_error(&errors, "name"),
                input {
                    id: "collection-name",
                    class: "form-input",
                    r#type: "text",
                    placeholder: "e.g. Summer picks",
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
            FormField { id: "collection-slug", label: "Slug", required: true, error: field_error(&errors, "slug"),
                input {
                    id: "collection-slug",
                    class: "form-input form-input-mono",
                    r#type: "text",
                    value: "{input.read().slug}",
                    oninput: move |e| input.write().slug = e.value(),
                }
            }
            FormField { id: "collection-description", label: "Description", error: field_error(&errors, "description"),
                textarea {
                    id: "collection-description",
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

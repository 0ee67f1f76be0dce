use dioxus::prelude::*;
use types::{Brand, BrandInput, FieldErrors, Validate, slugify};

use super::{FormActions, FormField, field_error, optional_text, submit_label};

#[component]
pub fn BrandForm(
    #[props(!optional)] data: Option<Brand>,
    is_loading: bool,
    on_submit: EventHandler<BrandInput>,
    on_cancel: Option<EventHandler<()>>,
) -> Element {
    let editing = data.is_some();
    let mut input = use_signal(|| data.as_ref().map(BrandInput::from).unwrap_or_default());
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
            FormField { id: "brand-name", label: "Name", required: true, error: field_error(&errors, "name"),
                input {
                    id: "brand-name",
                    class: "form-input",
                    r#type: "text",
                    placeholder: "e.g. Acme",
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
            FormField { id: "brand-slug", label: "Slug", required: true, error: field_error(&errors, "slug"),
                input {
                    id: "brand-slug",
                    class: "form-input form-input-mono",
                    r#type: "text",
                    value: "{input.read().slug}",
                    oninput: move |e| input.write().slug = e.value(),
                }
            }
            FormField { id: "brand-logo", label: "Logo URL", error: field_error(&errors, "logo_url"),
                input {
                    id: "brand-logo",
                    class: "form-input",
                    r#type: "url",
                    placeholder: "https://",
                    value: "{input.read().logo_url.clone().unwrap_or_default()}",
                    oninput: move |e| input.write().logo_url = optional_text(e.value()),
                }
            }
            FormActions { is_loading, submit_label: submit_label(editing), on_cancel }
        }
    }
}

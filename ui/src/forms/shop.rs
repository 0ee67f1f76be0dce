use dioxus::prelude::*;
use types::{FieldErrors, Shop, ShopInput, Validate, slugify};

use super::{FormActions, FormField, field_error, optional_text, submit_label};

#[component]
pub fn ShopForm(
    #[props(!optional)] data: Option<Shop>,
    is_loading: bool,
    on_submit: EventHandler<ShopInput>,
    on_cancel: Option<EventHandler<()>>,
) -> Element {
    let editing = data.is_some();
    let mut input = use_signal(|| {
        data.as_ref().map(ShopInput::from).unwrap_or(ShopInput {
            active: true,
            ..ShopInput::default()
        })
    });
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
            FormField { id: "shop-name", label: "Shop name", required: true, error: field_error(&errors, "name"),
                input {
                    id: "shop-name",
                    class: "form-input",
                    r#type: "text",
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
            FormField { id: "shop-slug", label: "Slug", required: true, error: field_error(&errors, "slug"),
                input {
                    id: "shop-slug",
                    class: "form-input form-input-mono",
                    r#type: "text",
                    value: "{input.read().slug}",
                    oninput: move |e| input.write().slug = e.value(),
                }
                if editing {
                    p { class: "form-help", "Changing the slug changes the shop's address." }
                }
            }
            FormField { id: "shop-owner", label: "Owner email", required: true, error: field_error(&errors, "owner_email"),
                input {
                    id: "shop-owner",
                    class: "form-input",
                    r#type: "email",
                    placeholder: "owner@example.com",
                    value: "{input.read().owner_email}",
                    oninput: move |e| input.write().owner_email = e.value().trim().to_string(),
                }
            }
            FormField { id: "shop-description", label: "Description", error: field_error(&errors, "description"),
                textarea {
                    id: "shop-description",
                    class: "form-input",
                    rows: "3",
                    value: "{input.read().description.clone().unwrap_or_default()}",
                    oninput: move |e| input.write().description = optional_text(e.value()),
                }
            }
            div { class: "form-group form-check",
                input {
                    id: "shop-active",
                    r#type: "checkbox",
                    checked: input.read().active,
                    onchange: move |e| input.write().active = e.checked(),
                }
                label { r#for: "shop-active", "Active" }
            }
            FormActions { is_loading, submit_label: submit_label(editing), on_cancel }
        }
    }
}

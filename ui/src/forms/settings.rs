use dioxus::prelude::*;
use types::{FieldErrors, Settings, Validate};

use super::{FormActions, FormField, field_error};

/// Settings are a singleton, so there is no create mode and no cancel.
#[component]
pub fn SettingsForm(
    #[props(!optional)] data: Option<Settings>,
    is_loading: bool,
    on_submit: EventHandler<Settings>,
) -> Element {
    let mut settings = use_signal(|| data.clone().unwrap_or_default());
    let mut errors = use_signal(FieldErrors::new);

    rsx! {
        form {
            class: "resource-form settings-form",
            onsubmit: move |e: FormEvent| {
                e.prevent_default();
                if is_loading {
                    return;
                }
                let value = settings.read().clone();
                match value.validate() {
                    Ok(()) => {
                        errors.set(FieldErrors::new());
                        on_submit.call(value);
                    }
                    Err(found) => errors.set(found),
                }
            },
            section { class: "form-section",
                h3 { class: "form-section-title", "Store" }
                FormField { id: "settings-name", label: "Store name", required: true, error: field_error(&errors, "store_name"),
                    input {
                        id: "settings-name",
                        class: "form-input",
                        r#type: "text",
                        value: "{settings.read().store_name}",
                        oninput: move |e| settings.write().store_name = e.value(),
                    }
                }
                FormField { id: "settings-email", label: "Support email", required: true, error: field_error(&errors, "support_email"),
                    input {
                        id: "settings-email",
                        class: "form-input",
                        r#type: "email",
                        value: "{settings.read().support_email}",
                        oninput: move |e| settings.write().support_email = e.value().trim().to_string(),
                    }
                }
                FormField { id: "settings-currency", label: "Currency", required: true, error: field_error(&errors, "currency"),
                    input {
                        id: "settings-currency",
                        class: "form-input form-input-mono",
                        r#type: "text",
                        maxlength: "3",
                        value: "{settings.read().currency}",
                        oninput: move |e| settings.write().currency = e.value().trim().to_uppercase(),
                    }
                }
            }
            section { class: "form-section",
                h3 { class: "form-section-title", "Marketplace" }
                FormField { id: "settings-commission", label: "Commission (%)", error: field_error(&errors, "commission_percent"),
                    input {
                        id: "settings-commission",
                        class: "form-input",
                        r#type: "number",
                        min: "0",
                        max: "100",
                        value: "{settings.read().commission_percent}",
                        oninput: move |e| {
                            if let Ok(n) = e.value().trim().parse::<i64>() {
                                settings.write().commission_percent = n;
                            }
                        },
                    }
                }
                FormField { id: "settings-low-stock", label: "Low stock threshold", error: field_error(&errors, "low_stock_threshold"),
                    input {
                        id: "settings-low-stock",
                        class: "form-input",
                        r#type: "number",
                        min: "0",
                        value: "{settings.read().low_stock_threshold}",
                        oninput: move |e| {
                            if let Ok(n) = e.value().trim().parse::<i64>() {
                                settings.write().low_stock_threshold = n;
                            }
                        },
                    }
                }
                div { class: "form-group form-check",
                    input {
                        id: "settings-maintenance",
                        r#type: "checkbox",
                        checked: settings.read().maintenance_mode,
                        onchange: move |e| settings.write().maintenance_mode = e.checked(),
                    }
                    label { r#for: "settings-maintenance", "Maintenance mode" }
                }
            }
            FormActions { is_loading, submit_label: "Save settings" }
        }
    }
}

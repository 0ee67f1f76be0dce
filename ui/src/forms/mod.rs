//! Resource forms.
//!
//! Every form takes the record being edited (or `None` to create one), an
//! `is_loading` flag from the parent, and reports a validated input through
//! `on_submit`. The parent performs the request.

use dioxus::prelude::*;
use jiff::{Timestamp, civil::Date, tz::TimeZone};
use types::FieldErrors;

mod brand;
mod category;
mod collection;
mod coupon;
mod order;
mod product;
mod settings;
mod shop;

pub use brand::BrandForm;
pub use category::CategoryForm;
pub use collection::CollectionForm;
pub use coupon::CouponForm;
pub use order::OrderStatusControl;
pub use product::ProductForm;
pub use settings::SettingsForm;
pub use shop::ShopForm;

#[component]
fn FormField(
    id: &'static str,
    label: String,
    #[props(default)] required: bool,
    error: Option<String>,
    children: Element,
) -> Element {
    rsx! {
        div { class: if error.is_some() { "form-group has-error" } else { "form-group" },
            label { class: "form-label", r#for: id,
                "{label}"
                if required { " *" }
            }
            {children}
            if let Some(ref error) = error {
                span { class: "field-error", "{error}" }
            }
        }
    }
}

#[component]
fn FormActions(
    is_loading: bool,
    submit_label: String,
    on_cancel: Option<EventHandler<()>>,
) -> Element {
    rsx! {
        div { class: "form-actions",
            if let Some(on_cancel) = on_cancel {
                button {
                    r#type: "button",
                    class: "btn btn-secondary",
                    disabled: is_loading,
                    onclick: move |_| on_cancel.call(()),
                    "Cancel"
                }
            }
            button {
                r#type: "submit",
                class: "btn btn-primary",
                disabled: is_loading,
                if is_loading { "Saving..." } else { "{submit_label}" }
            }
        }
    }
}

fn field_error(errors: &Signal<FieldErrors>, field: &str) -> Option<String> {
    errors.read().get(field).map(String::from)
}

fn optional_text(value: String) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

fn submit_label(editing: bool) -> String {
    if editing { "Save changes" } else { "Create" }.to_string()
}

/// `YYYY-MM-DD` as shown by a date input, in UTC.
fn date_input(timestamp: Option<Timestamp>) -> String {
    timestamp
        .map(|ts| ts.to_zoned(TimeZone::UTC).date().to_string())
        .unwrap_or_default()
}

/// End of the given UTC day, so a coupon stays valid through its expiry date.
fn parse_date_input(value: &str) -> Result<Option<Timestamp>, String> {
    if value.trim().is_empty() {
        return Ok(None);
    }
    let date: Date = value.trim().parse().map_err(|_| "Enter a valid date".to_string())?;
    date.at(23, 59, 59, 0)
        .to_zoned(TimeZone::UTC)
        .map(|zoned| Some(zoned.timestamp()))
        .map_err(|e| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn date_inputs_round_trip_through_end_of_day() {
        let ts = parse_date_input("2025-06-30").unwrap();
        assert_eq!(date_input(ts), "2025-06-30");
        assert_eq!(parse_date_input("").unwrap(), None);
        assert!(parse_date_input("30/06/2025").is_err());
    }

    #[test]
    fn blank_text_is_none() {
        assert_eq!(optional_text("  ".into()), None);
        assert_eq!(optional_text(" a ".into()), Some("a".into()));
    }
}

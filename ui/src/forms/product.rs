use dioxus::prelude::*;
use types::{
    Brand, Category, FieldErrors, Product, ProductInput, Shop, Validate, money_input, parse_money,
    slugify,
};

use super::{FormActions, FormField, field_error, optional_text, submit_label};

/// Option lists come from the parent's queries; an empty list just leaves the
/// select with its placeholder.
#[component]
pub fn ProductForm(
    #[props(!optional)] data: Option<Product>,
    #[props(default)] brands: Vec<Brand>,
    #[props(default)] categories: Vec<Category>,
    #[props(default)] shops: Vec<Shop>,
    is_loading: bool,
    on_submit: EventHandler<ProductInput>,
    on_cancel: Option<EventHandler<()>>,
) -> Element {
    let editing = data.is_some();
    let mut input = use_signal(|| data.as_ref().map(ProductInput::from).unwrap_or_default());
    let mut price = use_signal(|| {
        data.as_ref()
            .map(|p| money_input(p.price))
            .unwrap_or_default()
    });
    let mut errors = use_signal(FieldErrors::new);

    let brand_id = input.read().brand_id.clone().unwrap_or_default();
    let category_id = input.read().category_id.clone().unwrap_or_default();
    let shop_id = input.read().shop_id.clone().unwrap_or_default();

    rsx! {
        form {
            class: "resource-form",
            onsubmit: move |e: FormEvent| {
                e.prevent_default();
                if is_loading {
                    return;
                }
                let Some(minor) = parse_money(&price.read()) else {
                    let mut found = input.read().validate().err().unwrap_or_default();
                    found.add("price", "Enter a price like 12.50");
                    errors.set(found);
                    return;
                };
                let mut value = input.read().clone();
                value.price = minor;
                match value.validate() {
                    Ok(()) => {
                        errors.set(FieldErrors::new());
                        on_submit.call(value);
                    }
                    Err(found) => errors.set(found),
                }
            },
            FormField { id: "product-name", label: "Name", required: true, error: field_error(&errors, "name"),
                input {
                    id: "product-name",
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
            FormField { id: "product-slug", label: "Slug", required: true, error: field_error(&errors, "slug"),
                input {
                    id: "product-slug",
                    class: "form-input form-input-mono",
                    r#type: "text",
                    value: "{input.read().slug}",
                    oninput: move |e| input.write().slug = e.value(),
                }
            }
            div { class: "form-row",
                FormField { id: "product-price", label: "Price", required: true, error: field_error(&errors, "price"),
                    input {
                        id: "product-price",
                        class: "form-input",
                        r#type: "text",
                        inputmode: "decimal",
                        placeholder: "0.00",
                        value: "{price}",
                        oninput: move |e| price.set(e.value()),
                    }
                }
                FormField { id: "product-stock", label: "Stock", required: true, error: field_error(&errors, "stock"),
                    input {
                        id: "product-stock",
                        class: "form-input",
                        r#type: "number",
                        min: "0",
                        value: "{input.read().stock}",
                        oninput: move |e| {
                            if let Ok(stock) = e.value().trim().parse::<i64>() {
                                input.write().stock = stock;
                            }
                        },
                    }
                }
            }
            FormField { id: "product-shop", label: "Shop", required: true, error: field_error(&errors, "shop_id"),
                select {
                    id: "product-shop",
                    class: "form-input",
                    value: "{shop_id}",
                    onchange: move |e| input.write().shop_id = optional_text(e.value()),
                    option { value: "", "Select a shop" }
                    for shop in shops {
                        option { key: "{shop.id}", value: "{shop.id}", selected: shop.id == shop_id, "{shop.name}" }
                    }
                }
            }
            div { class: "form-row",
                FormField { id: "product-brand", label: "Brand", error: field_error(&errors, "brand_id"),
                    select {
                        id: "product-brand",
                        class: "form-input",
                        value: "{brand_id}",
                        onchange: move |e| input.write().brand_id = optional_text(e.value()),
                        option { value: "", "No brand" }
                        for brand in brands {
                            option { key: "{brand.id}", value: "{brand.id}", selected: brand.id == brand_id, "{brand.name}" }
                        }
                    }
                }
                FormField { id: "product-category", label: "Category", error: field_error(&errors, "category_id"),
                    select {
                        id: "product-category",
                        class: "form-input",
                        value: "{category_id}",
                        onchange: move |e| input.write().category_id = optional_text(e.value()),
                        option { value: "", "Uncategorised" }
                        for category in categories {
                            option { key: "{category.id}", value: "{category.id}", selected: category.id == category_id, "{category.name}" }
                        }
                    }
                }
            }
            div { class: "form-group form-check",
                input {
                    id: "product-published",
                    r#type: "checkbox",
                    checked: input.read().published,
                    onchange: move |e| input.write().published = e.checked(),
                }
                label { r#for: "product-published", "Published" }
            }
            FormActions { is_loading, submit_label: submit_label(editing), on_cancel }
        }
    }
}

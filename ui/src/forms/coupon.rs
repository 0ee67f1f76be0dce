use dioxus::prelude::*;
use types::{Coupon, CouponInput, DiscountType, FieldErrors, Validate, money_input, parse_money};

use super::{FormActions, FormField, date_input, field_error, parse_date_input, submit_label};

/// Text the admin is typing. Numbers and dates are only parsed on submit so a
/// half-typed value never clobbers the field.
#[derive(Debug, Clone, PartialEq)]
struct CouponDraft {
    code: String,
    discount_type: DiscountType,
    amount: String,
    min_order: String,
    max_uses: String,
    expires: String,
    active: bool,
}

impl From<&CouponInput> for CouponDraft {
    fn from(input: &CouponInput) -> Self {
        Self {
            code: input.code.clone(),
            discount_type: input.discount_type,
            amount: match input.discount_type {
                DiscountType::Percentage => input.amount.to_string(),
                DiscountType::Fixed => money_input(input.amount),
            },
            min_order: input.min_order.map(money_input).unwrap_or_default(),
            max_uses: input.max_uses.map(|n| n.to_string()).unwrap_or_default(),
            expires: date_input(input.expires_at),
            active: input.active,
        }
    }
}

impl CouponDraft {
    fn into_input(self) -> Result<CouponInput, FieldErrors> {
        let mut errors = FieldErrors::new();

        let amount = match self.discount_type {
            DiscountType::Percentage => self.amount.trim().parse::<i64>().ok(),
            DiscountType::Fixed => parse_money(&self.amount),
        };
        if amount.is_none() {
            errors.add(
                "amount",
                match self.discount_type {
                    DiscountType::Percentage => "Enter a whole number",
                    DiscountType::Fixed => "Enter an amount like 12.50",
                },
            );
        }

        let min_order = if self.min_order.trim().is_empty() {
            None
        } else {
            let parsed = parse_money(&self.min_order);
            if parsed.is_none() {
                errors.add("min_order", "Enter an amount like 12.50");
            }
            parsed
        };

        let max_uses = if self.max_uses.trim().is_empty() {
            None
        } else {
            let parsed = self.max_uses.trim().parse::<u32>().ok();
            if parsed.is_none() {
                errors.add("max_uses", "Enter a whole number");
            }
            parsed
        };

        let expires_at = parse_date_input(&self.expires).unwrap_or_else(|message| {
            errors.add("expires_at", message);
            None
        });

        let input = CouponInput {
            code: self.code.trim().to_uppercase(),
            discount_type: self.discount_type,
            amount: amount.unwrap_or_default(),
            min_order,
            max_uses,
            expires_at,
            active: self.active,
        };
        if let Err(found) = input.validate() {
            for field in found.fields() {
                if let Some(message) = found.get(field) {
                    errors.add(field, message);
                }
            }
        }
        errors.into_result().map(|()| input)
    }
}

#[component]
pub fn CouponForm(
    #[props(!optional)] data: Option<Coupon>,
    is_loading: bool,
    on_submit: EventHandler<CouponInput>,
    on_cancel: Option<EventHandler<()>>,
) -> Element {
    let editing = data.is_some();
    let mut draft = use_signal(|| {
        let input = data.as_ref().map(CouponInput::from).unwrap_or_default();
        CouponDraft::from(&input)
    });
    let mut errors = use_signal(FieldErrors::new);

    let discount_type = draft.read().discount_type;
    let amount_label = match discount_type {
        DiscountType::Percentage => "Discount (%)",
        DiscountType::Fixed => "Discount amount",
    };

    rsx! {
        form {
            class: "resource-form",
            onsubmit: move |e: FormEvent| {
                e.prevent_default();
                if is_loading {
                    return;
                }
                match draft.read().clone().into_input() {
                    Ok(input) => {
                        errors.set(FieldErrors::new());
                        on_submit.call(input);
                    }
                    Err(found) => errors.set(found),
                }
            },
            FormField { id: "coupon-code", label: "Code", required: true, error: field_error(&errors, "code"),
                input {
                    id: "coupon-code",
                    class: "form-input form-input-mono",
                    r#type: "text",
                    placeholder: "SUMMER25",
                    value: "{draft.read().code}",
                    oninput: move |e| draft.write().code = e.value().to_uppercase(),
                }
            }
            div { class: "form-row",
                FormField { id: "coupon-type", label: "Discount type",
                    select {
                        id: "coupon-type",
                        class: "form-input",
                        value: "{discount_type.as_str()}",
                        onchange: move |e| {
                            if let Some(kind) = DiscountType::parse(&e.value()) {
                                draft.write().discount_type = kind;
                            }
                        },
                        option { value: "percentage", selected: discount_type == DiscountType::Percentage, "Percentage" }
                        option { value: "fixed", selected: discount_type == DiscountType::Fixed, "Fixed amount" }
                    }
                }
                FormField { id: "coupon-amount", label: "{amount_label}", required: true, error: field_error(&errors, "amount"),
                    input {
                        id: "coupon-amount",
                        class: "form-input",
                        r#type: "text",
                        inputmode: "decimal",
                        value: "{draft.read().amount}",
                        oninput: move |e| draft.write().amount = e.value(),
                    }
                }
            }
            div { class: "form-row",
                FormField { id: "coupon-min-order", label: "Minimum order", error: field_error(&errors, "min_order"),
                    input {
                        id: "coupon-min-order",
                        class: "form-input",
                        r#type: "text",
                        inputmode: "decimal",
                        placeholder: "No minimum",
                        value: "{draft.read().min_order}",
                        oninput: move |e| draft.write().min_order = e.value(),
                    }
                }
                FormField { id: "coupon-max-uses", label: "Max uses", error: field_error(&errors, "max_uses"),
                    input {
                        id: "coupon-max-uses",
                        class: "form-input",
                        r#type: "number",
                        min: "1",
                        placeholder: "Unlimited",
                        value: "{draft.read().max_uses}",
                        oninput: move |e| draft.write().max_uses = e.value(),
                    }
                }
            }
            FormField { id: "coupon-expires", label: "Expires on", error: field_error(&errors, "expires_at"),
                input {
                    id: "coupon-expires",
                    class: "form-input",
                    r#type: "date",
                    value: "{draft.read().expires}",
                    oninput: move |e| draft.write().expires = e.value(),
                }
            }
            div { class: "form-group form-check",
                input {
                    id: "coupon-active",
                    r#type: "checkbox",
                    checked: draft.read().active,
                    onchange: move |e| draft.write().active = e.checked(),
                }
                label { r#for: "coupon-active", "Active" }
            }
            FormActions { is_loading, submit_label: submit_label(editing), on_cancel }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft() -> CouponDraft {
        CouponDraft::from(&CouponInput {
            code: "SAVE10".into(),
            ..CouponInput::default()
        })
    }

    #[test]
    fn default_draft_is_valid() {
        let input = draft().into_input().unwrap();
        assert_eq!(input.code, "SAVE10");
        assert_eq!(input.amount, 10);
        assert_eq!(input.discount_type, DiscountType::Percentage);
    }

    #[test]
    fn fixed_amounts_are_money() {
        let mut draft = draft();
        draft.discount_type = DiscountType::Fixed;
        draft.amount = "12.5".into();
        draft.min_order = "50".into();
        let input = draft.into_input().unwrap();
        assert_eq!(input.amount, 1250);
        assert_eq!(input.min_order, Some(5000));
    }

    #[test]
    fn parse_errors_win_over_rule_errors() {
        let mut draft = draft();
        draft.amount = "ten".into();
        draft.max_uses = "0".into();
        let errors = draft.into_input().unwrap_err();
        assert_eq!(errors.get("amount"), Some("Enter a whole number"));
        assert_eq!(errors.get("max_uses"), Some("Leave empty for unlimited uses"));
    }

    #[test]
    fn code_is_uppercased() {
        let mut draft = draft();
        draft.code = " save20 ".into();
        assert_eq!(draft.into_input().unwrap().code, "SAVE20");
    }

    #[test]
    fn editing_prefills_text() {
        let coupon = CouponInput {
            code: "FLAT5".into(),
            discount_type: DiscountType::Fixed,
            amount: 500,
            max_uses: Some(3),
            ..CouponInput::default()
        };
        let draft = CouponDraft::from(&coupon);
        assert_eq!(draft.amount, "5.00");
        assert_eq!(draft.max_uses, "3");
        assert_eq!(draft.min_order, "");
    }
}

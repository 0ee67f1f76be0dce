use dioxus::prelude::*;
use jiff::Timestamp;
use types::{Coupon, CouponInput, DialogMode, DiscountType, ResourceKind, format_money};
use ui::{
    ConfirmDelete, CouponForm, Modal, PageShell, render_query, use_error, use_query,
    use_query_client,
};

use super::{dialog_title, format_date, use_currency};

#[component]
pub fn Coupons() -> Element {
    let mut dialog = use_signal(DialogMode::<Coupon>::default);

    rsx! {
        PageShell {
            title: "Coupons",
            subtitle: "Discount codes customers can redeem at checkout.",
            action_label: "Add coupon",
            on_action: move |_| dialog.set(DialogMode::Add),
            CouponList { dialog }
        }
    }
}

fn discount_label(coupon: &Coupon, currency: &str) -> String {
    match coupon.discount_type {
        DiscountType::Percentage => format!("{}%", coupon.amount),
        DiscountType::Fixed => format_money(coupon.amount, currency),
    }
}

fn usage_label(coupon: &Coupon) -> String {
    match coupon.max_uses {
        Some(max) => format!("{} / {max}", coupon.used),
        None => format!("{} / unlimited", coupon.used),
    }
}

/// Badge class and text for the coupon's state at `now`.
fn coupon_state(coupon: &Coupon, now: Timestamp) -> (&'static str, &'static str) {
    if coupon.is_redeemable(now) {
        ("badge badge-success", "Active")
    } else if !coupon.active {
        ("badge badge-muted", "Inactive")
    } else if coupon.is_expired(now) {
        ("badge badge-warning", "Expired")
    } else {
        ("badge badge-warning", "Used up")
    }
}

/// Display text for one table row. Depends only on its arguments.
#[derive(Debug, PartialEq)]
struct CouponRow {
    badge: &'static str,
    state: &'static str,
    discount: String,
    usage: String,
    expires: String,
}

impl CouponRow {
    fn new(coupon: &Coupon, now: Timestamp, currency: &str) -> Self {
        let (badge, state) = coupon_state(coupon, now);
        Self {
            badge,
            state,
            discount: discount_label(coupon, currency),
            usage: usage_label(coupon),
            expires: coupon
                .expires_at
                .map_or_else(|| "Never".to_string(), format_date),
        }
    }
}

#[component]
fn CouponList(mut dialog: Signal<DialogMode<Coupon>>) -> Element {
    let mut error_state = use_error();
    let mut queries = use_query_client();
    let coupons = use_query(ResourceKind::Coupon, api::list_coupons);
    let currency = use_currency();
    let mut to_delete = use_signal(|| None::<Coupon>);
    let mut deleting = use_signal(|| false);

    let confirm_delete = move |_: ()| {
        let Some(coupon) = to_delete() else {
            return;
        };
        spawn(async move {
            deleting.set(true);
            match api::delete_coupon(coupon.id).await {
                Ok(()) => queries.invalidate(ResourceKind::Coupon),
                Err(e) => error_state.set_server_error(&e),
            }
            deleting.set(false);
            to_delete.set(None);
        });
    };

    // One clock reading per settled list, so re-renders agree with each other.
    let now = use_memo(move || coupons.with(|_| Timestamp::now()));
    let now = now();
    let currency = currency();

    rsx! {
        {render_query(&coupons.read(), ResourceKind::Coupon, move |coupons| rsx! {
            div { class: "card",
                div { class: "table-container",
                    table {
                        thead {
                            tr {
                                th { "Code" }
                                th { "Discount" }
                                th { "Usage" }
                                th { "Expires" }
                                th { "Status" }
                                th {}
                            }
                        }
                        tbody {
                            for coupon in coupons.iter() {
                                {
                                    let CouponRow { badge, state, discount, usage, expires } =
                                        CouponRow::new(coupon, now, &currency);
                                    let edit = coupon.clone();
                                    let remove = coupon.clone();
                                    rsx! {
                                        tr { key: "{coupon.id}",
                                            td { class: "text-mono", "{coupon.code}" }
                                            td { "{discount}" }
                                            td { "{usage}" }
                                            td { "{expires}" }
                                            td { span { class: badge, "{state}" } }
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

        CouponDialog { dialog }

        if let Some(coupon) = to_delete() {
            ConfirmDelete {
                kind: "coupon",
                name: coupon.code,
                deleting: deleting(),
                on_close: move |_| to_delete.set(None),
                on_confirm: confirm_delete,
            }
        }
    }
}

#[component]
fn CouponDialog(mut dialog: Signal<DialogMode<Coupon>>) -> Element {
    let mut error_state = use_error();
    let mut queries = use_query_client();
    let mut saving = use_signal(|| false);

    let save = move |input: CouponInput| {
        let editing = dialog.peek().editing().map(|c| c.id.clone());
        spawn(async move {
            saving.set(true);
            let result = match editing {
                Some(id) => api::update_coupon(id, input).await,
                None => api::create_coupon(input).await,
            };
            match result {
                Ok(_) => {
                    dialog.set(DialogMode::Closed);
                    queries.invalidate(ResourceKind::Coupon);
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
            title: dialog_title(&mode, "coupon"),
            busy: saving(),
            on_close: move |_| dialog.set(DialogMode::Closed),
            CouponForm {
                key: "{mode.form_key()}",
                data: mode.editing().cloned(),
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

    fn coupon() -> Coupon {
        Coupon {
            id: "c1".into(),
            code: "SAVE10".into(),
            discount_type: DiscountType::Percentage,
            amount: 10,
            min_order: None,
            max_uses: Some(5),
            used: 2,
            expires_at: None,
            active: true,
        }
    }

    #[test]
    fn labels() {
        let mut c = coupon();
        assert_eq!(discount_label(&c, "USD"), "10%");
        assert_eq!(usage_label(&c), "2 / 5");
        c.discount_type = DiscountType::Fixed;
        c.amount = 500;
        c.max_uses = None;
        assert_eq!(discount_label(&c, "EUR"), "5.00 EUR");
        assert_eq!(usage_label(&c), "2 / unlimited");
    }

    #[test]
    fn state_prefers_inactive_then_expired() {
        let now: Timestamp = "2025-06-01T00:00:00Z".parse().unwrap();
        let mut c = coupon();
        assert_eq!(coupon_state(&c, now).1, "Active");
        c.used = 5;
        assert_eq!(coupon_state(&c, now).1, "Used up");
        c.expires_at = Some("2025-05-01T00:00:00Z".parse().unwrap());
        assert_eq!(coupon_state(&c, now).1, "Expired");
        c.active = false;
        assert_eq!(coupon_state(&c, now).1, "Inactive");
    }

    #[test]
    fn row_is_fixed_by_the_settle_time() {
        let settled: Timestamp = "2025-06-01T00:00:00Z".parse().unwrap();
        let mut c = coupon();
        c.expires_at = Some("2025-06-01T00:00:01Z".parse().unwrap());

        let first = CouponRow::new(&c, settled, "USD");
        assert_eq!(first, CouponRow::new(&c, settled, "USD"));
        assert_eq!(first.state, "Active");
        assert_eq!(first.expires, "Jun 01, 2025");

        let later: Timestamp = "2025-06-02T00:00:00Z".parse().unwrap();
        assert_eq!(CouponRow::new(&c, later, "USD").state, "Expired");
    }
}

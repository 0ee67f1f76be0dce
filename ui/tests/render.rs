use dioxus::prelude::*;
use types::{
    Brand, ChartPoint, Coupon, DialogMode, DiscountType, OrderStatus, QueryStatus, ResourceKind,
    Settings,
};
use ui::{
    BrandForm, CategoryForm, CollectionForm, CouponForm, DashboardCard, ErrorInfo, IncomeChart,
    OrderStatusControl, PageShell, ProductForm, Query, SalesChart, SettingsForm, ShopForm,
    render_query,
};

fn render(app: fn() -> Element) -> String {
    let mut dom = VirtualDom::new(app);
    dom.rebuild_in_place();
    dioxus_ssr::render(&dom)
}

fn save10() -> Coupon {
    Coupon {
        id: "c1".into(),
        code: "SAVE10".into(),
        discount_type: DiscountType::Percentage,
        amount: 10,
        min_order: None,
        max_uses: None,
        used: 0,
        expires_at: None,
        active: true,
    }
}

fn brand_table(status: Query<Vec<Brand>>) -> Element {
    render_query(&status, ResourceKind::Brand, |brands| {
        rsx! {
            table {
                tbody {
                    for brand in brands.iter() {
                        tr { key: "{brand.id}", td { "{brand.name}" } }
                    }
                }
            }
        }
    })
}

#[test]
fn low_stock_card_renders_zero() {
    let html = render(|| {
        rsx! {
            DashboardCard {
                title: "Low Stock",
                value: 0_i64,
                icon: rsx! { span { "!" } },
                is_loading: false,
            }
        }
    });
    assert!(html.contains("Low Stock"));
    assert!(html.contains(">0</div>"), "{html}");
    assert!(!html.contains("skeleton"));
}

#[test]
fn loading_card_shows_skeleton_instead_of_value() {
    let html = render(|| {
        rsx! {
            DashboardCard {
                title: "Revenue",
                value: "12.50 USD",
                icon: rsx! { span { "$" } },
                is_loading: true,
            }
        }
    });
    assert!(html.contains("skeleton"));
    assert!(!html.contains("12.50 USD"));
}

#[test]
fn income_chart_without_data_renders_empty_frame() {
    let html = render(|| rsx! { IncomeChart { income: None, is_loading: false } });
    assert!(html.contains("chart-frame"));
    assert!(html.contains("No data"));
}

#[test]
fn sales_chart_draws_one_bar_per_point() {
    let html = render(|| {
        rsx! {
            SalesChart {
                sales: vec![
                    ChartPoint { name: "Jan".into(), total: 10.0 },
                    ChartPoint { name: "Feb".into(), total: 20.0 },
                ],
                is_loading: false,
            }
        }
    });
    assert_eq!(html.matches("chart-bar").count(), 2);
    assert!(html.contains("Feb"));
    assert!(!html.contains("No data"));
}

#[test]
fn failed_series_shows_its_error_not_an_empty_chart() {
    let html = render(|| {
        rsx! {
            SalesChart {
                sales: None,
                is_loading: false,
                error: ErrorInfo {
                    message: "series unavailable".into(),
                    code: Some(502),
                    ..Default::default()
                },
            }
        }
    });
    assert!(html.contains("alert-error"));
    assert!(html.contains("series unavailable"));
    assert!(!html.contains("No data"));
    assert!(!html.contains("chart-frame"));
}

#[test]
fn chart_placeholder_while_loading() {
    let html = render(|| rsx! { IncomeChart { income: None, is_loading: true } });
    assert!(html.contains("chart-placeholder"));
    assert!(!html.contains("chart-frame"));
}

#[test]
fn editing_a_coupon_prefills_the_code() {
    let html = render(|| {
        rsx! {
            CouponForm { data: Some(save10()), is_loading: false, on_submit: |_| {} }
        }
    });
    assert!(html.contains("SAVE10"));
    assert!(html.contains("Save changes"));
}

#[test]
fn every_form_shows_busy_submit_while_loading() {
    let forms: [fn() -> Element; 7] = [
        || rsx! { BrandForm { data: None, is_loading: true, on_submit: |_| {} } },
        || rsx! { CategoryForm { data: None, is_loading: true, on_submit: |_| {} } },
        || rsx! { CollectionForm { data: None, is_loading: true, on_submit: |_| {} } },
        || rsx! { CouponForm { data: None, is_loading: true, on_submit: |_| {} } },
        || rsx! { ShopForm { data: None, is_loading: true, on_submit: |_| {} } },
        || rsx! { ProductForm { data: None, is_loading: true, on_submit: |_| {} } },
        || rsx! { SettingsForm { data: None, is_loading: true, on_submit: |_| {} } },
    ];
    for form in forms {
        let html = render(form);
        assert!(html.contains("Saving..."), "{html}");
        assert!(html.contains("disabled"), "{html}");
    }
}

#[test]
fn idle_create_form_offers_create() {
    let html = render(|| rsx! { BrandForm { data: None, is_loading: false, on_submit: |_| {} } });
    assert!(html.contains("Create"));
    assert!(!html.contains("Saving..."));
}

#[test]
fn settings_form_prefills_values() {
    let html = render(|| {
        rsx! {
            SettingsForm {
                data: Some(Settings {
                    store_name: "Bazaar".into(),
                    support_email: "help@bazaar.test".into(),
                    ..Settings::default()
                }),
                is_loading: false,
                on_submit: |_| {},
            }
        }
    });
    assert!(html.contains("Bazaar"));
    assert!(html.contains("USD"));
}

#[test]
fn empty_list_renders_empty_state() {
    let html = render(|| brand_table(QueryStatus::Empty));
    assert!(html.contains("empty-state"));
    assert!(html.contains("No brands yet."));
    assert!(!html.contains("<tr"));
}

#[test]
fn pending_list_renders_only_loading() {
    let html = render(|| brand_table(QueryStatus::Pending));
    assert!(html.contains("loading"));
    assert!(html.contains("Loading brands..."));
    assert!(!html.contains("<tr"));
}

#[test]
fn failed_list_renders_inline_error() {
    let html = render(|| {
        brand_table(QueryStatus::Error(ErrorInfo {
            message: "backend unavailable".into(),
            code: Some(502),
            ..Default::default()
        }))
    });
    assert!(html.contains("alert-error"));
    assert!(html.contains("backend unavailable"));
}

#[test]
fn missing_record_renders_not_found() {
    let html = render(|| {
        brand_table(QueryStatus::Error(ErrorInfo {
            message: "brand not found".into(),
            code: Some(404),
            ..Default::default()
        }))
    });
    assert!(html.contains("Not found."));
    assert!(!html.contains("alert-error"));
}

#[test]
fn loaded_list_renders_rows() {
    let html = render(|| {
        brand_table(QueryStatus::Success(vec![Brand {
            id: "b1".into(),
            name: "Acme".into(),
            slug: "acme".into(),
            logo_url: None,
        }]))
    });
    assert_eq!(html.matches("<tr").count(), 1);
    assert!(html.contains("Acme"));
}

#[test]
fn identical_props_render_identically() {
    fn app() -> Element {
        rsx! {
            CouponForm { data: Some(save10()), is_loading: false, on_submit: |_| {} }
            DashboardCard { title: "Orders", value: 3_i64, icon: rsx! { span {} }, is_loading: false }
        }
    }
    assert_eq!(render(app), render(app));
}

#[test]
fn page_shell_renders_its_single_action() {
    let html = render(|| {
        rsx! {
            PageShell {
                title: "Brands",
                action_label: "Add brand",
                on_action: |_| {},
                p { "content" }
            }
        }
    });
    assert!(html.contains("Brands"));
    assert!(html.contains("Add brand"));
    assert!(html.contains("content"));
    assert_eq!(html.matches("<button").count(), 1);

    let html = render(|| rsx! { PageShell { title: "Orders", p { "content" } } });
    assert!(!html.contains("<button"));
}

fn brands_page(fire_add: bool) -> Element {
    let mut dialog = use_signal(DialogMode::<Brand>::default);
    let open = use_callback(move |_: ()| dialog.set(DialogMode::Add));
    use_hook(|| {
        if fire_add {
            open.call(());
            assert!(dialog.peek().is_open());
        }
    });

    rsx! {
        PageShell {
            title: "Brands",
            action_label: "Add brand",
            on_action: open,
            p { "content" }
        }
    }
}

#[test]
fn add_action_with_no_list_mounted_changes_nothing() {
    let fired = render(|| brands_page(true));
    let idle = render(|| brands_page(false));
    assert_eq!(fired, idle);
    assert!(!fired.contains("modal"));
}

#[test]
fn order_status_control_offers_allowed_transitions() {
    let html = render(|| {
        rsx! {
            OrderStatusControl { status: OrderStatus::Pending, is_loading: false, on_change: |_| {} }
        }
    });
    assert!(html.contains("Mark Processing"));
    assert!(html.contains("Mark Cancelled"));
    assert!(!html.contains("Mark Delivered"));

    let html = render(|| {
        rsx! {
            OrderStatusControl { status: OrderStatus::Delivered, is_loading: false, on_change: |_| {} }
        }
    });
    assert!(html.contains("Delivered"));
    assert!(!html.contains("Mark"));
}

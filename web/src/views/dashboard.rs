use dioxus::prelude::*;
use types::{ChartPeriod, DashboardStats, ResourceKind, format_money};
use ui::{CardValue, DashboardCard, IncomeChart, InlineError, PageShell, Query, SalesChart, use_query};

use super::use_currency;

#[component]
pub fn Dashboard() -> Element {
    let mut period = use_signal(ChartPeriod::default);
    let stats = use_query(ResourceKind::Dashboard, api::get_dashboard_stats);
    let income = use_query(ResourceKind::Dashboard, move || api::get_income_series(period()));
    let sales = use_query(ResourceKind::Dashboard, move || api::get_sales_series(period()));
    let currency = use_currency();

    let loading = stats.read().is_pending();
    let error = stats.read().error().cloned();
    let [revenue, orders, products, low_stock] = stat_values(&stats.read(), &currency());

    rsx! {
        PageShell {
            title: "Dashboard",
            subtitle: "How the marketplace is doing.",
            if let Some(error) = error {
                InlineError { error }
            }
            div { class: "dashboard-grid",
                DashboardCard {
                    title: "Revenue",
                    value: revenue,
                    icon: rsx! { Icon { d: "M12 1v22M17 5H9.5a3.5 3.5 0 0 0 0 7h5a3.5 3.5 0 0 1 0 7H6" } },
                    is_loading: loading,
                }
                DashboardCard {
                    title: "Orders",
                    value: orders,
                    icon: rsx! { Icon { d: "M6 2 3 6v14a2 2 0 0 0 2 2h14a2 2 0 0 0 2-2V6l-3-4zM3 6h18M16 10a4 4 0 0 1-8 0" } },
                    is_loading: loading,
                }
                DashboardCard {
                    title: "Products",
                    value: products,
                    icon: rsx! { Icon { d: "M21 16V8l-9-5-9 5v8l9 5 9-5zM3.3 7 12 12l8.7-5M12 22V12" } },
                    is_loading: loading,
                }
                DashboardCard {
                    title: "Low Stock",
                    value: low_stock,
                    icon: rsx! { Icon { d: "M12 9v4M12 17h.01M10.3 3.9 1.8 18a2 2 0 0 0 1.7 3h17a2 2 0 0 0 1.7-3L13.7 3.9a2 2 0 0 0-3.4 0z" } },
                    is_loading: loading,
                }
            }
            div { class: "chart-toolbar",
                for option in [ChartPeriod::Daily, ChartPeriod::Monthly] {
                    button {
                        key: "{option.as_str()}",
                        class: if period() == option { "btn btn-sm btn-primary" } else { "btn btn-sm btn-secondary" },
                        onclick: move |_| period.set(option),
                        if option == ChartPeriod::Daily { "Daily" } else { "Monthly" }
                    }
                }
            }
            div { class: "grid grid-cols-2",
                IncomeChart {
                    income: income.read().data().cloned(),
                    is_loading: income.read().is_pending(),
                    error: income.read().error().cloned(),
                }
                SalesChart {
                    sales: sales.read().data().cloned(),
                    is_loading: sales.read().is_pending(),
                    error: sales.read().error().cloned(),
                }
            }
        }
    }
}

const UNAVAILABLE: &str = "—";

/// Card values in display order. Without loaded stats every card shows a
/// placeholder rather than a zero the backend never reported.
fn stat_values(stats: &Query<DashboardStats>, currency: &str) -> [CardValue; 4] {
    match stats.data() {
        Some(stats) => [
            format_money(stats.revenue, currency).into(),
            stats.orders.into(),
            stats.products.into(),
            stats.low_stock.into(),
        ],
        None => std::array::from_fn(|_| CardValue::from(UNAVAILABLE)),
    }
}

#[component]
fn Icon(d: &'static str) -> Element {
    rsx! {
        svg {
            width: "20",
            height: "20",
            view_box: "0 0 24 24",
            fill: "none",
            stroke: "currentColor",
            stroke_width: "2",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            path { d }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use types::QueryStatus;
    use ui::ErrorInfo;

    #[test]
    fn failed_stats_do_not_show_zeroes() {
        let failed: Query<DashboardStats> = QueryStatus::Error(ErrorInfo {
            message: "backend unavailable".into(),
            code: Some(502),
            ..Default::default()
        });
        let values = stat_values(&failed, "USD");
        assert!(values.iter().all(|v| v.to_string() == UNAVAILABLE));
    }

    #[test]
    fn loaded_stats_keep_real_zeroes() {
        let loaded: Query<DashboardStats> = QueryStatus::Success(DashboardStats {
            revenue: 1250,
            orders: 3,
            products: 0,
            low_stock: 0,
        });
        let values = stat_values(&loaded, "USD");
        assert_eq!(values[0].to_string(), "12.50 USD");
        assert_eq!(values[1].to_string(), "3");
        assert_eq!(values[3].to_string(), "0");
    }
}

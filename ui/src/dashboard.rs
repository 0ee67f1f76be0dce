use std::fmt;

use dioxus::prelude::*;
use types::ChartPoint;

use crate::{ErrorInfo, InlineError, Skeleton};

/// What a dashboard card shows. Rendered exactly as given; format money and
/// large numbers before building one.
#[derive(Debug, Clone, PartialEq)]
pub enum CardValue {
    Number(i64),
    Text(String),
}

impl fmt::Display for CardValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for CardValue {
    fn from(n: i64) -> Self {
        Self::Number(n)
    }
}

impl From<u64> for CardValue {
    fn from(n: u64) -> Self {
        i64::try_from(n).map_or_else(|_| Self::Text(n.to_string()), Self::Number)
    }
}

impl From<String> for CardValue {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<&str> for CardValue {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

#[component]
pub fn DashboardCard(
    title: String,
    #[props(into)] value: CardValue,
    icon: Element,
    is_loading: bool,
) -> Element {
    rsx! {
        div { class: "card stat-card",
            div { class: "stat-card-header",
                span { class: "stat-card-title", "{title}" }
                span { class: "stat-card-icon", {icon} }
            }
            if is_loading {
                Skeleton {}
            } else {
                div { class: "stat-card-value", "{value}" }
            }
        }
    }
}

/// Position of one bar inside the chart's SVG view box.
#[derive(Debug, Clone, PartialEq)]
pub struct Bar {
    pub label: String,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

const CHART_WIDTH: f64 = 600.0;
const CHART_HEIGHT: f64 = 240.0;
const BAR_GAP: f64 = 0.2;

/// Scales precomputed points into bars. Negative totals are drawn as empty
/// bars; nothing is summed or re-bucketed.
pub fn bar_layout(points: &[ChartPoint], width: f64, height: f64) -> Vec<Bar> {
    if points.is_empty() {
        return Vec::new();
    }

    let max = points
        .iter()
        .map(|p| p.total)
        .filter(|t| t.is_finite())
        .fold(0.0_f64, f64::max);
    let slot = width / points.len() as f64;
    let bar_width = slot * (1.0 - BAR_GAP);

    points
        .iter()
        .enumerate()
        .map(|(i, point)| {
            let ratio = if max > 0.0 && point.total.is_finite() {
                (point.total / max).clamp(0.0, 1.0)
            } else {
                0.0
            };
            let bar_height = ratio * height;
            Bar {
                label: point.name.clone(),
                x: i as f64 * slot + (slot - bar_width) / 2.0,
                y: height - bar_height,
                width: bar_width,
                height: bar_height,
            }
        })
        .collect()
}

#[component]
fn BarChart(
    title: String,
    points: Option<Vec<ChartPoint>>,
    is_loading: bool,
    error: Option<ErrorInfo>,
) -> Element {
    let bars = points
        .as_deref()
        .map(|p| bar_layout(p, CHART_WIDTH, CHART_HEIGHT))
        .unwrap_or_default();

    rsx! {
        div { class: "card chart-card",
            div { class: "card-header",
                h2 { class: "card-title", "{title}" }
            }
            div { class: "card-body",
                if is_loading {
                    div { class: "chart-placeholder", Skeleton { lines: 6 } }
                } else if let Some(error) = error {
                    InlineError { error }
                } else {
                    div { class: "chart-frame",
                        svg {
                            view_box: "0 0 {CHART_WIDTH} {CHART_HEIGHT}",
                            width: "100%",
                            height: "{CHART_HEIGHT}",
                            for (i, bar) in bars.iter().enumerate() {
                                rect {
                                    key: "{i}",
                                    class: "chart-bar",
                                    x: "{bar.x}",
                                    y: "{bar.y}",
                                    width: "{bar.width}",
                                    height: "{bar.height}",
                                    title { "{bar.label}" }
                                }
                            }
                        }
                        if bars.is_empty() {
                            p { class: "chart-empty text-muted", "No data" }
                        } else {
                            div { class: "chart-labels",
                                for (i, bar) in bars.iter().enumerate() {
                                    span { key: "{i}", class: "chart-label", "{bar.label}" }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

/// A failed series shows its error instead of the empty frame.
#[component]
pub fn IncomeChart(
    income: Option<Vec<ChartPoint>>,
    is_loading: bool,
    error: Option<ErrorInfo>,
) -> Element {
    rsx! {
        BarChart { title: "Income", points: income, is_loading, error }
    }
}

#[component]
pub fn SalesChart(
    sales: Option<Vec<ChartPoint>>,
    is_loading: bool,
    error: Option<ErrorInfo>,
) -> Element {
    rsx! {
        BarChart { title: "Sales", points: sales, is_loading, error }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn point(name: &str, total: f64) -> ChartPoint {
        ChartPoint {
            name: name.into(),
            total,
        }
    }

    #[test]
    fn tallest_bar_fills_the_height() {
        let bars = bar_layout(&[point("Jan", 50.0), point("Feb", 100.0)], 200.0, 100.0);
        assert_eq!(bars.len(), 2);
        assert_eq!(bars[0].height, 50.0);
        assert_eq!(bars[1].height, 100.0);
        assert_eq!(bars[1].y, 0.0);
        assert!(bars[0].x < bars[1].x);
    }

    #[test]
    fn all_zero_or_negative_totals_draw_flat_bars() {
        let bars = bar_layout(&[point("Jan", 0.0), point("Feb", -10.0)], 200.0, 100.0);
        assert!(bars.iter().all(|b| b.height == 0.0 && b.y == 100.0));
    }

    #[test]
    fn no_points_no_bars() {
        assert!(bar_layout(&[], 200.0, 100.0).is_empty());
    }

    #[test]
    fn card_value_is_verbatim() {
        assert_eq!(CardValue::from(0_i64).to_string(), "0");
        assert_eq!(CardValue::from("12.50 USD").to_string(), "12.50 USD");
    }
}

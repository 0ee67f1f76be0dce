use dioxus::prelude::*;
use types::{QueryStatus, ResourceKind};

use crate::{ErrorInfo, Query};

#[component]
pub fn Loading(label: String) -> Element {
    rsx! {
        div { class: "loading", "{label}" }
    }
}

#[component]
pub fn Skeleton(#[props(default = 1)] lines: usize) -> Element {
    rsx! {
        div { class: "skeleton",
            for i in 0..lines {
                div { key: "{i}", class: "skeleton-line" }
            }
        }
    }
}

#[component]
pub fn EmptyState(message: String) -> Element {
    rsx! {
        div { class: "empty-state",
            p { class: "empty-state-message", "{message}" }
        }
    }
}

#[component]
pub fn InlineError(error: ErrorInfo) -> Element {
    rsx! {
        div { class: "alert alert-error", role: "alert", "{error.message}" }
    }
}

/// Renders the shared pending / empty / error states and hands successful data
/// to `render`.
pub fn render_query<T>(
    status: &Query<T>,
    kind: ResourceKind,
    render: impl FnOnce(&T) -> Element,
) -> Element {
    let label = kind.label();
    match status {
        QueryStatus::Pending => rsx! {
            Loading { label: format!("Loading {label}...") }
        },
        QueryStatus::Empty => rsx! {
            EmptyState { message: format!("No {label} yet.") }
        },
        QueryStatus::Error(error) if error.is_not_found() => rsx! {
            EmptyState { message: "Not found." }
        },
        QueryStatus::Error(error) => rsx! {
            InlineError { error: error.clone() }
        },
        QueryStatus::Success(data) => render(data),
    }
}

use dioxus::prelude::*;

/// Heading, at most one primary action, and the page content.
///
/// The action button only reports the click; the page decides what it opens.
#[component]
pub fn PageShell(
    title: String,
    subtitle: Option<String>,
    action_label: Option<String>,
    on_action: Option<EventHandler<()>>,
    children: Element,
) -> Element {
    rsx! {
        div {
            div { class: "page-header",
                div { class: "page-header-content",
                    h1 { class: "page-title", "{title}" }
                    if let Some(subtitle) = subtitle {
                        p { class: "page-subtitle", "{subtitle}" }
                    }
                }
                if let Some(label) = action_label {
                    div { class: "page-header-actions",
                        button {
                            class: "btn btn-primary",
                            onclick: move |_| {
                                if let Some(handler) = on_action {
                                    handler.call(());
                                }
                            },
                            "{label}"
                        }
                    }
                }
            }
            {children}
        }
    }
}

/// Overlay dialog. While `busy` it cannot be dismissed.
#[component]
pub fn Modal(
    title: String,
    #[props(default)] small: bool,
    #[props(default)] busy: bool,
    on_close: EventHandler<()>,
    children: Element,
) -> Element {
    rsx! {
        div { class: "modal-overlay",
            onclick: move |_| if !busy { on_close.call(()) },
            div { class: if small { "modal modal-sm" } else { "modal" },
                onclick: move |e| e.stop_propagation(),
                div { class: "modal-header",
                    h2 { class: "modal-title", "{title}" }
                    if !busy {
                        button {
                            class: "modal-close",
                            onclick: move |_| on_close.call(()),
                            "×"
                        }
                    }
                }
                div { class: "modal-body", {children} }
            }
        }
    }
}

#[component]
pub fn ConfirmDelete(
    kind: String,
    name: String,
    deleting: bool,
    on_close: EventHandler<()>,
    on_confirm: EventHandler<()>,
) -> Element {
    rsx! {
        Modal {
            title: "Delete {kind}",
            small: true,
            busy: deleting,
            on_close,
            p { "Are you sure you want to delete " strong { "{name}" } "?" }
            p { class: "text-muted", "This action cannot be undone." }
            div { class: "modal-footer",
                button {
                    class: "btn btn-secondary",
                    disabled: deleting,
                    onclick: move |_| on_close.call(()),
                    "Cancel"
                }
                button {
                    class: "btn btn-danger",
                    disabled: deleting,
                    onclick: move |_| on_confirm.call(()),
                    if deleting { "Deleting..." } else { "Delete" }
                }
            }
        }
    }
}

use dioxus::prelude::*;

/// Structured error information for display
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ErrorInfo {
    pub message: String,
    pub code: Option<u16>,
    pub chain: Vec<String>,
    pub backtrace: Option<String>,
}

impl ErrorInfo {
    pub fn message(message: impl Into<String>) -> Self {
        let message = message.into();
        Self {
            chain: vec![message.clone()],
            message,
            ..Default::default()
        }
    }

    /// Parse a ServerFnError to extract structured error info
    pub fn from_server_error(err: &ServerFnError) -> Self {
        match err {
            ServerFnError::ServerError {
                message,
                code,
                details,
            } => {
                let chain = details
                    .as_ref()
                    .and_then(|d| d.get("chain"))
                    .and_then(|c| c.as_array())
                    .map(|arr| {
                        arr.iter()
                            .filter_map(|v| v.as_str().map(String::from))
                            .collect()
                    })
                    .unwrap_or_else(|| vec![message.clone()]);
                let backtrace = details
                    .as_ref()
                    .and_then(|d| d.get("backtrace"))
                    .and_then(|b| b.as_str())
                    .map(String::from);
                Self {
                    message: message.clone(),
                    code: Some(*code),
                    chain,
                    backtrace,
                }
            }
            other => Self::message(other.to_string()),
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.code == Some(404)
    }
}

/// Global error state - use `use_error()` to access
#[derive(Clone, Copy)]
pub struct ErrorState(Signal<Option<ErrorInfo>>);

impl ErrorState {
    pub fn set_server_error(&mut self, err: &ServerFnError) {
        tracing::warn!(%err, "request failed");
        self.0.set(Some(ErrorInfo::from_server_error(err)));
    }

    pub fn clear(&mut self) {
        self.0.set(None);
    }
}

/// Installs the global error state. Call once, in the layout.
pub fn use_error_provider() -> ErrorState {
    use_context_provider(|| ErrorState(Signal::new(None)))
}

/// Get the global error state for setting/clearing errors
pub fn use_error() -> ErrorState {
    use_context::<ErrorState>()
}

/// Filter backtrace to only show lines from this codebase
fn filter_backtrace(backtrace: &str) -> String {
    backtrace
        .lines()
        .filter(|line| line.contains("/marketdesk/") || line.contains("marketdesk::"))
        .collect::<Vec<_>>()
        .join("\n")
}

#[component]
pub fn ErrorBanner() -> Element {
    let mut error_state = use_error();
    let error = error_state.0.read();

    let Some(err) = error.as_ref() else {
        return rsx! {};
    };

    let has_chain = err.chain.len() > 1;
    let filtered_backtrace = err
        .backtrace
        .as_deref()
        .map(filter_backtrace)
        .filter(|bt| !bt.is_empty());

    rsx! {
        div { class: "error-banner",
            div { class: "error-banner-content",
                div { class: "error-banner-header",
                    span { class: "error-banner-message", "{err.message}" }
                    div { class: "error-banner-actions",
                        button {
                            class: "error-banner-close",
                            onclick: move |_| error_state.clear(),
                            "×"
                        }
                    }
                }
                if has_chain || filtered_backtrace.is_some() {
                    div { class: "error-details",
                        if has_chain {
                            div { class: "error-chain",
                                h4 { class: "error-section-title", "Error Chain" }
                                ol { class: "error-chain-list",
                                    for (i, msg) in err.chain.iter().enumerate() {
                                        li { key: "{i}", class: "error-chain-item", "{msg}" }
                                    }
                                }
                            }
                        }
                        if let Some(backtrace) = &filtered_backtrace {
                            div { class: "error-backtrace",
                                h4 { class: "error-section-title", "Backtrace" }
                                pre { class: "error-backtrace-content", "{backtrace}" }
                            }
                        }
                    }
                }
            }
        }
    }
}

/// Fallback shown by the layout's error boundary when a page fails to render.
#[component]
pub fn PageCrashed(message: String) -> Element {
    rsx! {
        div { class: "card page-crashed",
            div { class: "card-body",
                h2 { class: "card-title", "This page failed to load" }
                div { class: "alert alert-error", "{message}" }
                p { class: "text-muted", "Other pages are unaffected. Reload to try again." }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parses_chain_from_details() {
        let err = ServerFnError::ServerError {
            message: "shop not found".into(),
            code: 404,
            details: Some(json!({ "chain": ["shop not found", "GET shops/acme"] })),
        };
        let info = ErrorInfo::from_server_error(&err);
        assert!(info.is_not_found());
        assert_eq!(info.chain, vec!["shop not found", "GET shops/acme"]);
        assert_eq!(info.backtrace, None);
    }

    #[test]
    fn other_failures_keep_their_text() {
        let err = ServerFnError::Deserialization("expected a list".into());
        let info = ErrorInfo::from_server_error(&err);
        assert!(info.message.contains("expected a list"));
        assert_eq!(info.code, None);
        assert_eq!(info.chain, vec![info.message.clone()]);
    }

    #[test]
    fn keeps_only_our_frames() {
        let bt = "0: std::rt\n1: marketdesk::views::brands\n2: tokio::runtime";
        assert_eq!(filter_backtrace(bt), "1: marketdesk::views::brands");
    }
}

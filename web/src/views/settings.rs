use dioxus::prelude::*;
use types::{ResourceKind, Settings as StoreSettings};
use ui::{PageShell, SettingsForm, render_query, use_error, use_query, use_query_client};

#[component]
pub fn Settings() -> Element {
    rsx! {
        PageShell {
            title: "Settings",
            subtitle: "Marketplace-wide configuration.",
            SettingsPanel {}
        }
    }
}

#[component]
fn SettingsPanel() -> Element {
    let mut error_state = use_error();
    let mut queries = use_query_client();
    let settings = use_query(ResourceKind::Settings, api::get_settings);
    let mut saving = use_signal(|| false);
    let mut saved = use_signal(|| false);

    let save = move |settings: StoreSettings| {
        spawn(async move {
            saving.set(true);
            saved.set(false);
            match api::update_settings(settings).await {
                Ok(_) => {
                    saved.set(true);
                    queries.invalidate(ResourceKind::Settings);
                }
                Err(e) => error_state.set_server_error(&e),
            }
            saving.set(false);
        });
    };

    rsx! {
        if saved() {
            div { class: "alert alert-success", role: "status", "Settings saved." }
        }
        {render_query(&settings.read(), ResourceKind::Settings, |current| rsx! {
            div { class: "card",
                div { class: "card-body",
                    SettingsForm {
                        data: Some(current.clone()),
                        is_loading: saving(),
                        on_submit: save,
                    }
                }
            }
        })}
    }
}

use dioxus::prelude::*;

mod views;

use ui::{ErrorBanner, PageCrashed, use_error_provider, use_query_client_provider};
use views::{
    Brands, Categories, Collections, Coupons, Dashboard, OrderView, Orders, ProductView, Products,
    Settings, ShopView, Shops,
};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(AdminLayout)]
        #[route("/")]
        Dashboard {},
        #[route("/brands")]
        Brands {},
        #[route("/categories")]
        Categories {},
        #[route("/collections")]
        Collections {},
        #[route("/products")]
        Products {},
        #[route("/products/:id")]
        ProductDetail { id: String },
        #[route("/orders")]
        Orders {},
        #[route("/orders/:id")]
        OrderDetail { id: String },
        #[route("/shops")]
        Shops {},
        #[route("/shops/:slug")]
        ShopDetail { slug: String },
        #[route("/coupons")]
        Coupons {},
        #[route("/settings")]
        Settings {},
}

#[component]
fn ProductDetail(id: String) -> Element {
    rsx! { ProductView { id } }
}

#[component]
fn OrderDetail(id: String) -> Element {
    rsx! { OrderView { id } }
}

#[component]
fn ShopDetail(slug: String) -> Element {
    rsx! { ShopView { slug } }
}

fn main() {
    #[cfg(feature = "server")]
    {
        server::init_tracing();
        dioxus::serve(|| async move {
            let routes = server::init().map_err(types::Error::into_inner)?;

            Ok(dioxus::server::router(App).merge(routes))
        });
    }

    #[cfg(all(feature = "web", not(feature = "server")))]
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        document::Title { "Marketdesk" }
        document::Link { rel: "icon", href: asset!("/assets/favicon.svg") }
        document::Link { rel: "stylesheet", href: asset!("/assets/main.css") }

        Router::<Route> {}
    }
}

/// Sidebar section a route belongs to. Detail pages highlight their list.
fn section(route: &Route) -> Route {
    match route {
        Route::ProductDetail { .. } => Route::Products {},
        Route::OrderDetail { .. } => Route::Orders {},
        Route::ShopDetail { .. } => Route::Shops {},
        other => other.clone(),
    }
}

#[component]
fn NavLink(to: Route, children: Element) -> Element {
    let current_route: Route = use_route();
    let is_active = section(&current_route) == to;

    rsx! {
        Link {
            to,
            class: if is_active { "active" },
            {children}
        }
    }
}

#[component]
fn AdminLayout() -> Element {
    use_error_provider();
    use_query_client_provider();

    rsx! {
        div { class: "app-layout",
            aside { class: "sidebar",
                div { class: "sidebar-header",
                    span { class: "sidebar-logo", "Marketdesk" }
                }
                nav { class: "sidebar-nav",
                    NavLink { to: Route::Dashboard {}, "Dashboard" }
                    NavLink { to: Route::Orders {}, "Orders" }
                    NavLink { to: Route::Products {}, "Products" }
                    NavLink { to: Route::Shops {}, "Shops" }
                    span { class: "sidebar-section", "Catalog" }
                    NavLink { to: Route::Brands {}, "Brands" }
                    NavLink { to: Route::Categories {}, "Categories" }
                    NavLink { to: Route::Collections {}, "Collections" }
                    span { class: "sidebar-section", "Marketing" }
                    NavLink { to: Route::Coupons {}, "Coupons" }
                    span { class: "sidebar-section", "Store" }
                    NavLink { to: Route::Settings {}, "Settings" }
                }
            }
            main { class: "main-content",
                ErrorBanner {}
                ErrorBoundary {
                    handle_error: |errors: ErrorContext| {
                        let message = errors
                            .error()
                            .map(|e| e.to_string())
                            .unwrap_or_else(|| "Something went wrong.".to_string());
                        tracing::error!(%message, "page failed to render");
                        rsx! { PageCrashed { message } }
                    },
                    Outlet::<Route> {}
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detail_routes_highlight_their_list() {
        assert_eq!(section(&Route::ShopDetail { slug: "acme".into() }), Route::Shops {});
        assert_eq!(section(&Route::OrderDetail { id: "o1".into() }), Route::Orders {});
        assert_eq!(section(&Route::Coupons {}), Route::Coupons {});
    }

    #[test]
    fn routes_parse_from_paths() {
        let route: Route = "/shops/acme".parse().unwrap();
        assert_eq!(route, Route::ShopDetail { slug: "acme".into() });
        let route: Route = "/products/p1".parse().unwrap();
        assert_eq!(route, Route::ProductDetail { id: "p1".into() });
    }
}

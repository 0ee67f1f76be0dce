use dioxus::prelude::*;
use jiff::{Timestamp, tz::TimeZone};
use types::{DialogMode, ResourceKind};
use ui::use_query;

mod brands;
pub use brands::Brands;

mod categories;
pub use categories::Categories;

mod collections;
pub use collections::Collections;

mod coupons;
pub use coupons::Coupons;

mod dashboard;
pub use dashboard::Dashboard;

mod orders;
pub use orders::{OrderView, Orders};

mod products;
pub use products::{ProductView, Products};

mod settings;
pub use settings::Settings;

mod shops;
pub use shops::{ShopView, Shops};

fn dialog_title<T>(mode: &DialogMode<T>, noun: &str) -> String {
    match mode {
        DialogMode::Edit(_) => format!("Edit {noun}"),
        _ => format!("Add {noun}"),
    }
}

fn format_date(timestamp: Timestamp) -> String {
    timestamp
        .to_zoned(TimeZone::UTC)
        .strftime("%b %d, %Y")
        .to_string()
}

/// The marketplace currency, falling back to the default until settings load.
fn use_currency() -> Memo<String> {
    let settings = use_query(ResourceKind::Settings, api::get_settings);
    use_memo(move || {
        settings
            .read()
            .data()
            .map(|s| s.currency.clone())
            .unwrap_or_else(|| types::Settings::default().currency)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use types::Brand;

    #[test]
    fn titles_follow_the_dialog() {
        assert_eq!(dialog_title(&DialogMode::<Brand>::Add, "brand"), "Add brand");
        let brand = Brand {
            id: "b1".into(),
            name: "Acme".into(),
            slug: "acme".into(),
            logo_url: None,
        };
        assert_eq!(dialog_title(&DialogMode::Edit(brand), "brand"), "Edit brand");
    }

    #[test]
    fn dates_are_shown_in_utc() {
        let ts: Timestamp = "2025-03-01T23:30:00Z".parse().unwrap();
        assert_eq!(format_date(ts), "Mar 01, 2025");
    }
}

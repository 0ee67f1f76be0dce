mod catalog;
mod coupon;
mod dashboard;
mod dialog;
mod error;
mod order;
mod query;
mod resource;
mod settings;
mod shop;
mod validation;

pub use catalog::{
    Brand, BrandInput, Category, CategoryInput, Collection, CollectionInput, Product, ProductInput,
};
pub use coupon::{Coupon, CouponInput, DiscountType};
pub use dashboard::{
    ChartPeriod, ChartPoint, DashboardStats, format_money, money_input, parse_money,
};
pub use dialog::DialogMode;
pub use error::{Error, Result, is_error_status};
pub use order::{Order, OrderLine, OrderStatus};
pub use query::QueryStatus;
pub use resource::{Emptiness, Resource, ResourceKind};
pub use settings::Settings;
pub use shop::{Shop, ShopInput};
pub use validation::{FieldErrors, Validate, is_slug, slugify};

#[doc(hidden)]
pub use anyhow::anyhow as internal_anyhow_dont_use;

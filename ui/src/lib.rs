//! Shared components for the admin front-end: the query layer, the page shell,
//! status placeholders, dashboard widgets and the resource forms.

mod dashboard;
mod error;
mod forms;
mod query;
mod shell;
mod status;

pub use dashboard::{Bar, CardValue, DashboardCard, IncomeChart, SalesChart, bar_layout};
pub use error::{ErrorBanner, ErrorInfo, ErrorState, PageCrashed, use_error, use_error_provider};
pub use forms::{
    BrandForm, CategoryForm, CollectionForm, CouponForm, OrderStatusControl, ProductForm,
    SettingsForm, ShopForm,
};
pub use query::{Query, QueryClient, use_query, use_query_client, use_query_client_provider};
pub use shell::{ConfirmDelete, Modal, PageShell};
pub use status::{EmptyState, InlineError, Loading, Skeleton, render_query};

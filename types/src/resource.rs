use serde::{Deserialize, Serialize};

/// The kinds of records the admin screens manage.
///
/// Used as the cache key component of the query layer and to build backend
/// paths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ResourceKind {
    Brand,
    Category,
    Collection,
    Coupon,
    Shop,
    Product,
    Order,
    Settings,
    Dashboard,
}

impl ResourceKind {
    /// Collection path on the marketplace backend.
    pub fn path(self) -> &'static str {
        match self {
            Self::Brand => "brands",
            Self::Category => "categories",
            Self::Collection => "collections",
            Self::Coupon => "coupons",
            Self::Shop => "shops",
            Self::Product => "products",
            Self::Order => "orders",
            Self::Settings => "settings",
            Self::Dashboard => "dashboard",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Dashboard => "metrics",
            other => other.path(),
        }
    }
}

/// A backend-owned record with an identifier.
pub trait Resource {
    const KIND: ResourceKind;

    fn id(&self) -> &str;
}

/// Decides whether a settled query is `Empty` rather than `Success`.
pub trait Emptiness {
    fn is_empty(&self) -> bool;
}

impl<T> Emptiness for Vec<T> {
    fn is_empty(&self) -> bool {
        Vec::is_empty(self)
    }
}

impl<T> Emptiness for Option<T> {
    fn is_empty(&self) -> bool {
        self.is_none()
    }
}

macro_rules! never_empty {
    ($($ty:ty),* $(,)?) => {
        $(impl $crate::Emptiness for $ty {
            fn is_empty(&self) -> bool {
                false
            }
        })*
    };
}

pub(crate) use never_empty;

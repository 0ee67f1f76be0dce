use serde::{Deserialize, Serialize};

use crate::{FieldErrors, Resource, ResourceKind, Validate, resource::never_empty};

/// A vendor storefront on the marketplace. Routed by `slug`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Shop {
    pub id: String,
    pub name: String,
    pub slug: String,
    pub owner_email: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub active: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShopInput {
    pub name: String,
    pub slug: String,
    pub owner_email: String,
    pub description: Option<String>,
    pub active: bool,
}

impl From<&Shop> for ShopInput {
    fn from(shop: &Shop) -> Self {
        Self {
            name: shop.name.clone(),
            slug: shop.slug.clone(),
            owner_email: shop.owner_email.clone(),
            description: shop.description.clone(),
            active: shop.active,
        }
    }
}

impl Validate for ShopInput {
    fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();
        errors.required("name", &self.name);
        errors.slug("slug", &self.slug);
        errors.email("owner_email", &self.owner_email);
        errors.into_result()
    }
}

impl Resource for Shop {
    const KIND: ResourceKind = ResourceKind::Shop;

    fn id(&self) -> &str {
        &self.id
    }
}

never_empty!(Shop);

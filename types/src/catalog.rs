use serde::{Deserialize, Serialize};

use crate::{FieldErrors, Resource, ResourceKind, Validate, resource::never_empty};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Brand {
    pub id: String,
    pub name: String,
    pub slug: String,
    #[serde(default)]
    pub logo_url: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrandInput {
    pub name: String,
    pub slug: String,
    pub logo_url: Option<String>,
}

impl From<&Brand> for BrandInput {
    fn from(brand: &Brand) -> Self {
        Self {
            name: brand.name.clone(),
            slug: brand.slug.clone(),
            logo_url: brand.logo_url.clone(),
        }
    }
}

impl Validate for BrandInput {
    fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();
        errors.required("name", &self.name);
        errors.slug("slug", &self.slug);
        if let Some(url) = &self.logo_url
            && !(url.starts_with("https://") || url.starts_with("http://"))
        {
            errors.add("logo_url", "Logo must be an http(s) URL");
        }
        errors.into_result()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    pub name: String,
    pub slug: String,
    #[serde(default)]
    pub parent_id: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryInput {
    pub name: String,
    pub slug: String,
    pub parent_id: Option<String>,
    pub description: Option<String>,
}

impl From<&Category> for CategoryInput {
    fn from(category: &Category) -> Self {
        Self {
            name: category.name.clone(),
            slug: category.slug.clone(),
            parent_id: category.parent_id.clone(),
            description: category.description.clone(),
        }
    }
}

impl Validate for CategoryInput {
    fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();
        errors.required("name", &self.name);
        errors.slug("slug", &self.slug);
        errors.into_result()
    }
}

impl CategoryInput {
    /// A category may not be its own parent.
    pub fn validate_for(&self, id: Option<&str>) -> Result<(), FieldErrors> {
        let mut errors = self.validate().err().unwrap_or_default();
        if id.is_some() && self.parent_id.as_deref() == id {
            errors.add("parent_id", "A category cannot be its own parent");
        }
        errors.into_result()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Collection {
    pub id: String,
    pub name: String,
    pub slug: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub product_count: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollectionInput {
    pub name: String,
    pub slug: String,
    pub description: Option<String>,
}

impl From<&Collection> for CollectionInput {
    fn from(collection: &Collection) -> Self {
        Self {
            name: collection.name.clone(),
            slug: collection.slug.clone(),
            description: collection.description.clone(),
        }
    }
}

impl Validate for CollectionInput {
    fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();
        errors.required("name", &self.name);
        errors.slug("slug", &self.slug);
        errors.into_result()
    }
}

/// Prices are kept in minor currency units.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    pub name: String,
    pub slug: String,
    pub price: i64,
    pub stock: i64,
    #[serde(default)]
    pub brand_id: Option<String>,
    #[serde(default)]
    pub category_id: Option<String>,
    #[serde(default)]
    pub shop_id: Option<String>,
    #[serde(default)]
    pub published: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductInput {
    pub name: String,
    pub slug: String,
    pub price: i64,
    pub stock: i64,
    pub brand_id: Option<String>,
    pub category_id: Option<String>,
    pub shop_id: Option<String>,
    pub published: bool,
}

impl From<&Product> for ProductInput {
    fn from(product: &Product) -> Self {
        Self {
            name: product.name.clone(),
            slug: product.slug.clone(),
            price: product.price,
            stock: product.stock,
            brand_id: product.brand_id.clone(),
            category_id: product.category_id.clone(),
            shop_id: product.shop_id.clone(),
            published: product.published,
        }
    }
}

impl Validate for ProductInput {
    fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();
        errors.required("name", &self.name);
        errors.slug("slug", &self.slug);
        if self.price < 0 {
            errors.add("price", "Price cannot be negative");
        }
        if self.stock < 0 {
            errors.add("stock", "Stock cannot be negative");
        }
        if self.shop_id.is_none() {
            errors.add("shop_id", "Every product belongs to a shop");
        }
        errors.into_result()
    }
}

impl Resource for Brand {
    const KIND: ResourceKind = ResourceKind::Brand;

    fn id(&self) -> &str {
        &self.id
    }
}

impl Resource for Category {
    const KIND: ResourceKind = ResourceKind::Category;

    fn id(&self) -> &str {
        &self.id
    }
}

impl Resource for Collection {
    const KIND: ResourceKind = ResourceKind::Collection;

    fn id(&self) -> &str {
        &self.id
    }
}

impl Resource for Product {
    const KIND: ResourceKind = ResourceKind::Product;

    fn id(&self) -> &str {
        &self.id
    }
}

never_empty!(Brand, Category, Collection, Product);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_cannot_parent_itself() {
        let input = CategoryInput {
            name: "Shoes".into(),
            slug: "shoes".into(),
            parent_id: Some("cat-1".into()),
            description: None,
        };
        assert!(input.validate_for(None).is_ok());
        let errors = input.validate_for(Some("cat-1")).unwrap_err();
        assert!(errors.get("parent_id").is_some());
    }

    #[test]
    fn product_requires_a_shop_and_non_negative_numbers() {
        let input = ProductInput {
            name: "Mug".into(),
            slug: "mug".into(),
            price: -1,
            stock: -5,
            ..Default::default()
        };
        let errors = input.validate().unwrap_err();
        assert_eq!(
            errors.fields().collect::<Vec<_>>(),
            vec!["price", "shop_id", "stock"]
        );
    }

    #[test]
    fn product_deserializes_with_missing_optionals() {
        let product: Product = serde_json::from_str(
            r#"{"id":"p1","name":"Mug","slug":"mug","price":1250,"stock":3}"#,
        )
        .unwrap();
        assert_eq!(product.brand_id, None);
        assert!(!product.published);
    }
}

use dioxus::prelude::*;
use types::{
    Brand, BrandInput, Category, CategoryInput, ChartPeriod, ChartPoint, Collection,
    CollectionInput, Coupon, CouponInput, DashboardStats, Order, OrderStatus, Product,
    ProductInput, Settings, Shop, ShopInput,
};

// Brands

#[post("/api/brands")]
pub async fn list_brands() -> ServerFnResult<Vec<Brand>> {
    Ok(server::backend()?.list().await?)
}

#[post("/api/brands/create")]
pub async fn create_brand(input: BrandInput) -> ServerFnResult<Brand> {
    Ok(server::backend()?.create(&input).await?)
}

#[post("/api/brands/update")]
pub async fn update_brand(id: String, input: BrandInput) -> ServerFnResult<Brand> {
    Ok(server::backend()?.update(&id, &input).await?)
}

#[post("/api/brands/delete")]
pub async fn delete_brand(id: String) -> ServerFnResult<()> {
    Ok(server::backend()?.delete::<Brand>(&id).await?)
}

// Categories

#[post("/api/categories")]
pub async fn list_categories() -> ServerFnResult<Vec<Category>> {
    Ok(server::backend()?.list().await?)
}

#[post("/api/categories/create")]
pub async fn create_category(input: CategoryInput) -> ServerFnResult<Category> {
    Ok(server::backend()?.create(&input).await?)
}

#[post("/api/categories/update")]
pub async fn update_category(id: String, input: CategoryInput) -> ServerFnResult<Category> {
    Ok(server::backend()?.update(&id, &input).await?)
}

#[post("/api/categories/delete")]
pub async fn delete_category(id: String) -> ServerFnResult<()> {
    Ok(server::backend()?.delete::<Category>(&id).await?)
}

// Collections

#[post("/api/collections")]
pub async fn list_collections() -> ServerFnResult<Vec<Collection>> {
    Ok(server::backend()?.list().await?)
}

#[post("/api/collections/create")]
pub async fn create_collection(input: CollectionInput) -> ServerFnResult<Collection> {
    Ok(server::backend()?.create(&input).await?)
}

#[post("/api/collections/update")]
pub async fn update_collection(id: String, input: CollectionInput) -> ServerFnResult<Collection> {
    Ok(server::backend()?.update(&id, &input).await?)
}

#[post("/api/collections/delete")]
pub async fn delete_collection(id: String) -> ServerFnResult<()> {
    Ok(server::backend()?.delete::<Collection>(&id).await?)
}

// Coupons

#[post("/api/coupons")]
pub async fn list_coupons() -> ServerFnResult<Vec<Coupon>> {
    Ok(server::backend()?.list().await?)
}

#[post("/api/coupons/create")]
pub async fn create_coupon(input: CouponInput) -> ServerFnResult<Coupon> {
    Ok(server::backend()?.create(&input).await?)
}

#[post("/api/coupons/update")]
pub async fn update_coupon(id: String, input: CouponInput) -> ServerFnResult<Coupon> {
    Ok(server::backend()?.update(&id, &input).await?)
}

#[post("/api/coupons/delete")]
pub async fn delete_coupon(id: String) -> ServerFnResult<()> {
    Ok(server::backend()?.delete::<Coupon>(&id).await?)
}

// Shops

#[post("/api/shops")]
pub async fn list_shops() -> ServerFnResult<Vec<Shop>> {
    Ok(server::backend()?.list().await?)
}

#[post("/api/shops/get")]
pub async fn get_shop(slug: String) -> ServerFnResult<Shop> {
    Ok(server::backend()?.get(&slug).await?)
}

#[post("/api/shops/create")]
pub async fn create_shop(input: ShopInput) -> ServerFnResult<Shop> {
    Ok(server::backend()?.create(&input).await?)
}

#[post("/api/shops/update")]
pub async fn update_shop(id: String, input: ShopInput) -> ServerFnResult<Shop> {
    Ok(server::backend()?.update(&id, &input).await?)
}

#[post("/api/shops/delete")]
pub async fn delete_shop(id: String) -> ServerFnResult<()> {
    Ok(server::backend()?.delete::<Shop>(&id).await?)
}

// Products

#[post("/api/products")]
pub async fn list_products() -> ServerFnResult<Vec<Product>> {
    Ok(server::backend()?.list().await?)
}

#[post("/api/shops/products")]
pub async fn list_shop_products(shop_id: String) -> ServerFnResult<Vec<Product>> {
    Ok(server::backend()?.shop_products(&shop_id).await?)
}

#[post("/api/products/get")]
pub async fn get_product(id: String) -> ServerFnResult<Product> {
    Ok(server::backend()?.get(&id).await?)
}

#[post("/api/products/create")]
pub async fn create_product(input: ProductInput) -> ServerFnResult<Product> {
    Ok(server::backend()?.create(&input).await?)
}

#[post("/api/products/update")]
pub async fn update_product(id: String, input: ProductInput) -> ServerFnResult<Product> {
    Ok(server::backend()?.update(&id, &input).await?)
}

#[post("/api/products/delete")]
pub async fn delete_product(id: String) -> ServerFnResult<()> {
    Ok(server::backend()?.delete::<Product>(&id).await?)
}

// Orders

#[post("/api/orders")]
pub async fn list_orders() -> ServerFnResult<Vec<Order>> {
    Ok(server::backend()?.list().await?)
}

#[post("/api/orders/get")]
pub async fn get_order(id: String) -> ServerFnResult<Order> {
    Ok(server::backend()?.get(&id).await?)
}

#[post("/api/orders/status")]
pub async fn update_order_status(id: String, status: OrderStatus) -> ServerFnResult<Order> {
    Ok(server::backend()?.update_order_status(&id, status).await?)
}

// Settings

#[post("/api/settings")]
pub async fn get_settings() -> ServerFnResult<Settings> {
    Ok(server::backend()?.settings().await?)
}

#[post("/api/settings/update")]
pub async fn update_settings(settings: Settings) -> ServerFnResult<Settings> {
    Ok(server::backend()?.update_settings(&settings).await?)
}

// Dashboard

#[post("/api/dashboard/stats")]
pub async fn get_dashboard_stats() -> ServerFnResult<DashboardStats> {
    Ok(server::backend()?.dashboard_stats().await?)
}

#[post("/api/dashboard/income")]
pub async fn get_income_series(period: ChartPeriod) -> ServerFnResult<Vec<ChartPoint>> {
    Ok(server::backend()?.dashboard_series("income", period).await?)
}

#[post("/api/dashboard/sales")]
pub async fn get_sales_series(period: ChartPeriod) -> ServerFnResult<Vec<ChartPoint>> {
    Ok(server::backend()?.dashboard_series("sales", period).await?)
}

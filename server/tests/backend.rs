use std::time::Duration;

use secrecy::SecretString;
use serde_json::json;
use server::BackendClient;
use types::{Brand, ChartPeriod, Coupon, OrderStatus, Shop};
use url::Url;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{body_json, header, header_exists, method, path, query_param},
};

async fn setup() -> (MockServer, BackendClient) {
    let mock = MockServer::start().await;
    let base_url = Url::parse(&format!("{}/v1/", mock.uri())).unwrap();
    let client = BackendClient::new(
        base_url,
        SecretString::from("test-token".to_string()),
        Duration::from_secs(5),
    )
    .unwrap();
    (mock, client)
}

#[tokio::test]
async fn list_unwraps_the_data_envelope() {
    let (mock, client) = setup().await;
    Mock::given(method("GET"))
        .and(path("/v1/brands"))
        .and(header("authorization", "Bearer test-token"))
        .and(header_exists("x-request-id"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [{ "id": "b1", "name": "Acme", "slug": "acme" }],
            "error": null,
        })))
        .expect(1)
        .mount(&mock)
        .await;

    let brands = client.list::<Brand>().await.unwrap();

    assert_eq!(brands.len(), 1);
    assert_eq!(brands[0].name, "Acme");
    assert_eq!(brands[0].logo_url, None);
}

#[tokio::test]
async fn error_envelope_keeps_backend_message_and_code() {
    let (mock, client) = setup().await;
    Mock::given(method("GET"))
        .and(path("/v1/shops/missing"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "data": null,
            "error": { "message": "shop not found", "code": 404 },
        })))
        .mount(&mock)
        .await;

    let error = client.get::<Shop>("missing").await.unwrap_err();

    assert_eq!(error.to_string(), "shop not found");
    assert_eq!(error.status(), Some(404));
}

#[tokio::test]
async fn error_in_a_200_envelope_is_still_an_error() {
    let (mock, client) = setup().await;
    Mock::given(method("GET"))
        .and(path("/v1/coupons"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "error": { "message": "quota exceeded" },
        })))
        .mount(&mock)
        .await;

    let error = client.list::<Coupon>().await.unwrap_err();

    assert_eq!(error.to_string(), "quota exceeded");
    assert_eq!(error.status(), Some(502));
    assert_eq!(error.http_status(), 502);
}

#[tokio::test]
async fn success_code_inside_an_error_envelope_is_replaced() {
    let (mock, client) = setup().await;
    Mock::given(method("GET"))
        .and(path("/v1/coupons"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "error": { "message": "quota exceeded", "code": 200 },
        })))
        .mount(&mock)
        .await;

    let error = client.list::<Coupon>().await.unwrap_err();

    assert_eq!(error.to_string(), "quota exceeded");
    assert_eq!(error.status(), Some(502));
}

#[tokio::test]
async fn plain_http_failure_carries_the_status() {
    let (mock, client) = setup().await;
    Mock::given(method("GET"))
        .and(path("/v1/brands"))
        .respond_with(ResponseTemplate::new(502).set_body_string("Bad Gateway"))
        .mount(&mock)
        .await;

    let error = client.list::<Brand>().await.unwrap_err();

    assert_eq!(error.status(), Some(502));
}

#[tokio::test]
async fn missing_data_is_an_error_not_a_panic() {
    let (mock, client) = setup().await;
    Mock::given(method("GET"))
        .and(path("/v1/settings"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .mount(&mock)
        .await;

    let error = client.settings().await.unwrap_err();

    assert!(error.to_string().contains("neither data nor error"));
}

#[tokio::test]
async fn delete_accepts_null_data() {
    let (mock, client) = setup().await;
    Mock::given(method("DELETE"))
        .and(path("/v1/brands/b1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "data": null })))
        .expect(1)
        .mount(&mock)
        .await;

    client.delete::<Brand>("b1").await.unwrap();
}

#[tokio::test]
async fn create_posts_the_input_as_json() {
    let (mock, client) = setup().await;
    let input = types::BrandInput {
        name: "Acme".into(),
        slug: "acme".into(),
        logo_url: None,
    };
    Mock::given(method("POST"))
        .and(path("/v1/brands"))
        .and(body_json(json!({ "name": "Acme", "slug": "acme", "logo_url": null })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "data": { "id": "b9", "name": "Acme", "slug": "acme" },
        })))
        .expect(1)
        .mount(&mock)
        .await;

    let brand: Brand = client.create(&input).await.unwrap();

    assert_eq!(brand.id, "b9");
}

#[tokio::test]
async fn order_status_is_patched() {
    let (mock, client) = setup().await;
    Mock::given(method("PATCH"))
        .and(path("/v1/orders/o1/status"))
        .and(body_json(json!({ "status": "shipped" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {
                "id": "o1",
                "number": "1001",
                "customer_email": "buyer@example.com",
                "status": "shipped",
                "total": 2500,
                "created_at": "2024-03-01T12:00:00Z",
            },
        })))
        .expect(1)
        .mount(&mock)
        .await;

    let order = client
        .update_order_status("o1", OrderStatus::Shipped)
        .await
        .unwrap();

    assert_eq!(order.status, OrderStatus::Shipped);
    assert!(order.lines.is_empty());
}

#[tokio::test]
async fn dashboard_series_passes_the_period() {
    let (mock, client) = setup().await;
    Mock::given(method("GET"))
        .and(path("/v1/dashboard/income"))
        .and(query_param("period", "daily"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [{ "name": "Mon", "total": 120.5 }, { "name": "Tue", "total": 0.0 }],
        })))
        .expect(1)
        .mount(&mock)
        .await;

    let points = client
        .dashboard_series("income", ChartPeriod::Daily)
        .await
        .unwrap();

    assert_eq!(points.len(), 2);
    assert_eq!(points[0].name, "Mon");
}

#[tokio::test]
async fn shop_products_are_filtered_by_the_backend() {
    let (mock, client) = setup().await;
    Mock::given(method("GET"))
        .and(path("/v1/products"))
        .and(query_param("shop_id", "s1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [{
                "id": "p1", "name": "Lamp", "slug": "lamp", "price": 1999,
                "stock": 4, "shop_id": "s1", "published": true,
            }],
        })))
        .expect(1)
        .mount(&mock)
        .await;

    let products = client.shop_products("s1").await.unwrap();

    assert_eq!(products.len(), 1);
    assert_eq!(products[0].shop_id.as_deref(), Some("s1"));
}

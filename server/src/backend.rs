use std::time::Duration;

use reqwest::{Client, Method, RequestBuilder};
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize, de::DeserializeOwned, de::IgnoredAny};
use serde_json::json;
use tracing::Instrument;
use types::{
    ChartPeriod, ChartPoint, DashboardStats, Error, Order, OrderStatus, Product, Resource,
    ResourceKind, Result, Settings, err, is_error_status,
};
use url::Url;
use uuid::Uuid;

use crate::Config;

/// Every backend reply is wrapped as `{ "data": ..., "error": ... }`.
#[derive(Debug, Deserialize)]
struct Envelope<T> {
    data: Option<T>,
    error: Option<ErrorBody>,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: String,
    #[serde(default)]
    code: Option<u16>,
}

trait ReqwestExt {
    async fn try_send<T: DeserializeOwned>(self) -> Result<T>;

    /// For endpoints that answer with `data: null` on success.
    async fn try_send_empty(self) -> Result<()>;
}

impl ReqwestExt for RequestBuilder {
    async fn try_send<T: DeserializeOwned>(self) -> Result<T> {
        envelope::<T>(self)
            .await?
            .ok_or_else(|| err!("backend response had neither data nor error"))
    }

    async fn try_send_empty(self) -> Result<()> {
        envelope::<IgnoredAny>(self).await.map(drop)
    }
}

async fn envelope<T: DeserializeOwned>(request: RequestBuilder) -> Result<Option<T>> {
    let response = request.send().await?;
    let status = response.status();
    let body = response.bytes().await?;

    let envelope: Envelope<T> = match serde_json::from_slice(&body) {
        Ok(envelope) => envelope,
        Err(error) if status.is_success() => {
            tracing::warn!(%status, %error, "unparseable backend response");
            return Err(Error::from(error).with_status(502));
        }
        Err(_) => {
            tracing::warn!(%status, "backend request failed");
            return Err(err!("backend request failed with {status}").with_status(status.as_u16()));
        }
    };

    if let Some(error) = envelope.error {
        let code = error
            .code
            .into_iter()
            .chain([status.as_u16()])
            .find(|code| is_error_status(*code))
            .unwrap_or(502);
        tracing::warn!(%status, code, message = %error.message, "backend returned an error");
        return Err(err!("{}", error.message).with_status(code));
    }

    if !status.is_success() {
        tracing::warn!(%status, "backend request failed");
        return Err(err!("backend request failed with {status}").with_status(status.as_u16()));
    }

    tracing::debug!(%status, "backend request succeeded");
    Ok(envelope.data)
}

#[derive(Clone)]
pub struct BackendClient {
    client: Client,
    base_url: Url,
    token: SecretString,
}

impl BackendClient {
    pub fn new(base_url: Url, token: SecretString, timeout: Duration) -> Result<Self> {
        if base_url.cannot_be_a_base() {
            return Err(err!("backend url '{base_url}' cannot be used as a base"));
        }

        Ok(Self {
            client: Client::builder().timeout(timeout).build()?,
            base_url,
            token,
        })
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        Self::new(
            config.backend_url.clone(),
            config.backend_token.clone(),
            Duration::from_secs(config.request_timeout_secs),
        )
    }

    fn url(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    fn request(&self, method: Method, url: Url) -> RequestBuilder {
        let request_id = Uuid::new_v4();
        tracing::debug!(%method, %url, %request_id, "backend request");

        self.client
            .request(method, url)
            .bearer_auth(self.token.expose_secret())
            .header("x-request-id", request_id.to_string())
    }

    async fn send<T: DeserializeOwned>(
        &self,
        method: Method,
        segments: &[&str],
        body: Option<serde_json::Value>,
    ) -> Result<T> {
        let span = tracing::debug_span!("backend", %method, path = %segments.join("/"));
        let mut request = self.request(method, self.url(segments));
        if let Some(body) = body {
            request = request.json(&body);
        }
        request.try_send().instrument(span).await
    }

    pub async fn list<T: Resource + DeserializeOwned>(&self) -> Result<Vec<T>> {
        self.send(Method::GET, &[T::KIND.path()], None).await
    }

    /// Fetches one record by id, or by slug for resources routed that way.
    pub async fn get<T: Resource + DeserializeOwned>(&self, key: &str) -> Result<T> {
        self.send(Method::GET, &[T::KIND.path(), key], None).await
    }

    pub async fn create<T, I>(&self, input: &I) -> Result<T>
    where
        T: Resource + DeserializeOwned,
        I: Serialize,
    {
        let body = serde_json::to_value(input)?;
        self.send(Method::POST, &[T::KIND.path()], Some(body)).await
    }

    pub async fn update<T, I>(&self, id: &str, input: &I) -> Result<T>
    where
        T: Resource + DeserializeOwned,
        I: Serialize,
    {
        let body = serde_json::to_value(input)?;
        self.send(Method::PUT, &[T::KIND.path(), id], Some(body)).await
    }

    pub async fn delete<T: Resource>(&self, id: &str) -> Result<()> {
        let segments = [T::KIND.path(), id];
        let span = tracing::debug_span!("backend", method = "DELETE", path = %segments.join("/"));
        self.request(Method::DELETE, self.url(&segments))
            .try_send_empty()
            .instrument(span)
            .await
    }

    /// Products listed by one shop. Filtering happens on the backend.
    pub async fn shop_products(&self, shop_id: &str) -> Result<Vec<Product>> {
        let span = tracing::debug_span!("backend", method = "GET", path = "products", shop_id);
        let mut url = self.url(&[ResourceKind::Product.path()]);
        url.query_pairs_mut().append_pair("shop_id", shop_id);
        self.request(Method::GET, url)
            .try_send()
            .instrument(span)
            .await
    }

    pub async fn update_order_status(&self, id: &str, status: OrderStatus) -> Result<Order> {
        let body = json!({ "status": status });
        self.send(Method::PATCH, &["orders", id, "status"], Some(body))
            .await
    }

    pub async fn settings(&self) -> Result<Settings> {
        self.send(Method::GET, &["settings"], None).await
    }

    pub async fn update_settings(&self, settings: &Settings) -> Result<Settings> {
        let body = serde_json::to_value(settings)?;
        self.send(Method::PUT, &["settings"], Some(body)).await
    }

    pub async fn dashboard_stats(&self) -> Result<DashboardStats> {
        self.send(Method::GET, &["dashboard", "stats"], None).await
    }

    /// `series` is `income` or `sales`; bucketing is done by the backend.
    pub async fn dashboard_series(
        &self,
        series: &str,
        period: ChartPeriod,
    ) -> Result<Vec<ChartPoint>> {
        let span = tracing::debug_span!("backend", method = "GET", path = %format!("dashboard/{series}"));
        let mut url = self.url(&["dashboard", series]);
        url.query_pairs_mut().append_pair("period", period.as_str());
        self.request(Method::GET, url)
            .try_send()
            .instrument(span)
            .await
    }
}

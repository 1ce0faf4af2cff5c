use crate::domain::model::{OrderResponse, OrderSummary, PlaceOrderRequest};
use crate::utils::error::{AppError, Result};
use reqwest::{Client, Method};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::Duration;

pub const CSRF_HEADER: &str = "X-CSRFToken";

/// JSON client for the ordering backend.
///
/// Every request carries `Content-Type: application/json` and, when a token
/// is configured, the CSRF header. A non-2xx status is reported as
/// [`AppError::HttpStatus`]; nothing is retried.
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
    csrf_token: Option<String>,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>, csrf_token: Option<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            csrf_token: csrf_token.filter(|t| !t.is_empty()),
        }
    }

    pub fn with_timeout(
        base_url: impl Into<String>,
        csrf_token: Option<String>,
        timeout: Duration,
    ) -> Result<Self> {
        Ok(Self {
            client: Client::builder().timeout(timeout).build()?,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            csrf_token: csrf_token.filter(|t| !t.is_empty()),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        if path.starts_with("http://") || path.starts_with("https://") {
            path.to_string()
        } else if path.starts_with('/') {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}/{}", self.base_url, path)
        }
    }

    pub async fn request<B, T>(&self, method: Method, path: &str, body: Option<&B>) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = self.url(path);
        tracing::debug!("Making API request: {} {}", method, url);

        let result = self.send(method.clone(), &url, body).await;
        if let Err(e) = &result {
            tracing::error!("API request failed: {} {}: {}", method, url, e);
        }
        result
    }

    async fn send<B, T>(&self, method: Method, url: &str, body: Option<&B>) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let mut builder = self
            .client
            .request(method, url)
            .header(reqwest::header::CONTENT_TYPE, "application/json");

        if let Some(token) = &self.csrf_token {
            builder = builder.header(CSRF_HEADER, token);
        }
        if let Some(body) = body {
            builder = builder.body(serde_json::to_vec(body)?);
        }

        let response = builder.send().await?;
        let status = response.status();
        tracing::debug!("API response status: {}", status);

        if !status.is_success() {
            return Err(AppError::HttpStatus {
                status: status.as_u16(),
            });
        }

        Ok(response.json::<T>().await?)
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        self.request::<(), T>(Method::GET, path, None).await
    }

    pub async fn post<B, T>(&self, path: &str, data: &B) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.request(Method::POST, path, Some(data)).await
    }

    pub async fn put<B, T>(&self, path: &str, data: &B) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.request(Method::PUT, path, Some(data)).await
    }

    pub async fn delete<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        self.request::<(), T>(Method::DELETE, path, None).await
    }

    pub async fn place_order(&self, order: &PlaceOrderRequest) -> Result<OrderResponse> {
        if order.cart.is_empty() {
            return Err(AppError::ValidationError {
                message: "Cart is empty".to_string(),
            });
        }
        if order.address.trim().is_empty() {
            return Err(AppError::ValidationError {
                message: "Delivery address is required".to_string(),
            });
        }
        tracing::info!("Placing order with {} line(s)", order.cart.len());
        self.post("/place_order", order).await
    }

    pub async fn fetch_orders(&self) -> Result<Vec<OrderSummary>> {
        self.get("/api/orders").await
    }
}

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{header::HeaderMap, Method, StatusCode};
use url::Url;

use crate::error::TransportError;

/// Fully prepared request handed to a [`Transport`].
#[derive(Debug, Clone)]
pub struct ApiRequest {
    pub method: Method,
    pub url: Url,
    pub headers: HeaderMap,
    pub body: Option<Vec<u8>>,
}

impl ApiRequest {
    pub fn path(&self) -> &str {
        self.url.path()
    }

    pub fn query(&self) -> Option<&str> {
        self.url.query()
    }
}

/// Status and full body text of a completed exchange.
#[derive(Debug, Clone, PartialEq)]
pub struct RawResponse {
    pub status: StatusCode,
    pub body: String,
}

/// Executes a prepared request and returns the raw response.
///
/// Implemented by [`ReqwestTransport`] for real traffic; tests swap in their
/// own implementation through [`Client::with_transport`](crate::Client::with_transport).
#[async_trait]
pub trait Transport: Send + Sync {
    async fn send(&self, request: ApiRequest) -> Result<RawResponse, TransportError>;
}

#[derive(Debug, Clone, Default)]
pub struct ReqwestTransport {
    http: reqwest::Client,
}

impl ReqwestTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a transport whose requests fail once `timeout` elapses.
    pub fn with_timeout(timeout: Duration) -> Result<Self, TransportError> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self { http })
    }

    pub fn with_http_client(http: reqwest::Client) -> Self {
        Self { http }
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn send(&self, request: ApiRequest) -> Result<RawResponse, TransportError> {
        let mut builder = self
            .http
            .request(request.method, request.url)
            .headers(request.headers);

        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        let response = builder.send().await?;
        let status = response.status();
        let body = response.text().await?;

        Ok(RawResponse { status, body })
    }
}

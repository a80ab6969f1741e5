use std::{fmt, sync::Arc, time::Duration};

use reqwest::{
    header::{HeaderMap, HeaderName, HeaderValue, ACCEPT, AUTHORIZATION, CONTENT_TYPE},
    Method,
};
use secrecy::{ExposeSecret, Secret};
use serde::{de::DeserializeOwned, Serialize};
use url::Url;

use crate::config::Config;
use crate::error::{ApiError, Error, ErrorPayload, Result};
use crate::transport::{ApiRequest, RawResponse, ReqwestTransport, Transport};

/// How requests authenticate against the API.
#[derive(Debug, Clone)]
pub enum Credentials {
    ApiKey {
        header: HeaderName,
        key: Secret<String>,
    },
    Bearer(Secret<String>),
}

impl Credentials {
    /// API key sent in the `x-api-key` header.
    pub fn api_key(key: impl Into<String>) -> Self {
        Self::ApiKey {
            header: HeaderName::from_static("x-api-key"),
            key: Secret::new(key.into()),
        }
    }

    /// API key sent in a custom header.
    pub fn api_key_with_header(header: &str, key: impl Into<String>) -> Result<Self> {
        let header = HeaderName::from_bytes(header.as_bytes())
            .map_err(|_| Error::InvalidHeader(header.to_string()))?;

        Ok(Self::ApiKey {
            header,
            key: Secret::new(key.into()),
        })
    }

    pub fn bearer(token: impl Into<String>) -> Self {
        Self::Bearer(Secret::new(token.into()))
    }

    fn header(&self) -> Result<(HeaderName, HeaderValue)> {
        let (name, raw) = match self {
            Self::ApiKey { header, key } => (header.clone(), key.expose_secret().clone()),
            Self::Bearer(token) => (AUTHORIZATION, format!("Bearer {}", token.expose_secret())),
        };

        let mut value =
            HeaderValue::from_str(&raw).map_err(|_| Error::InvalidHeader(name.to_string()))?;
        value.set_sensitive(true);

        Ok((name, value))
    }
}

/// Client for the Liquidity card-issuing API.
///
/// Construct one per process and pass it around; clones share the same
/// transport. Every operation is a single request/response round trip with
/// no retries.
#[derive(Clone)]
pub struct Client {
    base_url: String,
    credentials: Credentials,
    transport: Arc<dyn Transport>,
}

impl fmt::Debug for Client {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Client")
            .field("base_url", &self.base_url)
            .field("credentials", &self.credentials)
            .finish_non_exhaustive()
    }
}

impl Client {
    pub fn new(base_url: impl Into<String>, credentials: Credentials) -> Self {
        Self {
            base_url: base_url.into(),
            credentials,
            transport: Arc::new(ReqwestTransport::new()),
        }
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        let transport = match config.timeout_secs {
            Some(secs) => ReqwestTransport::with_timeout(Duration::from_secs(secs))?,
            None => ReqwestTransport::new(),
        };

        Ok(Self::new(config.base_url.clone(), config.credentials()?).with_transport(transport))
    }

    /// Replaces the transport, typically with a test double.
    pub fn with_transport<T: Transport + 'static>(mut self, transport: T) -> Self {
        self.transport = Arc::new(transport);
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub(crate) async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        self.execute::<(), T>(Method::GET, path, None).await
    }

    pub(crate) async fn post<B, T>(&self, path: &str, body: &B) -> Result<T>
    where
        B: Serialize + ?Sized + Sync,
        T: DeserializeOwned,
    {
        self.execute(Method::POST, path, Some(body)).await
    }

    pub(crate) async fn patch<B, T>(&self, path: &str, body: &B) -> Result<T>
    where
        B: Serialize + ?Sized + Sync,
        T: DeserializeOwned,
    {
        self.execute(Method::PATCH, path, Some(body)).await
    }

    /// Sends one request and decodes the response into `T`.
    ///
    /// `path` is appended to the base URL and may carry a query string built
    /// with [`crate::query`]. 2xx bodies decode into `T`; anything else
    /// decodes into [`ApiError`], falling back to [`Error::Status`] when the
    /// error body is not the API's error envelope.
    #[tracing::instrument(skip(self, path, body), fields(path = strip_query(path)))]
    pub async fn execute<B, T>(&self, method: Method, path: &str, body: Option<&B>) -> Result<T>
    where
        B: Serialize + ?Sized + Sync,
        T: DeserializeOwned,
    {
        let request = self.build_request(method, path, body)?;

        tracing::debug!("Sending request");

        let response = self.transport.send(request).await?;

        tracing::debug!(status = %response.status, "Received response");

        decode_response(response)
    }

    fn build_request<B>(&self, method: Method, path: &str, body: Option<&B>) -> Result<ApiRequest>
    where
        B: Serialize + ?Sized,
    {
        let base = self.base_url.trim_end_matches('/');
        let url = Url::parse(&format!("{}{}", base, path))?;

        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        let (name, value) = self.credentials.header()?;
        headers.insert(name, value);

        let body = match body {
            Some(body) => Some(serde_json::to_vec(body).map_err(Error::Encode)?),
            None => None,
        };

        Ok(ApiRequest {
            method,
            url,
            headers,
            body,
        })
    }
}

/// Drops the query string, which carries user, card and transaction ids.
fn strip_query(path: &str) -> &str {
    path.split_once('?').map_or(path, |(path, _)| path)
}

fn decode_response<T: DeserializeOwned>(response: RawResponse) -> Result<T> {
    let RawResponse { status, body } = response;

    if status.is_success() {
        return match serde_json::from_str(&body) {
            Ok(value) => Ok(value),
            Err(source) => {
                tracing::error!(status = %status, error = %source, "Failed to decode response body");
                Err(Error::Decode { source, body })
            }
        };
    }

    match serde_json::from_str::<ErrorPayload>(&body) {
        Ok(payload) => {
            let error = ApiError::from_payload(status, payload);
            tracing::warn!(
                status = %status,
                message = %error.message,
                validation_errors = error.validation_errors.len(),
                "API returned an error"
            );
            Err(error.into())
        }
        Err(_) => {
            tracing::warn!(status = %status, "API returned an undecodable error body");
            Err(Error::Status { status, body })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Acknowledgement;
    use reqwest::StatusCode;

    fn client() -> Client {
        Client::new("https://sandbox.liquidity.test/", Credentials::api_key("key-123"))
    }

    #[test]
    fn test_build_request_joins_base_url_and_path() {
        let request = client()
            .build_request::<()>(Method::GET, "/card/v1?card=c1&trackingNumber=t1", None)
            .unwrap();

        assert_eq!(
            request.url.as_str(),
            "https://sandbox.liquidity.test/card/v1?card=c1&trackingNumber=t1"
        );
        assert_eq!(request.path(), "/card/v1");
        assert_eq!(request.query(), Some("card=c1&trackingNumber=t1"));
        assert!(request.body.is_none());
    }

    #[test]
    fn test_build_request_sets_json_and_auth_headers() {
        let request = client()
            .build_request(Method::PATCH, "/card/v1/freeze", Some(&serde_json::json!({"cardId": "c1"})))
            .unwrap();

        assert_eq!(request.headers[CONTENT_TYPE], "application/json");
        assert_eq!(request.headers[ACCEPT], "application/json");
        assert_eq!(request.headers["x-api-key"], "key-123");
        assert!(request.headers["x-api-key"].is_sensitive());
        assert_eq!(request.body.as_deref(), Some(&br#"{"cardId":"c1"}"#[..]));
    }

    #[test]
    fn test_bearer_credentials() {
        let client = Client::new("https://sandbox.liquidity.test", Credentials::bearer("tok"));
        let request = client
            .build_request::<()>(Method::GET, "/integrator/v1/float", None)
            .unwrap();

        assert_eq!(request.headers[AUTHORIZATION], "Bearer tok");
    }

    #[test]
    fn test_invalid_header_name_rejected() {
        let result = Credentials::api_key_with_header("bad header", "k");

        assert!(matches!(result, Err(Error::InvalidHeader(_))));
    }

    #[test]
    fn test_custom_api_key_header() {
        let credentials = Credentials::api_key_with_header("x-integrator-key", "key-9").unwrap();
        let client = Client::new("https://sandbox.liquidity.test", credentials);
        let request = client
            .build_request::<()>(Method::GET, "/integrator/v1/float", None)
            .unwrap();

        assert_eq!(request.headers["x-integrator-key"], "key-9");
        assert!(request.headers.get("x-api-key").is_none());
    }

    #[test]
    fn test_invalid_base_url_is_reported() {
        let client = Client::new("not a url", Credentials::api_key("k"));
        let result = client.build_request::<()>(Method::GET, "/card/v1", None);

        assert!(matches!(result, Err(Error::InvalidUrl(_))));
    }

    #[test]
    fn test_logged_path_has_no_identifiers() {
        assert_eq!(strip_query("/card/v1/user?user=b%40gmail.com"), "/card/v1/user");
        assert_eq!(strip_query("/card/v1?card=c1&trackingNumber=t1"), "/card/v1");
        assert_eq!(strip_query("/integrator/v1/floats"), "/integrator/v1/floats");
    }

    #[test]
    fn test_debug_hides_secrets() {
        let rendered = format!("{:?}", client());

        assert!(!rendered.contains("key-123"));
    }

    #[test]
    fn test_decode_success() {
        let ack: Acknowledgement = decode_response(RawResponse {
            status: StatusCode::OK,
            body: r#"{"message":"Ok"}"#.to_string(),
        })
        .unwrap();

        assert_eq!(ack.message, "Ok");
    }

    #[test]
    fn test_decode_failure_keeps_raw_body() {
        let result: Result<Acknowledgement> = decode_response(RawResponse {
            status: StatusCode::OK,
            body: "<html>gateway</html>".to_string(),
        });

        match result {
            Err(Error::Decode { body, .. }) => assert_eq!(body, "<html>gateway</html>"),
            other => panic!("expected decode error, got {:?}", other),
        }
    }

    #[test]
    fn test_error_envelope_becomes_api_error() {
        let result: Result<Acknowledgement> = decode_response(RawResponse {
            status: StatusCode::UNPROCESSABLE_ENTITY,
            body: r#"{"message":"Invalid body","validationError":[{"code":"too_small","path":["amount"],"message":"Must be positive"}]}"#.to_string(),
        });

        match result {
            Err(Error::Api(error)) => {
                assert_eq!(error.status, StatusCode::UNPROCESSABLE_ENTITY);
                assert_eq!(error.message, "Invalid body");
                assert_eq!(error.validation_errors[0].path, vec!["amount".to_string()]);
            }
            other => panic!("expected API error, got {:?}", other),
        }
    }

    #[test]
    fn test_undecodable_error_body_falls_back_to_status() {
        let result: Result<Acknowledgement> = decode_response(RawResponse {
            status: StatusCode::BAD_GATEWAY,
            body: "upstream timed out".to_string(),
        });

        match result {
            Err(Error::Status { status, body }) => {
                assert_eq!(status, StatusCode::BAD_GATEWAY);
                assert_eq!(body, "upstream timed out");
            }
            other => panic!("expected status error, got {:?}", other),
        }
    }
}

#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use liquidity::{ApiRequest, Client, Credentials, RawResponse, Transport, TransportError};
use reqwest::{Method, StatusCode};

pub const BASE_URL: &str = "https://sandbox.liquidity.test";

/// Transport double that records every request and replies with a fixed body.
#[derive(Clone)]
pub struct MockTransport {
    status: StatusCode,
    body: String,
    requests: Arc<Mutex<Vec<ApiRequest>>>,
}

impl MockTransport {
    pub fn new(status: u16, body: &str) -> Self {
        Self {
            status: StatusCode::from_u16(status).unwrap(),
            body: body.to_string(),
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn ok(body: &str) -> Self {
        Self::new(200, body)
    }

    pub fn requests(&self) -> Vec<ApiRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn last_request(&self) -> ApiRequest {
        self.requests()
            .pop()
            .expect("transport was never called")
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn send(&self, request: ApiRequest) -> Result<RawResponse, TransportError> {
        self.requests.lock().unwrap().push(request);
        Ok(RawResponse {
            status: self.status,
            body: self.body.clone(),
        })
    }
}

/// Transport double that fails every call as if the connection were refused.
#[derive(Clone, Default)]
pub struct FailingTransport {
    calls: Arc<AtomicUsize>,
}

impl FailingTransport {
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Transport for FailingTransport {
    async fn send(&self, _request: ApiRequest) -> Result<RawResponse, TransportError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Err(TransportError::Other("connection refused".to_string()))
    }
}

pub fn client_with<T: Transport + 'static>(transport: T) -> Client {
    Client::new(BASE_URL, Credentials::api_key("test-key")).with_transport(transport)
}

/// Asserts method, path and JSON headers of a recorded request.
pub fn assert_request(request: &ApiRequest, method: Method, path: &str) {
    assert_eq!(request.method, method);
    assert_eq!(request.path(), path);
    assert_eq!(request.headers["content-type"], "application/json");
    assert_eq!(request.headers["x-api-key"], "test-key");
}

pub fn body_json(request: &ApiRequest) -> serde_json::Value {
    serde_json::from_slice(request.body.as_deref().expect("request had no body")).unwrap()
}

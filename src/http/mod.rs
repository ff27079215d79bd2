//! # Authenticated HTTP
//!
//! [`HttpClient`] is the single way the storefront talks to the backend. For every request it:
//!
//! 1. reads the session fresh from the [`AuthProvider`] and adds `Authorization: Bearer …`
//!    when a token is present,
//! 2. sends JSON (`Content-Type: application/json`),
//! 3. on `401` clears the stored session, navigates to `/login` and returns
//!    [`HttpError::Unauthorized`] without retrying,
//! 4. on any other non-2xx status returns the response text as the error message, or
//!    `Request failed with status N` when the body is empty,
//! 5. hands back the 2xx body, decoded as JSON by [`HttpClient::request`] (an empty body
//!    decodes as JSON `null`) or as plain text by [`HttpClient::exchange`].

pub mod transport;

pub use transport::{HttpRequest, HttpResponse, Method, ReqwestTransport, Transport};

use crate::auth::{AuthProvider, Navigator, LOGIN_PATH};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, error, warn};

#[derive(Debug, Error)]
pub enum HttpError {
    #[error("Session expired, please sign in again")]
    Unauthorized,

    #[error("{message}")]
    Status { status: u16, message: String },

    #[error("Network error: {0}")]
    Transport(String),

    #[error("Network error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Invalid response: {0}")]
    Decode(#[from] serde_json::Error),
}

impl HttpError {
    /// Status code of a server-side rejection, if that is what this is.
    pub fn status(&self) -> Option<u16> {
        match self {
            HttpError::Unauthorized => Some(401),
            HttpError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

#[derive(Clone)]
pub struct HttpClient {
    base_url: String,
    transport: Arc<dyn Transport>,
    auth: Arc<dyn AuthProvider>,
    navigator: Arc<dyn Navigator>,
}

impl HttpClient {
    pub fn new(
        base_url: impl Into<String>,
        transport: Arc<dyn Transport>,
        auth: Arc<dyn AuthProvider>,
        navigator: Arc<dyn Navigator>,
    ) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            transport,
            auth,
            navigator,
        }
    }

    pub fn auth(&self) -> &Arc<dyn AuthProvider> {
        &self.auth
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, HttpError> {
        self.request(Method::Get, path, None).await
    }

    pub async fn post<B, T>(&self, path: &str, body: &B) -> Result<T, HttpError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let body = serde_json::to_string(body)?;
        self.request(Method::Post, path, Some(body)).await
    }

    pub async fn delete<T: DeserializeOwned>(&self, path: &str) -> Result<T, HttpError> {
        self.request(Method::Delete, path, None).await
    }

    /// Sends a request and decodes the JSON reply.
    pub async fn request<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: Option<String>,
    ) -> Result<T, HttpError> {
        let text = self.exchange(method, path, body).await?;
        let text = if text.trim().is_empty() { "null" } else { text.as_str() };
        Ok(serde_json::from_str(text)?)
    }

    /// Sends a request and returns the raw reply text. The cart mutation endpoints answer
    /// with a plain confirmation sentence rather than JSON.
    pub async fn exchange(
        &self,
        method: Method,
        path: &str,
        body: Option<String>,
    ) -> Result<String, HttpError> {
        let mut headers = vec![("Content-Type".to_string(), "application/json".to_string())];
        if let Some(token) = self.auth.current().token {
            headers.push(("Authorization".to_string(), format!("Bearer {token}")));
        }
        let request = HttpRequest {
            method,
            url: format!("{}{}", self.base_url, path),
            headers,
            body,
        };

        debug!(%method, path, "Sending request");
        let response = self.transport.send(request).await.map_err(|e| {
            error!(%method, path, error = %e, "API Error");
            e
        })?;

        if response.status == 401 {
            warn!(path, "Unauthorized, clearing session");
            self.auth.clear();
            self.navigator.navigate(LOGIN_PATH);
            return Err(HttpError::Unauthorized);
        }

        if !response.is_success() {
            let message = if response.body.trim().is_empty() {
                format!("Request failed with status {}", response.status)
            } else {
                response.body
            };
            error!(%method, path, status = response.status, %message, "API Error");
            return Err(HttpError::Status {
                status: response.status,
                message,
            });
        }

        Ok(response.body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::{AuthState, MemoryStore, Role, StorageAuth};
    use crate::testing::{FakeTransport, RecordingNavigator};
    use serde_json::Value;

    struct Fixture {
        client: HttpClient,
        transport: FakeTransport,
        store: MemoryStore,
        navigator: RecordingNavigator,
    }

    fn fixture(signed_in: bool) -> Fixture {
        let store = MemoryStore::new();
        let auth = StorageAuth::new(Arc::new(store.clone()));
        if signed_in {
            auth.store(&AuthState::signed_in("tok", "asha", Role::Customer));
        }
        let transport = FakeTransport::new();
        let navigator = RecordingNavigator::new();
        let client = HttpClient::new(
            "http://shop.test/",
            Arc::new(transport.clone()),
            Arc::new(auth),
            Arc::new(navigator.clone()),
        );
        Fixture {
            client,
            transport,
            store,
            navigator,
        }
    }

    #[tokio::test]
    async fn test_adds_bearer_and_json_headers() {
        let f = fixture(true);
        f.transport.respond(HttpResponse::new(200, r#"{"ok":true}"#));

        let value: Value = f.client.get("/api/cart").await.unwrap();
        assert_eq!(value["ok"], true);

        let sent = f.transport.requests();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].url, "http://shop.test/api/cart");
        assert_eq!(sent[0].header("authorization"), Some("Bearer tok"));
        assert_eq!(sent[0].header("Content-Type"), Some("application/json"));
    }

    #[tokio::test]
    async fn test_no_token_no_authorization_header() {
        let f = fixture(false);
        f.transport.respond(HttpResponse::new(200, "[]"));

        let _: Vec<Value> = f.client.get("/api/shops").await.unwrap();
        assert_eq!(f.transport.requests()[0].header("Authorization"), None);
    }

    #[tokio::test]
    async fn test_unauthorized_clears_session_and_redirects() {
        let f = fixture(true);
        f.transport.respond(HttpResponse::new(401, ""));

        let result: Result<Value, _> = f.client.get("/api/cart").await;

        assert!(matches!(result, Err(HttpError::Unauthorized)));
        assert!(f.store.is_empty());
        assert_eq!(f.navigator.visits(), vec![LOGIN_PATH]);
        assert_eq!(f.transport.requests().len(), 1);
    }

    #[tokio::test]
    async fn test_error_status_carries_server_text() {
        let f = fixture(true);
        f.transport.respond(HttpResponse::new(400, "Item is out of stock"));
        f.transport.respond(HttpResponse::new(500, ""));

        let first: Result<Value, _> = f.client.post("/api/cart/add", &serde_json::json!({})).await;
        let second: Result<Value, _> = f.client.get("/api/cart").await;

        assert_eq!(first.unwrap_err().to_string(), "Item is out of stock");
        let second = second.unwrap_err();
        assert_eq!(second.status(), Some(500));
        assert_eq!(second.to_string(), "Request failed with status 500");
    }

    #[tokio::test]
    async fn test_empty_success_body_is_null() {
        let f = fixture(true);
        f.transport.respond(HttpResponse::new(204, ""));

        let result: Option<Value> = f.client.delete("/api/cart/remove/3").await.unwrap();
        assert_eq!(result, None);
        assert_eq!(f.transport.requests()[0].method, Method::Delete);
    }

    #[tokio::test]
    async fn test_exchange_returns_plain_text() {
        let f = fixture(true);
        f.transport.respond(HttpResponse::new(200, "Item added to cart successfully"));

        let text = f
            .client
            .exchange(Method::Post, "/api/cart/add", Some("{}".to_string()))
            .await
            .unwrap();
        assert_eq!(text, "Item added to cart successfully");
        assert_eq!(f.transport.requests()[0].body.as_deref(), Some("{}"));
    }

    #[tokio::test]
    async fn test_transport_failure_propagates() {
        let f = fixture(true);
        f.transport.fail("connection refused");

        let result: Result<Value, _> = f.client.get("/api/cart").await;
        assert!(matches!(result, Err(HttpError::Transport(ref m)) if m == "connection refused"));
    }
}

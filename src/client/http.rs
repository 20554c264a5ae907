//! HTTP transport abstraction for wallet backend requests.
//!
//! Every resource client holds an `Arc<dyn Transport>` and hands it fully
//! built [`ApiRequest`]s. The transport sends them and returns the status and
//! body as they came back; it never interprets status codes and never
//! retries.

use std::fmt;
use std::path::Path;

use async_trait::async_trait;
use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue};
use reqwest::{Certificate, Client, Identity, Method};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::config::Config;
use crate::domain::{Result, WalletError};

// ============================================================================
// Constants
// ============================================================================

pub const APPLICATION_JSON: &str = "application/json";
pub const OCTET_STREAM: &str = "application/octet-stream";

// ============================================================================
// Request
// ============================================================================

/// Payload of an outgoing request. The content type follows the variant.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum RequestBody {
    #[default]
    Empty,
    Json(Value),
    Binary(Vec<u8>),
}

impl RequestBody {
    /// Serialize any body struct into a JSON payload.
    ///
    /// # Errors
    ///
    /// Returns `WalletError::Json` if serialization fails.
    pub fn json(body: &impl Serialize) -> Result<Self> {
        Ok(Self::Json(serde_json::to_value(body)?))
    }

    #[must_use]
    pub const fn content_type(&self) -> Option<&'static str> {
        match self {
            Self::Empty => None,
            Self::Json(_) => Some(APPLICATION_JSON),
            Self::Binary(_) => Some(OCTET_STREAM),
        }
    }
}

/// A request relative to the configured base URL.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    /// Path and query, e.g. `/wallets/abc/addresses?state=used`.
    pub path: String,
    pub body: RequestBody,
    /// Per-request headers on top of the configured defaults.
    pub headers: Vec<(&'static str, String)>,
}

impl ApiRequest {
    #[must_use]
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            body: RequestBody::Empty,
            headers: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_body(mut self, body: RequestBody) -> Self {
        self.body = body;
        self
    }

    #[must_use]
    pub fn with_header(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.headers.push((name, value.into()));
        self
    }

    /// The JSON payload, if this request carries one.
    #[must_use]
    pub fn json(&self) -> Option<&Value> {
        match &self.body {
            RequestBody::Json(value) => Some(value),
            _ => None,
        }
    }
}

// ============================================================================
// Response
// ============================================================================

/// Raw answer from the wallet backend.
///
/// Error statuses are returned here like any other; check [`status`] or
/// [`is_success`] before reading the body.
///
/// [`status`]: ApiResponse::status
/// [`is_success`]: ApiResponse::is_success
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    status: u16,
    body: Vec<u8>,
    json: Option<Value>,
}

impl ApiResponse {
    /// Wrap a status and body. `json` is filled in when the body parses.
    #[must_use]
    pub fn new(status: u16, body: Vec<u8>) -> Self {
        let json = if body.is_empty() {
            None
        } else {
            serde_json::from_slice(&body).ok()
        };
        Self { status, body, json }
    }

    #[must_use]
    pub const fn status(&self) -> u16 {
        self.status
    }

    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.status >= 200 && self.status < 300
    }

    #[must_use]
    pub fn body(&self) -> &[u8] {
        &self.body
    }

    #[must_use]
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }

    #[must_use]
    pub fn json(&self) -> Option<&Value> {
        self.json.as_ref()
    }

    /// Field lookup on a JSON object body, e.g. `response.get("id")`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.json.as_ref()?.get(key)
    }

    /// Decode the body into a caller-chosen type.
    ///
    /// # Errors
    ///
    /// Returns `WalletError::Json` if the body does not match `T`.
    pub fn deserialize<T: DeserializeOwned>(&self) -> Result<T> {
        Ok(serde_json::from_slice(&self.body)?)
    }
}

// ============================================================================
// Traits
// ============================================================================

/// Anything able to deliver an [`ApiRequest`] to the wallet backend.
///
/// Implementors only provide [`execute`](Transport::execute); the verb
/// helpers are built on it.
#[async_trait]
pub trait Transport: Send + Sync + fmt::Debug {
    async fn execute(&self, request: ApiRequest) -> Result<ApiResponse>;

    async fn get(&self, path: &str) -> Result<ApiResponse> {
        self.execute(ApiRequest::new(Method::GET, path)).await
    }

    async fn post(&self, path: &str, body: RequestBody) -> Result<ApiResponse> {
        self.execute(ApiRequest::new(Method::POST, path).with_body(body))
            .await
    }

    async fn put(&self, path: &str, body: RequestBody) -> Result<ApiResponse> {
        self.execute(ApiRequest::new(Method::PUT, path).with_body(body))
            .await
    }

    async fn patch(&self, path: &str, body: RequestBody) -> Result<ApiResponse> {
        self.execute(ApiRequest::new(Method::PATCH, path).with_body(body))
            .await
    }

    async fn delete(&self, path: &str, body: RequestBody) -> Result<ApiResponse> {
        self.execute(ApiRequest::new(Method::DELETE, path).with_body(body))
            .await
    }
}

// ============================================================================
// HTTP Transport
// ============================================================================

/// reqwest-backed transport configured from a [`Config`].
#[derive(Debug, Clone)]
pub struct HttpTransport {
    inner: Client,
    base_url: String,
}

impl HttpTransport {
    /// Build the HTTP client: trust root, client identity, timeout and
    /// default headers all come from `config`.
    ///
    /// # Errors
    ///
    /// Returns `WalletError::Io` if a certificate file cannot be read,
    /// `WalletError::Http` if its PEM content is rejected or the client
    /// cannot be built, and `WalletError::InvalidArgument` for malformed
    /// header names or values.
    pub fn new(config: &Config) -> Result<Self> {
        let mut builder = Client::builder()
            .use_rustls_tls()
            .default_headers(default_headers(config)?);

        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }

        if let Some(path) = config.ca_cert_path() {
            tracing::debug!(path = %path.display(), "installing CA certificate as trust root");
            let certs = Certificate::from_pem_bundle(&read_file(path)?)?;
            if certs.is_empty() {
                return Err(WalletError::invalid_argument(format!(
                    "no certificates found in {}",
                    path.display()
                )));
            }
            builder = builder.tls_built_in_root_certs(false);
            for cert in certs {
                builder = builder.add_root_certificate(cert);
            }
        }

        if let Some(path) = config.client_cert_path() {
            tracing::debug!(path = %path.display(), "installing client certificate");
            let pem = read_file(path)?;
            builder = builder.identity(Identity::from_pem(&pem)?);
        }

        Ok(Self {
            inner: builder.build()?,
            base_url: config.base_url(),
        })
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn execute(&self, request: ApiRequest) -> Result<ApiResponse> {
        let url = format!("{}{}", self.base_url, request.path);
        tracing::debug!(method = %request.method, path = %request.path, "wallet request");

        let mut builder = self.inner.request(request.method, &url);
        for (name, value) in &request.headers {
            builder = builder.header(*name, value.as_str());
        }

        builder = match request.body {
            RequestBody::Empty => builder,
            RequestBody::Json(value) => builder
                .header(CONTENT_TYPE, APPLICATION_JSON)
                .body(serde_json::to_vec(&value)?),
            RequestBody::Binary(bytes) => builder.header(CONTENT_TYPE, OCTET_STREAM).body(bytes),
        };

        let response = builder.send().await?;
        let status = response.status().as_u16();
        let body = response.bytes().await?.to_vec();
        tracing::trace!(status, bytes = body.len(), "wallet response");

        Ok(ApiResponse::new(status, body))
    }
}

fn default_headers(config: &Config) -> Result<HeaderMap> {
    let mut headers = HeaderMap::new();
    for (name, value) in &config.headers {
        let name = HeaderName::from_bytes(name.as_bytes())
            .map_err(|e| WalletError::invalid_argument(format!("invalid header name '{name}': {e}")))?;
        let value = HeaderValue::from_str(value).map_err(|e| {
            WalletError::invalid_argument(format!("invalid value for header '{name}': {e}"))
        })?;
        headers.insert(name, value);
    }
    Ok(headers)
}

fn read_file(path: &Path) -> Result<Vec<u8>> {
    std::fs::read(path).map_err(|e| WalletError::io(path, e))
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::io::Write;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    /// One-shot HTTP/1.1 server: captures the raw request, replies with
    /// `status` and `body`.
    async fn serve_once(status: &'static str, body: &'static str) -> (String, tokio::task::JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        let handle = tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut raw = Vec::new();
            let mut buf = [0u8; 4096];
            loop {
                let n = socket.read(&mut buf).await.unwrap();
                raw.extend_from_slice(&buf[..n]);
                if n == 0 || request_complete(&raw) {
                    break;
                }
            }
            let reply = format!(
                "HTTP/1.1 {status}\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{body}",
                body.len()
            );
            socket.write_all(reply.as_bytes()).await.unwrap();
            socket.shutdown().await.ok();
            String::from_utf8_lossy(&raw).into_owned()
        });

        (format!("http://{addr}/v2"), handle)
    }

    fn request_complete(raw: &[u8]) -> bool {
        let text = String::from_utf8_lossy(raw);
        let Some(header_end) = text.find("\r\n\r\n") else {
            return false;
        };
        let length = text[..header_end]
            .lines()
            .find_map(|line| {
                let (name, value) = line.split_once(':')?;
                name.eq_ignore_ascii_case("content-length")
                    .then(|| value.trim().parse::<usize>().ok())
                    .flatten()
            })
            .unwrap_or(0);
        raw.len() >= header_end + 4 + length
    }

    #[test]
    fn test_response_accessors() {
        let response = ApiResponse::new(201, br#"{"id":"abc","name":"W"}"#.to_vec());
        assert_eq!(response.status(), 201);
        assert!(response.is_success());
        assert_eq!(response.get("id"), Some(&json!("abc")));
        assert_eq!(response.text(), r#"{"id":"abc","name":"W"}"#);

        #[derive(serde::Deserialize)]
        struct Wallet {
            name: String,
        }
        assert_eq!(response.deserialize::<Wallet>().unwrap().name, "W");
    }

    #[test]
    fn test_response_without_json_body() {
        let empty = ApiResponse::new(204, Vec::new());
        assert!(empty.json().is_none());
        assert!(empty.is_success());

        let binary = ApiResponse::new(200, vec![0x84, 0xa4, 0x00]);
        assert!(binary.json().is_none());
        assert_eq!(binary.body(), &[0x84, 0xa4, 0x00]);
        assert!(binary.deserialize::<Value>().is_err());

        assert!(!ApiResponse::new(404, Vec::new()).is_success());
    }

    #[test]
    fn test_body_content_types() {
        assert_eq!(RequestBody::Empty.content_type(), None);
        assert_eq!(
            RequestBody::Json(json!({})).content_type(),
            Some("application/json")
        );
        assert_eq!(
            RequestBody::Binary(vec![1]).content_type(),
            Some("application/octet-stream")
        );
    }

    #[test]
    fn test_missing_ca_file_fails_construction() {
        let config = Config::default().with_ca_cert("/no/such/ca.crt");
        let err = HttpTransport::new(&config).unwrap_err();
        assert!(matches!(err, WalletError::Io { .. }));
        assert!(err.to_string().contains("/no/such/ca.crt"));
    }

    #[test]
    fn test_missing_client_cert_fails_construction() {
        let config = Config::default().with_client_cert("/no/such/client.pem");
        assert!(matches!(
            HttpTransport::new(&config).unwrap_err(),
            WalletError::Io { .. }
        ));
    }

    fn pem_file(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_ca_file_without_certificates_fails_construction() {
        let file = pem_file("this is not a certificate");
        let config = Config::default().with_ca_cert(file.path());

        let err = HttpTransport::new(&config).unwrap_err();
        assert!(err.is_invalid_argument());
        assert_eq!(
            err.to_string(),
            format!("no certificates found in {}", file.path().display())
        );
    }

    #[test]
    fn test_client_cert_without_key_fails_construction() {
        let file = pem_file(include_str!("testdata/ca.crt"));
        let config = Config::default().with_client_cert(file.path());
        assert!(matches!(
            HttpTransport::new(&config).unwrap_err(),
            WalletError::Http(_)
        ));
    }

    #[test]
    fn test_ca_and_client_identity_are_installed() {
        let ca = pem_file(include_str!("testdata/ca.crt"));
        let identity = pem_file(include_str!("testdata/client.pem"));
        let config = Config::default()
            .with_protocol("https")
            .with_ca_cert(ca.path())
            .with_client_cert(identity.path());

        let transport = HttpTransport::new(&config).unwrap();
        assert_eq!(transport.base_url(), "https://localhost:8090/v2");
    }

    #[test]
    fn test_invalid_header_fails_construction() {
        let config = Config::default().with_header("bad header", "x");
        assert!(HttpTransport::new(&config).unwrap_err().is_invalid_argument());
    }

    #[test]
    fn test_base_url_from_config() {
        let transport = HttpTransport::new(&Config::default().with_port(4445)).unwrap();
        assert_eq!(transport.base_url(), "http://localhost:4445/v2");
    }

    #[tokio::test]
    async fn test_post_sends_json_with_content_type() {
        let (url, server) = serve_once("201 Created", r#"{"id":"w1"}"#).await;
        let config = Config::default()
            .with_url(url)
            .with_header("X-Client", "test-suite");
        let transport = HttpTransport::new(&config).unwrap();

        let body = json!({ "style": "random", "name": "W" });
        let response = transport
            .post("/byron-wallets", RequestBody::Json(body.clone()))
            .await
            .unwrap();

        assert_eq!(response.status(), 201);
        assert_eq!(response.get("id"), Some(&json!("w1")));

        let raw = server.await.unwrap();
        let lower = raw.to_ascii_lowercase();
        assert!(raw.starts_with("POST /v2/byron-wallets HTTP/1.1"));
        assert!(lower.contains("content-type: application/json"));
        assert!(lower.contains("x-client: test-suite"));
        let sent: Value = serde_json::from_str(raw.split("\r\n\r\n").nth(1).unwrap()).unwrap();
        assert_eq!(sent, body);
    }

    #[tokio::test]
    async fn test_error_status_is_returned_unmodified() {
        let body = r#"{"code":"no_such_wallet","message":"not found"}"#;
        let (url, server) = serve_once("404 Not Found", body).await;
        let transport = HttpTransport::new(&Config::default().with_url(url)).unwrap();

        let response = transport
            .delete("/byron-wallets/db66f3d0d796c6aa0ad456a36d5a3ee88d62bd5d", RequestBody::Empty)
            .await
            .unwrap();

        assert_eq!(response.status(), 404);
        assert!(!response.is_success());
        assert_eq!(response.get("code"), Some(&json!("no_such_wallet")));
        assert!(server.await.unwrap().starts_with(
            "DELETE /v2/byron-wallets/db66f3d0d796c6aa0ad456a36d5a3ee88d62bd5d HTTP/1.1"
        ));
    }

    #[tokio::test]
    async fn test_binary_body_uses_octet_stream() {
        let (url, server) = serve_once("202 Accepted", r#"{"id":"tx"}"#).await;
        let transport = HttpTransport::new(&Config::default().with_url(url)).unwrap();

        let response = transport
            .post("/proxy/transactions", RequestBody::Binary(b"signed-tx".to_vec()))
            .await
            .unwrap();
        assert_eq!(response.status(), 202);

        let raw = server.await.unwrap();
        assert!(
            raw.to_ascii_lowercase()
                .contains("content-type: application/octet-stream")
        );
        assert!(raw.ends_with("signed-tx"));
    }
}

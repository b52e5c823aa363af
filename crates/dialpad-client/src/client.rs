//! Dialpad HTTP client implementation.

use bytes::Bytes;
use dialpad_core::Sensitive;
use reqwest::header::{HeaderValue, ACCEPT, AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Client, Method, Request};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::Duration;
use tracing::{debug, warn};

use crate::classify::classify;
use crate::error::ClientError;

/// Base URL of the Dialpad v2 API.
pub const DEFAULT_BASE_URL: &str = "https://dialpad.com/api/v2";

/// Dialpad API client.
///
/// Attaches bearer authentication and JSON headers to every request and
/// turns error responses into [`ClientError`]. Cloning is cheap and shares
/// the underlying connection pool.
#[derive(Debug, Clone)]
pub struct DialpadClient {
    client: Client,
    base_url: String,
    auth_header: HeaderValue,
}

impl DialpadClient {
    /// Create a new client against the public API.
    ///
    /// # Errors
    ///
    /// Returns an error if the API key cannot be used as a header value or
    /// the HTTP transport cannot be built.
    pub fn new(api_key: impl Into<Sensitive>) -> Result<Self, ClientError> {
        Self::with_options(api_key, ClientOptions::default())
    }

    /// Create a new client with custom options.
    ///
    /// # Errors
    ///
    /// Returns an error if the API key cannot be used as a header value or
    /// the HTTP transport cannot be built.
    pub fn with_options(
        api_key: impl Into<Sensitive>,
        options: ClientOptions,
    ) -> Result<Self, ClientError> {
        let api_key = api_key.into();
        if api_key.is_empty() {
            return Err(ClientError::Configuration("API key is empty".to_string()));
        }

        let mut auth_header = HeaderValue::from_str(&format!("Bearer {}", api_key.expose()))
            .map_err(|_| {
                ClientError::Configuration("API key contains invalid header characters".into())
            })?;
        auth_header.set_sensitive(true);

        let client = Client::builder()
            .timeout(Duration::from_secs(options.timeout_seconds))
            .user_agent(options.user_agent)
            .build()
            .map_err(|e| ClientError::Configuration(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            base_url: options.base_url.trim_end_matches('/').to_string(),
            auth_header,
        })
    }

    /// Replace the default `reqwest::Client` with a custom one.
    #[must_use]
    pub fn with_http_client(mut self, client: Client) -> Self {
        self.client = client;
        self
    }

    /// Base URL requests are resolved against.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Build a request for `path`, relative to the API base.
    ///
    /// `body` is an already-serialized JSON payload.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::RequestConstruction`] if the resulting URL is
    /// invalid.
    pub fn build(
        &self,
        method: Method,
        path: &str,
        body: Option<Vec<u8>>,
    ) -> Result<Request, ClientError> {
        let url = format!("{}{}", self.base_url, path);
        let mut builder = self.client.request(method, url.as_str());
        if let Some(body) = body {
            builder = builder.body(body);
        }
        builder.build().map_err(ClientError::RequestConstruction)
    }

    /// Authenticate and send a request, returning the raw response body.
    ///
    /// The body is read to completion before classification, on success and
    /// on error alike.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Transport`] on network failure, and
    /// [`ClientError::Api`] or [`ClientError::MalformedErrorResponse`] when
    /// the status is 400 or above.
    pub async fn execute(&self, mut request: Request) -> Result<Bytes, ClientError> {
        let headers = request.headers_mut();
        headers.insert(AUTHORIZATION, self.auth_header.clone());
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let method = request.method().clone();
        let path = request.url().path().to_string();
        debug!(%method, %path, "Sending Dialpad request");

        let response = match self.client.execute(request).await {
            Ok(response) => response,
            Err(e) => {
                warn!(%method, %path, error = %e, "Dialpad request failed");
                return Err(ClientError::Transport(e));
            }
        };

        let status = response.status();
        let body = response.bytes().await.map_err(ClientError::Transport)?;
        debug!(
            %method,
            %path,
            status = status.as_u16(),
            bytes = body.len(),
            "Received Dialpad response"
        );

        let result = classify(status, body);
        if let Err(ref e) = result {
            warn!(
                %method,
                %path,
                status = status.as_u16(),
                error = %e,
                "Dialpad returned an error"
            );
        }
        result
    }

    /// Serialize `body` (if any), then build and execute the request.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Encode`] if the payload cannot be serialized,
    /// otherwise the errors of [`Self::build`] and [`Self::execute`].
    pub async fn send<B: Serialize + ?Sized>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<Bytes, ClientError> {
        let body = body
            .map(serde_json::to_vec)
            .transpose()
            .map_err(ClientError::Encode)?;
        let request = self.build(method, path, body)?;
        self.execute(request).await
    }

    /// `GET path`, decoding the response.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the body does not decode.
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ClientError> {
        let body = self.send::<()>(Method::GET, path, None).await?;
        decode(&body)
    }

    /// `POST path` with a JSON body, decoding the response.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the body does not decode.
    pub async fn post<B, T>(&self, path: &str, body: &B) -> Result<T, ClientError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let body = self.send(Method::POST, path, Some(body)).await?;
        decode(&body)
    }

    /// `PATCH path` with a JSON body. The response body is discarded.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn patch<B>(&self, path: &str, body: &B) -> Result<(), ClientError>
    where
        B: Serialize + ?Sized,
    {
        self.send(Method::PATCH, path, Some(body)).await?;
        Ok(())
    }

    /// `DELETE path`. The response body is discarded.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn delete(&self, path: &str) -> Result<(), ClientError> {
        self.send::<()>(Method::DELETE, path, None).await?;
        Ok(())
    }
}

/// Decode a successful response body.
///
/// # Errors
///
/// Returns [`ClientError::Decode`] if the body does not match `T`.
pub fn decode<T: DeserializeOwned>(body: &[u8]) -> Result<T, ClientError> {
    serde_json::from_slice(body).map_err(ClientError::Decode)
}

/// Client options for customization.
#[derive(Debug, Clone)]
pub struct ClientOptions {
    /// API base URL (default: `https://dialpad.com/api/v2`).
    pub base_url: String,
    /// Request timeout in seconds (default: 30).
    pub timeout_seconds: u64,
    /// User agent sent with every request.
    pub user_agent: String,
}

impl Default for ClientOptions {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_seconds: 30,
            user_agent: concat!("dialpad-provider/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

impl ClientOptions {
    /// Options pointing at a different API base (e.g. a sandbox or a mock).
    #[must_use]
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    /// Set the request timeout.
    #[must_use]
    pub fn timeout_seconds(mut self, seconds: u64) -> Self {
        self.timeout_seconds = seconds;
        self
    }
}

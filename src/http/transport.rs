//! HTTP transport with authentication, retry, and timeout policy applied
//! uniformly to every request.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};
use std::time::Duration;

use log::{debug, warn};
use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderName, HeaderValue};
use reqwest::{Client, Method, Url};
use serde::Serialize;
use serde::de::DeserializeOwned;

use super::retry::RetryPolicy;
use crate::error::{Error, Failure, Result};

const USER_AGENT: &str = concat!("secretsmith/", env!("CARGO_PKG_VERSION"));

/// Default per-attempt timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Configuration for a [`Transport`] (and the [`crate::Client`] owning it).
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Absolute base URL of the service, e.g. `https://vault.example.com`.
    pub base_url: String,
    /// Default headers sent with every request.
    pub headers: HashMap<String, String>,
    /// Per-attempt timeout.
    pub timeout: Duration,
    /// Retry policy for transient failures.
    pub retry: RetryPolicy,
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            headers: HashMap::new(),
            timeout: DEFAULT_TIMEOUT,
            retry: RetryPolicy::default(),
        }
    }

    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn retry(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }
}

/// Per-call overrides. Applied on top of the transport defaults for one
/// request only; the stored defaults are never mutated.
#[derive(Debug, Clone, Default)]
pub struct RequestOptions {
    headers: Vec<(String, String)>,
    query: Vec<(String, String)>,
    timeout: Option<Duration>,
}

impl RequestOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    pub fn query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((key.into(), value.into()));
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}

/// Effective defaults for a call, captured as a snapshot when the call
/// starts. `set_access_token` swaps in a whole new value, so in-flight
/// calls keep the headers they started with.
#[derive(Debug)]
struct Defaults {
    headers: HeaderMap,
    timeout: Duration,
}

#[derive(Debug)]
struct Inner {
    client: Client,
    base_url: String,
    defaults: RwLock<Arc<Defaults>>,
    retry: RetryPolicy,
}

/// Executes logical HTTP calls against the service: one verb, one path,
/// optional JSON body in, decoded JSON out, with authentication, retry,
/// and timeout handled uniformly. Cheap to clone.
#[derive(Debug, Clone)]
pub struct Transport {
    inner: Arc<Inner>,
}

impl Transport {
    /// Builds a transport from the given configuration.
    ///
    /// Fails with [`Error::Client`] if the base URL is not a syntactically
    /// valid absolute URL or a default header is malformed.
    pub fn new(config: ClientConfig) -> Result<Self> {
        Url::parse(&config.base_url)
            .map_err(|err| Error::client(format!("Invalid base URL {:?}: {}", config.base_url, err)))?;
        let base_url = config.base_url.trim_end_matches('/').to_string();

        let mut headers = HeaderMap::new();
        for (name, value) in &config.headers {
            let name = HeaderName::from_bytes(name.as_bytes())
                .map_err(|err| Error::client(format!("Invalid header name {:?}: {}", name, err)))?;
            let value = HeaderValue::from_str(value)
                .map_err(|err| Error::client(format!("Invalid value for header {}: {}", name, err)))?;
            headers.insert(name, value);
        }

        let client = Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .map_err(|err| Error::client(format!("Failed to build HTTP client: {}", err)))?;

        Ok(Self {
            inner: Arc::new(Inner {
                client,
                base_url,
                defaults: RwLock::new(Arc::new(Defaults {
                    headers,
                    timeout: config.timeout,
                })),
                retry: config.retry,
            }),
        })
    }

    /// Installs `Authorization: Bearer <token>` for all subsequent requests.
    ///
    /// Replaces the effective defaults as a whole; requests already in
    /// flight keep the snapshot they captured. Last write wins.
    pub fn set_access_token(&self, token: &str) -> Result<()> {
        let mut value = HeaderValue::from_str(&format!("Bearer {}", token))
            .map_err(|err| Error::client(format!("Invalid access token: {}", err)))?;
        value.set_sensitive(true);

        let current = self.defaults();
        let mut headers = current.headers.clone();
        headers.insert(AUTHORIZATION, value);

        let next = Arc::new(Defaults {
            headers,
            timeout: current.timeout,
        });
        *self
            .inner
            .defaults
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner()) = next;
        debug!("Access token installed");
        Ok(())
    }

    /// Performs a GET request and decodes the JSON response.
    #[tracing::instrument(skip(self, options))]
    pub async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        options: Option<&RequestOptions>,
    ) -> Result<T> {
        self.request(Method::GET, path, None::<&()>, options).await
    }

    /// Performs a POST request with an optional JSON body.
    #[tracing::instrument(skip(self, body, options))]
    pub async fn post<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: Option<&B>,
        options: Option<&RequestOptions>,
    ) -> Result<T> {
        self.request(Method::POST, path, body, options).await
    }

    /// Performs a PATCH request with an optional JSON body.
    #[tracing::instrument(skip(self, body, options))]
    pub async fn patch<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: Option<&B>,
        options: Option<&RequestOptions>,
    ) -> Result<T> {
        self.request(Method::PATCH, path, body, options).await
    }

    /// Performs a DELETE request with an optional JSON body.
    #[tracing::instrument(skip(self, body, options))]
    pub async fn delete<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: Option<&B>,
        options: Option<&RequestOptions>,
    ) -> Result<T> {
        self.request(Method::DELETE, path, body, options).await
    }

    /// Executes one logical call: snapshot the defaults, then attempt the
    /// exchange under the retry policy. Attempts for one call are strictly
    /// sequential.
    async fn request<T: DeserializeOwned, B: Serialize>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
        options: Option<&RequestOptions>,
    ) -> Result<T> {
        let url = self.url_for(path);
        let defaults = self.defaults();
        let timeout = options
            .and_then(|options| options.timeout)
            .unwrap_or(defaults.timeout);

        // Per-call headers replace colliding defaults for this call only;
        // the stored snapshot is left untouched.
        let mut headers = defaults.headers.clone();
        if let Some(options) = options {
            for (name, value) in &options.headers {
                let name = HeaderName::from_bytes(name.as_bytes())
                    .map_err(|err| Error::client(format!("Invalid header name {:?}: {}", name, err)))?;
                let value = HeaderValue::from_str(value)
                    .map_err(|err| Error::client(format!("Invalid value for header {}: {}", name, err)))?;
                headers.insert(name, value);
            }
        }

        let payload = match body {
            Some(body) => Some(serde_json::to_value(body).map_err(|err| {
                Error::client(format!("Failed to serialize request body: {}", err))
            })?),
            None => None,
        };

        let retry = &self.inner.retry;
        let mut attempt = 1;
        loop {
            match self
                .attempt(&method, &url, &headers, payload.as_ref(), options, timeout)
                .await
            {
                Ok(bytes) => {
                    return serde_json::from_slice(&bytes).map_err(|err| {
                        Error::client(format!("Failed to decode response body: {}", err))
                    });
                }
                Err(failure) => {
                    let transient = failure.is_transient(RetryPolicy::is_retryable_status);
                    if !transient || attempt >= retry.max_attempts {
                        debug!(
                            "{} {}: giving up after attempt {}/{}",
                            method, url, attempt, retry.max_attempts
                        );
                        return Err(failure.into_error());
                    }

                    let delay = retry.backoff(attempt);
                    warn!(
                        "{} {}: attempt {}/{} failed, retrying in {:?}...",
                        method, url, attempt, retry.max_attempts, delay
                    );
                    tokio::time::sleep(delay).await;
                    attempt += 1;
                }
            }
        }
    }

    /// One attempt: send the request and read the body, bounded by the
    /// per-attempt timeout. Error statuses keep their body bytes for the
    /// normalizer.
    async fn attempt(
        &self,
        method: &Method,
        url: &str,
        headers: &HeaderMap,
        payload: Option<&serde_json::Value>,
        options: Option<&RequestOptions>,
        timeout: Duration,
    ) -> std::result::Result<Vec<u8>, Failure> {
        let mut request = self
            .inner
            .client
            .request(method.clone(), url)
            .headers(headers.clone())
            .timeout(timeout);

        if let Some(options) = options {
            if !options.query.is_empty() {
                request = request.query(&options.query);
            }
        }

        if let Some(payload) = payload {
            request = request.json(payload);
        }

        let response = request.send().await.map_err(Failure::Transport)?;
        let status = response.status();
        let url = response.url().to_string();

        if status.is_success() {
            let bytes = response.bytes().await.map_err(Failure::Transport)?;
            Ok(bytes.to_vec())
        } else {
            let body = response.bytes().await.unwrap_or_default().to_vec();
            Err(Failure::Http {
                status,
                url,
                method: method.clone(),
                body,
            })
        }
    }

    fn defaults(&self) -> Arc<Defaults> {
        self.inner
            .defaults
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    fn url_for(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{}", self.inner.base_url, path)
        } else {
            format!("{}/{}", self.inner.base_url, path)
        }
    }
}

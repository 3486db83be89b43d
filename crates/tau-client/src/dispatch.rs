//! Request dispatch and response classification
//!
//! [`Dispatcher`] is the single path every operation goes through. It turns an
//! [`Endpoint`] into an authenticated request, sends it over an
//! [`HttpClient`], and maps the status code onto [`ApiError`].

use anyhow::Context;
use chrono::{DateTime, TimeZone, Utc};
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Method, Url};
use serde::de::DeserializeOwned;

use crate::config::ClientConfig;
use crate::endpoint::Endpoint;
use crate::error::{ApiError, ConfigError, DEFAULT_AUTHORIZATION_MESSAGE};
use crate::http::{HttpClient, HttpRequest, HttpResponse};

/// Header carrying the rate-limit reset time as Unix epoch seconds
pub const RATE_LIMIT_RESET_HEADER: &str = "Ratelimit-Reset";

/// Sends authenticated requests below a fixed base path
///
/// Immutable after construction; safe to share between callers as long as
/// the transport is.
#[derive(Debug, Clone)]
pub struct Dispatcher<H: HttpClient> {
    http: H,
    origin: String,
    base_path: &'static str,
    authorization: HeaderValue,
}

impl<H: HttpClient> Dispatcher<H> {
    /// Creates a dispatcher for the service rooted at `base_path`
    ///
    /// `base_path` must start and end with `/`.
    pub fn new(
        http: H,
        config: &ClientConfig,
        base_path: &'static str,
    ) -> Result<Self, ConfigError> {
        // Every constructor funnels through here.
        config.validate()?;

        let mut authorization = HeaderValue::from_str(&format!("Token {}", config.token.trim()))
            .map_err(|_| ConfigError::InvalidToken)?;
        authorization.set_sensitive(true);

        Ok(Self {
            http,
            origin: config.origin(),
            base_path,
            authorization,
        })
    }

    /// Returns the base URL all relative paths are joined to
    pub fn base_url(&self) -> String {
        format!("{}{}", self.origin, self.base_path)
    }

    /// Builds the full URL for a relative path and query pairs
    ///
    /// The path always ends with `/`.
    pub fn url_for(&self, path: &str, query: &[(String, String)]) -> String {
        let path = path.trim_start_matches('/');
        let mut url = format!("{}{}", self.base_url(), path);
        if !url.ends_with('/') {
            url.push('/');
        }

        if !query.is_empty() {
            let encoded: Vec<String> = query
                .iter()
                .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
                .collect();
            url.push('?');
            url.push_str(&encoded.join("&"));
        }

        url
    }

    /// Executes an endpoint and returns the raw success body
    pub async fn execute(&self, endpoint: &Endpoint) -> Result<Vec<u8>, ApiError> {
        let url = self.url_for(&endpoint.path, &endpoint.query);
        self.send(endpoint.method.clone(), url, endpoint.body.clone())
            .await
    }

    /// Executes an endpoint and decodes the success body as JSON
    pub async fn execute_json<T: DeserializeOwned>(
        &self,
        endpoint: &Endpoint,
    ) -> Result<T, ApiError> {
        let body = self.execute(endpoint).await?;
        Ok(serde_json::from_slice(&body)?)
    }

    /// Sends a GET to an absolute URL, such as a pagination cursor
    pub async fn get_absolute(&self, url: &str) -> Result<Vec<u8>, ApiError> {
        self.send(Method::GET, url.to_string(), None).await
    }

    /// Resolves a relative pagination cursor against the base URL
    ///
    /// Unlike [`url_for`](Self::url_for) the cursor is used as given: its
    /// query string is kept and a cursor starting with `/` is rooted at the
    /// origin rather than under the base path.
    pub fn resolve_cursor(&self, cursor: &str) -> Result<String, ApiError> {
        let base = self.base_url();
        let url = Url::parse(&base)
            .and_then(|base| base.join(cursor))
            .with_context(|| format!("invalid pagination cursor {cursor:?}"))
            .map_err(ApiError::Transport)?;
        Ok(url.into())
    }

    async fn send(
        &self,
        method: Method,
        url: String,
        body: Option<Vec<u8>>,
    ) -> Result<Vec<u8>, ApiError> {
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, self.authorization.clone());
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        if body.is_some() {
            headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        }

        tracing::debug!(%method, %url, "dispatching request");

        let response = self
            .http
            .send(HttpRequest {
                method,
                url,
                headers,
                body,
            })
            .await
            .map_err(ApiError::Transport)?;

        tracing::debug!(status = response.status, bytes = response.body.len(), "received response");

        classify(response)
    }
}

/// Maps a response onto the success body or a typed error
pub fn classify(response: HttpResponse) -> Result<Vec<u8>, ApiError> {
    match response.status {
        200..=299 => Ok(response.body),
        401 => {
            let text = response.text();
            let message = text.trim();
            if message.is_empty() {
                Err(ApiError::Authorization(DEFAULT_AUTHORIZATION_MESSAGE.to_string()))
            } else {
                Err(ApiError::Authorization(message.to_string()))
            }
        }
        429 => Err(ApiError::RateLimit {
            reset_time: parse_reset_time(response.header(RATE_LIMIT_RESET_HEADER)),
        }),
        code => Err(ApiError::Generic {
            code,
            body: response.text(),
        }),
    }
}

/// Parses a rate-limit reset header, falling back to the Unix epoch
fn parse_reset_time(value: Option<&str>) -> DateTime<Utc> {
    let parsed = value
        .and_then(|v| v.trim().parse::<i64>().ok())
        .and_then(|secs| Utc.timestamp_opt(secs, 0).single());

    match parsed {
        Some(reset_time) => reset_time,
        None => {
            tracing::warn!(header = ?value, "unparseable rate limit reset header");
            DateTime::<Utc>::UNIX_EPOCH
        }
    }
}

use std::fmt;

use reqwest::{header, Method, StatusCode};
use serde::de::DeserializeOwned;
use tokio_util::sync::CancellationToken;
use url::Url;

use crate::{ApiError, CancelStage, MeteoraError, Query, Result, RetryConfig};

/// `User-Agent` sent with every request.
pub const USER_AGENT: &str = concat!("Meteora Rust SDK/", env!("CARGO_PKG_VERSION"));

/// Joins `path` onto the path of `base_url`.
///
/// Empty segments are dropped, so `"http://host/api/"` + `"/pools"` yields
/// `"http://host/api/pools"`. A trailing slash on `path` is preserved.
pub fn join_url(base_url: &str, path: &str) -> Result<Url> {
    let mut url = Url::parse(base_url)
        .map_err(|err| MeteoraError::InvalidUrl(format!("{base_url:?}: {err}")))?;
    {
        let mut segments = url
            .path_segments_mut()
            .map_err(|_| MeteoraError::InvalidUrl(format!("{base_url:?} cannot be a base")))?;
        segments.pop_if_empty();
        segments.extend(path.split('/').filter(|segment| !segment.is_empty()));
        if path.ends_with('/') && path.len() > 1 {
            segments.push("");
        }
    }
    Ok(url)
}

#[derive(Clone)]
/// Retrying HTTP transport shared by every API sub-client.
///
/// A transport is bound to one base URL. It is cheap to clone and safe to use
/// from many tasks at once: the retry configuration is fixed at construction
/// and the underlying `reqwest::Client` is a pooled handle.
pub struct Transport {
    http: reqwest::Client,
    base_url: String,
    retry: RetryConfig,
}

impl fmt::Debug for Transport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Transport")
            .field("base_url", &self.base_url)
            .field("retry", &self.retry)
            .finish()
    }
}

impl Transport {
    /// Creates a transport with the default retry configuration.
    ///
    /// When `http` is `None` a default `reqwest::Client` is used.
    pub fn new(base_url: impl Into<String>, http: Option<reqwest::Client>) -> Self {
        Self::with_retry_config(base_url, http, RetryConfig::default())
    }

    /// Creates a transport with a custom retry configuration.
    ///
    /// # Example
    ///
    /// ```
    /// use std::time::Duration;
    /// use meteora_http::{RetryConfig, Transport};
    ///
    /// let retry = RetryConfig::new(3, Duration::from_millis(50), Duration::from_secs(2));
    /// let transport = Transport::with_retry_config("https://dlmm.datapi.meteora.ag", None, retry);
    /// assert_eq!(transport.retry_config().max_retries(), 3);
    /// ```
    pub fn with_retry_config(
        base_url: impl Into<String>,
        http: Option<reqwest::Client>,
        retry: RetryConfig,
    ) -> Self {
        Self {
            http: http.unwrap_or_default(),
            base_url: base_url.into(),
            retry,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn retry_config(&self) -> &RetryConfig {
        &self.retry
    }

    /// Performs a GET request and decodes the JSON response.
    pub async fn get<T: DeserializeOwned>(
        &self,
        cancel: &CancellationToken,
        path: &str,
        query: &Query,
    ) -> Result<T> {
        let body = self.send_raw(cancel, Method::GET, path, query).await?;
        decode(&body)
    }

    /// Performs a POST request without a body and decodes the JSON response.
    pub async fn post<T: DeserializeOwned>(
        &self,
        cancel: &CancellationToken,
        path: &str,
        query: &Query,
    ) -> Result<T> {
        let body = self.send_raw(cancel, Method::POST, path, query).await?;
        decode(&body)
    }

    /// Performs a GET request for a JSON array.
    ///
    /// A `null` body decodes as an empty list.
    pub async fn get_list<T: DeserializeOwned>(
        &self,
        cancel: &CancellationToken,
        path: &str,
        query: &Query,
    ) -> Result<Vec<T>> {
        let items: Option<Vec<T>> = self.get(cancel, path, query).await?;
        Ok(items.unwrap_or_default())
    }

    /// POST counterpart of [`get_list`](Self::get_list).
    pub async fn post_list<T: DeserializeOwned>(
        &self,
        cancel: &CancellationToken,
        path: &str,
        query: &Query,
    ) -> Result<Vec<T>> {
        let items: Option<Vec<T>> = self.post(cancel, path, query).await?;
        Ok(items.unwrap_or_default())
    }

    /// Runs a request through the retry loop and returns the raw body of the
    /// successful response.
    pub async fn send_raw(
        &self,
        cancel: &CancellationToken,
        method: Method,
        path: &str,
        query: &Query,
    ) -> Result<Vec<u8>> {
        let mut url = join_url(&self.base_url, path)?;
        if !query.is_empty() {
            url.set_query(Some(&query.encode()));
        }
        self.execute_with_retry(cancel, method, url).await
    }

    async fn execute_with_retry(
        &self,
        cancel: &CancellationToken,
        method: Method,
        url: Url,
    ) -> Result<Vec<u8>> {
        let max_attempts = self.retry.max_retries().saturating_add(1);
        let mut attempt = 1u32;

        loop {
            if cancel.is_cancelled() {
                return Err(MeteoraError::Canceled(CancelStage::BeforeAttempt(attempt)));
            }

            // A fresh request per attempt; nothing from a previous attempt is reused.
            let request = self
                .http
                .request(method.clone(), url.clone())
                .header(header::ACCEPT, "application/json")
                .header(header::USER_AGENT, USER_AGENT)
                .build()
                .map_err(MeteoraError::Request)?;

            let err = match self.http.execute(request).await {
                Ok(response) => {
                    let status = response.status();
                    let body = response.bytes().await.map_err(MeteoraError::Body)?;

                    if status.is_success() {
                        return Ok(body.to_vec());
                    }

                    let err = MeteoraError::Api(ApiError::new(
                        status.as_u16(),
                        String::from_utf8_lossy(&body),
                    ));
                    if !should_retry_status(status) {
                        #[cfg(feature = "tracing")]
                        tracing::debug!(%method, %url, %status, "request failed with non-retryable status");

                        return Err(err);
                    }
                    err
                }
                Err(source) => MeteoraError::Transport { attempt, source },
            };

            if attempt >= max_attempts {
                #[cfg(feature = "tracing")]
                tracing::debug!(%method, %url, attempts = attempt, error = %err, "retries exhausted");

                return Err(err);
            }

            let delay = self.retry.backoff_delay(attempt);

            #[cfg(feature = "tracing")]
            tracing::debug!(
                %method,
                %url,
                attempt,
                ?delay,
                error = %err,
                "retrying request"
            );

            tokio::select! {
                _ = cancel.cancelled() => {
                    return Err(MeteoraError::Canceled(CancelStage::DuringBackoff));
                }
                _ = tokio::time::sleep(delay) => {}
            }
            attempt += 1;
        }
    }
}

fn should_retry_status(status: StatusCode) -> bool {
    status == StatusCode::TOO_MANY_REQUESTS || status.is_server_error()
}

fn decode<T: DeserializeOwned>(body: &[u8]) -> Result<T> {
    serde_json::from_slice(body).map_err(MeteoraError::Decode)
}

#[cfg(test)]
mod tests {
    use reqwest::StatusCode;

    use super::{join_url, should_retry_status, Transport, USER_AGENT};
    use crate::{MeteoraError, RetryConfig};

    #[test]
    fn join_url_handles_slashes() {
        let cases = [
            ("http://example.com", "test", "http://example.com/test"),
            ("http://example.com", "/test", "http://example.com/test"),
            ("http://example.com/", "/pools/abc", "http://example.com/pools/abc"),
            ("http://example.com/api", "/pools", "http://example.com/api/pools"),
            ("http://example.com/api/", "pools/", "http://example.com/api/pools/"),
            ("http://127.0.0.1:8080", "/pair/all", "http://127.0.0.1:8080/pair/all"),
        ];

        for (base, path, want) in cases {
            let url = join_url(base, path).expect("url must join");
            assert_eq!(url.as_str(), want, "base={base} path={path}");
        }
    }

    #[test]
    fn join_url_rejects_invalid_base() {
        let err = join_url("not a url", "/pools").expect_err("base must be rejected");
        assert!(matches!(err, MeteoraError::InvalidUrl(_)));
    }

    #[test]
    fn retryable_statuses() {
        assert!(should_retry_status(StatusCode::TOO_MANY_REQUESTS));
        assert!(should_retry_status(StatusCode::INTERNAL_SERVER_ERROR));
        assert!(should_retry_status(StatusCode::HTTP_VERSION_NOT_SUPPORTED));
        assert!(!should_retry_status(StatusCode::NOT_FOUND));
        assert!(!should_retry_status(StatusCode::BAD_REQUEST));
        assert!(!should_retry_status(StatusCode::UNAUTHORIZED));
    }

    #[test]
    fn new_uses_default_retry_config() {
        let transport = Transport::new("http://example.com", None);
        assert_eq!(transport.base_url(), "http://example.com");
        assert_eq!(transport.retry_config(), &RetryConfig::default());
    }

    #[test]
    fn user_agent_names_the_sdk() {
        assert!(USER_AGENT.starts_with("Meteora Rust SDK/"));
    }

    #[test]
    fn debug_omits_client_internals() {
        let transport = Transport::new("http://example.com", Some(reqwest::Client::new()));
        let debug = format!("{transport:?}");
        assert!(debug.contains("http://example.com"));
        assert!(debug.contains("max_retries"));
    }
}

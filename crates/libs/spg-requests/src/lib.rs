//! HTTP client library for the playground's remote collaborators.
//!
//! This library provides a thin wrapper around reqwest bound to a base URL,
//! so the compile endpoint and the object store can both be addressed by
//! relative path.
//!
//! # Examples
//!
//! ```rust,no_run
//! use spg_requests::ApiClient;
//!
//! # async fn example() -> spg_requests::prelude::Result<()> {
//! let store = ApiClient::new("https://store.example.com")?;
//! let stdout = store.get_text(&["abc123", "stdout.txt"]).await?;
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod prelude;

use reqwest::{Response, Url, header};
use serde::{Serialize, de::DeserializeOwned};

use crate::prelude::*;

/// HTTP client for a single remote base URL.
#[derive(Debug, Clone)]
pub struct ApiClient {
    url: String,
    base: Url,
    pub client: reqwest::Client,
}

impl ApiClient {
    /// Creates a new API client with the given base URL.
    ///
    /// Trailing slashes on the base URL are ignored.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use spg_requests::ApiClient;
    ///
    /// let client = ApiClient::new("https://api.example.com/").unwrap();
    /// assert_eq!(client.path("persist"), "https://api.example.com/persist");
    /// ```
    pub fn new(url: impl Into<String>) -> Result<Self> {
        let mut headers = header::HeaderMap::new();
        headers.insert(header::ACCEPT, header::HeaderValue::from_static("*/*"));
        let client = reqwest::ClientBuilder::new()
            .default_headers(headers)
            .build()?;
        Self::with_client(url, client)
    }

    /// Creates an API client that reuses an existing reqwest client.
    ///
    /// Fails with [`Error::InvalidBaseUrl`] unless `url` is an absolute URL
    /// that can carry a path.
    pub fn with_client(url: impl Into<String>, client: reqwest::Client) -> Result<Self> {
        let url = url.into().trim_end_matches('/').to_string();
        let base = match Url::parse(&url) {
            Ok(base) if !base.cannot_be_a_base() => base,
            _ => return Err(Error::InvalidBaseUrl(url)),
        };
        Ok(Self { url, base, client })
    }

    /// Base URL every endpoint is resolved against.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Constructs the full URL for an endpoint.
    pub fn path(&self, endpoint: &str) -> String {
        format!("{}/{}", self.url, endpoint.trim_start_matches('/'))
    }

    /// Constructs the URL of a resource addressed by raw path segments.
    ///
    /// Every segment is percent-encoded, so a `/`, `?` or `#` inside a
    /// segment stays part of that segment.
    ///
    /// ```rust
    /// use spg_requests::ApiClient;
    ///
    /// let store = ApiClient::new("https://store.example.com/bucket/").unwrap();
    /// assert_eq!(
    ///     store.segments_url(["a?b", "input.saty"]).as_str(),
    ///     "https://store.example.com/bucket/a%3Fb/input.saty"
    /// );
    /// ```
    pub fn segments_url<'a, I>(&self, segments: I) -> Url
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut url = self.base.clone();
        // `with_client` only accepts bases that can carry a path.
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    /// Turns a non-success response into [`Error::Status`].
    async fn check_status(response: Response) -> Result<Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let message = response.text().await.unwrap_or_default();
        Err(Error::Status { status, message })
    }

    /// Makes a POST request with a JSON body and deserializes the JSON response.
    pub async fn post_and_deserialize<B, U>(&self, endpoint: &str, body: &B) -> Result<U>
    where
        B: Serialize + ?Sized,
        U: DeserializeOwned,
    {
        let response = self
            .client
            .post(self.path(endpoint))
            .json(body)
            .send()
            .await?;

        Ok(Self::check_status(response).await?.json().await?)
    }

    /// Makes a GET request for the resource at `segments` and returns the
    /// full response body as text.
    pub async fn get_text(&self, segments: &[&str]) -> Result<String> {
        let url = self.segments_url(segments.iter().copied());
        let response = self.client.get(url).send().await?;
        Ok(Self::check_status(response).await?.text().await?)
    }

    /// Makes a HEAD request; succeeds when the remote reports the resource present.
    ///
    /// No body is transferred.
    pub async fn exists(&self, segments: &[&str]) -> Result<()> {
        let url = self.segments_url(segments.iter().copied());
        let response = self.client.head(url).send().await?;
        Self::check_status(response).await?;
        Ok(())
    }
}

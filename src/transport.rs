//! The pluggable capability that performs the network exchange.

use std::fmt;
use std::io::{BufReader, Read};
use std::sync::Arc;
use std::time::Duration;

use reqwest::header::HeaderMap;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use url::Url;

use crate::errors::{Result, WebMediaError};

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

/// Sends a GET request for a fully formed URL.
///
/// Implementations report failures to send or receive as
/// [`WebMediaError::Transport`]. Status codes are passed through untouched:
/// a non-2xx response is still `Ok`, and its body goes through the same
/// decoder as a successful one. If the API signals errors in-band, check the
/// decoded values.
pub trait Transport: Send + Sync {
    fn fetch_url(&self, url: &Url) -> Result<Response>;
}

impl<T: Transport + ?Sized> Transport for Arc<T> {
    fn fetch_url(&self, url: &Url) -> Result<Response> {
        (**self).fetch_url(url)
    }
}

impl<T: Transport + ?Sized> Transport for Box<T> {
    fn fetch_url(&self, url: &Url) -> Result<Response> {
        (**self).fetch_url(url)
    }
}

/// A response as returned by a [`Transport`].
///
/// The body is a stream owned by this value; decoding consumes the response,
/// so the stream is released whether or not decoding succeeds.
pub struct Response {
    status: StatusCode,
    headers: HeaderMap,
    body: Box<dyn Read + Send>,
}

impl Response {
    pub fn new(status: StatusCode, body: impl Read + Send + 'static) -> Self {
        Self {
            status,
            headers: HeaderMap::new(),
            body: Box::new(body),
        }
    }

    pub fn with_headers(mut self, headers: HeaderMap) -> Self {
        self.headers = headers;
        self
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// Take the raw body stream.
    pub fn into_body(self) -> Box<dyn Read + Send> {
        self.body
    }

    /// Decode the body as JSON into `T`.
    pub fn json<T: DeserializeOwned>(self) -> Result<T> {
        let reader = BufReader::new(self.body);
        Ok(serde_json::from_reader(reader)?)
    }
}

impl fmt::Debug for Response {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Response")
            .field("status", &self.status)
            .field("headers", &self.headers)
            .finish_non_exhaustive()
    }
}

/// The production transport, backed by a blocking reqwest client.
///
/// The reqwest client pools connections and is safe to share across threads.
/// Any deadline is enforced here through the client's timeout.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    http: reqwest::blocking::Client,
}

impl HttpTransport {
    /// A transport with a 60 second request timeout.
    pub fn new() -> Result<Self> {
        Self::with_timeout(DEFAULT_TIMEOUT)
    }

    pub fn with_timeout(timeout: Duration) -> Result<Self> {
        let http = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(WebMediaError::Http)?;
        Ok(Self { http })
    }

    /// Wrap an already configured reqwest client.
    pub fn from_client(http: reqwest::blocking::Client) -> Self {
        Self { http }
    }
}

impl Transport for HttpTransport {
    fn fetch_url(&self, url: &Url) -> Result<Response> {
        let response = self
            .http
            .get(url.as_str())
            .send()
            .map_err(WebMediaError::transport)?;

        let status = response.status();
        let headers = response.headers().clone();
        Ok(Response::new(status, response).with_headers(headers))
    }
}

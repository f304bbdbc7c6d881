//! An offline [`Transport`] that answers from canned bodies.

use std::collections::HashMap;
use std::io::Cursor;

use reqwest::StatusCode;
use url::Url;

use crate::errors::{Result, WebMediaError};
use crate::transport::{Response, Transport};

/// Maps request paths to canned responses.
///
/// Lookups use the URL path only (e.g. `/videos/857.json`), so the access
/// token and filters do not affect which fixture is served. Requests for a
/// path with no fixture fail with a transport error.
///
/// ```
/// use webmedia::{Client, FixtureTransport};
///
/// let fixtures = FixtureTransport::new().with("/tags/86.json", r#"{"id": 86, "name": "Futebol"}"#);
/// let client = Client::builder("fake-token").transport(fixtures).build().unwrap();
///
/// let tag = client.tag(86).fetch().unwrap();
/// assert_eq!(tag.name, "Futebol");
/// ```
#[derive(Debug, Clone, Default)]
pub struct FixtureTransport {
    fixtures: HashMap<String, (StatusCode, Vec<u8>)>,
}

impl FixtureTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Serve `body` with `200 OK` for `path`.
    pub fn with(self, path: impl Into<String>, body: impl Into<Vec<u8>>) -> Self {
        self.with_status(path, StatusCode::OK, body)
    }

    pub fn with_status(
        mut self,
        path: impl Into<String>,
        status: StatusCode,
        body: impl Into<Vec<u8>>,
    ) -> Self {
        self.fixtures.insert(path.into(), (status, body.into()));
        self
    }
}

impl Transport for FixtureTransport {
    fn fetch_url(&self, url: &Url) -> Result<Response> {
        let (status, body) = self.fixtures.get(url.path()).ok_or_else(|| {
            WebMediaError::transport(format!("no fixture registered for {}", url.path()))
        })?;
        Ok(Response::new(*status, Cursor::new(body.clone())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serves_by_path_ignoring_query() {
        let transport = FixtureTransport::new().with("/tags.json", "[]");
        let url = Url::parse("https://api.video.example.com/tags.json?access_token=x&name=y").unwrap();

        let response = transport.fetch_url(&url).unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.json::<Vec<u32>>().unwrap(), Vec::<u32>::new());
    }

    #[test]
    fn unknown_path_is_a_transport_error() {
        let transport = FixtureTransport::new();
        let url = Url::parse("https://api.video.example.com/videos/1.json").unwrap();

        let err = transport.fetch_url(&url).unwrap_err();
        assert!(err.is_transport());
        assert!(err.to_string().contains("/videos/1.json"));
    }

    #[test]
    fn status_is_served_as_registered() {
        let transport =
            FixtureTransport::new().with_status("/tags/1.json", StatusCode::NOT_FOUND, "{}");
        let url = Url::parse("https://api.video.example.com/tags/1.json").unwrap();

        assert_eq!(
            transport.fetch_url(&url).unwrap().status(),
            StatusCode::NOT_FOUND
        );
    }
}

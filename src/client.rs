use std::fmt;

use url::Url;

use crate::errors::{Result, WebMediaError};
use crate::params::Params;
use crate::query::Query;
use crate::tag::{TagQuery, TagsQuery};
use crate::transport::{HttpTransport, Response, Transport};
use crate::video::{VideoQuery, VideosQuery};

const DEFAULT_BASE_URL: &str = "https://api.video.globoi.com";
const ACCESS_TOKEN_PARAM: &str = "access_token";

/// Builder for constructing a [`Client`] with custom configuration.
///
/// Options are applied once, at [`build`](Self::build) time. A built client
/// cannot be reconfigured.
///
/// # Example
///
/// ```no_run
/// use webmedia::{ClientBuilder, HttpTransport};
/// use std::time::Duration;
///
/// # fn example() -> webmedia::Result<()> {
/// let client = ClientBuilder::new("my-access-token")
///     .base_url("https://api.video.example.com")
///     .transport(HttpTransport::with_timeout(Duration::from_secs(10))?)
///     .build()?;
/// # Ok(())
/// # }
/// ```
pub struct ClientBuilder {
    access_token: String,
    base_url: String,
    transport: Option<Box<dyn Transport>>,
}

impl ClientBuilder {
    /// Create a new builder with default settings.
    pub fn new(access_token: impl Into<String>) -> Self {
        Self {
            access_token: access_token.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            transport: None,
        }
    }

    /// Override the base URL (defaults to `https://api.video.globoi.com`).
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Replace the HTTP transport, e.g. with a [`FixtureTransport`](crate::FixtureTransport).
    pub fn transport(mut self, transport: impl Transport + 'static) -> Self {
        self.transport = Some(Box::new(transport));
        self
    }

    /// Build the [`Client`].
    ///
    /// Returns [`WebMediaError::InvalidBaseUrl`] if the base URL does not
    /// parse, so a bad configuration fails here rather than on first fetch.
    pub fn build(self) -> Result<Client> {
        let base_url = parse_base_url(&self.base_url)?;

        let transport: Box<dyn Transport> = match self.transport {
            Some(transport) => transport,
            None => Box::new(HttpTransport::new()?),
        };

        Ok(Client {
            base_url,
            access_token: self.access_token,
            transport,
        })
    }
}

impl fmt::Debug for ClientBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientBuilder")
            .field("base_url", &self.base_url)
            .field("custom_transport", &self.transport.is_some())
            .finish_non_exhaustive()
    }
}

fn parse_base_url(raw: &str) -> Result<Url> {
    let url = Url::parse(raw).map_err(|source| WebMediaError::InvalidBaseUrl {
        url: raw.to_string(),
        source,
    })?;

    if url.cannot_be_a_base() {
        return Err(WebMediaError::BaseUrlCannotBeABase(raw.to_string()));
    }
    if !matches!(url.scheme(), "http" | "https") {
        return Err(WebMediaError::UnsupportedScheme(url.scheme().to_string()));
    }

    Ok(url)
}

/// The webmedia API client.
///
/// Use [`Client::new`] for quick construction or [`ClientBuilder`] for full
/// control. The client is a factory for query builders; each builder borrows
/// it and issues its request through it.
///
/// # Example
///
/// ```no_run
/// use webmedia::Client;
///
/// # fn example() -> webmedia::Result<()> {
/// let client = Client::new("my-access-token");
///
/// let results = client.videos().with_tags(["Flamengo"]).per_page(10).fetch()?;
/// println!("{} videos in total", results.pager.total_entries);
/// # Ok(())
/// # }
/// ```
pub struct Client {
    base_url: Url,
    access_token: String,
    transport: Box<dyn Transport>,
}

impl Client {
    /// Create a new client with the given access token and default settings.
    ///
    /// For customization, use [`ClientBuilder`] instead.
    pub fn new(access_token: impl Into<String>) -> Self {
        ClientBuilder::new(access_token)
            .build()
            .expect("failed to build default client")
    }

    /// Start configuring a client.
    pub fn builder(access_token: impl Into<String>) -> ClientBuilder {
        ClientBuilder::new(access_token)
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// A single video by id.
    pub fn video(&self, id: u64) -> VideoQuery<'_> {
        VideoQuery::new(self, id)
    }

    /// The paginated video listing.
    pub fn videos(&self) -> VideosQuery<'_> {
        VideosQuery::new(self)
    }

    /// A single tag by id.
    pub fn tag(&self, id: u64) -> TagQuery<'_> {
        TagQuery::new(self, id)
    }

    /// The tag listing.
    pub fn tags(&self) -> TagsQuery<'_> {
        TagsQuery::new(self)
    }

    /// Build the full request URL for `endpoint` and `params`.
    ///
    /// The endpoint is appended after the base URL's path. `access_token` is
    /// always taken from the client, replacing any value in `params`.
    pub fn build_url(&self, endpoint: &str, mut params: Params) -> Url {
        params.set(ACCESS_TOKEN_PARAM, self.access_token.as_str());

        let mut url = self.base_url.clone();
        let path = format!(
            "{}/{}",
            url.path().trim_end_matches('/'),
            endpoint.trim_start_matches('/')
        );
        url.set_path(&path);
        url.set_query(Some(&params.encode()));
        url
    }

    /// The request URL a query would be sent to.
    pub fn url_for(&self, query: &impl Query) -> Url {
        self.build_url(&query.endpoint(), query.params())
    }

    // -----------------------------------------------------------------------
    // Private helpers
    // -----------------------------------------------------------------------

    /// Send a query through the transport and hand back the raw response.
    pub(crate) fn fetch(&self, query: &impl Query) -> Result<Response> {
        let endpoint = query.endpoint();
        let url = self.build_url(&endpoint, query.params());

        let response = self.transport.fetch_url(&url)?;
        tracing::debug!(%endpoint, status = %response.status(), "fetched");
        Ok(response)
    }
}

impl fmt::Debug for Client {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Client")
            .field("base_url", &self.base_url.as_str())
            .finish_non_exhaustive()
    }
}

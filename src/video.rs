//! Video queries.
//!
//! Every chaining method takes `&self` and returns a new query, so a
//! partially built query can be reused as a template.

use chrono::{DateTime, TimeZone, Utc};

use crate::client::Client;
use crate::errors::Result;
use crate::models::{Pager, Video, VideoResults};
use crate::params::{format_timestamp, Params};
use crate::query::Query;

/// A single video, fetched with [`Client::video`].
#[derive(Debug, Clone)]
pub struct VideoQuery<'a> {
    client: &'a Client,
    id: u64,
    fields: Vec<String>,
}

impl<'a> VideoQuery<'a> {
    pub(crate) fn new(client: &'a Client, id: u64) -> Self {
        Self {
            client,
            id,
            fields: Vec::new(),
        }
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    /// Ask the API to return only these fields (`only=`). Repeated calls append.
    pub fn fields<I, S>(&self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut next = self.clone();
        next.fields.extend(fields.into_iter().map(Into::into));
        next
    }

    pub fn fetch(&self) -> Result<Video> {
        self.client.fetch(self)?.json()
    }
}

impl Query for VideoQuery<'_> {
    fn endpoint(&self) -> String {
        format!("videos/{}.json", self.id)
    }

    fn params(&self) -> Params {
        let mut params = Params::new();
        params.set_list("only", self.fields.iter().cloned());
        params
    }
}

/// The paginated video listing, from [`Client::videos`].
///
/// # Example
///
/// ```no_run
/// use chrono::{TimeZone, Utc};
/// use webmedia::Client;
///
/// # fn example() -> webmedia::Result<()> {
/// let client = Client::new("my-access-token");
///
/// let query = client
///     .videos()
///     .with_tags(["futebol", "Flamengo"])
///     .published_since(Utc.with_ymd_and_hms(2017, 3, 1, 0, 0, 0).unwrap())
///     .per_page(20);
///
/// let mut page = query.fetch()?;
/// loop {
///     for video in &page.videos {
///         println!("{} {}", video.id, video.title);
///     }
///     match query.next_page(&page.pager) {
///         Some(next) => page = next.fetch()?,
///         None => break,
///     }
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct VideosQuery<'a> {
    client: &'a Client,
    page: Option<u32>,
    per_page: Option<u32>,
    order_by: Option<String>,
    tags: Vec<String>,
    fields: Vec<String>,
    published_since: Option<DateTime<Utc>>,
    published_until: Option<DateTime<Utc>>,
}

impl<'a> VideosQuery<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self {
            client,
            page: None,
            per_page: None,
            order_by: None,
            tags: Vec::new(),
            fields: Vec::new(),
            published_since: None,
            published_until: None,
        }
    }

    pub fn page(&self, n: u32) -> Self {
        let mut next = self.clone();
        next.page = Some(n);
        next
    }

    pub fn per_page(&self, n: u32) -> Self {
        let mut next = self.clone();
        next.per_page = Some(n);
        next
    }

    /// Server-side ordering, e.g. `"published_at"`.
    pub fn order_by(&self, order: impl Into<String>) -> Self {
        let mut next = self.clone();
        next.order_by = Some(order.into());
        next
    }

    /// Only videos carrying all of these tags (`tags.all=`).
    ///
    /// Tags are appended in call order; duplicates are kept.
    pub fn with_tags<I, S>(&self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut next = self.clone();
        next.tags.extend(tags.into_iter().map(Into::into));
        next
    }

    /// Ask the API to return only these fields (`only=`). Repeated calls append.
    pub fn fields<I, S>(&self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut next = self.clone();
        next.fields.extend(fields.into_iter().map(Into::into));
        next
    }

    /// Videos published at or after `t` (`published_at.gte=`), compared in UTC.
    pub fn published_since<Tz: TimeZone>(&self, t: DateTime<Tz>) -> Self {
        let mut next = self.clone();
        next.published_since = Some(t.with_timezone(&Utc));
        next
    }

    /// Videos published at or before `t` (`published_at.lte=`), compared in UTC.
    ///
    /// Not checked against [`published_since`](Self::published_since); an
    /// inverted range is sent as is.
    pub fn published_until<Tz: TimeZone>(&self, t: DateTime<Tz>) -> Self {
        let mut next = self.clone();
        next.published_until = Some(t.with_timezone(&Utc));
        next
    }

    /// The pagination metadata for this listing, without the videos.
    pub fn pager(&self) -> VideosPagerQuery<'a> {
        VideosPagerQuery {
            videos: self.clone(),
        }
    }

    /// The same filters against the older `videos.json` endpoint, which
    /// answers with a bare list and no pager.
    pub fn legacy(&self) -> LegacyVideosQuery<'a> {
        LegacyVideosQuery {
            videos: self.clone(),
        }
    }

    /// The query for the page after `pager`, or `None` if `pager` is the last one.
    pub fn next_page(&self, pager: &Pager) -> Option<Self> {
        pager.next_page.map(|n| self.page(n))
    }

    pub fn fetch(&self) -> Result<VideoResults> {
        self.client.fetch(self)?.json()
    }

    fn filter_params(&self) -> Params {
        let mut params = Params::new();

        if let Some(page) = self.page {
            params.set("page", page.to_string());
        }
        if let Some(per_page) = self.per_page {
            params.set("per_page", per_page.to_string());
        }
        if let Some(order_by) = &self.order_by {
            params.set("order_by", order_by.as_str());
        }
        params.set_list("tags.all", self.tags.iter().cloned());
        params.set_list("only", self.fields.iter().cloned());
        if let Some(since) = &self.published_since {
            params.set("published_at.gte", format_timestamp(since));
        }
        if let Some(until) = &self.published_until {
            params.set("published_at.lte", format_timestamp(until));
        }

        params
    }
}

impl Query for VideosQuery<'_> {
    fn endpoint(&self) -> String {
        "videos/with_pagination.json".to_string()
    }

    fn params(&self) -> Params {
        self.filter_params()
    }
}

/// Pagination metadata only, from [`VideosQuery::pager`].
#[derive(Debug, Clone)]
pub struct VideosPagerQuery<'a> {
    videos: VideosQuery<'a>,
}

impl<'a> VideosPagerQuery<'a> {
    /// The listing this pager describes.
    pub fn videos(&self) -> &VideosQuery<'a> {
        &self.videos
    }

    pub fn fetch(&self) -> Result<Pager> {
        self.videos.client.fetch(self)?.json()
    }
}

impl Query for VideosPagerQuery<'_> {
    fn endpoint(&self) -> String {
        "videos/pagination.json".to_string()
    }

    fn params(&self) -> Params {
        self.videos.filter_params()
    }
}

/// The older, unpaginated listing, from [`VideosQuery::legacy`].
#[derive(Debug, Clone)]
pub struct LegacyVideosQuery<'a> {
    videos: VideosQuery<'a>,
}

impl<'a> LegacyVideosQuery<'a> {
    pub fn videos(&self) -> &VideosQuery<'a> {
        &self.videos
    }

    pub fn fetch(&self) -> Result<Vec<Video>> {
        self.videos.client.fetch(self)?.json()
    }
}

impl Query for LegacyVideosQuery<'_> {
    fn endpoint(&self) -> String {
        "videos.json".to_string()
    }

    fn params(&self) -> Params {
        self.videos.filter_params()
    }
}

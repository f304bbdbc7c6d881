use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Tag {
    pub id: u64,
    pub name: String,
}

/// Editorial metadata only some videos carry.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct VideoMetadata {
    /// e.g. "L", "12", "18".
    pub content_rating: String,
}

/// A video as returned by the API.
///
/// Only `id` is mandatory. When a query narrows the response with
/// `fields(..)`, text fields that were left out decode as empty and the
/// optional fields as `None`.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Video {
    pub id: u64,

    #[serde(default)]
    pub title: String,

    #[serde(default)]
    pub description: String,

    /// Length as reported by the server. The unit (seconds or milliseconds)
    /// depends on the API generation, so it is kept as an opaque integer.
    #[serde(default)]
    pub duration: Option<u64>,

    #[serde(default)]
    pub published_at: Option<DateTime<Utc>>,

    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,

    #[serde(default)]
    pub exhibited_at: Option<DateTime<Utc>>,

    /// Absent on the older API generation.
    #[serde(default)]
    pub subscriber_only: Option<bool>,

    /// In the order the API lists them.
    #[serde(default)]
    pub tags: Vec<String>,

    #[serde(default)]
    pub extended_metadata: Option<VideoMetadata>,
}

/// Describes one window of a paginated listing.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Pager {
    pub total_entries: u64,
    pub total_pages: u32,
    pub per_page: u32,
    pub offset: u64,
    /// `None` on the first page.
    #[serde(default)]
    pub previous_page: Option<u32>,
    pub current_page: u32,
    /// `None` on the last page.
    #[serde(default)]
    pub next_page: Option<u32>,
}

impl Pager {
    pub fn has_next(&self) -> bool {
        self.next_page.is_some()
    }

    pub fn has_previous(&self) -> bool {
        self.previous_page.is_some()
    }
}

/// Returned by [`VideosQuery::fetch`](crate::VideosQuery::fetch).
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct VideoResults {
    pub pager: Pager,
    pub videos: Vec<Video>,
}

impl VideoResults {
    /// `true` if another page follows this one.
    pub fn has_more(&self) -> bool {
        self.pager.has_next()
    }
}

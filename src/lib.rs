//! # webmedia
//!
//! Rust client for the webmedia video platform API. Build a query, chain
//! filters onto it, and fetch typed videos, tags, and paginated listings.
//!
//! ## Quick start
//!
//! ```no_run
//! use webmedia::Client;
//!
//! fn main() -> webmedia::Result<()> {
//!     let client = Client::new("my-access-token");
//!
//!     let video = client.video(5767587).fetch()?;
//!     println!("{} ({:?})", video.title, video.duration);
//!
//!     let results = client
//!         .videos()
//!         .with_tags(["futebol", "Flamengo"])
//!         .per_page(15)
//!         .page(3)
//!         .fetch()?;
//!     for video in &results.videos {
//!         println!("  {} {}", video.id, video.title);
//!     }
//!
//!     for tag in client.tags().name("Futebol").fetch()? {
//!         println!("tag {} = {}", tag.id, tag.name);
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Queries
//!
//! Queries are immutable: every chaining method returns a new query and
//! leaves its receiver as it was. Parameters are serialized with keys in
//! ascending order, and multi-valued filters are joined with `|`.
//!
//! ## Testing without a network
//!
//! ```
//! use webmedia::{Client, FixtureTransport};
//!
//! let fixtures = FixtureTransport::new()
//!     .with("/tags.json", r#"[{"id": 86, "name": "Futebol"}]"#);
//! let client = Client::builder("fake-token")
//!     .transport(fixtures)
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(client.tags().fetch().unwrap().len(), 1);
//! ```
//!
//! Response status codes are not interpreted. An error page is decoded like
//! any other body and usually surfaces as [`WebMediaError::Decode`].

mod client;
mod errors;
mod fixture;
mod models;
mod params;
mod query;
mod tag;
mod transport;
mod video;

pub use client::{Client, ClientBuilder};
pub use errors::{BoxError, Result, WebMediaError};
pub use fixture::FixtureTransport;
pub use models::{Pager, Tag, Video, VideoMetadata, VideoResults};
pub use params::{format_timestamp, ParamValue, Params, DATE_LAYOUT};
pub use query::Query;
pub use tag::{TagQuery, TagsQuery};
pub use transport::{HttpTransport, Response, Transport};
pub use video::{LegacyVideosQuery, VideoQuery, VideosPagerQuery, VideosQuery};

//! Quick-start examples for the webmedia client.
//!
//! Run with:
//!   WEBMEDIA_ACCESS_TOKEN=... cargo run --example quickstart

use chrono::{Duration, Utc};
use webmedia::Client;

fn main() -> webmedia::Result<()> {
    // -----------------------------------------------------------------------
    // 1. Create a client
    // -----------------------------------------------------------------------
    let token = std::env::var("WEBMEDIA_ACCESS_TOKEN").unwrap_or_default();
    let client = Client::new(token);

    // -----------------------------------------------------------------------
    // 2. Fetch a single video
    // -----------------------------------------------------------------------
    let video = client.video(5767587).fetch()?;
    println!("{} - {}", video.id, video.title);
    if let Some(ref metadata) = video.extended_metadata {
        println!("Content rating: {}", metadata.content_rating);
    }
    println!();

    // -----------------------------------------------------------------------
    // 3. Walk a filtered listing page by page
    // -----------------------------------------------------------------------
    let query = client
        .videos()
        .with_tags(["futebol"])
        .published_since(Utc::now() - Duration::days(7))
        .per_page(10);

    let pager = query.pager().fetch()?;
    println!("{} videos over {} pages", pager.total_entries, pager.total_pages);

    let mut page = query.fetch()?;
    loop {
        println!("Page {}:", page.pager.current_page);
        for video in &page.videos {
            println!("  [{}] {}", video.id, video.title);
        }
        match query.next_page(&page.pager) {
            Some(next) => page = next.fetch()?,
            None => break,
        }
    }
    println!();

    // -----------------------------------------------------------------------
    // 4. Look up tags
    // -----------------------------------------------------------------------
    for tag in client.tags().name("Futebol").fetch()? {
        println!("Tag {}: {}", tag.id, tag.name);
    }

    Ok(())
}

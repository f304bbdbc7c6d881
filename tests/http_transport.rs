use std::net::TcpListener;

use webmedia::{Client, Tag, Video, WebMediaError};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const VIDEO_5767587: &str = include_str!("fixtures/video-5767587.json");
const VIDEOS_WITH_PAGINATION: &str = include_str!("fixtures/videos-with-pagination.json");

/// Run a blocking fetch off the async runtime that drives the mock server.
async fn blocking<T, F>(uri: String, f: F) -> webmedia::Result<T>
where
    T: Send + 'static,
    F: FnOnce(&Client) -> webmedia::Result<T> + Send + 'static,
{
    tokio::task::spawn_blocking(move || {
        let client = Client::builder("fake-token").base_url(uri).build()?;
        f(&client)
    })
    .await
    .expect("blocking task panicked")
}

#[tokio::test(flavor = "multi_thread")]
async fn fetches_a_video_over_http() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/videos/5767587.json"))
        .and(query_param("access_token", "fake-token"))
        .respond_with(ResponseTemplate::new(200).set_body_string(VIDEO_5767587))
        .expect(1)
        .mount(&server)
        .await;

    let video: Video = blocking(server.uri(), |c| c.video(5767587).fetch())
        .await
        .unwrap();

    assert_eq!(video.id, 5767587);
    assert_eq!(video.duration, Some(17067));
}

#[tokio::test(flavor = "multi_thread")]
async fn sends_filters_as_query_parameters() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/videos/with_pagination.json"))
        .and(query_param("access_token", "fake-token"))
        .and(query_param("page", "3"))
        .and(query_param("per_page", "15"))
        .and(query_param("tags.all", "futebol|Tempo Real"))
        .respond_with(ResponseTemplate::new(200).set_body_string(VIDEOS_WITH_PAGINATION))
        .expect(1)
        .mount(&server)
        .await;

    let results = blocking(server.uri(), |c| {
        c.videos()
            .with_tags(["futebol", "Tempo Real"])
            .per_page(15)
            .page(3)
            .fetch()
    })
    .await
    .unwrap();

    assert_eq!(results.videos.len(), 5);
    assert_eq!(results.pager.next_page, Some(2));
}

#[tokio::test(flavor = "multi_thread")]
async fn error_status_is_decoded_like_any_body() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/tags/1.json"))
        .respond_with(
            ResponseTemplate::new(404).set_body_string(r#"{"error": "tag not found"}"#),
        )
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/tags/86.json"))
        .respond_with(ResponseTemplate::new(500).set_body_string(r#"{"id": 86, "name": "Futebol"}"#))
        .mount(&server)
        .await;

    let err = blocking(server.uri(), |c| c.tag(1).fetch()).await.unwrap_err();
    assert!(matches!(err, WebMediaError::Decode(_)));

    let tag: Tag = blocking(server.uri(), |c| c.tag(86).fetch()).await.unwrap();
    assert_eq!(tag.name, "Futebol");
}

#[test]
fn unreachable_host_is_a_transport_error() {
    let port = {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap().port()
    };

    let client = Client::builder("fake-token")
        .base_url(format!("http://127.0.0.1:{port}"))
        .build()
        .unwrap();

    let err = client.tags().fetch().unwrap_err();
    assert!(err.is_transport(), "unexpected error: {err}");
}

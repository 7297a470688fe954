//! Integration tests for the conversion pipeline over real HTTP
//!
//! These tests use wiremock to stand up a local server and run the
//! reqwest-backed fetcher against it end to end.

use link_titler::convert::fetch_title;
use link_titler::handlers::{convert_selected_urls, handle_paste, Editor};
use link_titler::{
    convert_text, ConvertedResult, FetchError, FetchRequest, Fetcher, HttpFetcher, PasteEvent,
    Settings, TextBuffer,
};
use std::time::Duration;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn fetcher() -> HttpFetcher {
    HttpFetcher::new(Duration::from_secs(5)).expect("Failed to build HTTP client")
}

async fn mount_page(server: &MockServer, route: &str, status: u16, body: &str) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(
            ResponseTemplate::new(status)
                .set_body_string(body.to_string())
                .insert_header("content-type", "text/html; charset=utf-8"),
        )
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_fetch_title_from_server() {
    let server = MockServer::start().await;
    mount_page(
        &server,
        "/article",
        200,
        "<html><head>\n<TITLE>\n  Rust&#8217;s   Book &amp; More\n</TITLE></head></html>",
    )
    .await;

    let url = format!("{}/article", server.uri());
    let title = fetch_title(&fetcher(), &url).await;

    assert_eq!(title.as_deref(), Some("Rust\u{2019}s Book & More"));
}

#[tokio::test]
async fn test_non_success_status_is_returned_not_raised() {
    let server = MockServer::start().await;
    mount_page(&server, "/missing", 404, "<title>Not Found</title>").await;

    let url = format!("{}/missing", server.uri());
    let response = fetcher()
        .fetch(&FetchRequest::get(url.clone()))
        .await
        .expect("404 should come back as a response");
    assert_eq!(response.status, 404);

    let mut strict = FetchRequest::get(url);
    strict.error_on_status = true;
    let result = fetcher().fetch(&strict).await;
    assert!(matches!(result, Err(FetchError::Status { status: 404, .. })));
}

#[tokio::test]
async fn test_convert_text_with_mixed_outcomes() {
    let server = MockServer::start().await;
    mount_page(&server, "/good", 200, "<title>Good Page</title>").await;
    mount_page(&server, "/broken", 500, "<title>Server Error</title>").await;
    mount_page(&server, "/untitled", 200, "<p>no title here</p>").await;

    let base = server.uri();
    let text = format!(
        "Read {base}/good, then {base}/broken and {base}/untitled\nAgain: {base}/good"
    );

    let converted = convert_text(&fetcher(), &text, "").await.unwrap();

    // "{base}/good," keeps its comma: the detector only stops at whitespace
    // or ')', so that occurrence is a different URL (which 404s)
    assert_eq!(
        converted.as_deref(),
        Some(
            format!(
                "Read [Untitled]({base}/good,) then [Untitled]({base}/broken) and \
                 [Untitled]({base}/untitled)\nAgain: [Good Page]({base}/good)"
            )
            .as_str()
        )
    );
}

#[tokio::test]
async fn test_duplicate_url_is_requested_once() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/once"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<title>Once</title>"))
        .expect(1)
        .mount(&server)
        .await;

    let url = format!("{}/once", server.uri());
    let text = format!("{url} and {url} and ({url})");

    let converted = convert_text(&fetcher(), &text, "Untitled").await.unwrap();

    assert_eq!(
        converted,
        Some(format!("[Once]({url}) and [Once]({url}) and ([Once]({url}))"))
    );
    // MockServer verifies `.expect(1)` when it is dropped
}

#[tokio::test]
async fn test_unreachable_host_uses_placeholder() {
    // Nothing listens on port 9 locally
    let converted = convert_text(&fetcher(), "see http://127.0.0.1:9/page", "offline")
        .await
        .unwrap();

    assert_eq!(
        converted.as_deref(),
        Some("see [offline](http://127.0.0.1:9/page)")
    );
}

#[tokio::test]
async fn test_slow_page_times_out_without_blocking_others() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/slow"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string("<title>Too Late</title>")
                .set_delay(Duration::from_secs(3)),
        )
        .mount(&server)
        .await;
    mount_page(&server, "/fast", 200, "<title>Fast</title>").await;

    let impatient = HttpFetcher::new(Duration::from_millis(500)).unwrap();
    let base = server.uri();
    let text = format!("{base}/slow {base}/fast");

    let converted = convert_text(&impatient, &text, "").await.unwrap();

    assert_eq!(
        converted,
        Some(format!("[Untitled]({base}/slow) [Fast]({base}/fast)"))
    );
}

#[tokio::test]
async fn test_convert_selection_end_to_end() {
    let server = MockServer::start().await;
    mount_page(&server, "/", 200, "<title>Example</title>").await;

    let url = format!("{}/", server.uri());
    let mut buffer = TextBuffer::select_all(format!("Visit {url}"));

    let result = convert_selected_urls(&mut buffer, &fetcher(), &Settings::default()).await;

    assert_eq!(result, Some(ConvertedResult::succeeded()));
    assert_eq!(buffer.value(), format!("Visit [Example]({url})"));
}

#[tokio::test]
async fn test_paste_end_to_end() {
    let server = MockServer::start().await;
    mount_page(&server, "/", 200, "<title>Example</title>").await;

    let url = format!("{}/", server.uri());
    let mut buffer = TextBuffer::new("# Notes\n\n");
    let mut event = PasteEvent::new(url.clone());

    let result = handle_paste(&mut event, &mut buffer, &fetcher(), &Settings::default()).await;

    assert_eq!(result, Some(ConvertedResult::succeeded()));
    assert!(event.is_default_prevented());
    assert_eq!(buffer.value(), format!("# Notes\n\n[Example]({url})"));
}

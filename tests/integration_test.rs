use std::time::Duration;

use httpmock::prelude::*;
use httpmock::Method::HEAD;

use enricher::{get_best_title_from_url, is_url_accessible, Config, Fetcher};

const PAGE: &str = r#"<!DOCTYPE html>
<html>
  <head><title>Example</title></head>
  <body>
    <h1>News</h1>
    <h2>Rust 1.0 released after years of development</h2>
    <p>Body text that is not a heading.</p>
  </body>
</html>"#;

#[tokio::test]
async fn accessible_on_success() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(HEAD).path("/ok");
            then.status(200);
        })
        .await;

    assert!(is_url_accessible(&server.url("/ok")).await);
    mock.assert_async().await;
}

#[tokio::test]
async fn inaccessible_on_client_error() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(HEAD).path("/missing");
            then.status(404);
        })
        .await;

    assert!(!is_url_accessible(&server.url("/missing")).await);
}

#[tokio::test]
async fn redirects_are_accessible_without_following() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(HEAD).path("/moved");
            then.status(301).header("Location", "/gone");
        })
        .await;
    let target = server
        .mock_async(|when, then| {
            when.method(HEAD).path("/gone");
            then.status(404);
        })
        .await;

    assert!(is_url_accessible(&server.url("/moved")).await);
    target.assert_hits_async(0).await;
}

#[tokio::test]
async fn inaccessible_on_timeout() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(HEAD).path("/slow");
            then.status(200).delay(Duration::from_secs(2));
        })
        .await;

    let config = Config::builder()
        .request_timeout(Duration::from_millis(200))
        .build();
    let fetcher = Fetcher::new(&config).unwrap();
    assert!(!fetcher.is_url_accessible(&server.url("/slow")).await);
}

#[tokio::test]
async fn unreachable_host() {
    let config = Config::builder()
        .request_timeout(Duration::from_secs(1))
        .build();
    let fetcher = Fetcher::new(&config).unwrap();
    assert!(!fetcher.is_url_accessible("http://127.0.0.1:1/").await);
    assert_eq!(fetcher.get_best_title_from_url("http://127.0.0.1:1/").await, None);
    assert!(!fetcher.is_url_accessible("not a url").await);
}

#[tokio::test]
async fn best_title_prefers_longest_heading() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/article")
                .header("user-agent", Config::DEFAULT_BROWSER_USER_AGENT);
            then.status(200)
                .header("content-type", "text/html; charset=utf-8")
                .body(PAGE);
        })
        .await;

    assert_eq!(
        get_best_title_from_url(&server.url("/article")).await,
        Some("Rust 1.0 released after years of development".to_string())
    );
    mock.assert_async().await;
}

#[tokio::test]
async fn best_title_falls_back_to_title() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/plain");
            then.status(200)
                .body("<html><head><title> Just a title </title></head><body><p>text</p></body></html>");
        })
        .await;

    assert_eq!(
        get_best_title_from_url(&server.url("/plain")).await,
        Some("Just a title".to_string())
    );
}

#[tokio::test]
async fn no_title_candidates() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/empty");
            then.status(200)
                .body("<html><body><p>No headings here</p><h1>   </h1></body></html>");
        })
        .await;

    assert_eq!(get_best_title_from_url(&server.url("/empty")).await, None);
}

#[tokio::test]
async fn no_title_without_ok_status() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/error");
            then.status(500).body(PAGE);
        })
        .await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/created");
            then.status(201).body(PAGE);
        })
        .await;

    assert_eq!(get_best_title_from_url(&server.url("/error")).await, None);
    assert_eq!(get_best_title_from_url(&server.url("/created")).await, None);
}

#[tokio::test]
async fn custom_browser_user_agent() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET).path("/ua").header("user-agent", "test-browser/1.0");
            then.status(200).body("<title>Agent</title>");
        })
        .await;

    let config = Config::builder().browser_user_agent("test-browser/1.0").build();
    let fetcher = Fetcher::new(&config).unwrap();
    assert_eq!(
        fetcher.get_best_title_from_url(&server.url("/ua")).await,
        Some("Agent".to_string())
    );
    mock.assert_async().await;
}

//! Tests for pagination module

use super::*;
use crate::api::PageQuery;
use crate::config::Configuration;
use crate::error::Error;
use crate::http::{ApiRequest, HttpClient};
use futures::StreamExt;
use pretty_assertions::assert_eq;
use serde::Deserialize;
use serde_json::json;
use wiremock::matchers::{header, method, path, query_param, query_param_is_missing};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[derive(Debug, Clone, Deserialize, PartialEq)]
struct Item {
    id: u32,
}

fn items(range: std::ops::Range<u32>) -> Vec<serde_json::Value> {
    range.map(|id| json!({"id": id})).collect()
}

fn pager(server: &MockServer) -> Pager<Item> {
    let config = Configuration::builder("test-key")
        .base_url(server.uri())
        .build()
        .unwrap();
    let http = HttpClient::new(config).unwrap();
    Pager::new(
        http,
        ApiRequest::get("list_items", "/lego/items/").query(&PageQuery::size(3)),
    )
}

/// Mount a chain of pages: first page at `/lego/items/`, then `?page=N`
async fn mount_pages(server: &MockServer, total: u32, page_size: u32) {
    let pages = total.div_ceil(page_size).max(1);
    for n in 1..=pages {
        let start = (n - 1) * page_size;
        let end = (start + page_size).min(total);
        let link = |page: u32| {
            format!(
                "{}/lego/items/?page={page}&page_size={page_size}",
                server.uri()
            )
        };
        let next = (n < pages).then(|| link(n + 1));
        let previous = (n > 1).then(|| link(n - 1));
        let body = json!({
            "count": total,
            "next": next,
            "previous": previous,
            "results": items(start..end),
        });

        let mock = Mock::given(method("GET"))
            .and(path("/lego/items/"))
            .and(header("Authorization", "key test-key"));
        let mock = if n == 1 {
            mock.and(query_param_is_missing("page"))
        } else {
            mock.and(query_param("page", n.to_string()))
        };
        mock.respond_with(ResponseTemplate::new(200).set_body_json(body))
            .expect(1)
            .mount(server)
            .await;
    }
}

#[test]
fn test_page_accessors() {
    let page: Page<Item> = serde_json::from_value(json!({
        "count": 5,
        "next": "https://rebrickable.com/api/v3/lego/items/?page=2",
        "previous": null,
        "results": [{"id": 1}, {"id": 2}]
    }))
    .unwrap();

    assert_eq!(page.count, 5);
    assert!(page.has_next());
    assert!(!page.is_complete());
    assert_eq!(page.len(), 2);
    assert!(page.previous().is_none());
    assert_eq!(page.iter().map(|i| i.id).collect::<Vec<_>>(), vec![1, 2]);
}

#[test]
fn test_page_without_cursors() {
    let page: Page<Item> = serde_json::from_value(json!({
        "count": 0,
        "results": []
    }))
    .unwrap();

    assert!(page.is_empty());
    assert!(page.is_complete());
    assert!(page.into_results().is_empty());
}

#[test]
fn test_empty_cursor_string_is_end() {
    let page: Page<Item> = serde_json::from_value(json!({
        "count": 1,
        "next": "",
        "previous": "",
        "results": [{"id": 1}]
    }))
    .unwrap();
    assert!(!page.has_next());
}

#[test]
fn test_pagination_state() {
    let mut state = PaginationState::new();
    assert!(!state.done);
    assert!(state.count_matches());

    let page: Page<Item> = serde_json::from_value(json!({
        "count": 3, "next": null, "results": [{"id": 1}, {"id": 2}]
    }))
    .unwrap();
    state.record(&page);

    assert_eq!(state.pages_fetched, 1);
    assert_eq!(state.items_fetched, 2);
    assert!(state.done);
    assert!(!state.count_matches());

    assert!(state.visit("a"));
    assert!(!state.visit("a"));
}

#[tokio::test]
async fn test_send_fetches_first_page_only() {
    let server = MockServer::start().await;
    mount_pages(&server, 3, 3).await;

    let page = pager(&server).send().await.unwrap();
    assert_eq!(page.count, 3);
    assert_eq!(page.len(), 3);
    assert!(!page.has_next());
}

#[tokio::test]
async fn test_fetch_all_follows_next() {
    let server = MockServer::start().await;
    mount_pages(&server, 8, 3).await;

    let all = pager(&server).fetch_all().await.unwrap();
    assert_eq!(all.len(), 8);
    assert_eq!(all.iter().map(|i| i.id).collect::<Vec<_>>(), (0..8).collect::<Vec<_>>());
}

#[tokio::test]
async fn test_stream_is_lazy() {
    let server = MockServer::start().await;
    let body = json!({
        "count": 6,
        "next": format!("{}/lego/items/?page=2", server.uri()),
        "previous": null,
        "results": items(0..3),
    });
    Mock::given(method("GET"))
        .and(path("/lego/items/"))
        .and(query_param_is_missing("page"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(query_param("page", "2"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let first_three: Vec<Item> = pager(&server)
        .into_stream()
        .take(3)
        .map(|r| r.unwrap())
        .collect()
        .await;
    assert_eq!(first_three.len(), 3);
}

#[tokio::test]
async fn test_stream_yields_items_in_order() {
    let server = MockServer::start().await;
    mount_pages(&server, 7, 3).await;

    let ids: Vec<u32> = pager(&server)
        .into_stream()
        .map(|r| r.unwrap().id)
        .collect()
        .await;
    assert_eq!(ids, (0..7).collect::<Vec<_>>());
}

#[tokio::test]
async fn test_page_stream_counts_pages() {
    let server = MockServer::start().await;
    mount_pages(&server, 7, 3).await;

    let pages: Vec<Page<Item>> = pager(&server)
        .into_pages()
        .map(|r| r.unwrap())
        .collect()
        .await;
    assert_eq!(pages.len(), 3);
    assert!(pages.iter().all(|p| p.count == 7));
    assert_eq!(pages[2].len(), 1);
}

#[tokio::test]
async fn test_failure_mid_chain_is_surfaced() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/lego/items/"))
        .and(query_param_is_missing("page"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "count": 6,
            "next": format!("{}/lego/items/?page=2", server.uri()),
            "results": items(0..3),
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(query_param("page", "2"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .expect(2)
        .mount(&server)
        .await;

    let mut stream = pager(&server).into_stream();
    for _ in 0..3 {
        assert!(stream.next().await.unwrap().is_ok());
    }
    let err = stream.next().await.unwrap().unwrap_err();
    assert!(matches!(err, Error::Server { status: 500, .. }));
    assert_eq!(err.operation(), Some("list_items"));

    let err = pager(&server).fetch_all().await.unwrap_err();
    assert!(matches!(err, Error::Server { .. }));
}

#[tokio::test]
async fn test_foreign_cursor_rejected() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/lego/items/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "count": 6,
            "next": "https://elsewhere.example.com/lego/items/?page=2",
            "results": items(0..3),
        })))
        .mount(&server)
        .await;

    let err = pager(&server).fetch_all().await.unwrap_err();
    assert!(matches!(err, Error::Pagination { .. }));
}

#[tokio::test]
async fn test_cursor_loop_rejected() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/lego/items/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "count": 6,
            "next": format!("{}/lego/items/?page=2", server.uri()),
            "results": items(0..3),
        })))
        .expect(2)
        .mount(&server)
        .await;

    let err = pager(&server).fetch_all().await.unwrap_err();
    match err {
        Error::Pagination { message, .. } => assert!(message.contains("loops")),
        other => panic!("Expected Pagination, got {other:?}"),
    }
}

#[tokio::test]
async fn test_cursor_errors_hide_user_path() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/users/SECRET-TOKEN-123/setlists/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "count": 6,
            "next": format!("{}/users/SECRET-TOKEN-123/setlists/", server.uri()),
            "results": items(0..3),
        })))
        .expect(1)
        .mount(&server)
        .await;

    let config = Configuration::builder("test-key")
        .base_url(server.uri())
        .build()
        .unwrap();
    let pager: Pager<Item> = Pager::new(
        HttpClient::new(config).unwrap(),
        ApiRequest::get("list_setlists", "/users/{user_token}/setlists/")
            .path_param("user_token", "SECRET-TOKEN-123"),
    );

    let err = pager.fetch_all().await.unwrap_err();
    let message = err.to_string();
    assert!(message.contains("loops"), "{message}");
    assert!(message.contains(&server.uri()), "{message}");
    assert!(!message.contains("SECRET-TOKEN-123"), "{message}");
}

#[test]
fn test_reported_count_comes_from_first_page() {
    let mut state = PaginationState::new();
    let first: Page<Item> = serde_json::from_value(json!({
        "count": 4, "next": "http://localhost/lego/items/?page=2", "results": [{"id": 1}, {"id": 2}]
    }))
    .unwrap();
    let second: Page<Item> = serde_json::from_value(json!({
        "count": 3, "next": null, "results": [{"id": 3}]
    }))
    .unwrap();

    state.record(&first);
    state.record(&second);
    assert_eq!(state.reported_count, Some(4));
    assert_eq!(state.items_fetched, 3);
    assert!(!state.count_matches());
}

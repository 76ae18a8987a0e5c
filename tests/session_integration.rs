//! Integration tests for the session flow through the public API.
//!
//! Exercises the startup-to-browse path the UI collaborator drives:
//! load the library, search, page through results, open author metadata,
//! and curate entries, all against a mock backend.

use librarian_core::{
    ApiClient, Book, RangeLabel, ReadingStatus, SearchMode, Session, page_count, paginate,
};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

mod support;
use support::socket_guard::start_mock_server_or_skip;

fn library_json() -> serde_json::Value {
    serde_json::json!([
        {"isbn": "1", "title": "Foundation", "authors": ["Isaac Asimov"],
         "description": "Psychohistory.", "status": "read"},
        {"isbn": "2", "title": "The Hobbit", "authors": ["J. R. R. Tolkien"],
         "description": "There and back again.", "status": "unread"},
        {"isbn": "3", "title": "The Dispossessed", "authors": ["Ursula K. Le Guin"],
         "description": "An ambiguous utopia.", "status": "currently reading"},
        {"isbn": "4", "title": "8000 Meters Up", "authors": ["Studio 54"],
         "description": "Mountains."}
    ])
}

async fn mount_library(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/api/get_books"))
        .respond_with(ResponseTemplate::new(200).set_body_json(library_json()))
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_startup_flow_groups_library_for_navigation() {
    let Some(server) = start_mock_server_or_skip().await else {
        return;
    };
    mount_library(&server).await;

    let client = ApiClient::with_base_url(server.uri()).unwrap();
    let mut session = Session::new(client);
    session.refresh_library().await.unwrap();

    let grouped = session.grouped_library();

    // Asimov -> A-G, Tolkien and Le Guin surnames -> O-T and A-G, numeric
    // publisher -> Other.
    let a_g: Vec<&str> = grouped[&RangeLabel::AToG]
        .iter()
        .map(|b| b.title.as_str())
        .collect();
    assert_eq!(a_g, vec!["Foundation", "The Dispossessed"]);
    assert_eq!(grouped[&RangeLabel::OToT][0].title, "The Hobbit");
    assert_eq!(grouped[&RangeLabel::Other][0].title, "8000 Meters Up");
    assert!(!grouped.contains_key(&RangeLabel::HToN));
    assert!(!grouped.contains_key(&RangeLabel::UToZ));
}

#[tokio::test]
async fn test_catalog_search_membership_and_paging_flow() {
    let Some(server) = start_mock_server_or_skip().await else {
        return;
    };
    mount_library(&server).await;

    let results: Vec<serde_json::Value> = (1..=25)
        .map(|i| {
            let (title, author) = if i == 1 {
                ("Foundation".to_string(), "Isaac Asimov".to_string())
            } else {
                (format!("Result {i}"), format!("Author {i}"))
            };
            serde_json::json!({
                "isbn": format!("isbn-{i}"),
                "title": title,
                "authors": [author],
                "description": ""
            })
        })
        .collect();
    Mock::given(method("GET"))
        .and(path("/search_books"))
        .and(query_param("query", "foundation"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!(results)))
        .mount(&server)
        .await;

    let client = ApiClient::with_base_url(server.uri()).unwrap();
    let mut session = Session::new(client);
    session.refresh_library().await.unwrap();

    assert!(
        session
            .search(SearchMode::Catalog, "foundation")
            .await
            .unwrap()
    );
    assert_eq!(session.results().len(), 25);
    assert_eq!(session.result_page_count(), 3);
    assert!(session.results_need_pagination());

    // The library copy is flagged; unrelated results are not.
    assert_eq!(session.results()[0].in_library, Some(true));
    assert_eq!(session.results()[1].in_library, Some(false));

    // Page 3 of 25 at size 10 holds the final 5 results.
    session.set_page(3);
    assert_eq!(session.visible_results().len(), 5);
    assert_eq!(session.visible_results()[0].title, "Result 21");

    session.set_page(4);
    assert!(session.visible_results().is_empty());
}

#[tokio::test]
async fn test_library_search_is_local_and_case_insensitive() {
    let Some(server) = start_mock_server_or_skip().await else {
        return;
    };
    mount_library(&server).await;

    let client = ApiClient::with_base_url(server.uri()).unwrap();
    let mut session = Session::new(client);
    session.refresh_library().await.unwrap();

    // No /search_books mock is mounted: a remote call would fail, so a
    // passing search proves library mode stayed local.
    assert!(session.search(SearchMode::Library, "TOLK").await.unwrap());
    assert_eq!(session.results().len(), 1);
    assert_eq!(session.results()[0].title, "The Hobbit");
}

#[tokio::test]
async fn test_failed_search_keeps_session_usable() {
    let Some(server) = start_mock_server_or_skip().await else {
        return;
    };
    mount_library(&server).await;
    Mock::given(method("GET"))
        .and(path("/search_books"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let client = ApiClient::with_base_url(server.uri()).unwrap();
    let mut session = Session::new(client);
    session.refresh_library().await.unwrap();
    session.search(SearchMode::Library, "hobbit").await.unwrap();

    // The catalog call fails; the prior results and library survive and
    // the next action works. No failure is fatal to the session.
    assert!(session.search(SearchMode::Catalog, "whatever").await.is_err());
    assert_eq!(session.results().len(), 1);
    assert!(session.search(SearchMode::Library, "asimov").await.unwrap());
    assert_eq!(session.results()[0].title, "Foundation");
}

#[tokio::test]
async fn test_curation_flow_updates_snapshot() {
    let Some(server) = start_mock_server_or_skip().await else {
        return;
    };
    mount_library(&server).await;
    Mock::given(method("POST"))
        .and(path("/api/add_book"))
        .respond_with(ResponseTemplate::new(201).set_body_json(serde_json::json!({
            "message": "Book 'Dune' added to your library with status 'unread'!"
        })))
        .mount(&server)
        .await;
    Mock::given(method("PUT"))
        .and(path("/api/update_book_status"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({"message": "updated"})),
        )
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/api/delete_book/1"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({"message": "deleted"})),
        )
        .mount(&server)
        .await;

    let client = ApiClient::with_base_url(server.uri()).unwrap();
    let mut session = Session::new(client);
    session.refresh_library().await.unwrap();

    let mut dune = Book::new("Dune", vec!["Frank Herbert".to_string()]);
    dune.isbn = "9780441013593".to_string();
    let ack = session.add_book(&dune, ReadingStatus::Unread).await.unwrap();
    assert!(ack.contains("Dune"));
    assert_eq!(session.library().len(), 5);

    // A catalog search for the freshly added book sees it as a member
    // without another library fetch.
    Mock::given(method("GET"))
        .and(path("/search_books"))
        .and(query_param("query", "dune"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
            {"isbn": "catalog-isbn", "title": "Dune", "authors": ["Frank Herbert"]}
        ])))
        .mount(&server)
        .await;
    session.search(SearchMode::Catalog, "dune").await.unwrap();
    assert_eq!(session.results()[0].in_library, Some(true));

    session
        .update_status("Dune", ReadingStatus::Read)
        .await
        .unwrap();
    let dune_entry = session
        .library()
        .iter()
        .find(|book| book.title == "Dune")
        .unwrap();
    assert_eq!(dune_entry.status, Some(ReadingStatus::Read));

    session.remove_book("1").await.unwrap();
    assert!(!session.library().iter().any(|book| book.isbn == "1"));
}

#[tokio::test]
async fn test_quote_and_summary_pass_through() {
    let Some(server) = start_mock_server_or_skip().await else {
        return;
    };
    mount_library(&server).await;
    Mock::given(method("GET"))
        .and(path("/api/quote_of_the_day"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "quote": {"quote": "So it goes.", "author": "Kurt Vonnegut"}
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/fetch_book_summary"))
        .and(query_param("book_title", "The Hobbit"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "summary": "A hobbit leaves home."
        })))
        .mount(&server)
        .await;

    let client = ApiClient::with_base_url(server.uri()).unwrap();
    let session = Session::new(client);

    let quote = session.quote_of_the_day().await.unwrap();
    assert_eq!(quote.author, "Kurt Vonnegut");

    let summary = session.book_summary("The Hobbit").await.unwrap();
    assert_eq!(summary, "A hobbit leaves home.");
}

#[test]
fn test_paginate_properties_hold_for_books() {
    let books: Vec<Book> = (0..23)
        .map(|i| Book::new(format!("Book {i}"), vec![format!("Author {i}")]))
        .collect();

    let pages = page_count(books.len(), 10);
    assert_eq!(pages, 3);

    let mut reassembled = Vec::new();
    for page in 1..=pages {
        let slice = paginate(&books, page, 10);
        assert!(slice.len() <= 10);
        reassembled.extend_from_slice(slice);
    }
    assert_eq!(reassembled.len(), books.len());
    assert!(paginate(&books, pages + 1, 10).is_empty());
}

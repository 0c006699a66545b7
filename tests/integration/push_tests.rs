use link_stacklog::config::FetcherConfig;
use link_stacklog::fetcher::build_http_client;
use link_stacklog::storage::{database_path, LinkStore, SqliteStore};
use link_stacklog::{push_url, PushOutcome, DEFAULT_LOG_NAME};
use tempfile::TempDir;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn test_client() -> reqwest::Client {
    let config = FetcherConfig {
        timeout_secs: 2,
        user_agent: "link-stacklog-test/1.0".to_string(),
    };
    build_http_client(&config).expect("Failed to build client")
}

fn page(title: &str, description: &str) -> String {
    format!(
        r#"<html><head><title>{}</title>
        <meta name="description" content="{}">
        </head><body></body></html>"#,
        title, description
    )
}

#[tokio::test]
async fn test_push_fetches_and_stores_metadata() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/a"))
        .and(header("user-agent", "link-stacklog-test/1.0"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(page("Page A", "About A"))
                .insert_header("content-type", "text/html"),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let dir = TempDir::new().unwrap();
    let mut store = SqliteStore::init(&database_path(dir.path())).unwrap();
    let url = format!("{}/a", mock_server.uri());

    let outcome = push_url(&mut store, &test_client(), DEFAULT_LOG_NAME, &url)
        .await
        .unwrap();

    match outcome {
        PushOutcome::Pushed { id, link } => {
            assert!(id > 0);
            assert_eq!(link.title.as_deref(), Some("Page A"));
        }
        other => panic!("Expected Pushed, got {:?}", other),
    }

    let top = store.peek(DEFAULT_LOG_NAME, 1).unwrap();
    assert_eq!(top[0].url, url);
    assert_eq!(top[0].title.as_deref(), Some("Page A"));
    assert_eq!(top[0].description.as_deref(), Some("About A"));
}

#[tokio::test]
async fn test_push_page_without_metadata_stores_none() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html><body>bare</body></html>"))
        .mount(&mock_server)
        .await;

    let mut store = SqliteStore::open_in_memory().unwrap();
    let outcome = push_url(&mut store, &test_client(), "bare", &mock_server.uri())
        .await
        .unwrap();
    assert!(matches!(outcome, PushOutcome::Pushed { .. }));

    let link = store.pop("bare").unwrap().unwrap().link;
    assert_eq!(link.title, None);
    assert_eq!(link.description, None);
    assert_eq!(link.display_title(), "No Title");
    assert_eq!(link.display_description(), "No Description");
}

#[tokio::test]
async fn test_push_http_error_skips_write() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&mock_server)
        .await;

    let mut store = SqliteStore::open_in_memory().unwrap();
    let url = format!("{}/broken", mock_server.uri());
    let outcome = push_url(&mut store, &test_client(), DEFAULT_LOG_NAME, &url)
        .await
        .unwrap();

    assert_eq!(outcome, PushOutcome::Unavailable { url });
    assert_eq!(store.count(DEFAULT_LOG_NAME).unwrap(), 0);
}

#[tokio::test]
async fn test_push_unreachable_skips_write() {
    // Nothing listens on port 1
    let uri = "http://127.0.0.1:1/";

    let mut store = SqliteStore::open_in_memory().unwrap();
    let outcome = push_url(&mut store, &test_client(), DEFAULT_LOG_NAME, uri)
        .await
        .unwrap();

    assert!(matches!(outcome, PushOutcome::Unavailable { .. }));
    assert_eq!(store.count(DEFAULT_LOG_NAME).unwrap(), 0);
}

#[tokio::test]
async fn test_push_same_url_twice() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string(page("Dup", "twice")))
        .expect(2)
        .mount(&mock_server)
        .await;

    let mut store = SqliteStore::open_in_memory().unwrap();
    let client = test_client();
    for _ in 0..2 {
        push_url(&mut store, &client, DEFAULT_LOG_NAME, &mock_server.uri())
            .await
            .unwrap();
    }

    assert_eq!(store.count(DEFAULT_LOG_NAME).unwrap(), 2);
}

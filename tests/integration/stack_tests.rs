use link_stacklog::storage::{
    backup_database, database_path, open_store, LinkStore, NewLink, SqliteStore, StorageError,
};
use tempfile::TempDir;

fn new_link(url: &str, title: &str, description: &str) -> NewLink {
    NewLink::new(url, Some(title), Some(description))
}

fn init_store(dir: &TempDir) -> SqliteStore {
    SqliteStore::init(&database_path(dir.path())).expect("Failed to initialize store")
}

#[test]
fn test_operations_before_init_are_unavailable() {
    let dir = TempDir::new().unwrap();
    let result = open_store(&database_path(dir.path()));

    match result {
        Err(StorageError::Unavailable { path }) => {
            assert_eq!(path, database_path(dir.path()));
        }
        other => panic!("Expected Unavailable, got {:?}", other.map(|_| ())),
    }
}

#[test]
fn test_unavailable_message_is_actionable() {
    let dir = TempDir::new().unwrap();
    let err = open_store(&database_path(dir.path())).err().unwrap();
    assert!(err.to_string().contains("link-stacklog init"));
}

#[test]
fn test_push_peek_pop_scenario() {
    let dir = TempDir::new().unwrap();
    let mut store = init_store(&dir);

    store.push("default", &new_link("http://a", "A", "descA")).unwrap();
    store.push("default", &new_link("http://b", "B", "descB")).unwrap();

    let top = store.peek("default", 1).unwrap();
    assert_eq!(top.len(), 1);
    assert_eq!(top[0].url, "http://b");
    assert_eq!(top[0].title.as_deref(), Some("B"));

    let popped = store.pop("default").unwrap().unwrap();
    assert_eq!(popped.link.url, "http://b");
    assert_eq!(popped.link.description.as_deref(), Some("descB"));

    let popped = store.pop("default").unwrap().unwrap();
    assert_eq!(popped.link.url, "http://a");

    assert_eq!(store.pop("default").unwrap(), None);
}

#[test]
fn test_state_survives_reopen() {
    let dir = TempDir::new().unwrap();
    let path = database_path(dir.path());

    {
        let mut store = init_store(&dir);
        store.push("default", &new_link("http://a", "A", "descA")).unwrap();
        store.push("default", &new_link("http://b", "B", "descB")).unwrap();
        store.pop("default").unwrap();
    }

    let mut store = open_store(&path).unwrap();
    assert_eq!(store.count("default").unwrap(), 1);
    assert_eq!(store.pop("default").unwrap().unwrap().link.url, "http://a");
}

#[test]
fn test_lifo_over_many_pushes() {
    let dir = TempDir::new().unwrap();
    let mut store = init_store(&dir);

    let urls: Vec<String> = (0..25).map(|i| format!("http://example.com/{}", i)).collect();
    for url in &urls {
        store.push("default", &new_link(url, "T", "D")).unwrap();
    }

    for url in urls.iter().rev() {
        let popped = store.pop("default").unwrap().unwrap();
        assert_eq!(&popped.link.url, url);
    }
    assert_eq!(store.count("default").unwrap(), 0);
}

#[test]
fn test_logs_are_isolated() {
    let dir = TempDir::new().unwrap();
    let mut store = init_store(&dir);

    let work_id = store.push("work", &new_link("http://w", "Rust at work", "W")).unwrap();
    store.push("home", &new_link("http://h1", "Rust at home", "H")).unwrap();
    store.push("home", &new_link("http://h2", "Gardening", "H")).unwrap();

    assert_eq!(store.count("work").unwrap(), 1);
    assert_eq!(store.count("home").unwrap(), 2);

    assert_eq!(store.get_by_id("home", work_id).unwrap(), None);
    assert!(store.get_by_id("work", work_id).unwrap().is_some());

    let hits = store.search("home", "Rust").unwrap();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].url, "http://h1");

    store.clear("home").unwrap();
    assert_eq!(store.count("home").unwrap(), 0);
    assert_eq!(store.count("work").unwrap(), 1);
}

#[test]
fn test_search_hits_contain_query() {
    let dir = TempDir::new().unwrap();
    let mut store = init_store(&dir);

    store.push("default", &new_link("http://a", "Async Rust", "tokio")).unwrap();
    store.push("default", &new_link("http://b", "Python", "asyncio")).unwrap();
    store.push("default", &new_link("http://c", "Go", "goroutines in async code")).unwrap();

    let hits = store.search("default", "sync").unwrap();
    assert_eq!(hits.len(), 3);
    for link in &hits {
        let title = link.title.as_deref().unwrap_or("");
        let description = link.description.as_deref().unwrap_or("");
        assert!(title.contains("sync") || description.contains("sync"));
    }
    assert_eq!(hits[0].url, "http://c");
}

#[test]
fn test_tail_after_three_pushes() {
    let dir = TempDir::new().unwrap();
    let mut store = init_store(&dir);

    store.push("default", &new_link("http://a", "A", "descA")).unwrap();
    store.push("default", &new_link("http://b", "B", "descB")).unwrap();
    store.push("default", &new_link("http://c", "C", "descC")).unwrap();

    let tail: Vec<String> = store
        .tail("default", 2)
        .unwrap()
        .into_iter()
        .map(|l| l.url)
        .collect();
    assert_eq!(tail, vec!["http://a", "http://b"]);

    let head: Vec<String> = store
        .head("default", 5)
        .unwrap()
        .into_iter()
        .map(|l| l.url)
        .collect();
    assert_eq!(head, vec!["http://c", "http://b", "http://a"]);
}

#[test]
fn test_backup_is_independent_copy() {
    let dir = TempDir::new().unwrap();
    let mut store = init_store(&dir);
    store.push("default", &new_link("http://a", "A", "descA")).unwrap();

    let backup = backup_database(dir.path()).unwrap();
    store.push("default", &new_link("http://b", "B", "descB")).unwrap();

    let copy = SqliteStore::open(&backup).unwrap();
    assert_eq!(copy.count("default").unwrap(), 1);
    assert_eq!(store.count("default").unwrap(), 2);
}

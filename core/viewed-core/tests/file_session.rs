//! Integration tests for file-backed browsing sessions.

use tempfile::tempdir;
use viewed_core::{
    DeferredQueue, SessionConfig, SessionViewStore, Tracking, TrackingContext, ARTICLE_CATEGORY,
};

#[test]
fn test_session_survives_navigation_between_processes() {
    let temp = tempdir().unwrap();
    let config = SessionConfig::with_root(temp.path().to_path_buf(), "tab-1");

    // First "page": visit X
    {
        let ctx = TrackingContext::new(SessionViewStore::open(&config), DeferredQueue::new());
        assert!(!ctx
            .detail_view(ARTICLE_CATEGORY, Tracking::Record)
            .sync(Some("X")));
        ctx.queue().run_until_idle();
    }

    // Second "page" opens the session afresh
    let store = SessionViewStore::open(&config);
    assert!(store.get(ARTICLE_CATEGORY).contains("X"));
}

#[test]
fn test_sessions_are_isolated() {
    let temp = tempdir().unwrap();
    let tab1 = SessionConfig::with_root(temp.path().to_path_buf(), "tab-1");
    let tab2 = tab1.clone().with_session("tab-2");

    SessionViewStore::open(&tab1).set(ARTICLE_CATEGORY, "X");
    assert!(SessionViewStore::open(&tab2).get(ARTICLE_CATEGORY).is_empty());
}

#[test]
fn test_end_session_forgets_views() {
    let temp = tempdir().unwrap();
    let config = SessionConfig::with_root(temp.path().to_path_buf(), "tab-1");

    let store = SessionViewStore::open(&config);
    store.set(ARTICLE_CATEGORY, "X");
    store.end_session().unwrap();

    assert!(!config.session_file().exists());
    assert!(SessionViewStore::open(&config)
        .get(ARTICLE_CATEGORY)
        .is_empty());
}

#[test]
fn test_corrupt_session_file_heals_on_write() {
    let temp = tempdir().unwrap();
    let config = SessionConfig::with_root(temp.path().to_path_buf(), "tab-1");
    config.ensure_dirs().unwrap();
    std::fs::write(config.session_file(), "not json at all").unwrap();

    let store = SessionViewStore::open(&config);
    assert!(store.get(ARTICLE_CATEGORY).is_empty());

    store.set(ARTICLE_CATEGORY, "X");
    assert_eq!(store.get(ARTICLE_CATEGORY).into_vec(), ["X"]);
}

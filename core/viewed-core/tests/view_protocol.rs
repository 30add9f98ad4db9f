//! Integration tests for the detail/grid read-before-write protocol.

use viewed_core::{
    render_tile, ContentItem, DeferredQueue, SessionViewStore, Tracking, TrackingContext,
    ARTICLE_CATEGORY,
};

fn context() -> TrackingContext {
    TrackingContext::new(SessionViewStore::in_memory(), DeferredQueue::new())
}

#[test]
fn test_detail_then_grid_then_detail() {
    let ctx = context();
    let articles = vec![Some(ContentItem::new("X").with_title("Post X"))];

    // First detail mount paints unviewed; the write is still queued
    let mut first = ctx.detail_view(ARTICLE_CATEGORY, Tracking::Record);
    assert!(!first.sync(Some("X")));

    // Grid mounted before the write resolves sees the old state
    let early_grid = ctx.grid_view(ARTICLE_CATEGORY);
    assert!(!early_grid.tiles(&articles)[0].is_viewed);

    ctx.queue().run_until_idle();

    // Grid mounted after sees the write; the early grid keeps its snapshot
    let late_grid = ctx.grid_view(ARTICLE_CATEGORY);
    assert!(late_grid.tiles(&articles)[0].is_viewed);
    assert!(!early_grid.is_viewed(Some("X")));

    // Re-mounting the detail view now shows viewed
    let mut second = ctx.detail_view(ARTICLE_CATEGORY, Tracking::Record);
    assert!(second.sync(Some("X")));
    assert!(!first.is_viewed());
}

#[test]
fn test_independent_views_do_not_clobber_each_other() {
    let ctx = context();

    let mut a = ctx.detail_view(ARTICLE_CATEGORY, Tracking::Record);
    let mut b = ctx.detail_view(ARTICLE_CATEGORY, Tracking::Record);
    a.sync(Some("a"));
    b.sync(Some("b"));
    ctx.queue().run_until_idle();

    let viewed: Vec<_> = ctx.store().get(ARTICLE_CATEGORY).into_vec();
    assert_eq!(viewed, ["a", "b"]);
}

#[test]
fn test_embedded_preview_does_not_mark_viewed() {
    let ctx = context();

    for _ in 0..3 {
        let mut preview = ctx.detail_view(ARTICLE_CATEGORY, Tracking::Suppressed);
        preview.sync(Some("X"));
        ctx.queue().run_until_idle();
    }

    assert!(ctx.store().get(ARTICLE_CATEGORY).is_empty());
}

#[test]
fn test_renderer_only_sees_the_flag() {
    let ctx = context();
    let item = ContentItem::new("X").with_title("Post X").with_slug("post-x");

    ctx.detail_view(ARTICLE_CATEGORY, Tracking::Record).sync_item(&item);
    ctx.queue().run_until_idle();

    let items = vec![Some(item)];
    let grid = ctx.grid_view(ARTICLE_CATEGORY);
    let tile = grid.tiles(&items)[0];
    assert_eq!(
        render_tile(tile.item, tile.is_viewed),
        render_tile(tile.item, true)
    );
}

#[test]
fn test_other_categories_are_unaffected() {
    let ctx = context();
    ctx.detail_view(ARTICLE_CATEGORY, Tracking::Record).sync(Some("X"));
    ctx.queue().run_until_idle();

    assert!(!ctx.grid_view("project").is_viewed(Some("X")));
}

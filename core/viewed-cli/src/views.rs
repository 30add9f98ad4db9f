//! `visit` and `grid`: run the view protocols and print what they would paint.
//!
//! `visit` prints the hero as painted *before* its own write, then lets the
//! deferred write run, exactly like a page's first frame followed by the
//! next event-loop turn.

use std::io::Write;
use std::path::Path;

use fs_err as fs;
use serde::Serialize;
use tracing::debug;
use viewed_core::{
    render_hero, render_tile, ContentItem, DeferredQueue, GridView, HeroLayout, SessionViewStore,
    Tracking, TrackingContext,
};

use crate::error::CliError;

pub struct VisitArgs<'a> {
    pub item: &'a ContentItem,
    pub category: &'a str,
    pub tracking: Tracking,
    pub layout: HeroLayout,
}

pub fn visit(
    store: &SessionViewStore,
    args: VisitArgs<'_>,
    out: &mut impl Write,
) -> Result<bool, CliError> {
    let ctx = TrackingContext::new(store.clone(), DeferredQueue::new());
    let mut hero = ctx.detail_view(args.category, args.tracking);
    let is_viewed = hero.sync_item(args.item);

    writeln!(out, "{}", render_hero(args.item, is_viewed, args.layout))?;

    let ran = ctx.queue().run_until_idle();
    debug!(ran, "Visit finished deferred work");
    Ok(is_viewed)
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct TileStatus<'a> {
    id: Option<&'a str>,
    title: Option<&'a str>,
    is_viewed: bool,
}

pub fn load_items(path: &Path) -> Result<Vec<Option<ContentItem>>, CliError> {
    let content = fs::read_to_string(path).map_err(|source| CliError::ReadItems {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&content).map_err(|source| CliError::ParseItems {
        path: path.to_path_buf(),
        source,
    })
}

/// Prints one tile per present item, or a JSON status array with `json`.
pub fn grid(
    store: &SessionViewStore,
    category: &str,
    items: &[Option<ContentItem>],
    json: bool,
    out: &mut impl Write,
) -> Result<(), CliError> {
    let grid = GridView::mount(store, category);
    let tiles = grid.tiles(items);

    if json {
        let statuses: Vec<_> = tiles
            .iter()
            .map(|tile| TileStatus {
                id: tile.item.view_key(),
                title: tile.item.title.as_deref(),
                is_viewed: tile.is_viewed,
            })
            .collect();
        serde_json::to_writer(&mut *out, &statuses)?;
        writeln!(out)?;
        return Ok(());
    }

    for tile in tiles {
        writeln!(out, "{}", render_tile(tile.item, tile.is_viewed))?;
    }
    Ok(())
}

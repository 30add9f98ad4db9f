//! `get`, `set` and `clear`: direct calls on the session store.
//!
//! ```bash
//! viewed set article entry-1
//! viewed get article        # ["entry-1"]
//! viewed clear
//! ```

use std::io::Write;

use tracing::info;
use viewed_core::{page_viewed, PageViewed, SessionViewStore};

use crate::error::CliError;

/// Prints the category's viewed set as a JSON array.
pub fn get(
    store: &SessionViewStore,
    category: &str,
    out: &mut impl Write,
) -> Result<(), CliError> {
    let viewed = page_viewed(store, PageViewed::Get { category }).unwrap_or_default();
    serde_json::to_writer(&mut *out, &viewed)?;
    writeln!(out)?;
    Ok(())
}

/// Records `item`; a missing or empty item is a no-op.
pub fn set(store: &SessionViewStore, category: &str, item: Option<&str>) {
    page_viewed(store, PageViewed::Set { category, item });
}

pub fn clear(store: &SessionViewStore) -> Result<(), CliError> {
    store.end_session()?;
    info!("Browsing session ended");
    Ok(())
}

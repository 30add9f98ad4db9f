//! viewed: CLI for session-scoped viewed-item tracking.
//!
//! Drives the same store and view protocols a browser page uses, against a
//! file-backed browsing session (`~/.viewed/sessions/<id>.json`). Each
//! invocation behaves like one page navigation within the session.
//!
//! ## Subcommands
//!
//! - `get` / `set`: the page-viewed surface
//! - `visit`: detail view (reads, paints, then records)
//! - `grid`: tile list (reads only)
//! - `clear`: end the browsing session

mod error;
mod logging;
mod page;
mod views;

use clap::{Parser, Subcommand};
use std::env;
use std::path::PathBuf;

use viewed_core::config::SESSION_ENV;
use viewed_core::{
    ContentItem, HeroLayout, SessionConfig, SessionViewStore, Tracking, ViewedError,
    ARTICLE_CATEGORY,
};

use crate::error::CliError;

#[derive(Parser)]
#[command(name = "viewed")]
#[command(about = "Session viewed-item tracker")]
#[command(version)]
struct Cli {
    /// Browsing session id (default: $VIEWED_SESSION or "default")
    #[arg(long, global = true, value_name = "ID")]
    session: Option<String>,

    /// Data root (default: $VIEWED_HOME or ~/.viewed)
    #[arg(long, global = true, value_name = "DIR")]
    root: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print a category's viewed items as a JSON array
    Get {
        #[arg(value_name = "CATEGORY")]
        category: String,
    },

    /// Record an item as viewed (missing or empty item is ignored)
    Set {
        #[arg(value_name = "CATEGORY")]
        category: String,

        #[arg(value_name = "ITEM")]
        item: Option<String>,
    },

    /// Open an item's detail view and print its hero
    Visit {
        /// CMS entry id used as the tracking key
        #[arg(value_name = "ID")]
        id: String,

        #[arg(long)]
        title: Option<String>,

        #[arg(long)]
        slug: Option<String>,

        #[arg(long)]
        description: Option<String>,

        #[arg(long, default_value = ARTICLE_CATEGORY)]
        category: String,

        /// Show the item without recording the visit (embedded preview)
        #[arg(long)]
        no_track: bool,

        /// Image on the right
        #[arg(long)]
        reversed: bool,

        #[arg(long)]
        featured: bool,
    },

    /// Print tiles for a JSON array of items
    Grid {
        /// JSON file: array of {id, title, slug, shortDescription} or null
        #[arg(value_name = "ITEMS_JSON")]
        items: PathBuf,

        #[arg(long, default_value = ARTICLE_CATEGORY)]
        category: String,

        /// Print viewed flags as JSON instead of markup
        #[arg(long)]
        json: bool,
    },

    /// End the browsing session
    Clear,
}

fn main() {
    let cli = Cli::parse();

    let config = match resolve_config(cli.root.clone(), cli.session.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("viewed: {e}");
            std::process::exit(1);
        }
    };

    let _logging_guard = logging::init(&config.logs_dir());
    tracing::debug!(
        session = %config.session_id(),
        root = %config.root().display(),
        "viewed starting"
    );

    if let Err(e) = run(cli.command, &config) {
        tracing::error!(error = %e, "viewed failed");
        eprintln!("viewed: {e}");
        std::process::exit(1);
    }
}

fn resolve_config(
    root: Option<PathBuf>,
    session: Option<&str>,
) -> Result<SessionConfig, ViewedError> {
    let config = match root {
        Some(root) => SessionConfig::with_root(root, &env::var(SESSION_ENV).unwrap_or_default()),
        None => SessionConfig::from_env()?,
    };
    Ok(match session {
        Some(session) => config.with_session(session),
        None => config,
    })
}

fn run(command: Commands, config: &SessionConfig) -> Result<(), CliError> {
    let store = SessionViewStore::open(config);
    let mut stdout = std::io::stdout().lock();

    match command {
        Commands::Get { category } => page::get(&store, &category, &mut stdout),
        Commands::Set { category, item } => {
            page::set(&store, &category, item.as_deref());
            Ok(())
        }
        Commands::Visit {
            id,
            title,
            slug,
            description,
            category,
            no_track,
            reversed,
            featured,
        } => {
            let item = ContentItem {
                id: Some(id),
                title,
                slug,
                short_description: description,
            };
            views::visit(
                &store,
                views::VisitArgs {
                    item: &item,
                    category: &category,
                    tracking: Tracking::from_disabled(no_track),
                    layout: HeroLayout { reversed, featured },
                },
                &mut stdout,
            )
            .map(|_| ())
        }
        Commands::Grid {
            items,
            category,
            json,
        } => {
            let items = views::load_items(&items)?;
            views::grid(&store, &category, &items, json, &mut stdout)
        }
        Commands::Clear => page::clear(&store),
    }
}

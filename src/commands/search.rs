//! Search command handler: catalog or library search with paged output.

use anyhow::{Context, Result};
use librarian_core::{ApiClient, SearchMode, Session};
use tracing::warn;

use crate::cli::SearchArgs;

use super::render::book_line;

pub async fn run_search_command(client: ApiClient, args: &SearchArgs) -> Result<()> {
    let mode = if args.library {
        SearchMode::Library
    } else {
        SearchMode::Catalog
    };

    let mut session = Session::with_page_size(client, args.page_size as usize);

    // The snapshot feeds library-mode filtering and the membership flags
    // on catalog results. A backend that cannot serve it only degrades
    // catalog search, so that failure is a warning, not a refusal.
    if let Err(error) = session.refresh_library().await {
        if args.library {
            return Err(error).context("could not load the library for searching");
        }
        warn!(%error, "library snapshot unavailable; membership flags will be missing");
    }

    let changed = session
        .search(mode, &args.query)
        .await
        .context("search failed")?;
    if !changed {
        println!("Enter a search query.");
        return Ok(());
    }

    if session.results().is_empty() {
        println!("No matches for '{}'.", args.query.trim());
        return Ok(());
    }

    session.set_page(args.page as usize);
    let visible = session.visible_results();
    if visible.is_empty() {
        println!(
            "Page {} is past the end; {} results fit on {} page(s).",
            args.page,
            session.results().len(),
            session.result_page_count()
        );
        return Ok(());
    }

    for book in visible {
        println!("{}", book_line(book));
    }
    if session.results_need_pagination() {
        println!(
            "Page {} of {} ({} results). Use --page to see more.",
            session.page(),
            session.result_page_count(),
            session.results().len()
        );
    }

    Ok(())
}

//! Library command handler: show the collection grouped for browsing.

use anyhow::{Context, Result};
use librarian_core::{ApiClient, Session};

use super::render::book_line;

pub async fn run_library_command(client: ApiClient) -> Result<()> {
    let mut session = Session::new(client);
    session
        .refresh_library()
        .await
        .context("could not load the library; is the backend running?")?;

    if session.library().is_empty() {
        println!("Your library is empty. Add books with `librarian add`.");
        return Ok(());
    }

    let grouped = session.grouped_library();
    for (label, bucket) in &grouped {
        println!("{label} ({})", bucket.len());
        for book in bucket {
            println!("  {}", book_line(book));
        }
    }
    println!("{} books total.", session.library().len());

    Ok(())
}

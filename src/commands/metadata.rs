//! Metadata command handlers: quote of the day, author bios, summaries.

use anyhow::{Context, Result};
use librarian_core::{ApiClient, Session};

use crate::cli::{AuthorArgs, SummaryArgs};

pub async fn run_quote_command(client: ApiClient) -> Result<()> {
    let session = Session::new(client);
    let quote = session
        .quote_of_the_day()
        .await
        .context("could not fetch the quote of the day")?;
    println!("\"{}\"", quote.quote);
    println!("    - {}", quote.author);
    Ok(())
}

pub async fn run_author_command(client: ApiClient, args: &AuthorArgs) -> Result<()> {
    let mut session = Session::new(client);
    let bio = session
        .author_bio(&args.name)
        .await
        .context("could not fetch the author biography")?;

    println!("{}", args.name);
    println!();
    println!("{}", bio.biography);
    if let Some(image_url) = &bio.image_url {
        println!();
        println!("Portrait: {image_url}");
    }
    Ok(())
}

pub async fn run_summary_command(client: ApiClient, args: &SummaryArgs) -> Result<()> {
    let session = Session::new(client);
    let summary = session
        .book_summary(&args.title)
        .await
        .context("could not fetch the book summary")?;
    println!("{summary}");
    Ok(())
}

//! Curation command handlers: add, restatus, and remove library entries.
//!
//! Each handler performs one backend exchange and prints the backend's
//! acknowledgement message verbatim. There is no automatic retry; a
//! failed request is reported and the user re-triggers the action.

use anyhow::{Context, Result};
use librarian_core::{ApiClient, Book, Session};

use crate::cli::{AddArgs, RemoveArgs, StatusArgs};

pub async fn run_add_command(client: ApiClient, args: &AddArgs) -> Result<()> {
    let mut book = Book::new(args.title.clone(), args.authors.clone());
    book.isbn = args.isbn.clone();
    book.description = args.description.clone();
    book.cover_art = args.cover_art.clone();

    let mut session = Session::new(client);
    let message = session
        .add_book(&book, args.status)
        .await
        .context("could not add the book")?;
    println!("{message}");
    Ok(())
}

pub async fn run_status_command(client: ApiClient, args: &StatusArgs) -> Result<()> {
    let mut session = Session::new(client);
    let message = session
        .update_status(&args.title, args.status)
        .await
        .context("could not update the reading status")?;
    println!("{message}");
    Ok(())
}

pub async fn run_remove_command(client: ApiClient, args: &RemoveArgs) -> Result<()> {
    let mut session = Session::new(client);
    let message = session
        .remove_book(&args.isbn)
        .await
        .context("could not remove the book")?;
    println!("{message}");
    Ok(())
}

//! CLI argument definitions using clap derive macros.

use clap::{Args as ClapArgs, Parser, Subcommand};

use librarian_core::ReadingStatus;
use librarian_core::pagination::DEFAULT_PAGE_SIZE;

/// Browse and curate a personal book library.
///
/// Librarian searches an external book catalog, adds books to your library
/// with a reading status, and shows the collection grouped for browsing.
#[derive(Parser, Debug)]
#[command(name = "librarian")]
#[command(author, version, about)]
pub struct Args {
    /// Increase output verbosity (-v for debug, -vv for trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Backend base URL (overrides the LIBRARIAN_API_URL environment variable)
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Show the library grouped by author surname range
    Library,
    /// Search the external catalog, or the library itself with --library
    Search(SearchArgs),
    /// Add a book to the library
    Add(AddArgs),
    /// Update the reading status of a library entry
    Status(StatusArgs),
    /// Remove a book from the library
    Remove(RemoveArgs),
    /// Print the quote of the day
    Quote,
    /// Show an author's biography
    Author(AuthorArgs),
    /// Show a book's summary
    Summary(SummaryArgs),
}

#[derive(ClapArgs, Debug)]
pub struct SearchArgs {
    /// Free-text query
    pub query: String,

    /// Filter the library in place of searching the catalog
    #[arg(long)]
    pub library: bool,

    /// Result page to show (1-based)
    #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
    pub page: u32,

    /// Results per page (1-100)
    #[arg(long, default_value_t = DEFAULT_PAGE_SIZE as u32, value_parser = clap::value_parser!(u32).range(1..=100))]
    pub page_size: u32,
}

#[derive(ClapArgs, Debug)]
pub struct AddArgs {
    /// Book title
    #[arg(long)]
    pub title: String,

    /// Author name; repeat the flag for multiple authors
    #[arg(long = "author", required = true)]
    pub authors: Vec<String>,

    /// Catalog identifier
    #[arg(long, default_value = "")]
    pub isbn: String,

    /// Description text (the backend rejects empty descriptions)
    #[arg(long)]
    pub description: String,

    /// Cover artwork URL
    #[arg(long)]
    pub cover_art: Option<String>,

    /// Reading status: unread, "currently reading", or read
    #[arg(long, default_value = "unread", value_parser = parse_reading_status)]
    pub status: ReadingStatus,
}

#[derive(ClapArgs, Debug)]
pub struct StatusArgs {
    /// Title of the library entry
    pub title: String,

    /// New status: unread, "currently reading", or read
    #[arg(value_parser = parse_reading_status)]
    pub status: ReadingStatus,
}

#[derive(ClapArgs, Debug)]
pub struct RemoveArgs {
    /// Isbn of the library entry to remove
    pub isbn: String,
}

#[derive(ClapArgs, Debug)]
pub struct AuthorArgs {
    /// Author name, exactly as shown on the book
    pub name: String,
}

#[derive(ClapArgs, Debug)]
pub struct SummaryArgs {
    /// Book title
    pub title: String,
}

fn parse_reading_status(value: &str) -> Result<ReadingStatus, String> {
    ReadingStatus::parse(value).ok_or_else(|| {
        format!("invalid status '{value}'; expected unread, \"currently reading\", or read")
    })
}

//! Alphabetic range grouping for library navigation.
//!
//! The library view groups books into five fixed buckets keyed by the
//! first letter of the first author's surname, so navigation shortcuts
//! stay a constant width regardless of library size.

use std::collections::BTreeMap;
use std::fmt;

use crate::model::Book;

/// One of the five fixed navigation buckets.
///
/// Derives `Ord` so iteration over a grouped map visits buckets in display
/// order: `A-G`, `H-N`, `O-T`, `U-Z`, `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum RangeLabel {
    AToG,
    HToN,
    OToT,
    UToZ,
    Other,
}

impl RangeLabel {
    /// All buckets in display order.
    pub const ALL: [RangeLabel; 5] = [
        RangeLabel::AToG,
        RangeLabel::HToN,
        RangeLabel::OToT,
        RangeLabel::UToZ,
        RangeLabel::Other,
    ];

    /// The navigation label shown to the user.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::AToG => "A-G",
            Self::HToN => "H-N",
            Self::OToT => "O-T",
            Self::UToZ => "U-Z",
            Self::Other => "Other",
        }
    }
}

impl fmt::Display for RangeLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Maps a single uppercase character to its navigation bucket.
///
/// Comparison is by code point; digits, symbols, and lowercase or
/// non-Latin characters all land in [`RangeLabel::Other`]. Total function,
/// no error conditions.
#[must_use]
pub fn classify(letter: char) -> RangeLabel {
    match letter {
        'A'..='G' => RangeLabel::AToG,
        'H'..='N' => RangeLabel::HToN,
        'O'..='T' => RangeLabel::OToT,
        'U'..='Z' => RangeLabel::UToZ,
        _ => RangeLabel::Other,
    }
}

/// Partitions a library into navigation buckets, preserving input order
/// within each bucket.
///
/// The sort key is the uppercase first character of the last
/// whitespace-separated token of the first author's name (the surname); a
/// book with no authors defaults to `'A'`. Buckets are created lazily, so
/// unpopulated buckets are absent from the result rather than present but
/// empty. Pure function of its input; the library itself is never mutated.
#[must_use]
pub fn group_by_range(books: &[Book]) -> BTreeMap<RangeLabel, Vec<&Book>> {
    let mut grouped: BTreeMap<RangeLabel, Vec<&Book>> = BTreeMap::new();
    for book in books {
        let label = classify(surname_initial(book));
        grouped.entry(label).or_default().push(book);
    }
    grouped
}

/// Uppercase first character of the first author's surname, defaulting to
/// `'A'` when no usable author name exists.
fn surname_initial(book: &Book) -> char {
    book.first_author()
        .and_then(|author| author.split_whitespace().next_back())
        .and_then(|surname| surname.chars().next())
        .map_or('A', |initial| {
            initial.to_uppercase().next().unwrap_or(initial)
        })
}

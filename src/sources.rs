// Input sources — term lists and the book text.
//
// Every load returns a Result carrying the path and which input failed, so a
// missing file aborts the run with a readable message instead of a panic.

use std::collections::HashSet;
use std::fmt;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

/// Which of the three inputs is being loaded. Used in error messages and logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceKind {
    WarTerms,
    PeaceTerms,
    Book,
}

impl SourceKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            SourceKind::WarTerms => "war term list",
            SourceKind::PeaceTerms => "peace term list",
            SourceKind::Book => "book",
        }
    }
}

impl fmt::Display for SourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A curated vocabulary used as a membership filter.
///
/// Keeps the terms in file order for display, and a set for lookups.
/// Duplicates and ordering never affect membership.
#[derive(Debug, Clone, Default)]
pub struct TermList {
    terms: Vec<String>,
    index: HashSet<String>,
}

impl TermList {
    /// Build a term list from raw lines: trimmed, lowercased, blanks skipped.
    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut list = TermList::default();
        for line in lines {
            let term = line.as_ref().trim().to_lowercase();
            if term.is_empty() {
                continue;
            }
            list.index.insert(term.clone());
            list.terms.push(term);
        }
        list
    }

    pub fn contains(&self, word: &str) -> bool {
        self.index.contains(word)
    }

    /// Terms in the order they were loaded, duplicates included.
    pub fn terms(&self) -> &[String] {
        &self.terms
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Number of distinct terms.
    pub fn unique_len(&self) -> usize {
        self.index.len()
    }
}

/// Load a term list file, one term per line.
pub fn load_terms(path: &Path, kind: SourceKind) -> Result<TermList> {
    let raw = read_source(path, kind)?;
    let list = TermList::from_lines(raw.lines());
    info!(
        source = %kind,
        path = %path.display(),
        terms = list.len(),
        unique = list.unique_len(),
        "Loaded term list"
    );
    Ok(list)
}

/// Load the full book text.
pub fn load_book(path: &Path) -> Result<String> {
    let book = read_source(path, SourceKind::Book)?;
    info!(
        path = %path.display(),
        chars = book.chars().count(),
        "Loaded book"
    );
    Ok(book)
}

fn read_source(path: &Path, kind: SourceKind) -> Result<String> {
    std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {kind} from {}", path.display()))
}

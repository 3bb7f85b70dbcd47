//! Filter engine
//!
//! Maps a [`FilterQuery`] to the subset of the universe it matches. Filtering
//! never reorders: the output is always a subsequence of the input.

use serde::{Deserialize, Serialize};

use crate::model::Record;

/// Sentinel meaning "no constraint on this field"
pub const ANY: &str = "any";

/// A search submission
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterQuery {
    /// Free text matched case-insensitively against titles
    pub title: String,

    /// Author id or [`ANY`]
    pub author: String,

    /// Genre id or [`ANY`]
    pub genre: String,
}

impl Default for FilterQuery {
    fn default() -> Self {
        Self {
            title: String::new(),
            author: ANY.to_string(),
            genre: ANY.to_string(),
        }
    }
}

impl FilterQuery {
    /// The query that matches every record
    pub fn all() -> Self {
        Self::default()
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = author.into();
        self
    }

    pub fn with_genre(mut self, genre: impl Into<String>) -> Self {
        self.genre = genre.into();
        self
    }

    /// Whether the query places no constraint on any field
    pub fn is_unconstrained(&self) -> bool {
        self.title.trim().is_empty() && self.author == ANY && self.genre == ANY
    }

    /// Check a single record against the query
    pub fn matches(&self, record: &Record) -> bool {
        Matcher::new(self).matches(record)
    }
}

/// Query with the title needle lowercased once up front
///
/// A blank title matches everything; otherwise the title is used as typed,
/// surrounding whitespace included.
struct Matcher<'q> {
    needle: Option<String>,
    author: Option<&'q str>,
    genre: Option<&'q str>,
}

impl<'q> Matcher<'q> {
    fn new(query: &'q FilterQuery) -> Self {
        Self {
            needle: (!query.title.trim().is_empty()).then(|| query.title.to_lowercase()),
            author: (query.author != ANY).then_some(query.author.as_str()),
            genre: (query.genre != ANY).then_some(query.genre.as_str()),
        }
    }

    fn matches(&self, record: &Record) -> bool {
        let title_ok = self
            .needle
            .as_deref()
            .map_or(true, |needle| record.title.to_lowercase().contains(needle));
        let author_ok = self.author.map_or(true, |author| record.author_id == author);
        let genre_ok = self.genre.map_or(true, |genre| record.has_genre(genre));

        title_ok && author_ok && genre_ok
    }
}

/// Positions in `universe` of every record matching `query`, ascending
pub fn matching_indices(query: &FilterQuery, universe: &[Record]) -> Vec<usize> {
    let matcher = Matcher::new(query);
    universe
        .iter()
        .enumerate()
        .filter(|(_, record)| matcher.matches(record))
        .map(|(idx, _)| idx)
        .collect()
}

/// Records in `universe` matching `query`, in their original order
pub fn apply<'u>(query: &FilterQuery, universe: &'u [Record]) -> Vec<&'u Record> {
    let matcher = Matcher::new(query);
    universe.iter().filter(|record| matcher.matches(record)).collect()
}

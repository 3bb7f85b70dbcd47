//! Catalog data model
//!
//! Records and lookup tables are loaded once at startup and never mutated
//! afterwards. A [`Catalog`] bundles them behind `Arc`s so the store, the
//! renderer and the detail view can share them cheaply.

use std::borrow::Borrow;
use std::collections::BTreeSet;
use std::fmt;
use std::sync::Arc;

use ahash::AHashMap;
use chrono::{DateTime, Datelike, Utc};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::CatalogError;

/// Stable unique identifier of a record
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(String);

impl RecordId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for RecordId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl Borrow<str> for RecordId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

/// A single book in the catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    /// Unique identifier
    pub id: RecordId,

    /// Book title
    pub title: String,

    /// Key into the author table
    #[serde(rename = "author")]
    pub author_id: String,

    /// Cover image URL
    pub image: String,

    /// Blurb shown in the detail view
    #[serde(default)]
    pub description: String,

    /// Publication date
    pub published: DateTime<Utc>,

    /// Keys into the genre table
    #[serde(default)]
    pub genres: BTreeSet<String>,
}

impl Record {
    /// Check whether the record is tagged with a genre
    pub fn has_genre(&self, genre_id: &str) -> bool {
        self.genres.contains(genre_id)
    }

    /// Year of publication
    pub fn published_year(&self) -> i32 {
        self.published.year()
    }
}

/// Id to display-name mapping, kept in source order
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LookupTable {
    entries: IndexMap<String, String>,
}

pub type AuthorTable = LookupTable;
pub type GenreTable = LookupTable;

impl LookupTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Display name for an id
    pub fn name(&self, id: &str) -> Option<&str> {
        self.entries.get(id).map(String::as_str)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.entries.contains_key(id)
    }

    /// Iterate `(id, name)` pairs in source order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(id, name)| (id.as_str(), name.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for LookupTable {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect(),
        }
    }
}

/// The universe of records plus its lookup tables
#[derive(Debug, Clone)]
pub struct Catalog {
    records: Arc<[Record]>,
    authors: Arc<AuthorTable>,
    genres: Arc<GenreTable>,
    by_id: Arc<AHashMap<RecordId, usize>>,
}

impl Catalog {
    /// Build a catalog, rejecting duplicate record ids
    pub fn new(
        records: Vec<Record>,
        authors: AuthorTable,
        genres: GenreTable,
    ) -> Result<Self, CatalogError> {
        let mut by_id = AHashMap::with_capacity(records.len());
        for (idx, record) in records.iter().enumerate() {
            if by_id.insert(record.id.clone(), idx).is_some() {
                return Err(CatalogError::DuplicateRecord(record.id.clone()));
            }
        }

        Ok(Self {
            records: records.into(),
            authors: Arc::new(authors),
            genres: Arc::new(genres),
            by_id: Arc::new(by_id),
        })
    }

    /// All records in original order
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn authors(&self) -> &Arc<AuthorTable> {
        &self.authors
    }

    pub fn genres(&self) -> &Arc<GenreTable> {
        &self.genres
    }

    /// Look up a record anywhere in the universe
    pub fn find(&self, id: &str) -> Option<&Record> {
        self.by_id.get(id).map(|&idx| &self.records[idx])
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

//! JSON catalog files
//!
//! ```json
//! {
//!   "books":   [{ "id": "...", "title": "...", "author": "...", ... }],
//!   "authors": { "author-id": "Display Name" },
//!   "genres":  { "genre-id": "Display Name" }
//! }
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use bk_core::{AuthorTable, Catalog, GenreTable, Record};

use crate::DataError;

/// On-disk shape of a catalog
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogFile {
    pub books: Vec<Record>,

    #[serde(default)]
    pub authors: AuthorTable,

    #[serde(default)]
    pub genres: GenreTable,
}

impl CatalogFile {
    /// Validate and convert into an in-memory catalog
    pub fn into_catalog(self) -> Result<Catalog, DataError> {
        let dangling_authors = self
            .books
            .iter()
            .filter(|book| !self.authors.contains(&book.author_id))
            .count();
        if dangling_authors > 0 {
            warn!(count = dangling_authors, "Books reference authors missing from the author table");
        }

        Ok(Catalog::new(self.books, self.authors, self.genres)?)
    }
}

/// Parse a catalog from JSON text
pub fn parse_catalog(json: &str) -> Result<Catalog, DataError> {
    let file: CatalogFile = serde_json::from_str(json)?;
    file.into_catalog()
}

/// Load a catalog from a JSON file
pub fn load_catalog(path: impl AsRef<Path>) -> Result<Catalog, DataError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path)?;
    let catalog = parse_catalog(&text)?;
    info!(
        path = %path.display(),
        books = catalog.len(),
        authors = catalog.authors().len(),
        genres = catalog.genres().len(),
        "Loaded catalog"
    );
    Ok(catalog)
}

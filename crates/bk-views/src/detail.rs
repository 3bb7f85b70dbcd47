use bk_core::{AuthorTable, GenreTable, Record, RecordId};

/// Everything the detail overlay shows for one record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookDetail {
    pub id: RecordId,
    pub title: String,

    /// "Author Name (year)"
    pub subtitle: String,

    pub description: String,
    pub image: String,

    /// Genre display names in record order
    pub genres: Vec<String>,
}

impl BookDetail {
    pub fn from_record(record: &Record, authors: &AuthorTable, genres: &GenreTable) -> Self {
        let author = authors.name(&record.author_id).unwrap_or(&record.author_id);

        Self {
            id: record.id.clone(),
            title: record.title.clone(),
            subtitle: format!("{} ({})", author, record.published_year()),
            description: record.description.clone(),
            image: record.image.clone(),
            genres: record
                .genres
                .iter()
                .map(|id| genres.name(id).unwrap_or(id).to_string())
                .collect(),
        }
    }
}

//! Built-in sample catalog used when no catalog file is configured

use chrono::{TimeZone, Utc};

use bk_core::{AuthorTable, Catalog, GenreTable, Record, RecordId};

use crate::DataError;

const AUTHORS: &[(&str, &str)] = &[
    ("austen", "Jane Austen"),
    ("bronte-c", "Charlotte Brontë"),
    ("dickens", "Charles Dickens"),
    ("doyle", "Arthur Conan Doyle"),
    ("dostoevsky", "Fyodor Dostoevsky"),
    ("melville", "Herman Melville"),
    ("shelley", "Mary Shelley"),
    ("stevenson", "Robert Louis Stevenson"),
    ("tolstoy", "Leo Tolstoy"),
    ("twain", "Mark Twain"),
    ("verne", "Jules Verne"),
    ("wells", "H. G. Wells"),
];

const GENRES: &[(&str, &str)] = &[
    ("adventure", "Adventure"),
    ("classic", "Classic"),
    ("horror", "Horror"),
    ("mystery", "Mystery"),
    ("romance", "Romance"),
    ("scifi", "Science Fiction"),
];

// (id, title, author, year, genres, description)
const BOOKS: &[(&str, &str, &str, i32, &[&str], &str)] = &[
    ("pride-and-prejudice", "Pride and Prejudice", "austen", 1813, &["classic", "romance"],
        "Elizabeth Bennet navigates manners, marriage and her own first impressions."),
    ("emma", "Emma", "austen", 1815, &["classic", "romance"],
        "A well-meaning matchmaker misreads nearly everyone around her."),
    ("persuasion", "Persuasion", "austen", 1817, &["classic", "romance"],
        "Anne Elliot meets again the man she was persuaded to refuse."),
    ("jane-eyre", "Jane Eyre", "bronte-c", 1847, &["classic", "romance", "horror"],
        "An orphaned governess and the secret in the attic of Thornfield Hall."),
    ("great-expectations", "Great Expectations", "dickens", 1861, &["classic"],
        "Pip, a blacksmith's apprentice, comes into a mysterious fortune."),
    ("bleak-house", "Bleak House", "dickens", 1853, &["classic", "mystery"],
        "An interminable lawsuit entangles a whole society."),
    ("a-christmas-carol", "A Christmas Carol", "dickens", 1843, &["classic"],
        "Three spirits visit a miser on Christmas Eve."),
    ("a-study-in-scarlet", "A Study in Scarlet", "doyle", 1887, &["mystery"],
        "The first meeting of Sherlock Holmes and Dr. Watson."),
    ("the-hound-of-the-baskervilles", "The Hound of the Baskervilles", "doyle", 1902, &["mystery", "horror"],
        "A spectral hound haunts the moors of Devon."),
    ("the-lost-world", "The Lost World", "doyle", 1912, &["adventure", "scifi"],
        "An expedition finds dinosaurs on a South American plateau."),
    ("crime-and-punishment", "Crime and Punishment", "dostoevsky", 1866, &["classic"],
        "A student commits a murder and wrestles with the consequences."),
    ("the-brothers-karamazov", "The Brothers Karamazov", "dostoevsky", 1880, &["classic", "mystery"],
        "Three brothers, a murdered father and a trial."),
    ("moby-dick", "Moby-Dick", "melville", 1851, &["classic", "adventure"],
        "Captain Ahab hunts the white whale."),
    ("frankenstein", "Frankenstein", "shelley", 1818, &["classic", "horror", "scifi"],
        "A scientist gives life to a creature he cannot love."),
    ("treasure-island", "Treasure Island", "stevenson", 1883, &["adventure"],
        "Jim Hawkins, a map and Long John Silver."),
    ("strange-case", "Strange Case of Dr Jekyll and Mr Hyde", "stevenson", 1886, &["horror", "mystery"],
        "A respectable doctor and his monstrous other self."),
    ("war-and-peace", "War and Peace", "tolstoy", 1869, &["classic"],
        "Five aristocratic families through the Napoleonic wars."),
    ("anna-karenina", "Anna Karenina", "tolstoy", 1878, &["classic", "romance"],
        "A married woman's affair and society's verdict."),
    ("tom-sawyer", "The Adventures of Tom Sawyer", "twain", 1876, &["adventure", "classic"],
        "Boyhood mischief on the Mississippi."),
    ("huckleberry-finn", "Adventures of Huckleberry Finn", "twain", 1884, &["adventure", "classic"],
        "Huck and Jim raft down the river toward freedom."),
    ("twenty-thousand-leagues", "Twenty Thousand Leagues Under the Seas", "verne", 1870, &["adventure", "scifi"],
        "Aboard the Nautilus with Captain Nemo."),
    ("around-the-world", "Around the World in Eighty Days", "verne", 1872, &["adventure"],
        "Phileas Fogg wagers he can circle the globe in eighty days."),
    ("the-time-machine", "The Time Machine", "wells", 1895, &["scifi"],
        "A traveller journeys to the year 802,701."),
    ("the-war-of-the-worlds", "The War of the Worlds", "wells", 1898, &["scifi", "horror"],
        "Martians land in Surrey."),
];

/// The sample catalog, in publication-list order
pub fn sample_catalog() -> Result<Catalog, DataError> {
    let authors: AuthorTable = AUTHORS.iter().copied().collect();
    let genres: GenreTable = GENRES.iter().copied().collect();

    let records = BOOKS
        .iter()
        .map(|&(id, title, author, year, book_genres, description)| {
            let published = Utc
                .with_ymd_and_hms(year, 1, 1, 0, 0, 0)
                .single()
                .ok_or_else(|| DataError::Config(format!("invalid sample year {} for {}", year, id)))?;
            Ok(Record {
                id: RecordId::new(id),
                title: title.to_string(),
                author_id: author.to_string(),
                image: format!("https://covers.example.org/{}.jpg", id),
                description: description.to_string(),
                published,
                genres: book_genres.iter().map(|g| g.to_string()).collect(),
            })
        })
        .collect::<Result<Vec<_>, DataError>>()?;

    Ok(Catalog::new(records, authors, genres)?)
}

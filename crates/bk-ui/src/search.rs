//! Search form and its dropdowns

use egui::{ComboBox, Ui};
use tracing::debug;

use bk_core::{AuthorTable, Catalog, FilterQuery, GenreTable, LookupTable, ANY};

use crate::widget_utils::WidgetId;

/// One entry of a dropdown
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DropdownOption {
    pub value: String,
    pub label: String,
}

fn options(table: &LookupTable, any_label: &str) -> Vec<DropdownOption> {
    std::iter::once(DropdownOption {
        value: ANY.to_string(),
        label: any_label.to_string(),
    })
    .chain(table.iter().map(|(id, name)| DropdownOption {
        value: id.to_string(),
        label: name.to_string(),
    }))
    .collect()
}

/// "All Genres" followed by every genre in table order
pub fn genre_options(genres: &GenreTable) -> Vec<DropdownOption> {
    options(genres, "All Genres")
}

/// "All Authors" followed by every author in table order
pub fn author_options(authors: &AuthorTable) -> Vec<DropdownOption> {
    options(authors, "All Authors")
}

/// State of the search overlay's form
pub struct SearchForm {
    pub title: String,
    pub genre: String,
    pub author: String,
    genres: Vec<DropdownOption>,
    authors: Vec<DropdownOption>,
}

impl SearchForm {
    /// Build the form with dropdowns populated from the catalog's tables
    pub fn new(catalog: &Catalog) -> Self {
        let query = FilterQuery::all();
        Self {
            title: query.title,
            genre: query.genre,
            author: query.author,
            genres: genre_options(catalog.genres()),
            authors: author_options(catalog.authors()),
        }
    }

    /// The query the form currently describes
    pub fn query(&self) -> FilterQuery {
        FilterQuery::all()
            .with_title(self.title.clone())
            .with_genre(self.genre.clone())
            .with_author(self.author.clone())
    }

    pub fn genre_options(&self) -> &[DropdownOption] {
        &self.genres
    }

    pub fn author_options(&self) -> &[DropdownOption] {
        &self.authors
    }

    /// Draw the form; returns true when it was submitted
    pub fn ui(&mut self, ui: &mut Ui) -> bool {
        let mut submitted = false;

        ui.label("Title");
        let title = ui.text_edit_singleline(&mut self.title);
        if title.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
            submitted = true;
        }

        ui.label("Genre");
        dropdown(ui, WidgetId::new("search").with("genre"), &mut self.genre, &self.genres);

        ui.label("Author");
        dropdown(ui, WidgetId::new("search").with("author"), &mut self.author, &self.authors);

        ui.add_space(8.0);
        if ui.button("Search").clicked() {
            submitted = true;
        }

        if submitted {
            debug!(title = %self.title, genre = %self.genre, author = %self.author, "Search submitted");
        }
        submitted
    }
}

fn dropdown(ui: &mut Ui, id: WidgetId, selected: &mut String, options: &[DropdownOption]) {
    let selected_label = options
        .iter()
        .find(|option| option.value == *selected)
        .map(|option| option.label.clone())
        .unwrap_or_else(|| selected.clone());

    ComboBox::from_id_source(id.build())
        .selected_text(selected_label)
        .show_ui(ui, |ui| {
            for option in options {
                ui.selectable_value(selected, option.value.clone(), option.label.as_str());
            }
        });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_any_option_comes_first() {
        let genres: GenreTable = [("g1", "Fiction"), ("g2", "Science")].into_iter().collect();
        let options = genre_options(&genres);
        assert_eq!(options.len(), 3);
        assert_eq!(options[0], DropdownOption { value: "any".to_string(), label: "All Genres".to_string() });
        assert_eq!(options[2].label, "Science");
    }

    #[test]
    fn test_author_options_keep_table_order() {
        let authors: AuthorTable = [("z", "Zora"), ("a", "Ann")].into_iter().collect();
        let values: Vec<_> = author_options(&authors).into_iter().map(|o| o.value).collect();
        assert_eq!(values, vec!["any", "z", "a"]);
    }

    #[test]
    fn test_fresh_form_is_unconstrained() {
        let catalog = Catalog::new(Vec::new(), AuthorTable::new(), GenreTable::new()).unwrap();
        let mut form = SearchForm::new(&catalog);
        assert!(form.query().is_unconstrained());
        assert_eq!(form.genre_options().len(), 1);

        form.title = "dune".to_string();
        form.genre = "scifi".to_string();
        let query = form.query();
        assert_eq!(query.title, "dune");
        assert_eq!(query.genre, "scifi");
        assert_eq!(query.author, ANY);
    }
}

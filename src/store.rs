//! Catalog of saved files and themes.
//!
//! Persistence proper lives outside the engine; the core consumes it
//! through this narrow trait and only ever sees validated string lists.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("file entry may not be empty")]
    EmptyName,
    #[error("file {0:?} is already saved")]
    Duplicate(String),
}

/// Source of the two browsable lists. Snapshots are owned so list views can
/// keep rendering while a backend refreshes.
pub trait Catalog {
    fn files(&self) -> Vec<String>;
    fn themes(&self) -> Vec<String>;
    fn add_file(&mut self, name: String) -> Result<(), CatalogError>;
}

/// In-memory catalog seeded from the command line. Stands in for an on-disk
/// store, whose format is deliberately undefined here.
#[derive(Debug, Default)]
pub struct MemoryCatalog {
    files: Vec<String>,
    themes: Vec<String>,
}

impl MemoryCatalog {
    pub fn new(files: Vec<String>, themes: Vec<String>) -> Self {
        Self { files, themes }
    }
}

impl Catalog for MemoryCatalog {
    fn files(&self) -> Vec<String> {
        self.files.clone()
    }

    fn themes(&self) -> Vec<String> {
        self.themes.clone()
    }

    fn add_file(&mut self, name: String) -> Result<(), CatalogError> {
        let name = name.trim().to_string();
        if name.is_empty() {
            return Err(CatalogError::EmptyName);
        }
        if self.files.contains(&name) {
            return Err(CatalogError::Duplicate(name));
        }
        self.files.push(name);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_file_appends_in_order() {
        let mut catalog = MemoryCatalog::default();
        catalog.add_file("b.txt".into()).unwrap();
        catalog.add_file("a.txt".into()).unwrap();

        assert_eq!(catalog.files(), ["b.txt", "a.txt"]);
    }

    #[test]
    fn blank_names_are_rejected() {
        let mut catalog = MemoryCatalog::default();
        assert!(matches!(catalog.add_file("   ".into()), Err(CatalogError::EmptyName)));
        assert!(catalog.files().is_empty());
    }

    #[test]
    fn duplicates_are_rejected() {
        let mut catalog = MemoryCatalog::default();
        catalog.add_file("notes.md".into()).unwrap();

        let err = catalog.add_file("notes.md".into());
        assert!(matches!(err, Err(CatalogError::Duplicate(name)) if name == "notes.md"));
    }
}

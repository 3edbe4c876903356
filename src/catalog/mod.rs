mod loader;

use serde::{Deserialize, Serialize};

use crate::error::LoadError;

/// A single catalog row: one movie, show, or book.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Item {
    /// Display name of the item
    pub name: String,
    /// Genre within the item's type; absent when the source cell was empty
    pub genre: Option<String>,
    /// Rating score; absent when the source cell was empty
    pub score: Option<f64>,
    /// Media type (e.g. "Movie", "Show", "Book"); absent when the source
    /// cell was empty
    #[serde(rename = "type")]
    pub media_type: Option<String>,
}

/// The full in-memory table of items.
///
/// Loaded once at startup and never mutated afterwards, so it can be shared
/// across concurrent queries without locking.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    items: Vec<Item>,
}

impl Catalog {
    /// Creates a catalog from already-parsed rows
    pub fn new(items: Vec<Item>) -> Self {
        Self { items }
    }

    /// Loads a catalog from a CSV file on disk
    pub fn load_path(path: &str) -> Result<Self, LoadError> {
        let text = std::fs::read_to_string(path)?;
        Self::load_str(&text)
    }

    /// Loads a catalog from CSV text already in memory
    pub fn load_str(text: &str) -> Result<Self, LoadError> {
        loader::parse_csv(text).map(Self::new)
    }

    /// Number of rows in the catalog
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Read access to the underlying rows
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Item> {
        self.items.iter()
    }
}

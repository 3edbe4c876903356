//! Facet enumeration over the catalog.
//!
//! Facets are the distinct values of the categorical columns (type, and
//! genre within a type); they drive the choice lists offered to clients.
//! Matching is exact and case-sensitive.

use std::collections::HashSet;

use crate::catalog::Catalog;
use crate::error::{AppError, AppResult};

/// A validated request for the genres of one media type.
#[derive(Debug, Clone, PartialEq)]
pub struct FacetQuery {
    pub media_type: String,
}

impl FacetQuery {
    /// Builds a facet query, rejecting a missing or empty type.
    pub fn new(media_type: impl Into<String>) -> AppResult<Self> {
        let media_type = media_type.into();
        if media_type.is_empty() {
            return Err(AppError::InvalidQuery("type is required".to_string()));
        }
        Ok(Self { media_type })
    }
}

/// All distinct media types present in the catalog, in first-appearance
/// order. Rows with no type are excluded; an empty catalog yields an empty
/// list.
pub fn list_types(catalog: &Catalog) -> Vec<String> {
    let mut seen = HashSet::new();
    catalog
        .iter()
        .filter_map(|item| item.media_type.as_deref())
        .filter(|media_type| seen.insert(*media_type))
        .map(str::to_string)
        .collect()
}

/// All distinct non-empty genres among rows of the requested type, in
/// first-appearance order. A type with no rows yields an empty list, not
/// an error.
pub fn list_genres(catalog: &Catalog, query: &FacetQuery) -> Vec<String> {
    let mut seen = HashSet::new();
    catalog
        .iter()
        .filter(|item| item.media_type.as_deref() == Some(query.media_type.as_str()))
        .filter_map(|item| item.genre.as_deref())
        .filter(|genre| seen.insert(*genre))
        .map(str::to_string)
        .collect()
}

//! Catalog browse parameters.
//!
//! These types double as the HTTP query contract for the listing endpoint,
//! so the wire names match the original storefront's sort selector values.

use serde::{Deserialize, Serialize};

/// Sort order for catalog listings.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum SortOrder {
    /// Insertion order, as records were added to the catalog.
    #[default]
    Default,
    PriceAsc,
    PriceDesc,
    Name,
}

/// Filter and sort parameters for a catalog listing.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct CatalogQuery {
    /// Exact category match. `None` lists every category.
    pub category: Option<String>,
    /// Case-insensitive substring search over name and description.
    pub search: Option<String>,
    pub sort: Option<SortOrder>,
}

impl CatalogQuery {
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }

    pub fn with_sort(mut self, sort: SortOrder) -> Self {
        self.sort = Some(sort);
        self
    }

    /// Effective sort order (`sort` defaulting to insertion order).
    pub fn sort_order(&self) -> SortOrder {
        self.sort.unwrap_or_default()
    }
}

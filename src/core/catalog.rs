// desclint - core/catalog.rs
//
// Catalog property-list loading and entry lookup.
//
// The catalog is an XML (or binary) property list: an array of category
// dictionaries, each with a display name and a `children` array of
// sample entries. It is loaded once per run and never mutated.

use crate::util::constants;
use crate::util::error::LoadError;
use serde::Deserialize;
use std::path::Path;

/// One sample entry inside a catalog category.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogEntry {
    pub display_name: String,
    #[serde(default)]
    pub description_text: String,
}

/// One catalog category with its child sample entries.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryNode {
    pub display_name: String,
    #[serde(default)]
    pub children: Vec<CatalogEntry>,
}

/// The full catalog document.
#[derive(Debug, Clone)]
pub struct Catalog {
    pub categories: Vec<CategoryNode>,
}

impl Catalog {
    /// Load the catalog from a property-list file.
    ///
    /// Fails if the file is missing or unreadable (`LoadError::Io`),
    /// malformed (`LoadError::Plist`), or parses to an empty category
    /// list (`LoadError::Empty`).
    pub fn load(path: &Path) -> Result<Self, LoadError> {
        let bytes = std::fs::read(path).map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let categories: Vec<CategoryNode> =
            plist::from_bytes(&bytes).map_err(|source| LoadError::Plist {
                path: path.to_path_buf(),
                source,
            })?;

        if categories.is_empty() {
            return Err(LoadError::Empty {
                path: path.to_path_buf(),
            });
        }

        tracing::debug!(
            path = %path.display(),
            categories = categories.len(),
            "Catalog loaded"
        );

        Ok(Self { categories })
    }

    /// Locate the catalog entry for a sample.
    ///
    /// `category_folder` is the sample's parent folder name; each
    /// category's display name is mapped to its canonical folder name
    /// before comparison. `sample_name` matches the entry display name
    /// exactly.
    pub fn find_entry(
        &self,
        category_folder: &str,
        sample_name: &str,
    ) -> Result<&CatalogEntry, LoadError> {
        let category = self
            .categories
            .iter()
            .find(|c| canonical_category_name(&c.display_name) == Some(category_folder))
            .ok_or_else(|| LoadError::CategoryNotFound {
                category: category_folder.to_string(),
            })?;

        category
            .children
            .iter()
            .find(|e| e.display_name == sample_name)
            .ok_or_else(|| LoadError::EntryNotFound {
                category: category_folder.to_string(),
                sample: sample_name.to_string(),
            })
    }
}

/// Translate a catalog category display name (e.g. "Display Information")
/// to the canonical folder name used in the sample tree (e.g.
/// "Display information"). Returns `None` for unknown display names.
pub fn canonical_category_name(display_name: &str) -> Option<&'static str> {
    constants::CATALOG_CATEGORY_MAPPING
        .iter()
        .find(|(catalog, _)| *catalog == display_name)
        .map(|(_, folder)| *folder)
}

// =============================================================================
// Tests
// =============================================================================

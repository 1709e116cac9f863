// SPDX-License-Identifier: MPL-2.0
//! Read-only showcase catalog.
//!
//! The catalog is loaded once and shared by reference with every carousel
//! instance. It is never mutated after construction and always holds at
//! least one item, so controllers built from it never see `N = 0`.

use crate::error::{CatalogError, Result};
use rust_embed::RustEmbed;
use serde::Deserialize;
use std::collections::HashSet;
use std::fmt;
use std::fs;
use std::num::NonZeroUsize;
use std::path::Path;
use std::sync::{Arc, OnceLock};

#[derive(RustEmbed)]
#[folder = "assets/catalog/"]
struct Asset;

const BUILTIN_CATALOG: &str = "showcase.toml";

static BUILTIN: OnceLock<std::result::Result<Catalog, CatalogError>> = OnceLock::new();

/// Stable identifier of a showcase item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize)]
#[serde(transparent)]
pub struct ItemId(pub u32);

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// One showcase entry.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Item {
    pub id: ItemId,
    pub title: String,
    #[serde(default)]
    pub description: String,
    /// Image asset name; resolved by the renderer.
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl Item {
    /// Convenience constructor for an item with only an id and a title.
    #[must_use]
    pub fn new(id: u32, title: impl Into<String>) -> Self {
        Self {
            id: ItemId(id),
            title: title.into(),
            description: String::new(),
            image: None,
            tags: Vec::new(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct CatalogFile {
    #[serde(default)]
    items: Vec<Item>,
}

/// Ordered, immutable, non-empty sequence of showcase items.
///
/// Cloning is cheap: all clones share the same backing slice.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    items: Arc<[Item]>,
}

impl Catalog {
    /// Builds a catalog, rejecting empty lists and duplicate identifiers.
    pub fn new(items: Vec<Item>) -> std::result::Result<Self, CatalogError> {
        if items.is_empty() {
            return Err(CatalogError::Empty);
        }

        let mut seen = HashSet::with_capacity(items.len());
        for item in &items {
            if !seen.insert(item.id) {
                return Err(CatalogError::DuplicateId(item.id.0));
            }
        }

        Ok(Self {
            items: items.into(),
        })
    }

    /// Parses a catalog from TOML text (`[[items]]` tables).
    pub fn from_toml_str(content: &str) -> std::result::Result<Self, CatalogError> {
        let file: CatalogFile =
            toml::from_str(content).map_err(|e| CatalogError::Parse(e.to_string()))?;
        Self::new(file.items)
    }

    /// Loads a catalog from a TOML file on disk.
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Ok(Self::from_toml_str(&content)?)
    }

    /// Returns the catalog embedded in the binary.
    ///
    /// Parsed on first use, then shared process-wide.
    pub fn builtin() -> std::result::Result<Self, CatalogError> {
        BUILTIN
            .get_or_init(|| {
                let file = Asset::get(BUILTIN_CATALOG)
                    .ok_or(CatalogError::MissingAsset(BUILTIN_CATALOG))?;
                let content = std::str::from_utf8(file.data.as_ref())
                    .map_err(|e| CatalogError::Parse(e.to_string()))?;
                Self::from_toml_str(content)
            })
            .clone()
    }

    /// Number of items, never zero.
    #[must_use]
    pub fn len(&self) -> NonZeroUsize {
        // Construction rejects empty catalogs.
        NonZeroUsize::new(self.items.len()).unwrap_or(NonZeroUsize::MIN)
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Item> {
        self.items.get(index)
    }

    /// Position of the item with the given id.
    #[must_use]
    pub fn position(&self, id: ItemId) -> Option<usize> {
        self.items.iter().position(|item| item.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Item> {
        self.items.iter()
    }

    #[must_use]
    pub fn items(&self) -> &[Item] {
        &self.items
    }
}

//! Religion catalog
//!
//! Holds the religion records, the curated list shown on the selection screen,
//! and the glyph for each card. A `Catalog` is immutable once built; all of its
//! invariants are checked in [`Catalog::new`].

mod religions;

use std::collections::{HashMap, HashSet};

use crate::error::{CatalogError, CatalogResult};

pub use religions::{FALLBACK_SYMBOL, FEATURED, RELIGIONS, SYMBOLS};

/// A single selectable religion record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Religion {
    pub id: String,
    pub name: String,
}

impl Religion {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

/// Map the curated ids onto their records.
///
/// Preserves curated order, silently skips ids with no record and never
/// yields the same record twice.
pub fn resolve_featured<'a, S: AsRef<str>>(
    featured: &[S],
    source: &'a [Religion],
) -> Vec<&'a Religion> {
    let mut seen = HashSet::new();
    featured
        .iter()
        .map(AsRef::as_ref)
        .filter(|id| seen.insert(*id))
        .filter_map(|id| source.iter().find(|r| r.id == id))
        .collect()
}

/// The validated religion catalog.
#[derive(Debug, Clone)]
pub struct Catalog {
    religions: Vec<Religion>,
    featured: Vec<String>,
    symbols: HashMap<String, String>,
}

impl Catalog {
    /// Build a catalog, checking that record ids are unique and non-empty and
    /// that every featured id exists once and has a symbol.
    pub fn new(
        religions: Vec<Religion>,
        featured: Vec<String>,
        symbols: HashMap<String, String>,
    ) -> CatalogResult<Self> {
        let mut ids = HashSet::new();
        for religion in &religions {
            if religion.id.is_empty() {
                return Err(CatalogError::EmptyId);
            }
            if !ids.insert(religion.id.as_str()) {
                return Err(CatalogError::DuplicateReligion(religion.id.clone()));
            }
        }

        let mut listed = HashSet::new();
        for id in &featured {
            if !ids.contains(id.as_str()) {
                return Err(CatalogError::UnknownFeatured(id.clone()));
            }
            if !listed.insert(id.as_str()) {
                return Err(CatalogError::DuplicateFeatured(id.clone()));
            }
            if !symbols.contains_key(id) {
                return Err(CatalogError::MissingSymbol(id.clone()));
            }
        }

        Ok(Self {
            religions,
            featured,
            symbols,
        })
    }

    /// The catalog made of the built-in tables only.
    pub fn builtin() -> Self {
        Self {
            religions: RELIGIONS
                .iter()
                .map(|(id, name)| Religion::new(*id, *name))
                .collect(),
            featured: FEATURED.iter().map(|id| id.to_string()).collect(),
            symbols: builtin_symbols(),
        }
    }

    /// All records, featured or not.
    pub fn religions(&self) -> &[Religion] {
        &self.religions
    }

    /// The records shown on the selection screen, in curated order.
    pub fn featured(&self) -> Vec<&Religion> {
        resolve_featured(&self.featured, &self.religions)
    }

    pub fn find(&self, id: &str) -> Option<&Religion> {
        self.religions.iter().find(|r| r.id == id)
    }

    pub fn display_name(&self, id: &str) -> Option<&str> {
        self.find(id).map(|r| r.name.as_str())
    }

    /// Glyph for `id`, or [`FALLBACK_SYMBOL`] when the map has none.
    pub fn symbol(&self, id: &str) -> &str {
        self.symbols
            .get(id)
            .map(String::as_str)
            .unwrap_or(FALLBACK_SYMBOL)
    }
}

/// The built-in symbol table as an owned map.
pub fn builtin_symbols() -> HashMap<String, String> {
    SYMBOLS
        .iter()
        .map(|(id, glyph)| (id.to_string(), glyph.to_string()))
        .collect()
}

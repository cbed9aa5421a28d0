//! Recipe cross-references: item names to slugs to item ids.

use crate::error::{ExtractionWarning, Result};
use crate::models::RecipeRef;
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;
use std::sync::{Arc, OnceLock};

/// External capability resolving a slug to an item id.
///
/// Implementations must be safe to call from many threads at once.
pub trait RecipeLookup: Send + Sync {
    fn resolve_identifier(&self, slug: &str) -> Option<u32>;
}

impl<F> RecipeLookup for F
where
    F: Fn(&str) -> Option<u32> + Send + Sync,
{
    fn resolve_identifier(&self, slug: &str) -> Option<u32> {
        self(slug)
    }
}

/// Exact-match rewrite for a page whose slug breaks the general rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlugCorrection {
    pub from: String,
    pub to: String,
}

impl SlugCorrection {
    pub fn new(from: &str, to: &str) -> Self {
        SlugCorrection {
            from: from.to_string(),
            to: to.to_string(),
        }
    }
}

pub fn default_slug_corrections() -> Vec<SlugCorrection> {
    vec![
        SlugCorrection::new("Hextech_Alternator_Hextech_Alternator", "Hextech_Alternator"),
        SlugCorrection::new("Blasting_Wand_Blasting_Wand", "Blasting_Wand"),
        SlugCorrection::new("Ruby_Crystal_Ruby_Crystal", "Ruby_Crystal"),
    ]
}

/// Turn a display name into its cross-reference slug.
pub fn slugify(name: &str, corrections: &[SlugCorrection]) -> String {
    let slug = name.split_whitespace().collect::<Vec<_>>().join("_");
    corrections
        .iter()
        .find(|correction| correction.from == slug)
        .map(|correction| correction.to.clone())
        .unwrap_or(slug)
}

/// Memoizing wrapper around a lookup, keyed by slug.
///
/// Concurrent first requests for the same slug wait on one shared cell, so
/// the wrapped lookup runs at most once per slug.
pub struct RecipeResolver<L> {
    lookup: L,
    cache: Mutex<HashMap<String, Arc<OnceLock<Option<u32>>>>>,
}

impl<L: RecipeLookup> RecipeResolver<L> {
    pub fn new(lookup: L) -> Self {
        RecipeResolver {
            lookup,
            cache: Mutex::new(HashMap::new()),
        }
    }

    /// Number of distinct slugs seen so far.
    pub fn cached_slugs(&self) -> usize {
        self.cache.lock().len()
    }
}

impl<L: RecipeLookup> RecipeLookup for RecipeResolver<L> {
    fn resolve_identifier(&self, slug: &str) -> Option<u32> {
        let cell = {
            let mut cache = self.cache.lock();
            Arc::clone(cache.entry(slug.to_string()).or_default())
        };
        *cell.get_or_init(|| {
            tracing::debug!("Resolving recipe slug {}", slug);
            self.lookup.resolve_identifier(slug)
        })
    }
}

/// Resolve a comma-delimited list of item names. Unresolved names are
/// dropped and reported.
pub fn resolve_refs<L: RecipeLookup + ?Sized>(
    list: &str,
    lookup: &L,
    corrections: &[SlugCorrection],
) -> (Vec<RecipeRef>, Vec<ExtractionWarning>) {
    let mut refs = Vec::new();
    let mut warnings = Vec::new();

    for name in list.split(',').map(str::trim).filter(|name| !name.is_empty()) {
        let slug = slugify(name, corrections);
        match lookup.resolve_identifier(&slug) {
            Some(id) => refs.push(RecipeRef {
                id,
                name: name.to_string(),
            }),
            None => warnings.push(ExtractionWarning::UnresolvedRecipe {
                name: name.to_string(),
                slug,
            }),
        }
    }

    (refs, warnings)
}

/// A slug → id index, e.g. loaded from a previous catalog run.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IndexLookup(HashMap<String, u32>);

impl IndexLookup {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, slug: impl Into<String>, id: u32) {
        self.0.insert(slug.into(), id);
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Load an index from a JSON object of slug → id.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }
}

impl RecipeLookup for IndexLookup {
    fn resolve_identifier(&self, slug: &str) -> Option<u32> {
        self.0.get(slug).copied()
    }
}

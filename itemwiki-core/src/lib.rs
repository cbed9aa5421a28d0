//! Core library for extracting item statistics from wiki item data tables.

pub mod catalog;
pub mod config;
pub mod effects;
pub mod error;
pub mod extract;
pub mod fields;
pub mod file_utils;
pub mod models;
pub mod numeric;
pub mod passives;
pub mod recipe;
pub mod stats;
pub mod tags;

pub use catalog::{extract_catalog, summarize, CatalogSummary};
pub use config::ExtractorConfig;
pub use error::{ClassificationError, ExtractionWarning, ItemWikiError, Result};
pub use extract::{extract_item, Extraction, Extractor};
pub use fields::RawFields;
pub use models::Item;
pub use recipe::{IndexLookup, RecipeLookup, RecipeResolver};

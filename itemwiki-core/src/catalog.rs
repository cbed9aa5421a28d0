//! Parallel extraction over a whole item catalog.

use crate::config::ExtractorConfig;
use crate::error::Result;
use crate::extract::{Extraction, Extractor};
use crate::fields::RawFields;
use crate::recipe::{RecipeLookup, RecipeResolver};
use rayon::prelude::*;

/// Counts for one catalog run.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CatalogSummary {
    pub total_processed: usize,
    pub extracted: usize,
    pub failed: usize,
    pub warnings: usize,
}

impl CatalogSummary {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_result(&mut self, result: &Result<Extraction>) {
        self.total_processed += 1;
        match result {
            Ok(extraction) => {
                self.extracted += 1;
                self.warnings += extraction.warnings.len();
            }
            Err(_) => self.failed += 1,
        }
    }
}

/// Extract every record in parallel.
///
/// All records share one memoizing resolver, so a component referenced by
/// many recipes is looked up once for the whole run. Results keep input order.
pub fn extract_catalog<L: RecipeLookup>(
    records: &[RawFields],
    lookup: L,
    config: ExtractorConfig,
) -> Vec<Result<Extraction>> {
    let extractor = Extractor::new(config);
    let resolver = RecipeResolver::new(lookup);

    tracing::info!(
        "Extracting {} item records ({} slug corrections, auras {})",
        records.len(),
        extractor.config().slug_corrections.len(),
        if extractor.config().include_auras { "included" } else { "skipped" }
    );

    let results: Vec<Result<Extraction>> = records
        .par_iter()
        .map(|fields| {
            let result = extractor.extract(fields, &resolver);
            if let Err(e) = &result {
                tracing::warn!("Failed to extract item record: {}", e);
            }
            result
        })
        .collect();

    tracing::info!(
        "Extracted {} records, {} distinct recipe slugs looked up",
        results.len(),
        resolver.cached_slugs()
    );

    results
}

pub fn summarize(results: &[Result<Extraction>]) -> CatalogSummary {
    let mut summary = CatalogSummary::new();
    for result in results {
        summary.add_result(result);
    }
    summary
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ItemWikiError;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn record(code: u32, recipe: &str) -> RawFields {
        [
            ("1", format!("Item {}", code)),
            ("code", code.to_string()),
            ("recipe", recipe.to_string()),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn test_shared_component_looked_up_once() {
        let calls = AtomicUsize::new(0);
        let lookup = |slug: &str| -> Option<u32> {
            calls.fetch_add(1, Ordering::SeqCst);
            match slug {
                "Amplifying_Tome" => Some(1052),
                "Ruby_Crystal" => Some(1028),
                _ => None,
            }
        };

        let records: Vec<RawFields> = (0..200)
            .map(|i| record(4000 + i, "Amplifying Tome, Ruby Crystal"))
            .collect();

        let results = extract_catalog(&records, lookup, ExtractorConfig::default());
        assert_eq!(results.len(), 200);
        assert_eq!(calls.load(Ordering::SeqCst), 2);

        for (i, result) in results.iter().enumerate() {
            let item = &result.as_ref().unwrap().item;
            assert_eq!(item.id, Some(4000 + i as u32));
            assert_eq!(item.builds_from.len(), 2);
        }
    }

    #[test]
    fn test_malformed_record_fails_alone() {
        let mut records = vec![record(1001, ""), record(1004, "")];
        records.insert(1, [("ap", "10")].into_iter().collect());

        let no_recipes = |_: &str| -> Option<u32> { None };
        let results = extract_catalog(&records, no_recipes, ExtractorConfig::default());
        assert!(results[0].is_ok());
        assert!(matches!(results[1], Err(ItemWikiError::MissingFields(_))));
        assert!(results[2].is_ok());

        let summary = summarize(&results);
        assert_eq!(
            summary,
            CatalogSummary {
                total_processed: 3,
                extracted: 2,
                failed: 1,
                warnings: 0,
            }
        );
    }

    #[test]
    fn test_catalog_matches_single_extraction() {
        let records = vec![record(3089, "Needlessly Large Rod")];
        let lookup =
            |slug: &str| -> Option<u32> { (slug == "Needlessly_Large_Rod").then_some(1058) };

        let results = extract_catalog(&records, lookup, ExtractorConfig::default());
        let single = Extractor::default().extract(&records[0], &lookup).unwrap();
        assert_eq!(results[0].as_ref().unwrap(), &single);
    }
}

//! Raw field maps scraped from item data tables, and their schema.

use crate::error::{ItemWikiError, Result};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Keys every item data table must carry.
pub const REQUIRED_FIELDS: &[&str] = &["1", "code"];

/// Keys the extractor reads when present. Absent keys read as empty text.
pub const OPTIONAL_FIELDS: &[&str] = &[
    "tier", "removed", "rank", "noe", "nickname", "builds", "recipe", "spec", "limit",
    "buy", "comb", "sell",
    "ap", "armor", "rpen", "ad", "as", "cdr", "crit", "gp10", "hsp", "health", "hp5flat", "hp5",
    "lifesteal", "mpenflat", "mpen", "mr", "mana", "mp5flat", "mp5", "msflat", "ms", "msunique",
    "omnivamp", "ah",
    "menu1a", "menu1b", "menu2a", "menu2b", "menu3a", "menu3b", "menu4a", "menu4b",
    "menu5a", "menu5b", "menu6a", "menu6b", "menu7a", "menu7b",
    "pass", "pass2", "pass3", "pass4", "pass5", "aura", "aura2", "aura3", "act",
    "cdrunique", "critunique",
];

/// Ordered mapping of field name to trimmed cell text, in page order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RawFields(IndexMap<String, String>);

impl RawFields {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a field, trimming its value.
    pub fn insert(&mut self, key: impl Into<String>, value: impl AsRef<str>) {
        self.0.insert(key.into(), value.as_ref().trim().to_string());
    }

    pub fn contains(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Field text, or `None` when the key is absent.
    pub fn lookup(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    /// Field text, reading an absent key as empty.
    pub fn get(&self, key: &str) -> &str {
        self.lookup(key).unwrap_or("")
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Check that every required key is present.
    pub fn validate(&self) -> Result<()> {
        let missing: Vec<String> = REQUIRED_FIELDS
            .iter()
            .filter(|key| !self.contains(key))
            .map(|key| key.to_string())
            .collect();
        if missing.is_empty() {
            Ok(())
        } else {
            Err(ItemWikiError::MissingFields(missing))
        }
    }

    /// Keys outside the known schema; these are ignored by the extractor.
    pub fn unknown_keys(&self) -> Vec<&str> {
        self.0
            .keys()
            .map(String::as_str)
            .filter(|key| !REQUIRED_FIELDS.contains(key) && !OPTIONAL_FIELDS.contains(key))
            .collect()
    }
}

impl<K: Into<String>, V: AsRef<str>> FromIterator<(K, V)> for RawFields {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut fields = RawFields::new();
        for (key, value) in iter {
            fields.insert(key, value);
        }
        fields
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_trims_and_keeps_order() {
        let fields: RawFields = [("code", " 3089 "), ("1", "Rabadon's Deathcap"), ("ap", "120")]
            .into_iter()
            .collect();
        assert_eq!(fields.get("code"), "3089");
        let keys: Vec<&str> = fields.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["code", "1", "ap"]);
    }

    #[test]
    fn test_absent_key_reads_empty() {
        let fields = RawFields::new();
        assert_eq!(fields.get("pass"), "");
        assert_eq!(fields.lookup("pass"), None);
    }

    #[test]
    fn test_validate_reports_all_missing_keys() {
        let fields: RawFields = [("ap", "10")].into_iter().collect();
        match fields.validate() {
            Err(ItemWikiError::MissingFields(keys)) => assert_eq!(keys, vec!["1", "code"]),
            other => panic!("expected MissingFields, got {:?}", other),
        }

        let fields: RawFields = [("1", ""), ("code", "")].into_iter().collect();
        assert!(fields.validate().is_ok());
    }

    #[test]
    fn test_unknown_keys() {
        let fields: RawFields =
            [("1", "A"), ("code", "1"), ("icon", "a.png")].into_iter().collect();
        assert_eq!(fields.unknown_keys(), vec!["icon"]);
    }

    #[test]
    fn test_deserialize_from_json_object() {
        let fields: RawFields = serde_json::from_str(r#"{"1": "Boots", "code": "1001"}"#).unwrap();
        assert_eq!(fields.get("1"), "Boots");
        assert_eq!(fields.len(), 2);
    }
}

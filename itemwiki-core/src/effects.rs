//! Splitting raw passive/active text into flags, name, range and prose.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref RANGE: Regex = Regex::new(r"(\d+) range").unwrap();
}

/// Separators the wiki puts between a "Unique" marker and the effect name.
/// A plain hyphen only counts when followed by whitespace, so `-10%` keeps its sign.
const MARKER_SEPARATORS: &[char] = &[':', '–', '—'];

/// How many leading words may hold the name/description colon.
const NAME_WINDOW: usize = 4;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedEffect {
    pub unique: bool,
    pub mythic: bool,
    pub name: Option<String>,
    pub effect_text: String,
    pub range: Option<i64>,
}

fn strip_marker<'a>(text: &'a str, marker: &str) -> Option<&'a str> {
    let rest = text.strip_prefix(marker)?.trim_start();
    let rest = rest
        .strip_prefix(MARKER_SEPARATORS)
        .or_else(|| rest.strip_prefix("- "))
        .or_else(|| (rest == "-").then_some(""))
        .unwrap_or(rest);
    Some(rest.trim_start())
}

/// Parse one effect string. Never fails; missing features are `None`/`false`.
pub fn parse_effect_text(raw: &str) -> ParsedEffect {
    let raw = raw.trim();
    let (unique, mythic, body) = if let Some(rest) = strip_marker(raw, "Unique") {
        (true, false, rest)
    } else if let Some(rest) = strip_marker(raw, "Mythic") {
        (true, true, rest)
    } else {
        (false, false, raw)
    };

    let words: Vec<&str> = body.split_whitespace().collect();
    let body = words.join(" ");

    let has_name = words
        .iter()
        .take(NAME_WINDOW)
        .any(|word| word.contains(':'));

    let (name, effect_text) = match body.split_once(':') {
        Some((name, rest)) if has_name => {
            let name = name.trim();
            let name = (!name.is_empty()).then(|| name.to_string());
            (name, rest.trim().to_string())
        }
        _ => (None, body.trim().to_string()),
    };

    let range = RANGE
        .captures(&effect_text)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse().ok());

    ParsedEffect {
        unique,
        mythic,
        name,
        effect_text,
        range,
    }
}

//! Shop category classification from the `menuNa` / `menuNb` label pairs.
//!
//! The wiki spells the same category many different ways. Primary labels are
//! normalized only to validate the slot; the user-facing tags are the
//! secondary labels.

use crate::error::{ClassificationError, ExtractionWarning};
use crate::fields::RawFields;
use crate::models::{Attribute, Tag};

/// Number of menu label pairs on an item data table.
pub const MENU_SLOTS: usize = 7;

const VISION_AND_TRINKETS: &[&str] = &[
    "Vision andamp;Trinkets",
    "VISION AND TRINKETS",
    "Vision and&; Trinkets",
    "Vision & Trinkets",
    "Vision",
    "Vision and Trinkets",
];

pub fn normalize_primary(label: &str) -> Result<Attribute, ClassificationError> {
    match label {
        "Offense" | "Attack" => Ok(Attribute::Attack),
        "Starter Items" | "Starting Items" => Ok(Attribute::StarterItems),
        "Movement" | "Movement Speed" | "Other" => Ok(Attribute::Movement),
        _ => Attribute::from_label(label)
            .ok_or_else(|| ClassificationError::UnknownPrimary(label.to_string())),
    }
}

/// Resolve one secondary label (no list separator) to an attribute.
pub fn normalize_secondary(label: &str) -> Result<Attribute, ClassificationError> {
    let canonical = match label {
        "Health Regeneration" | "Health Regen" | "Health Renegeration" => "Health Regen",
        "Magic Resist" | "Magic Resistance" => "Magic Resist",
        "Mana Regen" | "Mana Regeneration" => "Mana Regen",
        "Jungling" | "Jungle" => "Jungling",
        "Other Movement Items" | "Other Movement" | "Others" | "Other Items" | "Movement Speed" => {
            "Other Movement Items"
        }
        "Attack Damage" | "Damage" | " Damage" => "Damage",
        "Laning" | "Lane" => "Laning",
        "Lifesteal" | "Life steal" => "Life Steal",
        _ if VISION_AND_TRINKETS.contains(&label) => "Vision and Trinkets",
        _ if label.contains("Magic Pen") => "Magic Penetration",
        _ if label.contains("Armor Pen") => "Armor Penetration",
        _ if label.contains("Cooldown Reudction") => "Cooldown Reduction",
        _ if label.contains("Omni Vamp") => "Omnivamp",
        _ => label,
    };
    Attribute::from_label(canonical)
        .ok_or_else(|| ClassificationError::UnknownSecondary(label.to_string()))
}

/// Classify one menu slot.
pub fn classify_slot(primary: &str, secondary: &str) -> Result<Tag, ClassificationError> {
    normalize_primary(primary)?;

    if secondary.is_empty() {
        return Ok(Tag::PrimaryOnly);
    }

    if secondary.contains(';') {
        let joined = secondary.replace("; ", ";");
        let is_vision = VISION_AND_TRINKETS.contains(&secondary)
            || VISION_AND_TRINKETS.contains(&joined.as_str());
        if is_vision {
            return Ok(Tag::Single(Attribute::VisionAndTrinkets));
        }
        let (first, second) = joined.split_once(';').unwrap_or((joined.as_str(), ""));
        let second = second.split(';').next().unwrap_or("");
        return Ok(Tag::Pair(
            normalize_secondary(first.trim())?,
            normalize_secondary(second.trim())?,
        ));
    }

    normalize_secondary(secondary).map(Tag::Single)
}

/// Classify every populated menu slot, skipping and reporting slots whose
/// labels cannot be resolved. Repeated tags are kept once, at first position.
pub fn classify_tags(fields: &RawFields) -> (Vec<Tag>, Vec<ExtractionWarning>) {
    let mut tags = Vec::new();
    let mut warnings = Vec::new();

    for slot in 1..=MENU_SLOTS {
        let primary = fields.get(&format!("menu{}a", slot));
        if primary.is_empty() {
            continue;
        }
        let secondary = fields.get(&format!("menu{}b", slot));

        match classify_slot(primary, secondary) {
            Ok(tag) => {
                if !tags.contains(&tag) {
                    tags.push(tag);
                }
            }
            Err(source) => warnings.push(ExtractionWarning::Classification { slot, source }),
        }
    }

    (tags, warnings)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_primary_variants() {
        assert_eq!(normalize_primary("Offense"), Ok(Attribute::Attack));
        assert_eq!(normalize_primary("Starting Items"), Ok(Attribute::StarterItems));
        assert_eq!(normalize_primary("Other"), Ok(Attribute::Movement));
        assert_eq!(normalize_primary("Defense"), Ok(Attribute::Defense));
        assert!(normalize_primary("Snacks").is_err());
    }

    #[test]
    fn test_secondary_variants() {
        assert_eq!(normalize_secondary("Health Renegeration"), Ok(Attribute::HealthRegen));
        assert_eq!(normalize_secondary("Magic Resistance"), Ok(Attribute::MagicResist));
        assert_eq!(normalize_secondary("Jungle"), Ok(Attribute::Jungling));
        assert_eq!(normalize_secondary("Others"), Ok(Attribute::NonbootsMovement));
        assert_eq!(normalize_secondary("Attack Damage"), Ok(Attribute::Damage));
        assert_eq!(normalize_secondary("Lane"), Ok(Attribute::Laning));
        assert_eq!(normalize_secondary("Life steal"), Ok(Attribute::LifeSteal));
        assert_eq!(normalize_secondary("Vision & Trinkets"), Ok(Attribute::VisionAndTrinkets));
        assert_eq!(normalize_secondary("Cooldown Reudction"), Ok(Attribute::CooldownReduction));
        assert_eq!(normalize_secondary("Omni Vamp"), Ok(Attribute::Omnivamp));
        assert_eq!(normalize_secondary("Armor Pen"), Ok(Attribute::ArmorPenetration));
    }

    #[test]
    fn test_offense_magic_pen() {
        assert_eq!(
            classify_slot("Offense", "Magic Pen"),
            Ok(Tag::Single(Attribute::MagicPenetration))
        );
    }

    #[test]
    fn test_primary_only_slot() {
        assert_eq!(classify_slot("Starter Items", ""), Ok(Tag::PrimaryOnly));
    }

    #[test]
    fn test_semicolon_pair() {
        assert_eq!(
            classify_slot("Magic", "Mana; Mana Regen"),
            Ok(Tag::Pair(Attribute::Mana, Attribute::ManaRegen))
        );
    }

    #[test]
    fn test_semicolon_vision_variants() {
        assert_eq!(
            classify_slot("Tools", "Vision andamp;Trinkets"),
            Ok(Tag::Single(Attribute::VisionAndTrinkets))
        );
        assert_eq!(
            classify_slot("Tools", "Vision and&; Trinkets"),
            Ok(Tag::Single(Attribute::VisionAndTrinkets))
        );
    }

    #[test]
    fn test_unknown_secondary_is_error() {
        assert_eq!(
            classify_slot("Defense", "Sparkles"),
            Err(ClassificationError::UnknownSecondary("Sparkles".to_string()))
        );
    }

    #[test]
    fn test_classify_tags_skips_bad_slot_and_dedupes() {
        let fields: RawFields = [
            ("menu1a", "Defense"),
            ("menu1b", "Health"),
            ("menu2a", "Defense"),
            ("menu2b", "Sparkles"),
            ("menu3a", "Defense"),
            ("menu3b", "Health"),
            ("menu4a", ""),
            ("menu4b", "Armor"),
            ("menu5a", "Attack"),
            ("menu5b", "Lifesteal"),
        ]
        .into_iter()
        .collect();

        let (tags, warnings) = classify_tags(&fields);
        assert_eq!(
            tags,
            vec![Tag::Single(Attribute::Health), Tag::Single(Attribute::LifeSteal)]
        );
        assert_eq!(warnings.len(), 1);
        assert!(matches!(
            warnings[0],
            ExtractionWarning::Classification { slot: 2, .. }
        ));
    }
}

//! Passive, aura and active effect assembly from the fixed effect slots.

use crate::effects::parse_effect_text;
use crate::fields::RawFields;
use crate::models::{ActiveDescriptor, EffectDescriptor};
use crate::numeric::{field_float, to_float};
use crate::stats::extract_stats;
use lazy_static::lazy_static;
use regex::Regex;

pub const PASSIVE_SLOTS: &[&str] = &["pass", "pass2", "pass3", "pass4", "pass5"];
pub const AURA_SLOTS: &[&str] = &["aura", "aura2", "aura3"];
pub const ACTIVE_SLOT: &str = "act";

/// Dedicated numeric fields that become standalone unique passives, with the
/// phrase used to describe them.
const SYNTHESIZED_PASSIVES: &[(&str, &str)] = &[
    ("cdrunique", "cooldown reduction"),
    ("critunique", "critical strike chance"),
];

lazy_static! {
    static ref COOLDOWN: Regex = Regex::new(r"(\d+(?:\.\d+)?) seconds? cooldown").unwrap();
}

/// Parse one slot's text into a descriptor, extracting stats from its prose.
pub fn build_effect(raw: &str) -> EffectDescriptor {
    let parsed = parse_effect_text(raw);
    let stats = extract_stats(&parsed.effect_text);
    EffectDescriptor {
        unique: parsed.unique,
        mythic: parsed.mythic,
        name: parsed.name,
        effect_text: parsed.effect_text,
        range: parsed.range,
        stats,
    }
}

fn synthesize(field: &str, value: &str, phrase: &str) -> Option<EffectDescriptor> {
    if !value.chars().any(|c| c.is_ascii_digit()) {
        return None;
    }
    let effect_text = format!("{}% {}", field_float(field, value), phrase);
    let stats = extract_stats(&effect_text);
    Some(EffectDescriptor {
        unique: true,
        mythic: false,
        name: None,
        effect_text,
        range: None,
        stats,
    })
}

/// Build the passive list: synthesized unique passives first, then the
/// passive slots, then (when enabled) the aura slots, each in slot order.
pub fn assemble_passives(fields: &RawFields, include_auras: bool) -> Vec<EffectDescriptor> {
    let mut effects: Vec<EffectDescriptor> = SYNTHESIZED_PASSIVES
        .iter()
        .filter_map(|(field, phrase)| synthesize(field, fields.get(field), phrase))
        .collect();

    effects.extend(
        PASSIVE_SLOTS
            .iter()
            .map(|slot| fields.get(slot))
            .filter(|text| !text.is_empty())
            .map(build_effect),
    );

    let auras: Vec<EffectDescriptor> = AURA_SLOTS
        .iter()
        .map(|slot| fields.get(slot))
        .filter(|text| !text.is_empty())
        .map(build_effect)
        .collect();

    if include_auras {
        effects.extend(auras);
    } else if !auras.is_empty() {
        tracing::debug!("Discarding {} aura effects", auras.len());
    }

    effects
}

/// Build the active list (zero or one entry).
pub fn assemble_actives(fields: &RawFields) -> Vec<ActiveDescriptor> {
    let text = fields.get(ACTIVE_SLOT);
    if text.is_empty() {
        return Vec::new();
    }

    let effect = build_effect(text);
    let cooldown_seconds = COOLDOWN
        .captures(&effect.effect_text)
        .and_then(|caps| caps.get(1))
        .map(|m| to_float(m.as_str(), 0.0));

    vec![ActiveDescriptor {
        effect,
        cooldown_seconds,
    }]
}

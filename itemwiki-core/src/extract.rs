//! Item assembly: one raw field map in, one item record out.

use crate::config::ExtractorConfig;
use crate::error::{ExtractionWarning, Result};
use crate::fields::RawFields;
use crate::models::{Item, Prices, RankTag, SpecialFlags, Stat, StatDelta};
use crate::numeric::{field_float, to_int};
use crate::passives::{assemble_actives, assemble_passives};
use crate::recipe::{resolve_refs, RecipeLookup, RecipeResolver};
use crate::tags::classify_tags;
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref TENACITY: Regex = Regex::new(r"(\d+(?:\.\d+)?)% TENACITY").unwrap();
}

/// An assembled item plus every degradation recorded while building it.
#[derive(Debug, Clone, PartialEq)]
pub struct Extraction {
    pub item: Item,
    pub warnings: Vec<ExtractionWarning>,
}

/// Assembles items from raw field maps.
#[derive(Debug, Clone, Default)]
pub struct Extractor {
    config: ExtractorConfig,
}

fn is_missing_code(code: &str) -> bool {
    code.is_empty() || code == "N/A"
}

fn has_letter(text: &str) -> bool {
    text.chars().any(|c| c.is_ascii_alphabetic())
}

impl Extractor {
    pub fn new(config: ExtractorConfig) -> Self {
        Extractor { config }
    }

    pub fn config(&self) -> &ExtractorConfig {
        &self.config
    }

    /// Extract one item.
    ///
    /// Fails only when `fields` lacks a required key; every other problem
    /// degrades to a default and is reported in `Extraction::warnings`.
    /// Repeated slugs within the item hit the lookup once.
    pub fn extract<L: RecipeLookup + ?Sized>(
        &self,
        fields: &RawFields,
        lookup: &L,
    ) -> Result<Extraction> {
        fields.validate()?;
        let unknown = fields.unknown_keys();
        if !unknown.is_empty() {
            tracing::debug!("Ignoring unknown fields: {}", unknown.join(", "));
        }

        let mut warnings = Vec::new();

        let id = self.item_id(fields.get("code"), &mut warnings);
        let name = match fields.get("1") {
            "" => {
                warnings.push(ExtractionWarning::MissingIdentity { field: "1".to_string() });
                None
            }
            name => Some(name.to_string()),
        };
        if is_missing_code(fields.get("code")) {
            warnings.push(ExtractionWarning::MissingIdentity { field: "code".to_string() });
        }

        let tier = self.tier(fields, &mut warnings);
        let rank = self.rank(fields.get("rank"), &mut warnings);

        let (tags, tag_warnings) = classify_tags(fields);
        warnings.extend(tag_warnings);

        let resolver = RecipeResolver::new(|slug: &str| lookup.resolve_identifier(slug));
        let corrections = &self.config.slug_corrections;
        let mut recipe_field = |key: &str| {
            let text = fields.get(key);
            if !has_letter(text) {
                return Vec::new();
            }
            let (refs, ref_warnings) = resolve_refs(text, &resolver, corrections);
            warnings.extend(ref_warnings);
            refs
        };
        let builds_into = recipe_field("builds");
        let builds_from = recipe_field("recipe");

        let nickname = fields.get("nickname");
        let nicknames = if has_letter(nickname) {
            nickname
                .split(',')
                .map(str::trim)
                .filter(|n| !n.is_empty())
                .map(str::to_string)
                .collect()
        } else {
            Vec::new()
        };

        let limit = fields.get("limit");
        let special_flags = SpecialFlags {
            ornn_upgrade: !self.config.ornn_marker.is_empty()
                && limit
                    .to_uppercase()
                    .contains(&self.config.ornn_marker.to_uppercase()),
            limit: (!limit.is_empty()).then(|| limit.to_string()),
        };

        for warning in &warnings {
            tracing::warn!("{}: {}", name.as_deref().unwrap_or("<unnamed item>"), warning);
        }

        let item = Item {
            id,
            name,
            tier,
            removed: fields.get("removed") == "true",
            no_effects: fields
                .get("noe")
                .starts_with(|c: char| c.is_ascii_alphabetic()),
            nicknames,
            stats: item_stats(fields),
            passives: assemble_passives(fields, self.config.include_auras),
            active: assemble_actives(fields),
            builds_from,
            builds_into,
            tags,
            rank,
            prices: Prices {
                total: to_int(fields.get("buy"), 0),
                combined: to_int(fields.get("comb"), 0),
                sell: to_int(fields.get("sell"), 0),
            },
            special_flags,
        };

        Ok(Extraction { item, warnings })
    }

    fn item_id(&self, code: &str, warnings: &mut Vec<ExtractionWarning>) -> Option<u32> {
        if is_missing_code(code) {
            return None;
        }
        match code.parse() {
            Ok(id) => Some(id),
            Err(_) => {
                warnings.push(ExtractionWarning::InvalidItemId(code.to_string()));
                None
            }
        }
    }

    fn tier(&self, fields: &RawFields, warnings: &mut Vec<ExtractionWarning>) -> Option<u32> {
        let Some(raw) = fields.lookup("tier") else {
            return self.config.default_tier;
        };
        let number = raw.strip_prefix("Tier ").unwrap_or(raw).trim();
        if number.is_empty() {
            return None;
        }
        match number.parse() {
            Ok(tier) => Some(tier),
            Err(_) => {
                warnings.push(ExtractionWarning::InvalidTier(raw.to_string()));
                None
            }
        }
    }

    fn rank(&self, raw: &str, warnings: &mut Vec<ExtractionWarning>) -> Vec<RankTag> {
        raw.split(',')
            .map(str::trim)
            .filter(|label| !label.is_empty())
            .filter_map(|label| match label.parse() {
                Ok(rank) => Some(rank),
                Err(_) => {
                    warnings.push(ExtractionWarning::UnknownRank(label.to_string()));
                    None
                }
            })
            .collect()
    }
}

/// Stats from the item's own numeric fields.
pub fn item_stats(fields: &RawFields) -> StatDelta {
    let f = |key: &str| field_float(key, fields.get(key));

    let spec = fields.get("spec").to_uppercase();
    let tenacity = TENACITY
        .captures(&spec)
        .map(|caps| field_float("spec", &caps[1]))
        .unwrap_or(0.0);

    StatDelta {
        ability_power: Stat::flat(f("ap")),
        armor: Stat::flat(f("armor")),
        armor_penetration: Stat::percent(f("rpen")),
        attack_damage: Stat::flat(f("ad")),
        attack_speed: Stat::flat(f("as")),
        cooldown_reduction: Stat::percent(f("cdr")),
        critical_strike_chance: Stat::percent(f("crit")),
        gold_per_10: Stat::flat(f("gp10")),
        heal_and_shield_power: Stat::flat(f("hsp")),
        health: Stat::flat(f("health")),
        health_regen: Stat {
            flat: f("hp5flat"),
            percent: f("hp5"),
        },
        lethality: Stat::default(),
        lifesteal: Stat::percent(f("lifesteal")),
        magic_penetration: Stat {
            flat: f("mpenflat"),
            percent: f("mpen"),
        },
        magic_resistance: Stat::flat(f("mr")),
        mana: Stat::flat(f("mana")),
        mana_regen: Stat {
            flat: f("mp5flat"),
            percent: f("mp5"),
        },
        movespeed: Stat {
            flat: f("msflat"),
            percent: f("ms") + f("msunique"),
        },
        omnivamp: Stat::percent(f("omnivamp")),
        ability_haste: Stat::flat(f("ah")),
        tenacity: Stat::percent(tenacity),
    }
}

/// Extract one item with the default configuration.
pub fn extract_item<L: RecipeLookup + ?Sized>(fields: &RawFields, lookup: &L) -> Result<Item> {
    Extractor::default()
        .extract(fields, lookup)
        .map(|extraction| extraction.item)
}

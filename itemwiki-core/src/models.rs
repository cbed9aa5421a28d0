//! Data models for extracted item records.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Flat and percent magnitude of a single stat.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Stat {
    pub flat: f64,
    pub percent: f64,
}

impl Stat {
    pub fn flat(flat: f64) -> Self {
        Stat { flat, percent: 0.0 }
    }

    pub fn percent(percent: f64) -> Self {
        Stat { flat: 0.0, percent }
    }

    pub fn is_zero(&self) -> bool {
        self.flat == 0.0 && self.percent == 0.0
    }
}

/// Every stat tracked in a `StatDelta`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatKind {
    AbilityPower,
    Armor,
    ArmorPenetration,
    AttackDamage,
    AttackSpeed,
    CooldownReduction,
    CriticalStrikeChance,
    GoldPer10,
    HealAndShieldPower,
    Health,
    HealthRegen,
    Lethality,
    Lifesteal,
    MagicPenetration,
    MagicResistance,
    Mana,
    ManaRegen,
    Movespeed,
    Omnivamp,
    AbilityHaste,
    Tenacity,
}

impl StatKind {
    pub const ALL: [StatKind; 21] = [
        StatKind::AbilityPower,
        StatKind::Armor,
        StatKind::ArmorPenetration,
        StatKind::AttackDamage,
        StatKind::AttackSpeed,
        StatKind::CooldownReduction,
        StatKind::CriticalStrikeChance,
        StatKind::GoldPer10,
        StatKind::HealAndShieldPower,
        StatKind::Health,
        StatKind::HealthRegen,
        StatKind::Lethality,
        StatKind::Lifesteal,
        StatKind::MagicPenetration,
        StatKind::MagicResistance,
        StatKind::Mana,
        StatKind::ManaRegen,
        StatKind::Movespeed,
        StatKind::Omnivamp,
        StatKind::AbilityHaste,
        StatKind::Tenacity,
    ];
}

/// Stat deltas granted by an item or one of its effects.
///
/// All stats are always present; a stat the source does not mention is zero.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StatDelta {
    pub ability_power: Stat,
    pub armor: Stat,
    pub armor_penetration: Stat,
    pub attack_damage: Stat,
    pub attack_speed: Stat,
    pub cooldown_reduction: Stat,
    pub critical_strike_chance: Stat,
    pub gold_per_10: Stat,
    pub heal_and_shield_power: Stat,
    pub health: Stat,
    pub health_regen: Stat,
    pub lethality: Stat,
    pub lifesteal: Stat,
    pub magic_penetration: Stat,
    pub magic_resistance: Stat,
    pub mana: Stat,
    pub mana_regen: Stat,
    pub movespeed: Stat,
    pub omnivamp: Stat,
    pub ability_haste: Stat,
    pub tenacity: Stat,
}

impl StatDelta {
    pub fn get(&self, kind: StatKind) -> &Stat {
        match kind {
            StatKind::AbilityPower => &self.ability_power,
            StatKind::Armor => &self.armor,
            StatKind::ArmorPenetration => &self.armor_penetration,
            StatKind::AttackDamage => &self.attack_damage,
            StatKind::AttackSpeed => &self.attack_speed,
            StatKind::CooldownReduction => &self.cooldown_reduction,
            StatKind::CriticalStrikeChance => &self.critical_strike_chance,
            StatKind::GoldPer10 => &self.gold_per_10,
            StatKind::HealAndShieldPower => &self.heal_and_shield_power,
            StatKind::Health => &self.health,
            StatKind::HealthRegen => &self.health_regen,
            StatKind::Lethality => &self.lethality,
            StatKind::Lifesteal => &self.lifesteal,
            StatKind::MagicPenetration => &self.magic_penetration,
            StatKind::MagicResistance => &self.magic_resistance,
            StatKind::Mana => &self.mana,
            StatKind::ManaRegen => &self.mana_regen,
            StatKind::Movespeed => &self.movespeed,
            StatKind::Omnivamp => &self.omnivamp,
            StatKind::AbilityHaste => &self.ability_haste,
            StatKind::Tenacity => &self.tenacity,
        }
    }

    pub fn get_mut(&mut self, kind: StatKind) -> &mut Stat {
        match kind {
            StatKind::AbilityPower => &mut self.ability_power,
            StatKind::Armor => &mut self.armor,
            StatKind::ArmorPenetration => &mut self.armor_penetration,
            StatKind::AttackDamage => &mut self.attack_damage,
            StatKind::AttackSpeed => &mut self.attack_speed,
            StatKind::CooldownReduction => &mut self.cooldown_reduction,
            StatKind::CriticalStrikeChance => &mut self.critical_strike_chance,
            StatKind::GoldPer10 => &mut self.gold_per_10,
            StatKind::HealAndShieldPower => &mut self.heal_and_shield_power,
            StatKind::Health => &mut self.health,
            StatKind::HealthRegen => &mut self.health_regen,
            StatKind::Lethality => &mut self.lethality,
            StatKind::Lifesteal => &mut self.lifesteal,
            StatKind::MagicPenetration => &mut self.magic_penetration,
            StatKind::MagicResistance => &mut self.magic_resistance,
            StatKind::Mana => &mut self.mana,
            StatKind::ManaRegen => &mut self.mana_regen,
            StatKind::Movespeed => &mut self.movespeed,
            StatKind::Omnivamp => &mut self.omnivamp,
            StatKind::AbilityHaste => &mut self.ability_haste,
            StatKind::Tenacity => &mut self.tenacity,
        }
    }

    /// Stats with a non-zero flat or percent magnitude, in declaration order.
    pub fn non_zero(&self) -> Vec<StatKind> {
        StatKind::ALL
            .into_iter()
            .filter(|kind| !self.get(*kind).is_zero())
            .collect()
    }
}

/// A passive, aura or synthesized effect.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EffectDescriptor {
    pub unique: bool,
    pub mythic: bool,
    pub name: Option<String>,
    pub effect_text: String,
    pub range: Option<i64>,
    pub stats: StatDelta,
}

/// An item active: an effect plus its cooldown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActiveDescriptor {
    #[serde(flatten)]
    pub effect: EffectDescriptor,
    pub cooldown_seconds: Option<f64>,
}

/// Canonical category vocabulary used by the shop menus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Attribute {
    // Primary groupings
    Attack,
    Defense,
    Magic,
    Movement,
    StarterItems,
    Tools,
    // Secondary categories
    AbilityHaste,
    AbilityPower,
    Active,
    Armor,
    ArmorPenetration,
    AttackSpeed,
    Aura,
    Boots,
    Consumable,
    CooldownReduction,
    CriticalStrike,
    Damage,
    GoldIncome,
    HealAndShieldPower,
    Health,
    HealthRegen,
    Jungling,
    Laning,
    LifeSteal,
    MagicPenetration,
    MagicResist,
    Mana,
    ManaRegen,
    NonbootsMovement,
    OnHit,
    Omnivamp,
    Slow,
    SpellBlock,
    SpellVamp,
    Stealth,
    Tenacity,
    Trinket,
    Vision,
    VisionAndTrinkets,
}

impl Attribute {
    pub fn as_str(&self) -> &'static str {
        match self {
            Attribute::Attack => "ATTACK",
            Attribute::Defense => "DEFENSE",
            Attribute::Magic => "MAGIC",
            Attribute::Movement => "MOVEMENT",
            Attribute::StarterItems => "STARTER_ITEMS",
            Attribute::Tools => "TOOLS",
            Attribute::AbilityHaste => "ABILITY_HASTE",
            Attribute::AbilityPower => "ABILITY_POWER",
            Attribute::Active => "ACTIVE",
            Attribute::Armor => "ARMOR",
            Attribute::ArmorPenetration => "ARMOR_PENETRATION",
            Attribute::AttackSpeed => "ATTACK_SPEED",
            Attribute::Aura => "AURA",
            Attribute::Boots => "BOOTS",
            Attribute::Consumable => "CONSUMABLE",
            Attribute::CooldownReduction => "COOLDOWN_REDUCTION",
            Attribute::CriticalStrike => "CRITICAL_STRIKE",
            Attribute::Damage => "DAMAGE",
            Attribute::GoldIncome => "GOLD_INCOME",
            Attribute::HealAndShieldPower => "HEAL_AND_SHIELD_POWER",
            Attribute::Health => "HEALTH",
            Attribute::HealthRegen => "HEALTH_REGEN",
            Attribute::Jungling => "JUNGLING",
            Attribute::Laning => "LANING",
            Attribute::LifeSteal => "LIFE_STEAL",
            Attribute::MagicPenetration => "MAGIC_PENETRATION",
            Attribute::MagicResist => "MAGIC_RESIST",
            Attribute::Mana => "MANA",
            Attribute::ManaRegen => "MANA_REGEN",
            Attribute::NonbootsMovement => "NONBOOTS_MOVEMENT",
            Attribute::OnHit => "ON_HIT",
            Attribute::Omnivamp => "OMNIVAMP",
            Attribute::Slow => "SLOW",
            Attribute::SpellBlock => "SPELL_BLOCK",
            Attribute::SpellVamp => "SPELL_VAMP",
            Attribute::Stealth => "STEALTH",
            Attribute::Tenacity => "TENACITY",
            Attribute::Trinket => "TRINKET",
            Attribute::Vision => "VISION",
            Attribute::VisionAndTrinkets => "VISION_AND_TRINKETS",
        }
    }

    /// General label lookup: case-insensitive, spaces and hyphens read as
    /// underscores. Also accepts the display names the wiki uses for a few
    /// categories (e.g. "Other Movement Items", "Jungle").
    pub fn from_label(label: &str) -> Option<Attribute> {
        let key = label.trim().to_uppercase().replace([' ', '-'], "_");
        let attribute = match key.as_str() {
            "ATTACK" => Attribute::Attack,
            "DEFENSE" => Attribute::Defense,
            "MAGIC" => Attribute::Magic,
            "MOVEMENT" => Attribute::Movement,
            "STARTER_ITEMS" => Attribute::StarterItems,
            "TOOLS" => Attribute::Tools,
            "ABILITY_HASTE" => Attribute::AbilityHaste,
            "ABILITY_POWER" | "SPELL_DAMAGE" => Attribute::AbilityPower,
            "ACTIVE" => Attribute::Active,
            "ARMOR" => Attribute::Armor,
            "ARMOR_PENETRATION" => Attribute::ArmorPenetration,
            "ATTACK_SPEED" => Attribute::AttackSpeed,
            "AURA" => Attribute::Aura,
            "BOOTS" => Attribute::Boots,
            "CONSUMABLE" | "CONSUMABLES" => Attribute::Consumable,
            "COOLDOWN_REDUCTION" => Attribute::CooldownReduction,
            "CRITICAL_STRIKE" | "CRITICAL_STRIKE_CHANCE" => Attribute::CriticalStrike,
            "DAMAGE" => Attribute::Damage,
            "GOLD_INCOME" => Attribute::GoldIncome,
            "HEAL_AND_SHIELD_POWER" => Attribute::HealAndShieldPower,
            "HEALTH" => Attribute::Health,
            "HEALTH_REGEN" => Attribute::HealthRegen,
            "JUNGLING" | "JUNGLE" => Attribute::Jungling,
            "LANING" | "LANE" => Attribute::Laning,
            "LIFE_STEAL" => Attribute::LifeSteal,
            "MAGIC_PENETRATION" => Attribute::MagicPenetration,
            "MAGIC_RESIST" => Attribute::MagicResist,
            "MANA" => Attribute::Mana,
            "MANA_REGEN" => Attribute::ManaRegen,
            "NONBOOTS_MOVEMENT" | "OTHER_MOVEMENT_ITEMS" => Attribute::NonbootsMovement,
            "ON_HIT" => Attribute::OnHit,
            "OMNIVAMP" => Attribute::Omnivamp,
            "SLOW" => Attribute::Slow,
            "SPELL_BLOCK" => Attribute::SpellBlock,
            "SPELL_VAMP" => Attribute::SpellVamp,
            "STEALTH" => Attribute::Stealth,
            "TENACITY" => Attribute::Tenacity,
            "TRINKET" | "TRINKETS" => Attribute::Trinket,
            "VISION" => Attribute::Vision,
            "VISION_AND_TRINKETS" => Attribute::VisionAndTrinkets,
            _ => return None,
        };
        Some(attribute)
    }
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A user-facing category tag resolved from one menu slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tag {
    Single(Attribute),
    /// A slot whose secondary label listed two categories.
    Pair(Attribute, Attribute),
    /// A slot with a primary label and no secondary label.
    PrimaryOnly,
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Tag::Single(attribute) => write!(f, "{}", attribute),
            Tag::Pair(first, second) => write!(f, "{},{}", first, second),
            Tag::PrimaryOnly => f.write_str("NONE"),
        }
    }
}

impl FromStr for Tag {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        if s == "NONE" {
            return Ok(Tag::PrimaryOnly);
        }
        let parse = |label: &str| {
            Attribute::from_label(label).ok_or_else(|| format!("Unknown tag: {}", label))
        };
        match s.split_once(',') {
            Some((first, second)) => Ok(Tag::Pair(parse(first)?, parse(second)?)),
            None => Ok(Tag::Single(parse(s)?)),
        }
    }
}

impl Serialize for Tag {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Tag {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// Item rank (shop tier classification).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RankTag {
    Starter,
    Basic,
    Epic,
    Legendary,
    Mythic,
    Consumable,
    Potion,
    Boots,
    Trinket,
    Distributed,
    Minion,
    Turret,
    Special,
}

impl FromStr for RankTag {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "STARTER" => Ok(Self::Starter),
            "BASIC" => Ok(Self::Basic),
            "EPIC" => Ok(Self::Epic),
            "LEGENDARY" => Ok(Self::Legendary),
            "MYTHIC" => Ok(Self::Mythic),
            "CONSUMABLE" => Ok(Self::Consumable),
            "POTION" => Ok(Self::Potion),
            "BOOTS" => Ok(Self::Boots),
            "TRINKET" => Ok(Self::Trinket),
            "DISTRIBUTED" => Ok(Self::Distributed),
            "MINION" => Ok(Self::Minion),
            "TURRET" => Ok(Self::Turret),
            "SPECIAL" => Ok(Self::Special),
            _ => Err(format!("Unknown rank: {}", s)),
        }
    }
}

/// A resolved reference to another catalog item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecipeRef {
    pub id: u32,
    pub name: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Prices {
    pub total: i64,
    pub combined: i64,
    pub sell: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpecialFlags {
    /// The item is an Ornn masterwork upgrade.
    pub ornn_upgrade: bool,
    /// Raw purchase-limit text, e.g. "Limited to 1 Mythic item".
    pub limit: Option<String>,
}

/// The complete extracted record for one item page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: Option<u32>,
    pub name: Option<String>,
    pub tier: Option<u32>,
    pub removed: bool,
    pub no_effects: bool,
    pub nicknames: Vec<String>,
    pub stats: StatDelta,
    pub passives: Vec<EffectDescriptor>,
    pub active: Vec<ActiveDescriptor>,
    pub builds_from: Vec<RecipeRef>,
    pub builds_into: Vec<RecipeRef>,
    pub tags: Vec<Tag>,
    pub rank: Vec<RankTag>,
    pub prices: Prices,
    pub special_flags: SpecialFlags,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stat_delta_defaults_to_zero() {
        let stats = StatDelta::default();
        assert!(stats.non_zero().is_empty());
        for kind in StatKind::ALL {
            assert_eq!(*stats.get(kind), Stat::default());
        }
    }

    #[test]
    fn test_get_mut_targets_matching_field() {
        let mut stats = StatDelta::default();
        stats.get_mut(StatKind::Lethality).flat = 12.0;
        assert_eq!(stats.lethality.flat, 12.0);
        assert_eq!(stats.non_zero(), vec![StatKind::Lethality]);
    }

    #[test]
    fn test_attribute_from_label_normalizes() {
        assert_eq!(Attribute::from_label("Magic Resist"), Some(Attribute::MagicResist));
        assert_eq!(Attribute::from_label(" on-hit "), Some(Attribute::OnHit));
        assert_eq!(
            Attribute::from_label("Other Movement Items"),
            Some(Attribute::NonbootsMovement)
        );
        assert_eq!(Attribute::from_label("Gibberish"), None);
    }

    #[test]
    fn test_tag_string_roundtrip() {
        let tags = [
            Tag::Single(Attribute::Health),
            Tag::Pair(Attribute::Mana, Attribute::ManaRegen),
            Tag::PrimaryOnly,
        ];
        for tag in tags {
            let text = tag.to_string();
            assert_eq!(text.parse::<Tag>().unwrap(), tag);
        }
        assert_eq!(Tag::Pair(Attribute::Mana, Attribute::ManaRegen).to_string(), "MANA,MANA_REGEN");
    }

    #[test]
    fn test_tag_serializes_as_string() {
        let tags = vec![Tag::Single(Attribute::LifeSteal), Tag::PrimaryOnly];
        let json = serde_json::to_string(&tags).unwrap();
        assert_eq!(json, r#"["LIFE_STEAL","NONE"]"#);
    }

    #[test]
    fn test_rank_from_str() {
        assert_eq!(" Legendary".parse::<RankTag>(), Ok(RankTag::Legendary));
        assert!("Ultra".parse::<RankTag>().is_err());
    }
}

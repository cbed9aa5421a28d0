//! Stat extraction from effect prose.
//!
//! Each stat family has one pattern rule. Rules are compiled once and only
//! read the text, so evaluation order never changes the result.

use crate::models::{StatDelta, StatKind};
use crate::numeric::to_float;
use lazy_static::lazy_static;
use regex::Regex;

/// Marks items whose mythic passive grants health/AD to other legendaries.
pub const EMPOWER_PHRASE: &str = "Empowers each of your other Legendary items";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Magnitude {
    Flat,
    Percent,
    /// Percent when the matched phrase contains a `%`, flat otherwise.
    PercentIfSign,
}

struct StatRule {
    stat: StatKind,
    pattern: Regex,
    magnitude: Magnitude,
    /// Match against the upper-cased text.
    upper: bool,
}

impl StatRule {
    fn new(stat: StatKind, pattern: &str, magnitude: Magnitude) -> Self {
        StatRule {
            stat,
            pattern: Regex::new(pattern).unwrap(),
            magnitude,
            upper: false,
        }
    }

    fn upper(mut self) -> Self {
        self.upper = true;
        self
    }

    fn apply(&self, text: &str, upper_text: &str, stats: &mut StatDelta) {
        let haystack = if self.upper { upper_text } else { text };
        let Some(caps) = self.pattern.captures(haystack) else {
            return;
        };
        let value = to_float(&caps[1], 0.0);
        let stat = stats.get_mut(self.stat);
        match self.magnitude {
            Magnitude::Flat => stat.flat += value,
            Magnitude::Percent => stat.percent += value,
            Magnitude::PercentIfSign if caps[0].contains('%') => stat.percent += value,
            Magnitude::PercentIfSign => stat.flat += value,
        }
    }
}

/// An integer or decimal magnitude.
const NUM: &str = r"(\d+(?:\.\d+)?)";
/// A short run of words between the number and the stat name, staying inside
/// one clause.
const GAP: &str = r"[^\d.,;]*?";

fn num(tail: &str) -> String {
    format!("{}{}", NUM, tail)
}

fn gapped(stat_name: &str) -> String {
    format!("{}{}{}", NUM, GAP, stat_name)
}

lazy_static! {
    static ref RULES: Vec<StatRule> = vec![
        StatRule::new(
            StatKind::CooldownReduction,
            &gapped("cooldown reduction"),
            Magnitude::Percent,
        ),
        StatRule::new(
            StatKind::CriticalStrikeChance,
            &gapped("critical strike chance"),
            Magnitude::Percent,
        ),
        StatRule::new(StatKind::Lethality, &format!("(?i){}", num(" lethality")), Magnitude::Flat),
        StatRule::new(
            StatKind::Movespeed,
            &format!("(?i){}", num("(?: bonus |% | |% bonus )movement speed")),
            Magnitude::PercentIfSign,
        ),
        StatRule::new(StatKind::ArmorPenetration, &num("% armor penetration"), Magnitude::Percent),
        StatRule::new(
            StatKind::MagicPenetration,
            &gapped("magic penetration"),
            Magnitude::PercentIfSign,
        ),
        StatRule::new(StatKind::Lifesteal, &gapped("life steal"), Magnitude::Percent),
        StatRule::new(StatKind::Omnivamp, &gapped("omni ?vamp"), Magnitude::Percent),
        StatRule::new(
            StatKind::AbilityPower,
            &num("(?: |% |% bonus )ability power"),
            Magnitude::Flat,
        ),
        StatRule::new(
            StatKind::AbilityPower,
            &format!("ability power by {}%", NUM),
            Magnitude::Percent,
        ),
        StatRule::new(StatKind::AbilityHaste, &num(" ability haste"), Magnitude::Flat),
        StatRule::new(StatKind::AttackSpeed, &num("% bonus attack speed"), Magnitude::Percent),
        StatRule::new(StatKind::Tenacity, &num("% TENACITY"), Magnitude::Percent).upper(),
    ];

    static ref EMPOWER_RULES: Vec<StatRule> = vec![
        StatRule::new(StatKind::Health, &num(" (?:bonus )?health"), Magnitude::Flat),
        StatRule::new(StatKind::AttackDamage, &num(" bonus attack damage"), Magnitude::Flat),
    ];
}

/// Extract a complete stat delta from effect prose.
///
/// Stats the rules do not recognize stay at zero.
pub fn extract_stats(text: &str) -> StatDelta {
    let upper_text = text.to_uppercase();
    let mut stats = StatDelta::default();

    for rule in RULES.iter() {
        rule.apply(text, &upper_text, &mut stats);
    }

    if text.contains(EMPOWER_PHRASE) {
        for rule in EMPOWER_RULES.iter() {
            rule.apply(text, &upper_text, &mut stats);
        }
    }

    stats
}

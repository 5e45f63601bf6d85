//! Score catalogue: immutable lookup from pattern and bonus keys to points.
//!
//! Patterns are structured records. Mutual exclusion between patterns is
//! decided by comparing `subcategory`, never by parsing display labels.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::rules::{CHICKEN_HAND, MAX_ENTRY_POINTS, UNKNOWN_ENTRY_POINTS};

/// Top-level pattern groups, numbered as in the Zung Jung rulebook.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Trivial,
    OneSuit,
    HonorTiles,
    TripletsAndKong,
    IdenticalSets,
    SimilarSets,
    ConsecutiveSets,
    Terminals,
    Bonuses,
    Irregular,
}

impl Category {
    /// Categories that hold hand patterns, in display order.
    pub const PATTERN_CATEGORIES: [Category; 9] = [
        Category::Trivial,
        Category::OneSuit,
        Category::HonorTiles,
        Category::TripletsAndKong,
        Category::IdenticalSets,
        Category::SimilarSets,
        Category::ConsecutiveSets,
        Category::Terminals,
        Category::Irregular,
    ];

    pub fn number(self) -> u8 {
        match self {
            Category::Trivial => 1,
            Category::OneSuit => 2,
            Category::HonorTiles => 3,
            Category::TripletsAndKong => 4,
            Category::IdenticalSets => 5,
            Category::SimilarSets => 6,
            Category::ConsecutiveSets => 7,
            Category::Terminals => 8,
            Category::Bonuses => 9,
            Category::Irregular => 10,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Category::Trivial => "Trivial Patterns",
            Category::OneSuit => "One-Suit Patterns",
            Category::HonorTiles => "Honor Tiles",
            Category::TripletsAndKong => "Triplets and Kong",
            Category::IdenticalSets => "Identical Sets",
            Category::SimilarSets => "Similar Sets",
            Category::ConsecutiveSets => "Consecutive Sets",
            Category::Terminals => "Terminals",
            Category::Bonuses => "Bonuses",
            Category::Irregular => "Irregular Patterns",
        }
    }

    /// e.g. "2.0 One-Suit Patterns"
    pub fn heading(self) -> String {
        format!("{}.0 {}", self.number(), self.title())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pattern {
    pub name: String,
    /// Rulebook index such as "2.1.1"; absent for Chicken Hand.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub index: Option<String>,
    /// Exclusion group: at most one pattern per subcategory in a hand.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subcategory: Option<String>,
    pub category: Category,
    pub points: u32,
}

impl Pattern {
    /// Display label, e.g. "2.1.1 Mixed One-Suit".
    pub fn label(&self) -> String {
        match &self.index {
            Some(index) => format!("{index} {}", self.name),
            None => self.name.clone(),
        }
    }

    /// Whether selecting this pattern clears every other selection.
    pub fn is_exclusive(&self) -> bool {
        self.name == CHICKEN_HAND
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bonus {
    pub name: String,
    pub points: u32,
}

/// What a bonus key missing from the catalogue is worth.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnknownBonusPolicy {
    /// Worth `UNKNOWN_ENTRY_POINTS`, like an unknown pattern.
    #[default]
    Default,
    /// Settlement fails with `DomainError::UnknownBonus`.
    Reject,
}

/// On-disk shape of a catalogue (house rules may replace the canonical one).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogueFile {
    pub patterns: Vec<Pattern>,
    pub bonuses: Vec<Bonus>,
    #[serde(default)]
    pub unknown_bonus: UnknownBonusPolicy,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "CatalogueFile", into = "CatalogueFile")]
pub struct ScoreCatalogue {
    patterns: Vec<Pattern>,
    bonuses: Vec<Bonus>,
    pattern_lookup: HashMap<String, usize>,
    bonus_lookup: HashMap<String, usize>,
    unknown_bonus: UnknownBonusPolicy,
}

/// A catalogue file that cannot be used for scoring.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogueError {
    #[error("'{name}' is worth {points} points, above the limit of {max}", max = MAX_ENTRY_POINTS)]
    PointsOutOfRange { name: String, points: u32 },
}

impl TryFrom<CatalogueFile> for ScoreCatalogue {
    type Error = CatalogueError;

    fn try_from(file: CatalogueFile) -> Result<Self, Self::Error> {
        let entries = file
            .patterns
            .iter()
            .map(|p| (&p.name, p.points))
            .chain(file.bonuses.iter().map(|b| (&b.name, b.points)));
        for (name, points) in entries {
            if points > MAX_ENTRY_POINTS {
                return Err(CatalogueError::PointsOutOfRange {
                    name: name.clone(),
                    points,
                });
            }
        }
        Ok(ScoreCatalogue::new(file.patterns, file.bonuses)
            .with_unknown_bonus_policy(file.unknown_bonus))
    }
}

impl From<ScoreCatalogue> for CatalogueFile {
    fn from(catalogue: ScoreCatalogue) -> Self {
        CatalogueFile {
            patterns: catalogue.patterns,
            bonuses: catalogue.bonuses,
            unknown_bonus: catalogue.unknown_bonus,
        }
    }
}

impl Default for ScoreCatalogue {
    fn default() -> Self {
        Self::zung_jung()
    }
}

impl ScoreCatalogue {
    /// Build a catalogue, deriving missing subcategories from the index.
    pub fn new(patterns: Vec<Pattern>, bonuses: Vec<Bonus>) -> Self {
        let patterns: Vec<Pattern> = patterns
            .into_iter()
            .map(|mut p| {
                if p.subcategory.is_none() {
                    p.subcategory = p.index.as_deref().map(subcategory_of);
                }
                p
            })
            .collect();

        let mut pattern_lookup = HashMap::with_capacity(patterns.len() * 2);
        for (idx, p) in patterns.iter().enumerate() {
            pattern_lookup.insert(p.name.clone(), idx);
            if let Some(index) = &p.index {
                pattern_lookup.entry(index.clone()).or_insert(idx);
            }
        }
        let bonus_lookup = bonuses
            .iter()
            .enumerate()
            .map(|(idx, b)| (b.name.clone(), idx))
            .collect();

        Self {
            patterns,
            bonuses,
            pattern_lookup,
            bonus_lookup,
            unknown_bonus: UnknownBonusPolicy::Default,
        }
    }

    /// The canonical Zung Jung catalogue.
    pub fn zung_jung() -> Self {
        ZUNG_JUNG.clone()
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn with_unknown_bonus_policy(mut self, policy: UnknownBonusPolicy) -> Self {
        self.unknown_bonus = policy;
        self
    }

    pub fn unknown_bonus_policy(&self) -> UnknownBonusPolicy {
        self.unknown_bonus
    }

    /// Look a pattern up by display name or rulebook index.
    pub fn pattern(&self, key: &str) -> Option<&Pattern> {
        self.pattern_lookup
            .get(key.trim())
            .map(|&idx| &self.patterns[idx])
    }

    pub fn bonus(&self, key: &str) -> Option<&Bonus> {
        self.bonus_lookup
            .get(key.trim())
            .map(|&idx| &self.bonuses[idx])
    }

    /// Name a pattern key resolves to; unknown keys stand for themselves,
    /// trimmed. Two keys for the same pattern give the same result.
    pub fn pattern_key<'a>(&'a self, key: &'a str) -> &'a str {
        self.pattern(key).map_or(key.trim(), |p| p.name.as_str())
    }

    pub fn bonus_key<'a>(&'a self, key: &'a str) -> &'a str {
        self.bonus(key).map_or(key.trim(), |b| b.name.as_str())
    }

    /// Points for a pattern key; unknown keys are worth `UNKNOWN_ENTRY_POINTS`.
    pub fn pattern_value(&self, key: &str) -> u32 {
        self.pattern(key)
            .map(|p| p.points)
            .unwrap_or(UNKNOWN_ENTRY_POINTS)
    }

    /// Points for a bonus key; unknown keys are worth `UNKNOWN_ENTRY_POINTS`.
    ///
    /// Callers that honor `UnknownBonusPolicy::Reject` must check
    /// `bonus()` first.
    pub fn bonus_value(&self, key: &str) -> u32 {
        self.bonus(key)
            .map(|b| b.points)
            .unwrap_or(UNKNOWN_ENTRY_POINTS)
    }

    pub fn patterns(&self) -> &[Pattern] {
        &self.patterns
    }

    pub fn bonuses(&self) -> &[Bonus] {
        &self.bonuses
    }

    pub fn patterns_in(&self, category: Category) -> impl Iterator<Item = &Pattern> + '_ {
        self.patterns.iter().filter(move |p| p.category == category)
    }
}

/// First two levels of a rulebook index: "2.1.1" → "2.1", "1.3" → "1.3".
fn subcategory_of(index: &str) -> String {
    index
        .split('.')
        .filter(|part| !part.is_empty())
        .take(2)
        .collect::<Vec<_>>()
        .join(".")
}

static ZUNG_JUNG: Lazy<ScoreCatalogue> = Lazy::new(|| {
    let patterns = ZUNG_JUNG_PATTERNS
        .iter()
        .map(|&(index, name, category, points)| Pattern {
            name: name.to_string(),
            index: index.map(str::to_string),
            subcategory: None,
            category,
            points,
        })
        .collect();
    let bonuses = ZUNG_JUNG_BONUSES
        .iter()
        .map(|&(name, points)| Bonus {
            name: name.to_string(),
            points,
        })
        .collect();
    ScoreCatalogue::new(patterns, bonuses)
});

type PatternRow = (Option<&'static str>, &'static str, Category, u32);

#[rustfmt::skip]
const ZUNG_JUNG_PATTERNS: [PatternRow; 39] = [
    (None,          "Chicken Hand",                  Category::Trivial,          1),
    (Some("1.1"),   "All Sequences",                 Category::Trivial,          5),
    (Some("1.2"),   "Concealed Hand",                Category::Trivial,          5),
    (Some("1.3"),   "No Terminals",                  Category::Trivial,          5),
    (Some("2.1.1"), "Mixed One-Suit",                Category::OneSuit,          40),
    (Some("2.1.2"), "Pure One-Suit",                 Category::OneSuit,          80),
    (Some("2.2"),   "Nine Gates",                    Category::OneSuit,          480),
    (Some("3.1"),   "Value Honor",                   Category::HonorTiles,       10),
    (Some("3.2.1"), "Small Three Dragons",           Category::HonorTiles,       40),
    (Some("3.2.2"), "Big Three Dragons",             Category::HonorTiles,       130),
    (Some("3.3.1"), "Small Three Winds",             Category::HonorTiles,       30),
    (Some("3.3.2"), "Big Three Winds",               Category::HonorTiles,       120),
    (Some("3.3.3"), "Small Four Winds",              Category::HonorTiles,       320),
    (Some("3.3.4"), "Big Four Winds",                Category::HonorTiles,       400),
    (Some("3.4"),   "All Honors",                    Category::HonorTiles,       320),
    (Some("4.1"),   "All Triplets",                  Category::TripletsAndKong,  30),
    (Some("4.2.1"), "Two Concealed Triplets",        Category::TripletsAndKong,  5),
    (Some("4.2.2"), "Three Concealed Triplets",      Category::TripletsAndKong,  30),
    (Some("4.2.3"), "Four Concealed Triplets",       Category::TripletsAndKong,  125),
    (Some("4.3.1"), "One Kong",                      Category::TripletsAndKong,  5),
    (Some("4.3.2"), "Two Kong",                      Category::TripletsAndKong,  20),
    (Some("4.3.3"), "Three Kong",                    Category::TripletsAndKong,  120),
    (Some("4.3.4"), "Four Kong",                     Category::TripletsAndKong,  480),
    (Some("5.1.1"), "Two Identical Sequences",       Category::IdenticalSets,    10),
    (Some("5.1.2"), "Two Identical Sequences Twice", Category::IdenticalSets,    60),
    (Some("5.1.3"), "Three Identical Sequences",     Category::IdenticalSets,    120),
    (Some("5.1.4"), "Four Identical Sequences",      Category::IdenticalSets,    480),
    (Some("6.1"),   "Three Similar Sequences",       Category::SimilarSets,      35),
    (Some("6.2.1"), "Small Three Similar Triplets",  Category::SimilarSets,      30),
    (Some("6.2.2"), "Three Similar Triplets",        Category::SimilarSets,      120),
    (Some("7.1"),   "Nine-Tile Straight",            Category::ConsecutiveSets,  40),
    (Some("7.2.1"), "Three Consecutive Triplets",    Category::ConsecutiveSets,  100),
    (Some("7.2.2"), "Four Consecutive Triplets",     Category::ConsecutiveSets,  200),
    (Some("8.1.1"), "Mixed Lesser Terminals",        Category::Terminals,        40),
    (Some("8.1.2"), "Pure Lesser Terminals",         Category::Terminals,        60),
    (Some("8.1.3"), "Mixed Greater Terminals",       Category::Terminals,        100),
    (Some("8.1.4"), "Pure Greater Terminals",        Category::Terminals,        400),
    (Some("10.1"),  "Thirteen Terminals",            Category::Irregular,        160),
    (Some("10.2"),  "Seven Pairs",                   Category::Irregular,        30),
];

const ZUNG_JUNG_BONUSES: [(&str, u32); 6] = [
    ("Final Draw", 10),
    ("Final Discard", 10),
    ("Win on Kong", 10),
    ("Robbing a Kong", 10),
    ("Blessing of Heaven", 155),
    ("Blessing of Earth", 155),
];

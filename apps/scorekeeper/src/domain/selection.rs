//! Pattern and bonus selection for one declared hand.
//!
//! Mirrors the hand form: toggling a checkbox applies the exclusion rules,
//! and `to_request` performs the form's required-field checks.

use std::collections::{BTreeSet, HashMap};

use crate::domain::catalogue::{Pattern, ScoreCatalogue};
use crate::domain::settlement::{SettlementRequest, TileSource};
use crate::domain::state::PlayerId;
use crate::errors::domain::DomainError;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HandSelection {
    patterns: Vec<String>,
    bonuses: Vec<String>,
}

impl HandSelection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Selected pattern keys in selection order.
    pub fn patterns(&self) -> &[String] {
        &self.patterns
    }

    pub fn bonuses(&self) -> &[String] {
        &self.bonuses
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    pub fn clear(&mut self) {
        self.patterns.clear();
        self.bonuses.clear();
    }

    /// Toggle a pattern on or off.
    ///
    /// - Selecting Chicken Hand clears every other pattern.
    /// - Selecting anything while Chicken Hand is selected replaces it.
    /// - Otherwise any pattern sharing the new pattern's subcategory is
    ///   dropped. Patterns outside the catalogue carry no subcategory and
    ///   are simply added.
    pub fn toggle_pattern(&mut self, catalogue: &ScoreCatalogue, key: &str) {
        let pattern = catalogue.pattern(key);
        let key = catalogue.pattern_key(key).to_string();

        if let Some(pos) = self.patterns.iter().position(|k| *k == key) {
            self.patterns.remove(pos);
            return;
        }

        let exclusive_selected = self
            .patterns
            .iter()
            .any(|k| catalogue.pattern(k).is_some_and(Pattern::is_exclusive));

        if pattern.is_some_and(Pattern::is_exclusive) || exclusive_selected {
            self.patterns = vec![key];
            return;
        }

        if let Some(sub) = pattern.and_then(|p| p.subcategory.as_deref()) {
            self.patterns.retain(|k| {
                catalogue
                    .pattern(k)
                    .and_then(|p| p.subcategory.as_deref())
                    != Some(sub)
            });
        }
        self.patterns.push(key);
    }

    /// Bonuses are independent; any subset may be selected.
    pub fn toggle_bonus(&mut self, catalogue: &ScoreCatalogue, key: &str) {
        let key = catalogue.bonus_key(key).to_string();

        if let Some(pos) = self.bonuses.iter().position(|k| *k == key) {
            self.bonuses.remove(pos);
        } else {
            self.bonuses.push(key);
        }
    }

    /// Build the settlement request, enforcing the form's required fields.
    pub fn to_request(
        &self,
        winner: PlayerId,
        source: TileSource,
    ) -> Result<SettlementRequest, DomainError> {
        if self.patterns.is_empty() {
            return Err(DomainError::EmptyHandSelection);
        }
        if source == TileSource::Discard(winner) {
            return Err(DomainError::invalid_tile_source(
                "winner cannot claim their own discard",
            ));
        }
        Ok(SettlementRequest {
            winner,
            patterns: self.patterns.iter().cloned().collect(),
            bonuses: self.bonuses.iter().cloned().collect(),
            source,
        })
    }
}

/// Hold a request built outside the form (e.g. a game script) to the
/// form's exclusion rules: Chicken Hand stands alone, and a hand holds at
/// most one pattern per subcategory. Keys naming the same pattern count once.
pub fn check_exclusions(
    catalogue: &ScoreCatalogue,
    request: &SettlementRequest,
) -> Result<(), DomainError> {
    let names: BTreeSet<&str> = request
        .patterns
        .iter()
        .map(|k| catalogue.pattern_key(k))
        .collect();

    let exclusive = names
        .iter()
        .find(|n| catalogue.pattern(n).is_some_and(Pattern::is_exclusive));
    if let Some(exclusive) = exclusive {
        if let Some(other) = names.iter().find(|n| *n != exclusive) {
            return Err(DomainError::ConflictingPatterns(
                exclusive.to_string(),
                other.to_string(),
            ));
        }
    }

    let mut by_subcategory: HashMap<&str, &str> = HashMap::new();
    for &name in &names {
        let Some(sub) = catalogue.pattern(name).and_then(|p| p.subcategory.as_deref()) else {
            continue;
        };
        if let Some(previous) = by_subcategory.insert(sub, name) {
            return Err(DomainError::ConflictingPatterns(
                previous.to_string(),
                name.to_string(),
            ));
        }
    }
    Ok(())
}

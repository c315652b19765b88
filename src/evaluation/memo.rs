use super::classifier::Classifier;
use super::combo::Combo;
use super::level::Level;
use crate::cards::hand::Hand;
use std::collections::HashMap;

/// Classification cache for callers that classify many subsets of a hand,
/// like move generation. The same cards classify differently under a
/// different level, so the level is part of the key.
#[derive(Debug, Default)]
pub struct Memo(HashMap<(Hand, Level), Option<Combo>>);

impl Memo {
    pub fn classify(&mut self, hand: Hand, level: Level) -> Option<Combo> {
        *self
            .0
            .entry((hand, level))
            .or_insert_with(|| Classifier::from((hand, level)).classify())
    }
    pub fn len(&self) -> usize {
        self.0.len()
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
    /// Drops every entry, e.g. between rounds.
    pub fn clear(&mut self) {
        self.0.clear();
    }
}

/// Classifies many candidate plays under one level.
/// Every call is independent, so they fan out across threads.
#[cfg(feature = "server")]
pub fn classify_all(hands: &[Hand], level: Level) -> Vec<Option<Combo>> {
    use rayon::prelude::*;
    hands
        .par_iter()
        .map(|hand| Classifier::from((*hand, level)).classify())
        .collect()
}
/// Classifies many candidate plays under one level, sequentially
/// when the server feature (and rayon with it) is disabled.
#[cfg(not(feature = "server"))]
pub fn classify_all(hands: &[Hand], level: Level) -> Vec<Option<Combo>> {
    hands
        .iter()
        .map(|hand| Classifier::from((*hand, level)).classify())
        .collect()
}

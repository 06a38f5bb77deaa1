// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Multiplicity counting for ranks and suits.
use ahash::AHashMap;
use std::hash::Hash;

/// A frequency table that counts how many times each key appears.
///
/// The same table is used for ranks, to find pairs, trips and quads, and for
/// suits to find flushes:
///
/// ```
/// # use fivecard_eval::{Frequency, Hand};
/// let hand = "2C 2D 2H 3S 3C".parse::<Hand>().unwrap();
/// let ranks = Frequency::new(hand.ranks());
/// assert_eq!(ranks.multiplicity(3), 1);
/// assert_eq!(ranks.multiplicity(2), 1);
/// ```
#[derive(Debug, Clone)]
pub struct Frequency<K> {
    counts: AHashMap<K, usize>,
}

impl<K: Copy + Eq + Hash> Frequency<K> {
    /// Counts the keys.
    pub fn new<I>(keys: I) -> Self
    where
        I: IntoIterator<Item = K>,
    {
        let mut counts = AHashMap::new();
        for key in keys {
            *counts.entry(key).or_insert(0) += 1;
        }

        Self { counts }
    }

    /// How many times `key` appears.
    pub fn count(&self, key: K) -> usize {
        self.counts.get(&key).copied().unwrap_or_default()
    }

    /// Number of distinct keys that appear exactly `n` times.
    pub fn multiplicity(&self, n: usize) -> usize {
        self.counts.values().filter(|&&count| count == n).count()
    }

    /// Number of distinct keys.
    pub fn distinct(&self) -> usize {
        self.counts.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Hand, Rank, Suit};

    fn hand(s: &str) -> Hand {
        s.parse().unwrap()
    }

    #[test]
    fn rank_multiplicity() {
        let h = hand("AC AH AD AS 10C");
        let ranks = Frequency::new(h.ranks());
        assert_eq!(ranks.count(Rank::Ace), 4);
        assert_eq!(ranks.count(Rank::Ten), 1);
        assert_eq!(ranks.count(Rank::King), 0);
        assert_eq!(ranks.multiplicity(4), 1);
        assert_eq!(ranks.multiplicity(1), 1);
        assert_eq!(ranks.multiplicity(2), 0);
        assert_eq!(ranks.distinct(), 2);
    }

    #[test]
    fn counts_distinct_keys_not_cards() {
        let h = hand("2C 2D 3H 3S 4C");
        let ranks = Frequency::new(h.ranks());
        assert_eq!(ranks.multiplicity(2), 2);
        assert_eq!(ranks.multiplicity(1), 1);
    }

    #[test]
    fn suit_multiplicity() {
        let h = hand("2C 5C 9C JC KC");
        let suits = Frequency::new(h.suits());
        assert_eq!(suits.count(Suit::Clubs), 5);
        assert_eq!(suits.multiplicity(5), 1);

        let h = hand("2C 5C 9C JC KH");
        let suits = Frequency::new(h.suits());
        assert_eq!(suits.multiplicity(5), 0);
        assert_eq!(suits.multiplicity(4), 1);
    }

    #[test]
    fn empty_table() {
        let freq = Frequency::<u8>::new([]);
        assert_eq!(freq.distinct(), 0);
        assert_eq!(freq.multiplicity(1), 0);
    }
}

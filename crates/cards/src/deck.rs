// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! A cards deck for enumerating hands.
use crate::{Card, Hand, Rank, Suit};

/// A cards Deck
#[derive(Debug)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// The number of cards in the deck.
    pub const SIZE: usize = 52;

    /// Number of cards in the deck.
    pub fn count(&self) -> usize {
        self.cards.len()
    }

    /// Calls the `f` closure for each five cards hand in the deck.
    pub fn for_each_hand<F>(&self, mut f: F)
    where
        F: FnMut(&Hand),
    {
        let n = self.cards.len();
        let c = &self.cards;

        for c1 in 0..n {
            for c2 in (c1 + 1)..n {
                for c3 in (c2 + 1)..n {
                    for c4 in (c3 + 1)..n {
                        for c5 in (c4 + 1)..n {
                            f(&Hand::new([c[c1], c[c2], c[c3], c[c4], c[c5]]));
                        }
                    }
                }
            }
        }
    }
}

impl Default for Deck {
    fn default() -> Self {
        let cards = Suit::suits()
            .flat_map(|s| Rank::ranks().map(move |r| Card::new(r, s)))
            .collect::<Vec<_>>();
        Self { cards }
    }
}

impl IntoIterator for Deck {
    type Item = Card;
    type IntoIter = std::vec::IntoIter<Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.into_iter()
    }
}

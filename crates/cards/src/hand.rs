// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Five cards hand.
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

use crate::{Card, ParseError, Rank, Suit};

/// A five cards Poker hand.
///
/// The cards are kept in the order they were given, a hand may contain
/// duplicate cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Hand {
    cards: [Card; Hand::SIZE],
}

impl Hand {
    /// The number of cards in a hand.
    pub const SIZE: usize = 5;

    /// Creates a hand from five cards.
    pub const fn new(cards: [Card; Hand::SIZE]) -> Self {
        Self { cards }
    }

    /// The hand cards.
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// The cards ranks in hand order.
    pub fn ranks(&self) -> impl ExactSizeIterator<Item = Rank> + '_ {
        self.cards.iter().map(Card::rank)
    }

    /// The cards suits in hand order.
    pub fn suits(&self) -> impl ExactSizeIterator<Item = Suit> + '_ {
        self.cards.iter().map(Card::suit)
    }
}

impl TryFrom<&[Card]> for Hand {
    type Error = ParseError;

    fn try_from(cards: &[Card]) -> Result<Self, Self::Error> {
        let cards = <[Card; Hand::SIZE]>::try_from(cards)
            .map_err(|_| ParseError::InvalidHandSize(cards.len()))?;
        Ok(Self::new(cards))
    }
}

impl FromStr for Hand {
    type Err = ParseError;

    /// Parses a hand of space separated cards, for example `AH KH QH JH 10H`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cards = s
            .split_ascii_whitespace()
            .map(Card::from_str)
            .collect::<Result<Vec<_>, _>>()?;
        Hand::try_from(cards.as_slice())
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, card) in self.cards.iter().enumerate() {
            if idx > 0 {
                f.write_str(" ")?;
            }

            write!(f, "{card}")?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hand_from_str() {
        let hand = "AH KH QH JH 10H".parse::<Hand>().unwrap();
        assert_eq!(hand.cards().len(), Hand::SIZE);
        assert_eq!(hand.cards()[0], Card::new(Rank::Ace, Suit::Hearts));
        assert_eq!(hand.cards()[4], Card::new(Rank::Ten, Suit::Hearts));
        assert_eq!(hand.to_string(), "AH KH QH JH 10H");
        assert_eq!(hand.to_string().parse::<Hand>(), Ok(hand));
    }

    #[test]
    fn hand_ranks_and_suits_keep_order() {
        let hand = "10C 2D AS 10H 7C".parse::<Hand>().unwrap();

        let ranks = hand.ranks().collect::<Vec<_>>();
        assert_eq!(ranks, [Rank::Ten, Rank::Deuce, Rank::Ace, Rank::Ten, Rank::Seven]);

        let suits = hand.suits().collect::<Vec<_>>();
        assert_eq!(
            suits,
            [Suit::Clubs, Suit::Diamonds, Suit::Spades, Suit::Hearts, Suit::Clubs]
        );
    }

    #[test]
    fn hand_size() {
        assert_eq!(
            "AH KH QH JH".parse::<Hand>(),
            Err(ParseError::InvalidHandSize(4))
        );
        assert_eq!(
            "AH KH QH JH 10H 9H".parse::<Hand>(),
            Err(ParseError::InvalidHandSize(6))
        );
        assert_eq!("".parse::<Hand>(), Err(ParseError::InvalidHandSize(0)));

        let cards = [Card::new(Rank::Ace, Suit::Spades); 3];
        assert_eq!(
            Hand::try_from(&cards[..]),
            Err(ParseError::InvalidHandSize(3))
        );
    }

    #[test]
    fn hand_bad_card() {
        assert_eq!(
            "AH KH QH JH 1H".parse::<Hand>(),
            Err(ParseError::InvalidRank("1".into()))
        );
        assert_eq!(
            "AH KH QH JH 10X".parse::<Hand>(),
            Err(ParseError::InvalidSuit('X'))
        );
    }

    #[test]
    fn hand_allows_duplicates() {
        let hand = "AH AH AH AH AH".parse::<Hand>().unwrap();
        assert!(hand.ranks().all(|r| r == Rank::Ace));
    }
}

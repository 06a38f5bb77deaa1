// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Hand categories and classification.
use log::trace;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::{Hand, predicates::*};

/// A hand category, from the lowest to the highest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum HandRank {
    /// No other category.
    HighCard = 0,
    /// One pair.
    OnePair,
    /// Two pairs.
    TwoPair,
    /// Three of a kind.
    ThreeOfAKind,
    /// Straight.
    Straight,
    /// Flush.
    Flush,
    /// Full house.
    FullHouse,
    /// Four of a kind.
    FourOfAKind,
    /// Straight flush.
    StraightFlush,
    /// Ten to Ace straight flush.
    RoyalFlush,
}

impl HandRank {
    /// The number of categories.
    pub const COUNT: usize = 10;

    /// Returns all categories from the lowest to the highest.
    pub fn ranks() -> impl DoubleEndedIterator<Item = HandRank> {
        use HandRank::*;
        [
            HighCard,
            OnePair,
            TwoPair,
            ThreeOfAKind,
            Straight,
            Flush,
            FullHouse,
            FourOfAKind,
            StraightFlush,
            RoyalFlush,
        ]
        .into_iter()
    }

    /// The category name.
    pub fn name(&self) -> &'static str {
        match self {
            HandRank::HighCard => "High Card",
            HandRank::OnePair => "One Pair",
            HandRank::TwoPair => "Two Pair",
            HandRank::ThreeOfAKind => "Three of a Kind",
            HandRank::Straight => "Straight",
            HandRank::Flush => "Flush",
            HandRank::FullHouse => "Full House",
            HandRank::FourOfAKind => "Four of a Kind",
            HandRank::StraightFlush => "Straight Flush",
            HandRank::RoyalFlush => "Royal Flush",
        }
    }
}

impl fmt::Display for HandRank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A hand predicate.
pub type Predicate = fn(&Hand) -> bool;

/// The predicates scanned by [classify] after the royal flush check, in
/// precedence order.
///
/// No five cards hand is both a four of a kind and a straight flush so
/// their relative order doesn't change the result.
pub const HAND_ORDER: [(HandRank, Predicate); 8] = [
    (HandRank::FourOfAKind, four_of_a_kind),
    (HandRank::StraightFlush, straight_flush),
    (HandRank::FullHouse, full_house),
    (HandRank::Flush, flush),
    (HandRank::Straight, straight),
    (HandRank::ThreeOfAKind, three_of_a_kind),
    (HandRank::TwoPair, two_pair),
    (HandRank::OnePair, one_pair),
];

/// Returns the highest category for a hand.
///
/// ```
/// # use fivecard_eval::{classify, Hand, HandRank};
/// let hand = "2C 2D 2H 3S 3C".parse::<Hand>().unwrap();
/// assert_eq!(classify(&hand), HandRank::FullHouse);
/// ```
pub fn classify(hand: &Hand) -> HandRank {
    let rank = if royal_flush(hand) {
        HandRank::RoyalFlush
    } else {
        HAND_ORDER
            .iter()
            .find(|(_, predicate)| predicate(hand))
            .map(|(rank, _)| *rank)
            .unwrap_or(HandRank::HighCard)
    };

    trace!("Hand {hand} classified as {rank}");
    rank
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Deck;

    fn classify_str(s: &str) -> HandRank {
        classify(&s.parse().unwrap())
    }

    #[test]
    fn classify_hands() {
        assert_eq!(classify_str("AC KC JC QC 10C"), HandRank::RoyalFlush);
        assert_eq!(classify_str("AC 2C 3C 4C 5C"), HandRank::StraightFlush);
        assert_eq!(classify_str("AC AH AD AS 10C"), HandRank::FourOfAKind);
        assert_eq!(classify_str("2C 2D 2H 3S 3C"), HandRank::FullHouse);
        assert_eq!(classify_str("2C 5C 9C JC KC"), HandRank::Flush);
        assert_eq!(classify_str("10C JH QD KS AC"), HandRank::Straight);
        assert_eq!(classify_str("AC 2H 3D 4S 5C"), HandRank::Straight);
        assert_eq!(classify_str("7C 7H 7D 4S 5C"), HandRank::ThreeOfAKind);
        assert_eq!(classify_str("7C 7H 4D 4S 5C"), HandRank::TwoPair);
        assert_eq!(classify_str("7C 7H 4D 3S 5C"), HandRank::OnePair);
        assert_eq!(classify_str("2C 4H 6D 8S 10C"), HandRank::HighCard);
    }

    #[test]
    fn hand_order() {
        let ranks = HAND_ORDER.iter().map(|(r, _)| *r).collect::<Vec<_>>();
        assert_eq!(
            ranks,
            [
                HandRank::FourOfAKind,
                HandRank::StraightFlush,
                HandRank::FullHouse,
                HandRank::Flush,
                HandRank::Straight,
                HandRank::ThreeOfAKind,
                HandRank::TwoPair,
                HandRank::OnePair,
            ]
        );
    }

    #[test]
    fn rank_ordering() {
        let ranks = HandRank::ranks().collect::<Vec<_>>();
        assert_eq!(ranks.len(), HandRank::COUNT);
        assert!(ranks.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(HandRank::FullHouse.to_string(), "Full House");
    }

    #[test]
    fn classify_all_hands() {
        let mut counts = [0usize; HandRank::COUNT];
        Deck::default().for_each_hand(|hand| {
            counts[classify(hand) as usize] += 1;
        });

        assert_eq!(counts[HandRank::HighCard as usize], 1_302_540);
        assert_eq!(counts[HandRank::OnePair as usize], 1_098_240);
        assert_eq!(counts[HandRank::TwoPair as usize], 123_552);
        assert_eq!(counts[HandRank::ThreeOfAKind as usize], 54_912);
        assert_eq!(counts[HandRank::Straight as usize], 10_200);
        assert_eq!(counts[HandRank::Flush as usize], 5_108);
        assert_eq!(counts[HandRank::FullHouse as usize], 3_744);
        assert_eq!(counts[HandRank::FourOfAKind as usize], 624);
        assert_eq!(counts[HandRank::StraightFlush as usize], 36);
        assert_eq!(counts[HandRank::RoyalFlush as usize], 4);
        assert_eq!(counts.iter().sum::<usize>(), 2_598_960);
    }

    #[test]
    fn single_primary_category() {
        // Every hand matches at most one of the exclusive categories once
        // the overlapping ones are removed.
        Deck::default().for_each_hand(|hand| {
            let primary = [
                straight_flush(hand),
                four_of_a_kind(hand),
                full_house(hand),
                flush(hand) && !straight(hand),
                straight(hand) && !flush(hand),
                three_of_a_kind(hand) && !full_house(hand),
                two_pair(hand),
                one_pair(hand) && !full_house(hand),
            ];
            assert!(primary.iter().filter(|&&p| p).count() <= 1, "{hand}");
        });
    }
}

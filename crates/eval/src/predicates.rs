// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Hand predicates.
//!
//! Each predicate checks a single category on its own, predicates overlap:
//! a full house is also a three of a kind and a one pair, a straight flush
//! is also a straight and a flush. Use [classify](crate::classify) to get
//! the highest category for a hand.
use crate::{Frequency, Hand, sequence};

/// Checks for exactly `multiplicity` ranks appearing `tuple_size` times.
fn k_n_tuples(hand: &Hand, multiplicity: usize, tuple_size: usize) -> bool {
    Frequency::new(hand.ranks()).multiplicity(tuple_size) == multiplicity
}

/// Checks for `length` cards of the same suit.
pub fn n_flush(hand: &Hand, length: usize) -> bool {
    Frequency::new(hand.suits()).multiplicity(length) == 1
}

/// Checks for `length` cards of consecutive ranks, the Ace can be low or high.
pub fn n_straight(hand: &Hand, length: usize) -> bool {
    sequence::has_run(hand.ranks(), length)
}

/// Ten to Ace straight flush.
pub fn royal_flush(hand: &Hand) -> bool {
    let ordinals = sequence::ordinals(hand.ranks());
    straight_flush(hand) && ordinals.contains(&1) && ordinals.contains(&13)
}

/// Four cards of the same rank.
pub fn four_of_a_kind(hand: &Hand) -> bool {
    k_n_tuples(hand, 1, 4)
}

/// Five consecutive cards of the same suit.
pub fn straight_flush(hand: &Hand) -> bool {
    flush(hand) && straight(hand)
}

/// Three cards of a rank and two of another.
pub fn full_house(hand: &Hand) -> bool {
    k_n_tuples(hand, 1, 3) && k_n_tuples(hand, 1, 2)
}

/// Five cards of consecutive ranks.
pub fn straight(hand: &Hand) -> bool {
    sequence::is_straight_window(hand.ranks())
}

/// Five cards of the same suit.
pub fn flush(hand: &Hand) -> bool {
    n_flush(hand, Hand::SIZE)
}

/// Three cards of the same rank.
pub fn three_of_a_kind(hand: &Hand) -> bool {
    k_n_tuples(hand, 1, 3)
}

/// Two pairs of different ranks.
pub fn two_pair(hand: &Hand) -> bool {
    k_n_tuples(hand, 2, 2)
}

/// A single pair.
pub fn one_pair(hand: &Hand) -> bool {
    k_n_tuples(hand, 1, 2)
}

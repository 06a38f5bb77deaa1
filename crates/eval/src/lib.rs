// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Five card Poker hand classifier.
//!
//! Classifies a five cards hand into its highest category, from high card to
//! royal flush. Each category has its own predicate, for example:
//!
//! ```
//! # use fivecard_eval::*;
//! let hand = "10C JH QD KS AC".parse::<Hand>().unwrap();
//! assert!(straight(&hand));
//! assert!(!flush(&hand));
//! ```
//!
//! predicates overlap (a full house is also a three of a kind) so use
//! [classify] to get the highest category:
//!
//! ```
//! # use fivecard_eval::*;
//! let hand = "AC KC JC QC 10C".parse::<Hand>().unwrap();
//! assert_eq!(classify(&hand), HandRank::RoyalFlush);
//!
//! let hand = "2C 4H 6D 8S 10C".parse::<Hand>().unwrap();
//! assert_eq!(classify(&hand), HandRank::HighCard);
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
pub mod freq;
pub mod predicates;
pub mod rank;
pub mod sequence;

pub use freq::Frequency;
pub use predicates::{
    flush, four_of_a_kind, full_house, n_flush, n_straight, one_pair, royal_flush, straight,
    straight_flush, three_of_a_kind, two_pair,
};
pub use rank::{HAND_ORDER, HandRank, Predicate, classify};

// Reexport cards types.
pub use fivecard_cards::{Card, Deck, Hand, ParseError, Rank, Suit};

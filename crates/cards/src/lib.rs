// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Five card Poker cards types.
//!
//! This crate define types to create cards:
//!
//! ```
//! # use fivecard_cards::{Card, Rank, Suit};
//! let ah = Card::new(Rank::Ace, Suit::Hearts);
//! let tc = "10C".parse::<Card>().unwrap();
//! assert_eq!(tc.rank(), Rank::Ten);
//! ```
//!
//! a [Hand] type that parses five space separated cards:
//!
//! ```
//! # use fivecard_cards::{Hand, ParseError, Rank};
//! let hand = "AC KC JC QC 10C".parse::<Hand>().unwrap();
//! assert_eq!(hand.ranks().next(), Some(Rank::Ace));
//!
//! let err = "AC KC JC".parse::<Hand>().unwrap_err();
//! assert_eq!(err, ParseError::InvalidHandSize(3));
//! ```
//!
//! and a [Deck] type for iterating all five cards hands:
//!
//! ```no_run
//! # use fivecard_cards::Deck;
//! let mut counter = 0;
//! Deck::default().for_each_hand(|hand| {
//!     counter += 1;
//! });
//! assert_eq!(counter, 2_598_960);
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
mod card;
mod deck;
mod error;
mod hand;

pub use card::{Card, Rank, Suit, split_token};
pub use deck::Deck;
pub use error::ParseError;
pub use hand::Hand;

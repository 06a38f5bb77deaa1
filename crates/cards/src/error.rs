// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Cards parsing errors.
use thiserror::Error;

/// Error returned when parsing cards and hands.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The card token is empty.
    #[error("Empty card")]
    EmptyCard,
    /// The card token has a suit but no rank.
    #[error("Card {0} has no rank")]
    MissingRank(String),
    /// The rank symbol is not one of 2..10, J, Q, K, A.
    #[error("Invalid rank {0}")]
    InvalidRank(String),
    /// The suit symbol is not one of C, D, H, S.
    #[error("Invalid suit {0}")]
    InvalidSuit(char),
    /// The hand doesn't have five cards.
    #[error("Invalid hand size {0}, a hand must have 5 cards")]
    InvalidHandSize(usize),
}

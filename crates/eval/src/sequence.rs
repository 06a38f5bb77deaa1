// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Straight detection.
//!
//! Ranks are mapped to ordinals (Ace=1, King=13), sorted and differenced, a
//! run of `1` differences is a sequence of consecutive ranks. The analysis is
//! done twice, once with the Ace low and once on a rotated base where the
//! Ace comes right after the King, so that both `A 2 3 4 5` and `10 J Q K A`
//! are found.
use crate::Rank;

/// The ten valid straights, from the Ace low to the Ace high.
pub const STRAIGHT_WINDOWS: [[Rank; 5]; 10] = {
    use Rank::*;
    [
        [Ace, Deuce, Trey, Four, Five],
        [Deuce, Trey, Four, Five, Six],
        [Trey, Four, Five, Six, Seven],
        [Four, Five, Six, Seven, Eight],
        [Five, Six, Seven, Eight, Nine],
        [Six, Seven, Eight, Nine, Ten],
        [Seven, Eight, Nine, Ten, Jack],
        [Eight, Nine, Ten, Jack, Queen],
        [Nine, Ten, Jack, Queen, King],
        [Ten, Jack, Queen, King, Ace],
    ]
};

/// Returns the sorted distinct ordinals for the given ranks.
pub fn ordinals<I>(ranks: I) -> Vec<u8>
where
    I: IntoIterator<Item = Rank>,
{
    let mut ordinals = ranks.into_iter().map(|r| r.ordinal()).collect::<Vec<_>>();
    ordinals.sort_unstable();
    ordinals.dedup();
    ordinals
}

/// Returns the differences between consecutive values.
pub fn differences(values: &[u8]) -> impl Iterator<Item = i16> + '_ {
    values.windows(2).map(|w| w[1] as i16 - w[0] as i16)
}

/// Iterator adapter that groups consecutive equal values.
///
/// Yields each value with the length of its run:
///
/// ```
/// # use fivecard_eval::sequence::Runs;
/// let runs = Runs::new([1, 2, 3, 3, 3]).map(|(_, len)| len).collect::<Vec<_>>();
/// assert_eq!(runs, [1, 1, 3]);
/// ```
pub struct Runs<I: Iterator> {
    iter: std::iter::Peekable<I>,
}

impl<I> Runs<I>
where
    I: Iterator,
    I::Item: PartialEq,
{
    /// Creates a new run iterator.
    pub fn new<T>(values: T) -> Self
    where
        T: IntoIterator<IntoIter = I>,
    {
        Self {
            iter: values.into_iter().peekable(),
        }
    }
}

impl<I> Iterator for Runs<I>
where
    I: Iterator,
    I::Item: PartialEq,
{
    type Item = (I::Item, usize);

    fn next(&mut self) -> Option<Self::Item> {
        let value = self.iter.next()?;
        let mut len = 1;
        while self.iter.next_if_eq(&value).is_some() {
            len += 1;
        }

        Some((value, len))
    }
}

/// Longest run of unit steps in a sorted sequence.
fn longest_unit_run(values: &[u8]) -> usize {
    Runs::new(differences(values))
        .filter(|(diff, _)| *diff == 1)
        .map(|(_, len)| len)
        .max()
        .unwrap_or_default()
}

/// Returns the number of cards in the longest sequence of consecutive ranks,
/// counting the Ace both low and high.
pub fn longest_run<I>(ranks: I) -> usize
where
    I: IntoIterator<Item = Rank>,
{
    let ordinals = ordinals(ranks);
    if ordinals.is_empty() {
        return 0;
    }

    // Ace low in 0..=12.
    let normal = ordinals.iter().map(|o| o - 1).collect::<Vec<_>>();

    // Rotated so that the Ace is 12 and the King 11.
    let mut wrap = ordinals.iter().map(|o| (o + 11) % 13).collect::<Vec<_>>();
    wrap.sort_unstable();

    let steps = longest_unit_run(&normal).max(longest_unit_run(&wrap));
    steps + 1
}

/// Checks if the ranks contain `length` consecutive ranks.
pub fn has_run<I>(ranks: I, length: usize) -> bool
where
    I: IntoIterator<Item = Rank>,
{
    longest_run(ranks) >= length
}

/// Checks if the ranks are exactly one of the [STRAIGHT_WINDOWS].
pub fn is_straight_window<I>(ranks: I) -> bool
where
    I: IntoIterator<Item = Rank>,
{
    let mut ranks = ranks.into_iter().collect::<Vec<_>>();
    ranks.sort_unstable();

    STRAIGHT_WINDOWS.iter().any(|window| {
        let mut window = *window;
        window.sort_unstable();
        window[..] == ranks[..]
    })
}

//! Draw pile construction and shuffling.

use crate::core::RandomSource;

use super::card::{Card, Rank, Suit};

/// One 52-card set: clubs 2..A, diamonds 2..A, hearts 2..A, spades 2..A.
#[must_use]
pub fn standard_52() -> Vec<Card> {
    Suit::ALL
        .into_iter()
        .flat_map(|suit| Rank::ALL.into_iter().map(move |rank| Card::new(rank, suit)))
        .collect()
}

/// `deck_count` concatenated 52-card sets, unshuffled.
#[must_use]
pub fn build_deck(deck_count: usize) -> Vec<Card> {
    let single = standard_52();
    let mut cards = Vec::with_capacity(single.len() * deck_count);
    for _ in 0..deck_count {
        cards.extend_from_slice(&single);
    }
    cards
}

/// Fisher–Yates shuffle driven by `rng`.
///
/// Walks from the back, swapping each slot with a uniformly chosen slot at
/// or before it. The same source output always yields the same order.
///
/// ```
/// use sequence_engine::cards::shuffle;
///
/// let mut a = vec![1, 2, 3, 4, 5];
/// let mut b = a.clone();
/// shuffle(&mut a, &mut || 0.25);
/// shuffle(&mut b, &mut || 0.25);
/// assert_eq!(a, b);
/// ```
pub fn shuffle<T, R: RandomSource + ?Sized>(items: &mut [T], rng: &mut R) {
    for i in (1..items.len()).rev() {
        let j = rng.next_index(i + 1);
        items.swap(i, j);
    }
}

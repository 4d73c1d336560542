//! Deck module - board generation
//!
//! A deck is the ordered sequence of card values laid out on the board:
//! every value in `0..pair_count` appears exactly twice, in shuffled order.
//! Decks carry no state beyond the values, so replays and level advances
//! simply build a fresh one.

use crate::rng::SimpleRng;
use memory_types::Level;

/// The shuffled card layout for one game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    values: Vec<u16>,
}

impl Deck {
    /// Build a shuffled deck for the given level.
    pub fn shuffled(level: Level, rng: &mut SimpleRng) -> Self {
        let pairs = level.pair_count();
        let mut values = Vec::with_capacity(pairs as usize * 2);
        for v in 0..pairs {
            values.push(v);
            values.push(v);
        }
        rng.shuffle(&mut values);
        Self { values }
    }

    /// Number of cards on the board.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Card value at a board position.
    pub fn value_at(&self, index: u16) -> Option<u16> {
        self.values.get(index as usize).copied()
    }

    /// All card values in board order.
    pub fn values(&self) -> &[u16] {
        &self.values
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn occurrence_counts(deck: &Deck, pairs: u16) -> Vec<usize> {
        let mut counts = vec![0usize; pairs as usize];
        for &v in deck.values() {
            counts[v as usize] += 1;
        }
        counts
    }

    #[test]
    fn test_deck_has_every_value_exactly_twice() {
        for level in [Level::One, Level::Two, Level::Three] {
            let mut rng = SimpleRng::new(12345);
            let deck = Deck::shuffled(level, &mut rng);

            assert_eq!(deck.len(), level.card_count() as usize);
            for count in occurrence_counts(&deck, level.pair_count()) {
                assert_eq!(count, 2);
            }
        }
    }

    #[test]
    fn test_reshuffle_has_no_residual_state() {
        let mut rng = SimpleRng::new(99);
        let first = Deck::shuffled(Level::One, &mut rng);
        let second = Deck::shuffled(Level::One, &mut rng);

        // Both decks are valid, and the RNG advanced so the orders differ.
        assert_eq!(first.len(), second.len());
        assert_ne!(first, second);
        for count in occurrence_counts(&second, Level::One.pair_count()) {
            assert_eq!(count, 2);
        }
    }

    #[test]
    fn test_value_at_bounds() {
        let mut rng = SimpleRng::new(1);
        let deck = Deck::shuffled(Level::One, &mut rng);

        assert!(deck.value_at(0).is_some());
        assert!(deck.value_at(19).is_some());
        assert_eq!(deck.value_at(20), None);
    }

    #[test]
    fn test_same_seed_same_deck() {
        let deck_a = Deck::shuffled(Level::Two, &mut SimpleRng::new(777));
        let deck_b = Deck::shuffled(Level::Two, &mut SimpleRng::new(777));
        assert_eq!(deck_a, deck_b);
    }
}

use super::card::Card;
use super::hole::Hole;
use super::street::Street;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;

/// A shuffled sequence of the 52 unique cards, dealt from the top.
///
/// Dealing is sequential so that a seed fully determines every hole card
/// and board card of a hand.
#[derive(Debug, Clone)]
pub struct Deck(Vec<Card>);

impl Deck {
    /// A deck shuffled from OS entropy.
    pub fn shuffled() -> Self {
        Self::shuffle(SmallRng::from_os_rng())
    }
    /// A deck with a reproducible order.
    pub fn seeded(seed: u64) -> Self {
        Self::shuffle(SmallRng::seed_from_u64(seed))
    }
    fn shuffle(mut rng: SmallRng) -> Self {
        let mut cards = (0..52u8).map(Card::from).collect::<Vec<Card>>();
        cards.shuffle(&mut rng);
        Self(cards)
    }

    pub fn remaining(&self) -> usize {
        self.0.len()
    }
    /// Deals the next card off the top.
    pub fn draw(&mut self) -> Option<Card> {
        self.0.pop()
    }
    /// Deals two cards as a seat's hole.
    pub fn hole(&mut self) -> Option<Hole> {
        match (self.draw(), self.draw()) {
            (Some(a), Some(b)) => Some(Hole::from((a, b))),
            _ => None,
        }
    }
    /// Deals the cards revealed when entering a street.
    pub fn reveal(&mut self, street: Street) -> Option<Vec<Card>> {
        let n = street.n_revealed();
        let cards = (0..n).filter_map(|_| self.draw()).collect::<Vec<Card>>();
        (cards.len() == n).then_some(cards)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn deals_52_unique() {
        let mut deck = Deck::shuffled();
        let mut seen = HashSet::new();
        while let Some(card) = deck.draw() {
            assert!(seen.insert(card));
        }
        assert_eq!(seen.len(), 52);
    }

    #[test]
    fn seeded_is_reproducible() {
        let mut a = Deck::seeded(42);
        let mut b = Deck::seeded(42);
        for _ in 0..52 {
            assert_eq!(a.draw(), b.draw());
        }
    }

    #[test]
    fn reveal_sizes_match_street() {
        let mut deck = Deck::seeded(7);
        assert_eq!(deck.reveal(Street::Flop).unwrap().len(), 3);
        assert_eq!(deck.reveal(Street::Turn).unwrap().len(), 1);
        assert_eq!(deck.reveal(Street::Rive).unwrap().len(), 1);
        assert_eq!(deck.remaining(), 47);
    }
}

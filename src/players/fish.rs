use crate::Position;
use crate::game::action::Action;
use crate::game::hand::Hand;
use crate::players::Policy;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use rand::seq::IndexedRandom;

/// Uniformly random bot, weighted only by what is legal. Useful for
/// soak-testing the engine and for demo tables.
#[derive(Debug)]
pub struct Fish(SmallRng);

impl Default for Fish {
    fn default() -> Self {
        Self(SmallRng::from_os_rng())
    }
}

impl Fish {
    pub fn seeded(seed: u64) -> Self {
        Self(SmallRng::seed_from_u64(seed))
    }
}

impl Policy for Fish {
    fn decide(&mut self, hand: &Hand, seat: Position) -> Action {
        let legal = hand.legal();
        match legal.choose(&mut self.0) {
            // bump the minimum raise to a blind-sized one when coverable
            Some(Action::Raise(to)) => {
                let bet = to - 1;
                let bigger = bet + hand.bblind();
                match hand.seat(seat) {
                    Ok(s) if s.stake() + s.stack() >= bigger => Action::Raise(bigger),
                    _ => Action::Raise(*to),
                }
            }
            Some(action) => *action,
            None => Action::Fold,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn always_picks_a_legal_action() {
        for seed in 0..32 {
            let names = vec!["a".to_string(), "b".to_string()];
            let mut hand = Hand::start_seeded(names, vec![400, 400], 0, 40, seed).unwrap();
            let mut fish = Fish::seeded(seed);
            while let crate::game::turn::Turn::Choice(seat) = hand.turn() {
                let action = fish.decide(&hand, seat);
                hand.apply(seat, action).unwrap();
            }
            assert!(hand.is_complete());
            assert_eq!(hand.payoffs().unwrap().iter().sum::<crate::Chips>(), 0);
        }
    }
}

use crate::Position;
use crate::game::action::Action;
use crate::game::hand::Hand;
use crate::players::Policy;

/// Passive baseline that never folds: calls any bet, checks otherwise.
#[derive(Debug, Default)]
pub struct Caller;

impl Policy for Caller {
    fn decide(&mut self, hand: &Hand, _: Position) -> Action {
        let legal = hand.legal();
        if legal.contains(&Action::Call) {
            Action::Call
        } else {
            Action::Check
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn calls_facing_a_bet_checks_otherwise() {
        let names = vec!["a".to_string(), "b".to_string()];
        let mut hand = Hand::start_seeded(names, vec![1000, 1000], 0, 40, 3).unwrap();
        let mut bot = Caller;
        assert_eq!(bot.decide(&hand, 0), Action::Call);
        hand.apply(0, Action::Call).unwrap();
        assert_eq!(bot.decide(&hand, 1), Action::Check);
    }
}

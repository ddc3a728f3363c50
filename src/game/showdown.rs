use crate::Chips;
use crate::cards::strength::Strength;
use crate::game::seat::State;
use crate::game::settlement::Settlement;

/// Distributes the pot across layers at hand end.
///
/// Contributions partition the pot into layers bounded by distinct all-in
/// amounts. A seat is eligible for a layer only if it is live and its own
/// contribution reaches the layer's floor, so a short all-in can never win
/// chips it did not cover. The algorithm walks strength tiers from best to
/// worst, and within a tier walks contribution levels upward, paying each
/// slice to the seats that can claim it.
///
/// Ledger rows must be ordered clockwise from the dealer: split remainders
/// go to the earliest row, which makes odd-chip assignment deterministic.
pub struct Showdown {
    ledger: Vec<Settlement>,
    ceiling: Chips,
    floor: Chips,
    tier: Option<Strength>,
}

impl From<Vec<Settlement>> for Showdown {
    fn from(ledger: Vec<Settlement>) -> Self {
        Self {
            ledger,
            ceiling: 0,
            floor: 0,
            tier: None,
        }
    }
}

impl Showdown {
    /// Pays out every layer and returns the completed ledger.
    pub fn settle(mut self) -> Vec<Settlement> {
        'tiers: while let Some(strength) = self.next_tier() {
            self.tier = Some(strength);
            while let Some(level) = self.next_level() {
                self.ceiling = level;
                self.distribute();
                if self.is_complete() {
                    break 'tiers;
                }
            }
        }
        self.ledger
    }

    /// Strongest live strength not yet processed.
    fn next_tier(&self) -> Option<Strength> {
        self.ledger
            .iter()
            .filter(|s| s.state() != State::Folding)
            .filter(|s| self.tier.is_none_or(|t| *s.strength() < t))
            .map(|s| *s.strength())
            .max()
    }

    /// Smallest unpaid contribution level within the current tier.
    fn next_level(&mut self) -> Option<Chips> {
        self.floor = self.ceiling;
        self.ledger
            .iter()
            .filter(|s| s.state() != State::Folding)
            .filter(|s| Some(*s.strength()) == self.tier)
            .filter(|s| s.risked() > self.floor)
            .map(|s| s.risked())
            .min()
    }

    /// Chips in the slice between floor and ceiling, across all seats.
    fn winnings(&self) -> Chips {
        self.ledger
            .iter()
            .map(|s| s.risked().min(self.ceiling))
            .map(|s| (s - self.floor).max(0))
            .sum()
    }

    fn distribute(&mut self) {
        let chips = self.winnings();
        let tier = self.tier;
        let floor = self.floor;
        let mut winners = self
            .ledger
            .iter_mut()
            .filter(|s| s.state() != State::Folding)
            .filter(|s| Some(*s.strength()) == tier)
            .filter(|s| s.risked() > floor)
            .collect::<Vec<&mut Settlement>>();
        let n = winners.len() as Chips;
        let share = chips / n;
        let bonus = chips % n;
        for winner in winners.iter_mut() {
            winner.add(share);
        }
        // odd chips to the earliest winners clockwise from the dealer
        for winner in winners.iter_mut().take(bonus as usize) {
            winner.add(1);
        }
    }

    fn is_complete(&self) -> bool {
        let risked = self.ledger.iter().map(Settlement::risked).sum::<Chips>();
        let reward = self.ledger.iter().map(Settlement::reward).sum::<Chips>();
        risked == reward
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::kicks::Kickers;
    use crate::cards::rank::Rank;
    use crate::cards::ranking::Ranking;

    fn ace_high() -> Strength {
        Strength::from((Ranking::HighCard(Rank::Ace), Kickers::default()))
    }
    fn one_pair() -> Strength {
        Strength::from((Ranking::OnePair(Rank::Ace), Kickers::default()))
    }
    fn two_pair() -> Strength {
        Strength::from((Ranking::TwoPair(Rank::Ace, Rank::King), Kickers::default()))
    }
    fn triplets() -> Strength {
        Strength::from((Ranking::ThreeOAK(Rank::Ace), Kickers::default()))
    }
    fn the_nuts() -> Strength {
        Strength::from((Ranking::StraightFlush(Rank::Ace), Kickers::default()))
    }

    fn settle(rows: Vec<(Chips, State, Strength)>) -> Vec<Settlement> {
        let ledger = rows
            .into_iter()
            .enumerate()
            .map(|(i, (risked, state, strength))| Settlement::from((i, risked, state, strength)))
            .collect::<Vec<Settlement>>();
        Showdown::from(ledger).settle()
    }

    #[test]
    fn heads_up() {
        let result = settle(vec![
            (100, State::Betting, ace_high()),
            (100, State::Betting, one_pair()),
        ]);
        assert_eq!(result[0].reward(), 0);
        assert_eq!(result[1].reward(), 200);
    }

    #[test]
    fn folded_nuts_win_nothing() {
        let result = settle(vec![
            (50, State::Folding, the_nuts()),
            (100, State::Betting, two_pair()),
            (75, State::Folding, the_nuts()),
            (100, State::Betting, one_pair()),
        ]);
        assert_eq!(result[0].reward(), 0);
        assert_eq!(result[1].reward(), 325);
        assert_eq!(result[2].reward(), 0);
        assert_eq!(result[3].reward(), 0);
    }

    #[test]
    fn split_pot() {
        let result = settle(vec![
            (100, State::Betting, two_pair()),
            (100, State::Betting, two_pair()),
            (100, State::Betting, one_pair()),
        ]);
        assert_eq!(result[0].reward(), 150);
        assert_eq!(result[1].reward(), 150);
        assert_eq!(result[2].reward(), 0);
    }

    #[test]
    fn odd_chip_to_earliest_winner() {
        let result = settle(vec![
            (101, State::Betting, two_pair()),
            (101, State::Betting, two_pair()),
            (101, State::Betting, one_pair()),
        ]);
        assert_eq!(result[0].reward(), 152);
        assert_eq!(result[1].reward(), 151);
        assert_eq!(result[0].reward() + result[1].reward(), 303);
    }

    #[test]
    fn best_hand_takes_all() {
        let result = settle(vec![
            (200, State::Betting, the_nuts()),
            (150, State::Shoving, triplets()),
            (200, State::Betting, two_pair()),
            (100, State::Shoving, one_pair()),
            (50, State::Folding, the_nuts()),
        ]);
        assert_eq!(result[0].reward(), 700);
        assert_eq!(result[1].reward(), 0);
        assert_eq!(result[2].reward(), 0);
        assert_eq!(result[3].reward(), 0);
        assert_eq!(result[4].reward(), 0);
    }

    #[test]
    fn stacked_all_ins() {
        let result = settle(vec![
            (150, State::Shoving, the_nuts()),
            (200, State::Shoving, triplets()),
            (350, State::Shoving, one_pair()),
            (50, State::Shoving, ace_high()),
        ]);
        assert_eq!(result[0].reward(), 500);
        assert_eq!(result[1].reward(), 100);
        assert_eq!(result[2].reward(), 150);
        assert_eq!(result[3].reward(), 0);
    }

    #[test]
    fn short_all_in_wins_main_pot_only() {
        let result = settle(vec![
            (50, State::Shoving, the_nuts()),
            (100, State::Shoving, triplets()),
            (150, State::Betting, one_pair()),
            (150, State::Betting, ace_high()),
        ]);
        assert_eq!(result[0].reward(), 200);
        assert_eq!(result[1].reward(), 150);
        assert_eq!(result[2].reward(), 100);
        assert_eq!(result[3].reward(), 0);
    }

    #[test]
    fn side_pot_split_among_covering_seats() {
        let result = settle(vec![
            (50, State::Shoving, the_nuts()),
            (100, State::Betting, two_pair()),
            (100, State::Betting, two_pair()),
        ]);
        assert_eq!(result[0].reward(), 150);
        assert_eq!(result[1].reward(), 50);
        assert_eq!(result[2].reward(), 50);
    }

    #[test]
    fn last_live_seat_wins_uncontested() {
        let result = settle(vec![
            (50, State::Folding, the_nuts()),
            (100, State::Betting, ace_high()),
            (75, State::Folding, the_nuts()),
            (25, State::Folding, the_nuts()),
        ]);
        assert_eq!(result[0].reward(), 0);
        assert_eq!(result[1].reward(), 250);
        assert_eq!(result[2].reward(), 0);
        assert_eq!(result[3].reward(), 0);
    }

    #[test]
    fn ledger_is_zero_sum() {
        let result = settle(vec![
            (150, State::Shoving, two_pair()),
            (200, State::Betting, two_pair()),
            (75, State::Folding, the_nuts()),
            (200, State::Betting, ace_high()),
        ]);
        assert_eq!(result.iter().map(Settlement::pnl).sum::<Chips>(), 0);
    }
}

use super::evaluator::Evaluator;
use super::kicks::Kickers;
use super::ranking::Ranking;
use super::set::CardSet;

/// Totally ordered strength of the best 5-card hand inside a card set.
///
/// Built from a seat's hole cards plus the visible board (2 to 7 cards).
/// Category decides first, kickers break ties; equal strengths split pots.
#[derive(Debug, Clone, Copy, Eq, PartialEq, PartialOrd, Ord)]
pub struct Strength {
    ranking: Ranking,
    kicks: Kickers,
}

impl Strength {
    pub fn ranking(&self) -> Ranking {
        self.ranking
    }
}

impl From<(Ranking, Kickers)> for Strength {
    fn from((ranking, kicks): (Ranking, Kickers)) -> Self {
        Self { ranking, kicks }
    }
}

impl From<CardSet> for Strength {
    fn from(set: CardSet) -> Self {
        let evaluator = Evaluator::from(set);
        let ranking = evaluator.find_ranking();
        let kicks = evaluator.find_kickers(ranking);
        Self { ranking, kicks }
    }
}

impl std::fmt::Display for Strength {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{:<18}", self.ranking)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strength(s: &str) -> Strength {
        Strength::from(CardSet::try_from(s).unwrap())
    }

    #[test]
    fn kickers_break_ties() {
        let better = strength("As Ah Kd Qc Js");
        let worse = strength("Ad Ac Kh Qs Ts");
        assert!(better > worse);
    }

    #[test]
    fn category_dominates_kickers() {
        let pair = strength("2s 2h 3d 4c 5s 7h 8d");
        let high = strength("As Kh Qd Jc 9s 8h 7d");
        assert!(pair > high);
    }

    #[test]
    fn identical_hands_tie() {
        let a = strength("As Kh Qd Jc 9s");
        let b = strength("Ah Ks Qc Jd 9h");
        assert_eq!(a, b);
    }
}

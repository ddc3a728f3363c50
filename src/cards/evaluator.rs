use super::kicks::Kickers;
use super::rank::Rank;
use super::ranking::Ranking;
use super::set::CardSet;
use super::suit::Suit;

/// ace-low straight, A2345
const WHEEL: u16 = 0b_1000000001111;

/// Finds the best 5-card ranking inside a set of 2..=7 cards.
///
/// Searches categories from strongest to weakest over the compact
/// bit representation; the first hit is the hand's ranking. No lookup
/// tables, no allocation, independent of any external library.
pub struct Evaluator(CardSet);

impl From<CardSet> for Evaluator {
    fn from(set: CardSet) -> Self {
        Self(set)
    }
}

impl Evaluator {
    pub fn find_ranking(&self) -> Ranking {
        None.or_else(|| self.find_straight_flush())
            .or_else(|| self.find_4_oak())
            .or_else(|| self.find_3_oak_2_oak())
            .or_else(|| self.find_flush())
            .or_else(|| self.find_straight())
            .or_else(|| self.find_3_oak())
            .or_else(|| self.find_2_oak_2_oak())
            .or_else(|| self.find_2_oak())
            .or_else(|| self.find_1_oak())
            .expect("at least one card in set")
    }

    pub fn find_kickers(&self, ranking: Ranking) -> Kickers {
        match ranking.n_kickers() {
            0 => Kickers::default(),
            n => {
                // flush kickers only count cards of the flush suit
                let eligible = match ranking {
                    Ranking::Flush(_) => {
                        let suit = self.find_suit_of_flush().expect("ranked as flush");
                        u16::from(self.0.of(&suit))
                    }
                    _ => u16::from(self.0),
                };
                let mut ranks = eligible & ranking.exclusion();
                while n < ranks.count_ones() as usize {
                    ranks &= ranks - 1; // drop lowest kicker
                }
                Kickers::from(ranks)
            }
        }
    }

    fn find_1_oak(&self) -> Option<Ranking> {
        self.find_rank_of_n_oak(1, None).map(Ranking::HighCard)
    }
    fn find_2_oak(&self) -> Option<Ranking> {
        self.find_rank_of_n_oak(2, None).map(Ranking::OnePair)
    }
    fn find_3_oak(&self) -> Option<Ranking> {
        self.find_rank_of_n_oak(3, None).map(Ranking::ThreeOAK)
    }
    fn find_4_oak(&self) -> Option<Ranking> {
        self.find_rank_of_n_oak(4, None).map(Ranking::FourOAK)
    }
    fn find_2_oak_2_oak(&self) -> Option<Ranking> {
        self.find_rank_of_n_oak(2, None).and_then(|hi| {
            self.find_rank_of_n_oak(2, Some(hi))
                .map(|lo| Ranking::TwoPair(hi, lo))
        })
    }
    fn find_3_oak_2_oak(&self) -> Option<Ranking> {
        self.find_rank_of_n_oak(3, None).and_then(|trips| {
            self.find_rank_of_n_oak(2, Some(trips))
                .map(|pair| Ranking::FullHouse(trips, pair))
        })
    }
    fn find_straight(&self) -> Option<Ranking> {
        self.find_rank_of_straight(self.0).map(Ranking::Straight)
    }
    fn find_flush(&self) -> Option<Ranking> {
        self.find_suit_of_flush().map(|suit| {
            let ranks = u16::from(self.0.of(&suit));
            Ranking::Flush(Rank::from(ranks))
        })
    }
    fn find_straight_flush(&self) -> Option<Ranking> {
        self.find_suit_of_flush().and_then(|suit| {
            self.find_rank_of_straight(self.0.of(&suit))
                .map(Ranking::StraightFlush)
        })
    }

    /// five consecutive rank bits, or the wheel
    fn find_rank_of_straight(&self, cards: CardSet) -> Option<Rank> {
        let ranks = u16::from(cards);
        let mut bits = ranks;
        bits &= bits << 1;
        bits &= bits << 1;
        bits &= bits << 1;
        bits &= bits << 1;
        if bits > 0 {
            Some(Rank::from(bits))
        } else if WHEEL == (WHEEL & ranks) {
            Some(Rank::Five)
        } else {
            None
        }
    }

    fn find_suit_of_flush(&self) -> Option<Suit> {
        Suit::all()
            .iter()
            .copied()
            .find(|suit| self.0.of(suit).size() >= 5)
    }

    /// highest rank held at least n times, optionally skipping one rank
    fn find_rank_of_n_oak(&self, n: usize, skip: Option<Rank>) -> Option<Rank> {
        let cards = u64::from(self.0);
        Rank::all()
            .iter()
            .copied()
            .rev()
            .filter(|rank| Some(*rank) != skip)
            .find(|rank| {
                let held = cards >> (u8::from(*rank) * 4) & 0xF;
                held.count_ones() as usize >= n
            })
    }
}

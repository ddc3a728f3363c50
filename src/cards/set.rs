use super::card::Card;
use super::suit::Suit;

/// An unordered set of cards packed into the low 52 bits of a u64.
///
/// One bit per unique card keeps the whole set in a single word with no
/// heap allocation, and lets the evaluator shred ranks and suits with
/// bitwise ops instead of sorting.
#[derive(Debug, Default, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct CardSet(u64);

impl CardSet {
    pub const fn empty() -> Self {
        Self(0)
    }
    pub const fn full() -> Self {
        Self(Self::MASK)
    }

    pub fn size(&self) -> usize {
        self.0.count_ones() as usize
    }
    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }
    pub fn contains(&self, card: &Card) -> bool {
        self.0 & u64::from(*card) != 0
    }
    pub fn insert(&mut self, card: Card) {
        self.0 |= u64::from(card);
    }
    pub fn remove(&mut self, card: Card) {
        self.0 &= !u64::from(card);
    }
    /// Union of two disjoint sets.
    pub fn merge(lhs: Self, rhs: Self) -> Self {
        debug_assert!(lhs.0 & rhs.0 == 0);
        Self(lhs.0 | rhs.0)
    }
    /// The cards of a single suit, preserving card-bit positions.
    pub fn of(&self, suit: &Suit) -> Self {
        Self(self.0 & u64::from(*suit))
    }

    const MASK: u64 = 0x000FFFFFFFFFFFFF;
}

/// removing the lowest card until empty gives sorted iteration
impl Iterator for CardSet {
    type Item = Card;
    fn next(&mut self) -> Option<Self::Item> {
        if self.is_empty() {
            None
        } else {
            let card = Card::from(self.0.trailing_zeros() as u8);
            self.remove(card);
            Some(card)
        }
    }
}

/// u64 isomorphism
impl From<u64> for CardSet {
    fn from(n: u64) -> Self {
        Self(n & Self::MASK)
    }
}
impl From<CardSet> for u64 {
    fn from(s: CardSet) -> Self {
        s.0
    }
}

impl From<Card> for CardSet {
    fn from(card: Card) -> Self {
        Self(u64::from(card))
    }
}

impl FromIterator<Card> for CardSet {
    fn from_iter<I: IntoIterator<Item = Card>>(iter: I) -> Self {
        Self(iter.into_iter().map(u64::from).fold(0u64, |a, b| a | b))
    }
}

impl From<&[Card]> for CardSet {
    fn from(cards: &[Card]) -> Self {
        cards.iter().copied().collect()
    }
}

/// one-way collapse into a 13-bit rank mask
///
/// zero-allocation, zero iteration; folds the four suit bits of each rank
/// into one bit, then compacts the nibble spacing
impl From<CardSet> for u16 {
    fn from(s: CardSet) -> Self {
        let mut x = u64::from(s);
        x |= x >> 1;
        x |= x >> 2;
        x &= 0x1111111111111;
        let mut y = u64::default();
        y |= (x >> 00) & 0x0001;
        y |= (x >> 03) & 0x0002;
        y |= (x >> 06) & 0x0004;
        y |= (x >> 09) & 0x0008;
        y |= (x >> 12) & 0x0010;
        y |= (x >> 15) & 0x0020;
        y |= (x >> 18) & 0x0040;
        y |= (x >> 21) & 0x0080;
        y |= (x >> 24) & 0x0100;
        y |= (x >> 27) & 0x0200;
        y |= (x >> 30) & 0x0400;
        y |= (x >> 33) & 0x0800;
        y |= (x >> 36) & 0x1000;
        y as u16
    }
}

/// whitespace-separated card notation, e.g. "As Kh Qd"
impl TryFrom<&str> for CardSet {
    type Error = anyhow::Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        s.split_whitespace()
            .map(Card::try_from)
            .collect::<Result<Vec<Card>, _>>()
            .map(|cards| cards.into_iter().collect())
    }
}

impl std::fmt::Display for CardSet {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        for card in *self {
            write!(f, "{}", card)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::rank::Rank;

    #[test]
    fn insert_remove_contains() {
        let card = Card::try_from("Js").unwrap();
        let mut set = CardSet::empty();
        assert!(!set.contains(&card));
        set.insert(card);
        assert!(set.contains(&card));
        assert_eq!(set.size(), 1);
        set.remove(card);
        assert!(set.is_empty());
    }

    #[test]
    fn sorted_iteration() {
        let set = CardSet::try_from("Jc Ts 2c Js").unwrap();
        let cards = set.collect::<Vec<Card>>();
        assert_eq!(cards[0], Card::try_from("2c").unwrap());
        assert_eq!(cards[1], Card::try_from("Ts").unwrap());
        assert_eq!(cards[2], Card::try_from("Jc").unwrap());
        assert_eq!(cards[3], Card::try_from("Js").unwrap());
    }

    #[test]
    fn rank_mask() {
        let set = CardSet::try_from("2c 2d 2h Ts As").unwrap();
        let mask = u16::from(set);
        assert_eq!(mask.count_ones(), 3);
        assert_eq!(Rank::from(mask), Rank::Ace);
    }

    #[test]
    fn ranks_within_suit() {
        let set = CardSet::try_from("2c 3d 4h 5s 6c 7d 8h 9s Tc Jd Qh Ks Ac").unwrap();
        assert_eq!(u16::from(set.of(&Suit::Club)), 0b_1000100010001);
        assert_eq!(u16::from(set.of(&Suit::Diamond)), 0b_0001000100010);
        assert_eq!(u16::from(set.of(&Suit::Heart)), 0b_0010001000100);
        assert_eq!(u16::from(set.of(&Suit::Spade)), 0b_0100010001000);
    }

    #[test]
    fn full_deck_size() {
        assert_eq!(CardSet::full().size(), 52);
    }
}

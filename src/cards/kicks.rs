use super::rank::Rank;

/// Tie-breaking kicker ranks, stored as a 13-bit rank mask.
///
/// Higher mask compares higher, which matches comparing kickers from
/// best to worst.
#[derive(Debug, Default, Clone, Copy, Eq, PartialEq, PartialOrd, Ord)]
pub struct Kickers(u16);

impl From<u16> for Kickers {
    fn from(n: u16) -> Self {
        Self(n & Rank::mask())
    }
}
impl From<Kickers> for u16 {
    fn from(k: Kickers) -> Self {
        k.0
    }
}

impl From<Vec<Rank>> for Kickers {
    fn from(ranks: Vec<Rank>) -> Self {
        Self(ranks.iter().map(|r| u16::from(*r)).fold(0u16, |a, b| a | b))
    }
}
impl From<Kickers> for Vec<Rank> {
    fn from(k: Kickers) -> Self {
        (0..13u8)
            .rev()
            .map(Rank::from)
            .filter(|r| k.0 & u16::from(*r) != 0)
            .collect()
    }
}

impl std::fmt::Display for Kickers {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        for rank in Vec::<Rank>::from(*self) {
            write!(f, "{} ", rank)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bijective_ranks() {
        let ranks = vec![Rank::Ace, Rank::Queen, Rank::Nine];
        let kicks = Kickers::from(ranks.clone());
        assert_eq!(Vec::<Rank>::from(kicks), ranks);
    }

    #[test]
    fn higher_kicker_wins() {
        let a = Kickers::from(vec![Rank::Ace, Rank::Two]);
        let b = Kickers::from(vec![Rank::King, Rank::Queen]);
        assert!(a > b);
    }
}

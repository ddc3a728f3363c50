use super::card::Card;
use super::set::CardSet;

/// The two private cards dealt to a seat, assigned once per hand.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Hole(Card, Card);

impl Hole {
    pub fn cards(&self) -> [Card; 2] {
        [self.0, self.1]
    }
}

impl From<(Card, Card)> for Hole {
    fn from((a, b): (Card, Card)) -> Self {
        Self(a, b)
    }
}

impl From<Hole> for CardSet {
    fn from(hole: Hole) -> Self {
        hole.cards().iter().copied().collect()
    }
}

impl TryFrom<&str> for Hole {
    type Error = anyhow::Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s.split_whitespace().collect::<Vec<&str>>().as_slice() {
            [a, b] => Ok(Self(Card::try_from(*a)?, Card::try_from(*b)?)),
            _ => Err(anyhow::anyhow!("expected two cards: {}", s)),
        }
    }
}

impl std::fmt::Display for Hole {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{} {}", self.0, self.1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bijective_str() {
        let hole = Hole::try_from("As Kd").unwrap();
        assert_eq!(hole.to_string(), "As Kd");
    }

    #[test]
    fn two_cards_in_set() {
        let hole = Hole::try_from("7h 7s").unwrap();
        assert_eq!(CardSet::from(hole).size(), 2);
    }
}

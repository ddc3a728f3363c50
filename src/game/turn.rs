use crate::Position;

/// Whose move it is at a point in the hand.
///
/// - `Choice(seat)`: one seat must make a betting decision
/// - `Chance`: the dealer reveals the next street
/// - `Terminal`: the hand is over, payoffs are computable
#[derive(Debug, Clone, Copy, Eq, Hash, PartialEq)]
pub enum Turn {
    Choice(Position),
    Chance,
    Terminal,
}

impl Turn {
    /// True if this is a player decision node.
    pub fn is_choice(&self) -> bool {
        matches!(self, Self::Choice(_))
    }
    /// True if this is a card reveal node.
    pub fn is_chance(&self) -> bool {
        matches!(self, Self::Chance)
    }
    /// True if the hand is complete.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Terminal)
    }
    /// The seat to act, if any.
    pub fn seat(&self) -> Option<Position> {
        match self {
            Self::Choice(p) => Some(*p),
            _ => None,
        }
    }
}

impl std::fmt::Display for Turn {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Choice(p) => write!(f, "seat {}", p),
            Self::Chance => write!(f, "dealer"),
            Self::Terminal => write!(f, "-"),
        }
    }
}

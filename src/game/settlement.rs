use crate::Chips;
use crate::Position;
use crate::cards::strength::Strength;
use crate::game::seat::State;

/// One seat's row in the settlement ledger.
///
/// `risked` is the seat's total contribution to the pot over the hand;
/// `reward` accumulates the chips won across pot layers. Net payoff is
/// `reward - risked`, so the ledger sums to zero by construction.
#[derive(Debug, Clone)]
pub struct Settlement {
    position: Position,
    risked: Chips,
    reward: Chips,
    state: State,
    strength: Strength,
}

impl Settlement {
    pub fn position(&self) -> Position {
        self.position
    }
    pub fn risked(&self) -> Chips {
        self.risked
    }
    pub fn reward(&self) -> Chips {
        self.reward
    }
    pub fn state(&self) -> State {
        self.state
    }
    pub fn strength(&self) -> &Strength {
        &self.strength
    }
    /// Net chip delta for this seat.
    pub fn pnl(&self) -> Chips {
        self.reward - self.risked
    }
    pub fn add(&mut self, chips: Chips) {
        self.reward += chips;
    }
}

impl From<(Position, Chips, State, Strength)> for Settlement {
    fn from((position, risked, state, strength): (Position, Chips, State, Strength)) -> Self {
        Self {
            position,
            risked,
            reward: 0,
            state,
            strength,
        }
    }
}

impl std::fmt::Display for Settlement {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use colored::Colorize;
        match self.pnl() {
            pnl if pnl > 0 => write!(f, "{:<6}{}", format!("+{}", pnl).green(), self.strength),
            pnl if pnl < 0 => write!(f, "{:<6}{}", format!("{}", pnl).red(), self.strength),
            _ => write!(f, "{:<6}{}", 0, self.strength),
        }
    }
}

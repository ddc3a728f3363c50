use crate::Chips;
use crate::Position;
use crate::cards::hole::Hole;

/// A seat's standing within the current hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum State {
    /// Live and able to act.
    Betting,
    /// Live but fully committed; takes no further actions.
    Shoving,
    /// Out of the hand.
    Folding,
}

/// One seat at the table for the lifetime of a hand.
///
/// `stake` is the seat's commitment on the current street, reset at each
/// street transition; `spent` is its total commitment across the hand and
/// is what settlement layers are built from.
#[derive(Debug, Clone)]
pub struct Seat {
    position: Position,
    name: String,
    hole: Hole,
    start: Chips,
    stack: Chips,
    stake: Chips,
    spent: Chips,
    state: State,
    acted: bool,
}

impl Seat {
    pub fn new(position: Position, name: String, stack: Chips, hole: Hole) -> Self {
        Self {
            position,
            name,
            hole,
            start: stack,
            stack,
            stake: 0,
            spent: 0,
            state: State::Betting,
            acted: false,
        }
    }

    pub fn position(&self) -> Position {
        self.position
    }
    pub fn name(&self) -> &str {
        &self.name
    }
    pub fn hole(&self) -> Hole {
        self.hole
    }
    /// Stack at hand start.
    pub fn start(&self) -> Chips {
        self.start
    }
    pub fn stack(&self) -> Chips {
        self.stack
    }
    pub fn stake(&self) -> Chips {
        self.stake
    }
    pub fn spent(&self) -> Chips {
        self.spent
    }
    pub fn state(&self) -> State {
        self.state
    }
    /// True if the seat has not folded.
    pub fn is_live(&self) -> bool {
        self.state != State::Folding
    }
    /// True if the seat has acted since the last bet or raise.
    pub fn has_acted(&self) -> bool {
        self.acted
    }

    /// Moves chips from stack to pot; a full commitment becomes a shove.
    pub fn bet(&mut self, chips: Chips) {
        debug_assert!(chips <= self.stack);
        self.stack -= chips;
        self.stake += chips;
        self.spent += chips;
        if self.stack == 0 {
            self.state = State::Shoving;
        }
    }
    pub fn fold(&mut self) {
        self.state = State::Folding;
    }
    pub fn win(&mut self, reward: Chips) {
        self.stack += reward;
    }
    pub fn touch(&mut self) {
        self.acted = true;
    }
    /// Reopens action for this seat after a bet or raise.
    pub fn untouch(&mut self) {
        self.acted = false;
    }
    /// Street transition: commitments carry to `spent`, stakes reset.
    pub fn next_street(&mut self) {
        self.stake = 0;
        self.acted = false;
    }
}

impl std::fmt::Display for Seat {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let state = match self.state {
            State::Betting => "B",
            State::Shoving => "S",
            State::Folding => "F",
        };
        write!(
            f,
            "{:<3}{} {} {:>7}",
            self.position, state, self.hole, self.stack
        )
    }
}

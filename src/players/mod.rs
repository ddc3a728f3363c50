pub mod caller;
pub mod fish;

use crate::Position;
use crate::game::action::Action;
use crate::game::hand::Hand;

pub use caller::Caller;
pub use fish::Fish;

/// A decision procedure for a bot-controlled seat.
///
/// Implementations must return one of the actions the hand reports as
/// legal for the seat; the engine validates the choice like any other
/// submission and a misbehaving policy surfaces as `InvalidAction`.
pub trait Policy: Send {
    fn decide(&mut self, hand: &Hand, seat: Position) -> Action;
}

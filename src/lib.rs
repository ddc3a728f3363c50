pub mod cards;
pub mod game;
pub mod players;
pub mod replay;
pub mod room;

/// Integer chip count. Signed so that settlement math and net payoffs
/// live in the same type as stacks and bets.
pub type Chips = i32;

/// Seat index at the table, fixed for the lifetime of a hand.
pub type Position = usize;

pub use cards::card::Card;
pub use cards::deck::Deck;
pub use cards::hole::Hole;
pub use cards::street::Street;
pub use cards::strength::Strength;
pub use game::action::Action;
pub use game::action::Event;
pub use game::action::Play;
pub use game::error::TableError;
pub use game::hand::Hand;
pub use game::hand::HandId;
pub use game::turn::Turn;
pub use players::Policy;
pub use replay::Setup;
pub use room::Room;
pub use room::Snapshot;

pub mod card;
pub mod deck;
pub mod evaluator;
pub mod hole;
pub mod kicks;
pub mod ranking;
pub mod rank;
pub mod set;
pub mod street;
pub mod strength;
pub mod suit;

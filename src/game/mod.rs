pub mod action;
pub mod error;
pub mod hand;
pub mod seat;
pub mod settlement;
pub mod showdown;
pub mod turn;

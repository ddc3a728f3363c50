use crate::Chips;
use crate::Position;
use crate::cards::hole::Hole;
use crate::game::action::Play;
use crate::game::error::TableError;
use crate::game::hand::Hand;
use crate::game::seat::Seat;

/// Starting conditions of a hand. Together with the action log these
/// determine every downstream fact of the hand, so payoffs never need to
/// be trusted from storage.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Setup {
    pub names: Vec<String>,
    pub stacks: Vec<Chips>,
    pub dealer: Position,
    pub bblind: Chips,
    pub holes: Vec<Hole>,
}

impl From<&Hand> for Setup {
    fn from(hand: &Hand) -> Self {
        Self {
            names: hand.seats().iter().map(|s| s.name().to_string()).collect(),
            stacks: hand.seats().iter().map(Seat::start).collect(),
            dealer: hand.dealer(),
            bblind: hand.bblind(),
            holes: hand.seats().iter().map(Seat::hole).collect(),
        }
    }
}

/// Recomputes payoffs from scratch by feeding a stored log through the
/// live transition function. This is the authoritative definition of a
/// hand's outcome. The first entry the engine would have rejected live
/// fails here with the same `InvalidAction`; a log whose sequence
/// numbers are broken or that ends mid-hand is corrupt.
pub fn replay(setup: &Setup, plays: &[Play]) -> Result<Vec<Chips>, TableError> {
    let mut hand = Hand::scripted(setup)?;
    for play in plays {
        hand.step(play)?;
    }
    match hand.payoffs() {
        Some(payoffs) => Ok(payoffs.to_vec()),
        None => Err(TableError::corrupt("log ends before the hand does")),
    }
}

/// Checks stored payoffs against a from-scratch replay.
pub fn verify(setup: &Setup, plays: &[Play], payoffs: &[Chips]) -> Result<(), TableError> {
    let replayed = replay(setup, plays)?;
    if replayed == payoffs {
        Ok(())
    } else {
        Err(TableError::corrupt(format!(
            "stored payoffs {:?} replay to {:?}",
            payoffs, replayed
        )))
    }
}

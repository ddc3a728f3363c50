use std::collections::HashMap;
use std::sync::Arc;
use std::sync::Mutex;

use crate::Chips;
use crate::Position;
use crate::cards::card::Card;
use crate::cards::street::Street;
use crate::game::action::Action;
use crate::game::action::Play;
use crate::game::error::TableError;
use crate::game::hand::Hand;
use crate::game::hand::HandId;
use crate::game::turn::Turn;
use crate::players::Policy;
use crate::replay::Setup;

/// Public view of a hand after a submission.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Snapshot {
    pub id: HandId,
    pub street: Street,
    pub board: Vec<Card>,
    pub pot: Chips,
    pub stacks: Vec<Chips>,
    /// Seat waiting to act, None once the hand is over.
    pub turn: Option<Position>,
    pub payoffs: Option<Vec<Chips>>,
}

impl From<&Hand> for Snapshot {
    fn from(hand: &Hand) -> Self {
        Self {
            id: hand.id(),
            street: hand.street(),
            board: hand.board().to_vec(),
            pot: hand.pot(),
            stacks: hand.stacks(),
            turn: hand.turn().seat(),
            payoffs: hand.payoffs().map(<[Chips]>::to_vec),
        }
    }
}

/// One stored hand and the policies driving its bot seats.
struct Table {
    hand: Hand,
    policies: Vec<Option<Box<dyn Policy>>>,
}

impl Table {
    /// Lets bot seats act until a human seat is up or the hand ends.
    /// Runs inside the hand's critical section so a submission and the
    /// bot responses it triggers land in the log as one unit.
    fn advance(&mut self) -> Result<(), TableError> {
        while let Turn::Choice(seat) = self.hand.turn() {
            let Some(policy) = self.policies[seat].as_mut() else {
                break;
            };
            let action = policy.decide(&self.hand, seat);
            log::debug!("hand {} bot seat {} plays {}", self.hand.id(), seat, action);
            self.hand.apply(seat, action)?;
        }
        Ok(())
    }
}

/// In-memory store of live hands, each behind its own lock.
///
/// The map lock is held only to look up or insert a hand; all play runs
/// under the per-hand lock, so independent hands never contend.
#[derive(Default)]
pub struct Room {
    hands: Mutex<HashMap<HandId, Arc<Mutex<Table>>>>,
}

impl Room {
    pub fn new() -> Self {
        Self::default()
    }

    /// Deals a new hand, runs any leading bot decisions, and stores it.
    /// `policies` aligns with seats; `None` marks a human seat.
    pub fn start_hand(
        &self,
        names: Vec<String>,
        stacks: Vec<Chips>,
        dealer: Position,
        bblind: Chips,
        policies: Vec<Option<Box<dyn Policy>>>,
    ) -> Result<Snapshot, TableError> {
        if policies.len() != names.len() {
            return Err(TableError::invalid("one policy slot per seat"));
        }
        let hand = Hand::start(names, stacks, dealer, bblind)?;
        let id = hand.id();
        let mut table = Table { hand, policies };
        table.advance()?;
        let snapshot = Snapshot::from(&table.hand);
        self.lock_map()?.insert(id, Arc::new(Mutex::new(table)));
        log::info!("hand {} started", id);
        Ok(snapshot)
    }

    /// Applies one human action, then lets bots respond. The whole
    /// exchange happens under the hand's lock.
    pub fn submit(
        &self,
        id: HandId,
        seat: Position,
        action: Action,
    ) -> Result<Snapshot, TableError> {
        let table = self.find(id)?;
        let mut table = Self::lock_hand(&table)?;
        table.hand.apply(seat, action)?;
        table.advance()?;
        Ok(Snapshot::from(&table.hand))
    }

    pub fn snapshot(&self, id: HandId) -> Result<Snapshot, TableError> {
        let table = self.find(id)?;
        let table = Self::lock_hand(&table)?;
        Ok(Snapshot::from(&table.hand))
    }

    /// Starting conditions and full action log, for audit and replay.
    pub fn export(&self, id: HandId) -> Result<(Setup, Vec<Play>), TableError> {
        let table = self.find(id)?;
        let table = Self::lock_hand(&table)?;
        Ok((Setup::from(&table.hand), table.hand.log().to_vec()))
    }

    /// Drops a finished hand from the store. Live hands stay put.
    pub fn remove(&self, id: HandId) -> Result<(), TableError> {
        let table = self.find(id)?;
        {
            let table = Self::lock_hand(&table)?;
            if !table.hand.is_complete() {
                return Err(TableError::invalid(format!("hand {} is still live", id)));
            }
        }
        self.lock_map()?.remove(&id);
        log::info!("hand {} removed", id);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.lock_map().map(|m| m.len()).unwrap_or(0)
    }
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn find(&self, id: HandId) -> Result<Arc<Mutex<Table>>, TableError> {
        self.lock_map()?
            .get(&id)
            .cloned()
            .ok_or_else(|| TableError::missing(format!("hand {}", id)))
    }

    fn lock_map(&self) -> Result<std::sync::MutexGuard<'_, HashMap<HandId, Arc<Mutex<Table>>>>, TableError> {
        self.hands
            .lock()
            .map_err(|_| TableError::corrupt("room index lock poisoned"))
    }

    fn lock_hand(table: &Arc<Mutex<Table>>) -> Result<std::sync::MutexGuard<'_, Table>, TableError> {
        table
            .lock()
            .map_err(|_| TableError::corrupt("hand lock poisoned"))
    }
}

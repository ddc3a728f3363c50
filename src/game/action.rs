use crate::Chips;
use crate::Position;
use crate::cards::card::Card;

/// A seat's submitted intent, before the engine resolves amounts.
///
/// `Call` carries no amount: the engine computes the chips owed and caps
/// a short call into an all-in. `Raise(to)` names the new street-stake
/// level, not the increment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Action {
    Fold,
    Check,
    Call,
    Raise(Chips),
    Shove,
}

impl TryFrom<&str> for Action {
    type Error = anyhow::Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let parts = s.split_whitespace().collect::<Vec<&str>>();
        match parts.as_slice() {
            ["fold"] => Ok(Action::Fold),
            ["check"] => Ok(Action::Check),
            ["call"] => Ok(Action::Call),
            ["allin"] | ["shove"] => Ok(Action::Shove),
            ["raise", n] | ["bet", n] => n
                .parse()
                .map(Action::Raise)
                .map_err(|_| anyhow::anyhow!("invalid raise amount: {}", n)),
            _ => Err(anyhow::anyhow!("invalid action: {}", s)),
        }
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Action::Fold => write!(f, "fold"),
            Action::Check => write!(f, "check"),
            Action::Call => write!(f, "call"),
            Action::Raise(to) => write!(f, "raise {}", to),
            Action::Shove => write!(f, "allin"),
        }
    }
}

/// A resolved transition recorded in the action log.
///
/// Player events carry the chips actually moved into the pot; `Draw`
/// carries the cards revealed for a street. The log is append-only and
/// replaying it reproduces the hand exactly.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Event {
    Blind(Chips),
    Fold,
    Check,
    Call(Chips),
    Raise(Chips),
    Shove(Chips),
    Draw(Vec<Card>),
}

impl Event {
    /// True if this is a card reveal (chance node).
    pub fn is_chance(&self) -> bool {
        matches!(self, Event::Draw(_))
    }
    /// True if this is a voluntary player decision.
    pub fn is_choice(&self) -> bool {
        !matches!(self, Event::Draw(_) | Event::Blind(_))
    }
    /// True if this event raised the price of the round.
    pub fn is_aggressive(&self) -> bool {
        matches!(self, Event::Raise(_) | Event::Shove(_))
    }
    /// Chips moved into the pot by this event.
    pub fn chips(&self) -> Chips {
        match self {
            Event::Blind(n) | Event::Call(n) | Event::Raise(n) | Event::Shove(n) => *n,
            Event::Fold | Event::Check | Event::Draw(_) => 0,
        }
    }
    /// The cards revealed by a Draw.
    pub fn cards(&self) -> Option<&[Card]> {
        match self {
            Event::Draw(cards) => Some(cards),
            _ => None,
        }
    }
}

impl std::fmt::Display for Event {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Event::Blind(n) => write!(f, "BLIND {}", n),
            Event::Fold => write!(f, "FOLD"),
            Event::Check => write!(f, "CHECK"),
            Event::Call(n) => write!(f, "CALL  {}", n),
            Event::Raise(n) => write!(f, "RAISE {}", n),
            Event::Shove(n) => write!(f, "SHOVE {}", n),
            Event::Draw(cards) => {
                write!(f, "DEAL  ")?;
                for card in cards {
                    write!(f, "{}", card)?;
                }
                Ok(())
            }
        }
    }
}

/// One appended record of the hand's action log.
///
/// `seat` is None for system-originated street reveals. Timestamps are
/// informational; replay depends only on order and content.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Play {
    pub seq: u32,
    pub seat: Option<Position>,
    pub event: Event,
    pub ms: u64,
}

impl Play {
    pub fn new(seq: u32, seat: Option<Position>, event: Event) -> Self {
        let ms = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or(0);
        Self {
            seq,
            seat,
            event,
            ms,
        }
    }
}

impl std::fmt::Display for Play {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self.seat {
            Some(seat) => write!(f, "{:>3} P{} {}", self.seq, seat, self.event),
            None => write!(f, "{:>3} -- {}", self.seq, self.event),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn action_parse() {
        assert_eq!(Action::try_from("fold").unwrap(), Action::Fold);
        assert_eq!(Action::try_from("raise 120").unwrap(), Action::Raise(120));
        assert_eq!(Action::try_from("allin").unwrap(), Action::Shove);
        assert!(Action::try_from("raise lots").is_err());
        assert!(Action::try_from("dance").is_err());
    }

    #[test]
    fn event_chips() {
        assert_eq!(Event::Call(40).chips(), 40);
        assert_eq!(Event::Check.chips(), 0);
        assert_eq!(Event::Draw(vec![]).chips(), 0);
    }

    #[test]
    fn event_families() {
        assert!(Event::Draw(vec![]).is_chance());
        assert!(!Event::Blind(20).is_choice());
        assert!(Event::Raise(80).is_aggressive());
        assert!(!Event::Call(80).is_aggressive());
    }

    #[test]
    fn play_serde_round_trip() {
        let card = Card::try_from("As").unwrap();
        let play = Play::new(3, None, Event::Draw(vec![card]));
        let json = serde_json::to_string(&play).unwrap();
        assert_eq!(play, serde_json::from_str::<Play>(&json).unwrap());
    }
}

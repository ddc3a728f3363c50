use crate::Chips;
use crate::Position;
use crate::cards::card::Card;
use crate::cards::deck::Deck;
use crate::cards::hole::Hole;
use crate::cards::set::CardSet;
use crate::cards::street::Street;
use crate::cards::strength::Strength;
use crate::game::action::Action;
use crate::game::action::Event;
use crate::game::action::Play;
use crate::game::error::TableError;
use crate::game::seat::Seat;
use crate::game::seat::State;
use crate::game::settlement::Settlement;
use crate::game::showdown::Showdown;
use crate::game::turn::Turn;
use crate::replay::Setup;

/// Unique hand identifier, time-ordered for storage.
pub type HandId = uuid::Uuid;

/// A single hand of no-limit hold'em from blinds to settlement.
///
/// The hand is a state machine over an append-only action log. Every
/// mutation, whether from a live submission or a replayed `Play`, goes
/// through the same `transition` function, so a persisted log replays
/// to exactly the state it was recorded from.
///
/// Live hands own a deck and reveal streets themselves; scripted hands
/// have no deck and take their `Draw` events from the log instead.
#[derive(Debug, Clone)]
pub struct Hand {
    id: HandId,
    seats: Vec<Seat>,
    dealer: Position,
    bblind: Chips,
    street: Street,
    board: Vec<Card>,
    deck: Option<Deck>,
    blinds: usize,
    ticker: Position,
    log: Vec<Play>,
    payoffs: Option<Vec<Chips>>,
}

impl Hand {
    /// Starts a live hand with a deck shuffled from OS entropy.
    pub fn start(
        names: Vec<String>,
        stacks: Vec<Chips>,
        dealer: Position,
        bblind: Chips,
    ) -> Result<Self, TableError> {
        Self::deal(names, stacks, dealer, bblind, Deck::shuffled())
    }

    /// Starts a live hand with a reproducible shuffle.
    pub fn start_seeded(
        names: Vec<String>,
        stacks: Vec<Chips>,
        dealer: Position,
        bblind: Chips,
        seed: u64,
    ) -> Result<Self, TableError> {
        Self::deal(names, stacks, dealer, bblind, Deck::seeded(seed))
    }

    /// A hand reconstructed from stored starting conditions. Blinds and
    /// street reveals arrive as replayed plays rather than from a deck.
    pub(crate) fn scripted(setup: &Setup) -> Result<Self, TableError> {
        Self::table(
            setup.names.clone(),
            setup.stacks.clone(),
            setup.dealer,
            setup.bblind,
            setup.holes.clone(),
            None,
        )
    }

    fn deal(
        names: Vec<String>,
        stacks: Vec<Chips>,
        dealer: Position,
        bblind: Chips,
        mut deck: Deck,
    ) -> Result<Self, TableError> {
        let holes = (0..names.len())
            .map(|_| deck.hole())
            .collect::<Option<Vec<Hole>>>()
            .ok_or_else(|| TableError::invalid("too many seats for one deck"))?;
        let mut hand = Self::table(names, stacks, dealer, bblind, holes, Some(deck))?;
        hand.post_blinds()?;
        hand.run_chances()?;
        hand.conclude();
        Ok(hand)
    }

    fn table(
        names: Vec<String>,
        stacks: Vec<Chips>,
        dealer: Position,
        bblind: Chips,
        holes: Vec<Hole>,
        deck: Option<Deck>,
    ) -> Result<Self, TableError> {
        let n = names.len();
        if n < 2 {
            return Err(TableError::invalid("at least two seats required"));
        }
        if stacks.len() != n || holes.len() != n {
            return Err(TableError::invalid("names, stacks and holes must align"));
        }
        if dealer >= n {
            return Err(TableError::invalid(format!("no seat {} to deal from", dealer)));
        }
        if bblind < 2 {
            return Err(TableError::invalid("big blind must cover a small blind"));
        }
        if stacks.iter().any(|c| *c <= 0) {
            return Err(TableError::invalid("every seat must start with chips"));
        }
        let mut dealt = CardSet::empty();
        for hole in holes.iter() {
            for card in hole.cards() {
                if dealt.contains(&card) {
                    return Err(TableError::invalid(format!("card {} dealt twice", card)));
                }
                dealt.insert(card);
            }
        }
        let seats = names
            .into_iter()
            .zip(stacks)
            .zip(holes)
            .enumerate()
            .map(|(i, ((name, stack), hole))| Seat::new(i, name, stack, hole))
            .collect::<Vec<Seat>>();
        Ok(Self {
            id: uuid::Uuid::now_v7(),
            seats,
            dealer,
            bblind,
            street: Street::Pref,
            board: Vec::new(),
            deck,
            blinds: 0,
            ticker: dealer,
            log: Vec::new(),
            payoffs: None,
        })
    }

    pub fn id(&self) -> HandId {
        self.id
    }
    pub fn n(&self) -> usize {
        self.seats.len()
    }
    pub fn dealer(&self) -> Position {
        self.dealer
    }
    pub fn bblind(&self) -> Chips {
        self.bblind
    }
    pub fn sblind(&self) -> Chips {
        self.bblind / 2
    }
    pub fn street(&self) -> Street {
        self.street
    }
    pub fn board(&self) -> &[Card] {
        &self.board
    }
    pub fn seats(&self) -> &[Seat] {
        &self.seats
    }
    pub fn seat(&self, position: Position) -> Result<&Seat, TableError> {
        self.seats
            .get(position)
            .ok_or_else(|| TableError::missing(format!("seat {}", position)))
    }
    pub fn log(&self) -> &[Play] {
        &self.log
    }
    /// Chips committed to the pot across all seats and streets.
    pub fn pot(&self) -> Chips {
        self.seats.iter().map(Seat::spent).sum()
    }
    /// Current stacks in seat order, net of any settlement.
    pub fn stacks(&self) -> Vec<Chips> {
        self.seats.iter().map(Seat::stack).collect()
    }
    /// Net chip deltas in seat order, available once the hand is over.
    pub fn payoffs(&self) -> Option<&[Chips]> {
        self.payoffs.as_deref()
    }
    pub fn is_complete(&self) -> bool {
        self.payoffs.is_some()
    }

    /// Whose move it is: a seat, the dealer, or nobody.
    pub fn turn(&self) -> Turn {
        if self.payoffs.is_some() {
            return Turn::Terminal;
        }
        if let Some((poster, _)) = self.owed_blind() {
            return Turn::Choice(poster);
        }
        if self.n_live() <= 1 {
            return Turn::Terminal;
        }
        if self.is_round_closed() {
            match self.street {
                Street::Rive => Turn::Terminal,
                _ => Turn::Chance,
            }
        } else {
            Turn::Choice(self.ticker)
        }
    }

    /// Actions available to the seat whose turn it is. `Raise` carries
    /// the smallest legal to-level; any higher coverable level is also
    /// accepted by `apply`.
    pub fn legal(&self) -> Vec<Action> {
        let Turn::Choice(position) = self.turn() else {
            return vec![];
        };
        if self.owed_blind().is_some() {
            return vec![];
        }
        let seat = &self.seats[position];
        let bet = self.current_bet();
        let owed = bet - seat.stake();
        let mut actions = Vec::new();
        if owed == 0 {
            actions.push(Action::Check);
        } else {
            actions.push(Action::Fold);
            actions.push(Action::Call);
        }
        if seat.stack() > owed {
            actions.push(Action::Raise(bet + 1));
        }
        actions.push(Action::Shove);
        actions
    }

    /// Submits one seat's decision and advances the hand, dealing any
    /// streets that the decision closes and settling if it ends the hand.
    pub fn apply(&mut self, seat: Position, action: Action) -> Result<(), TableError> {
        let event = self.resolve(seat, action)?;
        self.transition(Some(seat), &event)?;
        self.record(Some(seat), event);
        self.run_chances()?;
        self.conclude();
        Ok(())
    }

    /// Replays one stored record through the same transition as live play.
    pub(crate) fn step(&mut self, play: &Play) -> Result<(), TableError> {
        if play.seq as usize != self.log.len() {
            return Err(TableError::corrupt(format!(
                "play {} out of sequence at {}",
                play.seq,
                self.log.len()
            )));
        }
        self.transition(play.seat, &play.event)?;
        self.log.push(play.clone());
        self.conclude();
        Ok(())
    }

    /// Translates an intent into the event it would log. Amounts are
    /// computed here; legality is judged by `transition`.
    fn resolve(&self, position: Position, action: Action) -> Result<Event, TableError> {
        let seat = self.seat(position)?;
        Ok(match action {
            Action::Fold => Event::Fold,
            Action::Check => Event::Check,
            Action::Call => Event::Call((self.current_bet() - seat.stake()).min(seat.stack())),
            Action::Raise(to) => match to - seat.stake() {
                chips if chips == seat.stack() => Event::Shove(chips),
                chips => Event::Raise(chips),
            },
            Action::Shove => Event::Shove(seat.stack()),
        })
    }

    /// The single validator and mutator behind live play and replay.
    fn transition(&mut self, seat: Option<Position>, event: &Event) -> Result<(), TableError> {
        if self.payoffs.is_some() {
            return Err(TableError::invalid("hand is complete"));
        }
        match (seat, event) {
            (Some(position), Event::Blind(chips)) => {
                let (poster, owed) = self
                    .owed_blind()
                    .ok_or_else(|| TableError::invalid("blinds already posted"))?;
                if position != poster {
                    return Err(TableError::invalid(format!(
                        "blind from seat {} where seat {} owes",
                        position, poster
                    )));
                }
                if *chips != owed {
                    return Err(TableError::invalid(format!(
                        "blind of {} where {} is owed",
                        chips, owed
                    )));
                }
                self.seats[position].bet(owed);
                self.blinds += 1;
                if self.blinds == 2 {
                    let bb = self.bb_seat();
                    self.ticker = self.next_betting(bb).unwrap_or(bb);
                }
                Ok(())
            }
            (None, Event::Draw(cards)) => {
                if self.turn() != Turn::Chance {
                    return Err(TableError::invalid("no street to reveal"));
                }
                let street = self.street.next();
                if cards.len() != street.n_revealed() {
                    return Err(TableError::invalid(format!(
                        "{} reveals {} cards, got {}",
                        street,
                        street.n_revealed(),
                        cards.len()
                    )));
                }
                let mut seen = self.visible();
                for card in cards {
                    if seen.contains(card) {
                        return Err(TableError::invalid(format!("card {} already in play", card)));
                    }
                    seen.insert(*card);
                }
                self.board.extend_from_slice(cards);
                self.street = street;
                for seat in self.seats.iter_mut() {
                    seat.next_street();
                }
                self.ticker = self.next_betting(self.dealer).unwrap_or(self.dealer);
                Ok(())
            }
            (Some(position), event) if event.is_choice() => {
                if self.owed_blind().is_some() {
                    return Err(TableError::invalid("blinds not yet posted"));
                }
                if self.turn() != Turn::Choice(position) {
                    return Err(TableError::invalid(format!(
                        "seat {} acting out of turn",
                        position
                    )));
                }
                let bet = self.current_bet();
                let stake = self.seats[position].stake();
                let stack = self.seats[position].stack();
                match event {
                    Event::Fold => self.seats[position].fold(),
                    Event::Check => {
                        if stake != bet {
                            return Err(TableError::invalid("cannot check facing a bet"));
                        }
                    }
                    Event::Call(chips) => {
                        let owed = bet - stake;
                        if owed <= 0 {
                            return Err(TableError::invalid("nothing to call"));
                        }
                        if *chips != owed.min(stack) {
                            return Err(TableError::invalid(format!(
                                "call of {} where {} is owed",
                                chips,
                                owed.min(stack)
                            )));
                        }
                        self.seats[position].bet(*chips);
                    }
                    Event::Raise(chips) => {
                        if *chips > stack {
                            return Err(TableError::invalid(format!(
                                "raise of {} exceeds stack of {}",
                                chips, stack
                            )));
                        }
                        if stake + chips <= bet {
                            return Err(TableError::invalid(format!(
                                "raise to {} does not exceed bet of {}",
                                stake + chips,
                                bet
                            )));
                        }
                        self.seats[position].bet(*chips);
                    }
                    Event::Shove(chips) => {
                        if *chips != stack {
                            return Err(TableError::invalid(format!(
                                "shove of {} with a stack of {}",
                                chips, stack
                            )));
                        }
                        self.seats[position].bet(stack);
                    }
                    _ => return Err(TableError::invalid("malformed event")),
                }
                self.seats[position].touch();
                // a raise reopens action for everyone still betting
                if self.seats[position].stake() > bet {
                    for other in self.seats.iter_mut() {
                        if other.position() != position && other.state() == State::Betting {
                            other.untouch();
                        }
                    }
                }
                if !self.is_round_closed() && self.n_live() > 1 {
                    if let Some(next) = self.next_betting(position) {
                        self.ticker = next;
                    }
                }
                Ok(())
            }
            _ => Err(TableError::invalid("malformed event source")),
        }
    }

    fn post_blinds(&mut self) -> Result<(), TableError> {
        while let Some((poster, owed)) = self.owed_blind() {
            let event = Event::Blind(owed);
            self.transition(Some(poster), &event)?;
            self.record(Some(poster), event);
        }
        Ok(())
    }

    /// Deals streets from the owned deck until a seat must act or the hand
    /// ends. Scripted hands exit immediately and take draws from the log.
    fn run_chances(&mut self) -> Result<(), TableError> {
        while self.turn() == Turn::Chance {
            let street = self.street.next();
            let Some(deck) = self.deck.as_mut() else {
                return Ok(());
            };
            let cards = deck
                .reveal(street)
                .ok_or_else(|| TableError::corrupt("deck exhausted mid-hand"))?;
            let event = Event::Draw(cards);
            self.transition(None, &event)?;
            self.record(None, event);
        }
        Ok(())
    }

    /// Settles the pot once the hand reaches a terminal state.
    fn conclude(&mut self) {
        if self.payoffs.is_none() && self.turn() == Turn::Terminal {
            let mut payoffs = vec![0; self.n()];
            for row in self.settle() {
                payoffs[row.position()] = row.pnl();
                self.seats[row.position()].win(row.reward());
            }
            log::debug!("hand {} settled {:?}", self.id, payoffs);
            self.payoffs = Some(payoffs);
        }
    }

    /// Builds the ledger clockwise from the dealer so odd chips land on
    /// the earliest winning seat, then pays out every pot layer.
    fn settle(&self) -> Vec<Settlement> {
        let n = self.n();
        let ledger = (1..=n)
            .map(|i| (self.dealer + i) % n)
            .map(|p| &self.seats[p])
            .map(|s| Settlement::from((s.position(), s.spent(), s.state(), self.strength(s))))
            .collect::<Vec<Settlement>>();
        Showdown::from(ledger).settle()
    }

    /// Every card already dealt: all hole cards plus the board.
    fn visible(&self) -> CardSet {
        self.seats
            .iter()
            .map(|s| CardSet::from(s.hole()))
            .fold(CardSet::from(self.board.as_slice()), CardSet::merge)
    }

    fn strength(&self, seat: &Seat) -> Strength {
        let hole = CardSet::from(seat.hole());
        let board = CardSet::from(self.board.as_slice());
        Strength::from(CardSet::merge(hole, board))
    }

    fn record(&mut self, seat: Option<Position>, event: Event) {
        let play = Play::new(self.log.len() as u32, seat, event);
        log::trace!("hand {} {}", self.id, play);
        self.log.push(play);
    }

    fn sb_seat(&self) -> Position {
        match self.n() {
            2 => self.dealer,
            n => (self.dealer + 1) % n,
        }
    }
    fn bb_seat(&self) -> Position {
        match self.n() {
            2 => (self.dealer + 1) % 2,
            n => (self.dealer + 2) % n,
        }
    }

    /// The blind still to be posted, capped at the poster's stack.
    fn owed_blind(&self) -> Option<(Position, Chips)> {
        match self.blinds {
            0 => {
                let poster = self.sb_seat();
                Some((poster, self.sblind().min(self.seats[poster].stack())))
            }
            1 => {
                let poster = self.bb_seat();
                Some((poster, self.bblind.min(self.seats[poster].stack())))
            }
            _ => None,
        }
    }

    /// Highest street commitment across all seats.
    fn current_bet(&self) -> Chips {
        self.seats.iter().map(Seat::stake).max().unwrap_or(0)
    }

    fn n_live(&self) -> usize {
        self.seats.iter().filter(|s| s.is_live()).count()
    }

    fn next_betting(&self, from: Position) -> Option<Position> {
        let n = self.n();
        (1..=n)
            .map(|i| (from + i) % n)
            .find(|p| self.seats[*p].state() == State::Betting)
    }

    /// A round is closed when every live seat has matched the bet or is
    /// all-in, and nobody still betting is owed a decision.
    fn is_round_closed(&self) -> bool {
        let bet = self.current_bet();
        let matched = self
            .seats
            .iter()
            .filter(|s| s.is_live())
            .all(|s| s.state() == State::Shoving || s.stake() == bet);
        let bettors = self
            .seats
            .iter()
            .filter(|s| s.state() == State::Betting)
            .collect::<Vec<&Seat>>();
        matched && (bettors.len() <= 1 || bettors.iter().all(|s| s.has_acted()))
    }
}

impl std::fmt::Display for Hand {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        writeln!(f, "{} {} pot {}", self.id, self.street, self.pot())?;
        for card in self.board.iter() {
            write!(f, "{}", card)?;
        }
        writeln!(f)?;
        for seat in self.seats.iter() {
            writeln!(f, "{}", seat)?;
        }
        Ok(())
    }
}

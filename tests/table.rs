//! End-to-end coverage through the public surface: room, hand, replay.

use holdem_engine::Action;
use holdem_engine::Chips;
use holdem_engine::Hand;
use holdem_engine::Setup;
use holdem_engine::Street;
use holdem_engine::TableError;
use holdem_engine::Turn;
use holdem_engine::players::Caller;
use holdem_engine::players::Fish;
use holdem_engine::players::Policy;
use holdem_engine::replay;
use holdem_engine::room::Room;

fn names(n: usize) -> Vec<String> {
    (0..n).map(|i| format!("p{}", i)).collect()
}

fn callers(n: usize) -> Vec<Option<Box<dyn Policy>>> {
    (0..n)
        .map(|i| match i {
            0 => None,
            _ => Some(Box::new(Caller) as Box<dyn Policy>),
        })
        .collect()
}

#[test]
fn checked_down_hand_moves_one_big_blind() {
    // two seats, blinds 20/40, every street checked through: the winner
    // nets exactly the loser's big blind
    let room = Room::new();
    let mut snap = room
        .start_hand(names(2), vec![1000, 1000], 0, 40, callers(2))
        .unwrap();
    snap = room.submit(snap.id, 0, Action::Call).unwrap();
    assert_eq!(snap.street, Street::Flop);
    while snap.payoffs.is_none() {
        snap = room.submit(snap.id, 0, Action::Check).unwrap();
    }
    let payoffs = snap.payoffs.unwrap();
    assert_eq!(payoffs.iter().sum::<Chips>(), 0);
    assert!(payoffs == vec![40, -40] || payoffs == vec![-40, 40] || payoffs == vec![0, 0]);
    assert_eq!(snap.stacks.iter().sum::<Chips>(), 2000);
}

#[test]
fn three_way_all_in_respects_coverage() {
    // stacks 100/500/500: the short stack can never win more than 200
    // from each opponent no matter how the cards fall
    for seed in 0..16 {
        let mut hand =
            Hand::start_seeded(names(3), vec![100, 500, 500], 0, 40, seed).unwrap();
        while let Turn::Choice(seat) = hand.turn() {
            hand.apply(seat, Action::Shove).unwrap();
        }
        let payoffs = hand.payoffs().unwrap();
        assert_eq!(payoffs.iter().sum::<Chips>(), 0);
        assert!(payoffs[0] <= 200);
        assert_eq!(hand.stacks().iter().sum::<Chips>(), 1100);
    }
}

#[test]
fn every_outcome_survives_an_audit() {
    for seed in 0..32 {
        let n = 2 + (seed as usize % 4);
        let stacks = (0..n).map(|i| 200 + 150 * i as Chips).collect::<Vec<Chips>>();
        let total = stacks.iter().sum::<Chips>();
        let mut hand = Hand::start_seeded(names(n), stacks, seed as usize % n, 20, seed).unwrap();
        let mut fish = Fish::seeded(seed);
        while let Turn::Choice(seat) = hand.turn() {
            let action = fish.decide(&hand, seat);
            hand.apply(seat, action).unwrap();
            // mid-hand, stacks plus pot always account for every chip
            if !hand.is_complete() {
                assert_eq!(hand.stacks().iter().sum::<Chips>() + hand.pot(), total);
            }
        }
        let setup = Setup::from(&hand);
        let payoffs = hand.payoffs().unwrap();
        replay::verify(&setup, hand.log(), payoffs).unwrap();
        assert_eq!(payoffs.iter().sum::<Chips>(), 0);
        assert_eq!(hand.stacks().iter().sum::<Chips>(), total);
    }
}

#[test]
fn logs_survive_a_serde_round_trip() {
    let mut hand = Hand::start_seeded(names(2), vec![500, 500], 0, 20, 42).unwrap();
    let mut fish = Fish::seeded(42);
    while let Turn::Choice(seat) = hand.turn() {
        let action = fish.decide(&hand, seat);
        hand.apply(seat, action).unwrap();
    }
    let setup = serde_json::to_string(&Setup::from(&hand)).unwrap();
    let plays = serde_json::to_string(hand.log()).unwrap();
    let setup = serde_json::from_str(&setup).unwrap();
    let plays: Vec<holdem_engine::Play> = serde_json::from_str(&plays).unwrap();
    assert_eq!(
        replay::replay(&setup, &plays).unwrap(),
        hand.payoffs().unwrap().to_vec()
    );
}

#[test]
fn room_rejects_out_of_turn_and_keeps_state() {
    let room = Room::new();
    let snap = room
        .start_hand(names(3), vec![400, 400, 400], 1, 40, callers(3))
        .unwrap();
    let err = room.submit(snap.id, 2, Action::Fold).unwrap_err();
    assert!(matches!(err, TableError::InvalidAction(_)));
    assert_eq!(room.snapshot(snap.id).unwrap(), snap);
}

#[test]
fn removed_hand_is_gone() {
    let room = Room::new();
    let snap = room
        .start_hand(names(2), vec![400, 400], 0, 40, callers(2))
        .unwrap();
    room.submit(snap.id, 0, Action::Fold).unwrap();
    room.remove(snap.id).unwrap();
    assert!(matches!(
        room.snapshot(snap.id),
        Err(TableError::NotFound(_))
    ));
}

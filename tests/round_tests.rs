//! Turn and round lifecycle tests.
//!
//! Matches here run over unshuffled decks so the opening hands and every
//! draw are known in advance.

mod common;

use common::scripted_engine;
use influence_ccg::cards::CardId;
use influence_ccg::core::{CardUid, FixedRng, MatchConfig, MatchPhase, PlayerId, PlayerMap};
use influence_ccg::effects::EffectEvent;
use influence_ccg::games::starter::{ids, StarterBuilder};
use influence_ccg::rules::{ActionOutcome, GameResult, MatchActions, MatchEngine, Rejection};

const P1: PlayerId = PlayerId::ONE;
const P2: PlayerId = PlayerId::TWO;

fn backbenchers(count: usize) -> Vec<CardId> {
    vec![ids::BACKBENCHER; count]
}

fn first_in_hand(engine: &MatchEngine<FixedRng>, player: PlayerId, id: CardId) -> CardUid {
    engine
        .state()
        .player(player)
        .hand
        .iter()
        .find(|c| c.template == id)
        .map(|c| c.uid)
        .expect("card in hand")
}

#[test]
fn test_opening_deal() {
    let engine = scripted_engine(backbenchers(10), backbenchers(10), vec![]);
    let state = engine.state();

    assert_eq!(state.round, 1);
    assert_eq!(state.turn, 1);
    assert_eq!(state.phase, MatchPhase::PlayerTurn(P1));
    assert_eq!(state.player(P1).hand.len(), 5);
    assert_eq!(state.player(P2).hand.len(), 5);
    assert_eq!(state.player(P1).ap, 2);
}

#[test]
fn test_turn_alternation_draws_and_resets_ap() {
    let mut engine = scripted_engine(backbenchers(10), backbenchers(10), vec![]);
    let uid = first_in_hand(&engine, P1, ids::BACKBENCHER);
    engine.submit_play(P1, uid);
    assert_eq!(engine.state().player(P1).ap, 1);

    engine.end_turn(P1);

    let state = engine.state();
    assert_eq!(state.phase, MatchPhase::PlayerTurn(P2));
    assert_eq!(state.player(P2).hand.len(), 6);
    assert_eq!(state.player(P2).ap, 2);
    assert_eq!(state.turn, 2);
}

#[test]
fn test_round_resolution_seven_to_four() {
    let mut one = vec![ids::CABINET_MINISTER];
    one.extend(backbenchers(9));
    let mut engine = scripted_engine(one, backbenchers(12), vec![]);

    let minister = first_in_hand(&engine, P1, ids::CABINET_MINISTER);
    assert!(engine.submit_play(P1, minister).is_applied());
    engine.end_turn(P1);

    for _ in 0..2 {
        let uid = first_in_hand(&engine, P2, ids::BACKBENCHER);
        assert!(engine.submit_play(P2, uid).is_applied());
    }
    engine.end_turn(P2);

    let uid = first_in_hand(&engine, P1, ids::BACKBENCHER);
    assert!(engine.submit_play(P1, uid).is_applied());
    assert_eq!(engine.influence(P1), 7);
    assert_eq!(engine.influence(P2), 4);
    engine.submit_pass(P1);
    assert_eq!(engine.state().phase, MatchPhase::PlayerTurn(P2));
    engine.submit_pass(P2);

    let state = engine.state();
    assert_eq!(state.player(P1).round_wins, 1);
    assert_eq!(state.player(P2).round_wins, 0);
    assert_eq!(state.round, 2);
    assert!(state.log.iter().any(|l| l == "Round 1: 7 to 4, Player 1 wins the round"));

    for player in PlayerId::all() {
        let ps = state.player(player);
        assert!(ps.board.is_empty());
        assert_eq!(ps.discard.len(), 2);
        assert_eq!(ps.hand.len(), 5);
        assert!(!ps.flags.passed);
    }
    assert!(state.first_passer.is_none());
    // The loser opens the next round.
    assert_eq!(state.phase, MatchPhase::PlayerTurn(P2));
}

#[test]
fn test_tie_goes_to_first_passer() {
    let mut engine = scripted_engine(backbenchers(10), backbenchers(10), vec![]);

    engine.submit_pass(P1);
    engine.submit_pass(P2);

    assert_eq!(engine.state().player(P1).round_wins, 1);
    assert_eq!(engine.state().phase, MatchPhase::PlayerTurn(P2));
}

#[test]
fn test_passed_player_is_skipped() {
    let mut engine = scripted_engine(backbenchers(10), backbenchers(10), vec![]);

    engine.submit_pass(P1);
    let hand = engine.state().player(P2).hand.len();
    engine.end_turn(P2);

    // P2 keeps the turn and draws again; P1 stays out.
    assert_eq!(engine.state().phase, MatchPhase::PlayerTurn(P2));
    assert_eq!(engine.state().player(P2).hand.len(), hand + 1);
    assert_eq!(
        engine.end_turn(P1),
        ActionOutcome::Rejected(Rejection::NotYourTurn(P1))
    );
}

#[test]
fn test_match_ends_after_two_round_wins() {
    let mut engine = scripted_engine(backbenchers(12), backbenchers(12), vec![]);

    // Round 1: tie, P1 passed first.
    engine.submit_pass(P1);
    engine.submit_pass(P2);

    // Round 2: P2 opens and passes, P1 takes it with a single card.
    engine.submit_pass(P2);
    let uid = first_in_hand(&engine, P1, ids::BACKBENCHER);
    engine.submit_play(P1, uid);
    engine.submit_pass(P1);

    assert_eq!(engine.result(), Some(GameResult::Winner(P1)));
    assert!(engine.state().log.iter().any(|l| l == "Player 1 wins the match"));
    assert_eq!(
        engine.submit_pass(P2),
        ActionOutcome::Rejected(Rejection::GameOver)
    );
    assert_eq!(
        engine.resolve_selection(P1, None),
        ActionOutcome::Rejected(Rejection::GameOver)
    );
}

#[test]
fn test_exhaustion_after_discard_loses() {
    let mut engine = scripted_engine(backbenchers(10), backbenchers(5), vec![]);
    engine.submit_events([EffectEvent::DiscardRandom { player: P2, count: 5 }]);

    assert!(engine.state().player(P2).is_exhausted());
    assert_eq!(engine.result(), Some(GameResult::Winner(P1)));
    assert!(engine.state().log.iter().any(|l| l == "Player 2 has no cards left"));
    assert_eq!(
        engine.end_turn(P1),
        ActionOutcome::Rejected(Rejection::GameOver)
    );
}

#[test]
fn test_playing_last_card_loses_immediately() {
    common::init_tracing();
    let config = MatchConfig::default().with_hand_size(1).with_rounds_to_win(1);
    let mut engine = StarterBuilder::new()
        .config(config)
        .decks(PlayerMap::from_pair(backbenchers(1), backbenchers(5)))
        .build_with_rng(FixedRng::new(vec![]))
        .unwrap();
    assert_eq!(engine.result(), None);

    let uid = first_in_hand(&engine, P1, ids::BACKBENCHER);
    assert!(engine.submit_play(P1, uid).is_applied());

    // P1 would take the round on influence, but never gets to pass.
    assert_eq!(engine.result(), Some(GameResult::Winner(P2)));
    assert_eq!(engine.state().round, 1);
    assert_eq!(
        engine.submit_pass(P1),
        ActionOutcome::Rejected(Rejection::GameOver)
    );
}

#[test]
fn test_bonus_ap_and_skipped_draw() {
    let mut engine = scripted_engine(backbenchers(10), backbenchers(10), vec![]);
    engine.submit_events([
        EffectEvent::GrantBonusAp { player: P2, amount: 1 },
        EffectEvent::SkipNextDraw { player: P2 },
    ]);

    engine.end_turn(P1);

    let ps = engine.state().player(P2);
    assert_eq!(ps.ap, 3);
    assert_eq!(ps.hand.len(), 5);
    assert_eq!(ps.flags.bonus_ap_next_turn, 0);
    assert!(!ps.flags.skip_next_draw);
    assert!(engine.state().log.iter().any(|l| l == "Player 2 skips their draw"));
}

#[test]
fn test_mirror_flag_expires_at_own_turn_start() {
    let mut engine = scripted_engine(vec![ids::MIRROR_POLICY; 10], backbenchers(10), vec![]);
    let uid = first_in_hand(&engine, P1, ids::MIRROR_POLICY);
    engine.submit_play(P1, uid);
    assert!(engine.state().player(P1).flags.mirror_ap);

    engine.end_turn(P1);
    assert!(engine.state().player(P1).flags.mirror_ap);
    // The instant went to the discard at end of turn.
    assert_eq!(engine.state().player(P1).discard.len(), 1);

    engine.end_turn(P2);
    assert!(!engine.state().player(P1).flags.mirror_ap);
}

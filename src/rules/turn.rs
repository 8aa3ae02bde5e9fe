//! Turn and round state machine.
//!
//! ```text
//! PlayerTurn(p) --end turn--> PlayerTurn(other(p))   (p continues if other(p) passed)
//!               --both passed--> RoundResolution --> PlayerTurn(loser) | GameOver
//! ```
//!
//! Start-of-turn hooks clear the incoming player's short-lived flags, reset
//! AP to the baseline plus any bonus, draw one card (unless the player has
//! passed or must skip the draw) and check both seats for exhaustion. Draws go through
//! the effect processor so opportunist reactions apply.

use crate::core::{MatchPhase, MatchState, PlayerFlags, PlayerId, RandomSource};
use crate::effects::{EffectEvent, EffectProcessor};

use super::actions::GameResult;

/// Deal opening hands and start the first turn.
///
/// Decks must already be shuffled. The opening player does not draw.
pub fn begin_match<R: RandomSource + ?Sized>(proc: &mut EffectProcessor<'_, R>) {
    let hand_size = proc.state.config.hand_size as u32;
    for player in PlayerId::all() {
        proc.state.draw_cards(player, hand_size);
    }
    proc.state.round = 1;
    proc.state.turn = 0;
    proc.state.log("Round 1 begins");
    if check_exhaustion(proc.state, &[PlayerId::ONE, PlayerId::TWO]) {
        return;
    }
    let first = proc.state.config.first_player;
    start_turn(proc, first, false);
}

/// Start `player`'s turn.
pub fn start_turn<R: RandomSource + ?Sized>(proc: &mut EffectProcessor<'_, R>, player: PlayerId, draw: bool) {
    let state = &mut *proc.state;
    state.turn += 1;
    state.phase = MatchPhase::PlayerTurn(player);

    let ap_per_turn = state.config.ap_per_turn;
    let ps = state.player_mut(player);
    ps.flags.mirror_ap = false;
    ps.flags.opportunist = false;
    ps.ap = ap_per_turn + std::mem::take(&mut ps.flags.bonus_ap_next_turn);
    let ap = ps.ap;
    let passed = ps.flags.passed;
    let skip = std::mem::take(&mut ps.flags.skip_next_draw);

    tracing::debug!(%player, turn = state.turn, ap, "turn start");
    state.log(format!("Turn {}: {player} has {ap} AP", state.turn));

    if draw && !passed {
        if skip {
            state.log(format!("{player} skips their draw"));
        } else {
            proc.run([EffectEvent::DrawCards { player, count: 1 }]);
        }
    }
    check_exhaustion(proc.state, &[PlayerId::ONE, PlayerId::TWO]);
}

/// Finish `player`'s turn and advance.
pub fn end_turn<R: RandomSource + ?Sized>(proc: &mut EffectProcessor<'_, R>, player: PlayerId) {
    proc.run([EffectEvent::ClearInstantLane { player }]);

    let opponent = player.other();
    let passed = |p: PlayerId| proc.state.player(p).flags.passed;
    if passed(player) && passed(opponent) {
        resolve_round(proc);
        return;
    }
    let next = if passed(opponent) { player } else { opponent };
    start_turn(proc, next, true);
}

/// `player` passes for the rest of the round.
pub fn pass<R: RandomSource + ?Sized>(proc: &mut EffectProcessor<'_, R>, player: PlayerId) {
    let state = &mut *proc.state;
    state.player_mut(player).flags.passed = true;
    state.first_passer.get_or_insert(player);
    state.log(format!("{player} passes"));
    end_turn(proc, player);
}

/// Score the round, then either end the match or set up the next round.
pub fn resolve_round<R: RandomSource + ?Sized>(proc: &mut EffectProcessor<'_, R>) {
    proc.state.phase = MatchPhase::RoundResolution;

    let one = proc.auras.derived_influence(proc.state, PlayerId::ONE);
    let two = proc.auras.derived_influence(proc.state, PlayerId::TWO);
    let state = &mut *proc.state;
    let winner = match one.cmp(&two) {
        std::cmp::Ordering::Greater => PlayerId::ONE,
        std::cmp::Ordering::Less => PlayerId::TWO,
        std::cmp::Ordering::Equal => state.first_passer.unwrap_or(state.config.first_player),
    };
    let wins = {
        let ps = state.player_mut(winner);
        ps.round_wins += 1;
        ps.round_wins
    };
    tracing::info!(round = state.round, %winner, one, two, "round resolved");
    state.log(format!("Round {}: {one} to {two}, {winner} wins the round", state.round));

    if wins >= state.config.rounds_to_win {
        finish(state, GameResult::Winner(winner));
        return;
    }

    clear_round(state);
    state.round += 1;
    let hand_size = state.config.hand_size;
    for player in PlayerId::all() {
        let missing = hand_size.saturating_sub(state.player(player).hand.len());
        state.draw_cards(player, missing as u32);
    }
    state.log(format!("Round {} begins", state.round));

    if check_exhaustion(state, &[PlayerId::ONE, PlayerId::TWO]) {
        return;
    }
    start_turn(proc, winner.other(), false);
}

/// Move every board card to its controller's discard and reset round state.
fn clear_round(state: &mut MatchState) {
    for player in PlayerId::all() {
        let cleared = state.player_mut(player).board.clear();
        for card in cleared {
            state.discard(player, card);
        }
        let ps = state.player_mut(player);
        ps.traps.clear();
        ps.flags = PlayerFlags::default();
    }
    state.shielded.clear();
    state.pending = None;
    state.first_passer = None;
}

/// End the match if any of `candidates` has neither deck nor hand.
///
/// Returns whether the match is now over.
pub fn check_exhaustion(state: &mut MatchState, candidates: &[PlayerId]) -> bool {
    let exhausted: Vec<PlayerId> = candidates
        .iter()
        .copied()
        .filter(|p| state.player(*p).is_exhausted())
        .collect();

    let result = match exhausted.as_slice() {
        [] => return false,
        [loser] => {
            state.log(format!("{loser} has no cards left"));
            GameResult::Winner(loser.other())
        }
        _ => {
            state.log("Both players have run out of cards");
            let one = state.player(PlayerId::ONE).round_wins;
            let two = state.player(PlayerId::TWO).round_wins;
            match one.cmp(&two) {
                std::cmp::Ordering::Greater => GameResult::Winner(PlayerId::ONE),
                std::cmp::Ordering::Less => GameResult::Winner(PlayerId::TWO),
                std::cmp::Ordering::Equal => GameResult::Draw,
            }
        }
    };
    finish(state, result);
    true
}

fn finish(state: &mut MatchState, result: GameResult) {
    state.phase = MatchPhase::GameOver(result);
    state.pending = None;
    tracing::info!(?result, round = state.round, "match over");
    match result {
        GameResult::Winner(p) => state.log(format!("{p} wins the match")),
        GameResult::Draw => state.log("The match is a draw"),
    }
}

//! Trap registration and evaluation.
//!
//! Traps live in [`PlayerState::traps`](crate::core::PlayerState) so they
//! travel with snapshots; the registry is a stateless set of operations
//! over that list. Evaluation scans the opponent of the placer in
//! registration order and consumes every trap whose predicate matches.

use crate::core::{CardUid, MatchState, PlayerId};
use crate::effects::EffectEvent;
use crate::signals::UiSignal;

use super::trap::{Trap, TrapKind};

/// Operations over the per-player trap lists.
pub struct TrapRegistry;

impl TrapRegistry {
    /// Append a trap to `owner`'s list.
    pub fn register(state: &mut MatchState, owner: PlayerId, kind: TrapKind) {
        state.player_mut(owner).traps.push_back(Trap::new(kind, owner));
        state.log(format!("{owner} sets a hidden trap"));
    }

    /// Register a trap by its string key.
    ///
    /// Unknown keys are logged and ignored. Returns whether a trap was set.
    pub fn register_key(state: &mut MatchState, owner: PlayerId, key: &str) -> bool {
        match key.parse::<TrapKind>() {
            Ok(kind) => {
                Self::register(state, owner, kind);
                true
            }
            Err(_) => {
                tracing::warn!(key, "unknown trap key");
                state.log(format!("Unknown trap `{key}` ignored"));
                false
            }
        }
    }

    /// Remove `owner`'s oldest trap, if any.
    pub fn disarm_oldest(state: &mut MatchState, owner: PlayerId) -> Option<Trap> {
        let trap = state.player_mut(owner).traps.pop_front();
        match trap {
            Some(trap) => state.log(format!("{owner}'s {} trap is disarmed", trap.kind)),
            None => state.log(format!("{owner} has no trap to disarm")),
        }
        trap
    }

    /// Evaluate the opponent's traps against a card `placer` just put on the board.
    ///
    /// Every matching trap is removed. A shielded card absorbs the first
    /// trap that matches it and loses the shield; later traps apply
    /// normally. Returns the follow-up events in firing order.
    pub fn evaluate(state: &mut MatchState, placer: PlayerId, uid: CardUid) -> Vec<EffectEvent> {
        let Some((_, _, card)) = state.board_card(uid) else {
            state.log(format!("Trap check skipped: {uid} is not on the board"));
            return Vec::new();
        };
        let card = card.clone();
        let opponent = placer.other();

        let traps = std::mem::take(&mut state.player_mut(opponent).traps);
        let (sprung, kept): (Vec<Trap>, Vec<Trap>) = traps.into_iter().partition(|t| t.kind.matches(&card));
        state.player_mut(opponent).traps = kept.into_iter().collect();

        let mut events = Vec::new();
        for trap in sprung {
            tracing::debug!(kind = %trap.kind, %uid, "trap sprung");
            if state.shielded.remove(&uid).is_some() {
                state.log(format!("{card} is shielded; {}'s {} trap has no effect", trap.owner, trap.kind));
                continue;
            }
            state.log(format!("{}'s {} trap springs on {card}", trap.owner, trap.kind));
            events.push(EffectEvent::Notify(UiSignal::TrapSprung { owner: trap.owner, uid }));
            events.extend(trap.kind.response(placer, &card));
        }
        events
    }
}

//! Dice-based steal: START and RESOLVE.
//!
//! START validates that the victim has something worth taking, records the
//! pending selection and asks the UI for input. RESOLVE rolls one die,
//! applies board modifiers and compares against the threshold. The pending
//! selection is cleared on every RESOLVE path once the acting player has
//! been confirmed.

use crate::aura::AuraCalculator;
use crate::cards::{Card, CardTag};
use crate::core::{CardUid, MatchState, PlayerId, RandomSource};
use crate::effects::targeting::{is_vulnerable, pick_government, Pick};
use crate::effects::EffectEvent;
use crate::signals::UiSignal;
use crate::zones::Lane;

use super::{PendingSelection, SelectionKind, StealVariant};

/// Outcome of one steal roll.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StealRoll {
    /// Raw die face.
    pub roll: u32,
    /// Die face plus modifiers.
    pub total: i32,
    pub needed: i32,
    pub success: bool,
}

/// Cards of `victim` that a steal may target.
pub fn eligible_targets(state: &MatchState, victim: PlayerId) -> impl Iterator<Item = &Card> {
    state
        .player(victim)
        .board
        .lane(Lane::Government)
        .iter()
        .filter(|c| is_vulnerable(c))
}

/// Modifier applied to `thief`'s roll.
#[must_use]
pub fn roll_modifier(state: &MatchState, thief: PlayerId) -> i32 {
    let config = &state.config;
    let allies = state
        .player(thief)
        .board
        .lane(Lane::Public)
        .iter()
        .filter(|c| c.is_active())
        .count() as i32;
    let watched = state
        .player(thief.other())
        .board
        .cards()
        .any(|c| c.has_tag(CardTag::Watchdog));

    let mut modifier = allies * config.steal_ally_bonus;
    if watched {
        modifier -= config.steal_watchdog_penalty;
    }
    modifier
}

/// Begin a steal for `player`.
pub fn start_steal(
    state: &mut MatchState,
    auras: &AuraCalculator,
    player: PlayerId,
    variant: StealVariant,
) -> Vec<EffectEvent> {
    if state.pending.is_some() {
        state.log(format!("{player}'s {variant} fizzles: a selection is already pending"));
        return Vec::new();
    }
    let victim = player.other();
    if eligible_targets(state, victim).next().is_none() {
        state.log(format!("{player}'s {variant} has no eligible target"));
        return Vec::new();
    }

    let (target, required_roll) = match variant {
        StealVariant::Bribe => (None, None),
        StealVariant::Blackmail => {
            let target = pick_government(state, auras, victim, Pick::Weakest, is_vulnerable);
            let active = state
                .player(victim)
                .board
                .lane(Lane::Government)
                .iter()
                .filter(|c| c.is_active())
                .count() as i32;
            (target, Some(state.config.blackmail_base_roll + active))
        }
    };

    let pending = PendingSelection {
        kind: SelectionKind::Steal(variant),
        acting_player: player,
        target,
        required_roll,
    };
    state.pending = Some(pending);
    state.log(format!("{player} attempts a {variant}"));
    tracing::debug!(%player, %variant, ?target, ?required_roll, "steal started");

    vec![EffectEvent::Notify(UiSignal::SelectionRequested {
        player,
        kind: pending.kind,
        target,
        required_roll,
    })]
}

/// Resolve `player`'s pending steal.
///
/// `target` overrides the pre-selected target, if any.
pub fn resolve_steal<R: RandomSource + ?Sized>(
    state: &mut MatchState,
    auras: &AuraCalculator,
    rng: &mut R,
    player: PlayerId,
    target: Option<CardUid>,
) -> Vec<EffectEvent> {
    let Some(pending) = state.pending else {
        state.log(format!("{player} has no steal to resolve"));
        return Vec::new();
    };
    if pending.acting_player != player {
        state.log(format!("{player} cannot resolve {}'s selection", pending.acting_player));
        return Vec::new();
    }
    state.pending = None;

    let Some(uid) = target.or(pending.target) else {
        state.log(format!("{player}'s steal has no target"));
        return Vec::new();
    };
    let victim = player.other();
    let Some(card) = eligible_targets(state, victim).find(|c| c.uid == uid) else {
        state.log(format!("{player}'s steal target {uid} is not eligible"));
        return Vec::new();
    };
    let name = card.to_string();

    let needed = match pending.required_roll {
        Some(needed) => needed,
        None => auras.card_strength(state, uid).unwrap_or(0),
    };
    let roll = rng.roll_die(state.config.die_sides);
    let total = roll as i32 + roll_modifier(state, player);
    let outcome = StealRoll {
        roll,
        total,
        needed,
        success: total >= needed,
    };
    tracing::debug!(%player, %uid, ?outcome, "steal rolled");

    let mut events = vec![EffectEvent::Notify(UiSignal::StealRolled {
        player,
        target: uid,
        roll,
        total,
        needed,
        success: outcome.success,
    })];
    if outcome.success {
        state.log(format!("{player} rolls {roll} ({total} vs {needed}) and steals {name}"));
        events.push(EffectEvent::TransferCard { uid, to: player });
    } else {
        state.log(format!("{player} rolls {roll} ({total} vs {needed}) and fails to steal {name}"));
    }
    events
}

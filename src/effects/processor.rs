//! Effect queue processor.
//!
//! The processor is the only interpreter of [`EffectEvent`]s. It pops
//! events from the front of an [`EffectQueue`] and applies each one to the
//! match state; handlers never call back into the processor, they only
//! push follow-ups onto the queue they were handed. A drain always leaves
//! the queue empty.
//!
//! Missing references (a uid that has left the board, an empty lane for a
//! "strongest" effect) are logged no-ops. Nothing a handler does can abort
//! the drain.

use crate::aura::AuraCalculator;
use crate::cards::Placement;
use crate::core::{CardUid, MatchState, PlayerId, RandomSource};
use crate::selection::{resolve_steal, start_steal};
use crate::signals::{SignalHub, UiSignal};
use crate::triggers::TrapRegistry;
use crate::zones::Lane;

use super::event::EffectEvent;
use super::queue::EffectQueue;
use super::targeting::{pick_government, strongest_government, weakest_government, Pick};

/// Summary of one drain.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DrainReport {
    /// Events applied.
    pub processed: usize,
    /// The per-drain budget ran out and the rest of the queue was dropped.
    pub truncated: bool,
}

/// Applies effect events to a match.
pub struct EffectProcessor<'a, R: RandomSource + ?Sized> {
    pub state: &'a mut MatchState,
    pub rng: &'a mut R,
    pub hub: &'a mut SignalHub,
    pub auras: AuraCalculator,
}

impl<'a, R: RandomSource + ?Sized> EffectProcessor<'a, R> {
    /// Create a processor using the standard aura rules.
    pub fn new(state: &'a mut MatchState, rng: &'a mut R, hub: &'a mut SignalHub) -> Self {
        Self {
            state,
            rng,
            hub,
            auras: AuraCalculator::standard(),
        }
    }

    /// Queue `events` in order and drain.
    pub fn run(&mut self, events: impl IntoIterator<Item = EffectEvent>) -> DrainReport {
        let mut queue: EffectQueue = events.into_iter().collect();
        self.drain(&mut queue)
    }

    /// Apply events until the queue is empty or the budget is spent.
    pub fn drain(&mut self, queue: &mut EffectQueue) -> DrainReport {
        let budget = self.state.config.max_events_per_drain;
        let mut processed = 0;

        while let Some(event) = queue.pop_front() {
            if processed >= budget {
                let dropped = queue.clear() + 1;
                tracing::warn!(budget, dropped, "effect cascade exceeded drain budget");
                self.state
                    .log(format!("Effect cascade halted after {budget} events ({dropped} dropped)"));
                return DrainReport {
                    processed,
                    truncated: true,
                };
            }
            tracing::debug!(?event, "apply");
            self.apply(event, queue);
            processed += 1;
        }

        DrainReport {
            processed,
            truncated: false,
        }
    }

    /// Apply a single event.
    fn apply(&mut self, event: EffectEvent, queue: &mut EffectQueue) {
        use EffectEvent as E;

        match event {
            // === AP ===
            E::AdjustAp { player, delta } => {
                let ap = self.state.adjust_ap(player, i64::from(delta));
                if delta > 0 {
                    self.state.log(format!("{player} gains {delta} AP ({ap})"));
                    self.ap_gained(player, delta.unsigned_abs(), true, queue);
                } else if delta < 0 {
                    self.state.log(format!("{player} loses {} AP ({ap})", delta.unsigned_abs()));
                }
            }
            E::SpendAp { player, amount } => {
                let ap = self.state.adjust_ap(player, -i64::from(amount));
                self.state.log(format!("{player} spends {amount} AP ({ap} left)"));
            }
            E::MirroredApGain { player, amount } => {
                let ap = self.state.adjust_ap(player, i64::from(amount));
                self.state.log(format!("{player} mirrors {amount} AP ({ap})"));
                self.ap_gained(player, amount, false, queue);
            }
            E::GrantBonusAp { player, amount } => {
                self.state.player_mut(player).flags.bonus_ap_next_turn += amount;
                self.state.log(format!("{player} will gain {amount} extra AP next turn"));
            }

            // === Hand and deck ===
            E::DrawCards { player, count } => {
                let drawn = self.state.draw_cards(player, count);
                if drawn < count {
                    self.state.log(format!("{player}'s deck is empty"));
                }
                if drawn > 0 {
                    self.state.log(format!("{player} draws {drawn}"));
                    let opponent = player.other();
                    if self.state.player(opponent).flags.opportunist {
                        queue.push_front(E::OpportunistDraw { player: opponent });
                    }
                }
            }
            E::OpportunistDraw { player } => {
                if self.state.draw_cards(player, 1) == 1 {
                    self.state.log(format!("{player} draws opportunistically"));
                } else {
                    self.state.log(format!("{player}'s deck is empty"));
                }
            }
            E::DiscardRandom { player, count } => {
                let mut hand: Vec<CardUid> = self.state.player(player).hand.iter().map(|c| c.uid).collect();
                let mut picks = Vec::new();
                for _ in 0..count {
                    if hand.is_empty() {
                        break;
                    }
                    let index = self.rng.gen_index(hand.len());
                    picks.push(E::DiscardFromHand {
                        player,
                        uid: hand.remove(index),
                    });
                }
                if picks.is_empty() {
                    self.state.log(format!("{player} has nothing to discard"));
                }
                queue.extend_front(picks);
            }
            E::DiscardFromHand { player, uid } => {
                let Some(index) = self.state.player(player).hand_index(uid) else {
                    self.state.log(format!("{uid} is not in {player}'s hand"));
                    return;
                };
                let card = self.state.player_mut(player).hand.remove(index);
                self.state.log(format!("{player} discards {card}"));
                self.state.discard(player, card);
            }
            E::RecoverFromDiscard { player } => match self.state.player_mut(player).discard.pop_back() {
                Some(card) => {
                    self.state.log(format!("{player} recovers {card}"));
                    self.state.return_to_hand(player, card);
                }
                None => self.state.log(format!("{player}'s discard is empty")),
            },
            E::SkipNextDraw { player } => {
                self.state.player_mut(player).flags.skip_next_draw = true;
                self.state.log(format!("{player} will skip their next draw"));
            }
            E::RevealHand { player } => {
                let names: Vec<_> = self.state.player(player).hand.iter().map(|c| c.name.as_str()).collect();
                let line = if names.is_empty() {
                    format!("{player}'s hand is empty")
                } else {
                    format!("{player}'s hand: {}", names.join(", "))
                };
                self.state.log(line);
            }

            // === Board ===
            E::PlaceCard { player, uid } => self.place(player, uid, queue),
            E::ClearPermanent { player, slot } => match self.state.player_mut(player).board.take_permanent(slot) {
                Some(card) => {
                    self.state.log(format!("{card} is removed from {player}'s {slot} slot"));
                    self.state.discard(player, card);
                }
                None => self.state.log(format!("{player}'s {slot} slot is empty")),
            },
            E::DestroyCard { uid } => {
                let Some(controller) = self.vulnerable(uid, "destruction") else {
                    return;
                };
                if let Some(card) = self.state.player_mut(controller).board.take(uid) {
                    self.state.log(format!("{card} is destroyed"));
                    self.state.discard(controller, card);
                }
            }
            E::DestroyWeakestGovernment { player } => {
                match weakest_government(self.state, &self.auras, player) {
                    Some(uid) => queue.push_front(E::DestroyCard { uid }),
                    None => self.no_target(player, "destroy"),
                }
            }
            E::ReturnToHand { uid } => {
                let Some(controller) = self.vulnerable(uid, "being returned") else {
                    return;
                };
                if let Some(card) = self.state.player_mut(controller).board.take(uid) {
                    let owner = card.owner;
                    self.state.log(format!("{card} returns to {owner}'s hand"));
                    self.state.return_to_hand(owner, card);
                }
            }
            E::ReturnStrongestToHand { player } => match strongest_government(self.state, &self.auras, player) {
                Some(uid) => queue.push_front(E::ReturnToHand { uid }),
                None => self.no_target(player, "return"),
            },
            E::TransferCard { uid, to } => self.transfer(uid, to, queue),
            E::ClearInstantLane { player } => {
                let cleared = self.state.player_mut(player).board.clear_lane(Lane::Instant);
                for card in cleared {
                    self.state.discard(player, card);
                }
            }

            // === Modifiers ===
            E::BuffCard { uid, amount } => {
                let Some((controller, _, _)) = self.state.board_card(uid) else {
                    self.missing(uid);
                    return;
                };
                if let Some(card) = self.state.board_card_mut(uid) {
                    card.temp_buffs += amount;
                    let line = format!("{card} gains {amount} influence");
                    self.state.log(line);
                }
                queue.push_front(E::Notify(UiSignal::InfluenceBuffed {
                    player: controller,
                    uid,
                    amount,
                }));
            }
            E::DebuffCard { uid, amount } => {
                if self.vulnerable(uid, "debuffs").is_none() {
                    return;
                }
                if let Some(card) = self.state.board_card_mut(uid) {
                    card.temp_debuffs += amount;
                    let line = format!("{card} loses {amount} influence");
                    self.state.log(line);
                }
            }
            E::BuffStrongestGovernment { player, amount } => {
                match strongest_government(self.state, &self.auras, player) {
                    Some(uid) => queue.push_front(E::BuffCard { uid, amount }),
                    None => self.no_target(player, "buff"),
                }
            }
            E::DebuffStrongestGovernment { player, amount } => {
                match strongest_government(self.state, &self.auras, player) {
                    Some(uid) => queue.push_front(E::DebuffCard { uid, amount }),
                    None => self.no_target(player, "debuff"),
                }
            }
            E::BuffAllGovernment { player, amount } => {
                let buffs: Vec<_> = self
                    .state
                    .player(player)
                    .board
                    .lane(Lane::Government)
                    .iter()
                    .map(|c| E::BuffCard { uid: c.uid, amount })
                    .collect();
                if buffs.is_empty() {
                    self.no_target(player, "buff");
                }
                queue.extend_front(buffs);
            }
            E::DeactivateCard { uid } => {
                if self.vulnerable(uid, "deactivation").is_none() {
                    return;
                }
                if let Some(card) = self.state.board_card_mut(uid) {
                    card.deactivated = true;
                    let line = format!("{card} is deactivated");
                    self.state.log(line);
                }
            }
            E::DeactivateStrongestGovernment { player } => {
                match pick_government(self.state, &self.auras, player, Pick::Strongest, |c| c.is_active()) {
                    Some(uid) => queue.push_front(E::DeactivateCard { uid }),
                    None => self.no_target(player, "deactivate"),
                }
            }
            E::ReactivateCard { uid } => match self.state.board_card_mut(uid) {
                Some(card) => {
                    card.deactivated = false;
                    let line = format!("{card} is reactivated");
                    self.state.log(line);
                }
                None => self.missing(uid),
            },
            E::CleanseCard { uid } => match self.state.board_card_mut(uid) {
                Some(card) => {
                    card.deactivated = false;
                    card.temp_debuffs = 0;
                    let line = format!("{card} is cleansed");
                    self.state.log(line);
                }
                None => self.missing(uid),
            },
            E::CleanseBoard { player } => {
                let cleanses: Vec<_> = self
                    .state
                    .player(player)
                    .board
                    .cards()
                    .map(|c| E::CleanseCard { uid: c.uid })
                    .collect();
                queue.extend_front(cleanses);
            }
            E::ProtectCard { uid } => match self.state.board_card_mut(uid) {
                Some(card) => {
                    card.protected = true;
                    let line = format!("{card} is protected");
                    self.state.log(line);
                }
                None => self.missing(uid),
            },
            E::ShieldCard { uid } => match self.state.board_card(uid) {
                Some((_, _, card)) => {
                    let line = format!("{card} is shielded");
                    self.state.shielded.insert(uid);
                    self.state.log(line);
                }
                None => self.missing(uid),
            },
            E::ShieldStrongestGovernment { player } => {
                match strongest_government(self.state, &self.auras, player) {
                    Some(uid) => queue.push_front(E::ShieldCard { uid }),
                    None => self.no_target(player, "shield"),
                }
            }

            // === Traps ===
            E::RegisterTrap { player, trap } => TrapRegistry::register(self.state, player, trap),
            E::DisarmTrap { player } => {
                TrapRegistry::disarm_oldest(self.state, player);
            }
            E::EvaluateTraps { player, uid } => {
                let events = TrapRegistry::evaluate(self.state, player, uid);
                queue.extend_front(events);
            }

            // === Flags ===
            E::SetMirror { player } => {
                self.state.player_mut(player).flags.mirror_ap = true;
                self.state.log(format!("{player} will mirror AP gains"));
            }
            E::SetOpportunist { player } => {
                self.state.player_mut(player).flags.opportunist = true;
                self.state.log(format!("{player} will draw when the opponent draws"));
            }

            // === Steal ===
            E::StealStart { player, variant } => {
                let events = start_steal(self.state, &self.auras, player, variant);
                queue.extend_front(events);
            }
            E::StealResolve { player, target } => {
                // The roll is announced at once; the card moves after anything already queued.
                let (notices, transfers): (Vec<_>, Vec<_>) =
                    resolve_steal(self.state, &self.auras, self.rng, player, target)
                        .into_iter()
                        .partition(EffectEvent::is_notification);
                queue.extend_front(notices);
                queue.extend(transfers);
            }
            E::CancelSelection { player } => match self.state.pending {
                Some(pending) if pending.acting_player == player => {
                    self.state.pending = None;
                    self.state.log(format!("{player} cancels the selection"));
                }
                _ => self.state.log(format!("{player} has no selection to cancel")),
            },

            // === Narrative ===
            E::Log { message } => self.state.log(message),
            E::Notify(signal) => self.hub.emit(&signal),
        }
    }

    fn ap_gained(&mut self, player: PlayerId, amount: u32, mirror: bool, queue: &mut EffectQueue) {
        let mut follow = vec![EffectEvent::Notify(UiSignal::ApGained { player, amount })];
        let opponent = player.other();
        if mirror && self.state.player(opponent).flags.mirror_ap {
            follow.push(EffectEvent::MirroredApGain {
                player: opponent,
                amount,
            });
        }
        queue.extend_front(follow);
    }

    fn place(&mut self, player: PlayerId, uid: CardUid, queue: &mut EffectQueue) {
        let Some(index) = self.state.player(player).hand_index(uid) else {
            self.state.log(format!("{uid} is not in {player}'s hand"));
            return;
        };
        let caps = self.state.config.lane_capacity;
        let card = self.state.player_mut(player).hand.remove(index);
        let name = card.to_string();

        match card.placement {
            Placement::Lane(lane) => {
                if let Err(card) = self.state.player_mut(player).board.place(lane, card, &caps) {
                    self.state.player_mut(player).hand.insert(index, card);
                    self.state.log(format!("No room in {player}'s {lane} lane for {name}"));
                    return;
                }
            }
            Placement::Permanent(slot) => {
                if let Some(old) = self.state.player_mut(player).board.set_permanent(slot, card) {
                    self.state.log(format!("{old} is replaced"));
                    self.state.discard(player, old);
                }
            }
        }

        self.state.log(format!("{player} plays {name}"));
        queue.extend_front([
            EffectEvent::Notify(UiSignal::CardPlayed { player, uid }),
            EffectEvent::EvaluateTraps { player, uid },
        ]);
    }

    fn transfer(&mut self, uid: CardUid, to: PlayerId, queue: &mut EffectQueue) {
        let Some(from) = self.vulnerable(uid, "theft") else {
            return;
        };
        if from == to {
            self.state.log(format!("{uid} already belongs to {to}"));
            return;
        }
        let Some(mut card) = self.state.player_mut(from).board.take(uid) else {
            return;
        };
        card.reset_runtime();
        self.state.shielded.remove(&uid);

        let caps = self.state.config.lane_capacity;
        let Placement::Lane(lane) = card.placement else {
            self.state.log(format!("{card} cannot change sides and is discarded"));
            self.state.discard(from, card);
            return;
        };
        let name = card.to_string();
        match self.state.player_mut(to).board.place(lane, card, &caps) {
            Ok(()) => {
                self.state.log(format!("{name} moves to {to}'s {lane} lane"));
                queue.push_front(EffectEvent::EvaluateTraps { player: to, uid });
            }
            Err(card) => {
                self.state.log(format!("No room for {name}; it is discarded"));
                self.state.discard(from, card);
            }
        }
    }

    /// Controller of a board card that is not protected.
    ///
    /// Logs and returns `None` if the card is off the board or protected.
    fn vulnerable(&mut self, uid: CardUid, what: &str) -> Option<PlayerId> {
        let Some((controller, _, card)) = self.state.board_card(uid) else {
            self.missing(uid);
            return None;
        };
        if card.protected {
            let line = format!("{card} is protected from {what}");
            self.state.log(line);
            return None;
        }
        Some(controller)
    }

    fn missing(&mut self, uid: CardUid) {
        self.state.log(format!("{uid} is no longer on the board"));
    }

    fn no_target(&mut self, player: PlayerId, verb: &str) {
        self.state.log(format!("{player} has no government card to {verb}"));
    }
}

//! Match state: the single authoritative aggregate.
//!
//! ## MatchState
//!
//! Everything a match is made of lives here:
//! - Round, turn counter, phase and first passer
//! - Per-player AP, deck, hand, board, discard, traps, round wins, flags
//! - The shielded uid set and the optional pending selection
//! - The human-readable match log
//!
//! The state is plain data: it is `Clone`, comparable and serializable, and
//! holds no behaviour beyond container bookkeeping. It is mutated only by the
//! effect queue processor and the turn state machine.
//!
//! Containers use `im` persistent structures so cloning a state for AI
//! lookahead is O(1).

use im::{OrdSet, Vector};
use serde::{Deserialize, Serialize};

use super::config::MatchConfig;
use super::player::{PlayerId, PlayerMap};
use super::uid::CardUid;
use crate::cards::{Card, Placement};
use crate::rules::GameResult;
use crate::selection::PendingSelection;
use crate::triggers::Trap;
use crate::zones::{Board, Location};

/// Where the match currently is.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchPhase {
    /// Waiting for the match to be dealt.
    Setup,
    /// A player may act.
    PlayerTurn(PlayerId),
    /// Both players passed; scoring in progress.
    RoundResolution,
    /// Terminal.
    GameOver(GameResult),
}

/// Short-lived per-player flags, recomputed by start-of-turn hooks.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerFlags {
    /// Passed for the rest of the round.
    pub passed: bool,
    /// Gain AP whenever the opponent gains AP.
    pub mirror_ap: bool,
    /// Draw a card whenever the opponent draws.
    pub opportunist: bool,
    /// Skip the next start-of-turn draw.
    pub skip_next_draw: bool,
    /// Extra AP added at the next turn start.
    pub bonus_ap_next_turn: u32,
}

/// Everything one seat owns.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerState {
    pub ap: u32,
    /// Front is the draw position.
    pub deck: Vector<Card>,
    pub hand: Vector<Card>,
    pub board: Board,
    pub discard: Vector<Card>,
    /// Hidden reactive triggers, in registration order.
    pub traps: Vector<Trap>,
    pub round_wins: u32,
    pub flags: PlayerFlags,
}

impl PlayerState {
    /// Deck and hand both empty.
    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        self.deck.is_empty() && self.hand.is_empty()
    }

    /// Position of a card in hand.
    #[must_use]
    pub fn hand_index(&self, uid: CardUid) -> Option<usize> {
        self.hand.iter().position(|c| c.uid == uid)
    }
}

/// The authoritative match aggregate.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchState {
    /// Rules this match is played under.
    pub config: MatchConfig,

    /// Round number (starts at 1).
    pub round: u32,

    /// Turn counter across the whole match (starts at 1).
    pub turn: u32,

    pub phase: MatchPhase,

    /// Seat that passed first in the current round.
    pub first_passer: Option<PlayerId>,

    pub players: PlayerMap<PlayerState>,

    /// Cards that absorb the next matching trap.
    pub shielded: OrdSet<CardUid>,

    /// Multi-step interaction awaiting external input.
    pub pending: Option<PendingSelection>,

    /// Human-readable narrative, oldest first.
    pub log: Vector<String>,

    next_uid: u32,
}

impl MatchState {
    /// Create an empty match state.
    #[must_use]
    pub fn new(config: MatchConfig) -> Self {
        Self {
            config,
            round: 1,
            turn: 1,
            phase: MatchPhase::Setup,
            first_passer: None,
            players: PlayerMap::with_default(),
            shielded: OrdSet::new(),
            pending: None,
            log: Vector::new(),
            next_uid: 1,
        }
    }

    /// Allocate a new card uid.
    pub fn alloc_uid(&mut self) -> CardUid {
        let uid = CardUid(self.next_uid);
        self.next_uid += 1;
        uid
    }

    #[must_use]
    pub fn player(&self, player: PlayerId) -> &PlayerState {
        &self.players[player]
    }

    pub fn player_mut(&mut self, player: PlayerId) -> &mut PlayerState {
        &mut self.players[player]
    }

    /// Player whose turn it is, if any.
    #[must_use]
    pub fn current_player(&self) -> Option<PlayerId> {
        match self.phase {
            MatchPhase::PlayerTurn(p) => Some(p),
            _ => None,
        }
    }

    /// Final result, once the match is over.
    #[must_use]
    pub fn result(&self) -> Option<GameResult> {
        match self.phase {
            MatchPhase::GameOver(result) => Some(result),
            _ => None,
        }
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.result().is_some()
    }

    // === Log ===

    /// Append a line to the match log.
    pub fn log(&mut self, message: impl Into<String>) {
        let message = message.into();
        tracing::debug!(target: "influence_ccg::log", round = self.round, turn = self.turn, "{message}");
        self.log.push_back(message);
    }

    // === AP ===

    /// Apply a signed AP delta, clamping at zero. Returns the new balance.
    pub fn adjust_ap(&mut self, player: PlayerId, delta: i64) -> u32 {
        let current = i64::from(self.players[player].ap);
        let next = (current + delta).clamp(0, i64::from(u32::MAX)) as u32;
        self.players[player].ap = next;
        next
    }

    // === Card lookup ===

    /// Find the container a uid is resident in.
    #[must_use]
    pub fn locate(&self, uid: CardUid) -> Option<Location> {
        for (p, ps) in self.players.iter() {
            if let Some((spot, _)) = ps.board.find(uid) {
                return Some(Location::Board(p, spot));
            }
            if ps.hand.iter().any(|c| c.uid == uid) {
                return Some(Location::Hand(p));
            }
            if ps.deck.iter().any(|c| c.uid == uid) {
                return Some(Location::Deck(p));
            }
            if ps.discard.iter().any(|c| c.uid == uid) {
                return Some(Location::Discard(p));
            }
        }
        None
    }

    /// Look up a card wherever it is.
    #[must_use]
    pub fn card(&self, uid: CardUid) -> Option<&Card> {
        self.players.iter().find_map(|(_, ps)| {
            ps.board
                .find(uid)
                .map(|(_, c)| c)
                .or_else(|| ps.hand.iter().find(|c| c.uid == uid))
                .or_else(|| ps.deck.iter().find(|c| c.uid == uid))
                .or_else(|| ps.discard.iter().find(|c| c.uid == uid))
        })
    }

    /// Look up a card on either board.
    #[must_use]
    pub fn board_card(&self, uid: CardUid) -> Option<(PlayerId, Placement, &Card)> {
        self.players
            .iter()
            .find_map(|(p, ps)| ps.board.find(uid).map(|(spot, c)| (p, spot, c)))
    }

    /// Mutable access to a card on either board.
    pub fn board_card_mut(&mut self, uid: CardUid) -> Option<&mut Card> {
        let (player, _, _) = self.board_card(uid)?;
        self.players[player].board.find_mut(uid)
    }

    /// Remove a card from whatever container holds it.
    pub fn take_card(&mut self, uid: CardUid) -> Option<(Location, Card)> {
        let location = self.locate(uid)?;
        let ps = &mut self.players[location.player()];
        let card = match location {
            Location::Board(..) => ps.board.take(uid),
            Location::Hand(_) => take_from(&mut ps.hand, uid),
            Location::Deck(_) => take_from(&mut ps.deck, uid),
            Location::Discard(_) => take_from(&mut ps.discard, uid),
        }?;
        Some((location, card))
    }

    // === Card movement ===

    /// Put a card on top of a player's discard, clearing runtime state.
    pub fn discard(&mut self, player: PlayerId, mut card: Card) {
        card.reset_runtime();
        self.shielded.remove(&card.uid);
        self.players[player].discard.push_back(card);
    }

    /// Move a card into a player's hand, clearing runtime state.
    pub fn return_to_hand(&mut self, player: PlayerId, mut card: Card) {
        card.reset_runtime();
        self.shielded.remove(&card.uid);
        self.players[player].hand.push_back(card);
    }

    /// Draw up to `count` cards from the front of the deck.
    ///
    /// Returns the number actually drawn; an empty deck draws nothing.
    pub fn draw_cards(&mut self, player: PlayerId, count: u32) -> u32 {
        let mut drawn = 0;
        for _ in 0..count {
            let ps = &mut self.players[player];
            let Some(card) = ps.deck.pop_front() else {
                break;
            };
            ps.hand.push_back(card);
            drawn += 1;
        }
        drawn
    }

    /// Every uid in every container, for invariant checks.
    pub fn all_uids(&self) -> impl Iterator<Item = CardUid> + '_ {
        self.players.iter().flat_map(|(_, ps)| {
            ps.deck
                .iter()
                .chain(ps.hand.iter())
                .chain(ps.board.cards())
                .chain(ps.discard.iter())
                .map(|c| c.uid)
        })
    }
}

fn take_from(cards: &mut Vector<Card>, uid: CardUid) -> Option<Card> {
    let index = cards.iter().position(|c| c.uid == uid)?;
    Some(cards.remove(index))
}

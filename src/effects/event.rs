//! Effect events.
//!
//! Events are plain data: each variant carries exactly what its handler
//! needs to apply itself. The set is closed so the processor's `match`
//! stays exhaustive when a variant is added.
//!
//! ## AP
//!
//! - `AdjustAp`: Signed AP change, clamped at zero
//! - `SpendAp`: Pay for a play
//! - `MirroredApGain`: Gain copied from the opponent (never mirrors again)
//! - `GrantBonusAp`: Extra AP at the next turn start
//!
//! ## Hand and deck
//!
//! Draws, discards, recovery, skip-draw and reveal.
//!
//! ## Board
//!
//! Placement, removal, bounce and transfer between boards.
//!
//! ## Modifiers
//!
//! Buffs, debuffs, deactivation, cleansing, protection and shields. The
//! `*Strongest*`/`*Weakest*` variants resolve a target and re-enqueue the
//! concrete per-card event at the head of the queue.

use serde::{Deserialize, Serialize};

use crate::core::{CardUid, PlayerId};
use crate::selection::StealVariant;
use crate::signals::UiSignal;
use crate::triggers::TrapKind;
use crate::zones::PermanentSlot;

/// A typed effect event.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum EffectEvent {
    // === AP ===
    AdjustAp { player: PlayerId, delta: i32 },
    SpendAp { player: PlayerId, amount: u32 },
    MirroredApGain { player: PlayerId, amount: u32 },
    GrantBonusAp { player: PlayerId, amount: u32 },

    // === Hand and deck ===
    DrawCards { player: PlayerId, count: u32 },
    /// Draw triggered by the opponent drawing.
    OpportunistDraw { player: PlayerId },
    DiscardRandom { player: PlayerId, count: u32 },
    DiscardFromHand { player: PlayerId, uid: CardUid },
    /// Most recent discard back to hand.
    RecoverFromDiscard { player: PlayerId },
    SkipNextDraw { player: PlayerId },
    RevealHand { player: PlayerId },

    // === Board ===
    /// Move a card from `player`'s hand to its placement.
    PlaceCard { player: PlayerId, uid: CardUid },
    ClearPermanent { player: PlayerId, slot: PermanentSlot },
    DestroyCard { uid: CardUid },
    DestroyWeakestGovernment { player: PlayerId },
    ReturnToHand { uid: CardUid },
    ReturnStrongestToHand { player: PlayerId },
    /// Re-parent a board card to `to`'s board.
    TransferCard { uid: CardUid, to: PlayerId },
    ClearInstantLane { player: PlayerId },

    // === Modifiers ===
    BuffCard { uid: CardUid, amount: i32 },
    DebuffCard { uid: CardUid, amount: i32 },
    BuffStrongestGovernment { player: PlayerId, amount: i32 },
    DebuffStrongestGovernment { player: PlayerId, amount: i32 },
    BuffAllGovernment { player: PlayerId, amount: i32 },
    DeactivateCard { uid: CardUid },
    DeactivateStrongestGovernment { player: PlayerId },
    ReactivateCard { uid: CardUid },
    /// Reactivate and drop debuffs.
    CleanseCard { uid: CardUid },
    CleanseBoard { player: PlayerId },
    ProtectCard { uid: CardUid },
    ShieldCard { uid: CardUid },
    ShieldStrongestGovernment { player: PlayerId },

    // === Traps ===
    RegisterTrap { player: PlayerId, trap: TrapKind },
    /// Remove `player`'s oldest trap.
    DisarmTrap { player: PlayerId },
    /// Check the opponent's traps against a card `player` just placed.
    EvaluateTraps { player: PlayerId, uid: CardUid },

    // === Flags ===
    SetMirror { player: PlayerId },
    SetOpportunist { player: PlayerId },

    // === Steal ===
    StealStart { player: PlayerId, variant: StealVariant },
    StealResolve { player: PlayerId, target: Option<CardUid> },
    CancelSelection { player: PlayerId },

    // === Narrative ===
    Log { message: String },
    Notify(UiSignal),
}

impl EffectEvent {
    /// Shorthand for a log event.
    pub fn log(message: impl Into<String>) -> Self {
        Self::Log {
            message: message.into(),
        }
    }

    /// Is this a UI notification?
    #[must_use]
    pub fn is_notification(&self) -> bool {
        matches!(self, Self::Notify(_))
    }
}

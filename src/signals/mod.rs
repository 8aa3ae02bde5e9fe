//! Engine-to-UI notifications.
//!
//! The core never reaches for a global event bus. Subscribers implement
//! [`SignalSink`] and are registered on the engine's [`SignalHub`]; the
//! queue processor calls them directly when it drains a
//! [`EffectEvent::Notify`](crate::effects::EffectEvent::Notify) event.
//!
//! Signals carry plain data only. The UI is a pure subscriber: the one
//! path back into the engine is the pending-selection resolve call.
//!
//! ```
//! use std::sync::mpsc;
//! use influence_ccg::core::PlayerId;
//! use influence_ccg::signals::{SignalHub, UiSignal};
//!
//! let (tx, rx) = mpsc::channel();
//! let mut hub = SignalHub::new();
//! hub.subscribe(tx);
//!
//! hub.emit(&UiSignal::ApGained { player: PlayerId::ONE, amount: 1 });
//! assert_eq!(rx.try_iter().count(), 1);
//! ```

use std::sync::mpsc::Sender;

use serde::{Deserialize, Serialize};

use crate::core::{CardUid, PlayerId};
use crate::selection::SelectionKind;

/// Notification emitted for the presentation layer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum UiSignal {
    /// Animate an AP gain.
    ApGained { player: PlayerId, amount: u32 },

    /// Animate an influence buff on a card.
    InfluenceBuffed {
        player: PlayerId,
        uid: CardUid,
        amount: i32,
    },

    /// Animate a card being played.
    CardPlayed { player: PlayerId, uid: CardUid },

    /// The UI must ask `player` for a target and/or a roll now.
    SelectionRequested {
        player: PlayerId,
        kind: SelectionKind,
        target: Option<CardUid>,
        required_roll: Option<i32>,
    },

    /// Outcome of a steal roll.
    StealRolled {
        player: PlayerId,
        target: CardUid,
        roll: u32,
        total: i32,
        needed: i32,
        success: bool,
    },

    /// A hidden trap fired against `uid`.
    TrapSprung { owner: PlayerId, uid: CardUid },
}

/// Receiver of UI signals.
pub trait SignalSink {
    fn emit(&mut self, signal: &UiSignal);
}

/// Sink that drops everything.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullSink;

impl SignalSink for NullSink {
    fn emit(&mut self, _signal: &UiSignal) {}
}

impl SignalSink for Vec<UiSignal> {
    fn emit(&mut self, signal: &UiSignal) {
        self.push(signal.clone());
    }
}

impl SignalSink for Sender<UiSignal> {
    fn emit(&mut self, signal: &UiSignal) {
        if self.send(signal.clone()).is_err() {
            tracing::trace!("signal receiver dropped");
        }
    }
}

/// Fan-out to every registered subscriber.
#[derive(Default)]
pub struct SignalHub {
    subscribers: Vec<Box<dyn SignalSink>>,
}

impl SignalHub {
    /// Create a hub with no subscribers.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a subscriber.
    pub fn subscribe(&mut self, sink: impl SignalSink + 'static) {
        self.subscribers.push(Box::new(sink));
    }

    /// Number of registered subscribers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.subscribers.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.subscribers.is_empty()
    }

    /// Deliver a signal to every subscriber, in registration order.
    pub fn emit(&mut self, signal: &UiSignal) {
        tracing::trace!(?signal, "ui signal");
        for sink in &mut self.subscribers {
            sink.emit(signal);
        }
    }
}

impl std::fmt::Debug for SignalHub {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SignalHub")
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::mpsc;

    #[test]
    fn test_vec_sink_records() {
        let mut sink: Vec<UiSignal> = Vec::new();
        sink.emit(&UiSignal::CardPlayed {
            player: PlayerId::TWO,
            uid: CardUid(4),
        });
        assert_eq!(sink.len(), 1);
    }

    #[test]
    fn test_hub_fans_out_in_order() {
        let (tx1, rx1) = mpsc::channel();
        let (tx2, rx2) = mpsc::channel();
        let mut hub = SignalHub::new();
        hub.subscribe(tx1);
        hub.subscribe(tx2);
        hub.subscribe(NullSink);

        hub.emit(&UiSignal::ApGained { player: PlayerId::ONE, amount: 2 });
        hub.emit(&UiSignal::ApGained { player: PlayerId::TWO, amount: 1 });

        let seen: Vec<_> = rx1.try_iter().collect();
        assert_eq!(seen.len(), 2);
        assert_eq!(seen[0], UiSignal::ApGained { player: PlayerId::ONE, amount: 2 });
        assert_eq!(rx2.try_iter().count(), 2);
        assert_eq!(hub.len(), 3);
    }

    #[test]
    fn test_dropped_receiver_is_ignored() {
        let (tx, rx) = mpsc::channel();
        drop(rx);
        let mut hub = SignalHub::new();
        hub.subscribe(tx);
        hub.emit(&UiSignal::ApGained { player: PlayerId::ONE, amount: 1 });
    }
}

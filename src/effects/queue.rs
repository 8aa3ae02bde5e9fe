//! Double-ended effect queue.
//!
//! The processor pops from the front. Ordinary consequences go to the tail;
//! immediate reactions (mirrored gains, opportunist draws, trap checks, UI
//! notifications) go to the head so they run before anything already
//! queued.

use std::collections::VecDeque;

use super::event::EffectEvent;

/// Pending effect events.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EffectQueue {
    events: VecDeque<EffectEvent>,
}

impl EffectQueue {
    /// Create an empty queue.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an ordinary consequence.
    pub fn push_back(&mut self, event: EffectEvent) {
        self.events.push_back(event);
    }

    /// Insert an immediate reaction.
    pub fn push_front(&mut self, event: EffectEvent) {
        self.events.push_front(event);
    }

    /// Insert several events at the head, keeping their relative order.
    pub fn extend_front(&mut self, events: impl IntoIterator<Item = EffectEvent>) {
        let events: Vec<_> = events.into_iter().collect();
        for event in events.into_iter().rev() {
            self.events.push_front(event);
        }
    }

    pub(crate) fn pop_front(&mut self) -> Option<EffectEvent> {
        self.events.pop_front()
    }

    /// Drop everything still queued. Returns how many events were dropped.
    pub fn clear(&mut self) -> usize {
        let dropped = self.events.len();
        self.events.clear();
        dropped
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.events.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Peek at queued events, front first.
    pub fn iter(&self) -> impl Iterator<Item = &EffectEvent> {
        self.events.iter()
    }
}

impl Extend<EffectEvent> for EffectQueue {
    fn extend<T: IntoIterator<Item = EffectEvent>>(&mut self, iter: T) {
        self.events.extend(iter);
    }
}

impl FromIterator<EffectEvent> for EffectQueue {
    fn from_iter<T: IntoIterator<Item = EffectEvent>>(iter: T) -> Self {
        Self {
            events: iter.into_iter().collect(),
        }
    }
}

//! Effect system: typed events, the queue and its processor.
//!
//! - [`EffectEvent`]: Closed set of state mutations
//! - [`EffectQueue`]: Deque with head (reaction) and tail (consequence) insertion
//! - [`EffectProcessor`]: Drains a queue against a match
//! - [`CardEffectRegistry`]: Maps a played card to its initial events
//!
//! ## Design Philosophy
//!
//! Events are data and never behaviour. Card content produces events; only
//! the processor turns them into state changes. Follow-up work always goes
//! through the same queue instance, so one drain is one atomic cascade.

mod event;
mod processor;
mod queue;
mod registry;
pub mod targeting;

pub use event::EffectEvent;
pub use processor::{DrainReport, EffectProcessor};
pub use queue::EffectQueue;
pub use registry::{CardEffectRegistry, EffectHandler, EffectKey, PlayContext, LEGACY_ALIASES};

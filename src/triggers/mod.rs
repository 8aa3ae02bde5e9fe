//! Hidden reactive triggers (traps).
//!
//! A player registers traps against the opponent. Whenever a card is placed
//! on a board, the opponent's traps are evaluated against it; each matching
//! trap fires once and is removed.
//!
//! ## Key Components
//!
//! - [`TrapKind`]: Closed set of trap predicates and their responses
//! - [`Trap`]: A registered trap
//! - [`TrapRegistry`]: Registration, disarming and evaluation

pub mod registry;
pub mod trap;

pub use registry::TrapRegistry;
pub use trap::{Trap, TrapKind, AMBUSH_DEBUFF, SCANDAL_MIN_TIER};

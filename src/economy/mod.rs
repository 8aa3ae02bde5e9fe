//! Action-point economy.
//!
//! Every card has a small fixed AP cost decided by its tier. There is no
//! discount or refund path: the full cost is always paid.

mod ap;

pub use ap::{can_afford, cost, HEAVY_TIER};

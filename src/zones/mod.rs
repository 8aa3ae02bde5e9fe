//! Board zones and card locations.
//!
//! Every player owns a [`Board`] with three capacity-bounded lanes
//! (`public`, `government`, `instant`) and two single-occupant permanent
//! slots. Together with the deck, hand and discard held in
//! [`PlayerState`](crate::core::PlayerState) these are the only places a
//! card can be; [`Location`] names each of them.
//!
//! ## Key Types
//!
//! - `Lane`: One of the three board lanes
//! - `PermanentSlot`: Government or public persistent slot
//! - `Board`: Lanes plus permanent slots for one player
//! - `Location`: Any container a card uid can be resident in

pub mod board;

pub use board::{Board, Lane, Location, PermanentSlot};

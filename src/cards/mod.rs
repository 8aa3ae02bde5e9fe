//! Card system: definitions, instances, and catalog.
//!
//! ## Key Types
//!
//! - `CardId`: Identifier for card definitions
//! - `CardDefinition`: Static card data (kind, tier, influence, tags, placement)
//! - `Card`: Runtime card instance (uid, modifiers, deactivation)
//! - `CardCatalog`: Card definition lookup

pub mod catalog;
pub mod definition;
pub mod instance;

pub use catalog::CardCatalog;
pub use definition::{CardDefinition, CardId, CardKind, CardTag, Placement};
pub use instance::Card;

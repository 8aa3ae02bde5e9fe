//! Per-player board: lanes and permanent slots.
//!
//! Lanes keep cards in placement order (oldest first), which is also the
//! tie-break order for "strongest"/"weakest" targeting. Lane capacity is
//! enforced on every insertion; a full lane hands the card back to the
//! caller instead of growing.

use im::Vector;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

use crate::cards::{Card, Placement};
use crate::core::config::LaneCapacity;
use crate::core::{CardUid, PlayerId};

/// Board lane.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter)]
#[strum(serialize_all = "snake_case")]
pub enum Lane {
    Public,
    Government,
    Instant,
}

impl Lane {
    /// All lanes in board order.
    pub const ALL: [Lane; 3] = [Lane::Public, Lane::Government, Lane::Instant];
}

/// Persistent single-occupant slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
#[strum(serialize_all = "snake_case")]
pub enum PermanentSlot {
    Government,
    Public,
}

impl LaneCapacity {
    /// Capacity of one lane.
    #[must_use]
    pub fn of(&self, lane: Lane) -> usize {
        match lane {
            Lane::Public => self.public,
            Lane::Government => self.government,
            Lane::Instant => self.instant,
        }
    }
}

/// Every container a card can be resident in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Location {
    Deck(PlayerId),
    Hand(PlayerId),
    Board(PlayerId, Placement),
    Discard(PlayerId),
}

impl Location {
    /// Player whose container this is.
    #[must_use]
    pub fn player(self) -> PlayerId {
        match self {
            Location::Deck(p) | Location::Hand(p) | Location::Board(p, _) | Location::Discard(p) => p,
        }
    }

    /// Is this a board position (lane or permanent slot)?
    #[must_use]
    pub fn is_board(self) -> bool {
        matches!(self, Location::Board(..))
    }
}

/// One player's side of the table.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    public: Vector<Card>,
    government: Vector<Card>,
    instant: Vector<Card>,
    permanent_government: Option<Card>,
    permanent_public: Option<Card>,
}

impl Board {
    /// Create an empty board.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Cards in a lane, oldest first.
    #[must_use]
    pub fn lane(&self, lane: Lane) -> &Vector<Card> {
        match lane {
            Lane::Public => &self.public,
            Lane::Government => &self.government,
            Lane::Instant => &self.instant,
        }
    }

    fn lane_mut(&mut self, lane: Lane) -> &mut Vector<Card> {
        match lane {
            Lane::Public => &mut self.public,
            Lane::Government => &mut self.government,
            Lane::Instant => &mut self.instant,
        }
    }

    /// Occupant of a permanent slot.
    #[must_use]
    pub fn permanent(&self, slot: PermanentSlot) -> Option<&Card> {
        match slot {
            PermanentSlot::Government => self.permanent_government.as_ref(),
            PermanentSlot::Public => self.permanent_public.as_ref(),
        }
    }

    fn permanent_mut(&mut self, slot: PermanentSlot) -> &mut Option<Card> {
        match slot {
            PermanentSlot::Government => &mut self.permanent_government,
            PermanentSlot::Public => &mut self.permanent_public,
        }
    }

    /// Check whether a lane can take another card.
    #[must_use]
    pub fn has_room(&self, lane: Lane, capacity: &LaneCapacity) -> bool {
        self.lane(lane).len() < capacity.of(lane)
    }

    /// Append a card to a lane.
    ///
    /// Returns the card back if the lane is full.
    pub fn place(&mut self, lane: Lane, card: Card, capacity: &LaneCapacity) -> Result<(), Card> {
        if !self.has_room(lane, capacity) {
            return Err(card);
        }
        self.lane_mut(lane).push_back(card);
        Ok(())
    }

    /// Put a card in a permanent slot, returning the displaced occupant.
    pub fn set_permanent(&mut self, slot: PermanentSlot, card: Card) -> Option<Card> {
        self.permanent_mut(slot).replace(card)
    }

    /// Empty a permanent slot.
    pub fn take_permanent(&mut self, slot: PermanentSlot) -> Option<Card> {
        self.permanent_mut(slot).take()
    }

    /// Find a card by uid.
    #[must_use]
    pub fn find(&self, uid: CardUid) -> Option<(Placement, &Card)> {
        for lane in Lane::ALL {
            if let Some(card) = self.lane(lane).iter().find(|c| c.uid == uid) {
                return Some((Placement::Lane(lane), card));
            }
        }
        for slot in [PermanentSlot::Government, PermanentSlot::Public] {
            if let Some(card) = self.permanent(slot).filter(|c| c.uid == uid) {
                return Some((Placement::Permanent(slot), card));
            }
        }
        None
    }

    /// Find a card by uid for mutation.
    pub fn find_mut(&mut self, uid: CardUid) -> Option<&mut Card> {
        let spot = self.find(uid)?.0;
        match spot {
            Placement::Lane(lane) => self.lane_mut(lane).iter_mut().find(|c| c.uid == uid),
            Placement::Permanent(slot) => self.permanent_mut(slot).as_mut(),
        }
    }

    /// Remove a card by uid.
    pub fn take(&mut self, uid: CardUid) -> Option<Card> {
        for lane in Lane::ALL {
            let cards = self.lane_mut(lane);
            if let Some(index) = cards.iter().position(|c| c.uid == uid) {
                return Some(cards.remove(index));
            }
        }
        for slot in [PermanentSlot::Government, PermanentSlot::Public] {
            if self.permanent(slot).is_some_and(|c| c.uid == uid) {
                return self.take_permanent(slot);
            }
        }
        None
    }

    /// Iterate over every card on the board, lanes first.
    pub fn cards(&self) -> impl Iterator<Item = &Card> {
        self.public
            .iter()
            .chain(self.government.iter())
            .chain(self.instant.iter())
            .chain(self.permanent_government.iter())
            .chain(self.permanent_public.iter())
    }

    /// Iterate mutably over the government lane.
    pub fn government_mut(&mut self) -> impl Iterator<Item = &mut Card> {
        self.government.iter_mut()
    }

    /// Remove every card from one lane.
    pub fn clear_lane(&mut self, lane: Lane) -> Vec<Card> {
        std::mem::take(self.lane_mut(lane)).into_iter().collect()
    }

    /// Remove every card from the board.
    pub fn clear(&mut self) -> Vec<Card> {
        let mut cleared = Vec::with_capacity(self.len());
        for lane in Lane::ALL {
            cleared.extend(self.clear_lane(lane));
        }
        cleared.extend(self.permanent_government.take());
        cleared.extend(self.permanent_public.take());
        cleared
    }

    /// Total cards on the board.
    #[must_use]
    pub fn len(&self) -> usize {
        self.public.len()
            + self.government.len()
            + self.instant.len()
            + usize::from(self.permanent_government.is_some())
            + usize::from(self.permanent_public.is_some())
    }

    /// Check if the board is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{CardDefinition, CardId};

    fn card(uid: u32) -> Card {
        let def = CardDefinition::government(CardId::new(1), "Backbencher", 1, 2);
        Card::from_definition(&def, CardUid(uid), PlayerId::ONE)
    }

    fn tiny() -> LaneCapacity {
        LaneCapacity {
            public: 1,
            government: 2,
            instant: 1,
        }
    }

    #[test]
    fn test_place_respects_capacity() {
        let mut board = Board::new();
        let caps = tiny();

        assert!(board.place(Lane::Government, card(1), &caps).is_ok());
        assert!(board.place(Lane::Government, card(2), &caps).is_ok());

        let rejected = board.place(Lane::Government, card(3), &caps).unwrap_err();
        assert_eq!(rejected.uid, CardUid(3));
        assert_eq!(board.lane(Lane::Government).len(), 2);
    }

    #[test]
    fn test_permanent_slot_displaces() {
        let mut board = Board::new();

        assert!(board.set_permanent(PermanentSlot::Government, card(1)).is_none());
        let displaced = board.set_permanent(PermanentSlot::Government, card(2));

        assert_eq!(displaced.map(|c| c.uid), Some(CardUid(1)));
        assert_eq!(board.permanent(PermanentSlot::Government).map(|c| c.uid), Some(CardUid(2)));
    }

    #[test]
    fn test_find_and_take() {
        let mut board = Board::new();
        let caps = tiny();
        board.place(Lane::Public, card(1), &caps).unwrap();
        board.set_permanent(PermanentSlot::Public, card(2));

        let (spot, _) = board.find(CardUid(2)).unwrap();
        assert_eq!(spot, Placement::Permanent(PermanentSlot::Public));

        board.find_mut(CardUid(1)).unwrap().temp_buffs = 4;
        assert_eq!(board.lane(Lane::Public)[0].temp_buffs, 4);

        assert_eq!(board.take(CardUid(2)).map(|c| c.uid), Some(CardUid(2)));
        assert!(board.permanent(PermanentSlot::Public).is_none());
        assert!(board.take(CardUid(99)).is_none());
    }

    #[test]
    fn test_clear_empties_everything() {
        let mut board = Board::new();
        let caps = tiny();
        board.place(Lane::Public, card(1), &caps).unwrap();
        board.place(Lane::Government, card(2), &caps).unwrap();
        board.place(Lane::Instant, card(3), &caps).unwrap();
        board.set_permanent(PermanentSlot::Government, card(4));

        assert_eq!(board.len(), 4);
        let cleared = board.clear();

        assert_eq!(cleared.len(), 4);
        assert!(board.is_empty());
    }

    #[test]
    fn test_location_player() {
        let loc = Location::Board(PlayerId::TWO, Placement::Lane(Lane::Instant));
        assert_eq!(loc.player(), PlayerId::TWO);
        assert!(loc.is_board());
        assert!(!Location::Hand(PlayerId::ONE).is_board());
    }
}

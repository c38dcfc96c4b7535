//! Explicit container → card → note addressing.

use crate::model::card::{CardId, NoteId};
use crate::model::day::{ContainerId, DayId};
use std::fmt::{Display, Formatter};

/// Location of one card: the container that should hold it plus its ID.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CardAddress {
    pub container: ContainerId,
    pub card_id: CardId,
}

impl CardAddress {
    pub fn new(container: ContainerId, card_id: CardId) -> Self {
        Self { container, card_id }
    }

    /// Address of a card in the floating area.
    pub fn floating(card_id: CardId) -> Self {
        Self::new(ContainerId::Floating, card_id)
    }

    /// Address of a card inside `day_id`.
    pub fn in_day(day_id: DayId, card_id: CardId) -> Self {
        Self::new(ContainerId::Day(day_id), card_id)
    }

    /// Address for callers that pass an optional day, as UI handlers do.
    pub fn from_day(day_id: Option<DayId>, card_id: CardId) -> Self {
        Self::new(ContainerId::from_day(day_id), card_id)
    }

    /// Extends this address down to one note.
    pub fn note(self, note_id: NoteId) -> NoteAddress {
        NoteAddress {
            card: self,
            note_id,
        }
    }
}

impl Display for CardAddress {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.container, self.card_id)
    }
}

/// Location of one note inside an addressed card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NoteAddress {
    pub card: CardAddress,
    pub note_id: NoteId,
}

impl Display for NoteAddress {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.card, self.note_id)
    }
}

//! Whole-board snapshot.
//!
//! # Responsibility
//! - Own participants, floating cards and the three day columns together.
//! - Provide lookup by address and the primitive edits mutations are built
//!   from (`place_card`, `take_card`, `card_mut`, `note_mut`).
//!
//! # Invariants
//! - `days` always holds `DayId::ALL` in order.
//! - `revision` increases by one for every published mutation.
//! - See `validate()` for the full list checked before publishing.

use super::address::{CardAddress, NoteAddress};
use super::{BoardError, BoardResult};
use crate::model::card::{Card, CardId, Note, NoteId};
use crate::model::day::{ContainerId, Day, DayId};
use crate::model::person::{Person, PersonId};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Complete board state at one revision.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardSnapshot {
    pub revision: u64,
    pub participants: Vec<Person>,
    pub floating: Vec<Card>,
    pub days: [Day; 3],
}

impl Default for BoardSnapshot {
    fn default() -> Self {
        Self::new()
    }
}

impl BoardSnapshot {
    /// Empty board at revision 0 with the three fixed day columns.
    pub fn new() -> Self {
        Self {
            revision: 0,
            participants: Vec::new(),
            floating: Vec::new(),
            days: DayId::ALL.map(Day::empty),
        }
    }

    pub fn day(&self, day_id: DayId) -> &Day {
        &self.days[day_id.index()]
    }

    /// Cards held by `container`, in display order.
    pub fn cards(&self, container: ContainerId) -> &[Card] {
        match container {
            ContainerId::Floating => &self.floating,
            ContainerId::Day(day_id) => &self.days[day_id.index()].cards,
        }
    }

    /// Looks a card up in the addressed container only.
    pub fn card(&self, address: &CardAddress) -> Option<&Card> {
        self.cards(address.container)
            .iter()
            .find(|card| card.id == address.card_id)
    }

    /// Finds the container currently holding `card_id`, if any.
    pub fn locate_card(&self, card_id: CardId) -> Option<CardAddress> {
        self.containers()
            .find(|container| self.cards(*container).iter().any(|card| card.id == card_id))
            .map(|container| CardAddress::new(container, card_id))
    }

    pub fn person(&self, person_id: PersonId) -> Option<&Person> {
        self.participants
            .iter()
            .find(|person| person.id == person_id)
    }

    /// Total number of cards across every container.
    pub fn card_count(&self) -> usize {
        self.containers()
            .map(|container| self.cards(container).len())
            .sum()
    }

    /// Every container, floating first then days in column order.
    pub fn containers(&self) -> impl Iterator<Item = ContainerId> {
        std::iter::once(ContainerId::Floating).chain(DayId::ALL.into_iter().map(ContainerId::Day))
    }

    pub(crate) fn push_person(&mut self, person: Person) {
        self.participants.push(person);
    }

    pub(crate) fn take_person(&mut self, person_id: PersonId) -> BoardResult<Person> {
        let index = self
            .participants
            .iter()
            .position(|person| person.id == person_id)
            .ok_or(BoardError::PersonNotFound(person_id))?;
        Ok(self.participants.remove(index))
    }

    /// Appends `card` to `container`, rewriting its `day_id` to match.
    pub(crate) fn place_card(&mut self, container: ContainerId, mut card: Card) {
        card.day_id = container.day_id();
        self.cards_mut(container).push(card);
    }

    /// Removes the addressed card from its container.
    pub(crate) fn take_card(&mut self, address: &CardAddress) -> BoardResult<Card> {
        let cards = self.cards_mut(address.container);
        let index = cards
            .iter()
            .position(|card| card.id == address.card_id)
            .ok_or(BoardError::CardNotFound(*address))?;
        Ok(cards.remove(index))
    }

    pub(crate) fn card_mut(&mut self, address: &CardAddress) -> BoardResult<&mut Card> {
        self.cards_mut(address.container)
            .iter_mut()
            .find(|card| card.id == address.card_id)
            .ok_or(BoardError::CardNotFound(*address))
    }

    pub(crate) fn note_mut(&mut self, address: &NoteAddress) -> BoardResult<&mut Note> {
        self.card_mut(&address.card)?
            .notes
            .iter_mut()
            .find(|note| note.id == address.note_id)
            .ok_or(BoardError::NoteNotFound(*address))
    }

    /// Removes the addressed note from its card.
    pub(crate) fn take_note(&mut self, address: &NoteAddress) -> BoardResult<Note> {
        let notes = &mut self.card_mut(&address.card)?.notes;
        let index = notes
            .iter()
            .position(|note| note.id == address.note_id)
            .ok_or(BoardError::NoteNotFound(*address))?;
        Ok(notes.remove(index))
    }

    fn cards_mut(&mut self, container: ContainerId) -> &mut Vec<Card> {
        match container {
            ContainerId::Floating => &mut self.floating,
            ContainerId::Day(day_id) => &mut self.days[day_id.index()].cards,
        }
    }

    /// Checks every structural board invariant.
    ///
    /// # Errors
    /// - Day columns missing or out of order.
    /// - Duplicate participant or card IDs (a card in two containers shows up
    ///   as a duplicate card ID).
    /// - Duplicate note IDs within one card.
    /// - A card whose `day_id` disagrees with the container holding it.
    pub fn validate(&self) -> Result<(), SnapshotValidationError> {
        for (position, day) in self.days.iter().enumerate() {
            if day.id != DayId::ALL[position] {
                return Err(SnapshotValidationError::DayOutOfOrder {
                    position,
                    found: day.id,
                });
            }
        }

        let mut person_ids = HashSet::new();
        for person in &self.participants {
            if !person_ids.insert(person.id) {
                return Err(SnapshotValidationError::DuplicatePersonId(person.id));
            }
        }

        let mut card_ids = HashSet::new();
        for container in self.containers() {
            for card in self.cards(container) {
                if !card_ids.insert(card.id) {
                    return Err(SnapshotValidationError::DuplicateCardId(card.id));
                }
                if card.container() != container {
                    return Err(SnapshotValidationError::DayIdMismatch {
                        card_id: card.id,
                        container,
                        day_id: card.day_id,
                    });
                }
                let mut note_ids = HashSet::new();
                for note in &card.notes {
                    if !note_ids.insert(note.id) {
                        return Err(SnapshotValidationError::DuplicateNoteId {
                            card_id: card.id,
                            note_id: note.id,
                        });
                    }
                }
            }
        }

        Ok(())
    }
}

/// Structural invariant violation found by `BoardSnapshot::validate()`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SnapshotValidationError {
    DayOutOfOrder {
        position: usize,
        found: DayId,
    },
    DuplicatePersonId(PersonId),
    DuplicateCardId(CardId),
    DuplicateNoteId {
        card_id: CardId,
        note_id: NoteId,
    },
    DayIdMismatch {
        card_id: CardId,
        container: ContainerId,
        day_id: Option<DayId>,
    },
}

impl Display for SnapshotValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DayOutOfOrder { position, found } => {
                write!(f, "day column {position} holds `{found}` out of order")
            }
            Self::DuplicatePersonId(id) => write!(f, "duplicate person id: {id}"),
            Self::DuplicateCardId(id) => write!(f, "card appears more than once: {id}"),
            Self::DuplicateNoteId { card_id, note_id } => {
                write!(f, "duplicate note id {note_id} in card {card_id}")
            }
            Self::DayIdMismatch {
                card_id,
                container,
                day_id,
            } => write!(
                f,
                "card {card_id} in `{container}` carries day_id {}",
                day_id.map_or("none", DayId::as_str)
            ),
        }
    }
}

impl Error for SnapshotValidationError {}

#[cfg(test)]
mod tests {
    use super::{BoardSnapshot, SnapshotValidationError};
    use crate::board::address::CardAddress;
    use crate::board::BoardError;
    use crate::model::card::Card;
    use crate::model::day::{ContainerId, DayId};

    #[test]
    fn new_snapshot_has_fixed_days_and_is_valid() {
        let snapshot = BoardSnapshot::new();
        let ids: Vec<_> = snapshot.days.iter().map(|day| day.id).collect();
        assert_eq!(ids, DayId::ALL.to_vec());
        assert_eq!(snapshot.day(DayId::Saturday).title, "Saturday");
        assert_eq!(snapshot.card_count(), 0);
        snapshot.validate().unwrap();
    }

    #[test]
    fn place_card_rewrites_day_id() {
        let mut snapshot = BoardSnapshot::new();
        let card = Card::new("Dinner", None, ContainerId::Floating).unwrap();
        let card_id = card.id;

        snapshot.place_card(ContainerId::Day(DayId::Friday), card);

        let address = snapshot.locate_card(card_id).unwrap();
        assert_eq!(address, CardAddress::in_day(DayId::Friday, card_id));
        assert_eq!(
            snapshot.card(&address).unwrap().day_id,
            Some(DayId::Friday)
        );
        snapshot.validate().unwrap();
    }

    #[test]
    fn take_card_only_searches_addressed_container() {
        let mut snapshot = BoardSnapshot::new();
        let card = Card::new("Dinner", None, ContainerId::Floating).unwrap();
        let card_id = card.id;
        snapshot.place_card(ContainerId::Floating, card);

        let err = snapshot
            .take_card(&CardAddress::in_day(DayId::Sunday, card_id))
            .unwrap_err();
        assert!(matches!(err, BoardError::CardNotFound(_)));
        assert_eq!(snapshot.floating.len(), 1);
    }

    #[test]
    fn validate_detects_card_in_two_containers() {
        let mut snapshot = BoardSnapshot::new();
        let card = Card::new("Dinner", None, ContainerId::Floating).unwrap();
        let card_id = card.id;
        snapshot.place_card(ContainerId::Floating, card.clone());
        snapshot.place_card(ContainerId::Day(DayId::Sunday), card);

        assert_eq!(
            snapshot.validate().unwrap_err(),
            SnapshotValidationError::DuplicateCardId(card_id)
        );
    }

    #[test]
    fn validate_detects_stale_day_id() {
        let mut snapshot = BoardSnapshot::new();
        let mut card = Card::new("Dinner", None, ContainerId::Floating).unwrap();
        card.day_id = Some(DayId::Friday);
        let card_id = card.id;
        snapshot.floating.push(card);

        assert_eq!(
            snapshot.validate().unwrap_err(),
            SnapshotValidationError::DayIdMismatch {
                card_id,
                container: ContainerId::Floating,
                day_id: Some(DayId::Friday),
            }
        );
    }
}

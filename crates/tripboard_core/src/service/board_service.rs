//! Board use-case service.
//!
//! # Responsibility
//! - Provide the participant, card, note and relocation operations.
//! - Publish each successful mutation as a new whole snapshot.
//!
//! # Invariants
//! - A skipped mutation (`Err`) never changes the published snapshot.
//! - Every published mutation advances `revision` by exactly one.
//! - Log events carry IDs and counts only, never user-entered text.

use crate::board::address::{CardAddress, NoteAddress};
use crate::board::snapshot::BoardSnapshot;
use crate::board::BoardResult;
use crate::model::card::{Card, CardId, Note, NoteId};
use crate::model::day::ContainerId;
use crate::model::palette::color_for_index;
use crate::model::person::{Person, PersonId};
use crate::model::{non_blank, ModelValidationError};
use crate::repo::BoardRepository;
use log::{debug, info};
use std::sync::Arc;

/// Outcome of a drag-relocation gesture that did not get skipped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Relocation {
    /// Card left `from` and was appended to `to`.
    Moved {
        card_id: CardId,
        from: ContainerId,
        to: ContainerId,
    },
    /// Source and destination are the same container; nothing changed.
    SameContainer,
}

/// Board service facade over a snapshot repository.
pub struct BoardService<R: BoardRepository> {
    repo: R,
}

impl<R: BoardRepository> BoardService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Returns the published snapshot.
    pub fn snapshot(&self) -> Arc<BoardSnapshot> {
        self.repo.current()
    }

    /// Participants in insertion order.
    pub fn participants(&self) -> Vec<Person> {
        self.repo.current().participants.clone()
    }

    /// Cards of one container in display order.
    pub fn cards(&self, container: ContainerId) -> Vec<Card> {
        self.repo.current().cards(container).to_vec()
    }

    /// Notes of the addressed card, or `None` when the card is not there.
    pub fn notes(&self, address: &CardAddress) -> Option<Vec<Note>> {
        self.repo
            .current()
            .card(address)
            .map(|card| card.notes.clone())
    }

    /// Adds a participant and returns its ID.
    ///
    /// Color is `palette[current participant count % 10]`.
    pub fn add_person<I, S>(&mut self, name: &str, interests: I) -> BoardResult<PersonId>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.commit("person_add", |board| {
            let color = color_for_index(board.participants.len());
            let person = Person::new(name, interests, color)?;
            let person_id = person.id;
            board.push_person(person);
            Ok(person_id)
        })
    }

    /// Removes one participant. Nothing else references participants.
    pub fn remove_person(&mut self, person_id: PersonId) -> BoardResult<()> {
        self.commit("person_remove", |board| {
            board.take_person(person_id).map(|_| ())
        })
    }

    /// Creates a card at the end of `container` and returns its ID.
    pub fn add_card(
        &mut self,
        title: &str,
        time: Option<&str>,
        container: ContainerId,
    ) -> BoardResult<CardId> {
        self.commit("card_add", |board| {
            let card = Card::new(title, time, container)?;
            let card_id = card.id;
            board.place_card(container, card);
            Ok(card_id)
        })
    }

    /// Removes the addressed card together with its notes.
    pub fn remove_card(&mut self, address: &CardAddress) -> BoardResult<()> {
        self.commit("card_remove", |board| board.take_card(address).map(|_| ()))
    }

    /// Appends a note to the addressed card and returns the note ID.
    pub fn add_note(&mut self, address: &CardAddress, text: &str) -> BoardResult<NoteId> {
        self.commit("note_add", |board| {
            let card = board.card_mut(address)?;
            let note = Note::new(text)?;
            let note_id = note.id;
            card.notes.push(note);
            Ok(note_id)
        })
    }

    /// Replaces a note's text in place; `id` and `created_at` are kept.
    pub fn edit_note(&mut self, address: &NoteAddress, text: &str) -> BoardResult<()> {
        self.commit("note_edit", |board| {
            let text = non_blank(text).ok_or(ModelValidationError::EmptyNoteText)?;
            board.note_mut(address)?.text = text;
            Ok(())
        })
    }

    /// Removes a note from the addressed card.
    pub fn delete_note(&mut self, address: &NoteAddress) -> BoardResult<()> {
        self.commit("note_delete", |board| board.take_note(address).map(|_| ()))
    }

    /// Moves one card between containers.
    ///
    /// # Contract
    /// - `source == destination` is `Ok(SameContainer)`; reordering within a
    ///   container is not supported.
    /// - A card missing from `source` is `Err(CardNotFound)` and nothing is
    ///   inserted into `destination`.
    /// - The moved card is appended to `destination` with `day_id` rewritten.
    pub fn relocate(
        &mut self,
        source: ContainerId,
        destination: ContainerId,
        card_id: CardId,
    ) -> BoardResult<Relocation> {
        if source == destination {
            debug!(
                "event=card_relocate module=board status=skipped reason=same_container container={source}"
            );
            return Ok(Relocation::SameContainer);
        }

        self.commit("card_relocate", |board| {
            let card = board.take_card(&CardAddress::new(source, card_id))?;
            board.place_card(destination, card);
            Ok(Relocation::Moved {
                card_id,
                from: source,
                to: destination,
            })
        })
    }

    /// Applies `mutate` to a private copy and publishes it on success.
    fn commit<T>(
        &mut self,
        event: &'static str,
        mutate: impl FnOnce(&mut BoardSnapshot) -> BoardResult<T>,
    ) -> BoardResult<T> {
        let current = self.repo.current();
        let mut next = (*current).clone();

        let value = match mutate(&mut next) {
            Ok(value) => value,
            Err(err) => {
                debug!(
                    "event={event} module=board status=skipped reason={} revision={}",
                    err.reason(),
                    current.revision
                );
                return Err(err);
            }
        };

        next.revision = current.revision + 1;
        let (revision, participants, cards) =
            (next.revision, next.participants.len(), next.card_count());
        self.repo.replace(next)?;

        info!(
            "event={event} module=board status=ok revision={revision} participants={participants} cards={cards}"
        );
        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use super::{BoardService, Relocation};
    use crate::board::address::CardAddress;
    use crate::board::BoardError;
    use crate::model::day::{ContainerId, DayId};
    use crate::repo::InMemoryBoardRepository;

    fn service() -> BoardService<InMemoryBoardRepository> {
        BoardService::new(InMemoryBoardRepository::new())
    }

    #[test]
    fn skipped_mutation_keeps_revision() {
        let mut service = service();
        let err = service.add_card("   ", None, ContainerId::Floating).unwrap_err();
        assert_eq!(err.reason(), "empty_title");
        assert_eq!(service.snapshot().revision, 0);
    }

    #[test]
    fn each_applied_mutation_bumps_revision_once() {
        let mut service = service();
        let card_id = service
            .add_card("Packing list", None, ContainerId::Floating)
            .unwrap();
        service
            .relocate(ContainerId::Floating, ContainerId::Day(DayId::Friday), card_id)
            .unwrap();
        assert_eq!(service.snapshot().revision, 2);
    }

    #[test]
    fn same_container_relocation_does_not_publish() {
        let mut service = service();
        let card_id = service
            .add_card("Packing list", None, ContainerId::Floating)
            .unwrap();
        let outcome = service
            .relocate(ContainerId::Floating, ContainerId::Floating, card_id)
            .unwrap();
        assert_eq!(outcome, Relocation::SameContainer);
        assert_eq!(service.snapshot().revision, 1);
    }

    #[test]
    fn note_on_missing_card_reports_card_address() {
        let mut service = service();
        let address = CardAddress::in_day(DayId::Sunday, uuid::Uuid::new_v4());
        let err = service.add_note(&address, "Bring sunscreen").unwrap_err();
        assert!(matches!(err, BoardError::CardNotFound(found) if found == address));
    }
}

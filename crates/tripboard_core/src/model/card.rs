//! Card and note model.
//!
//! # Invariants
//! - `Card::notes` keeps insertion order, which is also display order.
//! - `Card::day_id` mirrors the container that currently holds the card:
//!   `None` while floating, `Some(day)` inside a day column.
//! - Note IDs are unique within their card.

use super::day::{ContainerId, DayId};
use super::{non_blank, now_epoch_ms, ModelValidationError};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable card identifier.
pub type CardId = Uuid;

/// Stable note identifier.
pub type NoteId = Uuid;

/// Free-text note attached to one card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    pub id: NoteId,
    pub text: String,
    /// Unix epoch milliseconds.
    pub created_at: i64,
}

impl Note {
    /// Creates a note stamped with the current time.
    ///
    /// # Errors
    /// - Returns `EmptyNoteText` when `text` is empty or whitespace only.
    pub fn new(text: &str) -> Result<Self, ModelValidationError> {
        let text = non_blank(text).ok_or(ModelValidationError::EmptyNoteText)?;
        Ok(Self {
            id: Uuid::new_v4(),
            text,
            created_at: now_epoch_ms(),
        })
    }
}

/// Draggable planning card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    pub id: CardId,
    pub title: String,
    /// Free-form time label such as `10-12`.
    pub time: Option<String>,
    pub notes: Vec<Note>,
    pub day_id: Option<DayId>,
}

impl Card {
    /// Creates an empty card for `container`.
    ///
    /// A blank `time` label is stored as `None`.
    ///
    /// # Errors
    /// - Returns `EmptyTitle` when `title` is empty or whitespace only.
    pub fn new(
        title: &str,
        time: Option<&str>,
        container: ContainerId,
    ) -> Result<Self, ModelValidationError> {
        let title = non_blank(title).ok_or(ModelValidationError::EmptyTitle)?;
        Ok(Self {
            id: Uuid::new_v4(),
            title,
            time: time.and_then(non_blank),
            notes: Vec::new(),
            day_id: container.day_id(),
        })
    }

    /// Container this card claims to live in.
    pub fn container(&self) -> ContainerId {
        ContainerId::from_day(self.day_id)
    }
}

#[cfg(test)]
mod tests {
    use super::{Card, Note};
    use crate::model::day::{ContainerId, DayId};
    use crate::model::ModelValidationError;

    #[test]
    fn card_in_day_carries_day_id() {
        let card = Card::new("Hike", Some("10-12"), ContainerId::Day(DayId::Saturday)).unwrap();
        assert_eq!(card.day_id, Some(DayId::Saturday));
        assert_eq!(card.time.as_deref(), Some("10-12"));
        assert!(card.notes.is_empty());
    }

    #[test]
    fn blank_time_label_is_dropped() {
        let card = Card::new("Packing list", Some("  "), ContainerId::Floating).unwrap();
        assert_eq!(card.time, None);
        assert_eq!(card.container(), ContainerId::Floating);
    }

    #[test]
    fn text_is_stored_as_given() {
        let card = Card::new("  Beach  ", Some(" 9-11 "), ContainerId::Floating).unwrap();
        assert_eq!(card.title, "  Beach  ");
        assert_eq!(card.time.as_deref(), Some(" 9-11 "));
        assert_eq!(Note::new("  indented\n").unwrap().text, "  indented\n");
    }

    #[test]
    fn blank_title_and_note_text_are_rejected() {
        assert_eq!(
            Card::new("", None, ContainerId::Floating).unwrap_err(),
            ModelValidationError::EmptyTitle
        );
        assert_eq!(
            Note::new("\n").unwrap_err(),
            ModelValidationError::EmptyNoteText
        );
    }
}

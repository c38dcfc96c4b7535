//! Planning board domain model.
//!
//! # Responsibility
//! - Define the plain records rendered by the board: participants, cards,
//!   notes and the fixed day columns.
//! - Keep constructor-level validation (non-blank text) next to the types.
//!
//! # Invariants
//! - Every participant, card and note is identified by a random `Uuid`.
//! - The day set is fixed to `DayId::ALL` and never changes at runtime.

pub mod card;
pub mod day;
pub mod palette;
pub mod person;

use std::error::Error;
use std::fmt::{Display, Formatter};
use std::time::{SystemTime, UNIX_EPOCH};

/// Constructor validation failures for board entities.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModelValidationError {
    /// Person name is blank after trim.
    EmptyName,
    /// Card title is blank after trim.
    EmptyTitle,
    /// Note text is blank after trim.
    EmptyNoteText,
}

impl Display for ModelValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyName => write!(f, "person name must not be blank"),
            Self::EmptyTitle => write!(f, "card title must not be blank"),
            Self::EmptyNoteText => write!(f, "note text must not be blank"),
        }
    }
}

impl Error for ModelValidationError {}

/// Returns current wall-clock time as Unix epoch milliseconds.
pub(crate) fn now_epoch_ms() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_millis() as i64)
        .unwrap_or(0)
}

/// Returns `value` unchanged unless it is empty or whitespace only.
pub(crate) fn non_blank(value: &str) -> Option<String> {
    if value.trim().is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

//! Board state and addressing.
//!
//! # Responsibility
//! - Hold the complete board (participants, floating cards, day columns) as
//!   one snapshot value.
//! - Resolve container → card → note addresses with a single not-found
//!   outcome per lookup.
//!
//! # Invariants
//! - A card lives in exactly one container and its `day_id` matches it.
//! - Snapshots are never edited in place once published; mutations work on a
//!   private copy that replaces the published one as a whole.

pub mod address;
pub mod snapshot;

use crate::model::person::PersonId;
use crate::model::ModelValidationError;
use crate::repo::RepoError;
use address::{CardAddress, NoteAddress};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type BoardResult<T> = Result<T, BoardError>;

/// Reason a board mutation was skipped.
///
/// Every variant means the board was left untouched.
#[derive(Debug)]
pub enum BoardError {
    /// Required text input was blank.
    Validation(ModelValidationError),
    /// No participant with this ID.
    PersonNotFound(PersonId),
    /// Card is not present in the addressed container.
    CardNotFound(CardAddress),
    /// Card exists but holds no note with this ID.
    NoteNotFound(NoteAddress),
    /// Repository refused the next snapshot.
    Repo(RepoError),
}

impl BoardError {
    /// Short metadata-only label used in log events.
    pub fn reason(&self) -> &'static str {
        match self {
            Self::Validation(ModelValidationError::EmptyName) => "empty_name",
            Self::Validation(ModelValidationError::EmptyTitle) => "empty_title",
            Self::Validation(ModelValidationError::EmptyNoteText) => "empty_note_text",
            Self::PersonNotFound(_) => "person_not_found",
            Self::CardNotFound(_) => "card_not_found",
            Self::NoteNotFound(_) => "note_not_found",
            Self::Repo(_) => "repo_rejected",
        }
    }
}

impl Display for BoardError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::PersonNotFound(id) => write!(f, "person not found: {id}"),
            Self::CardNotFound(address) => write!(f, "card not found: {address}"),
            Self::NoteNotFound(address) => write!(f, "note not found: {address}"),
            Self::Repo(err) => write!(f, "{err}"),
        }
    }
}

impl Error for BoardError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Repo(err) => Some(err),
            _ => None,
        }
    }
}

impl From<ModelValidationError> for BoardError {
    fn from(value: ModelValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<RepoError> for BoardError {
    fn from(value: RepoError) -> Self {
        Self::Repo(value)
    }
}

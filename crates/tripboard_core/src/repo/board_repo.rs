//! Board snapshot repository.
//!
//! # Responsibility
//! - Publish whole snapshots atomically.
//! - Reject snapshots that break board invariants or go back in revision.
//!
//! # Invariants
//! - `current()` always returns a snapshot that passed `validate()`.
//! - Nothing is persisted; state lives for the process lifetime only.

use crate::board::snapshot::{BoardSnapshot, SnapshotValidationError};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::sync::Arc;

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for snapshot publication.
#[derive(Debug)]
pub enum RepoError {
    /// Next snapshot breaks a board invariant.
    Invalid(SnapshotValidationError),
    /// Next snapshot does not advance past the published revision.
    StaleRevision { current: u64, proposed: u64 },
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Invalid(err) => write!(f, "invalid board snapshot: {err}"),
            Self::StaleRevision { current, proposed } => write!(
                f,
                "board snapshot revision {proposed} does not advance past {current}"
            ),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Invalid(err) => Some(err),
            Self::StaleRevision { .. } => None,
        }
    }
}

impl From<SnapshotValidationError> for RepoError {
    fn from(value: SnapshotValidationError) -> Self {
        Self::Invalid(value)
    }
}

/// Repository interface for the published board snapshot.
pub trait BoardRepository {
    /// Returns the published snapshot. Holders keep seeing this revision
    /// even after later replacements.
    fn current(&self) -> Arc<BoardSnapshot>;
    /// Publishes `next` in place of the current snapshot.
    fn replace(&mut self, next: BoardSnapshot) -> RepoResult<()>;
}

/// Process-memory snapshot holder.
#[derive(Debug, Default)]
pub struct InMemoryBoardRepository {
    current: Arc<BoardSnapshot>,
}

impl InMemoryBoardRepository {
    /// Creates a repository holding an empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a repository seeded with `snapshot`.
    ///
    /// # Errors
    /// - Returns `Invalid` when `snapshot` breaks a board invariant.
    pub fn try_with_snapshot(snapshot: BoardSnapshot) -> RepoResult<Self> {
        snapshot.validate()?;
        Ok(Self {
            current: Arc::new(snapshot),
        })
    }
}

impl BoardRepository for InMemoryBoardRepository {
    fn current(&self) -> Arc<BoardSnapshot> {
        Arc::clone(&self.current)
    }

    fn replace(&mut self, next: BoardSnapshot) -> RepoResult<()> {
        if next.revision <= self.current.revision {
            return Err(RepoError::StaleRevision {
                current: self.current.revision,
                proposed: next.revision,
            });
        }
        next.validate()?;
        self.current = Arc::new(next);
        Ok(())
    }
}

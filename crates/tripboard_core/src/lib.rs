//! Core domain logic for the trip planning board.
//! This crate is the single source of truth for board invariants.

pub mod board;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use board::address::{CardAddress, NoteAddress};
pub use board::snapshot::{BoardSnapshot, SnapshotValidationError};
pub use board::{BoardError, BoardResult};
pub use logging::{default_log_level, init_logging, logging_status, LoggingConfig};
pub use model::card::{Card, CardId, Note, NoteId};
pub use model::day::{ContainerId, ContainerParseError, Day, DayId, FLOATING_CONTAINER_ID};
pub use model::palette::{color_for_index, PALETTE};
pub use model::person::{derive_initials, Person, PersonId};
pub use model::ModelValidationError;
pub use repo::{BoardRepository, InMemoryBoardRepository, RepoError, RepoResult};
pub use service::board_service::{BoardService, Relocation};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

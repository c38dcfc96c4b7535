//! Snapshot repository abstraction and in-memory implementation.
//!
//! # Responsibility
//! - Hold the currently published board snapshot.
//! - Keep the swap-in step behind one contract so the service never edits
//!   published state directly.
//!
//! # Invariants
//! - Writes must pass `BoardSnapshot::validate()` before they are published.
//! - Published revisions strictly increase.

pub mod board_repo;

pub use board_repo::{BoardRepository, InMemoryBoardRepository, RepoError, RepoResult};

//! Core use-case services.
//!
//! # Responsibility
//! - Turn user gestures into board mutations.
//! - Keep UI/FFI layers away from snapshot and repository details.

pub mod board_service;

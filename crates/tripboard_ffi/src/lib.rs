//! Flutter-facing bindings for the trip planning board.

pub mod api;

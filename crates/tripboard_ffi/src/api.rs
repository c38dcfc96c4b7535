//! FFI use-case API for the board UI shell.
//!
//! # Responsibility
//! - Expose board gestures (add/remove/edit, drag end) to Dart via FRB.
//! - Parse string IDs coming from the widget tree at this boundary.
//!
//! # Invariants
//! - Exported functions must not panic across the FFI boundary.
//! - A failed call leaves the board untouched and reports why in `message`.

use log::warn;
use std::str::FromStr;
use std::sync::{Mutex, OnceLock};
use tripboard_core::{
    core_version as core_version_inner, init_logging as init_logging_inner, ping as ping_inner,
    BoardService, CardAddress, ContainerId, DayId, InMemoryBoardRepository, Relocation,
};
use uuid::Uuid;

type SharedBoard = Mutex<BoardService<InMemoryBoardRepository>>;

static BOARD: OnceLock<SharedBoard> = OnceLock::new();

/// Minimal health-check API for FRB smoke integration.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Expose core crate version through FFI.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// Returns an empty string on success and the error message otherwise.
/// Safe to repeat with the same `level + log_dir`.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err,
    }
}

/// Result envelope for every board gesture.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardActionResponse {
    /// Whether the board changed (or, for drags, the gesture was accepted).
    pub ok: bool,
    /// ID of the created or affected entity.
    pub entity_id: Option<String>,
    /// Human-readable diagnostics for the UI.
    pub message: String,
}

impl BoardActionResponse {
    fn success(message: impl Into<String>, entity_id: impl ToString) -> Self {
        Self {
            ok: true,
            entity_id: Some(entity_id.to_string()),
            message: message.into(),
        }
    }

    fn failure(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            entity_id: None,
            message: message.into(),
        }
    }
}

/// Full board state as JSON for rendering.
///
/// Returns an empty string when the board lock is unavailable.
#[flutter_rust_bridge::frb(sync)]
pub fn board_snapshot_json() -> String {
    with_board(|service| {
        serde_json::to_string(&*service.snapshot()).map_err(|err| err.to_string())
    })
    .unwrap_or_default()
}

/// Adds a participant; `interests` comes from a list input, blanks ignored.
#[flutter_rust_bridge::frb(sync)]
pub fn board_add_person(name: String, interests: Vec<String>) -> BoardActionResponse {
    respond("board_add_person", "Person added.", |service| {
        service
            .add_person(&name, &interests)
            .map_err(|err| err.to_string())
    })
}

#[flutter_rust_bridge::frb(sync)]
pub fn board_remove_person(person_id: String) -> BoardActionResponse {
    respond("board_remove_person", "Person removed.", |service| {
        let person_id = parse_id("person_id", &person_id)?;
        service
            .remove_person(person_id)
            .map(|()| person_id)
            .map_err(|err| err.to_string())
    })
}

/// Adds a card to `day_id`, or to the floating area when `day_id` is `None`.
#[flutter_rust_bridge::frb(sync)]
pub fn board_add_card(
    title: String,
    time: Option<String>,
    day_id: Option<String>,
) -> BoardActionResponse {
    respond("board_add_card", "Card added.", |service| {
        let container = ContainerId::from_day(parse_day(day_id.as_deref())?);
        service
            .add_card(&title, time.as_deref(), container)
            .map_err(|err| err.to_string())
    })
}

#[flutter_rust_bridge::frb(sync)]
pub fn board_remove_card(card_id: String, day_id: Option<String>) -> BoardActionResponse {
    respond("board_remove_card", "Card removed.", |service| {
        let address = parse_card_address(&card_id, day_id.as_deref())?;
        service
            .remove_card(&address)
            .map(|()| address.card_id)
            .map_err(|err| err.to_string())
    })
}

#[flutter_rust_bridge::frb(sync)]
pub fn board_add_note(
    card_id: String,
    text: String,
    day_id: Option<String>,
) -> BoardActionResponse {
    respond("board_add_note", "Note added.", |service| {
        let address = parse_card_address(&card_id, day_id.as_deref())?;
        service
            .add_note(&address, &text)
            .map_err(|err| err.to_string())
    })
}

#[flutter_rust_bridge::frb(sync)]
pub fn board_edit_note(
    card_id: String,
    note_id: String,
    text: String,
    day_id: Option<String>,
) -> BoardActionResponse {
    respond("board_edit_note", "Note updated.", |service| {
        let address = parse_card_address(&card_id, day_id.as_deref())?
            .note(parse_id("note_id", &note_id)?);
        service
            .edit_note(&address, &text)
            .map(|()| address.note_id)
            .map_err(|err| err.to_string())
    })
}

#[flutter_rust_bridge::frb(sync)]
pub fn board_delete_note(
    card_id: String,
    note_id: String,
    day_id: Option<String>,
) -> BoardActionResponse {
    respond("board_delete_note", "Note deleted.", |service| {
        let address = parse_card_address(&card_id, day_id.as_deref())?
            .note(parse_id("note_id", &note_id)?);
        service
            .delete_note(&address)
            .map(|()| address.note_id)
            .map_err(|err| err.to_string())
    })
}

/// Applies a drag-end gesture.
///
/// `destination_id = None` means the card was dropped outside every
/// container and is ignored. Dropping into the source container is accepted
/// and changes nothing.
#[flutter_rust_bridge::frb(sync)]
pub fn board_on_drag_end(
    source_id: String,
    destination_id: Option<String>,
    item_id: String,
) -> BoardActionResponse {
    let Some(destination_id) = destination_id else {
        return BoardActionResponse::failure("Dropped outside the board.");
    };

    respond("board_on_drag_end", "Card moved.", |service| {
        let source = ContainerId::from_str(&source_id).map_err(|err| err.to_string())?;
        let destination = ContainerId::from_str(&destination_id).map_err(|err| err.to_string())?;
        let card_id = parse_id("item_id", &item_id)?;
        match service.relocate(source, destination, card_id) {
            Ok(Relocation::Moved { card_id, .. }) => Ok(card_id),
            Ok(Relocation::SameContainer) => Ok(card_id),
            Err(err) => Err(err.to_string()),
        }
    })
}

fn respond<T: ToString>(
    operation: &'static str,
    success_message: &'static str,
    f: impl FnOnce(&mut BoardService<InMemoryBoardRepository>) -> Result<T, String>,
) -> BoardActionResponse {
    match with_board(f) {
        Ok(entity_id) => BoardActionResponse::success(success_message, entity_id),
        Err(err) => BoardActionResponse::failure(format!("{operation} skipped: {err}")),
    }
}

fn with_board<T>(
    f: impl FnOnce(&mut BoardService<InMemoryBoardRepository>) -> Result<T, String>,
) -> Result<T, String> {
    let board = BOARD.get_or_init(|| Mutex::new(BoardService::new(InMemoryBoardRepository::new())));
    let mut guard = board.lock().map_err(|_| {
        warn!("event=board_lock module=ffi status=error reason=poisoned");
        "board state unavailable".to_string()
    })?;
    f(&mut guard)
}

fn parse_id(field: &str, raw: &str) -> Result<Uuid, String> {
    Uuid::parse_str(raw.trim()).map_err(|_| format!("invalid {field} `{raw}`"))
}

/// Empty or whitespace-only day IDs mean the floating area.
fn parse_day(raw: Option<&str>) -> Result<Option<DayId>, String> {
    raw.filter(|value| !value.trim().is_empty())
        .map(|value| DayId::from_str(value).map_err(|err| err.to_string()))
        .transpose()
}

fn parse_card_address(card_id: &str, day_id: Option<&str>) -> Result<CardAddress, String> {
    Ok(CardAddress::from_day(
        parse_day(day_id)?,
        parse_id("card_id", card_id)?,
    ))
}

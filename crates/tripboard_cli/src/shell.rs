//! Command execution against one in-process board.
//!
//! # Responsibility
//! - Resolve shortened IDs against the current snapshot.
//! - Apply commands through `BoardService` and phrase the outcome.
//!
//! # Invariants
//! - A command that fails to resolve or gets skipped leaves the board as is.

use crate::command::{parse, CardCommand, Command, NoteCommand, PersonCommand};
use crate::render::{render_board, short_id};
use log::debug;
use tripboard_core::{
    BoardService, BoardSnapshot, CardAddress, ContainerId, DayId, InMemoryBoardRepository,
    Relocation,
};
use uuid::Uuid;

/// What the caller should do after one input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// Print this text and keep reading.
    Text(String),
    /// Stop the session.
    Quit,
}

pub struct Shell {
    service: BoardService<InMemoryBoardRepository>,
}

impl Default for Shell {
    fn default() -> Self {
        Self::new()
    }
}

impl Shell {
    pub fn new() -> Self {
        Self {
            service: BoardService::new(InMemoryBoardRepository::new()),
        }
    }

    pub fn snapshot(&self) -> std::sync::Arc<BoardSnapshot> {
        self.service.snapshot()
    }

    /// Parses and runs one input line.
    ///
    /// Usage errors and `help` output come back as text from clap.
    pub fn execute(&mut self, line: &str) -> Reply {
        match parse(line) {
            Ok(None) => Reply::Text(String::new()),
            Ok(Some(Command::Quit)) => Reply::Quit,
            Ok(Some(command)) => Reply::Text(self.apply(command).unwrap_or_else(|err| err)),
            Err(err) => Reply::Text(err.to_string().trim_end().to_string()),
        }
    }

    fn apply(&mut self, command: Command) -> Result<String, String> {
        let board = self.service.snapshot();
        match command {
            Command::Person(PersonCommand::Add { name, interests }) => {
                let interests = interests.iter().map(|interest| interest.trim());
                let id = self
                    .service
                    .add_person(&name, interests)
                    .map_err(skipped)?;
                Ok(format!("added person #{}", short_id(id)))
            }
            Command::Person(PersonCommand::Rm { person }) => {
                let candidates = board.participants.iter().map(|entry| entry.id);
                let person_id = resolve("person", &person, candidates)?;
                self.service.remove_person(person_id).map_err(skipped)?;
                Ok(format!("removed person #{}", short_id(person_id)))
            }
            Command::Card(CardCommand::Add { title, time, day }) => {
                let container = ContainerId::from_day(day);
                let id = self
                    .service
                    .add_card(&title, time.as_deref(), container)
                    .map_err(skipped)?;
                Ok(format!("added card #{} to {container}", short_id(id)))
            }
            Command::Card(CardCommand::Rm { card, day }) => {
                let address = resolve_card(&board, &card, day)?;
                self.service.remove_card(&address).map_err(skipped)?;
                Ok(format!("removed card #{}", short_id(address.card_id)))
            }
            Command::Note(NoteCommand::Add { card, text, day }) => {
                let address = resolve_card(&board, &card, day)?;
                let id = self.service.add_note(&address, &text).map_err(skipped)?;
                Ok(format!("added note #{}", short_id(id)))
            }
            Command::Note(NoteCommand::Edit {
                card,
                note,
                text,
                day,
            }) => {
                let address = resolve_card(&board, &card, day)?;
                let note_id = resolve_note(&board, &address, &note)?;
                self.service
                    .edit_note(&address.note(note_id), &text)
                    .map_err(skipped)?;
                Ok(format!("updated note #{}", short_id(note_id)))
            }
            Command::Note(NoteCommand::Rm { card, note, day }) => {
                let address = resolve_card(&board, &card, day)?;
                let note_id = resolve_note(&board, &address, &note)?;
                self.service
                    .delete_note(&address.note(note_id))
                    .map_err(skipped)?;
                Ok(format!("deleted note #{}", short_id(note_id)))
            }
            Command::Move {
                source,
                destination,
                card,
            } => {
                let candidates = board.cards(source).iter().map(|entry| entry.id);
                let card_id = resolve("card", &card, candidates)?;
                match self
                    .service
                    .relocate(source, destination, card_id)
                    .map_err(skipped)?
                {
                    Relocation::Moved { from, to, .. } => {
                        Ok(format!("moved card #{} {from} -> {to}", short_id(card_id)))
                    }
                    Relocation::SameContainer => Ok("card already there".to_string()),
                }
            }
            Command::Show => Ok(render_board(&board)),
            Command::Json => serde_json::to_string_pretty(&*board).map_err(|err| err.to_string()),
            Command::Quit => Ok(String::new()),
        }
    }
}

fn skipped(err: tripboard_core::BoardError) -> String {
    format!("skipped: {err}")
}

/// Resolves a full UUID or a unique prefix among `candidates`.
fn resolve(
    kind: &str,
    raw: &str,
    candidates: impl Iterator<Item = Uuid>,
) -> Result<Uuid, String> {
    let needle = raw.trim().to_ascii_lowercase();
    if let Ok(id) = Uuid::parse_str(&needle) {
        return Ok(id);
    }
    if needle.is_empty() {
        return Err(format!("skipped: empty {kind} id"));
    }

    let matches: Vec<Uuid> = candidates
        .filter(|id| id.to_string().starts_with(&needle))
        .collect();
    debug!(
        "event=id_resolve module=cli kind={kind} matches={}",
        matches.len()
    );
    match matches.as_slice() {
        [id] => Ok(*id),
        [] => Err(format!("skipped: no {kind} matching `{raw}`")),
        _ => Err(format!("skipped: {kind} id `{raw}` is ambiguous")),
    }
}

fn resolve_card(
    board: &BoardSnapshot,
    raw: &str,
    day: Option<DayId>,
) -> Result<CardAddress, String> {
    let container = ContainerId::from_day(day);
    let candidates = board.cards(container).iter().map(|card| card.id);
    let card_id = resolve("card", raw, candidates)?;
    Ok(CardAddress::new(container, card_id))
}

fn resolve_note(board: &BoardSnapshot, card: &CardAddress, raw: &str) -> Result<Uuid, String> {
    let notes = board
        .card(card)
        .map(|card| card.notes.iter().map(|note| note.id).collect::<Vec<_>>())
        .unwrap_or_default();
    resolve("note", raw, notes.into_iter())
}

#[cfg(test)]
mod tests {
    use super::{Reply, Shell};
    use crate::render::short_id;
    use tripboard_core::DayId;

    fn text(reply: Reply) -> String {
        match reply {
            Reply::Text(text) => text,
            Reply::Quit => panic!("unexpected quit"),
        }
    }

    #[test]
    fn card_can_be_added_moved_and_annotated_by_prefix() {
        let mut shell = Shell::new();
        let added = text(shell.execute(r#"card add "Packing list""#));
        assert!(added.starts_with("added card #"), "{added}");

        let card_id = shell.snapshot().floating[0].id;
        let prefix = short_id(card_id);
        let moved = text(shell.execute(&format!("move floating friday {prefix}")));
        assert!(moved.contains("floating -> friday"), "{moved}");

        let noted = text(shell.execute(&format!(
            r#"note add {prefix} "Bring sunscreen" --day friday"#
        )));
        assert!(noted.starts_with("added note"), "{noted}");

        let snapshot = shell.snapshot();
        assert!(snapshot.floating.is_empty());
        let friday = &snapshot.day(DayId::Friday).cards;
        assert_eq!(friday[0].day_id, Some(DayId::Friday));
        assert_eq!(friday[0].notes[0].text, "Bring sunscreen");
    }

    #[test]
    fn card_lookup_is_scoped_to_named_container() {
        let mut shell = Shell::new();
        text(shell.execute("card add Dinner --day sunday"));
        let prefix = short_id(shell.snapshot().day(DayId::Sunday).cards[0].id);

        let reply = text(shell.execute(&format!("card rm {prefix}")));
        assert!(reply.contains("no card matching"), "{reply}");
        assert_eq!(shell.snapshot().day(DayId::Sunday).cards.len(), 1);

        let reply = text(shell.execute(&format!("card rm {prefix} --day sunday")));
        assert!(reply.starts_with("removed card"), "{reply}");
    }

    #[test]
    fn skipped_operations_are_reported_not_fatal() {
        let mut shell = Shell::new();
        let reply = text(shell.execute(r#"person add "  ""#));
        assert!(reply.starts_with("skipped"), "{reply}");
        let reply = text(shell.execute("bogus"));
        assert!(reply.starts_with("error"), "{reply}");
        let reply = text(shell.execute("card add Hike --day monday"));
        assert!(reply.starts_with("error"), "{reply}");
        assert_eq!(shell.snapshot().revision, 0);
    }

    #[test]
    fn help_and_usage_come_from_command_grammar() {
        let mut shell = Shell::new();
        let help = text(shell.execute("help"));
        assert!(help.contains("Manage cards"), "{help}");
        let usage = text(shell.execute("note add"));
        assert!(usage.contains("Usage"), "{usage}");
    }

    #[test]
    fn option_after_double_dash_is_taken_as_title() {
        let mut shell = Shell::new();
        text(shell.execute("card add --day=saturday -- --late-checkout"));
        let snapshot = shell.snapshot();
        assert_eq!(snapshot.day(DayId::Saturday).cards[0].title, "--late-checkout");
    }

    #[test]
    fn comma_separated_interests_are_split() {
        let mut shell = Shell::new();
        text(shell.execute(r#"person add Ada "hiking, chess""#));
        assert_eq!(shell.snapshot().participants[0].interests, vec!["hiking", "chess"]);
    }

    #[test]
    fn note_edit_and_delete_resolve_note_prefix() {
        let mut shell = Shell::new();
        text(shell.execute("card add Beach"));
        let card = short_id(shell.snapshot().floating[0].id);
        text(shell.execute(&format!("note add {card} Towels")));
        let note = short_id(shell.snapshot().floating[0].notes[0].id);

        text(shell.execute(&format!(r#"note edit {card} {note} "Towels and hats""#)));
        assert_eq!(shell.snapshot().floating[0].notes[0].text, "Towels and hats");

        text(shell.execute(&format!("note rm {card} {note}")));
        assert!(shell.snapshot().floating[0].notes.is_empty());
    }

    #[test]
    fn quit_ends_session() {
        let mut shell = Shell::new();
        assert_eq!(shell.execute("quit"), Reply::Quit);
    }
}

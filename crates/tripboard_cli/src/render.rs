//! Plain-text board rendering.

use std::fmt::Write;
use tripboard_core::{BoardSnapshot, Card, ContainerId, Person};

const SHORT_ID_LEN: usize = 8;

/// Leading characters shown for an ID; any unique prefix is accepted back.
pub fn short_id(id: impl ToString) -> String {
    id.to_string().chars().take(SHORT_ID_LEN).collect()
}

/// Renders participants, the floating area and the three day columns.
pub fn render_board(snapshot: &BoardSnapshot) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "Participants ({})", snapshot.participants.len());
    if snapshot.participants.is_empty() {
        let _ = writeln!(out, "  (none)");
    }
    for person in &snapshot.participants {
        render_person(&mut out, person);
    }

    for container in snapshot.containers() {
        let heading = match container {
            ContainerId::Floating => "General Notes",
            ContainerId::Day(day_id) => snapshot.day(day_id).title.as_str(),
        };
        let cards = snapshot.cards(container);
        let _ = writeln!(out, "\n{heading} [{container}] ({})", cards.len());
        if cards.is_empty() {
            let _ = writeln!(out, "  (empty)");
        }
        for card in cards {
            render_card(&mut out, card);
        }
    }

    let _ = write!(out, "\nrevision {}", snapshot.revision);
    out
}

fn render_person(out: &mut String, person: &Person) {
    let _ = write!(
        out,
        "  [{}] {} {} #{}",
        person.initials,
        person.name,
        person.color,
        short_id(person.id)
    );
    if !person.interests.is_empty() {
        let _ = write!(out, " likes: {}", person.interests.join(", "));
    }
    out.push('\n');
}

fn render_card(out: &mut String, card: &Card) {
    let _ = write!(out, "  * {}", card.title);
    if let Some(time) = &card.time {
        let _ = write!(out, " ({time})");
    }
    let _ = writeln!(out, " #{}", short_id(card.id));
    for note in &card.notes {
        let _ = writeln!(out, "      - {} #{}", note.text, short_id(note.id));
    }
}

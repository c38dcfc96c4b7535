//! Shell command grammar.
//!
//! # Responsibility
//! - Split an input line into argv-style tokens, honoring `"double"` and
//!   `'single'` quotes.
//! - Parse tokens with clap into a typed `Command`; IDs stay raw text here
//!   and are resolved against the board by the shell.

use clap::{Parser, Subcommand};
use once_cell::sync::Lazy;
use regex::Regex;
use tripboard_core::{ContainerId, DayId};

static TOKEN_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#""([^"]*)"|'([^']*)'|(\S+)"#).expect("valid token regex")
});

/// One shell input line.
#[derive(Parser, Debug)]
#[command(
    name = "tripboard",
    no_binary_name = true,
    disable_version_flag = true,
    about = "Plan a weekend: participants, floating cards and day columns",
    after_help = "IDs may be shortened to any unique prefix. Quote text containing spaces."
)]
struct ShellLine {
    #[command(subcommand)]
    command: Command,
}

/// Shell commands.
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Manage participants
    #[command(subcommand)]
    Person(PersonCommand),

    /// Manage cards
    #[command(subcommand)]
    Card(CardCommand),

    /// Manage notes on a card
    #[command(subcommand)]
    Note(NoteCommand),

    /// Move a card between containers (floating|friday|saturday|sunday)
    #[command(visible_alias = "mv")]
    Move {
        source: ContainerId,
        destination: ContainerId,
        card: String,
    },

    /// Render the board
    #[command(visible_alias = "ls")]
    Show,

    /// Print the board snapshot as JSON
    Json,

    /// End the session
    #[command(visible_alias = "exit")]
    Quit,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum PersonCommand {
    /// Add a participant
    Add {
        name: String,
        /// Interests, space or comma separated
        #[arg(value_delimiter = ',')]
        interests: Vec<String>,
    },
    /// Remove a participant
    Rm { person: String },
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum CardCommand {
    /// Add a card to a day, or to the floating area
    Add {
        title: String,
        /// Time label such as 10-12
        #[arg(long)]
        time: Option<String>,
        #[arg(long)]
        day: Option<DayId>,
    },
    /// Remove a card from a day, or from the floating area
    Rm {
        card: String,
        #[arg(long)]
        day: Option<DayId>,
    },
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum NoteCommand {
    /// Append a note to a card
    Add {
        card: String,
        text: String,
        #[arg(long)]
        day: Option<DayId>,
    },
    /// Replace a note's text
    Edit {
        card: String,
        note: String,
        text: String,
        #[arg(long)]
        day: Option<DayId>,
    },
    /// Delete a note
    Rm {
        card: String,
        note: String,
        #[arg(long)]
        day: Option<DayId>,
    },
}

fn tokenize(line: &str) -> Vec<String> {
    TOKEN_RE
        .captures_iter(line)
        .filter_map(|caps| {
            caps.get(1)
                .or_else(|| caps.get(2))
                .or_else(|| caps.get(3))
                .map(|token| token.as_str().to_string())
        })
        .collect()
}

/// Parses one input line. Blank lines yield `Ok(None)`.
///
/// `help` and `--help` come back as a clap error of kind `DisplayHelp`
/// carrying the rendered help text.
pub fn parse(line: &str) -> Result<Option<Command>, clap::Error> {
    let tokens = tokenize(line);
    if tokens.is_empty() {
        return Ok(None);
    }
    ShellLine::try_parse_from(tokens).map(|parsed| Some(parsed.command))
}

//! Interactive planning board shell.
//!
//! Reads one command per line and prints the outcome. A terminal gets line
//! editing and history; piped stdin is read line by line. Logging is
//! enabled when `TRIPBOARD_LOG_DIR` is set; `TRIPBOARD_LOG_LEVEL` overrides
//! the build default.

mod command;
mod render;
mod shell;

use log::info;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use shell::{Reply, Shell};
use std::io::{self, BufRead, IsTerminal, Write};

const PROMPT: &str = "tripboard> ";

fn main() {
    init_logging_from_env();

    let result = if io::stdin().is_terminal() {
        run_interactive().map_err(|err| err.to_string())
    } else {
        run(io::stdin().lock(), io::stdout().lock()).map_err(|err| err.to_string())
    };
    if let Err(err) = result {
        eprintln!("tripboard: {err}");
        std::process::exit(1);
    }
}

fn init_logging_from_env() {
    let Ok(log_dir) = std::env::var("TRIPBOARD_LOG_DIR") else {
        return;
    };
    let level = std::env::var("TRIPBOARD_LOG_LEVEL")
        .unwrap_or_else(|_| tripboard_core::default_log_level().to_string());
    if let Err(err) = tripboard_core::init_logging(&level, &log_dir) {
        eprintln!("tripboard: logging disabled: {err}");
    }
}

fn banner() -> String {
    info!(
        "event=shell_start module=cli status=ok version={}",
        tripboard_core::core_version()
    );
    format!("tripboard {} (type `help`)", tripboard_core::core_version())
}

/// Line-edited session on a terminal. Ctrl-C drops the current line, Ctrl-D
/// ends the session.
fn run_interactive() -> rustyline::Result<()> {
    println!("{}", banner());
    let mut rl = DefaultEditor::new()?;
    let mut shell = Shell::new();

    loop {
        match rl.readline(PROMPT) {
            Ok(line) => {
                let line = line.trim();
                if !line.is_empty() {
                    rl.add_history_entry(line)?;
                }
                match shell.execute(line) {
                    Reply::Quit => break,
                    Reply::Text(text) if text.is_empty() => {}
                    Reply::Text(text) => println!("{text}"),
                }
            }
            Err(ReadlineError::Interrupted) => {
                println!("^C");
            }
            Err(ReadlineError::Eof) => break,
            Err(err) => return Err(err),
        }
    }

    info!("event=shell_stop module=cli status=ok");
    Ok(())
}

/// Plain session over any line source, used for piped stdin.
fn run(input: impl BufRead, mut output: impl Write) -> io::Result<()> {
    writeln!(output, "{}", banner())?;

    let mut shell = Shell::new();
    for line in input.lines() {
        match shell.execute(&line?) {
            Reply::Quit => break,
            Reply::Text(text) if text.is_empty() => {}
            Reply::Text(text) => writeln!(output, "{text}")?,
        }
    }

    info!("event=shell_stop module=cli status=ok");
    output.flush()
}

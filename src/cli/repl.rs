//! Interactive REPL for gwalk, driven by slash commands.
//!
//! Launch with `gwalk` (no subcommand) to enter interactive mode.
//! Type `/help` for available commands, Tab for completion.

use std::io::Write;
use std::path::PathBuf;

use rustyline::config::CompletionType;
use rustyline::error::ReadlineError;
use rustyline::history::DefaultHistory;
use rustyline::{Config, Editor};

use crate::cli::repl_commands::{self, ReplState};
use crate::cli::repl_complete::{self, GwalkHelper};
use crate::types::GraphResult;

const PROMPT: &str = "gwalk> ";

/// `$HOME/.gwalk_history`, falling back to the working directory.
fn history_path() -> PathBuf {
    std::env::var_os("HOME")
        .or_else(|| std::env::var_os("USERPROFILE"))
        .map(PathBuf::from)
        .unwrap_or_default()
        .join(".gwalk_history")
}

fn editor() -> GraphResult<Editor<GwalkHelper, DefaultHistory>> {
    let config = Config::builder()
        .auto_add_history(true)
        .completion_type(CompletionType::List)
        .build();
    let mut rl = Editor::with_config(config)?;
    rl.set_helper(Some(GwalkHelper::new()));
    repl_complete::bind_keys(&mut rl);
    Ok(rl)
}

/// Run the interactive REPL until `/exit` or end of input.
pub fn run() -> GraphResult<()> {
    let mut rl = editor()?;
    let hist_path = history_path();
    if let Err(err) = rl.load_history(&hist_path) {
        log::debug!("no history loaded from {}: {err}", hist_path.display());
    }

    let mut state = ReplState::new();
    let mut stdout = std::io::stdout();
    writeln!(
        stdout,
        "gwalk v{}: /node, /edge, /bfs, /dfs ... (/help lists all, /exit quits)",
        env!("CARGO_PKG_VERSION")
    )?;

    loop {
        let line = match rl.readline(PROMPT) {
            Ok(line) => line,
            Err(ReadlineError::Interrupted) => {
                writeln!(stdout, "  (Ctrl+C) Type /exit to quit.")?;
                continue;
            }
            Err(ReadlineError::Eof) => break,
            Err(err) => return Err(err.into()),
        };
        if line.trim().is_empty() {
            continue;
        }
        match repl_commands::execute(&line, &mut state, &mut stdout) {
            Ok(true) => break,
            Ok(false) => {}
            Err(err) => writeln!(stdout, "  Error: {err}")?,
        }
        stdout.flush()?;
    }

    if let Err(err) = rl.save_history(&hist_path) {
        log::warn!("could not save history to {}: {err}", hist_path.display());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn history_file_name() {
        assert_eq!(
            history_path().file_name().and_then(|n| n.to_str()),
            Some(".gwalk_history")
        );
    }
}

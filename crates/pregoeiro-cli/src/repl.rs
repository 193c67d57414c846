//! `pregoeiro session`: one cockpit, many commands, one line at a time.

use std::io::{BufRead, Write};

use anyhow::Context;
use clap::Parser;
use tracing::{debug, warn};

use crate::cli::{SessionCommands, SessionLine};
use crate::commands::Cockpit;

const PROMPT: &str = "pregoeiro> ";

/// Read commands from `input` until EOF or `quit`. A bad line is reported
/// and the session carries on.
pub fn run_session(cockpit: &mut Cockpit, input: impl BufRead) -> anyhow::Result<()> {
    prompt()?;
    for line in input.lines() {
        let line = line.context("reading session input")?;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            prompt()?;
            continue;
        }

        let Some(words) = shlex::split(trimmed) else {
            eprintln!("unbalanced quotes: {trimmed}");
            prompt()?;
            continue;
        };

        match SessionLine::try_parse_from(&words) {
            Ok(parsed) => {
                debug!(line = trimmed, "session command");
                if !dispatch(cockpit, parsed.command)? {
                    return Ok(());
                }
            }
            Err(err) => {
                // clap renders help/usage through the same error path.
                let _ = err.print();
            }
        }
        prompt()?;
    }
    Ok(())
}

/// Returns `false` once the session should end.
fn dispatch(cockpit: &mut Cockpit, command: SessionCommands) -> anyhow::Result<bool> {
    let outcome = match command {
        SessionCommands::Quit => return Ok(false),
        SessionCommands::Info => cockpit.info(),
        SessionCommands::Eligibility(args) => cockpit.eligibility(&args),
        SessionCommands::Deadline(args) => cockpit.deadline(&args),
        SessionCommands::Show => cockpit.show(),
        SessionCommands::Announce(args) => cockpit.announce(&args),
        SessionCommands::Scenarios => cockpit.scenarios(),
    };
    if let Err(err) = outcome {
        warn!(error = %err, "session command failed");
        eprintln!("error: {err:#}");
    }
    Ok(true)
}

fn prompt() -> anyhow::Result<()> {
    let mut stderr = std::io::stderr();
    write!(stderr, "{PROMPT}")?;
    stderr.flush()?;
    Ok(())
}

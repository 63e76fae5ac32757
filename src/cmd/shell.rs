use crate::reports;
use clap::Args;
use letterdraw::config::Config;
use letterdraw::error::PkResult;
use letterdraw::selector::{ExclusionKind, IndexSource, Letter};
use letterdraw::session::Session;
use std::io::{self, BufRead, Write};
use std::str::FromStr;
use tracing::debug;

const HELP: &str = "\
Commands:
  <letter>           pick a random item starting with that letter
  reroll             draw again for the current letter
  toggle <switch>    flip outside-pelican | perfection-locked | mastery-locked | mineral-locked
  wildcard on|off    letter X picks everything except X
  status             show the current state
  help               this text
  quit               leave";

#[derive(Args, Debug, Clone)]
pub struct ShellArgs {
    #[command(flatten)]
    pub config: Config,
}

pub fn run(args: ShellArgs, session: &mut Session) -> PkResult<()> {
    session.apply_filters(args.config.filters.wildcard, args.config.filters.exclusions());
    let mut rng = args.config.rng.build();

    let stdin = io::stdin();
    let stdout = io::stdout();
    run_loop(stdin.lock(), stdout.lock(), session, &mut rng)
}

/// Reads one command per line until EOF or `quit`.
pub fn run_loop<I: BufRead, W: Write, R: IndexSource>(
    input: I,
    mut out: W,
    session: &mut Session,
    rng: &mut R,
) -> PkResult<()> {
    writeln!(out, "Type a letter to pick an item, 'help' for commands.")?;

    for line in input.lines() {
        let line = line?;
        let mut words = line.split_whitespace();
        let Some(cmd) = words.next() else {
            continue;
        };
        debug!("shell command: {}", line.trim());

        match cmd.to_lowercase().as_str() {
            "quit" | "exit" => break,
            "help" | "?" => writeln!(out, "{}", HELP)?,
            "status" => writeln!(out, "{}", reports::render_status(session))?,
            "reroll" | "again" => match session.reroll(rng) {
                Some(shown) => writeln!(out, "{}", reports::render_shown(&shown))?,
                None => writeln!(out, "Pick a letter first.")?,
            },
            "toggle" => {
                let Some(name) = words.next() else {
                    writeln!(out, "Usage: toggle <switch>")?;
                    continue;
                };
                match ExclusionKind::from_str(name) {
                    Ok(kind) => {
                        let outcome = session.toggle(kind, rng);
                        writeln!(
                            out,
                            "{}: {}",
                            outcome.kind,
                            if outcome.enabled { "on" } else { "off" }
                        )?;
                        if let Some(shown) = outcome.rerolled {
                            writeln!(out, "{}", reports::render_shown(&shown))?;
                        }
                    }
                    Err(_) => writeln!(out, "Unknown switch '{}'", name)?,
                }
            }
            "wildcard" => match words.next() {
                Some("on") => {
                    session.wildcard_on();
                    writeln!(out, "letter X wildcard mode engaged")?;
                }
                Some("off") => {
                    if session.wildcard_off() {
                        writeln!(out, "wildcard mode off")?;
                    }
                }
                _ => writeln!(out, "Usage: wildcard on|off")?,
            },
            other => match Letter::from_str(other) {
                Ok(letter) => {
                    let shown = session.select_letter(letter, rng);
                    writeln!(out, "{}", reports::render_shown(&shown))?;
                }
                Err(_) => writeln!(out, "Unknown command '{}'. Type 'help'.", other)?,
            },
        }
    }

    out.flush()?;
    Ok(())
}

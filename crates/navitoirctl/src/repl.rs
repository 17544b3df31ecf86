//! Interactive loop.
//!
//! Lines starting with ':' are meta-commands; everything else goes to the
//! engine. Deferred steps run to completion before the next prompt.

use crate::content::ContentRegistry;
use crate::render;
use anyhow::Result;
use navitoir_shared::{ActionDirective, Locale, NavitoirError, SettingsStore};
use owo_colors::OwoColorize;
use std::io::{self, BufRead, Write};
use std::time::Instant;

use crate::session::Session;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Meta {
    State,
    Locale(Option<Locale>),
    Quit,
    Unknown(String),
}

/// Parse a meta-command line, `None` for ordinary utterances
pub fn parse_meta(line: &str) -> Option<Meta> {
    let rest = line.trim().strip_prefix(':')?;
    let mut parts = rest.split_whitespace();
    let cmd = parts.next().unwrap_or("");
    let meta = match cmd {
        "state" | "s" => Meta::State,
        "quit" | "q" | "exit" => Meta::Quit,
        "locale" | "lang" => Meta::Locale(parts.next().and_then(|l| l.parse().ok())),
        other => Meta::Unknown(other.to_string()),
    };
    Some(meta)
}

pub fn prompt<S: SettingsStore>(session: &Session<S>) -> String {
    format!(
        "navitoir [{}|{}]> ",
        session.locale(),
        session.engine().state().theme
    )
}

/// Print one engine turn plus its released steps
pub fn print_turn<S: SettingsStore>(
    session: &mut Session<S>,
    content: &ContentRegistry,
    text: &str,
    sleep: bool,
) -> Result<()> {
    let turn = match session.handle(text, Instant::now()) {
        Ok(turn) => turn,
        Err(e) => match e.downcast_ref::<NavitoirError>() {
            Some(NavitoirError::Busy) => {
                println!("{}", e.to_string().yellow());
                return Ok(());
            }
            _ => return Err(e),
        },
    };

    println!("{}", render::markdown(&turn.response.message));
    if turn.response.directive == ActionDirective::Handoff {
        println!("{}", render::handoff_notice(text, session.locale()).dimmed());
    }

    session.run_pending(sleep, |step| {
        println!("{}", render::describe_effect(&step.effect, content).dimmed());
    });
    Ok(())
}

pub fn run<S: SettingsStore>(session: &mut Session<S>, content: &ContentRegistry) -> Result<()> {
    println!(
        "{}",
        session
            .locale()
            .pick(
                "Navitoir ready. Try \"help\", or :quit to leave.",
                "Navitoir bereit. Versuchen Sie \"hilfe\", oder :quit zum Beenden."
            )
            .bold()
    );

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        print!("{}", prompt(session));
        io::stdout().flush()?;

        let input = match lines.next() {
            Some(Ok(line)) => line,
            Some(Err(e)) => {
                eprintln!("Error reading input: {}", e);
                continue;
            }
            None => break,
        };
        if input.trim().is_empty() {
            continue;
        }

        match parse_meta(&input) {
            Some(Meta::Quit) => break,
            Some(Meta::State) => {
                for line in render::state_lines(session.engine().state(), session.locale()) {
                    println!("  {}", line);
                }
            }
            Some(Meta::Locale(Some(locale))) => {
                session.set_locale(locale);
                println!("{}", locale.pick("Locale set to en", "Sprache auf de gesetzt"));
            }
            Some(Meta::Locale(None)) => println!("Usage: :locale en|de"),
            Some(Meta::Unknown(cmd)) => println!("Unknown command ':{}' (:state, :locale, :quit)", cmd),
            None => print_turn(session, content, &input, true)?,
        }
    }
    Ok(())
}

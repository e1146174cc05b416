//! Terminal front-end for wizard-duel.
//!
//! Reads one command per line from stdin and prints the screen after every
//! change. Enemy answers play out in real time unless `--fast` is given.

use anyhow::{Context, Result};
use clap::Parser;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use wizard_duel::{DuelConfig, DuelError, House, Session, SessionView};

#[derive(Parser, Debug)]
#[command(name = "wizard-duel", version, about = "A turn-based wizard duel in your terminal")]
struct Cli {
    /// Seed for enemy selection (overrides the config file)
    #[arg(long)]
    seed: Option<u64>,

    /// TOML config file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Resolve enemy answers instantly instead of waiting
    #[arg(long)]
    fast: bool,
}

const HELP: &str = "\
Commands:
  start <name> <house>   begin the duel
  cast <number|name>     cast a spell (or just type its number)
  restore | r            restore mana
  reset                  back to the start screen
  help                   this text
  quit                   leave";

enum Command {
    Start { name: String, house: Option<House> },
    Cast(String),
    Restore,
    Reset,
    Help,
    Quit,
}

fn parse_command(line: &str) -> Result<Option<Command>, String> {
    let line = line.trim();
    let (verb, rest) = line
        .split_once(char::is_whitespace)
        .map(|(v, r)| (v, r.trim()))
        .unwrap_or((line, ""));

    let command = match verb.to_ascii_lowercase().as_str() {
        "" => return Ok(None),
        "start" => {
            // Last word is the house; everything before it is the name.
            let (name, house) = match rest.rsplit_once(char::is_whitespace) {
                Some((name, house)) => (name.trim(), Some(house)),
                None => (rest, None),
            };
            let house = match house {
                Some(h) => Some(h.parse::<House>().map_err(|e| e.to_string())?),
                None => None,
            };
            Command::Start {
                name: name.to_string(),
                house,
            }
        }
        "cast" if !rest.is_empty() => Command::Cast(rest.to_string()),
        "restore" | "r" => Command::Restore,
        "reset" => Command::Reset,
        "help" | "?" => Command::Help,
        "quit" | "exit" | "q" => Command::Quit,
        _ if verb.chars().all(|c| c.is_ascii_digit()) && rest.is_empty() => Command::Cast(verb.to_string()),
        _ => return Err(format!("unknown command: {} (try 'help')", line)),
    };
    Ok(Some(command))
}

/// Resolve a spell given by 1-based number or case-insensitive name.
fn resolve_spell(session: &Session, wanted: &str) -> Option<String> {
    let grimoire = session.grimoire();
    if let Ok(n) = wanted.parse::<usize>() {
        return n
            .checked_sub(1)
            .and_then(|i| grimoire.get_index(i))
            .map(|s| s.name.clone());
    }
    grimoire
        .iter()
        .find(|s| s.name.eq_ignore_ascii_case(wanted))
        .map(|s| s.name.clone())
}

fn apply(session: &mut Session, command: Command) -> Result<(), DuelError> {
    match command {
        Command::Start { name, house } => session.start_game(&name, house),
        Command::Cast(wanted) => {
            let spell = resolve_spell(session, &wanted).unwrap_or(wanted);
            session.cast_spell(&spell).map(|_| ())
        }
        Command::Restore => session.restore_mana().map(|_| ()),
        Command::Reset => {
            session.reset_game();
            Ok(())
        }
        Command::Help | Command::Quit => Ok(()),
    }
}

/// Play out the enemy's answers, redrawing after each one.
fn play_out(session: &mut Session, fast: bool, out: &mut impl Write) -> io::Result<()> {
    while session.has_pending() {
        let wait = session.next_due_in().unwrap_or_default();
        if !fast {
            std::thread::sleep(wait);
        }
        let events = session.advance(wait);
        if !events.is_empty() {
            tracing::debug!(count = events.len(), "continuations ran");
            write!(out, "\n{}", SessionView::capture(session))?;
            out.flush()?;
        }
    }
    Ok(())
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => DuelConfig::load(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => DuelConfig::default(),
    };
    if let Some(seed) = cli.seed {
        config = config.with_seed(seed);
    }
    tracing::info!(seed = config.seed, fast = cli.fast, "starting wizard-duel");

    let mut session = Session::new(config).context("building session")?;
    let stdin = io::stdin();
    let mut out = io::stdout().lock();

    write!(out, "{}> ", SessionView::capture(&session))?;
    out.flush()?;

    for line in stdin.lock().lines() {
        let line = line.context("reading stdin")?;
        match parse_command(&line) {
            Ok(None) => {}
            Ok(Some(Command::Quit)) => break,
            Ok(Some(Command::Help)) => writeln!(out, "{}", HELP)?,
            Ok(Some(command)) => {
                if let Err(e) = apply(&mut session, command) {
                    tracing::debug!(error = %e, "action rejected");
                    writeln!(out, "! {}", e)?;
                } else {
                    write!(out, "\n{}", SessionView::capture(&session))?;
                    out.flush()?;
                    play_out(&mut session, cli.fast, &mut out)?;
                }
            }
            Err(message) => writeln!(out, "! {}", message)?,
        }
        write!(out, "> ")?;
        out.flush()?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_start() {
        match parse_command("start Harry James Potter gryffindor") {
            Ok(Some(Command::Start { name, house })) => {
                assert_eq!(name, "Harry James Potter");
                assert_eq!(house, Some(House::Gryffindor));
            }
            _ => panic!("expected start"),
        }

        match parse_command("start Harry") {
            Ok(Some(Command::Start { name, house })) => {
                assert_eq!(name, "Harry");
                assert_eq!(house, None);
            }
            _ => panic!("expected start"),
        }

        assert!(parse_command("start Harry Durmstrang").is_err());
    }

    #[test]
    fn test_parse_shortcuts() {
        assert!(matches!(parse_command("2"), Ok(Some(Command::Cast(s))) if s == "2"));
        assert!(matches!(parse_command("r"), Ok(Some(Command::Restore))));
        assert!(matches!(parse_command("  "), Ok(None)));
        assert!(matches!(parse_command("QUIT"), Ok(Some(Command::Quit))));
        assert!(parse_command("dance").is_err());
    }

    #[test]
    fn test_resolve_spell() {
        let session = Session::default();

        assert_eq!(resolve_spell(&session, "2").as_deref(), Some("Stupefy"));
        assert_eq!(resolve_spell(&session, "expecto patronum").as_deref(), Some("Expecto Patronum"));
        assert_eq!(resolve_spell(&session, "0"), None);
        assert_eq!(resolve_spell(&session, "9"), None);
    }

    #[test]
    fn test_fast_play_out() {
        let mut session = Session::with_seed(5);
        session.start_game("Harry", Some(House::Gryffindor)).unwrap();
        apply(&mut session, Command::Cast("1".to_string())).unwrap();

        let mut out = Vec::new();
        play_out(&mut session, true, &mut out).unwrap();

        assert!(!session.has_pending());
        assert!(session.player().hp() < 100);
        assert!(String::from_utf8(out).unwrap().contains("attacks!"));
    }
}

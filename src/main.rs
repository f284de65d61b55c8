//! Strictly XO - terminal front end
//!
//! Reads moves from stdin as `row,col` and draws the board after each one.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::Cli;
use std::io::BufRead;
use strictly_xo::{BoardSnapshot, GameConfig, GameOutcome, Marks, Phase, Presenter, Session};
use tracing::{debug, error, info, warn};
use tracing_subscriber::EnvFilter;

/// Draws the grid as text on stdout.
struct TextPresenter {
    marks: Marks,
}

impl Presenter for TextPresenter {
    fn render(&mut self, snapshot: &BoardSnapshot) {
        println!();
        print!("{}", snapshot.render(&self.marks));
        if *snapshot.phase() == Phase::InProgress {
            let player = snapshot.current_player();
            println!(
                "{} ({}) to move, {} in a row wins:",
                player,
                self.marks.symbol((*player).into()),
                snapshot.win_length()
            );
        }
    }

    fn announce(&mut self, outcome: GameOutcome) {
        println!("{}", outcome);
    }
}

/// Writes snapshots and outcomes as JSON lines on stdout.
struct JsonPresenter;

impl Presenter for JsonPresenter {
    fn render(&mut self, snapshot: &BoardSnapshot) {
        match serde_json::to_string(snapshot) {
            Ok(line) => println!("{}", line),
            Err(e) => error!(error = %e, "Failed to serialize snapshot"),
        }
    }

    fn announce(&mut self, outcome: GameOutcome) {
        match serde_json::to_string(&outcome) {
            Ok(line) => println!("{}", line),
            Err(e) => error!(error = %e, "Failed to serialize outcome"),
        }
    }
}

/// A line of user input.
#[derive(Debug, PartialEq, Eq)]
enum Input {
    Quit,
    Help,
    Start(Option<usize>),
    Select(usize, usize),
    Unknown,
}

impl Input {
    fn parse(line: &str) -> Self {
        let line = line.trim();
        let mut words = line.split_whitespace();
        match words.next() {
            Some("q" | "quit" | "exit") => Input::Quit,
            Some("h" | "help" | "?") => Input::Help,
            Some("new" | "start") => match words.next() {
                None => Input::Start(None),
                Some(size) => size
                    .parse()
                    .map(|size| Input::Start(Some(size)))
                    .unwrap_or(Input::Unknown),
            },
            _ => strictly_xo::Position::parse(line)
                .map(|pos| Input::Select(pos.row, pos.col))
                .unwrap_or(Input::Unknown),
        }
    }
}

const HELP: &str = "Commands:\n  <row>,<col>   claim a cell (zero-based)\n  new [size]    start a new game\n  quit          leave";

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();

    let mut config = GameConfig::load_or_default(&cli.config)
        .with_context(|| format!("Loading {}", cli.config.display()))?;
    if let Some(size) = cli.size {
        config = config.with_size(size);
    }
    let auto_restart = *config.auto_restart() && !cli.no_restart;

    info!(size = config.size(), json = cli.json, auto_restart, "Starting session");

    if cli.json {
        let session = Session::new(*config.size(), JsonPresenter).with_auto_restart(auto_restart);
        run(session, false)
    } else {
        println!("{}", HELP);
        let presenter = TextPresenter {
            marks: config.marks(),
        };
        let session = Session::new(*config.size(), presenter).with_auto_restart(auto_restart);
        run(session, true)
    }
}

/// Feeds stdin lines into the session until EOF or `quit`.
fn run<P: Presenter>(mut session: Session<P>, chatty: bool) -> Result<()> {
    let stdin = std::io::stdin();
    for line in stdin.lock().lines() {
        let line = line.context("Reading stdin")?;
        match Input::parse(&line) {
            Input::Quit => break,
            Input::Help => println!("{}", HELP),
            Input::Start(size) => {
                let size = size.unwrap_or_else(|| session.engine().size());
                session.on_start_requested(size);
            }
            Input::Select(row, col) => match session.on_cell_selected(row, col) {
                Ok(outcome) => debug!(?outcome, "Turn applied"),
                Err(e) => {
                    warn!(error = %e, "Turn rejected");
                    if chatty {
                        println!("{}", e);
                    }
                }
            },
            Input::Unknown => {
                if chatty {
                    println!("Unrecognized input {:?}. Type `help` for commands.", line.trim());
                }
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_input() {
        assert_eq!(Input::parse("quit"), Input::Quit);
        assert_eq!(Input::parse(" 1,2 "), Input::Select(1, 2));
        assert_eq!(Input::parse("2 0"), Input::Select(2, 0));
        assert_eq!(Input::parse("new"), Input::Start(None));
        assert_eq!(Input::parse("new 6"), Input::Start(Some(6)));
        assert_eq!(Input::parse("new big"), Input::Unknown);
        assert_eq!(Input::parse("hello"), Input::Unknown);
    }
}

//! # gofish CLI Library
//!
//! Command-line front end for the Go Fish engine: play at the terminal,
//! simulate computer-only games, inspect a deal, and show configuration.
//!
//! [`run`] is what the `gofish` binary calls; tests drive it with in-memory
//! writers.
//!
//! ## Subcommands
//!
//! - `play`: Play a game against computer opponents (or other humans at the same terminal)
//! - `sim`: Run computer-only games and report wins and average sets
//! - `deal`: Deal the opening hands for inspection
//! - `cfg`: Display current configuration settings

use clap::{Parser, Subcommand};
use std::io::Write;
pub mod commands;
pub mod config;
mod error;
pub mod exit_code;
pub mod formatters;
pub mod io_utils;
pub mod logging;
mod macros;
pub mod ui;
pub mod validation;

use commands::play::PlayOptions;
use commands::sim::SimOptions;
use commands::{handle_cfg_command, handle_deal_command, handle_play_command, handle_sim_command};

pub use error::{BatchValidationError, CliError};

const COMMANDS: &[&str] = &["play", "sim", "deal", "cfg"];

#[derive(Parser, Debug)]
#[command(name = "gofish", version, about = "Go Fish card game")]
pub struct GoFishCli {
    /// Raise diagnostic logging to debug (overrides RUST_LOG)
    #[arg(long, short, global = true)]
    pub verbose: bool,
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Play an interactive game on the terminal
    Play {
        /// Number of seats (2-4)
        #[arg(long)]
        players: Option<usize>,
        /// Number of human seats; humans sit first
        #[arg(long)]
        humans: Option<usize>,
        /// Name of a human player, repeat once per human
        #[arg(long = "name")]
        names: Vec<String>,
        /// Stop after three full rounds
        #[arg(long)]
        demo: bool,
        #[arg(long)]
        seed: Option<u64>,
        /// Write the finished game as a JSON line to this file
        #[arg(long)]
        log: Option<String>,
    },
    /// Run computer-only games and report results
    Sim {
        #[arg(long)]
        games: u32,
        #[arg(long)]
        players: Option<usize>,
        /// Base seed; game i uses seed + i
        #[arg(long)]
        seed: Option<u64>,
        #[arg(long)]
        demo: bool,
        /// Write one JSON record per game to this file
        #[arg(long)]
        output: Option<String>,
    },
    /// Deal the opening hands and show them
    Deal {
        #[arg(long)]
        players: Option<usize>,
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Show the resolved configuration and where each value came from
    Cfg,
}

/// Parses `args`, merges the resolved configuration with the command's
/// flags and runs the command.
///
/// Game output goes to `out`; diagnostics and usage go to `err`. Logging is
/// initialised here, so `-v` turns on engine debug events.
///
/// Returns the process exit code: `0` for success, `2` for errors, `130` when a game is abandoned
///
/// # Example
///
/// ```
/// use std::io;
/// let args = vec!["gofish", "deal", "--players", "2", "--seed", "42"];
/// let code = gofish_cli::run(args, &mut io::stdout(), &mut io::stderr());
/// assert_eq!(code, 0);
/// ```
pub fn run<I, S>(args: I, out: &mut dyn Write, err: &mut dyn Write) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let argv: Vec<String> = args.into_iter().map(|s| s.as_ref().to_string()).collect();

    let cli = match GoFishCli::try_parse_from(&argv) {
        Ok(cli) => cli,
        Err(e) => {
            use clap::error::ErrorKind;

            // Help and version should print to stdout and exit 0
            return match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                    if write!(out, "{}", e).is_err() {
                        return exit_code::ERROR;
                    }
                    exit_code::SUCCESS
                }
                _ => {
                    write_or_exit!(err, "{}", e);
                    write_or_exit!(err, "Usage: gofish <command> [options]\n");
                    write_or_exit!(err, "Commands:");
                    for c in COMMANDS {
                        write_or_exit!(err, "  {}", c);
                    }
                    write_or_exit!(err, "\nFor full help, run: gofish --help");
                    exit_code::ERROR
                }
            };
        }
    };

    logging::init_logging(cli.verbose);

    let result = match cli.cmd {
        Commands::Cfg => handle_cfg_command(out),
        Commands::Play {
            players,
            humans,
            names,
            demo,
            seed,
            log,
        } => config::load()
            .map_err(CliError::from)
            .and_then(|cfg| {
                let mut cfg = cfg;
                cfg.players = players.unwrap_or(cfg.players);
                cfg.humans = humans.unwrap_or(cfg.humans);
                cfg.demo_mode |= demo;
                cfg.seed = seed.or(cfg.seed);
                cfg.validate()?;
                Ok(PlayOptions {
                    players: cfg.players,
                    humans: cfg.humans,
                    names,
                    demo: cfg.demo_mode,
                    seed: cfg.seed,
                    ai: cfg.ai,
                    log,
                })
            })
            .and_then(|opts| {
                let stdin = std::io::stdin();
                let mut stdin_lock = stdin.lock();
                handle_play_command(&opts, out, err, &mut stdin_lock)
            }),
        Commands::Sim {
            games,
            players,
            seed,
            demo,
            output,
        } => config::load()
            .map_err(CliError::from)
            .and_then(|mut cfg| {
                cfg.players = players.unwrap_or(cfg.players);
                cfg.humans = 0;
                cfg.validate()?;
                Ok(SimOptions {
                    games,
                    players: cfg.players,
                    seed: seed.or(cfg.seed),
                    demo: demo || cfg.demo_mode,
                    ai: cfg.ai,
                    output,
                })
            })
            .and_then(|opts| handle_sim_command(&opts, out, err)),
        Commands::Deal { players, seed } => config::load()
            .map_err(CliError::from)
            .and_then(|cfg| {
                handle_deal_command(players.unwrap_or(cfg.players), seed.or(cfg.seed), out)
            }),
    };

    match result {
        Ok(()) => exit_code::SUCCESS,
        Err(CliError::Interrupted(msg)) => {
            if writeln!(err, "{}", msg).is_err() {
                return exit_code::ERROR;
            }
            exit_code::INTERRUPTED
        }
        Err(e) => {
            write_or_exit!(err, "Error: {}", e);
            exit_code::ERROR
        }
    }
}

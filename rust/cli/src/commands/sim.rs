//! Simulation command handler.
//!
//! Plays computer-only games back to back and reports how often each seat
//! won and how many sets it averaged. Game `i` (0-based) is seeded with
//! `seed + i`, so a base seed reproduces the whole batch. Every finished game
//! is checked for card conservation; a broken game fails the command.
//!
//! # Examples
//!
//! ```no_run
//! use gofish_cli::commands::sim::{handle_sim_command, SimOptions};
//! use std::io;
//!
//! let opts = SimOptions { games: 100, players: 4, seed: Some(42), demo: false,
//!     ai: "baseline".into(), output: Some("data/sim.jsonl".into()) };
//! handle_sim_command(&opts, &mut io::stdout(), &mut io::stderr()).unwrap();
//! ```

use super::{install_policy, seat_names};
use crate::error::{BatchValidationError, CliError};
use crate::ui;
use gofish_engine::engine::Engine;
use gofish_engine::game::{GameConfig, Phase};
use gofish_engine::logger::GameLogger;
use std::io::Write;

const DECK_SIZE: usize = 52;

#[derive(Debug, Clone)]
pub struct SimOptions {
    pub games: u32,
    pub players: usize,
    /// Base seed (game i uses seed + i)
    pub seed: Option<u64>,
    pub demo: bool,
    pub ai: String,
    /// JSONL file receiving one record per game
    pub output: Option<String>,
}

/// Handle the sim command.
///
/// # Returns
///
/// `Ok(())` on success, `CliError::InvalidInput` for zero games, and
/// `CliError::Engine` when any game breaks card conservation.
pub fn handle_sim_command(
    opts: &SimOptions,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    if opts.games == 0 {
        return Err(CliError::InvalidInput("games must be >= 1".to_string()));
    }

    let base_seed = opts.seed.unwrap_or_else(rand::random);
    let (names, humans) = seat_names(opts.players, 0, &[]);
    let mut logger = opts.output.as_deref().map(GameLogger::create).transpose()?;

    let mut wins = vec![0u32; names.len()];
    let mut sets = vec![0u64; names.len()];
    let mut turns = 0u64;
    let mut failures: Vec<BatchValidationError<u32>> = Vec::new();

    for i in 0..opts.games {
        let seed = base_seed.wrapping_add(u64::from(i));
        let config = GameConfig::new(&names, &humans, opts.demo)?.with_seed(seed);
        let mut eng = Engine::with_config(config)?;
        install_policy(&mut eng, &opts.ai)?;

        if eng.run_until_input() != Phase::GameOver {
            failures.push(BatchValidationError {
                item_context: i + 1,
                message: format!("stopped in {:?} (seed {})", eng.phase(), seed),
            });
            continue;
        }
        let accounted = eng.cards_accounted();
        if accounted != DECK_SIZE {
            failures.push(BatchValidationError {
                item_context: i + 1,
                message: format!(
                    "{} cards expected, found {} (seed {})",
                    DECK_SIZE, accounted, seed
                ),
            });
        }

        if let Some(w) = eng.winner() {
            wins[w] += 1;
        }
        for (seat, (_, score)) in eng.scores().into_iter().enumerate() {
            sets[seat] += u64::from(score);
        }
        turns += u64::from(eng.turns_played());
        tracing::debug!(game = i + 1, seed, turns = eng.turns_played(), "simulated game");

        if let Some(logger) = logger.as_mut() {
            let id = logger.next_id();
            logger.write(&eng.record(id))?;
        }
    }

    let header = format!("Simulated: {} games (seed={})", opts.games, base_seed);
    if opts.demo {
        writeln!(out, "{}", ui::tag_demo_output(&header))?;
    } else {
        writeln!(out, "{}", header)?;
    }
    let games = f64::from(opts.games);
    for (seat, name) in names.iter().enumerate() {
        writeln!(
            out,
            "{}: wins={} avg_sets={:.2}",
            name,
            wins[seat],
            sets[seat] as f64 / games
        )?;
    }
    writeln!(out, "Average turns: {:.1}", turns as f64 / games)?;
    if let Some(path) = &opts.output {
        writeln!(out, "Records written to {}", path)?;
    }

    if !failures.is_empty() {
        for failure in &failures {
            ui::write_error(err, &format!("game {}", failure))?;
        }
        return Err(CliError::Engine(format!(
            "{} game(s) failed validation",
            failures.len()
        )));
    }
    Ok(())
}

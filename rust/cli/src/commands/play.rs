//! # Play Command
//!
//! Interactive Go Fish on the terminal. Human seats sit first and are
//! prompted on stdin; computer seats are played by the engine, and every
//! table event is printed as it happens.
//!
//! - Rank prompt: a rank held in hand (`7`, `q`, `10`), or `quit`
//! - Target prompt: the number of a listed player, or `q`/`quit`
//! - Quitting before the game ends returns [`CliError::Interrupted`]

use super::{install_policy, seat_names};
use crate::error::CliError;
use crate::formatters::{format_hand, format_ranks, format_table, format_target_list};
use crate::io_utils::read_stdin_line;
use crate::ui;
use crate::validation::{ParseResult, parse_rank_choice, parse_target_choice};
use gofish_engine::cards::Rank;
use gofish_engine::engine::Engine;
use gofish_engine::events::{EventReceiver, GameEvent};
use gofish_engine::game::{GameConfig, Phase};
use gofish_engine::logger::GameLogger;
use std::io::{BufRead, Write};

/// Table setup for one interactive game, already merged with configuration.
#[derive(Debug, Clone)]
pub struct PlayOptions {
    pub players: usize,
    pub humans: usize,
    pub names: Vec<String>,
    pub demo: bool,
    pub seed: Option<u64>,
    pub ai: String,
    /// JSONL file receiving the finished game
    pub log: Option<String>,
}

/// Handle the play command: run one game to the end or until the player quits.
///
/// # Examples
///
/// ```ignore
/// use std::io::{stdin, stdout, stderr};
///
/// let opts = PlayOptions { players: 2, humans: 1, names: vec!["Ann".into()], demo: false,
///     seed: None, ai: "baseline".into(), log: None };
/// handle_play_command(&opts, &mut stdout(), &mut stderr(), &mut stdin().lock()).unwrap();
/// ```
pub fn handle_play_command(
    opts: &PlayOptions,
    out: &mut dyn Write,
    err: &mut dyn Write,
    stdin: &mut dyn BufRead,
) -> Result<(), CliError> {
    if opts.names.len() > opts.humans {
        ui::display_warning(
            err,
            &format!(
                "{} name(s) given for {} human seat(s); extra names are ignored",
                opts.names.len(),
                opts.humans
            ),
        )?;
    }

    let seed = opts.seed.unwrap_or_else(rand::random);
    let (names, humans) = seat_names(opts.players, opts.humans, &opts.names);
    let config = GameConfig::new(&names, &humans, opts.demo)?.with_seed(seed);
    let mut eng = Engine::with_config(config)?;
    install_policy(&mut eng, &opts.ai)?;
    let events = eng.subscribe();

    writeln!(out, "Welcome to Go Fish!")?;
    let header = format!(
        "play: players={} humans={} seed={}",
        opts.players, opts.humans, seed
    );
    if opts.demo {
        writeln!(out, "{}", ui::tag_demo_output(&header))?;
    } else {
        writeln!(out, "{}", header)?;
    }
    tracing::info!(seed, players = opts.players, humans = opts.humans, "interactive game");

    loop {
        let phase = eng.run_until_input();
        render_events(&events, out)?;
        if phase == Phase::GameOver {
            break;
        }

        match prompt_human_move(&eng, out, err, stdin)? {
            Some((rank, target)) => {
                if let Err(e) = eng.submit_move(rank, target) {
                    ui::write_error(err, &e.to_string())?;
                }
            }
            None => {
                writeln!(out, "Game abandoned.")?;
                return Err(CliError::Interrupted(
                    "player quit before the game ended".to_string(),
                ));
            }
        }
    }

    if let Some(path) = &opts.log {
        let mut logger = GameLogger::create(path)?;
        let id = logger.next_id();
        logger.write(&eng.record(id))?;
        writeln!(out, "Game record written to {}", path)?;
    }
    Ok(())
}

fn render_events(events: &EventReceiver, out: &mut dyn Write) -> Result<(), CliError> {
    for event in events.try_iter() {
        match event {
            GameEvent::Log { message } => writeln!(out, "{}", message)?,
            GameEvent::GameOver { summary } => {
                writeln!(out)?;
                for (i, line) in summary.lines().enumerate() {
                    if i == 0 {
                        writeln!(out, "{}", ui::banner(line))?;
                    } else {
                        writeln!(out, "{}", line)?;
                    }
                }
            }
            GameEvent::StateChanged { .. } => {}
        }
    }
    Ok(())
}

/// Asks the waiting human for a rank and a target. `None` means quit or EOF.
fn prompt_human_move(
    eng: &Engine,
    out: &mut dyn Write,
    err: &mut dyn Write,
    stdin: &mut dyn BufRead,
) -> Result<Option<(Rank, usize)>, CliError> {
    let seat = eng.current_player();
    let me = eng
        .player(seat)
        .ok_or_else(|| CliError::Engine(format!("no player at seat {}", seat)))?;

    writeln!(out)?;
    writeln!(out, "{}", ui::banner(&format!("{}'s turn", me.name())))?;
    writeln!(out, "Deck: {} cards remaining", eng.deck_remaining())?;
    for line in format_table(&eng.players()) {
        writeln!(out, "  {}", line)?;
    }
    writeln!(out, "Your hand: {}", format_hand(&me.hand()))?;

    let held = me.ranks();
    writeln!(out, "Available ranks to ask for: {}", format_ranks(&held))?;
    let rank = loop {
        write!(out, "Enter the rank you want to ask for: ")?;
        out.flush()?;
        let Some(line) = read_stdin_line(stdin) else {
            return Ok(None);
        };
        match parse_rank_choice(&line, &held) {
            ParseResult::Choice(rank) => break rank,
            ParseResult::Quit => return Ok(None),
            ParseResult::Invalid(msg) => ui::write_error(err, &msg)?,
        }
    };

    let targets = eng.valid_targets();
    writeln!(out, "Available players to ask:")?;
    for line in format_target_list(&eng.players(), &targets) {
        writeln!(out, "  {}", line)?;
    }
    let target = loop {
        write!(
            out,
            "Enter the number of the player you want to ask (1-{}): ",
            targets.len()
        )?;
        out.flush()?;
        let Some(line) = read_stdin_line(stdin) else {
            return Ok(None);
        };
        match parse_target_choice(&line, &targets) {
            ParseResult::Choice(seat) => break seat,
            ParseResult::Quit => return Ok(None),
            ParseResult::Invalid(msg) => ui::write_error(err, &msg)?,
        }
    };

    Ok(Some((rank, target)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn heads_up(seed: u64) -> PlayOptions {
        PlayOptions {
            players: 2,
            humans: 1,
            names: vec!["Ann".to_string()],
            demo: false,
            seed: Some(seed),
            ai: "baseline".to_string(),
            log: None,
        }
    }

    fn computers_only(players: usize, demo: bool) -> PlayOptions {
        PlayOptions {
            players,
            humans: 0,
            names: Vec::new(),
            demo,
            seed: Some(5),
            ai: "baseline".to_string(),
            log: None,
        }
    }

    #[test]
    fn test_quit_at_rank_prompt_interrupts() {
        let mut out = Vec::new();
        let mut err = Vec::new();
        let mut input = Cursor::new(b"quit\n");

        let result = handle_play_command(&heads_up(1), &mut out, &mut err, &mut input);
        assert!(matches!(result, Err(CliError::Interrupted(_))));

        let output = String::from_utf8(out).unwrap();
        assert!(output.starts_with("Welcome to Go Fish!"));
        assert!(output.contains("=== Ann's turn ==="));
        assert!(output.contains("Enter the rank you want to ask for:"));
        assert!(output.contains("Game abandoned."));
    }

    #[test]
    fn test_eof_interrupts() {
        let mut out = Vec::new();
        let mut err = Vec::new();
        let mut input = Cursor::new(b"");

        let result = handle_play_command(&heads_up(2), &mut out, &mut err, &mut input);
        assert!(matches!(result, Err(CliError::Interrupted(_))));
    }

    #[test]
    fn test_invalid_rank_reprompts() {
        let mut out = Vec::new();
        let mut err = Vec::new();
        let mut input = Cursor::new(b"zz\nquit\n");

        let _ = handle_play_command(&heads_up(3), &mut out, &mut err, &mut input);
        let errors = String::from_utf8(err).unwrap();
        assert!(errors.contains("Error: unknown rank 'zz'"));
        let output = String::from_utf8(out).unwrap();
        assert_eq!(output.matches("Enter the rank you want to ask for:").count(), 2);
    }

    #[test]
    fn test_scripted_ask_reaches_engine() {
        // Replay the same table to learn what Ann holds.
        let config = GameConfig::new(&["Ann", "AI-Bob"], &[true, false], false)
            .unwrap()
            .with_seed(42);
        let mut probe = Engine::with_config(config).unwrap();
        assert_eq!(probe.run_until_input(), Phase::AwaitingHumanMove);
        let rank = probe.player(0).unwrap().first_card().unwrap().rank;

        let mut out = Vec::new();
        let mut err = Vec::new();
        let script = format!("{}\n1\nquit\n", rank);
        let mut input = Cursor::new(script.into_bytes());

        let result = handle_play_command(&heads_up(42), &mut out, &mut err, &mut input);
        assert!(matches!(result, Err(CliError::Interrupted(_))));

        let output = String::from_utf8(out).unwrap();
        assert!(output.contains("1. AI-Bob ("));
        assert!(output.contains(&format!("Ann asks AI-Bob for any {}s", rank)));
    }

    #[test]
    fn test_computer_only_demo_runs_to_the_end() {
        let mut out = Vec::new();
        let mut err = Vec::new();
        let mut input = Cursor::new(b"");

        handle_play_command(&computers_only(3, true), &mut out, &mut err, &mut input).unwrap();

        let output = String::from_utf8(out).unwrap();
        assert!(output.contains("[DEMO MODE]"));
        assert!(output.contains("Demo mode: 3 rounds completed"));
        assert!(output.contains("=== Game Over (Demo Mode) ==="));
        assert!(output.contains("Winner: "));
    }

    #[test]
    fn test_extra_names_warn() {
        let mut opts = computers_only(2, true);
        opts.names = vec!["Ann".to_string()];
        let mut out = Vec::new();
        let mut err = Vec::new();
        let mut input = Cursor::new(b"");

        handle_play_command(&opts, &mut out, &mut err, &mut input).unwrap();
        let errors = String::from_utf8(err).unwrap();
        assert!(errors.contains("WARNING: 1 name(s) given for 0 human seat(s)"));
    }

    #[test]
    fn test_finished_game_is_logged() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("games").join("play.jsonl");
        let mut opts = computers_only(2, false);
        opts.log = Some(path.to_string_lossy().to_string());

        let mut out = Vec::new();
        let mut err = Vec::new();
        let mut input = Cursor::new(b"");
        handle_play_command(&opts, &mut out, &mut err, &mut input).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content.lines().count(), 1);
        let record: serde_json::Value = serde_json::from_str(content.trim()).unwrap();
        assert_eq!(record["seed"], 5);
        assert_eq!(record["players"][0], "AI-Alice");
    }

    #[test]
    fn test_duplicate_names_are_config_errors() {
        let opts = PlayOptions {
            players: 2,
            humans: 2,
            names: vec!["Ann".to_string(), "Ann".to_string()],
            demo: false,
            seed: Some(1),
            ai: "baseline".to_string(),
            log: None,
        };
        let mut out = Vec::new();
        let mut err = Vec::new();
        let mut input = Cursor::new(b"");
        let result = handle_play_command(&opts, &mut out, &mut err, &mut input);
        assert!(matches!(result, Err(CliError::Config(_))));
    }
}

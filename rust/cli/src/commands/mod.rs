//! Command handler modules for the `gofish` CLI.
//!
//! Each command lives in its own file with a consistent pattern:
//!
//! - Public handler function: `pub fn handle_COMMAND_command(...) -> Result<(), CliError>`
//! - Dependency injection: output streams (`&mut dyn Write`) and stdin are parameters
//! - Error propagation: all errors are returned as `CliError`

pub mod cfg;
pub mod deal;
pub mod play;
pub mod sim;

pub use cfg::handle_cfg_command;
pub use deal::handle_deal_command;
pub use play::handle_play_command;
pub use sim::handle_sim_command;

use crate::error::CliError;
use gofish_engine::engine::Engine;
use gofish_engine::policy::create_policy;

/// Computer seat names, indexed by seat.
pub const AI_NAMES: [&str; 4] = ["AI-Alice", "AI-Bob", "AI-Charlie", "AI-Dave"];

/// Seat names and humanity flags for a table of `players` seats whose first
/// `humans` seats are people. Missing human names default to `Player N`.
pub(crate) fn seat_names(
    players: usize,
    humans: usize,
    names: &[String],
) -> (Vec<String>, Vec<bool>) {
    (0..players)
        .map(|seat| {
            if seat < humans {
                let name = names
                    .get(seat)
                    .cloned()
                    .unwrap_or_else(|| format!("Player {}", seat + 1));
                (name, true)
            } else {
                let name = AI_NAMES
                    .get(seat)
                    .map(|n| n.to_string())
                    .unwrap_or_else(|| format!("AI-{}", seat + 1));
                (name, false)
            }
        })
        .unzip()
}

/// Gives every computer seat the named policy.
pub(crate) fn install_policy(eng: &mut Engine, ai: &str) -> Result<(), CliError> {
    for seat in 0..eng.player_count() {
        if eng.is_human(seat) {
            continue;
        }
        let policy = create_policy(ai)
            .ok_or_else(|| CliError::Config(format!("unknown ai '{}'", ai)))?;
        eng.set_policy(seat, policy)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn humans_sit_first_with_default_names() {
        let (names, humans) = seat_names(4, 2, &["Ann".to_string()]);
        assert_eq!(names, vec!["Ann", "Player 2", "AI-Charlie", "AI-Dave"]);
        assert_eq!(humans, vec![true, true, false, false]);
    }

    #[test]
    fn computer_only_table() {
        let (names, humans) = seat_names(2, 0, &[]);
        assert_eq!(names, vec!["AI-Alice", "AI-Bob"]);
        assert!(humans.iter().all(|h| !h));
    }

    #[test]
    fn install_policy_rejects_unknown_name() {
        let mut eng = Engine::new_game(&["A", "B"], &[true, false], false).unwrap();
        assert!(install_policy(&mut eng, "baseline").is_ok());
        assert!(matches!(
            install_policy(&mut eng, "shark"),
            Err(CliError::Config(_))
        ));
    }
}

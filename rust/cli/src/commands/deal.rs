//! Deal command handler.
//!
//! Deals the opening hands for a computer-only table and prints them along
//! with any set that was dealt outright. The same seed always prints the same
//! deal.

use super::seat_names;
use crate::error::CliError;
use crate::formatters::format_hand;
use gofish_engine::engine::Engine;
use gofish_engine::events::GameEvent;
use gofish_engine::game::GameConfig;
use std::io::Write;

/// Handle the deal command.
///
/// # Examples
///
/// ```ignore
/// let mut out = Vec::new();
/// handle_deal_command(4, Some(42), &mut out).unwrap();
/// ```
pub fn handle_deal_command(
    players: usize,
    seed: Option<u64>,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    let seed = seed.unwrap_or_else(rand::random);
    let (names, humans) = seat_names(players, 0, &[]);
    let config = GameConfig::new(&names, &humans, false)?.with_seed(seed);
    let mut eng = Engine::with_config(config)?;
    let events = eng.subscribe();
    eng.start();

    writeln!(out, "Seed: {}", seed)?;
    for event in events.try_iter() {
        if let GameEvent::Log { message } = event {
            writeln!(out, "{}", message)?;
        }
    }
    for p in eng.players() {
        writeln!(out, "{} (sets: {}): {}", p.name, p.score, format_hand(&p.hand))?;
    }
    writeln!(out, "Deck: {} cards remaining", eng.deck_remaining())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deal_command_deterministic() {
        let mut out1 = Vec::new();
        let mut out2 = Vec::new();

        handle_deal_command(3, Some(12345), &mut out1).unwrap();
        handle_deal_command(3, Some(12345), &mut out2).unwrap();

        assert_eq!(out1, out2, "Same seed should produce identical output");
    }

    #[test]
    fn test_deal_command_output_format() {
        let mut out = Vec::new();
        handle_deal_command(2, Some(999), &mut out).unwrap();

        let output = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines[0], "Seed: 999");
        assert_eq!(lines[1], "Game has started!");
        assert!(output.contains("AI-Alice (sets: "));
        assert!(output.contains("AI-Bob (sets: "));
        assert_eq!(lines.last().copied(), Some("Deck: 42 cards remaining"));
    }

    #[test]
    fn test_deal_command_rejects_bad_table() {
        let mut out = Vec::new();
        let result = handle_deal_command(5, Some(1), &mut out);
        assert!(matches!(result, Err(CliError::Config(_))));
    }
}

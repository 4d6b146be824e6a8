use serde::{Deserialize, Serialize};

use crate::cards::{Card, Rank};
use crate::errors::GameError;
use crate::rules::validate_seats;

/// One seat at the table as requested by the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeatConfig {
    pub name: String,
    pub is_human: bool,
}

impl SeatConfig {
    pub fn human(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            is_human: true,
        }
    }

    pub fn computer(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            is_human: false,
        }
    }
}

/// Everything needed to start a session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    /// Seats in turn order; seat 0 acts first
    pub seats: Vec<SeatConfig>,
    /// Cut the game off after three full rounds
    pub demo_mode: bool,
    /// Seed for the shuffle and computer choices; random when `None`
    pub seed: Option<u64>,
}

impl GameConfig {
    /// Builds a validated config from parallel name and humanity lists.
    pub fn new<S: AsRef<str>>(
        names: &[S],
        is_human: &[bool],
        demo_mode: bool,
    ) -> Result<Self, GameError> {
        if names.len() != is_human.len() {
            return Err(GameError::SeatCountMismatch {
                names: names.len(),
                flags: is_human.len(),
            });
        }
        let seats: Vec<SeatConfig> = names
            .iter()
            .zip(is_human)
            .map(|(name, &is_human)| SeatConfig {
                name: name.as_ref().trim().to_string(),
                is_human,
            })
            .collect();
        validate_seats(&seats)?;
        Ok(Self {
            seats,
            demo_mode,
            seed: None,
        })
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

/// Where the turn state machine currently rests.
///
/// `ApplyingAIMove` and `Resolving` only exist while a step is running.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    Dealing,
    TurnStart,
    AwaitingHumanMove,
    ApplyingAIMove,
    Resolving,
    GameOver,
}

/// A request for every card of `rank` held by the player at seat `target`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ask {
    pub rank: Rank,
    pub target: usize,
}

/// Read-only snapshot of one player, handed to callers and subscribers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerView {
    pub seat: usize,
    pub name: String,
    pub hand: Vec<Card>,
    pub score: u32,
    pub is_human: bool,
}

/// The most recent ask made by a computer seat, for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LastMove {
    pub player: String,
    pub rank: Rank,
    pub target: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_rejects_mismatched_lengths() {
        let err = GameConfig::new(&["a", "b"], &[true], false).unwrap_err();
        assert_eq!(err, GameError::SeatCountMismatch { names: 2, flags: 1 });
    }

    #[test]
    fn config_trims_names_and_keeps_order() {
        let cfg = GameConfig::new(&[" Ann ", "Bob"], &[true, false], true).unwrap();
        assert_eq!(cfg.seats[0], SeatConfig::human("Ann"));
        assert_eq!(cfg.seats[1], SeatConfig::computer("Bob"));
        assert!(cfg.demo_mode);
        assert_eq!(cfg.seed, None);
        assert_eq!(cfg.with_seed(9).seed, Some(9));
    }
}

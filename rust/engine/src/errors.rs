use thiserror::Error;

use crate::cards::{Card, Rank};

/// Broad class of a [`GameError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Rejected while building a session; no state was created.
    InvalidConfiguration,
    /// Rejected human move; the session keeps waiting for a valid one.
    IllegalMove,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GameError {
    #[error("Invalid player count: {count} (expected 2-4)")]
    InvalidPlayerCount { count: usize },
    #[error("Got {names} player names but {flags} human flags")]
    SeatCountMismatch { names: usize, flags: usize },
    #[error("Player name at seat {seat} is blank")]
    BlankPlayerName { seat: usize },
    #[error("Player name '{name}' is used more than once")]
    DuplicatePlayerName { name: String },
    #[error("Card {card} appears more than once in the deck")]
    DuplicateCard { card: Card },
    #[error("Seat {seat} is not controlled by the computer")]
    NotComputerSeat { seat: usize },
    #[error("Not waiting for a human move")]
    NotAwaitingInput,
    #[error("Cannot ask for {rank}: no {rank} in hand")]
    RankNotInHand { rank: Rank },
    #[error("Cannot ask yourself for cards")]
    TargetIsSelf,
    #[error("No player at seat {seat}")]
    UnknownTarget { seat: usize },
    #[error("{name} has no cards to ask for")]
    TargetHandEmpty { name: String },
}

impl GameError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            GameError::InvalidPlayerCount { .. }
            | GameError::SeatCountMismatch { .. }
            | GameError::BlankPlayerName { .. }
            | GameError::DuplicatePlayerName { .. }
            | GameError::DuplicateCard { .. }
            | GameError::NotComputerSeat { .. } => ErrorKind::InvalidConfiguration,
            GameError::NotAwaitingInput
            | GameError::RankNotInHand { .. }
            | GameError::TargetIsSelf
            | GameError::UnknownTarget { .. }
            | GameError::TargetHandEmpty { .. } => ErrorKind::IllegalMove,
        }
    }
}

//! Error types for the CLI application.
//!
//! Handlers return [`CliError`] and [`crate::run`] maps it to an exit code.
//! [`BatchValidationError`] collects per-game failures in `sim`.

use gofish_engine::errors::{ErrorKind, GameError};
use std::fmt;

use crate::config::ConfigError;

/// Everything a `gofish` command can fail with.
#[derive(Debug)]
pub enum CliError {
    /// Terminal or record file could not be read or written
    Io(std::io::Error),

    /// A flag value no command accepts, such as `--games 0`
    InvalidInput(String),

    /// Bad table shape, seat names, config file or `GOFISH_*` variable
    Config(String),

    /// The engine rejected a move or a simulated game went wrong
    Engine(String),

    /// A human left the table before the game ended
    Interrupted(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Io(e) => write!(f, "I/O error: {}", e),
            CliError::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            CliError::Config(msg) => write!(f, "Configuration error: {}", msg),
            CliError::Engine(msg) => write!(f, "Engine error: {}", msg),
            CliError::Interrupted(msg) => write!(f, "Interrupted: {}", msg),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        if let CliError::Io(e) = self {
            Some(e)
        } else {
            None
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(error: std::io::Error) -> Self {
        CliError::Io(error)
    }
}

// Table setup problems read as configuration errors; anything else the
// engine rejects is reported as an engine error.
impl From<GameError> for CliError {
    fn from(error: GameError) -> Self {
        match error.kind() {
            ErrorKind::InvalidConfiguration => CliError::Config(error.to_string()),
            ErrorKind::IllegalMove => CliError::Engine(error.to_string()),
        }
    }
}

impl From<ConfigError> for CliError {
    fn from(error: ConfigError) -> Self {
        CliError::Config(error.to_string())
    }
}

/// A failure tied to one item of a batch.
///
/// # Examples
///
/// ```rust
/// use gofish_cli::BatchValidationError;
///
/// let error = BatchValidationError {
///     item_context: 5,
///     message: "cards lost".to_string(),
/// };
/// assert_eq!(error.to_string(), "5: cards lost");
/// ```
#[derive(Debug)]
pub struct BatchValidationError<T> {
    /// Context identifying the item that failed validation
    pub item_context: T,
    /// Descriptive error message
    pub message: String,
}

impl<T: std::fmt::Display> std::fmt::Display for BatchValidationError<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.item_context, self.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gofish_engine::cards::Rank;

    #[test]
    fn setup_errors_become_config_errors() {
        let e: CliError = GameError::InvalidPlayerCount { count: 7 }.into();
        assert!(matches!(e, CliError::Config(ref m) if m.contains("7")));
    }

    #[test]
    fn move_errors_become_engine_errors() {
        let e: CliError = GameError::RankNotInHand { rank: Rank::Ace }.into();
        assert!(matches!(e, CliError::Engine(_)));
        assert!(e.to_string().starts_with("Engine error:"));
    }

    #[test]
    fn batch_error_prefixes_context() {
        let error = BatchValidationError {
            item_context: "game 3".to_string(),
            message: "52 cards expected, found 48".to_string(),
        };
        assert_eq!(error.to_string(), "game 3: 52 cards expected, found 48");
    }
}

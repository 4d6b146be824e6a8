//! Parsing of the answers typed at the `play` prompts.
//!
//! Everything here is checked against the table before the engine sees it,
//! so a typo costs a reprompt rather than an engine error.

use gofish_engine::cards::Rank;

/// Outcome of reading one prompt answer.
#[derive(Debug, PartialEq)]
pub enum ParseResult<T> {
    /// A usable answer
    Choice(T),
    /// User entered quit command (q or quit)
    Quit,
    /// Invalid input with error message
    Invalid(String),
}

// "q" is also the queen, so the rank prompt only takes the full word.
fn is_quit(input: &str, allow_short: bool) -> bool {
    match input.to_ascii_lowercase().as_str() {
        "quit" => true,
        "q" => allow_short,
        _ => false,
    }
}

/// Parses a rank the player wants to ask for. Only ranks in `held` are
/// accepted; `quit` ends the game.
///
/// ```rust
/// # use gofish_cli::validation::{parse_rank_choice, ParseResult};
/// use gofish_engine::cards::Rank;
///
/// let held = [Rank::Seven, Rank::King];
/// assert_eq!(parse_rank_choice("k", &held), ParseResult::Choice(Rank::King));
/// assert_eq!(parse_rank_choice("quit", &held), ParseResult::Quit);
/// assert!(matches!(parse_rank_choice("A", &held), ParseResult::Invalid(_)));
/// ```
pub fn parse_rank_choice(input: &str, held: &[Rank]) -> ParseResult<Rank> {
    let input = input.trim();
    if input.is_empty() {
        return ParseResult::Invalid("Empty input".to_string());
    }
    if is_quit(input, false) {
        return ParseResult::Quit;
    }
    match input.parse::<Rank>() {
        Ok(rank) if held.contains(&rank) => ParseResult::Choice(rank),
        Ok(_) => ParseResult::Invalid(
            "Invalid rank. You can only ask for ranks you have in your hand.".to_string(),
        ),
        Err(e) => ParseResult::Invalid(e.to_string()),
    }
}

/// Parses a 1-based position in the listed `targets` and returns the seat it
/// names; `q` or `quit` ends the game.
pub fn parse_target_choice(input: &str, targets: &[usize]) -> ParseResult<usize> {
    let input = input.trim();
    if input.is_empty() {
        return ParseResult::Invalid("Empty input".to_string());
    }
    if is_quit(input, true) {
        return ParseResult::Quit;
    }
    match input.parse::<usize>() {
        Ok(n) if (1..=targets.len()).contains(&n) => ParseResult::Choice(targets[n - 1]),
        Ok(_) | Err(_) => ParseResult::Invalid(format!(
            "Invalid choice. Enter a number between 1 and {}.",
            targets.len()
        )),
    }
}

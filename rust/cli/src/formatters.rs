//! Card, hand and table formatters for terminal display.
//!
//! Suits render as ♥ ♦ ♣ ♠ where the terminal can show them and fall back
//! to h d c s otherwise.
//!
//! ## Example
//!
//! ```rust
//! use gofish_engine::cards::{Card, Rank, Suit};
//! use gofish_cli::formatters::format_card;
//!
//! let ten = Card::new(Rank::Ten, Suit::Spades);
//! assert!(format_card(&ten) == "10♠" || format_card(&ten) == "10s");
//! ```

use gofish_engine::cards::{Card, Rank, Suit};
use gofish_engine::game::PlayerView;

/// Check if the terminal supports Unicode card symbols by detecting modern terminal environments.
///
/// On Windows, checks for Windows Terminal (WT_SESSION), modern terminals (TERM_PROGRAM),
/// or VS Code (VSCODE_INJECTION). On Unix-like systems, assumes Unicode support.
pub fn supports_unicode() -> bool {
    if cfg!(windows) {
        std::env::var("WT_SESSION").is_ok()
            || std::env::var("TERM_PROGRAM").is_ok()
            || std::env::var("VSCODE_INJECTION").is_ok()
    } else {
        true
    }
}

pub fn format_suit(suit: &Suit) -> String {
    if supports_unicode() {
        match suit {
            Suit::Hearts => "♥",
            Suit::Diamonds => "♦",
            Suit::Clubs => "♣",
            Suit::Spades => "♠",
        }
        .to_string()
    } else {
        match suit {
            Suit::Hearts => "h",
            Suit::Diamonds => "d",
            Suit::Clubs => "c",
            Suit::Spades => "s",
        }
        .to_string()
    }
}

/// Format a Card as a string combining rank and suit, e.g. `7♥`.
pub fn format_card(card: &Card) -> String {
    format!("{}{}", card.rank.symbol(), format_suit(&card.suit))
}

/// Cards sorted by rank then suit, space separated and bracketed.
pub fn format_hand(cards: &[Card]) -> String {
    let mut sorted = cards.to_vec();
    sorted.sort_by_key(|c| (c.rank, c.suit));
    let parts: Vec<String> = sorted.iter().map(format_card).collect();
    format!("[{}]", parts.join(" "))
}

/// `2, 7, K`
pub fn format_ranks(ranks: &[Rank]) -> String {
    ranks
        .iter()
        .map(|r| r.symbol())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Numbered list of the seats a player may ask, matching the target prompt.
pub fn format_target_list(players: &[PlayerView], targets: &[usize]) -> Vec<String> {
    targets
        .iter()
        .enumerate()
        .filter_map(|(i, &seat)| {
            let p = players.get(seat)?;
            Some(format!("{}. {} ({} cards)", i + 1, p.name, p.hand.len()))
        })
        .collect()
}

/// One line per seat: name, card count and sets.
pub fn format_table(players: &[PlayerView]) -> Vec<String> {
    players
        .iter()
        .map(|p| {
            format!(
                "{}: {} cards, {} set{}",
                p.name,
                p.hand.len(),
                p.score,
                if p.score == 1 { "" } else { "s" }
            )
        })
        .collect()
}

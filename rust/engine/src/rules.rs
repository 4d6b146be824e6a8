use std::collections::HashSet;

use crate::cards::Rank;
use crate::errors::GameError;
use crate::game::{Ask, SeatConfig};
use crate::player::Player;

pub const MIN_PLAYERS: usize = 2;
pub const MAX_PLAYERS: usize = 4;
/// Cards dealt to each player at the start of a game
pub const HAND_SIZE: usize = 5;
/// Cards of one rank that make a scoring set
pub const SET_SIZE: usize = 4;
/// Full rounds played before a demo game is cut off
pub const DEMO_MODE_ROUNDS: u32 = 3;

/// Checks seat configuration before any game state exists.
pub fn validate_seats(seats: &[SeatConfig]) -> Result<(), GameError> {
    if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&seats.len()) {
        return Err(GameError::InvalidPlayerCount { count: seats.len() });
    }
    let mut names = HashSet::with_capacity(seats.len());
    for (seat, cfg) in seats.iter().enumerate() {
        let name = cfg.name.trim();
        if name.is_empty() {
            return Err(GameError::BlankPlayerName { seat });
        }
        if !names.insert(name) {
            return Err(GameError::DuplicatePlayerName {
                name: name.to_string(),
            });
        }
    }
    Ok(())
}

/// Seats other than `seat` that still hold cards, in seat order.
pub fn valid_targets(players: &[Player], seat: usize) -> Vec<usize> {
    players
        .iter()
        .enumerate()
        .filter(|(i, p)| *i != seat && !p.is_empty())
        .map(|(i, _)| i)
        .collect()
}

/// Validates a human ask against the current table.
///
/// A legal ask names a rank the asker already holds and a different seat
/// whose hand is not empty.
///
/// # Errors
///
/// - [`GameError::UnknownTarget`] - `ask.target` is not a seat
/// - [`GameError::TargetIsSelf`] - the asker named themselves
/// - [`GameError::RankNotInHand`] - the asker holds no card of `ask.rank`
/// - [`GameError::TargetHandEmpty`] - the target has nothing to give
///
/// # Examples
///
/// ```
/// use gofish_engine::cards::{Card, Rank, Suit};
/// use gofish_engine::errors::GameError;
/// use gofish_engine::game::Ask;
/// use gofish_engine::player::Player;
/// use gofish_engine::rules::validate_ask;
///
/// let mut ann = Player::new("Ann");
/// ann.add_card(Card::new(Rank::Queen, Suit::Hearts));
/// let mut bob = Player::new("Bob");
/// bob.add_card(Card::new(Rank::Two, Suit::Clubs));
/// let players = [ann, bob];
///
/// assert!(validate_ask(&players, 0, &Ask { rank: Rank::Queen, target: 1 }).is_ok());
/// assert_eq!(
///     validate_ask(&players, 0, &Ask { rank: Rank::King, target: 1 }),
///     Err(GameError::RankNotInHand { rank: Rank::King })
/// );
/// ```
pub fn validate_ask(players: &[Player], seat: usize, ask: &Ask) -> Result<(), GameError> {
    let target = players
        .get(ask.target)
        .ok_or(GameError::UnknownTarget { seat: ask.target })?;
    if ask.target == seat {
        return Err(GameError::TargetIsSelf);
    }
    if !players[seat].has_card(ask.rank) {
        return Err(GameError::RankNotInHand { rank: ask.rank });
    }
    if target.is_empty() {
        return Err(GameError::TargetHandEmpty {
            name: target.name().to_string(),
        });
    }
    Ok(())
}

/// Retires every complete set in `player`'s hand and returns the ranks
/// retired. Partial ranks are left alone.
pub fn retire_completed_sets(player: &mut Player) -> Vec<Rank> {
    let sets = player.complete_sets();
    for &rank in &sets {
        player.remove_cards(rank);
    }
    sets
}

/// Seat with the highest score; ties go to the earliest seat.
pub fn select_winner(scores: &[u32]) -> Option<usize> {
    let mut best: Option<(usize, u32)> = None;
    for (seat, &score) in scores.iter().enumerate() {
        match best {
            Some((_, top)) if score <= top => {}
            _ => best = Some((seat, score)),
        }
    }
    best.map(|(seat, _)| seat)
}

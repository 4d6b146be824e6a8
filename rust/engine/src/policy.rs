//! Who decides a seat's move, and how computer seats decide.
//!
//! Every seat is driven by a [`Controller`]: either a human whose move arrives
//! from outside the engine, or a computer seat backed by a [`MovePolicy`].

use rand::seq::IndexedRandom;
use rand::RngCore;
use std::fmt;

use crate::game::Ask;
use crate::player::Player;

/// What a policy may look at when deciding.
#[derive(Debug, Clone, Copy)]
pub struct TurnView<'a> {
    /// Seat index of the player to move
    pub seat: usize,
    /// The player to move
    pub player: &'a Player,
    /// Other seats still holding cards, in seat order
    pub targets: &'a [usize],
}

/// Decision-making interface for computer seats.
///
/// # Example Implementation
///
/// ```rust
/// use gofish_engine::game::Ask;
/// use gofish_engine::policy::{MovePolicy, TurnView};
/// use rand::RngCore;
///
/// #[derive(Debug)]
/// struct AskLeftmost;
///
/// impl MovePolicy for AskLeftmost {
///     fn name(&self) -> &str {
///         "leftmost"
///     }
///
///     fn decide(&self, view: &TurnView<'_>, _rng: &mut dyn RngCore) -> Option<Ask> {
///         let rank = view.player.first_card()?.rank;
///         let target = *view.targets.first()?;
///         Some(Ask { rank, target })
///     }
/// }
/// ```
pub trait MovePolicy: fmt::Debug + Send {
    fn name(&self) -> &str;

    /// Returns the ask to make, or `None` to skip asking this turn. Any ask
    /// returned must name a rank in hand and one of `view.targets`.
    fn decide(&self, view: &TurnView<'_>, rng: &mut dyn RngCore) -> Option<Ask>;
}

/// How a seat's moves are produced.
#[derive(Debug)]
pub enum Controller {
    /// Moves are submitted through [`crate::engine::Engine::submit_move`].
    Human,
    /// Moves are decided inside the engine.
    Computer(Box<dyn MovePolicy>),
}

impl Controller {
    pub fn is_human(&self) -> bool {
        matches!(self, Controller::Human)
    }
}

/// Uniformly random pick among `targets`.
pub fn choose_random_target(targets: &[usize], rng: &mut dyn RngCore) -> Option<usize> {
    targets.choose(rng).copied()
}

/// The stock computer player: asks for the rank of the first card in hand,
/// from a uniformly random opponent that still holds cards.
#[derive(Debug, Clone, Default)]
pub struct FirstCardPolicy;

impl FirstCardPolicy {
    pub fn new() -> Self {
        Self
    }
}

impl MovePolicy for FirstCardPolicy {
    fn name(&self) -> &str {
        "baseline"
    }

    fn decide(&self, view: &TurnView<'_>, rng: &mut dyn RngCore) -> Option<Ask> {
        let rank = view.player.first_card()?.rank;
        let target = choose_random_target(view.targets, rng)?;
        Some(Ask { rank, target })
    }
}

/// Policy names understood by [`create_policy`].
pub const POLICY_NAMES: &[&str] = &["baseline"];

/// Builds a policy by name; `None` for names it does not know.
///
/// ```rust
/// use gofish_engine::policy::create_policy;
///
/// let policy = create_policy("baseline").unwrap();
/// assert_eq!(policy.name(), "baseline");
/// assert!(create_policy("grandmaster").is_none());
/// ```
pub fn create_policy(name: &str) -> Option<Box<dyn MovePolicy>> {
    match name {
        "baseline" => Some(Box::new(FirstCardPolicy::new())),
        _ => None,
    }
}

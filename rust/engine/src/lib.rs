//! # gofish-engine: Go Fish Rules Engine
//!
//! A headless engine for the card game Go Fish with 2-4 seats, each either a
//! human (moves submitted from outside) or a computer policy. The engine owns
//! the deck, the hands and the scores, and publishes typed events for
//! whatever presentation layer drives it.
//!
//! ## Core Modules
//!
//! - [`cards`] - Card representation (Suit, Rank, Card)
//! - [`deck`] - Seeded 52-card draw pile
//! - [`player`] - Hands with an O(1) rank index
//! - [`rules`] - Table constants, ask validation, set retirement, winner selection
//! - [`game`] - Session configuration, phases and snapshots
//! - [`policy`] - Human/computer controllers and the baseline computer policy
//! - [`engine`] - Turn state machine
//! - [`events`] - Event fan-out to subscribers
//! - [`logger`] - Turn history and JSONL game records
//! - [`errors`] - Error types for configuration and moves
//!
//! ## Quick Start
//!
//! ```rust
//! use gofish_engine::engine::Engine;
//! use gofish_engine::game::Phase;
//!
//! let mut engine = Engine::new_game(&["You", "AI-Bob"], &[true, false], false).unwrap();
//! let events = engine.subscribe();
//!
//! if engine.run_until_input() == Phase::AwaitingHumanMove {
//!     let me = engine.current_player();
//!     let rank = engine.player(me).unwrap().first_card().unwrap().rank;
//!     let target = engine.valid_targets()[0];
//!     engine.submit_move(rank, target).unwrap();
//! }
//!
//! for event in events.try_iter() {
//!     println!("{:?}", event);
//! }
//! ```
//!
//! ## Deterministic Gameplay
//!
//! A seed fixes both the shuffle and every computer choice:
//!
//! ```rust
//! use gofish_engine::deck::Deck;
//!
//! let mut deck1 = Deck::new_with_seed(42);
//! let mut deck2 = Deck::new_with_seed(42);
//! assert_eq!(deck1.draw(), deck2.draw());
//! ```

pub mod cards;
pub mod deck;
pub mod engine;
pub mod errors;
pub mod events;
pub mod game;
pub mod logger;
pub mod player;
pub mod policy;
pub mod rules;

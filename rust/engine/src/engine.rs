use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

use crate::cards::{Card, Rank};
use crate::deck::Deck;
use crate::errors::GameError;
use crate::events::{EventBus, EventReceiver, GameEvent};
use crate::game::{Ask, GameConfig, LastMove, Phase, PlayerView};
use crate::logger::{AskOutcome, GameRecord, InitialSet, TurnAction, TurnRecord};
use crate::player::Player;
use crate::policy::{Controller, FirstCardPolicy, MovePolicy, TurnView};
use crate::rules::{
    retire_completed_sets, select_winner, valid_targets, validate_ask, validate_seats,
    DEMO_MODE_ROUNDS, HAND_SIZE, SET_SIZE,
};

/// Core game engine that runs one Go Fish session.
///
/// The engine owns the deck, the players and the scores. It advances one
/// step at a time: computer seats are played internally, and the engine
/// stops in [`Phase::AwaitingHumanMove`] whenever a human seat must choose.
///
/// # Examples
///
/// ```
/// use gofish_engine::engine::Engine;
/// use gofish_engine::game::{GameConfig, Phase};
///
/// let config = GameConfig::new(&["Ann", "Bob"], &[false, false], true)
///     .unwrap()
///     .with_seed(7);
/// let mut engine = Engine::with_config(config).unwrap();
/// let events = engine.subscribe();
///
/// // Computer-only demo game: runs straight to the end
/// assert_eq!(engine.run_until_input(), Phase::GameOver);
/// assert_eq!(engine.rounds_played(), 3);
/// assert!(events.try_iter().count() > 0);
/// ```
#[derive(Debug)]
pub struct Engine {
    players: Vec<Player>,
    controllers: Vec<Controller>,
    deck: Deck,
    /// Completed sets per seat
    scores: Vec<u32>,
    current: usize,
    rounds_played: u32,
    turns_played: u32,
    demo_mode: bool,
    phase: Phase,
    seed: u64,
    /// Drives computer choices; separate stream from the shuffle
    rng: ChaCha20Rng,
    last_ai_move: Option<LastMove>,
    winner: Option<usize>,
    initial_sets: Vec<InitialSet>,
    history: Vec<TurnRecord>,
    turn_refilled: bool,
    turn_sets: Vec<Rank>,
    events: EventBus,
}

impl Engine {
    /// Starts a session with a random seed. Computer seats use the baseline policy.
    pub fn new_game<S: AsRef<str>>(
        names: &[S],
        is_human: &[bool],
        demo_mode: bool,
    ) -> Result<Self, GameError> {
        Self::with_config(GameConfig::new(names, is_human, demo_mode)?)
    }

    pub fn with_config(config: GameConfig) -> Result<Self, GameError> {
        let seed = config.seed.unwrap_or_else(rand::random);
        Self::build(config, seed, Deck::new_with_seed(seed))
    }

    /// Starts a session over a caller-supplied deck, e.g. [`Deck::stacked`].
    pub fn with_deck(config: GameConfig, deck: Deck) -> Result<Self, GameError> {
        let seed = config.seed.unwrap_or_else(rand::random);
        Self::build(config, seed, deck)
    }

    fn build(config: GameConfig, seed: u64, deck: Deck) -> Result<Self, GameError> {
        validate_seats(&config.seats)?;
        let players: Vec<Player> = config
            .seats
            .iter()
            .map(|s| Player::new(s.name.trim()))
            .collect();
        let controllers = config
            .seats
            .iter()
            .map(|s| {
                if s.is_human {
                    Controller::Human
                } else {
                    Controller::Computer(Box::new(FirstCardPolicy::new()))
                }
            })
            .collect();
        let mut rng = ChaCha20Rng::seed_from_u64(seed);
        rng.set_stream(1);

        tracing::info!(
            seed,
            players = players.len(),
            demo_mode = config.demo_mode,
            "game created"
        );

        Ok(Self {
            scores: vec![0; players.len()],
            players,
            controllers,
            deck,
            current: 0,
            rounds_played: 0,
            turns_played: 0,
            demo_mode: config.demo_mode,
            phase: Phase::Dealing,
            seed,
            rng,
            last_ai_move: None,
            winner: None,
            initial_sets: Vec::new(),
            history: Vec::new(),
            turn_refilled: false,
            turn_sets: Vec::new(),
            events: EventBus::new(),
        })
    }

    /// Replaces the policy of a computer seat.
    pub fn set_policy(
        &mut self,
        seat: usize,
        policy: Box<dyn MovePolicy>,
    ) -> Result<(), GameError> {
        match self.controllers.get_mut(seat) {
            Some(Controller::Computer(slot)) => {
                *slot = policy;
                Ok(())
            }
            _ => Err(GameError::NotComputerSeat { seat }),
        }
    }

    pub fn subscribe(&mut self) -> EventReceiver {
        self.events.subscribe()
    }

    /// Deals the opening hands and scores any set dealt outright.
    /// Does nothing once the deal has happened.
    pub fn start(&mut self) {
        if self.phase != Phase::Dealing {
            return;
        }
        for _ in 0..HAND_SIZE {
            for player in &mut self.players {
                if let Some(card) = self.deck.draw() {
                    player.add_card(card);
                }
            }
        }
        let banner = if self.demo_mode {
            format!("Game has started! (Demo Mode - {} rounds only)", DEMO_MODE_ROUNDS)
        } else {
            "Game has started!".to_string()
        };
        self.log(banner);

        for seat in 0..self.players.len() {
            for rank in retire_completed_sets(&mut self.players[seat]) {
                self.scores[seat] += 1;
                self.initial_sets.push(InitialSet {
                    player: self.players[seat].name().to_string(),
                    rank,
                });
                self.announce_set(seat, rank);
            }
        }

        self.phase = Phase::TurnStart;
        self.emit_state();
    }

    /// Advances the state machine by one unit of work and returns the
    /// resting phase. No-op while awaiting a human or after the game ended.
    pub fn step(&mut self) -> Phase {
        match self.phase {
            Phase::Dealing => self.start(),
            Phase::TurnStart => self.play_turn(),
            // Transient phases never persist between calls.
            Phase::ApplyingAIMove | Phase::Resolving => {}
            Phase::AwaitingHumanMove | Phase::GameOver => {}
        }
        self.phase
    }

    /// Steps until a human must move or the game is over.
    pub fn run_until_input(&mut self) -> Phase {
        loop {
            match self.step() {
                Phase::AwaitingHumanMove | Phase::GameOver => return self.phase,
                _ => {}
            }
        }
    }

    /// Applies the waiting human's ask. On error nothing changes and the
    /// engine keeps waiting.
    pub fn submit_move(&mut self, rank: Rank, target: usize) -> Result<(), GameError> {
        if self.phase != Phase::AwaitingHumanMove {
            return Err(GameError::NotAwaitingInput);
        }
        let seat = self.current;
        let ask = Ask { rank, target };
        validate_ask(&self.players, seat, &ask)?;
        self.resolve(seat, ask);
        Ok(())
    }

    fn play_turn(&mut self) {
        let seat = self.current;
        self.turns_played += 1;
        self.turn_refilled = false;
        self.turn_sets.clear();
        let name = self.players[seat].name().to_string();
        tracing::debug!(player = %name, turn = self.turns_played, "turn started");

        if self.players[seat].is_empty() {
            if let Some(card) = self.deck.draw() {
                self.players[seat].add_card(card);
                self.turn_refilled = true;
                let drawn = self.drawn(seat, card);
                self.log(format!("{} drew {}", name, drawn));
            }
        }
        if self.players[seat].is_empty() {
            self.log(format!("{} has no cards and passes", name));
            self.finish_turn(TurnAction::Pass);
            return;
        }

        let targets = valid_targets(&self.players, seat);
        if targets.is_empty() {
            self.draw_instead_of_asking(seat);
            return;
        }

        if self.controllers[seat].is_human() {
            self.phase = Phase::AwaitingHumanMove;
            self.emit_state();
            return;
        }

        self.phase = Phase::ApplyingAIMove;
        let decision = match &self.controllers[seat] {
            Controller::Computer(policy) => {
                let view = TurnView {
                    seat,
                    player: &self.players[seat],
                    targets: &targets,
                };
                policy.decide(&view, &mut self.rng)
            }
            Controller::Human => None,
        };
        let ask = decision.filter(|ask| match validate_ask(&self.players, seat, ask) {
            Ok(()) => true,
            Err(e) => {
                tracing::warn!(player = %name, error = %e, "policy proposed an illegal ask");
                false
            }
        });

        match ask {
            Some(ask) => {
                self.last_ai_move = Some(LastMove {
                    player: name,
                    rank: ask.rank,
                    target: self.players[ask.target].name().to_string(),
                });
                self.resolve(seat, ask);
            }
            None => self.draw_instead_of_asking(seat),
        }
    }

    /// Nobody can be asked: take one card if there is one and end the turn.
    fn draw_instead_of_asking(&mut self, seat: usize) {
        let name = self.players[seat].name().to_string();
        let drew = match self.deck.draw() {
            Some(card) => {
                self.players[seat].add_card(card);
                let drawn = self.drawn(seat, card);
                self.log(format!("{} has nobody to ask and draws {}", name, drawn));
                self.score_sets(seat);
                true
            }
            None => {
                self.log(format!("{} has nobody to ask", name));
                false
            }
        };
        self.finish_turn(TurnAction::Draw { drew });
    }

    /// Names the drawn card for human seats; computers draw face down.
    fn drawn(&self, seat: usize, card: Card) -> String {
        if self.controllers[seat].is_human() {
            format!("the {}", card)
        } else {
            "a card".to_string()
        }
    }

    fn resolve(&mut self, seat: usize, ask: Ask) {
        self.phase = Phase::Resolving;
        let asker = self.players[seat].name().to_string();
        let target = self.players[ask.target].name().to_string();
        tracing::debug!(player = %asker, target = %target, rank = %ask.rank, "ask");
        self.log(format!("{} asks {} for any {}s", asker, target, ask.rank));

        let outcome = if self.players[ask.target].has_card(ask.rank) {
            let received = self.players[ask.target].give_cards(ask.rank);
            let count = received.len();
            for card in received {
                self.players[seat].add_card(card);
            }
            self.log(format!("{} gave {} card(s) to {}", target, count, asker));
            self.score_sets(seat);
            AskOutcome::Received { count }
        } else {
            self.log("Go Fish!".to_string());
            match self.deck.draw() {
                Some(card) => {
                    self.players[seat].add_card(card);
                    let drawn = self.drawn(seat, card);
                    self.log(format!("{} drew {}", asker, drawn));
                    let lucky = card.rank == ask.rank;
                    if lucky {
                        self.log(format!(
                            "Lucky draw! {} got the {} they asked for",
                            asker, ask.rank
                        ));
                    }
                    self.score_sets(seat);
                    AskOutcome::GoFish { lucky }
                }
                None => {
                    self.log("The deck is empty".to_string());
                    AskOutcome::DeckEmpty
                }
            }
        };

        self.finish_turn(TurnAction::Ask {
            target,
            rank: ask.rank,
            outcome,
        });
    }

    fn score_sets(&mut self, seat: usize) {
        for rank in retire_completed_sets(&mut self.players[seat]) {
            self.scores[seat] += 1;
            self.turn_sets.push(rank);
            self.announce_set(seat, rank);
        }
    }

    fn announce_set(&mut self, seat: usize, rank: Rank) {
        let name = self.players[seat].name().to_string();
        tracing::info!(player = %name, rank = %rank, score = self.scores[seat], "set completed");
        self.log(format!("{} completed a set of {}s!", name, rank));
    }

    fn finish_turn(&mut self, action: TurnAction) {
        let seat = self.current;
        self.history.push(TurnRecord {
            turn: self.turns_played,
            round: self.rounds_played + 1,
            player: self.players[seat].name().to_string(),
            refilled: self.turn_refilled,
            action,
            completed_sets: std::mem::take(&mut self.turn_sets),
        });

        self.current = (self.current + 1) % self.players.len();
        if self.current == 0 {
            self.rounds_played += 1;
            if self.demo_mode && self.rounds_played >= DEMO_MODE_ROUNDS {
                self.log(format!("Demo mode: {} rounds completed", DEMO_MODE_ROUNDS));
                self.finish_game();
                return;
            }
            self.log(format!("Round {} completed", self.rounds_played));
        }

        if self.deck.is_empty() && self.players.iter().all(Player::is_empty) {
            self.finish_game();
            return;
        }
        self.phase = Phase::TurnStart;
        self.emit_state();
    }

    fn finish_game(&mut self) {
        self.phase = Phase::GameOver;
        self.winner = select_winner(&self.scores);
        tracing::info!(
            winner = self.winner.map(|w| self.players[w].name()).unwrap_or("-"),
            rounds = self.rounds_played,
            turns = self.turns_played,
            "game over"
        );
        self.emit_state();
        let summary = self.summary();
        self.events.broadcast(GameEvent::GameOver { summary });
    }

    fn log(&mut self, message: String) {
        self.events.broadcast(GameEvent::Log { message });
    }

    fn emit_state(&mut self) {
        let event = GameEvent::StateChanged {
            current_player: self.current,
            players: self.players(),
            is_human_turn: self.phase == Phase::AwaitingHumanMove,
        };
        self.events.broadcast(event);
    }

    /// Final scores and winner, one line each.
    pub fn summary(&self) -> String {
        let mut lines = vec![if self.demo_mode {
            "Game Over (Demo Mode)".to_string()
        } else {
            "Game Over".to_string()
        }];
        for (player, score) in self.players.iter().zip(&self.scores) {
            lines.push(format!("{} score: {}", player.name(), score));
        }
        if let Some(w) = self.winner {
            lines.push(format!(
                "Winner: {} with {} sets!",
                self.players[w].name(),
                self.scores[w]
            ));
        }
        lines.join("\n")
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_terminated(&self) -> bool {
        self.phase == Phase::GameOver
    }

    pub fn current_player(&self) -> usize {
        self.current
    }

    pub fn is_human(&self, seat: usize) -> bool {
        self.controllers.get(seat).is_some_and(Controller::is_human)
    }

    pub fn player_count(&self) -> usize {
        self.players.len()
    }

    pub fn player(&self, seat: usize) -> Option<&Player> {
        self.players.get(seat)
    }

    pub fn players(&self) -> Vec<PlayerView> {
        self.players
            .iter()
            .enumerate()
            .map(|(seat, p)| PlayerView {
                seat,
                name: p.name().to_string(),
                hand: p.hand(),
                score: self.scores[seat],
                is_human: self.is_human(seat),
            })
            .collect()
    }

    /// Set counts by name, in seat order.
    pub fn scores(&self) -> Vec<(String, u32)> {
        self.players
            .iter()
            .zip(&self.scores)
            .map(|(p, &s)| (p.name().to_string(), s))
            .collect()
    }

    pub fn deck_remaining(&self) -> usize {
        self.deck.remaining()
    }

    /// Seats the current player may ask right now.
    pub fn valid_targets(&self) -> Vec<usize> {
        valid_targets(&self.players, self.current)
    }

    pub fn last_ai_move(&self) -> Option<&LastMove> {
        self.last_ai_move.as_ref()
    }

    pub fn winner(&self) -> Option<usize> {
        self.winner
    }

    pub fn rounds_played(&self) -> u32 {
        self.rounds_played
    }

    pub fn turns_played(&self) -> u32 {
        self.turns_played
    }

    pub fn demo_mode(&self) -> bool {
        self.demo_mode
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn history(&self) -> &[TurnRecord] {
        &self.history
    }

    /// Every card is in a hand, in the deck, or in a retired set.
    /// Always 52 for a well-formed session.
    pub fn cards_accounted(&self) -> usize {
        let in_hands: usize = self.players.iter().map(Player::hand_len).sum();
        let in_sets: usize = self.scores.iter().map(|&s| s as usize * SET_SIZE).sum();
        in_hands + self.deck.remaining() + in_sets
    }

    pub fn record(&self, game_id: String) -> GameRecord {
        GameRecord {
            game_id,
            seed: Some(self.seed),
            demo_mode: self.demo_mode,
            players: self.players.iter().map(|p| p.name().to_string()).collect(),
            initial_sets: self.initial_sets.clone(),
            turns: self.history.clone(),
            final_scores: self.scores.clone(),
            winner: self.winner.map(|w| self.players[w].name().to_string()),
            ts: None,
        }
    }
}

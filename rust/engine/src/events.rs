use serde::{Deserialize, Serialize};
use std::sync::mpsc::{channel, Receiver, Sender};

use crate::game::PlayerView;

/// Notifications the engine publishes to the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum GameEvent {
    /// The table changed; `current_player` is the seat about to act.
    StateChanged {
        current_player: usize,
        players: Vec<PlayerView>,
        is_human_turn: bool,
    },
    /// One line of table narration ("Ann asks Bob for any 7s").
    Log { message: String },
    /// Final scores and winner.
    GameOver { summary: String },
}

pub type EventSender = Sender<GameEvent>;
pub type EventReceiver = Receiver<GameEvent>;

/// Fan-out of engine events to any number of subscribers.
///
/// Delivery is one-way and in emission order. A subscriber that drops its
/// receiver is forgotten on the next broadcast.
#[derive(Debug, Default)]
pub struct EventBus {
    subscribers: Vec<(usize, EventSender)>,
    next_id: usize,
}

impl EventBus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&mut self) -> EventReceiver {
        let (tx, rx) = channel();
        let id = self.next_id;
        self.next_id += 1;
        self.subscribers.push((id, tx));
        tracing::debug!(subscriber_id = id, "subscribed to game events");
        rx
    }

    pub fn broadcast(&mut self, event: GameEvent) {
        tracing::debug!(event = ?event, "broadcasting game event");
        self.subscribers.retain(|(id, sender)| {
            let delivered = sender.send(event.clone()).is_ok();
            if !delivered {
                tracing::debug!(subscriber_id = id, "dropping closed subscriber");
            }
            delivered
        });
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }
}

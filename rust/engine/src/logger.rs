use serde::{Deserialize, Serialize};

use crate::cards::Rank;

/// How an ask ended.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AskOutcome {
    /// The target handed over `count` cards
    Received { count: usize },
    /// The target had none; the asker drew, `lucky` when the draw matched
    GoFish { lucky: bool },
    /// The target had none and the deck was already empty
    DeckEmpty,
}

/// What the player did after any refill draw.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TurnAction {
    /// No cards and nothing to draw
    Pass,
    /// Nobody could be asked; drew a card instead (`drew` is false when the deck was empty)
    Draw { drew: bool },
    Ask {
        target: String,
        rank: Rank,
        outcome: AskOutcome,
    },
}

/// One turn of play.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct TurnRecord {
    /// 1-based turn counter across the whole game
    pub turn: u32,
    /// 1-based round the turn belongs to
    pub round: u32,
    pub player: String,
    /// The player started the turn empty-handed and drew a card
    #[serde(default)]
    pub refilled: bool,
    pub action: TurnAction,
    /// Sets retired by the player during this turn
    #[serde(default)]
    pub completed_sets: Vec<Rank>,
}

/// Sets scored straight off the deal.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct InitialSet {
    pub player: String,
    pub rank: Rank,
}

/// Complete record of a game. Serialized as one JSONL line per game.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct GameRecord {
    /// Unique identifier for this game (format: YYYYMMDD-NNNNNN)
    pub game_id: String,
    /// Seed used for shuffling and computer choices
    pub seed: Option<u64>,
    pub demo_mode: bool,
    /// Player names in seat order
    pub players: Vec<String>,
    #[serde(default)]
    pub initial_sets: Vec<InitialSet>,
    pub turns: Vec<TurnRecord>,
    /// Final set counts in seat order
    pub final_scores: Vec<u32>,
    pub winner: Option<String>,
    /// Timestamp when the game was recorded (RFC3339 format)
    #[serde(default)]
    pub ts: Option<String>,
}

pub fn format_game_id(yyyymmdd: &str, seq: u32) -> String {
    format!("{}-{:06}", yyyymmdd, seq)
}

use chrono::{SecondsFormat, Utc};
use std::fs::{create_dir_all, File};
use std::io::{BufWriter, Write};
use std::path::Path;

pub struct GameLogger {
    writer: BufWriter<File>,
    date: String,
    seq: u32,
}

impl GameLogger {
    pub fn create<P: AsRef<Path>>(path: P) -> std::io::Result<Self> {
        if let Some(parent) = path.as_ref().parent() {
            if !parent.as_os_str().is_empty() {
                create_dir_all(parent)?;
            }
        }
        let f = File::create(path)?;
        Ok(Self {
            writer: BufWriter::new(f),
            date: Utc::now().format("%Y%m%d").to_string(),
            seq: 0,
        })
    }

    pub fn next_id(&mut self) -> String {
        self.seq += 1;
        format_game_id(&self.date, self.seq)
    }

    pub fn write(&mut self, record: &GameRecord) -> std::io::Result<()> {
        let mut rec = record.clone();
        if rec.ts.is_none() {
            rec.ts = Some(Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true));
        }
        let line = serde_json::to_string(&rec).map_err(std::io::Error::other)?;
        self.writer.write_all(line.as_bytes())?;
        self.writer.write_all(b"\n")?;
        self.writer.flush()
    }
}

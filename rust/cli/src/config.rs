use gofish_engine::policy::POLICY_NAMES;
use gofish_engine::rules::{MAX_PLAYERS, MIN_PLAYERS};
use serde::{Deserialize, Serialize};

use crate::io_utils::read_text;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    pub players: usize,
    pub humans: usize,
    pub demo_mode: bool,
    pub seed: Option<u64>,
    pub ai: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueSource {
    Default,
    File,
    Env,
}

#[derive(Debug, Clone, Copy)]
pub struct ConfigSources {
    pub players: ValueSource,
    pub humans: ValueSource,
    pub demo_mode: ValueSource,
    pub seed: ValueSource,
    pub ai: ValueSource,
}

impl Default for ConfigSources {
    fn default() -> Self {
        Self {
            players: ValueSource::Default,
            humans: ValueSource::Default,
            demo_mode: ValueSource::Default,
            seed: ValueSource::Default,
            ai: ValueSource::Default,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ConfigResolved {
    pub config: Config,
    pub sources: ConfigSources,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            players: 4,
            humans: 1,
            demo_mode: false,
            seed: None,
            ai: "baseline".into(),
        }
    }
}

impl Config {
    /// Checks the table shape and policy name; used again after command-line
    /// flags are applied.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&self.players) {
            return Err(ConfigError::Invalid(format!(
                "players must be between {} and {}, got {}",
                MIN_PLAYERS, MAX_PLAYERS, self.players
            )));
        }
        if self.humans > self.players {
            return Err(ConfigError::Invalid(format!(
                "humans ({}) cannot exceed players ({})",
                self.humans, self.players
            )));
        }
        if !POLICY_NAMES.contains(&self.ai.as_str()) {
            return Err(ConfigError::Invalid(format!(
                "unknown ai '{}' (known: {})",
                self.ai,
                POLICY_NAMES.join(", ")
            )));
        }
        Ok(())
    }
}

#[derive(Debug)]
pub enum ConfigError {
    Io(String),
    Parse(toml::de::Error),
    Invalid(String),
}

impl From<toml::de::Error> for ConfigError {
    fn from(e: toml::de::Error) -> Self {
        ConfigError::Parse(e)
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(msg) => write!(f, "cannot read config file: {}", msg),
            ConfigError::Parse(e) => write!(f, "cannot parse config file: {}", e),
            ConfigError::Invalid(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for ConfigError {}

pub fn load() -> Result<Config, ConfigError> {
    load_with_sources().map(|resolved| resolved.config)
}

pub fn load_with_sources() -> Result<ConfigResolved, ConfigError> {
    load_from(|key| std::env::var(key).ok())
}

/// Resolves defaults, then the `GOFISH_CONFIG` file, then `GOFISH_*`
/// variables, reading variables through `var`.
pub fn load_from<F>(var: F) -> Result<ConfigResolved, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let mut cfg = Config::default();
    let mut sources = ConfigSources::default();

    if let Some(path) = var("GOFISH_CONFIG")
        && !path.is_empty()
    {
        let s = read_text(&path).map_err(ConfigError::Io)?;
        let f: FileConfig = toml::from_str(&s)?;
        if let Some(v) = f.players {
            cfg.players = v;
            sources.players = ValueSource::File;
        }
        if let Some(v) = f.humans {
            cfg.humans = v;
            sources.humans = ValueSource::File;
        }
        if let Some(v) = f.demo_mode {
            cfg.demo_mode = v;
            sources.demo_mode = ValueSource::File;
        }
        if let Some(v) = f.seed {
            cfg.seed = Some(v);
            sources.seed = ValueSource::File;
        }
        if let Some(v) = f.ai {
            cfg.ai = v;
            sources.ai = ValueSource::File;
        }
    }

    if let Some(players) = var("GOFISH_PLAYERS")
        && !players.is_empty()
    {
        cfg.players = players
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid(format!("Invalid GOFISH_PLAYERS '{}'", players)))?;
        sources.players = ValueSource::Env;
    }
    if let Some(humans) = var("GOFISH_HUMANS")
        && !humans.is_empty()
    {
        cfg.humans = humans
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid(format!("Invalid GOFISH_HUMANS '{}'", humans)))?;
        sources.humans = ValueSource::Env;
    }
    if let Some(demo) = var("GOFISH_DEMO")
        && !demo.is_empty()
    {
        cfg.demo_mode = parse_bool(&demo)
            .ok_or_else(|| ConfigError::Invalid(format!("Invalid GOFISH_DEMO '{}'", demo)))?;
        sources.demo_mode = ValueSource::Env;
    }
    if let Some(seed) = var("GOFISH_SEED")
        && !seed.is_empty()
    {
        cfg.seed = Some(
            seed.trim()
                .parse()
                .map_err(|_| ConfigError::Invalid(format!("Invalid GOFISH_SEED '{}'", seed)))?,
        );
        sources.seed = ValueSource::Env;
    }
    if let Some(ai) = var("GOFISH_AI")
        && !ai.is_empty()
    {
        cfg.ai = ai.trim().to_string();
        sources.ai = ValueSource::Env;
    }

    cfg.validate()?;
    Ok(ConfigResolved {
        config: cfg,
        sources,
    })
}

#[derive(Debug, Deserialize)]
struct FileConfig {
    #[serde(default)]
    players: Option<usize>,
    #[serde(default)]
    humans: Option<usize>,
    #[serde(default)]
    demo_mode: Option<bool>,
    #[serde(default)]
    seed: Option<u64>,
    #[serde(default)]
    ai: Option<String>,
}

fn parse_bool(s: &str) -> Option<bool> {
    match s.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "on" | "yes" => Some(true),
        "0" | "false" | "off" | "no" => Some(false),
        _ => None,
    }
}

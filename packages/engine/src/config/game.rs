//! Game configuration.
//!
//! Defaults describe a standard game to 66 with talon closing and trump
//! exchange enabled. Configuration can be built in code, read from a JSON
//! object (missing fields fall back to defaults), or read from `SCHNAPSEN_*`
//! environment variables.

use std::env;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

use crate::domain::rules::{DECK_POINTS, DEFAULT_TARGET_SCORE};
use crate::errors::DomainError;

pub const ENV_TARGET_SCORE: &str = "SCHNAPSEN_TARGET_SCORE";
pub const ENV_ALLOW_TALON_CLOSE: &str = "SCHNAPSEN_ALLOW_TALON_CLOSE";
pub const ENV_ALLOW_TRUMP_EXCHANGE: &str = "SCHNAPSEN_ALLOW_TRUMP_EXCHANGE";
pub const ENV_SEED: &str = "SCHNAPSEN_SEED";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Score that ends the game immediately once reached.
    #[serde(alias = "targetScore")]
    pub target_score: u16,
    #[serde(alias = "allowTalonClose")]
    pub allow_talon_close: bool,
    #[serde(alias = "allowTrumpExchange")]
    pub allow_trump_exchange: bool,
    /// Optional RNG seed for a reproducible deal. `None` draws from OS entropy.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            target_score: DEFAULT_TARGET_SCORE,
            allow_talon_close: true,
            allow_trump_exchange: true,
            seed: None,
        }
    }
}

impl GameConfig {
    /// Create a configuration with default rules and a fixed deal seed.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            seed: Some(seed),
            ..Self::default()
        }
    }

    /// Build from an optional JSON object; `None` yields the defaults.
    ///
    /// ```rust,ignore
    /// let json = serde_json::json!({"targetScore": 33});
    /// let config = GameConfig::from_json(Some(&json))?;
    /// assert!(config.allow_talon_close);
    /// ```
    pub fn from_json(config: Option<&JsonValue>) -> Result<Self, DomainError> {
        let parsed = match config {
            Some(json) => Self::deserialize(json)
                .map_err(|e| DomainError::config(format!("invalid game config: {e}")))?,
            None => Self::default(),
        };
        parsed.validate()?;
        Ok(parsed)
    }

    /// Read `SCHNAPSEN_*` environment variables; unset variables keep defaults.
    pub fn from_env() -> Result<Self, DomainError> {
        let defaults = Self::default();
        let config = Self {
            target_score: env_or(ENV_TARGET_SCORE, defaults.target_score)?,
            allow_talon_close: env_or(ENV_ALLOW_TALON_CLOSE, defaults.allow_talon_close)?,
            allow_trump_exchange: env_or(ENV_ALLOW_TRUMP_EXCHANGE, defaults.allow_trump_exchange)?,
            seed: match env::var(ENV_SEED) {
                Ok(raw) => Some(parse_env(ENV_SEED, &raw)?),
                Err(_) => None,
            },
        };
        config.validate()?;
        Ok(config)
    }

    /// The target must be reachable with the deck's card points.
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.target_score == 0 || self.target_score > DECK_POINTS {
            return Err(DomainError::config(format!(
                "target_score must be in 1..={DECK_POINTS}, got {}",
                self.target_score
            )));
        }
        Ok(())
    }
}

fn env_or<T: FromStr>(name: &str, default: T) -> Result<T, DomainError> {
    match env::var(name) {
        Ok(raw) => parse_env(name, &raw),
        Err(_) => Ok(default),
    }
}

fn parse_env<T: FromStr>(name: &str, raw: &str) -> Result<T, DomainError> {
    raw.trim()
        .parse::<T>()
        .map_err(|_| DomainError::config(format!("{name} has invalid value {raw:?}")))
}

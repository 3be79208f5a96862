//! Session configuration, loaded from JSON.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{MeepleError, Result};

/// Default number of players at the table.
pub const DEFAULT_PLAYERS: u8 = 2;

/// Followers each player starts with in the base game.
pub const DEFAULT_FOLLOWERS_PER_PLAYER: u8 = 7;

/// Table setup for a new session. Missing fields take their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionConfig {
    #[serde(default = "default_players")]
    pub players: u8,
    #[serde(default = "default_followers_per_player")]
    pub followers_per_player: u8,
}

fn default_players() -> u8 {
    DEFAULT_PLAYERS
}

fn default_followers_per_player() -> u8 {
    DEFAULT_FOLLOWERS_PER_PLAYER
}

impl Default for SessionConfig {
    fn default() -> Self {
        SessionConfig {
            players: DEFAULT_PLAYERS,
            followers_per_player: DEFAULT_FOLLOWERS_PER_PLAYER,
        }
    }
}

impl SessionConfig {
    /// Parses a config from a JSON string.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: SessionConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads and parses a JSON config file.
    pub fn load(path: &Path) -> Result<Self> {
        let data = fs::read_to_string(path)?;
        Self::from_json(&data)
    }

    /// Rejects setups that leave nobody to play or nothing to place.
    pub fn validate(&self) -> Result<()> {
        if self.players == 0 {
            return Err(MeepleError::InvalidConfig("at least one player is required".to_string()));
        }
        if self.followers_per_player == 0 {
            return Err(MeepleError::InvalidConfig(
                "followers_per_player must be positive".to_string(),
            ));
        }
        Ok(())
    }
}

//! Engine configuration
//!
//! [`GameConfig`] is plain serde data so it can live in a JSON file next to
//! whatever application embeds the engine. Every field has a default, so a
//! partial (or empty) object is valid:
//!
//! ```json
//! { "evaluation": "king_escapes", "enforce_turn_order": false }
//! ```

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::{info, warn};

/// How [`Game::evaluate_board`](crate::game::Game::evaluate_board) decides
/// that the side to move is finished
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EvaluationRule {
    /// Search every legal move of every piece: no move and in check is
    /// checkmate, no move and not in check is stalemate
    #[default]
    FullSearch,

    /// Only look at the king's adjacent squares. Without an escape the side
    /// in check loses; a side not in check draws only when its king is its
    /// last piece. Blocks and captures by other pieces are not considered.
    KingEscapes,
}

/// Options for a [`Game`](crate::game::Game)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub evaluation: EvaluationRule,

    /// Reject moves by the side that just moved
    pub enforce_turn_order: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            evaluation: EvaluationRule::FullSearch,
            enforce_turn_order: true,
        }
    }
}

impl GameConfig {
    /// Parse a config from JSON text
    pub fn from_json_str(text: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(text)?)
    }

    /// Read and parse a JSON config file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }

    /// Read a config file, falling back to defaults when it is missing or
    /// unreadable
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match Self::load(path) {
            Ok(config) => {
                info!("[CONFIG] Loaded engine config from {:?}", path);
                config
            }
            Err(e) => {
                warn!(
                    "[CONFIG] Failed to load engine config at {:?}: {}. Using defaults.",
                    path, e
                );
                GameConfig::default()
            }
        }
    }

    /// Pretty JSON for writing back to disk
    pub fn to_json_string(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

use serde::{Deserialize, Serialize};

use crate::error::GameError;
use crate::player::Player;

pub const DEFAULT_DIVISIONS: u8 = 10;
pub const MAX_DIVISIONS: u8 = 32;

/// Everything chosen before the first stone goes down.
///
/// `divisions` may be anything from 0 to `MAX_DIVISIONS`. Zero is a board of
/// one intersection: every larger board holds a square of four corners, so it
/// is the only size where a filled board ends in a draw without a challenge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Grid divisions per side; the board has `divisions + 1` intersections per side.
    pub divisions: u8,
    pub challenge_rule: bool,
    pub player1_name: String,
    pub player2_name: String,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            divisions: DEFAULT_DIVISIONS,
            challenge_rule: false,
            player1_name: Player::One.default_name().to_string(),
            player2_name: Player::Two.default_name().to_string(),
        }
    }
}

impl Settings {
    pub fn new(
        divisions: u8,
        challenge_rule: bool,
        player1_name: &str,
        player2_name: &str,
    ) -> Self {
        Settings {
            divisions,
            challenge_rule,
            player1_name: player1_name.to_string(),
            player2_name: player2_name.to_string(),
        }
    }

    /// Parse settings JSON; missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn validate(&self) -> Result<(), GameError> {
        if self.divisions > MAX_DIVISIONS {
            return Err(GameError::InvalidBoardSize(self.divisions));
        }
        Ok(())
    }

    pub fn name(&self, player: Player) -> String {
        let raw = match player {
            Player::One => &self.player1_name,
            Player::Two => &self.player2_name,
        };
        normalize_name(raw, player)
    }
}

/// Trim a display name, substituting the player's default when blank.
pub fn normalize_name(raw: &str, player: Player) -> String {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        player.default_name().to_string()
    } else {
        trimmed.to_string()
    }
}

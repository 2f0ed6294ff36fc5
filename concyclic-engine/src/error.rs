use std::fmt;

use crate::engine::Stage;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    NotOnBoard,
    Occupied,
    WrongStage(Stage),
    ChallengeRuleOff,
    SettingsLocked,
    InvalidBoardSize(u8),
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::NotOnBoard => write!(f, "not on board"),
            GameError::Occupied => write!(f, "occupied"),
            GameError::WrongStage(stage) => write!(f, "not allowed during {stage}"),
            GameError::ChallengeRuleOff => write!(f, "challenge rule is off"),
            GameError::SettingsLocked => write!(f, "settings locked after first placement"),
            GameError::InvalidBoardSize(n) => write!(f, "invalid board size: {n}"),
        }
    }
}

impl std::error::Error for GameError {}

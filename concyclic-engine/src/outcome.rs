use serde::{Deserialize, Serialize};
use std::fmt;

/// Why a game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Reason {
    /// The mover completed a concyclic or collinear set and lost.
    AutoConcyclicLose,
    /// The challenger proved the last stone completed such a set.
    ChallengeWon,
    /// The challenged stone completed no such set.
    ChallengeFailed,
    BoardFullDraw,
}

impl Reason {
    pub fn is_draw(&self) -> bool {
        matches!(self, Reason::BoardFullDraw)
    }
}

impl fmt::Display for Reason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Reason::AutoConcyclicLose => write!(f, "auto_concyclic_lose"),
            Reason::ChallengeWon => write!(f, "challenge_won"),
            Reason::ChallengeFailed => write!(f, "challenge_failed"),
            Reason::BoardFullDraw => write!(f, "board_full_draw"),
        }
    }
}

impl std::str::FromStr for Reason {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "auto_concyclic_lose" => Ok(Reason::AutoConcyclicLose),
            "challenge_won" => Ok(Reason::ChallengeWon),
            "challenge_failed" => Ok(Reason::ChallengeFailed),
            "board_full_draw" => Ok(Reason::BoardFullDraw),
            _ => Err(format!("unknown reason: {s}")),
        }
    }
}

use serde::{Deserialize, Serialize};

use crate::engine::{Engine, Stage};
use crate::outcome::Reason;

/// Plain-text message describing what happens next. Styling is up to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct StatusMessage {
    pub title: Option<String>,
    pub lines: Vec<String>,
}

impl StatusMessage {
    fn new(title: Option<&str>, lines: Vec<String>) -> Self {
        StatusMessage {
            title: title.map(str::to_string),
            lines,
        }
    }
}

pub fn status_message(engine: &Engine) -> StatusMessage {
    let current = engine.player_name(engine.current_player());
    let other = engine.player_name(engine.current_player().opp());

    match engine.stage() {
        Stage::GameOver => game_over_message(engine),
        Stage::ConfirmingSpot => StatusMessage::new(
            None,
            vec![
                "Place stone here?".to_string(),
                format!("{current}, confirm placement?"),
            ],
        ),
        Stage::AwaitingChallenge => StatusMessage::new(
            None,
            vec![
                format!("{other} placed a stone."),
                format!("{current}, challenge this move?"),
                "(Or click board to place your stone)".to_string(),
            ],
        ),
        Stage::SelectingSpot => {
            let mut lines = vec![
                format!("Next turn: {current}."),
                "Choose a spot to place your stone.".to_string(),
            ];
            if engine.challenge_rule() && engine.stones().is_empty() {
                lines.push("(Challenge Rule Enabled)".to_string());
            }
            StatusMessage::new(None, lines)
        }
    }
}

fn game_over_message(engine: &Engine) -> StatusMessage {
    let (Some(winner), Some(loser)) = (engine.winner(), engine.loser()) else {
        return match engine.reason() {
            Some(Reason::BoardFullDraw) => {
                StatusMessage::new(Some("Draw"), vec!["All spaces are filled.".to_string()])
            }
            _ => StatusMessage::new(Some("Game Over"), vec!["Result undetermined.".to_string()]),
        };
    };
    let winner = engine.player_name(winner);
    let loser = engine.player_name(loser);

    match engine.reason() {
        Some(Reason::AutoConcyclicLose) => StatusMessage::new(
            Some("Concyclic Set!"),
            vec![
                format!("{loser} formed a concyclic set."),
                format!("{winner} wins!"),
            ],
        ),
        Some(Reason::ChallengeWon) => StatusMessage::new(
            Some("Challenge Successful!"),
            vec![
                format!("{winner}'s challenge was correct."),
                format!("{winner} wins!"),
            ],
        ),
        Some(Reason::ChallengeFailed) => StatusMessage::new(
            Some("Challenge Failed!"),
            vec![
                format!("{loser}'s challenge was incorrect."),
                format!("{winner} wins!"),
            ],
        ),
        Some(Reason::BoardFullDraw) | None => {
            StatusMessage::new(Some("Game Over"), vec!["Result undetermined.".to_string()])
        }
    }
}

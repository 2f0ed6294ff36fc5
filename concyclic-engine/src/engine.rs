use std::fmt;

use serde::{Deserialize, Serialize};

use crate::Point;
use crate::board::Board;
use crate::curve::{CurvePath, reconstruct_curve};
use crate::error::GameError;
use crate::geometry::is_concyclic_or_collinear;
use crate::outcome::Reason;
use crate::player::Player;
use crate::settings::{Settings, normalize_name};
use crate::status::{self, StatusMessage};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    SelectingSpot,
    ConfirmingSpot,
    AwaitingChallenge,
    GameOver,
}

impl Stage {
    pub fn is_over(&self) -> bool {
        matches!(self, Stage::GameOver)
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stage::SelectingSpot => write!(f, "selecting_spot"),
            Stage::ConfirmingSpot => write!(f, "confirming_spot"),
            Stage::AwaitingChallenge => write!(f, "awaiting_challenge"),
            Stage::GameOver => write!(f, "game_over"),
        }
    }
}

impl std::str::FromStr for Stage {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "selecting_spot" => Ok(Stage::SelectingSpot),
            "confirming_spot" => Ok(Stage::ConfirmingSpot),
            "awaiting_challenge" => Ok(Stage::AwaitingChallenge),
            "game_over" => Ok(Stage::GameOver),
            _ => Err(format!("unknown stage: {s}")),
        }
    }
}

/// Read-only view of a session, shaped for the presentation layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Snapshot {
    pub stage: Stage,
    pub divisions: u8,
    pub challenge_rule: bool,
    pub stones: Vec<Point>,
    pub preview: Option<Point>,
    pub current_player: Player,
    pub player_names: [String; 2],
    pub pending_challenge: Option<Point>,
    pub game_over: bool,
    pub reason: Option<Reason>,
    pub winner: Option<Player>,
    pub highlight: Option<[Point; 4]>,
    pub curve: Option<CurvePath>,
}

/// One match: the board, whose turn it is, and where the turn stands.
///
/// Every transition returns the resulting stage. A rejected transition leaves
/// the engine exactly as it was.
#[derive(Debug, Clone)]
pub struct Engine {
    settings: Settings,
    board: Board,
    current: Player,
    stage: Stage,
    preview: Option<Point>,
    /// Stone the current player may still challenge.
    pending_challenge: Option<Point>,
    reason: Option<Reason>,
    highlight: Option<[Point; 4]>,
    curve: Option<CurvePath>,
}

impl Default for Engine {
    fn default() -> Self {
        Self::create(Settings::default())
    }
}

impl Engine {
    pub fn new(settings: Settings) -> Result<Self, GameError> {
        settings.validate()?;
        Ok(Self::create(settings))
    }

    fn create(settings: Settings) -> Self {
        let settings = Settings {
            player1_name: settings.name(Player::One),
            player2_name: settings.name(Player::Two),
            ..settings
        };
        Engine {
            board: Board::new(settings.divisions),
            settings,
            current: Player::One,
            stage: Stage::SelectingSpot,
            preview: None,
            pending_challenge: None,
            reason: None,
            highlight: None,
            curve: None,
        }
    }

    // -- Accessors --

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn divisions(&self) -> u8 {
        self.settings.divisions
    }

    pub fn challenge_rule(&self) -> bool {
        self.settings.challenge_rule
    }

    pub fn stones(&self) -> &[Point] {
        self.board.stones()
    }

    pub fn stage(&self) -> Stage {
        self.stage
    }

    pub fn preview(&self) -> Option<Point> {
        self.preview
    }

    pub fn pending_challenge(&self) -> Option<Point> {
        self.pending_challenge
    }

    /// After the game ends this is the winner, except on a draw.
    pub fn current_player(&self) -> Player {
        self.current
    }

    pub fn player_name(&self, player: Player) -> &str {
        match player {
            Player::One => &self.settings.player1_name,
            Player::Two => &self.settings.player2_name,
        }
    }

    pub fn is_game_over(&self) -> bool {
        self.stage.is_over()
    }

    pub fn reason(&self) -> Option<Reason> {
        self.reason
    }

    pub fn winner(&self) -> Option<Player> {
        match self.reason {
            Some(reason) if !reason.is_draw() => Some(self.current),
            _ => None,
        }
    }

    pub fn loser(&self) -> Option<Player> {
        self.winner().map(Player::opp)
    }

    pub fn highlight(&self) -> Option<&[Point; 4]> {
        self.highlight.as_ref()
    }

    pub fn curve(&self) -> Option<&CurvePath> {
        self.curve.as_ref()
    }

    /// Board size and challenge rule are fixed once a stone is down.
    pub fn settings_locked(&self) -> bool {
        !self.board.is_empty()
    }

    pub fn status(&self) -> StatusMessage {
        status::status_message(self)
    }

    // -- Settings --

    /// Start a fresh match. Always allowed.
    pub fn reset(&mut self, settings: Settings) -> Result<Stage, GameError> {
        settings.validate()?;
        *self = Self::create(settings);
        tracing::debug!(
            "Session reset: board {}, challenge rule {}",
            self.divisions(),
            self.challenge_rule()
        );
        Ok(self.stage)
    }

    pub fn set_board_size(&mut self, divisions: u8) -> Result<Stage, GameError> {
        if self.settings_locked() {
            return Err(GameError::SettingsLocked);
        }
        self.reset(Settings {
            divisions,
            ..self.settings.clone()
        })
    }

    pub fn set_challenge_rule(&mut self, challenge_rule: bool) -> Result<Stage, GameError> {
        if self.settings_locked() {
            return Err(GameError::SettingsLocked);
        }
        self.reset(Settings {
            challenge_rule,
            ..self.settings.clone()
        })
    }

    /// Names are display-only and may change at any time.
    pub fn set_player_names(&mut self, player1: &str, player2: &str) {
        self.settings.player1_name = normalize_name(player1, Player::One);
        self.settings.player2_name = normalize_name(player2, Player::Two);
    }

    // -- Game actions --

    pub fn select_cell(&mut self, point: Point) -> Result<Stage, GameError> {
        let declining = match self.stage {
            Stage::SelectingSpot | Stage::ConfirmingSpot => false,
            Stage::AwaitingChallenge => true,
            Stage::GameOver => return Err(GameError::WrongStage(self.stage)),
        };

        if !self.board.on_board(point) {
            return Err(GameError::NotOnBoard);
        }
        if self.board.is_occupied(point) {
            return Err(GameError::Occupied);
        }

        if declining {
            tracing::debug!("{} declined to challenge", self.current);
            self.pending_challenge = None;
        }
        self.preview = Some(point);
        self.stage = Stage::ConfirmingSpot;
        Ok(self.stage)
    }

    pub fn cancel_placement(&mut self) -> Result<Stage, GameError> {
        match self.stage {
            Stage::ConfirmingSpot => {
                self.preview = None;
                self.stage = Stage::SelectingSpot;
                Ok(self.stage)
            }
            Stage::SelectingSpot => Ok(self.stage),
            Stage::AwaitingChallenge | Stage::GameOver => Err(GameError::WrongStage(self.stage)),
        }
    }

    pub fn confirm_placement(&mut self) -> Result<Stage, GameError> {
        let (Stage::ConfirmingSpot, Some(point)) = (self.stage, self.preview) else {
            return Err(GameError::WrongStage(self.stage));
        };

        self.board.place(point)?;
        self.preview = None;
        tracing::debug!("{} placed {point:?}", self.current);

        if self.settings.challenge_rule {
            self.pending_challenge = Some(point);
            self.current = self.current.opp();
            self.stage = Stage::AwaitingChallenge;
            return Ok(self.stage);
        }

        if let Some(set) = self.losing_set_with(point) {
            // the mover loses
            self.current = self.current.opp();
            self.finish(Reason::AutoConcyclicLose, Some(set));
        } else if self.board.is_full() {
            self.finish(Reason::BoardFullDraw, None);
        } else {
            self.current = self.current.opp();
            self.stage = Stage::SelectingSpot;
        }
        Ok(self.stage)
    }

    pub fn issue_challenge(&mut self) -> Result<Stage, GameError> {
        if self.stage != Stage::AwaitingChallenge {
            return Err(GameError::WrongStage(self.stage));
        }
        if !self.settings.challenge_rule {
            return Err(GameError::ChallengeRuleOff);
        }

        let Some(target) = self.pending_challenge.take() else {
            tracing::warn!("Challenge issued with no target stone");
            self.stage = Stage::SelectingSpot;
            return Ok(self.stage);
        };

        match self.losing_set_with(target) {
            Some(set) => self.finish(Reason::ChallengeWon, Some(set)),
            None => {
                // the stone's owner wins
                self.current = self.current.opp();
                self.finish(Reason::ChallengeFailed, None);
            }
        }
        Ok(self.stage)
    }

    /// The first set of four stones, including `stone`, that is concyclic or
    /// collinear, in placement order.
    ///
    /// Sets made only of older stones are not searched: in automatic mode they
    /// would have ended the game already.
    fn losing_set_with(&self, stone: Point) -> Option<[Point; 4]> {
        let others = self.board.others(stone);
        let stones = self.board.stones();

        // lexicographic over `others`, stopping at the first hit
        for (i, &a) in others.iter().enumerate() {
            for (j, &b) in others.iter().enumerate().skip(i + 1) {
                for &c in &others[j + 1..] {
                    if is_concyclic_or_collinear(stone, a, b, c) {
                        let mut set = [a, b, c, stone];
                        set.sort_by_key(|p| stones.iter().position(|s| s == p));
                        return Some(set);
                    }
                }
            }
        }
        None
    }

    fn finish(&mut self, reason: Reason, set: Option<[Point; 4]>) {
        self.stage = Stage::GameOver;
        self.reason = Some(reason);
        self.highlight = set;
        self.curve = set.as_ref().map(reconstruct_curve);
        self.preview = None;
        self.pending_challenge = None;

        match self.winner() {
            Some(winner) => tracing::info!("Game over ({reason}): {winner} wins"),
            None => tracing::info!("Game over ({reason})"),
        }
    }

    // -- Serialization --

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            stage: self.stage,
            divisions: self.divisions(),
            challenge_rule: self.challenge_rule(),
            stones: self.board.stones().to_vec(),
            preview: self.preview,
            current_player: self.current,
            player_names: [
                self.settings.player1_name.clone(),
                self.settings.player2_name.clone(),
            ],
            pending_challenge: self.pending_challenge,
            game_over: self.is_game_over(),
            reason: self.reason,
            winner: self.winner(),
            highlight: self.highlight,
            curve: self.curve,
        }
    }
}

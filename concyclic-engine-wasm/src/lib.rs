use concyclic_engine::star_points::star_points;
use concyclic_engine::{Engine, Player, Point, Settings};
use wasm_bindgen::prelude::*;

/// Star points for a board as a JSON array of `[x, y]` pairs.
#[wasm_bindgen]
pub fn star_points_json(divisions: u8) -> String {
    points_json(&star_points(divisions))
}

#[wasm_bindgen]
pub struct WasmEngine {
    inner: Engine,
}

#[wasm_bindgen]
impl WasmEngine {
    /// Out-of-range board sizes fall back to the default settings.
    #[wasm_bindgen(constructor)]
    pub fn new(
        board_size: u8,
        challenge_rule: bool,
        player1_name: &str,
        player2_name: &str,
    ) -> Self {
        let settings = Settings::new(board_size, challenge_rule, player1_name, player2_name);
        Self {
            inner: Engine::new(settings).unwrap_or_default(),
        }
    }

    /// Build from settings JSON; malformed input falls back to the defaults.
    pub fn from_settings_json(json: &str) -> Self {
        let settings = Settings::from_json(json).unwrap_or_default();
        Self {
            inner: Engine::new(settings).unwrap_or_default(),
        }
    }

    // -- Game actions --
    // Each returns whether the event was accepted; rejected events change nothing.

    pub fn select_cell(&mut self, x: i32, y: i32) -> bool {
        self.inner.select_cell((x, y)).is_ok()
    }

    pub fn confirm_placement(&mut self) -> bool {
        self.inner.confirm_placement().is_ok()
    }

    pub fn cancel_placement(&mut self) -> bool {
        self.inner.cancel_placement().is_ok()
    }

    pub fn issue_challenge(&mut self) -> bool {
        self.inner.issue_challenge().is_ok()
    }

    // -- Settings --

    pub fn reset_session(
        &mut self,
        board_size: u8,
        challenge_rule: bool,
        player1_name: &str,
        player2_name: &str,
    ) -> bool {
        let settings = Settings::new(board_size, challenge_rule, player1_name, player2_name);
        self.inner.reset(settings).is_ok()
    }

    pub fn set_board_size(&mut self, board_size: u8) -> bool {
        self.inner.set_board_size(board_size).is_ok()
    }

    pub fn set_challenge_rule(&mut self, challenge_rule: bool) -> bool {
        self.inner.set_challenge_rule(challenge_rule).is_ok()
    }

    pub fn set_player_names(&mut self, player1_name: &str, player2_name: &str) {
        self.inner.set_player_names(player1_name, player2_name);
    }

    pub fn settings_locked(&self) -> bool {
        self.inner.settings_locked()
    }

    // -- Accessors (WASM-friendly types) --

    pub fn stage(&self) -> String {
        self.inner.stage().to_string()
    }

    pub fn board_size(&self) -> u8 {
        self.inner.divisions()
    }

    pub fn challenge_rule(&self) -> bool {
        self.inner.challenge_rule()
    }

    /// Stones as a flat `[x0, y0, x1, y1, ...]` array.
    pub fn stones(&self) -> js_sys::Int32Array {
        js_sys::Int32Array::from(flatten(self.inner.stones()).as_slice())
    }

    pub fn stone_count(&self) -> usize {
        self.inner.stones().len()
    }

    pub fn has_preview(&self) -> bool {
        self.inner.preview().is_some()
    }

    pub fn preview_x(&self) -> i32 {
        self.inner.preview().map(|(x, _)| x).unwrap_or(-1)
    }

    pub fn preview_y(&self) -> i32 {
        self.inner.preview().map(|(_, y)| y).unwrap_or(-1)
    }

    pub fn current_player(&self) -> u8 {
        self.inner.current_player().to_int()
    }

    /// Empty for an unknown player id.
    pub fn player_name(&self, player: u8) -> String {
        Player::from_int(player)
            .map(|p| self.inner.player_name(p).to_string())
            .unwrap_or_default()
    }

    pub fn is_game_over(&self) -> bool {
        self.inner.is_game_over()
    }

    /// Reason code, or an empty string while the game is running.
    pub fn reason(&self) -> String {
        self.inner
            .reason()
            .map(|r| r.to_string())
            .unwrap_or_default()
    }

    /// Winner id, or 0 when there is none.
    pub fn winner(&self) -> u8 {
        self.inner.winner().map(Player::to_int).unwrap_or(0)
    }

    /// JSON array of four `[x, y]` pairs, or `null`.
    pub fn highlight_json(&self) -> String {
        serde_json::to_string(&self.inner.highlight()).unwrap_or_else(|_| "null".into())
    }

    /// JSON curve (`{"type":"line",...}` or `{"type":"circle",...}`), or `null`.
    pub fn curve_json(&self) -> String {
        serde_json::to_string(&self.inner.curve()).unwrap_or_else(|_| "null".into())
    }

    /// For a line curve, the chord across the whole board as
    /// `[[x1, y1], [x2, y2]]` in grid units, or `null`.
    pub fn line_segment_json(&self) -> String {
        let segment = self
            .inner
            .curve()
            .and_then(|c| c.board_segment(self.inner.divisions()));
        serde_json::to_string(&segment).unwrap_or_else(|_| "null".into())
    }

    pub fn snapshot_json(&self) -> String {
        serde_json::to_string(&self.inner.snapshot()).unwrap_or_else(|_| "{}".into())
    }

    /// JSON `{"title": string | null, "lines": [string]}`.
    pub fn status_json(&self) -> String {
        serde_json::to_string(&self.inner.status())
            .unwrap_or_else(|_| r#"{"title":null,"lines":[]}"#.into())
    }
}

fn flatten(points: &[Point]) -> Vec<i32> {
    points.iter().flat_map(|&(x, y)| [x, y]).collect()
}

fn points_json(points: &[Point]) -> String {
    let pts: Vec<[i32; 2]> = points.iter().map(|&(x, y)| [x, y]).collect();
    serde_json::to_string(&pts).unwrap_or_else(|_| "[]".into())
}

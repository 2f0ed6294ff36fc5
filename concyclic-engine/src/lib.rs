pub mod board;
pub mod combinations;
pub mod curve;
pub mod engine;
pub mod error;
pub mod geometry;
pub mod outcome;
pub mod player;
pub mod settings;
pub mod star_points;
pub mod status;

#[cfg(test)]
mod test_log;

/// A lattice intersection `(x, y)`. On the board when both lie in `0..=divisions`.
pub type Point = (i32, i32);

pub use board::Board;
pub use combinations::combinations;
pub use curve::{CurvePath, reconstruct_curve};
pub use engine::{Engine, Snapshot, Stage};
pub use error::GameError;
pub use geometry::{Circle, are_collinear, circumcircle, is_concyclic_or_collinear};
pub use outcome::Reason;
pub use player::Player;
pub use settings::Settings;
pub use status::StatusMessage;

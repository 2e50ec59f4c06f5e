//! Core Connect Four game logic: board storage, line geometry, positional
//! scoring, and the engine that ties them together.

mod board;
mod engine;
mod geometry;
mod heuristics;
mod player;

pub use board::{Board, Cell, LineCells, MoveError, DEFAULT_COLS, DEFAULT_ROWS};
pub use engine::{Engine, GameOutcome, LegalActions, Snapshot};
pub use geometry::{LineOffsets, DEFAULT_LINE_LENGTH};
pub use heuristics::ScoreTable;
pub use player::Player;

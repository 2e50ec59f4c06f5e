//! # Connect Four Coach
//!
//! A two-player Connect Four game for the terminal. Every empty cell is
//! annotated with a positional score so players can see which squares are
//! worth fighting over; the scoring and win detection both run on the same
//! line-scanning engine.
//!
//! ## Modules
//!
//! - [`game`] — Core game logic: board, line geometry, scoring, engine
//! - [`ui`] — Terminal UI: game view with the hint overlay
//! - [`config`] — TOML configuration loading and validation
//! - [`error`] — Structured error types

pub mod config;
pub mod error;
pub mod game;
pub mod ui;

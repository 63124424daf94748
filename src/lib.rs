//! # Minimax Connect Four
//!
//! Human-vs-computer Connect Four on a 6x7 board. The computer takes an
//! immediate win, blocks an immediate loss, and otherwise runs a depth-limited
//! minimax search with alpha-beta pruning over a window-counting heuristic.
//!
//! ## Modules
//!
//! - [`game`] - Board, players, terminal detection, game state
//! - [`ai`] - Heuristic, minimax search, move selector
//! - [`ui`] - Ratatui game view and plain console frontend
//! - [`config`] - TOML configuration loading and validation
//! - [`error`] - Structured error types

pub mod ai;
pub mod config;
pub mod error;
pub mod game;
pub mod ui;

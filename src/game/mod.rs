//! Core Connect Four game logic: board representation, player types, win and
//! draw detection, and the live game state machine.

mod board;
mod player;
mod state;
mod terminal;

pub use board::{windows, Board, Cell, Window, CENTER_COL, COLS, ROWS, WINDOW_LEN};
pub use player::Player;
pub use state::GameState;
pub use terminal::{classify, has_four_in_row, wins_through_cell, GameStatus};

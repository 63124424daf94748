use crate::error::MoveError;

use super::terminal::{wins_through_cell, GameStatus};
use super::{Board, Player};

/// A game in progress: the board, whose turn it is, and whether it has ended.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GameState {
    board: Board,
    current_player: Player,
    status: GameStatus,
}

impl GameState {
    /// Create a game where `first` moves first
    pub fn new(first: Player) -> Self {
        GameState {
            board: Board::new(),
            current_player: first,
            status: GameStatus::Ongoing,
        }
    }

    /// Create initial game state
    pub fn initial() -> Self {
        Self::new(Player::Red) // Red starts
    }

    /// Get current player
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Get reference to board
    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Check if game is over
    pub fn is_over(&self) -> bool {
        self.status.is_terminal()
    }

    /// Columns the current player may play; empty once the game is over
    pub fn open_columns(&self) -> Vec<usize> {
        if self.is_over() {
            return Vec::new();
        }
        self.board.open_columns()
    }

    pub fn move_count(&self) -> usize {
        self.board.piece_count()
    }

    /// Play the current player's piece in `column` and pass the turn.
    ///
    /// Returns the `(row, col)` the piece landed on.
    pub fn apply_move(&mut self, column: usize) -> Result<(usize, usize), MoveError> {
        if self.is_over() {
            return Err(MoveError::GameOver);
        }

        let (row, col) = self.board.place(column, self.current_player)?;

        if wins_through_cell(&self.board, self.current_player, row, col) {
            self.status = GameStatus::Winner(self.current_player);
        } else if self.board.is_full() {
            self.status = GameStatus::Draw;
        }

        self.current_player = self.current_player.other();

        Ok((row, col))
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::initial()
    }
}

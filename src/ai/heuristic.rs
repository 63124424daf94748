use crate::config::WindowWeights;
use crate::game::{windows, Board, Cell, Player, CENTER_COL, ROWS, WINDOW_LEN};

use super::Score;

/// Trait for evaluating a board position from a player's perspective.
pub trait Heuristic {
    fn evaluate(&self, board: &Board, player: Player) -> Score;
}

/// Default heuristic: scores every four-cell window plus centre-column control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct WindowHeuristic {
    weights: WindowWeights,
}

impl WindowHeuristic {
    pub fn new(weights: WindowWeights) -> Self {
        WindowHeuristic { weights }
    }

    pub fn weights(&self) -> &WindowWeights {
        &self.weights
    }
}

impl Heuristic for WindowHeuristic {
    fn evaluate(&self, board: &Board, player: Player) -> Score {
        score_position(board, player, &self.weights)
    }
}

/// Score one window's contents for `player`.
///
/// Own patterns and opponent patterns are scored independently; with four
/// cells at most one of them can match.
pub fn score_window(cells: &[Cell; WINDOW_LEN], player: Player, weights: &WindowWeights) -> Score {
    let own_cell = player.to_cell();
    let opp_cell = player.other().to_cell();

    let mut own = 0;
    let mut opp = 0;
    let mut empty = 0;
    for &cell in cells {
        match cell {
            c if c == own_cell => own += 1,
            c if c == opp_cell => opp += 1,
            _ => empty += 1,
        }
    }

    let mut score = 0;
    if own == 4 {
        score += weights.four;
    } else if own == 3 && empty == 1 {
        score += weights.three;
    } else if own == 2 && empty == 2 {
        score += weights.two;
    }

    if opp == 3 && empty == 1 {
        score += weights.opponent_three;
    } else if opp == 2 && empty == 2 {
        score += weights.opponent_two;
    }

    score
}

/// Sum of [`score_window`] over every window, plus the centre-column bonus.
///
/// Only meaningful on positions the search has not already classified as
/// terminal; it is a preference, not a game-theoretic value.
pub fn score_position(board: &Board, player: Player, weights: &WindowWeights) -> Score {
    let own_cell = player.to_cell();

    let center_count = (0..ROWS)
        .filter(|&row| board.get(row, CENTER_COL) == own_cell)
        .count() as Score;
    let mut score = center_count * weights.center;

    for window in windows() {
        score += score_window(&board.window_cells(&window), player, weights);
    }

    score
}

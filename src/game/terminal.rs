//! Four-in-a-row and draw detection.

use super::board::{windows, Board, Cell, COLS, ROWS, WINDOW_LEN};
use super::player::Player;

/// Where a position stands: still being played, won, or drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    Ongoing,
    Winner(Player),
    Draw,
}

impl GameStatus {
    pub fn is_terminal(self) -> bool {
        self != GameStatus::Ongoing
    }
}

/// Line orientations as (row step, column step): horizontal, vertical, `\`, `/`.
const DIRECTIONS: [(isize, isize); 4] = [(0, 1), (1, 0), (1, 1), (1, -1)];

/// Scan every window on the board for four of `player`'s pieces.
pub fn has_four_in_row(board: &Board, player: Player) -> bool {
    let cell = player.to_cell();
    windows().any(|window| board.window_cells(&window).iter().all(|&c| c == cell))
}

/// Check only the lines through `(row, col)`.
///
/// Cheaper than [`has_four_in_row`] and equivalent to it when the cell is part
/// of the winning line, which holds for the piece that was just dropped.
pub fn wins_through_cell(board: &Board, player: Player, row: usize, col: usize) -> bool {
    let cell = player.to_cell();
    if row >= ROWS || col >= COLS || board.get(row, col) != cell {
        return false;
    }

    DIRECTIONS.iter().any(|&(d_row, d_col)| {
        let count = 1
            + run_length(board, cell, row, col, d_row, d_col)
            + run_length(board, cell, row, col, -d_row, -d_col);
        count >= WINDOW_LEN
    })
}

/// Count consecutive `cell`s starting next to `(row, col)` and walking in one direction.
fn run_length(
    board: &Board,
    cell: Cell,
    row: usize,
    col: usize,
    d_row: isize,
    d_col: isize,
) -> usize {
    let mut count = 0;
    let mut r = row as isize + d_row;
    let mut c = col as isize + d_col;
    while (0..ROWS as isize).contains(&r)
        && (0..COLS as isize).contains(&c)
        && board.get(r as usize, c as usize) == cell
    {
        count += 1;
        r += d_row;
        c += d_col;
    }
    count
}

/// Classify a whole board. Wins are checked before fullness, and Red before
/// Yellow, so a full board containing a line is reported as a win.
pub fn classify(board: &Board) -> GameStatus {
    if has_four_in_row(board, Player::Red) {
        GameStatus::Winner(Player::Red)
    } else if has_four_in_row(board, Player::Yellow) {
        GameStatus::Winner(Player::Yellow)
    } else if board.is_full() {
        GameStatus::Draw
    } else {
        GameStatus::Ongoing
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_board_is_ongoing() {
        let board = Board::new();
        assert!(!has_four_in_row(&board, Player::Red));
        assert!(!has_four_in_row(&board, Player::Yellow));
        assert_eq!(classify(&board), GameStatus::Ongoing);
        assert!(!classify(&board).is_terminal());
    }

    #[test]
    fn test_horizontal_win() {
        let mut board = Board::new();
        for col in 0..4 {
            board.place(col, Player::Red).unwrap();
        }
        assert!(has_four_in_row(&board, Player::Red));
        assert!(wins_through_cell(&board, Player::Red, 5, 2));
        assert_eq!(classify(&board), GameStatus::Winner(Player::Red));
    }

    #[test]
    fn test_vertical_win() {
        let mut board = Board::new();
        for _ in 0..4 {
            board.place(3, Player::Yellow).unwrap();
        }
        assert!(has_four_in_row(&board, Player::Yellow));
        assert!(wins_through_cell(&board, Player::Yellow, 2, 3));
        assert_eq!(classify(&board), GameStatus::Winner(Player::Yellow));
    }

    #[test]
    fn test_diagonal_up_win() {
        // `/` shape ending at the top of column 3
        let board = Board::from_rows([
            ".......",
            ".......",
            "...R...",
            "..RY...",
            ".RYY...",
            "RYYY...",
        ]);
        assert!(has_four_in_row(&board, Player::Red));
        assert!(wins_through_cell(&board, Player::Red, 2, 3));
        assert!(wins_through_cell(&board, Player::Red, 5, 0));
        assert_eq!(classify(&board), GameStatus::Winner(Player::Red));
    }

    #[test]
    fn test_diagonal_down_win() {
        // `\` shape only; no other four-line for Red
        let board = Board::from_rows([
            ".......",
            ".......",
            "...R...",
            "...YR..",
            "...YYR.",
            "...YYYR",
        ]);
        assert!(has_four_in_row(&board, Player::Red));
        assert!(wins_through_cell(&board, Player::Red, 2, 3));
        assert!(!has_four_in_row(&board, Player::Yellow));
        assert_eq!(classify(&board), GameStatus::Winner(Player::Red));
    }

    #[test]
    fn test_anti_diagonal_in_top_right_corner() {
        // Rising line touching the top-right corner, reachable only by the `/` scan
        let board = Board::from_rows([
            "......R",
            ".....RY",
            "....RYY",
            "...RYYR",
            "...YRRY",
            "...YRYR",
        ]);
        assert!(has_four_in_row(&board, Player::Red));
        assert!(wins_through_cell(&board, Player::Red, 0, 6));
    }

    #[test]
    fn test_no_win_with_three() {
        let mut board = Board::new();
        for col in 0..3 {
            board.place(col, Player::Red).unwrap();
        }
        assert!(!has_four_in_row(&board, Player::Red));
        assert!(!wins_through_cell(&board, Player::Red, 5, 1));
    }

    #[test]
    fn test_wins_through_cell_ignores_unrelated_cell() {
        let mut board = Board::new();
        for col in 0..4 {
            board.place(col, Player::Red).unwrap();
        }
        board.place(6, Player::Red).unwrap();
        // A Red piece that is not on the line
        assert!(!wins_through_cell(&board, Player::Red, 5, 6));
        // Wrong owner and empty cells never win
        assert!(!wins_through_cell(&board, Player::Yellow, 5, 0));
        assert!(!wins_through_cell(&board, Player::Red, 0, 0));
        // Out-of-range coordinates are rejected
        assert!(!wins_through_cell(&board, Player::Red, ROWS, 0));
    }

    #[test]
    fn test_draw() {
        // Alternating columns with the two middle rows swapped never line up four
        let board = Board::from_rows([
            "RYRYRYR",
            "RYRYRYR",
            "YRYRYRY",
            "YRYRYRY",
            "RYRYRYR",
            "RYRYRYR",
        ]);
        assert!(board.is_full());
        assert!(!has_four_in_row(&board, Player::Red));
        assert!(!has_four_in_row(&board, Player::Yellow));
        assert_eq!(classify(&board), GameStatus::Draw);
    }

    #[test]
    fn test_full_board_with_line_is_a_win() {
        let board = Board::from_rows([
            "RYRYRYR",
            "RYRYRYR",
            "YRYRYRY",
            "YRYRYRY",
            "RYRYRYR",
            "RRRRYYY",
        ]);
        assert!(board.is_full());
        assert_eq!(classify(&board), GameStatus::Winner(Player::Red));
    }

    #[test]
    fn test_status_is_terminal() {
        assert!(GameStatus::Draw.is_terminal());
        assert!(GameStatus::Winner(Player::Yellow).is_terminal());
        assert!(!GameStatus::Ongoing.is_terminal());
    }
}

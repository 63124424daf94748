use crate::error::MoveError;

use super::player::Player;

pub const ROWS: usize = 6;
pub const COLS: usize = 7;

/// Index of the middle column, rewarded by the heuristic.
pub const CENTER_COL: usize = COLS / 2;

/// Number of aligned pieces needed to win.
pub const WINDOW_LEN: usize = 4;

/// Coordinates of a straight run of [`WINDOW_LEN`] cells.
pub type Window = [(usize, usize); WINDOW_LEN];

/// Every window on the board: rows, columns, `\` diagonals and `/` diagonals.
pub fn windows() -> impl Iterator<Item = Window> {
    let horizontal = (0..ROWS)
        .flat_map(|row| (0..=COLS - WINDOW_LEN).map(move |col| line(row, col, 0, 1)));
    let vertical = (0..=ROWS - WINDOW_LEN)
        .flat_map(|row| (0..COLS).map(move |col| line(row, col, 1, 0)));
    let falling = (0..=ROWS - WINDOW_LEN)
        .flat_map(|row| (0..=COLS - WINDOW_LEN).map(move |col| line(row, col, 1, 1)));
    let rising = (0..=ROWS - WINDOW_LEN)
        .flat_map(|row| (WINDOW_LEN - 1..COLS).map(move |col| line(row, col, 1, -1)));

    horizontal.chain(vertical).chain(falling).chain(rising)
}

fn line(row: usize, col: usize, d_row: isize, d_col: isize) -> Window {
    std::array::from_fn(|i| {
        let step = i as isize;
        (
            (row as isize + d_row * step) as usize,
            (col as isize + d_col * step) as usize,
        )
    })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    Red,
    Yellow,
}

impl Cell {
    /// The player owning this cell, if any
    pub fn owner(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::Red => Some(Player::Red),
            Cell::Yellow => Some(Player::Yellow),
        }
    }
}

/// A 6x7 Connect Four grid. Row 0 is the top, row 5 is the bottom.
///
/// Pieces only ever enter through [`Board::place`], so every column is filled
/// contiguously from the bottom. `Board` is `Copy`: search branches take their
/// own copy and never touch the parent's cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [[Cell; COLS]; ROWS],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Board {
            cells: [[Cell::Empty; COLS]; ROWS],
        }
    }

    /// Get the cell at a specific position
    pub fn get(&self, row: usize, col: usize) -> Cell {
        self.cells[row][col]
    }

    /// A column is open when it exists and its top cell is empty.
    pub fn is_column_open(&self, col: usize) -> bool {
        col < COLS && self.cells[0][col] == Cell::Empty
    }

    /// Lowest empty row in a column, scanning from the bottom up.
    pub fn next_open_row(&self, col: usize) -> Option<usize> {
        if col >= COLS {
            return None;
        }
        (0..ROWS).rev().find(|&row| self.cells[row][col] == Cell::Empty)
    }

    /// Drop a piece for `player` into `col`, returning the `(row, col)` it landed on.
    pub fn place(&mut self, col: usize, player: Player) -> Result<(usize, usize), MoveError> {
        if col >= COLS {
            return Err(MoveError::InvalidColumn { column: col });
        }

        let row = self
            .next_open_row(col)
            .ok_or(MoveError::ColumnFull { column: col })?;
        self.cells[row][col] = player.to_cell();
        Ok((row, col))
    }

    /// Columns that can still take a piece, in ascending order.
    pub fn open_columns(&self) -> Vec<usize> {
        (0..COLS).filter(|&col| self.is_column_open(col)).collect()
    }

    /// Check if the board is completely full
    pub fn is_full(&self) -> bool {
        (0..COLS).all(|col| !self.is_column_open(col))
    }

    /// The cells covered by a window, in line order.
    pub fn window_cells(&self, window: &Window) -> [Cell; WINDOW_LEN] {
        window.map(|(row, col)| self.get(row, col))
    }

    /// Number of pieces on the board.
    pub fn piece_count(&self) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|&&cell| cell != Cell::Empty)
            .count()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
impl Board {
    /// Build a board from rows written top to bottom: `R`, `Y` or `.`.
    pub(crate) fn from_rows(rows: [&str; ROWS]) -> Self {
        let mut board = Board::new();
        for col in 0..COLS {
            for row in (0..ROWS).rev() {
                let player = match rows[row].as_bytes()[col] {
                    b'R' => Player::Red,
                    b'Y' => Player::Yellow,
                    _ => continue,
                };
                board.place(col, player).unwrap();
            }
        }
        board
    }
}

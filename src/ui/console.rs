//! Line-oriented console game: the board is printed after every move and the
//! human types a column number from 1 to 7.

use std::io::{self, BufRead, Write};

use crate::ai::MoveSelector;
use crate::error::InputError;
use crate::game::{Board, Cell, GameState, GameStatus, Player, COLS, ROWS};

use super::describe_choice;

const HUMAN_SYMBOL: char = 'X';
const AI_SYMBOL: char = 'O';

/// Text rendering with 1-based column headers; the human is `X`, the AI `O`.
pub fn render_board(board: &Board, human: Player) -> String {
    let mut out = String::new();

    for col in 0..COLS {
        out.push_str(&format!(" {}", col + 1));
    }
    out.push_str(" \n");
    out.push_str(&"-".repeat(COLS * 2 + 1));
    out.push('\n');

    for row in 0..ROWS {
        out.push('|');
        for col in 0..COLS {
            out.push(cell_symbol(board.get(row, col), human));
            out.push('|');
        }
        out.push('\n');
    }

    out.push_str(&"=".repeat(COLS * 2 + 1));
    out.push('\n');
    out
}

/// Turn a typed 1-based column into a playable 0-based one.
pub fn parse_column(input: &str, board: &Board) -> Result<usize, InputError> {
    let number: i64 = input
        .trim()
        .parse()
        .map_err(|_| InputError::NotANumber { max: COLS })?;

    if number < 1 || number > COLS as i64 {
        return Err(InputError::OutOfRange { max: COLS });
    }

    let column = number as usize - 1;
    if !board.is_column_open(column) {
        return Err(InputError::ColumnFull {
            column: column + 1,
        });
    }
    Ok(column)
}

/// Play one game on the given streams and return how it ended.
///
/// Running out of input mid-game is reported as `UnexpectedEof`.
pub fn play<R: BufRead, W: Write>(
    selector: &mut MoveSelector,
    mut input: R,
    mut out: W,
) -> io::Result<GameStatus> {
    let ai = selector.ai_player();
    let human = ai.other();
    let mut state = GameState::initial();

    writeln!(out, "Welcome to Connect Four!")?;
    writeln!(out, "Human: {HUMAN_SYMBOL}, Computer: {AI_SYMBOL}")?;
    writeln!(out, "Computer AI Depth: {}", selector.config().depth)?;

    while !state.is_over() {
        writeln!(out)?;
        write!(out, "{}", render_board(state.board(), human))?;

        let column = if state.current_player() == human {
            read_human_column(&mut input, &mut out, state.board())?
        } else {
            writeln!(out, "Computer ('{AI_SYMBOL}') thinking...")?;
            let choice = selector
                .choose_ai_move(state.board())
                .map_err(io::Error::other)?;
            writeln!(out, "{}", describe_choice(&choice))?;
            choice.column
        };

        state.apply_move(column).map_err(io::Error::other)?;
    }

    writeln!(out)?;
    write!(out, "{}", render_board(state.board(), human))?;
    let status = state.status();
    match status {
        GameStatus::Winner(player) if player == human => {
            writeln!(out, "Human ({HUMAN_SYMBOL}) WINS!")?
        }
        GameStatus::Winner(_) => writeln!(out, "Computer ({AI_SYMBOL}) WINS!")?,
        GameStatus::Draw => writeln!(out, "It's a DRAW!")?,
        GameStatus::Ongoing => {}
    }
    writeln!(out, "Game Over.")?;
    tracing::info!(?status, moves = state.move_count(), "game over");

    Ok(status)
}

/// Prompt until the human enters a playable column.
fn read_human_column<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    board: &Board,
) -> io::Result<usize> {
    loop {
        write!(out, "Your move ({HUMAN_SYMBOL}), enter column (1-{COLS}): ")?;
        out.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "input closed before the game ended",
            ));
        }

        match parse_column(&line, board) {
            Ok(column) => return Ok(column),
            Err(err) => writeln!(out, "{err}")?,
        }
    }
}

fn cell_symbol(cell: Cell, human: Player) -> char {
    match cell.owner() {
        None => '.',
        Some(player) if player == human => HUMAN_SYMBOL,
        Some(_) => AI_SYMBOL,
    }
}

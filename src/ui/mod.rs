//! Frontends: a ratatui game view and a plain line-oriented console.

mod app;
pub mod console;
mod game_view;

pub use app::App;

use crate::ai::{MoveChoice, MoveReason};

/// One-line summary of the AI's decision, with 1-indexed columns
pub fn describe_choice(choice: &MoveChoice) -> String {
    let column = choice.column + 1;
    match choice.reason {
        MoveReason::ImmediateWin => format!("AI completes four in column {column}"),
        MoveReason::Block => format!("AI blocks your win in column {column}"),
        MoveReason::Search { score, nodes } => {
            format!("AI plays column {column} (score {score}, {nodes} nodes)")
        }
        MoveReason::Fallback => format!("AI plays column {column} (fallback)"),
    }
}

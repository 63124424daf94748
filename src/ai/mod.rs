//! The AI opponent: heuristic evaluation, alpha-beta minimax search, and the
//! move selector that tries tactical shortcuts before searching.

mod heuristic;
mod minimax;
mod selector;

pub use heuristic::{score_position, score_window, Heuristic, WindowHeuristic};
pub use minimax::{Minimax, Role, SearchNode, SearchResult};
pub use selector::{find_winning_column, random_open_column, MoveChoice, MoveReason, MoveSelector};

/// Signed evaluation. The configured win score and its negation mark forced
/// wins and losses; anything smaller is a heuristic preference.
pub type Score = i32;

use std::time::Instant;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::config::EngineConfig;
use crate::error::EngineError;
use crate::game::{wins_through_cell, Board, Player};

use super::heuristic::{Heuristic, WindowHeuristic};
use super::minimax::Minimax;
use super::Score;

/// How the selector arrived at its column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveReason {
    /// The AI completes four in a row with this move.
    ImmediateWin,
    /// The opponent would complete four in a row here next turn.
    Block,
    /// Chosen by the minimax search.
    Search { score: Score, nodes: u64 },
    /// The search produced no playable column; a random open one was used.
    Fallback,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveChoice {
    pub column: usize,
    pub reason: MoveReason,
}

/// Picks the AI's column: win now, else block now, else search.
pub struct MoveSelector<H: Heuristic = WindowHeuristic> {
    config: EngineConfig,
    heuristic: H,
    ai: Player,
    rng: StdRng,
}

impl MoveSelector<WindowHeuristic> {
    /// Selector using the window heuristic with the configured weights.
    pub fn new(config: EngineConfig, ai: Player) -> Self {
        let heuristic = WindowHeuristic::new(config.weights);
        Self::with_heuristic(config, ai, heuristic)
    }
}

impl<H: Heuristic> MoveSelector<H> {
    pub fn with_heuristic(config: EngineConfig, ai: Player, heuristic: H) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        MoveSelector {
            config,
            heuristic,
            ai,
            rng,
        }
    }

    pub fn ai_player(&self) -> Player {
        self.ai
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Choose the AI's column on a board where the AI is to move.
    pub fn choose_ai_move(&mut self, board: &Board) -> Result<MoveChoice, EngineError> {
        if board.open_columns().is_empty() {
            return Err(EngineError::NoOpenColumns);
        }

        if let Some(column) = find_winning_column(board, self.ai) {
            tracing::info!(column, "AI takes immediate win");
            return Ok(MoveChoice {
                column,
                reason: MoveReason::ImmediateWin,
            });
        }

        if let Some(column) = find_winning_column(board, self.ai.other()) {
            tracing::info!(column, "AI blocks opponent's immediate win");
            return Ok(MoveChoice {
                column,
                reason: MoveReason::Block,
            });
        }

        let start = Instant::now();
        let mut search = Minimax::new(&self.config, &self.heuristic, self.ai);
        let result = search.search_root(board, &mut self.rng);
        let nodes = search.nodes();
        tracing::debug!(
            depth = self.config.depth,
            nodes,
            score = result.score,
            elapsed_ms = start.elapsed().as_millis() as u64,
            "search finished"
        );

        match result.column.filter(|&col| board.is_column_open(col)) {
            Some(column) => {
                tracing::info!(column, score = result.score, "AI chose column by search");
                Ok(MoveChoice {
                    column,
                    reason: MoveReason::Search {
                        score: result.score,
                        nodes,
                    },
                })
            }
            None => {
                tracing::warn!(
                    returned = ?result.column,
                    "search returned no open column, falling back to a random one"
                );
                let column =
                    random_open_column(board, &mut self.rng).ok_or(EngineError::NoOpenColumns)?;
                Ok(MoveChoice {
                    column,
                    reason: MoveReason::Fallback,
                })
            }
        }
    }
}

/// First open column (ascending) where `player`'s piece would complete four in a row.
pub fn find_winning_column(board: &Board, player: Player) -> Option<usize> {
    board.open_columns().into_iter().find(|&col| {
        let mut trial = *board;
        match trial.place(col, player) {
            Ok((row, col)) => wins_through_cell(&trial, player, row, col),
            Err(_) => false,
        }
    })
}

/// A uniformly random open column, or `None` on a full board.
pub fn random_open_column<R: Rng>(board: &Board, rng: &mut R) -> Option<usize> {
    let open = board.open_columns();
    if open.is_empty() {
        return None;
    }
    Some(open[rng.random_range(0..open.len())])
}

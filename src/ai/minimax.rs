//! Depth-limited minimax with alpha-beta pruning.
//!
//! The AI is always the maximizing side. Every recursive call owns a copy of
//! the board, so exploring a branch never disturbs the caller's position.

use rand::Rng;

use crate::config::EngineConfig;
use crate::game::{classify, Board, GameStatus, Player};

use super::heuristic::Heuristic;
use super::Score;

/// Which side is to move at a search node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Maximizing,
    Minimizing,
}

impl Role {
    pub fn from_maximizing(maximizing: bool) -> Self {
        if maximizing {
            Role::Maximizing
        } else {
            Role::Minimizing
        }
    }

    pub fn flip(self) -> Self {
        match self {
            Role::Maximizing => Role::Minimizing,
            Role::Minimizing => Role::Maximizing,
        }
    }
}

/// One frame of the search: a private board copy, remaining plies, and the side to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchNode {
    pub board: Board,
    pub depth: u8,
    pub role: Role,
}

/// Best column found at a node (none at leaves) and its value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchResult {
    pub column: Option<usize>,
    pub score: Score,
}

/// Minimax searcher for a fixed maximizing player.
pub struct Minimax<'a, H: Heuristic> {
    config: &'a EngineConfig,
    heuristic: &'a H,
    maximizer: Player,
    nodes: u64,
}

impl<'a, H: Heuristic> Minimax<'a, H> {
    pub fn new(config: &'a EngineConfig, heuristic: &'a H, maximizer: Player) -> Self {
        Minimax {
            config,
            heuristic,
            maximizer,
            nodes: 0,
        }
    }

    /// Nodes visited since this searcher was created.
    pub fn nodes(&self) -> u64 {
        self.nodes
    }

    /// Search `board` at the configured depth with the maximizer to move and a
    /// window wide enough to hold both sentinels.
    pub fn search_root<R: Rng>(&mut self, board: &Board, rng: &mut R) -> SearchResult {
        self.search(
            board,
            self.config.depth,
            self.config.lose_score().saturating_sub(1),
            self.config.win_score.saturating_add(1),
            true,
            rng,
        )
    }

    /// Alpha-beta search from `board`.
    ///
    /// Children are tried in ascending column order. The best column starts as
    /// a random open column and is only replaced by a strictly better child, so
    /// the first column reaching the best value wins ties.
    pub fn search<R: Rng>(
        &mut self,
        board: &Board,
        depth: u8,
        alpha: Score,
        beta: Score,
        maximizing: bool,
        rng: &mut R,
    ) -> SearchResult {
        let node = SearchNode {
            board: *board,
            depth,
            role: Role::from_maximizing(maximizing),
        };
        self.search_node(node, alpha, beta, rng)
    }

    fn search_node<R: Rng>(
        &mut self,
        node: SearchNode,
        mut alpha: Score,
        mut beta: Score,
        rng: &mut R,
    ) -> SearchResult {
        self.nodes += 1;

        let status = classify(&node.board);
        if node.depth == 0 || status.is_terminal() {
            return SearchResult {
                column: None,
                score: self.leaf_score(&node.board, status),
            };
        }

        let open = node.board.open_columns();
        if open.is_empty() {
            // A non-terminal board always has an open column
            return SearchResult {
                column: None,
                score: 0,
            };
        }
        let mut best_column = open[rng.random_range(0..open.len())];

        let mover = match node.role {
            Role::Maximizing => self.maximizer,
            Role::Minimizing => self.maximizer.other(),
        };
        let mut value = match node.role {
            Role::Maximizing => Score::MIN,
            Role::Minimizing => Score::MAX,
        };

        for &col in &open {
            let mut board = node.board;
            if board.place(col, mover).is_err() {
                continue;
            }
            let child = SearchNode {
                board,
                depth: node.depth - 1,
                role: node.role.flip(),
            };
            let score = self.search_node(child, alpha, beta, rng).score;

            match node.role {
                Role::Maximizing => {
                    if score > value {
                        value = score;
                        best_column = col;
                    }
                    alpha = alpha.max(value);
                }
                Role::Minimizing => {
                    if score < value {
                        value = score;
                        best_column = col;
                    }
                    beta = beta.min(value);
                }
            }

            if alpha >= beta {
                break;
            }
        }

        SearchResult {
            column: Some(best_column),
            score: value,
        }
    }

    fn leaf_score(&self, board: &Board, status: GameStatus) -> Score {
        match status {
            GameStatus::Winner(player) if player == self.maximizer => self.config.win_score,
            GameStatus::Winner(_) => self.config.lose_score(),
            GameStatus::Draw => 0,
            GameStatus::Ongoing => self.heuristic.evaluate(board, self.maximizer),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ai::WindowHeuristic;
    use crate::game::COLS;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    /// Plain minimax without pruning, with the same ordering and tie-break.
    fn full_minimax(
        board: &Board,
        depth: u8,
        maximizing: bool,
        config: &EngineConfig,
        heuristic: &WindowHeuristic,
        ai: Player,
        nodes: &mut u64,
    ) -> SearchResult {
        *nodes += 1;
        let status = classify(board);
        if depth == 0 || status.is_terminal() {
            let score = match status {
                GameStatus::Winner(p) if p == ai => config.win_score,
                GameStatus::Winner(_) => config.lose_score(),
                GameStatus::Draw => 0,
                GameStatus::Ongoing => heuristic.evaluate(board, ai),
            };
            return SearchResult { column: None, score };
        }

        let mover = if maximizing { ai } else { ai.other() };
        let mut best: Option<(usize, Score)> = None;
        for col in board.open_columns() {
            let mut child = *board;
            child.place(col, mover).unwrap();
            let score =
                full_minimax(&child, depth - 1, !maximizing, config, heuristic, ai, nodes).score;
            let better = match best {
                None => true,
                Some((_, v)) if maximizing => score > v,
                Some((_, v)) => score < v,
            };
            if better {
                best = Some((col, score));
            }
        }
        let (col, score) = best.unwrap();
        SearchResult {
            column: Some(col),
            score,
        }
    }

    fn config_with_depth(depth: u8) -> EngineConfig {
        EngineConfig {
            depth,
            ..EngineConfig::default()
        }
    }

    fn positions() -> Vec<Board> {
        vec![
            Board::new(),
            Board::from_rows([
                ".......",
                ".......",
                ".......",
                ".......",
                "...Y...",
                "..RRY..",
            ]),
            Board::from_rows([
                ".......",
                ".......",
                "...R...",
                "...Y...",
                "..YRR..",
                ".RYYRY.",
            ]),
            Board::from_rows([
                ".......",
                "..Y....",
                "..R.R..",
                "..YYR..",
                "R.RYY..",
                "YRRYRY.",
            ]),
        ]
    }

    // --- Base cases ---

    #[test]
    fn depth_zero_returns_heuristic() {
        let config = EngineConfig::default();
        let h = WindowHeuristic::new(config.weights);
        let board = positions()[1];
        let mut search = Minimax::new(&config, &h, Player::Yellow);
        let mut rng = StdRng::seed_from_u64(1);

        let result = search.search(&board, 0, Score::MIN, Score::MAX, true, &mut rng);
        assert_eq!(result.column, None);
        assert_eq!(result.score, h.evaluate(&board, Player::Yellow));
        assert_eq!(search.nodes(), 1);
    }

    #[test]
    fn terminal_positions_return_sentinels() {
        let config = EngineConfig::default();
        let h = WindowHeuristic::new(config.weights);
        let mut rng = StdRng::seed_from_u64(1);

        let mut yellow_line = Board::new();
        for _ in 0..4 {
            yellow_line.place(6, Player::Yellow).unwrap();
        }

        let mut as_yellow = Minimax::new(&config, &h, Player::Yellow);
        let won = as_yellow.search(&yellow_line, 5, Score::MIN, Score::MAX, true, &mut rng);
        assert_eq!(won, SearchResult { column: None, score: config.win_score });

        let mut as_red = Minimax::new(&config, &h, Player::Red);
        let lost = as_red.search(&yellow_line, 5, Score::MIN, Score::MAX, true, &mut rng);
        assert_eq!(lost, SearchResult { column: None, score: config.lose_score() });
    }

    #[test]
    fn full_drawn_board_scores_zero() {
        let config = EngineConfig::default();
        let h = WindowHeuristic::new(config.weights);
        let board = Board::from_rows([
            "RYRYRYR",
            "RYRYRYR",
            "YRYRYRY",
            "YRYRYRY",
            "RYRYRYR",
            "RYRYRYR",
        ]);
        let mut search = Minimax::new(&config, &h, Player::Red);
        let mut rng = StdRng::seed_from_u64(1);
        let result = search.search_root(&board, &mut rng);
        assert_eq!(result, SearchResult { column: None, score: 0 });
    }

    // --- Pruning ---

    #[test]
    fn pruning_matches_full_minimax() {
        let h = WindowHeuristic::default();
        for depth in 1..=4 {
            let config = config_with_depth(depth);
            for board in positions() {
                for ai in [Player::Red, Player::Yellow] {
                    let mut rng = StdRng::seed_from_u64(7);
                    let mut search = Minimax::new(&config, &h, ai);
                    let pruned = search.search_root(&board, &mut rng);

                    let mut nodes = 0;
                    let full = full_minimax(&board, depth, true, &config, &h, ai, &mut nodes);

                    assert_eq!(
                        pruned, full,
                        "depth {depth}, ai {ai:?}, board {board:?}"
                    );
                    assert!(search.nodes() <= nodes);
                }
            }
        }
    }

    #[test]
    fn pruning_visits_fewer_nodes() {
        let config = config_with_depth(5);
        let h = WindowHeuristic::default();
        let board = positions()[2];
        let mut rng = StdRng::seed_from_u64(3);

        let mut search = Minimax::new(&config, &h, Player::Red);
        search.search_root(&board, &mut rng);

        let mut nodes = 0;
        full_minimax(&board, 5, true, &config, &h, Player::Red, &mut nodes);
        assert!(
            search.nodes() < nodes,
            "alpha-beta visited {} nodes, full minimax {}",
            search.nodes(),
            nodes
        );
    }

    // --- Move quality ---

    #[test]
    fn finds_immediate_win() {
        let config = config_with_depth(3);
        let h = WindowHeuristic::default();
        let board = Board::from_rows([
            ".......",
            ".......",
            ".......",
            "......Y",
            "R.....Y",
            "RR....Y",
        ]);
        let mut search = Minimax::new(&config, &h, Player::Yellow);
        let mut rng = StdRng::seed_from_u64(11);
        let result = search.search_root(&board, &mut rng);
        assert_eq!(result.column, Some(6));
        assert_eq!(result.score, config.win_score);
    }

    #[test]
    fn avoids_immediate_loss() {
        // Red threatens the bottom of column 3; every other reply loses at once
        let board = Board::from_rows([
            ".......",
            ".......",
            ".......",
            ".......",
            "YY.....",
            "RRR...Y",
        ]);
        let h = WindowHeuristic::default();
        for depth in 2..=5 {
            let config = config_with_depth(depth);
            let mut search = Minimax::new(&config, &h, Player::Yellow);
            let mut rng = StdRng::seed_from_u64(5);
            let result = search.search_root(&board, &mut rng);
            assert_eq!(result.column, Some(3), "depth {depth}");
            assert!(result.score > config.lose_score());

            let mut replay = board;
            replay.place(3, Player::Yellow).unwrap();
            assert_ne!(classify(&replay), GameStatus::Winner(Player::Red));
        }
    }

    #[test]
    fn search_leaves_caller_board_untouched() {
        let config = config_with_depth(4);
        let h = WindowHeuristic::default();
        let board = positions()[3];
        let before = board;
        let mut search = Minimax::new(&config, &h, Player::Red);
        let mut rng = StdRng::seed_from_u64(9);
        search.search_root(&board, &mut rng);
        assert_eq!(board, before);
    }

    #[test]
    fn same_seed_same_result() {
        let config = config_with_depth(4);
        let h = WindowHeuristic::default();
        let board = positions()[2];
        let run = |seed| {
            let mut search = Minimax::new(&config, &h, Player::Yellow);
            let mut rng = StdRng::seed_from_u64(seed);
            search.search_root(&board, &mut rng)
        };
        assert_eq!(run(42), run(42));
    }

    #[test]
    fn result_column_is_open() {
        // Only column 6 has room left
        let mut board = Board::from_rows([
            "RYRYRY.",
            "RYRYRY.",
            "YRYRYR.",
            "YRYRYR.",
            "RYRYRY.",
            "RYRYRY.",
        ]);
        board.place(6, Player::Red).unwrap();
        let config = config_with_depth(6);
        let h = WindowHeuristic::default();
        let mut search = Minimax::new(&config, &h, Player::Yellow);
        let mut rng = StdRng::seed_from_u64(2);
        let result = search.search_root(&board, &mut rng);
        assert_eq!(result.column, Some(COLS - 1));
        assert!(board.is_column_open(COLS - 1));
    }

    #[test]
    fn role_flip() {
        assert_eq!(Role::Maximizing.flip(), Role::Minimizing);
        assert_eq!(Role::Minimizing.flip(), Role::Maximizing);
        assert_eq!(Role::from_maximizing(true), Role::Maximizing);
        assert_eq!(Role::from_maximizing(false), Role::Minimizing);
    }
}

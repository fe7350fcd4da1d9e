//! Classical Chess Engine
//!
//! Fixed-depth minimax search, with or without alpha-beta pruning, over a
//! material plus centralization evaluation. Scores are in centipawns from
//! White's perspective.

mod config;
mod eval;
mod search;
mod select;

use std::path::Path;
use std::time::Instant;

use anyhow::Context;
use chess_core::{Color, Engine, Position, Rules, SearchReport};
use tracing::info;

pub use config::{ConfigError, SearchConfig, MAX_DEPTH};
pub use eval::{evaluate, piece_value, positional_bonus, POSITIONAL_TABLE};
pub use search::{
    alpha_beta, alpha_beta_search, minimax, SearchOutcome, DRAW_SCORE, INFINITY, MATE_SCORE,
};
pub use select::{best_move, best_move_minimax, select, Algorithm, RootResult};

/// Classical chess engine: fixed-depth tree search with static evaluation.
///
/// Holds no state between searches apart from its configuration and the
/// node count of the last search.
#[derive(Debug, Clone, Default)]
pub struct ClassicalEngine {
    config: SearchConfig,
    /// Node counter of the last search, for statistics
    nodes: u64,
}

impl ClassicalEngine {
    pub fn new() -> Self {
        Self::with_config(SearchConfig::default())
    }

    pub fn with_config(config: SearchConfig) -> Self {
        Self { config, nodes: 0 }
    }

    pub fn from_config_file(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let config = SearchConfig::load(path)
            .with_context(|| format!("loading engine config from {}", path.display()))?;
        Ok(Self::with_config(config))
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    pub fn last_nodes(&self) -> u64 {
        self.nodes
    }

    /// Searches to the configured depth for the side to move.
    pub fn choose_move(&mut self, pos: &mut Position) -> SearchReport {
        let depth = self.config.depth;
        self.search(pos, depth)
    }
}

impl Engine for ClassicalEngine {
    fn search(&mut self, pos: &mut Position, depth: u8) -> SearchReport {
        let start = Instant::now();
        let maximizing = pos.side_to_move() == Color::White;

        let result = select(pos, depth, maximizing, self.config.algorithm);
        self.nodes = result.nodes;
        let elapsed = start.elapsed();

        info!(
            depth,
            algorithm = ?self.config.algorithm,
            best_move = ?result.best_move,
            score = result.score,
            nodes = result.nodes,
            elapsed_ms = elapsed.as_millis() as u64,
            "search finished"
        );

        SearchReport {
            best_move: result.best_move,
            score: result.score,
            depth,
            nodes: result.nodes,
            elapsed,
        }
    }

    fn name(&self) -> &str {
        match self.config.algorithm {
            Algorithm::Minimax => "Classical Minimax v1.0",
            Algorithm::AlphaBeta => "Classical Alpha-Beta v1.0",
        }
    }

    fn new_game(&mut self) {
        self.nodes = 0;
    }
}

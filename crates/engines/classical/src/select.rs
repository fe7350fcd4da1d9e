//! Root move selection
//!
//! Searches each root move one ply below the root and keeps the first move
//! that achieves the best score. Later moves with an equal score never
//! replace it, so ties resolve to the earliest move in the order the rules
//! collaborator enumerates them.

use serde::{Deserialize, Serialize};
use tracing::debug;

use chess_core::Rules;

use crate::search::{alpha_beta, alpha_beta_search, minimax, SearchOutcome, INFINITY};

/// Chosen move, its score (White's perspective) and the nodes searched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RootResult<M> {
    /// None only when the root has no legal moves
    pub best_move: Option<M>,
    pub score: i32,
    pub nodes: u64,
}

/// Which tree search drives root selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Algorithm {
    Minimax,
    #[default]
    AlphaBeta,
}

/// Picks a move with alpha-beta search.
///
/// `depth` counts the root ply; each root move is searched at `depth - 1`.
/// A depth of 0 is treated as 1 since a move still has to be chosen.
pub fn best_move<R: Rules>(pos: &mut R, depth: u8, maximizing: bool) -> RootResult<R::Move> {
    let moves = pos.legal_moves();
    if moves.is_empty() {
        return terminal_root(pos, depth, maximizing);
    }

    let child_depth = depth.saturating_sub(1);
    let mut best_move = None;
    let mut best_value = if maximizing { -INFINITY } else { INFINITY };
    let mut alpha = -INFINITY;
    let mut beta = INFINITY;
    let mut nodes = 0u64;

    for mv in moves {
        let outcome = {
            let mut child = pos.play(mv);
            alpha_beta(&mut *child, child_depth, alpha, beta, !maximizing)
        };
        nodes += outcome.nodes;
        debug!(?mv, score = outcome.score, nodes = outcome.nodes, "root move searched");

        if improves(outcome.score, best_value, maximizing) {
            best_value = outcome.score;
            best_move = Some(mv);
            if maximizing {
                alpha = alpha.max(best_value);
            } else {
                beta = beta.min(best_value);
            }
            if alpha >= beta {
                break;
            }
        }
    }

    debug!(?best_move, score = best_value, nodes, depth, "alpha-beta selection finished");
    RootResult {
        best_move,
        score: best_value,
        nodes,
    }
}

/// Picks a move with unpruned minimax. Same tie-break as [`best_move`];
/// useful to cross-check it.
pub fn best_move_minimax<R: Rules>(pos: &mut R, depth: u8, maximizing: bool) -> RootResult<R::Move> {
    let moves = pos.legal_moves();
    if moves.is_empty() {
        return terminal_root(pos, depth, maximizing);
    }

    let child_depth = depth.saturating_sub(1);
    let mut best_move = None;
    let mut best_value = if maximizing { -INFINITY } else { INFINITY };
    let mut nodes = 0u64;

    for mv in moves {
        let outcome = {
            let mut child = pos.play(mv);
            minimax(&mut *child, child_depth, !maximizing)
        };
        nodes += outcome.nodes;
        debug!(?mv, score = outcome.score, nodes = outcome.nodes, "root move searched");

        if improves(outcome.score, best_value, maximizing) {
            best_value = outcome.score;
            best_move = Some(mv);
        }
    }

    debug!(?best_move, score = best_value, nodes, depth, "minimax selection finished");
    RootResult {
        best_move,
        score: best_value,
        nodes,
    }
}

/// Dispatches to the root driver for `algorithm`.
pub fn select<R: Rules>(
    pos: &mut R,
    depth: u8,
    maximizing: bool,
    algorithm: Algorithm,
) -> RootResult<R::Move> {
    match algorithm {
        Algorithm::Minimax => best_move_minimax(pos, depth, maximizing),
        Algorithm::AlphaBeta => best_move(pos, depth, maximizing),
    }
}

#[inline]
fn improves(score: i32, best: i32, maximizing: bool) -> bool {
    if maximizing {
        score > best
    } else {
        score < best
    }
}

/// A root without legal moves is mate or stalemate: report its own value.
fn terminal_root<R: Rules>(pos: &mut R, depth: u8, maximizing: bool) -> RootResult<R::Move> {
    let SearchOutcome { score, nodes } = alpha_beta_search(pos, depth, maximizing);
    debug!(score, "root has no legal moves");
    RootResult {
        best_move: None,
        score,
        nodes,
    }
}

#[cfg(test)]
#[path = "select_tests.rs"]
mod select_tests;

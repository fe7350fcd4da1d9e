//! Depth-limited minimax search, plain and with alpha-beta pruning
//!
//! Scores are always from White's perspective: White maximizes, Black
//! minimizes. Both variants share the same terminal handling and return the
//! same score for the same input; pruning only reduces the node count.

use chess_core::{Color, Rules};

use crate::eval::evaluate;

/// Score of a checkmated position, signed against the mated side.
/// Larger than any material evaluation can reach.
pub const MATE_SCORE: i32 = 100_000;

/// Score of stalemate and insufficient material.
pub const DRAW_SCORE: i32 = 0;

/// Open bound for alpha-beta windows and running bests. Above any mate score.
pub const INFINITY: i32 = 1_000_000;

/// Score and visited-node count of one search call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchOutcome {
    pub score: i32,
    pub nodes: u64,
}

impl SearchOutcome {
    fn leaf(score: i32) -> Self {
        Self { score, nodes: 1 }
    }
}

/// Value of a node where recursion stops, or `None` if it must be expanded.
///
/// Checked in order: checkmate, then stalemate / insufficient material, then
/// exhausted depth.
fn terminal_score<R: Rules>(pos: &R, depth: u8) -> Option<i32> {
    if pos.is_checkmate() {
        return Some(match pos.side_to_move() {
            Color::White => -MATE_SCORE,
            Color::Black => MATE_SCORE,
        });
    }
    if pos.is_stalemate() || pos.is_insufficient_material() {
        return Some(DRAW_SCORE);
    }
    if depth == 0 {
        return Some(evaluate(pos));
    }
    None
}

/// Plain minimax: visits every node down to `depth`.
pub fn minimax<R: Rules>(pos: &mut R, depth: u8, maximizing: bool) -> SearchOutcome {
    if let Some(score) = terminal_score(pos, depth) {
        return SearchOutcome::leaf(score);
    }

    let mut best = if maximizing { -INFINITY } else { INFINITY };
    let mut nodes = 1u64;

    for mv in pos.legal_moves() {
        let child = {
            let mut child = pos.play(mv);
            minimax(&mut *child, depth - 1, !maximizing)
        };
        nodes += child.nodes;
        best = if maximizing {
            best.max(child.score)
        } else {
            best.min(child.score)
        };
    }

    SearchOutcome { score: best, nodes }
}

/// Minimax with alpha-beta pruning.
///
/// `alpha` is the score White is already guaranteed elsewhere in the tree,
/// `beta` the score Black is guaranteed. Once they cross, the remaining
/// siblings cannot change the result and are skipped; only visited subtrees
/// count towards `nodes`.
///
/// Fail-soft: a cutoff returns the best score seen so far, which may lie
/// outside `[alpha, beta]`. It is a bound on the correct side of the window,
/// and with the full window the result equals [`minimax`].
pub fn alpha_beta<R: Rules>(
    pos: &mut R,
    depth: u8,
    mut alpha: i32,
    mut beta: i32,
    maximizing: bool,
) -> SearchOutcome {
    if let Some(score) = terminal_score(pos, depth) {
        return SearchOutcome::leaf(score);
    }

    let mut nodes = 1u64;

    if maximizing {
        let mut best = -INFINITY;
        for mv in pos.legal_moves() {
            let mut child = pos.play(mv);
            let outcome = alpha_beta(&mut *child, depth - 1, alpha, beta, false);
            nodes += outcome.nodes;

            best = best.max(outcome.score);
            alpha = alpha.max(best);
            if alpha >= beta {
                // Beta cutoff; the guard undoes the move on return
                return SearchOutcome { score: best, nodes };
            }
        }
        SearchOutcome { score: best, nodes }
    } else {
        let mut best = INFINITY;
        for mv in pos.legal_moves() {
            let mut child = pos.play(mv);
            let outcome = alpha_beta(&mut *child, depth - 1, alpha, beta, true);
            nodes += outcome.nodes;

            best = best.min(outcome.score);
            beta = beta.min(best);
            if beta <= alpha {
                // Alpha cutoff
                return SearchOutcome { score: best, nodes };
            }
        }
        SearchOutcome { score: best, nodes }
    }
}

/// Alpha-beta search with a fully open window.
pub fn alpha_beta_search<R: Rules>(pos: &mut R, depth: u8, maximizing: bool) -> SearchOutcome {
    alpha_beta(pos, depth, -INFINITY, INFINITY, maximizing)
}

#[cfg(test)]
#[path = "search_tests.rs"]
mod search_tests;

//! Rules collaborator and shared vocabulary for the search engine.
//!
//! Board representation and move generation come from `cozy-chess`; this
//! crate adapts them to the [`Rules`] trait the engine searches through.

pub mod board;
pub mod error;
pub mod perft;
pub mod rules;
pub mod types;

pub use board::*;
pub use error::RulesError;
pub use perft::perft;
pub use rules::{MoveGuard, Rules};
pub use types::*;

pub use cozy_chess::Move;

use std::time::Duration;

// =============================================================================
// Engine trait: implemented by every engine built on this crate
// =============================================================================

/// Result of a complete engine search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchReport {
    /// The best move found (None if no legal moves)
    pub best_move: Option<Move>,
    /// Evaluation in centipawns from White's perspective
    pub score: i32,
    /// Search depth in plies
    pub depth: u8,
    /// Number of nodes searched
    pub nodes: u64,
    /// Wall-clock time spent searching
    pub elapsed: Duration,
}

/// Trait that chess engines implement.
pub trait Engine {
    /// Search the position to `depth` plies and pick a move for the side to
    /// move. The position is left exactly as it was passed in.
    fn search(&mut self, pos: &mut Position, depth: u8) -> SearchReport;

    /// Returns the engine's name for identification
    fn name(&self) -> &str;

    fn author(&self) -> &str {
        "ML-chess"
    }

    /// Reset internal state for a new game
    fn new_game(&mut self) {}
}

#![allow(dead_code)]

use chess_core::{Color, Move, Piece, Position, Rules};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

pub fn pos(fen: &str) -> Position {
    Position::from_fen(fen).expect("test FEN should parse")
}

/// Positions reached by seeded random playouts from the start position.
///
/// Playouts stop early at terminal positions, so some results are mates,
/// stalemates or bare-king draws.
pub fn random_positions(seed: u64, count: usize, max_plies: usize) -> Vec<Position> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count)
        .map(|_| {
            let mut pos = Position::startpos();
            let plies = rng.gen_range(0..=max_plies);
            for _ in 0..plies {
                let moves = pos.legal_moves();
                let Some(&mv) = moves.choose(&mut rng) else {
                    break;
                };
                pos.apply(mv);
            }
            // Search from a clean stack
            Position::from_board(pos.board().clone())
        })
        .collect()
}

/// Wraps a position and records how the search drives it.
#[derive(Debug)]
pub struct Recording {
    pub inner: Position,
    pub applied: u64,
    pub undone: u64,
    pub depth: usize,
    pub max_depth: usize,
}

impl Recording {
    pub fn new(inner: Position) -> Self {
        Self {
            inner,
            applied: 0,
            undone: 0,
            depth: 0,
            max_depth: 0,
        }
    }
}

impl Rules for Recording {
    type Move = Move;

    fn legal_moves_into(&self, moves: &mut Vec<Move>) {
        self.inner.legal_moves_into(moves)
    }

    fn apply(&mut self, mv: Move) {
        self.inner.apply(mv);
        self.applied += 1;
        self.depth += 1;
        self.max_depth = self.max_depth.max(self.depth);
    }

    fn undo(&mut self) -> Option<Move> {
        let mv = self.inner.undo();
        if mv.is_some() {
            self.undone += 1;
            self.depth -= 1;
        }
        mv
    }

    fn is_checkmate(&self) -> bool {
        self.inner.is_checkmate()
    }

    fn is_stalemate(&self) -> bool {
        self.inner.is_stalemate()
    }

    fn is_insufficient_material(&self) -> bool {
        self.inner.is_insufficient_material()
    }

    fn side_to_move(&self) -> Color {
        self.inner.side_to_move()
    }

    fn piece_at(&self, sq: u8) -> Option<Piece> {
        self.inner.piece_at(sq)
    }
}

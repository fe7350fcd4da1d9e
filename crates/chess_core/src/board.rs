use std::fmt;
use std::str::FromStr;

use cozy_chess::{Board, File, Move, Piece as CozyPiece, Square};

use crate::error::RulesError;
use crate::rules::Rules;
use crate::types::*;

/// A chess position with an undo stack.
///
/// Wraps a `cozy_chess::Board`. Every applied move pushes the previous board,
/// so [`Rules::undo`] restores the exact prior state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Position {
    board: Board,
    history: Vec<(Board, Move)>,
}

impl Position {
    pub fn startpos() -> Self {
        Self::from_board(Board::default())
    }

    pub fn from_fen(fen: &str) -> Result<Self, RulesError> {
        let board = Board::from_fen(fen.trim(), false).map_err(|e| RulesError::InvalidFen {
            fen: fen.to_string(),
            reason: format!("{e:?}"),
        })?;
        Ok(Self::from_board(board))
    }

    pub fn from_board(board: Board) -> Self {
        Self {
            board,
            history: Vec::new(),
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn fen(&self) -> String {
        self.board.to_string()
    }

    /// Number of applied moves that can still be undone.
    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    pub fn in_check(&self) -> bool {
        !self.board.checkers().is_empty()
    }

    /// Applies `mv` if it is legal; otherwise leaves the position untouched.
    pub fn try_apply(&mut self, mv: Move) -> Result<(), RulesError> {
        if !self.board.is_legal(mv) {
            return Err(RulesError::IllegalMove { mv: mv.to_string() });
        }
        self.apply(mv);
        Ok(())
    }

    /// Parses a UCI move (`e2e4`, `e7e8q`, `e1g1`) against this position.
    ///
    /// Standard castling notation is translated to the king-takes-rook form
    /// the underlying board uses.
    pub fn parse_move(&self, text: &str) -> Result<Move, RulesError> {
        let mv: Move = text.trim().parse().map_err(|_| RulesError::InvalidMove {
            text: text.to_string(),
        })?;
        if self.board.is_legal(mv) {
            return Ok(mv);
        }
        if let Some(castle) = self.castle_as_king_takes_rook(mv) {
            if self.board.is_legal(castle) {
                return Ok(castle);
            }
        }
        Err(RulesError::IllegalMove { mv: mv.to_string() })
    }

    fn castle_as_king_takes_rook(&self, mv: Move) -> Option<Move> {
        let us = self.board.side_to_move();
        if self.board.king(us) != mv.from || mv.from.file() != File::E || mv.from.rank() != mv.to.rank() {
            return None;
        }
        let rook_file = match mv.to.file() {
            File::G => File::H,
            File::C => File::A,
            _ => return None,
        };
        Some(Move {
            from: mv.from,
            to: Square::new(rook_file, mv.from.rank()),
            promotion: None,
        })
    }

    fn has_legal_moves(&self) -> bool {
        self.board.generate_moves(|moves| !moves.is_empty())
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::startpos()
    }
}

impl FromStr for Position {
    type Err = RulesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_fen(s)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.board)
    }
}

impl Rules for Position {
    type Move = Move;

    /// Moves come out grouped by moving piece in cozy-chess generation order.
    fn legal_moves_into(&self, moves: &mut Vec<Move>) {
        self.board.generate_moves(|piece_moves| {
            moves.extend(piece_moves);
            false
        });
    }

    fn apply(&mut self, mv: Move) {
        let prev = self.board.clone();
        // Panics on an illegal move
        self.board.play(mv);
        self.history.push((prev, mv));
    }

    fn undo(&mut self) -> Option<Move> {
        let (prev, mv) = self.history.pop()?;
        self.board = prev;
        Some(mv)
    }

    fn is_checkmate(&self) -> bool {
        self.in_check() && !self.has_legal_moves()
    }

    fn is_stalemate(&self) -> bool {
        !self.in_check() && !self.has_legal_moves()
    }

    /// Neither side can mate: no pawns, rooks or queens, and at most one minor
    /// piece in total or only bishops that all share one square color.
    fn is_insufficient_material(&self) -> bool {
        let b = &self.board;
        let heavy = b.pieces(CozyPiece::Pawn) | b.pieces(CozyPiece::Rook) | b.pieces(CozyPiece::Queen);
        if !heavy.is_empty() {
            return false;
        }

        let knights = b.pieces(CozyPiece::Knight);
        let bishops = b.pieces(CozyPiece::Bishop);
        if knights.len() + bishops.len() <= 1 {
            return true;
        }
        if !knights.is_empty() {
            return false;
        }

        let light = bishops
            .into_iter()
            .filter(|&s| is_light_square(s as u8))
            .count();
        light == 0 || light == bishops.len() as usize
    }

    fn side_to_move(&self) -> Color {
        self.board.side_to_move().into()
    }

    fn piece_at(&self, sq: u8) -> Option<Piece> {
        if sq >= 64 {
            return None;
        }
        let square = Square::index(sq as usize);
        let kind = self.board.piece_on(square)?;
        let color = self.board.color_on(square)?;
        Some(Piece::new(color.into(), kind.into()))
    }
}

#[cfg(test)]
#[path = "board_tests.rs"]
mod board_tests;

//! Material plus positional evaluation

use chess_core::{file_of, rank_of, Color, PieceKind, Rules};

/// Centralization bonus in centipawns, indexed `[rank][file]`.
///
/// Symmetric about both center lines, so the same table serves White and
/// Black without mirroring.
pub const POSITIONAL_TABLE: [[i32; 8]; 8] = [
    [-50, -40, -30, -30, -30, -30, -40, -50],
    [-40, -20, 0, 5, 5, 0, -20, -40],
    [-30, 0, 10, 15, 15, 10, 0, -30],
    [-30, 5, 15, 20, 20, 15, 5, -30],
    [-30, 5, 15, 20, 20, 15, 5, -30],
    [-30, 0, 10, 15, 15, 10, 0, -30],
    [-40, -20, 0, 5, 5, 0, -20, -40],
    [-50, -40, -30, -30, -30, -30, -40, -50],
];

/// Evaluates the position from White's perspective.
///
/// Returns a score in centipawns:
/// - Positive = good for White
/// - Negative = good for Black
/// - 0 = equal position
///
/// Each non-king piece contributes its material value plus the table bonus
/// of its square. King safety is not modeled, so kings contribute nothing.
pub fn evaluate<R: Rules>(pos: &R) -> i32 {
    let mut score = 0i32;

    for sq in 0..64u8 {
        if let Some(pc) = pos.piece_at(sq) {
            if pc.kind == PieceKind::King {
                continue;
            }
            let v = piece_value(pc.kind) + positional_bonus(sq);
            score += if pc.color == Color::White { v } else { -v };
        }
    }

    score
}

/// Returns the material value of a piece in centipawns.
#[inline]
pub fn piece_value(kind: PieceKind) -> i32 {
    match kind {
        PieceKind::Pawn => 100,
        PieceKind::Knight => 310,
        PieceKind::Bishop => 320,
        PieceKind::Rook => 500,
        PieceKind::Queen => 900,
        PieceKind::King => 0,
    }
}

#[inline]
pub fn positional_bonus(sq: u8) -> i32 {
    POSITIONAL_TABLE[rank_of(sq) as usize][file_of(sq) as usize]
}

#[cfg(test)]
#[path = "eval_tests.rs"]
mod eval_tests;

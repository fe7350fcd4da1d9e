//! The rules collaborator seen by search code.
//!
//! Search never touches a concrete board. It enumerates, applies and undoes
//! moves through [`Rules`], and it applies moves only through [`Rules::play`]
//! so that every applied move is undone when the enclosing scope ends, whether
//! the scope finishes normally, returns early on a cutoff, or unwinds.

use std::fmt::Debug;
use std::ops::{Deref, DerefMut};

use crate::types::{Color, Piece};

/// Game rules and mutable position state, used as a strict apply/undo stack.
///
/// Implementations decide the order of [`Rules::legal_moves_into`]. Root
/// tie-breaks in the engine follow that order, so it is part of the contract
/// of each implementation.
pub trait Rules {
    type Move: Copy + Eq + Debug;

    /// Appends the legal moves of the current position to `moves`.
    fn legal_moves_into(&self, moves: &mut Vec<Self::Move>);

    /// Applies a legal move in place. Applying a move that is not legal is a
    /// precondition violation and may panic.
    fn apply(&mut self, mv: Self::Move);

    /// Reverts the most recently applied move and returns it, or `None` when
    /// nothing has been applied.
    fn undo(&mut self) -> Option<Self::Move>;

    fn is_checkmate(&self) -> bool;
    fn is_stalemate(&self) -> bool;
    fn is_insufficient_material(&self) -> bool;
    fn side_to_move(&self) -> Color;

    /// Piece on square `sq` (0..64, a1 = 0).
    fn piece_at(&self, sq: u8) -> Option<Piece>;

    fn legal_moves(&self) -> Vec<Self::Move> {
        let mut moves = Vec::with_capacity(64);
        self.legal_moves_into(&mut moves);
        moves
    }

    /// Applies `mv` and returns a guard that undoes it on drop.
    fn play(&mut self, mv: Self::Move) -> MoveGuard<'_, Self>
    where
        Self: Sized,
    {
        self.apply(mv);
        MoveGuard { pos: self }
    }
}

/// Scoped ownership of one applied move.
///
/// Derefs to the position so the child subtree can be searched through it.
/// Dropping the guard undoes the move.
#[must_use = "dropping the guard immediately undoes the move"]
pub struct MoveGuard<'a, R: Rules> {
    pos: &'a mut R,
}

impl<R: Rules> Deref for MoveGuard<'_, R> {
    type Target = R;

    fn deref(&self) -> &R {
        self.pos
    }
}

impl<R: Rules> DerefMut for MoveGuard<'_, R> {
    fn deref_mut(&mut self) -> &mut R {
        self.pos
    }
}

impl<R: Rules> Drop for MoveGuard<'_, R> {
    fn drop(&mut self) {
        let undone = self.pos.undo();
        debug_assert!(undone.is_some(), "move guard dropped with empty history");
    }
}

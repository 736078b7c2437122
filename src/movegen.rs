use crate::board::{is_opponent_piece, is_own_piece, Board, Piece, PieceKind, Square};
use std::collections::BTreeSet;

/// Movement rules for the capture-the-king variant.
///
/// There is no notion of check: a move is judged only by the moving piece's
/// geometry, blockers on the path and the occupant of the destination.
#[derive(Debug, Clone, Copy, Default)]
pub struct MoveEvaluator;

impl MoveEvaluator {
    pub fn new() -> Self {
        Self
    }

    pub fn is_legal_move(&self, piece: Piece, from: Square, to: Square, board: &Board) -> bool {
        if from == to {
            return false;
        }

        let dx = to.col() as i8 - from.col() as i8;
        let dy = to.row() as i8 - from.row() as i8;
        let target = board.piece_at(to);

        // No self-capture
        if is_own_piece(target, piece.color) {
            return false;
        }

        match piece.kind {
            PieceKind::Pawn => self.is_pawn_move(piece, from, to, dx, dy, board),
            PieceKind::Rook => is_straight(dx, dy) && self.is_clear_path(board, from, to),
            PieceKind::Bishop => is_diagonal(dx, dy) && self.is_clear_path(board, from, to),
            PieceKind::Queen => {
                (is_straight(dx, dy) || is_diagonal(dx, dy)) && self.is_clear_path(board, from, to)
            }
            PieceKind::Knight => {
                let (adx, ady) = (dx.abs(), dy.abs());
                (adx == 2 && ady == 1) || (adx == 1 && ady == 2)
            }
            PieceKind::King => dx.abs() <= 1 && dy.abs() <= 1,
        }
    }

    fn is_pawn_move(
        &self,
        piece: Piece,
        from: Square,
        to: Square,
        dx: i8,
        dy: i8,
        board: &Board,
    ) -> bool {
        let forward = piece.color.forward();
        let target = board.piece_at(to);

        // Single push
        if dx == 0 && dy == forward {
            return target.is_none();
        }

        // Double push from the home rank, both squares must be empty
        if dx == 0 && dy == 2 * forward {
            if from.row() != piece.color.pawn_home_row() || target.is_some() {
                return false;
            }
            return match from.offset(forward, 0) {
                Some(middle) => board.is_empty(middle),
                None => false,
            };
        }

        // Diagonal capture
        if dx.abs() == 1 && dy == forward {
            return is_opponent_piece(target, piece.color);
        }

        false
    }

    /// True if every square strictly between `from` and `to` is empty.
    /// Squares that are not on a common rank, file or diagonal never have a
    /// clear path.
    pub fn is_clear_path(&self, board: &Board, from: Square, to: Square) -> bool {
        let dx = to.col() as i8 - from.col() as i8;
        let dy = to.row() as i8 - from.row() as i8;
        if !(is_straight(dx, dy) || is_diagonal(dx, dy)) {
            return false;
        }

        let (step_r, step_c) = (dy.signum(), dx.signum());
        let mut current = from;
        loop {
            current = match current.offset(step_r, step_c) {
                Some(next) => next,
                None => return false,
            };
            if current == to {
                return true;
            }
            if !board.is_empty(current) {
                return false;
            }
        }
    }

    /// Every square `piece` standing on `from` may legally move to.
    pub fn legal_destinations(
        &self,
        piece: Piece,
        from: Square,
        board: &Board,
    ) -> BTreeSet<Square> {
        Square::all()
            .filter(|to| self.is_legal_move(piece, from, *to, board))
            .collect()
    }
}

fn is_straight(dx: i8, dy: i8) -> bool {
    (dx == 0) != (dy == 0)
}

fn is_diagonal(dx: i8, dy: i8) -> bool {
    dx != 0 && dx.abs() == dy.abs()
}

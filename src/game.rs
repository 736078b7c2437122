use crate::board::{is_own_piece, Board, Color, Piece, PieceKind, Square};
use crate::movegen::MoveEvaluator;
use std::collections::BTreeSet;
use tracing::{debug, info};

/// The piece currently picked up, if any.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Selection {
    #[default]
    Empty,
    Selected(Square),
}

/// What a single square activation did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Activation {
    /// The game is over; nothing changes any more.
    Ignored,
    /// Empty square or a piece of the side not to move.
    PickupRejected(Square),
    PickedUp(Square),
    /// Illegal destination; the selection was dropped, the board is untouched.
    MoveRejected { from: Square, to: Square },
    Moved {
        from: Square,
        to: Square,
        captured: Option<Piece>,
    },
    /// A king was captured by this move.
    GameWon {
        from: Square,
        to: Square,
        winner: Color,
    },
}

#[derive(Debug, Clone)]
pub struct GameState {
    board: Board,
    turn: Color,
    game_over: bool,
    winner: Option<Color>,
    selection: Selection,
    evaluator: MoveEvaluator,
}

impl GameState {
    pub fn new() -> Self {
        info!("new game");
        Self::from_board(Board::new(), Color::White)
    }

    /// Starts from an arbitrary position with `turn` to move.
    pub fn from_board(board: Board, turn: Color) -> Self {
        Self {
            board,
            turn,
            game_over: false,
            winner: None,
            selection: Selection::Empty,
            evaluator: MoveEvaluator::new(),
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        self.board.piece_at(square)
    }

    pub fn turn(&self) -> Color {
        self.turn
    }

    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    pub fn winner(&self) -> Option<Color> {
        self.winner
    }

    pub fn selection(&self) -> Selection {
        self.selection
    }

    pub fn is_legal_move(&self, from: Square, to: Square) -> bool {
        match self.board.piece_at(from) {
            Some(piece) => self.evaluator.is_legal_move(piece, from, to, &self.board),
            None => false,
        }
    }

    /// Legal destinations of whatever stands on `from`, regardless of turn.
    pub fn legal_destinations(&self, from: Square) -> BTreeSet<Square> {
        match self.board.piece_at(from) {
            Some(piece) => self.evaluator.legal_destinations(piece, from, &self.board),
            None => BTreeSet::new(),
        }
    }

    /// Destinations to highlight for the current selection.
    pub fn highlights(&self) -> BTreeSet<Square> {
        match self.selection {
            Selection::Selected(from) => self.legal_destinations(from),
            Selection::Empty => BTreeSet::new(),
        }
    }

    /// Applies a move without checking it. Ends the game when a king is
    /// captured; the turn passes either way.
    pub fn move_piece(&mut self, from: Square, to: Square) -> Option<Piece> {
        let captured = self.board.move_piece(from, to);

        if let Some(piece) = captured {
            if piece.kind == PieceKind::King {
                let winner = piece.color.opposite();
                self.game_over = true;
                self.winner = Some(winner);
                info!(%winner, "king captured on {}, game over", to);
            }
        }

        self.turn = self.turn.opposite();
        captured
    }

    /// Handles a click on `square`: picks up a piece of the side to move, or
    /// tries to move the selected piece there. Any second click clears the
    /// selection whether or not the move was made.
    pub fn on_square_activated(&mut self, square: Square) -> Activation {
        if self.game_over {
            return Activation::Ignored;
        }

        match self.selection {
            Selection::Empty => {
                if is_own_piece(self.board.piece_at(square), self.turn) {
                    debug!(%square, turn = %self.turn, "picked up");
                    self.selection = Selection::Selected(square);
                    Activation::PickedUp(square)
                } else {
                    debug!(%square, turn = %self.turn, "pickup rejected");
                    Activation::PickupRejected(square)
                }
            }
            Selection::Selected(from) => {
                self.selection = Selection::Empty;

                if !self.is_legal_move(from, square) {
                    debug!(%from, to = %square, "illegal move, selection cleared");
                    return Activation::MoveRejected { from, to: square };
                }

                let captured = self.move_piece(from, square);
                debug!(%from, to = %square, ?captured, "moved");
                match self.winner {
                    Some(winner) if self.game_over => Activation::GameWon {
                        from,
                        to: square,
                        winner,
                    },
                    _ => Activation::Moved {
                        from,
                        to: square,
                        captured,
                    },
                }
            }
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

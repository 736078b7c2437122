use crate::board::{Color, Piece, PieceKind, Square, BOARD_SIZE};
use crate::game::{Activation, GameState, Selection};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GlyphStyle {
    #[default]
    Unicode,
    Ascii,
}

pub fn glyph(piece: Piece, style: GlyphStyle) -> char {
    match style {
        GlyphStyle::Unicode => match (piece.color, piece.kind) {
            (Color::White, PieceKind::King) => '♔',
            (Color::White, PieceKind::Queen) => '♕',
            (Color::White, PieceKind::Rook) => '♖',
            (Color::White, PieceKind::Bishop) => '♗',
            (Color::White, PieceKind::Knight) => '♘',
            (Color::White, PieceKind::Pawn) => '♙',
            (Color::Black, PieceKind::King) => '♚',
            (Color::Black, PieceKind::Queen) => '♛',
            (Color::Black, PieceKind::Rook) => '♜',
            (Color::Black, PieceKind::Bishop) => '♝',
            (Color::Black, PieceKind::Knight) => '♞',
            (Color::Black, PieceKind::Pawn) => '♟',
        },
        GlyphStyle::Ascii => {
            let c = match piece.kind {
                PieceKind::King => 'K',
                PieceKind::Queen => 'Q',
                PieceKind::Rook => 'R',
                PieceKind::Bishop => 'B',
                PieceKind::Knight => 'N',
                PieceKind::Pawn => 'P',
            };
            match piece.color {
                Color::White => c,
                Color::Black => c.to_ascii_lowercase(),
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shade {
    Light,
    Dark,
}

impl Shade {
    pub fn of(square: Square) -> Shade {
        if (square.row() + square.col()) % 2 == 0 {
            Shade::Light
        } else {
            Shade::Dark
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Highlight {
    None,
    Selected,
    Destination,
    Capture,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SquareView {
    pub square: Square,
    pub piece: Option<Piece>,
    pub shade: Shade,
    pub highlight: Highlight,
}

/// Snapshot of every square, row 0 first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardView {
    rows: Vec<Vec<SquareView>>,
}

impl BoardView {
    pub fn of(game: &GameState) -> Self {
        let selected = match game.selection() {
            Selection::Selected(square) => Some(square),
            Selection::Empty => None,
        };
        let targets = game.highlights();

        let rows = (0..BOARD_SIZE)
            .map(|row| {
                (0..BOARD_SIZE)
                    .filter_map(|col| Square::new(row, col))
                    .map(|square| {
                        let piece = game.piece_at(square);
                        let highlight = if selected == Some(square) {
                            Highlight::Selected
                        } else if targets.contains(&square) {
                            if piece.is_some() {
                                Highlight::Capture
                            } else {
                                Highlight::Destination
                            }
                        } else {
                            Highlight::None
                        };
                        SquareView {
                            square,
                            piece,
                            shade: Shade::of(square),
                            highlight,
                        }
                    })
                    .collect()
            })
            .collect();

        Self { rows }
    }

    pub fn rows(&self) -> &[Vec<SquareView>] {
        &self.rows
    }

    pub fn get(&self, square: Square) -> SquareView {
        self.rows[square.row() as usize][square.col() as usize]
    }
}

pub fn status_text(game: &GameState) -> String {
    match game.winner() {
        Some(winner) if game.is_game_over() => format!("{} wins!", winner),
        _ => format!("{}'s turn", game.turn()),
    }
}

/// One-shot message worth surfacing after `activation`, read against the
/// game state it produced.
pub fn notice(activation: &Activation, game: &GameState) -> Option<String> {
    match activation {
        Activation::GameWon { winner, .. } => Some(format!("{} wins!", winner)),
        Activation::Moved { .. } => Some(format!("{}'s turn", game.turn())),
        _ => None,
    }
}

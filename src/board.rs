use crate::view::{glyph, GlyphStyle};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

pub const BOARD_SIZE: u8 = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    White,
    Black,
}

impl Color {
    pub fn opposite(&self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Row delta of a one-step pawn advance.
    pub fn forward(&self) -> i8 {
        match self {
            Color::White => -1,
            Color::Black => 1,
        }
    }

    pub fn pawn_home_row(&self) -> u8 {
        match self {
            Color::White => 6,
            Color::Black => 1,
        }
    }

    fn back_row(&self) -> u8 {
        match self {
            Color::White => 7,
            Color::Black => 0,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Color::White => write!(f, "White"),
            Color::Black => write!(f, "Black"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub color: Color,
    pub kind: PieceKind,
}

impl Piece {
    pub const fn new(color: Color, kind: PieceKind) -> Self {
        Self { color, kind }
    }
}

/// True if `piece` is present and belongs to `color`.
pub fn is_own_piece(piece: Option<Piece>, color: Color) -> bool {
    matches!(piece, Some(p) if p.color == color)
}

/// True if `piece` is present and belongs to the other side.
pub fn is_opponent_piece(piece: Option<Piece>, color: Color) -> bool {
    matches!(piece, Some(p) if p.color != color)
}

/// A board coordinate. Row 0 is Black's back rank, row 7 is White's.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Square {
    row: u8,
    col: u8,
}

impl Square {
    pub fn new(row: u8, col: u8) -> Option<Self> {
        if row < BOARD_SIZE && col < BOARD_SIZE {
            Some(Self { row, col })
        } else {
            None
        }
    }

    pub fn row(&self) -> u8 {
        self.row
    }

    pub fn col(&self) -> u8 {
        self.col
    }

    /// The square `(dr, dc)` away, if it is still on the board.
    pub fn offset(&self, dr: i8, dc: i8) -> Option<Square> {
        let row = self.row as i8 + dr;
        let col = self.col as i8 + dc;
        if row < 0 || col < 0 {
            return None;
        }
        Square::new(row as u8, col as u8)
    }

    /// All 64 squares, row by row from row 0.
    pub fn all() -> impl Iterator<Item = Square> {
        (0..BOARD_SIZE).flat_map(|row| (0..BOARD_SIZE).map(move |col| Square { row, col }))
    }

    pub fn file_char(&self) -> char {
        (b'a' + self.col) as char
    }

    pub fn rank_char(&self) -> char {
        (b'0' + BOARD_SIZE - self.row) as char
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}{}", self.file_char(), self.rank_char())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SquareParseError {
    #[error("empty square")]
    Empty,
    #[error("invalid file '{0}', expected a-h")]
    InvalidFile(char),
    #[error("invalid rank '{0}', expected 1-8")]
    InvalidRank(char),
    #[error("coordinate '{0}' is not a number in 0-7")]
    InvalidCoordinate(String),
    #[error("unrecognized square '{0}'")]
    Unrecognized(String),
}

impl FromStr for Square {
    type Err = SquareParseError;

    /// Accepts algebraic names (`e2`) and grid pairs (`6,4`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(SquareParseError::Empty);
        }

        if let Some((row, col)) = s.split_once(',') {
            let parse = |part: &str| {
                part.trim()
                    .parse::<u8>()
                    .ok()
                    .filter(|v| *v < BOARD_SIZE)
                    .ok_or_else(|| SquareParseError::InvalidCoordinate(part.trim().to_string()))
            };
            let row = parse(row)?;
            let col = parse(col)?;
            return Ok(Square { row, col });
        }

        let mut chars = s.chars();
        let (file, rank) = match (chars.next(), chars.next(), chars.next()) {
            (Some(file), Some(rank), None) => (file.to_ascii_lowercase(), rank),
            _ => return Err(SquareParseError::Unrecognized(s.to_string())),
        };
        let col = match file {
            'a'..='h' => file as u8 - b'a',
            _ => return Err(SquareParseError::InvalidFile(file)),
        };
        let row = match rank {
            '1'..='8' => BOARD_SIZE - (rank as u8 - b'0'),
            _ => return Err(SquareParseError::InvalidRank(rank)),
        };
        Ok(Square { row, col })
    }
}

const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    squares: [[Option<Piece>; 8]; 8],
}

impl Board {
    /// Standard starting position, Black on rows 0-1 and White on rows 6-7.
    pub fn new() -> Self {
        let mut board = Self::empty();
        for color in [Color::Black, Color::White] {
            let back = color.back_row() as usize;
            let pawns = color.pawn_home_row() as usize;
            for (col, kind) in BACK_RANK.iter().enumerate() {
                board.squares[back][col] = Some(Piece::new(color, *kind));
                board.squares[pawns][col] = Some(Piece::new(color, PieceKind::Pawn));
            }
        }
        board
    }

    pub fn empty() -> Self {
        Self {
            squares: [[None; 8]; 8],
        }
    }

    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        self.squares[square.row as usize][square.col as usize]
    }

    pub fn is_empty(&self, square: Square) -> bool {
        self.piece_at(square).is_none()
    }

    /// Places (or clears) a piece without any rule checks.
    pub fn set_piece(&mut self, square: Square, piece: Option<Piece>) {
        self.squares[square.row as usize][square.col as usize] = piece;
    }

    /// Moves whatever stands on `from` to `to` and returns the piece that was
    /// overwritten. No legality checks; `from` must be occupied.
    pub fn move_piece(&mut self, from: Square, to: Square) -> Option<Piece> {
        let moving = self.piece_at(from);
        debug_assert!(moving.is_some(), "move_piece called with empty origin {}", from);

        let captured = self.piece_at(to);
        self.set_piece(to, moving);
        self.set_piece(from, None);
        captured
    }

    pub fn count(&self, piece: Piece) -> usize {
        Square::all()
            .filter(|sq| self.piece_at(*sq) == Some(piece))
            .count()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// Plain ASCII grid, row 0 on top, `.` for empty squares.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for row in self.squares.iter() {
            let line: Vec<String> = row
                .iter()
                .map(|cell| match cell {
                    Some(piece) => glyph(*piece, GlyphStyle::Ascii).to_string(),
                    None => ".".to_string(),
                })
                .collect();
            writeln!(f, "{}", line.join(" "))?;
        }
        Ok(())
    }
}

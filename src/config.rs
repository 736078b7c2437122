use crate::view::GlyphStyle;
use std::str::FromStr;
use thiserror::Error;

/// How the console labels rows and columns around the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CoordinateStyle {
    /// Files a-h along the bottom, ranks 8-1 down the side.
    #[default]
    Algebraic,
    /// Raw `row,col` indices 0-7.
    Grid,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown coordinate style '{0}', expected 'algebraic' or 'grid'")]
pub struct CoordinateStyleError(String);

impl FromStr for CoordinateStyle {
    type Err = CoordinateStyleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "algebraic" => Ok(CoordinateStyle::Algebraic),
            "grid" => Ok(CoordinateStyle::Grid),
            _ => Err(CoordinateStyleError(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConsoleConfig {
    pub glyphs: GlyphStyle,
    pub show_highlights: bool,
    pub coordinates: CoordinateStyle,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            glyphs: GlyphStyle::Unicode,
            show_highlights: true,
            coordinates: CoordinateStyle::Algebraic,
        }
    }
}

//! Core type definitions for the engine.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// State of a single cell
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    Dead = 0,
    Alive = 1,
}

impl Cell {
    pub fn is_alive(self) -> bool {
        self == Cell::Alive
    }

    pub fn toggled(self) -> Self {
        match self {
            Cell::Dead => Cell::Alive,
            Cell::Alive => Cell::Dead,
        }
    }
}

impl From<bool> for Cell {
    fn from(alive: bool) -> Self {
        if alive {
            Cell::Alive
        } else {
            Cell::Dead
        }
    }
}

impl From<Cell> for bool {
    fn from(cell: Cell) -> Self {
        cell.is_alive()
    }
}

/// The two-glyph vocabulary of the pattern text format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Glyphs {
    pub alive: char,
    pub dead: char,
}

impl Glyphs {
    pub fn new(alive: char, dead: char) -> Result<Self> {
        let glyphs = Self { alive, dead };
        glyphs.validate()?;
        Ok(glyphs)
    }

    /// `#` for alive, `.` for dead
    pub fn ascii() -> Self {
        Self {
            alive: '#',
            dead: '.',
        }
    }

    /// Check the vocabulary is usable: two distinct, visible glyphs
    pub fn validate(&self) -> Result<()> {
        if self.alive == self.dead {
            return Err(Error::InvalidGlyphs(format!(
                "alive and dead glyphs are both {:?}",
                self.alive
            )));
        }
        if self.alive.is_whitespace() || self.dead.is_whitespace() {
            return Err(Error::InvalidGlyphs(
                "glyphs must not be whitespace".to_string(),
            ));
        }
        Ok(())
    }

    pub fn cell_for(&self, glyph: char) -> Option<Cell> {
        if glyph == self.alive {
            Some(Cell::Alive)
        } else if glyph == self.dead {
            Some(Cell::Dead)
        } else {
            None
        }
    }

    pub fn glyph_for(&self, cell: Cell) -> char {
        match cell {
            Cell::Alive => self.alive,
            Cell::Dead => self.dead,
        }
    }
}

impl Default for Glyphs {
    fn default() -> Self {
        Self {
            alive: '◼',
            dead: '◻',
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", Glyphs::default().glyph_for(*self))
    }
}

/// A cell coordinate on the torus, row first
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub row: i32,
    pub col: i32,
}

impl Position {
    pub fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Apply toroidal wrapping for the given grid dimensions, returning `(row, col)`
    /// in `0..height` and `0..width`.
    ///
    /// Dimensions must be non-zero.
    pub fn wrap(&self, width: u32, height: u32) -> (u32, u32) {
        let row = (self.row as i64).rem_euclid(height as i64) as u32;
        let col = (self.col as i64).rem_euclid(width as i64) as u32;
        (row, col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_wrap() {
        assert_eq!(Position::new(5, 5).wrap(10, 10), (5, 5));
        assert_eq!(Position::new(-1, -1).wrap(10, 10), (9, 9));
        assert_eq!(Position::new(10, 10).wrap(10, 10), (0, 0));
        assert_eq!(Position::new(-21, 33).wrap(8, 4), (3, 1));
    }

    #[test]
    fn test_position_wrap_extremes() {
        assert_eq!(Position::new(i32::MIN, i32::MAX).wrap(7, 5), (
            (i32::MIN as i64).rem_euclid(5) as u32,
            (i32::MAX as i64).rem_euclid(7) as u32
        ));
    }

    #[test]
    fn test_cell_conversions() {
        assert_eq!(Cell::from(true), Cell::Alive);
        assert_eq!(Cell::from(false), Cell::Dead);
        assert!(bool::from(Cell::Alive));
        assert_eq!(Cell::Dead.toggled(), Cell::Alive);
        assert_eq!(Cell::Alive.toggled().toggled(), Cell::Alive);
        assert_eq!(Cell::Alive as u8, 1);
    }

    #[test]
    fn test_default_glyphs() {
        let glyphs = Glyphs::default();
        assert_eq!(glyphs.cell_for('◼'), Some(Cell::Alive));
        assert_eq!(glyphs.cell_for('◻'), Some(Cell::Dead));
        assert_eq!(glyphs.cell_for('#'), None);
        assert_eq!(Cell::Alive.to_string(), "◼");
    }

    #[test]
    fn test_invalid_glyphs() {
        assert!(Glyphs::new('x', 'x').is_err());
        assert!(Glyphs::new(' ', '.').is_err());
        assert_eq!(Glyphs::new('#', '.').unwrap(), Glyphs::ascii());
    }
}

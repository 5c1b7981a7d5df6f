//! Glyph pattern decoding.

use life_core::{Cell, Error, Glyphs, Result};

/// A rectangular block of cells decoded from glyph text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pattern {
    width: u32,
    height: u32,
    cells: Vec<Cell>,
}

impl Pattern {
    /// Decode a glyph block.
    ///
    /// Whitespace around each line is ignored, as are blank lines before the first
    /// row and after the last one. Line and column numbers in errors are 1-based
    /// positions in `text`, columns counted after the line's leading whitespace.
    pub fn parse(text: &str, glyphs: &Glyphs) -> Result<Self> {
        let lines: Vec<(usize, &str)> = text
            .lines()
            .enumerate()
            .map(|(i, line)| (i + 1, line.trim()))
            .collect();

        let first = lines.iter().position(|(_, line)| !line.is_empty());
        let last = lines.iter().rposition(|(_, line)| !line.is_empty());
        let rows = match (first, last) {
            (Some(first), Some(last)) => &lines[first..=last],
            _ => return Err(Error::EmptyPattern),
        };

        let width = rows[0].1.chars().count();
        let mut cells = Vec::with_capacity(width * rows.len());

        for &(line_no, line) in rows {
            let found = line.chars().count();
            if found != width {
                return Err(Error::MalformedPattern {
                    line: line_no,
                    expected: width,
                    found,
                });
            }

            for (i, glyph) in line.chars().enumerate() {
                let cell = glyphs.cell_for(glyph).ok_or(Error::UnrecognizedGlyph {
                    glyph,
                    line: line_no,
                    column: i + 1,
                })?;
                cells.push(cell);
            }
        }

        let height = rows.len();
        match (u32::try_from(width), u32::try_from(height)) {
            (Ok(width), Ok(height)) => Ok(Self {
                width,
                height,
                cells,
            }),
            _ => Err(Error::InvalidDimensions {
                width: u32::MAX,
                height: u32::MAX,
            }),
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Cell at an in-range `(row, col)`
    pub fn get(&self, row: u32, col: u32) -> Cell {
        self.cells[row as usize * self.width as usize + col as usize]
    }

    /// Cells in row-major order
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn population(&self) -> usize {
        self.cells.iter().filter(|c| c.is_alive()).count()
    }
}

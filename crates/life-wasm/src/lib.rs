//! WebAssembly bindings for the universe.
//!
//! The host reads the grid straight out of linear memory: `cells()` returns the
//! address of the packed buffer and `cells_len()` its byte length. The address is
//! only valid until the next call that mutates the universe (`tick`, `toggle_cell`,
//! `clear`, `randomize`, `insert_universe`), so fetch it again every frame.

use life_core::Glyphs;
use wasm_bindgen::prelude::*;

/// Message thrown to the host; pattern failures are prefixed so the page can
/// tell a bad glyph block from a bad board size.
fn error_message(err: &life_core::Error) -> String {
    if err.is_parse_error() {
        format!("invalid pattern: {err}")
    } else {
        err.to_string()
    }
}

fn to_js_error(err: life_core::Error) -> JsError {
    JsError::new(&error_message(&err))
}

/// Install the panic hook so Rust panics show up in the browser console.
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
}

#[wasm_bindgen]
#[derive(Debug, Clone, PartialEq)]
pub struct Universe {
    inner: life_world::Universe,
}

#[wasm_bindgen]
impl Universe {
    pub fn random(width: u32, height: u32) -> Result<Universe, JsError> {
        let inner = life_world::Universe::random(width, height).map_err(to_js_error)?;
        Ok(Universe { inner })
    }

    pub fn empty(width: u32, height: u32) -> Result<Universe, JsError> {
        let inner = life_world::Universe::empty(width, height).map_err(to_js_error)?;
        Ok(Universe { inner })
    }

    /// Parse a `◼`/`◻` glyph block. Throws on ragged rows or unknown glyphs.
    pub fn from_str(text: &str) -> Result<Universe, JsError> {
        let inner = life_world::Universe::from_str(text).map_err(to_js_error)?;
        Ok(Universe { inner })
    }

    pub fn width(&self) -> u32 {
        self.inner.width()
    }

    pub fn height(&self) -> u32 {
        self.inner.height()
    }

    pub fn tick(&mut self) {
        self.inner.tick();
    }

    pub fn toggle_cell(&mut self, row: i32, col: i32) {
        self.inner.toggle_cell(row, col);
    }

    pub fn clear(&mut self) {
        self.inner.clear();
    }

    pub fn randomize(&mut self) {
        self.inner.randomize();
    }

    pub fn insert_universe(&mut self, row: i32, col: i32, other: &Universe) {
        self.inner.insert_universe(row, col, &other.inner);
    }

    pub fn cells(&self) -> *const u8 {
        self.inner.cells_ptr()
    }

    pub fn cells_len(&self) -> usize {
        self.inner.cells().len()
    }

    pub fn population(&self) -> usize {
        self.inner.population()
    }

    pub fn render(&self) -> String {
        self.inner.render(&Glyphs::default())
    }
}

impl Universe {
    pub fn inner(&self) -> &life_world::Universe {
        &self.inner
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wrap(inner: life_core::Result<life_world::Universe>) -> Universe {
        Universe {
            inner: inner.unwrap(),
        }
    }

    #[test]
    fn test_error_message_marks_pattern_failures() {
        let err = life_world::Universe::from_str("◻◻◻\n◻◻").unwrap_err();
        assert_eq!(
            error_message(&err),
            "invalid pattern: Malformed pattern: line 2 has 2 cells, expected 3"
        );

        let err = life_world::Universe::from_str("◻x").unwrap_err();
        assert!(error_message(&err).starts_with("invalid pattern: Unrecognized glyph 'x'"));

        let err = life_world::Universe::empty(0, 3).unwrap_err();
        assert_eq!(error_message(&err), "Invalid dimensions: 0x3");
    }

    #[test]
    fn test_random_exposes_packed_buffer() {
        let universe = wrap(life_world::Universe::random(64, 64));
        assert_eq!(universe.width(), 64);
        assert_eq!(universe.height(), 64);
        assert_eq!(universe.cells_len(), 512);
        assert_eq!(universe.cells(), universe.inner().cells().as_ptr());
    }

    #[test]
    fn test_host_stamp_centering() {
        // The page centres a stamp on the clicked cell, which can push the anchor negative
        let mut universe = wrap(life_world::Universe::empty(8, 8));
        let glider = wrap(life_world::Universe::from_str("◻◻◼\n◼◻◼\n◻◼◼"));
        let row = 0 - glider.height() as i32 / 2;
        let col = 0 - glider.width() as i32 / 2;

        universe.insert_universe(row, col, &glider);
        assert_eq!(universe.population(), 5);
        assert_eq!(
            universe.render(),
            "◻◼◻◻◻◻◻◼\n◼◼◻◻◻◻◻◻\n◻◻◻◻◻◻◻◻\n◻◻◻◻◻◻◻◻\n◻◻◻◻◻◻◻◻\n◻◻◻◻◻◻◻◻\n◻◻◻◻◻◻◻◻\n◻◼◻◻◻◻◻◻\n"
        );
    }

    #[test]
    fn test_click_toggle_and_clear() {
        let mut universe = wrap(life_world::Universe::empty(4, 4));
        universe.toggle_cell(3, 3);
        assert_eq!(universe.population(), 1);
        universe.toggle_cell(-1, -1);
        assert_eq!(universe.population(), 0);

        universe.randomize();
        universe.clear();
        assert_eq!(universe.population(), 0);
    }
}

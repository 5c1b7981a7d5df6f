//! The Game-of-Life universe: a toroidal packed-bit grid with its own random source.

use crate::bitgrid::BitGrid;
use crate::pattern::Pattern;
use crate::rules;
use life_core::{Cell, Error, Glyphs, Position, Result, UniverseConfig};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::fmt;
use std::str::FromStr;
use tracing::{debug, trace};

/// A toroidal Game-of-Life grid.
///
/// Coordinates passed to any method are taken modulo the grid dimensions, so every
/// `i32` pair names a valid cell and no operation after construction can fail.
#[derive(Debug, Clone)]
pub struct Universe {
    width: u32,
    height: u32,
    cells: BitGrid,
    // Receives the next generation during `tick`, then swapped in
    scratch: BitGrid,
    rng: ChaCha8Rng,
}

impl Universe {
    fn check_dimensions(width: u32, height: u32) -> Result<()> {
        let fits = (width as usize).checked_mul(height as usize).is_some();
        if width == 0 || height == 0 || !fits {
            return Err(Error::InvalidDimensions { width, height });
        }
        Ok(())
    }

    fn allocate(width: u32, height: u32, rng: ChaCha8Rng) -> Self {
        Self {
            width,
            height,
            cells: BitGrid::new(width, height),
            scratch: BitGrid::new(width, height),
            rng,
        }
    }

    /// An all-dead universe
    pub fn empty(width: u32, height: u32) -> Result<Self> {
        Self::check_dimensions(width, height)?;
        debug!(width, height, "Creating empty universe");
        Ok(Self::allocate(width, height, ChaCha8Rng::from_entropy()))
    }

    /// A universe with every cell independently alive with probability one half,
    /// drawn from a generator seeded from OS entropy.
    pub fn random(width: u32, height: u32) -> Result<Self> {
        Self::check_dimensions(width, height)?;
        let mut universe = Self::allocate(width, height, ChaCha8Rng::from_entropy());
        universe.randomize();
        debug!(width, height, population = universe.population(), "Created random universe");
        Ok(universe)
    }

    /// Like [`Universe::random`], but reproducible from `seed`
    pub fn random_with_seed(width: u32, height: u32, seed: u64) -> Result<Self> {
        Self::check_dimensions(width, height)?;
        let mut universe = Self::allocate(width, height, ChaCha8Rng::seed_from_u64(seed));
        universe.randomize();
        debug!(width, height, seed, "Created seeded universe");
        Ok(universe)
    }

    pub fn from_config(config: &UniverseConfig) -> Result<Self> {
        config.validate()?;
        let rng = match config.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_entropy(),
        };
        let mut universe = Self::allocate(config.width, config.height, rng);
        universe.randomize_with_density(config.density);
        Ok(universe)
    }

    /// Parse a glyph block written with the default `◼`/`◻` vocabulary
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(text: &str) -> Result<Self> {
        Self::from_str_with(text, &Glyphs::default())
    }

    pub fn from_str_with(text: &str, glyphs: &Glyphs) -> Result<Self> {
        let pattern = Pattern::parse(text, glyphs)?;
        Ok(Self::from_pattern(&pattern))
    }

    pub fn from_pattern(pattern: &Pattern) -> Self {
        let mut universe = Self::allocate(
            pattern.width(),
            pattern.height(),
            ChaCha8Rng::from_entropy(),
        );
        universe.insert_pattern(0, 0, pattern);
        debug!(
            width = pattern.width(),
            height = pattern.height(),
            population = universe.population(),
            "Created universe from pattern"
        );
        universe
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// The packed cell buffer: `ceil(width * height / 8)` bytes, bit `row * width + col`
    /// stored least-significant bit first.
    ///
    /// The borrow ends before the next mutation; the buffer behind it may move on
    /// `tick`.
    pub fn cells(&self) -> &[u8] {
        self.cells.as_bytes()
    }

    /// Address of the packed cell buffer for hosts sharing linear memory.
    ///
    /// Valid until the next mutating call on this universe. Never write through it.
    pub fn cells_ptr(&self) -> *const u8 {
        self.cells.as_bytes().as_ptr()
    }

    fn index(&self, row: i32, col: i32) -> usize {
        let (row, col) = Position::new(row, col).wrap(self.width, self.height);
        self.cells.index(row, col)
    }

    pub fn get_cell(&self, row: i32, col: i32) -> Cell {
        self.cells.get(self.index(row, col)).into()
    }

    pub fn set_cell(&mut self, row: i32, col: i32, cell: Cell) {
        let index = self.index(row, col);
        self.cells.set(index, cell.into());
    }

    /// Number of live cells
    pub fn population(&self) -> usize {
        self.cells.count_ones()
    }

    /// Advance one generation
    pub fn tick(&mut self) {
        rules::step(&self.cells, &mut self.scratch);
        self.cells.swap_bits(&mut self.scratch);
        trace!(population = self.population(), "Tick");
    }

    pub fn toggle_cell(&mut self, row: i32, col: i32) {
        let index = self.index(row, col);
        self.cells.toggle(index);
    }

    pub fn clear(&mut self) {
        self.cells.fill(false);
        debug!("Cleared universe");
    }

    /// Reset every cell independently, alive with probability one half
    pub fn randomize(&mut self) {
        self.randomize_with_density(0.5);
    }

    /// Reset every cell independently, alive with probability `density` clamped to `0..=1`
    pub fn randomize_with_density(&mut self, density: f64) {
        self.cells.fill_random(&mut self.rng, density);
        debug!(density, population = self.population(), "Randomized universe");
    }

    /// Replace the random source, making later `randomize` calls reproducible
    pub fn reseed(&mut self, seed: u64) {
        self.rng = ChaCha8Rng::seed_from_u64(seed);
    }

    /// Overwrite the footprint of `other` with its cells, `other`'s `(0, 0)` landing on
    /// `(row, col)`. The footprint wraps around every edge; cells outside it are kept.
    pub fn insert_universe(&mut self, row: i32, col: i32, other: &Universe) {
        self.stamp(row, col, other.width, other.height, |r, c| {
            other.cells.get(other.cells.index(r, c)).into()
        });
    }

    /// Overwrite the footprint of `pattern` the same way as [`Universe::insert_universe`]
    pub fn insert_pattern(&mut self, row: i32, col: i32, pattern: &Pattern) {
        self.stamp(row, col, pattern.width(), pattern.height(), |r, c| {
            pattern.get(r, c)
        });
    }

    fn stamp<F>(&mut self, row: i32, col: i32, width: u32, height: u32, cell_at: F)
    where
        F: Fn(u32, u32) -> Cell,
    {
        let (anchor_row, anchor_col) = Position::new(row, col).wrap(self.width, self.height);

        for r in 0..height {
            let target_row = ((anchor_row as u64 + r as u64) % self.height as u64) as u32;
            for c in 0..width {
                let target_col = ((anchor_col as u64 + c as u64) % self.width as u64) as u32;
                let index = self.cells.index(target_row, target_col);
                self.cells.set(index, cell_at(r, c).into());
            }
        }
    }

    /// Render one glyph per cell, each row followed by a newline
    pub fn render(&self, glyphs: &Glyphs) -> String {
        let mut out = String::with_capacity((self.width as usize + 1) * self.height as usize);
        for row in 0..self.height {
            for col in 0..self.width {
                let cell = self.cells.get(self.cells.index(row, col)).into();
                out.push(glyphs.glyph_for(cell));
            }
            out.push('\n');
        }
        out
    }
}

impl PartialEq for Universe {
    fn eq(&self, other: &Self) -> bool {
        self.width == other.width && self.height == other.height && self.cells == other.cells
    }
}

impl Eq for Universe {}

impl fmt::Display for Universe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(&Glyphs::default()))
    }
}

impl FromStr for Universe {
    type Err = Error;

    fn from_str(text: &str) -> Result<Self> {
        Self::from_str_with(text, &Glyphs::default())
    }
}

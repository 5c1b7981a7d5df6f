//! Packed bit storage for the grid.
//!
//! Bit `i` (row-major cell index) lives in byte `i / 8` at bit `i % 8`,
//! least-significant bit first. Padding bits past `width * height` stay zero.

use rand::{Rng, RngCore};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BitGrid {
    width: u32,
    height: u32,
    len: usize,
    bits: Vec<u8>,
}

impl BitGrid {
    /// Allocate an all-dead grid. Callers guarantee `width * height` fits in `usize`.
    pub fn new(width: u32, height: u32) -> Self {
        let len = width as usize * height as usize;
        Self {
            width,
            height,
            len,
            bits: vec![0; len.div_ceil(8)],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Number of cells (not bytes)
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Row-major index of an in-range `(row, col)`
    pub fn index(&self, row: u32, col: u32) -> usize {
        row as usize * self.width as usize + col as usize
    }

    pub fn get(&self, index: usize) -> bool {
        debug_assert!(index < self.len);
        self.bits[index / 8] & (1 << (index % 8)) != 0
    }

    pub fn set(&mut self, index: usize, alive: bool) {
        debug_assert!(index < self.len);
        let mask = 1 << (index % 8);
        if alive {
            self.bits[index / 8] |= mask;
        } else {
            self.bits[index / 8] &= !mask;
        }
    }

    pub fn toggle(&mut self, index: usize) {
        debug_assert!(index < self.len);
        self.bits[index / 8] ^= 1 << (index % 8);
    }

    pub fn fill(&mut self, alive: bool) {
        let byte = if alive { 0xFF } else { 0x00 };
        self.bits.iter_mut().for_each(|b| *b = byte);
        self.clear_padding();
    }

    /// Set every cell alive independently with probability `density`.
    ///
    /// A density of exactly one half draws whole bytes from the generator.
    pub fn fill_random<R: RngCore>(&mut self, rng: &mut R, density: f64) {
        let density = if density.is_nan() {
            0.0
        } else {
            density.clamp(0.0, 1.0)
        };

        if density == 0.5 {
            rng.fill_bytes(&mut self.bits);
            self.clear_padding();
        } else {
            for i in 0..self.len {
                let alive = rng.gen_bool(density);
                self.set(i, alive);
            }
        }
    }

    /// Number of live cells
    pub fn count_ones(&self) -> usize {
        self.bits.iter().map(|b| b.count_ones() as usize).sum()
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bits
    }

    /// Replace this grid's contents with `other`'s in O(1) by exchanging buffers.
    pub fn swap_bits(&mut self, other: &mut BitGrid) {
        debug_assert_eq!(self.len, other.len);
        std::mem::swap(&mut self.bits, &mut other.bits);
    }

    fn clear_padding(&mut self) {
        let used = self.len % 8;
        if used != 0 {
            if let Some(last) = self.bits.last_mut() {
                *last &= (1u8 << used) - 1;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_bitgrid_creation() {
        let grid = BitGrid::new(10, 10);
        assert_eq!(grid.len(), 100);
        assert_eq!(grid.as_bytes().len(), 13);
        assert_eq!(grid.count_ones(), 0);

        assert_eq!(BitGrid::new(8, 8).as_bytes().len(), 8);
        assert_eq!(BitGrid::new(3, 3).as_bytes().len(), 2);
        assert_eq!(BitGrid::new(1, 1).as_bytes().len(), 1);
    }

    #[test]
    fn test_lsb_first_packing() {
        let mut grid = BitGrid::new(4, 4);
        grid.set(0, true);
        grid.set(9, true);
        assert_eq!(grid.as_bytes(), &[0b0000_0001, 0b0000_0010]);

        grid.set(0, false);
        grid.toggle(15);
        assert_eq!(grid.as_bytes(), &[0b0000_0000, 0b1000_0010]);
        assert!(grid.get(15));
        assert!(!grid.get(14));
    }

    #[test]
    fn test_index_is_row_major() {
        let grid = BitGrid::new(5, 3);
        assert_eq!(grid.index(0, 0), 0);
        assert_eq!(grid.index(0, 4), 4);
        assert_eq!(grid.index(1, 0), 5);
        assert_eq!(grid.index(2, 4), 14);
    }

    #[test]
    fn test_fill_keeps_padding_clear() {
        let mut grid = BitGrid::new(3, 3);
        grid.fill(true);
        assert_eq!(grid.count_ones(), 9);
        assert_eq!(grid.as_bytes(), &[0xFF, 0b0000_0001]);

        grid.fill(false);
        assert_eq!(grid.count_ones(), 0);
    }

    #[test]
    fn test_fill_random_density() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let mut grid = BitGrid::new(100, 100);

        grid.fill_random(&mut rng, 0.5);
        let ones = grid.count_ones();
        assert!((4_500..=5_500).contains(&ones), "got {ones}");

        grid.fill_random(&mut rng, 0.1);
        let ones = grid.count_ones();
        assert!((700..=1_300).contains(&ones), "got {ones}");

        grid.fill_random(&mut rng, 0.0);
        assert_eq!(grid.count_ones(), 0);

        grid.fill_random(&mut rng, 7.0);
        assert_eq!(grid.count_ones(), 10_000);
    }

    #[test]
    fn test_fill_random_masks_padding() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let mut grid = BitGrid::new(5, 1);
        for _ in 0..32 {
            grid.fill_random(&mut rng, 0.5);
            assert_eq!(grid.as_bytes()[0] & 0b1110_0000, 0);
        }
    }

    #[test]
    fn test_swap_bits() {
        let mut a = BitGrid::new(4, 2);
        let mut b = BitGrid::new(4, 2);
        b.set(3, true);

        a.swap_bits(&mut b);
        assert!(a.get(3));
        assert!(!b.get(3));
    }
}

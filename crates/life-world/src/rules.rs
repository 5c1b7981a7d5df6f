//! The B3/S23 transition rule on a toroidal bit grid.

use crate::bitgrid::BitGrid;
use life_core::Cell;

/// Next state of a cell given its live neighbor count
pub fn next_state(cell: Cell, live_neighbors: u8) -> Cell {
    match (cell, live_neighbors) {
        (Cell::Alive, 2) | (_, 3) => Cell::Alive,
        _ => Cell::Dead,
    }
}

fn before(i: u32, n: u32) -> u32 {
    if i == 0 {
        n - 1
    } else {
        i - 1
    }
}

fn after(i: u32, n: u32) -> u32 {
    if i + 1 == n {
        0
    } else {
        i + 1
    }
}

/// Count live cells among the eight toroidal neighbors of an in-range `(row, col)`
pub fn live_neighbor_count(grid: &BitGrid, row: u32, col: u32) -> u8 {
    let (w, h) = (grid.width(), grid.height());
    let rows = [before(row, h), row, after(row, h)];
    let cols = [before(col, w), col, after(col, w)];

    let mut count = 0;
    for (i, &r) in rows.iter().enumerate() {
        for (j, &c) in cols.iter().enumerate() {
            if i == 1 && j == 1 {
                continue;
            }
            if grid.get(grid.index(r, c)) {
                count += 1;
            }
        }
    }
    count
}

/// Write the generation after `current` into `next`.
///
/// Every count reads `current` only, so `next` may hold stale data on entry.
pub fn step(current: &BitGrid, next: &mut BitGrid) {
    debug_assert_eq!(current.len(), next.len());

    for row in 0..current.height() {
        for col in 0..current.width() {
            let index = current.index(row, col);
            let cell = Cell::from(current.get(index));
            let live = live_neighbor_count(current, row, col);
            next.set(index, next_state(cell, live).into());
        }
    }
}

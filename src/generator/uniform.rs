/*
uniform.rs

Copyright 2026 The Mazeterm Authors

This file is part of Mazeterm.

Mazeterm is free software: you can redistribute it and/or modify it under the
terms of the GNU General Public License as published by the Free Software
Foundation, either version 3 of the License, or (at your option) any later
version.

Mazeterm is distributed in the hope that it will be useful, but WITHOUT ANY
WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR
A PARTICULAR PURPOSE. See the GNU General Public License for more details.

You should have received a copy of the GNU General Public License along with
Mazeterm. If not, see <https://www.gnu.org/licenses/>.

SPDX-License-Identifier: GPL-3.0-or-later
*/

//! Uniform-random maze carving.
//!
//! Each interior cell independently becomes a passage with probability
//! [`config::UNIFORM_PASSAGE_PROBABILITY`]. The border stays walled. There
//! is no connectivity guarantee: the solver reporting no solution on such a
//! maze is expected behavior.

use rand::Rng;

use crate::config;
use crate::grid::{Cell, Grid};

/// Randomly open interior cells of a grid of walls.
pub(super) fn carve(grid: &mut Grid, rng: &mut impl Rng) {
    for row in 1..grid.height() - 1 {
        for col in 1..grid.width() - 1 {
            if rng.random_bool(config::UNIFORM_PASSAGE_PROBABILITY) {
                grid.set((row, col), Cell::Passage);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn carving_only_touches_the_interior() {
        let mut rng: StdRng = StdRng::seed_from_u64(5);
        let mut grid: Grid = Grid::all_walls(11, 7).unwrap();
        carve(&mut grid, &mut rng);
        for row in 0..grid.height() {
            assert_eq!(grid.get((row, 0)), Cell::Wall);
            assert_eq!(grid.get((row, grid.width() - 1)), Cell::Wall);
        }
        for col in 0..grid.width() {
            assert_eq!(grid.get((0, col)), Cell::Wall);
            assert_eq!(grid.get((grid.height() - 1, col)), Cell::Wall);
        }
        // With 45 interior cells at probability 0.7, at least one passage is
        // all but certain under any seed.
        assert!(grid.count(Cell::Passage) > 0);
    }
}

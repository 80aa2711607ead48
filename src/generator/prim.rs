/*
prim.rs

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

//! Randomized Prim's maze carving.
//!
//! The frontier holds the interior walls two cells away from already carved
//! cells. The loop picks a uniformly random frontier element, carves it, and
//! extends the frontier from it, until the frontier is empty.
//!
//! The intervening cell between a carved cell and a frontier wall is opened
//! when the wall is *added* to the frontier, not when it is selected. A cell
//! can therefore end up linked to several already carved neighbors, so the
//! maze is connected but not necessarily a spanning tree.

use log::debug;
use rand::Rng;

use crate::grid::{Cell, Coordinate, Direction, Grid};

/// Carve a maze into a grid of walls, starting at (1, 1).
pub(super) fn carve(grid: &mut Grid, rng: &mut impl Rng) {
    let origin: Coordinate = (1, 1);
    grid.set(origin, Cell::Passage);

    let mut frontier: Vec<Coordinate> = Vec::new();
    extend_frontier(grid, origin, &mut frontier);

    while !frontier.is_empty() {
        let picked: Coordinate = frontier.swap_remove(rng.random_range(0..frontier.len()));
        grid.set(picked, Cell::Passage);
        extend_frontier(grid, picked, &mut frontier);
    }
    debug!("Prim carved {} passages", grid.count(Cell::Passage));
}

/// Add the interior walls two cells away from `cell` to the frontier, and
/// open the intervening cells right away.
fn extend_frontier(grid: &mut Grid, cell: Coordinate, frontier: &mut Vec<Coordinate>) {
    for direction in Direction::ALL {
        if let Some((mid, target)) = grid.neighbor_two(cell, direction)
            && grid.is_interior(target)
            && grid.get(target) == Cell::Wall
        {
            frontier.push(target);
            grid.set(mid, Cell::Passage);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn frontier_insertion_opens_the_intervening_cell() {
        let mut grid: Grid = Grid::all_walls(7, 7).unwrap();
        grid.set((1, 1), Cell::Passage);
        let mut frontier: Vec<Coordinate> = Vec::new();
        extend_frontier(&mut grid, (1, 1), &mut frontier);

        // From the corner, only the down and right targets are interior.
        assert_eq!(frontier.len(), 2);
        assert!(frontier.contains(&(3, 1)));
        assert!(frontier.contains(&(1, 3)));
        // The intervening cells are already carved even though the frontier
        // walls are not.
        assert_eq!(grid.get((2, 1)), Cell::Passage);
        assert_eq!(grid.get((1, 2)), Cell::Passage);
        assert_eq!(grid.get((3, 1)), Cell::Wall);
        assert_eq!(grid.get((1, 3)), Cell::Wall);
    }

    #[test]
    fn carving_opens_every_lattice_cell() {
        let mut rng: StdRng = StdRng::seed_from_u64(11);
        let mut grid: Grid = Grid::all_walls(9, 9).unwrap();
        carve(&mut grid, &mut rng);
        for row in (1..grid.height()).step_by(2) {
            for col in (1..grid.width()).step_by(2) {
                assert_eq!(grid.get((row, col)), Cell::Passage, "at ({row}, {col})");
            }
        }
    }
}

/*
backtracker.rs

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

//! Recursive-backtracking maze carving.
//!
//! The algorithm treats the odd-indexed interior coordinates as the maze
//! cells and carves a spanning tree between them: from the current cell, try
//! the four directions in a freshly shuffled order; a neighbor two cells away
//! is visitable when it is still a wall; carving opens both the intermediate
//! cell and the target, then continues from the target. The result is a
//! perfect maze with exactly one path between any two open cells.
//!
//! The depth-first walk uses an explicit frame stack rather than recursion:
//! the carved corridor can be as long as the whole cell lattice.

use log::debug;
use rand::Rng;
use rand::seq::SliceRandom;

use crate::grid::{Cell, Coordinate, Direction, Grid};

/// One depth-first frame: a carved cell and the directions left to try from
/// it, in the order they were shuffled when the cell was entered.
struct Frame {
    cell: Coordinate,
    directions: [Direction; 4],
    next: usize,
}

impl Frame {
    fn enter(cell: Coordinate, rng: &mut impl Rng) -> Self {
        let mut directions: [Direction; 4] = Direction::ALL;
        directions.shuffle(rng);
        Self {
            cell,
            directions,
            next: 0,
        }
    }
}

/// Carve a perfect maze into a grid of walls, starting at (1, 1).
pub(super) fn carve(grid: &mut Grid, rng: &mut impl Rng) {
    let origin: Coordinate = (1, 1);
    grid.set(origin, Cell::Passage);
    let mut stack: Vec<Frame> = vec![Frame::enter(origin, rng)];

    while let Some(frame) = stack.last_mut() {
        if frame.next == frame.directions.len() {
            stack.pop();
            continue;
        }
        let direction: Direction = frame.directions[frame.next];
        frame.next += 1;
        let cell: Coordinate = frame.cell;

        if let Some((mid, target)) = grid.neighbor_two(cell, direction)
            && grid.get(target) == Cell::Wall
        {
            grid.set(mid, Cell::Passage);
            grid.set(target, Cell::Passage);
            stack.push(Frame::enter(target, rng));
        }
    }
    debug!("Backtracker carved {} passages", grid.count(Cell::Passage));
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn carving_opens_every_lattice_cell() {
        let mut rng: StdRng = StdRng::seed_from_u64(3);
        let mut grid: Grid = Grid::all_walls(9, 7).unwrap();
        carve(&mut grid, &mut rng);

        // Every odd-indexed interior coordinate belongs to the spanning tree.
        for row in (1..grid.height()).step_by(2) {
            for col in (1..grid.width()).step_by(2) {
                assert_eq!(grid.get((row, col)), Cell::Passage, "at ({row}, {col})");
            }
        }
        // The border is untouched.
        assert_eq!(grid.get((0, 1)), Cell::Wall);
    }
}

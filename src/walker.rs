/*
walker.rs

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

//! Manual maze walking.
//!
//! A [`Walker`] owns the grid for the duration of the game and moves the
//! Player tag one cell at a time. A move into anything other than a passage
//! or the exit is refused and leaves the maze untouched; the caller prompts
//! again. The game ends when the player stands on the cell just inside the
//! exit, the same arrival convention as the automatic solver.

use std::fmt;

use crate::grid::{Cell, Coordinate, Direction, Grid};

/// Type of errors when moving the player.
#[derive(Debug, PartialEq)]
pub enum WalkError {
    /// The move runs into a wall or off the grid. Non-fatal: nothing moved.
    BlockedMove,
}

impl fmt::Display for WalkError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            WalkError::BlockedMove => write!(f, "blocked: there is a wall in that direction"),
        }
    }
}

/// A maze being solved by hand.
#[derive(Debug)]
pub struct Walker {
    /// The maze, owned for the duration of the game.
    grid: Grid,

    /// Current position of the player.
    position: Coordinate,
}

impl Walker {
    /// Take ownership of a maze and put the player on (1, 1).
    pub fn new(mut grid: Grid) -> Self {
        let position: Coordinate = (1, 1);
        grid.set(position, Cell::Player);
        Self { grid, position }
    }

    /// The maze, for rendering.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Current position of the player.
    pub fn position(&self) -> Coordinate {
        self.position
    }

    /// Move the player one cell in the given direction.
    ///
    /// # Errors
    ///
    /// The method returns [`WalkError::BlockedMove`] when the target cell is
    /// not a passage or the exit. The position and the maze are unchanged.
    pub fn step(&mut self, direction: Direction) -> Result<Coordinate, WalkError> {
        let Some(target) = self.grid.neighbor(self.position, direction) else {
            return Err(WalkError::BlockedMove);
        };
        match self.grid.get(target) {
            Cell::Passage | Cell::Exit => {
                self.grid.set(self.position, Cell::Passage);
                self.grid.set(target, Cell::Player);
                self.position = target;
                Ok(target)
            }
            _ => Err(WalkError::BlockedMove),
        }
    }

    /// Whether the player stands on the cell just inside the exit.
    pub fn reached_exit(&self) -> bool {
        self.position == self.grid.inner_exit()
    }

    /// Give the maze back, with the player mark wherever the game ended.
    pub fn into_grid(self) -> Grid {
        self.grid
    }
}

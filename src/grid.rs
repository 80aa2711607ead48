/*
grid.rs

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

//! Maze grid representation.
//!
//! A [`Grid`] is a rectangular matrix of [`Cell`] tags, `height` rows by
//! `width` columns, both odd and at least [`config::MIN_DIMENSION`].
//! The entrance is always at row 0, column 1, and the exit at the opposite
//! corner of the border, row `height - 1`, column `width - 2`.
//! Every other border cell is a wall.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::config;

/// Tag carried by each grid cell.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq)]
pub enum Cell {
    /// Solid, non-traversable cell.
    Wall,

    /// Open, traversable cell.
    Passage,

    /// Maze entrance, on the top border.
    Start,

    /// Maze exit, on the bottom border.
    Exit,

    /// Cell on the solver's current path.
    Visited,

    /// Current position of the player during manual solving.
    Player,
}

/// (row, column) position in a grid.
pub type Coordinate = (usize, usize);

/// Cardinal movement directions.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// The four directions, in a fixed order.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// The (row, column) offset of a one-cell move.
    pub fn offset(self) -> (isize, isize) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
        }
    }

    /// Map a WASD key to a direction.
    pub fn from_key(key: char) -> Option<Direction> {
        match key.to_ascii_lowercase() {
            'w' => Some(Direction::Up),
            's' => Some(Direction::Down),
            'a' => Some(Direction::Left),
            'd' => Some(Direction::Right),
            _ => None,
        }
    }
}

/// Type of errors when building a grid.
#[derive(Debug, PartialEq)]
pub enum GridError {
    /// The requested width or height is even or below the minimum.
    InvalidDimensions { width: usize, height: usize },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            GridError::InvalidDimensions { width, height } => write!(
                f,
                "invalid dimensions {width}x{height}: both must be odd numbers of at least {}",
                config::MIN_DIMENSION
            ),
        }
    }
}

impl std::error::Error for GridError {}

/// Rectangular matrix of [`Cell`] tags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    /// Cell tags, indexed by row and then column.
    cells: Vec<Vec<Cell>>,

    /// Number of columns.
    width: usize,

    /// Number of rows.
    height: usize,
}

impl Grid {
    /// Verify that the given dimensions are odd and at least the minimum.
    pub fn validate_dimensions(width: usize, height: usize) -> Result<(), GridError> {
        if width < config::MIN_DIMENSION
            || height < config::MIN_DIMENSION
            || width % 2 == 0
            || height % 2 == 0
        {
            return Err(GridError::InvalidDimensions { width, height });
        }
        Ok(())
    }

    /// Create a grid entirely filled with walls.
    ///
    /// # Errors
    ///
    /// The method returns an error if a dimension is even or below the
    /// minimum.
    pub fn all_walls(width: usize, height: usize) -> Result<Self, GridError> {
        Self::validate_dimensions(width, height)?;
        Ok(Self {
            cells: vec![vec![Cell::Wall; width]; height],
            width,
            height,
        })
    }

    /// Create a grid from a prebuilt tag matrix.
    ///
    /// # Errors
    ///
    /// The method returns an error if the matrix is not rectangular or if its
    /// dimensions are even or below the minimum.
    pub fn from_cells(cells: Vec<Vec<Cell>>) -> Result<Self, GridError> {
        let height: usize = cells.len();
        let width: usize = cells.first().map_or(0, Vec::len);
        if cells.iter().any(|row| row.len() != width) {
            return Err(GridError::InvalidDimensions { width, height });
        }
        Self::validate_dimensions(width, height)?;
        Ok(Self {
            cells,
            width,
            height,
        })
    }

    /// Number of columns.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of rows.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Total number of cells.
    pub fn total_cells(&self) -> usize {
        self.width * self.height
    }

    /// Tag of the cell at the given coordinate.
    pub fn get(&self, coordinate: Coordinate) -> Cell {
        self.cells[coordinate.0][coordinate.1]
    }

    /// Set the tag of the cell at the given coordinate.
    pub fn set(&mut self, coordinate: Coordinate, tag: Cell) {
        self.cells[coordinate.0][coordinate.1] = tag;
    }

    /// Whether the coordinate lies strictly inside the border.
    pub fn is_interior(&self, coordinate: Coordinate) -> bool {
        coordinate.0 >= 1
            && coordinate.0 < self.height - 1
            && coordinate.1 >= 1
            && coordinate.1 < self.width - 1
    }

    /// The coordinate one cell away in the given direction, or None when the
    /// move leaves the grid.
    pub fn neighbor(&self, from: Coordinate, direction: Direction) -> Option<Coordinate> {
        let (dr, dc) = direction.offset();
        let row: isize = from.0 as isize + dr;
        let col: isize = from.1 as isize + dc;
        if row >= 0 && (row as usize) < self.height && col >= 0 && (col as usize) < self.width {
            Some((row as usize, col as usize))
        } else {
            None
        }
    }

    /// The intermediate and target coordinates of a two-cell move in the
    /// given direction, or None when the target leaves the grid.
    pub fn neighbor_two(
        &self,
        from: Coordinate,
        direction: Direction,
    ) -> Option<(Coordinate, Coordinate)> {
        let (dr, dc) = direction.offset();
        let row: isize = from.0 as isize + 2 * dr;
        let col: isize = from.1 as isize + 2 * dc;
        if row >= 0 && (row as usize) < self.height && col >= 0 && (col as usize) < self.width {
            let mid: Coordinate = ((from.0 as isize + dr) as usize, (from.1 as isize + dc) as usize);
            Some((mid, (row as usize, col as usize)))
        } else {
            None
        }
    }

    /// Entrance coordinate, on the top border.
    pub fn start(&self) -> Coordinate {
        (0, 1)
    }

    /// Exit coordinate, on the bottom border.
    pub fn exit(&self) -> Coordinate {
        (self.height - 1, self.width - 2)
    }

    /// The interior cell just inside the exit. Reaching it ends both the
    /// automatic solver and a manual game.
    pub fn inner_exit(&self) -> Coordinate {
        (self.height - 2, self.width - 2)
    }

    /// Overwrite the entrance and exit cells with their tags. Generators call
    /// this last, after carving.
    pub fn stamp_endpoints(&mut self) {
        let start: Coordinate = self.start();
        let exit: Coordinate = self.exit();
        self.set(start, Cell::Start);
        self.set(exit, Cell::Exit);
    }

    /// Number of cells carrying the given tag.
    pub fn count(&self, tag: Cell) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|&&cell| cell == tag)
            .count()
    }

    /// Revert all Player and Visited marks to passages, so that the maze can
    /// be solved again.
    pub fn clear_marks(&mut self) {
        for row in &mut self.cells {
            for cell in row {
                if *cell == Cell::Player || *cell == Cell::Visited {
                    *cell = Cell::Passage;
                }
            }
        }
    }

    /// Iterate over the rows of the grid.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.iter().map(Vec::as_slice)
    }
}

/*
render.rs

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

//! Render a maze with symbol themes.
//!
//! A [`Theme`] maps each of the six cell tags to a display glyph. The same
//! table drives the plain text block, the CSV table, and the JSON
//! nested-array form; the file-writing side lives in [`crate::saver`].
//! [`from_text`] parses a text block back into a grid, so a saved maze can
//! be checked glyph by glyph.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;
use strum_macros::FromRepr;

use crate::grid::{Cell, Grid, GridError};

/// Symbol theme: the tag-to-glyph mapping table.
#[derive(
    Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Hash, ValueEnum, FromRepr, Default,
)]
#[repr(usize)]
pub enum Theme {
    /// `#` walls and blank passages.
    #[default]
    Default,

    /// Bullet walls.
    Dots,

    /// Full-block walls.
    Blocks,

    /// `1` walls and `0` passages.
    Binary,
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Theme::Default => write!(f, "default"),
            Theme::Dots => write!(f, "dots"),
            Theme::Blocks => write!(f, "blocks"),
            Theme::Binary => write!(f, "binary"),
        }
    }
}

impl Theme {
    /// The display glyph of a cell tag.
    pub fn glyph(self, cell: Cell) -> char {
        match cell {
            Cell::Wall => match self {
                Theme::Default => '#',
                Theme::Dots => '•',
                Theme::Blocks => '█',
                Theme::Binary => '1',
            },
            Cell::Passage => match self {
                Theme::Binary => '0',
                _ => ' ',
            },
            Cell::Start => 'S',
            Cell::Exit => 'E',
            Cell::Visited => '.',
            Cell::Player => 'P',
        }
    }

    /// The cell tag of a display glyph, or None when the glyph does not
    /// belong to this theme.
    pub fn cell(self, glyph: char) -> Option<Cell> {
        for cell in [
            Cell::Wall,
            Cell::Passage,
            Cell::Start,
            Cell::Exit,
            Cell::Visited,
            Cell::Player,
        ] {
            if self.glyph(cell) == glyph {
                return Some(cell);
            }
        }
        None
    }
}

/// Type of errors when reading back a rendered maze.
#[derive(Debug, PartialEq)]
pub enum ParseError {
    /// A character does not belong to the theme's glyph table.
    UnknownGlyph(char),

    /// The glyph matrix does not form a valid grid.
    BadShape(GridError),
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ParseError::UnknownGlyph(glyph) => write!(f, "unknown glyph {glyph:?}"),
            ParseError::BadShape(error) => write!(f, "{error}"),
        }
    }
}

impl std::error::Error for ParseError {}

/// Render a maze as a text block, one line per row.
pub fn to_text(grid: &Grid, theme: Theme) -> String {
    grid.rows()
        .map(|row| row.iter().map(|&cell| theme.glyph(cell)).collect::<String>())
        .collect::<Vec<String>>()
        .join("\n")
}

/// Parse a text block rendered by [`to_text`] back into a grid.
///
/// # Errors
///
/// The function returns an error if a glyph does not belong to the theme or
/// if the lines do not form a valid grid.
pub fn from_text(text: &str, theme: Theme) -> Result<Grid, ParseError> {
    let mut cells: Vec<Vec<Cell>> = Vec::new();
    for line in text.lines() {
        let mut row: Vec<Cell> = Vec::with_capacity(line.chars().count());
        for glyph in line.chars() {
            row.push(theme.cell(glyph).ok_or(ParseError::UnknownGlyph(glyph))?);
        }
        cells.push(row);
    }
    Grid::from_cells(cells).map_err(ParseError::BadShape)
}

/// Render a maze as a row-major CSV table of glyphs.
pub fn to_csv(grid: &Grid, theme: Theme) -> String {
    let mut out: String = String::new();
    for row in grid.rows() {
        let line: Vec<String> = row
            .iter()
            .map(|&cell| theme.glyph(cell).to_string())
            .collect();
        out.push_str(&line.join(","));
        out.push('\n');
    }
    out
}

/// Render a maze as a JSON nested array of glyph strings.
pub fn to_json(grid: &Grid, theme: Theme) -> serde_json::Result<String> {
    let rows: Vec<Vec<String>> = grid
        .rows()
        .map(|row| {
            row.iter()
                .map(|&cell| theme.glyph(cell).to_string())
                .collect()
        })
        .collect();
    serde_json::to_string(&rows)
}

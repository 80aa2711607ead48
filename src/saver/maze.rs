/*
maze.rs

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

//! Write a rendered maze to files.
//!
//! The serialization formats themselves live in [`crate::render`]; this
//! module only handles the file I/O.

use log::debug;
use std::error::Error;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::grid::Grid;
use crate::render::{self, Theme};

/// Save a maze as a text block in the given theme.
pub fn save_text(grid: &Grid, theme: Theme, path: &Path) -> Result<(), Box<dyn Error>> {
    debug!("Saving maze text to {path:?}");
    let file: File = File::create(path)?;
    let mut writer: BufWriter<File> = BufWriter::new(file);
    writer.write_all(render::to_text(grid, theme).as_bytes())?;
    writer.write_all(b"\n")?;
    writer.flush()?;
    Ok(())
}

/// Export a maze as a row-major CSV table of glyphs.
pub fn export_csv(grid: &Grid, theme: Theme, path: &Path) -> Result<(), Box<dyn Error>> {
    debug!("Exporting maze CSV to {path:?}");
    let file: File = File::create(path)?;
    let mut writer: BufWriter<File> = BufWriter::new(file);
    writer.write_all(render::to_csv(grid, theme).as_bytes())?;
    writer.flush()?;
    Ok(())
}

/// Export a maze as a JSON nested array of glyph strings.
pub fn export_json(grid: &Grid, theme: Theme, path: &Path) -> Result<(), Box<dyn Error>> {
    debug!("Exporting maze JSON to {path:?}");
    let file: File = File::create(path)?;
    let mut writer: BufWriter<File> = BufWriter::new(file);
    writer.write_all(render::to_json(grid, theme)?.as_bytes())?;
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::Cell;
    use std::fs;
    use std::path::PathBuf;

    fn temp_path(name: &str) -> PathBuf {
        let mut path: PathBuf = std::env::temp_dir();
        path.push(format!("mazeterm-test-{}-{name}", std::process::id()));
        path
    }

    #[test]
    fn saved_text_parses_back_to_the_same_maze() {
        let mut grid: Grid = Grid::all_walls(7, 7).unwrap();
        grid.set((1, 1), Cell::Passage);
        grid.stamp_endpoints();

        let path: PathBuf = temp_path("maze.txt");
        save_text(&grid, Theme::Default, &path).unwrap();
        let text: String = fs::read_to_string(&path).unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!(render::from_text(text.trim_end(), Theme::Default).unwrap(), grid);
    }
}

/*
preferences.rs

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

//! Save and restore the user's preferences.
//!
//! The preferences are the settings the interactive session proposes as
//! defaults: dimensions, algorithm, and theme. They are stored as a JSON
//! serialization of the [`Preferences`] object by using [`serde`]. A missing
//! file simply means no saved preferences.

use log::debug;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fs::{File, remove_file};
use std::io::{BufReader, BufWriter, ErrorKind, Write};
use std::path::PathBuf;

use crate::config;
use crate::generator::Algorithm;
use crate::render::Theme;

/// Settings remembered between sessions.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Preferences {
    /// Preferred maze width.
    pub width: usize,

    /// Preferred maze height.
    pub height: usize,

    /// Preferred generation algorithm.
    pub algorithm: Algorithm,

    /// Preferred symbol theme.
    pub theme: Theme,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            width: 21,
            height: 15,
            algorithm: Algorithm::default(),
            theme: Theme::default(),
        }
    }
}

/// Object to save and restore the user preferences.
pub struct SaverPreferences {
    /// Absolute path to the preferences file.
    pref_file: PathBuf,
}

impl SaverPreferences {
    /// Create a [`SaverPreferences`] object.
    ///
    /// The provided [`PathBuf`] is the path to the directory where the
    /// preferences must be saved.
    pub fn new(mut data_dir: PathBuf) -> Self {
        data_dir.push(config::PREFERENCES_FILE);
        debug!("Preferences file: {data_dir:?}");
        SaverPreferences {
            pref_file: data_dir,
        }
    }

    /// Retrieve the saved [`Preferences`] object.
    ///
    /// Return None if there is no preferences file.
    pub fn get(&self) -> Result<Option<Preferences>, Box<dyn Error>> {
        let file: File;
        match File::open(&self.pref_file) {
            Ok(f) => file = f,
            Err(error) => match error.kind() {
                ErrorKind::NotFound => return Ok(None),
                _ => return Err(Box::new(error)),
            },
        }
        let reader: BufReader<File> = BufReader::new(file);
        let preferences: Preferences = serde_json::from_reader(reader)?;
        Ok(Some(preferences))
    }

    /// Save the provided [`Preferences`] object.
    pub fn save(&self, preferences: &Preferences) -> Result<(), Box<dyn Error>> {
        let file: File = File::create(&self.pref_file)?;
        let mut writer: BufWriter<File> = BufWriter::new(file);

        serde_json::to_writer(&mut writer, preferences)?;
        writer.flush()?;
        Ok(())
    }

    /// Delete the preferences file.
    pub fn delete(&self) {
        let _ = remove_file(&self.pref_file);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn temp_saver(name: &str) -> SaverPreferences {
        let mut dir: PathBuf = std::env::temp_dir();
        dir.push(format!("mazeterm-prefs-{}-{name}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        SaverPreferences::new(dir)
    }

    #[test]
    fn missing_file_means_no_preferences() {
        let saver: SaverPreferences = temp_saver("missing");
        saver.delete();
        assert_eq!(saver.get().unwrap(), None);
    }

    #[test]
    fn preferences_round_trip() {
        let saver: SaverPreferences = temp_saver("roundtrip");
        let preferences: Preferences = Preferences {
            width: 9,
            height: 11,
            algorithm: Algorithm::Prim,
            theme: Theme::Blocks,
        };
        saver.save(&preferences).unwrap();
        assert_eq!(saver.get().unwrap(), Some(preferences));
        saver.delete();
        assert_eq!(saver.get().unwrap(), None);
    }
}

/*
event_log.rs

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

//! Append user actions to the session log file.
//!
//! Each line records a local timestamp and a message, for example:
//!
//! ```text
//! 2026-02-14 18:03:52 - Maze generated using backtracker algorithm with dimensions 21x15
//! ```
//!
//! This log is user-facing history, always on, separate from the `log` crate
//! diagnostics enabled by `--debug`.

use chrono::Local;
use log::debug;
use std::error::Error;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;

use crate::config;

/// Object to append actions to the session log file.
pub struct EventLog {
    /// Absolute path to the log file.
    log_file: PathBuf,
}

impl EventLog {
    /// Create an [`EventLog`] object.
    ///
    /// The provided [`PathBuf`] is the path to the directory holding the
    /// log file.
    pub fn new(mut data_dir: PathBuf) -> Self {
        data_dir.push(config::EVENT_LOG_FILE);
        debug!("Event log file: {data_dir:?}");
        EventLog { log_file: data_dir }
    }

    /// Append a timestamped message to the log file.
    pub fn append(&self, message: &str) -> Result<(), Box<dyn Error>> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.log_file)?;
        writeln!(
            file,
            "{} - {message}",
            Local::now().format("%Y-%m-%d %H:%M:%S")
        )?;
        Ok(())
    }
}

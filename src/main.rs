/*
main.rs

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

mod analyzer;
mod cli_options;
mod config;
mod event_log;
mod generator;
mod grid;
mod render;
mod saver;
mod session;
mod solver;
mod walker;

use std::process::ExitCode;

fn main() -> ExitCode {
    // Batch mode handles one maze and exits; otherwise run the interactive
    // session with the seed from the command line, if any.
    let mut seed: Option<u64> = None;
    if let Some(ret) = cli_options::parse(&mut seed) {
        return ExitCode::from(ret);
    }

    match session::run(seed) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("Error: {error}");
            ExitCode::FAILURE
        }
    }
}

/*
config.rs

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

//! Application constants.

/// Application name, as displayed in prompts and version output.
pub const APP_NAME: &str = "Mazeterm";

/// Notice printed by `--version`.
pub const COPYRIGHT_NOTICE: &str = "Copyright 2026 The Mazeterm Authors
License GPLv3+: GNU GPL version 3 or later <https://gnu.org/licenses/gpl.html>
This is free software: you are free to change and redistribute it.
There is NO WARRANTY, to the extent permitted by law.";

/// Minimum maze width and height. Both dimensions must also be odd.
pub const MIN_DIMENSION: usize = 7;

/// Probability that the uniform-random generator carves an interior cell.
pub const UNIFORM_PASSAGE_PROBABILITY: f64 = 0.7;

/// File holding the user preferences, in the working directory.
pub const PREFERENCES_FILE: &str = "user_preferences.json";

/// File receiving the timestamped action log, in the working directory.
pub const EVENT_LOG_FILE: &str = "maze_log.txt";

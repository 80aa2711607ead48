/*
session.rs

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

//! Interactive terminal session.
//!
//! The session drives the whole program flow: ask for dimensions (and ask
//! again until they are odd and large enough), pick the algorithm and the
//! symbol theme, generate and print the maze, show its statistics, then
//! offer to save it, survey it, and solve it manually (WASD keys) or
//! automatically. The chosen settings become the defaults of the next
//! session through [`SaverPreferences`], and every notable action lands in
//! the [`EventLog`].

use log::debug;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::error::Error;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use crate::analyzer::{self, Statistics};
use crate::config;
use crate::event_log::EventLog;
use crate::generator::{self, Algorithm};
use crate::grid::{Coordinate, Direction, Grid};
use crate::render::{self, Theme};
use crate::saver::maze;
use crate::saver::preferences::{Preferences, SaverPreferences};
use crate::solver;
use crate::walker::{WalkError, Walker};

/// Run the interactive session until the user quits.
pub fn run(seed: Option<u64>) -> Result<(), Box<dyn Error>> {
    let data_dir: PathBuf = std::env::current_dir()?;
    let saver: SaverPreferences = SaverPreferences::new(data_dir.clone());
    let event_log: EventLog = EventLog::new(data_dir);
    let mut rng: StdRng = match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_os_rng(),
    };

    println!("Welcome to {}!", config::APP_NAME);

    let mut preferences: Preferences = match saver.get() {
        Ok(Some(p)) => p,
        Ok(None) => Preferences::default(),
        Err(error) => {
            eprintln!("Cannot read the saved preferences: {error}");
            Preferences::default()
        }
    };

    let stdin = io::stdin();
    let mut input = stdin.lock();

    loop {
        let (width, height) = ask_dimensions(&mut input, &preferences)?;
        let algorithm: Algorithm = ask_algorithm(&mut input, preferences.algorithm)?;
        let theme: Theme = ask_theme(&mut input, preferences.theme)?;
        preferences = Preferences {
            width,
            height,
            algorithm,
            theme,
        };

        let mut grid: Grid = generator::generate(width, height, algorithm, &mut rng)?;
        event_log.append(&format!(
            "Maze generated using {algorithm} algorithm with dimensions {width}x{height}"
        ))?;

        println!("\nGenerated maze:");
        println!("{}", render::to_text(&grid, theme));
        print_statistics(&grid);

        if ask_yes_no(&mut input, "Save the maze to a file?")? {
            save_maze(&mut input, &grid, theme, &event_log)?;
        }

        if ask_yes_no(&mut input, "Survey path lengths and bottlenecks?")? {
            print_survey(&grid);
        }

        while ask_yes_no(&mut input, "Solve the maze?")? {
            if ask_yes_no(&mut input, "Solve manually? (no for automatic)")? {
                grid = solve_manually(&mut input, grid, theme)?;
                event_log.append("User solved maze manually.")?;
            } else {
                solve_automatically(&mut grid, theme, &event_log)?;
            }
            if !ask_yes_no(&mut input, "Reset the maze and try again?")? {
                break;
            }
            grid.clear_marks();
            println!("Maze reset.");
            println!("{}", render::to_text(&grid, theme));
        }

        if !ask_yes_no(&mut input, "Generate another maze?")? {
            break;
        }
    }

    saver.save(&preferences)?;
    println!("Preferences saved.");
    Ok(())
}

/// Print a message and read one trimmed line of input.
fn prompt(input: &mut impl BufRead, message: &str) -> io::Result<String> {
    print!("{message} ");
    io::stdout().flush()?;
    let mut line: String = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "end of input"));
    }
    Ok(line.trim().to_string())
}

/// Parse one dimension; an empty answer selects the default.
fn parse_dimension(line: &str, default: usize) -> Option<usize> {
    if line.is_empty() {
        return Some(default);
    }
    line.parse().ok()
}

/// Ask for the maze width and height until both are odd and large enough.
fn ask_dimensions(
    input: &mut impl BufRead,
    preferences: &Preferences,
) -> io::Result<(usize, usize)> {
    loop {
        let width_line: String = prompt(
            input,
            &format!(
                "Maze width (odd number >= {}) [{}]:",
                config::MIN_DIMENSION,
                preferences.width
            ),
        )?;
        let height_line: String = prompt(
            input,
            &format!(
                "Maze height (odd number >= {}) [{}]:",
                config::MIN_DIMENSION,
                preferences.height
            ),
        )?;
        let (Some(width), Some(height)) = (
            parse_dimension(&width_line, preferences.width),
            parse_dimension(&height_line, preferences.height),
        ) else {
            println!("Please enter valid integers for width and height.");
            continue;
        };
        match Grid::validate_dimensions(width, height) {
            Ok(()) => return Ok((width, height)),
            Err(error) => println!("{error}"),
        }
    }
}

/// Ask for the generation algorithm by number.
fn ask_algorithm(input: &mut impl BufRead, default: Algorithm) -> io::Result<Algorithm> {
    println!("Select the generation algorithm:");
    println!("  1: backtracker (perfect maze)");
    println!("  2: prim");
    println!("  3: uniform (may be unsolvable)");
    loop {
        let line: String = prompt(input, &format!("Choice (1-3) [{default}]:"))?;
        if line.is_empty() {
            return Ok(default);
        }
        if let Ok(choice) = line.parse::<usize>()
            && choice >= 1
            && let Some(algorithm) = Algorithm::from_repr(choice - 1)
        {
            return Ok(algorithm);
        }
        println!("Please enter 1, 2, or 3.");
    }
}

/// Ask for the symbol theme by number.
fn ask_theme(input: &mut impl BufRead, default: Theme) -> io::Result<Theme> {
    println!("Select the symbol theme:");
    println!("  1: default");
    println!("  2: dots");
    println!("  3: blocks");
    println!("  4: binary");
    loop {
        let line: String = prompt(input, &format!("Choice (1-4) [{default}]:"))?;
        if line.is_empty() {
            return Ok(default);
        }
        if let Ok(choice) = line.parse::<usize>()
            && choice >= 1
            && let Some(theme) = Theme::from_repr(choice - 1)
        {
            return Ok(theme);
        }
        println!("Please enter a number between 1 and 4.");
    }
}

/// Ask a yes/no question until the answer is y or n.
fn ask_yes_no(input: &mut impl BufRead, message: &str) -> io::Result<bool> {
    loop {
        let line: String = prompt(input, &format!("{message} (y/n)"))?;
        match line.to_ascii_lowercase().as_str() {
            "y" | "yes" => return Ok(true),
            "n" | "no" => return Ok(false),
            _ => println!("Please answer y or n."),
        }
    }
}

/// Print the statistics snapshot of a maze.
fn print_statistics(grid: &Grid) {
    let statistics: Statistics = analyzer::analyze(grid);
    println!("Maze statistics:");
    println!(" - Walls: {}", statistics.walls);
    println!(" - Passages: {}", statistics.passages);
    println!(" - Total cells: {}", statistics.total_cells);
    println!(" - Dead ends: {}", statistics.dead_ends);
    println!(" - Loops: {}", statistics.loops);
    println!(" - Start position: {:?}", grid.start());
    println!(" - Exit position: {:?}", grid.exit());
    println!(" - Difficulty: {}", statistics.difficulty);
}

/// Print the path-length survey and the bottleneck list.
fn print_survey(grid: &Grid) {
    let lengths: Vec<usize> = analyzer::survey_path_lengths(grid);
    if lengths.is_empty() {
        println!("No passage cell can reach the exit.");
    } else {
        let total: usize = lengths.iter().sum();
        println!(
            "Path lengths to the exit: {} reachable cells, {} to {} hops, {:.1} on average",
            lengths.len(),
            lengths.iter().min().unwrap(),
            lengths.iter().max().unwrap(),
            total as f64 / lengths.len() as f64
        );
    }
    let bottlenecks: Vec<Coordinate> = analyzer::bottlenecks(grid);
    println!("Bottlenecks (dead ends): {bottlenecks:?}");
}

/// Ask for a file name and save the maze, with optional CSV or JSON export.
fn save_maze(
    input: &mut impl BufRead,
    grid: &Grid,
    theme: Theme,
    event_log: &EventLog,
) -> Result<(), Box<dyn Error>> {
    let filename: String = prompt(input, "Enter the filename (with .txt extension):")?;
    if filename.is_empty() {
        println!("No filename provided, skipping.");
        return Ok(());
    }
    maze::save_text(grid, theme, filename.as_ref())?;
    println!("Maze saved to {filename}");

    let export: String = prompt(input, "Also export as CSV or JSON? (csv/json/n)")?;
    match export.to_ascii_lowercase().as_str() {
        "csv" => {
            let path: String = filename.replace(".txt", ".csv");
            maze::export_csv(grid, theme, path.as_ref())?;
            println!("Maze exported to {path}");
        }
        "json" => {
            let path: String = filename.replace(".txt", ".json");
            maze::export_json(grid, theme, path.as_ref())?;
            println!("Maze exported to {path}");
        }
        _ => (),
    }
    event_log.append(&format!("Maze saved and exported to {filename}"))?;
    Ok(())
}

/// Let the user walk the maze with the WASD keys until the exit is reached.
fn solve_manually(input: &mut impl BufRead, grid: Grid, theme: Theme) -> io::Result<Grid> {
    let mut walker: Walker = Walker::new(grid);
    println!("{}", render::to_text(walker.grid(), theme));

    while !walker.reached_exit() {
        let line: String = prompt(input, "Move (WASD):")?;
        let Some(direction) = line.chars().next().and_then(Direction::from_key) else {
            println!("Invalid move. Use W for up, A for left, S for down, and D for right.");
            continue;
        };
        match walker.step(direction) {
            Ok(position) => debug!("Player moved to {position:?}"),
            Err(WalkError::BlockedMove) => println!("{}", WalkError::BlockedMove),
        }
        println!("{}", render::to_text(walker.grid(), theme));
    }

    debug!("Player reached the exit at {:?}", walker.position());
    println!("Congratulations! You solved the maze!");
    Ok(walker.into_grid())
}

/// Run the automatic solver and print the solution path, if any.
fn solve_automatically(
    grid: &mut Grid,
    theme: Theme,
    event_log: &EventLog,
) -> Result<(), Box<dyn Error>> {
    match solver::solve(grid) {
        Some(path) => {
            println!("\nMaze solved! Solution path:");
            println!("{}", render::to_text(grid, theme));
            for step in &path {
                println!("Step: {step:?}");
            }
            println!("Solution length: {}", path.len());
            event_log.append("Maze solved automatically.")?;
        }
        None => {
            println!("\nNo solution found.");
            event_log.append("Maze solving failed.")?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn dimensions_are_asked_again_until_valid() {
        // Even, too small, then valid.
        let mut input = Cursor::new("8\n9\n5\n5\n9\n11\n".as_bytes());
        let preferences: Preferences = Preferences::default();
        let (width, height) = ask_dimensions(&mut input, &preferences).unwrap();
        assert_eq!((width, height), (9, 11));
    }

    #[test]
    fn empty_answers_select_the_preferred_dimensions() {
        let mut input = Cursor::new("\n\n".as_bytes());
        let preferences: Preferences = Preferences::default();
        let (width, height) = ask_dimensions(&mut input, &preferences).unwrap();
        assert_eq!((width, height), (preferences.width, preferences.height));
    }

    #[test]
    fn algorithms_are_selected_by_number() {
        let mut input = Cursor::new("0\n2\n".as_bytes());
        let algorithm: Algorithm = ask_algorithm(&mut input, Algorithm::Backtracker).unwrap();
        assert_eq!(algorithm, Algorithm::Prim);

        let mut input = Cursor::new("\n".as_bytes());
        let algorithm: Algorithm = ask_algorithm(&mut input, Algorithm::Uniform).unwrap();
        assert_eq!(algorithm, Algorithm::Uniform);
    }

    #[test]
    fn yes_no_answers_are_validated() {
        let mut input = Cursor::new("maybe\nY\n".as_bytes());
        assert!(ask_yes_no(&mut input, "Continue?").unwrap());
        let mut input = Cursor::new("no\n".as_bytes());
        assert!(!ask_yes_no(&mut input, "Continue?").unwrap());
    }

    #[test]
    fn end_of_input_is_an_error_not_a_loop() {
        let mut input = Cursor::new("".as_bytes());
        assert!(ask_yes_no(&mut input, "Continue?").is_err());
    }
}

/*
cli_options.rs

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

//! Process command-line options.
//!
//! Without options, Mazeterm starts the interactive session. With `--width`
//! and `--height`, it runs in batch mode: generate one maze, print it to
//! stdout, and optionally print the statistics, the solution, and the
//! path-length survey. Batch mode is scriptable; `--seed` makes the output
//! reproducible.
//!
//! # Examples
//!
//! Generate a reproducible maze and solve it:
//!
//! ```text
//! $ mazeterm --width 21 --height 15 --algorithm backtracker --seed 7 --solve
//! ```
//!
//! Inspect the structure of a random Prim maze:
//!
//! ```text
//! $ mazeterm --width 31 --height 21 --algorithm prim --stats --survey
//! ```

use clap::Parser;
use log::debug;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::env;

use crate::analyzer;
use crate::config::COPYRIGHT_NOTICE;
use crate::generator::{self, Algorithm};
use crate::grid::Grid;
use crate::render::{self, Theme};
use crate::solver;

/// Generate, analyze, and solve terminal mazes.
#[derive(Parser)]
#[command(about, long_about = None, version, long_version = COPYRIGHT_NOTICE)]
struct Args {
    /// Maze width (odd number >= 7); enables batch mode
    #[arg(short = 'W', long, requires = "height")]
    width: Option<usize>,

    /// Maze height (odd number >= 7); enables batch mode
    #[arg(short = 'H', long, requires = "width")]
    height: Option<usize>,

    /// Generation algorithm
    #[arg(value_enum, short, long, default_value_t = Algorithm::Backtracker)]
    algorithm: Algorithm,

    /// Symbol theme for the printed maze
    #[arg(value_enum, short, long, default_value_t = Theme::Default)]
    theme: Theme,

    /// Seed for the random generator, for reproducible mazes
    #[arg(short, long)]
    seed: Option<u64>,

    /// Print the maze statistics
    #[arg(long, default_value_t = false)]
    stats: bool,

    /// Solve the maze and print the solution path
    #[arg(long, default_value_t = false)]
    solve: bool,

    /// Print the path-length survey and the bottleneck list
    #[arg(long, default_value_t = false)]
    survey: bool,

    /// Enable debug messages
    #[arg(short, long, default_value_t = false)]
    debug: bool,
}

/// Parse and process command-line options.
///
/// Return the process exit code in batch mode, or None when the interactive
/// session must run. The selected seed for the interactive session is
/// returned through `session_seed`.
pub fn parse(session_seed: &mut Option<u64>) -> Option<u8> {
    let args: Args = Args::parse();

    if args.debug {
        unsafe {
            env::set_var("RUST_LOG", "debug");
        }
    }
    env_logger::init();

    *session_seed = args.seed;
    let (Some(width), Some(height)) = (args.width, args.height) else {
        return None;
    };

    let mut rng: StdRng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    let mut grid: Grid = match generator::generate(width, height, args.algorithm, &mut rng) {
        Ok(grid) => grid,
        Err(error) => {
            eprintln!("Error: {error}");
            return Some(1);
        }
    };
    debug!(
        "Batch mode: {width}x{height}, algorithm {}, theme {}",
        args.algorithm, args.theme
    );

    // Analysis runs before solving, so the counts are not skewed by the
    // Visited marks of the solution path.
    if args.stats {
        let statistics = analyzer::analyze(&grid);
        println!("Walls: {}", statistics.walls);
        println!("Passages: {}", statistics.passages);
        println!("Total cells: {}", statistics.total_cells);
        println!("Dead ends: {}", statistics.dead_ends);
        println!("Loops: {}", statistics.loops);
        println!("Difficulty: {}", statistics.difficulty);
    }

    if args.survey {
        let lengths: Vec<usize> = analyzer::survey_path_lengths(&grid);
        println!("Reachable cells: {}", lengths.len());
        if let (Some(min), Some(max)) = (lengths.iter().min(), lengths.iter().max()) {
            println!("Hops to the exit: {min} to {max}");
        }
        println!("Bottlenecks: {:?}", analyzer::bottlenecks(&grid));
    }

    if args.solve {
        let solution: Option<Vec<_>> = solver::solve(&mut grid);
        println!("{}", render::to_text(&grid, args.theme));
        match solution {
            Some(path) => println!("Solution length: {}", path.len()),
            None => println!("No solution found."),
        }
    } else {
        println!("{}", render::to_text(&grid, args.theme));
    }

    Some(0)
}

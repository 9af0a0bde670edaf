#![allow(clippy::cast_precision_loss)]

use clap::{Args, CommandFactory, Parser, Subcommand};
use rustc_hash::FxHashMap;
use std::io;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};
use sudoku_solver::sudoku::grid::{EXAMPLE, Grid};
use sudoku_solver::sudoku::parse;
use sudoku_solver::sudoku::rules;
use sudoku_solver::sudoku::solver::{Backtracking, Engine, Outcome, SearchStats};
use tikv_jemalloc_ctl::{epoch, stats};

/// Defines the command-line interface for the sudoku solver application.
///
/// Uses `clap` for parsing arguments.
#[derive(Parser, Debug)]
#[command(
    name = "sudoku-solver",
    version,
    about = "A Sudoku solver based on backtracking search"
)]
pub(crate) struct Cli {
    /// An optional global path argument. If provided without a subcommand,
    /// it's treated as the path to a puzzle file to solve.
    #[arg(global = true)]
    puzzle: Option<PathBuf>,

    /// Specifies the subcommand to execute (e.g. `file`, `text`, `example`, `dir`).
    #[clap(subcommand)]
    command: Option<Commands>,

    /// Common options applicable to all commands.
    #[command(flatten)]
    common: CommonOptions,
}

/// Enumerates the available subcommands for the sudoku solver.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Solve a puzzle file.
    File {
        /// Path to the puzzle file. The format of this file is defined by the
        /// `sudoku::parse` module.
        #[arg(long)]
        path: PathBuf,

        /// Common options for this subcommand.
        #[command(flatten)]
        common: CommonOptions,
    },

    /// Solve a puzzle provided as plain text.
    Text {
        /// Literal puzzle input as a string, e.g. the 81-character form
        /// "002008000000003762..." with 0 or . marking empty cells.
        #[arg(short, long)]
        input: String,

        /// Common options for this subcommand.
        #[command(flatten)]
        common: CommonOptions,
    },

    /// Solve the built-in example puzzle.
    Example {
        /// Common options for this subcommand.
        #[command(flatten)]
        common: CommonOptions,
    },

    /// Solve every `.sudoku` puzzle file under a directory.
    Dir {
        /// Path to the directory to sweep.
        #[arg(long)]
        path: PathBuf,

        /// Common options for this subcommand.
        #[command(flatten)]
        common: CommonOptions,
    },

    /// Generate shell completion scripts.
    Completions {
        /// The shell to generate completions for.
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

/// Defines common command-line options shared across different subcommands.
#[derive(Args, Debug, Default, Clone)]
struct CommonOptions {
    /// Enable debug output, providing more verbose logging during the solving process.
    #[arg(short, long, default_value_t = false)]
    debug: bool,

    /// Enable verification of the solved grid against the Sudoku rules.
    #[arg(short, long, default_value_t = true)]
    verify: bool,

    /// Enable printing of performance and problem statistics after solving.
    #[arg(short, long, default_value_t = true)]
    stats: bool,
}

/// Parses the command line and dispatches to the appropriate handler.
pub(crate) fn run() {
    let cli = Cli::parse();

    // A bare path without a subcommand defaults to solving a puzzle file.
    if let Some(path) = cli.puzzle.clone() {
        if cli.command.is_none() {
            solve_path(&path, &cli.common);
            return;
        }
    }

    match cli.command {
        Some(Commands::File { path, common }) => solve_path(&path, &common),

        Some(Commands::Text { input, common }) => {
            let time = Instant::now();
            match parse::parse_str(&input) {
                Ok(grid) => {
                    let parse_time = time.elapsed();
                    solve_and_report(grid, &common, None, parse_time);
                }
                Err(e) => {
                    eprintln!("Error parsing puzzle text: {e}");
                    std::process::exit(1);
                }
            }
        }

        Some(Commands::Example { common }) => {
            solve_and_report(Grid::new(EXAMPLE), &common, None, Duration::ZERO);
        }

        Some(Commands::Dir { path, common }) => solve_dir(&path, &common),

        Some(Commands::Completions { shell }) => {
            clap_complete::generate(
                shell,
                &mut Cli::command(),
                "sudoku-solver",
                &mut io::stdout(),
            );
        }

        None => {
            // Reached only if no subcommand and no global path were given.
            eprintln!("No command provided. Use --help for more information.");
            std::process::exit(1);
        }
    }
}

/// Parses the puzzle file at `path` and solves it, exiting on parse errors.
fn solve_path(path: &Path, common: &CommonOptions) {
    let time = Instant::now();
    match parse::parse_file(path) {
        Ok(grid) => {
            let parse_time = time.elapsed();
            solve_and_report(grid, common, Some(path), parse_time);
        }
        Err(e) => {
            eprintln!("Error parsing puzzle file: {e}");
            std::process::exit(1);
        }
    }
}

/// Solves a directory of puzzle files.
///
/// Iterates over all `.sudoku` files under the directory, parses and solves
/// each one, reports per-puzzle results and prints an aggregate summary.
fn solve_dir(path: &Path, common: &CommonOptions) {
    if !path.is_dir() {
        eprintln!("Provided path is not a directory: {}", path.display());
        std::process::exit(1);
    }

    let mut outcomes: FxHashMap<PathBuf, Outcome> = FxHashMap::default();

    for entry in walkdir::WalkDir::new(path)
        .into_iter()
        .filter_map(Result::ok)
    {
        let file_path = entry.path().to_path_buf();

        if !file_path.is_file() {
            continue;
        }

        if file_path.extension().is_none_or(|ext| ext != "sudoku") {
            eprintln!("Skipping non-puzzle file: {}", file_path.display());
            continue;
        }

        let time = Instant::now();
        match parse::parse_file(&file_path) {
            Ok(grid) => {
                let parse_time = time.elapsed();
                let outcome = solve_and_report(grid, common, Some(&file_path), parse_time);
                outcomes.insert(file_path, outcome);
            }
            Err(e) => {
                eprintln!("Error parsing puzzle file {}: {e}", file_path.display());
            }
        }
    }

    let solved = outcomes.values().filter(|o| o.is_solved()).count();

    println!("\n=======================[ Directory Summary ]=========================");
    stat_line("Puzzles", outcomes.len());
    stat_line("Solved", solved);
    stat_line("Unsolvable", outcomes.len() - solved);
    println!("=====================================================================");
}

/// Solves one parsed puzzle and reports results including stats and
/// verification. Returns the outcome so batch runs can aggregate it.
fn solve_and_report(
    mut grid: Grid,
    common: &CommonOptions,
    label: Option<&Path>,
    parse_time: Duration,
) -> Outcome {
    if let Some(name) = label {
        println!("Solving: {}", name.display());
    }

    println!("\nPuzzle to solve:\n{grid}");

    // Counts must be captured before the grid is filled in.
    let clues = grid.given_count();
    let empties = grid.empty_count();

    if common.debug {
        println!("Puzzle: {}", parse::to_line(&grid));
        println!("Clues: {clues}");
        println!("Empty cells: {empties}");
    }

    epoch::advance().unwrap();

    let time = Instant::now();
    let mut engine = Backtracking::new(&mut grid);

    if common.debug {
        println!("First empty cell: {:?}", engine.next_cell());
    }

    let outcome = engine.solve();
    let search_stats = engine.stats();
    let elapsed = time.elapsed();

    if common.debug {
        println!("Outcome: {outcome:?}");
        println!("Time: {elapsed:?}");
    }

    epoch::advance().unwrap();

    let allocated_bytes = stats::allocated::mib().unwrap().read().unwrap();
    let resident_bytes = stats::resident::mib().unwrap().read().unwrap();
    let allocated_mib = allocated_bytes as f64 / (1024.0 * 1024.0);
    let resident_mib = resident_bytes as f64 / (1024.0 * 1024.0);

    if common.verify {
        verify_solution(&grid, outcome);
    }

    if common.stats {
        print_stats(
            parse_time,
            elapsed,
            clues,
            empties,
            search_stats,
            allocated_mib,
            resident_mib,
            outcome,
        );
    }

    match outcome {
        Outcome::Solved => println!("\nSolved puzzle:\n{grid}"),
        Outcome::Unsolvable => println!("\nThe provided puzzle is unsolvable."),
    }

    outcome
}

/// Verifies a solved grid against the Sudoku rules.
///
/// Prints whether the verification was successful. If verification fails, it
/// panics. For an unsolvable outcome there is nothing to verify and
/// "UNSOLVABLE" is printed.
fn verify_solution(grid: &Grid, outcome: Outcome) {
    if outcome.is_solved() {
        let ok = rules::is_solved(grid);
        println!("Verified: {ok:?}");
        assert!(ok, "Solution failed verification!");
    } else {
        println!("UNSOLVABLE");
    }
}

/// Prints a summary of problem and search statistics.
#[allow(clippy::too_many_arguments)]
fn print_stats(
    parse_time: Duration,
    elapsed: Duration,
    clues: usize,
    empties: usize,
    s: SearchStats,
    allocated: f64, // MiB
    resident: f64,  // MiB
    outcome: Outcome,
) {
    let elapsed_secs = elapsed.as_secs_f64();

    println!("\n=======================[ Problem Statistics ]========================");
    stat_line("Parse time (s)", format!("{:.3}", parse_time.as_secs_f64()));
    stat_line("Clues", clues);
    stat_line("Empty cells", empties);

    println!("========================[ Search Statistics ]========================");
    stat_line_with_rate("Placements", s.placements, elapsed_secs);
    stat_line_with_rate("Backtracks", s.backtracks, elapsed_secs);
    stat_line("Max depth", s.max_depth);
    stat_line("Memory usage (MiB)", format!("{allocated:.2}"));
    stat_line("Resident memory (MiB)", format!("{resident:.2}"));
    stat_line("CPU time (s)", format!("{elapsed_secs:.3}"));
    println!("=====================================================================");

    println!("\n{outcome}");
}

/// Helper function to print a single statistic line in a formatted table row.
fn stat_line(label: &str, value: impl std::fmt::Display) {
    println!("|  {label:<28} {value:>18}  |");
}

/// Helper function to print a statistic line that includes a rate (value/second).
fn stat_line_with_rate(label: &str, value: usize, elapsed: f64) {
    let rate = if elapsed > 0.0 { value as f64 / elapsed } else { 0.0 };
    println!("|  {label:<20} {value:>12} ({rate:>9.0}/sec)  |");
}

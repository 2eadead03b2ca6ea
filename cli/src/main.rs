mod error_formatter;
mod formatter;

use anyhow::Result;
use clap::{Parser, Subcommand};
use ferry::{Engine, ResourceLimits};
use formatter::Formatter;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;
use tracing_subscriber::EnvFilter;
use walkdir::WalkDir;

#[derive(Parser)]
#[command(name = "ferry")]
#[command(about = "Shortest safe crossings for river-crossing puzzles.")]
#[command(
    long_about = "Ferry finds the fewest boat trips that carry every passenger across the river without anyone getting eaten.\nPuzzles come from the built-in catalog and from .river files in the workspace."
)]
#[command(version)]
struct Cli {
    /// Log search progress to stderr (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Solve a puzzle and print the shortest sequence of crossings
    ///
    /// Loads the catalog and every .river file below the workspace, then runs a
    /// breadth-first search from the start to the goal configuration.
    Solve {
        /// Name of the puzzle to solve
        puzzle: String,
        /// Workspace root directory containing .river files
        #[arg(short = 'd', long = "dir", default_value = ".")]
        workdir: PathBuf,
        /// Print the outcome as JSON
        #[arg(long)]
        json: bool,
        /// Give up after expanding this many distinct states
        #[arg(long)]
        max_states: Option<usize>,
        /// Give up after this many milliseconds of search
        #[arg(long)]
        timeout_ms: Option<u64>,
    },
    /// Show the passengers, boat and threats of a puzzle
    Show {
        /// Name of the puzzle to show
        puzzle: String,
        /// Workspace root directory containing .river files
        #[arg(short = 'd', long = "dir", default_value = ".")]
        workdir: PathBuf,
    },
    /// List every puzzle in the catalog and the workspace
    List {
        /// Workspace root directory containing .river files
        #[arg(short = 'd', long = "dir", default_value = ".")]
        workdir: PathBuf,
    },
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match &cli.command {
        Commands::Solve {
            puzzle,
            workdir,
            json,
            max_states,
            timeout_ms,
        } => solve_command(workdir, puzzle, *json, *max_states, *timeout_ms),
        Commands::Show { puzzle, workdir } => show_command(workdir, puzzle),
        Commands::List { workdir } => list_command(workdir),
    };

    if let Err(e) = result {
        if let Some(ferry_err) = e.downcast_ref::<ferry::FerryError>() {
            eprintln!("{}", error_formatter::format_error(ferry_err));
        } else {
            eprintln!("Error: {}", e);
        }
        std::process::exit(1);
    }
}

fn init_tracing(verbose: u8) {
    let default_filter = match verbose {
        0 => "ferry=warn",
        1 => "ferry=debug",
        _ => "ferry=trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn solve_command(
    workdir: &Path,
    puzzle: &str,
    json: bool,
    max_states: Option<usize>,
    timeout_ms: Option<u64>,
) -> Result<()> {
    let mut limits = ResourceLimits::default();
    if let Some(max_states) = max_states {
        limits.max_visited_states = max_states;
    }
    if let Some(timeout_ms) = timeout_ms {
        limits.max_search_time_ms = timeout_ms;
    }

    let mut engine = Engine::with_limits(limits);
    engine.add_catalog()?;
    load_workspace(&mut engine, workdir)?;

    let outcome = engine.solve(puzzle)?;
    if json {
        println!("{}", serde_json::to_string_pretty(&outcome)?);
    } else {
        let formatter = Formatter::default();
        print!("{}", formatter.format_outcome(puzzle, &outcome));
    }

    Ok(())
}

fn show_command(workdir: &Path, puzzle_name: &str) -> Result<()> {
    let mut engine = Engine::with_catalog()?;
    load_workspace(&mut engine, workdir)?;

    if let Some(puzzle) = engine.get_puzzle(puzzle_name) {
        let formatter = Formatter::default();
        print!("{}", formatter.format_puzzle(puzzle));
    } else {
        eprintln!("Error: Puzzle '{}' not found", puzzle_name);
        std::process::exit(1);
    }

    Ok(())
}

fn list_command(workdir: &Path) -> Result<()> {
    let mut engine = Engine::with_catalog()?;

    println!("Loading workspace from {}...", workdir.display());
    let file_count = load_workspace(&mut engine, workdir)?;

    let names = engine.list_puzzles();
    let puzzles: Vec<_> = names
        .iter()
        .filter_map(|name| engine.get_puzzle(name))
        .collect();

    println!();
    let formatter = Formatter::default();
    print!("{}", formatter.format_workspace_summary(file_count, &puzzles));

    Ok(())
}

/// Load all .river files from the workspace directory, returning how many were read
fn load_workspace(engine: &mut Engine, workdir: &Path) -> Result<usize> {
    let mut file_count = 0;
    for entry in WalkDir::new(workdir).sort_by_file_name() {
        let entry = entry?;
        if entry.path().extension().and_then(|s| s.to_str()) == Some("river") {
            file_count += 1;
            let path = entry.path();
            let source_id = path.to_string_lossy().to_string();
            debug!(file = %source_id, "Loading puzzle file");
            engine.add_puzzle_code(&fs::read_to_string(path)?, &source_id)?;
        }
    }

    Ok(file_count)
}

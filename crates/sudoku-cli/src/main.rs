mod display;
mod parse;

use anyhow::{Context, Result};
use clap::Parser;
use std::io::Read;
use std::path::PathBuf;
use std::time::Instant;
use sudoku_engine::Solver;

/// Solve 9×9 Sudoku puzzles from text files or stdin.
#[derive(Parser)]
#[command(name = "sudoku", version, about)]
struct Cli {
    /// Puzzle files in the whitespace grid format; reads stdin when empty
    files: Vec<PathBuf>,
    /// Print the parsed puzzle before solving
    #[arg(long)]
    show_input: bool,
    /// Disable colored output
    #[arg(long)]
    no_color: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let mut failures = 0usize;
    if cli.files.is_empty() {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .context("reading stdin")?;
        if !run_one("<stdin>", &text, &cli) {
            failures += 1;
        }
    } else {
        for path in &cli.files {
            let name = path.display().to_string();
            match std::fs::read_to_string(path).with_context(|| format!("reading {}", name)) {
                Ok(text) => {
                    if !run_one(&name, &text, &cli) {
                        failures += 1;
                    }
                }
                Err(e) => {
                    eprintln!("{:#}", e);
                    failures += 1;
                }
            }
        }
    }

    if failures > 0 {
        std::process::exit(1);
    }
    Ok(())
}

/// Parse, solve, and report one puzzle document. Returns whether the
/// puzzle ended up solved.
fn run_one(name: &str, text: &str, cli: &Cli) -> bool {
    let puzzle = match parse::grid_from_text(text) {
        Ok(grid) => grid,
        Err(e) => {
            eprintln!("{}: {:#}", name, e);
            return false;
        }
    };

    if cli.show_input {
        println!("{}", puzzle);
        println!();
    }

    let start = Instant::now();
    let mut solver = Solver::new(&puzzle);
    let outcome = solver.solve();
    let elapsed = start.elapsed();

    match outcome {
        Ok(()) => {
            log::info!("solved {} in {:?}", name, elapsed);
            println!("{}: solved in {:?}", name, elapsed);
        }
        Err(e) => {
            log::warn!("{} not solved: {}", name, e);
            println!("{}: not solved ({})", name, e);
        }
    }
    if let Err(e) = display::print_grid(&puzzle, solver.grid(), !cli.no_color) {
        eprintln!("{}: {}", name, e);
        return false;
    }
    println!();

    outcome.is_ok()
}

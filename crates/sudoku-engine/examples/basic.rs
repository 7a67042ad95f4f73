//! Basic example of using the solving engine

use sudoku_engine::{Grid, Solver};

fn main() {
    // Parse a puzzle from the compact string format
    let puzzle_string =
        "530070000600195000098000060800060003400803001700020006060000280000419005000080079";
    let puzzle = Grid::from_string(puzzle_string).expect("valid puzzle string");

    println!("Puzzle:");
    println!("{}", puzzle);

    // Show some stats
    println!("Given cells: {}", puzzle.given_count());
    println!("Empty cells: {}", puzzle.empty_count());

    // Solve it
    println!("\nSolving...\n");
    let mut solver = Solver::new(&puzzle);
    match solver.solve() {
        Ok(()) => {
            println!("Solution:");
            println!("{}", solver.grid());
        }
        Err(e) => {
            println!("Not solved: {}", e);
            println!("Partial fill:");
            println!("{}", solver.grid());
        }
    }
}

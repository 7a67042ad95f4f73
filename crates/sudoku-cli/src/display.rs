//! Terminal rendering of a solve result.
//!
//! Same layout as the engine's plain `Display` impl, but digits the solver
//! filled in are colored so they stand out from the givens.

use crossterm::{
    queue,
    style::{Color, Print, ResetColor, SetForegroundColor},
    tty::IsTty,
};
use std::io::{self, Write};
use sudoku_engine::{Grid, Position};

const BAND: &str = "  +-------+-------+-------+\n";

/// Print `current`, coloring cells that are filled there but blank in
/// `original`. Color is dropped when disabled or when stdout is piped.
pub fn print_grid(original: &Grid, current: &Grid, color: bool) -> io::Result<()> {
    let color = color && io::stdout().is_tty();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    queue!(out, Print("    1 2 3   4 5 6   7 8 9\n"))?;
    for row in 0..9 {
        if row % 3 == 0 {
            queue!(out, Print(BAND))?;
        }
        queue!(out, Print(format!("{} ", (b'A' + row as u8) as char)))?;
        for col in 0..9 {
            if col % 3 == 0 {
                queue!(out, Print("| "))?;
            }
            let pos = Position::new(row, col);
            match current.get(pos) {
                None => queue!(out, Print(". "))?,
                Some(value) if color && original.get(pos).is_none() => queue!(
                    out,
                    SetForegroundColor(Color::Green),
                    Print(format!("{} ", value)),
                    ResetColor
                )?,
                Some(value) => queue!(out, Print(format!("{} ", value)))?,
            }
        }
        queue!(out, Print("|\n"))?;
    }
    queue!(out, Print(BAND))?;
    out.flush()
}

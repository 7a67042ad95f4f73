//! Parsing for the whitespace puzzle-document format.
//!
//! One grid row per line, values separated by spaces, 0 for a blank cell.
//! Documents often carry a title line and trailing notes; any line that
//! does not look like a row of at least nine integers is skipped, so
//! headers and footers fall away without special handling.

use anyhow::{bail, Result};
use sudoku_engine::Grid;

/// Extract the single 9×9 grid from a puzzle document.
pub fn grid_from_text(text: &str) -> Result<Grid> {
    let mut rows: Vec<Vec<u8>> = Vec::new();
    for line in text.lines() {
        let tokens: Vec<&str> = line.split_whitespace().collect();
        if tokens.len() < 9 {
            continue;
        }
        let values: Result<Vec<u8>, _> = tokens.iter().map(|t| t.parse::<u8>()).collect();
        if let Ok(values) = values {
            rows.push(values);
        }
    }
    if rows.len() != 9 {
        bail!("expected 9 puzzle rows, found {}", rows.len());
    }
    Ok(Grid::from_rows(&rows)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    const DOCUMENT: &str = "\
Sudoku puzzle 01a, difficulty rating 1

0 0 9 0 0 0 0 0 0
3 0 0 0 0 0 0 6 7
0 0 0 5 7 2 0 3 0
0 8 0 0 0 7 5 0 0
4 0 0 0 6 0 0 0 3
0 0 5 8 0 0 0 1 0
0 4 0 9 5 6 0 0 0
9 6 0 0 0 0 0 0 1
0 0 0 0 0 0 3 0 0

source: one of the fifteen rated puzzle sets
";

    #[test]
    fn test_skips_headers_footers_and_blank_lines() {
        let grid = grid_from_text(DOCUMENT).unwrap();
        assert_eq!(
            grid.to_compact(),
            "009000000300000067000572030080007500400060003005800010040956000960000001000000300"
        );
    }

    #[test]
    fn test_rows_only_document() {
        let rows = "0 0 9 0 0 0 0 0 0\n".repeat(9);
        assert!(grid_from_text(&rows).is_ok());
    }

    #[test]
    fn test_too_few_rows() {
        let err = grid_from_text("1 2 3 4 5 6 7 8 9\n").unwrap_err();
        assert!(err.to_string().contains("found 1"));
    }

    #[test]
    fn test_empty_document() {
        let err = grid_from_text("just some prose\n\n").unwrap_err();
        assert!(err.to_string().contains("found 0"));
    }

    #[test]
    fn test_out_of_range_value_rejected() {
        let mut doc = String::new();
        doc.push_str("0 0 12 0 0 0 0 0 0\n");
        doc.push_str(&"0 0 0 0 0 0 0 0 0\n".repeat(8));
        assert!(grid_from_text(&doc).is_err());
    }

    #[test]
    fn test_long_wordy_header_is_skipped() {
        let mut doc = String::from("a header line that happens to have many words in it today\n");
        doc.push_str(&"1 0 0 0 0 0 0 0 0\n".repeat(9));
        assert!(grid_from_text(&doc).is_ok());
    }
}

//! Plain-text tableau format.
//!
//! One row per line, comma-separated floats, whitespace around each cell
//! ignored, blank lines skipped. Row 0 is the objective:
//!
//! ```text
//! 0, 3, 2, 4, 0, 0, 0
//! 4, 1, 1, 2, 1, 0, 0
//! 5, 2, 0, 3, 0, 1, 0
//! ```

use std::str::FromStr;

use super::Tableau;
use crate::error::{LpError, LpResult};

/// Parse a tableau document into raw rows.
pub fn parse_rows(input: &str) -> LpResult<Vec<Vec<f64>>> {
    let input = input.trim();
    if input.is_empty() {
        return Err(LpError::InvalidInput("empty tableau".to_string()));
    }

    input
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(line_idx, line)| {
            line.split(',')
                .enumerate()
                .map(|(col_idx, cell)| {
                    let cell = cell.trim();
                    cell.parse::<f64>().map_err(|e| {
                        LpError::InvalidInput(format!(
                            "line {}, column {}: cannot parse {:?} ({})",
                            line_idx + 1,
                            col_idx + 1,
                            cell,
                            e
                        ))
                    })
                })
                .collect()
        })
        .collect()
}

/// Render rows in the same format `parse_rows` reads.
pub fn format_rows(rows: &[Vec<f64>]) -> String {
    let mut out = String::new();
    for row in rows {
        let cells: Vec<String> = row.iter().map(|v| v.to_string()).collect();
        out.push_str(&cells.join(", "));
        out.push('\n');
    }
    out
}

impl FromStr for Tableau {
    type Err = LpError;

    fn from_str(s: &str) -> LpResult<Self> {
        parse_rows(s).map(Tableau::from_rows)
    }
}

//! Point-list instance files.
//!
//! The first line is a header (typically the node count) and is ignored.
//! Every following non-blank line holds `x y` separated by whitespace;
//! extra columns are ignored.

use crate::error::{AcsError, AcsResult};
use std::path::Path;

/// Reads and parses an instance file.
pub fn read_points(path: &Path) -> AcsResult<Vec<(f64, f64)>> {
    let content = std::fs::read_to_string(path)?;
    parse_points(&content)
}

/// Parses instance text into coordinates, in file order.
pub fn parse_points(content: &str) -> AcsResult<Vec<(f64, f64)>> {
    let mut points = Vec::new();

    for (line_num, line) in content.lines().enumerate().skip(1) {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let mut fields = line.split_whitespace();
        let x = parse_coord(fields.next(), "x", line_num + 1)?;
        let y = parse_coord(fields.next(), "y", line_num + 1)?;
        points.push((x, y));
    }

    Ok(points)
}

fn parse_coord(field: Option<&str>, axis: &str, line: usize) -> AcsResult<f64> {
    let raw = field.ok_or_else(|| AcsError::Parse {
        line,
        cause: format!("missing {axis} coordinate"),
    })?;
    raw.parse().map_err(|_| AcsError::Parse {
        line,
        cause: format!("invalid {axis} coordinate: {raw}"),
    })
}

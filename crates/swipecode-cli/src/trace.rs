//! Fling trace files
//!
//! One fling per line: `x1,y1,x2,y2` with an optional `,vx,vy` velocity
//! pair. Blank lines and lines starting with `#` are skipped.

use anyhow::{bail, Context, Result};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use swipecode_core::{Fling, Point};

/// Read every fling from `path`
pub fn read_trace(path: &Path) -> Result<Vec<Fling>> {
    let file = File::open(path).with_context(|| format!("Failed to open {}", path.display()))?;
    parse_trace(BufReader::new(file), &path.display().to_string())
}

/// Parse trace lines; `origin` prefixes error messages
pub fn parse_trace(reader: impl BufRead, origin: &str) -> Result<Vec<Fling>> {
    let mut flings = Vec::new();
    for (idx, line) in reader.lines().enumerate() {
        let line_no = idx + 1;
        let line = line.with_context(|| format!("Failed to read {origin}:{line_no}"))?;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        let fling = parse_line(trimmed).with_context(|| format!("{origin}:{line_no}"))?;
        flings.push(fling);
    }
    Ok(flings)
}

fn parse_line(line: &str) -> Result<Fling> {
    let values = line
        .split(',')
        .map(|part| {
            let part = part.trim();
            part.parse::<f32>()
                .with_context(|| format!("invalid number '{part}'"))
        })
        .collect::<Result<Vec<f32>>>()?;

    match values.as_slice() {
        [x1, y1, x2, y2] => Ok(Fling::new(Point::new(*x1, *y1), Point::new(*x2, *y2))),
        [x1, y1, x2, y2, vx, vy] => {
            Ok(Fling::new(Point::new(*x1, *y1), Point::new(*x2, *y2)).with_velocity(*vx, *vy))
        }
        other => bail!("expected 4 or 6 columns, got {}", other.len()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Cursor, Write};

    #[test]
    fn test_parse_trace_skips_comments() {
        let input = "# up, then down\n\n0,100,0,0\n  0, 0, 0, 100, 12.5, -3 \n";
        let flings = parse_trace(Cursor::new(input), "inline").unwrap();

        assert_eq!(flings.len(), 2);
        assert_eq!(flings[0].start, Point::new(0.0, 100.0));
        assert_eq!(flings[1].end, Point::new(0.0, 100.0));
        assert_eq!(flings[1].velocity_x, 12.5);
    }

    #[test]
    fn test_bad_column_count_reports_line() {
        let err = parse_trace(Cursor::new("0,0,1,1\n1,2,3\n"), "trace.csv").unwrap_err();
        let message = format!("{err:#}");
        assert!(message.contains("trace.csv:2"));
        assert!(message.contains("got 3"));
    }

    #[test]
    fn test_bad_number_reports_value() {
        let err = parse_trace(Cursor::new("0,0,left,1\n"), "trace.csv").unwrap_err();
        assert!(format!("{err:#}").contains("invalid number 'left'"));
    }

    #[test]
    fn test_read_trace_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "100,0,0,0").unwrap();
        let flings = read_trace(file.path()).unwrap();
        assert_eq!(flings.len(), 1);
    }

    #[test]
    fn test_missing_file() {
        let err = read_trace(Path::new("/nonexistent/trace.csv")).unwrap_err();
        assert!(err.to_string().contains("Failed to open"));
    }
}

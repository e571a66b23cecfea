//! JSON Lines frame source for replaying recorded landmark streams
//!
//! One frame per line:
//! `{"t_ms": 1033.4, "landmarks": [{"x": 0.5, "y": 0.4, "z": -0.1, "visibility": 0.98}, ...]}`
//! Blank lines and lines starting with `#` are ignored.

use std::io::BufRead;
use serde::{Deserialize, Serialize};
use crate::error::Result;
use crate::types::Landmark;

/// One timestamped landmark frame
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrameRecord {
    pub t_ms: f64,
    pub landmarks: Vec<Landmark>,
}

/// Parse a single line. `Ok(None)` for blank and comment lines.
pub fn parse_frame_line(line: &str) -> Result<Option<FrameRecord>> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }
    Ok(Some(serde_json::from_str(line)?))
}

/// Iterate frames from a reader, yielding `(line_number, result)`
///
/// Parse errors are yielded per line so the caller can skip them.
pub fn read_frames<R: BufRead>(reader: R) -> impl Iterator<Item = (usize, Result<FrameRecord>)> {
    reader
        .lines()
        .enumerate()
        .filter_map(|(i, line)| {
            let parsed = match line {
                Ok(line) => parse_frame_line(&line),
                Err(e) => Err(e.into()),
            };
            match parsed {
                Ok(Some(frame)) => Some((i + 1, Ok(frame))),
                Ok(None) => None,
                Err(e) => Some((i + 1, Err(e))),
            }
        })
}

//! Plain-text LUT loading.
//!
//! The text format is a flat list of whitespace-separated numbers, usually
//! one LUT entry per line. All numbers are read in order and reshaped
//! channel-major into `(3, D, D, D)`: the whole red cube first, then green,
//! then blue.
//!
//! ```text
//! # comment
//! 0.0 0.0 0.0
//! 0.0 0.0 1.0
//! ...
//! ```
//!
//! Blank lines and lines starting with `#` are skipped. Only the value
//! count is checked; the values themselves are taken as-is.
//!
//! # Example
//!
//! ```rust,ignore
//! use trilut_grid::{read_lut, Sampler};
//!
//! let grid = read_lut("IdentityLUT33.txt", 33)?;
//! let rgb = Sampler::new(&grid).sample([150.0, 230.0, 71.0])?.rgb;
//! ```

use crate::{Grid, GridError, GridResult};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::debug;

/// Reads a LUT of resolution `size` from a text file.
pub fn read_lut<P: AsRef<Path>>(path: P, size: usize) -> GridResult<Grid> {
    let path = path.as_ref();
    debug!(path = %path.display(), size, "reading LUT");
    let file = File::open(path)?;
    parse_lut(BufReader::new(file), size)
}

/// Reads a LUT from a text file, inferring its resolution from the value count.
pub fn read_lut_auto<P: AsRef<Path>>(path: P) -> GridResult<Grid> {
    let path = path.as_ref();
    debug!(path = %path.display(), "reading LUT");
    let file = File::open(path)?;
    parse_lut_auto(BufReader::new(file))
}

/// Parses a LUT of resolution `size` from a reader.
pub fn parse_lut<R: BufRead>(reader: R, size: usize) -> GridResult<Grid> {
    let data = parse_values(reader)?;
    debug!(size, values = data.len(), "parsed LUT");
    Grid::new(size, data)
}

/// Parses a LUT from a reader, inferring its resolution.
///
/// Fails with [`GridError::InvalidSize`] unless the value count is
/// `3 * D^3` for some `D >= 2`.
pub fn parse_lut_auto<R: BufRead>(reader: R) -> GridResult<Grid> {
    let data = parse_values(reader)?;
    let size = infer_size(data.len())?;
    debug!(size, values = data.len(), "parsed LUT");
    Grid::new(size, data)
}

/// Resolution `D` such that `count == 3 * D^3`.
pub fn infer_size(count: usize) -> GridResult<usize> {
    let per_channel = count / Grid::CHANNELS;
    let size = (per_channel as f64).cbrt().round() as usize;
    if size < Grid::MIN_SIZE || size.pow(3) * Grid::CHANNELS != count {
        return Err(GridError::InvalidSize(format!(
            "{} values do not form a 3 x D x D x D grid",
            count
        )));
    }
    Ok(size)
}

fn parse_values<R: BufRead>(reader: R) -> GridResult<Vec<f64>> {
    let mut data = Vec::new();
    for (n, line) in reader.lines().enumerate() {
        let line = line?;
        let line = line.trim();

        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        for token in line.split_whitespace() {
            let value = token.parse::<f64>().map_err(|_| {
                GridError::ParseError(format!("line {}: invalid number {:?}", n + 1, token))
            })?;
            data.push(value);
        }
    }
    Ok(data)
}

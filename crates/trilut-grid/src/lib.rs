//! # trilut-grid
//!
//! 3D color LUT grids and trilinear sampling.
//!
//! This crate holds the sampled grid and everything needed to evaluate it
//! at an arbitrary RGB coordinate:
//!
//! - [`Grid`] - channel-major `(3, D, D, D)` sample storage
//! - [`Locator`] - finds the cell around a query and gathers its 8 corners
//! - [`Sampler`] - rescales the query and interpolates each channel
//! - [`read_lut`] - loads a grid from a plain-text LUT file
//!
//! # Usage
//!
//! ```rust
//! use trilut_grid::{Grid, Sampler};
//!
//! // Identity grid: each channel returns its own grid coordinate
//! let grid = Grid::from_fn(17, |ch, i, j, k| [i, j, k][ch.index()] as f64).unwrap();
//! let s = Sampler::new(&grid).with_extent(17.0).sample([8.5, 4.25, 12.75]).unwrap();
//! assert!((s.rgb[1] - 4.25).abs() < 1e-9);
//! ```
//!
//! # Features
//!
//! - `rayon` - parallel [`Sampler::sample_batch`]
//!
//! # Dependencies
//!
//! - [`trilut-math`] - Interpolation engine
//! - [`thiserror`] - Error handling
//! - [`tracing`] - Diagnostics

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod error;
mod grid;
mod locate;
mod sample;
pub mod text;

pub use error::{GridError, GridResult};
pub use grid::{Channel, Grid};
pub use locate::{locate_neighbors, EdgeMode, Locator, Neighborhood, DEFAULT_EXTENT};
pub use sample::{Sample, Sampler};
pub use text::{parse_lut, parse_lut_auto, read_lut, read_lut_auto};

//! # trilut-math
//!
//! Interpolation engine for 3D color lookup tables.
//!
//! This crate provides the math that blends grid samples around a query
//! point:
//!
//! - [`linear`] - 1D interpolation between two samples
//! - [`bilinear`] - 2D interpolation over a [`Quad`] of four corners
//! - [`trilinear`] - 3D interpolation over a [`Cube`] of eight corners
//!
//! # Usage
//!
//! ```rust
//! use trilut_math::{trilinear, Corner, Cube};
//!
//! let mut corners = Vec::new();
//! for i in 0..2 {
//!     for j in 0..2 {
//!         for k in 0..2 {
//!             corners.push(Corner::at_index(i, j, k, (i + j + k) as f64));
//!         }
//!     }
//! }
//! let cube = Cube::from_slice(&corners).unwrap();
//! let r = trilinear([0.5, 0.5, 0.5], &cube).unwrap();
//! assert!((r.value - 1.5).abs() < 1e-12);
//! ```
//!
//! # Design
//!
//! Functions are pure and allocation-free. Corners are passed as named
//! fields, never as positional tuples, and every precondition (bounding
//! endpoints, corner count, corner alignment) is checked and reported as
//! an [`InterpError`].
//!
//! # Dependencies
//!
//! - [`thiserror`] - Error handling
//!
//! # Used By
//!
//! - `trilut-grid` - Neighbor lookup and LUT sampling

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod corners;
mod error;
mod interp;
mod point;

pub use corners::{Cube, Quad};
pub use error::{InterpError, InterpResult};
pub use interp::{bilinear, bilinear_points, linear, trilinear, trilinear_points};
pub use point::{Corner, Interpolated, Point1D, Point2D};

//! Named corner sets for bilinear and trilinear interpolation.
//!
//! Corners are addressed by field name rather than by position, so a
//! misordered argument list cannot silently swap two samples.
//!
//! # Labels
//!
//! [`Quad`] fields are `c{y}{x}`: the last digit is the axis-0 level and the
//! first digit the axis-1 level.
//!
//! ```text
//!   y
//!   ^  c10 ---- c11
//!   |   |        |
//!   |  c00 ---- c01
//!   +-------------> x
//! ```
//!
//! [`Cube`] fields are `c{i}{j}{k}`, one bit per axis with axis 0 the most
//! significant. [`Cube::corners`] yields them in `000, 001, ..., 111` order,
//! which is also the order of nested iteration `i` outer, `k` inner.

use crate::{Corner, InterpError, InterpResult, Point2D};

/// The four corners of a bilinear patch.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Quad {
    /// (x low, y low)
    pub c00: Point2D,
    /// (x high, y low)
    pub c01: Point2D,
    /// (x low, y high)
    pub c10: Point2D,
    /// (x high, y high)
    pub c11: Point2D,
}

impl Quad {
    /// Number of corners in a patch.
    pub const LEN: usize = 4;

    /// Creates a patch from its named corners.
    pub const fn new(c00: Point2D, c01: Point2D, c10: Point2D, c11: Point2D) -> Self {
        Self { c00, c01, c10, c11 }
    }

    /// Builds a patch from exactly four corners in `c00, c01, c10, c11` order.
    ///
    /// Fails with [`InterpError::Arity`] for any other count.
    pub fn from_slice(points: &[Point2D]) -> InterpResult<Self> {
        match *points {
            [c00, c01, c10, c11] => Ok(Self::new(c00, c01, c10, c11)),
            _ => Err(InterpError::Arity {
                expected: Self::LEN,
                found: points.len(),
            }),
        }
    }

    /// Corners in `c00, c01, c10, c11` order.
    pub const fn corners(&self) -> [Point2D; 4] {
        [self.c00, self.c01, self.c10, self.c11]
    }

    /// Verifies the corners form an axis-aligned rectangle.
    ///
    /// Each row must share its `y`, each column its `x`.
    pub fn check_aligned(&self) -> InterpResult<()> {
        if self.c00.y != self.c01.y || self.c10.y != self.c11.y {
            return Err(InterpError::Misaligned(format!(
                "rows do not share y: c00/c01 at {}/{}, c10/c11 at {}/{}",
                self.c00.y, self.c01.y, self.c10.y, self.c11.y
            )));
        }
        if self.c00.x != self.c10.x || self.c01.x != self.c11.x {
            return Err(InterpError::Misaligned(format!(
                "columns do not share x: c00/c10 at {}/{}, c01/c11 at {}/{}",
                self.c00.x, self.c10.x, self.c01.x, self.c11.x
            )));
        }
        Ok(())
    }
}

/// The eight corners of a grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[allow(missing_docs)]
pub struct Cube {
    pub c000: Corner,
    pub c001: Corner,
    pub c010: Corner,
    pub c011: Corner,
    pub c100: Corner,
    pub c101: Corner,
    pub c110: Corner,
    pub c111: Corner,
}

impl Cube {
    /// Number of corners in a cell.
    pub const LEN: usize = 8;

    /// Builds a cell from corners in `000..111` bit order.
    pub const fn from_array(c: [Corner; 8]) -> Self {
        Self {
            c000: c[0],
            c001: c[1],
            c010: c[2],
            c011: c[3],
            c100: c[4],
            c101: c[5],
            c110: c[6],
            c111: c[7],
        }
    }

    /// Builds a cell from exactly eight corners in `000..111` bit order.
    ///
    /// Fails with [`InterpError::Arity`] for any other count.
    pub fn from_slice(corners: &[Corner]) -> InterpResult<Self> {
        let array: [Corner; 8] = corners.try_into().map_err(|_| InterpError::Arity {
            expected: Self::LEN,
            found: corners.len(),
        })?;
        Ok(Self::from_array(array))
    }

    /// Corners in `000..111` bit order.
    pub const fn corners(&self) -> [Corner; 8] {
        [
            self.c000, self.c001, self.c010, self.c011,
            self.c100, self.c101, self.c110, self.c111,
        ]
    }

    /// The axis-2 low slice as a bilinear patch over axes 0 and 1.
    pub const fn low_k(&self) -> Quad {
        Quad::new(
            self.c000.drop_k(),
            self.c100.drop_k(),
            self.c010.drop_k(),
            self.c110.drop_k(),
        )
    }

    /// The axis-2 high slice as a bilinear patch over axes 0 and 1.
    pub const fn high_k(&self) -> Quad {
        Quad::new(
            self.c001.drop_k(),
            self.c101.drop_k(),
            self.c011.drop_k(),
            self.c111.drop_k(),
        )
    }

    /// Verifies the slices are flat in `k` and stacked over each other.
    ///
    /// Each slice must share one axis-2 coordinate, and every low-slice
    /// corner must sit directly under its high-slice partner.
    pub fn check_aligned(&self) -> InterpResult<()> {
        let low = [self.c000, self.c100, self.c010, self.c110];
        let high = [self.c001, self.c101, self.c011, self.c111];

        for (name, slice) in [("low", &low), ("high", &high)] {
            let k = slice[0].k;
            if let Some(off) = slice.iter().find(|c| c.k != k) {
                return Err(InterpError::Misaligned(format!(
                    "{name} slice mixes k = {k} and k = {}",
                    off.k
                )));
            }
        }

        for (lo, hi) in low.iter().zip(high.iter()) {
            if lo.i != hi.i || lo.j != hi.j {
                return Err(InterpError::Misaligned(format!(
                    "corner ({}, {}) has no partner above it, found ({}, {})",
                    lo.i, lo.j, hi.i, hi.j
                )));
            }
        }
        Ok(())
    }
}

//! Point and corner types.
//!
//! Every interpolation step works on labeled samples: a coordinate (or a
//! tuple of coordinates) plus the value sampled there. These are plain
//! `Copy` values with no invariants of their own; the checks that tie
//! several samples together live in [`crate::Quad`] and [`crate::Cube`].

/// A 1-D sample: coordinate and value.
///
/// Endpoint of a [`linear`](crate::linear) interpolation.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point1D {
    /// Coordinate along the interpolated axis
    pub x: f64,
    /// Sampled value
    pub value: f64,
}

impl Point1D {
    /// Creates a 1-D sample.
    #[inline]
    pub const fn new(x: f64, value: f64) -> Self {
        Self { x, value }
    }
}

/// A 2-D sample: two coordinates and a value.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point2D {
    /// Axis-0 coordinate
    pub x: f64,
    /// Axis-1 coordinate
    pub y: f64,
    /// Sampled value
    pub value: f64,
}

impl Point2D {
    /// Creates a 2-D sample.
    #[inline]
    pub const fn new(x: f64, y: f64, value: f64) -> Self {
        Self { x, y, value }
    }

    /// Projects onto axis 0, dropping the axis-1 coordinate.
    #[inline]
    pub const fn along_x(self) -> Point1D {
        Point1D::new(self.x, self.value)
    }

    /// Projects onto axis 1, dropping the axis-0 coordinate.
    #[inline]
    pub const fn along_y(self) -> Point1D {
        Point1D::new(self.y, self.value)
    }
}

/// A labeled grid corner: three grid coordinates and the sampled value.
///
/// Coordinates are usually integer grid indices but are kept as `f64` so
/// corners can also be placed at arbitrary positions.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Corner {
    /// Axis-0 coordinate
    pub i: f64,
    /// Axis-1 coordinate
    pub j: f64,
    /// Axis-2 coordinate
    pub k: f64,
    /// Sampled value
    pub value: f64,
}

impl Corner {
    /// Creates a corner.
    #[inline]
    pub const fn new(i: f64, j: f64, k: f64, value: f64) -> Self {
        Self { i, j, k, value }
    }

    /// Creates a corner from integer grid indices.
    #[inline]
    pub fn at_index(i: usize, j: usize, k: usize, value: f64) -> Self {
        Self::new(i as f64, j as f64, k as f64, value)
    }

    /// Drops the axis-2 coordinate, keeping the value.
    ///
    /// Used to treat one axis-2 slice of a cube as a bilinear patch.
    #[inline]
    pub const fn drop_k(self) -> Point2D {
        Point2D::new(self.i, self.j, self.value)
    }

    /// Grid coordinates as an array.
    #[inline]
    pub const fn coords(&self) -> [f64; 3] {
        [self.i, self.j, self.k]
    }
}

/// Result of an interpolation: the query coordinate and the blended value.
///
/// The coordinate is passed through unchanged so batch callers can match
/// results to requests.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interpolated<C> {
    /// Query coordinate, as supplied
    pub coord: C,
    /// Interpolated value
    pub value: f64,
}

impl<C> Interpolated<C> {
    /// Pairs a coordinate with its interpolated value.
    #[inline]
    pub const fn new(coord: C, value: f64) -> Self {
        Self { coord, value }
    }
}

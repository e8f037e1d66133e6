//! Linear, bilinear and trilinear interpolation.
//!
//! Each order is built from the one below it:
//!
//! - [`linear`] blends two samples along one axis
//! - [`bilinear`] runs two linear blends along x, then one along y
//! - [`trilinear`] runs two bilinear blends (one per axis-2 slice), then
//!   one linear blend along axis 2
//!
//! All functions are pure. Preconditions are checked on entry and reported
//! as [`InterpError`]; nothing is clamped or extrapolated.
//!
//! # Example
//!
//! ```rust
//! use trilut_math::{linear, Point1D};
//!
//! let r = linear(5.0, Point1D::new(1.0, 7.0), Point1D::new(7.0, 18.0)).unwrap();
//! assert_eq!(r.coord, 5.0);
//! assert!((r.value - 14.333333).abs() < 1e-5);
//! ```

use crate::{Corner, Cube, InterpError, InterpResult, Interpolated, Point1D, Point2D, Quad};

/// Linear interpolation between two samples.
///
/// Requires `low.x <= x <= high.x`; otherwise fails with
/// [`InterpError::OutOfRange`]. A zero-width interval (`low.x == high.x`,
/// which the range check forces to equal `x`) yields `low.value`.
///
/// # Formula
///
/// `alpha = (x - x0) / (x1 - x0)`, `value = y0 * (1 - alpha) + y1 * alpha`
#[inline]
pub fn linear(x: f64, low: Point1D, high: Point1D) -> InterpResult<Interpolated<f64>> {
    if !(low.x <= x && x <= high.x) {
        return Err(InterpError::OutOfRange {
            x,
            low: low.x,
            high: high.x,
        });
    }
    if low.x == high.x {
        return Ok(Interpolated::new(x, low.value));
    }
    let alpha = (x - low.x) / (high.x - low.x);
    Ok(Interpolated::new(x, low.value * (1.0 - alpha) + high.value * alpha))
}

/// Bilinear interpolation over a rectangular patch.
///
/// Blends `c00 -> c01` and `c10 -> c11` along x at `dest[0]`, then blends
/// the two row results along y at `dest[1]`.
///
/// # Example
///
/// ```rust
/// use trilut_math::{bilinear, Point2D, Quad};
///
/// let quad = Quad::new(
///     Point2D::new(1.0, 1.0, 5.0),
///     Point2D::new(5.0, 1.0, 9.0),
///     Point2D::new(1.0, 5.0, 13.0),
///     Point2D::new(5.0, 5.0, 28.0),
/// );
/// let r = bilinear([3.0, 3.0], &quad).unwrap();
/// assert!((r.value - 13.75).abs() < 1e-12);
/// ```
pub fn bilinear(dest: [f64; 2], quad: &Quad) -> InterpResult<Interpolated<[f64; 2]>> {
    quad.check_aligned()?;
    let [x, y] = dest;

    let bottom = linear(x, quad.c00.along_x(), quad.c01.along_x())?.value;
    let top = linear(x, quad.c10.along_x(), quad.c11.along_x())?.value;
    let value = linear(
        y,
        Point1D::new(quad.c00.y, bottom),
        Point1D::new(quad.c10.y, top),
    )?
    .value;

    Ok(Interpolated::new(dest, value))
}

/// Bilinear interpolation over corners given as a slice.
///
/// The slice must hold exactly four points in `c00, c01, c10, c11` order,
/// otherwise fails with [`InterpError::Arity`].
pub fn bilinear_points(dest: [f64; 2], points: &[Point2D]) -> InterpResult<Interpolated<[f64; 2]>> {
    bilinear(dest, &Quad::from_slice(points)?)
}

/// Trilinear interpolation over a grid cell.
///
/// Each axis-2 slice of the cell is reduced with [`bilinear`] at
/// `(dest[0], dest[1])`; the two slice results are then blended along
/// axis 2 at `dest[2]`.
pub fn trilinear(dest: [f64; 3], cube: &Cube) -> InterpResult<Interpolated<[f64; 3]>> {
    cube.check_aligned()?;
    let plane = [dest[0], dest[1]];

    let low = bilinear(plane, &cube.low_k())?.value;
    let high = bilinear(plane, &cube.high_k())?.value;
    let value = linear(
        dest[2],
        Point1D::new(cube.c000.k, low),
        Point1D::new(cube.c001.k, high),
    )?
    .value;

    Ok(Interpolated::new(dest, value))
}

/// Trilinear interpolation over corners given as a slice.
///
/// The slice must hold exactly eight corners in `000..111` bit order,
/// otherwise fails with [`InterpError::Arity`].
pub fn trilinear_points(dest: [f64; 3], corners: &[Corner]) -> InterpResult<Interpolated<[f64; 3]>> {
    trilinear(dest, &Cube::from_slice(corners)?)
}

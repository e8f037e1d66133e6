//! Neighbor lookup: the grid cell around a query point.
//!
//! A query arrives in source space (e.g. 8-bit code values in `[0, 256)`).
//! The locator divides it by `step = extent / D` to find the cell index
//! along each axis, then gathers the 8 cell corners from every channel.
//!
//! # Top edge
//!
//! With `step = extent / D`, source values in the last `step` of the range
//! land on index `D - 1`, whose upper neighbor does not exist.
//! [`EdgeMode::Clamp`] shifts such cells down by one so the upper index is
//! `D - 1`; [`EdgeMode::Strict`] reports [`GridError::IndexOutOfRange`].

use crate::{Channel, Grid, GridError, GridResult};
use tracing::trace;
use trilut_math::{Corner, Cube};

/// Default source coordinate range (8-bit code values).
pub const DEFAULT_EXTENT: f64 = 256.0;

/// Handling of queries in the top cell of the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EdgeMode {
    /// Clamp the cell so its upper corner is the last grid sample.
    #[default]
    Clamp,

    /// Fail when the upper corner would fall outside the grid.
    Strict,
}

/// The 8 corners around a query, per channel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Neighborhood {
    /// Source-space width of one grid cell
    pub step: f64,
    /// Lower cell index on each axis
    pub low: [usize; 3],
    /// Red channel corners
    pub red: Cube,
    /// Green channel corners
    pub green: Cube,
    /// Blue channel corners
    pub blue: Cube,
}

impl Neighborhood {
    /// Corners of one channel.
    #[inline]
    pub fn channel(&self, channel: Channel) -> &Cube {
        match channel {
            Channel::Red => &self.red,
            Channel::Green => &self.green,
            Channel::Blue => &self.blue,
        }
    }

    /// Upper cell index on each axis.
    #[inline]
    pub fn high(&self) -> [usize; 3] {
        [self.low[0] + 1, self.low[1] + 1, self.low[2] + 1]
    }
}

/// Maps source-space queries onto grid cells.
///
/// # Example
///
/// ```rust
/// use trilut_grid::{Grid, Locator};
///
/// let grid = Grid::from_fn(33, |ch, i, j, k| [i, j, k][ch.index()] as f64).unwrap();
/// let n = Locator::new().locate([150.0, 230.0, 71.0], &grid).unwrap();
/// assert_eq!(n.low, [19, 29, 9]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Locator {
    extent: f64,
    edge_mode: EdgeMode,
}

impl Default for Locator {
    fn default() -> Self {
        Self {
            extent: DEFAULT_EXTENT,
            edge_mode: EdgeMode::default(),
        }
    }
}

impl Locator {
    /// Creates a locator with a 256-wide source range and edge clamping.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the source coordinate range.
    pub fn with_extent(mut self, extent: f64) -> Self {
        self.extent = extent;
        self
    }

    /// Sets the top-edge policy.
    pub fn with_edge_mode(mut self, edge_mode: EdgeMode) -> Self {
        self.edge_mode = edge_mode;
        self
    }

    /// Source coordinate range.
    #[inline]
    pub fn extent(&self) -> f64 {
        self.extent
    }

    /// Top-edge policy.
    #[inline]
    pub fn edge_mode(&self) -> EdgeMode {
        self.edge_mode
    }

    /// Source-space width of one cell for a grid of resolution `size`.
    #[inline]
    pub fn step(&self, size: usize) -> f64 {
        self.extent / size as f64
    }

    /// Lower and upper cell index of `coord` along `axis`.
    ///
    /// Fails for grids smaller than [`Grid::MIN_SIZE`], a non-positive
    /// extent, non-finite or negative coordinates, coordinates at or beyond
    /// the extent, and (in [`EdgeMode::Strict`]) coordinates in the top cell.
    pub fn bounds(&self, axis: usize, coord: f64, size: usize) -> GridResult<(usize, usize)> {
        if size < Grid::MIN_SIZE {
            return Err(GridError::InvalidSize(format!(
                "grid size must be at least {}, got {}",
                Grid::MIN_SIZE,
                size
            )));
        }
        if !(self.extent.is_finite() && self.extent > 0.0) {
            return Err(GridError::InvalidExtent(self.extent));
        }
        if !coord.is_finite() {
            return Err(GridError::NonFinite { axis, value: coord });
        }
        let low = (coord / self.step(size)).floor();
        if low < 0.0 || low > (size - 1) as f64 {
            return Err(GridError::IndexOutOfRange {
                axis,
                index: low as i64,
                size,
            });
        }

        let low = low as usize;
        match self.edge_mode {
            EdgeMode::Clamp => {
                let low = low.min(size - 2);
                Ok((low, low + 1))
            }
            EdgeMode::Strict if low + 1 < size => Ok((low, low + 1)),
            EdgeMode::Strict => Err(GridError::IndexOutOfRange {
                axis,
                index: (low + 1) as i64,
                size,
            }),
        }
    }

    /// Gathers the 8 corners around `query` from every channel of `grid`.
    ///
    /// Corners are in `000..111` bit order with axis 0 most significant.
    pub fn locate(&self, query: [f64; 3], grid: &Grid) -> GridResult<Neighborhood> {
        let size = grid.size();
        let step = self.step(size);

        let (i0, i1) = self.bounds(0, query[0], size)?;
        let (j0, j1) = self.bounds(1, query[1], size)?;
        let (k0, k1) = self.bounds(2, query[2], size)?;
        trace!(?query, size, step, low = ?[i0, j0, k0], "locate");

        let gather = |channel: Channel| -> GridResult<Cube> {
            let mut corners = [Corner::default(); 8];
            let mut n = 0;
            for i in [i0, i1] {
                for j in [j0, j1] {
                    for k in [k0, k1] {
                        corners[n] = grid.corner(channel, i, j, k)?;
                        n += 1;
                    }
                }
            }
            Ok(Cube::from_array(corners))
        };

        Ok(Neighborhood {
            step,
            low: [i0, j0, k0],
            red: gather(Channel::Red)?,
            green: gather(Channel::Green)?,
            blue: gather(Channel::Blue)?,
        })
    }
}

/// Gathers the corners around `query` with the default locator.
///
/// Shorthand for `Locator::new().locate(query, grid)`.
pub fn locate_neighbors(query: [f64; 3], grid: &Grid) -> GridResult<Neighborhood> {
    Locator::new().locate(query, grid)
}

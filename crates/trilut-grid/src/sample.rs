//! Trilinear sampling of a grid at source-space queries.
//!
//! Ties the [`Locator`] to the interpolation engine: find the cell, rescale
//! the query into grid space, run [`trilinear`] once per channel.

use crate::{Channel, EdgeMode, Grid, GridResult, Locator};
use tracing::{debug, trace};
use trilut_math::{trilinear, Interpolated};

#[cfg(feature = "rayon")]
use rayon::prelude::*;

/// An RGB result paired with the query that produced it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    /// Source-space query, as supplied
    pub query: [f64; 3],
    /// Interpolated output per channel
    pub rgb: [f64; 3],
}

/// Samples a grid with trilinear interpolation.
///
/// Borrows the grid read-only, so any number of samplers may share one
/// grid across threads.
///
/// # Example
///
/// ```rust
/// use trilut_grid::{Grid, Sampler};
///
/// let grid = Grid::from_fn(33, |ch, i, j, k| [i, j, k][ch.index()] as f64).unwrap();
/// let sampler = Sampler::new(&grid);
/// let s = sampler.sample([150.0, 230.0, 71.0]).unwrap();
/// assert!((s.rgb[0] - 150.0 / sampler.step()).abs() < 1e-9);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Sampler<'a> {
    grid: &'a Grid,
    locator: Locator,
}

impl<'a> Sampler<'a> {
    /// Creates a sampler with the default [`Locator`].
    pub fn new(grid: &'a Grid) -> Self {
        Self {
            grid,
            locator: Locator::new(),
        }
    }

    /// Sets the source coordinate range.
    pub fn with_extent(mut self, extent: f64) -> Self {
        self.locator = self.locator.with_extent(extent);
        self
    }

    /// Sets the top-edge policy.
    pub fn with_edge_mode(mut self, edge_mode: EdgeMode) -> Self {
        self.locator = self.locator.with_edge_mode(edge_mode);
        self
    }

    /// Replaces the locator.
    pub fn with_locator(mut self, locator: Locator) -> Self {
        self.locator = locator;
        self
    }

    /// The sampled grid.
    #[inline]
    pub fn grid(&self) -> &'a Grid {
        self.grid
    }

    /// The locator in use.
    #[inline]
    pub fn locator(&self) -> &Locator {
        &self.locator
    }

    /// Source-space width of one grid cell.
    #[inline]
    pub fn step(&self) -> f64 {
        self.locator.step(self.grid.size())
    }

    /// Rescales a source-space query into grid-index space.
    ///
    /// In [`EdgeMode::Clamp`] the result is capped at `size - 1` so top-cell
    /// queries evaluate at the last grid sample.
    pub fn to_grid_space(&self, query: [f64; 3]) -> [f64; 3] {
        let step = self.step();
        let top = (self.grid.size() - 1) as f64;
        query.map(|q| match self.locator.edge_mode() {
            EdgeMode::Clamp => (q / step).min(top),
            EdgeMode::Strict => q / step,
        })
    }

    /// Interpolates one channel at `query`.
    pub fn sample_channel(&self, query: [f64; 3], channel: Channel) -> GridResult<Interpolated<[f64; 3]>> {
        let cells = self.locator.locate(query, self.grid)?;
        let value = trilinear(self.to_grid_space(query), cells.channel(channel))?.value;
        Ok(Interpolated::new(query, value))
    }

    /// Interpolates all three channels at `query`.
    pub fn sample(&self, query: [f64; 3]) -> GridResult<Sample> {
        let cells = self.locator.locate(query, self.grid)?;
        let point = self.to_grid_space(query);
        trace!(?query, ?point, "sample");

        let mut rgb = [0.0; 3];
        for channel in Channel::ALL {
            rgb[channel.index()] = trilinear(point, cells.channel(channel))?.value;
        }
        Ok(Sample { query, rgb })
    }

    /// Interpolates a batch of queries.
    ///
    /// Results are in query order; a failing query does not stop the rest.
    /// Runs in parallel with the `rayon` feature.
    pub fn sample_batch(&self, queries: &[[f64; 3]]) -> Vec<GridResult<Sample>> {
        debug!(count = queries.len(), size = self.grid.size(), "sample batch");

        #[cfg(feature = "rayon")]
        let results = queries.par_iter().map(|&q| self.sample(q)).collect();

        #[cfg(not(feature = "rayon"))]
        let results = queries.iter().map(|&q| self.sample(q)).collect();

        results
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::GridError;
    use approx::assert_abs_diff_eq;

    fn identity(size: usize) -> Grid {
        Grid::from_fn(size, |ch, i, j, k| [i, j, k][ch.index()] as f64).unwrap()
    }

    #[test]
    fn test_identity_reproduces_grid_coords() {
        let grid = identity(33);
        let sampler = Sampler::new(&grid);
        let step = sampler.step();
        for q in [[150.0, 230.0, 71.0], [0.0, 0.0, 0.0], [12.3, 99.9, 200.1]] {
            let s = sampler.sample(q).unwrap();
            assert_eq!(s.query, q);
            for c in 0..3 {
                assert_abs_diff_eq!(s.rgb[c], q[c] / step, epsilon = 1e-9);
            }
        }
    }

    #[test]
    fn test_sample_channel_matches_sample() {
        let grid = Grid::from_fn(9, |ch, i, j, k| ((i * 7 + j * 3 + k) % 5) as f64 + ch.index() as f64)
            .unwrap();
        let sampler = Sampler::new(&grid);
        let q = [37.0, 101.5, 220.0];
        let s = sampler.sample(q).unwrap();
        for ch in Channel::ALL {
            let r = sampler.sample_channel(q, ch).unwrap();
            assert_eq!(r.coord, q);
            assert_eq!(r.value, s.rgb[ch.index()]);
        }
    }

    #[test]
    fn test_top_edge_clamps_to_last_sample() {
        let grid = identity(33);
        let s = Sampler::new(&grid).sample([255.0, 255.0, 255.0]).unwrap();
        assert_eq!(s.rgb, [32.0, 32.0, 32.0]);
    }

    #[test]
    fn test_top_edge_strict_fails() {
        let grid = identity(33);
        let sampler = Sampler::new(&grid).with_edge_mode(EdgeMode::Strict);
        assert!(matches!(
            sampler.sample([255.0, 0.0, 0.0]),
            Err(GridError::IndexOutOfRange { axis: 0, .. })
        ));
    }

    #[test]
    fn test_with_locator_replaces_settings() {
        let grid = identity(9);
        let locator = Locator::new().with_extent(9.0).with_edge_mode(EdgeMode::Strict);
        let sampler = Sampler::new(&grid).with_locator(locator);

        assert!(std::ptr::eq(sampler.grid(), &grid));
        assert_eq!(sampler.locator(), &locator);
        assert_eq!(sampler.step(), 1.0);
        assert!(sampler.sample([8.5, 0.0, 0.0]).is_err());
        assert_abs_diff_eq!(sampler.sample([2.5, 3.0, 7.25]).unwrap().rgb[2], 7.25, epsilon = 1e-12);
    }

    #[test]
    fn test_custom_extent() {
        let grid = identity(5);
        let sampler = Sampler::new(&grid).with_extent(1.0);
        assert_eq!(sampler.step(), 0.2);
        let s = sampler.sample([0.5, 0.1, 0.7]).unwrap();
        assert_abs_diff_eq!(s.rgb[0], 2.5, epsilon = 1e-9);
        assert_abs_diff_eq!(s.rgb[1], 0.5, epsilon = 1e-9);
        assert_abs_diff_eq!(s.rgb[2], 3.5, epsilon = 1e-9);
    }

    #[test]
    fn test_batch_keeps_order_and_errors() {
        let grid = identity(17);
        let sampler = Sampler::new(&grid);
        let queries = [[10.0, 20.0, 30.0], [-5.0, 0.0, 0.0], [200.0, 100.0, 50.0]];
        let results = sampler.sample_batch(&queries);
        assert_eq!(results.len(), 3);
        assert_eq!(results[0].as_ref().unwrap().query, queries[0]);
        assert!(results[1].is_err());
        assert_eq!(results[2].as_ref().unwrap().query, queries[2]);
    }
}

//! Channel-major 3D sample grid.
//!
//! A grid holds one `D x D x D` cube of samples per color channel, stored
//! as a flat `(3, D, D, D)` array:
//!
//! ```text
//! idx = ((channel * D + i) * D + j) * D + k
//! ```
//!
//! This is the layout a reshaped text LUT lands in, so loading is a plain
//! copy. Grids are read-only once built and can be shared freely between
//! threads.

use crate::{GridError, GridResult};
use trilut_math::Corner;

/// Output color channel of a grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Channel {
    /// Red (channel 0)
    Red,
    /// Green (channel 1)
    Green,
    /// Blue (channel 2)
    Blue,
}

impl Channel {
    /// All channels in storage order.
    pub const ALL: [Channel; 3] = [Channel::Red, Channel::Green, Channel::Blue];

    /// Storage index of the channel.
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Channel::Red => 0,
            Channel::Green => 1,
            Channel::Blue => 2,
        }
    }
}

/// A 3D lookup grid with one sample cube per channel.
///
/// # Example
///
/// ```rust
/// use trilut_grid::{Channel, Grid};
///
/// let grid = Grid::from_fn(3, |ch, i, j, k| [i, j, k][ch.index()] as f64).unwrap();
/// assert_eq!(grid.get(Channel::Green, 0, 2, 1).unwrap(), 2.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    size: usize,
    data: Vec<f64>,
}

impl Grid {
    /// Smallest usable resolution: one cell per axis.
    pub const MIN_SIZE: usize = 2;

    /// Number of channels.
    pub const CHANNELS: usize = 3;

    /// Creates a grid from channel-major data.
    ///
    /// `data` must hold exactly `3 * size^3` samples and `size` must be at
    /// least 2.
    pub fn new(size: usize, data: Vec<f64>) -> GridResult<Self> {
        let expected = Self::expected_len(size)?;
        if data.len() != expected {
            return Err(GridError::InvalidSize(format!(
                "expected {} samples for size {}, got {}",
                expected,
                size,
                data.len()
            )));
        }
        Ok(Self { size, data })
    }

    /// Creates a grid by evaluating `f` at every `(channel, i, j, k)`.
    pub fn from_fn<F>(size: usize, mut f: F) -> GridResult<Self>
    where
        F: FnMut(Channel, usize, usize, usize) -> f64,
    {
        let mut data = Vec::with_capacity(Self::expected_len(size)?);
        for ch in Channel::ALL {
            for i in 0..size {
                for j in 0..size {
                    for k in 0..size {
                        data.push(f(ch, i, j, k));
                    }
                }
            }
        }
        Ok(Self { size, data })
    }

    /// Grid resolution `D`.
    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Raw channel-major samples.
    #[inline]
    pub fn data(&self) -> &[f64] {
        &self.data
    }

    /// Samples of one channel as a flat `D^3` slice.
    pub fn channel(&self, channel: Channel) -> &[f64] {
        let len = self.size * self.size * self.size;
        let start = channel.index() * len;
        &self.data[start..start + len]
    }

    /// Returns the sample at `(channel, i, j, k)`.
    ///
    /// Fails with [`GridError::IndexOutOfRange`] if any index exceeds
    /// `size - 1`.
    pub fn get(&self, channel: Channel, i: usize, j: usize, k: usize) -> GridResult<f64> {
        for (axis, index) in [i, j, k].into_iter().enumerate() {
            if index >= self.size {
                return Err(GridError::IndexOutOfRange {
                    axis,
                    index: index as i64,
                    size: self.size,
                });
            }
        }
        Ok(self.data[self.index(channel, i, j, k)])
    }

    /// Returns the sample at `(channel, i, j, k)` tagged with its indices.
    #[inline]
    pub fn corner(&self, channel: Channel, i: usize, j: usize, k: usize) -> GridResult<Corner> {
        Ok(Corner::at_index(i, j, k, self.get(channel, i, j, k)?))
    }

    #[inline]
    fn index(&self, channel: Channel, i: usize, j: usize, k: usize) -> usize {
        ((channel.index() * self.size + i) * self.size + j) * self.size + k
    }

    fn expected_len(size: usize) -> GridResult<usize> {
        if size < Self::MIN_SIZE {
            return Err(GridError::InvalidSize(format!(
                "grid size must be at least {}, got {}",
                Self::MIN_SIZE,
                size
            )));
        }
        size.checked_pow(3)
            .and_then(|n| n.checked_mul(Self::CHANNELS))
            .ok_or_else(|| GridError::InvalidSize(format!("grid size {} is too large", size)))
    }
}

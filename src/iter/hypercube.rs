//! Points of a regularly subdivided hypercube.
//!
//! The grid `{0, ..., k-1}^n` is walked in odometer order: the last
//! coordinate moves fastest and carries into the one before it. For
//! n = 2, k = 3:
//!
//! ```text
//! (0,0) (0,1) (0,2)
//! (1,0) (1,1) (1,2)
//! (2,0) (2,1) (2,2)
//! ```

use crate::utils::grid_point_count;

/// Cursor over the `k^n` points of an n-dimensional grid with k
/// subdivisions per axis.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hypercube {
    divisions: usize,
    coords: Vec<usize>,
    ended: bool,
}

impl Hypercube {
    /// Cursor positioned on the origin.
    ///
    /// With `divisions == 0` and `dimension > 0` the grid has no point and
    /// the cursor starts ended; with `dimension == 0` it has exactly one,
    /// the empty point.
    pub fn new(dimension: usize, divisions: usize) -> Self {
        let mut it = Self {
            divisions,
            coords: vec![0; dimension],
            ended: false,
        };
        it.reset();
        it
    }

    #[inline]
    pub fn dimension(&self) -> usize {
        self.coords.len()
    }

    #[inline]
    pub fn divisions(&self) -> usize {
        self.divisions
    }

    /// Total number of points, `k^n`, or `None` on overflow.
    pub fn total(&self) -> Option<usize> {
        grid_point_count(self.dimension(), self.divisions)
    }

    #[inline]
    pub fn is_ended(&self) -> bool {
        self.ended
    }

    /// Coordinate `axis` of the current point.
    ///
    /// # Panics
    /// Panics if `axis >= dimension`.
    #[inline]
    pub fn get(&self, axis: usize) -> usize {
        assert!(
            axis < self.dimension(),
            "axis {axis} out of range for a {}-dimensional grid",
            self.dimension()
        );
        self.coords[axis]
    }

    /// The current point, or `None` once ended.
    pub fn current(&self) -> Option<&[usize]> {
        (!self.ended).then_some(self.coords.as_slice())
    }

    /// Move to the next point. No-op once ended.
    pub fn advance(&mut self) {
        if self.ended {
            return;
        }
        for c in self.coords.iter_mut().rev() {
            *c += 1;
            if *c < self.divisions {
                return;
            }
            *c = 0;
        }
        // every axis wrapped
        self.ended = true;
    }

    /// Restart at the origin.
    pub fn reset(&mut self) {
        self.coords.fill(0);
        self.ended = self.divisions == 0 && !self.coords.is_empty();
    }
}

impl Iterator for Hypercube {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Self::Item> {
        let item = self.current()?.to_vec();
        self.advance();
        Some(item)
    }
}

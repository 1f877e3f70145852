use std::time::Duration;

use common::{error::Error, types::Vec3};

/// Storage for `N` logical 3-vectors with a timed element-wise add.
pub trait LayoutVariant: Sized {
    /// Stable display name, independent of the instance size.
    const NAME: &'static str;

    /// Allocates zero-initialised storage for `len` logical vectors.
    ///
    /// Returns `Err` if the storage size overflows or the allocator refuses it.
    fn with_len(len: usize) -> Result<Self, Error>;

    /// Adds `(x, y, z)` to every element once, in index order, and returns the
    /// time spent on that pass alone.
    fn run(&mut self, x: f64, y: f64, z: f64) -> Duration;

    /// Number of logical vectors held.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Reads the logical vector at `index`, whatever the storage shape.
    fn element(&self, index: usize) -> Option<Vec3>;

    fn name(&self) -> &'static str {
        Self::NAME
    }
}

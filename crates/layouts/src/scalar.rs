//! Struct-of-arrays layouts: one interleaved scalar sequence of length 3N,
//! addressed through computed offsets `3i`, `3i + 1` and `3i + 2`.

use std::hint::black_box;
use std::time::{Duration, Instant};

use common::{
    error::Error,
    types::{COMPONENTS, Vec3},
};

use super::buffer::HeapBuffer;
use super::traits::LayoutVariant;

fn cell_count(len: usize) -> Result<usize, Error> {
    len.checked_mul(COMPONENTS)
        .ok_or(Error::CapacityOverflow { len })
}

#[allow(clippy::needless_range_loop)]
fn add_interleaved(cells: &mut [f64], len: usize, x: f64, y: f64, z: f64) -> Duration {
    let start_time = Instant::now();
    for i in 0..len {
        cells[3 * i] += x;
        cells[3 * i + 1] += y;
        cells[3 * i + 2] += z;
    }
    black_box(&mut *cells);
    start_time.elapsed()
}

fn read_interleaved(cells: &[f64], len: usize, index: usize) -> Option<Vec3> {
    if index >= len {
        return None;
    }
    Some(Vec3::new(
        cells[3 * index],
        cells[3 * index + 1],
        cells[3 * index + 2],
    ))
}

/// `f64` cells in a fixed-size raw heap buffer.
pub struct ScalarBuffer {
    len: usize,
    cells: HeapBuffer<f64>,
}

impl LayoutVariant for ScalarBuffer {
    const NAME: &'static str = "f64 buffer (size: 3N)";

    fn with_len(len: usize) -> Result<Self, Error> {
        let cells = HeapBuffer::zeroed(cell_count(len)?)?;
        Ok(ScalarBuffer { len, cells })
    }

    fn run(&mut self, x: f64, y: f64, z: f64) -> Duration {
        add_interleaved(self.cells.as_mut_slice(), self.len, x, y, z)
    }

    fn len(&self) -> usize {
        self.len
    }

    fn element(&self, index: usize) -> Option<Vec3> {
        read_interleaved(self.cells.as_slice(), self.len, index)
    }
}

/// `f64` cells in a `Vec`, resized to 3N zeros.
pub struct ScalarVec {
    len: usize,
    cells: Vec<f64>,
}

impl LayoutVariant for ScalarVec {
    const NAME: &'static str = "Vec<f64> (size: 3N)";

    fn with_len(len: usize) -> Result<Self, Error> {
        let count = cell_count(len)?;
        let mut cells = Vec::new();
        cells
            .try_reserve_exact(count)
            .map_err(|_| Error::AllocationFailed {
                bytes: count.saturating_mul(size_of::<f64>()),
            })?;
        cells.resize(count, 0.0);
        Ok(ScalarVec { len, cells })
    }

    fn run(&mut self, x: f64, y: f64, z: f64) -> Duration {
        add_interleaved(&mut self.cells, self.len, x, y, z)
    }

    fn len(&self) -> usize {
        self.len
    }

    fn element(&self, index: usize) -> Option<Vec3> {
        read_interleaved(&self.cells, self.len, index)
    }
}

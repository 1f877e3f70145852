//! Array-of-structs layouts: N `Vec3` records, addressed through named fields.

use std::hint::black_box;
use std::time::{Duration, Instant};

use common::{error::Error, types::Vec3};

use super::buffer::HeapBuffer;
use super::traits::LayoutVariant;

#[allow(clippy::needless_range_loop)]
fn add_fields(records: &mut [Vec3], x: f64, y: f64, z: f64) -> Duration {
    let start_time = Instant::now();
    for i in 0..records.len() {
        records[i].x += x;
        records[i].y += y;
        records[i].z += z;
    }
    black_box(&mut *records);
    start_time.elapsed()
}

/// `Vec3` records in a fixed-size raw heap buffer.
pub struct RecordBuffer {
    records: HeapBuffer<Vec3>,
}

impl LayoutVariant for RecordBuffer {
    const NAME: &'static str = "Vec3 buffer (size: N)";

    fn with_len(len: usize) -> Result<Self, Error> {
        Ok(RecordBuffer {
            records: HeapBuffer::zeroed(len)?,
        })
    }

    fn run(&mut self, x: f64, y: f64, z: f64) -> Duration {
        add_fields(self.records.as_mut_slice(), x, y, z)
    }

    fn len(&self) -> usize {
        self.records.as_slice().len()
    }

    fn element(&self, index: usize) -> Option<Vec3> {
        self.records.as_slice().get(index).copied()
    }
}

/// `Vec3` records in a `Vec`, resized to N default records.
pub struct RecordVec {
    records: Vec<Vec3>,
}

impl LayoutVariant for RecordVec {
    const NAME: &'static str = "Vec<Vec3> (size: N)";

    fn with_len(len: usize) -> Result<Self, Error> {
        let mut records = Vec::new();
        records
            .try_reserve_exact(len)
            .map_err(|_| Error::AllocationFailed {
                bytes: len.saturating_mul(size_of::<Vec3>()),
            })?;
        records.resize(len, Vec3::default());
        Ok(RecordVec { records })
    }

    fn run(&mut self, x: f64, y: f64, z: f64) -> Duration {
        add_fields(&mut self.records, x, y, z)
    }

    fn len(&self) -> usize {
        self.records.len()
    }

    fn element(&self, index: usize) -> Option<Vec3> {
        self.records.get(index).copied()
    }
}

use std::time::Duration;

use common::{error::Error, types::Vec3};

use super::record::{RecordBuffer, RecordVec};
use super::scalar::{ScalarBuffer, ScalarVec};
use super::traits::LayoutVariant;

pub const VARIANT_COUNT: usize = 4;

/// Tag for one of the four measured layouts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LayoutKind {
    /// Interleaved `f64` cells in a raw heap buffer.
    ScalarBuffer,
    /// Interleaved `f64` cells in a `Vec`.
    ScalarVec,
    /// `Vec3` records in a raw heap buffer.
    RecordBuffer,
    /// `Vec3` records in a `Vec`.
    RecordVec,
}

impl LayoutKind {
    /// Every layout, in sweep and output order.
    pub const ALL: [LayoutKind; VARIANT_COUNT] = [
        LayoutKind::ScalarBuffer,
        LayoutKind::ScalarVec,
        LayoutKind::RecordBuffer,
        LayoutKind::RecordVec,
    ];

    pub fn name(self) -> &'static str {
        match self {
            LayoutKind::ScalarBuffer => ScalarBuffer::NAME,
            LayoutKind::ScalarVec => ScalarVec::NAME,
            LayoutKind::RecordBuffer => RecordBuffer::NAME,
            LayoutKind::RecordVec => RecordVec::NAME,
        }
    }

    /// Allocates one instance holding `len` vectors, times `trials` passes
    /// adding `shift` to it, then releases it.
    ///
    /// Storage is allocated once for all trials, so first-touch cost lands in
    /// the first sample.
    pub fn measure(self, len: usize, trials: usize, shift: Vec3) -> Result<Vec<Duration>, Error> {
        match self {
            LayoutKind::ScalarBuffer => measure::<ScalarBuffer>(len, trials, shift),
            LayoutKind::ScalarVec => measure::<ScalarVec>(len, trials, shift),
            LayoutKind::RecordBuffer => measure::<RecordBuffer>(len, trials, shift),
            LayoutKind::RecordVec => measure::<RecordVec>(len, trials, shift),
        }
    }
}

fn measure<L: LayoutVariant>(
    len: usize,
    trials: usize,
    shift: Vec3,
) -> Result<Vec<Duration>, Error> {
    let mut layout = L::with_len(len)?;
    let samples = (0..trials)
        .map(|_| layout.run(shift.x, shift.y, shift.z))
        .collect();
    Ok(samples)
}

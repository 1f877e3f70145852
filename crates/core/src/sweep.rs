use std::time::Duration;

use tracing::{debug, info};

use common::{error::Error, types::Vec3};
use layouts::{LayoutKind, VARIANT_COUNT};

use super::random::RandomSource;

/// Number of problem sizes in a sweep.
pub const STEP_COUNT: usize = 30;

/// Timed passes per (layout, size) point; the point records their mean.
pub const TRIALS_PER_POINT: usize = 3;

/// Returns `step_unit * (s + 1)` for every step `s` in `[0, STEP_COUNT)`.
pub fn size_sequence(step_unit: usize) -> Result<Vec<usize>, Error> {
    if step_unit == 0 {
        return Err(Error::ZeroStepUnit);
    }

    (0..STEP_COUNT)
        .map(|step| {
            step_unit
                .checked_mul(step + 1)
                .ok_or(Error::SizeOverflow { step_unit, step })
        })
        .collect()
}

/// Arithmetic mean of `samples`, in fractional microseconds.
pub fn mean_micros(samples: &[Duration]) -> f64 {
    if samples.is_empty() {
        return 0.0;
    }
    let total: f64 = samples.iter().map(|d| d.as_secs_f64() * 1e6).sum();
    total / samples.len() as f64
}

/// Aggregated timings of one sweep.
#[derive(Debug, Clone, PartialEq)]
pub struct SweepReport {
    /// Additive vector applied by every timed pass.
    pub shift: Vec3,
    pub sizes: Vec<usize>,
    /// `times[layout][step]`, mean microseconds, rows in `LayoutKind::ALL` order.
    pub times: Vec<Vec<f64>>,
}

impl SweepReport {
    /// Layout names in row order of `times`.
    pub fn names() -> [&'static str; VARIANT_COUNT] {
        LayoutKind::ALL.map(LayoutKind::name)
    }
}

/// Runs every layout over the generated sizes and averages repeated trials.
pub struct BenchmarkSweep {
    rng: RandomSource,
}

impl BenchmarkSweep {
    pub fn new(rng: RandomSource) -> Self {
        BenchmarkSweep { rng }
    }

    /// Measures all `VARIANT_COUNT x STEP_COUNT` points for `step_unit`.
    ///
    /// The shift is drawn once and reused for every point. Any allocation
    /// failure aborts the sweep.
    pub fn run(&mut self, step_unit: usize) -> Result<SweepReport, Error> {
        let sizes = size_sequence(step_unit)?;
        let shift = self.rng.draw_shift()?;

        info!(
            step_unit,
            largest = sizes[STEP_COUNT - 1],
            x = shift.x,
            y = shift.y,
            z = shift.z,
            "Starting sweep"
        );

        let mut times = Vec::with_capacity(VARIANT_COUNT);
        for kind in LayoutKind::ALL {
            let mut row = Vec::with_capacity(sizes.len());
            for &size in &sizes {
                let samples = kind.measure(size, TRIALS_PER_POINT, shift)?;
                let mean = mean_micros(&samples);
                debug!(layout = kind.name(), size, mean_us = mean, "Measured point");
                row.push(mean);
            }
            info!(layout = kind.name(), "Layout finished");
            times.push(row);
        }

        Ok(SweepReport {
            shift,
            sizes,
            times,
        })
    }
}

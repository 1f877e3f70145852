pub mod random;
pub mod sweep;

pub use layouts::{LayoutKind, VARIANT_COUNT};
pub use random::{DEFAULT_SEED, RandomSource};
pub use sweep::{BenchmarkSweep, STEP_COUNT, SweepReport, TRIALS_PER_POINT};

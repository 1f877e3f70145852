use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The requested element count does not fit in a valid allocation layout.
    CapacityOverflow { len: usize },

    /// The allocator could not provide the requested number of bytes.
    AllocationFailed { bytes: usize },

    /// A benchmark sweep was requested with a step unit of zero.
    ZeroStepUnit,

    /// `step_unit * (step + 1)` does not fit in `usize`.
    SizeOverflow { step_unit: usize, step: usize },

    /// A random draw was requested over an empty or non-finite range.
    InvalidRange,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::CapacityOverflow { len } => {
                write!(f, "Capacity for {} elements overflows the address space.", len)
            }

            Error::AllocationFailed { bytes } => {
                write!(f, "Failed to allocate {} bytes for layout storage.", bytes)
            }

            Error::ZeroStepUnit => write!(f, "Step unit must be a positive integer."),

            Error::SizeOverflow { step_unit, step } => write!(
                f,
                "Problem size at step {} overflows for step unit {}.",
                step, step_unit
            ),

            Error::InvalidRange => write!(f, "Random range is empty or not finite."),
        }
    }
}

impl std::error::Error for Error {}

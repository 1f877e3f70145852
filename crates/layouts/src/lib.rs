pub mod buffer;
pub mod kind;
pub mod record;
pub mod scalar;
pub mod traits;

pub use kind::{LayoutKind, VARIANT_COUNT};
pub use record::{RecordBuffer, RecordVec};
pub use scalar::{ScalarBuffer, ScalarVec};
pub use traits::LayoutVariant;

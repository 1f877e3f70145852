use std::alloc::{self, Layout};
use std::ptr::NonNull;
use std::slice;

use common::{error::Error, types::Vec3};

/// Element types whose all-zero bit pattern is a valid value.
///
/// # Safety
/// Implementors must be plain data for which zeroed memory is initialised.
pub(crate) unsafe trait Zeroable: Copy {}

// SAFETY: 0x0 is +0.0.
unsafe impl Zeroable for f64 {}
// SAFETY: `Vec3` is `repr(C)` over three `f64`.
unsafe impl Zeroable for Vec3 {}

/// Fixed-size, zero-initialised heap buffer obtained straight from the
/// global allocator. It never grows; the memory is released on drop.
pub(crate) struct HeapBuffer<T: Zeroable> {
    ptr: NonNull<T>,
    len: usize,
}

impl<T: Zeroable> HeapBuffer<T> {
    pub(crate) fn zeroed(len: usize) -> Result<Self, Error> {
        let layout = Layout::array::<T>(len).map_err(|_| Error::CapacityOverflow { len })?;

        if layout.size() == 0 {
            return Ok(HeapBuffer {
                ptr: NonNull::dangling(),
                len,
            });
        }

        // SAFETY: the layout has a non-zero size.
        let raw = unsafe { alloc::alloc_zeroed(layout) } as *mut T;
        let ptr = NonNull::new(raw).ok_or(Error::AllocationFailed {
            bytes: layout.size(),
        })?;

        Ok(HeapBuffer { ptr, len })
    }

    pub(crate) fn as_slice(&self) -> &[T] {
        // SAFETY: `ptr` is valid for `len` initialised elements (or dangling with len*size 0).
        unsafe { slice::from_raw_parts(self.ptr.as_ptr(), self.len) }
    }

    pub(crate) fn as_mut_slice(&mut self) -> &mut [T] {
        // SAFETY: as above, and `&mut self` guarantees exclusive access.
        unsafe { slice::from_raw_parts_mut(self.ptr.as_ptr(), self.len) }
    }
}

impl<T: Zeroable> Drop for HeapBuffer<T> {
    fn drop(&mut self) {
        if let Ok(layout) = Layout::array::<T>(self.len) {
            if layout.size() != 0 {
                // SAFETY: allocated in `zeroed` with this exact layout.
                unsafe { alloc::dealloc(self.ptr.as_ptr() as *mut u8, layout) };
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zeroed_scalars() {
        let buf = HeapBuffer::<f64>::zeroed(12).expect("allocation failed");
        assert_eq!(buf.as_slice().len(), 12);
        assert!(buf.as_slice().iter().all(|&v| v == 0.0));
    }

    #[test]
    fn test_zeroed_records() {
        let buf = HeapBuffer::<Vec3>::zeroed(4).expect("allocation failed");
        assert!(buf.as_slice().iter().all(|v| *v == Vec3::default()));
    }

    #[test]
    fn test_empty_buffer_does_not_allocate() {
        let mut buf = HeapBuffer::<f64>::zeroed(0).expect("empty buffer must succeed");
        assert!(buf.as_mut_slice().is_empty());
    }

    #[test]
    fn test_layout_overflow_is_reported() {
        let result = HeapBuffer::<Vec3>::zeroed(usize::MAX);
        assert_eq!(
            result.err(),
            Some(Error::CapacityOverflow { len: usize::MAX })
        );
    }
}

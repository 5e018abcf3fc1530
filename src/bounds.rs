//! Array bounds and pointer alignment helpers.

/// Number of elements in a statically sized array.
#[inline]
pub const fn array_len<T, const N: usize>(_array: &[T; N]) -> usize {
    N
}

/// Returns whether `ptr` points inside the storage of `array`.
///
/// This is an address range test only: it does not check that `ptr` is
/// aligned to an element boundary. A pointer one past the end of the array
/// is not inside it.
#[inline]
pub fn in_array<T, const N: usize>(ptr: *const T, array: &[T; N]) -> bool {
    let start = array.as_ptr() as usize;
    let addr = ptr as usize;
    addr >= start && addr < start + N * core::mem::size_of::<T>()
}

/// Aligns `addr` up to the power 2 alignment `align`.
/// `align` must be a power of 2; an `align` of 0 or 1 leaves `addr` unchanged.
/// `addr + align - 1` must not overflow `usize`.
#[inline]
pub const fn align_up(addr: usize, align: usize) -> usize {
    debug_assert!(align <= 1 || align.is_power_of_two());
    if align <= 1 {
        addr
    } else {
        (addr + align - 1) & !(align - 1)
    }
}

/// Aligns `addr` down to the power 2 alignment `align`.
/// `align` must be a power of 2; an `align` of 0 or 1 leaves `addr` unchanged.
#[inline]
pub const fn align_down(addr: usize, align: usize) -> usize {
    debug_assert!(align <= 1 || align.is_power_of_two());
    if align <= 1 {
        addr
    } else {
        addr & !(align - 1)
    }
}

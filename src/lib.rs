//! Foundational primitives for the secure element firmware.
//!
//! Byte-order codecs, raw memory operations, a constant-time comparison, and
//! alignment/bounds helpers. Every higher layer (protocol parsing, crypto,
//! display) calls down into these functions; nothing here allocates, blocks,
//! or retains state between calls. All buffers are caller-owned for the
//! duration of a single call.
//!
//! Bounds are a caller contract. The documented preconditions are backed by
//! `debug_assert!` and by safe-Rust slice indexing only; no runtime error
//! type exists at this layer.

#![cfg_attr(not(test), no_std)]

pub mod bounds;
pub mod endian;
pub mod mem;
pub mod secure;

// re-exported so callers can convert the secure comparison's Choice at the
// call site without naming the crate themselves
pub use subtle;

/// Fails the build when `predicate` is false, naming `id` in the diagnostic.
///
/// `predicate` must be decidable at compile time. The assertion has no
/// runtime cost and no runtime behavior.
///
/// ```
/// secel_utils::static_assert!(u32_is_four_bytes, core::mem::size_of::<u32>() == 4);
/// ```
#[macro_export]
macro_rules! static_assert {
    ($id:ident, $predicate:expr) => {
        const _: () = ::core::assert!(
            $predicate,
            concat!("static assertion failed: ", stringify!($id))
        );
    };
}

static_assert!(
    address_width_holds_u32,
    core::mem::size_of::<usize>() >= core::mem::size_of::<u32>()
);

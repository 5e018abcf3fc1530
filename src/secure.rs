//! Timing-attack-resistant comparison.
//!
//! An ordinary equality check returns at the first mismatching byte, which
//! leaks the mismatch position through execution time. On this device that
//! is an attack primitive, not a micro-optimization, so secret material is
//! only ever compared through this module: every byte of both buffers is
//! read on every call and the result is carried as a [`Choice`] so no
//! data-dependent branch is emitted.

use core::hint::black_box;

use subtle::{Choice, ConstantTimeEq};

/// Compares two equal-length buffers without leaking where they differ.
///
/// # Arguments
/// * `a` - first buffer.
/// * `b` - second buffer; must have `a`'s length (the lengths are public
///   values, only the contents are secret).
///
/// Returns a [`Choice`] that is true iff the buffers are byte-for-byte
/// equal; convert with `bool::from` at the call site.
///
/// Execution time depends only on the length, never on the contents or on
/// the position of the first mismatch. Never routes through the ordinary
/// short-circuiting [`crate::mem::compare`].
#[inline(never)]
pub fn secure_eq(a: &[u8], b: &[u8]) -> Choice {
    debug_assert_eq!(a.len(), b.len());
    diff_fold(a, b).ct_eq(&0)
}

fn diff_fold(a: &[u8], b: &[u8]) -> u8 {
    accumulate(a.iter().zip(b).map(|(x, y)| x ^ y))
}

// accumulate the difference over the whole length unconditionally;
// black_box keeps the optimizer from collapsing the loop back into an
// early-exit compare
fn accumulate(diffs: impl Iterator<Item = u8>) -> u8 {
    let mut diff = 0u8;
    for d in diffs {
        diff |= black_box(d);
    }
    diff
}

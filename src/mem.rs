//! Raw memory operations over caller-owned buffers.
//!
//! Nothing here allocates or retains state; every buffer belongs to the
//! caller for the duration of the call. Sizing is the caller's contract:
//! in-contract inputs never panic, out-of-contract inputs hit a safe-Rust
//! bounds panic rather than corrupting adjacent memory.

use core::cmp::Ordering;
use core::ops::Range;

// The one copy algorithm. Copies forward when the destination starts at or
// below the source, backward otherwise, so overlapping ranges receive the
// original source bytes.
//
// Safety: both pointers must be valid for `len` bytes.
unsafe fn copy_raw(dst: *mut u8, src: *const u8, len: usize) {
    if (dst as usize) <= (src as usize) {
        let mut i = 0;
        while i < len {
            *dst.add(i) = *src.add(i);
            i += 1;
        }
    } else {
        let mut i = len;
        while i > 0 {
            i -= 1;
            *dst.add(i) = *src.add(i);
        }
    }
}

/// Copies `src` into the front of `dst`.
///
/// # Arguments
/// * `dst` - destination, with at least `src.len()` bytes.
/// * `src` - the bytes to copy.
///
/// The borrow checker guarantees the two slices are disjoint; the routine
/// itself is the same overlap-safe copy that backs [`copy_within`].
pub fn copy(dst: &mut [u8], src: &[u8]) {
    let len = src.len();
    let dst = &mut dst[..len];
    unsafe { copy_raw(dst.as_mut_ptr(), src.as_ptr(), len) };
}

/// Copies `buf[src]` to `buf[dst..dst + src.len()]` within a single buffer.
///
/// The source and destination ranges may overlap: the destination always
/// receives the bytes the source range held before the call.
///
/// # Arguments
/// * `buf` - the buffer to shift data within.
/// * `src` - source byte range, within `buf`.
/// * `dst` - destination start index; `dst + src.len()` must be within `buf`.
pub fn copy_within(buf: &mut [u8], src: Range<usize>, dst: usize) {
    let len = src.len();
    // dst is checked on its own first so the subtraction cannot wrap
    assert!(src.end <= buf.len() && dst <= buf.len() && len <= buf.len() - dst);
    let ptr = buf.as_mut_ptr();
    unsafe { copy_raw(ptr.add(dst), ptr.add(src.start), len) };
}

/// Sets every byte of `dst` to `value`.
#[inline]
pub fn fill(dst: &mut [u8], value: u8) {
    dst.fill(value);
}

/// Writes `count` repetitions of the 4-byte `pattern` into `dst`, consuming
/// exactly `4 * count` bytes.
///
/// The pattern is laid out big-endian, matching the codec's network-order
/// convention ([`crate::endian::encode_u32_be`]).
pub fn fill_pattern32(dst: &mut [u8], pattern: u32, count: usize) {
    let bytes = pattern.to_be_bytes();
    for chunk in dst[..4 * count].chunks_exact_mut(4) {
        chunk.copy_from_slice(&bytes);
    }
}

/// Byte-wise XOR of `a` and `b` into `dst`: `dst[i] = a[i] ^ b[i]` over
/// `dst.len()` bytes. Both sources must have at least `dst.len()` bytes.
///
/// For the aliased form the C convention allows (`dst` doubling as one of
/// the sources), use [`xor_assign`]; partial aliasing is unrepresentable in
/// this API.
pub fn xor(dst: &mut [u8], a: &[u8], b: &[u8]) {
    for (i, byte) in dst.iter_mut().enumerate() {
        *byte = a[i] ^ b[i];
    }
}

/// In-place byte-wise XOR: `dst[i] ^= src[i]` over `dst.len()` bytes.
pub fn xor_assign(dst: &mut [u8], src: &[u8]) {
    for (i, byte) in dst.iter_mut().enumerate() {
        *byte ^= src[i];
    }
}

/// Ordinary lexicographic comparison of two equal-length buffers.
///
/// Returns at the first mismatching byte, so execution time depends on the
/// data: never use this on secret material (see [`crate::secure`]).
pub fn compare(a: &[u8], b: &[u8]) -> Ordering {
    debug_assert_eq!(a.len(), b.len());
    for (x, y) in a.iter().zip(b) {
        match x.cmp(y) {
            Ordering::Equal => {}
            other => return other,
        }
    }
    Ordering::Equal
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn copy_writes_the_front_of_dst() {
        let mut dst = [0u8; 6];
        copy(&mut dst, &[1, 2, 3, 4]);
        assert_eq!(dst, [1, 2, 3, 4, 0, 0]);
    }

    #[test]
    fn copy_within_forward_overlap_keeps_original_bytes() {
        let mut buf = [1, 2, 3, 4, 5, 6];
        copy_within(&mut buf, 0..4, 2);
        assert_eq!(buf, [1, 2, 1, 2, 3, 4]);
    }

    #[test]
    fn copy_within_backward_overlap_keeps_original_bytes() {
        let mut buf = [1, 2, 3, 4, 5, 6];
        copy_within(&mut buf, 2..6, 0);
        assert_eq!(buf, [3, 4, 5, 6, 5, 6]);
    }

    #[test]
    #[should_panic]
    fn copy_within_rejects_destination_past_the_buffer() {
        let mut buf = [1u8, 2, 3, 4];
        copy_within(&mut buf, 0..2, 6);
    }

    #[test]
    #[should_panic]
    fn copy_within_rejects_destination_range_overrunning_the_buffer() {
        let mut buf = [1u8, 2, 3, 4];
        copy_within(&mut buf, 0..3, 3);
    }

    #[test]
    fn copy_within_identical_ranges_is_a_no_op() {
        let mut buf = [1, 2, 3, 4];
        copy_within(&mut buf, 0..4, 0);
        assert_eq!(buf, [1, 2, 3, 4]);
    }

    #[test]
    fn fill_sets_every_byte() {
        let mut buf = [0u8; 5];
        fill(&mut buf, 0xA5);
        assert_eq!(buf, [0xA5; 5]);
    }

    #[test]
    fn fill_pattern32_repeats_big_endian_and_stops_at_count() {
        let mut buf = [0xFFu8; 10];
        fill_pattern32(&mut buf, 0x1122_3344, 2);
        assert_eq!(
            buf,
            [0x11, 0x22, 0x33, 0x44, 0x11, 0x22, 0x33, 0x44, 0xFF, 0xFF]
        );
    }

    #[test]
    fn xor_assign_matches_disjoint_xor() {
        let a = [0x0Fu8, 0xF0, 0xAA];
        let b = [0xFFu8, 0x0F, 0x55];
        let mut disjoint = [0u8; 3];
        xor(&mut disjoint, &a, &b);

        let mut in_place = a;
        xor_assign(&mut in_place, &b);
        assert_eq!(disjoint, in_place);
    }

    #[test]
    fn compare_orders_lexicographically() {
        assert_eq!(compare(&[1, 2, 3], &[1, 2, 3]), Ordering::Equal);
        assert_eq!(compare(&[1, 2, 3], &[1, 3, 0]), Ordering::Less);
        assert_eq!(compare(&[2, 0, 0], &[1, 255, 255]), Ordering::Greater);
        assert_eq!(compare(&[], &[]), Ordering::Equal);
    }

    proptest! {
        #[test]
        fn xor_is_an_involution(a in proptest::collection::vec(any::<u8>(), 0..64), seed in any::<u64>()) {
            let b: Vec<u8> = a
                .iter()
                .enumerate()
                .map(|(i, _)| (seed.wrapping_add(i as u64) % 251) as u8)
                .collect();

            let mut once = vec![0u8; a.len()];
            xor(&mut once, &a, &b);
            let mut twice = vec![0u8; a.len()];
            xor(&mut twice, &once, &b);
            prop_assert_eq!(twice, a);
        }

        #[test]
        fn copy_within_matches_a_staged_copy(
            data in proptest::collection::vec(any::<u8>(), 1..32),
            src_start in 0usize..31,
            len in 0usize..32,
            dst in 0usize..31,
        ) {
            let n = data.len();
            let src_start = src_start % n;
            let len = len % (n - src_start + 1);
            let dst = dst % (n - len + 1);

            let mut direct = data.clone();
            copy_within(&mut direct, src_start..src_start + len, dst);

            // staging through a scratch buffer removes the overlap entirely
            let mut staged = data.clone();
            let scratch: Vec<u8> = data[src_start..src_start + len].to_vec();
            staged[dst..dst + len].copy_from_slice(&scratch);

            prop_assert_eq!(direct, staged);
        }

        #[test]
        fn compare_agrees_with_slice_ordering(
            a in proptest::collection::vec(any::<u8>(), 0..32),
            b in proptest::collection::vec(any::<u8>(), 0..32),
        ) {
            let n = a.len().min(b.len());
            prop_assert_eq!(compare(&a[..n], &b[..n]), a[..n].cmp(&b[..n]));
        }
    }
}

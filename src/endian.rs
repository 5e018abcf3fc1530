//! Byte-order codecs for the wire and storage formats the firmware speaks.
//!
//! The byte order is always part of the operation name, never inferred from
//! the host: encoded formats are protocol-defined, not architecture-defined.
//! Codec functions do no bounds checking of their own; the caller guarantees
//! `offset + width <= buf.len()` before the call.

/// Decodes a big-endian `u16` from `buf` at `offset`.
#[inline]
pub fn decode_u16_be(buf: &[u8], offset: usize) -> u16 {
    u16::from_be_bytes([buf[offset], buf[offset + 1]])
}

/// Decodes a big-endian `u32` from `buf` at `offset`.
#[inline]
pub fn decode_u32_be(buf: &[u8], offset: usize) -> u32 {
    u32::from_be_bytes([
        buf[offset],
        buf[offset + 1],
        buf[offset + 2],
        buf[offset + 3],
    ])
}

/// Decodes a little-endian `u16` from `buf` at `offset`.
#[inline]
pub fn decode_u16_le(buf: &[u8], offset: usize) -> u16 {
    u16::from_le_bytes([buf[offset], buf[offset + 1]])
}

/// Decodes a little-endian `u32` from `buf` at `offset`.
#[inline]
pub fn decode_u32_le(buf: &[u8], offset: usize) -> u32 {
    u32::from_le_bytes([
        buf[offset],
        buf[offset + 1],
        buf[offset + 2],
        buf[offset + 3],
    ])
}

/// Encodes the low 16 bits of `value` big-endian into `buf` at `offset`.
/// Higher-order bits of `value` are discarded.
#[inline]
pub fn encode_u16_be(buf: &mut [u8], offset: usize, value: u32) {
    buf[offset..offset + 2].copy_from_slice(&(value as u16).to_be_bytes());
}

/// Encodes `value` big-endian into `buf` at `offset`.
#[inline]
pub fn encode_u32_be(buf: &mut [u8], offset: usize, value: u32) {
    buf[offset..offset + 4].copy_from_slice(&value.to_be_bytes());
}

/// Encodes the low 16 bits of `value` little-endian into `buf` at `offset`.
/// Higher-order bits of `value` are discarded.
#[inline]
pub fn encode_u16_le(buf: &mut [u8], offset: usize, value: u32) {
    buf[offset..offset + 2].copy_from_slice(&(value as u16).to_le_bytes());
}

/// Encodes `value` little-endian into `buf` at `offset`.
#[inline]
pub fn encode_u32_le(buf: &mut [u8], offset: usize, value: u32) {
    buf[offset..offset + 4].copy_from_slice(&value.to_le_bytes());
}

/// Builds a `u16` from its high and low bytes.
#[inline]
pub const fn u16_from_parts(hi: u8, lo: u8) -> u16 {
    ((hi as u16) << 8) | lo as u16
}

/// Builds a `u32` from its four bytes, most significant first.
#[inline]
pub const fn u32_from_parts(b3: u8, b2: u8, b1: u8, b0: u8) -> u32 {
    ((b3 as u32) << 24) | ((b2 as u32) << 16) | ((b1 as u32) << 8) | b0 as u32
}

/// Reverses the byte order of a `u16`.
#[inline]
pub const fn swap_u16(value: u16) -> u16 {
    value.swap_bytes()
}

/// Reverses the byte order of a `u32`.
#[inline]
pub const fn swap_u32(value: u32) -> u32 {
    value.swap_bytes()
}

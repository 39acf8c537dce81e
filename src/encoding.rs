//! NIST SP 800-185 §2.3 framing primitives and the RFC 9861 length encoding.
//!
//! The integer encoders write into a caller-provided 9-byte scratch buffer and
//! return the encoded slice, so they never allocate. Lengths are `u64`
//! throughout.

use crate::{Error, Result};
use alloc::vec::Vec;

/// `left_encode(val)`: length byte followed by the minimal big-endian digits.
///
/// Zero encodes as `01 00`.
#[inline]
pub fn left_encode(val: u64, b: &mut [u8; 9]) -> &[u8] {
    b[1..].copy_from_slice(&val.to_be_bytes());
    let i = b[1..8].iter().take_while(|&&a| a == 0).count();
    b[i] = (8 - i) as u8;
    &b[i..]
}

/// `right_encode(val)`: minimal big-endian digits followed by their count.
///
/// Zero encodes as `00 01`.
#[inline]
pub fn right_encode(val: u64, b: &mut [u8; 9]) -> &[u8] {
    b[..8].copy_from_slice(&val.to_be_bytes());
    let i = b[..7].iter().take_while(|&&a| a == 0).count();
    b[8] = (8 - i) as u8;
    &b[i..]
}

/// KangarooTwelve `length_encode(val)`.
///
/// Same layout as [`right_encode`] except that zero has no digits and
/// encodes as the single byte `00`.
#[inline]
pub fn k12_length_encode(val: u64, b: &mut [u8; 9]) -> &[u8] {
    b[..8].copy_from_slice(&val.to_be_bytes());
    let i = b[..8].iter().take_while(|&&a| a == 0).count();
    b[8] = (8 - i) as u8;
    &b[i..]
}

/// `encode_string(s) = left_encode(bitlen(s)) || s`.
pub fn encode_string(s: &[u8]) -> Vec<u8> {
    let mut b = [0u8; 9];
    let prefix = left_encode(8 * s.len() as u64, &mut b);
    let mut out = Vec::with_capacity(prefix.len() + s.len());
    out.extend_from_slice(prefix);
    out.extend_from_slice(s);
    out
}

/// `bytepad(w, x1 || ... || xk)`: `left_encode(w)`, the parts, then zeros up to
/// the next multiple of `w`.
///
/// Fails with [`Error::InvalidPadWidth`] when `w` is zero.
pub fn bytepad(w: usize, parts: &[&[u8]]) -> Result<Vec<u8>> {
    if w == 0 {
        return Err(Error::InvalidPadWidth);
    }
    Ok(bytepad_nonzero(w, parts))
}

/// [`bytepad`] for a width already known to be non-zero, such as a sponge rate.
pub(crate) fn bytepad_nonzero(w: usize, parts: &[&[u8]]) -> Vec<u8> {
    debug_assert!(w > 0);
    let mut b = [0u8; 9];
    let prefix = left_encode(w as u64, &mut b);
    let len = prefix.len() + parts.iter().map(|p| p.len()).sum::<usize>();
    let padded = len.div_ceil(w) * w;

    let mut out = Vec::with_capacity(padded);
    out.extend_from_slice(prefix);
    for part in parts {
        out.extend_from_slice(part);
    }
    out.resize(padded, 0);
    out
}

//! Reflected binary Gray code.

/// Encode `u` as a Gray code: successive integers differ in exactly one bit.
#[inline]
#[must_use]
pub const fn gray_encode(u: u32) -> u32 {
  u ^ (u >> 1)
}

/// Decode a Gray code back to binary; the inverse of [`gray_encode`].
///
/// Bit `i` of the result is the XOR of input bits `i..32`. The cascade of
/// shifts by 1, 2, 4, 8 and 16 builds that prefix XOR in five steps.
#[inline]
#[must_use]
pub const fn gray_decode(mut u: u32) -> u32 {
  u ^= u >> 1;
  u ^= u >> 2;
  u ^= u >> 4;
  u ^= u >> 8;
  u ^= u >> 16;
  u
}

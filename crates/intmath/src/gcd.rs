//! Binary GCD.

/// Greatest common divisor of `u` and `v`.
///
/// `gcd(0, v) == v` and `gcd(u, 0) == u`, so `gcd(0, 0) == 0`.
///
/// Uses Stein's algorithm: common factors of two are counted and removed,
/// remaining factors of two are stripped from each operand, then the larger
/// operand is repeatedly replaced by the (even) difference with its trailing
/// zeros shifted out. Only subtraction of the smaller from the larger value
/// is performed, so `u32::MAX` operands cannot overflow.
#[must_use]
pub const fn gcd(mut u: u32, mut v: u32) -> u32 {
  if u == 0 || v == 0 {
    return u | v;
  }

  let shift = (u | v).trailing_zeros();
  u >>= u.trailing_zeros();
  v >>= v.trailing_zeros();

  while u != v {
    if u > v {
      u -= v;
      u >>= u.trailing_zeros();
    } else {
      v -= u;
      v >>= v.trailing_zeros();
    }
  }

  u << shift
}

//! Integer square root.

/// Floor of the square root of `value`.
///
/// Digit-by-digit binary restoring extraction: a probe bit walks down the even
/// bit positions from `1 << 30`, and the partial root and remainder are
/// updated with shifts, comparisons, subtraction and OR. No multiplication,
/// division or floating point. The result never exceeds `0xFFFF`.
#[must_use]
pub const fn isqrt(value: u32) -> u32 {
  let mut remainder = value;
  let mut root = 0u32;
  let mut bit = 1u32 << 30;

  while bit != 0 {
    // `root` only holds bits above `bit`, so OR is addition here.
    let trial = root | bit;
    root >>= 1;
    if remainder >= trial {
      remainder -= trial;
      root |= bit;
    }
    bit >>= 2;
  }

  root
}

#[cfg(test)]
mod tests {
  use super::*;

  /// `root² <= square < (root + 1)²`, with the upper bound waived once the
  /// root saturates 16 bits.
  fn is_floor_root(square: u32, root: u32) -> bool {
    let (s, r) = (u64::from(square), u64::from(root));
    r <= 0xFFFF && r * r <= s && (r >= 0xFFFF || s < (r + 1) * (r + 1))
  }

  #[test]
  fn small_values() {
    let expected = [0u32, 1, 1, 1, 2, 2, 2, 2, 2, 3, 3];
    for (value, root) in expected.iter().enumerate() {
      assert_eq!(isqrt(value as u32), *root, "isqrt({value})");
    }
  }

  #[test]
  fn known_values() {
    assert_eq!(isqrt(42), 6);
    assert_eq!(isqrt(1729), 41);
    assert_eq!(isqrt(87_539_319), 9356);
    assert_eq!(isqrt(0xFFFF * 0xFFFF - 1), 0xFFFE);
    assert_eq!(isqrt(0xFFFF * 0xFFFF), 0xFFFF);
    assert_eq!(isqrt(0xFFFF * 0xFFFF + 1), 0xFFFF);
    assert_eq!(isqrt(u32::MAX), 0xFFFF);
  }

  #[test]
  fn bounds_hold_for_vectors() {
    let squares = [
      0u32,
      1,
      2,
      3,
      4,
      5,
      6,
      7,
      8,
      9,
      10,
      42,
      1729,
      87_539_319,
      0xFFFF * 0xFFFF - 1,
      0xFFFF * 0xFFFF,
      0xFFFF * 0xFFFF + 1,
      u32::MAX,
    ];
    for square in squares {
      assert!(is_floor_root(square, isqrt(square)), "isqrt({square})");
    }
  }

  #[test]
  fn perfect_squares_and_neighbours() {
    for r in (0u32..=0xFFFF).step_by(251) {
      let s = r * r;
      assert_eq!(isqrt(s), r);
      if s > 0 {
        assert_eq!(isqrt(s - 1), r - 1);
      }
    }
  }
}

use proptest::prelude::*;

use super::*;

/// Textbook Euclid, as an independent oracle.
fn euclid(mut a: u32, mut b: u32) -> u32 {
  while b != 0 {
    (a, b) = (b, a % b);
  }
  a
}

proptest! {
  #[test]
  fn gcd_matches_euclid(u in any::<u32>(), v in any::<u32>()) {
    prop_assert_eq!(gcd(u, v), euclid(u, v));
  }

  #[test]
  fn gcd_is_commutative(u in any::<u32>(), v in any::<u32>()) {
    prop_assert_eq!(gcd(u, v), gcd(v, u));
  }

  #[test]
  fn gcd_divides_both(u in 1u32.., v in 1u32..) {
    let g = gcd(u, v);
    prop_assert_eq!(u % g, 0);
    prop_assert_eq!(v % g, 0);
  }

  #[test]
  fn gray_round_trips(u in any::<u32>()) {
    prop_assert_eq!(gray_decode(gray_encode(u)), u);
  }

  #[test]
  fn gray_neighbours_hamming_one(u in any::<u32>()) {
    prop_assert_eq!((gray_encode(u) ^ gray_encode(u.wrapping_add(1))).count_ones(), 1);
  }

  #[test]
  fn isqrt_is_floor_root(value in any::<u32>()) {
    let r = u64::from(isqrt(value));
    let s = u64::from(value);
    prop_assert!(r <= 0xFFFF);
    prop_assert!(r * r <= s);
    prop_assert!(s < (r + 1) * (r + 1));
  }
}

//! Fuzz target for binary GCD, Gray code and integer square root.

#![no_main]

use intmath::{gcd, gray_decode, gray_encode, isqrt};
use libfuzzer_sys::fuzz_target;

fn euclid(mut u: u32, mut v: u32) -> u32 {
  while v != 0 {
    (u, v) = (v, u % v);
  }
  u
}

fuzz_target!(|input: (u32, u32)| {
  let (u, v) = input;

  assert_eq!(gcd(u, v), euclid(u, v), "gcd({u:#x}, {v:#x})");
  assert_eq!(gcd(u, v), gcd(v, u), "gcd not commutative at ({u:#x}, {v:#x})");

  assert_eq!(gray_decode(gray_encode(u)), u, "gray round trip at {u:#x}");
  assert_eq!(gray_encode(gray_decode(u)), u, "gray inverse at {u:#x}");
  assert_eq!((gray_encode(u) ^ gray_encode(u.wrapping_add(1))).count_ones(), 1, "gray adjacency at {u:#x}");

  let root = u64::from(isqrt(u));
  let square = u64::from(u);
  assert!(root * root <= square, "isqrt({u:#x}) too large");
  assert!((root + 1) * (root + 1) > square, "isqrt({u:#x}) too small");
});

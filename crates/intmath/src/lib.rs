//! Fixed-width integer bit algorithms.
//!
//! | Function | Algorithm | Domain |
//! |----------|-----------|--------|
//! | [`gcd`] | Binary (Stein's) GCD: shifts and subtraction only | `u32 × u32` |
//! | [`gray_encode`] / [`gray_decode`] | Reflected binary Gray code | `u32` |
//! | [`isqrt`] | Digit-by-digit binary restoring square root | `u32` |
//!
//! Every function is total over its domain, `const`, and free of division,
//! multiplication and floating point in its core loop.
//!
//! ```
//! use intmath::{gcd, gray_decode, gray_encode, isqrt};
//!
//! assert_eq!(gcd(8, 12), 4);
//! assert_eq!(gray_decode(gray_encode(0xDEAD_BEEF)), 0xDEAD_BEEF);
//! assert_eq!(isqrt(1729), 41);
//! ```

#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![cfg_attr(not(test), deny(clippy::indexing_slicing))]
#![no_std]

#[cfg(test)]
extern crate std;

mod gcd;
mod gray;
mod isqrt;
#[cfg(test)]
mod proptests;

pub use gcd::gcd;
pub use gray::{gray_decode, gray_encode};
pub use isqrt::isqrt;

//! Precomputed constants for the supported CRC polynomials.
//!
//! Every lookup table here is computed at compile time from its reflected
//! polynomial and lives in a `static`, so there is no runtime initialisation
//! and no first-use race.
//!
//! # Cache Alignment
//!
//! Lookup tables are 64-byte (cache line) aligned using [`Aligned64`] so a
//! 512-byte CRC-16 table spans exactly eight lines.

pub mod crc16;
pub mod crc32;

/// Wrapper type to force 64-byte (cache line) alignment.
///
/// The inner type `T` is accessible via `.0`.
#[derive(Debug)]
#[repr(align(64))]
pub struct Aligned64<T>(pub T);

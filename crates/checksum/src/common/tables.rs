//! Const-fn CRC lookup table generation.
//!
//! Tables are computed with `const fn` and embedded directly in the binary, so
//! every table exists exactly once per polynomial and is read-only for the
//! life of the process.
//!
//! | Width | Table | Size |
//! |-------|-------|------|
//! | 16-bit | 256×u16 | 512 B |
//! | 32-bit | 256×u32 | 1 KiB |
//!
//! Entry `i` is the register after shifting byte `i` through eight rounds of
//! reflected (LSB-first) polynomial division, starting from a zero register.

// SAFETY: All array indexing in this module uses bounded loop indices (0..256).
// Clippy cannot prove this in const fn contexts, but bounds are statically guaranteed.
#![allow(clippy::indexing_slicing)]

// ─────────────────────────────────────────────────────────────────────────────
// CRC-16 Table Generation
// ─────────────────────────────────────────────────────────────────────────────

/// Generate a single CRC-16 lookup table entry.
///
/// Uses bit-by-bit computation with the reflected polynomial.
#[must_use]
pub const fn crc16_table_entry(poly: u16, index: u8) -> u16 {
  let mut crc = index as u16;
  let mut i = 0;
  while i < 8 {
    if crc & 1 != 0 {
      crc = (crc >> 1) ^ poly;
    } else {
      crc >>= 1;
    }
    i += 1;
  }
  crc
}

/// Generate the 256-entry CRC-16 lookup table for a reflected polynomial.
///
/// # Arguments
///
/// * `poly` - The reflected polynomial (e.g. `0xA001`, `0x8408`)
#[must_use]
pub const fn crc16_table(poly: u16) -> [u16; 256] {
  let mut table = [0u16; 256];
  let mut i = 0usize;
  while i < 256 {
    table[i] = crc16_table_entry(poly, i as u8);
    i += 1;
  }
  table
}

// ─────────────────────────────────────────────────────────────────────────────
// CRC-32 Table Generation
// ─────────────────────────────────────────────────────────────────────────────

/// Generate a single CRC-32 lookup table entry.
///
/// Uses bit-by-bit computation with the reflected polynomial.
#[must_use]
pub const fn crc32_table_entry(poly: u32, index: u8) -> u32 {
  let mut crc = index as u32;
  let mut i = 0;
  while i < 8 {
    if crc & 1 != 0 {
      crc = (crc >> 1) ^ poly;
    } else {
      crc >>= 1;
    }
    i += 1;
  }
  crc
}

/// Generate the 256-entry CRC-32 lookup table for a reflected polynomial.
///
/// # Arguments
///
/// * `poly` - The reflected polynomial (e.g. `0xEDB8_8320`, `0xD801_8001`)
#[must_use]
pub const fn crc32_table(poly: u32) -> [u32; 256] {
  let mut table = [0u32; 256];
  let mut i = 0usize;
  while i < 256 {
    table[i] = crc32_table_entry(poly, i as u8);
    i += 1;
  }
  table
}

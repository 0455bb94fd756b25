//! Bitwise reference implementations for both CRC widths.
//!
//! This module provides the canonical "source of truth" for CRC computation.
//! These implementations process one bit at a time, making them:
//!
//! - **Obviously correct**: The algorithm directly mirrors the mathematical definition
//! - **Audit-friendly**: a handful of lines per width, no lookup tables
//! - **Const-evaluable**: Can verify check values at compile time
//!
//! The table-driven engines must produce identical results to these functions.
//!
//! # CRC Model
//!
//! Both widths are reflected (LSB-first). The functions return the raw
//! register; callers apply any final XOR themselves.

// SAFETY: All array indexing uses bounded loop indices (0..data.len()).
// Clippy cannot prove this in const fn contexts, but bounds are statically guaranteed.
#![allow(clippy::indexing_slicing)]

/// Bitwise CRC-16 computation (reflected, LSB-first).
///
/// # Arguments
///
/// * `poly` - Reflected polynomial (e.g., 0xA001 for CRC-16/MODBUS)
/// * `init` - Initial register value
/// * `data` - Input bytes
#[must_use]
pub const fn crc16_bitwise(poly: u16, init: u16, data: &[u8]) -> u16 {
  let mut crc = init;
  let mut i: usize = 0;
  while i < data.len() {
    crc ^= data[i] as u16;
    let mut bit: u32 = 0;
    while bit < 8 {
      crc = if crc & 1 != 0 { (crc >> 1) ^ poly } else { crc >> 1 };
      bit += 1;
    }
    i += 1;
  }
  crc
}

/// Bitwise CRC-32 computation (reflected, LSB-first).
///
/// # Arguments
///
/// * `poly` - Reflected polynomial (e.g., 0xEDB88320 for CRC-32/ISO-HDLC)
/// * `init` - Initial register value
/// * `data` - Input bytes
#[must_use]
pub const fn crc32_bitwise(poly: u32, init: u32, data: &[u8]) -> u32 {
  let mut crc = init;
  let mut i: usize = 0;
  while i < data.len() {
    crc ^= data[i] as u32;
    let mut bit: u32 = 0;
    while bit < 8 {
      crc = if crc & 1 != 0 { (crc >> 1) ^ poly } else { crc >> 1 };
      bit += 1;
    }
    i += 1;
  }
  crc
}

#[cfg(test)]
mod tests {
  use super::*;

  const CHECK: &[u8] = b"123456789";

  // Check values are evaluated at compile time.
  const _: () = assert!(crc16_bitwise(0xA001, 0x0000, CHECK) == 0xBB3D);
  const _: () = assert!(crc32_bitwise(0xEDB8_8320, !0, CHECK) ^ !0 == 0xCBF4_3926);

  #[test]
  fn crc16_catalogue_checks() {
    assert_eq!(crc16_bitwise(0xA001, 0xFFFF, CHECK), 0x4B37);
    assert_eq!(crc16_bitwise(0xA001, 0xFFFF, CHECK) ^ 0xFFFF, 0xB4C8);
    assert_eq!(crc16_bitwise(0x8408, 0xFFFF, CHECK) ^ 0xFFFF, 0x906E);
    assert_eq!(crc16_bitwise(0x8408, 0x0000, CHECK), 0x2189);
  }

  #[test]
  fn crc32_catalogue_checks() {
    assert_eq!(crc32_bitwise(0xEDB8_8320, !0, CHECK), 0x340B_C6D9);
    assert_eq!(crc32_bitwise(0xD801_8001, 0, CHECK), 0x6EC2_EDC4);
  }

  #[test]
  fn empty_input_returns_init() {
    assert_eq!(crc16_bitwise(0xA001, 0x1234, &[]), 0x1234);
    assert_eq!(crc32_bitwise(0xEDB8_8320, 0xDEAD_BEEF, &[]), 0xDEAD_BEEF);
  }
}

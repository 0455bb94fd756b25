//! Table-driven CRC-16.
//!
//! CRC-16 is not a single algorithm: the polynomial, initial register and
//! final XOR vary between protocols. This module provides the raw engine over
//! the two supported reflected polynomials plus the catalogue presets built
//! on top of it.
//!
//! # Polynomials
//!
//! | [`Crc16Poly`] | Reflected | Normal | Presets |
//! |---------------|-----------|--------|---------|
//! | `Modbus` | 0xA001 | 0x8005 | MODBUS, USB, ARC |
//! | `X25` | 0x8408 | 0x1021 | IBM-SDLC (X-25), KERMIT |
//!
//! # Example
//!
//! ```
//! use checksum::crc16::{Crc16Engine, Crc16Poly, crc16};
//!
//! // Raw engine: accumulator in, accumulator out.
//! assert_eq!(crc16(0xFFFF, Some(&[0x02, 0x07]), 2), 0x1241);
//! assert_eq!(crc16(42, None, 9), 42);
//!
//! let x25 = Crc16Engine::new(Crc16Poly::X25);
//! assert_eq!(x25.compute(0xFFFF, Some(b"123456789"), 9) ^ 0xFFFF, 0x906E);
//! ```

// SAFETY: table indices are masked with `& 0xFF`, so they always fall in 0..256.
#![allow(clippy::indexing_slicing)]

pub mod presets;
#[cfg(test)]
mod proptests;

pub use presets::{Crc16Arc, Crc16IbmSdlc, Crc16Kermit, Crc16Modbus, Crc16Usb};

use crate::constants::crc16::{MODBUS_POLY, MODBUS_TABLE, X25_POLY, X25_TABLE};

/// Supported reflected CRC-16 generator polynomials.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum Crc16Poly {
  /// 0xA001 (x^16 + x^15 + x^2 + 1), CRC-16/MODBUS style.
  #[default]
  Modbus,
  /// 0x8408 (x^16 + x^12 + x^5 + 1), CRC-16/X-25 style.
  X25,
}

impl Crc16Poly {
  /// All supported polynomials.
  pub const ALL: [Self; 2] = [Self::Modbus, Self::X25];

  /// The reflected polynomial constant.
  #[inline]
  #[must_use]
  pub const fn reflected(self) -> u16 {
    match self {
      Self::Modbus => MODBUS_POLY,
      Self::X25 => X25_POLY,
    }
  }

  /// The precomputed lookup table for this polynomial.
  #[inline]
  #[must_use]
  pub fn table(self) -> &'static [u16; 256] {
    match self {
      Self::Modbus => &MODBUS_TABLE.0,
      Self::X25 => &X25_TABLE.0,
    }
  }
}

/// Table-driven CRC-16 engine over one polynomial.
///
/// The engine is stateless: it threads a caller-owned accumulator through
/// the table, one byte at a time.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct Crc16Engine {
  poly: Crc16Poly,
}

impl Crc16Engine {
  /// Engine over 0xA001.
  pub const MODBUS: Self = Self::new(Crc16Poly::Modbus);
  /// Engine over 0x8408.
  pub const X25: Self = Self::new(Crc16Poly::X25);

  #[inline]
  #[must_use]
  pub const fn new(poly: Crc16Poly) -> Self {
    Self { poly }
  }

  #[inline]
  #[must_use]
  pub const fn poly(&self) -> Crc16Poly {
    self.poly
  }

  #[inline]
  #[must_use]
  pub fn table(&self) -> &'static [u16; 256] {
    self.poly.table()
  }

  /// Fold every byte of `data` into `crc`.
  #[inline]
  #[must_use]
  pub fn update(&self, mut crc: u16, data: &[u8]) -> u16 {
    let table = self.table();
    for &byte in data {
      crc = (crc >> 8) ^ table[((crc ^ u16::from(byte)) & 0xFF) as usize];
    }
    crc
  }

  /// Fold the first `length` bytes of `message` into `crc`.
  ///
  /// An absent message leaves `crc` unchanged whatever `length` says, and a
  /// `length` past the end of `message` is clamped to its length.
  #[inline]
  #[must_use]
  pub fn compute(&self, crc: u16, message: Option<&[u8]>, length: usize) -> u16 {
    match message {
      Some(data) => self.update(crc, data.get(..length).unwrap_or(data)),
      None => crc,
    }
  }
}

/// CRC-16 over 0xA001: fold the first `length` bytes of `message` into `crc`.
///
/// Applies no initial value or final XOR; callers choose both. `None` is a
/// no-op.
#[inline]
#[must_use]
pub fn crc16(crc: u16, message: Option<&[u8]>, length: usize) -> u16 {
  Crc16Engine::MODBUS.compute(crc, message, length)
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::common::reference::crc16_bitwise;

  const CHECK: &[u8] = b"123456789";

  #[test]
  fn absent_buffer_is_noop() {
    assert_eq!(crc16(0, None, 0), 0);
    assert_eq!(crc16(42, None, 0), 42);
    assert_eq!(crc16(42, None, 9), 42);
    assert_eq!(Crc16Engine::X25.compute(0xBEEF, None, usize::MAX), 0xBEEF);
  }

  #[test]
  fn zero_length_is_noop() {
    assert_eq!(crc16(0, Some(b""), 0), 0);
    assert_eq!(crc16(42, Some(CHECK), 0), 42);
  }

  #[test]
  fn modbus_frame() {
    // Modbus over serial line V1.02, read exception status request.
    assert_eq!(crc16(0xFFFF, Some(&[0x02, 0x07]), 2), 0x1241);
    assert_eq!(crc16(0xFFFF, Some(&[0x02, 0x07, 0x41, 0x12]), 4), 0);
  }

  #[test]
  fn modbus_poly_vectors() {
    assert_eq!(crc16(0xFFFF, Some(CHECK), 9) ^ 0xFFFF, 0xB4C8);
    assert_eq!(crc16(0xFFFF, Some(b"123456789\xC8\xB4"), 11), 0xB001);
    assert_eq!(crc16(0, Some(b"\xFF\xFF"), 2), 0xB001);
  }

  #[test]
  fn x25_poly_vectors() {
    let x25 = Crc16Engine::X25;
    assert_eq!(x25.compute(0xFFFF, Some(CHECK), 9) ^ 0xFFFF, 0x906E);
    assert_eq!(x25.compute(0xFFFF, Some(b"123456789\x6E\x90"), 11), 0xF0B8);
    assert_eq!(x25.compute(0, Some(b"\xFF\xFF"), 2), 0xF0B8);
  }

  #[test]
  fn length_selects_prefix() {
    let full = crc16(0xFFFF, Some(b"123456789\xC8\xB4"), 9);
    assert_eq!(full, crc16(0xFFFF, Some(CHECK), 9));
  }

  #[test]
  fn overlong_length_is_clamped() {
    assert_eq!(crc16(0xFFFF, Some(CHECK), 1000), crc16(0xFFFF, Some(CHECK), 9));
  }

  #[test]
  fn matches_bitwise_reference() {
    let data: [u8; 64] = core::array::from_fn(|i| (i as u8).wrapping_mul(37).wrapping_add(11));
    for poly in Crc16Poly::ALL {
      let engine = Crc16Engine::new(poly);
      for init in [0u16, 0xFFFF, 0x1D0F] {
        for len in [0usize, 1, 2, 7, 63, 64] {
          let prefix = &data[..len];
          assert_eq!(
            engine.update(init, prefix),
            crc16_bitwise(poly.reflected(), init, prefix),
            "poly={poly:?} init={init:#x} len={len}"
          );
        }
      }
    }
  }

  #[test]
  fn table_is_shared() {
    assert!(core::ptr::eq(Crc16Engine::MODBUS.table(), Crc16Poly::Modbus.table()));
    assert!(!core::ptr::eq(Crc16Poly::Modbus.table(), Crc16Poly::X25.table()));
  }
}

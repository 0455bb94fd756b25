//! Table-driven CRC-32.
//!
//! # Polynomials
//!
//! | [`Crc32Poly`] | Reflected | Normal | Presets |
//! |---------------|-----------|--------|---------|
//! | `Ieee` | 0xEDB88320 | 0x04C11DB7 | ISO-HDLC (zlib, PKZIP, PNG), JAMCRC |
//! | `CdRomEdc` | 0xD8018001 | 0x8001801B | CD-ROM-EDC |
//!
//! # Example
//!
//! ```
//! use checksum::crc32::{Crc32Engine, Crc32Poly, crc32};
//!
//! assert_eq!(crc32(0xFFFF_FFFF, Some(b"123456789"), 9) ^ 0xFFFF_FFFF, 0xCBF4_3926);
//!
//! let edc = Crc32Engine::new(Crc32Poly::CdRomEdc);
//! assert_eq!(edc.compute(0, Some(b"123456789"), 9), 0x6EC2_EDC4);
//! ```

// SAFETY: table indices are masked with `& 0xFF`, so they always fall in 0..256.
#![allow(clippy::indexing_slicing)]

pub mod presets;
#[cfg(test)]
mod proptests;

pub use presets::{Crc32CdRomEdc, Crc32IsoHdlc, Crc32Jamcrc};

use crate::constants::crc32::{CD_ROM_EDC_POLY, CD_ROM_EDC_TABLE, IEEE_POLY, IEEE_TABLE};

/// Supported reflected CRC-32 generator polynomials.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum Crc32Poly {
  /// 0xEDB88320, the Ethernet / zlib / PKZIP polynomial.
  #[default]
  Ieee,
  /// 0xD8018001, the CD-ROM error detection code polynomial.
  CdRomEdc,
}

impl Crc32Poly {
  /// All supported polynomials.
  pub const ALL: [Self; 2] = [Self::Ieee, Self::CdRomEdc];

  /// Alternate 32-bit polynomial under its legacy `CRC32C_ALT` name.
  pub const CRC32C_ALT: Self = Self::CdRomEdc;

  /// The reflected polynomial constant.
  #[inline]
  #[must_use]
  pub const fn reflected(self) -> u32 {
    match self {
      Self::Ieee => IEEE_POLY,
      Self::CdRomEdc => CD_ROM_EDC_POLY,
    }
  }

  /// The precomputed lookup table for this polynomial.
  #[inline]
  #[must_use]
  pub fn table(self) -> &'static [u32; 256] {
    match self {
      Self::Ieee => &IEEE_TABLE.0,
      Self::CdRomEdc => &CD_ROM_EDC_TABLE.0,
    }
  }
}

/// Table-driven CRC-32 engine over one polynomial.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct Crc32Engine {
  poly: Crc32Poly,
}

impl Crc32Engine {
  /// Engine over 0xEDB88320.
  pub const IEEE: Self = Self::new(Crc32Poly::Ieee);
  /// Engine over 0xD8018001.
  pub const CD_ROM_EDC: Self = Self::new(Crc32Poly::CdRomEdc);

  #[inline]
  #[must_use]
  pub const fn new(poly: Crc32Poly) -> Self {
    Self { poly }
  }

  #[inline]
  #[must_use]
  pub const fn poly(&self) -> Crc32Poly {
    self.poly
  }

  #[inline]
  #[must_use]
  pub fn table(&self) -> &'static [u32; 256] {
    self.poly.table()
  }

  /// Fold every byte of `data` into `crc`.
  #[inline]
  #[must_use]
  pub fn update(&self, mut crc: u32, data: &[u8]) -> u32 {
    let table = self.table();
    for &byte in data {
      crc = (crc >> 8) ^ table[((crc ^ u32::from(byte)) & 0xFF) as usize];
    }
    crc
  }

  /// Fold the first `length` bytes of `message` into `crc`.
  ///
  /// An absent message leaves `crc` unchanged whatever `length` says, and a
  /// `length` past the end of `message` is clamped to its length.
  #[inline]
  #[must_use]
  pub fn compute(&self, crc: u32, message: Option<&[u8]>, length: usize) -> u32 {
    match message {
      Some(data) => self.update(crc, data.get(..length).unwrap_or(data)),
      None => crc,
    }
  }
}

/// CRC-32 over 0xEDB88320: fold the first `length` bytes of `message` into `crc`.
///
/// Applies no initial value or final XOR. `None` is a no-op.
#[inline]
#[must_use]
pub fn crc32(crc: u32, message: Option<&[u8]>, length: usize) -> u32 {
  Crc32Engine::IEEE.compute(crc, message, length)
}

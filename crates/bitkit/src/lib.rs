//! Bit-manipulation toolkit.
//!
//! `bitkit` bundles small, pure, fixed-width integer algorithms:
//!
//! - table-driven CRC-16 and CRC-32 (from the `checksum` crate),
//! - binary GCD, Gray code and integer square root (from the `intmath` crate),
//! - a [`selftest`] that checks all of them against published vectors.
//!
//! # Quick Start
//!
//! ```
//! use bitkit::{Checksum, Crc32, crc16, gcd, isqrt};
//!
//! assert_eq!(crc16(0xFFFF, Some(&[0x02, 0x07]), 2), 0x1241);
//! assert_eq!(Crc32::checksum(b"123456789"), 0xCBF4_3926);
//! assert_eq!(gcd(8, 12), 4);
//! assert_eq!(isqrt(87_539_319), 9356);
//! ```
//!
//! # Feature Flags
//!
//! | Feature | Default | Description |
//! |---------|---------|-------------|
//! | `std` | Yes | Environment overrides for polynomial selection |
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]

pub mod selftest;

// =============================================================================
// Checksums
// =============================================================================

pub use checksum::{
  // Traits
  Checksum,
  // CRC-16
  Crc16,
  Crc16Arc,
  Crc16Engine,
  Crc16IbmSdlc,
  Crc16Kermit,
  Crc16Modbus,
  Crc16Poly,
  Crc16Usb,
  // CRC-32
  Crc32,
  Crc32CdRomEdc,
  Crc32Engine,
  Crc32IsoHdlc,
  Crc32Jamcrc,
  Crc32Poly,
  // Configuration
  ParsePolyError,
  PolyConfig,
  config,
  crc16,
  crc32,
  tables,
};

// =============================================================================
// Integer algorithms
// =============================================================================

pub use intmath::{gcd, gray_decode, gray_encode, isqrt};
pub use traits::{CheckFailure, FailureKind};

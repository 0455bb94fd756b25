//! Table-driven CRC-16 and CRC-32 checksums.
//!
//! Every lookup table is generated by a `const fn` at compile time and stored
//! in a `static`, so checksums are pure functions with no initialisation step
//! and no shared mutable state.
//!
//! # Engines
//!
//! The raw engines thread a caller-owned accumulator through the table and
//! apply no initial value or final XOR:
//!
//! | Function | Polynomial | Alternative |
//! |----------|------------|-------------|
//! | [`crc16`] | 0xA001 | [`Crc16Engine::X25`] (0x8408) |
//! | [`crc32`] | 0xEDB88320 | [`Crc32Engine::CD_ROM_EDC`] (0xD8018001) |
//!
//! # Catalogue Presets
//!
//! | Type | Output | Use Cases |
//! |------|--------|-----------|
//! | [`Crc16Modbus`] | `u16` | Modbus RTU |
//! | [`Crc16Usb`] | `u16` | USB data packets |
//! | [`Crc16Arc`] | `u16` | ARC, LHA |
//! | [`Crc16IbmSdlc`] | `u16` | X.25, HDLC, SDLC |
//! | [`Crc16Kermit`] | `u16` | Kermit, Bluetooth |
//! | [`Crc32IsoHdlc`] | `u32` | Ethernet, gzip, zip, PNG |
//! | [`Crc32Jamcrc`] | `u32` | JAM, MPEG-2 tooling |
//! | [`Crc32CdRomEdc`] | `u32` | CD-ROM sector EDC |
//!
//! # Example
//!
//! ```rust
//! use checksum::{Checksum, Crc32, crc16};
//!
//! // Raw engine with explicit accumulator
//! assert_eq!(crc16(0xFFFF, Some(b"123456789"), 9) ^ 0xFFFF, 0xB4C8);
//!
//! // One-shot preset
//! let crc = Crc32::checksum(b"123456789");
//! assert_eq!(crc, 0xCBF4_3926);
//!
//! // Streaming computation
//! let mut hasher = Crc32::new();
//! hasher.update(b"1234");
//! hasher.update(b"56789");
//! assert_eq!(hasher.finalize(), crc);
//! ```
//!
//! # no_std Support
//!
//! This crate is `no_std` compatible. Disable the `std` feature for embedded use:
//!
//! ```toml
//! [dependencies]
//! checksum = { version = "0.1", default-features = false }
//! ```
//!
//! Without `std`, [`config::get`] always returns the default polynomials.

#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![cfg_attr(not(test), deny(clippy::indexing_slicing))]
#![no_std]

#[cfg(any(test, feature = "std"))]
extern crate std;

// Internal macros must be declared before modules that use them.
#[macro_use]
mod macros;

mod common;
mod constants;

pub mod config;
pub mod crc16;
pub mod crc32;

/// Const-fn lookup table generation, for callers building tables of their own.
pub mod tables {
  pub use crate::common::tables::{crc16_table, crc16_table_entry, crc32_table, crc32_table_entry};
}

/// Bitwise (table-free) reference implementations.
pub mod reference {
  pub use crate::common::reference::{crc16_bitwise, crc32_bitwise};
}

pub use config::{ParsePolyError, PolyConfig};
pub use crc16::{Crc16Arc, Crc16Engine, Crc16IbmSdlc, Crc16Kermit, Crc16Modbus, Crc16Poly, Crc16Usb, crc16};
pub use crc32::{Crc32CdRomEdc, Crc32Engine, Crc32IsoHdlc, Crc32Jamcrc, Crc32Poly, crc32};
// Re-export traits for convenience
pub use traits::Checksum;

/// Convenience alias for the most common CRC-32 preset.
pub type Crc32 = Crc32IsoHdlc;

/// Convenience alias for the CRC-16 preset named by the default polynomial.
pub type Crc16 = Crc16Modbus;

//! CRC-32 polynomials and lookup tables.

use super::Aligned64;
use crate::common::tables::crc32_table;

/// Reflected form of 0x04C11DB7: Ethernet, zlib, PKZIP, PNG.
pub const IEEE_POLY: u32 = 0xEDB8_8320;

/// Reflected form of 0x8001801B (x^32 + x^31 + x^16 + x^15 + x^4 + x^3 + x + 1): CD-ROM EDC.
pub const CD_ROM_EDC_POLY: u32 = 0xD801_8001;

pub static IEEE_TABLE: Aligned64<[u32; 256]> = Aligned64(crc32_table(IEEE_POLY));
pub static CD_ROM_EDC_TABLE: Aligned64<[u32; 256]> = Aligned64(crc32_table(CD_ROM_EDC_POLY));

//! CRC-16 polynomials and lookup tables.

use super::Aligned64;
use crate::common::tables::crc16_table;

/// Reflected form of 0x8005 (x^16 + x^15 + x^2 + 1): Modbus, ARC, USB.
pub const MODBUS_POLY: u16 = 0xA001;

/// Reflected form of 0x1021 (x^16 + x^12 + x^5 + 1): X.25, HDLC, Kermit.
pub const X25_POLY: u16 = 0x8408;

pub static MODBUS_TABLE: Aligned64<[u16; 256]> = Aligned64(crc16_table(MODBUS_POLY));
pub static X25_TABLE: Aligned64<[u16; 256]> = Aligned64(crc16_table(X25_POLY));

//! CRC-16 catalogue presets.
//!
//! Parameters follow the CRC RevEng catalogue. All presets are reflected
//! (refin = refout = true).
//!
//! | Preset | Poly (refl.) | Init | XorOut | Check | Residue |
//! |--------|--------------|------|--------|-------|---------|
//! | CRC-16/MODBUS | 0xA001 | 0xFFFF | 0x0000 | 0x4B37 | 0x0000 |
//! | CRC-16/USB | 0xA001 | 0xFFFF | 0xFFFF | 0xB4C8 | 0xB001 |
//! | CRC-16/ARC | 0xA001 | 0x0000 | 0x0000 | 0xBB3D | 0x0000 |
//! | CRC-16/IBM-SDLC | 0x8408 | 0xFFFF | 0xFFFF | 0x906E | 0xF0B8 |
//! | CRC-16/KERMIT | 0x8408 | 0x0000 | 0x0000 | 0x2189 | 0x0000 |
//!
//! # Usage
//!
//! ```
//! use checksum::Crc16Modbus;
//!
//! let crc = Crc16Modbus::checksum(b"123456789");
//! assert_eq!(crc, Crc16Modbus::CHECK);
//! ```

use super::Crc16Engine;

define_crc_preset! {
  /// CRC-16/MODBUS checksum.
  ///
  /// Used by Modbus RTU framing; the checksum is sent low byte first.
  pub struct Crc16Modbus: u16 {
    engine: Crc16Engine::MODBUS,
    init: 0xFFFF,
    xorout: 0x0000,
    check: 0x4B37,
    residue: 0x0000,
  }
}

define_crc_preset! {
  /// CRC-16/USB checksum (USB data packets).
  pub struct Crc16Usb: u16 {
    engine: Crc16Engine::MODBUS,
    init: 0xFFFF,
    xorout: 0xFFFF,
    check: 0xB4C8,
    residue: 0xB001,
  }
}

define_crc_preset! {
  /// CRC-16/ARC checksum (aka CRC-16/IBM, CRC-16/LHA).
  pub struct Crc16Arc: u16 {
    engine: Crc16Engine::MODBUS,
    init: 0x0000,
    xorout: 0x0000,
    check: 0xBB3D,
    residue: 0x0000,
  }
}

define_crc_preset! {
  /// CRC-16/IBM-SDLC checksum (aka CRC-16/X-25, HDLC, ISO-HDLC).
  pub struct Crc16IbmSdlc: u16 {
    engine: Crc16Engine::X25,
    init: 0xFFFF,
    xorout: 0xFFFF,
    check: 0x906E,
    residue: 0xF0B8,
  }
}

define_crc_preset! {
  /// CRC-16/KERMIT checksum (aka CRC-16/CCITT-TRUE).
  pub struct Crc16Kermit: u16 {
    engine: Crc16Engine::X25,
    init: 0x0000,
    xorout: 0x0000,
    check: 0x2189,
    residue: 0x0000,
  }
}

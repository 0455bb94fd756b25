//! CRC-32 catalogue presets.
//!
//! | Preset | Poly (refl.) | Init | XorOut | Check | Residue |
//! |--------|--------------|------|--------|-------|---------|
//! | CRC-32/ISO-HDLC | 0xEDB88320 | 0xFFFFFFFF | 0xFFFFFFFF | 0xCBF43926 | 0xDEBB20E3 |
//! | CRC-32/JAMCRC | 0xEDB88320 | 0xFFFFFFFF | 0x00000000 | 0x340BC6D9 | 0x00000000 |
//! | CRC-32/CD-ROM-EDC | 0xD8018001 | 0x00000000 | 0x00000000 | 0x6EC2EDC4 | 0x00000000 |
//!
//! # Usage
//!
//! ```
//! use checksum::{Checksum, Crc32IsoHdlc};
//!
//! let mut hasher = Crc32IsoHdlc::new();
//! hasher.update(b"1234");
//! hasher.update(b"56789");
//! assert_eq!(hasher.finalize(), 0xCBF4_3926);
//! ```

use super::Crc32Engine;

define_crc_preset! {
  /// CRC-32/ISO-HDLC checksum (Ethernet, gzip, zip, PNG).
  pub struct Crc32IsoHdlc: u32 {
    engine: Crc32Engine::IEEE,
    init: 0xFFFF_FFFF,
    xorout: 0xFFFF_FFFF,
    check: 0xCBF4_3926,
    residue: 0xDEBB_20E3,
  }
}

define_crc_preset! {
  /// CRC-32/JAMCRC checksum: ISO-HDLC without the final inversion.
  pub struct Crc32Jamcrc: u32 {
    engine: Crc32Engine::IEEE,
    init: 0xFFFF_FFFF,
    xorout: 0x0000_0000,
    check: 0x340B_C6D9,
    residue: 0x0000_0000,
  }
}

define_crc_preset! {
  /// CRC-32/CD-ROM-EDC checksum (CD-ROM mode 1 sector error detection).
  pub struct Crc32CdRomEdc: u32 {
    engine: Crc32Engine::CD_ROM_EDC,
    init: 0x0000_0000,
    xorout: 0x0000_0000,
    check: 0x6EC2_EDC4,
    residue: 0x0000_0000,
  }
}

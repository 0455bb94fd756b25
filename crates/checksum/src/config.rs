//! Polynomial selection (defaults + environment overrides).
//!
//! Which polynomial a caller verifies or computes with is an explicit value
//! ([`Crc16Poly`], [`Crc32Poly`]), never a build-time switch. This module
//! gives those values a textual form and a process-wide default that can be
//! overridden from the environment:
//!
//! | Variable | Values |
//! |----------|--------|
//! | `BITKIT_CRC16_POLY` | `modbus`, `x25` (and aliases accepted by its `FromStr`) |
//! | `BITKIT_CRC32_POLY` | `ieee`, `cd-rom-edc` (and aliases accepted by its `FromStr`) |
//!
//! Unrecognised or empty values are ignored.

use core::{fmt, str::FromStr};

use crate::{crc16::Crc16Poly, crc32::Crc32Poly};

/// A polynomial name did not match any supported polynomial.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ParsePolyError {
  width: u8,
}

impl ParsePolyError {
  /// CRC width (16 or 32) the name was parsed for.
  #[inline]
  #[must_use]
  pub const fn width(&self) -> u8 {
    self.width
  }
}

impl fmt::Display for ParsePolyError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "unrecognised CRC-{} polynomial", self.width)
  }
}

impl core::error::Error for ParsePolyError {}

impl Crc16Poly {
  #[must_use]
  pub const fn as_str(self) -> &'static str {
    match self {
      Self::Modbus => "modbus",
      Self::X25 => "x25",
    }
  }
}

impl fmt::Display for Crc16Poly {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

impl FromStr for Crc16Poly {
  type Err = ParsePolyError;

  /// Accepts (case-insensitive) `modbus`, `arc`, `usb`, `a001`, `0xa001`
  /// and `x25`, `x.25`, `x-25`, `kermit`, `sdlc`, `8408`, `0x8408`.
  fn from_str(s: &str) -> Result<Self, Self::Err> {
    let value = s.trim();
    let is = |name: &str| value.eq_ignore_ascii_case(name);

    if is("modbus") || is("arc") || is("usb") || is("a001") || is("0xa001") {
      return Ok(Self::Modbus);
    }
    if is("x25") || is("x.25") || is("x-25") || is("kermit") || is("sdlc") || is("8408") || is("0x8408") {
      return Ok(Self::X25);
    }

    Err(ParsePolyError { width: 16 })
  }
}

impl Crc32Poly {
  #[must_use]
  pub const fn as_str(self) -> &'static str {
    match self {
      Self::Ieee => "ieee",
      Self::CdRomEdc => "cd-rom-edc",
    }
  }
}

impl fmt::Display for Crc32Poly {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

impl FromStr for Crc32Poly {
  type Err = ParsePolyError;

  /// Accepts (case-insensitive) `ieee`, `zlib`, `pkzip`, `iso-hdlc`,
  /// `edb88320`, `0xedb88320` and `cd-rom-edc`, `cdrom`, `crc32c-alt`,
  /// `crc32c_alt`, `d8018001`, `0xd8018001`.
  fn from_str(s: &str) -> Result<Self, Self::Err> {
    let value = s.trim();
    let is = |name: &str| value.eq_ignore_ascii_case(name);

    if is("ieee") || is("zlib") || is("pkzip") || is("iso-hdlc") || is("edb88320") || is("0xedb88320") {
      return Ok(Self::Ieee);
    }
    if is("cd-rom-edc")
      || is("cdrom")
      || is("crc32c-alt")
      || is("crc32c_alt")
      || is("d8018001")
      || is("0xd8018001")
    {
      return Ok(Self::CdRomEdc);
    }

    Err(ParsePolyError { width: 32 })
  }
}

/// Selected polynomial per width.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct PolyConfig {
  pub crc16: Crc16Poly,
  pub crc32: Crc32Poly,
}

#[derive(Clone, Copy, Debug, Default)]
struct Overrides {
  crc16: Option<Crc16Poly>,
  crc32: Option<Crc32Poly>,
}

impl PolyConfig {
  fn with_overrides(self, ov: Overrides) -> Self {
    Self {
      crc16: ov.crc16.unwrap_or(self.crc16),
      crc32: ov.crc32.unwrap_or(self.crc32),
    }
  }
}

#[cfg(feature = "std")]
fn read_env_overrides() -> Overrides {
  fn parse<T: FromStr>(name: &str) -> Option<T> {
    let value = std::env::var(name).ok()?;
    let value = value.trim();
    if value.is_empty() {
      return None;
    }
    value.parse::<T>().ok()
  }

  Overrides {
    crc16: parse("BITKIT_CRC16_POLY"),
    crc32: parse("BITKIT_CRC32_POLY"),
  }
}

#[cfg(not(feature = "std"))]
fn read_env_overrides() -> Overrides {
  Overrides::default()
}

/// Configuration after applying environment overrides, read fresh.
#[must_use]
pub fn from_env() -> PolyConfig {
  PolyConfig::default().with_overrides(read_env_overrides())
}

/// Cached process-wide polynomial configuration.
#[inline]
#[must_use]
pub fn get() -> PolyConfig {
  #[cfg(feature = "std")]
  {
    use std::sync::OnceLock;
    static CACHED: OnceLock<PolyConfig> = OnceLock::new();
    *CACHED.get_or_init(from_env)
  }

  #[cfg(not(feature = "std"))]
  {
    PolyConfig::default()
  }
}

#[cfg(test)]
mod tests {
  use std::string::ToString;

  use super::*;

  #[test]
  fn defaults_are_modbus_and_ieee() {
    let config = PolyConfig::default();
    assert_eq!(config.crc16, Crc16Poly::Modbus);
    assert_eq!(config.crc32, Crc32Poly::Ieee);
  }

  #[test]
  fn parse_crc16_aliases() {
    assert_eq!("modbus".parse(), Ok(Crc16Poly::Modbus));
    assert_eq!(" 0xA001 ".parse(), Ok(Crc16Poly::Modbus));
    assert_eq!("X.25".parse(), Ok(Crc16Poly::X25));
    assert_eq!("KERMIT".parse(), Ok(Crc16Poly::X25));
    assert_eq!("crc8".parse::<Crc16Poly>(), Err(ParsePolyError { width: 16 }));
  }

  #[test]
  fn parse_crc32_aliases() {
    assert_eq!("zlib".parse(), Ok(Crc32Poly::Ieee));
    assert_eq!("0xEDB88320".parse(), Ok(Crc32Poly::Ieee));
    assert_eq!("CRC32C_ALT".parse(), Ok(Crc32Poly::CdRomEdc));
    assert_eq!("cd-rom-edc".parse(), Ok(Crc32Poly::CdRomEdc));
    assert!("castagnoli".parse::<Crc32Poly>().is_err());
  }

  #[test]
  fn display_round_trips() {
    for poly in Crc16Poly::ALL {
      assert_eq!(poly.to_string().parse(), Ok(poly));
    }
    for poly in Crc32Poly::ALL {
      assert_eq!(poly.to_string().parse(), Ok(poly));
    }
  }

  #[test]
  fn overrides_replace_only_what_is_set() {
    let ov = Overrides {
      crc16: Some(Crc16Poly::X25),
      crc32: None,
    };
    let config = PolyConfig::default().with_overrides(ov);
    assert_eq!(config.crc16, Crc16Poly::X25);
    assert_eq!(config.crc32, Crc32Poly::Ieee);
  }

  #[test]
  fn error_message_names_width() {
    let err = "nope".parse::<Crc32Poly>().unwrap_err();
    assert_eq!(err.width(), 32);
    assert_eq!(err.to_string(), "unrecognised CRC-32 polynomial");
  }
}

//! Known-answer self-test.
//!
//! Runs every algorithm against published vectors and mathematical
//! properties and reports each check as passed or failed. Nothing here
//! panics or aborts: a failing check is data in the [`Report`].
//!
//! CRC vectors depend on the polynomial, so only the vectors for the
//! polynomials selected in the [`PolyConfig`] are checked.
//!
//! # Example
//!
//! ```
//! use bitkit::{PolyConfig, selftest};
//!
//! let report = selftest::run(PolyConfig::default());
//! assert!(report.is_success());
//! assert_eq!(report.failures().count(), 0);
//! ```

use core::fmt;

use checksum::{Crc16Engine, Crc16Poly, Crc32Engine, Crc32Poly, PolyConfig};
use intmath::{gcd, gray_decode, gray_encode, isqrt};
use tracing::{debug, info, warn};
use traits::CheckFailure;

const CHECK_STRING: &[u8] = b"123456789";

/// Outcome of one check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CheckResult {
  pub name: &'static str,
  pub outcome: Result<(), CheckFailure>,
}

impl CheckResult {
  #[inline]
  #[must_use]
  pub const fn passed(&self) -> bool {
    self.outcome.is_ok()
  }
}

/// Every check the self-test ran, in order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Report {
  results: Vec<CheckResult>,
}

impl Report {
  #[must_use]
  pub fn results(&self) -> &[CheckResult] {
    &self.results
  }

  #[must_use]
  pub fn len(&self) -> usize {
    self.results.len()
  }

  #[must_use]
  pub fn is_empty(&self) -> bool {
    self.results.is_empty()
  }

  #[must_use]
  pub fn passed(&self) -> usize {
    self.results.iter().filter(|r| r.passed()).count()
  }

  pub fn failures(&self) -> impl Iterator<Item = &CheckFailure> {
    self.results.iter().filter_map(|r| r.outcome.as_ref().err())
  }

  #[must_use]
  pub fn is_success(&self) -> bool {
    self.results.iter().all(CheckResult::passed)
  }

  /// `Ok(self)` when every check passed, otherwise the failures.
  pub fn into_result(self) -> Result<Self, SelfTestError> {
    if self.is_success() {
      return Ok(self);
    }
    Err(SelfTestError {
      total: self.results.len(),
      failures: self.failures().copied().collect(),
    })
  }
}

impl fmt::Display for Report {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}/{} self-checks passed", self.passed(), self.len())
  }
}

/// One or more self-checks failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelfTestError {
  total: usize,
  failures: Vec<CheckFailure>,
}

impl SelfTestError {
  #[must_use]
  pub fn failures(&self) -> &[CheckFailure] {
    &self.failures
  }

  /// Number of checks that ran, passed or not.
  #[must_use]
  pub const fn total(&self) -> usize {
    self.total
  }
}

impl fmt::Display for SelfTestError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{} of {} self-checks failed", self.failures.len(), self.total)?;
    if let Some(first) = self.failures.first() {
      write!(f, "; first: {first}")?;
    }
    Ok(())
  }
}

impl std::error::Error for SelfTestError {}

/// Records checks as they run.
#[derive(Debug, Default)]
struct Checker {
  results: Vec<CheckResult>,
}

impl Checker {
  fn record(&mut self, name: &'static str, outcome: Result<(), CheckFailure>) {
    match &outcome {
      Ok(()) => debug!(check = name, "passed"),
      Err(failure) => warn!(check = name, %failure, "failed"),
    }
    self.results.push(CheckResult { name, outcome });
  }

  fn equal(&mut self, name: &'static str, expected: impl Into<u64>, actual: impl Into<u64>) {
    let (expected, actual) = (expected.into(), actual.into());
    let outcome = if expected == actual {
      Ok(())
    } else {
      Err(CheckFailure::mismatch(name, expected, actual))
    };
    self.record(name, outcome);
  }

  fn holds(&mut self, name: &'static str, input: u64, ok: bool) {
    let outcome = if ok {
      Ok(())
    } else {
      Err(CheckFailure::violated(name).at(input))
    };
    self.record(name, outcome);
  }

  fn finish(self) -> Report {
    Report { results: self.results }
  }
}

/// Run every check for the polynomials in `config`.
#[must_use]
pub fn run(config: PolyConfig) -> Report {
  let mut checker = Checker::default();

  crc16_checks(&mut checker, config.crc16);
  crc32_checks(&mut checker, config.crc32);
  gcd_checks(&mut checker);
  gray_checks(&mut checker);
  isqrt_checks(&mut checker);

  let report = checker.finish();
  info!(crc16 = %config.crc16, crc32 = %config.crc32, "{report}");
  report
}

fn crc16_checks(c: &mut Checker, poly: Crc16Poly) {
  let crc = Crc16Engine::new(poly);

  c.equal("crc16/empty", 0u16, crc.compute(0, Some(b""), 0));
  c.equal("crc16/absent", 42u16, crc.compute(42, None, 0));
  c.equal("crc16/absent-with-length", 42u16, crc.compute(42, None, 9));
  c.equal("crc16/zero-length", 42u16, crc.compute(42, Some(CHECK_STRING), 0));

  match poly {
    Crc16Poly::Modbus => {
      // Modbus over serial line V1.02.
      c.equal("crc16/modbus-frame", 0x1241u16, crc.compute(0xFFFF, Some(b"\x02\x07"), 2));
      c.equal("crc16/modbus-codeword", 0u16, crc.compute(0xFFFF, Some(b"\x02\x07\x41\x12"), 4));
      // CRC-16/USB.
      c.equal("crc16/usb-check", 0xB4C8u16, crc.compute(0xFFFF, Some(CHECK_STRING), 9) ^ 0xFFFF);
      c.equal("crc16/usb-residue", 0xB001u16, crc.compute(0xFFFF, Some(b"123456789\xC8\xB4"), 11));
      c.equal("crc16/usb-residue-ones", 0xB001u16, crc.compute(0, Some(b"\xFF\xFF"), 2));
    }
    Crc16Poly::X25 => {
      // CRC-16/IBM-SDLC.
      c.equal("crc16/sdlc-check", 0x906Eu16, crc.compute(0xFFFF, Some(CHECK_STRING), 9) ^ 0xFFFF);
      c.equal("crc16/sdlc-residue", 0xF0B8u16, crc.compute(0xFFFF, Some(b"123456789\x6E\x90"), 11));
      c.equal("crc16/sdlc-residue-ones", 0xF0B8u16, crc.compute(0, Some(b"\xFF\xFF"), 2));
    }
  }
}

fn crc32_checks(c: &mut Checker, poly: Crc32Poly) {
  let crc = Crc32Engine::new(poly);

  c.equal("crc32/empty", 0u32, crc.compute(0, Some(b""), 0));
  c.equal("crc32/absent", 42u32, crc.compute(42, None, 0));
  c.equal("crc32/absent-with-length", 42u32, crc.compute(42, None, 9));
  c.equal("crc32/zero-length", 42u32, crc.compute(42, Some(CHECK_STRING), 0));

  match poly {
    Crc32Poly::Ieee => {
      // CRC-32/ISO-HDLC.
      c.equal(
        "crc32/iso-hdlc-check",
        0xCBF4_3926u32,
        crc.compute(!0, Some(CHECK_STRING), 9) ^ !0,
      );
      c.equal(
        "crc32/iso-hdlc-residue",
        0xDEBB_20E3u32,
        crc.compute(!0, Some(b"123456789\x26\x39\xF4\xCB"), 13),
      );
      c.equal(
        "crc32/iso-hdlc-residue-ones",
        0xDEBB_20E3u32,
        crc.compute(0, Some(b"\xFF\xFF\xFF\xFF"), 4),
      );
    }
    Crc32Poly::CdRomEdc => {
      c.equal("crc32/cd-rom-edc-check", 0x6EC2_EDC4u32, crc.compute(0, Some(CHECK_STRING), 9));
      c.equal(
        "crc32/cd-rom-edc-residue",
        0u32,
        crc.compute(0, Some(b"123456789\xC4\xED\xC2\x6E"), 13),
      );
    }
  }
}

fn gcd_checks(c: &mut Checker) {
  const VECTORS: [(u32, u32, u32); 19] = [
    (0, 0, 0),
    (0, 1, 1),
    (2, 0, 2),
    (3, 3, 3),
    (8, 12, 4),
    (12, 8, 4),
    (15, 25, 5),
    (25, 15, 5),
    (30, 42, 6),
    (42, 30, 6),
    (1729, 87_539_319, 7),
    (87_539_319, 1729, 7),
    (0xFFFF_FFFE, 0xFFFF_FFFF, 1),
    (0xFFFF_FFFF, 0xFFFF_FFFE, 1),
    (0xFFFF_FFFC, 0xFFFF_FFFE, 2),
    (0xFFFF_FFFE, 0xFFFF_FFFC, 2),
    (0xFFFF_FFFF, 0xFFFF_FFFC, 3),
    (0xFFFF_FFFC, 0xFFFF_FFFF, 3),
    (0xFFFF_FFFF, 0xFFFF_FFFF, 0xFFFF_FFFF),
  ];

  for (u, v, expected) in VECTORS {
    let actual = gcd(u, v);
    let outcome = if actual == expected {
      Ok(())
    } else {
      let input = (u64::from(u) << 32) | u64::from(v);
      Err(CheckFailure::mismatch("gcd", expected.into(), actual.into()).at(input))
    };
    c.record("gcd", outcome);
  }
}

fn gray_checks(c: &mut Checker) {
  const SAMPLES: [u32; 8] = [
    0x0000_0000,
    0x7FFF_FFFF,
    0x8000_0000,
    0xFFFF_FFFF,
    0x0123_4567,
    0x89AB_CDEF,
    0xFEDC_BA98,
    0x7654_3210,
  ];

  for u in SAMPLES {
    let code = gray_encode(u);
    c.holds("gray/round-trip", u.into(), gray_decode(code) == u);
    c.holds(
      "gray/previous-adjacent",
      u.into(),
      (code ^ gray_encode(u.wrapping_sub(1))).count_ones() == 1,
    );
    c.holds(
      "gray/next-adjacent",
      u.into(),
      (code ^ gray_encode(u.wrapping_add(1))).count_ones() == 1,
    );
  }
}

fn isqrt_checks(c: &mut Checker) {
  const SQUARES: [u32; 18] = [
    0,
    1,
    2,
    3,
    4,
    5,
    6,
    7,
    8,
    9,
    10,
    42,
    1729,
    87_539_319,
    0xFFFF * 0xFFFF - 1,
    0xFFFF * 0xFFFF,
    0xFFFF * 0xFFFF + 1,
    0xFFFF_FFFF,
  ];

  for square in SQUARES {
    let root = u64::from(isqrt(square));
    let s = u64::from(square);
    let ok = root <= 0xFFFF && root * root <= s && (root >= 0xFFFF || s < (root + 1) * (root + 1));
    c.holds("isqrt/floor", s, ok);
  }
}

//! Error type for known-answer and property checks.
//!
//! The algorithm crates are total: nothing on a compute path returns an error.
//! The only failure the workspace reports is a check whose observed value
//! disagrees with a published vector or a mathematical property.

use core::fmt;

/// How a check failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FailureKind {
  /// The computed value differs from the published one.
  Mismatch {
    /// Published (expected) value.
    expected: u64,
    /// Value the implementation produced.
    actual: u64,
  },
  /// A property (round trip, bound, adjacency) did not hold.
  Violated,
}

/// A single failed check.
///
/// # Examples
///
/// ```
/// use traits::CheckFailure;
///
/// fn verify(name: &'static str, expected: u32, actual: u32) -> Result<(), CheckFailure> {
///   if expected == actual {
///     Ok(())
///   } else {
///     Err(CheckFailure::mismatch(name, u64::from(expected), u64::from(actual)))
///   }
/// }
///
/// let err = verify("crc32/check", 0xCBF4_3926, 0).unwrap_err();
/// assert_eq!(err.to_string(), "check crc32/check failed: expected 0xcbf43926, got 0x0");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub struct CheckFailure {
  /// Stable check name, e.g. `crc16/modbus-frame`.
  pub check: &'static str,
  /// Input the check was evaluated at, when the check is parameterised.
  pub input: Option<u64>,
  /// What went wrong.
  pub kind: FailureKind,
}

impl CheckFailure {
  /// A value check produced the wrong result.
  #[inline]
  #[must_use]
  pub const fn mismatch(check: &'static str, expected: u64, actual: u64) -> Self {
    Self {
      check,
      input: None,
      kind: FailureKind::Mismatch { expected, actual },
    }
  }

  /// A property check did not hold.
  #[inline]
  #[must_use]
  pub const fn violated(check: &'static str) -> Self {
    Self {
      check,
      input: None,
      kind: FailureKind::Violated,
    }
  }

  /// Attach the input the check was evaluated at.
  #[inline]
  #[must_use]
  pub const fn at(mut self, input: u64) -> Self {
    self.input = Some(input);
    self
  }
}

impl fmt::Display for CheckFailure {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "check {}", self.check)?;
    if let Some(input) = self.input {
      write!(f, "({input:#x})")?;
    }
    match self.kind {
      FailureKind::Mismatch { expected, actual } => {
        write!(f, " failed: expected {expected:#x}, got {actual:#x}")
      }
      FailureKind::Violated => f.write_str(" failed: property does not hold"),
    }
  }
}

impl core::error::Error for CheckFailure {}

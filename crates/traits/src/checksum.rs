//! Streaming checksum trait.
//!
//! Implemented by every catalogue CRC preset (CRC-16/MODBUS, CRC-32/ISO-HDLC, ...).
//!
//! - **Streaming**: Incremental updates for data that arrives in pieces
//! - **Resumable**: A finalized value can seed a new hasher via `with_initial`

use core::fmt::Debug;

/// Non-cryptographic checksum algorithm.
///
/// # Usage
///
/// ```rust,ignore
/// use checksum::{Checksum, Crc16Modbus};
///
/// // One-shot
/// let crc = Crc16Modbus::checksum(b"123456789");
///
/// // Streaming
/// let mut hasher = Crc16Modbus::new();
/// hasher.update(b"1234");
/// hasher.update(b"56789");
/// assert_eq!(hasher.finalize(), crc);
/// ```
///
/// # Implementor Requirements
///
/// - `new()` must return the same state as `Default::default()`
/// - `finalize()` must be idempotent (calling multiple times returns same value)
/// - `reset()` must restore the hasher to its initial state
pub trait Checksum: Clone + Default {
  /// Output size in bytes.
  ///
  /// - CRC-16: 2
  /// - CRC-32: 4
  const OUTPUT_SIZE: usize;

  /// The checksum output type.
  type Output: Copy + Eq + Debug + Default;

  /// Create a new hasher with the catalogue initial value.
  #[must_use]
  fn new() -> Self;

  /// Create a new hasher that continues from a finalized checksum.
  ///
  /// `Self::with_initial(Self::checksum(a))` followed by `update(b)` finalizes
  /// to `Self::checksum(a || b)`.
  #[must_use]
  fn with_initial(initial: Self::Output) -> Self;

  /// Update the hasher with additional data.
  fn update(&mut self, data: &[u8]);

  /// Update the hasher with multiple non-contiguous buffers.
  ///
  /// Semantics are identical to calling [`update`](Self::update) on each buffer
  /// in order.
  #[inline]
  fn update_vectored(&mut self, bufs: &[&[u8]]) {
    for buf in bufs {
      self.update(buf);
    }
  }

  /// Finalize and return the checksum.
  ///
  /// This method does not consume the hasher, allowing further updates.
  #[must_use]
  fn finalize(&self) -> Self::Output;

  /// Reset the hasher to its initial state.
  fn reset(&mut self);

  /// Compute the checksum of data in one shot.
  #[inline]
  #[must_use]
  fn checksum(data: &[u8]) -> Self::Output {
    let mut h = Self::new();
    h.update(data);
    h.finalize()
  }

  /// Compute the checksum of multiple buffers in one shot.
  #[inline]
  #[must_use]
  fn checksum_vectored(bufs: &[&[u8]]) -> Self::Output {
    let mut h = Self::new();
    h.update_vectored(bufs);
    h.finalize()
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  /// Byte-sum checksum, just enough to exercise the provided methods.
  #[derive(Clone, Default)]
  struct Sum8 {
    initial: u8,
    state: u8,
  }

  impl Checksum for Sum8 {
    const OUTPUT_SIZE: usize = 1;
    type Output = u8;

    fn new() -> Self {
      Self::default()
    }

    fn with_initial(initial: u8) -> Self {
      Self { initial, state: initial }
    }

    fn update(&mut self, data: &[u8]) {
      for &b in data {
        self.state = self.state.wrapping_add(b);
      }
    }

    fn finalize(&self) -> u8 {
      self.state
    }

    fn reset(&mut self) {
      self.state = self.initial;
    }
  }

  #[test]
  fn one_shot_matches_streaming() {
    let mut h = Sum8::new();
    h.update(b"12");
    h.update(b"34");
    assert_eq!(h.finalize(), Sum8::checksum(b"1234"));
  }

  #[test]
  fn vectored_matches_contiguous() {
    assert_eq!(Sum8::checksum_vectored(&[b"ab", b"", b"cd"]), Sum8::checksum(b"abcd"));
  }

  #[test]
  fn reset_restores_initial() {
    let mut h = Sum8::with_initial(7);
    h.update(b"xyz");
    h.reset();
    assert_eq!(h.finalize(), 7);
  }
}

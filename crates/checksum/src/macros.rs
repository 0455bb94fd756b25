//! Internal macros for CRC preset generation.
//!
//! Catalogue presets that share a width differ only in polynomial, initial
//! register and final XOR, so one macro stamps out each streaming type.

/// Generate a catalogue CRC preset with its [`Checksum`](traits::Checksum) implementation.
///
/// This macro creates:
/// - The struct definition with `state` and `initial` registers
/// - `CHECK` / `RESIDUE` constants and inherent `new`, `resume`, `checksum`,
///   `update`, `finalize`, `reset`
/// - `Checksum` trait implementation
///
/// # Arguments
///
/// - `$name`: The type name (e.g., `Crc16Modbus`)
/// - `$ty`: Register type (`u16` or `u32`)
/// - `$engine`: Engine constant (e.g., `Crc16Engine::MODBUS`)
/// - `$init` / `$xorout`: Catalogue initial value and final XOR
/// - `$check` / `$residue`: Catalogue check and residue values
macro_rules! define_crc_preset {
  (
    $(#[$outer:meta])*
    $vis:vis struct $name:ident: $ty:ty {
      engine: $engine:expr,
      init: $init:expr,
      xorout: $xorout:expr,
      check: $check:expr,
      residue: $residue:expr,
    }
  ) => {
    $(#[$outer])*
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    $vis struct $name {
      /// Current CRC register.
      state: $ty,
      /// Register value restored by `reset`.
      initial: $ty,
    }

    impl $name {
      const INIT: $ty = $init;
      const XOR_OUT: $ty = $xorout;

      /// Catalogue check value: the checksum of `b"123456789"`.
      pub const CHECK: $ty = $check;

      /// Register value after processing any message followed by its own
      /// little-endian checksum (before the final XOR).
      pub const RESIDUE: $ty = $residue;

      #[inline]
      #[must_use]
      pub const fn new() -> Self {
        Self {
          state: Self::INIT,
          initial: Self::INIT,
        }
      }

      /// Create a new hasher that will resume from a previous checksum.
      #[inline]
      #[must_use]
      pub const fn resume(crc: $ty) -> Self {
        Self {
          state: crc ^ Self::XOR_OUT,
          initial: crc ^ Self::XOR_OUT,
        }
      }

      /// Compute the checksum of `data` in one shot.
      #[inline]
      #[must_use]
      pub fn checksum(data: &[u8]) -> $ty {
        $engine.update(Self::INIT, data) ^ Self::XOR_OUT
      }

      #[inline]
      pub fn update(&mut self, data: &[u8]) {
        self.state = $engine.update(self.state, data);
      }

      #[inline]
      #[must_use]
      pub const fn finalize(&self) -> $ty {
        self.state ^ Self::XOR_OUT
      }

      #[inline]
      pub fn reset(&mut self) {
        self.state = self.initial;
      }

      /// Raw register, before the final XOR.
      #[inline]
      #[must_use]
      pub const fn register(&self) -> $ty {
        self.state
      }
    }

    impl Default for $name {
      #[inline]
      fn default() -> Self {
        Self::new()
      }
    }

    impl $crate::Checksum for $name {
      const OUTPUT_SIZE: usize = core::mem::size_of::<$ty>();
      type Output = $ty;

      #[inline]
      fn new() -> Self {
        $name::new()
      }

      #[inline]
      fn with_initial(initial: $ty) -> Self {
        $name::resume(initial)
      }

      #[inline]
      fn update(&mut self, data: &[u8]) {
        $name::update(self, data);
      }

      #[inline]
      fn finalize(&self) -> $ty {
        $name::finalize(self)
      }

      #[inline]
      fn reset(&mut self) {
        $name::reset(self);
      }
    }
  };
}

//! Fuzz target for the CRC-16 engines and presets.
//!
//! Tests that:
//! - No panics on arbitrary input, accumulator or length
//! - The table engine agrees with the bitwise reference
//! - Incremental updates and resume match one-shot

#![no_main]

use arbitrary::Arbitrary;
use checksum::{Crc16Engine, Crc16Modbus, Crc16Poly, Crc16Usb, reference::crc16_bitwise};
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
struct Input {
  data: Vec<u8>,
  crc: u16,
  length: usize,
  split_point: usize,
  x25: bool,
}

fuzz_target!(|input: Input| {
  let data = &input.data;
  let poly = if input.x25 { Crc16Poly::X25 } else { Crc16Poly::Modbus };
  let engine = Crc16Engine::new(poly);

  let prefix = &data[..input.length.min(data.len())];
  let computed = engine.compute(input.crc, Some(data.as_slice()), input.length);
  assert_eq!(computed, crc16_bitwise(poly.reflected(), input.crc, prefix), "crc16/{poly} reference mismatch");
  assert_eq!(engine.compute(input.crc, None, input.length), input.crc, "crc16/{poly} absent buffer");

  let split = input.split_point % (data.len() + 1);
  test_preset_modbus(data, split);
  test_preset_usb(data, split);
});

fn test_preset_modbus(data: &[u8], split: usize) {
  let oneshot = Crc16Modbus::checksum(data);
  let (a, b) = data.split_at(split);

  let mut hasher = Crc16Modbus::new();
  hasher.update(a);
  hasher.update(b);
  assert_eq!(oneshot, hasher.finalize(), "crc16/modbus incremental mismatch");

  let mut resumed = Crc16Modbus::resume(Crc16Modbus::checksum(a));
  resumed.update(b);
  assert_eq!(oneshot, resumed.finalize(), "crc16/modbus resume mismatch");
}

fn test_preset_usb(data: &[u8], split: usize) {
  let oneshot = Crc16Usb::checksum(data);
  let (a, b) = data.split_at(split);

  let mut resumed = Crc16Usb::resume(Crc16Usb::checksum(a));
  resumed.update(b);
  assert_eq!(oneshot, resumed.finalize(), "crc16/usb resume mismatch");

  let mut codeword = data.to_vec();
  codeword.extend_from_slice(&oneshot.to_le_bytes());
  let mut residue = Crc16Usb::new();
  residue.update(&codeword);
  assert_eq!(residue.register(), Crc16Usb::RESIDUE, "crc16/usb residue mismatch");
}

//! Fuzz target for the CRC-32 engines and presets.

#![no_main]

use arbitrary::Arbitrary;
use checksum::{Crc32CdRomEdc, Crc32Engine, Crc32IsoHdlc, Crc32Jamcrc, Crc32Poly, reference::crc32_bitwise};
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
struct Input {
  data: Vec<u8>,
  crc: u32,
  length: usize,
  split_point: usize,
  cd_rom: bool,
}

fuzz_target!(|input: Input| {
  let data = &input.data;
  let poly = if input.cd_rom { Crc32Poly::CdRomEdc } else { Crc32Poly::Ieee };
  let engine = Crc32Engine::new(poly);

  let prefix = &data[..input.length.min(data.len())];
  let computed = engine.compute(input.crc, Some(data.as_slice()), input.length);
  assert_eq!(computed, crc32_bitwise(poly.reflected(), input.crc, prefix), "crc32/{poly} reference mismatch");
  assert_eq!(engine.compute(input.crc, None, input.length), input.crc, "crc32/{poly} absent buffer");

  let split = input.split_point % (data.len() + 1);
  let (a, b) = data.split_at(split);

  let oneshot = Crc32IsoHdlc::checksum(data);
  let mut hasher = Crc32IsoHdlc::new();
  hasher.update(a);
  hasher.update(b);
  assert_eq!(oneshot, hasher.finalize(), "crc32/iso-hdlc incremental mismatch");

  // JAMCRC is ISO-HDLC without the final inversion.
  assert_eq!(Crc32Jamcrc::checksum(data), !oneshot, "crc32/jamcrc complement mismatch");

  let edc = Crc32CdRomEdc::checksum(data);
  let mut resumed = Crc32CdRomEdc::resume(Crc32CdRomEdc::checksum(a));
  resumed.update(b);
  assert_eq!(edc, resumed.finalize(), "crc32/cd-rom-edc resume mismatch");
});

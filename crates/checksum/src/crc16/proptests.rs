use crc::{CRC_16_ARC, CRC_16_IBM_SDLC, CRC_16_KERMIT, CRC_16_MODBUS, CRC_16_USB, Crc};
use proptest::prelude::*;

use super::*;
use crate::common::reference::crc16_bitwise;

const MODBUS: Crc<u16> = Crc::<u16>::new(&CRC_16_MODBUS);
const USB: Crc<u16> = Crc::<u16>::new(&CRC_16_USB);
const ARC: Crc<u16> = Crc::<u16>::new(&CRC_16_ARC);
const IBM_SDLC: Crc<u16> = Crc::<u16>::new(&CRC_16_IBM_SDLC);
const KERMIT: Crc<u16> = Crc::<u16>::new(&CRC_16_KERMIT);

fn any_poly() -> impl Strategy<Value = Crc16Poly> {
  prop_oneof![Just(Crc16Poly::Modbus), Just(Crc16Poly::X25)]
}

proptest! {
  #[test]
  fn engine_matches_bitwise(
    poly in any_poly(),
    init in any::<u16>(),
    data in proptest::collection::vec(any::<u8>(), 0..=1024)
  ) {
    let ours = Crc16Engine::new(poly).update(init, &data);
    prop_assert_eq!(ours, crc16_bitwise(poly.reflected(), init, &data));
  }

  #[test]
  fn absent_buffer_ignores_length(poly in any_poly(), crc in any::<u16>(), length in any::<usize>()) {
    prop_assert_eq!(Crc16Engine::new(poly).compute(crc, None, length), crc);
  }

  #[test]
  fn compute_folds_prefix(
    poly in any_poly(),
    crc in any::<u16>(),
    data in proptest::collection::vec(any::<u8>(), 0..=256),
    length in 0usize..=300
  ) {
    let engine = Crc16Engine::new(poly);
    let prefix = &data[..length.min(data.len())];
    prop_assert_eq!(engine.compute(crc, Some(data.as_slice()), length), engine.update(crc, prefix));
  }

  #[test]
  fn split_updates_chain(
    poly in any_poly(),
    data in proptest::collection::vec(any::<u8>(), 0..=512),
    split in any::<usize>()
  ) {
    let engine = Crc16Engine::new(poly);
    let split = split % (data.len() + 1);
    let (a, b) = data.split_at(split);
    prop_assert_eq!(engine.update(engine.update(0xFFFF, a), b), engine.update(0xFFFF, &data));
  }

  // ─────────────────────────────────────────────────────────────────────────────
  // Cross-validation against the `crc` crate catalogue
  // ─────────────────────────────────────────────────────────────────────────────

  #[test]
  fn presets_match_crc_catalogue(data in proptest::collection::vec(any::<u8>(), 0..=4096)) {
    prop_assert_eq!(Crc16Modbus::checksum(&data), MODBUS.checksum(&data));
    prop_assert_eq!(Crc16Usb::checksum(&data), USB.checksum(&data));
    prop_assert_eq!(Crc16Arc::checksum(&data), ARC.checksum(&data));
    prop_assert_eq!(Crc16IbmSdlc::checksum(&data), IBM_SDLC.checksum(&data));
    prop_assert_eq!(Crc16Kermit::checksum(&data), KERMIT.checksum(&data));
  }

  #[test]
  fn streaming_matches_crc_catalogue(
    data in proptest::collection::vec(any::<u8>(), 0..=4096),
    chunk in 1usize..=257
  ) {
    let mut ours = Crc16IbmSdlc::new();
    let mut reference = IBM_SDLC.digest();

    for part in data.chunks(chunk) {
      ours.update(part);
      reference.update(part);
    }

    prop_assert_eq!(ours.finalize(), reference.finalize());
  }
}

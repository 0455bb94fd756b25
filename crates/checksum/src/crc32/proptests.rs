use crc::{CRC_32_CD_ROM_EDC, CRC_32_ISO_HDLC, CRC_32_JAMCRC, Crc};
use proptest::prelude::*;

use super::*;
use crate::common::reference::crc32_bitwise;

const ISO_HDLC: Crc<u32> = Crc::<u32>::new(&CRC_32_ISO_HDLC);
const JAMCRC: Crc<u32> = Crc::<u32>::new(&CRC_32_JAMCRC);
const CD_ROM_EDC: Crc<u32> = Crc::<u32>::new(&CRC_32_CD_ROM_EDC);

fn any_poly() -> impl Strategy<Value = Crc32Poly> {
  prop_oneof![Just(Crc32Poly::Ieee), Just(Crc32Poly::CdRomEdc)]
}

proptest! {
  #[test]
  fn engine_matches_bitwise(
    poly in any_poly(),
    init in any::<u32>(),
    data in proptest::collection::vec(any::<u8>(), 0..=1024)
  ) {
    let ours = Crc32Engine::new(poly).update(init, &data);
    prop_assert_eq!(ours, crc32_bitwise(poly.reflected(), init, &data));
  }

  #[test]
  fn absent_buffer_ignores_length(poly in any_poly(), crc in any::<u32>(), length in any::<usize>()) {
    prop_assert_eq!(Crc32Engine::new(poly).compute(crc, None, length), crc);
  }

  #[test]
  fn appended_register_zeroes(
    poly in any_poly(),
    init in any::<u32>(),
    data in proptest::collection::vec(any::<u8>(), 0..=512)
  ) {
    // Reflected CRCs: folding the raw register back in, low byte first, clears it.
    let engine = Crc32Engine::new(poly);
    let crc = engine.update(init, &data);
    prop_assert_eq!(engine.update(crc, &crc.to_le_bytes()), 0);
  }

  // ─────────────────────────────────────────────────────────────────────────────
  // Cross-validation against the `crc` crate catalogue
  // ─────────────────────────────────────────────────────────────────────────────

  #[test]
  fn presets_match_crc_catalogue(data in proptest::collection::vec(any::<u8>(), 0..=4096)) {
    prop_assert_eq!(Crc32IsoHdlc::checksum(&data), ISO_HDLC.checksum(&data));
    prop_assert_eq!(Crc32Jamcrc::checksum(&data), JAMCRC.checksum(&data));
    prop_assert_eq!(Crc32CdRomEdc::checksum(&data), CD_ROM_EDC.checksum(&data));
  }

  #[test]
  fn streaming_matches_crc_catalogue(
    data in proptest::collection::vec(any::<u8>(), 0..=4096),
    chunk in 1usize..=257
  ) {
    let mut ours = Crc32IsoHdlc::new();
    let mut reference = ISO_HDLC.digest();

    for part in data.chunks(chunk) {
      ours.update(part);
      reference.update(part);
    }

    prop_assert_eq!(ours.finalize(), reference.finalize());
  }
}

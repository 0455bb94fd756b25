//! Basic checksum usage: raw engines, one-shot and streaming presets.
//!
//! Run with: `cargo run --example basic -p checksum`

use checksum::{
  Checksum, Crc16Engine, Crc16IbmSdlc, Crc16Modbus, Crc32CdRomEdc, Crc32IsoHdlc, config, crc16, crc32,
};

fn main() {
  println!("=== Checksum Basic Examples ===\n");

  engine_examples();
  one_shot_examples();
  streaming_examples();
}

/// Raw engines: caller owns the accumulator, initial value and final XOR.
fn engine_examples() {
  println!("--- Raw Engines ---\n");

  // Modbus RTU: read exception status request to slave 2.
  let frame = [0x02u8, 0x07];
  let crc = crc16(0xFFFF, Some(&frame[..]), frame.len());
  println!("Modbus frame {frame:02X?}: CRC 0x{crc:04X} (sent as {:02X?})", crc.to_le_bytes());
  assert_eq!(crc, 0x1241);

  let x25 = Crc16Engine::X25.compute(0xFFFF, Some(b"123456789"), 9) ^ 0xFFFF;
  println!("CRC-16/X-25:      0x{x25:04X}");

  let ieee = crc32(0xFFFF_FFFF, Some(b"123456789"), 9) ^ 0xFFFF_FFFF;
  println!("CRC-32/ISO-HDLC:  0x{ieee:08X}");

  let active = config::get();
  println!("Configured polynomials: crc16={} crc32={}", active.crc16, active.crc32);
  println!();
}

/// One-shot computation: fastest when you have all data in memory.
fn one_shot_examples() {
  println!("--- One-Shot Computation ---\n");

  let data = b"123456789";

  let modbus = Crc16Modbus::checksum(data);
  println!("CRC-16/MODBUS:     0x{modbus:04X}");
  assert_eq!(modbus, 0x4B37);

  let sdlc = Crc16IbmSdlc::checksum(data);
  println!("CRC-16/IBM-SDLC:   0x{sdlc:04X}");
  assert_eq!(sdlc, 0x906E);

  let edc = Crc32CdRomEdc::checksum(data);
  println!("CRC-32/CD-ROM-EDC: 0x{edc:08X}");
  assert_eq!(edc, 0x6EC2_EDC4);

  println!();
}

/// Streaming computation: process data in chunks.
fn streaming_examples() {
  println!("--- Streaming Computation ---\n");

  let data = b"The quick brown fox jumps over the lazy dog";

  let mut hasher = <Crc32IsoHdlc as Checksum>::new();
  for chunk in data.chunks(8) {
    hasher.update(chunk);
  }
  let crc = hasher.finalize();
  println!("CRC-32 (8-byte chunks): 0x{crc:08X}");
  assert_eq!(crc, Crc32IsoHdlc::checksum(data));

  // Resume from a saved checksum.
  let (head, tail) = data.split_at(10);
  let mut resumed = Crc32IsoHdlc::resume(Crc32IsoHdlc::checksum(head));
  resumed.update(tail);
  println!("CRC-32 (resumed):       0x{:08X}", resumed.finalize());
  assert_eq!(resumed.finalize(), crc);
}

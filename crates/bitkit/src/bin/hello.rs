//! Runs the known-answer self-test and greets on success.
//!
//! Logging goes to stderr and is controlled by `RUST_LOG`; stdout carries
//! only the greeting. Polynomial selection honours `BITKIT_CRC16_POLY` and
//! `BITKIT_CRC32_POLY`.

use std::process::ExitCode;

use bitkit::{config, selftest};
use tracing::error;

fn main() -> ExitCode {
  let _ = tracing_subscriber::FmtSubscriber::builder()
    .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
    .with_writer(std::io::stderr)
    .try_init();

  match selftest::run(config::get()).into_result() {
    Ok(_) => {
      println!("Hello, World!");
      ExitCode::SUCCESS
    }
    Err(err) => {
      for failure in err.failures() {
        error!(%failure, "self-check failed");
      }
      eprintln!("error: {err}");
      ExitCode::FAILURE
    }
  }
}

//! Core traits for the bitkit crates.
//!
//! This crate provides the foundational pieces the algorithm crates share. It
//! is `no_std` compatible and has zero dependencies.
//!
//! | Item | Purpose |
//! |------|---------|
//! | [`Checksum`] | Streaming, resumable checksum state (CRC-16, CRC-32 presets) |
//! | [`CheckFailure`] | One failed known-answer or property check |
//!
//! # Fallibility Discipline
//!
//! This crate denies `unwrap`, `expect`, and indexing in non-test code to ensure
//! all error paths are handled explicitly.
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![cfg_attr(not(test), deny(clippy::indexing_slicing))]
#![no_std]

#[cfg(feature = "std")]
extern crate std;

mod checksum;
pub mod error;

pub use checksum::Checksum;
pub use error::{CheckFailure, FailureKind};

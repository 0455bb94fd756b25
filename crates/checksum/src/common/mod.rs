//! Common utilities for CRC computation.
//!
//! This module provides:
//! - Const-fn lookup table generation for both CRC widths
//! - Bitwise reference implementations used as test oracles

pub mod reference;
pub mod tables;

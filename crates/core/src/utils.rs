//! Free helper functions.
//!
//! Small conversions that callers of the decoder keep needing: immediate sign
//! extension, byte swapping for big-endian images read on little-endian hosts, and
//! GPR names without going through a configuration.

use crate::common::error::InvalidRegisterIndexError;
use crate::isa::abi::{Abi, RegisterFile};

/// Sign-extends a 16-bit immediate. `0xFFFF` becomes `-1`.
#[inline]
pub const fn sign_extend_immediate(value: u16) -> i32 {
    value as i16 as i32
}

/// Reverses the byte order of a word.
#[inline]
pub const fn swap_endianness(word: u32) -> u32 {
    word.swap_bytes()
}

/// Returns `true` for 1, 2, 4, ... and `false` for zero.
#[inline]
pub const fn is_power_of_two(value: u32) -> bool {
    value.is_power_of_two()
}

/// O32 name of general-purpose register `index`, e.g. `$sp` for 29.
///
/// # Errors
///
/// Returns [`InvalidRegisterIndexError`] when `index` is 32 or above.
pub fn get_register_name_o32(index: u32) -> Result<&'static str, InvalidRegisterIndexError> {
    RegisterFile::Gpr.name(index, Abi::O32)
}

/// Numeric name of general-purpose register `index`, e.g. `$29`.
///
/// # Errors
///
/// Returns [`InvalidRegisterIndexError`] when `index` is 32 or above.
pub fn get_register_name_numeric(index: u32) -> Result<&'static str, InvalidRegisterIndexError> {
    RegisterFile::Gpr.name(index, Abi::Numeric)
}

/// Returns the crate version string (e.g., for scripting or diagnostics).
pub const fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

//! Memory Access Types.
//!
//! This module defines the classification of memory accesses performed by loads and stores.
//! These types are used for the following:
//! 1. **Classification:** Reporting the width of the data a load/store moves.
//! 2. **Analysis:** Letting callers type the memory a pointer dereference touches.
//! 3. **Unaligned Accesses:** Distinguishing the left/right halves of `lwl`/`lwr`-style pairs.

use serde::Serialize;

/// Width and kind of the memory access performed by an instruction.
///
/// Non-memory instructions report [`AccessType::Invalid`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize)]
pub enum AccessType {
    /// The instruction does not access memory.
    #[default]
    Invalid,
    /// 8-bit access.
    Byte,
    /// 16-bit access.
    Short,
    /// 32-bit access.
    Word,
    /// 64-bit access.
    Doubleword,
    /// 128-bit access (RSP quad vector loads/stores).
    Quadword,
    /// 32-bit floating-point access.
    Float,
    /// 64-bit floating-point access.
    DoubleFloat,
    /// Unaligned word access, left half.
    WordLeft,
    /// Unaligned word access, right half.
    WordRight,
    /// Unaligned doubleword access, left half.
    DoublewordLeft,
    /// Unaligned doubleword access, right half.
    DoublewordRight,
}

impl AccessType {
    /// Returns the number of bytes moved by a full access of this type.
    ///
    /// Unaligned halves report the width of the whole unit they belong to.
    pub const fn size(self) -> u32 {
        match self {
            Self::Invalid => 0,
            Self::Byte => 1,
            Self::Short => 2,
            Self::Word | Self::Float | Self::WordLeft | Self::WordRight => 4,
            Self::Doubleword
            | Self::DoubleFloat
            | Self::DoublewordLeft
            | Self::DoublewordRight => 8,
            Self::Quadword => 16,
        }
    }
}

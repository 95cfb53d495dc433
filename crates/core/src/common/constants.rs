//! Global Constants.
//!
//! This module defines the encoding constants shared by the decoder and formatter. It includes:
//! 1. **Field Masks and Shifts:** Positions of every named bit field in a MIPS word.
//! 2. **Instruction Constants:** Instruction size and the canonical `nop` encoding.
//! 3. **Register Constants:** Conventional register indices used by the classifier.

/// Size of a MIPS instruction in bytes.
pub const INSTRUCTION_SIZE: u32 = 4;

/// Encoding of `sll $zero, $zero, 0`, the canonical `nop`.
pub const NOP_WORD: u32 = 0x0000_0000;

/// Bit position of the primary opcode field (bits 31-26).
pub const OPCODE_SHIFT: u32 = 26;
/// Bit mask for the primary opcode field after shifting.
pub const OPCODE_MASK: u32 = 0x3F;

/// Bit position of the rs field (bits 25-21).
pub const RS_SHIFT: u32 = 21;
/// Bit position of the rt field (bits 20-16).
pub const RT_SHIFT: u32 = 16;
/// Bit position of the rd field (bits 15-11).
pub const RD_SHIFT: u32 = 11;
/// Bit position of the shift amount field (bits 10-6).
pub const SA_SHIFT: u32 = 6;
/// Bit mask for any 5-bit register-sized field after shifting.
pub const REG_MASK: u32 = 0x1F;

/// Bit mask for the function field (bits 5-0).
pub const FUNCTION_MASK: u32 = 0x3F;

/// Bit mask for the 16-bit immediate field (bits 15-0).
pub const IMMEDIATE_MASK: u32 = 0xFFFF;

/// Bit mask for the 26-bit jump target field (bits 25-0).
pub const INSTR_INDEX_MASK: u32 = 0x03FF_FFFF;

/// Bit mask for the 20-bit `syscall`/`break` code field after shifting.
pub const CODE_MASK: u32 = 0xF_FFFF;
/// Bit mask for a 10-bit half of the `break` code field after shifting.
pub const CODE_HALF_MASK: u32 = 0x3FF;

/// Bit mask for the raw coprocessor operation field (bits 24-0).
pub const COPRAW_MASK: u32 = 0x01FF_FFFF;

/// Bit position of the coprocessor "CO" bit that selects a computational operation.
pub const COP_CO_SHIFT: u32 = 25;

/// Index of the always-zero general-purpose register.
pub const GPR_ZERO: u32 = 0;
/// Index of the first kernel-reserved register (`$k0`).
pub const GPR_K0: u32 = 26;
/// Index of the second kernel-reserved register (`$k1`).
pub const GPR_K1: u32 = 27;
/// Index of the return address register (`$ra`).
pub const GPR_RA: u32 = 31;

/// Number of registers in a 5-bit register file.
pub const REGISTER_COUNT: u32 = 32;

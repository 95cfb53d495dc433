//! MIPS CPU opcode buckets.
//!
//! Values of the primary opcode and coprocessor format fields that select a
//! sub-table instead of naming an instruction directly.

/// SPECIAL bucket; the function field selects the instruction.
pub const OP_SPECIAL: u32 = 0x00;

/// REGIMM bucket; the rt field selects the instruction.
pub const OP_REGIMM: u32 = 0x01;

/// Coprocessor 0 (system control).
pub const OP_COP0: u32 = 0x10;

/// Coprocessor 1 (floating point).
pub const OP_COP1: u32 = 0x11;

/// Coprocessor 2 (RSP vector unit, GTE, or generic).
pub const OP_COP2: u32 = 0x12;

/// Load word to coprocessor 2; RSP vector loads on the RSP.
pub const OP_LWC2: u32 = 0x32;

/// Store word from coprocessor 2; RSP vector stores on the RSP.
pub const OP_SWC2: u32 = 0x3A;

/// Coprocessor format: branch on condition (rt selects the branch).
pub const FMT_BC: u32 = 0x08;

/// Coprocessor 1 format: single precision.
pub const FMT_S: u32 = 0x10;

/// Coprocessor 1 format: double precision.
pub const FMT_D: u32 = 0x11;

/// Coprocessor 1 format: 32-bit fixed point.
pub const FMT_W: u32 = 0x14;

/// Coprocessor 1 format: 64-bit fixed point.
pub const FMT_L: u32 = 0x15;

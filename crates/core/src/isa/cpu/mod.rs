//! General MIPS CPU instruction set (MIPS I-III).
//!
//! Covers the VR4300 integer set, COP0 (moves, branches, TLB and `eret`), the COP1
//! floating-point unit in all four formats, and the generic COP2 moves and branches.
//!
//! # Structure
//!
//! - `opcodes`: Primary opcode and coprocessor format values that select sub-tables.
//! - `tables`: The static opcode tables.

/// Opcode bucket constants.
pub mod opcodes;

/// Static opcode tables.
pub(crate) mod tables;

use crate::isa::id::InstrIdType;
use crate::isa::instruction::InstructionBits;
use crate::isa::table::{OpcodeEntry, Table};

use self::opcodes::{
    FMT_BC, FMT_D, FMT_L, FMT_S, FMT_W, OP_COP0, OP_COP1, OP_COP2, OP_REGIMM, OP_SPECIAL,
};

static NORMAL: Table = Table::new(InstrIdType::CpuNormal, tables::NORMAL);
static SPECIAL: Table = Table::new(InstrIdType::CpuSpecial, tables::SPECIAL);
static REGIMM: Table = Table::new(InstrIdType::CpuRegimm, tables::REGIMM);
static COP0: Table = Table::new(InstrIdType::CpuCop0, tables::COP0);
static BC0: Table = Table::new(InstrIdType::CpuCop0Bc0, tables::BC0);
static TLB: Table = Table::new(InstrIdType::CpuCop0Tlb, tables::TLB);
static COP1: Table = Table::new(InstrIdType::CpuCop1, tables::COP1);
static BC1: Table = Table::new(InstrIdType::CpuCop1Bc1, tables::BC1);
static FPU_S: Table = Table::new(InstrIdType::CpuCop1FpuS, tables::FPU_S);
static FPU_D: Table = Table::new(InstrIdType::CpuCop1FpuD, tables::FPU_D);
static FPU_W: Table = Table::new(InstrIdType::CpuCop1FpuW, tables::FPU_W);
static FPU_L: Table = Table::new(InstrIdType::CpuCop1FpuL, tables::FPU_L);
static COP2: Table = Table::new(InstrIdType::CpuCop2, tables::COP2);
static BC2: Table = Table::new(InstrIdType::CpuCop2Bc2, tables::BC2);

/// Every CPU table, for invariant checks and enumeration.
pub(crate) static ALL_TABLES: &[&Table] = &[
    &NORMAL, &SPECIAL, &REGIMM, &COP0, &BC0, &TLB, &COP1, &BC1, &FPU_S, &FPU_D, &FPU_W,
    &FPU_L, &COP2, &BC2,
];

/// Resolves `word` against the CPU tables.
pub(crate) fn lookup(word: u32) -> Option<(InstrIdType, &'static OpcodeEntry)> {
    match word.opcode() {
        OP_SPECIAL => SPECIAL.lookup(word.function()),
        OP_REGIMM => REGIMM.lookup(word.rt()),
        OP_COP0 => {
            if word.cop_co() {
                TLB.lookup(word.function())
            } else if word.fmt() == FMT_BC {
                BC0.lookup(word.rt())
            } else {
                COP0.lookup(word.fmt())
            }
        }
        OP_COP1 => match word.fmt() {
            FMT_BC => BC1.lookup(word.rt()),
            FMT_S => FPU_S.lookup(word.function()),
            FMT_D => FPU_D.lookup(word.function()),
            FMT_W => FPU_W.lookup(word.function()),
            FMT_L => FPU_L.lookup(word.function()),
            fmt => COP1.lookup(fmt),
        },
        OP_COP2 => {
            if word.cop_co() {
                None
            } else if word.fmt() == FMT_BC {
                BC2.lookup(word.rt())
            } else {
                COP2.lookup(word.fmt())
            }
        }
        opcode => NORMAL.lookup(opcode),
    }
}

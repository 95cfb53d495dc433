//! PlayStation R3000 with the Geometry Transformation Engine.
//!
//! The integer, COP0 and COP1 sets are MIPS I views of the CPU tables, so anything
//! introduced by MIPS II or later decodes as invalid. COP2 is the GTE: register moves
//! when the CO bit is clear, GTE commands keyed by function when it is set.

/// Static opcode tables.
pub(crate) mod tables;

use crate::isa::cpu::opcodes::{
    FMT_BC, FMT_D, FMT_S, FMT_W, OP_COP0, OP_COP1, OP_COP2, OP_REGIMM, OP_SPECIAL,
};
use crate::isa::cpu::tables as cpu;
use crate::isa::id::InstrIdType;
use crate::isa::instruction::InstructionBits;
use crate::isa::table::{IsaVersion, OpcodeEntry, Table};

const MIPS1: IsaVersion = IsaVersion::Mips1;

static NORMAL: Table = Table::restricted(InstrIdType::R3000GteNormal, cpu::NORMAL, MIPS1);
static SPECIAL: Table = Table::restricted(InstrIdType::R3000GteSpecial, cpu::SPECIAL, MIPS1);
static REGIMM: Table = Table::restricted(InstrIdType::R3000GteRegimm, cpu::REGIMM, MIPS1);
static COP0: Table = Table::restricted(InstrIdType::R3000GteCop0, cpu::COP0, MIPS1);
static BC0: Table = Table::restricted(InstrIdType::R3000GteCop0Bc0, cpu::BC0, MIPS1);
static TLB: Table = Table::new(InstrIdType::R3000GteCop0Tlb, tables::TLB);
static COP1: Table = Table::restricted(InstrIdType::R3000GteCop1, cpu::COP1, MIPS1);
static BC1: Table = Table::restricted(InstrIdType::R3000GteCop1Bc1, cpu::BC1, MIPS1);
static FPU_S: Table = Table::restricted(InstrIdType::R3000GteCop1FpuS, cpu::FPU_S, MIPS1);
static FPU_D: Table = Table::restricted(InstrIdType::R3000GteCop1FpuD, cpu::FPU_D, MIPS1);
static FPU_W: Table = Table::restricted(InstrIdType::R3000GteCop1FpuW, cpu::FPU_W, MIPS1);
static COP2: Table = Table::new(InstrIdType::R3000GteCop2, tables::COP2);
static GTE: Table = Table::new(InstrIdType::R3000GteCop2Gte, tables::GTE);

/// Every R3000 GTE table, for invariant checks and enumeration.
pub(crate) static ALL_TABLES: &[&Table] = &[
    &NORMAL, &SPECIAL, &REGIMM, &COP0, &BC0, &TLB, &COP1, &BC1, &FPU_S, &FPU_D, &FPU_W,
    &COP2, &GTE,
];

/// Resolves `word` against the R3000 GTE tables.
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
            fmt => COP1.lookup(fmt),
        },
        OP_COP2 if word.cop_co() => GTE.lookup(word.function()),
        OP_COP2 => COP2.lookup(word.fmt()),
        opcode => NORMAL.lookup(opcode),
    }
}

//! N64 Reality Signal Processor instruction set.
//!
//! The scalar unit shares encodings with the CPU but drops everything the RSP lacks.
//! COP2 is the vector unit: register moves when the CO bit is clear, vector
//! computation keyed by function when it is set. LWC2/SWC2 are vector loads and
//! stores selected by the rd field.

/// Static opcode tables.
pub(crate) mod tables;

use crate::isa::cpu::opcodes::{OP_COP0, OP_COP2, OP_LWC2, OP_REGIMM, OP_SPECIAL, OP_SWC2};
use crate::isa::id::InstrIdType;
use crate::isa::instruction::InstructionBits;
use crate::isa::table::{OpcodeEntry, Table};

static NORMAL: Table = Table::new(InstrIdType::RspNormal, tables::NORMAL);
static SPECIAL: Table = Table::new(InstrIdType::RspSpecial, tables::SPECIAL);
static REGIMM: Table = Table::new(InstrIdType::RspRegimm, tables::REGIMM);
static COP0: Table = Table::new(InstrIdType::RspCop0, tables::COP0);
static COP2: Table = Table::new(InstrIdType::RspCop2, tables::COP2);
static VU: Table = Table::new(InstrIdType::RspCop2Vu, tables::VU);
static LWC2: Table = Table::new(InstrIdType::RspNormalLwc2, tables::LWC2);
static SWC2: Table = Table::new(InstrIdType::RspNormalSwc2, tables::SWC2);

/// Every RSP table, for invariant checks and enumeration.
pub(crate) static ALL_TABLES: &[&Table] = &[
    &NORMAL, &SPECIAL, &REGIMM, &COP0, &COP2, &VU, &LWC2, &SWC2,
];

/// Resolves `word` against the RSP tables.
pub(crate) fn lookup(word: u32) -> Option<(InstrIdType, &'static OpcodeEntry)> {
    match word.opcode() {
        OP_SPECIAL => SPECIAL.lookup(word.function()),
        OP_REGIMM => REGIMM.lookup(word.rt()),
        OP_COP0 if !word.cop_co() => COP0.lookup(word.fmt()),
        OP_COP0 => None,
        OP_COP2 if word.cop_co() => VU.lookup(word.function()),
        OP_COP2 => COP2.lookup(word.fmt()),
        OP_LWC2 => LWC2.lookup(word.rd()),
        OP_SWC2 => SWC2.lookup(word.rd()),
        opcode => NORMAL.lookup(opcode),
    }
}

//! MIPS Instruction Decoder.
//!
//! Resolves a raw 32-bit word against the tables of one category. The primary opcode
//! selects a bucket; SPECIAL dispatches on the function field, REGIMM on rt, the
//! coprocessors on fmt (then on rt for branches or on function for computational
//! operations), and RSP vector loads/stores on rd.
//!
//! Decoding never fails. Words that no table recognizes resolve to the shared invalid
//! sentinel with the category's `*Invalid` identifier type.

use tracing::trace;

use crate::isa::category::InstrCategory;
use crate::isa::id::InstrIdType;
use crate::isa::instruction::Instruction;
use crate::isa::table::{OpcodeEntry, INVALID_ENTRY};
use crate::isa::{cpu, r3000gte, rsp};

/// Decodes `word` located at `vram` using the tables of `category`.
pub fn decode(word: u32, vram: u32, category: InstrCategory) -> Instruction {
    Instruction::new(word, vram, category)
}

/// Resolves `word` to its identifier type and table entry.
pub(crate) fn resolve(word: u32, category: InstrCategory) -> (InstrIdType, &'static OpcodeEntry) {
    let found = match category {
        InstrCategory::Cpu => cpu::lookup(word),
        InstrCategory::Rsp => rsp::lookup(word),
        InstrCategory::R3000Gte => r3000gte::lookup(word),
    };

    found.unwrap_or_else(|| {
        trace!(word = format_args!("{word:#010x}"), %category, "no table entry");
        (invalid_id_type(category), &INVALID_ENTRY)
    })
}

/// The identifier type reported for words `category` does not recognize.
pub const fn invalid_id_type(category: InstrCategory) -> InstrIdType {
    match category {
        InstrCategory::Cpu => InstrIdType::CpuInvalid,
        InstrCategory::Rsp => InstrIdType::RspInvalid,
        InstrCategory::R3000Gte => InstrIdType::R3000GteInvalid,
    }
}

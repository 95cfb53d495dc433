//! Instruction encoding and decoded instruction values.
//!
//! Provides bit extraction functions for every named MIPS field and the immutable
//! [`Instruction`] produced by the decoder.

use serde::Serialize;

use crate::common::constants::{
    CODE_HALF_MASK, CODE_MASK, COP_CO_SHIFT, COPRAW_MASK, FUNCTION_MASK, IMMEDIATE_MASK,
    INSTR_INDEX_MASK, OPCODE_MASK, OPCODE_SHIFT, RD_SHIFT, REG_MASK, RS_SHIFT, RT_SHIFT,
    SA_SHIFT,
};
use crate::common::error::UnsupportedCategoryError;
use crate::config::Config;
use crate::isa::category::InstrCategory;
use crate::isa::decode;
use crate::isa::id::{InstrId, InstrIdType};
use crate::isa::table::OpcodeEntry;

/// Trait for extracting instruction fields from encoded instructions.
///
/// Field positions are identical in every category; only their interpretation differs.
pub trait InstructionBits {
    /// Extracts the primary opcode field (bits 31-26).
    ///
    /// The opcode selects the first-level table bucket.
    fn opcode(&self) -> u32;

    /// Extracts the rs field (bits 25-21).
    fn rs(&self) -> u32;

    /// Extracts the rt field (bits 20-16).
    ///
    /// Also selects the REGIMM and BCz sub-tables.
    fn rt(&self) -> u32;

    /// Extracts the rd field (bits 15-11).
    fn rd(&self) -> u32;

    /// Extracts the shift amount field (bits 10-6).
    fn sa(&self) -> u32;

    /// Extracts the function field (bits 5-0).
    fn function(&self) -> u32;

    /// Extracts the raw 16-bit immediate field (bits 15-0), without sign extension.
    fn immediate(&self) -> u32;

    /// Extracts the 26-bit jump target field (bits 25-0).
    fn instr_index(&self) -> u32;

    /// Extracts the 20-bit `syscall`/`break` code (bits 25-6).
    fn code(&self) -> u32;

    /// Extracts the upper 10 bits of the code field (bits 25-16).
    fn code_upper(&self) -> u32;

    /// Extracts the lower 10 bits of the code field (bits 15-6).
    fn code_lower(&self) -> u32;

    /// Extracts the raw coprocessor operation (bits 24-0).
    fn copraw(&self) -> u32;

    /// Returns `true` when the coprocessor "CO" bit (bit 25) is set.
    fn cop_co(&self) -> bool;

    /// Coprocessor format field (the rs position).
    fn fmt(&self) -> u32;

    /// FPU source register (the rd position).
    fn fs(&self) -> u32;

    /// FPU second source register (the rt position).
    fn ft(&self) -> u32;

    /// FPU destination register (the sa position).
    fn fd(&self) -> u32;

    /// RSP source vector register (bits 15-11).
    fn vs(&self) -> u32;

    /// RSP second source vector register (bits 20-16).
    fn vt(&self) -> u32;

    /// RSP destination vector register (bits 10-6).
    fn vd(&self) -> u32;

    /// RSP vector computational element selector (bits 24-21).
    fn element_high(&self) -> u32;

    /// RSP load/store element selector (bits 10-7).
    fn element_low(&self) -> u32;

    /// RSP destination element (bits 15-11).
    fn de(&self) -> u32;

    /// RSP move element index (bits 10-7).
    fn vector_index(&self) -> u32;

    /// RSP vector load/store offset (bits 6-0), sign-extended from 7 bits.
    fn vector_offset(&self) -> i32;

    /// GTE shift-fraction flag (bit 19).
    fn gte_sf(&self) -> u32;

    /// GTE multiply matrix selector (bits 18-17).
    fn gte_mx(&self) -> u32;

    /// GTE multiply vector selector (bits 16-15).
    fn gte_v(&self) -> u32;

    /// GTE translation vector selector (bits 14-13).
    fn gte_cv(&self) -> u32;

    /// GTE saturation flag (bit 10).
    fn gte_lm(&self) -> u32;
}

impl InstructionBits for u32 {
    #[inline(always)]
    fn opcode(&self) -> u32 {
        (self >> OPCODE_SHIFT) & OPCODE_MASK
    }

    #[inline(always)]
    fn rs(&self) -> u32 {
        (self >> RS_SHIFT) & REG_MASK
    }

    #[inline(always)]
    fn rt(&self) -> u32 {
        (self >> RT_SHIFT) & REG_MASK
    }

    #[inline(always)]
    fn rd(&self) -> u32 {
        (self >> RD_SHIFT) & REG_MASK
    }

    #[inline(always)]
    fn sa(&self) -> u32 {
        (self >> SA_SHIFT) & REG_MASK
    }

    #[inline(always)]
    fn function(&self) -> u32 {
        self & FUNCTION_MASK
    }

    #[inline(always)]
    fn immediate(&self) -> u32 {
        self & IMMEDIATE_MASK
    }

    #[inline(always)]
    fn instr_index(&self) -> u32 {
        self & INSTR_INDEX_MASK
    }

    #[inline(always)]
    fn code(&self) -> u32 {
        (self >> SA_SHIFT) & CODE_MASK
    }

    #[inline(always)]
    fn code_upper(&self) -> u32 {
        (self >> RT_SHIFT) & CODE_HALF_MASK
    }

    #[inline(always)]
    fn code_lower(&self) -> u32 {
        (self >> SA_SHIFT) & CODE_HALF_MASK
    }

    #[inline(always)]
    fn copraw(&self) -> u32 {
        self & COPRAW_MASK
    }

    #[inline(always)]
    fn cop_co(&self) -> bool {
        (self >> COP_CO_SHIFT) & 1 == 1
    }

    #[inline(always)]
    fn fmt(&self) -> u32 {
        self.rs()
    }

    #[inline(always)]
    fn fs(&self) -> u32 {
        self.rd()
    }

    #[inline(always)]
    fn ft(&self) -> u32 {
        self.rt()
    }

    #[inline(always)]
    fn fd(&self) -> u32 {
        self.sa()
    }

    #[inline(always)]
    fn vs(&self) -> u32 {
        self.rd()
    }

    #[inline(always)]
    fn vt(&self) -> u32 {
        self.rt()
    }

    #[inline(always)]
    fn vd(&self) -> u32 {
        self.sa()
    }

    #[inline(always)]
    fn element_high(&self) -> u32 {
        (self >> RS_SHIFT) & 0xF
    }

    #[inline(always)]
    fn element_low(&self) -> u32 {
        (self >> 7) & 0xF
    }

    #[inline(always)]
    fn de(&self) -> u32 {
        self.rd()
    }

    #[inline(always)]
    fn vector_index(&self) -> u32 {
        (self >> 7) & 0xF
    }

    /// Shifts the 7-bit field to the top of an `i32` and back to sign-extend it.
    #[inline(always)]
    fn vector_offset(&self) -> i32 {
        (((self & 0x7F) << 25) as i32) >> 25
    }

    #[inline(always)]
    fn gte_sf(&self) -> u32 {
        (self >> 19) & 1
    }

    #[inline(always)]
    fn gte_mx(&self) -> u32 {
        (self >> 17) & 0x3
    }

    #[inline(always)]
    fn gte_v(&self) -> u32 {
        (self >> 15) & 0x3
    }

    #[inline(always)]
    fn gte_cv(&self) -> u32 {
        (self >> 13) & 0x3
    }

    #[inline(always)]
    fn gte_lm(&self) -> u32 {
        (self >> 10) & 1
    }
}

/// Common fields of a word, extracted once at decode time.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize)]
pub struct Fields {
    /// Primary opcode.
    pub opcode: u32,
    /// rs field.
    pub rs: u32,
    /// rt field.
    pub rt: u32,
    /// rd field.
    pub rd: u32,
    /// Shift amount.
    pub sa: u32,
    /// Function field.
    pub function: u32,
    /// Raw 16-bit immediate.
    pub immediate: u32,
    /// 26-bit jump target.
    pub instr_index: u32,
}

impl Fields {
    /// Extracts all common fields of `word`.
    pub fn of(word: u32) -> Self {
        Self {
            opcode: word.opcode(),
            rs: word.rs(),
            rt: word.rt(),
            rd: word.rd(),
            sa: word.sa(),
            function: word.function(),
            immediate: word.immediate(),
            instr_index: word.instr_index(),
        }
    }
}

/// A decoded MIPS instruction.
///
/// Immutable once built: the identifier is a pure function of the word and the
/// category, and the vram only affects address-relative rendering. Words that no
/// table recognizes still produce a valid `Instruction` whose identifier is
/// [`InstrId::Invalid`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Instruction {
    word: u32,
    vram: u32,
    category: InstrCategory,
    id_type: InstrIdType,
    entry: &'static OpcodeEntry,
    fields: Fields,
}

impl Instruction {
    /// Decodes `word` located at `vram` using the tables of `category`.
    pub fn new(word: u32, vram: u32, category: InstrCategory) -> Self {
        let (id_type, entry) = decode::resolve(word, category);
        Self {
            word,
            vram,
            category,
            id_type,
            entry,
            fields: Fields::of(word),
        }
    }

    /// Decodes `word` with the process-wide default category.
    pub fn with_default_category(word: u32, vram: u32) -> Self {
        Self::new(word, vram, Config::global().misc.default_category)
    }

    /// Decodes `word` with a category given as a string tag.
    ///
    /// # Errors
    ///
    /// Returns [`UnsupportedCategoryError`] when `tag` names no supported category.
    pub fn from_tag(word: u32, vram: u32, tag: &str) -> Result<Self, UnsupportedCategoryError> {
        Ok(Self::new(word, vram, tag.parse()?))
    }

    /// Raw encoding.
    pub const fn word(&self) -> u32 {
        self.word
    }

    /// Address of the instruction.
    pub const fn vram(&self) -> u32 {
        self.vram
    }

    /// Category the word was decoded with.
    pub const fn category(&self) -> InstrCategory {
        self.category
    }

    /// Resolved identifier.
    pub const fn id(&self) -> InstrId {
        self.entry.id
    }

    /// Table the identifier was resolved from.
    pub const fn id_type(&self) -> InstrIdType {
        self.id_type
    }

    /// Static table entry backing this instruction.
    pub const fn entry(&self) -> &'static OpcodeEntry {
        self.entry
    }

    /// Common fields extracted from the word.
    pub const fn fields(&self) -> Fields {
        self.fields
    }

    /// Mnemonic of the resolved identifier, ignoring pseudo-instructions.
    pub const fn opcode_name(&self) -> &'static str {
        self.entry.id.name()
    }

    /// Primary opcode (bits 31-26).
    pub const fn get_opcode(&self) -> u32 {
        self.fields.opcode
    }

    /// rs field (bits 25-21).
    pub const fn get_rs(&self) -> u32 {
        self.fields.rs
    }

    /// rt field (bits 20-16).
    pub const fn get_rt(&self) -> u32 {
        self.fields.rt
    }

    /// rd field (bits 15-11).
    pub const fn get_rd(&self) -> u32 {
        self.fields.rd
    }

    /// Shift amount (bits 10-6).
    pub const fn get_sa(&self) -> u32 {
        self.fields.sa
    }

    /// Function field (bits 5-0).
    pub const fn get_function(&self) -> u32 {
        self.fields.function
    }

    /// Raw 16-bit immediate (bits 15-0).
    pub const fn get_immediate(&self) -> u32 {
        self.fields.immediate
    }

    /// 26-bit jump target (bits 25-0).
    pub const fn get_instr_index(&self) -> u32 {
        self.fields.instr_index
    }

    /// `syscall`/`break` code (bits 25-6).
    pub fn get_code(&self) -> u32 {
        self.word.code()
    }

    /// Upper half of the code field (bits 25-16).
    pub fn get_code_upper(&self) -> u32 {
        self.word.code_upper()
    }

    /// Lower half of the code field (bits 15-6).
    pub fn get_code_lower(&self) -> u32 {
        self.word.code_lower()
    }

    /// Raw coprocessor operation (bits 24-0).
    pub fn get_copraw(&self) -> u32 {
        self.word.copraw()
    }

    /// Coprocessor format field.
    pub const fn get_fmt(&self) -> u32 {
        self.fields.rs
    }

    /// FPU fs field.
    pub const fn get_fs(&self) -> u32 {
        self.fields.rd
    }

    /// FPU ft field.
    pub const fn get_ft(&self) -> u32 {
        self.fields.rt
    }

    /// FPU fd field.
    pub const fn get_fd(&self) -> u32 {
        self.fields.sa
    }

    /// RSP vs field.
    pub fn get_vs(&self) -> u32 {
        self.word.vs()
    }

    /// RSP vt field.
    pub fn get_vt(&self) -> u32 {
        self.word.vt()
    }

    /// RSP vd field.
    pub fn get_vd(&self) -> u32 {
        self.word.vd()
    }

    /// RSP computational element selector.
    pub fn get_element_high(&self) -> u32 {
        self.word.element_high()
    }

    /// RSP load/store element selector.
    pub fn get_element_low(&self) -> u32 {
        self.word.element_low()
    }

    /// RSP destination element.
    pub fn get_de(&self) -> u32 {
        self.word.de()
    }

    /// RSP move element index.
    pub fn get_vector_index(&self) -> u32 {
        self.word.vector_index()
    }

    /// RSP vector load/store offset, unscaled.
    pub fn get_vector_offset(&self) -> i32 {
        self.word.vector_offset()
    }

    /// GTE `sf` flag.
    pub fn get_gte_sf(&self) -> u32 {
        self.word.gte_sf()
    }

    /// GTE `mx` selector.
    pub fn get_gte_mx(&self) -> u32 {
        self.word.gte_mx()
    }

    /// GTE `v` selector.
    pub fn get_gte_v(&self) -> u32 {
        self.word.gte_v()
    }

    /// GTE `cv` selector.
    pub fn get_gte_cv(&self) -> u32 {
        self.word.gte_cv()
    }

    /// GTE `lm` flag.
    pub fn get_gte_lm(&self) -> u32 {
        self.word.gte_lm()
    }
}

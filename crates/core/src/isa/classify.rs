//! Instruction classification.
//!
//! Stateless predicates over a decoded [`Instruction`]. Almost everything is answered
//! by the flags of the table entry; a few predicates also look at field values
//! (`jr $ra` is a return, an `or` with `$zero` may be a move). The invalid sentinel
//! carries no flags and no operands, so every predicate is false on it.

use crate::common::constants::{GPR_K0, GPR_K1, GPR_RA, GPR_ZERO, INSTRUCTION_SIZE, NOP_WORD};
use crate::common::data::AccessType;
use crate::config::Config;
use crate::isa::abi::RegisterFile;
use crate::isa::category::InstrCategory;
use crate::isa::id::InstrId;
use crate::isa::instruction::Instruction;
use crate::isa::operand::{Operand, RegField};
use crate::isa::pseudo;
use crate::isa::table::InstrFlags;
use crate::utils::sign_extend_immediate;

/// Upper address bits kept by a 26-bit jump.
const JUMP_REGION_MASK: u32 = 0xF000_0000;

impl Instruction {
    #[inline]
    fn flag(&self, flag: InstrFlags) -> bool {
        self.entry().flags.contains(flag)
    }

    /// Returns `true` unless no table recognized the word.
    pub fn is_valid(&self) -> bool {
        self.id() != InstrId::Invalid
    }

    /// Returns `true` for `word == 0`, regardless of category.
    pub const fn is_nop(&self) -> bool {
        self.word() == NOP_WORD
    }

    /// Unconditional jump (`j`, `jal`, `jr`, `jalr`).
    pub fn is_jump(&self) -> bool {
        self.flag(InstrFlags::IS_JUMP)
    }

    /// Jump whose target is encoded in the instruction (`j`, `jal`).
    pub fn is_jump_with_address(&self) -> bool {
        self.flag(InstrFlags::IS_JUMP_WITH_ADDRESS)
    }

    /// Conditional branch with a 16-bit offset.
    pub fn is_branch(&self) -> bool {
        self.flag(InstrFlags::IS_BRANCH)
    }

    /// Branch-likely variant that nullifies its delay slot when not taken.
    pub fn is_branch_likely(&self) -> bool {
        self.flag(InstrFlags::IS_BRANCH_LIKELY)
    }

    /// Branch that is always taken (`beq $zero, $zero` or `bgez $zero`).
    pub fn is_unconditional_branch(&self) -> bool {
        match self.id() {
            InstrId::Beq => self.get_rs() == GPR_ZERO && self.get_rt() == GPR_ZERO,
            InstrId::Bgez => self.get_rs() == GPR_ZERO,
            _ => false,
        }
    }

    /// Jump or branch that links (`jal`, `jalr`, `bltzal`, `bgezal`, ...).
    pub fn is_function_call(&self) -> bool {
        self.flag(InstrFlags::DOES_LINK)
    }

    /// Writes a return address.
    pub fn does_link(&self) -> bool {
        self.flag(InstrFlags::DOES_LINK)
    }

    /// `jr $ra`, or an identifier marked as returning (`eret`).
    pub fn is_return(&self) -> bool {
        (self.id() == InstrId::Jr && self.get_rs() == GPR_RA) || self.flag(InstrFlags::IS_RETURN)
    }

    /// `jr` through any register but `$ra`, the usual shape of a jump table dispatch.
    pub fn is_jumptable_jump(&self) -> bool {
        self.id() == InstrId::Jr && self.get_rs() != GPR_RA
    }

    /// Jumps and branches execute the following instruction before transferring control.
    pub fn has_delay_slot(&self) -> bool {
        self.is_jump() || self.is_branch()
    }

    /// Conditional or unconditional trap.
    pub fn is_trap(&self) -> bool {
        self.flag(InstrFlags::IS_TRAP)
    }

    /// Floating-point operation or FPR transfer.
    pub fn is_float(&self) -> bool {
        self.flag(InstrFlags::IS_FLOAT)
    }

    /// Double-precision floating-point operation.
    pub fn is_double(&self) -> bool {
        self.flag(InstrFlags::IS_DOUBLE)
    }

    /// Immediate is zero-extended (`andi`, `ori`, `xori`, `lui`).
    pub fn is_unsigned(&self) -> bool {
        self.flag(InstrFlags::IS_UNSIGNED)
    }

    /// Usually only found in hand-written assembly.
    pub fn not_emitted_by_compilers(&self) -> bool {
        self.flag(InstrFlags::NOT_EMITTED_BY_COMPILERS)
    }

    /// Unlikely to come out of a compiler: unknown words, instructions compilers never
    /// emit, and integer immediate forms that touch the kernel registers `$k0`/`$k1`.
    pub fn is_likely_handwritten(&self) -> bool {
        if !self.is_valid() || self.not_emitted_by_compilers() {
            return true;
        }
        self.is_integer_immediate_form()
            && [self.get_rs(), self.get_rt()]
                .iter()
                .any(|&reg| reg == GPR_K0 || reg == GPR_K1)
    }

    fn is_integer_immediate_form(&self) -> bool {
        !self.is_float()
            && self.entry().operands.iter().any(|op| {
                matches!(
                    op,
                    Operand::CpuImmediate
                        | Operand::CpuImmediateBase
                        | Operand::CpuBranchTargetLabel
                )
            })
    }

    /// Can carry the `%hi` half of a symbol reference.
    pub fn can_be_hi(&self) -> bool {
        self.flag(InstrFlags::CAN_BE_HI)
    }

    /// Can carry the `%lo` half of a symbol reference.
    pub fn can_be_lo(&self) -> bool {
        self.flag(InstrFlags::CAN_BE_LO)
    }

    /// Loads from memory.
    pub fn does_load(&self) -> bool {
        self.flag(InstrFlags::DOES_LOAD)
    }

    /// Stores to memory.
    pub fn does_store(&self) -> bool {
        self.flag(InstrFlags::DOES_STORE)
    }

    /// Loads from or stores to memory.
    pub fn does_dereference(&self) -> bool {
        self.does_load() || self.does_store()
    }

    /// Zero-extending load (`lbu`, `lhu`, `lwu`).
    pub fn does_unsigned_memory_access(&self) -> bool {
        self.flag(InstrFlags::DOES_UNSIGNED_MEMORY_ACCESS)
    }

    /// Width of the memory access, [`AccessType::Invalid`] when there is none.
    pub const fn access_type(&self) -> AccessType {
        self.entry().access
    }

    /// Writes the GPR in rs.
    pub fn modifies_rs(&self) -> bool {
        self.flag(InstrFlags::MODIFIES_RS)
    }

    /// Writes the GPR in rt.
    pub fn modifies_rt(&self) -> bool {
        self.flag(InstrFlags::MODIFIES_RT)
    }

    /// Writes the GPR in rd.
    pub fn modifies_rd(&self) -> bool {
        self.flag(InstrFlags::MODIFIES_RD)
    }

    /// Reads the GPR in rs.
    pub fn reads_rs(&self) -> bool {
        self.flag(InstrFlags::READS_RS)
    }

    /// Reads the GPR in rt.
    pub fn reads_rt(&self) -> bool {
        self.flag(InstrFlags::READS_RT)
    }

    /// Reads the GPR in rd.
    pub fn reads_rd(&self) -> bool {
        self.flag(InstrFlags::READS_RD)
    }

    /// Reads HI.
    pub fn reads_hi(&self) -> bool {
        self.flag(InstrFlags::READS_HI)
    }

    /// Reads LO.
    pub fn reads_lo(&self) -> bool {
        self.flag(InstrFlags::READS_LO)
    }

    /// Writes HI.
    pub fn modifies_hi(&self) -> bool {
        self.flag(InstrFlags::MODIFIES_HI)
    }

    /// Writes LO.
    pub fn modifies_lo(&self) -> bool {
        self.flag(InstrFlags::MODIFIES_LO)
    }

    /// Writes the register in the fs position.
    pub fn modifies_fs(&self) -> bool {
        self.flag(InstrFlags::MODIFIES_FS)
    }

    /// Writes the register in the ft position.
    pub fn modifies_ft(&self) -> bool {
        self.flag(InstrFlags::MODIFIES_FT)
    }

    /// Writes the register in the fd position.
    pub fn modifies_fd(&self) -> bool {
        self.flag(InstrFlags::MODIFIES_FD)
    }

    /// Reads the register in the fs position.
    pub fn reads_fs(&self) -> bool {
        self.flag(InstrFlags::READS_FS)
    }

    /// Reads the register in the ft position.
    pub fn reads_ft(&self) -> bool {
        self.flag(InstrFlags::READS_FT)
    }

    /// Reads the register in the fd position.
    pub fn reads_fd(&self) -> bool {
        self.flag(InstrFlags::READS_FD)
    }

    /// Returns `true` if the instruction writes any register of `file`.
    ///
    /// Linking instructions write `$ra` even when no operand names it.
    pub fn modifies_register(&self, file: RegisterFile) -> bool {
        match file {
            RegisterFile::HiLo => self.modifies_hi() || self.modifies_lo(),
            RegisterFile::Gpr if self.does_link() => true,
            _ => self.operand_fields(file).any(|field| self.field_modified(field)),
        }
    }

    /// Returns `true` if the instruction reads any register of `file`.
    pub fn reads_register(&self, file: RegisterFile) -> bool {
        match file {
            RegisterFile::HiLo => self.reads_hi() || self.reads_lo(),
            _ => self.operand_fields(file).any(|field| self.field_read(field)),
        }
    }

    fn operand_fields(&self, file: RegisterFile) -> impl Iterator<Item = RegField> + '_ {
        self.entry()
            .operands
            .iter()
            .flat_map(|op| op.registers().iter())
            .filter(move |(f, _)| register_file_in(*f, self.category()) == file)
            .map(|(_, field)| *field)
    }

    fn field_modified(&self, field: RegField) -> bool {
        self.flag(match field {
            RegField::Rs => InstrFlags::MODIFIES_RS,
            RegField::Rt => InstrFlags::MODIFIES_RT,
            RegField::Rd => InstrFlags::MODIFIES_RD,
            RegField::Fs => InstrFlags::MODIFIES_FS,
            RegField::Ft => InstrFlags::MODIFIES_FT,
            RegField::Fd => InstrFlags::MODIFIES_FD,
            RegField::Cop => InstrFlags::MODIFIES_COP_REG,
        })
    }

    fn field_read(&self, field: RegField) -> bool {
        self.flag(match field {
            RegField::Rs => InstrFlags::READS_RS,
            RegField::Rt => InstrFlags::READS_RT,
            RegField::Rd => InstrFlags::READS_RD,
            RegField::Fs => InstrFlags::READS_FS,
            RegField::Ft => InstrFlags::READS_FT,
            RegField::Fd => InstrFlags::READS_FD,
            RegField::Cop => InstrFlags::READS_COP_REG,
        })
    }

    /// GPR the instruction writes, if any. Links report `$ra` unless rd is written.
    pub fn destination_gpr(&self) -> Option<u32> {
        if self.modifies_rd() {
            Some(self.get_rd())
        } else if self.modifies_rt() {
            Some(self.get_rt())
        } else if self.modifies_rs() {
            Some(self.get_rs())
        } else if self.does_link() {
            Some(GPR_RA)
        } else {
            None
        }
    }

    /// Writes to `$zero`, discarding the result.
    pub fn outputs_to_gpr_zero(&self) -> bool {
        self.destination_gpr() == Some(GPR_ZERO)
    }

    /// `add`, `addu`, `dadd`, `daddu` or `or` with rs or rt being `$zero`.
    ///
    /// Approximate: `addu $t0, $zero, $zero` also qualifies.
    pub fn maybe_is_move(&self) -> bool {
        self.flag(InstrFlags::MAYBE_IS_MOVE)
            && (self.get_rs() == GPR_ZERO || self.get_rt() == GPR_ZERO)
    }

    /// Returns `true` if the process-wide configuration renders this as a pseudo-instruction.
    pub fn is_pseudo(&self) -> bool {
        self.is_pseudo_with(Config::global())
    }

    /// Returns `true` if `config` renders this as a pseudo-instruction.
    pub fn is_pseudo_with(&self, config: &Config) -> bool {
        pseudo::simplify(self, &config.pseudos).is_some()
    }

    /// Both instructions resolved to the same valid identifier.
    pub fn same_opcode(&self, other: &Self) -> bool {
        self.is_valid() && self.id() == other.id()
    }

    /// Same identifier, different encoding.
    pub fn same_opcode_but_different_arguments(&self, other: &Self) -> bool {
        self.same_opcode(other) && self.word() != other.word()
    }

    /// Returns `true` if the raw form lists `operand`.
    pub fn has_operand(&self, operand: Operand) -> bool {
        self.entry().operands.contains(&operand)
    }

    /// Returns `true` if the raw form lists `operand` or an operand that renders the
    /// same field (`CpuRs` is also the base of `CpuImmediateBase`).
    pub fn has_operand_alias(&self, operand: Operand) -> bool {
        self.has_operand(operand)
            || operand
                .aliases()
                .iter()
                .any(|&alias| self.has_operand(alias))
    }

    /// Immediate as the instruction interprets it: zero-extended for unsigned entries,
    /// sign-extended otherwise.
    pub fn processed_immediate(&self) -> i32 {
        if self.is_unsigned() {
            self.get_immediate() as i32
        } else {
            sign_extend_immediate(self.get_immediate() as u16)
        }
    }

    /// Byte offset from this instruction to the branch target.
    pub fn branch_offset(&self) -> Option<i32> {
        self.is_branch().then(|| {
            sign_extend_immediate(self.get_immediate() as u16)
                .wrapping_mul(4)
                .wrapping_add(INSTRUCTION_SIZE as i32)
        })
    }

    /// Branch target address.
    pub fn branch_vram(&self) -> Option<u32> {
        self.branch_offset().map(|offset| branch_target(self.vram(), offset))
    }

    /// Jump target address for `j`/`jal`.
    pub fn instr_index_as_vram(&self) -> Option<u32> {
        self.is_jump_with_address()
            .then(|| jump_target(self.vram(), self.get_instr_index()))
    }

    /// Byte offset to the encoded target of a branch or of `j`/`jal`.
    pub fn branch_offset_generic(&self) -> Option<i32> {
        self.branch_offset().or_else(|| {
            self.instr_index_as_vram()
                .map(|target| target.wrapping_sub(self.vram()) as i32)
        })
    }

    /// Encoded target address of a branch or of `j`/`jal`.
    pub fn branch_vram_generic(&self) -> Option<u32> {
        self.branch_vram().or_else(|| self.instr_index_as_vram())
    }
}

/// `vram + offset` with 32-bit wraparound.
pub(crate) const fn branch_target(vram: u32, offset: i32) -> u32 {
    vram.wrapping_add_signed(offset)
}

/// Region of the delay slot combined with the 26-bit index.
pub(crate) const fn jump_target(vram: u32, instr_index: u32) -> u32 {
    (vram.wrapping_add(INSTRUCTION_SIZE) & JUMP_REGION_MASK) | (instr_index << 2)
}

/// The R3000 exposes the GTE as its COP2, so generic COP2 operands name GTE registers.
pub(crate) fn register_file_in(file: RegisterFile, category: InstrCategory) -> RegisterFile {
    match (file, category) {
        (RegisterFile::Cop2, InstrCategory::R3000Gte) => RegisterFile::GteData,
        (RegisterFile::Cop2Control, InstrCategory::R3000Gte) => RegisterFile::GteControl,
        _ => file,
    }
}

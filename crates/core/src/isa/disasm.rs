//! Instruction Disassembler for MIPS.
//!
//! Renders a decoded [`Instruction`] as one line of assembly text. The mnemonic and
//! operand list come from the table entry, or from the pseudo-instruction rule that
//! matches when pseudos are enabled. Registers are named according to the active
//! configuration; immediates print as hex, shift amounts, codes, vector elements and
//! GTE fields as decimal. Branch targets render as `.LXXXXXXXX` labels and jump
//! targets as `func_XXXXXXXX`.
//!
//! # Usage
//!
//! ```
//! use mipsdis_core::config::Config;
//! use mipsdis_core::isa::category::InstrCategory;
//! use mipsdis_core::isa::instruction::Instruction;
//!
//! let config = Config::default();
//! let instr = Instruction::new(0x27BD_FFE8, 0x8000_0400, InstrCategory::Cpu);
//! assert_eq!(instr.disassemble_with(&config, None, None), "addiu       $sp, $sp, -0x18");
//! ```
//!
//! Words no table recognizes render as a `.word` directive, never as empty text.

use std::fmt::Write as _;

use crate::common::constants::{GPR_RA, GPR_ZERO, INSTRUCTION_SIZE, INSTR_INDEX_MASK};
use crate::config::{Config, MiscConfig, SMALL_IMM_LIMIT};
use crate::isa::abi::{Abi, RegisterFile};
use crate::isa::category::InstrCategory;
use crate::isa::classify::{branch_target, jump_target, register_file_in};
use crate::isa::id::InstrId;
use crate::isa::instruction::Instruction;
use crate::isa::operand::Operand;
use crate::isa::pseudo;
use crate::utils::sign_extend_immediate;

/// Caller-supplied replacement for the immediate of one render.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ImmediateOverride<'a> {
    /// Replaces the encoded immediate (the 26-bit index for `j`/`jal`).
    Value(i32),
    /// Printed verbatim in the immediate, offset or label slot, e.g. `%lo(sym)`.
    Text(&'a str),
}

/// Mnemonic of the `.word` directive used for unrecognized words.
const WORD_DIRECTIVE: &str = ".word";

/// Decodes `word` and renders it with the process-wide configuration.
pub fn disassemble(word: u32, vram: u32, category: InstrCategory) -> String {
    Instruction::new(word, vram, category).disassemble(None, None)
}

impl Instruction {
    /// Renders this instruction with the process-wide configuration.
    ///
    /// `imm_override` replaces the immediate and `vram_override` the address for this
    /// render only; the instruction itself is never changed.
    pub fn disassemble(
        &self,
        imm_override: Option<ImmediateOverride<'_>>,
        vram_override: Option<u32>,
    ) -> String {
        self.disassemble_with(Config::global(), imm_override, vram_override)
    }

    /// Renders this instruction with an explicit configuration.
    pub fn disassemble_with(
        &self,
        config: &Config,
        imm_override: Option<ImmediateOverride<'_>>,
        vram_override: Option<u32>,
    ) -> String {
        if !self.is_valid() {
            return render_invalid(self.word(), &config.misc);
        }

        let (id, operands) = pseudo::simplify(self, &config.pseudos)
            .map_or((self.id(), self.entry().operands), |p| (p.id, p.operands));

        let renderer = Renderer {
            instr: self,
            config,
            imm_override,
            vram: vram_override.unwrap_or_else(|| self.vram()),
        };

        let rendered: Vec<String> = operands
            .iter()
            .filter_map(|&op| renderer.operand(id, op))
            .collect();

        if rendered.is_empty() {
            return id.name().to_owned();
        }

        let mut out = String::new();
        let _ = write!(
            out,
            "{:<width$} {}",
            id.name(),
            rendered.join(", "),
            width = config.misc.opcode_ljust
        );
        out
    }
}

fn render_invalid(word: u32, misc: &MiscConfig) -> String {
    let mut out = String::new();
    let _ = write!(
        out,
        "{:<width$} 0x{word:08X}",
        WORD_DIRECTIVE,
        width = misc.opcode_ljust
    );
    if misc.unknown_instr_comment {
        out.push_str(" # invalid instruction");
    }
    out
}

/// Per-render state shared by every operand.
#[derive(Debug)]
struct Renderer<'a> {
    instr: &'a Instruction,
    config: &'a Config,
    imm_override: Option<ImmediateOverride<'a>>,
    vram: u32,
}

impl Renderer<'_> {
    /// Renders one operand; `None` drops the slot (zero trap and syscall codes).
    fn operand(&self, id: InstrId, op: Operand) -> Option<String> {
        let i = self.instr;
        let text = match op {
            Operand::CpuRs => self.gpr(i.get_rs()).to_owned(),
            Operand::CpuRt => self.gpr(i.get_rt()).to_owned(),
            Operand::CpuRd => self.gpr(i.get_rd()).to_owned(),
            Operand::CpuZero => self.gpr(GPR_ZERO).to_owned(),
            Operand::CpuSa => i.get_sa().to_string(),
            Operand::CpuFs => self.fpr(i.get_fs()).to_owned(),
            Operand::CpuFt => self.fpr(i.get_ft()).to_owned(),
            Operand::CpuFd => self.fpr(i.get_fd()).to_owned(),
            Operand::CpuCop0d => self.cop(RegisterFile::Cop0, i.get_rd()).to_owned(),
            Operand::CpuCop1cs => self.cop(RegisterFile::Cop1Control, i.get_rd()).to_owned(),
            Operand::CpuCop2t => self.cop(RegisterFile::Cop2, i.get_rt()).to_owned(),
            Operand::CpuCop2d => self.cop(RegisterFile::Cop2, i.get_rd()).to_owned(),
            Operand::CpuCop2cd => self.cop(RegisterFile::Cop2Control, i.get_rd()).to_owned(),
            Operand::CpuOp | Operand::CpuHint => self.hex(i.get_rt() as i32),
            Operand::CpuCode => return self.code(id),
            Operand::CpuCodeLower => {
                let code = i.get_code_lower();
                return (code != 0).then(|| code.to_string());
            }
            Operand::CpuCopraw => self.hex(i.get_copraw() as i32),
            Operand::CpuLabel => self.jump_label(),
            Operand::CpuImmediate => self.immediate(),
            Operand::CpuBranchTargetLabel => self.branch_label(),
            Operand::CpuImmediateBase => {
                let offset = self.offset(sign_extend_immediate(i.get_immediate() as u16), 1);
                format!("{offset}({})", self.gpr(i.get_rs()))
            }
            Operand::CpuMaybeRdRs => {
                if i.get_rd() == GPR_RA && !self.config.misc.expand_jalr {
                    self.gpr(i.get_rs()).to_owned()
                } else {
                    format!("{}, {}", self.gpr(i.get_rd()), self.gpr(i.get_rs()))
                }
            }
            Operand::RspCop0d => self.cop(RegisterFile::RspCop0, i.get_rd()).to_owned(),
            Operand::RspCop2cd => self.cop(RegisterFile::RspCop2Control, i.get_rd()).to_owned(),
            Operand::RspVs => vector(i.get_vs()).to_owned(),
            Operand::RspVt => vector(i.get_vt()).to_owned(),
            Operand::RspVd => vector(i.get_vd()).to_owned(),
            Operand::RspVtElementHigh => {
                format!("{}{}", vector(i.get_vt()), element_suffix(i.get_element_high()))
            }
            Operand::RspVtElementLow => {
                format!("{}[{}]", vector(i.get_vt()), i.get_element_low())
            }
            Operand::RspVdDe => format!("{}[{}]", vector(i.get_vd()), i.get_de()),
            Operand::RspVsIndex => format!("{}[{}]", vector(i.get_vs()), i.get_vector_index()),
            Operand::RspOffsetRs => {
                let scale = i.access_type().size().max(1) as i32;
                let offset = self.offset(i.get_vector_offset(), scale);
                format!("{offset}({})", self.gpr(i.get_rs()))
            }
            Operand::R3000GteCop2d => self.cop(RegisterFile::GteData, i.get_rd()).to_owned(),
            Operand::R3000GteCop2cd => self.cop(RegisterFile::GteControl, i.get_rd()).to_owned(),
            Operand::R3000GteSf => i.get_gte_sf().to_string(),
            Operand::R3000GteMx => i.get_gte_mx().to_string(),
            Operand::R3000GteV => i.get_gte_v().to_string(),
            Operand::R3000GteCv => i.get_gte_cv().to_string(),
            Operand::R3000GteLm => i.get_gte_lm().to_string(),
        };
        Some(text)
    }

    fn gpr(&self, index: u32) -> &'static str {
        let names = &self.config.reg_names;
        let abi = if names.named_registers {
            names.gpr_abi
        } else {
            Abi::Numeric
        };
        register(RegisterFile::Gpr, index, abi)
    }

    fn fpr(&self, index: u32) -> &'static str {
        let names = &self.config.reg_names;
        let abi = if names.named_registers {
            names.fpr_abi
        } else {
            Abi::Numeric
        };
        register(RegisterFile::Fpr, index, abi)
    }

    /// Coprocessor registers only distinguish named from numeric.
    fn cop(&self, file: RegisterFile, index: u32) -> &'static str {
        let file = register_file_in(file, self.instr.category());
        let names = &self.config.reg_names;
        let named = names.named_registers
            && match file {
                RegisterFile::Cop0 => names.cop0_named,
                RegisterFile::Cop1Control => names.user_fpc_csr,
                RegisterFile::RspCop0 => names.rsp_cop0_named,
                RegisterFile::GteData | RegisterFile::GteControl => names.gte_named,
                _ => true,
            };
        let abi = if named { Abi::O32 } else { Abi::Numeric };
        register(file, index, abi)
    }

    fn code(&self, id: InstrId) -> Option<String> {
        let i = self.instr;
        if id == InstrId::Break {
            let (upper, lower) = (i.get_code_upper(), i.get_code_lower());
            match (upper, lower) {
                (0, 0) => None,
                (upper, 0) => Some(upper.to_string()),
                (upper, lower) => Some(format!("{upper}, {lower}")),
            }
        } else {
            let code = i.get_code();
            (code != 0).then(|| code.to_string())
        }
    }

    fn immediate(&self) -> String {
        match self.imm_override {
            Some(ImmediateOverride::Text(text)) => text.to_owned(),
            Some(ImmediateOverride::Value(value)) => self.hex(value),
            None => self.hex(self.instr.processed_immediate()),
        }
    }

    /// Memory offset, multiplied by `scale` for vector loads and stores.
    fn offset(&self, encoded: i32, scale: i32) -> String {
        match self.imm_override {
            Some(ImmediateOverride::Text(text)) => text.to_owned(),
            Some(ImmediateOverride::Value(value)) => self.hex(value.wrapping_mul(scale)),
            None => self.hex(encoded.wrapping_mul(scale)),
        }
    }

    fn branch_label(&self) -> String {
        let immediate = match self.imm_override {
            Some(ImmediateOverride::Text(text)) => return text.to_owned(),
            Some(ImmediateOverride::Value(value)) => value,
            None => sign_extend_immediate(self.instr.get_immediate() as u16),
        };
        let offset = immediate
            .wrapping_mul(4)
            .wrapping_add(INSTRUCTION_SIZE as i32);
        format!(".L{:08X}", branch_target(self.vram, offset))
    }

    fn jump_label(&self) -> String {
        let index = match self.imm_override {
            Some(ImmediateOverride::Text(text)) => return text.to_owned(),
            Some(ImmediateOverride::Value(value)) => value as u32 & INSTR_INDEX_MASK,
            None => self.instr.get_instr_index(),
        };
        format!("func_{:08X}", jump_target(self.vram, index))
    }

    fn hex(&self, value: i32) -> String {
        format_immediate(value, &self.config.misc)
    }
}

/// Formats an immediate as signed hex, honouring the case and small-value settings.
pub fn format_immediate(value: i32, misc: &MiscConfig) -> String {
    let sign = if value < 0 { "-" } else { "" };
    let magnitude = value.unsigned_abs();
    if misc.omit_0x_on_small_imm && magnitude < SMALL_IMM_LIMIT {
        format!("{sign}{magnitude}")
    } else if misc.upper_case_imm {
        format!("{sign}0x{magnitude:X}")
    } else {
        format!("{sign}0x{magnitude:x}")
    }
}

fn register(file: RegisterFile, index: u32, abi: Abi) -> &'static str {
    file.name(index, abi).unwrap_or("$?")
}

fn vector(index: u32) -> &'static str {
    register(RegisterFile::RspVector, index, Abi::O32)
}

/// Element selector of a vector computational operand.
///
/// 0-1 select the whole vector, 2-3 a quarter (`[nq]`), 4-7 a half (`[nh]`) and 8-15 a
/// single lane (`[n]`).
fn element_suffix(element: u32) -> String {
    match element {
        0 | 1 => String::new(),
        2..=3 => format!("[{}q]", element - 2),
        4..=7 => format!("[{}h]", element - 4),
        _ => format!("[{}]", element - 8),
    }
}
